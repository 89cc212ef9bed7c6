//! Filter, sort and paginate a fully loaded collection.
//!
//! The helper is pure: it consumes the items handed to it and returns the
//! requested page. Each resource decides which field names it recognizes
//! through [`Listable`]; names it does not recognize leave the collection
//! untouched (no filtering, input order kept).

use std::cmp::Ordering;

use crate::pagination::Pagination;

/// Query options for a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filter_on: Option<String>,
    pub filter_query: Option<String>,
    pub sort_by: Option<String>,
    pub ascending: bool,
    pub pagination: Pagination,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { filter_on: None, filter_query: None, sort_by: None, ascending: true, pagination: Pagination::default() }
    }
}

impl ListQuery {
    pub fn filter(mut self, field: &str, value: &str) -> Self {
        self.filter_on = Some(field.to_string());
        self.filter_query = Some(value.to_string());
        self
    }

    pub fn sort(mut self, field: &str, ascending: bool) -> Self {
        self.sort_by = Some(field.to_string());
        self.ascending = ascending;
        self
    }

    pub fn page(mut self, page: u32, per_page: u32) -> Self {
        self.pagination = Pagination::new(page, per_page);
        self
    }
}

pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// A type that can be listed with [`apply`].
pub trait Listable: Sized {
    /// Text of the filterable field `field`, or `None` if the name is not recognized.
    fn filter_text(&self, field: &str) -> Option<&str>;

    /// Ordering for the sortable field `field`, or `None` if the name is not recognized.
    fn comparator(field: &str) -> Option<Comparator<Self>>;
}

/// Field names compare case-insensitively and ignore underscores, so
/// `lengthInKm`, `LengthInKm` and `length_in_km` are the same field.
pub fn field_key(field: &str) -> String {
    field.trim().chars().filter(|c| *c != '_').flat_map(char::to_lowercase).collect()
}

/// Case-insensitive substring match.
pub fn contains_ignore_case(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive string ordering with a byte-wise tie break.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Filter, then sort, then cut out the requested page.
pub fn apply<T: Listable>(mut items: Vec<T>, query: &ListQuery) -> Vec<T> {
    if let (Some(field), Some(needle)) = (query.filter_on.as_deref(), query.filter_query.as_deref()) {
        if !field.trim().is_empty() && !needle.is_empty() {
            items.retain(|item| match item.filter_text(field) {
                Some(text) => contains_ignore_case(text, needle),
                None => true,
            });
        }
    }

    if let Some(cmp) = query.sort_by.as_deref().and_then(T::comparator) {
        // sort_by is stable; reversing the comparator keeps ties in input order
        if query.ascending {
            items.sort_by(cmp);
        } else {
            items.sort_by(|a, b| cmp(b, a));
        }
    }

    let (skip, take) = query.pagination.bounds();
    items.into_iter().skip(skip).take(take).collect()
}
