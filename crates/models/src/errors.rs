use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Validation messages keyed by the request field they belong to.
///
/// Field names are the ones clients send (`code`, `lengthInKm`, ...), so the
/// map can be returned in a 400 body as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self { Self::default() }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool { self.0.contains_key(field) }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
}

impl From<FieldErrors> for ModelError {
    fn from(errors: FieldErrors) -> Self { Self::Validation(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_messages_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("name", "name is required");
        errors.add("code", "code is required");
        errors.add("name", "name must be at most 100 characters");
        assert_eq!(errors.get("name").map(|m| m.len()), Some(2));
        assert_eq!(errors.to_string(), "code: code is required; name: name is required; name: name must be at most 100 characters");
    }

    #[test]
    fn empty_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
        assert!(FieldErrors::single("code", "bad").into_result().is_err());
    }

    #[test]
    fn serializes_as_plain_map() {
        let errors = FieldErrors::single("lengthInKm", "out of range");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"lengthInKm": ["out of range"]}));
    }
}
