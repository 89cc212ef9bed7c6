//! Lookup rows every fresh database starts with.
//!
//! Shared with the in-memory backend so both stores expose the same ids.

pub struct SeedDifficulty {
    pub id: &'static str,
    pub name: &'static str,
}

pub struct SeedRegion {
    pub id: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub image_url: Option<&'static str>,
}

pub const DIFFICULTIES: &[SeedDifficulty] = &[
    SeedDifficulty { id: "54466f17-02af-48e7-8ed3-5a4a8bfacf6f", name: "Easy" },
    SeedDifficulty { id: "ea294873-7a8c-4c0f-bfa7-a2eb492cbf8c", name: "Medium" },
    SeedDifficulty { id: "f808ddcd-b5e5-4d80-b732-1ca523e48434", name: "Hard" },
];

pub const REGIONS: &[SeedRegion] = &[
    SeedRegion {
        id: "f7248fc3-2585-4efb-8d1d-1c555f4087f6",
        code: "AKL",
        name: "Auckland",
        image_url: Some("https://images.pexels.com/photos/5169056/pexels-photo-5169056.jpeg"),
    },
    SeedRegion { id: "6884f7d7-ad1f-4101-8df3-7a6fa7387d81", code: "NTL", name: "Northland", image_url: None },
    SeedRegion { id: "14ceba71-4b51-4777-9b17-46602cf66153", code: "BOP", name: "Bay Of Plenty", image_url: None },
    SeedRegion {
        id: "cfa06ed2-bf65-4b65-93ed-c9d286ddb0de",
        code: "WGN",
        name: "Wellington",
        image_url: Some("https://images.pexels.com/photos/4350631/pexels-photo-4350631.jpeg"),
    },
    SeedRegion {
        id: "906cb139-415a-4bbb-a174-1a1faf9fb1f6",
        code: "NSN",
        name: "Nelson",
        image_url: Some("https://images.pexels.com/photos/13918194/pexels-photo-13918194.jpeg"),
    },
    SeedRegion { id: "f077a22e-4248-4bf6-b564-c7cf4e250263", code: "STL", name: "Southland", image_url: None },
];

/// Parse a seed id; the constants above are known-good literals.
pub fn parse_id(id: &str) -> uuid::Uuid {
    uuid::Uuid::parse_str(id).unwrap_or_else(|_| uuid::Uuid::nil())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_valid_and_unique() {
        let mut ids: Vec<_> = DIFFICULTIES.iter().map(|d| d.id).chain(REGIONS.iter().map(|r| r.id)).collect();
        for id in &ids {
            assert!(uuid::Uuid::parse_str(id).is_ok(), "bad seed id {id}");
        }
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn seed_region_codes_fit_column() {
        assert!(REGIONS.iter().all(|r| (3..=10).contains(&r.code.len())));
    }
}
