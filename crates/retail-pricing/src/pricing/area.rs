use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Baseline demand assumed for products whose area is not in the table.
pub const UNKNOWN_AREA_AVG_DEMAND: f64 = 50.0;

/// Economic character of a sales region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaProfile {
    pub code: String,
    pub name: String,
    /// Affluence proxy, nominally 1 (lowest) to 5 (highest).
    pub financial_score: i32,
    pub avg_demand: f64,
}

impl AreaProfile {
    pub fn new(code: &str, name: &str, financial_score: i32, avg_demand: f64) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            financial_score,
            avg_demand,
        }
    }

    /// Placeholder shown to operators when a product references an unknown area.
    pub fn unknown(code: &str) -> Self {
        Self::new(code, "Unknown Area", 3, UNKNOWN_AREA_AVG_DEMAND)
    }
}

/// Lookup from area code to profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaProfileTable {
    profiles: BTreeMap<String, AreaProfile>,
}

impl AreaProfileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference areas the storefront ships with.
    pub fn reference() -> Self {
        [
            AreaProfile::new("10001", "Upper East Side", 4, 60.0),
            AreaProfile::new("10002", "Lower Manhattan", 3, 80.0),
            AreaProfile::new("10003", "East Village", 2, 70.0),
            AreaProfile::new("10004", "Financial District", 5, 150.0),
            AreaProfile::new("10005", "Harlem", 1, 40.0),
        ]
        .into_iter()
        .collect()
    }

    /// Inserts a profile, replacing any existing profile with the same code.
    pub fn insert(&mut self, profile: AreaProfile) -> Option<AreaProfile> {
        self.profiles.insert(profile.code.clone(), profile)
    }

    pub fn get(&self, code: &str) -> Option<&AreaProfile> {
        self.profiles.get(code)
    }

    /// Resolves an optional product area code.
    pub fn lookup(&self, code: Option<&str>) -> Option<&AreaProfile> {
        code.and_then(|code| self.get(code))
    }

    /// Display-only fallback; pricing rules never see the placeholder.
    pub fn profile_or_unknown(&self, code: &str) -> AreaProfile {
        self.get(code)
            .cloned()
            .unwrap_or_else(|| AreaProfile::unknown(code))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profiles ordered by area code.
    pub fn profiles(&self) -> impl Iterator<Item = &AreaProfile> {
        self.profiles.values()
    }
}

impl FromIterator<AreaProfile> for AreaProfileTable {
    fn from_iter<T: IntoIterator<Item = AreaProfile>>(iter: T) -> Self {
        let mut table = Self::new();
        for profile in iter {
            table.insert(profile);
        }
        table
    }
}
