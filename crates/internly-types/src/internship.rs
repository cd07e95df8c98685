use serde::{Deserialize, Serialize};

/// A posting in the static internship catalog.
///
/// Catalog entries are read-only reference data with stable numeric ids;
/// nothing mutates them at runtime and they are never persisted to the
/// local store (applications copy the fields they need).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    pub id: u32,
    pub name: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    pub skills: Vec<String>,
    pub description: String,
}

impl Internship {
    /// True if `query` is a case-insensitive substring of the name, company,
    /// location, or any listed skill. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.company.to_lowercase().contains(&q)
            || self.location.to_lowercase().contains(&q)
            || self.skills.iter().any(|s| s.to_lowercase().contains(&q))
    }
}
