use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Application lifecycle states.
///
/// Every application starts Pending. Accepted is reached only through the
/// explicit administrative transition on the ledger; there is no path back.
/// Serialized capitalized to match the persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Accepted,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "Pending"),
            ApplicationStatus::Accepted => write!(f, "Accepted"),
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ApplicationStatus::Pending),
            "accepted" => Ok(ApplicationStatus::Accepted),
            other => Err(format!("invalid application status: '{other}'")),
        }
    }
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        ApplicationStatus::Pending
    }
}

/// A submitted application, stored in insertion order in the ledger.
///
/// Name and company are denormalized copies of the catalog entry at the
/// time of application; the catalog is static, so they never drift.
/// Serialized field names (`internshipId`, `appliedDate`, ...) match the
/// persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub internship_id: u32,
    pub internship_name: String,
    pub company: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(rename = "appliedDate")]
    pub applied_at: DateTime<Utc>,
}

/// Aggregate counts over the ledger, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationStats {
    pub total: usize,
    pub pending: usize,
    pub accepted: usize,
}
