//! Global configuration types for internly.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! store location and dashboard presentation. All fields have defaults, so
//! an empty or missing file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration, loaded from `{data_dir}/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Filename of the SQLite store inside the data directory.
    #[serde(default = "default_database_filename")]
    pub database_filename: String,

    /// How many skills the dashboard summary previews.
    #[serde(default = "default_recent_skills")]
    pub recent_skills: usize,
}

fn default_database_filename() -> String {
    "internly.db".to_string()
}

fn default_recent_skills() -> usize {
    3
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            database_filename: default_database_filename(),
            recent_skills: default_recent_skills(),
        }
    }
}
