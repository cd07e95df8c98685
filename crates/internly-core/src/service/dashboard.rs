//! Dashboard summary service.
//!
//! Read-only overview composing the other services: the stored user, the
//! skill count with a short preview, and the application stats. Never
//! writes to the store.

use serde::Serialize;

use internly_types::application::ApplicationStats;
use internly_types::error::DashboardError;
use internly_types::skill::Skill;
use internly_types::user::User;

use crate::service::applications::ApplicationLedger;
use crate::service::profile::ProfileService;
use crate::service::skills::SkillRegistry;
use crate::storage::kv_store::KvStore;

/// Everything the dashboard renders in one read.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// The registered user, if any (a fresh store has none).
    pub user: Option<User>,
    pub skill_count: usize,
    /// The first few skills in insertion order, for the preview card.
    pub recent_skills: Vec<Skill>,
    pub stats: ApplicationStats,
}

/// Read-only composition over the profile, skill, and application slices.
pub struct Dashboard<S: KvStore + Clone> {
    profile: ProfileService<S>,
    skills: SkillRegistry<S>,
    applications: ApplicationLedger<S>,
    recent_limit: usize,
}

impl<S: KvStore + Clone> Dashboard<S> {
    /// `recent_limit` is how many skills the summary previews
    /// (`recent_skills` in the global configuration).
    pub fn new(store: S, recent_limit: usize) -> Self {
        Self {
            profile: ProfileService::new(store.clone()),
            skills: SkillRegistry::new(store.clone()),
            applications: ApplicationLedger::new(store),
            recent_limit,
        }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, DashboardError> {
        let user = self
            .profile
            .profile()
            .await
            .map_err(|e| DashboardError::Storage(e.to_string()))?;
        let skills = self
            .skills
            .list()
            .await
            .map_err(|e| DashboardError::Storage(e.to_string()))?;
        let stats = self
            .applications
            .stats()
            .await
            .map_err(|e| DashboardError::Storage(e.to_string()))?;

        let skill_count = skills.len();
        let mut recent_skills = skills;
        recent_skills.truncate(self.recent_limit);

        Ok(DashboardSummary {
            user,
            skill_count,
            recent_skills,
            stats,
        })
    }
}
