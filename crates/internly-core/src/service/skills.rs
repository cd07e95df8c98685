//! Skill registry service.
//!
//! Owns the ordered skill collection under the `skills` key. Every
//! mutation reads the whole collection, edits it in memory, and writes
//! the whole collection back -- single-key atomicity, no partial updates.
//!
//! Mutations are keyed by the skill's stable id, not its position, so a
//! stale view editing a reordered list gets `NotFound` instead of
//! silently hitting the wrong entry.

use internly_types::error::SkillError;
use internly_types::skill::{Skill, SkillDraft, SkillId};

use crate::storage::kv_store::KvStore;
use crate::storage::{keys, read_collection, write_collection};

/// Service owning the user's skill list.
pub struct SkillRegistry<S: KvStore> {
    store: S,
}

impl<S: KvStore> SkillRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The full ordered collection; empty if none stored.
    pub async fn list(&self) -> Result<Vec<Skill>, SkillError> {
        self.read().await
    }

    /// The first `limit` skills in insertion order, for preview surfaces.
    pub async fn recent(&self, limit: usize) -> Result<Vec<Skill>, SkillError> {
        let mut skills = self.read().await?;
        skills.truncate(limit);
        Ok(skills)
    }

    /// Validate the draft, assign a fresh id, append, and persist.
    pub async fn add(&self, draft: SkillDraft) -> Result<Skill, SkillError> {
        let skill = Skill {
            id: SkillId::new(),
            name: validate_name(&draft.name)?,
            level: draft.level,
            notes: draft.notes,
        };

        let mut skills = self.read().await?;
        skills.push(skill.clone());
        self.write(&skills).await?;

        tracing::debug!(id = %skill.id, name = %skill.name, "skill added");
        Ok(skill)
    }

    /// Replace the fields of the skill with this id, in place. The id and
    /// the position in the list are preserved.
    pub async fn update(&self, id: SkillId, draft: SkillDraft) -> Result<Skill, SkillError> {
        let name = validate_name(&draft.name)?;

        let mut skills = self.read().await?;
        let slot = skills
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(SkillError::NotFound)?;
        slot.name = name;
        slot.level = draft.level;
        slot.notes = draft.notes;
        let updated = slot.clone();
        self.write(&skills).await?;

        tracing::debug!(id = %id, "skill updated");
        Ok(updated)
    }

    /// Remove the skill with this id, preserving the relative order of the
    /// remainder.
    pub async fn remove(&self, id: SkillId) -> Result<(), SkillError> {
        let mut skills = self.read().await?;
        let before = skills.len();
        skills.retain(|s| s.id != id);
        if skills.len() == before {
            return Err(SkillError::NotFound);
        }
        self.write(&skills).await?;

        tracing::debug!(id = %id, "skill removed");
        Ok(())
    }

    async fn read(&self) -> Result<Vec<Skill>, SkillError> {
        read_collection(&self.store, keys::SKILLS)
            .await
            .map_err(|e| SkillError::Storage(e.to_string()))
    }

    async fn write(&self, skills: &[Skill]) -> Result<(), SkillError> {
        write_collection(&self.store, keys::SKILLS, skills)
            .await
            .map_err(|e| SkillError::Storage(e.to_string()))
    }
}

/// The one required field a typed draft can still get wrong: a blank name.
/// The level is a closed enum, so "empty level" is unrepresentable here.
fn validate_name(name: &str) -> Result<String, SkillError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(SkillError::Validation(
            "skill name cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
