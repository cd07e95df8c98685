//! Application ledger service.
//!
//! Owns the ordered application collection under the `applications` key.
//! Applying is idempotent per internship: a pre-insert scan rejects a
//! second application for the same posting. `has_applied` goes through
//! the same scan, so the badge a caller renders can never disagree with
//! what `apply` will decide.

use chrono::Utc;

use internly_types::application::{Application, ApplicationStats, ApplicationStatus};
use internly_types::error::ApplicationError;
use internly_types::internship::Internship;

use crate::storage::kv_store::KvStore;
use crate::storage::{keys, read_collection, write_collection};

/// Service owning the user's application ledger.
pub struct ApplicationLedger<S: KvStore> {
    store: S,
}

impl<S: KvStore> ApplicationLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Submit an application for a catalog posting.
    ///
    /// Appends a Pending entry stamped with the current time, copying the
    /// posting's name and company. Fails with `AlreadyApplied` -- and
    /// changes nothing -- if an application for this posting exists.
    pub async fn apply(&self, internship: &Internship) -> Result<Application, ApplicationError> {
        let mut applications = self.read().await?;
        if contains(&applications, internship.id) {
            return Err(ApplicationError::AlreadyApplied(internship.id));
        }

        let application = Application {
            internship_id: internship.id,
            internship_name: internship.name.clone(),
            company: internship.company.clone(),
            status: ApplicationStatus::Pending,
            applied_at: Utc::now(),
        };
        applications.push(application.clone());
        self.write(&applications).await?;

        tracing::debug!(internship_id = internship.id, "application submitted");
        Ok(application)
    }

    /// The full ordered collection, insertion order.
    pub async fn list(&self) -> Result<Vec<Application>, ApplicationError> {
        self.read().await
    }

    /// Whether an application for this posting exists. Same scan, same
    /// definition of "already applied" as `apply`.
    pub async fn has_applied(&self, internship_id: u32) -> Result<bool, ApplicationError> {
        let applications = self.read().await?;
        Ok(contains(&applications, internship_id))
    }

    /// Aggregate counts over the ledger.
    pub async fn stats(&self) -> Result<ApplicationStats, ApplicationError> {
        let applications = self.read().await?;
        let accepted = applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Accepted)
            .count();
        Ok(ApplicationStats {
            total: applications.len(),
            pending: applications.len() - accepted,
            accepted,
        })
    }

    /// Administrative transition: flip the application for this posting to
    /// Accepted. This is the only status write path; there is no way back
    /// to Pending. Accepting twice is a no-op that returns the entry.
    pub async fn mark_accepted(
        &self,
        internship_id: u32,
    ) -> Result<Application, ApplicationError> {
        let mut applications = self.read().await?;
        let slot = applications
            .iter_mut()
            .find(|a| a.internship_id == internship_id)
            .ok_or(ApplicationError::NotFound)?;
        slot.status = ApplicationStatus::Accepted;
        let updated = slot.clone();
        self.write(&applications).await?;

        tracing::debug!(internship_id, "application accepted");
        Ok(updated)
    }

    async fn read(&self) -> Result<Vec<Application>, ApplicationError> {
        read_collection(&self.store, keys::APPLICATIONS)
            .await
            .map_err(|e| ApplicationError::Storage(e.to_string()))
    }

    async fn write(&self, applications: &[Application]) -> Result<(), ApplicationError> {
        write_collection(&self.store, keys::APPLICATIONS, applications)
            .await
            .map_err(|e| ApplicationError::Storage(e.to_string()))
    }
}

fn contains(applications: &[Application], internship_id: u32) -> bool {
    applications.iter().any(|a| a.internship_id == internship_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::storage::memory::MemoryKvStore;

    fn ledger() -> ApplicationLedger<MemoryKvStore> {
        ApplicationLedger::new(MemoryKvStore::new())
    }

    #[tokio::test]
    async fn test_apply_appends_pending_entry() {
        let led = ledger();
        let posting = catalog::find(1).unwrap();

        let app = led.apply(posting).await.unwrap();
        assert_eq!(app.internship_id, 1);
        assert_eq!(app.internship_name, "Frontend Developer Intern");
        assert_eq!(app.company, "TechCorp");
        assert_eq!(app.status, ApplicationStatus::Pending);

        let all = led.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], app);
    }

    #[tokio::test]
    async fn test_apply_twice_is_rejected_and_ledger_unchanged() {
        let led = ledger();
        let posting = catalog::find(1).unwrap();

        led.apply(posting).await.unwrap();
        let err = led.apply(posting).await.unwrap_err();
        assert!(matches!(err, ApplicationError::AlreadyApplied(1)));
        assert_eq!(led.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_has_applied_tracks_apply() {
        let led = ledger();
        assert!(!led.has_applied(2).await.unwrap());

        led.apply(catalog::find(2).unwrap()).await.unwrap();

        assert!(led.has_applied(2).await.unwrap());
        assert!(!led.has_applied(3).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let led = ledger();
        for id in [3, 1, 5] {
            led.apply(catalog::find(id).unwrap()).await.unwrap();
        }
        let ids: Vec<u32> = led.list().await.unwrap().iter().map(|a| a.internship_id).collect();
        assert_eq!(ids, vec![3, 1, 5]);
    }

    #[tokio::test]
    async fn test_mark_accepted_flips_exactly_one_entry() {
        let led = ledger();
        led.apply(catalog::find(1).unwrap()).await.unwrap();
        led.apply(catalog::find(2).unwrap()).await.unwrap();

        let accepted = led.mark_accepted(2).await.unwrap();
        assert_eq!(accepted.status, ApplicationStatus::Accepted);

        let all = led.list().await.unwrap();
        assert_eq!(all[0].status, ApplicationStatus::Pending);
        assert_eq!(all[1].status, ApplicationStatus::Accepted);
    }

    #[tokio::test]
    async fn test_mark_accepted_unapplied_is_not_found() {
        let led = ledger();
        let err = led.mark_accepted(6).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound));
    }

    #[tokio::test]
    async fn test_mark_accepted_is_idempotent() {
        let led = ledger();
        led.apply(catalog::find(4).unwrap()).await.unwrap();
        led.mark_accepted(4).await.unwrap();
        let again = led.mark_accepted(4).await.unwrap();
        assert_eq!(again.status, ApplicationStatus::Accepted);
        assert_eq!(led.stats().await.unwrap().accepted, 1);
    }

    #[tokio::test]
    async fn test_stats_counts_by_status() {
        let led = ledger();
        assert_eq!(led.stats().await.unwrap(), ApplicationStats::default());

        for id in [1, 2, 3] {
            led.apply(catalog::find(id).unwrap()).await.unwrap();
        }
        led.mark_accepted(2).await.unwrap();

        let stats = led.stats().await.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.accepted, 1);
    }

    #[tokio::test]
    async fn test_corrupt_ledger_reads_empty() {
        let store = MemoryKvStore::new();
        let led = ApplicationLedger::new(store.clone());
        store
            .set(keys::APPLICATIONS, &serde_json::json!({"oops": true}))
            .await
            .unwrap();

        assert!(led.list().await.unwrap().is_empty());
        // A fresh apply then repairs the key.
        led.apply(catalog::find(1).unwrap()).await.unwrap();
        assert_eq!(led.list().await.unwrap().len(), 1);
    }
}
