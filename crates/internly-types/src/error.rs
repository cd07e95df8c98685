use thiserror::Error;

/// Errors a `KvStore` implementation may surface.
///
/// Service-level code lifts these into the component error enums below;
/// callers never see a raw store error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store connection error")]
    Connection,

    #[error("store query error: {0}")]
    Query(String),
}

/// Errors related to profile and session operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Deliberately field-blind: callers cannot tell whether the email or
    /// the password mismatched, or whether any user is registered at all.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors related to skill registry operations.
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("invalid skill: {0}")]
    Validation(String),

    #[error("skill not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors related to application ledger operations.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("already applied to internship {0}")]
    AlreadyApplied(u32),

    #[error("application not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from the read-only dashboard summary.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_error_reveals_no_field() {
        let msg = ProfileError::InvalidCredentials.to_string();
        assert_eq!(msg, "invalid email or password");
    }

    #[test]
    fn test_application_error_display() {
        let err = ApplicationError::AlreadyApplied(3);
        assert_eq!(err.to_string(), "already applied to internship 3");
    }

    #[test]
    fn test_skill_error_display() {
        let err = SkillError::Validation("skill name cannot be empty".to_string());
        assert_eq!(err.to_string(), "invalid skill: skill name cannot be empty");
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Query("disk I/O error".to_string());
        assert_eq!(err.to_string(), "store query error: disk I/O error");
    }
}
