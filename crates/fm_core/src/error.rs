use thiserror::Error;

/// Draft engine error taxonomy.
///
/// Three tiers with different propagation rules:
/// - `Invariant*` variants are engine faults ("should be impossible"). They
///   abort the operation and must stop further processing.
/// - `Invalid*` variants are validation failures. The draft stays in its
///   prior valid state and the caller may retry with corrected input.
/// - `Blocked` is a business rejection with a user-visible reason. State is
///   unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DraftError {
    #[error("invariant violation: pick budget exceeded ({consumed} consumed, budget {budget})")]
    InvariantPickBudget { consumed: u32, budget: u32 },

    #[error("invariant violation: round {round} out of range 1..=7")]
    InvariantRoundRange { round: u8 },

    #[error("invariant violation: pick {pick} exceeds max {max} for round {round}")]
    InvariantPickRange { round: u8, pick: u16, max: u16 },

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("draft is not active")]
    InvalidNotActive,

    #[error("draft order is not locked")]
    InvalidOrderUnlocked,

    #[error("insufficient teams: expected {expected}, found {found}")]
    InvalidTeamCount { expected: usize, found: usize },

    #[error("unknown prospect: {0}")]
    InvalidProspect(String),

    #[error("validation failed: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Blocked(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl DraftError {
    /// True for engine faults that indicate a logic defect. Callers must
    /// stop processing; there is no recovery path.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DraftError::InvariantPickBudget { .. }
                | DraftError::InvariantRoundRange { .. }
                | DraftError::InvariantPickRange { .. }
                | DraftError::InvariantViolation(_)
        )
    }

    /// True when the caller can branch on the failure and keep going.
    pub fn is_recoverable(&self) -> bool {
        !self.is_fatal()
    }

    /// True for user-visible business rejections (state unchanged).
    pub fn is_rejection(&self) -> bool {
        matches!(self, DraftError::Blocked(_))
    }
}

impl From<serde_json::Error> for DraftError {
    fn from(err: serde_json::Error) -> Self {
        DraftError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(DraftError::InvariantRoundRange { round: 8 }.is_fatal());
        assert!(DraftError::InvariantPickBudget { consumed: 300, budget: 224 }.is_fatal());
        assert!(!DraftError::InvalidNotActive.is_fatal());
        assert!(DraftError::InvalidNotActive.is_recoverable());
    }

    #[test]
    fn test_rejection_is_not_fatal() {
        let err = DraftError::Blocked("draft already completed".to_string());
        assert!(err.is_rejection());
        assert!(err.is_recoverable());
    }
}
