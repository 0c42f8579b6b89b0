//! # fm_core - Deterministic Draft Resolution Engine
//!
//! This library turns a league's free-agency history and win/loss standings
//! into a fully resolved, multi-round player draft: pick ownership,
//! compensatory awards, probabilistic career outcomes, and post-draft
//! bookkeeping.
//!
//! ## Features
//! - 100% deterministic resolution (same seed = same draft)
//! - Net-loss compensatory formula with cancellation tie-breaks
//! - Variable-length round advancement with a fixed pick budget
//! - JSON API for easy integration with the host game engine

pub mod api;
pub mod compensatory;
pub mod draft;
pub mod error;
pub mod models;
pub mod outcome;
pub mod state;

// Re-export main API functions
pub use api::{resolve_draft_json, DraftRequest, DraftResponse};
pub use error::{DraftError, Result};

// Re-export core engine types
pub use compensatory::CompensatoryPickAllocator;
pub use draft::{
    CompRoundCounts, CompletionSafeguardManager, DraftConfig, DraftEngine, DraftOrderBuilder,
    DraftPhase, DraftSlot, DraftState, SlotTransition, TeamNeeds,
};
pub use outcome::OutcomeProbabilityModel;

// Re-export model types
pub use models::{
    CompPick, DraftOutcome, DraftPick, DraftProspect, DraftSummary, FreeAgencyTransaction, Grade,
    OutcomeCategory, PickLedger, PickResult, Player, Position, TeamId, TeamStanding,
};

// Re-export state management
pub use state::{get_state, get_state_mut, reset_state, set_state, DRAFT_STATE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::engine::tests::config;

    #[test]
    fn test_json_api_full_draft() {
        let request = serde_json::to_string(&config(42)).unwrap();
        let response_json = resolve_draft_json(&request);
        assert!(!response_json.contains("\"error\""), "{response_json}");

        let response: DraftResponse = serde_json::from_str(&response_json).unwrap();
        assert_eq!(response.schema_version, SCHEMA_VERSION);
        assert_eq!(response.draft_order.len(), 224);
        assert_eq!(response.results.len(), 224);
        assert_eq!(response.summaries.len(), 32);
        assert!(response.comp_picks.is_empty());
    }

    #[test]
    fn test_json_api_is_deterministic() {
        let request = serde_json::to_string(&config(1234)).unwrap();
        let a = resolve_draft_json(&request);
        let b = resolve_draft_json(&request);
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_api_rejects_garbage() {
        let response = resolve_draft_json("{not json");
        assert!(response.contains("\"error\""));
        assert!(response.contains("\"fatal\":false"));
    }
}
