//! JSON entry point for the host game engine.
//!
//! One call resolves a whole seeded draft: order construction, compensatory
//! allocation, every selection via the best-available stub, and the
//! post-draft summaries. Errors come back as `{"error": ...}` JSON; this
//! surface never panics on bad input.

use serde::{Deserialize, Serialize};

use crate::draft::{DraftConfig, DraftEngine, DraftState};
use crate::models::{CompPick, DraftSummary, PickResult, Player, TeamId};
use crate::SCHEMA_VERSION;

pub type DraftRequest = DraftConfig;

#[derive(Debug, Serialize, Deserialize)]
pub struct DraftResponse {
    pub schema_version: u8,
    pub year: u16,
    pub comp_picks: Vec<CompPick>,
    pub draft_order: Vec<TeamId>,
    pub results: Vec<PickResult>,
    pub free_agents: Vec<Player>,
    pub summaries: Vec<DraftSummary>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    fatal: bool,
}

fn error_json(message: String, fatal: bool) -> String {
    serde_json::to_string(&ErrorResponse { error: message.clone(), fatal })
        .unwrap_or_else(|_| format!("{{\"error\":\"{message}\",\"fatal\":{fatal}}}"))
}

/// Resolve a full draft from a JSON request. Identical seeds produce
/// identical responses.
pub fn resolve_draft_json(request_json: &str) -> String {
    let request: DraftRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => return error_json(format!("invalid request: {e}"), false),
    };

    let mut engine = match DraftEngine::start(request) {
        Ok(engine) => engine,
        Err(e) => return error_json(e.to_string(), e.is_fatal()),
    };
    if let Err(e) = engine.run_to_completion() {
        return error_json(e.to_string(), e.is_fatal());
    }

    let state: DraftState = engine.into_state();
    let response = DraftResponse {
        schema_version: SCHEMA_VERSION,
        year: state.year,
        comp_picks: state.comp_picks,
        draft_order: state.draft_order,
        results: state.results,
        free_agents: state.free_agents,
        summaries: state.summaries,
    };

    serde_json::to_string(&response)
        .unwrap_or_else(|e| error_json(format!("response serialization: {e}"), true))
}
