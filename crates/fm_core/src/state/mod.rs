//! Process-wide draft state holder.
//!
//! Exactly one `DraftState` exists per league-season. The session that owns
//! the league goes through this single-writer guard, which serializes pick
//! submissions as required by the engine's concurrency contract.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use crate::draft::DraftState;

/// Global draft state singleton.
pub static DRAFT_STATE: Lazy<Arc<RwLock<DraftState>>> =
    Lazy::new(|| Arc::new(RwLock::new(DraftState::default())));

/// Get a read lock on the global draft state.
pub fn get_state() -> std::sync::RwLockReadGuard<'static, DraftState> {
    DRAFT_STATE.read().expect("DRAFT_STATE lock poisoned")
}

/// Get a write lock on the global draft state.
pub fn get_state_mut() -> std::sync::RwLockWriteGuard<'static, DraftState> {
    DRAFT_STATE.write().expect("DRAFT_STATE lock poisoned")
}

/// Replace the global draft state (e.g. after rehydrating a snapshot).
pub fn set_state(state: DraftState) {
    *DRAFT_STATE.write().expect("DRAFT_STATE lock poisoned") = state;
}

/// Reset the global state to default.
pub fn reset_state() {
    *DRAFT_STATE.write().expect("DRAFT_STATE lock poisoned") = DraftState::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_reset() {
        let mut state = DraftState::default();
        state.year = 2026;
        state.is_active = true;
        set_state(state);
        assert_eq!(get_state().year, 2026);

        reset_state();
        assert!(!get_state().is_active);
        assert_eq!(get_state().year, 0);
    }
}
