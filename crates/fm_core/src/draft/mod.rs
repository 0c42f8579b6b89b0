//! Draft-day machinery: order construction, pick advancement, selection
//! orchestration, and the completion safeguard.

pub mod advance;
pub mod engine;
pub mod grades;
pub mod order;
pub mod safeguard;

pub use advance::{CompRoundCounts, DraftSlot, SlotTransition};
pub use engine::{DraftConfig, DraftEngine, DraftState, TeamNeeds};
pub use order::DraftOrderBuilder;
pub use safeguard::{CompletionSafeguardManager, DraftPhase};

/// Franchises in the league.
pub const LEAGUE_SIZE: usize = 32;

/// Rounds in the draft.
pub const ROUNDS: u8 = 7;

/// Base selection slots per round, before compensatory supplements.
pub const BASE_SLOTS_PER_ROUND: u16 = 32;

/// Base pick budget across the whole draft (7 x 32). Compensatory awards
/// extend this; nothing else does.
pub const BASE_PICK_BUDGET: u32 = 224;
