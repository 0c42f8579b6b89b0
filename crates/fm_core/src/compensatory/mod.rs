//! Compensatory pick allocation (net-loss formula).
//!
//! Turns the prior signing period's free-agency ledger into rounds 3-7
//! compensatory awards: qualification filter, contract valuation,
//! percentile round assignment, per-team loss/gain cancellation, then the
//! per-team and league-wide caps.

pub mod allocator;

pub use allocator::CompensatoryPickAllocator;

/// League-wide cap on compensatory awards per draft.
pub const MAX_COMP_PICKS: usize = 32;

/// Per-team cap on compensatory awards per draft.
pub const MAX_COMP_PER_TEAM: usize = 4;

/// Minimum APY for a signing to enter the formula at all.
pub const MIN_QUALIFYING_APY: f64 = 2_000_000.0;
