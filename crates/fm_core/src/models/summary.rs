use serde::{Deserialize, Serialize};

use super::grade::Grade;
use super::pick::PickResult;
use super::team::TeamId;

/// Why a pick stands out in the post-draft report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandoutKind {
    /// Overall landed well above the round's expected range.
    Steal,
    /// Overall landed well below the round's expected range.
    Reach,
    /// Highest resolved potential of the class.
    HighUpside,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandoutPick {
    pub kind: StandoutKind,
    pub player_name: String,
    pub round: u8,
    pub pick: u16,
    pub detail: String,
}

/// Team-scoped post-draft report. Created once per team at completion,
/// read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftSummary {
    pub team_id: TeamId,
    pub needs_grade: Grade,
    pub value_grade: Grade,
    pub future_assets_grade: Grade,
    pub overall_grade: Grade,
    pub drafted: Vec<PickResult>,
    /// At most 3 entries per team.
    pub standouts: Vec<StandoutPick>,
}
