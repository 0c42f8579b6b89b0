use serde::{Deserialize, Serialize};

pub type TeamId = u32;

/// End-of-season standing for one franchise, as reported by the
/// season/schedule subsystem. Read-only input to draft-order construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team_id: TeamId,
    pub name: String,
    pub wins: u8,
    pub losses: u8,
    pub ties: u8,
    /// League power ranking, 1 = strongest.
    pub power_ranking: u8,
}

impl TeamStanding {
    pub fn new(team_id: TeamId, name: impl Into<String>, wins: u8, losses: u8, ties: u8) -> Self {
        Self { team_id, name: name.into(), wins, losses, ties, power_ranking: 0 }
    }

    /// Win percentage with ties counted as half a win.
    pub fn win_pct(&self) -> f32 {
        let games = (self.wins + self.losses + self.ties) as f32;
        if games == 0.0 {
            return 0.0;
        }
        (self.wins as f32 + 0.5 * self.ties as f32) / games
    }
}
