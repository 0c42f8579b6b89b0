use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::position::Position;

/// League-minimum salary in dollars, used for UDFA one-year deals.
pub const LEAGUE_MINIMUM_SALARY: u64 = 795_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub years: u8,
    /// Per-year salary in dollars.
    pub salary: u64,
}

impl Contract {
    pub fn league_minimum() -> Self {
        Self { years: 1, salary: LEAGUE_MINIMUM_SALARY }
    }

    /// Slotted rookie deal: four years, salary scaled by draft round.
    pub fn rookie(round: u8) -> Self {
        let salary = match round {
            1 => 6_500_000,
            2 => 2_400_000,
            3 => 1_400_000,
            4 => 1_100_000,
            5 => 950_000,
            6 => 875_000,
            _ => LEAGUE_MINIMUM_SALARY,
        };
        Self { years: 4, salary }
    }
}

/// How a player entered the league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcquisitionKind {
    Drafted { year: u16, round: u8, pick: u16 },
    UndraftedFreeAgent { year: u16 },
}

/// A materialized player, produced by a draft selection or by end-of-draft
/// UDFA conversion. Appended to the owning roster or the league free-agent
/// pool; this core never mutates a player after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub position: Position,
    pub age: u8,
    pub overall: u8,
    pub potential: u8,
    pub contract: Contract,
    pub acquired: AcquisitionKind,
}
