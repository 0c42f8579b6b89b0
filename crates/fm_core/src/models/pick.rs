use serde::{Deserialize, Serialize};

use super::outcome::DraftOutcome;
use super::player::Player;
use super::team::TeamId;

/// An awarded compensatory pick. Created by the allocator, consumed by the
/// order builder and the advancement machine; immutable afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompPick {
    pub team_id: TeamId,
    /// Round the pick slots into, always 3..=7.
    pub round: u8,
    /// League-wide ordering rank (1 = highest-valued award).
    pub rank: u16,
    /// Formula value the award was ranked by.
    pub value: f64,
    /// Departed player the award traces back to, for display.
    pub source_player: String,
}

/// One entry in the pick-ownership ledger. Mutated by the trade subsystem;
/// this core reads ownership and only ever appends compensatory entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPick {
    pub year: u16,
    pub round: u8,
    pub original_team_id: TeamId,
    pub current_team_id: TeamId,
    pub notes: String,
}

/// Pick-ownership ledger for a league.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickLedger {
    pub picks: Vec<DraftPick>,
}

impl PickLedger {
    pub fn new(picks: Vec<DraftPick>) -> Self {
        Self { picks }
    }

    /// Current owner of a base slot, falling back to the original team when
    /// the ledger has no entry (untraded slot).
    pub fn owner_of(&self, year: u16, round: u8, original_team_id: TeamId) -> TeamId {
        self.picks
            .iter()
            .find(|p| {
                p.year == year && p.round == round && p.original_team_id == original_team_id
            })
            .map(|p| p.current_team_id)
            .unwrap_or(original_team_id)
    }

    /// Append a compensatory award to the ledger.
    pub fn insert_comp(&mut self, year: u16, comp: &CompPick) {
        self.picks.push(DraftPick {
            year,
            round: comp.round,
            original_team_id: comp.team_id,
            current_team_id: comp.team_id,
            notes: format!("compensatory ({})", comp.source_player),
        });
    }

    /// Picks a team currently owns for a given year.
    pub fn owned_count(&self, year: u16, team_id: TeamId) -> usize {
        self.picks.iter().filter(|p| p.year == year && p.current_team_id == team_id).count()
    }

    /// Picks a team originally held for a given year.
    pub fn original_count(&self, year: u16, team_id: TeamId) -> usize {
        self.picks.iter().filter(|p| p.year == year && p.original_team_id == team_id).count()
    }
}

/// Record of one resolved selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickResult {
    pub team_id: TeamId,
    pub round: u8,
    /// Pick number within the round.
    pub pick: u16,
    /// Overall selection number across the whole draft.
    pub overall_pick: u32,
    pub player: Player,
    pub outcome: DraftOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_falls_back_to_original() {
        let ledger = PickLedger::default();
        assert_eq!(ledger.owner_of(2026, 1, 7), 7);
    }

    #[test]
    fn test_owner_after_trade() {
        let ledger = PickLedger::new(vec![DraftPick {
            year: 2026,
            round: 1,
            original_team_id: 7,
            current_team_id: 12,
            notes: "trade deadline deal".to_string(),
        }]);
        assert_eq!(ledger.owner_of(2026, 1, 7), 12);
        assert_eq!(ledger.owned_count(2026, 12), 1);
        assert_eq!(ledger.original_count(2026, 7), 1);
    }

    #[test]
    fn test_insert_comp_is_self_owned() {
        let mut ledger = PickLedger::default();
        let comp = CompPick {
            team_id: 3,
            round: 4,
            rank: 1,
            value: 812.5,
            source_player: "D. Mifflin".to_string(),
        };
        ledger.insert_comp(2026, &comp);
        assert_eq!(ledger.owner_of(2026, 4, 3), 3);
        assert!(ledger.picks[0].notes.contains("compensatory"));
    }
}
