use std::cmp::Ordering;

use log::info;

use super::{LEAGUE_SIZE, ROUNDS};
use crate::error::{DraftError, Result};
use crate::models::{TeamId, TeamStanding};

/// Converts final standings into the flat, round-major pick sequence.
///
/// The same worst-to-best order repeats identically for all seven rounds
/// (fixed order, not a snake). Compensatory picks append after each round's
/// base 32 slots and never reorder them; they are not part of this
/// sequence.
#[derive(Debug)]
pub struct DraftOrderBuilder;

impl DraftOrderBuilder {
    /// Build the round-major order. Length is always `7 * 32` team ids.
    pub fn build(teams: &[TeamStanding]) -> Result<Vec<TeamId>> {
        if teams.len() != LEAGUE_SIZE {
            return Err(DraftError::InvalidTeamCount {
                expected: LEAGUE_SIZE,
                found: teams.len(),
            });
        }

        let mut sorted: Vec<&TeamStanding> = teams.iter().collect();
        sorted.sort_by(|a, b| Self::compare(a, b));

        let round_order: Vec<TeamId> = sorted.iter().map(|t| t.team_id).collect();
        let mut order = Vec::with_capacity(LEAGUE_SIZE * ROUNDS as usize);
        for _ in 0..ROUNDS {
            order.extend_from_slice(&round_order);
        }

        info!("draft order built: {} picks up first", sorted[0].name);
        Ok(order)
    }

    /// Worst team first. Ties break by fewer wins, then more losses, then
    /// lower power ranking, then name.
    fn compare(a: &TeamStanding, b: &TeamStanding) -> Ordering {
        a.win_pct()
            .partial_cmp(&b.win_pct())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.wins.cmp(&b.wins))
            .then_with(|| b.losses.cmp(&a.losses))
            .then_with(|| a.power_ranking.cmp(&b.power_ranking))
            .then_with(|| a.name.cmp(&b.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn league() -> Vec<TeamStanding> {
        (0..32u32)
            .map(|i| {
                let wins = (i / 2) as u8;
                let mut team =
                    TeamStanding::new(i, format!("Team {i:02}"), wins, 16 - wins, 0);
                team.power_ranking = (i + 1) as u8;
                team
            })
            .collect()
    }

    #[test]
    fn test_order_length_and_repetition() {
        let order = DraftOrderBuilder::build(&league()).unwrap();
        assert_eq!(order.len(), 224);
        // Each round repeats the same sequence.
        let first_round = &order[..32];
        for round in 1..7 {
            assert_eq!(&order[round * 32..(round + 1) * 32], first_round);
        }
    }

    #[test]
    fn test_worst_team_picks_first() {
        let order = DraftOrderBuilder::build(&league()).unwrap();
        // Teams 0 and 1 both went 0-16; power ranking 1 vs 2 puts team 0
        // first.
        assert_eq!(order[0], 0);
        assert_eq!(order[1], 1);
        // Best record picks last in the round.
        assert_eq!(order[31], 31);
    }

    #[test]
    fn test_tiebreak_chain() {
        let mut teams = league();
        // Same win pct (8-8 vs 8-8), same wins/losses: power ranking decides.
        teams[10] = TeamStanding::new(10, "Alpha", 8, 8, 0);
        teams[10].power_ranking = 30;
        teams[11] = TeamStanding::new(11, "Beta", 8, 8, 0);
        teams[11].power_ranking = 5;

        let order = DraftOrderBuilder::build(&teams).unwrap();
        let pos_a = order.iter().position(|&t| t == 11).unwrap();
        let pos_b = order.iter().position(|&t| t == 10).unwrap();
        assert!(pos_a < pos_b, "lower power ranking must pick earlier");
    }

    #[test]
    fn test_insufficient_teams_is_validation_failure() {
        let teams = league().into_iter().take(30).collect::<Vec<_>>();
        let err = DraftOrderBuilder::build(&teams).unwrap_err();
        assert_eq!(err, DraftError::InvalidTeamCount { expected: 32, found: 30 });
        assert!(err.is_recoverable());
    }
}
