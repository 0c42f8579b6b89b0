use serde::{Deserialize, Serialize};

use super::{BASE_SLOTS_PER_ROUND, ROUNDS};
use crate::error::{DraftError, Result};
use crate::models::CompPick;

/// Compensatory supplement per round. Rounds 1 and 2 are always zero; the
/// allocator only awards into 3..=7.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompRoundCounts([u16; ROUNDS as usize]);

impl CompRoundCounts {
    pub fn from_comp_picks(picks: &[CompPick]) -> Self {
        let mut counts = [0u16; ROUNDS as usize];
        for pick in picks {
            if (3..=ROUNDS).contains(&pick.round) {
                counts[(pick.round - 1) as usize] += 1;
            }
        }
        Self(counts)
    }

    pub fn count(&self, round: u8) -> u16 {
        if (1..=ROUNDS).contains(&round) {
            self.0[(round - 1) as usize]
        } else {
            0
        }
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|&c| c as u32).sum()
    }

    /// Slots in a round: 32 base plus this round's supplement.
    pub fn max_pick_for_round(&self, round: u8) -> u16 {
        BASE_SLOTS_PER_ROUND + self.count(round)
    }
}

/// The advancement machine's state: the slot currently on the clock.
///
/// Purely functional over `{round, pick}` plus the comp-count lookup — no
/// hidden state. `advance` returns the next slot or the terminal signal;
/// it never mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSlot {
    pub round: u8,
    pub pick: u16,
}

/// Result of one advancement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTransition {
    /// The next slot is on the clock.
    Next(DraftSlot),
    /// The final slot of round 7 was just consumed; the draft is over.
    Complete,
}

impl DraftSlot {
    pub fn first() -> Self {
        Self { round: 1, pick: 1 }
    }

    /// Check this slot against the round/pick invariants. A violation here
    /// is an engine fault, not a recoverable state.
    pub fn validate(&self, counts: &CompRoundCounts) -> Result<()> {
        if !(1..=ROUNDS).contains(&self.round) {
            return Err(DraftError::InvariantRoundRange { round: self.round });
        }
        let max = counts.max_pick_for_round(self.round);
        if self.pick < 1 || self.pick > max {
            return Err(DraftError::InvariantPickRange {
                round: self.round,
                pick: self.pick,
                max,
            });
        }
        Ok(())
    }

    /// Step to the next slot, rolling into the next round when this round's
    /// slots (base + compensatory) run out. The last slot of round 7
    /// transitions to `Complete`; a round 8 is never observable.
    pub fn advance(&self, counts: &CompRoundCounts) -> Result<SlotTransition> {
        self.validate(counts)?;

        let max = counts.max_pick_for_round(self.round);
        if self.round == ROUNDS && self.pick == max {
            return Ok(SlotTransition::Complete);
        }

        if self.pick == max {
            Ok(SlotTransition::Next(DraftSlot { round: self.round + 1, pick: 1 }))
        } else {
            Ok(SlotTransition::Next(DraftSlot { round: self.round, pick: self.pick + 1 }))
        }
    }

    /// Overall selection number of this slot (1-based across the draft).
    pub fn overall(&self, counts: &CompRoundCounts) -> u32 {
        let mut overall = 0u32;
        for round in 1..self.round {
            overall += counts.max_pick_for_round(round) as u32;
        }
        overall + self.pick as u32
    }
}
