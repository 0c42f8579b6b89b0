use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::advance::CompRoundCounts;
use super::engine::{DraftState, TeamNeeds};
use super::{grades, BASE_PICK_BUDGET, ROUNDS};
use crate::error::{DraftError, Result};
use crate::models::{
    AcquisitionKind, Contract, DraftSummary, PickLedger, Player,
};

/// Completion lifecycle. Forward-only: `Active` -> `Completing` -> `Locked`.
/// Re-entry after `Locked` happens only through [`CompletionSafeguardManager::unlock`]
/// once the regular season reaches week 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DraftPhase {
    #[default]
    Active,
    Completing,
    Locked,
}

/// Validates invariants after every pick and finalizes the draft exactly
/// once. Re-running `complete_draft` on a `Locked` state is a no-op.
#[derive(Debug)]
pub struct CompletionSafeguardManager;

impl CompletionSafeguardManager {
    /// Fails fatally if the pick counter exceeds the round-aware budget, or
    /// the slot wandered out of range. These are engine faults, never user
    /// input problems.
    pub fn validate_after_pick(state: &DraftState, counts: &CompRoundCounts) -> Result<()> {
        let budget = BASE_PICK_BUDGET + counts.total();
        if state.picks_made > budget {
            return Err(DraftError::InvariantPickBudget {
                consumed: state.picks_made,
                budget,
            });
        }
        if state.current.round > ROUNDS {
            return Err(DraftError::InvariantRoundRange { round: state.current.round });
        }
        let max = counts.max_pick_for_round(state.current.round);
        if state.current.pick > max {
            return Err(DraftError::InvariantPickRange {
                round: state.current.round,
                pick: state.current.pick,
                max,
            });
        }
        Ok(())
    }

    /// Finalize the draft: convert every remaining prospect to a free
    /// agent, clear the pool, lock the phase, and generate per-team
    /// summaries. Idempotent — a `Locked` draft returns immediately with no
    /// state change.
    pub fn complete_draft(
        state: &mut DraftState,
        ledger: &PickLedger,
        needs: &[TeamNeeds],
        rng: &mut impl Rng,
    ) -> Result<()> {
        if state.completion == DraftPhase::Locked {
            return Ok(());
        }
        state.completion = DraftPhase::Completing;

        let udfa_count = state.prospects.len();
        for prospect in state.prospects.drain(..) {
            let overall = prospect.position_rating().saturating_sub(15).max(50);
            let rolled: u8 = rng.gen_range(60..=80);
            // An undrafted rookie's ceiling is never below the floor.
            let potential = rolled.max(overall);
            state.free_agents.push(Player {
                id: prospect.id,
                name: prospect.name,
                position: prospect.position,
                age: prospect.age,
                overall,
                potential,
                contract: Contract::league_minimum(),
                acquired: AcquisitionKind::UndraftedFreeAgent { year: state.year },
            });
        }

        // Post-condition: a partially converted pool must never be treated
        // as complete.
        if !state.prospects.is_empty() {
            return Err(DraftError::InvariantViolation(format!(
                "{} prospects survived UDFA conversion",
                state.prospects.len()
            )));
        }

        state.summaries = Self::build_summaries(state, ledger, needs);
        state.is_active = false;
        state.completion = DraftPhase::Locked;

        info!("draft finalized: {} UDFA conversions, {} summaries", udfa_count,
            state.summaries.len());
        Ok(())
    }

    fn build_summaries(
        state: &DraftState,
        ledger: &PickLedger,
        needs: &[TeamNeeds],
    ) -> Vec<DraftSummary> {
        needs
            .iter()
            .map(|team| {
                let picks: Vec<_> = state
                    .results
                    .iter()
                    .filter(|r| r.team_id == team.team_id)
                    .cloned()
                    .collect();

                let next_year = state.year + 1;
                let net = ledger.owned_count(next_year, team.team_id) as i32
                    - ledger.original_count(next_year, team.team_id) as i32;

                let needs_grade = grades::needs_grade(&team.positions, &picks);
                let value_grade = grades::value_grade(&picks);
                let future_assets_grade = grades::future_assets_grade(net);
                DraftSummary {
                    team_id: team.team_id,
                    needs_grade,
                    value_grade,
                    future_assets_grade,
                    overall_grade: grades::overall_grade(
                        needs_grade,
                        value_grade,
                        future_assets_grade,
                    ),
                    standouts: grades::standouts(&picks),
                    drafted: picks,
                }
            })
            .collect()
    }

    /// External re-entry condition: a locked draft opens back up only once
    /// the regular season reaches week 2.
    pub fn unlock(state: &mut DraftState, week: u8) -> Result<()> {
        if state.completion != DraftPhase::Locked {
            return Err(DraftError::Blocked("draft is not locked".to_string()));
        }
        if week < 2 {
            return Err(DraftError::Blocked(format!(
                "draft stays locked until regular season week 2 (currently week {week})"
            )));
        }
        warn!("draft unlocked at week {week}");
        state.completion = DraftPhase::Active;
        state.is_order_locked = false;
        Ok(())
    }

    /// Business gate for the season loop: the week cannot advance over an
    /// unresolved draft.
    pub fn ensure_week_advance_allowed(state: &DraftState) -> Result<()> {
        if state.is_active && state.completion != DraftPhase::Locked {
            return Err(DraftError::Blocked(
                "the draft must be resolved before the week can advance".to_string(),
            ));
        }
        Ok(())
    }
}
