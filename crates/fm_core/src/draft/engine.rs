use chrono::NaiveDate;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::advance::{CompRoundCounts, DraftSlot, SlotTransition};
use super::order::DraftOrderBuilder;
use super::safeguard::{CompletionSafeguardManager, DraftPhase};
use super::{BASE_PICK_BUDGET, BASE_SLOTS_PER_ROUND};
use crate::compensatory::CompensatoryPickAllocator;
use crate::error::{DraftError, Result};
use crate::models::{
    AcquisitionKind, CompPick, Contract, DraftProspect, DraftSummary, FreeAgencyTransaction,
    PickLedger, PickResult, Player, Position, TeamId, TeamStanding,
};
use crate::outcome::OutcomeProbabilityModel;

/// Analyzed positional needs for one team, supplied by the roster
/// subsystem. Input to the needs grade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamNeeds {
    pub team_id: TeamId,
    pub positions: Vec<Position>,
}

/// Everything the engine consumes from its collaborators to run one draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftConfig {
    pub year: u16,
    pub seed: u64,
    pub teams: Vec<TeamStanding>,
    pub transactions: Vec<FreeAgencyTransaction>,
    pub prospects: Vec<DraftProspect>,
    #[serde(default)]
    pub ledger: PickLedger,
    #[serde(default)]
    pub needs: Vec<TeamNeeds>,
    /// Compensatory qualification cutoff for the prior signing period.
    pub comp_cutoff: NaiveDate,
}

/// The single per-league-season draft state. Serializable so a mid-draft
/// snapshot rehydrates without losing pick-ledger consistency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftState {
    pub year: u16,
    pub is_active: bool,
    pub is_order_locked: bool,
    pub current: DraftSlot,
    /// Round-major base order, 7 x 32 team ids.
    pub draft_order: Vec<TeamId>,
    pub prospects: Vec<DraftProspect>,
    pub comp_picks: Vec<CompPick>,
    pub completion: DraftPhase,
    pub picks_made: u32,
    pub results: Vec<PickResult>,
    /// UDFA conversions, appended at finalization for the league pool.
    pub free_agents: Vec<Player>,
    pub summaries: Vec<DraftSummary>,
}

impl Default for DraftState {
    fn default() -> Self {
        Self {
            year: 0,
            is_active: false,
            is_order_locked: false,
            current: DraftSlot::first(),
            draft_order: Vec::new(),
            prospects: Vec::new(),
            comp_picks: Vec::new(),
            completion: DraftPhase::Active,
            picks_made: 0,
            results: Vec::new(),
            free_agents: Vec::new(),
            summaries: Vec::new(),
        }
    }
}

/// Draft orchestration: owns the state, the pick ledger view, and the one
/// seeded generator that makes a whole draft replayable.
///
/// Every operation is synchronous and blocking; callers serialize pick
/// submissions. A submitted pick either fully resolves or is rejected
/// before any state mutation.
#[derive(Debug)]
pub struct DraftEngine {
    state: DraftState,
    ledger: PickLedger,
    needs: Vec<TeamNeeds>,
    rng: ChaCha8Rng,
}

impl DraftEngine {
    /// Start a new draft: build the order from standings, allocate
    /// compensatory picks from the free-agency ledger, inject them into the
    /// pick ledger, and lock the order.
    pub fn start(config: DraftConfig) -> Result<Self> {
        let order = DraftOrderBuilder::build(&config.teams)?;

        let comp_picks =
            CompensatoryPickAllocator::new(config.comp_cutoff).allocate(&config.transactions);
        let mut ledger = config.ledger;
        for comp in &comp_picks {
            ledger.insert_comp(config.year, comp);
        }

        let counts = CompRoundCounts::from_comp_picks(&comp_picks);
        let budget = BASE_PICK_BUDGET + counts.total();
        if (config.prospects.len() as u32) < budget {
            return Err(DraftError::InvalidInput(format!(
                "prospect pool of {} cannot cover the {budget}-pick budget",
                config.prospects.len()
            )));
        }

        info!(
            "draft {} started: {} comp picks, {} prospects",
            config.year,
            comp_picks.len(),
            config.prospects.len()
        );

        Ok(Self {
            state: DraftState {
                year: config.year,
                is_active: true,
                is_order_locked: true,
                current: DraftSlot::first(),
                draft_order: order,
                prospects: config.prospects,
                comp_picks,
                completion: DraftPhase::Active,
                picks_made: 0,
                results: Vec::new(),
                free_agents: Vec::new(),
                summaries: Vec::new(),
            },
            ledger,
            needs: config.needs,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        })
    }

    /// Rehydrate from a serialized snapshot. Resuming an already-locked
    /// draft is a business rejection, not an error.
    pub fn from_state(
        state: DraftState,
        ledger: PickLedger,
        needs: Vec<TeamNeeds>,
        seed: u64,
    ) -> Result<Self> {
        if state.completion == DraftPhase::Locked {
            return Err(DraftError::Blocked("draft is already completed".to_string()));
        }
        state.current.validate(&CompRoundCounts::from_comp_picks(&state.comp_picks))?;
        Ok(Self { state, ledger, needs, rng: ChaCha8Rng::seed_from_u64(seed) })
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    pub fn into_state(self) -> DraftState {
        self.state
    }

    pub fn comp_counts(&self) -> CompRoundCounts {
        CompRoundCounts::from_comp_picks(&self.state.comp_picks)
    }

    /// Team currently on the clock. Base slots resolve through the trade
    /// ledger; compensatory slots belong to the awarded team outright.
    pub fn on_the_clock(&self) -> Result<TeamId> {
        let slot = self.state.current;
        if slot.pick <= BASE_SLOTS_PER_ROUND {
            let idx = (slot.round as usize - 1) * BASE_SLOTS_PER_ROUND as usize
                + (slot.pick as usize - 1);
            let original = self.state.draft_order.get(idx).copied().ok_or_else(|| {
                DraftError::InvariantViolation(format!("draft order has no slot {idx}"))
            })?;
            Ok(self.ledger.owner_of(self.state.year, slot.round, original))
        } else {
            let comp_idx = (slot.pick - BASE_SLOTS_PER_ROUND - 1) as usize;
            let mut round_comps: Vec<&CompPick> =
                self.state.comp_picks.iter().filter(|c| c.round == slot.round).collect();
            round_comps.sort_by_key(|c| c.rank);
            round_comps.get(comp_idx).map(|c| c.team_id).ok_or(DraftError::InvariantPickRange {
                round: slot.round,
                pick: slot.pick,
                max: BASE_SLOTS_PER_ROUND + round_comps.len() as u16,
            })
        }
    }

    /// Best-player-available stub: highest scouted midpoint, earlier
    /// projection breaking ties, then name for determinism.
    pub fn best_available(&self) -> Option<Uuid> {
        self.state
            .prospects
            .iter()
            .min_by(|a, b| {
                b.scouted_midpoint()
                    .cmp(&a.scouted_midpoint())
                    .then_with(|| a.projected_round.cmp(&b.projected_round))
                    .then_with(|| a.name.cmp(&b.name))
            })
            .map(|p| p.id)
    }

    /// Resolve one selection for the team on the clock.
    ///
    /// Validations run before any mutation; once they pass, the prospect is
    /// consumed, the outcome materialized, the slot advanced, and the
    /// post-pick invariants checked. Terminal advancement finalizes the
    /// draft through the safeguard.
    pub fn submit_pick(&mut self, prospect_id: Uuid) -> Result<PickResult> {
        if !self.state.is_active {
            return Err(DraftError::InvalidNotActive);
        }
        if !self.state.is_order_locked {
            return Err(DraftError::InvalidOrderUnlocked);
        }
        if self.state.completion != DraftPhase::Active {
            return Err(DraftError::Blocked("draft is already completed".to_string()));
        }

        let idx = self
            .state
            .prospects
            .iter()
            .position(|p| p.id == prospect_id)
            .ok_or_else(|| DraftError::InvalidProspect(prospect_id.to_string()))?;

        let team_id = self.on_the_clock()?;
        let counts = self.comp_counts();
        let slot = self.state.current;
        // Computed before mutation so a faulty slot rejects the pick whole.
        let transition = slot.advance(&counts)?;

        let prospect = self.state.prospects.remove(idx);
        let outcome = OutcomeProbabilityModel::resolve(
            &prospect,
            slot.round,
            prospect.true_overall,
            &mut self.rng,
        )?;

        let result = PickResult {
            team_id,
            round: slot.round,
            pick: slot.pick,
            overall_pick: slot.overall(&counts),
            player: Player {
                id: prospect.id,
                name: prospect.name.clone(),
                position: prospect.position,
                age: prospect.age,
                overall: prospect.true_overall,
                potential: outcome.final_potential,
                contract: Contract::rookie(slot.round),
                acquired: AcquisitionKind::Drafted {
                    year: self.state.year,
                    round: slot.round,
                    pick: slot.pick,
                },
            },
            outcome,
        };

        self.state.picks_made += 1;
        self.state.results.push(result.clone());
        debug!(
            "pick {}.{:02}: team {} selects {}",
            slot.round, slot.pick, team_id, result.player.name
        );

        match transition {
            SlotTransition::Next(next) => {
                self.state.current = next;
                CompletionSafeguardManager::validate_after_pick(&self.state, &counts)?;
            }
            SlotTransition::Complete => {
                CompletionSafeguardManager::validate_after_pick(&self.state, &counts)?;
                CompletionSafeguardManager::complete_draft(
                    &mut self.state,
                    &self.ledger,
                    &self.needs,
                    &mut self.rng,
                )?;
            }
        }

        Ok(result)
    }

    /// Drive the remaining picks with the best-available stub until the
    /// draft finalizes.
    pub fn run_to_completion(&mut self) -> Result<()> {
        while self.state.is_active && self.state.completion == DraftPhase::Active {
            let next = self
                .best_available()
                .ok_or_else(|| DraftError::InvalidInput("prospect pool exhausted".to_string()))?;
            self.submit_pick(next)?;
        }
        Ok(())
    }

    /// Season-loop gate: rejects a week advance while the draft is open.
    pub fn advance_week_allowed(&self) -> Result<()> {
        CompletionSafeguardManager::ensure_week_advance_allowed(&self.state)
    }

    /// External unlock once the regular season reaches week 2.
    pub fn unlock(&mut self, week: u8) -> Result<()> {
        CompletionSafeguardManager::unlock(&mut self.state, week)
    }

    pub fn ledger(&self) -> &PickLedger {
        &self.ledger
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{
        CombineResults, Grade, ProspectAttributes, ProspectPersonality,
    };

    pub(crate) fn league() -> Vec<TeamStanding> {
        (0..32u32)
            .map(|i| {
                let wins = (i / 2) as u8;
                let mut team = TeamStanding::new(i, format!("Team {i:02}"), wins, 16 - wins, 0);
                team.power_ranking = (i + 1) as u8;
                team
            })
            .collect()
    }

    pub(crate) fn prospect_pool(count: usize) -> Vec<DraftProspect> {
        let positions = [
            Position::Quarterback,
            Position::RunningBack,
            Position::WideReceiver,
            Position::TightEnd,
            Position::OffensiveLine,
            Position::DefensiveLine,
            Position::Linebacker,
            Position::Cornerback,
            Position::Safety,
        ];
        (0..count)
            .map(|i| {
                let overall = 85u8.saturating_sub((i / 4) as u8).max(55);
                DraftProspect {
                    id: Uuid::new_v4(),
                    name: format!("Prospect {i:03}"),
                    age: 20 + (i % 4) as u8,
                    position: positions[i % positions.len()],
                    school: format!("School {}", i % 12),
                    elite_school: i % 7 == 0,
                    attributes: ProspectAttributes::new(
                        overall,
                        overall.saturating_sub(5),
                        overall,
                        overall.saturating_sub(3),
                    ),
                    personality: ProspectPersonality {
                        work_ethic: 40 + (i % 60) as u8,
                        motivation: 50 + (i % 50) as u8,
                    },
                    combine: CombineResults {
                        forty_yard: 4.4 + (i % 10) as f32 * 0.05,
                        vertical: 30.0 + (i % 8) as f32,
                        bench_reps: 15 + (i % 20) as u8,
                        three_cone: 6.8 + (i % 10) as f32 * 0.1,
                    },
                    scouting_grade: if i % 5 == 0 { Grade::A } else { Grade::B },
                    medical_grade: if i % 11 == 0 { Grade::C } else { Grade::B },
                    character_grade: if i % 13 == 0 { Grade::D } else { Grade::B },
                    projected_round: ((i / 32) + 1).min(7) as u8,
                    true_overall: overall,
                    scouted_low: overall.saturating_sub(6),
                    scouted_high: (overall + 6).min(99),
                }
            })
            .collect()
    }

    pub(crate) fn config(seed: u64) -> DraftConfig {
        DraftConfig {
            year: 2026,
            seed,
            teams: league(),
            transactions: Vec::new(),
            prospects: prospect_pool(260),
            ledger: PickLedger::default(),
            needs: (0..32u32)
                .map(|i| TeamNeeds {
                    team_id: i,
                    positions: vec![Position::Quarterback, Position::Cornerback],
                })
                .collect(),
            comp_cutoff: NaiveDate::from_ymd_opt(2026, 5, 5).unwrap(),
        }
    }

    #[test]
    fn test_full_draft_runs_to_completion() {
        let mut engine = DraftEngine::start(config(42)).unwrap();
        engine.run_to_completion().unwrap();

        let state = engine.state();
        assert!(!state.is_active);
        assert_eq!(state.completion, DraftPhase::Locked);
        assert_eq!(state.picks_made, 224);
        assert_eq!(state.results.len(), 224);
        // Prospect pool empty iff finalized.
        assert!(state.prospects.is_empty());
        assert_eq!(state.free_agents.len(), 260 - 224);
        assert_eq!(state.summaries.len(), 32);
    }

    #[test]
    fn test_udfa_conversion_bounds() {
        let mut engine = DraftEngine::start(config(23)).unwrap();
        engine.run_to_completion().unwrap();

        for fa in &engine.state().free_agents {
            assert!(fa.overall >= 50, "{} converted below the overall floor", fa.name);
            assert!(fa.potential >= 60, "{} rolled below the potential band", fa.name);
            // The roll is floored at the converted overall, so the band top
            // only stretches when the overall itself exceeds it.
            assert!(fa.potential <= fa.overall.max(80), "{} over the band", fa.name);
            assert!(fa.potential >= fa.overall, "{} ceiling below rating", fa.name);
            assert_eq!(fa.contract, Contract::league_minimum());
            assert!(matches!(fa.acquired, AcquisitionKind::UndraftedFreeAgent { year: 2026 }));
        }
    }

    #[test]
    fn test_same_seed_same_draft() {
        let mut a = DraftEngine::start(config(99)).unwrap();
        let mut b = DraftEngine::start(config(99)).unwrap();
        a.run_to_completion().unwrap();
        b.run_to_completion().unwrap();

        let picks_a: Vec<_> =
            a.state().results.iter().map(|r| (r.player.name.clone(), r.player.potential)).collect();
        let picks_b: Vec<_> =
            b.state().results.iter().map(|r| (r.player.name.clone(), r.player.potential)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_completion_is_idempotent() {
        let mut engine = DraftEngine::start(config(7)).unwrap();
        engine.run_to_completion().unwrap();
        let free_agents = engine.state().free_agents.len();
        let summaries = engine.state().summaries.len();

        // Second finalization is a phase-guarded no-op.
        let DraftEngine { mut state, ledger, needs, mut rng } = engine;
        CompletionSafeguardManager::complete_draft(&mut state, &ledger, &needs, &mut rng)
            .unwrap();
        assert_eq!(state.free_agents.len(), free_agents);
        assert_eq!(state.summaries.len(), summaries);
        assert!(state.prospects.is_empty());
    }

    #[test]
    fn test_pick_after_completion_is_blocked() {
        let mut engine = DraftEngine::start(config(3)).unwrap();
        engine.run_to_completion().unwrap();
        // is_active already dropped; the first gate reports it.
        let err = engine.submit_pick(Uuid::new_v4()).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_unknown_prospect_rejected_without_mutation() {
        let mut engine = DraftEngine::start(config(5)).unwrap();
        let before = engine.state().clone();
        let err = engine.submit_pick(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, DraftError::InvalidProspect(_)));
        assert_eq!(engine.state().picks_made, before.picks_made);
        assert_eq!(engine.state().current, before.current);
        assert_eq!(engine.state().prospects.len(), before.prospects.len());
    }

    #[test]
    fn test_unlocked_order_rejects_picks() {
        let mut engine = DraftEngine::start(config(9)).unwrap();
        engine.state.is_order_locked = false;
        let id = engine.best_available().unwrap();
        assert_eq!(engine.submit_pick(id).unwrap_err(), DraftError::InvalidOrderUnlocked);
    }

    #[test]
    fn test_traded_slot_resolves_through_ledger() {
        let mut cfg = config(11);
        // Team 0 (first overall) traded its round-1 pick to team 31.
        cfg.ledger = PickLedger::new(vec![crate::models::DraftPick {
            year: 2026,
            round: 1,
            original_team_id: 0,
            current_team_id: 31,
            notes: "blockbuster".to_string(),
        }]);
        let engine = DraftEngine::start(cfg).unwrap();
        assert_eq!(engine.on_the_clock().unwrap(), 31);
    }

    #[test]
    fn test_rehydration_mid_draft() {
        let mut engine = DraftEngine::start(config(21)).unwrap();
        for _ in 0..40 {
            let id = engine.best_available().unwrap();
            engine.submit_pick(id).unwrap();
        }

        let json = serde_json::to_string(engine.state()).unwrap();
        let restored: DraftState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.picks_made, 40);

        let mut resumed =
            DraftEngine::from_state(restored, PickLedger::default(), Vec::new(), 21).unwrap();
        resumed.run_to_completion().unwrap();
        assert_eq!(resumed.state().completion, DraftPhase::Locked);
        assert_eq!(resumed.state().picks_made, 224);
    }

    #[test]
    fn test_resuming_locked_draft_is_blocked() {
        let mut engine = DraftEngine::start(config(13)).unwrap();
        engine.run_to_completion().unwrap();
        let state = engine.into_state();
        let err = DraftEngine::from_state(state, PickLedger::default(), Vec::new(), 13)
            .unwrap_err();
        assert!(err.is_rejection());
    }

    #[test]
    fn test_week_gate_and_unlock() {
        let mut engine = DraftEngine::start(config(17)).unwrap();
        assert!(engine.advance_week_allowed().unwrap_err().is_rejection());

        engine.run_to_completion().unwrap();
        engine.advance_week_allowed().unwrap();

        assert!(engine.unlock(1).unwrap_err().is_rejection());
        engine.unlock(2).unwrap();
        assert_eq!(engine.state().completion, DraftPhase::Active);
    }

    #[test]
    fn test_insufficient_prospect_pool() {
        let mut cfg = config(1);
        cfg.prospects.truncate(200);
        let err = DraftEngine::start(cfg).unwrap_err();
        assert!(matches!(err, DraftError::InvalidInput(_)));
    }

    #[test]
    fn test_budget_invariant_detects_corruption() {
        let mut engine = DraftEngine::start(config(2)).unwrap();
        engine.state.picks_made = 500;
        let counts = engine.comp_counts();
        let err =
            CompletionSafeguardManager::validate_after_pick(&engine.state, &counts).unwrap_err();
        assert!(err.is_fatal());
    }
}
