use std::collections::HashMap;

use chrono::NaiveDate;
use log::{debug, info};

use super::{MAX_COMP_PER_TEAM, MAX_COMP_PICKS, MIN_QUALIFYING_APY};
use crate::models::{CompPick, FreeAgencyTransaction, TeamId};

/// A qualifying transaction annotated with its formula value and assigned
/// round. Transient: built during one allocation run, discarded after.
#[derive(Debug, Clone)]
struct CompensatoryCandidate {
    player_name: String,
    from_team: TeamId,
    to_team: TeamId,
    value: f64,
    /// Assigned round 3..=7; candidates below the last cutoff are dropped
    /// before this struct is built.
    round: u8,
}

/// Computes compensatory awards from a season's free-agency ledger.
///
/// Deterministic given its input: the formula itself uses no randomness,
/// and every sort is stable over the ledger order.
#[derive(Debug, Clone)]
pub struct CompensatoryPickAllocator {
    /// Signings on or after this date do not qualify.
    cutoff: NaiveDate,
    min_apy: f64,
}

impl CompensatoryPickAllocator {
    pub fn new(cutoff: NaiveDate) -> Self {
        Self { cutoff, min_apy: MIN_QUALIFYING_APY }
    }

    /// Contract valuation: millions of APY scaled by snap-share and honors
    /// bonuses, normalized to a 0..~1000 scale.
    fn valuation(tx: &FreeAgencyTransaction) -> f64 {
        let snap_bonus = if tx.snap_share > 0.75 {
            1.10
        } else if tx.snap_share > 0.5 {
            1.05
        } else {
            1.0
        };
        let honors_bonus = if tx.all_pro {
            1.25
        } else if tx.pro_bowl {
            1.15
        } else {
            1.0
        };
        (tx.apy / 1_000_000.0) * snap_bonus * honors_bonus * 100.0
    }

    /// Percentile-to-round cutoffs. Candidates below the 0.65 line fall out
    /// of the formula entirely.
    fn round_for_percentile(percentile: f64) -> Option<u8> {
        match percentile {
            p if p >= 0.95 => Some(3),
            p if p >= 0.90 => Some(4),
            p if p >= 0.85 => Some(5),
            p if p >= 0.75 => Some(6),
            p if p >= 0.65 => Some(7),
            _ => None,
        }
    }

    /// Run the net-loss formula over the full transaction ledger.
    pub fn allocate(&self, transactions: &[FreeAgencyTransaction]) -> Vec<CompPick> {
        // Qualification filter: failing any clause excludes the transaction
        // entirely. It neither costs nor earns picks.
        let mut qualifying: Vec<(&FreeAgencyTransaction, f64)> = transactions
            .iter()
            .filter(|tx| tx.qualifies(self.cutoff, self.min_apy))
            .map(|tx| (tx, Self::valuation(tx)))
            .collect();

        if qualifying.is_empty() {
            return Vec::new();
        }

        // Rank league-wide by value and assign rounds by percentile.
        qualifying.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        let n = qualifying.len() as f64;
        let candidates: Vec<CompensatoryCandidate> = qualifying
            .iter()
            .enumerate()
            .filter_map(|(i, (tx, value))| {
                let percentile = 1.0 - (i as f64) / n;
                Self::round_for_percentile(percentile).map(|round| CompensatoryCandidate {
                    player_name: tx.player_name.clone(),
                    from_team: tx.from_team,
                    to_team: tx.to_team,
                    value: *value,
                    round,
                })
            })
            .collect();

        debug!("comp allocation: {} qualifying, {} tiered", qualifying.len(), candidates.len());

        // Per-team ledgers: what each franchise lost and gained.
        let mut lost: HashMap<TeamId, Vec<CompensatoryCandidate>> = HashMap::new();
        let mut gained: HashMap<TeamId, Vec<CompensatoryCandidate>> = HashMap::new();
        for cand in &candidates {
            lost.entry(cand.from_team).or_default().push(cand.clone());
            gained.entry(cand.to_team).or_default().push(cand.clone());
        }

        // Cancellation, team by team. Gains are applied in descending value
        // order; each gain cancels at most one loss.
        let mut awards: Vec<CompensatoryCandidate> = Vec::new();
        let mut team_ids: Vec<TeamId> = lost.keys().copied().collect();
        team_ids.sort_unstable();
        for team_id in team_ids {
            let mut losses = lost.remove(&team_id).unwrap_or_default();
            let mut gains = gained.remove(&team_id).unwrap_or_default();
            gains.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));

            for gain in &gains {
                if losses.is_empty() {
                    break;
                }
                let idx = Self::cancellation_target(&losses, gain.round);
                let cancelled = losses.swap_remove(idx);
                debug!(
                    "team {}: gain {} (r{}) cancels loss {} (r{})",
                    team_id, gain.player_name, gain.round, cancelled.player_name, cancelled.round
                );
            }

            // Surviving losses become awards, capped per team.
            losses
                .sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
            losses.truncate(MAX_COMP_PER_TEAM);
            awards.extend(losses);
        }

        // League-wide cap: keep the highest-valued 32, regardless of round.
        awards.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
        awards.truncate(MAX_COMP_PICKS);

        let picks: Vec<CompPick> = awards
            .into_iter()
            .enumerate()
            .map(|(i, cand)| CompPick {
                team_id: cand.from_team,
                round: cand.round,
                rank: (i + 1) as u16,
                value: cand.value,
                source_player: cand.player_name,
            })
            .collect();

        info!("comp allocation awarded {} picks", picks.len());
        picks
    }

    /// Pick the loss a gain cancels:
    /// (A) a loss of the same assigned round;
    /// (B) failing that, a loss with a numerically larger round (lower tier);
    /// (C) failing both, the highest-remaining-value loss regardless of round.
    /// Within (A) and (B) the highest-valued matching loss goes first.
    fn cancellation_target(losses: &[CompensatoryCandidate], gain_round: u8) -> usize {
        let best_by_value = |pred: &dyn Fn(&CompensatoryCandidate) -> bool| {
            losses
                .iter()
                .enumerate()
                .filter(|(_, l)| pred(l))
                .max_by(|(_, a), (_, b)| {
                    a.value.partial_cmp(&b.value).unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|(i, _)| i)
        };

        best_by_value(&|l| l.round == gain_round)
            .or_else(|| best_by_value(&|l| l.round > gain_round))
            .or_else(|| best_by_value(&|_| true))
            .unwrap_or(0)
    }
}
