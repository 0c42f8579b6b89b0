use log::debug;
use rand::Rng;

use super::tables;
use crate::error::{DraftError, Result};
use crate::models::{DraftOutcome, DraftProspect, Grade, OutcomeCategory};

/// The three exclusive outcome weights prior to sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeWeights {
    pub bust: f64,
    pub gem: f64,
    pub normal: f64,
}

impl OutcomeWeights {
    /// Scale the weights back to a unit sum. Modifier multiplication is
    /// applied unnormalized, so this runs once, after the full chain.
    pub fn renormalize(&mut self) {
        let sum = self.bust + self.gem + self.normal;
        if sum > 0.0 {
            self.bust /= sum;
            self.gem /= sum;
            self.normal /= sum;
        }
    }

    pub fn sum(&self) -> f64 {
        self.bust + self.gem + self.normal
    }

    /// Biased draw: bust, then gem, then normal.
    fn sample(&self, rng: &mut impl Rng) -> OutcomeCategory {
        let roll = rng.gen::<f64>();
        if roll < self.bust {
            OutcomeCategory::Bust
        } else if roll < self.bust + self.gem {
            OutcomeCategory::Gem
        } else {
            OutcomeCategory::Normal
        }
    }
}

/// Resolves a drafted prospect into a career outcome and final potential.
///
/// The single `rng.gen` category draw and the boost roll are the only
/// nondeterministic steps; the generator is injected so a seeded draft
/// replays identically.
#[derive(Debug)]
pub struct OutcomeProbabilityModel;

impl OutcomeProbabilityModel {
    /// Build the modifier-adjusted weights for a prospect drafted in the
    /// given round. Exposed separately from `resolve` so tests can assert
    /// on the distribution without sampling.
    pub fn weights(prospect: &DraftProspect, round: u8) -> Result<(OutcomeWeights, Vec<String>)> {
        if !(1..=7).contains(&round) {
            return Err(DraftError::InvariantRoundRange { round });
        }

        let (base_success, base_star) = tables::base_rates(round);
        let (success_mult, star_mult) = tables::position_multipliers(prospect.position, round);
        let success = base_success * success_mult;
        let gem = base_star * star_mult;

        let mut weights = OutcomeWeights { bust: 1.0 - success, gem, normal: success - gem };
        let mut reasons: Vec<String> = Vec::new();

        // Modifier chain, fixed order, no renormalization between steps.
        if prospect.personality.is_driven() {
            weights.gem *= 1.25;
            weights.bust *= 0.9;
            reasons.push("driven personality".to_string());
        }
        if matches!(prospect.medical_grade, Grade::C | Grade::D) {
            weights.bust *= 1.2;
            reasons.push(format!("medical flag ({})", prospect.medical_grade));
        }
        let high_scouting = matches!(prospect.scouting_grade, Grade::A | Grade::APlus);
        if high_scouting && round > prospect.projected_round + 1 {
            weights.gem *= 1.3;
            reasons.push(format!(
                "graded {} but fell from round {}",
                prospect.scouting_grade, prospect.projected_round
            ));
        }
        if prospect.elite_school {
            weights.bust *= 0.9;
            weights.normal *= 1.15;
            reasons.push(format!("elite program ({})", prospect.school));
        }
        if tables::combine_exceptional(prospect.position, &prospect.combine) {
            weights.gem *= 1.1;
            weights.normal *= 1.05;
            weights.bust *= 0.9;
            reasons.push("exceptional combine".to_string());
        }
        match prospect.character_grade {
            Grade::A | Grade::APlus => {
                weights.bust *= 0.85;
                weights.normal *= 1.1;
                reasons.push("high character".to_string());
            }
            Grade::D => {
                weights.bust *= 1.3;
                weights.gem *= 0.8;
                reasons.push("character concerns".to_string());
            }
            _ => {}
        }

        weights.renormalize();
        Ok((weights, reasons))
    }

    /// Resolve the prospect's outcome. `base_overall` is the rating the
    /// drafting team starts the player at; final potential lands in
    /// `[base_overall, 99]`.
    pub fn resolve(
        prospect: &DraftProspect,
        round: u8,
        base_overall: u8,
        rng: &mut impl Rng,
    ) -> Result<DraftOutcome> {
        let (weights, mut reasons) = Self::weights(prospect, round)?;
        let category = weights.sample(rng);

        let (min_boost, max_boost) = tables::boost_range(category, round);
        let rolled = rng.gen_range(min_boost..=max_boost);
        let boost = (rolled as f32 * tables::age_multiplier(prospect.age)).floor() as u8;
        let final_potential =
            ((base_overall as u16 + boost as u16).min(99) as u8).max(base_overall);

        debug!(
            "{} resolved {} in round {} (boost {boost}, potential {final_potential})",
            prospect.name,
            category.label(),
            round
        );

        reasons.insert(0, format!("{} outcome in round {}", category.label(), round));
        Ok(DraftOutcome {
            category,
            potential_boost: boost,
            final_potential,
            reasoning: reasons.join("; "),
        })
    }
}
