use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::grade::Grade;
use super::position::Position;

/// Physical/mental attribute block for an undrafted prospect, 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProspectAttributes {
    pub speed: u8,
    pub strength: u8,
    pub agility: u8,
    pub awareness: u8,
}

impl ProspectAttributes {
    pub fn new(speed: u8, strength: u8, agility: u8, awareness: u8) -> Self {
        Self {
            speed: speed.min(100),
            strength: strength.min(100),
            agility: agility.min(100),
            awareness: awareness.min(100),
        }
    }
}

/// Personality traits relevant to outcome resolution, 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProspectPersonality {
    pub work_ethic: u8,
    pub motivation: u8,
}

impl ProspectPersonality {
    /// Gate for the gem-favoring personality modifier.
    pub fn is_driven(&self) -> bool {
        self.work_ethic >= 80 && self.motivation >= 80
    }
}

/// Combine measurements. Times in seconds, vertical in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombineResults {
    pub forty_yard: f32,
    pub vertical: f32,
    pub bench_reps: u8,
    pub three_cone: f32,
}

/// An undrafted player record. Created by the prospect generator at season
/// start; destroyed by a successful pick or by end-of-draft UDFA conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftProspect {
    pub id: Uuid,
    pub name: String,
    pub age: u8,
    pub position: Position,
    pub school: String,
    pub elite_school: bool,
    pub attributes: ProspectAttributes,
    pub personality: ProspectPersonality,
    pub combine: CombineResults,
    pub scouting_grade: Grade,
    pub medical_grade: Grade,
    pub character_grade: Grade,
    /// Round scouts project the player to go, 1..=7.
    pub projected_round: u8,
    /// True rating, hidden behind the scouted range until drafted.
    pub true_overall: u8,
    /// Fog-of-war band shown to the user; narrows as points are spent.
    pub scouted_low: u8,
    pub scouted_high: u8,
}

impl DraftProspect {
    /// Position-weighted rating from the attribute block. Drives UDFA
    /// conversion and the best-available ordering fallback.
    pub fn position_rating(&self) -> u8 {
        let a = &self.attributes;
        let (speed, strength, agility, awareness) = match self.position {
            Position::Quarterback => (0.10, 0.10, 0.20, 0.60),
            Position::RunningBack => (0.40, 0.20, 0.30, 0.10),
            Position::WideReceiver => (0.40, 0.10, 0.35, 0.15),
            Position::TightEnd => (0.20, 0.35, 0.20, 0.25),
            Position::OffensiveLine => (0.05, 0.55, 0.15, 0.25),
            Position::DefensiveLine => (0.15, 0.50, 0.20, 0.15),
            Position::Linebacker => (0.25, 0.30, 0.20, 0.25),
            Position::Cornerback => (0.45, 0.05, 0.35, 0.15),
            Position::Safety => (0.35, 0.15, 0.25, 0.25),
        };
        let rating = a.speed as f32 * speed
            + a.strength as f32 * strength
            + a.agility as f32 * agility
            + a.awareness as f32 * awareness;
        rating.round().clamp(0.0, 100.0) as u8
    }

    /// Midpoint of the scouted band — what the war room sorts on.
    pub fn scouted_midpoint(&self) -> u8 {
        ((self.scouted_low as u16 + self.scouted_high as u16) / 2) as u8
    }

    /// Narrow the scouted range toward the true overall. Each scouting
    /// point shaves one step off both bounds; the band never inverts and
    /// never excludes the true value.
    pub fn refine_scouting(&mut self, points: u8) {
        for _ in 0..points {
            if self.scouted_low < self.true_overall {
                self.scouted_low += 1;
            }
            if self.scouted_high > self.true_overall {
                self.scouted_high -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prospect() -> DraftProspect {
        DraftProspect {
            id: Uuid::new_v4(),
            name: "J. Halpert".to_string(),
            age: 21,
            position: Position::WideReceiver,
            school: "Scranton State".to_string(),
            elite_school: false,
            attributes: ProspectAttributes::new(88, 60, 82, 70),
            personality: ProspectPersonality { work_ethic: 85, motivation: 90 },
            combine: CombineResults {
                forty_yard: 4.42,
                vertical: 37.5,
                bench_reps: 15,
                three_cone: 6.9,
            },
            scouting_grade: Grade::A,
            medical_grade: Grade::B,
            character_grade: Grade::A,
            projected_round: 2,
            true_overall: 78,
            scouted_low: 68,
            scouted_high: 88,
        }
    }

    #[test]
    fn test_refine_scouting_converges_on_truth() {
        let mut p = prospect();
        p.refine_scouting(30);
        assert_eq!(p.scouted_low, p.true_overall);
        assert_eq!(p.scouted_high, p.true_overall);
    }

    #[test]
    fn test_refine_scouting_never_excludes_truth() {
        let mut p = prospect();
        p.refine_scouting(5);
        assert!(p.scouted_low <= p.true_overall);
        assert!(p.scouted_high >= p.true_overall);
        assert!(p.scouted_low <= p.scouted_high);
    }

    #[test]
    fn test_position_rating_weighting() {
        let p = prospect();
        // WR weighting leans on speed/agility; this block rates around 80.
        let rating = p.position_rating();
        assert!(rating > 75 && rating < 90, "unexpected rating {rating}");
    }

    #[test]
    fn test_driven_personality_gate() {
        let p = prospect();
        assert!(p.personality.is_driven());
        let lazy = ProspectPersonality { work_ethic: 79, motivation: 95 };
        assert!(!lazy.is_driven());
    }
}
