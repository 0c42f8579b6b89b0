//! Reference tables for outcome resolution and draft grading.

use crate::models::{CombineResults, OutcomeCategory, Position};

/// Base (success, star) rates by round. Round 1 hits 70%/25%; round 7 is a
/// 6%/0.2% lottery ticket.
pub fn base_rates(round: u8) -> (f64, f64) {
    match round {
        1 => (0.70, 0.25),
        2 => (0.49, 0.10),
        3 => (0.30, 0.01),
        4 => (0.20, 0.007),
        5 => (0.15, 0.004),
        6 => (0.09, 0.003),
        _ => (0.06, 0.002),
    }
}

/// Position multiplier pair (success, star).
///
/// Quarterbacks and offensive linemen hit less often but hit bigger; skill
/// players falling to day three carry extra late-round upside; tight ends
/// and defensive linemen convert steadily with a lower ceiling.
pub fn position_multipliers(position: Position, round: u8) -> (f64, f64) {
    match position {
        Position::Quarterback | Position::OffensiveLine => (0.95, 1.15),
        Position::RunningBack | Position::WideReceiver | Position::Linebacker if round >= 4 => {
            (1.10, 1.25)
        }
        Position::TightEnd | Position::DefensiveLine => (1.05, 0.95),
        _ => (1.0, 1.0),
    }
}

/// Potential-boost range (inclusive) by outcome and round. Late rounds run
/// wider and higher on the gem side — that is where the hidden gems live.
pub fn boost_range(category: OutcomeCategory, round: u8) -> (u8, u8) {
    match (category, round) {
        (OutcomeCategory::Bust, 1..=2) => (0, 5),
        (OutcomeCategory::Bust, 3..=5) => (0, 4),
        (OutcomeCategory::Bust, _) => (0, 3),
        (OutcomeCategory::Normal, 1) => (10, 20),
        (OutcomeCategory::Normal, 2) => (9, 19),
        (OutcomeCategory::Normal, 3..=4) => (8, 18),
        (OutcomeCategory::Normal, 5) => (7, 17),
        (OutcomeCategory::Normal, _) => (6, 16),
        (OutcomeCategory::Gem, 1) => (15, 25),
        (OutcomeCategory::Gem, 2) => (15, 26),
        (OutcomeCategory::Gem, 3) => (16, 28),
        (OutcomeCategory::Gem, 4) => (17, 30),
        (OutcomeCategory::Gem, 5) => (18, 32),
        (OutcomeCategory::Gem, 6) => (19, 34),
        (OutcomeCategory::Gem, _) => (20, 36),
    }
}

/// Age scaling applied to the rolled boost.
pub fn age_multiplier(age: u8) -> f32 {
    match age {
        0..=20 => 1.15,
        21 => 1.08,
        22 => 1.0,
        23 => 0.92,
        _ => 0.85,
    }
}

/// Expected overall range for a pick in the given round, used by value
/// grading and standout detection.
pub fn expected_overall_range(round: u8) -> (u8, u8) {
    match round {
        1 => (74, 84),
        2 => (70, 80),
        3 => (66, 76),
        4 => (62, 72),
        5 => (58, 68),
        6 => (54, 64),
        _ => (50, 60),
    }
}

/// Position-specific "exceptional combine" test.
pub fn combine_exceptional(position: Position, combine: &CombineResults) -> bool {
    if position.is_skill_group() {
        combine.forty_yard <= 4.45 && combine.vertical >= 36.0
    } else if position.is_line_group() {
        combine.bench_reps >= 30 && combine.three_cone <= 7.60
    } else {
        // TE/LB hybrids need the full profile.
        combine.forty_yard <= 4.60 && combine.vertical >= 34.0 && combine.bench_reps >= 22
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_rates_decay_by_round() {
        for round in 1..7u8 {
            let (s1, g1) = base_rates(round);
            let (s2, g2) = base_rates(round + 1);
            assert!(s1 > s2, "success must decay after round {round}");
            assert!(g1 > g2, "star must decay after round {round}");
        }
    }

    #[test]
    fn test_skill_boost_only_on_day_three() {
        assert_eq!(position_multipliers(Position::RunningBack, 1), (1.0, 1.0));
        assert_eq!(position_multipliers(Position::RunningBack, 4), (1.10, 1.25));
        assert_eq!(position_multipliers(Position::Quarterback, 1), (0.95, 1.15));
        assert_eq!(position_multipliers(Position::Quarterback, 5), (0.95, 1.15));
    }

    #[test]
    fn test_gem_ranges_widen_late() {
        let mut last_max = 0;
        for round in 1..=7u8 {
            let (min, max) = boost_range(OutcomeCategory::Gem, round);
            assert!(min >= 15);
            assert!(max >= last_max);
            last_max = max;
        }
    }

    #[test]
    fn test_combine_thresholds_by_group() {
        let burner = CombineResults {
            forty_yard: 4.38,
            vertical: 38.0,
            bench_reps: 12,
            three_cone: 6.8,
        };
        assert!(combine_exceptional(Position::Cornerback, &burner));
        assert!(!combine_exceptional(Position::OffensiveLine, &burner));

        let mauler = CombineResults {
            forty_yard: 5.2,
            vertical: 28.0,
            bench_reps: 34,
            three_cone: 7.5,
        };
        assert!(combine_exceptional(Position::OffensiveLine, &mauler));
        assert!(!combine_exceptional(Position::WideReceiver, &mauler));
    }
}
