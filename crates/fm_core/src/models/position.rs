use serde::{Deserialize, Serialize};

/// Roster position groups used throughout the draft engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Position {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
    #[serde(rename = "OL")]
    OffensiveLine,
    #[serde(rename = "DL")]
    DefensiveLine,
    #[serde(rename = "LB")]
    Linebacker,
    #[serde(rename = "CB")]
    Cornerback,
    #[serde(rename = "S")]
    Safety,
}

impl Position {
    /// Short label as shown on depth charts.
    pub fn label(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::OffensiveLine => "OL",
            Position::DefensiveLine => "DL",
            Position::Linebacker => "LB",
            Position::Cornerback => "CB",
            Position::Safety => "S",
        }
    }

    /// Speed-first positions (combine thresholds keyed on this grouping).
    pub fn is_skill_group(&self) -> bool {
        matches!(
            self,
            Position::Quarterback
                | Position::RunningBack
                | Position::WideReceiver
                | Position::Cornerback
                | Position::Safety
        )
    }

    /// Trench positions.
    pub fn is_line_group(&self) -> bool {
        matches!(self, Position::OffensiveLine | Position::DefensiveLine)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_groups_are_disjoint() {
        for pos in Position::iter() {
            assert!(!(pos.is_skill_group() && pos.is_line_group()), "{pos} in both groups");
        }
    }

    #[test]
    fn test_labels_round_trip_through_serde() {
        for pos in Position::iter() {
            let json = serde_json::to_string(&pos).unwrap();
            assert_eq!(json, format!("\"{}\"", pos.label()));
            let back: Position = serde_json::from_str(&json).unwrap();
            assert_eq!(back, pos);
        }
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&Position::OffensiveLine).unwrap();
        assert_eq!(json, "\"OL\"");
        let back: Position = serde_json::from_str("\"CB\"").unwrap();
        assert_eq!(back, Position::Cornerback);
    }
}
