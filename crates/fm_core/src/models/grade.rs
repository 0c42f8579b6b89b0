use serde::{Deserialize, Serialize};

/// Letter grade used for scouting/medical/character reports and for the
/// post-draft summary grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// GPA-style point value (A+ = 4.3 ... F = 0.0).
    pub fn points(&self) -> f32 {
        match self {
            Grade::APlus => 4.3,
            Grade::A => 4.0,
            Grade::B => 3.0,
            Grade::C => 2.0,
            Grade::D => 1.0,
            Grade::F => 0.0,
        }
    }

    /// Bucket a point average back into a letter.
    pub fn from_points(points: f32) -> Self {
        match points {
            p if p >= 4.15 => Grade::APlus,
            p if p >= 3.5 => Grade::A,
            p if p >= 2.5 => Grade::B,
            p if p >= 1.5 => Grade::C,
            p if p >= 0.5 => Grade::D,
            _ => Grade::F,
        }
    }

    /// Bucket a 0..=100 percentage (needs-addressed grading).
    pub fn from_percentage(pct: f32) -> Self {
        match pct {
            p if p >= 80.0 => Grade::A,
            p if p >= 60.0 => Grade::B,
            p if p >= 40.0 => Grade::C,
            p if p >= 20.0 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_points_round_trip() {
        for grade in Grade::iter() {
            assert_eq!(Grade::from_points(grade.points()), grade);
        }
    }

    #[test]
    fn test_percentage_buckets() {
        assert_eq!(Grade::from_percentage(100.0), Grade::A);
        assert_eq!(Grade::from_percentage(80.0), Grade::A);
        assert_eq!(Grade::from_percentage(79.9), Grade::B);
        assert_eq!(Grade::from_percentage(40.0), Grade::C);
        assert_eq!(Grade::from_percentage(19.9), Grade::F);
    }
}
