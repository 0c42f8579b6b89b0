use serde::{Deserialize, Serialize};

/// Career-outcome category resolved at selection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeCategory {
    #[serde(rename = "bust")]
    Bust,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "gem")]
    Gem,
}

impl OutcomeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeCategory::Bust => "bust",
            OutcomeCategory::Normal => "normal",
            OutcomeCategory::Gem => "gem",
        }
    }
}

/// Result of one probability-model resolution. Computed once per drafted
/// prospect, immutable afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftOutcome {
    pub category: OutcomeCategory,
    pub potential_boost: u8,
    pub final_potential: u8,
    /// Human-readable trace of the modifiers that fired (for the war-room
    /// recap screen).
    pub reasoning: String,
}
