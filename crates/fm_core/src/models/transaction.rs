use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::position::Position;
use super::team::TeamId;

/// One free-agent signing from the prior signing period.
///
/// Immutable historical fact: created by the free-agency subsystem, never
/// mutated here. The compensatory allocator reads these to balance each
/// team's losses against its gains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeAgencyTransaction {
    pub player_name: String,
    pub position: Position,
    /// Team the player left.
    pub from_team: TeamId,
    /// Team the player signed with.
    pub to_team: TeamId,
    /// Average yearly contract value in dollars.
    pub apy: f64,
    /// Share of snaps played last season, 0.0..=1.0.
    pub snap_share: f32,
    pub all_pro: bool,
    pub pro_bowl: bool,
    /// True if the player hit the market as an unrestricted free agent.
    pub unrestricted: bool,
    /// True if the prior contract ran out naturally (not a release/cut).
    pub contract_expired: bool,
    pub signed_date: NaiveDate,
}

impl FreeAgencyTransaction {
    /// Compensatory qualification per league formula: UFA, naturally
    /// expired contract, signed before the cutoff, and APY at or above the
    /// qualifying minimum. Failing any clause excludes the transaction
    /// entirely (it neither costs nor earns picks).
    pub fn qualifies(&self, cutoff: NaiveDate, min_apy: f64) -> bool {
        self.unrestricted
            && self.contract_expired
            && self.signed_date < cutoff
            && self.apy >= min_apy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signing(apy: f64, date: NaiveDate) -> FreeAgencyTransaction {
        FreeAgencyTransaction {
            player_name: "Test Player".to_string(),
            position: Position::WideReceiver,
            from_team: 1,
            to_team: 2,
            apy,
            snap_share: 0.8,
            all_pro: false,
            pro_bowl: false,
            unrestricted: true,
            contract_expired: true,
            signed_date: date,
        }
    }

    #[test]
    fn test_qualification_clauses() {
        let cutoff = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap();
        let early = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();

        assert!(signing(5_000_000.0, early).qualifies(cutoff, 2_000_000.0));
        // Signed on/after cutoff.
        assert!(!signing(5_000_000.0, cutoff).qualifies(cutoff, 2_000_000.0));
        // Below qualifying salary.
        assert!(!signing(1_500_000.0, early).qualifies(cutoff, 2_000_000.0));

        let mut released = signing(5_000_000.0, early);
        released.contract_expired = false;
        assert!(!released.qualifies(cutoff, 2_000_000.0));

        let mut restricted = signing(5_000_000.0, early);
        restricted.unrestricted = false;
        assert!(!restricted.qualifies(cutoff, 2_000_000.0));
    }
}
