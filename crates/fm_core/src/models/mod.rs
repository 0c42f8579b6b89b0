pub mod grade;
pub mod outcome;
pub mod pick;
pub mod player;
pub mod position;
pub mod prospect;
pub mod summary;
pub mod team;
pub mod transaction;

pub use grade::Grade;
pub use outcome::{DraftOutcome, OutcomeCategory};
pub use pick::{CompPick, DraftPick, PickLedger, PickResult};
pub use player::{AcquisitionKind, Contract, Player, LEAGUE_MINIMUM_SALARY};
pub use position::Position;
pub use prospect::{CombineResults, DraftProspect, ProspectAttributes, ProspectPersonality};
pub use summary::{DraftSummary, StandoutKind, StandoutPick};
pub use team::{TeamId, TeamStanding};
pub use transaction::FreeAgencyTransaction;
