pub mod draft_json;

pub use draft_json::{resolve_draft_json, DraftRequest, DraftResponse};
