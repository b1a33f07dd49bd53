pub mod draft;
pub mod options;
pub mod steps;

pub use draft::{CampaignDraft, DraftField};
pub use steps::{Step, validate_all};
