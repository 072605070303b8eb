pub mod activity;

pub use activity::{ActivityListing, ActivitySeed, ActivityView, MessageResponse};
