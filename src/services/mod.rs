// Service exports
pub mod interactions;
pub mod ratings;
pub mod store;

pub use interactions::{InteractionRecorder, RecordedInteraction};
pub use ratings::{RatingChange, RatingEngine};
pub use store::{ProfileStore, StoreError};
