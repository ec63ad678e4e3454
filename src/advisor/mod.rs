//! Betting decisions on top of an equity estimate.
//!
//! Thresholds depend on seat, street and bet size; a seeded bluff override
//! occasionally turns folds into calls or raises; an optional external
//! predictor may replace the threshold action. Finished hands feed a
//! bounded history from which a bucketed policy is learned.
pub mod action;
pub mod advisor;
pub mod bluff;
pub mod features;
pub mod history;
pub mod odds;
pub mod policy;
pub mod predictor;
pub mod record;
pub mod spot;
pub mod thresholds;

pub use action::*;
pub use advisor::*;
pub use bluff::*;
pub use features::*;
pub use history::*;
pub use odds::*;
pub use policy::*;
pub use predictor::*;
pub use record::*;
pub use spot::*;
pub use thresholds::*;
