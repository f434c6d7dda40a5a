//! Reward phrases.
//!
//! The trigger compiler hands everything after the operator slot to
//! [`Reward::parse_list`]. What a reward does to a player is up to the
//! rules engine.

mod resource;
mod reward;

pub use resource::Resource;
pub use reward::{Reward, RewardError};
