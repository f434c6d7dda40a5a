//! Seats and per-player storage shared by the rest of the crate.

pub mod player;

pub use player::{PlayerId, PlayerMap, MAX_PLAYERS};
