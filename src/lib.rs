//! # gaia-events
//!
//! Event spec compiler and per-player trigger ledger for a turn-based
//! space strategy rules engine.
//!
//! ## Design Principles
//!
//! 1. **Text is the identity**: a compiled trigger keeps the exact text it
//!    came from. That text is what gets persisted and what triggers are
//!    matched on; the structured slots are always re-derivable from it.
//!
//! 2. **Permissive compilation**: unknown condition or operator tokens
//!    never abort game setup. They degrade to sentinels or are kept as
//!    `Unrecognized`. Only an invalid reward phrase is an error.
//!
//! 3. **Opaque origins**: the source tag of a trigger is carried, never
//!    interpreted.
//!
//! ## Modules
//!
//! - `core`: seats and per-player storage
//! - `vocab`: condition, operator and source vocabularies, grammar constants
//! - `rewards`: reward phrase parsing and matching
//! - `triggers`: spec compiler, trigger records, trigger ledger

pub mod core;
pub mod rewards;
pub mod triggers;
pub mod vocab;

// Re-export commonly used types
pub use crate::core::{PlayerId, PlayerMap};

pub use crate::rewards::{Resource, Reward, RewardError};

pub use crate::triggers::{
    compile, compile_all, ActionView, PlayerLedgers, SerializedTrigger, TriggerLedger,
    TriggerRecord,
};

pub use crate::vocab::{Condition, EventSource, KnownCondition, KnownOperator, Operator, VocabError};
