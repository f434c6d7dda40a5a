//! Event spec compilation and trigger bookkeeping.
//!
//! Rule data describes what tiles and factions grant as short specs:
//! `"+k"` (one knowledge every income), `"m >> 2vp"` (two points per mine
//! built), `"PI => 4c"` (an action). This module compiles those specs and
//! keeps each player's compiled triggers.
//!
//! ## Key Components
//!
//! - [`compile`]: spec text + source → [`TriggerRecord`]
//! - [`TriggerRecord`]: compiled trigger, persisted as [`SerializedTrigger`]
//! - [`TriggerLedger`]: one player's triggers, bucketed by operator
//!
//! ## Example Usage
//!
//! ```
//! use gaia_events::triggers::{compile, compile_all, TriggerLedger};
//! use gaia_events::vocab::{EventSource, Operator};
//!
//! let mut ledger = TriggerLedger::new();
//! ledger.register(compile_all(["+k", "+o", "=> 4c"], EventSource::Booster(2)).unwrap());
//!
//! // Pay income
//! assert_eq!(ledger.bucket(&Operator::INCOME).len(), 2);
//!
//! // Use the action, then give the booster back
//! ledger.bucket_mut(&Operator::ACTIVATE)[0].activate();
//! assert!(ledger.remove(&compile("=> 4c!", EventSource::Booster(2)).unwrap()));
//! assert_eq!(ledger.remove_for_source(EventSource::Booster(2)), 2);
//! assert!(ledger.is_empty());
//! ```

mod compiler;
mod ledger;
mod record;
mod tokens;

pub use compiler::{compile, compile_all};
pub use ledger::{PlayerLedgers, TriggerLedger};
pub use record::{ActionView, SerializedTrigger, TriggerRecord};
