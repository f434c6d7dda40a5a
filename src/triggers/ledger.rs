//! Per-player trigger ledger.
//!
//! The ledger holds every trigger a player currently has, bucketed by
//! operator so the rules engine can walk exactly the triggers that apply
//! to a phase: all income triggers when income is paid, all pass triggers
//! when the player passes.
//!
//! Triggers are matched by spec text, not identity. Retracting `"+o"` removes
//! the first registered trigger whose spec is `"+o"`, whichever tile granted
//! it and whether or not it has been spent.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::PlayerMap;
use crate::rewards::RewardError;
use crate::vocab::{EventSource, Operator};

use super::record::{SerializedTrigger, TriggerRecord};

/// One ledger per player.
pub type PlayerLedgers = PlayerMap<TriggerLedger>;

/// A player's registered triggers, bucketed by operator.
///
/// Within a bucket, triggers keep registration order. Duplicate texts are
/// separate entries.
///
/// Serializes as a flat list of [`SerializedTrigger`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<SerializedTrigger>", try_from = "Vec<SerializedTrigger>")]
pub struct TriggerLedger {
    buckets: FxHashMap<Operator, Vec<TriggerRecord>>,
}

impl TriggerLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register triggers, appending each to its operator's bucket.
    pub fn register(&mut self, records: impl IntoIterator<Item = TriggerRecord>) {
        for record in records {
            self.register_one(record);
        }
    }

    /// Register a single trigger.
    pub fn register_one(&mut self, record: TriggerRecord) {
        trace!(operator = %record.operator(), spec = %record, "registering trigger");
        self.buckets
            .entry(record.operator().clone())
            .or_default()
            .push(record);
    }

    /// Retract the first trigger whose spec equals `candidate`'s.
    ///
    /// The activation marker is ignored on both sides, so a spent action is
    /// retracted by its plain spec. Only the candidate's operator bucket is
    /// searched. Returns whether a trigger was removed; an unmatched
    /// candidate leaves the ledger as is.
    pub fn remove(&mut self, candidate: &TriggerRecord) -> bool {
        let operator = candidate.operator();
        let Some(bucket) = self.buckets.get_mut(operator) else {
            trace!(%operator, spec = %candidate, "no bucket for trigger removal");
            return false;
        };

        let text = candidate.spec();
        let Some(index) = bucket.iter().position(|record| record.spec() == text) else {
            trace!(%operator, spec = %text, "no matching trigger to remove");
            return false;
        };

        bucket.remove(index);
        if bucket.is_empty() {
            self.buckets.remove(operator);
        }
        trace!(%operator, spec = %text, "removed trigger");
        true
    }

    /// Retract several triggers. Returns how many were removed.
    pub fn remove_all<'a>(
        &mut self,
        candidates: impl IntoIterator<Item = &'a TriggerRecord>,
    ) -> usize {
        candidates
            .into_iter()
            .filter(|candidate| self.remove(candidate))
            .count()
    }

    /// Retract every trigger granted by `source`. Returns how many were removed.
    pub fn remove_for_source(&mut self, source: EventSource) -> usize {
        let mut removed = 0;
        self.buckets.retain(|_, bucket| {
            let before = bucket.len();
            bucket.retain(|record| record.source() != source);
            removed += before - bucket.len();
            !bucket.is_empty()
        });
        trace!(%source, removed, "removed triggers for source");
        removed
    }

    /// Triggers for `operator`, in registration order.
    #[must_use]
    pub fn bucket(&self, operator: &Operator) -> &[TriggerRecord] {
        self.buckets
            .get(operator)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Mutable access to a bucket, for flipping activation flags.
    pub fn bucket_mut(&mut self, operator: &Operator) -> &mut [TriggerRecord] {
        match self.buckets.get_mut(operator) {
            Some(bucket) => bucket.as_mut_slice(),
            None => Default::default(),
        }
    }

    /// Clear the activation flag of every trigger in a bucket.
    ///
    /// Used at the end of a round to make actions available again.
    /// Returns how many triggers were reset.
    pub fn reset_activations(&mut self, operator: &Operator) -> usize {
        let mut reset = 0;
        for record in self.bucket_mut(operator) {
            if record.is_activated() {
                record.set_activated(false);
                reset += 1;
            }
        }
        reset
    }

    /// Triggers granted by `source`.
    pub fn records_from(&self, source: EventSource) -> Vec<&TriggerRecord> {
        self.iter().filter(|record| record.source() == source).collect()
    }

    /// Iterate all triggers. Buckets come in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &TriggerRecord> {
        self.buckets.values().flatten()
    }

    /// Total trigger count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The persisted form: every trigger as text and source.
    #[must_use]
    pub fn to_serialized(&self) -> Vec<SerializedTrigger> {
        self.iter().map(TriggerRecord::to_serialized).collect()
    }

    /// Rebuild a ledger by recompiling persisted triggers.
    pub fn from_serialized(
        serialized: impl IntoIterator<Item = SerializedTrigger>,
    ) -> Result<Self, RewardError> {
        let mut ledger = Self::new();
        for entry in serialized {
            ledger.register_one(TriggerRecord::from_serialized(entry)?);
        }
        Ok(ledger)
    }
}

impl From<TriggerLedger> for Vec<SerializedTrigger> {
    fn from(ledger: TriggerLedger) -> Self {
        ledger.to_serialized()
    }
}

impl TryFrom<Vec<SerializedTrigger>> for TriggerLedger {
    type Error = RewardError;

    fn try_from(serialized: Vec<SerializedTrigger>) -> Result<Self, Self::Error> {
        Self::from_serialized(serialized)
    }
}
