//! Compiled trigger records.
//!
//! A [`TriggerRecord`] keeps the spec text it was compiled from next to the
//! structured slots. The text is the identity: it is what gets persisted,
//! what the ledger matches on when retracting a trigger, and what a reload
//! recompiles. The slots are derived and never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rewards::{Reward, RewardError};
use crate::vocab::{
    Condition, EventSource, KnownOperator, Operator, ACTION_DELIMITER, ACTIVATION_MARKER,
};

use super::compiler::compile;

/// The persisted form of a trigger.
///
/// `spec` includes the activation marker when the trigger is spent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedTrigger {
    pub spec: String,
    pub source: EventSource,
}

/// Display form of an action trigger, as offered to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionView {
    /// Cost and reward as one reward phrase, cost items negated.
    pub rewards: String,
    /// False once the action has been used.
    pub enabled: bool,
}

/// A compiled event spec.
///
/// Built only by [`compile`](super::compile) (directly or through
/// deserialization). Everything except the activation flag is fixed.
///
/// Serializes as [`SerializedTrigger`]; deserializing recompiles the spec.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SerializedTrigger", try_from = "SerializedTrigger")]
pub struct TriggerRecord {
    pub(super) spec: String,
    pub(super) condition: Condition,
    pub(super) operator: Operator,
    pub(super) source: EventSource,
    pub(super) to_pick: u32,
    pub(super) rewards: Vec<Reward>,
    pub(super) activated: bool,
}

impl TriggerRecord {
    /// Spec text without the activation marker.
    #[must_use]
    pub fn spec(&self) -> &str {
        &self.spec
    }

    #[must_use]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    #[must_use]
    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    #[must_use]
    pub fn source(&self) -> EventSource {
        self.source
    }

    /// How many rewards the player picks. 0 means all of them apply.
    #[must_use]
    pub fn to_pick(&self) -> u32 {
        self.to_pick
    }

    #[must_use]
    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    #[must_use]
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Mark the trigger as used.
    pub fn activate(&mut self) {
        self.activated = true;
    }

    pub fn set_activated(&mut self, activated: bool) {
        self.activated = activated;
    }

    /// Pure side-effect marker with no payload.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.operator.is_known(KnownOperator::Special)
    }

    /// A used one-shot action. Other operators keep paying out whatever
    /// their activation flag says.
    #[must_use]
    pub fn is_spent(&self) -> bool {
        self.activated && self.operator.is_known(KnownOperator::Activate)
    }

    /// The persisted form.
    #[must_use]
    pub fn to_serialized(&self) -> SerializedTrigger {
        SerializedTrigger {
            spec: self.to_string(),
            source: self.source,
        }
    }

    /// Rebuild a trigger from its persisted form by recompiling it.
    pub fn from_serialized(serialized: SerializedTrigger) -> Result<Self, RewardError> {
        compile(&serialized.spec, serialized.source)
    }

    /// A fresh record compiled from this one's text.
    ///
    /// Unlike `clone`, this goes through the compiler, so the copy is exactly
    /// what a reload would produce.
    pub fn recompiled(&self) -> Result<Self, RewardError> {
        compile(&self.to_string(), self.source)
    }

    /// Split an action spec into cost and reward for display.
    ///
    /// `"2pw => q"` shows as `"-2pw,q"`; `"=> 4c"` as `"4c"`. Specs without
    /// the delimiter show whole.
    #[must_use]
    pub fn action_view(&self) -> ActionView {
        let rewards = match self.spec.find(ACTION_DELIMITER) {
            Some(idx) => {
                let gain = self.spec[idx + ACTION_DELIMITER.len()..].trim();
                if idx > 0 {
                    format!("-{},{}", self.spec[..idx].trim(), gain)
                } else {
                    gain.to_string()
                }
            }
            None => self.spec.trim().to_string(),
        };

        ActionView {
            rewards,
            enabled: !self.activated,
        }
    }
}

impl fmt::Display for TriggerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)?;
        if self.activated {
            write!(f, "{ACTIVATION_MARKER}")?;
        }
        Ok(())
    }
}

impl From<TriggerRecord> for SerializedTrigger {
    fn from(record: TriggerRecord) -> Self {
        record.to_serialized()
    }
}

impl TryFrom<SerializedTrigger> for TriggerRecord {
    type Error = RewardError;

    fn try_from(serialized: SerializedTrigger) -> Result<Self, Self::Error> {
        Self::from_serialized(serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewards::Resource;
    use crate::vocab::{BoardAction, KnownCondition};

    const SOURCE: EventSource = EventSource::BoardAction(BoardAction::Power3);

    fn record(spec: &str) -> TriggerRecord {
        compile(spec, SOURCE).unwrap()
    }

    #[test]
    fn test_display_appends_marker() {
        let mut rec = record("=> 4c");
        assert_eq!(rec.to_string(), "=> 4c");
        rec.activate();
        assert_eq!(rec.to_string(), "=> 4c!");
        assert_eq!(rec.spec(), "=> 4c");
        rec.set_activated(false);
        assert_eq!(rec.to_string(), "=> 4c");
    }

    #[test]
    fn test_serialized_form() {
        let rec = record("+k!");
        assert_eq!(
            rec.to_serialized(),
            SerializedTrigger { spec: "+k!".into(), source: SOURCE }
        );

        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"spec":"+k!","source":"power3"}"#);

        let back: TriggerRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
        assert!(back.is_activated());
    }

    #[test]
    fn test_deserialize_rejects_bad_rewards() {
        let json = r#"{"spec":"+2c,,o","source":"power3"}"#;
        assert!(serde_json::from_str::<TriggerRecord>(json).is_err());
    }

    #[test]
    fn test_from_serialized_recompiles() {
        let rec = TriggerRecord::from_serialized(SerializedTrigger {
            spec: "PI => 4c".into(),
            source: SOURCE,
        })
        .unwrap();
        assert_eq!(rec.condition(), &Condition::None);
        assert_eq!(rec.rewards()[0], Reward::new(-1, "PI"));
    }

    #[test]
    fn test_action_view_with_cost() {
        let view = record("2pw => q").action_view();
        assert_eq!(view, ActionView { rewards: "-2pw,q".into(), enabled: true });

        let view = record("PI => 4c").action_view();
        assert_eq!(view.rewards, "-PI,4c");
    }

    #[test]
    fn test_action_view_without_cost() {
        let mut rec = record("=> 4c");
        assert_eq!(rec.action_view().rewards, "4c");
        rec.activate();
        assert!(!rec.action_view().enabled);
    }

    #[test]
    fn test_action_view_without_delimiter() {
        let view = record(" +3k ").action_view();
        assert_eq!(view.rewards, "+3k");
    }

    #[test]
    fn test_recompiled_matches_source_record() {
        let mut rec = record("ac1 => 2q");
        rec.activate();
        let copy = rec.recompiled().unwrap();
        assert_eq!(copy, rec);
        assert_eq!(copy.to_string(), "ac1 => 2q!");
        assert_eq!(copy.rewards(), &[Reward::new(-1, "ac1"), Reward::new(2, Resource::Qic)]);
        assert_ne!(copy.condition(), &Condition::Known(KnownCondition::Academy1));
    }

    #[test]
    fn test_is_spent_only_for_actions() {
        let mut action = record("=> 4c");
        let mut income = record("+k");
        action.activate();
        income.activate();
        assert!(action.is_spent());
        assert!(!income.is_spent());
    }
}
