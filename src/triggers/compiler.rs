//! Event spec compiler.
//!
//! Turns rule-data text such as `"+k"`, `"PI => 4c"` or `"2+ k,o"` into a
//! [`TriggerRecord`].
//!
//! ## Grammar
//!
//! ```text
//! [<condition>] [<count><operator> | <operator>] [<reward-phrase>] [!]
//! ```
//!
//! There are no delimiters between slots. A lead token that is not in the
//! condition (or operator) vocabulary normally belongs to a later slot.
//! Two positional rules override that:
//!
//! - a text of exactly three space-separated parts has a condition, known or not;
//! - an operator text of exactly two parts is `<count><operator> <rewards>`,
//!   whether or not the operator letters are known.
//!
//! Only the reward phrase can fail to compile.
//!
//! ## Normalization
//!
//! An action (`=>`) keyed on a condition pays for it: the condition is
//! removed from the condition slot and becomes a `-1` reward at the front of
//! the reward list. The spec text is left as written.

use tracing::debug;

use crate::rewards::{Resource, Reward, RewardError};
use crate::vocab::{
    Condition, EventSource, KnownCondition, Operator, ACTIVATION_MARKER, SPECIAL_TOKEN,
};

use super::record::TriggerRecord;
use super::tokens::{lead_token, split_pick_count, Shape};

/// Slots as read from the text, before normalization.
struct ParsedSlots {
    condition: Condition,
    operator: Operator,
    to_pick: u32,
    rewards: Vec<Reward>,
}

impl ParsedSlots {
    fn special() -> Self {
        Self {
            condition: Condition::None,
            operator: Operator::SPECIAL,
            to_pick: 0,
            rewards: Vec::new(),
        }
    }

    fn parse(spec: &str) -> Result<Self, RewardError> {
        let (condition, rest) = take_condition(spec);
        let (operator, to_pick, rest) = take_operator(rest);
        let rewards = Reward::parse_list(rest)?;

        Ok(Self {
            condition,
            operator,
            to_pick,
            rewards,
        })
    }

    /// Fold an action's condition into its cost.
    fn normalize(mut self) -> Self {
        if self.operator == Operator::ACTIVATE && !self.condition.is_none() {
            let cost = Reward::new(-1, Resource::from_token(self.condition.token()));
            debug!(condition = %self.condition, "folding action condition into cost");
            self.rewards.insert(0, cost);
            self.condition = Condition::None;
        }
        self
    }
}

/// Compile one event spec.
///
/// Unknown condition and operator tokens never fail; they fall back to
/// [`Condition::None`] and [`Operator::ONCE`] or are kept as
/// `Unrecognized`. A reward phrase the reward grammar rejects is an error.
///
/// ```
/// use gaia_events::triggers::compile;
/// use gaia_events::vocab::{EventSource, Operator};
///
/// let record = compile("+k", EventSource::Booster(1)).unwrap();
/// assert_eq!(record.operator(), &Operator::INCOME);
/// assert_eq!(record.to_string(), "+k");
/// ```
pub fn compile(raw: &str, source: EventSource) -> Result<TriggerRecord, RewardError> {
    let (spec, activated) = match raw.strip_suffix(ACTIVATION_MARKER) {
        Some(stripped) => (stripped, true),
        None => (raw, false),
    };

    let slots = if spec.trim().eq_ignore_ascii_case(SPECIAL_TOKEN) {
        ParsedSlots::special()
    } else {
        ParsedSlots::parse(spec)?.normalize()
    };

    Ok(TriggerRecord {
        spec: spec.to_string(),
        condition: slots.condition,
        operator: slots.operator,
        source,
        to_pick: slots.to_pick,
        rewards: slots.rewards,
        activated,
    })
}

/// Compile several specs from one source, stopping at the first error.
pub fn compile_all<I, S>(specs: I, source: EventSource) -> Result<Vec<TriggerRecord>, RewardError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    specs
        .into_iter()
        .map(|spec| compile(spec.as_ref(), source))
        .collect()
}

/// Condition slot. Returns the condition and the text after it.
fn take_condition(text: &str) -> (Condition, &str) {
    let lead = lead_token(text);
    let rest = text[lead.len()..].trim_start();

    if let Some(known) = KnownCondition::from_token(lead) {
        return (Condition::Known(known), rest);
    }

    match Shape::of(text) {
        Shape::Triple => {
            debug!(spec = text, condition = lead, "unrecognized condition taken by position");
            (Condition::Unrecognized(lead.to_string()), rest)
        }
        _ => (Condition::None, text),
    }
}

/// Operator slot. Returns the operator, pick count and reward text.
fn take_operator(text: &str) -> (Operator, u32, &str) {
    let lead = lead_token(text);

    if let Some(operator) = Operator::recognize(lead) {
        return (operator, 0, text[lead.len()..].trim_start());
    }

    match Shape::of(text) {
        Shape::Pair(head, tail) => {
            let (to_pick, letters) = split_pick_count(head);
            let operator = Operator::from_token(letters);
            if matches!(operator, Operator::Unrecognized(_)) {
                debug!(spec = text, operator = letters, "unrecognized operator taken by position");
            }
            (operator, to_pick, tail)
        }
        _ => (Operator::ONCE, 0, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{Faction, KnownOperator};

    const SOURCE: EventSource = EventSource::Faction(Faction::Lantids);

    fn compiled(spec: &str) -> TriggerRecord {
        compile(spec, SOURCE).unwrap()
    }

    #[test]
    fn test_income() {
        let rec = compiled("+k");
        assert_eq!(rec.condition(), &Condition::None);
        assert_eq!(rec.operator(), &Operator::INCOME);
        assert_eq!(rec.to_pick(), 0);
        assert_eq!(rec.rewards(), &[Reward::new(1, Resource::Knowledge)]);
        assert!(!rec.is_activated());
    }

    #[test]
    fn test_no_operator_means_once() {
        let rec = compiled("2c,o,q");
        assert_eq!(rec.operator(), &Operator::ONCE);
        assert_eq!(rec.condition(), &Condition::None);
        assert_eq!(rec.rewards().len(), 3);
    }

    #[test]
    fn test_known_condition_and_operator() {
        let rec = compiled("m >> 2vp");
        assert_eq!(rec.condition(), &Condition::Known(KnownCondition::Mine));
        assert_eq!(rec.operator(), &Operator::TRIGGER);
        assert_eq!(rec.rewards(), &[Reward::new(2, Resource::VictoryPoint)]);
    }

    #[test]
    fn test_known_condition_without_spaces() {
        let rec = compiled("pt>>k");
        assert_eq!(rec.condition(), &Condition::Known(KnownCondition::PlanetType));
        assert_eq!(rec.operator(), &Operator::TRIGGER);
        assert_eq!(rec.rewards(), &[Reward::new(1, Resource::Knowledge)]);
    }

    #[test]
    fn test_three_parts_force_condition() {
        let rec = compiled("xyz + k");
        assert_eq!(rec.condition(), &Condition::Unrecognized("xyz".into()));
        assert_eq!(rec.operator(), &Operator::INCOME);
        assert_eq!(rec.rewards(), &[Reward::new(1, Resource::Knowledge)]);
    }

    #[test]
    fn test_unknown_lead_without_three_parts_is_not_a_condition() {
        let rec = compiled("xyz + k,o extra");
        assert_eq!(rec.condition(), &Condition::None);
        assert_eq!(rec.operator(), &Operator::ONCE);
        assert!(compile("xyz k", SOURCE).is_ok());
    }

    #[test]
    fn test_two_parts_force_pick_count() {
        let rec = compiled("2xyz k,o");
        assert_eq!(rec.to_pick(), 2);
        assert_eq!(rec.operator(), &Operator::Unrecognized("xyz".into()));
        assert_eq!(
            rec.rewards(),
            &[Reward::new(1, Resource::Knowledge), Reward::new(1, Resource::Ore)]
        );
    }

    #[test]
    fn test_two_parts_with_known_operator() {
        let rec = compiled("1=> 2k,3c");
        assert_eq!(rec.to_pick(), 1);
        assert_eq!(rec.operator(), &Operator::ACTIVATE);
        assert_eq!(rec.condition(), &Condition::None);
        assert_eq!(rec.rewards().len(), 2);
    }

    #[test]
    fn test_activation_folding() {
        let rec = compiled("PI => 4c");
        assert_eq!(rec.condition(), &Condition::None);
        assert_eq!(rec.operator(), &Operator::ACTIVATE);
        assert_eq!(
            rec.rewards(),
            &[Reward::new(-1, "PI"), Reward::new(4, Resource::Credit)]
        );
        assert_eq!(rec.spec(), "PI => 4c");
    }

    #[test]
    fn test_activation_folding_unrecognized_condition() {
        let rec = compiled("2pw => q");
        assert_eq!(rec.condition(), &Condition::None);
        assert_eq!(rec.rewards()[0], Reward::new(-1, "2pw"));
        assert_eq!(rec.rewards()[1], Reward::new(1, Resource::Qic));
    }

    #[test]
    fn test_no_folding_without_condition() {
        let rec = compiled("=> 4c");
        assert_eq!(rec.operator(), &Operator::ACTIVATE);
        assert_eq!(rec.rewards(), &[Reward::new(4, Resource::Credit)]);
    }

    #[test]
    fn test_no_folding_for_other_operators() {
        let rec = compiled("g >> 3vp");
        assert_eq!(rec.condition(), &Condition::Known(KnownCondition::Gaia));
        assert_eq!(rec.rewards(), &[Reward::new(3, Resource::VictoryPoint)]);
    }

    #[test]
    fn test_marker_stripping() {
        let rec = compiled("+k!");
        assert!(rec.is_activated());
        assert_eq!(rec.spec(), "+k");
        assert_eq!(rec.to_string(), "+k!");

        let rec = compiled("+k");
        assert!(!rec.is_activated());
    }

    #[test]
    fn test_only_one_marker_is_stripped() {
        let rec = compiled("k!!");
        assert!(rec.is_activated());
        assert_eq!(rec.spec(), "k!");
        assert_eq!(rec.to_string(), "k!!");
    }

    #[test]
    fn test_special() {
        for spec in ["special", "Special", "  SPECIAL ", "special!"] {
            let rec = compiled(spec);
            assert!(rec.is_special(), "{spec:?}");
            assert_eq!(rec.condition(), &Condition::None);
            assert!(rec.rewards().is_empty());
            assert_eq!(rec.to_string(), spec);
        }
        assert!(compiled("special!").is_activated());
    }

    #[test]
    fn test_special_with_payload_is_not_special() {
        let rec = compiled("special k");
        assert!(!rec.is_special());
        assert_eq!(rec.operator(), &Operator::Unrecognized("special".into()));
    }

    #[test]
    fn test_empty_spec() {
        let rec = compiled("");
        assert_eq!(rec.operator(), &Operator::ONCE);
        assert!(rec.rewards().is_empty());

        let rec = compiled("!");
        assert!(rec.is_activated());
        assert_eq!(rec.to_string(), "!");
    }

    #[test]
    fn test_reward_errors_propagate() {
        assert_eq!(
            compile("+2c,,o", SOURCE),
            Err(RewardError::EmptyItem("2c,,o".into()))
        );
        assert!(compile("+3", SOURCE).is_err());
    }

    #[test]
    fn test_compile_all_keeps_order_and_source() {
        let records = compile_all(["+k", "=> 4c", "+c"], SOURCE).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.source() == SOURCE));
        assert!(records[1].operator().is_known(KnownOperator::Activate));
        assert!(compile_all(vec!["+k".to_string(), "+2c,,o".to_string()], SOURCE).is_err());
    }
}
