//! Trigger operators.
//!
//! The operator says when a trigger pays out: once on gain, every income
//! phase, every time its condition happens, as a player action, or on pass.
//! The ledger buckets triggers by operator.

use std::fmt;

token_enum! {
    /// Operators the rules engine knows how to schedule.
    pub enum KnownOperator, "operator" {
        /// Pays out immediately, a single time.
        Once => ">",
        /// Pays out in every income phase.
        Income => "+",
        /// Pays out whenever the condition happens.
        Trigger => ">>",
        /// A player action; spent until the end of the round.
        Activate => "=>",
        /// Pays out when the player passes.
        Pass => "|",
        /// Side-effect marker with no payload.
        Special => "special",
    }
}

/// The operator slot of a compiled trigger.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// A vocabulary member.
    Known(KnownOperator),
    /// Letters that followed a pick-count prefix but are not an operator.
    Unrecognized(String),
}

impl Operator {
    pub const ONCE: Operator = Operator::Known(KnownOperator::Once);
    pub const INCOME: Operator = Operator::Known(KnownOperator::Income);
    pub const TRIGGER: Operator = Operator::Known(KnownOperator::Trigger);
    pub const ACTIVATE: Operator = Operator::Known(KnownOperator::Activate);
    pub const PASS: Operator = Operator::Known(KnownOperator::Pass);
    pub const SPECIAL: Operator = Operator::Known(KnownOperator::Special);

    /// Look up a token that stands in the operator slot of a spec.
    ///
    /// `"special"` is excluded: it only means [`KnownOperator::Special`]
    /// when it is the entire spec.
    #[must_use]
    pub fn recognize(token: &str) -> Option<Self> {
        match KnownOperator::from_token(token) {
            Some(KnownOperator::Special) | None => None,
            Some(known) => Some(Self::Known(known)),
        }
    }

    /// Like [`Operator::recognize`], keeping unknown tokens.
    pub fn from_token(token: &str) -> Self {
        Self::recognize(token).unwrap_or_else(|| Self::Unrecognized(token.to_string()))
    }

    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Known(known) => known.token(),
            Self::Unrecognized(token) => token,
        }
    }

    #[must_use]
    pub fn is_known(&self, known: KnownOperator) -> bool {
        matches!(self, Self::Known(k) if *k == known)
    }
}

impl Default for Operator {
    fn default() -> Self {
        Self::ONCE
    }
}

impl From<KnownOperator> for Operator {
    fn from(known: KnownOperator) -> Self {
        Self::Known(known)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Membership test against the operator vocabulary, as used in the
/// operator slot of a spec.
#[must_use]
pub fn is_operator(token: &str) -> bool {
    Operator::recognize(token).is_some()
}
