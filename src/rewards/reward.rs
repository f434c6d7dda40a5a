//! Rewards and the reward phrase grammar.
//!
//! A reward phrase is a comma-separated list of items, each an optional
//! signed count followed by a resource token: `"2c,o,q"`, `"-1PI"`, `"3pw"`.
//! A missing count means one.

use std::fmt;

use thiserror::Error;

use crate::vocab::REWARD_SEPARATOR;

use super::Resource;

/// Error when parsing a reward phrase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewardError {
    /// An item between separators is blank (`"2c,,o"`).
    #[error("empty reward item in {0:?}")]
    EmptyItem(String),

    /// An item has a count but names nothing (`"3"`).
    #[error("reward item {0:?} has no resource")]
    MissingResource(String),

    /// The count does not fit in an `i32`.
    #[error("reward count overflow in {0:?}")]
    CountOverflow(String),
}

/// A single resource grant (positive count) or cost (negative count).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reward {
    pub count: i32,
    pub resource: Resource,
}

impl Reward {
    /// Create a reward directly.
    pub fn new(count: i32, resource: impl Into<Resource>) -> Self {
        Self {
            count,
            resource: resource.into(),
        }
    }

    /// Parse one reward item like `"2c"`, `"k"` or `"-1PI"`.
    pub fn parse(item: &str) -> Result<Self, RewardError> {
        let item = item.trim();
        if item.is_empty() {
            return Err(RewardError::EmptyItem(item.to_string()));
        }

        let (negative, unsigned) = match item.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, item),
        };
        let digits_end = unsigned
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let (digits, token) = unsigned.split_at(digits_end);

        if token.is_empty() {
            return Err(RewardError::MissingResource(item.to_string()));
        }

        let magnitude = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<i32>()
                .map_err(|_| RewardError::CountOverflow(item.to_string()))?
        };

        Ok(Self {
            count: if negative { -magnitude } else { magnitude },
            resource: Resource::from_token(token),
        })
    }

    /// Parse a whole reward phrase. Blank text yields no rewards.
    pub fn parse_list(text: &str) -> Result<Vec<Self>, RewardError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        text.split(REWARD_SEPARATOR)
            .map(|item| {
                if item.trim().is_empty() {
                    Err(RewardError::EmptyItem(text.to_string()))
                } else {
                    Self::parse(item)
                }
            })
            .collect()
    }

    /// Structural, order-sensitive comparison of two reward lists.
    #[must_use]
    pub fn matches(a: &[Reward], b: &[Reward]) -> bool {
        a == b
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.resource)
    }
}
