//! Rule-data vocabulary.
//!
//! The closed token sets that event specs are written in: conditions,
//! operators and the origin tags of a trigger. The compiler only asks
//! these types membership questions; it never interprets them.
//!
//! ## Grammar constants
//!
//! - [`ACTIVATION_MARKER`]: trailing character of a spent trigger (`"=> 4c!"`)
//! - [`ACTION_DELIMITER`]: separates cost from reward in action specs
//! - [`REWARD_SEPARATOR`]: separates items in a reward phrase
//! - [`SPECIAL_TOKEN`]: the whole-text marker for side-effect-only triggers

/// Declares a fieldless enum backed by fixed string tokens.
///
/// Generates `token()`, `from_token()`, `ALL`, `Display` and `FromStr`.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident, $err:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The token this value is written as in rule data.
            #[must_use]
            pub const fn token(self) -> &'static str {
                match self {
                    $( $name::$variant => $token ),+
                }
            }

            /// Look up a value by its exact token.
            #[must_use]
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $( $token => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.token())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::vocab::VocabError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_token(s).ok_or_else(|| $crate::vocab::VocabError::Unknown {
                    kind: $err,
                    token: s.to_string(),
                })
            }
        }
    };
}

mod condition;
mod error;
mod operator;
mod source;

pub use condition::{is_condition, Condition, KnownCondition};
pub use error::VocabError;
pub use operator::{is_operator, KnownOperator, Operator};
pub use source::{AdvTechPos, BoardAction, EventSource, Faction, ResearchField, TechPos};

/// Trailing character marking a trigger as spent.
pub const ACTIVATION_MARKER: char = '!';

/// Separates the cost from the reward in an action spec (`"2pw => q"`).
pub const ACTION_DELIMITER: &str = "=>";

/// Separates items in a reward phrase (`"2c,o,q"`).
pub const REWARD_SEPARATOR: char = ',';

/// Whole-text spec of a side-effect-only trigger, compared case-insensitively.
pub const SPECIAL_TOKEN: &str = "special";
