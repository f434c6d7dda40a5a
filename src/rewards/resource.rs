//! Resource kinds named in reward phrases.

use std::fmt;

/// What a reward grants or costs.
///
/// Reward phrases may also name things that are not resources in the
/// usual sense, such as the building an action consumes (`"-1PI"`), so the
/// set stays open through [`Resource::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Ore,
    Credit,
    Knowledge,
    Qic,
    /// Charge power in the bowls.
    ChargePower,
    /// Gain a power token.
    PowerToken,
    VictoryPoint,
    /// Free terraforming step.
    TerraformStep,
    /// Temporary navigation range.
    Range,
    /// Take a tech tile.
    Tech,
    /// Advance a research track.
    UpgradeResearch,
    /// Any other token.
    Other(String),
}

impl Resource {
    /// Look up a resource by token, keeping unknown tokens as [`Resource::Other`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "o" => Self::Ore,
            "c" => Self::Credit,
            "k" => Self::Knowledge,
            "q" => Self::Qic,
            "pw" => Self::ChargePower,
            "t" => Self::PowerToken,
            "vp" => Self::VictoryPoint,
            "step" => Self::TerraformStep,
            "r" => Self::Range,
            "tech" => Self::Tech,
            "up" => Self::UpgradeResearch,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Ore => "o",
            Self::Credit => "c",
            Self::Knowledge => "k",
            Self::Qic => "q",
            Self::ChargePower => "pw",
            Self::PowerToken => "t",
            Self::VictoryPoint => "vp",
            Self::TerraformStep => "step",
            Self::Range => "r",
            Self::Tech => "tech",
            Self::UpgradeResearch => "up",
            Self::Other(token) => token,
        }
    }
}

impl From<&str> for Resource {
    fn from(token: &str) -> Self {
        Resource::from_token(token)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
