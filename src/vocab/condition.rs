//! Trigger conditions.
//!
//! A condition is the board state a trigger is keyed on: "for each mine",
//! "when you build on a gaia planet", "per planet type". Rule data writes
//! it as the first token of a spec (`"m >> 2vp"`).

use std::fmt;

token_enum! {
    /// Conditions the rules engine knows how to evaluate.
    pub enum KnownCondition, "condition" {
        /// Mine built or owned.
        Mine => "m",
        /// Trading station.
        TradingStation => "ts",
        /// Research lab.
        ResearchLab => "lab",
        /// Planetary institute.
        PlanetaryInstitute => "PI",
        /// Left academy.
        Academy1 => "ac1",
        /// Right academy.
        Academy2 => "ac2",
        /// Planetary institute or academy.
        BigBuilding => "PA",
        /// Mine on a gaia planet.
        MineOnGaia => "mg",
        /// Research track advance.
        AdvanceResearch => "a",
        /// Gaia planet colonised.
        Gaia => "g",
        /// Terraforming step taken.
        TerraformStep => "step",
        /// Distinct planet types colonised.
        PlanetType => "pt",
        /// Sectors colonised.
        Sector => "s",
        /// Federation formed or held.
        Federation => "fed",
        /// Satellite placed.
        Satellite => "sat",
        /// Space station placed.
        SpaceStation => "ss",
        /// Gaia former placed.
        GaiaFormer => "gf",
    }
}

/// The condition slot of a compiled trigger.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Condition {
    /// Unconditional.
    #[default]
    None,
    /// A vocabulary member.
    Known(KnownCondition),
    /// A token that sat in the condition slot by position only.
    Unrecognized(String),
}

impl Condition {
    /// Classify a token: a vocabulary member, or an unrecognized token.
    pub fn from_token(token: &str) -> Self {
        match KnownCondition::from_token(token) {
            Some(known) => Self::Known(known),
            None => Self::Unrecognized(token.to_string()),
        }
    }

    /// The token as written in rule data. Empty for [`Condition::None`].
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::None => "",
            Self::Known(known) => known.token(),
            Self::Unrecognized(token) => token,
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<KnownCondition> for Condition {
    fn from(known: KnownCondition) -> Self {
        Self::Known(known)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Membership test against the condition vocabulary.
#[must_use]
pub fn is_condition(token: &str) -> bool {
    KnownCondition::from_token(token).is_some()
}
