//! Trigger origins.
//!
//! Every trigger belongs to a piece of rule data: a round booster, a tech
//! tile, a faction board, a scoring tile. The origin travels with the
//! compiled trigger so the engine can retract everything a tile granted.
//! This module never looks inside it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::VocabError;

token_enum! {
    /// Standard tech tile slots.
    pub enum TechPos, "tech tile position" {
        Terra => "tech-terra",
        Nav => "tech-nav",
        Int => "tech-int",
        Gaia => "tech-gaia",
        Eco => "tech-eco",
        Sci => "tech-sci",
        Free1 => "tech-free1",
        Free2 => "tech-free2",
        Free3 => "tech-free3",
    }
}

token_enum! {
    /// Advanced tech tile slots, one above each research track.
    pub enum AdvTechPos, "advanced tech tile position" {
        Terra => "adv-terra",
        Nav => "adv-nav",
        Int => "adv-int",
        Gaia => "adv-gaia",
        Eco => "adv-eco",
        Sci => "adv-sci",
    }
}

token_enum! {
    /// Research tracks.
    pub enum ResearchField, "research field" {
        Terraforming => "terra",
        Navigation => "nav",
        Intelligence => "int",
        GaiaProject => "gaia",
        Economy => "eco",
        Science => "sci",
    }
}

token_enum! {
    /// Shared board actions.
    pub enum BoardAction, "board action" {
        Power1 => "power1",
        Power2 => "power2",
        Power3 => "power3",
        Power4 => "power4",
        Power5 => "power5",
        Power6 => "power6",
        Power7 => "power7",
        Qic1 => "qic1",
        Qic2 => "qic2",
        Qic3 => "qic3",
    }
}

token_enum! {
    /// Playable factions.
    pub enum Faction, "faction" {
        Terrans => "terrans",
        Lantids => "lantids",
        Xenos => "xenos",
        Gleens => "gleens",
        Taklons => "taklons",
        Ambas => "ambas",
        HadschHallas => "hadsch-hallas",
        Ivits => "ivits",
        Geodens => "geodens",
        BalTaks => "bal-tak",
        Firaks => "firaks",
        Bescods => "bescods",
        Nevlas => "nevlas",
        Itars => "itars",
    }
}

const BOOSTER_COUNT: u8 = 13;
const FINAL_SLOTS: u8 = 2;
const ROUNDS: u8 = 6;

/// Where a trigger came from.
///
/// Persisted as its string form (`"booster3"`, `"tech-gaia"`, `"round2"`,
/// `"lantids"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventSource {
    /// Round booster tile, `1..=13`.
    Booster(u8),
    Tech(TechPos),
    AdvTech(AdvTechPos),
    /// Accepting a power charge.
    ChargePower,
    /// Spending power or qic.
    Spend,
    /// Final scoring slot, `1..=2`.
    Final(u8),
    /// Round scoring slot, `1..=6`.
    Round(u8),
    /// Reward for reaching a research level.
    Research(ResearchField),
    BoardAction(BoardAction),
    ChooseIncome,
    Build,
    ChooseFederationTile,
    FormFederation,
    UpgradeResearch,
    Faction(Faction),
    MoveShip,
}

impl EventSource {
    /// Booster tile `n`, `1..=13`.
    pub fn booster(n: u8) -> Result<Self, VocabError> {
        numbered("booster", n, BOOSTER_COUNT).map(Self::Booster)
    }

    /// Final scoring slot `n`, `1..=2`.
    pub fn final_scoring(n: u8) -> Result<Self, VocabError> {
        numbered("final", n, FINAL_SLOTS).map(Self::Final)
    }

    /// Round scoring slot `n`, `1..=6`.
    pub fn round(n: u8) -> Result<Self, VocabError> {
        numbered("round", n, ROUNDS).map(Self::Round)
    }
}

fn numbered(kind: &'static str, index: u8, max: u8) -> Result<u8, VocabError> {
    if (1..=max).contains(&index) {
        Ok(index)
    } else {
        Err(VocabError::OutOfRange { kind, index })
    }
}

/// Parse the numeric tail of `"booster3"`-style tags.
fn numbered_tag(tail: &str, kind: &'static str, max: u8) -> Result<u8, VocabError> {
    if tail.is_empty() || !tail.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VocabError::Unknown { kind, token: tail.to_string() });
    }
    let index = tail
        .parse::<u8>()
        .map_err(|_| VocabError::Unknown { kind, token: tail.to_string() })?;
    numbered(kind, index, max)
}

impl fmt::Display for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Booster(n) => write!(f, "booster{n}"),
            Self::Tech(pos) => write!(f, "{pos}"),
            Self::AdvTech(pos) => write!(f, "{pos}"),
            Self::ChargePower => f.write_str("charge"),
            Self::Spend => f.write_str("spend"),
            Self::Final(n) => write!(f, "final{n}"),
            Self::Round(n) => write!(f, "round{n}"),
            Self::Research(field) => write!(f, "{field}"),
            Self::BoardAction(action) => write!(f, "{action}"),
            Self::ChooseIncome => f.write_str("income"),
            Self::Build => f.write_str("build"),
            Self::ChooseFederationTile => f.write_str("fedtile"),
            Self::FormFederation => f.write_str("federation"),
            Self::UpgradeResearch => f.write_str("up"),
            Self::Faction(faction) => write!(f, "{faction}"),
            Self::MoveShip => f.write_str("move"),
        }
    }
}

impl FromStr for EventSource {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "charge" => return Ok(Self::ChargePower),
            "spend" => return Ok(Self::Spend),
            "income" => return Ok(Self::ChooseIncome),
            "build" => return Ok(Self::Build),
            "fedtile" => return Ok(Self::ChooseFederationTile),
            "federation" => return Ok(Self::FormFederation),
            "up" => return Ok(Self::UpgradeResearch),
            "move" => return Ok(Self::MoveShip),
            _ => {}
        }

        if let Some(tail) = s.strip_prefix("booster") {
            return numbered_tag(tail, "booster", BOOSTER_COUNT).map(Self::Booster);
        }
        if let Some(tail) = s.strip_prefix("final") {
            return numbered_tag(tail, "final scoring slot", FINAL_SLOTS).map(Self::Final);
        }
        if let Some(tail) = s.strip_prefix("round") {
            return numbered_tag(tail, "round scoring slot", ROUNDS).map(Self::Round);
        }

        TechPos::from_token(s)
            .map(Self::Tech)
            .or_else(|| AdvTechPos::from_token(s).map(Self::AdvTech))
            .or_else(|| ResearchField::from_token(s).map(Self::Research))
            .or_else(|| BoardAction::from_token(s).map(Self::BoardAction))
            .or_else(|| Faction::from_token(s).map(Self::Faction))
            .ok_or_else(|| VocabError::Unknown {
                kind: "event source",
                token: s.to_string(),
            })
    }
}

impl From<EventSource> for String {
    fn from(source: EventSource) -> Self {
        source.to_string()
    }
}

impl TryFrom<String> for EventSource {
    type Error = VocabError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Faction> for EventSource {
    fn from(faction: Faction) -> Self {
        Self::Faction(faction)
    }
}

impl From<TechPos> for EventSource {
    fn from(pos: TechPos) -> Self {
        Self::Tech(pos)
    }
}

impl From<AdvTechPos> for EventSource {
    fn from(pos: AdvTechPos) -> Self {
        Self::AdvTech(pos)
    }
}

impl From<ResearchField> for EventSource {
    fn from(field: ResearchField) -> Self {
        Self::Research(field)
    }
}

impl From<BoardAction> for EventSource {
    fn from(action: BoardAction) -> Self {
        Self::BoardAction(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_sources() -> Vec<EventSource> {
        let mut sources = vec![
            EventSource::ChargePower,
            EventSource::Spend,
            EventSource::ChooseIncome,
            EventSource::Build,
            EventSource::ChooseFederationTile,
            EventSource::FormFederation,
            EventSource::UpgradeResearch,
            EventSource::MoveShip,
        ];
        sources.extend((1..=BOOSTER_COUNT).map(EventSource::Booster));
        sources.extend((1..=FINAL_SLOTS).map(EventSource::Final));
        sources.extend((1..=ROUNDS).map(EventSource::Round));
        sources.extend(TechPos::ALL.iter().copied().map(EventSource::from));
        sources.extend(AdvTechPos::ALL.iter().copied().map(EventSource::from));
        sources.extend(ResearchField::ALL.iter().copied().map(EventSource::from));
        sources.extend(BoardAction::ALL.iter().copied().map(EventSource::from));
        sources.extend(Faction::ALL.iter().copied().map(EventSource::from));
        sources
    }

    #[test]
    fn test_string_form_round_trips() {
        for source in all_sources() {
            let text = source.to_string();
            assert_eq!(text.parse::<EventSource>(), Ok(source), "source {text}");
        }
    }

    #[test]
    fn test_numbered_ranges() {
        assert_eq!(EventSource::booster(3), Ok(EventSource::Booster(3)));
        assert!(EventSource::booster(0).is_err());
        assert!(EventSource::booster(14).is_err());
        assert!(EventSource::round(7).is_err());
        assert!(EventSource::final_scoring(3).is_err());
        assert!("round7".parse::<EventSource>().is_err());
        assert!("booster".parse::<EventSource>().is_err());
        assert!("boosterx".parse::<EventSource>().is_err());
    }

    #[test]
    fn test_unknown_source() {
        let err = "tech-foo".parse::<EventSource>().unwrap_err();
        assert_eq!(
            err,
            VocabError::Unknown { kind: "event source", token: "tech-foo".into() }
        );
    }

    #[test]
    fn test_source_serialization() {
        let source = EventSource::Faction(Faction::HadschHallas);
        let json = serde_json::to_string(&source).unwrap();
        assert_eq!(json, "\"hadsch-hallas\"");
        let back: EventSource = serde_json::from_str(&json).unwrap();
        assert_eq!(back, source);
        assert!(serde_json::from_str::<EventSource>("\"nowhere\"").is_err());
    }
}
