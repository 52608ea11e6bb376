use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DistrictType {
    Noble,
    Religious,
    TradeAndCrafts,
    Soldierly,
    Prestige,
}

impl DistrictType {
    pub const ALL: [DistrictType; 5] = [
        DistrictType::Noble,
        DistrictType::Religious,
        DistrictType::TradeAndCrafts,
        DistrictType::Soldierly,
        DistrictType::Prestige,
    ];
}

impl Display for DistrictType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistrictType::Noble => write!(f, "Noble"),
            DistrictType::Religious => write!(f, "Religious"),
            DistrictType::TradeAndCrafts => write!(f, "Trade and Crafts"),
            DistrictType::Soldierly => write!(f, "Soldierly"),
            DistrictType::Prestige => write!(f, "Prestige"),
        }
    }
}

/// What a prestige district does once it stands in a citadel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistrictEffect {
    /// Counts as any missing type for the five-types bonus.
    HauntedQuarter,
    /// Cannot be destroyed by the Warlord.
    Keep,
    /// Once per turn: discard a hand card for one coin.
    Laboratory,
    /// Once per turn: pay three coins to draw three cards.
    Smithy,
    /// Draw three cards instead of two.
    Observatory,
    /// Pay one coin to take a destroyed district into hand.
    Graveyard,
    /// Keep every drawn card.
    Library,
    /// Counts as the income type of any role.
    SchoolOfMagic,
    /// Worth two extra points at the end of the game.
    BonusPoints,
    /// Destroying the owner's other districts costs full price.
    GreatWall,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum District {
    Manor,
    Castle,
    Palace,
    Temple,
    Church,
    Monastery,
    Cathedral,
    Tavern,
    Market,
    TradingPost,
    Docks,
    Harbor,
    TownHall,
    Watchtower,
    Prison,
    Barracks,
    Fortress,
    HauntedQuarter,
    Keep,
    Laboratory,
    Smithy,
    Observatory,
    Graveyard,
    Library,
    SchoolOfMagic,
    University,
    DragonGate,
    GreatWall,
}

impl District {
    pub const ALL: [District; 28] = [
        District::Manor,
        District::Castle,
        District::Palace,
        District::Temple,
        District::Church,
        District::Monastery,
        District::Cathedral,
        District::Tavern,
        District::Market,
        District::TradingPost,
        District::Docks,
        District::Harbor,
        District::TownHall,
        District::Watchtower,
        District::Prison,
        District::Barracks,
        District::Fortress,
        District::HauntedQuarter,
        District::Keep,
        District::Laboratory,
        District::Smithy,
        District::Observatory,
        District::Graveyard,
        District::Library,
        District::SchoolOfMagic,
        District::University,
        District::DragonGate,
        District::GreatWall,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            District::Manor => "Manor",
            District::Castle => "Castle",
            District::Palace => "Palace",
            District::Temple => "Temple",
            District::Church => "Church",
            District::Monastery => "Monastery",
            District::Cathedral => "Cathedral",
            District::Tavern => "Tavern",
            District::Market => "Market",
            District::TradingPost => "Trading Post",
            District::Docks => "Docks",
            District::Harbor => "Harbor",
            District::TownHall => "Town Hall",
            District::Watchtower => "Watchtower",
            District::Prison => "Prison",
            District::Barracks => "Barracks",
            District::Fortress => "Fortress",
            District::HauntedQuarter => "Haunted Quarter",
            District::Keep => "Keep",
            District::Laboratory => "Laboratory",
            District::Smithy => "Smithy",
            District::Observatory => "Observatory",
            District::Graveyard => "Graveyard",
            District::Library => "Library",
            District::SchoolOfMagic => "School of Magic",
            District::University => "University",
            District::DragonGate => "Dragon Gate",
            District::GreatWall => "Great Wall",
        }
    }

    pub fn cost(&self) -> u32 {
        match self {
            District::Temple | District::Tavern | District::Watchtower => 1,
            District::Church
            | District::Market
            | District::TradingPost
            | District::Prison
            | District::HauntedQuarter => 2,
            District::Manor
            | District::Monastery
            | District::Docks
            | District::Barracks
            | District::Keep => 3,
            District::Castle | District::Harbor => 4,
            District::Palace
            | District::Cathedral
            | District::TownHall
            | District::Fortress
            | District::Laboratory
            | District::Smithy
            | District::Observatory
            | District::Graveyard => 5,
            District::Library
            | District::SchoolOfMagic
            | District::University
            | District::DragonGate
            | District::GreatWall => 6,
        }
    }

    pub fn district_type(&self) -> DistrictType {
        match self {
            District::Manor | District::Castle | District::Palace => DistrictType::Noble,
            District::Temple | District::Church | District::Monastery | District::Cathedral => {
                DistrictType::Religious
            }
            District::Tavern
            | District::Market
            | District::TradingPost
            | District::Docks
            | District::Harbor
            | District::TownHall => DistrictType::TradeAndCrafts,
            District::Watchtower | District::Prison | District::Barracks | District::Fortress => {
                DistrictType::Soldierly
            }
            _ => DistrictType::Prestige,
        }
    }

    /// How many copies of this district the catalog holds.
    pub fn reprints(&self) -> usize {
        match self {
            District::Manor | District::Tavern => 5,
            District::Castle | District::Market => 4,
            District::Palace
            | District::Temple
            | District::Church
            | District::Monastery
            | District::TradingPost
            | District::Docks
            | District::Harbor
            | District::Watchtower
            | District::Prison
            | District::Barracks => 3,
            District::Cathedral | District::TownHall | District::Fortress => 2,
            _ => 1,
        }
    }

    pub fn effect(&self) -> Option<DistrictEffect> {
        match self {
            District::HauntedQuarter => Some(DistrictEffect::HauntedQuarter),
            District::Keep => Some(DistrictEffect::Keep),
            District::Laboratory => Some(DistrictEffect::Laboratory),
            District::Smithy => Some(DistrictEffect::Smithy),
            District::Observatory => Some(DistrictEffect::Observatory),
            District::Graveyard => Some(DistrictEffect::Graveyard),
            District::Library => Some(DistrictEffect::Library),
            District::SchoolOfMagic => Some(DistrictEffect::SchoolOfMagic),
            District::University | District::DragonGate => Some(DistrictEffect::BonusPoints),
            District::GreatWall => Some(DistrictEffect::GreatWall),
            _ => None,
        }
    }
}

impl Display for District {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.cost())
    }
}

/// Number of district cards in a freshly built catalog.
pub fn total_district_instances() -> usize {
    District::ALL.iter().map(District::reprints).sum()
}
