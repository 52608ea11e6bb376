use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::district::{DistrictEffect, DistrictType};

/// Character identities, declared in rank (turn) order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Assassin,
    Thief,
    Magician,
    King,
    Bishop,
    Merchant,
    Architect,
    Warlord,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Assassin => write!(f, "Assassin"),
            Role::Thief => write!(f, "Thief"),
            Role::Magician => write!(f, "Magician"),
            Role::King => write!(f, "King"),
            Role::Bishop => write!(f, "Bishop"),
            Role::Merchant => write!(f, "Merchant"),
            Role::Architect => write!(f, "Architect"),
            Role::Warlord => write!(f, "Warlord"),
        }
    }
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Assassin,
        Role::Thief,
        Role::Magician,
        Role::King,
        Role::Bishop,
        Role::Merchant,
        Role::Architect,
        Role::Warlord,
    ];

    pub const ROYAL: Role = Role::King;

    /// Removed from the round pool when the table is at its minimum size.
    pub const DROPPED_AT_MINIMUM: Role = Role::Assassin;

    pub fn rank(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn is_royal(&self) -> bool {
        *self == Role::ROYAL
    }

    pub fn non_royal() -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(|r| !r.is_royal())
    }

    /// District type that pays this role one coin per matching district.
    pub fn income_type(&self) -> Option<DistrictType> {
        match self {
            Role::King => Some(DistrictType::Noble),
            Role::Bishop => Some(DistrictType::Religious),
            Role::Merchant => Some(DistrictType::TradeAndCrafts),
            Role::Warlord => Some(DistrictType::Soldierly),
            _ => None,
        }
    }

    /// Coins granted regardless of the citadel.
    pub fn flat_income(&self) -> u32 {
        match self {
            Role::Merchant => 1,
            _ => 0,
        }
    }

    /// Income owed for a citadel made of the given districts.
    pub fn income_for<'a>(
        &self,
        citadel: impl IntoIterator<Item = &'a crate::district::District>,
    ) -> u32 {
        let Some(income_type) = self.income_type() else {
            return self.flat_income();
        };
        let matching = citadel
            .into_iter()
            .filter(|d| {
                d.district_type() == income_type
                    || d.effect() == Some(DistrictEffect::SchoolOfMagic)
            })
            .count() as u32;
        matching + self.flat_income()
    }

    pub fn builds_allowed(&self) -> usize {
        match self {
            Role::Architect => 3,
            _ => 1,
        }
    }

    /// Cards drawn for free at the start of the turn.
    pub fn extra_cards(&self) -> usize {
        match self {
            Role::Architect => 2,
            _ => 0,
        }
    }

    /// The Warlord may not touch this role's citadel while it is alive.
    pub fn protects_citadel(&self) -> bool {
        matches!(self, Role::Bishop)
    }

    /// Roles the Thief is allowed to name.
    pub fn can_be_robbed(&self) -> bool {
        !matches!(self, Role::Assassin | Role::Thief)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::district::District;

    #[test]
    fn test_rank_follows_declaration_order() {
        let ranks: Vec<_> = Role::ALL.iter().map(Role::rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(Role::Assassin < Role::Warlord);
    }

    #[test]
    fn test_king_income_counts_noble_districts() {
        let citadel = [
            District::Palace,
            District::Castle,
            District::Market,
            District::Manor,
            District::Barracks,
        ];
        assert_eq!(Role::King.income_for(&citadel), 3);
    }

    #[test]
    fn test_merchant_gets_flat_bonus() {
        assert_eq!(Role::Merchant.income_for(&[]), 1);
        assert_eq!(Role::Merchant.income_for(&[District::Tavern]), 2);
    }

    #[test]
    fn test_school_of_magic_matches_any_income_type() {
        assert_eq!(Role::Warlord.income_for(&[District::SchoolOfMagic]), 1);
        assert_eq!(Role::Thief.income_for(&[District::SchoolOfMagic]), 0);
    }

    #[test]
    fn test_non_royal_excludes_king() {
        assert_eq!(Role::non_royal().count(), 7);
        assert!(Role::non_royal().all(|r| r != Role::King));
    }
}
