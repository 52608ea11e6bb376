use std::fmt::{Debug, Display};

use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    card::Card,
    district::{District, DistrictEffect, DistrictType},
    role::Role,
};

/// Why a district could not be built.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildRejection {
    #[error("{district} costs more than the {gold} gold available")]
    Unaffordable { district: District, gold: u32 },

    #[error("{0} is already in the citadel")]
    AlreadyBuilt(District),

    #[error("citadel already holds {0} districts")]
    CitadelFull(usize),

    #[error("card is not in hand")]
    NotInHand,
}

#[derive(Clone, Debug)]
pub struct PlayerState {
    pub id: Uuid,
    pub name: String,
    pub gold: u32,
    pub hand: Vec<Card>,
    pub citadel: Vec<Card>,
    pub bonus: u32,
    pub role: Option<Role>,
    pub revealed: bool,
    pub first_to_complete: bool,
    pub last_build_was_special: bool,
    pub draft_position: usize,
    pub drafted_before: Vec<Uuid>,
    /// Roles still in the pool when this player drafted.
    pub offered_roles: Vec<Role>,
}

/// What every other seat at the table can see of a player.
#[derive(Clone, Debug, Serialize)]
pub struct PublicPlayerState {
    pub id: Uuid,
    pub name: String,
    pub gold: u32,
    pub hand_size: usize,
    pub citadel: Vec<District>,
    pub role: Option<Role>,
    pub draft_position: usize,
}

impl From<&PlayerState> for PublicPlayerState {
    fn from(value: &PlayerState) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            gold: value.gold,
            hand_size: value.hand.len(),
            citadel: value.citadel.iter().map(Card::district).collect(),
            role: value.revealed_role(),
            draft_position: value.draft_position,
        }
    }
}

impl PublicPlayerState {
    /// One district away from the threshold, or past it.
    pub fn is_about_to_win(&self, win_threshold: usize) -> bool {
        self.citadel.len() + 1 >= win_threshold
    }

    pub fn has_built(&self, district: District) -> bool {
        self.citadel.contains(&district)
    }

    /// Price the Warlord pays to knock `district` out of this citadel.
    pub fn destruction_cost(&self, district: District) -> u32 {
        let has_wall = self
            .citadel
            .iter()
            .any(|d| d.effect() == Some(DistrictEffect::GreatWall));
        if has_wall && district.effect() != Some(DistrictEffect::GreatWall) {
            district.cost()
        } else {
            district.cost().saturating_sub(1)
        }
    }

    /// Districts a Warlord with `gold` coins could destroy here.
    pub fn destroyable(&self, gold: u32) -> impl Iterator<Item = District> + '_ {
        self.citadel
            .iter()
            .copied()
            .filter(|d| d.effect() != Some(DistrictEffect::Keep))
            .filter(move |d| self.destruction_cost(*d) <= gold)
    }
}

impl PartialEq for PlayerState {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) Gold: {} Hand: [{}] Citadel: [{}]",
            self.name,
            self.role
                .map_or_else(|| "No Role".to_string(), |role| role.to_string()),
            self.gold,
            self.hand.iter().join(", "),
            self.citadel.iter().join(", ")
        )
    }
}

impl PlayerState {
    pub fn new(name: String) -> Self {
        Self::new_with_id(Uuid::new_v4(), name)
    }

    pub fn new_with_id(id: Uuid, name: String) -> Self {
        Self {
            id,
            name,
            gold: 0,
            hand: Vec::new(),
            citadel: Vec::new(),
            bonus: 0,
            role: None,
            revealed: false,
            first_to_complete: false,
            last_build_was_special: false,
            draft_position: 0,
            drafted_before: Vec::new(),
            offered_roles: Vec::new(),
        }
    }

    pub fn revealed_role(&self) -> Option<Role> {
        if self.revealed {
            self.role
        } else {
            None
        }
    }

    pub fn has_built(&self, district: District) -> bool {
        self.citadel.iter().any(|c| c.district() == district)
    }

    pub fn has_effect(&self, effect: DistrictEffect) -> bool {
        self.citadel
            .iter()
            .any(|c| c.district().effect() == Some(effect))
    }

    pub fn validate_build(&self, card: &Card, capacity: usize) -> Result<(), BuildRejection> {
        if !self.hand.contains(card) {
            return Err(BuildRejection::NotInHand);
        }
        if self.citadel.len() >= capacity {
            return Err(BuildRejection::CitadelFull(self.citadel.len()));
        }
        if self.has_built(card.district()) {
            return Err(BuildRejection::AlreadyBuilt(card.district()));
        }
        if card.cost() > self.gold {
            return Err(BuildRejection::Unaffordable {
                district: card.district(),
                gold: self.gold,
            });
        }
        Ok(())
    }

    pub fn can_build(&self, card: &Card, capacity: usize) -> bool {
        self.validate_build(card, capacity).is_ok()
    }

    pub fn buildable_cards(&self, capacity: usize) -> impl Iterator<Item = &Card> {
        self.hand
            .iter()
            .filter(move |card| self.can_build(card, capacity))
    }

    /// Hand cards whose district is not standing in the citadel yet.
    pub fn unbuilt_cards(&self) -> impl Iterator<Item = &Card> {
        self.hand
            .iter()
            .filter(|card| !self.has_built(card.district()))
    }

    pub fn remove_from_hand(&mut self, card: &Card) -> bool {
        if let Some(idx) = self.hand.iter().position(|c| c == card) {
            self.hand.remove(idx);
            true
        } else {
            false
        }
    }

    pub fn remove_from_citadel(&mut self, district: District) -> Option<Card> {
        let idx = self
            .citadel
            .iter()
            .position(|c| c.district() == district)?;
        Some(self.citadel.remove(idx))
    }

    pub fn distinct_types(&self) -> Vec<DistrictType> {
        self.citadel
            .iter()
            .map(Card::district_type)
            .unique()
            .collect()
    }

    /// Citadel types ordered from most to least frequent.
    pub fn types_by_frequency(&self) -> Vec<DistrictType> {
        self.citadel
            .iter()
            .map(Card::district_type)
            .counts()
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
            .map(|(t, _)| t)
            .collect()
    }

    pub fn citadel_cost(&self) -> u32 {
        self.citadel.iter().map(Card::cost).sum()
    }

    pub fn score(&self) -> u32 {
        self.citadel_cost() + self.bonus
    }
}
