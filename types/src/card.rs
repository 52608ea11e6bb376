use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::district::{District, DistrictType};

/// A physical district card. `id` is unique among every card a deck has minted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: u32,
    district: District,
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.district)
    }
}

impl Card {
    pub fn new(id: u32, district: District) -> Self {
        Card { id, district }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn district(&self) -> District {
        self.district
    }

    pub fn cost(&self) -> u32 {
        self.district.cost()
    }

    pub fn district_type(&self) -> DistrictType {
        self.district.district_type()
    }
}
