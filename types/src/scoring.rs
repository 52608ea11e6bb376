use std::cmp::Ordering;

use serde::Serialize;
use uuid::Uuid;

use crate::{district::District, player_state::PlayerState};

pub const FIRST_TO_COMPLETE_BONUS: u32 = 2;
pub const COMPLETED_BONUS: u32 = 2;
pub const ALL_TYPES_BONUS: u32 = 3;
pub const PRESTIGE_BONUS: u32 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BonusBreakdown {
    pub first_to_complete: u32,
    pub completed: u32,
    pub all_types: u32,
    pub prestige: u32,
}

impl BonusBreakdown {
    pub fn total(&self) -> u32 {
        self.first_to_complete + self.completed + self.all_types + self.prestige
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEnding {
    /// Somebody reached the district threshold.
    Completed,
    /// No player could ever build again.
    Stuck,
    RoundCap,
}

#[derive(Debug, Clone, Serialize)]
pub struct Standing {
    pub player_id: Uuid,
    pub name: String,
    pub score: u32,
    pub citadel: Vec<District>,
    pub citadel_cost: u32,
    pub bonuses: BonusBreakdown,
}

impl Standing {
    pub fn from_state(state: &PlayerState, bonuses: BonusBreakdown) -> Self {
        Self {
            player_id: state.id,
            name: state.name.clone(),
            score: state.score(),
            citadel: state.citadel.iter().map(|c| c.district()).collect(),
            citadel_cost: state.citadel_cost(),
            bonuses,
        }
    }

    /// Higher score first, then bigger citadel, then the costlier one.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then(other.citadel.len().cmp(&self.citadel.len()))
            .then(other.citadel_cost.cmp(&self.citadel_cost))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameOutcome {
    pub ending: GameEnding,
    pub rounds: u32,
    /// Sorted best first.
    pub standings: Vec<Standing>,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<&Standing> {
        self.standings.first()
    }
}
