use serde::{Deserialize, Serialize};

use crate::{bank::TOTAL_COINS, error::SetupError, role::Role};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 7;

pub const NORMAL_WIN_THRESHOLD: usize = 8;
/// Fewer players means fewer turns per round, so the citadel has to grow bigger.
pub const SHORT_GAME_WIN_THRESHOLD: usize = 10;

pub const MAX_ROUNDS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub total_coins: u32,
    pub starting_gold: u32,
    pub starting_hand: usize,
    pub win_threshold: usize,
    pub short_game_win_threshold: usize,
    pub max_rounds: u32,
    pub seed: u64,
    pub excluded_roles: Vec<Role>,
    /// A killed King still hands the crown over at the end of his turn slot.
    pub crown_passes_to_dead_king: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            total_coins: TOTAL_COINS,
            starting_gold: 2,
            starting_hand: 4,
            win_threshold: NORMAL_WIN_THRESHOLD,
            short_game_win_threshold: SHORT_GAME_WIN_THRESHOLD,
            max_rounds: MAX_ROUNDS,
            seed: 0,
            excluded_roles: Vec::new(),
            crown_passes_to_dead_king: false,
        }
    }
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn win_threshold_for(&self, num_players: usize) -> usize {
        if num_players == MIN_PLAYERS {
            self.short_game_win_threshold
        } else {
            self.win_threshold
        }
    }

    /// Non-royal roles that can enter a round's pool at this table size.
    pub fn available_non_royal(&self, num_players: usize) -> Vec<Role> {
        Role::non_royal()
            .filter(|role| !self.excluded_roles.contains(role))
            .filter(|role| num_players != MIN_PLAYERS || *role != Role::DROPPED_AT_MINIMUM)
            .collect()
    }

    pub fn validate(&self, num_players: usize) -> Result<(), SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(SetupError::PlayerCount {
                count: num_players,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if let Some(&royal) = self.excluded_roles.iter().find(|r| r.is_royal()) {
            return Err(SetupError::RoyalRoleExcluded(royal));
        }
        if self.win_threshold == 0 || self.short_game_win_threshold == 0 {
            return Err(SetupError::InvalidWinThreshold);
        }
        let available = self.available_non_royal(num_players).len();
        if available < num_players {
            return Err(SetupError::NotEnoughRoles {
                players: num_players,
                available,
            });
        }
        Ok(())
    }
}
