use thiserror::Error;

use crate::{player_state::BuildRejection, role::Role};

/// Problems with a game's configuration, found before the first round.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("The number of players must be between {min} and {max}, got {count}")]
    PlayerCount { count: usize, min: usize, max: usize },

    #[error("{players} players need as many non-royal roles but only {available} are available")]
    NotEnoughRoles { players: usize, available: usize },

    #[error("The royal role {0} cannot be excluded from the game")]
    RoyalRoleExcluded(Role),

    #[error("Win threshold must be at least one district")]
    InvalidWinThreshold,
}

/// A player action refused at validation time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("{role} may build between 1 and {allowed} districts, asked for {requested}")]
    BuildCount {
        role: Role,
        requested: usize,
        allowed: usize,
    },

    #[error(transparent)]
    Build(#[from] BuildRejection),
}
