pub mod action;
pub mod bank;
pub mod card;
pub mod character;
pub mod config;
pub mod deck;
pub mod district;
pub mod error;
pub mod game_state;
pub mod player;
pub mod player_state;
pub mod role;
pub mod scoring;
mod turn;

#[cfg(test)]
mod testing;

/// Seedable generator used for every random draw in a game.
pub type GameRng = rand_chacha::ChaCha8Rng;

pub use action::{Action, Event};
pub use bank::Bank;
pub use card::Card;
pub use character::{Character, CharacterState};
pub use config::GameConfig;
pub use deck::Deck;
pub use district::{District, DistrictEffect, DistrictType};
pub use error::{InvalidAction, SetupError};
pub use game_state::{build_role_pool, GameState, PublicInfo};
pub use player::{Player, Resource, Strategy};
pub use player_state::{BuildRejection, PlayerState, PublicPlayerState};
pub use role::Role;
pub use scoring::{BonusBreakdown, GameEnding, GameOutcome, Standing};
