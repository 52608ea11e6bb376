pub mod config;
pub mod view;

use rayon::prelude::*;

pub use strategies;
pub use types;

use crate::{config::SimulationConfig, view::GameView};
use types::{GameOutcome, GameState, SetupError};

/// Plays a freshly created game until it ends and scores it.
pub fn run_game(game_state: &mut GameState, view: &mut dyn GameView) -> GameOutcome {
    assert_eq!(game_state.history.len(), 0, "run_game needs a game that has not started");
    let mut seen = 0;
    let ending = loop {
        if let Some(ending) = game_state.ending() {
            break ending;
        }
        view.round_started(game_state.round + 1, game_state);
        game_state.play_round();
        for event in &game_state.history[seen..] {
            view.event(event, game_state);
        }
        seen = game_state.history.len();
        log::debug!(
            "After round {}: {} gold in the bank, {} cards in the deck",
            game_state.round,
            game_state.bank.available(),
            game_state.deck.len()
        );
    };
    log::info!("Game ended after {} rounds: {ending:?}", game_state.round);

    let outcome = GameOutcome {
        ending,
        rounds: game_state.round,
        standings: game_state.final_standings(),
    };
    view.game_finished(&outcome);
    outcome
}

/// Runs every configured game on the rayon pool. Games share nothing.
pub fn simulate(config: &SimulationConfig) -> Result<Vec<GameOutcome>, SetupError> {
    config.validate()?;
    (0..config.games)
        .into_par_iter()
        .map(|index| -> Result<GameOutcome, SetupError> {
            let game_config = config.game_config(index);
            let players = config.players(game_config.seed);
            let mut game_state = GameState::new(game_config, players)?;
            Ok(run_game(&mut game_state, &mut view::NoopView))
        })
        .collect()
}
