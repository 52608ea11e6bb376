use types::{Event, GameOutcome, GameState};

/// Receives what happens in a game. Nothing flows back into the game.
pub trait GameView {
    fn round_started(&mut self, _round: u32, _game: &GameState) {}

    fn event(&mut self, _event: &Event, _game: &GameState) {}

    fn game_finished(&mut self, _outcome: &GameOutcome) {}
}

#[derive(Debug, Default)]
pub struct NoopView;

impl GameView for NoopView {}

/// Forwards the game to the `log` facade.
#[derive(Debug, Default)]
pub struct LogView;

impl GameView for LogView {
    fn round_started(&mut self, round: u32, game: &GameState) {
        log::info!("Round {round}, bank holds {} gold", game.bank.available());
    }

    fn event(&mut self, event: &Event, game: &GameState) {
        let name = event
            .player_id
            .and_then(|id| game.get_player(id))
            .map_or("Table", |p| p.state.name.as_str());
        log::debug!("[round {}] {name}: {}", event.round, event.action);
    }

    fn game_finished(&mut self, outcome: &GameOutcome) {
        for (place, standing) in outcome.standings.iter().enumerate() {
            log::info!(
                "{}. {} with {} points ({} districts)",
                place + 1,
                standing.name,
                standing.score,
                standing.citadel.len()
            );
        }
    }
}
