use proptest::prelude::*;
use simulation::{
    config::{BotKind, SimulationConfig},
    run_game,
    strategies::{GreedyStrategy, RandomStrategy, ThreatStrategy},
    types::{
        game_state::GameState, Bank, Event, GameConfig, GameEnding, GameOutcome, Role,
        SetupError, Standing, Strategy,
    },
    view::{GameView, NoopView},
};
use uuid::Uuid;

fn make_player_inputs(
    names_and_strategies: Vec<(&str, Box<dyn Strategy>)>,
) -> Vec<(Uuid, String, Box<dyn Strategy>)> {
    names_and_strategies
        .into_iter()
        .map(|(name, strategy)| (Uuid::new_v4(), name.to_string(), strategy))
        .collect()
}

fn greedy_table(n: usize) -> Vec<(Uuid, String, Box<dyn Strategy>)> {
    let names = ["Alice", "Bob", "Charlie", "Dana", "Eve", "Frank", "Grace"];
    make_player_inputs(
        names
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, name)| (*name, Box::new(GreedyStrategy::new(i as u64)) as Box<dyn Strategy>))
            .collect(),
    )
}

fn assert_conserved(game_state: &GameState) {
    assert_eq!(game_state.total_gold(), game_state.config.total_coins);
    assert_eq!(game_state.total_cards(), game_state.deck.minted());
}

#[test]
fn test_greedy_game_completes() {
    let mut game_state = GameState::new(GameConfig::with_seed(42), greedy_table(4)).unwrap();
    let outcome = run_game(&mut game_state, &mut NoopView);

    assert_eq!(outcome.ending, GameEnding::Completed);
    assert!(outcome.rounds < 1000);
    assert_eq!(outcome.standings.len(), 4);

    let finisher = game_state.first_to_complete().expect("Someone completed");
    let flagged: Vec<Uuid> = game_state
        .table
        .iter()
        .filter(|p| p.state.first_to_complete)
        .map(|p| p.id())
        .collect();
    assert_eq!(flagged, vec![finisher]);

    let winner = outcome.winner().unwrap();
    assert!(outcome
        .standings
        .iter()
        .all(|s| Standing::rank_cmp(winner, s).is_le()));
    assert_conserved(&game_state);
}

#[test]
fn test_resources_are_conserved_every_round() {
    let player_inputs = make_player_inputs(vec![
        ("Alice", Box::new(GreedyStrategy::new(1)) as Box<dyn Strategy>),
        ("Bob", Box::new(ThreatStrategy::new(2)) as Box<dyn Strategy>),
        ("Charlie", Box::new(RandomStrategy::new(3)) as Box<dyn Strategy>),
        ("Dana", BotKind::Hunter.build(4)),
        ("Eve", BotKind::Collector.build(5)),
    ]);
    let mut game_state = GameState::new(GameConfig::with_seed(7), player_inputs).unwrap();
    assert_conserved(&game_state);
    while game_state.ending().is_none() {
        game_state.start_round();
        game_state.run_draft();

        let order = game_state.turn_order();
        let ranks: Vec<Role> = order
            .iter()
            .filter_map(|&idx| game_state.table[idx].state.role)
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));

        game_state.play_turns();
        game_state.end_round();
        assert_conserved(&game_state);
    }
}

#[test]
fn test_draft_goes_round_the_table_from_the_crown() {
    let mut game_state = GameState::new(GameConfig::with_seed(8), greedy_table(6)).unwrap();
    for _ in 0..10 {
        let start = game_state
            .crowned
            .and_then(|id| game_state.index_of(id))
            .unwrap_or(0);
        let order = game_state.draft_order();
        let expected: Vec<usize> = (0..6).map(|i| (start + i) % 6).collect();
        assert_eq!(order, expected);

        game_state.play_round();
        if game_state.ending().is_some() {
            break;
        }
    }
}

#[test]
fn test_bank_pays_what_it_has() {
    let mut bank = Bank::new(2);
    assert_eq!(bank.take(5), 2);
    assert_eq!(bank.available(), 0);
    assert_eq!(bank.take(1), 0);
}

#[test]
fn test_setup_validation() {
    let three = GameState::new(GameConfig::default(), greedy_table(3)).unwrap();
    let four = GameState::new(GameConfig::default(), greedy_table(4)).unwrap();
    assert!(three.win_threshold > four.win_threshold);
    assert_eq!(three.win_threshold, 10);
    assert_eq!(four.win_threshold, 8);

    let config = GameConfig {
        excluded_roles: vec![Role::Bishop, Role::Merchant],
        ..GameConfig::default()
    };
    let err = GameState::new(config, greedy_table(6)).unwrap_err();
    assert_eq!(
        err,
        SetupError::NotEnoughRoles {
            players: 6,
            available: 5
        }
    );

    let err = GameState::new(GameConfig::default(), greedy_table(2)).unwrap_err();
    assert!(matches!(err, SetupError::PlayerCount { count: 2, .. }));
}

#[test]
fn test_same_seed_replays_same_game() {
    let config = SimulationConfig::default();
    let play = || {
        let game_config = config.game_config(3);
        let players = config.players(game_config.seed);
        let mut game_state = GameState::new(game_config, players).unwrap();
        run_game(&mut game_state, &mut NoopView)
    };
    let first = play();
    let second = play();
    assert_eq!(first.rounds, second.rounds);
    assert_eq!(first.ending, second.ending);
    let summary = |o: &GameOutcome| {
        o.standings
            .iter()
            .map(|s| (s.player_id, s.score, s.citadel.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(summary(&first), summary(&second));
}

#[derive(Default)]
struct CountingView {
    rounds: u32,
    events: usize,
    finished: bool,
}

impl GameView for CountingView {
    fn round_started(&mut self, _round: u32, _game: &GameState) {
        self.rounds += 1;
    }

    fn event(&mut self, _event: &Event, _game: &GameState) {
        self.events += 1;
    }

    fn game_finished(&mut self, _outcome: &GameOutcome) {
        self.finished = true;
    }
}

#[test]
fn test_view_sees_every_event() {
    let mut game_state = GameState::new(GameConfig::with_seed(9), greedy_table(4)).unwrap();
    let mut view = CountingView::default();
    let outcome = run_game(&mut game_state, &mut view);

    assert!(view.finished);
    assert_eq!(view.rounds, outcome.rounds);
    assert_eq!(view.events, game_state.history.len());
}

#[test]
fn test_history_hides_drafted_roles_in_display() {
    let mut game_state = GameState::new(GameConfig::with_seed(10), greedy_table(4)).unwrap();
    game_state.play_round();
    let chose: Vec<String> = game_state
        .history
        .iter()
        .filter(|e| matches!(e.action, simulation::types::Action::ChoseRole(_)))
        .map(|e| e.action.to_string())
        .collect();
    assert_eq!(chose.len(), 4);
    assert!(chose.iter().all(|line| line == "Chose a role"));
}

#[test]
fn test_simulate_runs_every_game() {
    let config = SimulationConfig {
        games: 4,
        seed: 100,
        ..SimulationConfig::default()
    };
    let outcomes = simulation::simulate(&config).unwrap();
    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.iter().all(|o| o.standings.len() == config.bots.len()));
}

#[test]
fn test_simulate_rejects_bad_table() {
    let config = SimulationConfig {
        bots: vec![BotKind::Greedy],
        ..SimulationConfig::default()
    };
    assert!(simulation::simulate(&config).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn random_games_keep_coins_and_cards(seed in any::<u64>(), players in 3usize..=7) {
        let player_inputs = (0..players)
            .map(|i| {
                (
                    Uuid::new_v4(),
                    format!("random-{i}"),
                    Box::new(RandomStrategy::new(seed.wrapping_add(i as u64))) as Box<dyn Strategy>,
                )
            })
            .collect();
        let mut game_state = GameState::new(GameConfig::with_seed(seed), player_inputs).unwrap();
        while game_state.ending().is_none() {
            game_state.play_round();
            prop_assert_eq!(game_state.total_gold(), game_state.config.total_coins);
            prop_assert_eq!(game_state.total_cards(), game_state.deck.minted());
            prop_assert!(game_state.round <= game_state.config.max_rounds);
        }
    }
}
