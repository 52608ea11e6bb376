use std::path::PathBuf;

use clap::Parser;

use simulation::config::{BotKind, SimulationConfig};

#[derive(Parser, Debug)]
struct Params {
    /// YAML config file. Falls back to $CITADELS_CONFIG.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    games: Option<usize>,

    #[arg(short, long)]
    seed: Option<u64>,

    /// One seat per occurrence, e.g. `-b greedy -b threat -b random`.
    #[arg(short, long, value_enum)]
    bot: Vec<BotKind>,

    /// Print each game's outcome as a JSON line.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Params::parse();
    log::info!("args: {args:?}");

    let mut config = match SimulationConfig::from_cli_or_env_or_yaml(args.config) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if !args.bot.is_empty() {
        config.bots = args.bot;
    }

    let outcomes = match simulation::simulate(&config) {
        Ok(outcomes) => outcomes,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };

    for (index, outcome) in outcomes.iter().enumerate() {
        match outcome.winner() {
            Some(winner) => log::info!(
                "Game {index}: {} won with {} points after {} rounds ({:?})",
                winner.name,
                winner.score,
                outcome.rounds,
                outcome.ending
            ),
            None => log::warn!("Game {index} ended without players"),
        }
        if args.json {
            match serde_json::to_string(outcome) {
                Ok(line) => println!("{line}"),
                Err(err) => log::error!("Could not serialize game {index}: {err}"),
            }
        }
    }
}
