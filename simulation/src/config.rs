use std::path::{Path, PathBuf};

use clap::ValueEnum;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strategies::{
    policies::{
        AlwaysDrawCards, AlwaysTakeGold, CheapestBuild, DestroyLeader, FocusRusher,
        StealFromRichest, TargetLeaderRole,
    },
    CompositeStrategy, GreedyStrategy, RandomStrategy, ThreatStrategy,
};
use thiserror::Error;
use types::{GameConfig, GameRng, SetupError, Strategy};
use uuid::Uuid;

pub const CONFIG_ENV_VAR: &str = "CITADELS_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid game setup: {0}")]
    Setup(#[from] SetupError),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BotKind {
    Random,
    Greedy,
    Threat,
    /// Composite bot hunting the leader and saving gold.
    Hunter,
    /// Composite bot that only ever draws cards.
    Collector,
}

impl BotKind {
    pub fn build(&self, seed: u64) -> Box<dyn Strategy> {
        match self {
            BotKind::Random => Box::new(RandomStrategy::new(seed)),
            BotKind::Greedy => Box::new(GreedyStrategy::new(seed)),
            BotKind::Threat => Box::new(ThreatStrategy::new(seed)),
            BotKind::Hunter => Box::new(
                CompositeStrategy::new(seed)
                    .with_role_policy(TargetLeaderRole)
                    .with_resource_policy(AlwaysTakeGold)
                    .with_build_policy(CheapestBuild)
                    .with_assassination_policy(FocusRusher)
                    .with_theft_policy(StealFromRichest)
                    .with_destruction_policy(DestroyLeader),
            ),
            BotKind::Collector => Box::new(
                CompositeStrategy::new(seed)
                    .with_resource_policy(AlwaysDrawCards)
                    .with_build_policy(CheapestBuild),
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BotKind::Random => "random",
            BotKind::Greedy => "greedy",
            BotKind::Threat => "threat",
            BotKind::Hunter => "hunter",
            BotKind::Collector => "collector",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub bots: Vec<BotKind>,
    pub game: GameConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 0,
            bots: vec![BotKind::Greedy, BotKind::Threat, BotKind::Hunter, BotKind::Random],
            game: GameConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Reads the YAML file named on the command line, else the one named by
    /// `CITADELS_CONFIG`, else falls back to the defaults.
    pub fn from_cli_or_env_or_yaml(cli_arg: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = if let Some(arg) = cli_arg {
            Some(arg)
        } else if let Ok(env) = std::env::var(CONFIG_ENV_VAR) {
            Some(PathBuf::from(env))
        } else {
            None
        };

        match path {
            Some(path) => Self::from_yaml_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        self.game.validate(self.bots.len())
    }

    /// Game settings for the `index`-th game: same rules, its own seed.
    pub fn game_config(&self, index: usize) -> GameConfig {
        GameConfig {
            seed: self.seed.wrapping_add(index as u64),
            ..self.game.clone()
        }
    }

    /// Seats one bot per configured kind. Ids and bot seeds derive from the
    /// game seed so a game replays identically.
    pub fn players(&self, game_seed: u64) -> Vec<(Uuid, String, Box<dyn Strategy>)> {
        let mut rng = GameRng::seed_from_u64(game_seed ^ 0x5eed);
        self.bots
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();
                let name = format!("{}-{}", kind.name(), i + 1);
                (id, name, kind.build(rng.gen()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_overrides_only_given_fields() {
        let config = SimulationConfig::from_yaml(
            "games: 5\nbots: [greedy, greedy, random]\ngame:\n  crown_passes_to_dead_king: true\n",
        )
        .unwrap();
        assert_eq!(config.games, 5);
        assert_eq!(config.bots.len(), 3);
        assert!(config.game.crown_passes_to_dead_king);
        assert_eq!(config.game.starting_gold, 2);
    }

    #[test]
    fn test_yaml_rejects_bad_table() {
        let err = SimulationConfig::from_yaml("bots: [greedy, greedy]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Setup(SetupError::PlayerCount { .. })));
    }

    #[test]
    fn test_yaml_rejects_starved_role_pool() {
        let yaml = "bots: [greedy, greedy, greedy, greedy, greedy, greedy, greedy]\n\
                    game:\n  excluded_roles: [Warlord]\n";
        let err = SimulationConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Setup(SetupError::NotEnoughRoles {
                players: 7,
                available: 6
            })
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = SimulationConfig::from_yaml_file(Path::new("/nonexistent/citadels.yaml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_players_replay_from_seed() {
        let config = SimulationConfig::default();
        let seats = |seed| {
            config
                .players(seed)
                .into_iter()
                .map(|(id, name, _)| (id, name))
                .collect::<Vec<_>>()
        };
        let first = seats(9);
        let second = seats(9);
        assert_eq!(first, second);
        assert_eq!(first[0].1, "greedy-1");
    }
}
