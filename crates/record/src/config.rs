use std::path::PathBuf;

/// Default key for the flat list of casual games
pub const DEFAULT_CASUAL_KEY: &str = "savedGames";
/// Default key for the league-name -> games map
pub const DEFAULT_LEAGUE_GAMES_KEY: &str = "leagueGames";
/// Default key for the list of leagues
pub const DEFAULT_LEAGUES_KEY: &str = "savedLeagues";
/// Default directory for the file-backed store
pub const DEFAULT_STORE_DIR: &str = ".tenpin";

/// Where and under which keys games are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub dir: PathBuf,
    pub casual_key: String,
    pub league_games_key: String,
    pub leagues_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_STORE_DIR),
            casual_key: DEFAULT_CASUAL_KEY.to_string(),
            league_games_key: DEFAULT_LEAGUE_GAMES_KEY.to_string(),
            leagues_key: DEFAULT_LEAGUES_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Create from environment variables; unset or blank values use defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`StoreConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            dir: PathBuf::from(var("TENPIN_STORE_DIR", DEFAULT_STORE_DIR)),
            casual_key: var("TENPIN_CASUAL_KEY", DEFAULT_CASUAL_KEY),
            league_games_key: var("TENPIN_LEAGUE_KEY", DEFAULT_LEAGUE_GAMES_KEY),
            leagues_key: var("TENPIN_LEAGUES_KEY", DEFAULT_LEAGUES_KEY),
        }
    }
}
