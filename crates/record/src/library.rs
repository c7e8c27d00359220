//! Game library - saved games and leagues over a key-value store
//!
//! Layout (keys from [`StoreConfig`]):
//! - casual key: JSON array of casual [`GameRecord`]s
//! - league games key: JSON object mapping league name to an array of records
//! - leagues key: JSON array of [`League`]s
//!
//! Anything that fails to decode is logged and read as empty. Writing over
//! such a key replaces the bad data.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::record::{GameRecord, League};
use crate::store::{KvStore, StoreError};
use crate::types::Destination;

type LeagueGames = BTreeMap<String, Vec<GameRecord>>;

/// Saved games and leagues
pub struct GameLibrary<S: KvStore> {
    store: S,
    config: StoreConfig,
}

impl<S: KvStore> GameLibrary<S> {
    pub fn new(store: S, config: StoreConfig) -> Self {
        Self { store, config }
    }

    /// Library using the default storage keys
    pub fn with_store(store: S) -> Self {
        Self::new(store, StoreConfig::default())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// File a record under its destination
    pub fn save(&mut self, record: GameRecord) -> Result<(), StoreError> {
        match record.destination() {
            Destination::Casual => {
                let key = self.config.casual_key.clone();
                let mut games: Vec<GameRecord> = self.read(&key);
                log::debug!("[Library] saving casual game {} ({})", record.id, record.total_score);
                games.push(record);
                self.write(&key, &games)
            }
            Destination::League(name) => {
                let key = self.config.league_games_key.clone();
                let mut leagues: LeagueGames = self.read(&key);
                log::debug!(
                    "[Library] saving game {} ({}) to league {}",
                    record.id,
                    record.total_score,
                    name
                );
                leagues.entry(name).or_default().push(record);
                self.write(&key, &leagues)
            }
        }
    }

    pub fn casual_games(&self) -> Vec<GameRecord> {
        let mut games: Vec<GameRecord> = self.read(&self.config.casual_key);
        for game in games.iter_mut() {
            game.league_name = None;
        }
        games
    }

    /// Games of one league, each tagged with the league name
    pub fn league_games(&self, league: &str) -> Vec<GameRecord> {
        let mut leagues = self.league_map();
        leagues.remove(league).unwrap_or_default()
    }

    /// Names that have at least one stored game entry, sorted
    pub fn league_names(&self) -> Vec<String> {
        self.league_map().into_keys().collect()
    }

    /// Casual games followed by every league's games
    pub fn all_games(&self) -> Vec<GameRecord> {
        let mut games = self.casual_games();
        for (_, league_games) in self.league_map() {
            games.extend(league_games);
        }
        games
    }

    /// Remove a game wherever it is stored. Returns whether it was found.
    pub fn delete_game(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let casual_key = self.config.casual_key.clone();
        let mut games: Vec<GameRecord> = self.read(&casual_key);
        let before = games.len();
        games.retain(|g| g.id != id);
        if games.len() != before {
            log::debug!("[Library] deleted casual game {}", id);
            self.write(&casual_key, &games)?;
            return Ok(true);
        }

        let league_key = self.config.league_games_key.clone();
        let mut leagues: LeagueGames = self.read(&league_key);
        let mut found = false;
        for league_games in leagues.values_mut() {
            let before = league_games.len();
            league_games.retain(|g| g.id != id);
            found |= league_games.len() != before;
        }
        if found {
            log::debug!("[Library] deleted league game {}", id);
            self.write(&league_key, &leagues)?;
        }
        Ok(found)
    }

    /// Leagues, most recently added first
    pub fn leagues(&self) -> Vec<League> {
        let mut leagues: Vec<League> = self.read(&self.config.leagues_key);
        leagues.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        leagues
    }

    /// Create a league. Blank names are refused with `Ok(None)`.
    pub fn add_league(&mut self, name: &str, emoji: &str) -> Result<Option<League>, StoreError> {
        self.add_league_at(name, emoji, Utc::now())
    }

    pub fn add_league_at(
        &mut self,
        name: &str,
        emoji: &str,
        date_added: DateTime<Utc>,
    ) -> Result<Option<League>, StoreError> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        let key = self.config.leagues_key.clone();
        let mut leagues: Vec<League> = self.read(&key);
        let league = League::new(name, emoji, date_added);
        log::debug!("[Library] adding league {} ({})", league.name, league.id);
        leagues.push(league.clone());
        self.write(&key, &leagues)?;
        Ok(Some(league))
    }

    /// Remove a league and all of its games. Returns whether it existed.
    pub fn delete_league(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let key = self.config.leagues_key.clone();
        let mut leagues: Vec<League> = self.read(&key);
        let Some(pos) = leagues.iter().position(|l| l.id == id) else {
            return Ok(false);
        };
        let removed = leagues.remove(pos);
        self.write(&key, &leagues)?;

        let games_key = self.config.league_games_key.clone();
        let mut games: LeagueGames = self.read(&games_key);
        if let Some(dropped) = games.remove(&removed.name) {
            log::debug!(
                "[Library] deleted league {} with {} games",
                removed.name,
                dropped.len()
            );
            self.write(&games_key, &games)?;
        }
        Ok(true)
    }

    fn league_map(&self) -> LeagueGames {
        let mut leagues: LeagueGames = self.read(&self.config.league_games_key);
        for (name, games) in leagues.iter_mut() {
            for game in games.iter_mut() {
                game.league_name = Some(name.clone());
            }
        }
        leagues
    }

    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(bytes) = self.store.get(key) else {
            return T::default();
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("[Library] ignoring malformed data under {:?}: {}", key, e);
                T::default()
            }
        }
    }

    fn write<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, bytes)
    }
}
