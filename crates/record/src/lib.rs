//! Record module - finished games, leagues, and their persistence
//!
//! Turns a game in progress into an immutable [`GameRecord`] and files it in
//! a [`GameLibrary`] backed by any [`KvStore`].
//!
//! # Storage Layout
//!
//! The library keeps three keys, each holding one JSON document:
//!
//! - **casual games**: array of records
//! - **league games**: object mapping league name to an array of records
//! - **leagues**: array of `{id, name, emoji, dateAdded}`
//!
//! Unreadable documents are logged and treated as empty.
//!
//! # Environment Variables
//!
//! [`StoreConfig::from_env`] reads:
//!
//! - `TENPIN_STORE_DIR`: Directory for [`FileKv`] (default: ".tenpin")
//! - `TENPIN_CASUAL_KEY`: Casual games key (default: "savedGames")
//! - `TENPIN_LEAGUE_KEY`: League games key (default: "leagueGames")
//! - `TENPIN_LEAGUES_KEY`: League list key (default: "savedLeagues")
//!
//! # Example
//!
//! ```
//! use tenpin_record::{finalize, GameLibrary, GameMetadata, MemoryKv};
//! use tenpin_record::core::GameState;
//! use tenpin_record::types::Destination;
//!
//! let mut game = GameState::new(Destination::League("Tuesday".to_string()));
//! game.record_strike();
//! game.record_roll(9).unwrap();
//!
//! let mut library = GameLibrary::with_store(MemoryKv::new());
//! library.save(finalize(&game, GameMetadata::default())).unwrap();
//!
//! let games = library.league_games("Tuesday");
//! assert_eq!(games.len(), 1);
//! assert_eq!(games[0].total_score, 28);
//! ```

pub mod config;
pub mod library;
pub mod record;
pub mod store;

pub use tenpin_core as core;
pub use tenpin_types as types;

pub use config::StoreConfig;
pub use library::GameLibrary;
pub use record::{
    finalize, sort_records, BowlingStyle, GameMetadata, GameRecord, GripStyle, League, MAX_LANE,
};
pub use store::{FileKv, KvStore, MemoryKv, StoreError};
