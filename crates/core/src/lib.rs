//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate holds the rules of ten-pin scoring and the live-entry state
//! machine. It has no dependencies on UI, storage, or I/O.
//!
//! # Module Structure
//!
//! - [`frame`]: ball slots of one frame, completion and scoreboard marks
//! - [`validate`]: legality of one ball entry given the frame so far
//! - [`scoring`]: frame totals with strike/spare lookahead
//! - [`board`]: ten frames whose totals are rescored after every write
//! - [`game_state`]: the board plus the turn cursor and entry operations
//! - [`snapshot`]: plain copy of a game for display
//!
//! # Example
//!
//! ```
//! use tenpin_core::GameState;
//! use tenpin_types::{Destination, ScoreAction};
//!
//! let mut game = GameState::new(Destination::Casual);
//!
//! // Strike, then 4 and 3
//! game.apply_action(ScoreAction::Strike);
//! game.record_roll(4).unwrap();
//! game.record_roll(3).unwrap();
//!
//! assert_eq!(game.frame_total(0), 17);
//! assert_eq!(game.total_score(), 24);
//!
//! // Illegal entries are rejected and change nothing
//! game.record_roll(8).unwrap();
//! assert!(game.record_roll(5).is_err());
//! assert_eq!(game.total_score(), 32);
//! ```

pub mod board;
pub mod frame;
pub mod game_state;
pub mod scoring;
pub mod snapshot;
pub mod validate;

pub use tenpin_types as types;

// Re-export commonly used types for convenience
pub use board::GameBoard;
pub use frame::Frame;
pub use game_state::{GameState, TurnCursor};
pub use scoring::{compute, frame_total, ScoreCard};
pub use snapshot::GameSnapshot;
pub use validate::{check_roll, is_legal, max_pins, RollRejected};
