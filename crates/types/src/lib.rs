//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental values used throughout the scorer.
//! All types are pure data with no external dependencies, so they can be
//! used by the scoring core, the record/persistence layer, and any UI.
//!
//! # Game Shape
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_COUNT` | 10 | Frames in a game (indexed 0-9) |
//! | `LAST_FRAME` | 9 | Index of the tenth frame |
//! | `PIN_COUNT` | 10 | Pins in a full rack |
//! | `BALLS_PER_FRAME` | 2 | Ball slots in frames 0-8 |
//! | `LAST_FRAME_BALLS` | 3 | Ball slots in the tenth frame |
//! | `MAX_SCORE` | 300 | Twelve consecutive strikes |
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{PinCount, ScoreAction, PIN_COUNT};
//!
//! // A gutter ball is not the same as a ball not yet thrown.
//! assert_ne!(PinCount::Thrown(0), PinCount::Unset);
//! assert_eq!(PinCount::Thrown(0).pins(), 0);
//! assert_eq!(PinCount::Unset.pins(), 0);
//!
//! // Parse entry actions
//! assert_eq!(ScoreAction::from_str("x"), Some(ScoreAction::Strike));
//! assert_eq!(ScoreAction::from_str("7"), Some(ScoreAction::Roll(7)));
//! assert_eq!(PIN_COUNT, 10);
//! ```

/// Frames in a game
pub const FRAME_COUNT: usize = 10;

/// Index of the tenth (last) frame
pub const LAST_FRAME: usize = FRAME_COUNT - 1;

/// Pins in a full rack
pub const PIN_COUNT: u8 = 10;

/// Ball slots in frames 0-8
pub const BALLS_PER_FRAME: usize = 2;

/// Ball slots in the tenth frame
pub const LAST_FRAME_BALLS: usize = 3;

/// Highest legal game total (twelve strikes)
pub const MAX_SCORE: u32 = 300;

/// Pinfall for one ball slot.
///
/// `Unset` means the ball has not been thrown yet; `Thrown(0)` is a gutter
/// ball. The two are never collapsed except by [`PinCount::pins`], which the
/// scoring arithmetic uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PinCount {
    #[default]
    Unset,
    Thrown(u8),
}

impl PinCount {
    /// Build a thrown count, or `None` when `pins` exceeds a full rack.
    pub fn thrown(pins: u8) -> Option<Self> {
        if pins <= PIN_COUNT {
            Some(PinCount::Thrown(pins))
        } else {
            None
        }
    }

    /// Pins knocked down, with an unthrown ball counting as 0.
    pub fn pins(&self) -> u8 {
        match self {
            PinCount::Unset => 0,
            PinCount::Thrown(p) => *p,
        }
    }

    pub fn value(&self) -> Option<u8> {
        match self {
            PinCount::Unset => None,
            PinCount::Thrown(p) => Some(*p),
        }
    }

    pub fn is_thrown(&self) -> bool {
        matches!(self, PinCount::Thrown(_))
    }

    /// All ten pins on this ball.
    pub fn is_full_rack(&self) -> bool {
        *self == PinCount::Thrown(PIN_COUNT)
    }
}

impl From<Option<u8>> for PinCount {
    /// Out-of-range values are treated as not thrown.
    fn from(value: Option<u8>) -> Self {
        value.and_then(PinCount::thrown).unwrap_or(PinCount::Unset)
    }
}

impl From<PinCount> for Option<u8> {
    fn from(value: PinCount) -> Self {
        value.value()
    }
}

/// Classification of a frame from its first two balls.
///
/// Shared by the bonus lookup and by anything that displays or counts
/// strikes and spares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// First ball took all ten pins
    Strike,
    /// First two balls together took all ten pins
    Spare,
    /// Anything else, including frames not yet (fully) thrown
    Open,
}

impl FrameKind {
    /// Classify from the first two ball slots.
    ///
    /// ```
    /// use tenpin_types::{FrameKind, PinCount};
    ///
    /// assert_eq!(FrameKind::classify(PinCount::Thrown(10), PinCount::Unset), FrameKind::Strike);
    /// assert_eq!(FrameKind::classify(PinCount::Thrown(6), PinCount::Thrown(4)), FrameKind::Spare);
    /// assert_eq!(FrameKind::classify(PinCount::Thrown(6), PinCount::Thrown(3)), FrameKind::Open);
    /// ```
    pub fn classify(first: PinCount, second: PinCount) -> Self {
        if first.is_full_rack() {
            FrameKind::Strike
        } else if first.pins() + second.pins() == PIN_COUNT {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKind::Strike => "strike",
            FrameKind::Spare => "spare",
            FrameKind::Open => "open",
        }
    }
}

/// Scoreboard glyph for one thrown ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BallMark {
    Strike,
    Spare,
    Pins(u8),
}

impl BallMark {
    pub fn symbol(&self) -> String {
        match self {
            BallMark::Strike => "X".to_string(),
            BallMark::Spare => "/".to_string(),
            BallMark::Pins(p) => p.to_string(),
        }
    }
}

/// Entry actions that can be applied to a game in progress
///
/// These are what a scoring UI sends; each maps to one turn-cursor operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreAction {
    /// Record a ball with the given pinfall at the cursor
    Roll(u8),
    /// Record all ten pins at the cursor
    Strike,
    /// Complete the current rack
    Spare,
    /// Reset every ball of the current frame
    ClearFrame,
    /// Move the cursor to the next frame
    NextFrame,
    /// Move the cursor to the previous frame
    PrevFrame,
}

impl ScoreAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tenpin_types::ScoreAction;
    ///
    /// assert_eq!(ScoreAction::from_str("Strike"), Some(ScoreAction::Strike));
    /// assert_eq!(ScoreAction::from_str("/"), Some(ScoreAction::Spare));
    /// assert_eq!(ScoreAction::from_str("10"), Some(ScoreAction::Roll(10)));
    /// assert_eq!(ScoreAction::from_str("11"), None);
    /// assert_eq!(ScoreAction::from_str("back"), Some(ScoreAction::PrevFrame));
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "x" | "strike" => Some(ScoreAction::Strike),
            "/" | "spare" => Some(ScoreAction::Spare),
            "clear" => Some(ScoreAction::ClearFrame),
            "next" => Some(ScoreAction::NextFrame),
            "prev" | "back" => Some(ScoreAction::PrevFrame),
            other => other
                .parse::<u8>()
                .ok()
                .filter(|p| *p <= PIN_COUNT)
                .map(ScoreAction::Roll),
        }
    }

    pub fn as_str(&self) -> String {
        match self {
            ScoreAction::Roll(p) => p.to_string(),
            ScoreAction::Strike => "strike".to_string(),
            ScoreAction::Spare => "spare".to_string(),
            ScoreAction::ClearFrame => "clear".to_string(),
            ScoreAction::NextFrame => "next".to_string(),
            ScoreAction::PrevFrame => "prev".to_string(),
        }
    }
}

/// Where a finished game is filed.
///
/// Opaque to scoring; only the persistence layer looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Destination {
    #[default]
    Casual,
    League(String),
}

impl Destination {
    pub fn league_name(&self) -> Option<&str> {
        match self {
            Destination::Casual => None,
            Destination::League(name) => Some(name.as_str()),
        }
    }

    pub fn is_league(&self) -> bool {
        matches!(self, Destination::League(_))
    }
}

/// Ordering for lists of finished games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    MostRecent,
    LeastRecent,
    HighestScore,
    LowestScore,
}

impl SortOrder {
    /// Parse sort order from string (case-insensitive, `-`/`_`/space ignored)
    ///
    /// ```
    /// use tenpin_types::SortOrder;
    ///
    /// assert_eq!(SortOrder::from_str("most-recent"), Some(SortOrder::MostRecent));
    /// assert_eq!(SortOrder::from_str("Highest Score"), Some(SortOrder::HighestScore));
    /// assert_eq!(SortOrder::from_str("random"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "mostrecent" => Some(SortOrder::MostRecent),
            "leastrecent" => Some(SortOrder::LeastRecent),
            "highestscore" => Some(SortOrder::HighestScore),
            "lowestscore" => Some(SortOrder::LowestScore),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::MostRecent => "mostRecent",
            SortOrder::LeastRecent => "leastRecent",
            SortOrder::HighestScore => "highestScore",
            SortOrder::LowestScore => "lowestScore",
        }
    }
}
