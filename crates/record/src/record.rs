//! Finished-game records and leagues
//!
//! A [`GameRecord`] is built once from a board when the player saves, and is
//! never changed afterwards. Field names serialize in camelCase so stored
//! JSON reads like `{"id":..,"date":..,"scores":[[10,null],..],"totalScore":..}`.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{GameBoard, GameState};
use crate::types::{Destination, SortOrder, FRAME_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BowlingStyle {
    #[serde(rename = "One-Handed")]
    OneHanded,
    #[serde(rename = "Two-Handed")]
    TwoHanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GripStyle {
    #[serde(rename = "3-Finger")]
    ThreeFinger,
    #[serde(rename = "2-Finger")]
    TwoFinger,
}

/// Optional details the player attaches to a game
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowling_style: Option<BowlingStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grip_style: Option<GripStyle>,
    /// Balls used during the game
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bowling_balls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Lane 1-40; anything else is dropped when finalizing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane_number: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Highest lane number accepted in metadata
pub const MAX_LANE: u8 = 40;

impl GameMetadata {
    /// Trim text fields, drop blank ones and out-of-range lanes
    fn normalized(mut self) -> Self {
        fn clean(field: Option<String>) -> Option<String> {
            field
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        }
        self.location = clean(self.location);
        self.notes = clean(self.notes);
        self.lane_number = self.lane_number.filter(|l| (1..=MAX_LANE).contains(l));
        self.bowling_balls = self
            .bowling_balls
            .into_iter()
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .collect();
        self
    }
}

/// An immutable finished (or saved in-progress) game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    /// One row per frame: two cells for frames 1-9, three for the tenth
    pub scores: Vec<Vec<Option<u8>>>,
    pub total_score: u32,
    pub frame_totals: [u32; FRAME_COUNT],
    #[serde(flatten)]
    pub metadata: GameMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub league_name: Option<String>,
}

impl GameRecord {
    /// Snapshot a board into a new record with a fresh id
    pub fn from_board(
        board: &GameBoard,
        destination: &Destination,
        metadata: GameMetadata,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            scores: board.values(),
            total_score: board.total_score(),
            frame_totals: *board.frame_totals(),
            metadata: metadata.normalized(),
            league_name: destination.league_name().map(str::to_string),
        }
    }

    /// Read-only board for display, rescored from `scores`
    pub fn board(&self) -> GameBoard {
        GameBoard::from_values(&self.scores)
    }

    pub fn destination(&self) -> Destination {
        match &self.league_name {
            Some(name) => Destination::League(name.clone()),
            None => Destination::Casual,
        }
    }

    pub fn is_league_game(&self) -> bool {
        self.league_name.is_some()
    }
}

/// Finalize the game in progress, stamped with the current time
pub fn finalize(game: &GameState, metadata: GameMetadata) -> GameRecord {
    GameRecord::from_board(game.board(), game.destination(), metadata, Utc::now())
}

/// A named league games can be filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: Uuid,
    pub name: String,
    pub emoji: String,
    pub date_added: DateTime<Utc>,
}

impl League {
    pub fn new(name: &str, emoji: &str, date_added: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            emoji: emoji.trim().to_string(),
            date_added,
        }
    }
}

/// Sort records in place; ties keep their stored order
pub fn sort_records(records: &mut [GameRecord], order: SortOrder) {
    match order {
        SortOrder::MostRecent => records.sort_by_key(|r| Reverse(r.date)),
        SortOrder::LeastRecent => records.sort_by_key(|r| r.date),
        SortOrder::HighestScore => records.sort_by_key(|r| Reverse(r.total_score)),
        SortOrder::LowestScore => records.sort_by_key(|r| r.total_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, d, 19, 0, 0).unwrap()
    }

    fn record_with(total: u32, date: DateTime<Utc>) -> GameRecord {
        let mut r = GameRecord::from_board(
            &GameBoard::new(),
            &Destination::Casual,
            GameMetadata::default(),
            date,
        );
        r.total_score = total;
        r
    }

    #[test]
    fn test_from_board_copies_scores() {
        let mut game = GameState::new(Destination::League("Monday Mixers".to_string()));
        game.record_strike();
        game.record_roll(4).unwrap();
        game.record_roll(3).unwrap();

        let record = GameRecord::from_board(
            game.board(),
            game.destination(),
            GameMetadata::default(),
            day(4),
        );
        assert_eq!(record.scores.len(), FRAME_COUNT);
        assert_eq!(record.scores[0], vec![Some(10), None]);
        assert_eq!(record.scores[9], vec![None, None, None]);
        assert_eq!(record.frame_totals[0], 17);
        assert_eq!(record.total_score, 24);
        assert_eq!(record.league_name.as_deref(), Some("Monday Mixers"));
        assert!(record.is_league_game());
        assert_eq!(record.board(), *game.board());
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let game = GameState::default();
        let a = finalize(&game, GameMetadata::default());
        let b = finalize(&game, GameMetadata::default());
        assert_ne!(a.id, b.id);
        assert_eq!(a.destination(), Destination::Casual);
    }

    #[test]
    fn test_metadata_normalized() {
        let meta = GameMetadata {
            location: Some("  ".to_string()),
            notes: Some(" good lane ".to_string()),
            lane_number: Some(41),
            bowling_balls: vec!["Phaze II".to_string(), "".to_string()],
            ..GameMetadata::default()
        };
        let record = finalize(&GameState::default(), meta);
        assert_eq!(record.metadata.location, None);
        assert_eq!(record.metadata.notes.as_deref(), Some("good lane"));
        assert_eq!(record.metadata.lane_number, None);
        assert_eq!(record.metadata.bowling_balls, vec!["Phaze II".to_string()]);
    }

    #[test]
    fn test_json_is_field_named() {
        let meta = GameMetadata {
            bowling_style: Some(BowlingStyle::TwoHanded),
            grip_style: Some(GripStyle::TwoFinger),
            lane_number: Some(12),
            ..GameMetadata::default()
        };
        let record = GameRecord::from_board(&GameBoard::new(), &Destination::Casual, meta, day(1));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["totalScore"], 0);
        assert_eq!(json["frameTotals"].as_array().map(Vec::len), Some(FRAME_COUNT));
        assert_eq!(json["scores"][0], serde_json::json!([null, null]));
        assert_eq!(json["bowlingStyle"], "Two-Handed");
        assert_eq!(json["gripStyle"], "2-Finger");
        assert_eq!(json["laneNumber"], 12);
        assert!(json.get("leagueName").is_none());
        assert!(json.get("notes").is_none());

        let back: GameRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_sort_records() {
        let mut records = vec![
            record_with(150, day(2)),
            record_with(210, day(1)),
            record_with(99, day(3)),
        ];

        sort_records(&mut records, SortOrder::MostRecent);
        assert_eq!(records.iter().map(|r| r.total_score).collect::<Vec<_>>(), vec![99, 150, 210]);

        sort_records(&mut records, SortOrder::LeastRecent);
        assert_eq!(records.iter().map(|r| r.total_score).collect::<Vec<_>>(), vec![210, 150, 99]);

        sort_records(&mut records, SortOrder::HighestScore);
        assert_eq!(records.iter().map(|r| r.total_score).collect::<Vec<_>>(), vec![210, 150, 99]);

        sort_records(&mut records, SortOrder::LowestScore);
        assert_eq!(records.iter().map(|r| r.total_score).collect::<Vec<_>>(), vec![99, 150, 210]);
    }

    #[test]
    fn test_league_new_trims() {
        let league = League::new("  Thursday Trios ", " 🎳 ", day(5));
        assert_eq!(league.name, "Thursday Trios");
        assert_eq!(league.emoji, "🎳");
    }
}
