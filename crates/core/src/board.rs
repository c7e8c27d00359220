//! Game board - ten frames plus their derived totals
//!
//! Frame contents only change through [`GameBoard::record`] and
//! [`GameBoard::clear_frame`], and both rescore the whole board before
//! returning, so `frame_totals`/`total_score` always match the frames.

use crate::frame::Frame;
use crate::scoring::{compute, ScoreCard};
use crate::types::{PinCount, FRAME_COUNT};
use crate::validate::{check_roll, RollRejected};

/// Ten frames and their scores
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameBoard {
    frames: [Frame; FRAME_COUNT],
    card: ScoreCard,
}

impl GameBoard {
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(Frame::new),
            card: ScoreCard::default(),
        }
    }

    /// Rebuild a board from stored per-frame values (one row per frame).
    ///
    /// Intended for displaying finished games: rows are taken as-is without
    /// legality checks, and totals are recomputed from them.
    pub fn from_values<R: AsRef<[Option<u8>]>>(rows: &[R]) -> Self {
        let frames = std::array::from_fn(|i| {
            let row = rows.get(i).map(|r| r.as_ref()).unwrap_or_default();
            Frame::from_values(i, row)
        });
        let card = compute(&frames);
        Self { frames, card }
    }

    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    /// Frame by index; panics when `index` >= 10
    pub fn frame(&self, index: usize) -> &Frame {
        &self.frames[index]
    }

    pub fn score_card(&self) -> &ScoreCard {
        &self.card
    }

    pub fn frame_totals(&self) -> &[u32; FRAME_COUNT] {
        &self.card.frame_totals
    }

    /// Score of one frame; 0 for an index past the tenth frame
    pub fn frame_total(&self, index: usize) -> u32 {
        self.card.frame_totals.get(index).copied().unwrap_or(0)
    }

    pub fn total_score(&self) -> u32 {
        self.card.total
    }

    /// Stored form of the frames: one row of nullable pin counts per frame
    pub fn values(&self) -> Vec<Vec<Option<u8>>> {
        self.frames.iter().map(Frame::values).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.frames.iter().all(Frame::is_complete)
    }

    /// Validate and write one ball, then rescore.
    ///
    /// Later balls of the same frame are cleared. A rejected entry leaves the
    /// board untouched.
    pub fn record(&mut self, frame: usize, ball: usize, pins: u8) -> Result<(), RollRejected> {
        let Some(target) = self.frames.get_mut(frame) else {
            return Err(RollRejected::NoSuchFrame { frame });
        };
        check_roll(target, ball, pins)?;
        target.set(ball, PinCount::Thrown(pins));
        self.rescore();
        Ok(())
    }

    /// Reset every ball of one frame to unthrown, then rescore
    pub fn clear_frame(&mut self, frame: usize) {
        if let Some(target) = self.frames.get_mut(frame) {
            target.clear();
            self.rescore();
        }
    }

    fn rescore(&mut self) {
        self.card = compute(&self.frames);
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new()
    }
}
