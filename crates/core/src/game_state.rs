//! Game state module - the live game being entered
//!
//! Ties the board to a turn cursor. Every operation runs to completion
//! (validate, write, rescore, move cursor) before returning, and a rejected
//! entry changes nothing.
//!
//! Cursor rules:
//! - Frames 1-9: a first-ball strike or any second ball moves to the next
//!   frame; any other first ball moves to the second ball.
//! - Tenth frame: each entry moves to the next ball slot, stopping at the
//!   third. The cursor never leaves the tenth frame on its own.
//! - Manual navigation is clamped to the ten frames and always lands on the
//!   first ball.

use crate::board::GameBoard;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Destination, ScoreAction, FRAME_COUNT, LAST_FRAME, LAST_FRAME_BALLS, PIN_COUNT,
};
use crate::validate::RollRejected;

/// Frame and ball awaiting input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TurnCursor {
    pub frame: usize,
    pub ball: usize,
}

impl TurnCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position after `pins` were entered at `(frame, ball)`
    fn after_entry(frame: usize, ball: usize, pins: u8) -> Self {
        if frame >= LAST_FRAME {
            return Self {
                frame: LAST_FRAME,
                ball: (ball + 1).min(LAST_FRAME_BALLS - 1),
            };
        }
        if ball == 0 && pins < PIN_COUNT {
            Self { frame, ball: 1 }
        } else {
            Self {
                frame: frame + 1,
                ball: 0,
            }
        }
    }
}

/// A game in progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: GameBoard,
    cursor: TurnCursor,
    destination: Destination,
}

impl GameState {
    /// Start an empty game filed under `destination` when finished
    pub fn new(destination: Destination) -> Self {
        Self {
            board: GameBoard::new(),
            cursor: TurnCursor::new(),
            destination,
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn cursor(&self) -> TurnCursor {
        self.cursor
    }

    pub fn current_frame(&self) -> usize {
        self.cursor.frame
    }

    pub fn current_ball(&self) -> usize {
        self.cursor.ball
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn frame_total(&self, frame: usize) -> u32 {
        self.board.frame_total(frame)
    }

    pub fn total_score(&self) -> u32 {
        self.board.total_score()
    }

    /// Every frame holds all the balls it requires
    pub fn is_finished(&self) -> bool {
        self.board.is_complete()
    }

    /// Enter `pins` at the cursor and advance it
    pub fn record_roll(&mut self, pins: u8) -> Result<(), RollRejected> {
        self.enter(self.cursor.ball, pins)
    }

    /// Enter ten pins at the cursor.
    ///
    /// Returns false when ten pins are not legal at the current ball.
    pub fn record_strike(&mut self) -> bool {
        self.record_roll(PIN_COUNT).is_ok()
    }

    /// Complete the rack left by the previous ball.
    ///
    /// Frames 1-9 always fill the second ball; the tenth frame fills the ball
    /// under the cursor (second or third). Returns false when there is no
    /// partial rack to pick up.
    pub fn record_spare(&mut self) -> bool {
        let frame = self.board.frame(self.cursor.frame);

        let ball = if frame.is_last() { self.cursor.ball } else { 1 };
        if ball == 0 || frame.fresh_rack_at(ball) {
            return false;
        }
        // A spare needs pins left standing after the previous ball.
        let previous = frame.ball(ball - 1);
        if previous.is_full_rack() {
            return false;
        }

        let pins = PIN_COUNT - previous.pins();
        self.enter(ball, pins).is_ok()
    }

    /// Reset every ball of the current frame; the cursor stays put
    pub fn clear_frame(&mut self) {
        self.board.clear_frame(self.cursor.frame);
    }

    pub fn advance_frame(&mut self) {
        self.cursor = TurnCursor {
            frame: (self.cursor.frame + 1).min(LAST_FRAME),
            ball: 0,
        };
    }

    pub fn retreat_frame(&mut self) {
        self.cursor = TurnCursor {
            frame: self.cursor.frame.saturating_sub(1),
            ball: 0,
        };
    }

    /// Move the cursor to the first ball of a frame (clamped)
    pub fn go_to_frame(&mut self, frame: usize) {
        self.cursor = TurnCursor {
            frame: frame.min(FRAME_COUNT - 1),
            ball: 0,
        };
    }

    /// Apply an entry action. Returns true when the game changed.
    pub fn apply_action(&mut self, action: ScoreAction) -> bool {
        match action {
            ScoreAction::Roll(pins) => self.record_roll(pins).is_ok(),
            ScoreAction::Strike => self.record_strike(),
            ScoreAction::Spare => self.record_spare(),
            ScoreAction::ClearFrame => {
                let had_balls = !self.board.frame(self.cursor.frame).is_empty();
                self.clear_frame();
                had_balls
            }
            ScoreAction::NextFrame => {
                let before = self.cursor;
                self.advance_frame();
                self.cursor != before
            }
            ScoreAction::PrevFrame => {
                let before = self.cursor;
                self.retreat_frame();
                self.cursor != before
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (row, frame) in out.balls.iter_mut().zip(self.board.frames().iter()) {
            *row = [None; LAST_FRAME_BALLS];
            for (cell, pins) in row.iter_mut().zip(frame.balls().iter()) {
                *cell = pins.value();
            }
        }
        out.frame_totals = *self.board.frame_totals();
        out.total_score = self.board.total_score();
        out.current_frame = self.cursor.frame;
        out.current_ball = self.cursor.ball;
        out.finished = self.is_finished();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn enter(&mut self, ball: usize, pins: u8) -> Result<(), RollRejected> {
        let frame = self.cursor.frame;
        self.board.record(frame, ball, pins)?;
        self.cursor = TurnCursor::after_entry(frame, ball, pins);
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Destination::Casual)
    }
}
