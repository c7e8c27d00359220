//! Scoring module - ten-pin frame totals with strike/spare lookahead
//!
//! Bonuses are looked up frame-relative rather than over a flattened roll
//! list, which keeps the three-ball tenth frame self-contained:
//! - Strike (frames 1-9): 10 + the next two ball slots. When the next frame
//!   is also a strike the second bonus ball is the first ball of the frame
//!   after it, or the tenth frame's second ball when there is none.
//! - Spare (frames 1-9): 10 + the next frame's first ball.
//! - Tenth frame: plain sum of its three slots.
//!
//! Unthrown balls count as 0, so the computation is total over any board.

use crate::frame::Frame;
use crate::types::{FrameKind, FRAME_COUNT, LAST_FRAME, PIN_COUNT};

/// Result of scoring a whole board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreCard {
    /// Score attributed to each frame, bonuses included (not cumulative).
    pub frame_totals: [u32; FRAME_COUNT],
    pub total: u32,
}

impl ScoreCard {
    /// Running total after each frame
    pub fn running_totals(&self) -> [u32; FRAME_COUNT] {
        let mut out = [0u32; FRAME_COUNT];
        let mut acc = 0;
        for (slot, t) in out.iter_mut().zip(self.frame_totals.iter()) {
            acc += t;
            *slot = acc;
        }
        out
    }
}

/// Score every frame and the game total
pub fn compute(frames: &[Frame; FRAME_COUNT]) -> ScoreCard {
    let mut card = ScoreCard::default();
    for f in 0..FRAME_COUNT {
        card.frame_totals[f] = frame_total(frames, f);
    }
    card.total = card.frame_totals.iter().sum();
    card
}

/// Score of a single frame, bonus included
pub fn frame_total(frames: &[Frame; FRAME_COUNT], f: usize) -> u32 {
    let frame = &frames[f];
    if f >= LAST_FRAME {
        return frame.pinfall();
    }

    let rack = PIN_COUNT as u32;
    match frame.kind() {
        FrameKind::Strike => rack + strike_bonus(frames, f),
        FrameKind::Spare => rack + spare_bonus(frames, f),
        FrameKind::Open => (frame.ball(0).pins() + frame.ball(1).pins()) as u32,
    }
}

/// Next two ball slots after a strike in frame `f` (`f` < tenth)
fn strike_bonus(frames: &[Frame; FRAME_COUNT], f: usize) -> u32 {
    let next = &frames[f + 1];
    let bonus1 = next.ball(0);
    let bonus2 = if bonus1.is_full_rack() {
        match frames.get(f + 2) {
            Some(after) => after.ball(0),
            // The tenth frame keeps its own second ball.
            None => next.ball(1),
        }
    } else {
        next.ball(1)
    };
    (bonus1.pins() + bonus2.pins()) as u32
}

fn spare_bonus(frames: &[Frame; FRAME_COUNT], f: usize) -> u32 {
    frames[f + 1].ball(0).pins() as u32
}
