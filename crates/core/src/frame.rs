//! Frame module - ball slots for one of the ten frames
//!
//! Frames 0-8 hold two ball slots, the tenth frame holds three. Slots start
//! out `Unset` and are written one ball at a time by the game board.

use arrayvec::ArrayVec;

use crate::types::{
    BallMark, FrameKind, PinCount, BALLS_PER_FRAME, LAST_FRAME, LAST_FRAME_BALLS, PIN_COUNT,
};

/// Ball slots of one frame
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    slots: ArrayVec<PinCount, LAST_FRAME_BALLS>,
}

impl Frame {
    /// Create an empty frame shaped for the given frame index
    pub fn new(index: usize) -> Self {
        let len = if index >= LAST_FRAME {
            LAST_FRAME_BALLS
        } else {
            BALLS_PER_FRAME
        };
        let mut slots = ArrayVec::new();
        for _ in 0..len {
            slots.push(PinCount::Unset);
        }
        Self { slots }
    }

    /// Build a frame from stored values.
    ///
    /// Missing cells stay unset, extra cells are dropped and values above a
    /// full rack are treated as not thrown. No legality check is made.
    pub fn from_values(index: usize, values: &[Option<u8>]) -> Self {
        let mut frame = Self::new(index);
        for (slot, value) in frame.slots.iter_mut().zip(values.iter()) {
            *slot = PinCount::from(*value);
        }
        frame
    }

    /// Whether this is the three-ball tenth frame
    pub fn is_last(&self) -> bool {
        self.slots.len() == LAST_FRAME_BALLS
    }

    /// Number of ball slots (2 or 3)
    pub fn ball_count(&self) -> usize {
        self.slots.len()
    }

    /// Slot contents; slots that do not exist read as unset
    pub fn ball(&self, ball: usize) -> PinCount {
        self.slots.get(ball).copied().unwrap_or_default()
    }

    pub fn balls(&self) -> &[PinCount] {
        &self.slots
    }

    pub fn values(&self) -> Vec<Option<u8>> {
        self.slots.iter().map(PinCount::value).collect()
    }

    /// Sum of every thrown ball in this frame (no bonus)
    pub fn pinfall(&self) -> u32 {
        self.slots.iter().map(|p| p.pins() as u32).sum()
    }

    pub fn kind(&self) -> FrameKind {
        FrameKind::classify(self.ball(0), self.ball(1))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|p| !p.is_thrown())
    }

    /// Whether every ball this frame requires has been entered.
    ///
    /// Frames 0-8 finish on a first-ball strike or any second ball. The tenth
    /// frame needs a third ball once it holds a strike or spare.
    pub fn is_complete(&self) -> bool {
        if !self.is_last() {
            return self.ball(0).is_full_rack() || self.ball(1).is_thrown();
        }
        match self.kind() {
            FrameKind::Strike | FrameKind::Spare => self.ball(2).is_thrown(),
            FrameKind::Open => self.ball(1).is_thrown(),
        }
    }

    /// Whether a full rack is standing when `ball` is thrown.
    ///
    /// Only the tenth frame resets the rack mid-frame.
    pub fn fresh_rack_at(&self, ball: usize) -> bool {
        match ball {
            0 => true,
            1 => self.is_last() && self.ball(0).is_full_rack(),
            2 => {
                self.is_last()
                    && match self.kind() {
                        FrameKind::Strike => self.ball(1).is_full_rack(),
                        FrameKind::Spare => true,
                        FrameKind::Open => false,
                    }
            }
            _ => false,
        }
    }

    /// Scoreboard glyph for a thrown ball, `None` while unthrown
    pub fn mark(&self, ball: usize) -> Option<BallMark> {
        let pins = self.ball(ball).value()?;

        if pins == PIN_COUNT && self.fresh_rack_at(ball) {
            return Some(BallMark::Strike);
        }

        let completes_rack = match ball {
            0 => false,
            1 => self.kind() == FrameKind::Spare,
            _ => {
                !self.fresh_rack_at(2)
                    && self.fresh_rack_at(1)
                    && self.ball(1).pins() + pins == PIN_COUNT
            }
        };
        if completes_rack {
            Some(BallMark::Spare)
        } else {
            Some(BallMark::Pins(pins))
        }
    }

    /// Write one slot and clear every later slot of the frame.
    ///
    /// Returns false when the slot does not exist.
    pub(crate) fn set(&mut self, ball: usize, pins: PinCount) -> bool {
        if ball >= self.slots.len() {
            return false;
        }
        self.slots[ball] = pins;
        for later in self.slots.iter_mut().skip(ball + 1) {
            *later = PinCount::Unset;
        }
        true
    }

    pub(crate) fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = PinCount::Unset;
        }
    }
}
