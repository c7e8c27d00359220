//! Input validation - legality of a single ball entry
//!
//! Pure predicates over a frame's current contents. A rejected entry never
//! touches the frame; callers get a [`RollRejected`] describing why.

use thiserror::Error;

use crate::frame::Frame;
use crate::types::PIN_COUNT;

/// Why a pin count cannot be entered at a ball slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollRejected {
    #[error("pin count {pins} is outside 0..=10")]
    OutOfRange { pins: u8 },
    #[error("{pins} pins entered but only {standing} standing")]
    ExceedsStanding { pins: u8, standing: u8 },
    #[error("no second ball after a strike in frames 1-9")]
    AfterStrike,
    #[error("ball {ball} needs the previous ball entered first")]
    BallNotReady { ball: usize },
    #[error("frame has no ball slot {ball}")]
    NoSuchBall { ball: usize },
    #[error("no frame {frame} on the board")]
    NoSuchFrame { frame: usize },
}

/// Most pins that may be entered for `ball` given the frame's earlier balls.
///
/// - Frames 1-9: first ball 10, second ball `10 - first` (none after a strike)
/// - Tenth frame: first and second ball 10; the third needs the second
///   entered and is capped at 10 after a strike or spare, else `10 - second`
pub fn max_pins(frame: &Frame, ball: usize) -> Result<u8, RollRejected> {
    if ball >= frame.ball_count() {
        return Err(RollRejected::NoSuchBall { ball });
    }

    let first = frame.ball(0);
    let second = frame.ball(1);

    if !frame.is_last() {
        return match ball {
            0 => Ok(PIN_COUNT),
            _ if first.is_full_rack() => Err(RollRejected::AfterStrike),
            _ => Ok(PIN_COUNT.saturating_sub(first.pins())),
        };
    }

    match ball {
        0 | 1 => Ok(PIN_COUNT),
        _ => {
            if !second.is_thrown() {
                return Err(RollRejected::BallNotReady { ball });
            }
            if first.is_full_rack() || first.pins() + second.pins() == PIN_COUNT {
                Ok(PIN_COUNT)
            } else {
                Ok(PIN_COUNT.saturating_sub(second.pins()))
            }
        }
    }
}

/// Check a candidate entry, returning the reason it is illegal
pub fn check_roll(frame: &Frame, ball: usize, pins: u8) -> Result<(), RollRejected> {
    if pins > PIN_COUNT {
        return Err(RollRejected::OutOfRange { pins });
    }
    let standing = max_pins(frame, ball)?;
    if pins > standing {
        return Err(RollRejected::ExceedsStanding { pins, standing });
    }
    Ok(())
}

pub fn is_legal(frame: &Frame, ball: usize, pins: u8) -> bool {
    check_roll(frame, ball, pins).is_ok()
}
