use crate::types::{FRAME_COUNT, LAST_FRAME_BALLS};

/// Plain copy of a game for redrawing a scoreboard.
///
/// Frames 1-9 leave their third cell `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub balls: [[Option<u8>; LAST_FRAME_BALLS]; FRAME_COUNT],
    pub frame_totals: [u32; FRAME_COUNT],
    pub total_score: u32,
    pub current_frame: usize,
    pub current_ball: usize,
    pub finished: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            balls: [[None; LAST_FRAME_BALLS]; FRAME_COUNT],
            frame_totals: [0; FRAME_COUNT],
            total_score: 0,
            current_frame: 0,
            current_ball: 0,
            finished: false,
        }
    }
}
