//! Scoring tests over whole boards

use tenpin::core::{compute, GameBoard};
use tenpin::types::{FRAME_COUNT, LAST_FRAME, MAX_SCORE};

fn board(rows: &[&[Option<u8>]]) -> GameBoard {
    GameBoard::from_values(rows)
}

fn zeros_from(rows: &mut Vec<Vec<Option<u8>>>) {
    while rows.len() < LAST_FRAME {
        rows.push(vec![Some(0), Some(0)]);
    }
    if rows.len() == LAST_FRAME {
        rows.push(vec![Some(0), Some(0), Some(0)]);
    }
}

#[test]
fn test_perfect_game() {
    let mut rows: Vec<Vec<Option<u8>>> = vec![vec![Some(10), None]; LAST_FRAME];
    rows.push(vec![Some(10), Some(10), Some(10)]);
    let board = GameBoard::from_values(&rows);

    assert_eq!(board.total_score(), MAX_SCORE);
    assert!(board.frame_totals().iter().all(|&t| t == 30));
    assert!(board.is_complete());
}

#[test]
fn test_gutter_game() {
    let mut rows = Vec::new();
    zeros_from(&mut rows);
    let board = GameBoard::from_values(&rows);

    assert_eq!(board.total_score(), 0);
    assert_eq!(*board.frame_totals(), [0; FRAME_COUNT]);
    assert!(board.is_complete());
}

#[test]
fn test_spare_then_open() {
    let mut rows = vec![vec![Some(5), Some(5)], vec![Some(3), Some(4)]];
    zeros_from(&mut rows);
    let board = GameBoard::from_values(&rows);

    assert_eq!(board.frame_total(0), 13);
    assert_eq!(board.frame_total(1), 7);
    assert_eq!(board.total_score(), 20);
}

#[test]
fn test_strike_then_open() {
    let mut rows = vec![vec![Some(10), None], vec![Some(4), Some(3)]];
    zeros_from(&mut rows);
    let board = GameBoard::from_values(&rows);

    assert_eq!(board.frame_total(0), 17);
    assert_eq!(board.frame_total(1), 7);
    assert_eq!(board.total_score(), 24);
}

#[test]
fn test_double_strike_then_open() {
    let mut rows = vec![
        vec![Some(10), None],
        vec![Some(10), None],
        vec![Some(5), Some(2)],
    ];
    zeros_from(&mut rows);
    let board = GameBoard::from_values(&rows);

    assert_eq!(board.frame_total(0), 25);
    assert_eq!(board.frame_total(1), 17);
    assert_eq!(board.frame_total(2), 7);
    assert_eq!(board.total_score(), 49);
}

#[test]
fn test_ninth_frame_strike_reads_tenth_second_ball() {
    // Strike in frame 9 followed by a tenth-frame strike: the bonus is the
    // tenth frame's first two balls, never its third.
    let mut rows: Vec<Vec<Option<u8>>> = vec![vec![Some(0), Some(0)]; 8];
    rows.push(vec![Some(10), None]);
    rows.push(vec![Some(10), Some(3), Some(6)]);
    let board = GameBoard::from_values(&rows);

    assert_eq!(board.frame_total(8), 23);
    assert_eq!(board.frame_total(LAST_FRAME), 19);
    assert_eq!(board.total_score(), 42);
}

#[test]
fn test_eighth_frame_double_looks_at_tenth() {
    let mut rows: Vec<Vec<Option<u8>>> = vec![vec![Some(0), Some(0)]; 7];
    rows.push(vec![Some(10), None]);
    rows.push(vec![Some(10), None]);
    rows.push(vec![Some(7), Some(2), None]);
    let board = GameBoard::from_values(&rows);

    assert_eq!(board.frame_total(7), 27);
    assert_eq!(board.frame_total(8), 19);
    assert_eq!(board.frame_total(LAST_FRAME), 9);
}

#[test]
fn test_unset_balls_score_zero_in_progress() {
    let board = board(&[&[Some(10)], &[Some(6)]]);
    assert_eq!(board.frame_total(0), 16);
    assert_eq!(board.frame_total(1), 6);
    assert_eq!(board.total_score(), 22);
    assert!(!board.is_complete());
}

#[test]
fn test_compute_idempotent() {
    let board = board(&[
        &[Some(9), Some(1)],
        &[Some(10)],
        &[Some(10)],
        &[Some(3), Some(5)],
    ]);
    let first = compute(board.frames());
    let second = compute(board.frames());
    assert_eq!(first, second);
    assert_eq!(&first, board.score_card());
}

#[test]
fn test_running_totals() {
    let board = board(&[&[Some(10)], &[Some(4), Some(3)], &[Some(2), Some(2)]]);
    let running = board.score_card().running_totals();
    assert_eq!(&running[..3], &[17, 24, 28]);
    assert_eq!(running[LAST_FRAME], 28);
}
