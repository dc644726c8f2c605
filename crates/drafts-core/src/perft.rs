//! Perft (game tree node counting) for move generator regression testing.

use crate::game::GameState;
use crate::movegen::side_moves;
use crate::victory::WinResult;

/// Count the leaf nodes of the game tree at the given depth.
///
/// Depth 0 returns 1 (the current position). A decided game has no
/// further moves. Every generated move is expanded, as under
/// [`CapturePolicy::Optional`](crate::CapturePolicy::Optional).
pub fn perft(state: &GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    if state.is_over() {
        return 0;
    }

    let side = side_moves(state.board(), state.turn());

    if depth == 1 {
        return side.iter().map(|(_, moves)| moves.len() as u64).sum();
    }

    let mut nodes = 0u64;
    for (from, moves) in &side {
        for mv in moves {
            let mut child = state.clone();
            if child.apply_move(*from, mv).is_err() {
                continue;
            }
            if child.check_victory() == WinResult::None {
                child.advance_turn();
            }
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Run perft with a per-move breakdown.
///
/// Returns `(move, node_count)` pairs labelled `"<from> <move>"`, sorted by label.
pub fn divide(state: &GameState, depth: usize) -> Vec<(String, u64)> {
    let mut results = Vec::new();
    for (from, moves) in side_moves(state.board(), state.turn()) {
        for mv in &moves {
            let mut child = state.clone();
            if child.apply_move(from, mv).is_err() {
                continue;
            }
            if child.check_victory() == WinResult::None {
                child.advance_turn();
            }
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            results.push((format!("{from} {mv}"), count));
        }
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
