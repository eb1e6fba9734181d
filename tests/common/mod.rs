//! Shared helpers for integration tests.

use tictactoe_engine::{GameState, apply_move, reset};

/// Number of nodes in the complete tic-tac-toe game tree, root included.
pub const GAME_TREE_NODES: usize = 549_946;

/// Plays `indices` in order from a fresh game.
pub fn play(indices: &[usize]) -> GameState {
    indices.iter().fold(reset(), |state, &i| apply_move(&state, i))
}

/// Visits every node of the game tree reachable from a fresh game.
pub fn for_each_reachable(mut visit: impl FnMut(&GameState)) {
    fn walk(state: &GameState, visit: &mut dyn FnMut(&GameState)) {
        visit(state);
        for index in 0..9 {
            let next = apply_move(state, index);
            if next != *state {
                walk(&next, visit);
            }
        }
    }

    walk(&reset(), &mut visit);
}
