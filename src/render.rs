//! Plain-text rendering of a game state.

use crate::engine::{GameState, Outcome};

/// Status line for the current state.
pub fn status_line(state: &GameState) -> String {
    match state.outcome() {
        Outcome::Win { player, .. } => format!("Player {} wins!", player),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::InProgress => format!("Player {}'s turn", state.current_player()),
    }
}

/// Board grid, status line and, after a win, the winning line.
pub fn render(state: &GameState) -> String {
    let mut out = state.board().display();
    out.push_str("\n\n");
    out.push_str(&status_line(state));
    if let Some(line) = state.outcome().line() {
        out.push_str(&format!("\nWinning line: {}", line));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{apply_move, reset};

    fn play(indices: &[usize]) -> GameState {
        indices.iter().fold(reset(), |s, &i| apply_move(&s, i))
    }

    #[test]
    fn test_turn_status() {
        assert_eq!(status_line(&reset()), "Player P1's turn");
        assert_eq!(status_line(&play(&[4])), "Player P2's turn");
    }

    #[test]
    fn test_win_render() {
        let rendered = render(&play(&[0, 3, 1, 4, 2]));
        assert!(rendered.starts_with("X|X|X\n-+-+-\nO|O|5\n-+-+-\n6|7|8"));
        assert!(rendered.contains("Player P1 wins!"));
        assert!(rendered.ends_with("Winning line: 0 - 1 - 2"));
    }

    #[test]
    fn test_draw_status() {
        let state = play(&[0, 4, 2, 1, 3, 5, 7, 6, 8]);
        assert_eq!(status_line(&state), "It's a draw!");
        assert!(!render(&state).contains("Winning line"));
    }
}
