//! Terminal-oriented text board renderer for debugging and diagnostics.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{PieceType, TeamColor};
use crate::moves::piece::Piece;

/// Render the board one row per line, row 0 first, columns left to right.
///
/// Dark pieces are `d`/`D` (Standard/King), Light pieces `l`/`L`, empty
/// squares `·`.
pub fn render_board(board: &Board) -> String {
    let width = board.width() as i32;
    let height = board.height() as i32;
    let mut out = String::new();

    out.push_str("  ");
    for col in 0..width {
        out.push_str(&format!("{}", col % 10));
        if col + 1 < width {
            out.push(' ');
        }
    }
    out.push('\n');

    for row in 0..height {
        out.push_str(&format!("{} ", row % 10));
        for col in 0..width {
            out.push(board.piece_at(col, row).map_or('·', piece_to_char));
            if col + 1 < width {
                out.push(' ');
            }
        }
        if row + 1 < height {
            out.push('\n');
        }
    }

    out
}

fn piece_to_char(piece: &Piece) -> char {
    match (piece.team(), piece.kind()) {
        (TeamColor::Dark, PieceType::Standard) => 'd',
        (TeamColor::Dark, PieceType::King) => 'D',
        (TeamColor::Light, PieceType::Standard) => 'l',
        (TeamColor::Light, PieceType::King) => 'L',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_rules::BoardConfig;
    use crate::game_state::checkers_types::TeamColor;
    use crate::moves::piece::Piece;

    #[test]
    fn renders_standard_setup() {
        let mut board = Board::new(BoardConfig::standard()).expect("standard board");
        board
            .assign_player_team(TeamColor::Dark)
            .expect("fresh board accepts a team");
        board.set_up_pieces().expect("setup should succeed");

        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "0 · l · l · l · l");
        assert_eq!(lines[4], "3 · · · · · · · ·");
        assert_eq!(lines[6], "5 d · d · d · d ·");
    }

    #[test]
    fn kings_render_in_upper_case() {
        let mut board = Board::new(BoardConfig::empty_standard()).expect("standard board");
        board
            .assign_player_team(TeamColor::Dark)
            .expect("fresh board accepts a team");
        board
            .place_piece(1, 0, Piece::king(TeamColor::Dark))
            .expect("empty square");
        assert!(render_board(&board).contains("0 · D ·"));
    }
}
