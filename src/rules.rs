//! Legality engine.
//!
//! Decides whether a from/to pair is a legal move for the side to move
//! under a simplified rule set: piece movement, blocking, captures and
//! castling. Check, en passant and promotion are not modelled.

use log::trace;

use crate::position::{Board, CastlingRights, KING_HOME_FILE, Kind, Move, Side, Square, Wing};

/// Is `mv` legal for `side` on `board`?
///
/// Never fails: an empty origin, a piece of the wrong side or a
/// destination holding one of the mover's own pieces all yield `false`.
pub fn is_legal(board: &Board, mv: Move, side: Side, rights: &CastlingRights) -> bool {
    let Some(piece) = board.piece_at(mv.from) else {
        trace!("{mv}: no piece on {}", mv.from);
        return false;
    };
    if piece.side != side {
        trace!("{mv}: {piece} does not belong to {side}");
        return false;
    }
    if board.piece_at(mv.to).is_some_and(|target| target.side == side) {
        trace!("{mv}: {} holds a {side} piece", mv.to);
        return false;
    }

    let legal = match piece.kind {
        Kind::Pawn => pawn_move(board, mv, side),
        Kind::Knight => knight_move(mv),
        Kind::Bishop => bishop_move(board, mv),
        Kind::Rook => rook_move(board, mv),
        Kind::Queen => rook_move(board, mv) || bishop_move(board, mv),
        Kind::King => king_move(board, mv, side, rights),
    };
    if !legal {
        trace!("{mv}: not a {:?} move", piece.kind);
    }
    legal
}

/// Every square the piece on `from` may legally move to.
///
/// Empty when `from` is empty or holds a piece of the other side.
pub fn destinations(board: &Board, from: Square, side: Side, rights: &CastlingRights) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_legal(board, Move::new(from, to), side, rights))
        .collect()
}

/// All squares strictly between the endpoints are empty.
///
/// Walks one unit step at a time by the sign of each delta, so the
/// endpoints must share a file, a rank or a diagonal.
pub fn path_clear(board: &Board, mv: Move) -> bool {
    let (df, dr) = (mv.file_delta(), mv.row_delta());
    debug_assert!(df == 0 || dr == 0 || df.abs() == dr.abs());

    let (step_file, step_row) = (df.signum(), dr.signum());
    let mut current = mv.from;
    while let Some(next) = current.offset(step_file, step_row) {
        if next == mv.to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
    // Ran off the board without reaching `to`: not a line.
    false
}

fn pawn_move(board: &Board, mv: Move, side: Side) -> bool {
    let forward = side.forward();
    let (df, dr) = (mv.file_delta(), mv.row_delta());
    let target = board.piece_at(mv.to);

    match (df.abs(), target) {
        (0, None) if dr == forward => true,
        (0, None) if dr == 2 * forward => {
            mv.from.row() == side.pawn_row() && path_clear(board, mv)
        }
        // Same-side targets were already rejected, so any occupant is an opponent.
        (1, Some(_)) => dr == forward,
        _ => false,
    }
}

fn knight_move(mv: Move) -> bool {
    matches!(
        (mv.file_delta().abs(), mv.row_delta().abs()),
        (1, 2) | (2, 1)
    )
}

fn rook_move(board: &Board, mv: Move) -> bool {
    (mv.file_delta() == 0 || mv.row_delta() == 0) && path_clear(board, mv)
}

fn bishop_move(board: &Board, mv: Move) -> bool {
    mv.file_delta().abs() == mv.row_delta().abs() && path_clear(board, mv)
}

fn king_move(board: &Board, mv: Move, side: Side, rights: &CastlingRights) -> bool {
    if mv.file_delta().abs() <= 1 && mv.row_delta().abs() <= 1 {
        return true;
    }
    castling_wing(board, mv, side, rights).is_some()
}

/// The wing `mv` castles toward, if it is a permitted castling move.
///
/// Requires the king on its home square, the right still available, every
/// square between king and rook empty and an own rook on the corner.
/// Whether the king passes through an attacked square is not evaluated.
pub(crate) fn castling_wing(
    board: &Board,
    mv: Move,
    side: Side,
    rights: &CastlingRights,
) -> Option<Wing> {
    let home = side.home_row();
    if mv.from.row() != home || mv.from.file() != KING_HOME_FILE || mv.to.row() != home {
        return None;
    }
    let wing = Wing::ALL
        .into_iter()
        .find(|wing| wing.king_target_file() == mv.to.file())?;
    if !rights.has(side, wing) {
        trace!("{mv}: {side} may no longer castle {wing:?}");
        return None;
    }

    let rook_square = wing.rook_square(side);
    let rook_in_place = board
        .piece_at(rook_square)
        .is_some_and(|piece| piece.side == side && piece.kind == Kind::Rook);
    if !rook_in_place || !path_clear(board, Move::new(mv.from, rook_square)) {
        return None;
    }
    Some(wing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_description;
    use test_case::test_case;

    fn sq(s: &str) -> Square {
        s.parse().expect("test square is invalid")
    }

    fn mv(s: &str) -> Move {
        s.parse().expect("test move is invalid")
    }

    fn board(description: &str) -> Board {
        parse_description(description)
            .expect("test description is invalid")
            .0
    }

    fn legal(board: &Board, m: &str, side: Side) -> bool {
        is_legal(board, mv(m), side, &CastlingRights::default())
    }

    #[test_case("e2e3"; "single step")]
    #[test_case("e2e4"; "double step")]
    #[test_case("g1f3"; "knight")]
    #[test_case("b1a3"; "knight to rim")]
    fn test_opening_moves_accepted(m: &str) {
        assert!(legal(&Board::starting(), m, Side::White));
    }

    #[test_case("e2e5"; "pawn triple step")]
    #[test_case("e2d3"; "pawn diagonal without capture")]
    #[test_case("e2e1"; "pawn onto own king")]
    #[test_case("a1a3"; "rook through pawn")]
    #[test_case("c1e3"; "bishop through pawn")]
    #[test_case("d1d3"; "queen through pawn")]
    #[test_case("e1e2"; "king onto own pawn")]
    #[test_case("g1g3"; "knight straight")]
    #[test_case("e4e5"; "empty origin")]
    #[test_case("e7e5"; "opponent piece")]
    fn test_opening_moves_rejected(m: &str) {
        assert!(!legal(&Board::starting(), m, Side::White));
    }

    #[test]
    fn test_black_pawn_moves_down_the_board() {
        let start = Board::starting();

        assert!(legal(&start, "e7e5", Side::Black));
        assert!(legal(&start, "e7e6", Side::Black));
        assert!(!legal(&start, "e7e8", Side::Black));
        assert!(!legal(&start, "e2e4", Side::Black));
    }

    #[test]
    fn test_pawn_double_step_needs_clear_path() {
        let blocked_far = board("rnbqkbnr/pppp1ppp/8/8/4p3/8/PPPPPPPP/RNBQKBNR w - - 0 1");
        assert!(!legal(&blocked_far, "e2e4", Side::White));
        assert!(legal(&blocked_far, "e2e3", Side::White));

        let blocked_near = board("rnbqkbnr/pppp1ppp/8/8/8/4p3/PPPPPPPP/RNBQKBNR w - - 0 1");
        assert!(!legal(&blocked_near, "e2e4", Side::White));
        assert!(!legal(&blocked_near, "e2e3", Side::White));
    }

    #[test]
    fn test_pawn_double_step_only_from_starting_rank() {
        let advanced = board("rnbqkbnr/pppppppp/8/8/8/4P3/PPPP1PPP/RNBQKBNR w - - 0 1");

        assert!(!legal(&advanced, "e3e5", Side::White));
        assert!(legal(&advanced, "e3e4", Side::White));
    }

    #[test]
    fn test_pawn_captures_diagonally_forward_only() {
        let position = board("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w - - 0 1");

        assert!(legal(&position, "e4d5", Side::White));
        assert!(!legal(&position, "e4f5", Side::White));
        assert!(legal(&position, "d5e4", Side::Black));
        assert!(!legal(&position, "d5c4", Side::Black));

        // A pawn never captures straight ahead.
        let facing = board("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1");
        assert!(!legal(&facing, "e4e5", Side::White));
        assert!(!legal(&facing, "e5e4", Side::Black));

        // Nor backwards.
        let behind = board("4k3/8/8/4P3/3p4/8/8/4K3 w - - 0 1");
        assert!(!legal(&behind, "e5d4", Side::White));
    }

    #[test]
    fn test_knight_interior_has_eight_targets() {
        let position = board("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1");
        let targets = destinations(&position, sq("d4"), Side::White, &CastlingRights::NONE);

        let mut names: Vec<String> = targets.iter().map(ToString::to_string).collect();
        names.sort();
        assert_eq!(names, ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"]);
    }

    #[test_case("a1", 2; "corner")]
    #[test_case("h8", 2; "far corner")]
    #[test_case("b1", 3; "next to corner")]
    #[test_case("a4", 4; "edge")]
    #[test_case("b2", 4; "inner corner")]
    #[test_case("g7", 4; "inner far corner")]
    #[test_case("c3", 8; "interior")]
    fn test_knight_targets_at_edges(square: &str, expected: usize) {
        let mut position = Board::empty();
        position.set(sq(square), Some("wN".parse().unwrap()));

        let targets = destinations(&position, sq(square), Side::White, &CastlingRights::NONE);

        assert_eq!(targets.len(), expected, "targets from {square}: {targets:?}");
    }

    #[test_case("h4a5"; "no wrap across files")]
    #[test_case("a4h3"; "no wrap backwards")]
    fn test_knight_does_not_wrap(m: &str) {
        let mut position = Board::empty();
        position.set(mv(m).from, Some("wN".parse().unwrap()));

        assert!(!legal(&position, m, Side::White));
    }

    #[test_case("wR", "d4d8"; "rook up")]
    #[test_case("wR", "d4a4"; "rook left")]
    #[test_case("wB", "d4g7"; "bishop up right")]
    #[test_case("wB", "d4a1"; "bishop down left")]
    #[test_case("wQ", "d4d1"; "queen straight")]
    #[test_case("wQ", "d4h8"; "queen diagonal")]
    fn test_slider_open_lines(code: &str, m: &str) {
        let mut position = Board::empty();
        position.set(mv(m).from, Some(code.parse().unwrap()));

        assert!(legal(&position, m, Side::White));
    }

    #[test_case("wR", "d4d8", "d6", "wP"; "rook blocked by own piece")]
    #[test_case("wR", "d4d8", "d6", "bP"; "rook blocked by opponent piece")]
    #[test_case("wB", "d4g7", "f6", "bN"; "bishop blocked")]
    #[test_case("wB", "d4a1", "b2", "wN"; "bishop blocked by own piece")]
    #[test_case("wQ", "d4d1", "d2", "bQ"; "queen straight blocked")]
    #[test_case("wQ", "d4h8", "e5", "wK"; "queen diagonal blocked")]
    fn test_slider_blocked(code: &str, m: &str, blocker: &str, blocker_code: &str) {
        let mut position = Board::empty();
        position.set(mv(m).from, Some(code.parse().unwrap()));
        position.set(sq(blocker), Some(blocker_code.parse().unwrap()));

        assert!(!legal(&position, m, Side::White));
    }

    #[test_case("wR", "d4e6"; "rook off line")]
    #[test_case("wB", "d4d6"; "bishop straight")]
    #[test_case("wQ", "d4e6"; "queen knight jump")]
    fn test_slider_shape(code: &str, m: &str) {
        let mut position = Board::empty();
        position.set(mv(m).from, Some(code.parse().unwrap()));

        assert!(!legal(&position, m, Side::White));
    }

    #[test]
    fn test_slider_captures_first_blocker() {
        let position = board("4k3/3p4/8/8/3R4/8/8/4K3 w - - 0 1");

        assert!(legal(&position, "d4d7", Side::White));
        assert!(!legal(&position, "d4d8", Side::White));
    }

    #[test]
    fn test_king_steps_any_direction() {
        let position = board("4k3/8/8/8/3K4/8/8/8 w - - 0 1");
        let targets = destinations(&position, sq("d4"), Side::White, &CastlingRights::NONE);

        assert_eq!(targets.len(), 8);
        assert!(!legal(&position, "d4d6", Side::White));
        assert!(!legal(&position, "d4f4", Side::White));
    }

    #[test]
    fn test_king_may_step_next_to_enemy_king() {
        // King safety is not evaluated.
        let position = board("8/8/8/3k4/8/3K4/8/8 w - - 0 1");

        assert!(legal(&position, "d3d4", Side::White));
    }

    const CASTLE_READY: &str = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w - - 0 1";

    #[test_case("e1g1", Side::White; "white king side")]
    #[test_case("e1c1", Side::White; "white queen side")]
    #[test_case("e8g8", Side::Black; "black king side")]
    #[test_case("e8c8", Side::Black; "black queen side")]
    fn test_castling_accepted(m: &str, side: Side) {
        assert!(legal(&board(CASTLE_READY), m, side));
    }

    #[test_case("e1g1", Side::White, Wing::KingSide)]
    #[test_case("e1c1", Side::White, Wing::QueenSide)]
    #[test_case("e8g8", Side::Black, Wing::KingSide)]
    #[test_case("e8c8", Side::Black, Wing::QueenSide)]
    fn test_castling_needs_right(m: &str, side: Side, wing: Wing) {
        let rights = CastlingRights::ALL.without(side, wing);

        assert!(!is_legal(&board(CASTLE_READY), mv(m), side, &rights));
    }

    #[test]
    fn test_castling_right_of_other_wing_is_irrelevant() {
        let rights = CastlingRights::ALL.without(Side::White, Wing::QueenSide);

        assert!(is_legal(&board(CASTLE_READY), mv("e1g1"), Side::White, &rights));
    }

    #[test_case("f1"; "bishop square occupied")]
    #[test_case("g1"; "knight square occupied")]
    fn test_king_side_castling_blocked(blocker: &str) {
        let mut position = board(CASTLE_READY);
        position.set(sq(blocker), Some("wB".parse().unwrap()));

        assert!(!legal(&position, "e1g1", Side::White));
    }

    #[test_case("b1"; "knight square occupied")]
    #[test_case("c1"; "bishop square occupied")]
    #[test_case("d1"; "queen square occupied")]
    fn test_queen_side_castling_blocked(blocker: &str) {
        let mut position = board(CASTLE_READY);
        position.set(sq(blocker), Some("bN".parse().unwrap()));

        assert!(!legal(&position, "e1c1", Side::White));
    }

    #[test]
    fn test_castling_needs_own_rook_on_corner() {
        let missing = board("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K3 w - - 0 1");
        assert!(!legal(&missing, "e1g1", Side::White));

        let enemy_rook = board("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2r w - - 0 1");
        assert!(!legal(&enemy_rook, "e1g1", Side::White));

        let wrong_kind = board("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2N w - - 0 1");
        assert!(!legal(&wrong_kind, "e1g1", Side::White));
    }

    #[test]
    fn test_castling_only_from_home_square() {
        let displaced = board("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R2K3R w - - 0 1");

        assert!(!legal(&displaced, "d1f1", Side::White));
        assert!(!legal(&displaced, "d1b1", Side::White));
    }

    #[test]
    fn test_castling_ignores_attacked_squares() {
        // Black rook covers f1; castling through it is still accepted.
        let position = board("4k3/8/8/8/8/8/5r2/4K2R w - - 0 1");

        assert!(legal(&position, "e1g1", Side::White));
    }

    #[test_case("wP", "e2", "e3")]
    #[test_case("wN", "g1", "e2")]
    #[test_case("wB", "c1", "d2")]
    #[test_case("wR", "a1", "a2")]
    #[test_case("wQ", "d1", "d2")]
    #[test_case("wK", "e1", "f1")]
    #[test_case("wK", "e1", "h1"; "king onto own rook")]
    fn test_no_self_capture(code: &str, from: &str, to: &str) {
        let mut position = board(CASTLE_READY);
        position.set(sq(from), Some(code.parse().unwrap()));
        position.set(sq(to), Some("wR".parse().unwrap()));

        let m = Move::new(sq(from), sq(to));
        assert!(!is_legal(&position, m, Side::White, &CastlingRights::ALL));
    }

    #[test]
    fn test_is_legal_leaves_board_untouched() {
        let position = board(CASTLE_READY);
        let before = position;

        for from in Square::all() {
            for to in Square::all() {
                is_legal(&position, Move::new(from, to), Side::White, &CastlingRights::ALL);
            }
        }

        assert_eq!(position, before);
    }

    #[test]
    fn test_destinations_empty_for_opponent_piece() {
        let start = Board::starting();

        assert!(destinations(&start, sq("e7"), Side::White, &CastlingRights::ALL).is_empty());
        assert!(destinations(&start, sq("e4"), Side::White, &CastlingRights::ALL).is_empty());
        assert_eq!(
            destinations(&start, sq("e2"), Side::White, &CastlingRights::ALL),
            vec![sq("e4"), sq("e3")]
        );
    }
}
