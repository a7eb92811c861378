//! Transition function: apply a legal move and produce the next position.

use log::{debug, warn};

use crate::config::{CastlingRevocation, RuleSet};
use crate::position::{Board, CastlingRights, KING_HOME_FILE, Kind, Move, Side, Square, Wing};

/// Applies `mv` with the default rule set.
///
/// `mv` must have been accepted by [`crate::rules::is_legal`]; legality is
/// not checked again. Returns a new board and the updated castling rights;
/// the input board is never touched.
pub fn apply_move(board: &Board, mv: Move, rights: CastlingRights) -> (Board, CastlingRights) {
    apply_move_with(board, mv, rights, &RuleSet::default())
}

/// Applies `mv` under `rules`. Same contract as [`apply_move`].
pub fn apply_move_with(
    board: &Board,
    mv: Move,
    rights: CastlingRights,
    rules: &RuleSet,
) -> (Board, CastlingRights) {
    let mut next = *board;
    let Some(piece) = board.piece_at(mv.from) else {
        warn!("{mv}: applied from an empty square, position unchanged");
        return (next, rights);
    };

    if piece.kind == Kind::King && mv.file_delta().abs() == 2 {
        let wing = if mv.file_delta() > 0 {
            Wing::KingSide
        } else {
            Wing::QueenSide
        };
        let home = mv.from.row();
        let rook_from = Square::at(wing.rook_file(), home);
        let rook_to = Square::at(wing.rook_target_file(), home);

        let rook = next.piece_at(rook_from);
        next.set(mv.from, None);
        next.set(mv.to, Some(piece));
        next.set(rook_from, None);
        next.set(rook_to, rook);
        debug!("{} castles {wing:?}", piece.side);

        return (next, rights.without_side(piece.side));
    }

    let captured = next.piece_at(mv.to);
    next.set(mv.from, None);
    next.set(mv.to, Some(piece));
    if let Some(captured) = captured {
        debug!("{mv}: {piece} captures {captured}");
    }

    let rights = match rules.revocation {
        CastlingRevocation::OnCastleOnly => rights,
        CastlingRevocation::Standard => revoke_on_move(board, mv, rights),
    };
    (next, rights)
}

/// Withdraws the rights an ordinary move invalidates under standard rules:
/// the king leaving its home square, a rook leaving its corner, or a piece
/// landing on an opponent's corner.
fn revoke_on_move(board: &Board, mv: Move, mut rights: CastlingRights) -> CastlingRights {
    if let Some(piece) = board.piece_at(mv.from)
        && piece.kind == Kind::King
        && mv.from == Square::at(KING_HOME_FILE, piece.side.home_row())
    {
        rights = rights.without_side(piece.side);
    }
    for side in [Side::White, Side::Black] {
        for wing in Wing::ALL {
            let corner = wing.rook_square(side);
            if mv.from == corner || mv.to == corner {
                rights = rights.without(side, wing);
            }
        }
    }
    rights
}
