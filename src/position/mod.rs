//! Board model: squares, pieces, the 8×8 grid and castling rights.

use std::fmt;

mod castling;
mod piece;
mod square;

pub use castling::{CastlingRights, Wing};
pub(crate) use castling::KING_HOME_FILE;
pub use piece::{Kind, Piece, PieceParseError, Side};
pub use square::{Move, MoveParseError, Square, SquareParseError};

/// Back rank layout shared by both sides, a-file first.
const BACK_RANK: [Kind; 8] = [
    Kind::Rook,
    Kind::Knight,
    Kind::Bishop,
    Kind::Queen,
    Kind::King,
    Kind::Bishop,
    Kind::Knight,
    Kind::Rook,
];

/// An 8×8 arrangement of pieces.
///
/// Row 0 is rank 8, row 7 is rank 1. `Board` is `Copy`: every transition
/// produces a new board and never aliases the one it started from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard starting arrangement.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            board.cells[0][file] = Some(Piece::new(Side::Black, kind));
            board.cells[1][file] = Some(Piece::new(Side::Black, Kind::Pawn));
            board.cells[6][file] = Some(Piece::new(Side::White, Kind::Pawn));
            board.cells[7][file] = Some(Piece::new(Side::White, kind));
        }
        board
    }

    /// Builds a board from rows of two-character piece codes, empty string
    /// for an empty square (row 0 = rank 8).
    pub fn from_codes(rows: [[&str; 8]; 8]) -> Result<Self, PieceParseError> {
        let mut board = Self::empty();
        for (cells, codes) in board.cells.iter_mut().zip(rows) {
            for (cell, code) in cells.iter_mut().zip(codes) {
                *cell = match code {
                    "" => None,
                    code => Some(code.parse()?),
                };
            }
        }
        Ok(board)
    }

    /// Get the piece at a given square, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.file() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Places (or with `None`, removes) a piece.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.file() as usize] = piece;
    }

    /// Rows top to bottom (rank 8 first), each a-file first.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Piece>; 8]> {
        self.cells.iter()
    }

    /// Every occupied square with its piece, a8 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

/// Letter grid with rank and file labels, white pieces uppercase.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, " {} ", 8 - row)?;
            for cell in cells {
                let symbol = cell.map_or('·', Piece::fen_char);
                write!(f, " {symbol} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "    a  b  c  d  e  f  g  h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board")
            .field(&crate::notation::placement(self))
            .finish()
    }
}
