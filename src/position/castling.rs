use super::{Side, Square};

/// Which corner a king castles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wing {
    /// Toward the h-file rook, king lands on g.
    KingSide,
    /// Toward the a-file rook, king lands on c.
    QueenSide,
}

impl Wing {
    pub const ALL: [Wing; 2] = [Wing::KingSide, Wing::QueenSide];

    /// File the rook starts on.
    pub(crate) const fn rook_file(self) -> u8 {
        match self {
            Wing::KingSide => 7,
            Wing::QueenSide => 0,
        }
    }

    /// File the king lands on after castling.
    pub(crate) const fn king_target_file(self) -> u8 {
        match self {
            Wing::KingSide => 6,
            Wing::QueenSide => 2,
        }
    }

    /// File the rook lands on, adjacent to the king on the rook's side.
    pub(crate) const fn rook_target_file(self) -> u8 {
        match self {
            Wing::KingSide => 5,
            Wing::QueenSide => 3,
        }
    }

    /// Corner square holding `side`'s rook for this wing.
    pub(crate) fn rook_square(self, side: Side) -> Square {
        Square::at(self.rook_file(), side.home_row())
    }
}

/// File every king starts on (e).
pub(crate) const KING_HOME_FILE: u8 = 4;

/// Castling availability for both sides.
///
/// A plain value: transitions return an updated copy instead of
/// mutating shared flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    white_king_side: bool,
    white_queen_side: bool,
    black_king_side: bool,
    black_queen_side: bool,
}

impl CastlingRights {
    /// All four rights available.
    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    /// No rights available.
    pub const NONE: CastlingRights = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    /// Whether `side` may still castle toward `wing`.
    pub const fn has(self, side: Side, wing: Wing) -> bool {
        match (side, wing) {
            (Side::White, Wing::KingSide) => self.white_king_side,
            (Side::White, Wing::QueenSide) => self.white_queen_side,
            (Side::Black, Wing::KingSide) => self.black_king_side,
            (Side::Black, Wing::QueenSide) => self.black_queen_side,
        }
    }

    /// Copy of these rights with one flag cleared.
    #[must_use]
    pub const fn without(mut self, side: Side, wing: Wing) -> Self {
        match (side, wing) {
            (Side::White, Wing::KingSide) => self.white_king_side = false,
            (Side::White, Wing::QueenSide) => self.white_queen_side = false,
            (Side::Black, Wing::KingSide) => self.black_king_side = false,
            (Side::Black, Wing::QueenSide) => self.black_queen_side = false,
        }
        self
    }

    /// Copy of these rights with both of `side`'s flags cleared.
    #[must_use]
    pub const fn without_side(self, side: Side) -> Self {
        self.without(side, Wing::KingSide)
            .without(side, Wing::QueenSide)
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}
