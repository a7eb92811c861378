use log::{debug, info, warn};
use thiserror::Error;

use crate::MoveOracle;
use crate::config::RuleSet;
use crate::notation::{board_description, parse_suggestion};
use crate::position::{Board, CastlingRights, Move, MoveParseError, Piece, Side, Square};
use crate::rules::{destinations, is_legal};
use crate::transition::apply_move_with;

/// Error when a suggested move could not be obtained.
///
/// An illegal suggestion is not an error; see [`Game::play_suggestion`].
#[derive(Debug, Error)]
pub enum SuggestionError<E> {
    #[error("move oracle failed: {0}")]
    Oracle(E),
    #[error("malformed suggestion: {0}")]
    Malformed(#[from] MoveParseError),
}

/// A game in progress: the position, whose turn it is and what has been
/// played.
#[derive(Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    rights: CastlingRights,
    rules: RuleSet,
    history: Vec<Move>,
}

impl Game {
    #[inline]
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    /// Standard starting position under the given rules.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self::from_position(Board::starting(), Side::White, CastlingRights::default(), rules)
    }

    /// Creates a game from an existing position.
    pub fn from_position(
        board: Board,
        side_to_move: Side,
        rights: CastlingRights,
        rules: RuleSet,
    ) -> Self {
        Self {
            board,
            side_to_move,
            rights,
            rules,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.rights
    }

    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Get the piece at a given square, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// Whether `mv` is legal for the side to move.
    pub fn is_legal(&self, mv: Move) -> bool {
        is_legal(&self.board, mv, self.side_to_move, &self.rights)
    }

    /// Squares the piece on `from` may move to, for the side to move.
    pub fn destinations(&self, from: Square) -> Vec<Square> {
        destinations(&self.board, from, self.side_to_move, &self.rights)
    }

    /// The current position as a board description.
    pub fn description(&self) -> String {
        board_description(&self.board, self.side_to_move)
    }

    /// Plays `mv` if it is legal for the side to move.
    ///
    /// Returns `false` and leaves the game untouched otherwise.
    pub fn play(&mut self, mv: Move) -> bool {
        if !self.is_legal(mv) {
            debug!("{} tried illegal move {mv}", self.side_to_move);
            return false;
        }

        let (board, rights) = apply_move_with(&self.board, mv, self.rights, &self.rules);
        info!("{} plays {mv}", self.side_to_move);
        self.board = board;
        self.rights = rights;
        self.side_to_move = !self.side_to_move;
        self.history.push(mv);
        true
    }

    /// Asks `oracle` for a move and plays it if it is legal.
    ///
    /// Returns the move that was played, or `None` when the suggestion
    /// was well formed but illegal here.
    pub fn play_suggestion<O: MoveOracle>(
        &mut self,
        oracle: &mut O,
    ) -> Result<Option<Move>, SuggestionError<O::Error>> {
        let description = self.description();
        let reply = oracle
            .suggest(&description)
            .map_err(SuggestionError::Oracle)?;
        let mv = parse_suggestion(&reply).inspect_err(|err| {
            warn!("oracle replied '{reply}': {err}");
        })?;

        if self.play(mv) {
            Ok(Some(mv))
        } else {
            warn!("oracle suggested illegal move {mv} in {description}");
            Ok(None)
        }
    }

    /// Back to the starting position, keeping the rule set.
    pub fn reset(&mut self) {
        *self = Self::with_rules(self.rules);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("position", &self.description())
            .field("rights", &self.rights)
            .field("rules", &self.rules)
            .field("moves", &self.history.len())
            .finish()
    }
}
