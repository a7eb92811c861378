pub mod config;
pub mod game;
pub mod notation;
pub mod position;
pub mod rules;
pub mod transition;

/// Trait for asking an outside collaborator to suggest a move.
///
/// Abstracts over whatever actually produces suggestions (a remote
/// engine, a scripted mock), providing a uniform interface for
/// [`game::Game::play_suggestion`]. The oracle receives a board
/// description (see [`notation::board_description`]) and answers with a
/// four-character from/to string such as `"e2e4"`.
pub trait MoveOracle {
    /// Error type for failed or unanswered requests.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Ask for a move in the described position.
    ///
    /// May be slow; the game imposes no timeout and validates whatever
    /// reply comes back before applying it.
    fn suggest(&mut self, description: &str) -> Result<String, Self::Error>;
}

pub mod mock;
