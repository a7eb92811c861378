use std::collections::VecDeque;

use thiserror::Error;

use crate::MoveOracle;
use crate::position::Move;

/// Error when parsing an oracle script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid move in script: '{0}'")]
pub struct ScriptError(String);

/// Error returned by [`ScriptedOracle`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum OracleError {
    /// Every scripted reply has been handed out.
    #[error("no scripted suggestion left")]
    Exhausted,
}

/// A scriptable mock oracle that answers with queued moves.
///
/// Records every description it was asked about, so tests can check what
/// would have been sent to a real service. New script can be appended at
/// any time for interactive use.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOracle {
    pending: VecDeque<Move>,
    requests: Vec<String>,
}

impl ScriptedOracle {
    /// Create with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and queue additional replies.
    ///
    /// Format: four-character moves separated by whitespace,
    /// e.g. `"e2e4 g1f3"`. On error nothing is queued.
    pub fn push_script(&mut self, script: &str) -> Result<(), ScriptError> {
        let moves = script
            .split_whitespace()
            .map(|token| token.parse().map_err(|_| ScriptError(token.to_string())))
            .collect::<Result<Vec<Move>, _>>()?;
        self.pending.extend(moves);
        Ok(())
    }

    /// Replies not yet handed out.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Descriptions received so far, oldest first.
    #[inline]
    pub fn requests(&self) -> &[String] {
        &self.requests
    }
}

impl MoveOracle for ScriptedOracle {
    type Error = OracleError;

    fn suggest(&mut self, description: &str) -> Result<String, Self::Error> {
        self.requests.push(description.to_string());
        let mv = self.pending.pop_front().ok_or(OracleError::Exhausted)?;
        Ok(mv.to_string())
    }
}
