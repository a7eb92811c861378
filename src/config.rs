//! Rule configuration for a game session.

use std::str::FromStr;

use thiserror::Error;

/// When castling rights are withdrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CastlingRevocation {
    /// Only when a side actually castles; both of its rights go.
    #[default]
    OnCastleOnly,
    /// Also when a king moves, when a rook leaves its corner, or when a
    /// corner rook is captured.
    Standard,
}

/// Rule options chosen when a game is created.
///
/// `Default` withdraws castling rights only when a side castles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleSet {
    pub revocation: CastlingRevocation,
}

impl RuleSet {
    /// Standard revocation of castling rights.
    pub const fn standard() -> Self {
        Self {
            revocation: CastlingRevocation::Standard,
        }
    }

    /// Reads the `CHESS_RULES` environment variable.
    ///
    /// Unset means the default rule set; an unknown value is an error so a
    /// typo does not silently fall back.
    pub fn from_env() -> Result<Self, RuleSetError> {
        match std::env::var("CHESS_RULES") {
            Ok(value) => value.parse(),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(RuleSetError::NotUnicode),
        }
    }
}

impl FromStr for RuleSet {
    type Err = RuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "default" | "simple" => Ok(Self::default()),
            "standard" => Ok(Self::standard()),
            other => Err(RuleSetError::Unknown(other.to_string())),
        }
    }
}

/// Error type for selecting a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    #[error("unknown rule set '{0}' (expected 'simple' or 'standard')")]
    Unknown(String),
    #[error("CHESS_RULES is not valid unicode")]
    NotUnicode,
}
