//! Domain error types

use thiserror::Error;

/// Which input of the scorer carried a bad token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchPosition {
    /// Month-establishing branch (月建)
    Month,
    /// Day branch (日辰)
    Day,
    /// Scored branch (useful spirit or moving line)
    Target,
}

impl BranchPosition {
    /// Get the position name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchPosition::Month => "month",
            BranchPosition::Day => "day",
            BranchPosition::Target => "target",
        }
    }
}

impl std::fmt::Display for BranchPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token that is not one of the twelve Earthly Branches
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {position} branch: {token:?}")]
pub struct InvalidBranchError {
    /// Input position the token was supplied for
    pub position: BranchPosition,
    /// The rejected token, as supplied
    pub token: String,
}

impl InvalidBranchError {
    /// Create a new error for the given position and token
    pub fn new(position: BranchPosition, token: impl Into<String>) -> Self {
        Self {
            position,
            token: token.into(),
        }
    }
}
