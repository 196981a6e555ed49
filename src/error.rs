//! Error types for game operations.

use thiserror::Error;

/// Error returned when dealing from an empty deck.
///
/// A correctly driven round can never exhaust the deck; the guard is
/// defensive and surfaced to the caller rather than treated as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deck is empty")]
pub struct EmptyDeckError;

/// Errors that can occur while placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No bet has been staked.
    #[error("no bet has been staked")]
    NoBet,
    /// The deck ran out of cards.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The deck ran out of cards.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur when clearing a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NextRoundError {
    /// Invalid game state for starting the next round.
    #[error("invalid game state for starting the next round")]
    InvalidState,
}
