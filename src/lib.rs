//! A single-deck blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow:
//! betting, dealing, player actions, paced dealer play, and settlement
//! against a session bankroll. Rendering, audio, and timing are the
//! embedding layer's concern; the engine exposes commands and snapshot
//! queries and never blocks.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, RoundState};
//!
//! let mut game = Game::new(100, 42);
//! game.place_bet(10).unwrap();
//! game.start_round().unwrap();
//!
//! while game.state() == RoundState::PlayerTurn && game.player_value() < 17 {
//!     game.hit().unwrap();
//! }
//! if game.state() == RoundState::PlayerTurn {
//!     game.stand().unwrap();
//! }
//!
//! let _ = game.dealer_play().unwrap();
//! assert_eq!(game.state(), RoundState::RoundResolved);
//!
//! let result = game.result().unwrap();
//! assert!(result.payout <= 30);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use bankroll::Bankroll;
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, DealError, EmptyDeckError, NextRoundError};
pub use game::{DealerStep, Game, RoundState};
pub use hand::{DealerHand, Hand, HandStatus};
pub use result::{Outcome, RoundResult};
