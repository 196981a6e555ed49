//! Deck generation, shuffling, and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::EmptyDeckError;

/// A single 52-card deck.
///
/// [`Deck::generate`] produces the canonical ordering; [`Deck::shuffle`]
/// applies a uniform permutation and [`Deck::deal`] removes one card at a
/// time from the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order: suit-major, rank-minor.
    ///
    /// Exactly one card per (suit, rank) combination.
    #[must_use]
    pub fn generate() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// Cards are dealt from the end of the sequence. This is the seam for
    /// deterministic rounds and replays; no 52-card check is performed.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck into a uniformly random permutation.
    ///
    /// A single-pass Fisher-Yates via [`SliceRandom::shuffle`]; every
    /// ordering of the deck is equally likely.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] when no cards remain. A single round can
    /// never exhaust a full deck; the guard exists for misuse.
    pub fn deal(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, with the top of the deck last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
