//! Game engine and round state management.

use alloc::vec::Vec;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bankroll::Bankroll;
use crate::deck::Deck;
use crate::error::NextRoundError;
use crate::hand::{DealerHand, Hand};
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::DealerStep;
pub use state::RoundState;

/// A single-seat blackjack round engine.
///
/// The game owns the deck, both hands, the bankroll, and the round state;
/// commands drive the round lifecycle and queries expose snapshots for a
/// presentation layer. The rules are fixed: one deck, dealer stands on 17
/// soft or hard, blackjack pays triple the stake.
pub struct Game {
    /// Cards remaining in the current round's deck.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Session money and the staked bet.
    bankroll: Bankroll,
    /// Current round state.
    state: RoundState,
    /// Settlement of the last resolved round.
    result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with the given starting money and RNG seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, RoundState};
    ///
    /// let game = Game::new(100, 42);
    /// assert_eq!(game.state(), RoundState::AwaitingBet);
    /// assert_eq!(game.money(), 100);
    /// ```
    #[must_use]
    pub fn new(money: usize, seed: u64) -> Self {
        Self {
            deck: Deck::from_cards(Vec::new()),
            player: Hand::new(),
            dealer: DealerHand::new(),
            bankroll: Bankroll::new(money),
            state: RoundState::AwaitingBet,
            result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, with its hole-card visibility flag.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the player's current hand value.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    /// Returns the dealer's displayed value: only the up card counts while
    /// the hole card is hidden.
    #[must_use]
    pub fn dealer_visible_value(&self) -> u8 {
        self.dealer.visible_value()
    }

    /// Returns the spendable balance.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.bankroll.money()
    }

    /// Returns the currently staked bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bankroll.bet()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the settlement of the last resolved round.
    ///
    /// `Some` from the moment the round resolves until [`Game::next_round`]
    /// clears the table.
    #[must_use]
    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    /// Clears a resolved round and opens betting for the next one.
    ///
    /// Transitions to [`RoundState::BankruptTerminal`] instead when the
    /// bankroll is empty; a new [`Game`] is the only way out of that state.
    ///
    /// # Errors
    ///
    /// Returns an error unless the round is resolved.
    pub fn next_round(&mut self) -> Result<(), NextRoundError> {
        if self.state != RoundState::RoundResolved {
            return Err(NextRoundError::InvalidState);
        }

        self.deck = Deck::from_cards(Vec::new());
        self.player.clear();
        self.dealer.clear();
        self.result = None;

        if self.bankroll.is_broke() {
            debug!("bankroll empty, session over");
            self.state = RoundState::BankruptTerminal;
        } else {
            self.state = RoundState::AwaitingBet;
        }

        Ok(())
    }
}
