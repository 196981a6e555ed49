use log::debug;

use crate::deck::Deck;
use crate::error::{BetError, DealError};
use crate::hand::HandStatus;

use super::{Game, RoundState};

impl Game {
    /// Stakes a bet for the coming round.
    ///
    /// Repeated calls accumulate into a single stake.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is closed, the amount is zero, or the
    /// amount exceeds the balance. Nothing is mutated on failure.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if self.state != RoundState::AwaitingBet {
            return Err(BetError::InvalidState);
        }

        self.bankroll.place(amount)?;
        debug!("bet staked: {amount} (total {})", self.bankroll.bet());
        Ok(())
    }

    /// Starts a round from a freshly shuffled deck.
    ///
    /// Deals two cards to the player and two to the dealer (the second face
    /// down), then hands the turn to the player, or directly to the dealer
    /// when the player is dealt a natural.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is not open or no bet has been staked.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        self.ensure_can_deal()?;

        let mut deck = Deck::generate();
        deck.shuffle(&mut self.rng);
        self.begin_round(deck)
    }

    /// Starts a round from a prepared deck.
    ///
    /// Same flow as [`Game::start_round`] without generating or shuffling;
    /// the seam for deterministic rounds and replays.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is not open, no bet has been staked, or
    /// the deck holds fewer than the four cards of the opening deal. Nothing
    /// is mutated on failure.
    pub fn start_round_with_deck(&mut self, deck: Deck) -> Result<(), DealError> {
        self.ensure_can_deal()?;
        self.begin_round(deck)
    }

    fn ensure_can_deal(&self) -> Result<(), DealError> {
        if self.state != RoundState::AwaitingBet {
            return Err(DealError::InvalidState);
        }
        if self.bankroll.bet() == 0 {
            return Err(DealError::NoBet);
        }
        Ok(())
    }

    fn begin_round(&mut self, mut deck: Deck) -> Result<(), DealError> {
        // Player, dealer, player, dealer; the dealer's second card is the
        // hidden hole card. Drawn before any state changes so a short deck
        // leaves the game untouched.
        let first = deck.deal()?;
        let up = deck.deal()?;
        let second = deck.deal()?;
        let hole = deck.deal()?;

        self.state = RoundState::Dealing;
        self.player.clear();
        self.dealer.clear();
        self.result = None;
        self.deck = deck;

        self.player.add_card(first);
        self.dealer.add_card(up);
        self.player.add_card(second);
        self.dealer.add_card(hole);

        debug!(
            "round started: player {} vs dealer showing {}",
            self.player.value(),
            self.dealer.visible_value()
        );

        // A natural skips the player's turn; the dealer only reveals.
        if self.player.status() == HandStatus::Blackjack {
            self.state = RoundState::DealerTurn;
        } else {
            self.state = RoundState::PlayerTurn;
        }

        Ok(())
    }
}
