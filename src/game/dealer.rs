use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::HandStatus;
use crate::result::{Outcome, RoundResult};

use super::{Game, RoundState};

/// One step of the dealer's paced play.
///
/// The engine never sleeps; a presentation layer calls [`Game::dealer_step`]
/// at whatever cadence it wants and animates each returned step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The hole card was turned face up.
    Reveal(Card),
    /// The dealer drew one more card.
    Draw(Card),
    /// The dealer stands; the round is now resolved.
    Stand,
}

impl Game {
    /// Advances the dealer's play by exactly one step.
    ///
    /// The first call reveals the hole card. Each following call re-scores
    /// the dealer's hand and either draws one card (16 or less) or stands
    /// (17 or more, soft or hard), settling the round on the standing step.
    /// After a player natural the dealer only reveals; after a player bust
    /// the dealer still plays the hand out for display, though the outcome
    /// is already a loss.
    ///
    /// # Errors
    ///
    /// Returns an error outside the dealer's turn, or if the deck is empty
    /// (unreachable in a normally driven round).
    #[expect(
        clippy::missing_panics_doc,
        reason = "a dealt round always has a hole card"
    )]
    pub fn dealer_step(&mut self) -> Result<DealerStep, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        if !self.dealer.is_hole_revealed() {
            self.dealer.reveal_hole();
            let hole = self
                .dealer
                .hole_card()
                .copied()
                .expect("hole card dealt before the dealer's turn");
            debug!("dealer reveals {hole:?}, value {}", self.dealer.value());
            return Ok(DealerStep::Reveal(hole));
        }

        // A natural ends the round at the reveal; the dealer draws to
        // everything else, including a busted player.
        if self.player.status() != HandStatus::Blackjack && self.dealer.must_draw() {
            let card = self.deck.deal()?;
            self.dealer.add_card(card);
            debug!("dealer draws {card:?}, value {}", self.dealer.value());
            return Ok(DealerStep::Draw(card));
        }

        self.settle();
        Ok(DealerStep::Stand)
    }

    /// Reveals and plays out the dealer's hand in one call.
    ///
    /// Runs [`Game::dealer_step`] to completion and returns the cards the
    /// dealer drew. Headless callers and tests use this; a presentation
    /// layer paces the steps itself.
    ///
    /// # Errors
    ///
    /// Returns an error outside the dealer's turn, or if the deck runs out
    /// mid-draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        let mut drawn = Vec::new();

        loop {
            match self.dealer_step()? {
                DealerStep::Reveal(_) => {}
                DealerStep::Draw(card) => drawn.push(card),
                DealerStep::Stand => return Ok(drawn),
            }
        }
    }

    /// Compares the final hands, pays out the stake, and resolves the round.
    fn settle(&mut self) {
        let player_value = self.player.value();
        let dealer_value = self.dealer.value();

        let outcome = if self.player.status() == HandStatus::Bust {
            Outcome::Lose
        } else if self.player.is_blackjack() && !self.dealer.is_blackjack() {
            Outcome::Blackjack
        } else if self.player.is_blackjack() && self.dealer.is_blackjack() {
            Outcome::Push
        } else if self.dealer.is_bust() || dealer_value < player_value {
            Outcome::Win
        } else if dealer_value == player_value {
            Outcome::Push
        } else {
            Outcome::Lose
        };

        let payout = self.bankroll.resolve(outcome);
        debug!("round resolved: {outcome:?}, player {player_value} vs dealer {dealer_value}, payout {payout}");

        self.result = Some(RoundResult {
            outcome,
            payout,
            player_value,
            dealer_value,
        });
        self.state = RoundState::RoundResolved;
    }
}
