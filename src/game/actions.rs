use log::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::HandStatus;

use super::{Game, RoundState};

impl Game {
    /// Player action: hit (draw one more card).
    ///
    /// The hand is re-scored after the draw; going bust or reaching 21 ends
    /// the player's turn and passes play to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, or if the deck is
    /// empty (unreachable in a normally driven round). Nothing is mutated on
    /// failure.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.deck.deal()?;
        self.player.add_card(card);
        debug!("player hits {card:?}, value {}", self.player.value());

        if matches!(
            self.player.status(),
            HandStatus::Bust | HandStatus::TwentyOne
        ) {
            self.state = RoundState::DealerTurn;
        }

        Ok(card)
    }

    /// Player action: stand (end the turn with the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        debug!("player stands on {}", self.player.value());
        self.state = RoundState::DealerTurn;
        Ok(())
    }
}
