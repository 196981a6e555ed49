//! Hand scoring and hand representations.

use alloc::vec::Vec;

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut base: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        base = base.saturating_add(card.points());
        if card.is_ace() {
            aces += 1;
        }
    }

    // At most one ace can count as 11; a second would always bust.
    if aces > 0 && base <= 11 {
        (base + 10, true)
    } else {
        (base, false)
    }
}

/// Classification of a hand, recomputed after every card it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Under 21; more play is possible.
    Hold,
    /// Exactly 21 on the first two cards (a natural).
    Blackjack,
    /// Exactly 21 reached by drawing; pays as an ordinary win.
    TwentyOne,
    /// Over 21 with every ace counted low.
    Bust,
}

/// The player's hand.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current classification of the hand.
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Hold,
        }
    }

    /// Adds a card to the hand and reclassifies it.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let (value, _) = evaluate_cards(&self.cards);
        self.status = if value > 21 {
            HandStatus::Bust
        } else if value == 21 && self.cards.len() == 2 {
            HandStatus::Blackjack
        } else if value == 21 {
            HandStatus::TwentyOne
        } else {
            HandStatus::Hold
        };
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current classification of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Calculates the value of the hand.
    ///
    /// An ace counts as 11 when that does not bust the hand, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (an ace currently counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub const fn is_blackjack(&self) -> bool {
        matches!(self.status, HandStatus::Blackjack)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.status = HandStatus::Hold;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// The dealer's hand.
#[derive(Debug, Clone)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, including the hidden hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the hole card (second card).
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only the up card while the hole card is
    /// hidden).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.cards.first().map_or(0, |card| {
                if card.is_ace() { 11 } else { card.points() }
            })
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (an ace currently counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is a natural.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Whether the house rule requires another draw.
    ///
    /// The dealer draws on 16 or less and stands on 17 or more, soft or hard.
    #[must_use]
    pub fn must_draw(&self) -> bool {
        self.value() <= 16
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
