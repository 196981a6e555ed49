//! Round-flow integration tests.

use twentyone::{
    ActionError, Bankroll, BetError, Card, DealError, DealerHand, DealerStep, Deck,
    EmptyDeckError, Game, Hand, HandStatus, NextRoundError, Outcome, RoundState, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that deals the given cards in order.
fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

/// Starts a 10-unit round dealing the given cards in order:
/// player, dealer up, player, dealer hole, then any extra draws.
fn start_rigged_round(money: usize, draws: &[Card]) -> Game {
    let mut game = Game::new(money, 0);
    game.place_bet(10).unwrap();
    game.start_round_with_deck(deck_from_draws(draws)).unwrap();
    game
}

#[test]
fn hand_scoring_classifications() {
    let mut natural = Hand::new();
    natural.add_card(card(Suit::Hearts, 1));
    natural.add_card(card(Suit::Spades, 13));
    assert_eq!(natural.value(), 21);
    assert_eq!(natural.status(), HandStatus::Blackjack);
    assert!(natural.is_soft());

    let mut aces = Hand::new();
    aces.add_card(card(Suit::Hearts, 1));
    aces.add_card(card(Suit::Clubs, 1));
    assert_eq!(aces.value(), 12);
    assert!(aces.is_soft());
    assert_eq!(aces.status(), HandStatus::Hold);

    let mut bust = Hand::new();
    bust.add_card(card(Suit::Hearts, 13));
    bust.add_card(card(Suit::Spades, 12));
    bust.add_card(card(Suit::Diamonds, 2));
    assert_eq!(bust.value(), 22);
    assert_eq!(bust.status(), HandStatus::Bust);

    let mut sevens = Hand::new();
    sevens.add_card(card(Suit::Hearts, 7));
    sevens.add_card(card(Suit::Spades, 7));
    sevens.add_card(card(Suit::Clubs, 7));
    assert_eq!(sevens.value(), 21);
    assert_eq!(sevens.status(), HandStatus::TwentyOne);
}

#[test]
fn dealer_policy_draw_boundary() {
    let mut sixteen = DealerHand::new();
    sixteen.add_card(card(Suit::Hearts, 10));
    sixteen.add_card(card(Suit::Spades, 6));
    assert!(sixteen.must_draw());

    let mut seventeen = DealerHand::new();
    seventeen.add_card(card(Suit::Hearts, 10));
    seventeen.add_card(card(Suit::Spades, 7));
    assert!(!seventeen.must_draw());

    // Soft 17 stands as well.
    let mut soft = DealerHand::new();
    soft.add_card(card(Suit::Hearts, 1));
    soft.add_card(card(Suit::Spades, 6));
    assert!(soft.is_soft());
    assert_eq!(soft.value(), 17);
    assert!(!soft.must_draw());
}

#[test]
fn dealer_hand_visibility() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Suit::Hearts, 9));
    dealer.add_card(card(Suit::Clubs, 7));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 9);

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 16);
}

#[test]
fn bankroll_resolves_the_multiplier_table() {
    let mut bankroll = Bankroll::new(100);

    bankroll.place(10).unwrap();
    assert_eq!(bankroll.resolve(Outcome::Lose), 0);
    assert_eq!(bankroll.money(), 90);

    bankroll.place(10).unwrap();
    assert_eq!(bankroll.resolve(Outcome::Push), 10);
    assert_eq!(bankroll.money(), 90);

    bankroll.place(10).unwrap();
    assert_eq!(bankroll.resolve(Outcome::Win), 20);
    assert_eq!(bankroll.money(), 100);

    bankroll.place(10).unwrap();
    assert_eq!(bankroll.resolve(Outcome::Blackjack), 30);
    assert_eq!(bankroll.money(), 120);
    assert_eq!(bankroll.bet(), 0);
}

#[test]
fn bet_errors_leave_bankroll_unchanged() {
    let mut game = Game::new(100, 1);

    assert_eq!(
        game.place_bet(150).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(game.money(), 100);
    assert_eq!(game.bet(), 0);

    assert_eq!(game.place_bet(0).unwrap_err(), BetError::ZeroBet);

    game.place_bet(30).unwrap();
    game.place_bet(20).unwrap();
    assert_eq!(game.money(), 50);
    assert_eq!(game.bet(), 50);
}

#[test]
fn start_round_requires_a_stake() {
    let mut game = Game::new(100, 1);
    assert_eq!(game.start_round().unwrap_err(), DealError::NoBet);

    game.place_bet(10).unwrap();
    game.start_round().unwrap();
    assert!(matches!(
        game.state(),
        RoundState::PlayerTurn | RoundState::DealerTurn
    ));
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), 48);
    assert!(!game.dealer_hand().is_hole_revealed());

    // Betting is closed once the round is underway.
    assert_eq!(game.place_bet(10).unwrap_err(), BetError::InvalidState);
    assert_eq!(game.start_round().unwrap_err(), DealError::InvalidState);
}

#[test]
fn invalid_state_commands_do_not_mutate() {
    let mut game = Game::new(100, 3);

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_step().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.next_round().unwrap_err(), NextRoundError::InvalidState);

    assert_eq!(game.state(), RoundState::AwaitingBet);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert_eq!(game.money(), 100);
    assert_eq!(game.bet(), 0);
}

#[test]
fn natural_blackjack_pays_triple() {
    let mut game = Game::new(100, 0);
    game.place_bet(100).unwrap();
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, 1),    // player
        card(Suit::Clubs, 9),     // dealer up
        card(Suit::Spades, 13),   // player
        card(Suit::Diamonds, 7),  // dealer hole
    ]))
    .unwrap();

    // A natural skips the player's turn entirely.
    assert_eq!(game.state(), RoundState::DealerTurn);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);

    assert!(matches!(game.dealer_step().unwrap(), DealerStep::Reveal(_)));
    assert_eq!(game.dealer_step().unwrap(), DealerStep::Stand);
    assert_eq!(game.state(), RoundState::RoundResolved);

    let result = *game.result().unwrap();
    assert_eq!(result.outcome, Outcome::Blackjack);
    assert_eq!(result.payout, 300);
    assert_eq!(game.money(), 300);
    assert_eq!(game.bet(), 0);

    // The dealer drew nothing to the natural.
    assert_eq!(game.dealer_hand().len(), 2);
}

#[test]
fn both_naturals_push() {
    let mut game = start_rigged_round(
        100,
        &[
            card(Suit::Hearts, 1),    // player
            card(Suit::Clubs, 1),     // dealer up
            card(Suit::Spades, 13),   // player
            card(Suit::Diamonds, 12), // dealer hole
        ],
    );

    let drawn = game.dealer_play().unwrap();
    assert!(drawn.is_empty());

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(result.payout, 10);
    assert_eq!(game.money(), 100);
}

#[test]
fn player_bust_loses_while_dealer_plays_out() {
    let mut game = start_rigged_round(
        100,
        &[
            card(Suit::Hearts, 10),   // player
            card(Suit::Clubs, 5),     // dealer up
            card(Suit::Spades, 9),    // player
            card(Suit::Diamonds, 11), // dealer hole
            card(Suit::Hearts, 6),    // player hit, 25, bust
            card(Suit::Clubs, 2),     // dealer draw, 17
        ],
    );

    let hit = game.hit().unwrap();
    assert_eq!(hit.rank, 6);
    assert_eq!(game.player_hand().status(), HandStatus::Bust);
    assert_eq!(game.state(), RoundState::DealerTurn);

    // The dealer still plays to completion for display.
    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(game.dealer_hand().value(), 17);

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::Lose);
    assert_eq!(result.payout, 0);
    assert_eq!(game.money(), 90);
}

#[test]
fn drawn_twenty_one_beats_a_dealer_twenty() {
    let mut game = start_rigged_round(
        100,
        &[
            card(Suit::Hearts, 7),    // player
            card(Suit::Clubs, 10),    // dealer up
            card(Suit::Spades, 7),    // player
            card(Suit::Diamonds, 10), // dealer hole
            card(Suit::Hearts, 7),    // player hit, 21
        ],
    );

    game.hit().unwrap();
    assert_eq!(game.player_hand().status(), HandStatus::TwentyOne);
    // 21 ends the player's turn automatically.
    assert_eq!(game.state(), RoundState::DealerTurn);

    game.dealer_play().unwrap();
    let result = game.result().unwrap();
    // A drawn 21 pays as an ordinary win, not a natural.
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.payout, 20);
    assert_eq!(game.money(), 110);
}

#[test]
fn drawn_twenty_one_pushes_a_dealer_natural() {
    let mut game = start_rigged_round(
        100,
        &[
            card(Suit::Hearts, 7),    // player
            card(Suit::Clubs, 1),     // dealer up
            card(Suit::Spades, 7),    // player
            card(Suit::Diamonds, 13), // dealer hole
            card(Suit::Hearts, 7),    // player hit, 21
        ],
    );

    game.hit().unwrap();
    game.dealer_play().unwrap();

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::Push);
    assert_eq!(game.money(), 100);
}

#[test]
fn dealer_bust_is_a_player_win() {
    let mut game = start_rigged_round(
        100,
        &[
            card(Suit::Hearts, 10),   // player
            card(Suit::Clubs, 6),     // dealer up
            card(Suit::Spades, 8),    // player
            card(Suit::Diamonds, 10), // dealer hole
            card(Suit::Hearts, 10),   // dealer draw, 26, bust
        ],
    );

    game.stand().unwrap();
    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert!(game.dealer_hand().is_bust());

    let result = game.result().unwrap();
    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(game.money(), 110);
}

#[test]
fn dealer_step_paces_one_draw_at_a_time() {
    let mut game = start_rigged_round(
        100,
        &[
            card(Suit::Hearts, 10),  // player
            card(Suit::Clubs, 2),    // dealer up
            card(Suit::Spades, 10),  // player
            card(Suit::Diamonds, 3), // dealer hole
            card(Suit::Hearts, 4),   // dealer draw, 9
            card(Suit::Clubs, 5),    // dealer draw, 14
            card(Suit::Spades, 6),   // dealer draw, 20
        ],
    );

    game.stand().unwrap();

    assert_eq!(
        game.dealer_step().unwrap(),
        DealerStep::Reveal(card(Suit::Diamonds, 3))
    );
    assert!(game.dealer_hand().is_hole_revealed());

    assert_eq!(
        game.dealer_step().unwrap(),
        DealerStep::Draw(card(Suit::Hearts, 4))
    );
    assert_eq!(
        game.dealer_step().unwrap(),
        DealerStep::Draw(card(Suit::Clubs, 5))
    );
    assert_eq!(
        game.dealer_step().unwrap(),
        DealerStep::Draw(card(Suit::Spades, 6))
    );
    assert_eq!(game.state(), RoundState::DealerTurn);

    assert_eq!(game.dealer_step().unwrap(), DealerStep::Stand);
    assert_eq!(game.state(), RoundState::RoundResolved);
    assert_eq!(game.result().unwrap().outcome, Outcome::Push);
}

#[test]
fn hit_on_an_empty_deck_surfaces_the_guard() {
    let mut game = start_rigged_round(
        100,
        &[
            card(Suit::Hearts, 2),   // player
            card(Suit::Clubs, 9),    // dealer up
            card(Suit::Spades, 3),   // player
            card(Suit::Diamonds, 7), // dealer hole
        ],
    );

    assert_eq!(game.state(), RoundState::PlayerTurn);
    assert_eq!(
        game.hit().unwrap_err(),
        ActionError::EmptyDeck(EmptyDeckError)
    );

    // The failed draw changed nothing.
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.state(), RoundState::PlayerTurn);
}

#[test]
fn next_round_clears_the_table() {
    let mut game = start_rigged_round(
        100,
        &[
            card(Suit::Hearts, 10),   // player
            card(Suit::Clubs, 10),    // dealer up
            card(Suit::Spades, 10),   // player
            card(Suit::Diamonds, 8),  // dealer hole
        ],
    );

    game.stand().unwrap();
    game.dealer_play().unwrap();
    assert_eq!(game.result().unwrap().outcome, Outcome::Win);

    game.next_round().unwrap();
    assert_eq!(game.state(), RoundState::AwaitingBet);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert!(game.result().is_none());
    assert_eq!(game.bet(), 0);
    assert_eq!(game.money(), 110);

    // The next round deals from a fresh 52-card deck.
    game.place_bet(10).unwrap();
    game.start_round().unwrap();
    assert_eq!(game.cards_remaining(), 48);
}

#[test]
fn bankruptcy_is_terminal() {
    let mut game = Game::new(10, 0);
    game.place_bet(10).unwrap();
    game.start_round_with_deck(deck_from_draws(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Clubs, 10),   // dealer up
        card(Suit::Spades, 6),   // player
        card(Suit::Diamonds, 9), // dealer hole
    ]))
    .unwrap();

    game.stand().unwrap();
    game.dealer_play().unwrap();
    assert_eq!(game.result().unwrap().outcome, Outcome::Lose);
    assert_eq!(game.money(), 0);

    game.next_round().unwrap();
    assert_eq!(game.state(), RoundState::BankruptTerminal);

    // Nothing works from the terminal state; a new session is required.
    assert_eq!(game.place_bet(10).unwrap_err(), BetError::InvalidState);
    assert_eq!(game.start_round().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.next_round().unwrap_err(), NextRoundError::InvalidState);
}

#[test]
fn short_deck_rejects_the_opening_deal_without_mutation() {
    let mut game = Game::new(100, 0);
    game.place_bet(10).unwrap();

    let err = game
        .start_round_with_deck(deck_from_draws(&[
            card(Suit::Hearts, 9),
            card(Suit::Clubs, 5),
            card(Suit::Diamonds, 7),
        ]))
        .unwrap_err();
    assert_eq!(err, DealError::EmptyDeck(EmptyDeckError));

    assert_eq!(game.state(), RoundState::AwaitingBet);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert_eq!(game.bet(), 10);
}
