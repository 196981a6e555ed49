//! Round lifecycle states.

/// State of the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Accepting bets for the next round.
    AwaitingBet,
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer reveals the hole card and plays out the hand.
    DealerTurn,
    /// Round settled; waiting to be cleared.
    RoundResolved,
    /// The bankroll is empty; only a fresh session leaves this state.
    BankruptTerminal,
}
