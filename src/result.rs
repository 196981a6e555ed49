//! Round outcome and settlement types.

/// Outcome of a resolved round, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins: the dealer busted or the player's total is higher.
    Win,
    /// Player loses: the player busted or the dealer's total is higher.
    Lose,
    /// Push: equal totals, the stake is returned.
    Push,
    /// Player wins with a natural.
    Blackjack,
}

impl Outcome {
    /// Payout multiplier applied to the staked bet.
    ///
    /// The stake leaves the balance when the bet is placed, so a push pays 1
    /// and a win pays 2. A natural pays triple the stake.
    #[must_use]
    pub const fn multiplier(self) -> usize {
        match self {
            Self::Lose => 0,
            Self::Push => 1,
            Self::Win => 2,
            Self::Blackjack => 3,
        }
    }
}

/// Settlement snapshot of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The amount credited back to the bankroll.
    pub payout: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}
