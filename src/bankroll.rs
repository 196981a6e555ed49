//! Session bankroll and bet staking.

use crate::error::BetError;
use crate::result::Outcome;

/// Money held across rounds plus the stake of the round in progress.
///
/// The balance can never go negative: placing a bet moves money into the
/// stake up front, and [`Bankroll::resolve`] credits the payout back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bankroll {
    /// Spendable balance.
    money: usize,
    /// Stake of the round in progress.
    bet: usize,
}

impl Bankroll {
    /// Creates a bankroll with the given starting money and no stake.
    #[must_use]
    pub const fn new(money: usize) -> Self {
        Self { money, bet: 0 }
    }

    /// Returns the spendable balance, excluding the staked bet.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Returns the currently staked bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Moves `amount` from the balance into the stake.
    ///
    /// Repeated calls accumulate into a single stake.
    ///
    /// # Errors
    ///
    /// Returns an error if `amount` is zero or exceeds the balance; the
    /// bankroll is left untouched.
    pub const fn place(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.money {
            return Err(BetError::InsufficientFunds);
        }

        self.money -= amount;
        self.bet += amount;
        Ok(())
    }

    /// Settles the staked bet against a round outcome.
    ///
    /// Credits `bet x multiplier` back to the balance, clears the stake, and
    /// returns the amount credited.
    pub const fn resolve(&mut self, outcome: Outcome) -> usize {
        let payout = self.bet * outcome.multiplier();
        self.money += payout;
        self.bet = 0;
        payout
    }

    /// Returns whether the session is out of money.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.money == 0 && self.bet == 0
    }
}
