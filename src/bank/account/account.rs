use crate::bank::{AccountId, Amount, Money};

use super::balance::Balance;
use rust_decimal_macros::dec;
use std::fmt;

/// Note: I chose to keep errors simple here.
/// The registry knows which account an operation was aimed at, so it adds
/// that context when it converts these into `bank::Error`.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TransactionError {
    /// Funds in the account are insufficient for a withdrawal or a transfer.
    #[error("Insufficient funds")]
    NotEnoughFunds,

    /// Amounts moved in or out of an account must be strictly positive.
    #[error("Invalid amount {0}")]
    InvalidAmount(Amount),

    /// Adding more money to the balance would overflow.
    #[error("Amount too large")]
    Overflow,
}

/// A balance-holding account, identified by an id allocated by the registry.
///
/// Accounts are only ever created by the registry, which also owns them: the
/// customer side only keeps their ids.
pub struct Account {
    pub(super) id: AccountId,
    pub(super) balance: Balance,
}

impl Account {
    pub(crate) fn new(id: AccountId, initial_balance: Amount) -> Self {
        Self {
            id,
            balance: Balance::new(initial_balance, dec!(0)),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Calculate the current balance of the account.
    pub fn balance(&self) -> Amount {
        self.balance.amount()
    }
}

/// Reject zero and negative amounts before they reach the balance.
pub(super) fn check_amount(amount: Amount) -> Result<(), TransactionError> {
    if amount <= dec!(0) {
        return Err(TransactionError::InvalidAmount(amount));
    }

    Ok(())
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account ID: {}, Balance: {}", self.id, Money(self.balance()))
    }
}

#[cfg(test)]
mod tests {
    use super::{check_amount, Account, TransactionError};
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_account() {
        let acc = Account::new(7, dec!(12.5));
        assert_eq!(7, acc.id());
        assert_eq!(dec!(12.5), acc.balance());
    }

    #[test]
    fn test_check_amount() {
        for (amount, want) in vec![
            (dec!(0.0001), Ok(())),
            (dec!(100), Ok(())),
            (dec!(0), Err(TransactionError::InvalidAmount(dec!(0)))),
            (dec!(-5.5), Err(TransactionError::InvalidAmount(dec!(-5.5)))),
        ] {
            assert_eq!(want, check_amount(amount));
        }
    }

    #[test]
    fn test_display() {
        for (balance, want) in vec![
            (dec!(100), "Account ID: 3, Balance: $100.00"),
            (dec!(0), "Account ID: 3, Balance: $0.00"),
            (dec!(12.345), "Account ID: 3, Balance: $12.35"),
            (dec!(0.1), "Account ID: 3, Balance: $0.10"),
        ] {
            let acc = Account::new(3, balance);
            assert_eq!(want, acc.to_string());
        }
    }
}
