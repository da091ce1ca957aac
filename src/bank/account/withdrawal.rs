use crate::bank::Amount;

use super::account::{check_amount, Account, TransactionError};

impl Account {
    /// Debit the account, and return its new balance.
    /// The balance can never go below zero: the withdrawal is refused instead.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount, TransactionError> {
        check_amount(amount)?;

        if amount > self.balance.amount() {
            return Err(TransactionError::NotEnoughFunds);
        }

        self.balance.subtract(amount)?;

        Ok(self.balance.amount())
    }
}

#[cfg(test)]
mod withdrawal_tests {
    use crate::bank::account::{account::TransactionError, balance::Balance};

    use super::Account;
    use rust_decimal_macros::dec;

    #[test]
    fn test_withdrawal_ok() {
        let mut acc = Account {
            id: 1,
            balance: Balance::new(dec!(3.0), dec!(0)),
        };

        let got = acc.withdraw(dec!(3.0));
        assert_eq!(Ok(dec!(0)), got);
        assert_eq!(dec!(0), acc.balance());
    }

    #[test]
    fn test_withdrawal_not_enough_funds() {
        let mut acc = Account {
            id: 1,
            balance: Balance::new(dec!(2.5), dec!(0)),
        };

        let got = acc.withdraw(dec!(3.0));
        assert_eq!(Err(TransactionError::NotEnoughFunds), got);
        assert_eq!(dec!(2.5), acc.balance());
    }

    #[test]
    fn test_withdrawal_invalid_amount() {
        for amount in vec![dec!(0), dec!(-1)] {
            let mut acc = Account {
                id: 1,
                balance: Balance::new(dec!(2.5), dec!(0)),
            };

            let got = acc.withdraw(amount);
            assert_eq!(Err(TransactionError::InvalidAmount(amount)), got);
            assert_eq!(dec!(2.5), acc.balance());
        }
    }

    #[test]
    // Open with 100, deposit 50, fail to withdraw 200, then empty the account.
    fn test_withdrawal_scenario() {
        let mut acc = Account::new(1, dec!(100.00));

        assert_eq!(Ok(dec!(150.00)), acc.deposit(dec!(50.00)));
        assert_eq!(
            Err(TransactionError::NotEnoughFunds),
            acc.withdraw(dec!(200.00))
        );
        assert_eq!(dec!(150.00), acc.balance());
        assert_eq!(Ok(dec!(0.00)), acc.withdraw(dec!(150.00)));
        assert_eq!(dec!(0), acc.balance());
    }
}
