use crate::bank::Amount;

use super::account::{check_amount, Account, TransactionError};

impl Account {
    /// Credit the account, and return its new balance.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, TransactionError> {
        check_amount(amount)?;
        self.balance.add(amount)?;

        Ok(self.balance.amount())
    }
}

#[cfg(test)]
mod deposit_tests {
    use crate::bank::account::{account::TransactionError, balance::Balance};

    use super::Account;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_deposit_ok() {
        let mut acc = Account {
            id: 1,
            balance: Balance::new(dec!(100.00), dec!(0)),
        };

        let got = acc.deposit(dec!(50.00));
        assert_eq!(Ok(dec!(150.00)), got);
        assert_eq!(dec!(150.00), acc.balance());
    }

    #[test]
    fn test_deposit_invalid_amount() {
        for amount in vec![dec!(0), dec!(-0.01), dec!(-50)] {
            let mut acc = Account {
                id: 1,
                balance: Balance::new(dec!(99.99), dec!(0)),
            };

            let got = acc.deposit(amount);
            assert_eq!(Err(TransactionError::InvalidAmount(amount)), got);
            assert_eq!(dec!(99.99), acc.balance());
        }
    }

    #[test]
    fn test_deposit_overflow() {
        let very_big_number = Decimal::from_str("70000000000000000000000000000").unwrap();
        let mut acc = Account {
            id: 1,
            balance: Balance::new(very_big_number, dec!(0)),
        };

        let got = acc.deposit(very_big_number);
        assert_eq!(Err(TransactionError::Overflow), got);
        assert_eq!(very_big_number, acc.balance());
    }
}
