use crate::bank::Amount;

use super::account::{check_amount, Account, TransactionError};

impl Account {
    /// Move `amount` from this account to `recipient`, and return the
    /// sender's new balance.
    ///
    /// Either both balances change, or neither does.
    pub fn transfer(
        &mut self,
        recipient: &mut Account,
        amount: Amount,
    ) -> Result<Amount, TransactionError> {
        self.check_transfer(amount)?;

        if !recipient.balance.can_add(amount) {
            return Err(TransactionError::Overflow);
        }

        // Due to the previous checks, neither side can fail anymore. So this
        // is safe to do without any rollback mechanisms.
        self.balance.subtract(amount)?;
        recipient.balance.add(amount)?;

        Ok(self.balance.amount())
    }

    /// Validate a transfer out of this account without applying it.
    ///
    /// A transfer from an account to itself goes through this alone: the
    /// debit and credit cancel out, so only the checks are observable.
    pub(crate) fn check_transfer(&self, amount: Amount) -> Result<Amount, TransactionError> {
        check_amount(amount)?;

        if amount > self.balance.amount() {
            return Err(TransactionError::NotEnoughFunds);
        }

        if !self.balance.can_subtract(amount) {
            return Err(TransactionError::Overflow);
        }

        Ok(self.balance.amount())
    }
}
