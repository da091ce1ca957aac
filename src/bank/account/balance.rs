use crate::bank::Amount;

use super::account::TransactionError;

/// A balance is a sum of credits (adds money to the balance)
/// and debits (remove money from the balance).
///
/// In this simple implementation, we only keep the running credit and debit
/// totals, and mutate them in place.
#[derive(Clone, Debug)]
pub struct Balance {
    credit: Amount,
    debit: Amount,
}

impl Balance {
    pub fn amount(&self) -> Amount {
        self.credit - self.debit
    }

    pub fn add(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.credit = self
            .credit
            .checked_add(amount)
            .ok_or(TransactionError::Overflow)?;

        Ok(())
    }

    pub fn subtract(&mut self, amount: Amount) -> Result<(), TransactionError> {
        self.debit = self
            .debit
            .checked_add(amount)
            .ok_or(TransactionError::Overflow)?;

        Ok(())
    }

    /// Whether `add` would succeed, without changing anything.
    pub fn can_add(&self, amount: Amount) -> bool {
        self.credit.checked_add(amount).is_some()
    }

    /// Whether `subtract` would succeed, without changing anything.
    pub fn can_subtract(&self, amount: Amount) -> bool {
        self.debit.checked_add(amount).is_some()
    }

    pub const fn new(credit: Amount, debit: Amount) -> Self {
        Self { credit, debit }
    }
}
