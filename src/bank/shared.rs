use super::{registry::Transfer, AccountId, Amount, Bank, Error};

use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// A registry that can be shared between threads.
///
/// A single lock guards the whole registry: requests are served one at a time,
/// exactly as they would be from the console, whatever thread they come from.
#[derive(Clone)]
pub struct SharedBank {
    inner: Arc<Mutex<Bank>>,
}

impl SharedBank {
    pub fn new(bank: Bank) -> Self {
        Self {
            inner: Arc::new(Mutex::new(bank)),
        }
    }

    /// Lock the registry for any operation not wrapped below.
    pub fn lock(&self) -> MutexGuard<'_, Bank> {
        self.inner.lock()
    }

    /// Same as `Bank::deposit`. Nothing runs in the background: the call
    /// returns once the deposit is applied.
    pub fn deposit_parallel(&self, account_id: AccountId, amount: Amount) -> Result<Amount, Error> {
        self.lock().deposit(account_id, amount)
    }

    /// Same as `Bank::withdraw`, under the lock.
    pub fn withdraw_parallel(
        &self,
        account_id: AccountId,
        amount: Amount,
    ) -> Result<Amount, Error> {
        self.lock().withdraw(account_id, amount)
    }

    pub fn transfer(
        &self,
        sender_id: AccountId,
        recipient_id: AccountId,
        amount: Amount,
    ) -> Result<Transfer, Error> {
        self.lock().transfer(sender_id, recipient_id, amount)
    }

    pub fn balance(&self, account_id: AccountId) -> Result<Amount, Error> {
        self.lock()
            .account(account_id)
            .map(|account| account.balance())
            .ok_or(Error::AccountNotFound(account_id))
    }
}
