use super::{
    account::account::Account,
    auth::Credentials,
    customer::{Customer, CustomerInfo},
    ids::AccountIds,
    round, AccountId, Amount, Error,
};

use rust_decimal_macros::dec;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::{debug, info};

/// The bank registry: owns every customer and every account, and routes
/// operations to them.
///
/// Accounts live in a single arena, ordered by id since ids only ever grow.
/// Customers refer to their accounts by id, never by reference.
pub struct Bank {
    name: String,

    // Stored for reporting only: nothing accrues interest.
    interest_rate: Amount,
    compounding_period: u32,

    // username -> password and customer name.
    pub(super) users: HashMap<String, Credentials>,

    // Customer names are unique, and iterated in order for reports.
    pub(super) customers: BTreeMap<String, Customer>,

    accounts: Vec<Account>,
    ids: AccountIds,
}

/// Balances of both sides after a successful transfer.
#[derive(Debug, PartialEq)]
pub struct Transfer {
    pub sender_balance: Amount,
    pub recipient_balance: Amount,
}

impl Bank {
    /// `interest_rate` is a percentage, `compounding_period` a number of months.
    pub fn new(name: impl Into<String>, interest_rate: Amount, compounding_period: u32) -> Self {
        Self {
            name: name.into(),
            interest_rate,
            compounding_period,
            users: HashMap::new(),
            customers: BTreeMap::new(),
            accounts: Vec::new(),
            ids: AccountIds::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interest_rate(&self) -> Amount {
        self.interest_rate
    }

    pub fn compounding_period(&self) -> u32 {
        self.compounding_period
    }

    /// Register a customer. Names are the lookup key, so a second customer
    /// with the same name is refused rather than replacing the first one.
    pub fn add_customer(&mut self, customer: Customer) -> Result<(), Error> {
        if self.customers.contains_key(customer.name()) {
            info!(customer = customer.name(), "customer already registered");
            return Err(Error::DuplicateCustomer(customer.name().to_string()));
        }

        info!(customer = customer.name(), "customer added");
        self.customers.insert(customer.name().to_string(), customer);

        Ok(())
    }

    /// Open a new account for an existing customer, and return its id.
    pub fn create_account(
        &mut self,
        customer_name: &str,
        initial_balance: Amount,
    ) -> Result<AccountId, Error> {
        let customer = self
            .customers
            .get_mut(customer_name)
            .ok_or_else(|| Error::CustomerNotFound(customer_name.to_string()))?;

        let initial_balance = round(initial_balance);
        if initial_balance < dec!(0) {
            return Err(Error::InvalidAmount(initial_balance));
        }

        let id = self.ids.allocate();
        customer.add_account(id);
        self.accounts.push(Account::new(id, initial_balance));

        info!(customer = customer_name, account_id = id, %initial_balance, "account created");

        Ok(id)
    }

    pub fn customer(&self, name: &str) -> Option<&Customer> {
        self.customers.get(name)
    }

    /// Customers, ordered by name.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.position(id).map(|index| &self.accounts[index])
    }

    /// Credit an account, and return its new balance.
    pub fn deposit(&mut self, account_id: AccountId, amount: Amount) -> Result<Amount, Error> {
        let amount = round(amount);
        let account = self.account_mut(account_id)?;

        match account.deposit(amount) {
            Ok(balance) => {
                info!(account_id, %amount, %balance, "deposit applied");
                Ok(balance)
            }
            Err(err) => {
                info!(account_id, %amount, error = %err, "deposit rejected");
                Err(err.into())
            }
        }
    }

    /// Debit an account, and return its new balance.
    pub fn withdraw(&mut self, account_id: AccountId, amount: Amount) -> Result<Amount, Error> {
        let amount = round(amount);
        let account = self.account_mut(account_id)?;

        match account.withdraw(amount) {
            Ok(balance) => {
                info!(account_id, %amount, %balance, "withdrawal applied");
                Ok(balance)
            }
            Err(err) => {
                info!(account_id, %amount, error = %err, "withdrawal rejected");
                Err(err.into())
            }
        }
    }

    /// Move money between two accounts. Both must exist, and the transfer
    /// applies to both of them or to neither.
    pub fn transfer(
        &mut self,
        sender_id: AccountId,
        recipient_id: AccountId,
        amount: Amount,
    ) -> Result<Transfer, Error> {
        let amount = round(amount);
        let (sender, recipient) = match (self.position(sender_id), self.position(recipient_id)) {
            (Some(sender), Some(recipient)) => (sender, recipient),
            _ => {
                info!(sender_id, recipient_id, "transfer between unknown accounts");
                return Err(Error::AccountsNotFound {
                    sender: sender_id,
                    recipient: recipient_id,
                });
            }
        };

        let result = if sender == recipient {
            self.accounts[sender]
                .check_transfer(amount)
                .map(|balance| Transfer {
                    sender_balance: balance,
                    recipient_balance: balance,
                })
        } else {
            let (sender, recipient) = self.pair_mut(sender, recipient);
            sender
                .transfer(recipient, amount)
                .map(|sender_balance| Transfer {
                    sender_balance,
                    recipient_balance: recipient.balance(),
                })
        };

        match result {
            Ok(transfer) => {
                info!(sender_id, recipient_id, %amount, "transfer applied");
                Ok(transfer)
            }
            Err(err) => {
                info!(sender_id, recipient_id, %amount, error = %err, "transfer rejected");
                Err(err.into())
            }
        }
    }

    /// A customer and its accounts, ready to be displayed.
    pub fn customer_info(&self, name: &str) -> Result<CustomerInfo<'_>, Error> {
        let customer = self
            .customers
            .get(name)
            .ok_or_else(|| Error::CustomerNotFound(name.to_string()))?;

        Ok(self.info_for(customer))
    }

    /// The whole bank, ready to be displayed.
    pub fn bank_info(&self) -> BankInfo<'_> {
        BankInfo {
            name: &self.name,
            customers: self.customers.values().map(|c| self.info_for(c)).collect(),
        }
    }

    fn info_for<'a>(&'a self, customer: &'a Customer) -> CustomerInfo<'a> {
        CustomerInfo {
            customer,
            accounts: customer
                .account_ids()
                .iter()
                .filter_map(|id| self.account(*id))
                .collect(),
        }
    }

    // Ids are allocated in increasing order and accounts are never removed,
    // so the arena is always sorted by id.
    fn position(&self, id: AccountId) -> Option<usize> {
        let found = self
            .accounts
            .binary_search_by_key(&id, |account| account.id())
            .ok();
        debug!(account_id = id, found = found.is_some(), "account lookup");
        found
    }

    fn account_mut(&mut self, id: AccountId) -> Result<&mut Account, Error> {
        match self.position(id) {
            Some(index) => Ok(&mut self.accounts[index]),
            None => {
                info!(account_id = id, "unknown account");
                Err(Error::AccountNotFound(id))
            }
        }
    }

    // Borrow two distinct accounts of the arena mutably at once.
    fn pair_mut(&mut self, first: usize, second: usize) -> (&mut Account, &mut Account) {
        if first < second {
            let (left, right) = self.accounts.split_at_mut(second);
            (&mut left[first], &mut right[0])
        } else {
            let (left, right) = self.accounts.split_at_mut(first);
            (&mut right[0], &mut left[second])
        }
    }
}

/// The bank name and every customer, ready to be displayed.
pub struct BankInfo<'a> {
    name: &'a str,
    customers: Vec<CustomerInfo<'a>>,
}

impl fmt::Display for BankInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bank Name: {}", self.name)?;
        writeln!(f, "Number of Customers: {}", self.customers.len())?;
        writeln!(f, "Customers:")?;
        for customer in &self.customers {
            write!(f, "{}", customer)?;
        }

        Ok(())
    }
}
