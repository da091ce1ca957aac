use super::{account::account::Account, AccountId};

use std::fmt;

/// A customer of the bank.
///
/// The customer doesn't own its accounts: the registry does. It only keeps
/// their ids, in the order they were opened.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    address: String,
    email: Option<String>,
    account_ids: Vec<AccountId>,
}

impl Customer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            email: None,
            account_ids: Vec::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn account_ids(&self) -> &[AccountId] {
        &self.account_ids
    }

    pub(crate) fn add_account(&mut self, account_id: AccountId) {
        self.account_ids.push(account_id);
    }
}

/// A customer together with its accounts, ready to be displayed.
pub struct CustomerInfo<'a> {
    pub(crate) customer: &'a Customer,
    pub(crate) accounts: Vec<&'a Account>,
}

impl fmt::Display for CustomerInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer Name: {}", self.customer.name)?;
        writeln!(f, "Address: {}", self.customer.address)?;
        if let Some(email) = &self.customer.email {
            writeln!(f, "Email: {}", email)?;
        }
        writeln!(f, "Number of Accounts: {}", self.accounts.len())?;
        writeln!(f, "Accounts:")?;
        for account in &self.accounts {
            writeln!(f, "{}", account)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Customer, CustomerInfo};
    use crate::bank::account::account::Account;
    use rust_decimal_macros::dec;

    #[test]
    fn test_add_account_keeps_order() {
        let mut customer = Customer::new("Yash", "Pune");
        for id in vec![4, 1, 9] {
            customer.add_account(id);
        }

        assert_eq!(&[4, 1, 9], customer.account_ids());
    }

    #[test]
    fn test_display_without_email() {
        let mut customer = Customer::new("Arpit", "Delhi");
        customer.add_account(1);
        let account = Account::new(1, dec!(100));

        let info = CustomerInfo {
            customer: &customer,
            accounts: vec![&account],
        };

        let want = "Customer Name: Arpit
Address: Delhi
Number of Accounts: 1
Accounts:
Account ID: 1, Balance: $100.00
";
        assert_eq!(want, info.to_string());
    }

    #[test]
    fn test_display_with_email() {
        let customer = Customer::new("Yash", "Pune").with_email("yash@example.com");
        assert_eq!(Some("yash@example.com"), customer.email());

        let info = CustomerInfo {
            customer: &customer,
            accounts: vec![],
        };

        let want = "Customer Name: Yash
Address: Pune
Email: yash@example.com
Number of Accounts: 0
Accounts:
";
        assert_eq!(want, info.to_string());
    }
}
