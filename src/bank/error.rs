use super::{account::TransactionError, AccountId, Amount};

/// Everything the registry can refuse.
///
/// The `Display` messages are the ones the console shows, so they stay short
/// and user-facing; the console appends which operation failed.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Customer not found")]
    CustomerNotFound(String),

    #[error("A customer named {0} already exists")]
    DuplicateCustomer(String),

    #[error("Account not found")]
    AccountNotFound(AccountId),

    /// At least one side of a transfer doesn't exist.
    #[error("One or both accounts not found")]
    AccountsNotFound {
        sender: AccountId,
        recipient: AccountId,
    },

    #[error("User not found")]
    UserNotFound(String),

    /// The customer behind a user has no email to "send" a 2FA code to.
    #[error("No email on file for {0}")]
    NoTwoFactorChannel(String),

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Invalid amount {0}")]
    InvalidAmount(Amount),

    #[error("Amount too large")]
    Overflow,
}

impl From<TransactionError> for Error {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::NotEnoughFunds => Self::InsufficientFunds,
            TransactionError::InvalidAmount(amount) => Self::InvalidAmount(amount),
            TransactionError::Overflow => Self::Overflow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, TransactionError};
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_transaction_error() {
        for (err, want) in vec![
            (TransactionError::NotEnoughFunds, Error::InsufficientFunds),
            (
                TransactionError::InvalidAmount(dec!(-1)),
                Error::InvalidAmount(dec!(-1)),
            ),
            (TransactionError::Overflow, Error::Overflow),
        ] {
            assert_eq!(want, Error::from(err));
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!("Account not found", Error::AccountNotFound(3).to_string());
        assert_eq!(
            "One or both accounts not found",
            Error::AccountsNotFound {
                sender: 1,
                recipient: 2
            }
            .to_string()
        );
        assert_eq!(
            "Customer not found",
            Error::CustomerNotFound("Yash".to_string()).to_string()
        );
        assert_eq!("Insufficient funds", Error::InsufficientFunds.to_string());
    }
}
