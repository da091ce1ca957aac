pub mod account;
pub mod balance;
mod deposit;
mod transfer;
mod withdrawal;

pub use account::TransactionError;
