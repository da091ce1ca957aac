//! In-memory bank: accounts, customers and the registry routing operations
//! between them.
//!
//! Registry: owns every account and customer, and the user credentials.
//! Account: a balance, plus the deposit, withdrawal and transfer rules.
//! Customer: identity fields, and the ids of the accounts it owns.

pub mod account;
pub mod auth;
pub mod customer;
pub mod error;
pub mod ids;
pub mod registry;
pub mod shared;

pub use account::account::Account;
pub use customer::Customer;
pub use error::Error;
pub use registry::Bank;
pub use shared::SharedBank;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability: `HashMap<AccountId, ...>` says what the key is, `HashMap<u32, ...>`
// doesn't.
pub type AccountId = u32;

// A decimal library instead of f64, to be safe when dealing with money and
// to make the decimal precision easy to control.
pub type Amount = rust_decimal::Decimal;
pub const DECIMAL_PRECISION: u32 = 4;

/// Round an amount to the precision the bank works with.
pub fn round(amount: Amount) -> Amount {
    amount.round_dp(DECIMAL_PRECISION)
}

/// Displays an amount the way the console shows money: `$` and two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money(pub Amount);

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cents = self
            .0
            .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        write!(f, "${:.2}", cents)
    }
}

#[test]
// Decimal precision is 4 places. We should be unable to have more precise amounts.
fn test_round_decimal_precision() {
    use rust_decimal_macros::dec;

    for (raw_amount, want_amount) in vec![
        (dec!(1.0), dec!(1.0)),
        (dec!(0.999999), dec!(1.0)),
        (dec!(1.0000001), dec!(1.0)),
        (dec!(1.2345), dec!(1.2345)),
        (dec!(1.23459), dec!(1.2346)),
    ] {
        assert_eq!(want_amount, round(raw_amount));
    }
}

#[test]
fn test_money_display() {
    use rust_decimal_macros::dec;

    for (amount, want) in vec![
        (dec!(100), "$100.00"),
        (dec!(0), "$0.00"),
        (dec!(0.1), "$0.10"),
        (dec!(12.345), "$12.35"),
        (dec!(12.3449), "$12.34"),
        (dec!(-3.5), "$-3.50"),
    ] {
        assert_eq!(want, Money(amount).to_string());
    }
}
