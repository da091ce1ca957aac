use crate::bank::{AccountId, Amount};

use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// Nothing was typed.
    #[error("a value is required")]
    Empty,

    /// The field isn't a number of the expected kind.
    #[error("`{0}` is not a valid {1}")]
    Format(String, &'static str),
}

// Every console field is typed on its own line; surrounding whitespace is
// never meaningful.
fn field(raw: &str) -> Result<&str, Error> {
    let field = raw.trim();
    if field.is_empty() {
        return Err(Error::Empty);
    }

    Ok(field)
}

/// Parse a money amount, e.g. `150`, `40.00` or `-3.5`.
///
/// Sign and range checks belong to the bank, not to parsing.
pub fn parse_amount(raw: &str) -> Result<Amount, Error> {
    let field = field(raw)?;
    Decimal::from_str(field).map_err(|_| Error::Format(field.to_string(), "amount"))
}

pub fn parse_account_id(raw: &str) -> Result<AccountId, Error> {
    let field = field(raw)?;
    field
        .parse()
        .map_err(|_| Error::Format(field.to_string(), "account ID"))
}

/// Parse a menu choice. Whether the number is an actual option is up to the menu.
pub fn parse_choice(raw: &str) -> Result<u32, Error> {
    let field = field(raw)?;
    field
        .parse()
        .map_err(|_| Error::Format(field.to_string(), "choice"))
}

#[test]
fn test_parse_amount_ok() {
    use rust_decimal_macros::dec;

    for (raw, want) in vec![
        ("150", dec!(150)),
        ("40.00", dec!(40.00)),
        ("  0.5\n", dec!(0.5)),
        ("-3.5", dec!(-3.5)),
    ] {
        assert_eq!(Ok(want), parse_amount(raw));
    }
}

#[test]
fn test_parse_amount_invalid() {
    for (raw, want_err) in vec![
        ("", Error::Empty),
        ("   \n", Error::Empty),
        ("abc", Error::Format("abc".to_string(), "amount")),
        ("12,50", Error::Format("12,50".to_string(), "amount")),
    ] {
        assert_eq!(Err(want_err), parse_amount(raw));
    }
}

#[test]
fn test_parse_account_id() {
    for (raw, want) in vec![
        ("1", Ok(1)),
        (" 42 \n", Ok(42)),
        ("-1", Err(Error::Format("-1".to_string(), "account ID"))),
        ("1.5", Err(Error::Format("1.5".to_string(), "account ID"))),
        ("", Err(Error::Empty)),
    ] {
        assert_eq!(want, parse_account_id(raw));
    }
}

#[test]
fn test_parse_choice() {
    assert_eq!(Ok(7), parse_choice("7\n"));
    assert_eq!(
        Err(Error::Format("deposit".to_string(), "choice")),
        parse_choice("deposit")
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        "`abc` is not a valid amount",
        Error::Format("abc".to_string(), "amount").to_string()
    );
    assert_eq!("a value is required", Error::Empty.to_string());
}
