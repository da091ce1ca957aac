use crate::bank::{Amount, Bank};
use crate::run::Variant;

use clap::Parser;
use std::path::PathBuf;

/// Log filter used when `RUST_LOG` isn't set. Refused operations are already
/// answered on the console, so only real faults show up at this level.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// A user allowed to log in, as `username:password:customer`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub password: String,
    pub customer_name: String,
}

impl std::str::FromStr for User {
    type Err = String;

    // The password sits between the first and the last colon, so it may
    // contain colons itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || format!("expected USERNAME:PASSWORD:CUSTOMER, got `{}`", s);

        let (username, rest) = s.split_once(':').ok_or_else(malformed)?;
        let (password, customer_name) = rest.rsplit_once(':').ok_or_else(malformed)?;
        if username.is_empty() || customer_name.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
            customer_name: customer_name.to_string(),
        })
    }
}

/// Every setting has a default, so running without arguments gives the
/// same bank as always: "MyBank", 0.5% compounded every 12 months, and two
/// demo users.
#[derive(Parser, Debug)]
#[command(name = "toy_bank")]
#[command(about = "A console bank: customers, accounts, deposits, withdrawals and transfers")]
pub struct Config {
    /// Name of the bank
    #[arg(long, env = "BANK_NAME", default_value = "MyBank")]
    pub bank_name: String,

    /// Interest rate, in percent (stored, never applied)
    #[arg(long, env = "BANK_INTEREST_RATE", default_value = "0.5")]
    pub interest_rate: Amount,

    /// Compounding period, in months (stored, never applied)
    #[arg(long, env = "BANK_COMPOUNDING_PERIOD", default_value_t = 12)]
    pub compounding_period: u32,

    /// Ask for a two-factor code after the password
    #[arg(long)]
    pub two_factor: bool,

    /// Users allowed to log in, as USERNAME:PASSWORD:CUSTOMER (repeatable)
    #[arg(
        long = "user",
        value_name = "USERNAME:PASSWORD:CUSTOMER",
        default_values = ["Yash_323:yash323$:Yash", "Arpit_17:Arpit323$:Arpit"]
    )]
    pub users: Vec<User>,

    /// Write a CSV statement of every account to this file on exit
    #[arg(long, value_name = "PATH")]
    pub statement: Option<PathBuf>,

    /// Draw two-factor codes from this seed instead of the clock, so a
    /// scripted session always gets the same codes
    #[arg(long, env = "BANK_CODE_SEED", value_name = "SEED")]
    pub code_seed: Option<u64>,
}

impl Config {
    pub fn variant(&self) -> Variant {
        if self.two_factor {
            Variant::TwoFactor
        } else {
            Variant::Basic
        }
    }

    /// An empty bank, with the configured users already registered.
    pub fn bank(&self) -> Bank {
        let mut bank = Bank::new(
            self.bank_name.clone(),
            self.interest_rate,
            self.compounding_period,
        );
        for user in &self.users {
            bank.add_user(
                user.username.clone(),
                user.password.clone(),
                user.customer_name.clone(),
            );
        }

        bank
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, User};
    use crate::run::Variant;

    use clap::Parser;
    use rust_decimal_macros::dec;
    use std::path::PathBuf;

    #[test]
    fn test_parse_user() {
        assert_eq!(
            Ok(User {
                username: "Yash_323".to_string(),
                password: "pa:ss".to_string(),
                customer_name: "Yash".to_string(),
            }),
            "Yash_323:pa:ss:Yash".parse()
        );

        for raw in vec!["Yash_323", "Yash_323:Yash", ":pw:Yash", "Yash_323:pw:"] {
            assert!(raw.parse::<User>().is_err(), "{}", raw);
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["toy_bank"]).unwrap();

        assert_eq!(Variant::Basic, config.variant());
        assert_eq!(None, config.statement);
        assert_eq!(None, config.code_seed);
        assert_eq!(2, config.users.len());

        let bank = config.bank();
        assert_eq!(dec!(0.5), bank.interest_rate());
        assert_eq!(12, bank.compounding_period());
        assert!(bank.authenticate("Yash_323", "yash323$"));
        assert!(bank.authenticate("Arpit_17", "Arpit323$"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "toy_bank",
            "--bank-name",
            "OtherBank",
            "--interest-rate",
            "1.25",
            "--compounding-period",
            "3",
            "--two-factor",
            "--user",
            "alice:secret:Alice",
            "--statement",
            "out.csv",
            "--code-seed",
            "3",
        ])
        .unwrap();

        assert_eq!(Variant::TwoFactor, config.variant());
        assert_eq!(Some(PathBuf::from("out.csv")), config.statement);
        assert_eq!(Some(3), config.code_seed);

        let bank = config.bank();
        assert_eq!("OtherBank", bank.name());
        assert_eq!(dec!(1.25), bank.interest_rate());
        assert_eq!(3, bank.compounding_period());
        assert!(bank.authenticate("alice", "secret"));
        assert!(!bank.authenticate("Yash_323", "yash323$"));
    }

    #[test]
    fn test_invalid_code_seed() {
        assert!(Config::try_parse_from(["toy_bank", "--code-seed", "abc"]).is_err());
    }

    #[test]
    fn test_invalid_user() {
        assert!(Config::try_parse_from(["toy_bank", "--user", "nobody"]).is_err());
    }
}
