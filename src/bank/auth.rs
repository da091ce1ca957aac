//! User credentials, and the simulated two-factor authentication.
//!
//! None of this is a security boundary: passwords are kept in clear and
//! compared as plain strings, and the 2FA code is "sent" to the same console
//! that has to type it back.

use super::{registry::Bank, Error};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

/// Number of digits in a two-factor code.
pub const CODE_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    password: String,
    customer_name: String,
}

/// Something able to produce two-factor codes.
pub trait CodeGenerator {
    fn generate(&mut self) -> String;
}

// Lets tests and callers pass a closure returning a known code.
impl<F: FnMut() -> String> CodeGenerator for F {
    fn generate(&mut self) -> String {
        self()
    }
}

/// Random 4-digit codes, reseeded from the wall clock (in seconds) on every
/// generation. Two codes generated within the same second are identical.
#[derive(Debug, Default)]
pub struct ClockSeededCodes;

impl CodeGenerator for ClockSeededCodes {
    fn generate(&mut self) -> String {
        let seed = chrono::Utc::now().timestamp() as u64;
        digits(&mut StdRng::seed_from_u64(seed))
    }
}

/// Random 4-digit codes from a fixed seed, for reproducible sessions.
#[derive(Debug)]
pub struct SeededCodes(StdRng);

impl SeededCodes {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl CodeGenerator for SeededCodes {
    fn generate(&mut self) -> String {
        digits(&mut self.0)
    }
}

fn digits(rng: &mut impl Rng) -> String {
    (0..CODE_LENGTH)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// A code waiting to be typed back by the user.
#[derive(Debug)]
pub struct TwoFactorChallenge {
    username: String,
    email: String,
    code: String,
}

impl TwoFactorChallenge {
    /// Where the code is "sent".
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn verify(&self, entered: &str) -> bool {
        let ok = entered.trim() == self.code;
        if ok {
            info!(username = %self.username, "two-factor authentication succeeded");
        } else {
            info!(username = %self.username, "two-factor authentication failed");
        }
        ok
    }
}

impl Bank {
    /// Add (or replace) a user allowed to log in as `customer_name`.
    pub fn add_user(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        customer_name: impl Into<String>,
    ) {
        self.users.insert(
            username.into(),
            Credentials {
                password: password.into(),
                customer_name: customer_name.into(),
            },
        );
    }

    /// Unknown users and wrong passwords are indistinguishable to the caller.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let ok = matches!(self.users.get(username), Some(credentials) if credentials.password == password);
        if ok {
            info!(username, "authentication succeeded");
        } else {
            info!(username, "authentication failed");
        }
        ok
    }

    /// Generate a code for `username`, addressed to the email of the customer
    /// behind that user.
    pub fn two_factor_challenge(
        &self,
        username: &str,
        codes: &mut impl CodeGenerator,
    ) -> Result<TwoFactorChallenge, Error> {
        let credentials = self
            .users
            .get(username)
            .ok_or_else(|| Error::UserNotFound(username.to_string()))?;

        let customer = self
            .customers
            .get(&credentials.customer_name)
            .ok_or_else(|| Error::CustomerNotFound(credentials.customer_name.clone()))?;

        let email = customer
            .email()
            .ok_or_else(|| Error::NoTwoFactorChannel(customer.name().to_string()))?;

        Ok(TwoFactorChallenge {
            username: username.to_string(),
            email: email.to_string(),
            code: codes.generate(),
        })
    }
}
