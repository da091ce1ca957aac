//! The interactive console session.
//!
//! A session registers one customer with two accounts, logs a user in, then
//! serves the actions menu until the user exits or the input ends.

use crate::bank::{auth::CodeGenerator, Bank, Customer, Money};
use crate::input::{self, parse_account_id, parse_amount};

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Which flavour of the session to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Password only, 6 menu options.
    Basic,

    /// Password then a two-factor code; customers have an email, and the
    /// menu gains a visualization entry.
    TwoFactor,
}

impl Variant {
    fn exit_choice(self) -> u32 {
        match self {
            Variant::Basic => 6,
            Variant::TwoFactor => 7,
        }
    }
}

#[derive(Debug, PartialEq)]
enum Action {
    Deposit,
    Withdraw,
    Transfer,
    CustomerInfo,
    BankInfo,
    Visualize,
    Exit,
}

impl Action {
    fn from_choice(variant: Variant, choice: u32) -> Option<Self> {
        match (variant, choice) {
            (_, 1) => Some(Action::Deposit),
            (_, 2) => Some(Action::Withdraw),
            (_, 3) => Some(Action::Transfer),
            (_, 4) => Some(Action::CustomerInfo),
            (_, 5) => Some(Action::BankInfo),
            (Variant::Basic, 6) => Some(Action::Exit),
            (Variant::TwoFactor, 6) => Some(Action::Visualize),
            (Variant::TwoFactor, 7) => Some(Action::Exit),
            _ => None,
        }
    }
}

// Whether the session goes on after a step. Running out of input stops it.
enum Flow {
    Continue,
    Stop,
}

struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    // For reports that already end with a newline.
    fn show(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.output, "{}", text)
    }

    /// Prompt, then read one line. `None` once the input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Prompt until the answer parses.
    fn ask_parsed<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<T, input::Error>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };

            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.say(format!("Invalid input: {}", err))?,
            }
        }
    }
}

/// Run a whole session against `bank`, reading answers from `input` and
/// writing prompts and results to `output`.
///
/// Business failures (unknown account, insufficient funds, bad password...)
/// are reported on `output` and never end in an `Err`: only I/O errors do.
pub fn run<R: BufRead, W: Write>(
    bank: &mut Bank,
    variant: Variant,
    codes: &mut impl CodeGenerator,
    input: R,
    output: W,
) -> io::Result<()> {
    let mut console = Console { input, output };

    if let Flow::Stop = register_customer(bank, variant, &mut console)? {
        return Ok(());
    }
    if let Flow::Stop = log_in(bank, variant, codes, &mut console)? {
        return Ok(());
    }

    loop {
        show_menu(variant, &mut console)?;
        let Some(line) = console.ask("Enter your choice: ")? else {
            return Ok(());
        };

        let action = input::parse_choice(&line)
            .ok()
            .and_then(|choice| Action::from_choice(variant, choice));

        let flow = match action {
            Some(Action::Deposit) => deposit(bank, &mut console)?,
            Some(Action::Withdraw) => withdraw(bank, &mut console)?,
            Some(Action::Transfer) => transfer(bank, &mut console)?,
            Some(Action::CustomerInfo) => customer_info(bank, &mut console)?,
            Some(Action::BankInfo) => {
                console.show(bank.bank_info())?;
                Flow::Continue
            }
            Some(Action::Visualize) => {
                console.say("Visualization generated.")?;
                Flow::Continue
            }
            Some(Action::Exit) => {
                console.say("Exiting...")?;
                Flow::Stop
            }
            None => {
                console.say(format!(
                    "Invalid choice. Please enter a number between 1 and {}.",
                    variant.exit_choice()
                ))?;
                Flow::Continue
            }
        };

        if let Flow::Stop = flow {
            return Ok(());
        }
    }
}

fn register_customer<R: BufRead, W: Write>(
    bank: &mut Bank,
    variant: Variant,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let Some(name) = console.ask("Enter customer name: ")? else {
        return Ok(Flow::Stop);
    };
    let Some(address) = console.ask("Enter customer address: ")? else {
        return Ok(Flow::Stop);
    };

    let mut customer = Customer::new(name.trim(), address.trim());
    if variant == Variant::TwoFactor {
        let Some(email) = console.ask("Enter customer email: ")? else {
            return Ok(Flow::Stop);
        };
        customer = customer.with_email(email.trim());
    }

    match bank.add_customer(customer) {
        Ok(()) => console.say("Customer added successfully.")?,
        Err(err) => console.say(format!("{}. Customer not added.", err))?,
    }

    for ordinal in ["first", "second"] {
        let prompt = format!("Enter initial balance for the {} account: ", ordinal);
        let Some(balance) = console.ask_parsed(&prompt, parse_amount)? else {
            return Ok(Flow::Stop);
        };

        match bank.create_account(name.trim(), balance) {
            Ok(id) => console.say(format!("Account created successfully. Account ID: {}", id))?,
            Err(err) => console.say(format!("{}. Cannot create account.", err))?,
        }
    }

    Ok(Flow::Continue)
}

fn log_in<R: BufRead, W: Write>(
    bank: &Bank,
    variant: Variant,
    codes: &mut impl CodeGenerator,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let Some(username) = console.ask("Enter username: ")? else {
        return Ok(Flow::Stop);
    };
    let Some(password) = console.ask("Enter password: ")? else {
        return Ok(Flow::Stop);
    };
    let username = username.trim();

    if !bank.authenticate(username, password.trim()) {
        console.say("Authentication failed. Invalid username or password.")?;
        return Ok(Flow::Stop);
    }
    console.say("Authentication successful.")?;

    if variant == Variant::Basic {
        return Ok(Flow::Continue);
    }

    let challenge = match bank.two_factor_challenge(username, codes) {
        Ok(challenge) => challenge,
        Err(err) => {
            console.say(format!("{}. Two-factor authentication failed.", err))?;
            return Ok(Flow::Stop);
        }
    };

    console.say(format!(
        "Sending 2FA code {} to {}...",
        challenge.code(),
        challenge.email()
    ))?;
    let Some(entered) = console.ask("Enter the 2FA code sent to your email: ")? else {
        return Ok(Flow::Stop);
    };

    if challenge.verify(&entered) {
        console.say("Two-factor authentication successful.")?;
        Ok(Flow::Continue)
    } else {
        console.say("Two-factor authentication failed. Incorrect code.")?;
        Ok(Flow::Stop)
    }
}

fn show_menu<R: BufRead, W: Write>(variant: Variant, console: &mut Console<R, W>) -> io::Result<()> {
    console.say("\nActions Menu:")?;
    console.say("1. Deposit")?;
    console.say("2. Withdraw")?;
    console.say("3. Transfer")?;
    console.say("4. Display Customer Information")?;
    console.say("5. Display Bank Information")?;
    match variant {
        Variant::Basic => console.say("6. Exit"),
        Variant::TwoFactor => {
            console.say("6. Generate Visualization")?;
            console.say("7. Exit")
        }
    }
}

fn deposit<R: BufRead, W: Write>(bank: &mut Bank, console: &mut Console<R, W>) -> io::Result<Flow> {
    let Some(account_id) = console.ask_parsed("Enter account ID: ", parse_account_id)? else {
        return Ok(Flow::Stop);
    };
    let Some(amount) = console.ask_parsed("Enter amount to deposit: ", parse_amount)? else {
        return Ok(Flow::Stop);
    };

    match bank.deposit(account_id, amount) {
        Ok(balance) => console.say(format!(
            "Deposit of {} successful. New balance: {}",
            Money(amount),
            Money(balance)
        ))?,
        Err(err) => console.say(format!("{}. Deposit failed.", err))?,
    }

    Ok(Flow::Continue)
}

fn withdraw<R: BufRead, W: Write>(bank: &mut Bank, console: &mut Console<R, W>) -> io::Result<Flow> {
    let Some(account_id) = console.ask_parsed("Enter account ID: ", parse_account_id)? else {
        return Ok(Flow::Stop);
    };
    let Some(amount) = console.ask_parsed("Enter amount to withdraw: ", parse_amount)? else {
        return Ok(Flow::Stop);
    };

    match bank.withdraw(account_id, amount) {
        Ok(balance) => console.say(format!(
            "Withdrawal of {} successful. New balance: {}",
            Money(amount),
            Money(balance)
        ))?,
        Err(err) => console.say(format!("{}. Withdrawal failed.", err))?,
    }

    Ok(Flow::Continue)
}

fn transfer<R: BufRead, W: Write>(bank: &mut Bank, console: &mut Console<R, W>) -> io::Result<Flow> {
    let Some(sender_id) = console.ask_parsed("Enter sender account ID: ", parse_account_id)? else {
        return Ok(Flow::Stop);
    };
    let Some(recipient_id) =
        console.ask_parsed("Enter recipient account ID: ", parse_account_id)?
    else {
        return Ok(Flow::Stop);
    };
    let Some(amount) = console.ask_parsed("Enter amount to transfer: ", parse_amount)? else {
        return Ok(Flow::Stop);
    };

    match bank.transfer(sender_id, recipient_id, amount) {
        Ok(transfer) => {
            console.say(format!("Transfer of {} successful.", Money(amount)))?;
            console.say(format!(
                "Sender's new balance: {}",
                Money(transfer.sender_balance)
            ))?;
            console.say(format!(
                "Recipient's new balance: {}",
                Money(transfer.recipient_balance)
            ))?;
        }
        Err(err) => console.say(format!("{}. Transfer failed.", err))?,
    }

    Ok(Flow::Continue)
}

fn customer_info<R: BufRead, W: Write>(
    bank: &Bank,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let Some(name) = console.ask("Enter customer name: ")? else {
        return Ok(Flow::Stop);
    };

    match bank.customer_info(name.trim()) {
        Ok(info) => console.show(info)?,
        Err(err) => console.say(format!("{}.", err))?,
    }

    Ok(Flow::Continue)
}
