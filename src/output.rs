use crate::bank::{AccountId, Amount, Bank};

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write statement: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write statement: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct StatementRecord<'a> {
    customer: &'a str,

    #[serde(rename = "account")]
    account_id: AccountId,

    balance: Amount,
}

/// Writes one CSV row per account to the given stream, ordered by customer
/// name then by account id.
pub fn write_statement(output_stream: impl std::io::Write, bank: &Bank) -> Result<(), Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for customer in bank.customers() {
        for account in customer
            .account_ids()
            .iter()
            .filter_map(|id| bank.account(*id))
        {
            writer.serialize(StatementRecord {
                customer: customer.name(),
                account_id: account.id(),
                balance: account.balance(),
            })?;
        }
    }

    writer.flush()?;

    Ok(())
}
