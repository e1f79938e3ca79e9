use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{Budget, CategoryKind, Ledger, LedgerError, Transaction};

/// One line of ledger input, tagged by record type.
///
/// Amounts travel as decimal strings so no precision is lost in transit.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerRecord {
    Account {
        id: u64,
        name: String,
        #[serde(default)]
        balance: Option<String>,
    },
    Category {
        id: u64,
        name: String,
        kind: CategoryKind,
    },
    Transaction {
        id: u64,
        account: u64,
        category: u64,
        amount: String,
        date: NaiveDate,
        #[serde(default)]
        description: String,
    },
    Budget {
        id: u64,
        category: u64,
        limit: String,
        month: u32,
        year: i32,
    },
}

fn parse_amount(s: &str) -> Result<Decimal, LedgerError> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidAmount(s.to_string()))
}

/// Parse one JSONL line into a record.
pub fn parse_line(line: &str) -> Result<LedgerRecord, LedgerError> {
    Ok(serde_json::from_str(line)?)
}

impl Ledger {
    /// Apply a parsed record to the ledger.
    pub fn apply(&mut self, record: LedgerRecord) -> Result<(), LedgerError> {
        match record {
            LedgerRecord::Account { id, name, balance } => {
                let opening = match balance {
                    Some(s) => parse_amount(&s)?,
                    None => Decimal::ZERO,
                };
                self.add_account(id, name, opening)
            }
            LedgerRecord::Category { id, name, kind } => self.add_category(id, name, kind),
            LedgerRecord::Transaction {
                id,
                account,
                category,
                amount,
                date,
                description,
            } => self.record(Transaction {
                id,
                account_id: account,
                category_id: category,
                amount: parse_amount(&amount)?,
                date,
                description,
            }),
            LedgerRecord::Budget {
                id,
                category,
                limit,
                month,
                year,
            } => self.set_budget(Budget {
                id,
                category_id: category,
                limit: parse_amount(&limit)?,
                month,
                year,
            }),
        }
    }
}
