use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a category books money into or out of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

/// Transaction category, e.g. "Salary" or "Groceries".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    /// Unique display name.
    pub name: String,
    pub kind: CategoryKind,
}

/// A money account with a running balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    /// Unique display name, e.g. "Checking".
    pub name: String,
    /// Current balance. Derived state: the ledger adjusts it on every
    /// transaction insert, amendment and removal.
    pub balance: Decimal,
}

/// A single booked transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub account_id: u64,
    pub category_id: u64,
    /// Unsigned amount; the category kind decides the direction.
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
}

/// Monthly spending limit for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: u64,
    pub category_id: u64,
    pub limit: Decimal,
    /// 1..=12
    pub month: u32,
    pub year: i32,
}
