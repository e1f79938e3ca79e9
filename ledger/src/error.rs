use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("unknown account id {0}")]
    UnknownAccount(u64),
    #[error("unknown category id {0}")]
    UnknownCategory(u64),
    #[error("unknown transaction id {0}")]
    UnknownTransaction(u64),
    #[error("unknown budget id {0}")]
    UnknownBudget(u64),
    #[error("id {0} already in use")]
    DuplicateId(u64),
    #[error("account name {0:?} already in use")]
    DuplicateAccount(String),
    #[error("category name {0:?} already in use")]
    DuplicateCategory(String),
    #[error("budget for category {category} already set for {month}/{year}")]
    DuplicateBudget { category: u64, month: u32, year: i32 },
    #[error("opening balance cannot be negative")]
    NegativeOpeningBalance,
    #[error("month must be within 1..=12, got {0}")]
    InvalidMonth(u32),
    #[error("category {0} is still referenced by transactions or budgets")]
    CategoryInUse(u64),
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
