pub mod error;
pub mod models;
pub mod records;

pub use error::LedgerError;
pub use models::{Account, Budget, Category, CategoryKind, Transaction};
pub use records::LedgerRecord;

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::debug;

/// In-memory book of accounts, categories, transactions and budgets.
///
/// Account balances are derived state: every transaction insert, amendment
/// and removal adjusts the owning account, so `balance` always equals the
/// opening balance plus the signed effect of the recorded history.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: BTreeMap<u64, Account>,
    categories: BTreeMap<u64, Category>,
    transactions: BTreeMap<u64, Transaction>,
    budgets: BTreeMap<u64, Budget>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // -- accounts --

    /// Open an account. The opening balance must not be negative and the
    /// name must be unique.
    pub fn add_account(
        &mut self,
        id: u64,
        name: String,
        opening: Decimal,
    ) -> Result<(), LedgerError> {
        if opening < Decimal::ZERO {
            return Err(LedgerError::NegativeOpeningBalance);
        }
        if self.accounts.contains_key(&id) {
            return Err(LedgerError::DuplicateId(id));
        }
        if self.accounts.values().any(|a| a.name == name) {
            return Err(LedgerError::DuplicateAccount(name));
        }
        self.accounts.insert(
            id,
            Account {
                id,
                name,
                balance: opening,
            },
        );
        Ok(())
    }

    pub fn rename_account(&mut self, id: u64, name: String) -> Result<(), LedgerError> {
        if self.accounts.values().any(|a| a.id != id && a.name == name) {
            return Err(LedgerError::DuplicateAccount(name));
        }
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or(LedgerError::UnknownAccount(id))?;
        account.name = name;
        Ok(())
    }

    /// Close an account together with every transaction booked against it.
    pub fn remove_account(&mut self, id: u64) -> Result<Account, LedgerError> {
        let account = self
            .accounts
            .remove(&id)
            .ok_or(LedgerError::UnknownAccount(id))?;
        let before = self.transactions.len();
        self.transactions.retain(|_, tx| tx.account_id != id);
        debug!(
            account = %account.name,
            removed = before - self.transactions.len(),
            "cascaded transaction removal"
        );
        Ok(account)
    }

    // -- categories --

    pub fn add_category(
        &mut self,
        id: u64,
        name: String,
        kind: CategoryKind,
    ) -> Result<(), LedgerError> {
        if self.categories.contains_key(&id) {
            return Err(LedgerError::DuplicateId(id));
        }
        if self.categories.values().any(|c| c.name == name) {
            return Err(LedgerError::DuplicateCategory(name));
        }
        self.categories.insert(id, Category { id, name, kind });
        Ok(())
    }

    /// Delete a category. Refused while transactions or budgets still
    /// reference it, so transaction directions stay well defined.
    pub fn remove_category(&mut self, id: u64) -> Result<Category, LedgerError> {
        let referenced = self.transactions.values().any(|t| t.category_id == id)
            || self.budgets.values().any(|b| b.category_id == id);
        if referenced {
            return Err(LedgerError::CategoryInUse(id));
        }
        self.categories
            .remove(&id)
            .ok_or(LedgerError::UnknownCategory(id))
    }

    // -- transactions --

    fn signed_amount(&self, tx: &Transaction) -> Result<Decimal, LedgerError> {
        let category = self
            .categories
            .get(&tx.category_id)
            .ok_or(LedgerError::UnknownCategory(tx.category_id))?;
        Ok(match category.kind {
            CategoryKind::Income => tx.amount,
            CategoryKind::Expense => -tx.amount,
        })
    }

    /// Book a new transaction and apply it to the owning account: income
    /// adds to the balance, expenses subtract.
    pub fn record(&mut self, tx: Transaction) -> Result<(), LedgerError> {
        if self.transactions.contains_key(&tx.id) {
            return Err(LedgerError::DuplicateId(tx.id));
        }
        let delta = self.signed_amount(&tx)?;
        let account = self
            .accounts
            .get_mut(&tx.account_id)
            .ok_or(LedgerError::UnknownAccount(tx.account_id))?;
        account.balance += delta;
        self.transactions.insert(tx.id, tx);
        Ok(())
    }

    /// Replace an existing transaction, reverting its old effect first.
    ///
    /// The old signed amount is backed out of the old account, then the new
    /// signed amount is applied to the (possibly different) account. This
    /// covers amount changes, moves between accounts and category changes
    /// that flip the direction.
    pub fn amend(&mut self, tx: Transaction) -> Result<(), LedgerError> {
        let old = self
            .transactions
            .get(&tx.id)
            .cloned()
            .ok_or(LedgerError::UnknownTransaction(tx.id))?;
        if !self.accounts.contains_key(&tx.account_id) {
            return Err(LedgerError::UnknownAccount(tx.account_id));
        }
        let old_delta = self.signed_amount(&old)?;
        let new_delta = self.signed_amount(&tx)?;
        if let Some(account) = self.accounts.get_mut(&old.account_id) {
            account.balance -= old_delta;
        }
        if let Some(account) = self.accounts.get_mut(&tx.account_id) {
            account.balance += new_delta;
        }
        self.transactions.insert(tx.id, tx);
        Ok(())
    }

    /// Delete a transaction, reverting its effect on the account balance.
    pub fn remove_transaction(&mut self, id: u64) -> Result<Transaction, LedgerError> {
        let tx = self
            .transactions
            .remove(&id)
            .ok_or(LedgerError::UnknownTransaction(id))?;
        let delta = self.signed_amount(&tx)?;
        if let Some(account) = self.accounts.get_mut(&tx.account_id) {
            account.balance -= delta;
        }
        Ok(tx)
    }

    // -- budgets --

    /// Set a monthly limit. Budgets are unique per (category, month, year).
    pub fn set_budget(&mut self, budget: Budget) -> Result<(), LedgerError> {
        if !(1..=12).contains(&budget.month) {
            return Err(LedgerError::InvalidMonth(budget.month));
        }
        if !self.categories.contains_key(&budget.category_id) {
            return Err(LedgerError::UnknownCategory(budget.category_id));
        }
        if self.budgets.contains_key(&budget.id) {
            return Err(LedgerError::DuplicateId(budget.id));
        }
        let clash = self.budgets.values().any(|b| {
            b.category_id == budget.category_id && b.month == budget.month && b.year == budget.year
        });
        if clash {
            return Err(LedgerError::DuplicateBudget {
                category: budget.category_id,
                month: budget.month,
                year: budget.year,
            });
        }
        self.budgets.insert(budget.id, budget);
        Ok(())
    }

    pub fn remove_budget(&mut self, id: u64) -> Result<Budget, LedgerError> {
        self.budgets.remove(&id).ok_or(LedgerError::UnknownBudget(id))
    }

    // -- accessors --

    pub fn account(&self, id: u64) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn category(&self, id: u64) -> Option<&Category> {
        self.categories.get(&id)
    }

    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.transactions.get(&id)
    }

    /// Accounts ordered by name.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut out: Vec<_> = self.accounts.values().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Categories ordered by name.
    pub fn categories(&self) -> Vec<&Category> {
        let mut out: Vec<_> = self.categories.values().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Transactions newest first.
    pub fn transactions(&self) -> Vec<&Transaction> {
        let mut out: Vec<_> = self.transactions.values().collect();
        out.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        out
    }

    /// Transactions dated within the given month, oldest first.
    pub fn transactions_in(&self, month: u32, year: i32) -> Vec<&Transaction> {
        let mut out: Vec<_> = self
            .transactions
            .values()
            .filter(|t| t.date.month() == month && t.date.year() == year)
            .collect();
        out.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        out
    }

    /// Budgets set for the given month.
    pub fn budgets_for(&self, month: u32, year: i32) -> Vec<&Budget> {
        self.budgets
            .values()
            .filter(|b| b.month == month && b.year == year)
            .collect()
    }

    /// Sum of all account balances.
    pub fn total_balance(&self) -> Decimal {
        self.accounts.values().map(|a| a.balance).sum()
    }
}
