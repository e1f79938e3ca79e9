use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use ledger::{CategoryKind, Ledger, Transaction};

use crate::charts::{BalanceTrend, SpendingSlice};

/// Headline figures for the selected month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: u32,
    pub year: i32,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal,
    /// Current balance across all accounts, not restricted to the month.
    pub total_balance: Decimal,
}

/// Per-budget standing for the selected month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub over: bool,
}

fn signed(book: &Ledger, tx: &Transaction) -> Decimal {
    match book.category(tx.category_id).map(|c| c.kind) {
        Some(CategoryKind::Income) => tx.amount,
        Some(CategoryKind::Expense) => -tx.amount,
        None => Decimal::ZERO,
    }
}

/// Expense totals per category for the month, largest first.
pub fn spending_by_category(book: &Ledger, month: u32, year: i32) -> Vec<SpendingSlice> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for tx in book.transactions_in(month, year) {
        let category = match book.category(tx.category_id) {
            Some(c) => c,
            None => continue,
        };
        if category.kind == CategoryKind::Expense {
            *totals.entry(category.name.clone()).or_default() += tx.amount;
        }
    }
    let mut slices: Vec<SpendingSlice> = totals
        .into_iter()
        .map(|(category, total_spent)| SpendingSlice {
            category,
            total_spent,
        })
        .collect();
    slices.sort_by(|a, b| {
        b.total_spent
            .cmp(&a.total_spent)
            .then_with(|| a.category.cmp(&b.category))
    });
    slices
}

/// Total balance across all accounts as of each transaction date in the
/// month.
///
/// Account balances already include the full history, so each point is
/// derived by walking back from the current total and backing out every
/// transaction dated after it.
pub fn balance_trend(book: &Ledger, month: u32, year: i32) -> BalanceTrend {
    let mut dates: Vec<_> = book
        .transactions_in(month, year)
        .iter()
        .map(|t| t.date)
        .collect();
    dates.dedup();

    let all = book.transactions();
    let total = book.total_balance();
    let mut labels = Vec::with_capacity(dates.len());
    let mut points = Vec::with_capacity(dates.len());
    for date in dates {
        let after: Decimal = all
            .iter()
            .filter(|t| t.date > date)
            .map(|t| signed(book, t))
            .sum();
        let as_of = total - after;
        labels.push(date.format("%b %d").to_string());
        points.push(as_of.to_f64().unwrap_or(0.0));
    }
    BalanceTrend { labels, points }
}

/// Limit versus actual spending for every budget set in the month.
pub fn budget_status(book: &Ledger, month: u32, year: i32) -> Vec<BudgetStatus> {
    let spending = spending_by_category(book, month, year);
    let by_name: HashMap<&str, Decimal> = spending
        .iter()
        .map(|s| (s.category.as_str(), s.total_spent))
        .collect();
    let mut out = Vec::new();
    for budget in book.budgets_for(month, year) {
        let category = match book.category(budget.category_id) {
            Some(c) => c,
            None => continue,
        };
        let spent = by_name
            .get(category.name.as_str())
            .copied()
            .unwrap_or_default();
        out.push(BudgetStatus {
            category: category.name.clone(),
            limit: budget.limit,
            spent,
            remaining: budget.limit - spent,
            over: spent > budget.limit,
        });
    }
    out.sort_by(|a, b| a.category.cmp(&b.category));
    out
}

/// Income, expense and net totals for the month.
pub fn monthly_summary(book: &Ledger, month: u32, year: i32) -> MonthlySummary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;
    for tx in book.transactions_in(month, year) {
        match book.category(tx.category_id).map(|c| c.kind) {
            Some(CategoryKind::Income) => income += tx.amount,
            Some(CategoryKind::Expense) => expenses += tx.amount,
            None => {}
        }
    }
    MonthlySummary {
        month,
        year,
        income,
        expenses,
        net: income - expenses,
        total_balance: book.total_balance(),
    }
}
