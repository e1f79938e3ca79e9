//! Assembly of the full dashboard payload handed to the renderer.

use ledger::Ledger;
use serde_json::{json, Value};

use crate::{charts, summary};

/// Assemble the dashboard payload for one month: headline summary, budget
/// standings and both chart configs.
///
/// Charts with no underlying data are reported as structured notes so the
/// renderer can show a friendly message instead of an empty canvas.
pub fn dashboard_payload(book: &Ledger, month: u32, year: i32, currency: &str) -> Value {
    let headline = summary::monthly_summary(book, month, year);
    let budgets = summary::budget_status(book, month, year);
    let slices = summary::spending_by_category(book, month, year);
    let trend = summary::balance_trend(book, month, year);

    let spending = match charts::spending_chart(&slices) {
        Ok(chart) => json!({ "chart": chart }),
        Err(e) => json!({ "note": e.to_string() }),
    };
    let balance = match charts::balance_chart(&trend, currency) {
        Ok(chart) => json!({ "chart": chart }),
        Err(e) => json!({ "note": e.to_string() }),
    };

    json!({
        "summary": headline,
        "budgets": budgets,
        "spending": spending,
        "balance_trend": balance,
    })
}
