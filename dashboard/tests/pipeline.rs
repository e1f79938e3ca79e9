use dashboard::payload::dashboard_payload;
use ledger::{records, Ledger};

fn load(lines: &[&str]) -> Ledger {
    let mut book = Ledger::new();
    for line in lines {
        let record = records::parse_line(line).unwrap();
        book.apply(record).unwrap();
    }
    book
}

#[test]
fn records_flow_through_to_the_dashboard_payload() {
    let book = load(&[
        r#"{"type":"category","id":1,"name":"Salary","kind":"income"}"#,
        r#"{"type":"category","id":2,"name":"Groceries","kind":"expense"}"#,
        r#"{"type":"category","id":3,"name":"Rent","kind":"expense"}"#,
        r#"{"type":"account","id":1,"name":"Checking","balance":"100.00"}"#,
        r#"{"type":"account","id":2,"name":"Savings","balance":"500.00"}"#,
        r#"{"type":"transaction","id":1,"account":1,"category":2,"amount":"25.00","date":"2025-01-01","description":"Weekly groceries"}"#,
        r#"{"type":"transaction","id":2,"account":1,"category":1,"amount":"150.00","date":"2025-01-05","description":"Salary"}"#,
        r#"{"type":"transaction","id":3,"account":2,"category":3,"amount":"30.00","date":"2025-01-10","description":"Storage"}"#,
        r#"{"type":"budget","id":1,"category":2,"limit":"20.00","month":1,"year":2025}"#,
    ]);

    let payload = dashboard_payload(&book, 1, 2025, "€");

    // Headline summary.
    assert_eq!(payload["summary"]["income"], "150.00");
    assert_eq!(payload["summary"]["expenses"], "55.00");
    assert_eq!(payload["summary"]["total_balance"], "695.00");

    // Doughnut: Rent (30) beats Groceries (25).
    let doughnut = &payload["spending"]["chart"];
    assert_eq!(doughnut["type"], "doughnut");
    assert_eq!(doughnut["data"]["labels"][0], "Rent");
    assert_eq!(doughnut["data"]["labels"][1], "Groceries");
    assert_eq!(doughnut["data"]["datasets"][0]["data"][0], 30.0);

    // Line: balance as of each transaction date.
    let line = &payload["balance_trend"]["chart"];
    assert_eq!(line["type"], "line");
    assert_eq!(line["data"]["labels"][0], "Jan 01");
    assert_eq!(line["data"]["datasets"][0]["data"][0], 575.0);
    assert_eq!(line["data"]["datasets"][0]["data"][2], 695.0);
    assert_eq!(line["options"]["tickLabels"][0], "€575.00");

    // Budgets: 25 spent against a 20 limit.
    assert_eq!(payload["budgets"][0]["category"], "Groceries");
    assert_eq!(payload["budgets"][0]["over"], true);
}

#[test]
fn months_without_activity_surface_notes() {
    let book = load(&[
        r#"{"type":"category","id":1,"name":"Groceries","kind":"expense"}"#,
        r#"{"type":"account","id":1,"name":"Checking","balance":"100.00"}"#,
    ]);
    let payload = dashboard_payload(&book, 6, 2025, "€");
    assert!(payload["spending"]["chart"].is_null());
    assert!(payload["spending"]["note"].is_string());
    assert!(payload["balance_trend"]["note"].is_string());
}
