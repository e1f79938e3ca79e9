use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::format;

/// Colour palette of the dashboard theme, applied to doughnut slices in
/// order and truncated to the slice count.
pub const PALETTE: [&str; 10] = [
    "#eb9c64", "#ff8789", "#554e4f", "#8fbf9f", "#346145", "#353535", "#000000", "#f5ecd7",
    "#ebe2cd", "#c2baa6",
];

/// Border colour shared by doughnut slices.
const SLICE_BORDER: &str = "#ebe2cd";
/// Stroke and fill of the balance trend line.
const TREND_LINE: &str = "#eb9c64";
const TREND_FILL: &str = "rgba(235, 156, 100, 0.2)";

/// One slice of the spending-by-category breakdown, matching the payload the
/// server template embeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingSlice {
    /// Category display name.
    #[serde(rename = "category__name")]
    pub category: String,
    /// Total spent in the category over the period.
    pub total_spent: Decimal,
}

/// Balance trend series: one label and one value per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceTrend {
    pub labels: Vec<String>,
    pub points: Vec<f64>,
}

/// Renderer-agnostic chart description, shaped like the config object the
/// charting component consumes.
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Line,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Either one colour for the whole dataset or one per slice.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    PerSlice(Vec<String>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
    pub legend: bool,
    /// Prerendered y-axis tick labels, one per point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_labels: Option<Vec<String>>,
}

/// Build the spending doughnut from per-category totals.
///
/// Empty input is an explicit error carrying the user-facing message; the
/// caller decides how to surface it.
pub fn spending_chart(slices: &[SpendingSlice]) -> Result<ChartConfig, DashboardError> {
    if slices.is_empty() {
        return Err(DashboardError::EmptyDataset(
            "no expense transactions recorded this month",
        ));
    }
    let labels: Vec<String> = slices.iter().map(|s| s.category.clone()).collect();
    let data: Vec<f64> = slices
        .iter()
        .map(|s| s.total_spent.to_f64().unwrap_or(0.0))
        .collect();
    let colors: Vec<String> = PALETTE
        .iter()
        .take(labels.len())
        .map(|c| c.to_string())
        .collect();
    Ok(ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels,
            datasets: vec![Dataset {
                label: "Total Spent".into(),
                data,
                background_color: Some(Paint::PerSlice(colors)),
                border_color: Some(SLICE_BORDER.into()),
                border_width: Some(2),
                hover_offset: Some(3),
                fill: None,
                tension: None,
                point_radius: None,
            }],
        },
        options: ChartOptions {
            cutout: Some("60%".into()),
            legend: false,
            tick_labels: None,
        },
    })
}

/// Build the balance trend line. Y-axis tick labels are prerendered with the
/// magnitude abbreviator, matching the axis callback of the original
/// dashboard.
pub fn balance_chart(trend: &BalanceTrend, symbol: &str) -> Result<ChartConfig, DashboardError> {
    if trend.points.is_empty() {
        return Err(DashboardError::EmptyDataset(
            "no transaction data available for this period",
        ));
    }
    if trend.labels.len() != trend.points.len() {
        return Err(DashboardError::MismatchedSeries {
            labels: trend.labels.len(),
            points: trend.points.len(),
        });
    }
    let ticks = trend
        .points
        .iter()
        .map(|v| format::tick_label(*v, symbol))
        .collect();
    Ok(ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: trend.labels.clone(),
            datasets: vec![Dataset {
                label: "Total Balance".into(),
                data: trend.points.clone(),
                background_color: Some(Paint::Solid(TREND_FILL.into())),
                border_color: Some(TREND_LINE.into()),
                border_width: None,
                hover_offset: None,
                fill: Some(true),
                tension: Some(0.1),
                point_radius: Some(4),
            }],
        },
        options: ChartOptions {
            cutout: None,
            legend: false,
            tick_labels: Some(ticks),
        },
    })
}

/// Parse the embedded spending payload, rejecting bad entries up front
/// instead of letting them reach the renderer.
pub fn parse_spending(json: &str) -> Result<Vec<SpendingSlice>, DashboardError> {
    let slices: Vec<SpendingSlice> = serde_json::from_str(json)?;
    for slice in &slices {
        if slice.total_spent < Decimal::ZERO {
            return Err(DashboardError::NegativeSpending(slice.category.clone()));
        }
    }
    Ok(slices)
}

/// Parse the embedded balance payloads (labels and points are separate
/// documents in the template) into a validated series.
pub fn parse_balance(labels_json: &str, points_json: &str) -> Result<BalanceTrend, DashboardError> {
    let labels: Vec<String> = serde_json::from_str(labels_json)?;
    let points: Vec<f64> = serde_json::from_str(points_json)?;
    if labels.len() != points.len() {
        return Err(DashboardError::MismatchedSeries {
            labels: labels.len(),
            points: points.len(),
        });
    }
    if points.iter().any(|p| !p.is_finite()) {
        return Err(DashboardError::NonFinitePoint);
    }
    Ok(BalanceTrend { labels, points })
}
