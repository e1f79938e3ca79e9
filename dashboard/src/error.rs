use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("chart has no data: {0}")]
    EmptyDataset(&'static str),
    #[error("balance series mismatch: {labels} labels vs {points} points")]
    MismatchedSeries { labels: usize, points: usize },
    #[error("balance series contains a non-finite point")]
    NonFinitePoint,
    #[error("negative spending total for {0:?}")]
    NegativeSpending(String),
    #[error(transparent)]
    Ledger(#[from] ledger::LedgerError),
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
