pub mod charts;
pub mod config;
pub mod error;
pub mod format;
pub mod payload;
pub mod sink;
pub mod summary;

pub use error::DashboardError;
