//! Destinations for the rendered dashboard payload.

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::AsyncWriteExt;

use crate::error::DashboardError;

/// Destination for the payload document. One document is published per run;
/// publishing replaces whatever the destination held before.
#[async_trait]
pub trait PayloadSink {
    async fn publish(&mut self, payload: &Value) -> Result<(), DashboardError>;
}

/// Writes the payload to stdout as a single JSON line, for piping into the
/// renderer or other tooling.
pub struct StdoutSink;

#[async_trait]
impl PayloadSink for StdoutSink {
    async fn publish(&mut self, payload: &Value) -> Result<(), DashboardError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(serde_json::to_string(payload)?.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        Ok(())
    }
}

/// Replaces the target file with a pretty-printed payload document, so the
/// renderer always picks up one complete snapshot.
pub struct FileSink {
    path: String,
}

impl FileSink {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PayloadSink for FileSink {
    async fn publish(&mut self, payload: &Value) -> Result<(), DashboardError> {
        let doc = serde_json::to_string_pretty(payload)?;
        tokio::fs::write(&self.path, doc).await?;
        Ok(())
    }
}
