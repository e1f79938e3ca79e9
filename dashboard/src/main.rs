use clap::Parser;
use tokio::io::{self, AsyncBufRead, BufReader};
use tracing_subscriber::FmtSubscriber;

use dashboard::config::{Cli, Settings};
use dashboard::payload::dashboard_payload;
use dashboard::sink::{FileSink, PayloadSink, StdoutSink};
use ledger::Ledger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logger
    let subscriber = FmtSubscriber::builder().with_target(false).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let cli = Cli::parse();
    let settings = Settings::load(&cli)?;

    let mut sink: Box<dyn PayloadSink> = match settings.sink.as_str() {
        "file" => {
            let path = settings
                .out_path
                .as_deref()
                .ok_or("file sink selected without --out-path")?;
            Box::new(FileSink::new(path))
        }
        _ => Box::new(StdoutSink),
    };

    let mut book = Ledger::new();
    let (applied, skipped) = match &cli.input {
        Some(path) => {
            let file = tokio::fs::File::open(path).await?;
            load(BufReader::new(file), &mut book).await?
        }
        None => load(BufReader::new(io::stdin()), &mut book).await?,
    };
    tracing::info!(applied, skipped, "ledger loaded");

    let payload = dashboard_payload(&book, settings.month, settings.year, &settings.currency);
    sink.publish(&payload).await?;

    Ok(())
}

/// Read JSONL ledger records, applying each to the book. Bad lines are
/// logged and counted rather than aborting the run.
async fn load<R>(reader: R, book: &mut Ledger) -> Result<(usize, usize), std::io::Error>
where
    R: AsyncBufRead + Unpin,
{
    use tokio::io::AsyncBufReadExt;

    let mut lines = reader.lines();
    let mut lineno = 0usize;
    let mut applied = 0usize;
    let mut skipped = 0usize;
    while let Some(line) = lines.next_line().await? {
        lineno += 1;
        if line.trim().is_empty() {
            continue;
        }
        match ledger::records::parse_line(&line).and_then(|record| book.apply(record)) {
            Ok(()) => applied += 1,
            Err(e) => {
                tracing::warn!(line = lineno, error = %e, "record skipped");
                skipped += 1;
            }
        }
    }
    Ok((applied, skipped))
}
