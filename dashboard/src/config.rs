use chrono::Datelike;
use clap::Parser;
use serde::Deserialize;

/// Default currency symbol for axis tick labels.
pub const DEFAULT_CURRENCY: &str = "€";

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional path to a configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Month to report on, 1-12 (defaults to the current month)
    #[arg(short, long)]
    pub month: Option<u32>,

    /// Year to report on (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Ledger records file (JSON lines); stdin when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output sink type (stdout, file)
    #[arg(long)]
    pub sink: Option<String>,

    /// Output file path when the file sink is selected
    #[arg(long)]
    pub out_path: Option<String>,

    /// Currency symbol used in axis tick labels
    #[arg(long)]
    pub currency: Option<String>,
}

/// Application configuration loaded from file and environment
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub currency: String,
    pub sink: String,
    #[serde(default)]
    pub out_path: Option<String>,
    pub month: u32,
    pub year: i32,
}

impl Default for Settings {
    fn default() -> Self {
        let today = chrono::Utc::now().date_naive();
        Self {
            currency: DEFAULT_CURRENCY.into(),
            sink: "stdout".into(),
            out_path: None,
            month: today.month(),
            year: today.year(),
        }
    }
}

impl Settings {
    pub fn load(cli: &Cli) -> Result<Self, config::ConfigError> {
        let today = chrono::Utc::now().date_naive();
        let mut builder = config::Config::builder()
            .set_default("currency", DEFAULT_CURRENCY)?
            .set_default("sink", "stdout")?
            .set_default("month", today.month() as i64)?
            .set_default("year", today.year() as i64)?
            .add_source(config::Environment::with_prefix("DASHBOARD"));
        if let Some(path) = &cli.config {
            builder = builder.add_source(config::File::with_name(path));
        }
        let cfg = builder.build()?;
        let mut settings: Settings = cfg.try_deserialize()?;
        if let Some(s) = &cli.sink {
            settings.sink = s.clone();
        }
        if let Some(m) = cli.month {
            settings.month = m;
        }
        if let Some(y) = cli.year {
            settings.year = y;
        }
        if let Some(p) = &cli.out_path {
            settings.out_path = Some(p.clone());
        }
        if let Some(c) = &cli.currency {
            settings.currency = c.clone();
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_win_over_defaults() {
        let cli = Cli::parse_from([
            "dashboard", "--month", "3", "--year", "2024", "--currency", "$",
        ]);
        let settings = Settings::load(&cli).unwrap();
        assert_eq!(settings.month, 3);
        assert_eq!(settings.year, 2024);
        assert_eq!(settings.currency, "$");
        assert_eq!(settings.sink, "stdout");
    }

    #[test]
    fn sink_from_cli_overrides_the_default() {
        let cli = Cli::parse_from(["dashboard", "--sink", "file", "--out-path", "x.json"]);
        let settings = Settings::load(&cli).unwrap();
        assert_eq!(settings.sink, "file");
        assert_eq!(settings.out_path.as_deref(), Some("x.json"));
    }

    #[test]
    fn sink_can_come_from_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "sink = \"file\"\nout_path = \"payload.json\"\n").unwrap();

        let cli = Cli::parse_from(["dashboard", "--config", path.to_str().unwrap()]);
        let settings = Settings::load(&cli).unwrap();
        assert_eq!(settings.sink, "file");
        assert_eq!(settings.out_path.as_deref(), Some("payload.json"));
    }

    #[test]
    fn defaults_point_at_the_current_month() {
        let cli = Cli::parse_from(["dashboard"]);
        let settings = Settings::load(&cli).unwrap();
        let today = chrono::Utc::now().date_naive();
        assert_eq!(settings.month, today.month());
        assert_eq!(settings.year, today.year());
        assert_eq!(settings.currency, DEFAULT_CURRENCY);
    }
}
