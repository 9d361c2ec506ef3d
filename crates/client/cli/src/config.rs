//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// How command output is rendered.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration read from the process environment.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub format: OutputFormat,
    /// Also write logs to `roster.log` in this directory when set.
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            format: OutputFormat::default(),
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Sample data shipped with `roster-content`, resolved from this crate's
    /// manifest so the default works from any working directory.
    pub const DEFAULT_DATA_DIR: &'static str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../roster/content/data");

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROSTER_DATA_DIR` - Directory holding the RON catalogs (default: the bundled sample data)
    /// - `ROSTER_FORMAT` - `text` or `json` (default: `text`)
    /// - `ROSTER_LOG_DIR` - Directory for a log file (default: stderr only)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("ROSTER_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        // Unknown values fall back to text
        if let Some(format) = read_env::<OutputFormat>("ROSTER_FORMAT") {
            config.format = format;
        }

        config.log_dir = read_env::<PathBuf>("ROSTER_LOG_DIR");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
