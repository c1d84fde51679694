//! Logging setup shared by the `jobboard` CLI and the TUI
//!
//! Diagnostics never go to stdout: the CLI writes them to stderr so command
//! output stays pipeable, the TUI to a file so the screen stays intact.
//!
//! | Variable              | Effect                                   |
//! |-----------------------|------------------------------------------|
//! | `JOBBOARD_LOG_FORMAT` | `text` (default), `json` or `pretty`     |
//! | `JOBBOARD_LOG_LEVEL`  | filter directive, default `warn`         |
//! | `RUST_LOG`            | overrides both level settings when set   |
//!
//! ```no_run
//! use libjobboard::logging::{LogFormat, LoggingConfig};
//!
//! LoggingConfig::new(LogFormat::Json, "libjobboard=debug".to_string(), false).init();
//! ```

use std::fmt;
use std::str::FromStr;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// HTTP internals stay at warn unless a directive names them
const QUIET_DEPENDENCIES: &[&str] = &["hyper=warn", "hyper_util=warn", "reqwest=warn", "rustls=warn"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Plain lines without colors
    Text,
    /// One JSON object per event, for log shippers
    Json,
    /// Multi-line with colors and source locations
    Pretty,
}

impl LogFormat {
    pub const ALL: [LogFormat; 3] = [LogFormat::Text, LogFormat::Json, LogFormat::Pretty];

    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|f| f.as_str()).collect();
                format!("Invalid log format: '{}'. Valid options: {}", s, names.join(", "))
            })
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Filter directive such as `info` or `libjobboard=debug`
    pub level: String,
    /// `--verbose`: raise the default directive to `debug`
    pub verbose: bool,
}

impl LoggingConfig {
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
        }
    }

    /// Settings from `JOBBOARD_LOG_FORMAT` and `JOBBOARD_LOG_LEVEL`
    ///
    /// An unknown format falls back to text rather than failing the command.
    pub fn from_env(verbose: bool) -> Self {
        let format = std::env::var("JOBBOARD_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(LogFormat::Text);
        let level = std::env::var("JOBBOARD_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Self::new(format, level, verbose)
    }

    /// Directive used when `RUST_LOG` is absent
    fn directive(&self) -> String {
        let base = if self.verbose { "debug" } else { self.level.as_str() };
        std::iter::once(base)
            .chain(QUIET_DEPENDENCIES.iter().copied())
            .collect::<Vec<_>>()
            .join(",")
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(self.directive()))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    }

    /// Install the global subscriber writing to stderr
    ///
    /// Returns `false` when a subscriber was already installed.
    pub fn init(&self) -> bool {
        self.init_with_writer(std::io::stderr)
    }

    /// Install the global subscriber writing to `writer`
    pub fn init_with_writer<W>(&self, writer: W) -> bool
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_writer(writer);

        let installed = match self.format {
            LogFormat::Json => builder
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_target(true)
                .try_init(),
            LogFormat::Pretty => builder
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .try_init(),
            LogFormat::Text => builder.with_ansi(false).with_target(false).try_init(),
        };
        installed.is_ok()
    }
}
