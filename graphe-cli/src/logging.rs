//! Structured logging for the graphe CLI.
//!
//! Events and spans go to `stderr` so rendered reports on `stdout` stay
//! clean. Two environment variables shape the output:
//!
//! - `GRAPHE_LOG_FORMAT`: `human` (default) or `json`.
//! - `RUST_LOG`: an `EnvFilter` directive. Without it the graphe crates
//!   log at `info` and everything else at `warn`, which keeps the
//!   `core.*`, `edgelist.*` and `cli.*` spans visible.

use std::{env, fmt, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing::debug;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::ParseError, fmt::format::FmtSpan, layer::SubscriberExt,
    util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "GRAPHE_LOG_FORMAT";
const FILTER_ENV: &str = "RUST_LOG";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str =
    "warn,graphe_core=info,graphe_providers_edgelist=info,graphe_cli=info,graphe=info";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Output format selected through `GRAPHE_LOG_FORMAT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Human,
    /// One JSON object per event, with the current span and span list.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Human => "human",
            Self::Json => "json",
        })
    }
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `GRAPHE_LOG_FORMAT` named a format other than `human` or `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user, trimmed and lowercased.
        provided: String,
    },
    /// `RUST_LOG` could not be parsed as a filter directive.
    #[error("invalid log filter `{provided}`: {source}")]
    InvalidFilter {
        /// Raw directive supplied by the user.
        provided: String,
        /// Parse failure reported by `tracing_subscriber`.
        #[source]
        source: ParseError,
    },
    /// Another global subscriber was installed first.
    #[error("a global tracing subscriber is already installed: {source}")]
    AlreadyConfigured {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

impl LoggingError {
    /// Returns `true` when the CLI can carry on: events still reach the
    /// subscriber that was installed first.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::AlreadyConfigured { .. })
    }
}

/// Resolved logging settings.
#[derive(Debug)]
pub struct LoggingConfig {
    format: LogFormat,
    filter: EnvFilter,
}

impl LoggingConfig {
    /// Reads `GRAPHE_LOG_FORMAT` and `RUST_LOG`.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when either variable is not valid UTF-8 or
    /// holds an unsupported value.
    pub fn from_env() -> Result<Self, LoggingError> {
        let format = read_env(LOG_FORMAT_ENV)?;
        let filter = read_env(FILTER_ENV)?;
        Self::resolve(format.as_deref(), filter.as_deref())
    }

    /// Builds settings from raw variable values; `None` means unset.
    ///
    /// # Errors
    /// Returns [`LoggingError::UnsupportedFormat`] or
    /// [`LoggingError::InvalidFilter`].
    ///
    /// # Examples
    /// ```
    /// use graphe_cli::logging::{LogFormat, LoggingConfig};
    ///
    /// let config = LoggingConfig::resolve(Some("json"), None)?;
    /// assert_eq!(config.format(), LogFormat::Json);
    /// # Ok::<(), graphe_cli::logging::LoggingError>(())
    /// ```
    pub fn resolve(format: Option<&str>, filter: Option<&str>) -> Result<Self, LoggingError> {
        let format = format.map_or(Ok(LogFormat::default()), str::parse)?;
        let directives = filter.unwrap_or(DEFAULT_FILTER);
        let filter = EnvFilter::try_new(directives).map_err(|source| {
            LoggingError::InvalidFilter {
                provided: directives.to_owned(),
                source,
            }
        })?;
        Ok(Self { format, filter })
    }

    /// Selected output format.
    #[must_use]
    pub const fn format(&self) -> LogFormat {
        self.format
    }
}

fn read_env(name: &'static str) -> Result<Option<String>, LoggingError> {
    match env::var(name) {
        Ok(raw) => Ok(Some(raw)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source @ env::VarError::NotUnicode(_)) => {
            Err(LoggingError::InvalidUnicode { name, source })
        }
    }
}

/// Installs the global subscriber described by the environment. Later
/// calls are no-ops once a subscriber from this module is in place.
///
/// # Errors
/// Returns [`LoggingError`] for invalid settings, and
/// [`LoggingError::AlreadyConfigured`] when some other subscriber already
/// owns the global slot; see [`LoggingError::is_recoverable`].
pub fn init_logging() -> Result<(), LoggingError> {
    if let Some(format) = INSTALLED.get() {
        debug!(%format, "structured logging already installed");
        return Ok(());
    }
    install(LoggingConfig::from_env()?)
}

fn install(config: LoggingConfig) -> Result<(), LoggingError> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match config.format {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    let bridged = LogTracer::init().is_ok();

    tracing_subscriber::registry()
        .with(config.filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::AlreadyConfigured { source })?;

    let format = *INSTALLED.get_or_init(|| config.format);
    debug!(%format, log_bridge = bridged, "structured logging installed");
    Ok(())
}
