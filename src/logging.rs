//! Logging and tracing setup.
//!
//! The library only emits `tracing` events and spans; binaries, benches and
//! tests opt into output by installing a subscriber once.

use serde::{Deserialize, Serialize};
use std::sync::Once;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

static INIT: Once = Once::new();

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Install the global subscriber.
///
/// `filter` is used when `RUST_LOG` is unset. Only the first call has an
/// effect, later calls (or a subscriber installed elsewhere) are ignored.
pub fn init(format: LogFormat, filter: &str) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
        let registry = tracing_subscriber::registry().with(env_filter);

        let installed = match format {
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_span_events(FmtSpan::CLOSE)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_span_events(FmtSpan::CLOSE)
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_current_span(true),
                )
                .try_init(),
        };

        if installed.is_ok() {
            info!(?format, "scatha tracing initialized");
        }
    });
}

/// Human-readable output at `info` unless `RUST_LOG` says otherwise.
pub fn init_tracing() {
    init(LogFormat::Pretty, "info");
}

/// JSON output for structured log collection.
pub fn init_tracing_json() {
    init(LogFormat::Json, "info");
}

/// Macro for creating decode spans
#[macro_export]
macro_rules! span_trace {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, trace};

    #[test]
    fn test_init_tracing_once() {
        init_tracing();
        init_tracing();
        init_tracing_json();
    }

    #[test]
    fn test_structured_events() {
        init_tracing();
        trace!(offset = 4usize, kind = "UnknownOpcode", "decode failed");
        debug!(arch = "x86", count = 3usize, "batch complete");
    }

    #[test]
    fn test_span_creation() {
        init_tracing();
        let span = span_trace!("disasm", arch = "mips", len = 16usize);
        let _guard = span.enter();
        info!("inside span");
    }

    #[test]
    fn test_log_format_serde() {
        let json = serde_json::to_string(&LogFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
    }
}
