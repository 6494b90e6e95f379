use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "review_poller=debug,review_engine=debug,review_notifier=debug,review_common=debug";

/// Number of rotated log files kept on disk.
pub const MAX_LOG_FILES: usize = 5;

/// Log file name prefix; files are named `review-poller.<date>.log`.
pub const LOG_FILE_PREFIX: &str = "review-poller";

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Daily rolling file in the given directory.
    File(PathBuf),
    /// Standard output.
    Stdout,
}

impl LogSink {
    /// Pick the sink from `LOG_TO_STDOUT` and `LOG_DIR`.
    ///
    /// A file in `LOG_DIR` (default: the working directory) unless
    /// `LOG_TO_STDOUT` is `1` or `true`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let to_stdout = lookup("LOG_TO_STDOUT")
            .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
        if to_stdout {
            return LogSink::Stdout;
        }

        let dir = lookup("LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .unwrap_or_else(|| ".".to_string());
        LogSink::File(PathBuf::from(dir))
    }
}

/// Install the global tracing subscriber.
///
/// Lines read `timestamp LEVEL message fields`, without the module target.
pub fn init(sink: &LogSink) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match sink {
        LogSink::File(dir) => {
            tracing::subscriber::set_global_default(file_subscriber(dir, filter)?)?;
        }
        LogSink::Stdout => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init();
        }
    }

    Ok(())
}

fn file_subscriber(
    dir: &Path,
    filter: EnvFilter,
) -> anyhow::Result<impl tracing::Subscriber + Send + Sync + 'static> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(file_appender(dir)?)
        .finish();
    Ok(subscriber)
}

fn file_appender(dir: &Path) -> anyhow::Result<RollingFileAppender> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(dir)?;
    Ok(appender)
}
