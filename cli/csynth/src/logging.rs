//! Logger installation for the CLI.
//!
//! Libraries only emit through the `log` facade; the binary decides where
//! those records go.

use clap::ValueEnum;

/// Verbosity selected with `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    None,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn filter(self) -> Option<&'static str> {
        match self {
            LogLevel::None => None,
            LogLevel::Error => Some("error"),
            LogLevel::Warn => Some("warn"),
            LogLevel::Info => Some("info"),
            LogLevel::Debug => Some("debug"),
            LogLevel::Trace => Some("trace"),
        }
    }
}

/// Install `env_logger`. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: LogLevel) {
    let Some(filter) = level.filter() else {
        return;
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", filter);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(level, LogLevel::Debug | LogLevel::Trace))
        .init();
}
