use clap::{Parser, ValueEnum};
use std::fmt::Display;

/// npmlog-style log levels, matching the host tool's own `--loglevel` flag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub(crate) enum LogLevel {
    Silent,
    Error,
    Warn,
    #[default]
    Info,
    Verbose,
    Silly,
}

impl LogLevel {
    /// The `tracing` filter directive this level maps onto
    pub(crate) fn tracing_directive(self) -> &'static str {
        match self {
            LogLevel::Silent => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Verbose => "debug",
            LogLevel::Silly => "trace",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Silent => write!(f, "silent"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Verbose => write!(f, "verbose"),
            LogLevel::Silly => write!(f, "silly"),
        }
    }
}

#[derive(Parser, Clone, Debug, Default)]
pub(crate) struct Verbosity {
    /// Set the log level [default: whatever the host was run with, else info]
    #[clap(long, global = true, value_enum)]
    pub(crate) loglevel: Option<LogLevel>,
}

impl Verbosity {
    /// Resolve the effective level. Our own flag wins; otherwise the host's
    /// raw command line is scanned for `--loglevel=<level>` / `--loglevel
    /// <level>` tokens (last one wins, unparseable values are the host's
    /// problem and are ignored). The level only gates diagnostics, never
    /// control flow.
    pub(crate) fn resolve(&self, raw_args: &[String]) -> LogLevel {
        if let Some(level) = self.loglevel {
            return level;
        }

        let mut resolved = LogLevel::default();
        let mut tokens = raw_args.iter().peekable();
        while let Some(token) = tokens.next() {
            let value = match token.strip_prefix("--loglevel=") {
                Some(value) => Some(value),
                None if token == "--loglevel" => tokens.peek().map(|next| next.as_str()),
                None => None,
            };

            if let Some(level) = value.and_then(|v| LogLevel::from_str(v, true).ok()) {
                resolved = level;
            }
        }

        resolved
    }
}
