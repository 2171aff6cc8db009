//! Tracing setup for the hook binary.
//!
//! The filter defaults to the level resolved from the command line (ours or
//! the host's), with `HYB_HOOKS_LOG` as an escape hatch for full `tracing`
//! filter syntax. Nothing here is interactive: output is plain fmt lines on
//! stdout, which the host tool captures alongside its own.

use crate::LogLevel;
use std::env;
use tracing_subscriber::{prelude::*, EnvFilter};

const LOG_ENV: &str = "HYB_HOOKS_LOG";

pub(crate) struct TraceController;

impl TraceController {
    /// Build tracing infrastructure.
    pub(crate) fn initialize(level: LogLevel) {
        let mut filter = EnvFilter::new(format!(
            "error,hyb_hooks={level}",
            level = level.tracing_directive()
        ));

        if env::var(LOG_ENV).is_ok() {
            filter = EnvFilter::from_env(LOG_ENV);
        }

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_timer(tracing_subscriber::fmt::time::uptime());

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
