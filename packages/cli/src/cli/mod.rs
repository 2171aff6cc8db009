pub(crate) mod before_prepare;
pub(crate) mod verbosity;

pub(crate) use before_prepare::BeforePrepare;
pub(crate) use verbosity::{LogLevel, Verbosity};

use clap::{Parser, Subcommand};

/// Build-lifecycle hooks for hyb hybrid mobile projects.
///
/// The host packaging tool invokes this binary once per lifecycle stage,
/// handing over its context as a JSON document.
#[derive(Parser)]
#[clap(name = "hyb-hooks", version = env!("CARGO_PKG_VERSION"))]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub(crate) action: Commands,

    #[clap(flatten)]
    pub(crate) verbosity: Verbosity,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the before-prepare stage for the requested platforms.
    BeforePrepare(BeforePrepare),
}
