mod cli;
mod context;
mod diagnostics;
mod dispatch;
mod error;
mod hooks;
mod logging;
mod platform;

pub(crate) use cli::*;
pub(crate) use context::*;
pub(crate) use diagnostics::*;
pub(crate) use dispatch::*;
pub(crate) use error::*;
pub(crate) use hooks::*;
pub(crate) use logging::*;
pub(crate) use platform::*;

use clap::Parser;

fn main() {
    let args = Cli::parse();

    let result = match args.action {
        Commands::BeforePrepare(opts) => opts.before_prepare(&args.verbosity),
    };

    if let Err(err) = result {
        eprintln!("Failed: {err}");
        std::process::exit(1);
    }
}
