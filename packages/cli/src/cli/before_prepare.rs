use crate::{
    BeforePrepareDispatcher, HookContext, HookRegistry, Result, TraceController, TracingSink,
    Verbosity,
};
use clap::Parser;
use std::path::PathBuf;

/// Run the before-prepare hook.
#[derive(Clone, Debug, Parser)]
#[clap(name = "before-prepare")]
pub(crate) struct BeforePrepare {
    /// Path to the hook context document written by the host tool
    #[clap(long)]
    pub(crate) context: PathBuf,
}

impl BeforePrepare {
    pub(crate) fn before_prepare(self, verbosity: &Verbosity) -> Result<()> {
        let context = HookContext::load(&self.context)?;

        // The level may live in the host's own argv, which only becomes
        // visible once the context is loaded, so tracing comes up here rather
        // than in main.
        TraceController::initialize(verbosity.resolve(&context.cmd_line));

        tracing::trace!(context = ?context, "loaded hook context");
        tracing::debug!("Performing before-prepare hook");

        let dispatcher = BeforePrepareDispatcher::new(&context, HookRegistry::before_prepare())?;

        let mut sink = TracingSink;
        dispatcher.invoke_hook(&mut sink)
    }
}
