//! Structured diagnostics for the hook run.
//!
//! The dispatcher never prints warnings directly. It emits events into a sink
//! so tests can assert on what was diagnosed rather than scraping console
//! output; the production sink routes everything to the tracing subscriber.

/// A diagnostic the dispatcher wants surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HookEvent {
    /// A platform id we have no hook for. Non-fatal; the run continues with
    /// the remaining platforms.
    UnsupportedPlatform { platform: String, plugin: String },
}

pub(crate) trait EventSink {
    fn emit(&mut self, event: HookEvent);
}

/// The production sink: forwards events to `tracing`.
pub(crate) struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: HookEvent) {
        match event {
            HookEvent::UnsupportedPlatform { platform, plugin } => {
                tracing::warn!(
                    platform = %platform,
                    plugin = %plugin,
                    "hook is not implemented for this platform"
                );
            }
        }
    }
}
