mod android;
mod windows;

pub(crate) use android::AndroidBeforePrepare;
pub(crate) use windows::WindowsBeforePrepare;

use crate::{Platform, Result};
use std::collections::HashMap;
use std::path::Path;

/// One platform's handler for one lifecycle stage.
///
/// Handlers are constructed per invocation with the project root and the
/// platform's generated project directory, and are expected to do all of their
/// work inside `invoke_hook`. Failures propagate to the dispatcher unmodified.
pub(crate) trait PlatformHook {
    fn invoke_hook(&self) -> Result<()>;
}

/// Builds a handler from `(project_root, platform_path)`.
pub(crate) type HookFactory = Box<dyn Fn(&Path, &Path) -> Box<dyn PlatformHook>>;

/// Maps each supported platform to its handler factory.
///
/// Dispatch goes through this table rather than branching on platform names,
/// so wiring up a new platform never touches the dispatcher itself.
pub(crate) struct HookRegistry {
    factories: HashMap<Platform, HookFactory>,
}

impl HookRegistry {
    pub(crate) fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub(crate) fn register(&mut self, platform: Platform, factory: HookFactory) {
        self.factories.insert(platform, factory);
    }

    pub(crate) fn get(&self, platform: Platform) -> Option<&HookFactory> {
        self.factories.get(&platform)
    }

    /// The stock wiring for the before-prepare stage.
    pub(crate) fn before_prepare() -> Self {
        let mut registry = Self::new();
        registry.register(Platform::Ios, Box::new(|_, _| Box::new(NoopBeforePrepare)));
        registry.register(
            Platform::Android,
            Box::new(|root, path| Box::new(AndroidBeforePrepare::new(root, path))),
        );
        registry.register(
            Platform::Windows,
            Box::new(|root, path| Box::new(WindowsBeforePrepare::new(root, path))),
        );
        registry
    }
}

/// iOS needs no project mutation before prepare. It still gets a real registry
/// entry so "supported but nothing to do" stays distinct from "unsupported".
pub(crate) struct NoopBeforePrepare;

impl PlatformHook for NoopBeforePrepare {
    fn invoke_hook(&self) -> Result<()> {
        Ok(())
    }
}
