use crate::{
    diagnostics::{EventSink, HookEvent},
    hooks::HookRegistry,
    HookContext, Platform, Result,
};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Dispatches one before-prepare run to the platform handlers.
///
/// The platform list is the host context's list verbatim when the user asked
/// for specific platforms; otherwise it is every installed platform under
/// `<projectRoot>/platforms`, in directory-listing order. No dedup, no
/// filtering: duplicates dispatch twice, unknown ids warn and are skipped.
pub(crate) struct BeforePrepareDispatcher {
    project_root: PathBuf,
    platforms: Vec<String>,
    plugin_id: String,
    registry: HookRegistry,
}

impl BeforePrepareDispatcher {
    pub(crate) fn new(context: &HookContext, registry: HookRegistry) -> Result<Self> {
        let platforms = if context.platforms.is_empty() {
            installed_platforms(&context.platforms_dir())?
        } else {
            context.platforms.clone()
        };

        tracing::trace!(
            project_root = %context.project_root.display(),
            platforms = ?platforms,
            "resolved platforms for before-prepare"
        );

        Ok(Self {
            project_root: context.project_root.clone(),
            platforms,
            plugin_id: context.plugin_id.clone(),
            registry,
        })
    }

    /// Run the hook once per platform, in order.
    ///
    /// Handler failures propagate unmodified and stop the run; an unsupported
    /// platform id only emits a warning event and the run continues.
    pub(crate) fn invoke_hook(&self, sink: &mut dyn EventSink) -> Result<()> {
        tracing::debug!("Invoking platform-specific hooks");

        for platform_id in &self.platforms {
            let platform_path = self.project_root.join("platforms").join(platform_id);

            let factory = Platform::from_str(platform_id)
                .ok()
                .and_then(|platform| self.registry.get(platform));

            match factory {
                Some(factory) => {
                    factory(&self.project_root, &platform_path).invoke_hook()?;
                }
                None => sink.emit(HookEvent::UnsupportedPlatform {
                    platform: platform_id.clone(),
                    plugin: self.plugin_id.clone(),
                }),
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn platforms(&self) -> &[String] {
        &self.platforms
    }
}

/// The installed platforms are the subdirectories of `platforms/`, in the
/// order the filesystem lists them. A missing or unreadable directory is
/// fatal: with no explicit platform list there is nothing sane to prepare.
fn installed_platforms(platforms_dir: &Path) -> Result<Vec<String>> {
    let mut platforms = Vec::new();

    for entry in std::fs::read_dir(platforms_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            platforms.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(platforms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::PlatformHook;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Sink that keeps every event for assertions.
    #[derive(Default)]
    struct RecordingSink {
        events: Vec<HookEvent>,
    }

    impl EventSink for RecordingSink {
        fn emit(&mut self, event: HookEvent) {
            self.events.push(event);
        }
    }

    /// Hook that records the paths its factory was constructed with, once per
    /// `invoke_hook` call.
    struct RecordingHook {
        calls: Rc<RefCell<Vec<(PathBuf, PathBuf)>>>,
        project_root: PathBuf,
        platform_path: PathBuf,
    }

    impl PlatformHook for RecordingHook {
        fn invoke_hook(&self) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((self.project_root.clone(), self.platform_path.clone()));
            Ok(())
        }
    }

    struct FailingHook;

    impl PlatformHook for FailingHook {
        fn invoke_hook(&self) -> Result<()> {
            Err("refusing to prepare".into())
        }
    }

    fn recording_registry(
        platform: Platform,
    ) -> (HookRegistry, Rc<RefCell<Vec<(PathBuf, PathBuf)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = HookRegistry::new();
        let hook_calls = calls.clone();
        registry.register(
            platform,
            Box::new(move |root, path| {
                Box::new(RecordingHook {
                    calls: hook_calls.clone(),
                    project_root: root.to_path_buf(),
                    platform_path: path.to_path_buf(),
                })
            }),
        );
        (registry, calls)
    }

    fn context(project_root: &Path, platforms: &[&str]) -> HookContext {
        serde_json::from_value(serde_json::json!({
            "projectRoot": project_root,
            "platforms": platforms,
            "pluginId": "cordova-plugin-mfp",
        }))
        .unwrap()
    }

    #[test]
    fn requested_platforms_are_used_verbatim() {
        let ctx = context(Path::new("/apps/wallet"), &["android", "android", "ios"]);
        let dispatcher = BeforePrepareDispatcher::new(&ctx, HookRegistry::new()).unwrap();

        // order preserved, duplicates preserved, nothing filtered
        assert_eq!(dispatcher.platforms(), ["android", "android", "ios"]);
    }

    #[test]
    fn empty_request_falls_back_to_installed_platforms() {
        let dir = tempfile::tempdir().unwrap();
        let platforms_dir = dir.path().join("platforms");
        std::fs::create_dir_all(platforms_dir.join("android")).unwrap();
        std::fs::create_dir_all(platforms_dir.join("ios")).unwrap();
        // stray files under platforms/ are not platforms
        std::fs::write(platforms_dir.join("platforms.json"), "{}").unwrap();

        let expected: Vec<String> = std::fs::read_dir(&platforms_dir)
            .unwrap()
            .map(|entry| entry.unwrap())
            .filter(|entry| entry.file_type().unwrap().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        let ctx = context(dir.path(), &[]);
        let dispatcher = BeforePrepareDispatcher::new(&ctx, HookRegistry::new()).unwrap();
        assert_eq!(dispatcher.platforms(), expected);
    }

    #[test]
    fn empty_request_with_no_platforms_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path(), &[]);

        assert!(BeforePrepareDispatcher::new(&ctx, HookRegistry::new()).is_err());
    }

    #[test]
    fn android_delegates_once_with_the_platform_path() {
        let (registry, calls) = recording_registry(Platform::Android);
        let ctx = context(Path::new("/apps/wallet"), &["android"]);
        let dispatcher = BeforePrepareDispatcher::new(&ctx, registry).unwrap();

        let mut sink = RecordingSink::default();
        dispatcher.invoke_hook(&mut sink).unwrap();

        assert_eq!(
            *calls.borrow(),
            vec![(
                PathBuf::from("/apps/wallet"),
                PathBuf::from("/apps/wallet/platforms/android"),
            )]
        );
        assert!(sink.events.is_empty());
    }

    #[test]
    fn windows_delegates_once_with_the_platform_path() {
        let (registry, calls) = recording_registry(Platform::Windows);
        let ctx = context(Path::new("/apps/wallet"), &["windows"]);
        let dispatcher = BeforePrepareDispatcher::new(&ctx, registry).unwrap();

        let mut sink = RecordingSink::default();
        dispatcher.invoke_hook(&mut sink).unwrap();

        assert_eq!(
            *calls.borrow(),
            vec![(
                PathBuf::from("/apps/wallet"),
                PathBuf::from("/apps/wallet/platforms/windows"),
            )]
        );
    }

    #[test]
    fn ios_is_a_silent_no_op() {
        let ctx = context(Path::new("/apps/wallet"), &["ios"]);
        let dispatcher =
            BeforePrepareDispatcher::new(&ctx, HookRegistry::before_prepare()).unwrap();

        let mut sink = RecordingSink::default();
        dispatcher.invoke_hook(&mut sink).unwrap();

        // no warning; the no-op handler touches nothing
        assert!(sink.events.is_empty());
    }

    #[test]
    fn unknown_platforms_warn_and_the_run_continues() {
        let (registry, calls) = recording_registry(Platform::Android);
        let ctx = context(
            Path::new("/apps/wallet"),
            &["blackberry10", "android"],
        );
        let dispatcher = BeforePrepareDispatcher::new(&ctx, registry).unwrap();

        let mut sink = RecordingSink::default();
        dispatcher.invoke_hook(&mut sink).unwrap();

        assert_eq!(
            sink.events,
            vec![HookEvent::UnsupportedPlatform {
                platform: "blackberry10".to_string(),
                plugin: "cordova-plugin-mfp".to_string(),
            }]
        );
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn handler_failures_propagate_and_stop_the_run() {
        let (mut registry, calls) = recording_registry(Platform::Windows);
        registry.register(Platform::Android, Box::new(|_, _| Box::new(FailingHook)));

        let ctx = context(Path::new("/apps/wallet"), &["android", "windows"]);
        let dispatcher = BeforePrepareDispatcher::new(&ctx, registry).unwrap();

        let mut sink = RecordingSink::default();
        assert!(dispatcher.invoke_hook(&mut sink).is_err());

        // fail-fast: windows never ran
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn mixed_platform_scenario() {
        // android + ios + an unknown id, as a host would actually hand them over
        let (mut registry, calls) = recording_registry(Platform::Android);
        registry.register(
            Platform::Ios,
            Box::new(|_, _| Box::new(crate::hooks::NoopBeforePrepare)),
        );

        let ctx = context(Path::new("/apps/wallet"), &["android", "ios", "weirdos"]);
        let dispatcher = BeforePrepareDispatcher::new(&ctx, registry).unwrap();

        let mut sink = RecordingSink::default();
        dispatcher.invoke_hook(&mut sink).unwrap();

        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(
            sink.events,
            vec![HookEvent::UnsupportedPlatform {
                platform: "weirdos".to_string(),
                plugin: "cordova-plugin-mfp".to_string(),
            }]
        );
    }
}
