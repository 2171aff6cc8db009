use super::PlatformHook;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Before-prepare handler for the generated Android project.
pub(crate) struct AndroidBeforePrepare {
    project_root: PathBuf,
    platform_path: PathBuf,
}

impl AndroidBeforePrepare {
    pub(crate) fn new(project_root: &Path, platform_path: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            platform_path: platform_path.to_path_buf(),
        }
    }
}

impl PlatformHook for AndroidBeforePrepare {
    fn invoke_hook(&self) -> Result<()> {
        tracing::debug!("Performing Android before-prepare hook");

        // The host generates the native project before any hook runs; a
        // missing directory means the project is in a bad state, not ours to
        // repair.
        if !self.platform_path.is_dir() {
            return Err(Error::Unique(format!(
                "Android platform directory is missing: {}",
                self.platform_path.display()
            )));
        }

        tracing::trace!(
            project_root = %self.project_root.display(),
            platform_path = %self.platform_path.display(),
            "Android project located"
        );

        Ok(())
    }
}
