use super::PlatformHook;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Before-prepare handler for the generated Windows project.
pub(crate) struct WindowsBeforePrepare {
    project_root: PathBuf,
    platform_path: PathBuf,
}

impl WindowsBeforePrepare {
    pub(crate) fn new(project_root: &Path, platform_path: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            platform_path: platform_path.to_path_buf(),
        }
    }
}

impl PlatformHook for WindowsBeforePrepare {
    fn invoke_hook(&self) -> Result<()> {
        tracing::debug!("Performing Windows before-prepare hook");

        if !self.platform_path.is_dir() {
            return Err(Error::Unique(format!(
                "Windows platform directory is missing: {}",
                self.platform_path.display()
            )));
        }

        tracing::trace!(
            project_root = %self.project_root.display(),
            platform_path = %self.platform_path.display(),
            "Windows project located"
        );

        Ok(())
    }
}
