use crate::Result;
use path_absolutize::Absolutize;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The context document the host packaging tool writes for a hook invocation.
///
/// The host is a JS tool and its context object is camelCase JSON; the field
/// names here follow that contract, not ours. The context is immutable for the
/// duration of one hook run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HookContext {
    /// Top-level directory of the cross-platform app project
    pub(crate) project_root: PathBuf,

    /// The platforms the user asked the host to prepare. May be empty, in
    /// which case every installed platform is prepared.
    #[serde(default)]
    pub(crate) platforms: Vec<String>,

    /// The host tool's own raw command line, token by token
    #[serde(default)]
    pub(crate) cmd_line: Vec<String>,

    /// Id of the plugin this hook ships with
    pub(crate) plugin_id: String,
}

impl HookContext {
    /// Load the context from the document the host wrote, resolving the
    /// project root to an absolute path.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let mut context: Self = serde_json::from_str(&raw)?;
        let root = context.project_root.absolutize()?.into_owned();
        context.project_root = root;
        Ok(context)
    }

    /// Where the host generates the per-platform native projects
    pub(crate) fn platforms_dir(&self) -> PathBuf {
        self.project_root.join("platforms")
    }
}
