use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A target platform the host tool has a native project for.
///
/// The host hands platform ids over as plain strings; anything that does not
/// parse into one of these stays a string and only ever produces a warning,
/// never a failure.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Debug)]
#[non_exhaustive]
pub(crate) enum Platform {
    /// Targeting the ios platform
    ///
    /// Requires no mutation at the before-prepare stage, so it is wired to a
    /// no-op handler in the registry.
    #[serde(rename = "ios")]
    Ios,

    /// Targeting the android platform
    #[serde(rename = "android")]
    Android,

    /// Targeting the windows platform
    #[serde(rename = "windows")]
    Windows,
}

/// An error that occurs when a platform is not recognized
pub(crate) struct UnknownPlatformError;

impl std::fmt::Display for UnknownPlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown platform")
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            "windows" => Ok(Self::Windows),
            _ => Err(UnknownPlatformError),
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.platform_name())
    }
}

impl Platform {
    /// Get the id the host tool uses for this platform
    pub(crate) fn platform_name(&self) -> &str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Windows => "windows",
        }
    }
}
