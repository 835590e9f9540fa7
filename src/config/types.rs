use std::path::PathBuf;

use crate::platform::Platform;

/// Install locations and switches resolved once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    /// Install root (`SPARK_HOME`).
    pub home: PathBuf,
    /// Configuration directory (`SPARK_CONF_DIR`, default `<home>/conf`).
    pub conf_dir: PathBuf,
    /// Runtime executable placed first in every command.
    pub java_executable: PathBuf,
    /// Pinned build flavour for library discovery in source checkouts.
    pub scala_version: Option<String>,
    /// Echo the assembled command to stderr before emitting it.
    pub print_launch_command: bool,
    /// Separator and serializer family.
    pub platform: Platform,
}

impl LauncherSettings {
    /// Settings rooted at `home` with every other field at its default.
    ///
    /// Handy for tests and embedding; the binary goes through
    /// [`LauncherSettings::resolve`].
    pub fn with_home(home: impl Into<PathBuf>, platform: Platform) -> Self {
        let home = home.into();
        Self {
            conf_dir: home.join("conf"),
            java_executable: PathBuf::from(platform.java_executable_name()),
            home,
            scala_version: None,
            print_launch_command: false,
            platform,
        }
    }
}
