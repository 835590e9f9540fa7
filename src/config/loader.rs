use std::path::{Path, PathBuf};

use crate::config::types::LauncherSettings;
use crate::env::EnvSnapshot;
use crate::platform::Platform;

pub const SPARK_HOME: &str = "SPARK_HOME";
pub const SPARK_CONF_DIR: &str = "SPARK_CONF_DIR";
pub const JAVA_HOME: &str = "JAVA_HOME";
pub const SPARK_SCALA_VERSION: &str = "SPARK_SCALA_VERSION";
pub const SPARK_PRINT_LAUNCH_COMMAND: &str = "SPARK_PRINT_LAUNCH_COMMAND";

impl LauncherSettings {
    /// Resolve settings from the environment.
    ///
    /// Never fails: every missing variable has a fallback.
    /// - home: `SPARK_HOME`, else the parent of the launcher binary's directory
    /// - conf dir: `SPARK_CONF_DIR`, else `<home>/conf`
    /// - executable: `JAVA_HOME/bin/java`, else `java` from `PATH`, else bare `java`
    pub fn resolve(env: &EnvSnapshot, platform: Platform) -> Self {
        let home = env
            .non_empty(SPARK_HOME)
            .map(PathBuf::from)
            .unwrap_or_else(install_root_from_binary);

        let conf_dir = env
            .non_empty(SPARK_CONF_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join("conf"));

        let java_executable = java_executable(env.non_empty(JAVA_HOME), platform);

        tracing::debug!(
            home = %home.display(),
            conf_dir = %conf_dir.display(),
            java = %java_executable.display(),
            "resolved launcher settings"
        );

        Self {
            home,
            conf_dir,
            java_executable,
            scala_version: env.non_empty(SPARK_SCALA_VERSION).map(str::to_string),
            print_launch_command: env.non_empty(SPARK_PRINT_LAUNCH_COMMAND).is_some(),
            platform,
        }
    }
}

/// `<java_home>/bin/java`, falling back to a `PATH` lookup.
fn java_executable(java_home: Option<&str>, platform: Platform) -> PathBuf {
    let name = platform.java_executable_name();
    match java_home {
        Some(dir) => Path::new(dir).join("bin").join(name),
        None => which::which(name).unwrap_or_else(|_| PathBuf::from(name)),
    }
}

/// Launchers live in `<home>/bin`, so the root is two levels above the binary.
fn install_root_from_binary() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent()?.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
