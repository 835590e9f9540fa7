//! Launcher configuration resolved from the environment.

mod loader;
mod types;

pub use loader::{JAVA_HOME, SPARK_CONF_DIR, SPARK_HOME, SPARK_PRINT_LAUNCH_COMMAND, SPARK_SCALA_VERSION};
pub use types::LauncherSettings;
