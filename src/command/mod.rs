//! Command construction for runtime launches.
//!
//! ```text
//! target + args → builder → CommandAssembler (prefix, options, heap, class) → CommandSpec
//! ```

mod assembler;
mod classpath;
mod named;
mod options;
mod spec;
mod submit;

pub use assembler::{CommandAssembler, CLASSPATH_FLAG, JAVA_OPTS_FILE, PERM_GEN_FLAG};
pub use classpath::{
    discover_library_dirs, ClasspathSources, HADOOP_CONF_DIR, SPARK_CLASSPATH,
    SPARK_DIST_CLASSPATH, YARN_CONF_DIR,
};
pub use named::{known_targets, option_source, NamedProcessCommandBuilder, OptionSource, DEFAULT_MEM};
pub use options::{check_no_max_heap, split_options, MAX_HEAP_MARKER};
pub use spec::{ChildEnv, CommandSpec};
pub use submit::{SubmitCommandBuilder, SUBMIT_CLASS};

use crate::config::LauncherSettings;
use crate::env::EnvSnapshot;
use crate::error::Result;

/// Produces the command for one launch request.
pub trait CommandBuilder: std::fmt::Debug {
    fn build_command(&self, settings: &LauncherSettings, env: &EnvSnapshot) -> Result<CommandSpec>;
}
