//! Command builder for internal service classes (everything except submission).

use crate::command::assembler::CommandAssembler;
use crate::command::options::{check_no_max_heap, split_options};
use crate::command::spec::CommandSpec;
use crate::command::CommandBuilder;
use crate::config::LauncherSettings;
use crate::env::EnvSnapshot;
use crate::error::Result;

/// Heap size used when no memory variable supplies one.
pub const DEFAULT_MEM: &str = "1g";

/// Where a target reads its extra options and heap size from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSource {
    /// Variables whose values are appended as runtime options, in order.
    pub options_vars: &'static [&'static str],
    /// Variable overriding the heap size; `None` means always [`DEFAULT_MEM`].
    pub memory_var: Option<&'static str>,
}

const DAEMON_OPTS: &str = "SPARK_DAEMON_JAVA_OPTS";
const DAEMON_MEMORY: &str = "SPARK_DAEMON_MEMORY";
const EXECUTOR_MEMORY: &str = "SPARK_EXECUTOR_MEMORY";

const fn daemon(role_opts: &'static [&'static str]) -> OptionSource {
    OptionSource {
        options_vars: role_opts,
        memory_var: Some(DAEMON_MEMORY),
    }
}

const SHUFFLE_SERVICE: OptionSource = daemon(&[DAEMON_OPTS, "SPARK_SHUFFLE_OPTS"]);

/// One entry per known service class.
const OPTION_SOURCES: &[(&str, OptionSource)] = &[
    (
        "org.apache.spark.deploy.master.Master",
        daemon(&[DAEMON_OPTS, "SPARK_MASTER_OPTS"]),
    ),
    (
        "org.apache.spark.deploy.worker.Worker",
        daemon(&[DAEMON_OPTS, "SPARK_WORKER_OPTS"]),
    ),
    (
        "org.apache.spark.deploy.history.HistoryServer",
        daemon(&[DAEMON_OPTS, "SPARK_HISTORY_OPTS"]),
    ),
    (
        "org.apache.spark.executor.CoarseGrainedExecutorBackend",
        OptionSource {
            options_vars: &["SPARK_JAVA_OPTS", "SPARK_EXECUTOR_OPTS"],
            memory_var: Some(EXECUTOR_MEMORY),
        },
    ),
    (
        "org.apache.spark.executor.MesosExecutorBackend",
        OptionSource {
            options_vars: &["SPARK_EXECUTOR_OPTS"],
            memory_var: Some(EXECUTOR_MEMORY),
        },
    ),
    (
        "org.apache.spark.deploy.mesos.MesosClusterDispatcher",
        OptionSource {
            options_vars: &[DAEMON_OPTS],
            memory_var: None,
        },
    ),
    ("org.apache.spark.deploy.ExternalShuffleService", SHUFFLE_SERVICE),
    ("org.apache.spark.deploy.mesos.MesosExternalShuffleService", SHUFFLE_SERVICE),
];

/// Entry for classes not listed above.
const DEFAULT_SOURCE: OptionSource = OptionSource {
    options_vars: &["SPARK_JAVA_OPTS"],
    memory_var: Some("SPARK_DRIVER_MEMORY"),
};

/// Look up the option sources for `target`. Total: unknown names get the default.
pub fn option_source(target: &str) -> OptionSource {
    OPTION_SOURCES
        .iter()
        .find(|(name, _)| *name == target)
        .map(|(_, source)| *source)
        .unwrap_or(DEFAULT_SOURCE)
}

/// Names of every service class with a dedicated entry.
pub fn known_targets() -> impl Iterator<Item = &'static str> {
    OPTION_SOURCES.iter().map(|(name, _)| *name)
}

/// Builds `java [prefix] [env options] -Xmx<mem> [perm gen] <class> [args]`.
#[derive(Debug, Clone)]
pub struct NamedProcessCommandBuilder {
    target: String,
    args: Vec<String>,
}

impl NamedProcessCommandBuilder {
    pub fn new(target: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            target: target.into(),
            args,
        }
    }
}

impl CommandBuilder for NamedProcessCommandBuilder {
    fn build_command(&self, settings: &LauncherSettings, env: &EnvSnapshot) -> Result<CommandSpec> {
        let source = option_source(&self.target);
        tracing::debug!(target_class = %self.target, ?source, "resolved option sources");

        let mut cmd = CommandAssembler::java_prefix(settings, env, None);

        for key in source.options_vars {
            if let Some(value) = env.non_empty(key) {
                check_no_max_heap(key, value)?;
                cmd = cmd.with_options(split_options(key, Some(value))?);
            }
        }

        let memory = source
            .memory_var
            .and_then(|var| env.non_empty(var))
            .unwrap_or(DEFAULT_MEM);

        let mut spec = cmd
            .with_heap(memory)
            .with_perm_gen()
            .with_arg(self.target.as_str())
            .with_args(self.args.iter().cloned())
            .build();
        // Service launches never carry empty tokens.
        spec.tokens.retain(|t| !t.is_empty());
        Ok(spec)
    }
}
