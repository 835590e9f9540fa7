//! Command builder for the application submission entry point.

use std::collections::HashMap;

use crate::args::{
    parse, submit_catalog, Flow, ParseError, ParsedOption, CONF, DEPLOY_MODE, DRIVER_CLASS_PATH,
    DRIVER_JAVA_OPTIONS, DRIVER_LIBRARY_PATH, DRIVER_MEMORY, HELP, KILL_SUBMISSION, STATUS,
    USAGE_ERROR, VERSION,
};
use crate::command::assembler::CommandAssembler;
use crate::command::named::DEFAULT_MEM;
use crate::command::options::{check_no_max_heap, split_options};
use crate::command::spec::CommandSpec;
use crate::command::CommandBuilder;
use crate::config::LauncherSettings;
use crate::env::EnvSnapshot;
use crate::error::{LaunchError, Result};

/// Class name that selects submission mode.
pub const SUBMIT_CLASS: &str = "org.apache.spark.deploy.SparkSubmit";

pub const DRIVER_MEMORY_KEY: &str = "spark.driver.memory";
pub const DRIVER_EXTRA_CLASSPATH_KEY: &str = "spark.driver.extraClassPath";
pub const DRIVER_EXTRA_JAVA_OPTIONS_KEY: &str = "spark.driver.extraJavaOptions";
pub const DRIVER_EXTRA_LIBRARY_PATH_KEY: &str = "spark.driver.extraLibraryPath";

const SPARK_SUBMIT_OPTS: &str = "SPARK_SUBMIT_OPTS";
const SPARK_JAVA_OPTS: &str = "SPARK_JAVA_OPTS";
const SPARK_DRIVER_MEMORY: &str = "SPARK_DRIVER_MEMORY";
const SPARK_MEM: &str = "SPARK_MEM";

/// Builds `java [prefix] [submit opts] [driver settings] SparkSubmit [args]`.
///
/// Construction validates the argument list; a failure here is what the
/// dispatcher recovers from.
#[derive(Debug, Clone, Default)]
pub struct SubmitCommandBuilder {
    /// Recognized options in argument order, normalized to `--long [value]`.
    submit_args: Vec<String>,
    /// `--conf` pairs plus driver flags folded into their config keys. Later wins.
    conf: HashMap<String, String>,
    deploy_mode: Option<String>,
    app_resource: Option<String>,
    app_args: Vec<String>,
}

impl SubmitCommandBuilder {
    pub fn new(args: &[String]) -> Result<Self> {
        let mut builder = Self::default();
        let mut special_command = false;

        parse(args, &submit_catalog(), |parsed| match parsed {
            ParsedOption::Recognized { opt, value } => {
                if let Err(e) = builder.record(opt, value.as_deref()) {
                    return Flow::Fail(e);
                }
                if matches!(opt, HELP | USAGE_ERROR | VERSION | KILL_SUBMISSION | STATUS) {
                    special_command = true;
                }
                builder.submit_args.push(opt.to_string());
                builder.submit_args.extend(value);
                Flow::Continue
            }
            ParsedOption::Unknown { opt } => {
                if opt.starts_with('-') {
                    return Flow::Fail(ParseError::Rejected(format!("Unrecognized option: {opt}")));
                }
                builder.app_resource = Some(opt);
                Flow::Halt
            }
            ParsedOption::Positional { tokens } => {
                builder.app_args = tokens;
                Flow::Continue
            }
        })?;

        if !special_command && builder.app_resource.is_none() {
            return Err(LaunchError::Usage("Missing application resource.".into()));
        }

        Ok(builder)
    }

    /// Fold option values that influence the runtime command into `conf`.
    fn record(&mut self, opt: &str, value: Option<&str>) -> std::result::Result<(), ParseError> {
        let Some(value) = value else {
            return Ok(());
        };

        let key = match opt {
            CONF => {
                let Some((key, conf_value)) = value.split_once('=') else {
                    return Err(ParseError::Rejected(format!("Invalid argument to {CONF}: {value}")));
                };
                self.conf.insert(key.to_string(), conf_value.to_string());
                return Ok(());
            }
            DEPLOY_MODE => {
                self.deploy_mode = Some(value.to_string());
                return Ok(());
            }
            DRIVER_MEMORY => DRIVER_MEMORY_KEY,
            DRIVER_CLASS_PATH => DRIVER_EXTRA_CLASSPATH_KEY,
            DRIVER_JAVA_OPTIONS => DRIVER_EXTRA_JAVA_OPTIONS_KEY,
            DRIVER_LIBRARY_PATH => DRIVER_EXTRA_LIBRARY_PATH_KEY,
            _ => return Ok(()),
        };
        self.conf.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// The driver runs inside the launched runtime unless deployed to the cluster.
    fn is_client_mode(&self) -> bool {
        self.deploy_mode.as_deref() != Some("cluster")
    }

    fn conf(&self, key: &str) -> Option<&str> {
        self.conf.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }
}

impl CommandBuilder for SubmitCommandBuilder {
    fn build_command(&self, settings: &LauncherSettings, env: &EnvSnapshot) -> Result<CommandSpec> {
        let mut cmd = CommandAssembler::java_prefix(settings, env, self.conf(DRIVER_EXTRA_CLASSPATH_KEY))
            .with_options(split_options(SPARK_SUBMIT_OPTS, env.non_empty(SPARK_SUBMIT_OPTS))?)
            .with_options(split_options(SPARK_JAVA_OPTS, env.non_empty(SPARK_JAVA_OPTS))?);

        if self.is_client_mode() {
            let memory = self
                .conf(DRIVER_MEMORY_KEY)
                .or_else(|| env.first_non_empty(&[SPARK_DRIVER_MEMORY, SPARK_MEM]))
                .unwrap_or(DEFAULT_MEM);
            cmd = cmd.with_heap(memory);

            if let Some(opts) = self.conf(DRIVER_EXTRA_JAVA_OPTIONS_KEY) {
                check_no_max_heap(DRIVER_EXTRA_JAVA_OPTIONS_KEY, opts)?;
                cmd = cmd.with_options(split_options(DRIVER_EXTRA_JAVA_OPTIONS_KEY, Some(opts))?);
            }

            if let Some(lib_path) = self.conf(DRIVER_EXTRA_LIBRARY_PATH_KEY) {
                let var = settings.platform.library_path_var();
                let merged = match env.non_empty(var) {
                    Some(existing) => {
                        format!("{lib_path}{}{existing}", settings.platform.path_separator())
                    }
                    None => lib_path.to_string(),
                };
                cmd = cmd.with_env(var, merged);
            }
        }

        Ok(cmd
            .with_perm_gen()
            .with_arg(SUBMIT_CLASS)
            .with_args(self.submit_args.iter().cloned())
            .with_args(self.app_resource.iter().cloned())
            .with_args(self.app_args.iter().cloned())
            .build())
    }
}
