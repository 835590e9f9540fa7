//! Option catalog — the known flags of the submission grammar.

/// Whether an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionArity {
    /// Switch, no value (e.g. --verbose).
    NoValue,
    /// Requires exactly one value, either `--opt value` or `--opt=value`.
    RequiresValue,
}

/// A single option definition.
#[derive(Debug, Clone)]
pub struct OptionDef {
    /// Canonical long form (e.g. "--class").
    pub long: &'static str,
    /// Alternative spellings normalized to `long` (e.g. "-c").
    pub aliases: &'static [&'static str],
    pub arity: OptionArity,
}

impl OptionDef {
    const fn value(long: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            long,
            aliases,
            arity: OptionArity::RequiresValue,
        }
    }

    const fn switch(long: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            long,
            aliases,
            arity: OptionArity::NoValue,
        }
    }

    /// Check if this definition matches the given option name.
    pub fn matches(&self, name: &str) -> bool {
        name == self.long || self.aliases.contains(&name)
    }
}

/// Fixed set of options a parser recognizes.
#[derive(Debug, Clone)]
pub struct OptionCatalog {
    defs: Vec<OptionDef>,
}

impl OptionCatalog {
    pub fn new(defs: Vec<OptionDef>) -> Self {
        Self { defs }
    }

    pub fn find(&self, name: &str) -> Option<&OptionDef> {
        self.defs.iter().find(|d| d.matches(name))
    }
}

pub const CLASS: &str = "--class";
pub const CONF: &str = "--conf";
pub const DEPLOY_MODE: &str = "--deploy-mode";
pub const DRIVER_CLASS_PATH: &str = "--driver-class-path";
pub const DRIVER_JAVA_OPTIONS: &str = "--driver-java-options";
pub const DRIVER_LIBRARY_PATH: &str = "--driver-library-path";
pub const DRIVER_MEMORY: &str = "--driver-memory";
pub const KILL_SUBMISSION: &str = "--kill";
pub const STATUS: &str = "--status";
pub const HELP: &str = "--help";
pub const USAGE_ERROR: &str = "--usage-error";
pub const VERSION: &str = "--version";

/// Build the submission option catalog.
pub fn submit_catalog() -> OptionCatalog {
    OptionCatalog::new(vec![
        // === Options with a value ===
        OptionDef::value("--archives", &[]),
        OptionDef::value(CLASS, &[]),
        OptionDef::value(CONF, &["-c"]),
        OptionDef::value(DEPLOY_MODE, &[]),
        OptionDef::value(DRIVER_CLASS_PATH, &[]),
        OptionDef::value("--driver-cores", &[]),
        OptionDef::value(DRIVER_JAVA_OPTIONS, &[]),
        OptionDef::value(DRIVER_LIBRARY_PATH, &[]),
        OptionDef::value(DRIVER_MEMORY, &[]),
        OptionDef::value("--exclude-packages", &[]),
        OptionDef::value("--executor-cores", &[]),
        OptionDef::value("--executor-memory", &[]),
        OptionDef::value("--files", &[]),
        OptionDef::value("--jars", &[]),
        OptionDef::value("--keytab", &[]),
        OptionDef::value(KILL_SUBMISSION, &[]),
        OptionDef::value("--master", &[]),
        OptionDef::value("--name", &[]),
        OptionDef::value("--num-executors", &[]),
        OptionDef::value("--packages", &[]),
        OptionDef::value("--principal", &[]),
        OptionDef::value("--properties-file", &[]),
        OptionDef::value("--proxy-user", &[]),
        OptionDef::value("--py-files", &[]),
        OptionDef::value("--queue", &[]),
        OptionDef::value("--repositories", &[]),
        OptionDef::value(STATUS, &[]),
        OptionDef::value("--total-executor-cores", &[]),
        // === Switches ===
        OptionDef::switch(HELP, &["-h"]),
        OptionDef::switch("--supervise", &[]),
        OptionDef::switch(USAGE_ERROR, &[]),
        OptionDef::switch("--verbose", &["-v"]),
        OptionDef::switch(VERSION, &[]),
    ])
}
