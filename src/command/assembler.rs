//! Command assembler — the invariant runtime prefix plus builder steps.

use std::fs;

use crate::command::classpath::ClasspathSources;
use crate::command::options::split_options;
use crate::command::spec::{ChildEnv, CommandSpec};
use crate::config::LauncherSettings;
use crate::env::EnvSnapshot;

/// Name of the static options file inside the configuration directory.
pub const JAVA_OPTS_FILE: &str = "java-opts";

/// Flag introducing the classpath argument.
pub const CLASSPATH_FLAG: &str = "-cp";

/// Legacy permanent-generation sizing, ignored by modern runtimes.
pub const PERM_GEN_FLAG: &str = "-XX:MaxPermSize=256m";
const PERM_GEN_PREFIX: &str = "-XX:MaxPermSize=";

/// Builder for the tokens and child environment of one invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandAssembler {
    tokens: Vec<String>,
    env: ChildEnv,
}

impl CommandAssembler {
    /// Start with an empty command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the invariant prefix shared by every launch:
    /// executable, static options file contents, `-cp <classpath>`.
    ///
    /// Total: an unreadable or malformed options file is logged and skipped.
    pub fn java_prefix(
        settings: &LauncherSettings,
        env: &EnvSnapshot,
        extra_classpath: Option<&str>,
    ) -> Self {
        let mut tokens = vec![settings.java_executable.to_string_lossy().into_owned()];
        tokens.extend(static_options(settings));

        let classpath =
            ClasspathSources::collect(settings, env, extra_classpath).join(settings.platform.path_separator());
        tracing::debug!(%classpath, "assembled classpath");

        tokens.push(CLASSPATH_FLAG.into());
        tokens.push(classpath);

        Self {
            tokens,
            env: ChildEnv::new(),
        }
    }

    /// Append pre-split runtime options.
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.tokens.extend(options);
        self
    }

    /// Append the max-heap flag for `size` (e.g. `4g` → `-Xmx4g`).
    pub fn with_heap(mut self, size: &str) -> Self {
        self.tokens.push(format!("-Xmx{size}"));
        self
    }

    /// Append the legacy perm-gen flag unless one is already present.
    pub fn with_perm_gen(mut self) -> Self {
        if !self.tokens.iter().any(|t| t.starts_with(PERM_GEN_PREFIX)) {
            self.tokens.push(PERM_GEN_FLAG.into());
        }
        self
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.tokens.push(arg.into());
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tokens.extend(args.into_iter().map(Into::into));
        self
    }

    /// Declare a variable for the child process. Later values replace earlier ones.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Build the final command. Tokens are kept exactly as given.
    pub fn build(self) -> CommandSpec {
        CommandSpec::new(self.tokens, self.env)
    }
}

/// Options from `<conf dir>/java-opts`, one shell-split line at a time.
fn static_options(settings: &LauncherSettings) -> Vec<String> {
    let path = settings.conf_dir.join(JAVA_OPTS_FILE);
    if !path.is_file() {
        return Vec::new();
    }

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read options file");
            return Vec::new();
        }
    };

    let source = path.display().to_string();
    let mut options = Vec::new();
    for line in content.lines() {
        match split_options(&source, Some(line)) {
            Ok(opts) => options.extend(opts),
            Err(e) => tracing::warn!(error = %e, "skipping malformed line in options file"),
        }
    }
    options
}
