use std::collections::BTreeMap;

/// Variables the child process must see, ordered by name.
pub type ChildEnv = BTreeMap<String, String>;

/// A fully resolved invocation: executable, flags, class name, arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    /// Command tokens in execution order.
    pub tokens: Vec<String>,
    /// Extra environment for the child (not the parent's environment).
    pub env: ChildEnv,
}

impl CommandSpec {
    pub fn new(tokens: Vec<String>, env: ChildEnv) -> Self {
        Self { tokens, env }
    }

    /// Tokens joined with single spaces, for diagnostics only.
    pub fn display_line(&self) -> String {
        self.tokens.join(" ")
    }
}
