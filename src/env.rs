//! Read-only view of the parent process environment.
//!
//! Builders never call `std::env::var` themselves: the binary captures one
//! [`EnvSnapshot`] at startup and hands it down, and tests build their own.

use std::collections::HashMap;

/// Immutable name → value map captured once.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw lookup. An empty value is returned as `Some("")`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Lookup that treats empty values as unset.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// First variable in `names` that has a non-empty value.
    pub fn first_non_empty(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|n| self.non_empty(n))
    }
}
