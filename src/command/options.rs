//! Extra runtime options taken from environment variables and files.

use crate::error::{LaunchError, Result};

/// Substring that marks an explicit max-heap setting.
pub const MAX_HEAP_MARKER: &str = "Xmx";

/// Split an option string by shell-word rules.
///
/// `None` and empty strings yield no options. `source_name` only feeds the
/// error message.
pub fn split_options(source_name: &str, value: Option<&str>) -> Result<Vec<String>> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(Vec::new());
    };
    shell_words::split(value).map_err(|_| LaunchError::InvalidOptionString {
        source_name: source_name.to_string(),
        value: value.to_string(),
    })
}

/// Reject values that try to size the heap outside the memory channel.
///
/// Deliberately a plain substring test: any occurrence counts, even inside
/// an unrelated token.
pub fn check_no_max_heap(key: &str, value: &str) -> Result<()> {
    if value.contains(MAX_HEAP_MARKER) {
        return Err(LaunchError::ConfigConflict {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
