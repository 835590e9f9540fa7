//! Option scanner — raw tokens → parsed options, one step at a time.
//!
//! The scanner owns the token grammar (`--opt value`, `--opt=value`,
//! switches, aliases). Callers own the policy: each step hands them a
//! [`ParsedOption`] and they answer with a [`Flow`].

use thiserror::Error;

use crate::args::registry::{OptionArity, OptionCatalog};

/// One scanned unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedOption {
    /// Catalog option, normalized to its long form. `value` is `None` for switches.
    Recognized {
        opt: &'static str,
        value: Option<String>,
    },
    /// Token not in the catalog (flag or first positional).
    Unknown { opt: String },
    /// Everything after the point where scanning stopped. Delivered exactly once.
    Positional { tokens: Vec<String> },
}

/// Caller's answer to a scanned unit.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep scanning.
    Continue,
    /// Stop; remaining tokens become positional.
    Halt,
    /// Stop and fail the whole parse.
    Fail(ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Missing argument for option '{0}'.")]
    MissingValue(String),

    #[error("{0}")]
    Rejected(String),
}

/// Scan `args` against `catalog`, feeding every unit to `step`.
///
/// After a `Halt` (or when the tokens run out) `step` receives a final
/// `Positional` with whatever is left, possibly empty.
pub fn parse<F>(args: &[String], catalog: &OptionCatalog, mut step: F) -> Result<(), ParseError>
where
    F: FnMut(ParsedOption) -> Flow,
{
    let mut idx = 0;

    while idx < args.len() {
        let arg = &args[idx];
        let (name, inline) = split_inline(arg);

        let parsed = match catalog.find(name) {
            Some(def) if def.arity == OptionArity::RequiresValue => {
                let value = match inline {
                    Some(v) => v.to_string(),
                    None => {
                        idx += 1;
                        args.get(idx)
                            .cloned()
                            .ok_or_else(|| ParseError::MissingValue(name.to_string()))?
                    }
                };
                ParsedOption::Recognized {
                    opt: def.long,
                    value: Some(value),
                }
            }
            // A switch given `=value` is not a switch spelling we know.
            Some(def) if inline.is_none() => ParsedOption::Recognized {
                opt: def.long,
                value: None,
            },
            _ => ParsedOption::Unknown { opt: arg.clone() },
        };
        idx += 1;

        match step(parsed) {
            Flow::Continue => {}
            Flow::Halt => break,
            Flow::Fail(e) => return Err(e),
        }
    }

    let tokens = args.get(idx..).unwrap_or_default().to_vec();
    match step(ParsedOption::Positional { tokens }) {
        Flow::Fail(e) => Err(e),
        Flow::Continue | Flow::Halt => Ok(()),
    }
}

/// Split `--name=value` into its parts. Both parts must be non-empty.
fn split_inline(arg: &str) -> (&str, Option<&str>) {
    if let Some(rest) = arg.strip_prefix("--") {
        if let Some((name, value)) = rest.split_once('=') {
            if !name.is_empty() && !value.is_empty() {
                return (&arg[..name.len() + 2], Some(value));
            }
        }
    }
    (arg, None)
}
