//! Best-effort class-name recovery for malformed submission arguments.

use crate::args::parser::{parse, Flow, ParsedOption};
use crate::args::registry::{submit_catalog, CLASS};

/// Find the `--class` value in arguments that failed strict parsing.
///
/// Unlike a scan that stops after the first recognized option (and so only
/// sees `--class` when it leads), this keeps going over every recognized
/// option. It stops at the first unknown token and swallows every scanner
/// error. Whatever was seen before the failure is still returned; if
/// `--class` appears more than once the last one wins.
pub fn salvage_class_name(args: &[String]) -> Option<String> {
    let mut class_name = None;

    let outcome = parse(args, &submit_catalog(), |parsed| match parsed {
        ParsedOption::Recognized { opt, value } => {
            if opt == CLASS {
                class_name = value;
            }
            Flow::Continue
        }
        ParsedOption::Unknown { .. } => Flow::Halt,
        ParsedOption::Positional { .. } => Flow::Continue,
    });

    if let Err(e) = outcome {
        tracing::debug!(error = %e, "ignoring parse error during class name recovery");
    }

    class_name
}
