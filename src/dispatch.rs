//! Dispatcher — ties target selection, recovery and building together.

use crate::args::{salvage_class_name, CLASS, USAGE_ERROR};
use crate::command::{
    CommandBuilder, CommandSpec, NamedProcessCommandBuilder, SubmitCommandBuilder, SUBMIT_CLASS,
};
use crate::config::LauncherSettings;
use crate::env::EnvSnapshot;
use crate::error::{LaunchError, Result};

/// Message for an invocation without a target.
pub const MISSING_TARGET: &str = "Not enough arguments: missing class name.";

/// Outcome of one dispatch, ready for rendering.
#[derive(Debug, Clone)]
pub struct Dispatched {
    /// The command to hand to the serializer.
    pub spec: CommandSpec,
    /// Echo the command to stderr before emitting it.
    pub print_launch_command: bool,
    /// Submission arguments were malformed; this is the message to report.
    pub recovered: Option<String>,
}

/// Builder chosen for the request, before it is run.
#[derive(Debug)]
pub struct Selection {
    pub builder: Box<dyn CommandBuilder>,
    pub recovered: Option<String>,
}

/// Pick the builder for `args`, whose first token is the target name.
///
/// Malformed submission arguments do not fail: they are replaced by a
/// usage-error request (keeping any recoverable `--class`) so the
/// submission entry point prints its own usage text.
pub fn select_builder(mut args: Vec<String>) -> Result<Selection> {
    if args.is_empty() {
        return Err(LaunchError::Usage(MISSING_TARGET.into()));
    }
    let target = args.remove(0);

    if target != SUBMIT_CLASS {
        return Ok(Selection {
            builder: Box::new(NamedProcessCommandBuilder::new(target, args)),
            recovered: None,
        });
    }

    match SubmitCommandBuilder::new(&args) {
        Ok(builder) => Ok(Selection {
            builder: Box::new(builder),
            recovered: None,
        }),
        Err(e) => {
            let message = e.to_string();
            tracing::info!(error = %message, "submission arguments rejected; building usage request");
            let fallback = usage_error_args(&args);
            let builder = SubmitCommandBuilder::new(&fallback)?;
            Ok(Selection {
                builder: Box::new(builder),
                recovered: Some(message),
            })
        }
    }
}

/// Synthetic argument list for the recovery path:
/// `[--class <name>] --usage-error`.
pub fn usage_error_args(args: &[String]) -> Vec<String> {
    let mut help = Vec::with_capacity(3);
    if let Some(class_name) = salvage_class_name(args) {
        help.push(CLASS.to_string());
        help.push(class_name);
    }
    help.push(USAGE_ERROR.to_string());
    help
}

/// Run the whole request: select, recover if needed, build.
pub fn dispatch(args: Vec<String>, settings: &LauncherSettings, env: &EnvSnapshot) -> Result<Dispatched> {
    let selection = select_builder(args)?;
    let spec = selection.builder.build_command(settings, env)?;

    Ok(Dispatched {
        spec,
        // The echo would bury the usage text when recovering.
        print_launch_command: settings.print_launch_command && selection.recovered.is_none(),
        recovered: selection.recovered,
    })
}
