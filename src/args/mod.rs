//! Option parsing for the submission grammar.
//!
//! ```text
//! tokens → parse (scanner) → ParsedOption → caller policy (Flow)
//! ```
//!
//! The strict policy lives in the submit builder; [`salvage_class_name`]
//! is the lenient one used when the strict parse fails.

mod parser;
mod registry;
mod salvage;

pub use parser::{parse, Flow, ParseError, ParsedOption};
pub use registry::{
    submit_catalog, OptionArity, OptionCatalog, OptionDef, CLASS, CONF, DEPLOY_MODE,
    DRIVER_CLASS_PATH, DRIVER_JAVA_OPTIONS, DRIVER_LIBRARY_PATH, DRIVER_MEMORY, HELP,
    KILL_SUBMISSION, STATUS, USAGE_ERROR, VERSION,
};
pub use salvage::salvage_class_name;
