//! Launcher front-end: turns "run class X with arguments Y" into a runtime
//! command line for the calling shell script.

pub mod args;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod env;
pub mod error;
pub mod logging;
pub mod platform;
pub mod render;

pub use error::{LaunchError, Result};
