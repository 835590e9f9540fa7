//! Platform renderers for a finished [`CommandSpec`](crate::command::CommandSpec).
//!
//! The caller picks one per host: [`render_batch`] for cmd.exe scripts,
//! [`render_posix`] + [`write_nul_delimited`] for bash.

mod batch;
mod posix;

pub use batch::{quote_for_batch, render_batch};
pub use posix::{render_posix, write_nul_delimited};
