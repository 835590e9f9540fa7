use std::io::{self, Write};

use crate::command::CommandSpec;

/// Token sequence for a POSIX shell.
///
/// Without child variables this is the command unchanged; otherwise it is
/// wrapped as `env KEY=VALUE ... <command>`.
pub fn render_posix(spec: &CommandSpec) -> Vec<String> {
    if spec.env.is_empty() {
        return spec.tokens.clone();
    }

    let mut tokens = Vec::with_capacity(1 + spec.env.len() + spec.tokens.len());
    tokens.push("env".to_string());
    tokens.extend(spec.env.iter().map(|(k, v)| format!("{k}={v}")));
    tokens.extend(spec.tokens.iter().cloned());
    tokens
}

/// Write each token followed by a NUL byte.
///
/// NUL cannot appear inside an argument, so the calling shell can split on it.
pub fn write_nul_delimited<W: Write>(tokens: &[String], out: &mut W) -> io::Result<()> {
    for token in tokens {
        out.write_all(token.as_bytes())?;
        out.write_all(b"\0")?;
    }
    out.flush()
}
