use crate::command::CommandSpec;

/// Render `spec` as one line for a Windows batch script.
///
/// Child variables become `set KEY=VALUE && ` prefixes; every token is
/// quoted as needed and tokens are joined with single spaces.
pub fn render_batch(spec: &CommandSpec) -> String {
    let mut line = String::new();
    for (key, value) in &spec.env {
        line.push_str(&format!("set {key}={value} && "));
    }

    let quoted: Vec<String> = spec.tokens.iter().map(|t| quote_for_batch(t)).collect();
    line.push_str(&quoted.join(" "));
    line
}

/// Quote one argument for cmd.exe.
///
/// Quotes are needed for whitespace and for characters batch treats as
/// separators (`=`, `,`, `;`) or quote delimiters. Inside quotes a `"` is
/// written as `""`, and a trailing backslash is doubled so it does not
/// escape the closing quote.
pub fn quote_for_batch(arg: &str) -> String {
    let needs_quotes = arg
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '=' | ',' | ';'));
    if !needs_quotes {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    if arg.ends_with('\\') {
        quoted.push('\\');
    }
    quoted.push('"');
    quoted
}
