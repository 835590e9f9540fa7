//! Integration tests for the platform serializers.

mod common;

use common::strings;
use spark_launcher::command::{ChildEnv, CommandSpec};
use spark_launcher::render::{quote_for_batch, render_batch, render_posix, write_nul_delimited};

fn spec(tokens: &[&str], env: &[(&str, &str)]) -> CommandSpec {
    let env: ChildEnv = env
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    CommandSpec::new(strings(tokens), env)
}

fn nul_stream(spec: &CommandSpec) -> Vec<u8> {
    let mut out = Vec::new();
    write_nul_delimited(&render_posix(spec), &mut out).unwrap();
    out
}

// =============================================================================
// TOKEN STREAM
// =============================================================================

#[test]
fn stream_without_env_is_plain_tokens() {
    let spec = spec(&["java", "-cp", "x", "Main"], &[]);
    assert_eq!(nul_stream(&spec), b"java\0-cp\0x\0Main\0");
}

#[test]
fn stream_with_env_is_wrapped_in_env() {
    let spec = spec(&["java", "-cp", "x", "Main"], &[("FOO", "bar")]);
    assert_eq!(nul_stream(&spec), b"env\0FOO=bar\0java\0-cp\0x\0Main\0");
}

#[test]
fn env_entries_are_ordered_by_name() {
    let spec = spec(&["java"], &[("ZED", "1"), ("ALPHA", "2")]);
    assert_eq!(render_posix(&spec), strings(&["env", "ALPHA=2", "ZED=1", "java"]));
}

#[test]
fn tokens_with_spaces_stay_single_tokens() {
    let spec = spec(&["java", "-Dname=a b"], &[]);
    assert_eq!(nul_stream(&spec), b"java\0-Dname=a b\0");
}

// =============================================================================
// BATCH
// =============================================================================

#[test]
fn space_forces_quotes() {
    assert_eq!(quote_for_batch("C:\\Program Files\\x"), "\"C:\\Program Files\\x\"");
}

#[test]
fn embedded_quote_is_doubled() {
    assert_eq!(quote_for_batch("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(quote_for_batch("a\"b"), "\"a\"\"b\"");
}

#[test]
fn batch_line_without_env() {
    let spec = spec(&["C:\\jdk\\bin\\java.exe", "-Xmx1g", "Main", "two words"], &[]);
    assert_eq!(
        render_batch(&spec),
        "C:\\jdk\\bin\\java.exe -Xmx1g Main \"two words\""
    );
}

#[test]
fn batch_line_with_env_prefixes() {
    let spec = spec(&["java", "-Dk=v"], &[("A", "1"), ("PATH", "C:\\lib;C:\\bin")]);
    assert_eq!(
        render_batch(&spec),
        "set A=1 && set PATH=C:\\lib;C:\\bin && java \"-Dk=v\""
    );
}
