//! Integration tests for internal service commands.

mod common;

use std::fs;

use common::{env, strings, SparkHome, JAVA};
use spark_launcher::command::{
    known_targets, option_source, CommandBuilder, NamedProcessCommandBuilder, DEFAULT_MEM,
    PERM_GEN_FLAG,
};
use spark_launcher::env::EnvSnapshot;
use spark_launcher::LaunchError;

const MASTER: &str = "org.apache.spark.deploy.master.Master";
const DISPATCHER: &str = "org.apache.spark.deploy.mesos.MesosClusterDispatcher";

fn build(
    home: &SparkHome,
    target: &str,
    args: &[&str],
    env: &EnvSnapshot,
) -> Result<Vec<String>, LaunchError> {
    NamedProcessCommandBuilder::new(target, strings(args))
        .build_command(&home.settings(), env)
        .map(|spec| spec.tokens)
}

/// Every target with a dedicated entry, plus one that falls back to the default.
fn all_targets() -> Vec<&'static str> {
    let mut targets: Vec<_> = known_targets().collect();
    targets.push("com.example.SomeTool");
    targets
}

#[test]
fn master_command_layout() {
    let home = SparkHome::new();
    let env = env(&[
        ("SPARK_DAEMON_JAVA_OPTS", "-Da=1"),
        ("SPARK_MASTER_OPTS", "-Db=2 -Dc=3"),
        ("SPARK_DAEMON_MEMORY", "2g"),
    ]);

    let tokens = build(&home, MASTER, &["--host", "h", "--port", "7077"], &env).unwrap();

    assert_eq!(
        tokens,
        vec![
            JAVA.to_string(),
            "-cp".into(),
            home.classpath(),
            "-Da=1".into(),
            "-Db=2".into(),
            "-Dc=3".into(),
            "-Xmx2g".into(),
            PERM_GEN_FLAG.into(),
            MASTER.into(),
            "--host".into(),
            "h".into(),
            "--port".into(),
            "7077".into(),
        ]
    );
}

#[test]
fn options_from_other_targets_are_ignored() {
    let home = SparkHome::new();
    let env = env(&[("SPARK_WORKER_OPTS", "-Dworker=1")]);
    let tokens = build(&home, MASTER, &[], &env).unwrap();
    assert!(!tokens.iter().any(|t| t == "-Dworker=1"));
}

#[test]
fn tokens_are_never_empty() {
    let home = SparkHome::new();
    for target in all_targets() {
        let source = option_source(target);
        let mut pairs: Vec<(&str, &str)> = source.options_vars.iter().map(|v| (*v, "  ")).collect();
        if let Some(mem) = source.memory_var {
            pairs.push((mem, ""));
        }

        let tokens = build(&home, target, &["", "arg", ""], &env(&pairs)).unwrap();
        assert!(
            tokens.iter().all(|t| !t.is_empty()),
            "empty token for {target}: {tokens:?}"
        );
    }
}

#[test]
fn heap_override_in_any_options_variable_is_rejected() {
    let home = SparkHome::new();
    for target in all_targets() {
        let source = option_source(target);
        for offending in source.options_vars {
            let pairs: Vec<(&str, &str)> = source
                .options_vars
                .iter()
                .map(|v| if v == offending { (*v, "-Dx=1 -Xmx8g") } else { (*v, "-Dok=1") })
                .collect();

            let err = build(&home, target, &[], &env(&pairs)).unwrap_err();
            match err {
                LaunchError::ConfigConflict { key, value } => {
                    assert_eq!(key, *offending, "wrong variable named for {target}");
                    assert_eq!(value, "-Dx=1 -Xmx8g");
                }
                other => panic!("expected conflict for {target}/{offending}, got {other:?}"),
            }
        }
    }
}

#[test]
fn conflict_message_names_variable_and_value() {
    let home = SparkHome::new();
    let err = build(&home, MASTER, &[], &env(&[("SPARK_MASTER_OPTS", "-Xmx4g")])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "SPARK_MASTER_OPTS is not allowed to specify max heap(Xmx) memory settings (was -Xmx4g). \
         Use the corresponding configuration instead."
    );
}

#[test]
fn heap_marker_inside_unrelated_token_is_still_rejected() {
    let home = SparkHome::new();
    let result = build(&home, "com.example.Tool", &[], &env(&[("SPARK_JAVA_OPTS", "-Dlabel=noXmxhere")]));
    assert!(matches!(result, Err(LaunchError::ConfigConflict { .. })));
}

#[test]
fn memory_defaults_when_unset_or_empty() {
    let home = SparkHome::new();
    let expected = format!("-Xmx{DEFAULT_MEM}");

    let unset = build(&home, MASTER, &[], &env(&[])).unwrap();
    assert!(unset.contains(&expected));

    let empty = build(&home, MASTER, &[], &env(&[("SPARK_DAEMON_MEMORY", "")])).unwrap();
    assert!(empty.contains(&expected));
}

#[test]
fn memory_variable_sets_exact_flag() {
    let home = SparkHome::new();
    let tokens = build(
        &home,
        "org.apache.spark.executor.CoarseGrainedExecutorBackend",
        &[],
        &env(&[("SPARK_EXECUTOR_MEMORY", "4g")]),
    )
    .unwrap();
    let heap: Vec<_> = tokens.iter().filter(|t| t.starts_with("-Xmx")).collect();
    assert_eq!(heap, vec!["-Xmx4g"]);
}

#[test]
fn target_without_memory_variable_uses_default() {
    let home = SparkHome::new();
    let tokens = build(&home, DISPATCHER, &[], &env(&[("SPARK_DAEMON_MEMORY", "8g")])).unwrap();
    assert!(tokens.contains(&"-Xmx1g".to_string()));
    assert!(!tokens.contains(&"-Xmx8g".to_string()));
}

#[test]
fn default_entry_reads_driver_memory() {
    let home = SparkHome::new();
    let tokens = build(
        &home,
        "com.example.Tool",
        &["x"],
        &env(&[("SPARK_JAVA_OPTS", "-Dtool=1"), ("SPARK_DRIVER_MEMORY", "512m")]),
    )
    .unwrap();
    assert_eq!(
        &tokens[3..],
        &strings(&["-Dtool=1", "-Xmx512m", PERM_GEN_FLAG, "com.example.Tool", "x"])
    );
}

#[test]
fn malformed_option_string_is_an_error() {
    let home = SparkHome::new();
    let result = build(&home, MASTER, &[], &env(&[("SPARK_DAEMON_JAVA_OPTS", "-Da=\"unterminated")]));
    assert!(matches!(
        result,
        Err(LaunchError::InvalidOptionString { ref source_name, .. }) if source_name == "SPARK_DAEMON_JAVA_OPTS"
    ));
}

// =============================================================================
// PREFIX: options file and library discovery
// =============================================================================

#[test]
fn java_opts_file_lines_precede_classpath() {
    let home = SparkHome::new();
    home.write_java_opts("-Dfile=1 \"-Dq=a b\"\n\n-Dsecond\n");

    let tokens = build(&home, MASTER, &[], &env(&[])).unwrap();
    assert_eq!(
        &tokens[..5],
        &strings(&[JAVA, "-Dfile=1", "-Dq=a b", "-Dsecond", "-cp"])
    );
}

#[test]
fn malformed_java_opts_line_is_skipped() {
    let home = SparkHome::new();
    home.write_java_opts("-Dbad=\"open\n-Dgood=1\n");

    let tokens = build(&home, MASTER, &[], &env(&[])).unwrap();
    assert_eq!(&tokens[..3], &strings(&[JAVA, "-Dgood=1", "-cp"]));
}

#[test]
fn perm_gen_from_options_file_is_not_repeated() {
    let home = SparkHome::new();
    home.write_java_opts("-XX:MaxPermSize=128m\n");

    let tokens = build(&home, MASTER, &[], &env(&[])).unwrap();
    let perm: Vec<_> = tokens.iter().filter(|t| t.starts_with("-XX:MaxPermSize=")).collect();
    assert_eq!(perm, vec!["-XX:MaxPermSize=128m"]);
}

#[test]
fn source_build_library_dir_is_used() {
    let home = SparkHome::bare();
    let jars = home.path().join("assembly/target/scala-2.11/jars");
    fs::create_dir_all(&jars).unwrap();

    let tokens = build(&home, MASTER, &[], &env(&[])).unwrap();
    let expected = format!("{}:{}", home.conf_dir().display(), jars.join("*").display());
    assert_eq!(tokens[2], expected);
}

#[test]
fn missing_library_dir_leaves_only_conf_dir() {
    let home = SparkHome::bare();
    let tokens = build(&home, MASTER, &[], &env(&[])).unwrap();
    assert_eq!(tokens[2], home.conf_dir().display().to_string());
}
