//! Shared test utilities: install-tree fixtures and snapshot builders.

#![allow(dead_code, unused_imports)]

use std::fs;
use std::path::{Path, PathBuf};

use spark_launcher::config::LauncherSettings;
use spark_launcher::env::EnvSnapshot;
use spark_launcher::platform::Platform;
use tempfile::TempDir;

pub const JAVA: &str = "/jdk/bin/java";

pub fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

pub fn env(pairs: &[(&str, &str)]) -> EnvSnapshot {
    EnvSnapshot::from_pairs(pairs.iter().copied())
}

/// A throwaway install tree with a `jars` directory.
pub struct SparkHome {
    dir: TempDir,
}

impl SparkHome {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp home");
        fs::create_dir_all(dir.path().join("jars")).expect("create jars dir");
        Self { dir }
    }

    /// Install tree without any library directory.
    pub fn bare() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp home"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn conf_dir(&self) -> PathBuf {
        self.path().join("conf")
    }

    pub fn write_java_opts(&self, content: &str) {
        fs::create_dir_all(self.conf_dir()).expect("create conf dir");
        fs::write(self.conf_dir().join("java-opts"), content).expect("write java-opts");
    }

    pub fn settings(&self) -> LauncherSettings {
        LauncherSettings {
            java_executable: PathBuf::from(JAVA),
            ..LauncherSettings::with_home(self.path(), Platform::Posix)
        }
    }

    /// Classpath produced for this home with no classpath variables set.
    pub fn classpath(&self) -> String {
        format!(
            "{}:{}",
            self.conf_dir().display(),
            self.path().join("jars").join("*").display()
        )
    }
}
