//! Classpath composition and library discovery.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LauncherSettings;
use crate::env::EnvSnapshot;

pub const SPARK_CLASSPATH: &str = "SPARK_CLASSPATH";
pub const HADOOP_CONF_DIR: &str = "HADOOP_CONF_DIR";
pub const YARN_CONF_DIR: &str = "YARN_CONF_DIR";
pub const SPARK_DIST_CLASSPATH: &str = "SPARK_DIST_CLASSPATH";

/// Variables contributing external classpath fragments, in classpath order.
const EXTERNAL_FRAGMENTS: [&str; 3] = [HADOOP_CONF_DIR, YARN_CONF_DIR, SPARK_DIST_CLASSPATH];

/// Every input that contributes to the classpath, in final order.
///
/// Each field may itself hold a separator-joined list.
#[derive(Debug, Clone, Default)]
pub struct ClasspathSources {
    /// Operator override (`SPARK_CLASSPATH`).
    pub user: Option<String>,
    /// Caller-supplied entry (e.g. the driver's extra classpath).
    pub extra: Option<String>,
    pub conf_dir: Option<String>,
    /// Discovered library entries (`<dir>/*`).
    pub libraries: Vec<String>,
    /// External framework configuration and distribution classpath.
    pub external: Vec<String>,
}

impl ClasspathSources {
    /// Gather sources from settings, environment and the install tree.
    pub fn collect(settings: &LauncherSettings, env: &EnvSnapshot, extra: Option<&str>) -> Self {
        Self {
            user: env.non_empty(SPARK_CLASSPATH).map(str::to_string),
            extra: extra.map(str::to_string),
            conf_dir: Some(settings.conf_dir.to_string_lossy().into_owned()),
            libraries: discover_library_dirs(settings)
                .iter()
                .map(|dir| dir.join("*").to_string_lossy().into_owned())
                .collect(),
            external: EXTERNAL_FRAGMENTS
                .iter()
                .filter_map(|name| env.non_empty(name))
                .map(str::to_string)
                .collect(),
        }
    }

    /// Join all fragments with `separator`.
    ///
    /// Empty pieces are skipped and an entry is kept only at its first position.
    pub fn join(&self, separator: char) -> String {
        let fragments = self
            .user
            .iter()
            .chain(self.extra.iter())
            .chain(self.conf_dir.iter())
            .chain(self.libraries.iter())
            .chain(self.external.iter());

        let mut entries: Vec<&str> = Vec::new();
        for piece in fragments.flat_map(|f| f.split(separator)) {
            if !piece.is_empty() && !entries.contains(&piece) {
                entries.push(piece);
            }
        }

        let mut joined = String::new();
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                joined.push(separator);
            }
            joined.push_str(entry);
        }
        joined
    }
}

/// Locate the directories holding the runtime's library jars.
///
/// Binary distributions ship `<home>/jars`; source builds keep them under
/// `assembly/target/scala-<version>/jars`.
pub fn discover_library_dirs(settings: &LauncherSettings) -> Vec<PathBuf> {
    let release = settings.home.join("jars");
    if release.is_dir() {
        return vec![release];
    }

    let target = settings.home.join("assembly").join("target");
    let version = settings
        .scala_version
        .clone()
        .or_else(|| detect_scala_version(&target));

    if let Some(version) = version {
        let built = target.join(format!("scala-{version}")).join("jars");
        if built.is_dir() {
            return vec![built];
        }
    }

    tracing::warn!(
        home = %settings.home.display(),
        "no library directory found; classpath will not include runtime jars"
    );
    Vec::new()
}

/// The single `scala-*` build directory under `target`, if unambiguous.
fn detect_scala_version(target: &Path) -> Option<String> {
    let Ok(entries) = fs::read_dir(target) else {
        return None;
    };

    let versions: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .filter_map(|e| {
            e.file_name()
                .to_str()
                .and_then(|n| n.strip_prefix("scala-"))
                .map(str::to_string)
        })
        .collect();

    match versions.as_slice() {
        [only] => Some(only.clone()),
        [] => None,
        _ => {
            tracing::warn!(
                ?versions,
                "multiple build flavours present; set SPARK_SCALA_VERSION to pick one"
            );
            None
        }
    }
}
