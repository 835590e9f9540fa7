/// Host family the command is being prepared for.
///
/// Decides the path-list separator, the runtime executable name and which
/// serializer the binary uses for its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Platform {
    /// Unix-like hosts: NUL-delimited token stream for bash.
    Posix,
    /// Windows hosts: one batch-quoted command line.
    Windows,
}

impl Platform {
    /// Platform the launcher was compiled for.
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    pub fn path_separator(self) -> char {
        match self {
            Platform::Posix => ':',
            Platform::Windows => ';',
        }
    }

    pub fn java_executable_name(self) -> &'static str {
        match self {
            Platform::Posix => "java",
            Platform::Windows => "java.exe",
        }
    }

    /// Variable the dynamic loader searches for native libraries.
    pub fn library_path_var(self) -> &'static str {
        match self {
            Platform::Windows => "PATH",
            Platform::Posix if cfg!(target_os = "macos") => "DYLD_LIBRARY_PATH",
            Platform::Posix => "LD_LIBRARY_PATH",
        }
    }
}
