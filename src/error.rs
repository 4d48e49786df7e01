//! Error types for dart-compile-exe
//!
//! Uses `thiserror` for library errors; the binary maps every failure to
//! exit code 1.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for compile-helper operations
pub type CompileResult<T> = Result<T, CompileError>;

/// Main error type for the compile helper
#[derive(Error, Debug)]
pub enum CompileError {
    /// Compiler binary missing from the prebuilt SDK
    ///
    /// Checked before spawning so the report reads better than the
    /// OS-level "No such file or directory".
    #[error("Binary not found: {}", path.display())]
    BinaryNotFound { path: PathBuf },

    /// Compiler ran and exited non-zero
    #[error("Command failed: {command}\noutput: {output}")]
    CompileFailed { command: String, output: String },

    /// Compiler could not be spawned at all (permissions, unreadable, ...)
    #[error("Command failed: {command}\noutput: {source}")]
    LaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Depfile is missing the `": "` separator between target and deps
    #[error("malformed depfile {}: expected '<target>: <deps>'", path.display())]
    MalformedDepfile { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
