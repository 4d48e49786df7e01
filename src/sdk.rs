//! Prebuilt SDK layout
//!
//! The helper is handed the SDK root on the command line by GN. Relative
//! roots refer to binaries produced by the current build and are resolved
//! against the build output directory, which is the working directory this
//! tool runs in.

use std::path::{Path, PathBuf};

use crate::error::{CompileError, CompileResult};

/// Handle to a prebuilt Dart SDK checkout
#[derive(Debug, Clone)]
pub struct DartSdk {
    root: PathBuf,
}

impl DartSdk {
    /// Resolve an SDK root against the current working directory
    pub fn resolve(root: &Path) -> CompileResult<Self> {
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            std::env::current_dir()?.join(root)
        };
        Ok(Self { root })
    }

    /// Absolute SDK root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the `dart` binary inside the SDK
    pub fn dart_binary(&self) -> PathBuf {
        self.root.join("bin").join("dart")
    }

    /// Locate the compiler, failing before any spawn attempt if it is absent
    pub fn require_dart_binary(&self) -> CompileResult<PathBuf> {
        let binary = self.dart_binary();
        if !binary.is_file() {
            return Err(CompileError::BinaryNotFound { path: binary });
        }
        Ok(binary)
    }
}
