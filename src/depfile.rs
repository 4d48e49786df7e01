//! Depfile rewriting
//!
//! ninja matches depfile targets by string identity against its own
//! (build-relative) node names. `dart compile exe` writes the absolute
//! output path as the rule target, so the edge would silently never match.
//! The rewrite replaces the target with the path GN asked for and keeps the
//! dependency list byte-for-byte, escaping included.

use std::fs;
use std::path::Path;

use crate::error::{CompileError, CompileResult};

/// Separator between a depfile rule's target and its dependencies
const TARGET_SEPARATOR: &str = ": ";

/// Replace the rule target with `output`, keeping the dependencies verbatim
///
/// The first `": "` wins when more than one occurs. Input with no separator
/// is a [`CompileError::MalformedDepfile`] naming `depfile`.
pub fn rewrite_target(content: &str, output: &str, depfile: &Path) -> CompileResult<String> {
    let Some((_, deps)) = content.split_once(TARGET_SEPARATOR) else {
        return Err(CompileError::MalformedDepfile {
            path: depfile.to_path_buf(),
        });
    };
    Ok(format!("{output}{TARGET_SEPARATOR}{deps}"))
}

/// Rewrite the depfile in place so its target is `output`
pub fn rewrite_file(depfile: &Path, output: &str) -> CompileResult<()> {
    let content = fs::read_to_string(depfile)?;
    let rewritten = rewrite_target(&content, output, depfile)?;
    fs::write(depfile, rewritten)?;
    Ok(())
}
