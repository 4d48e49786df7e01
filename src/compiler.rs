//! `dart compile exe` invocation
//!
//! Builds the fixed argument template, spawns the compiler synchronously and
//! waits for it. Output is swallowed on success so build logs stay quiet; on
//! failure the full command line and the captured output are reported.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{CompileError, CompileResult};

/// One AOT compile request, assembled from the CLI flags
#[derive(Debug, Clone)]
pub struct CompileRequest {
    /// Dart source file compilation starts from
    pub entry_point: PathBuf,
    /// Destination path for the produced executable
    pub output: PathBuf,
    /// Package config file consumed by the compiler
    pub packages: PathBuf,
    /// Depfile the compiler writes
    pub depfile: PathBuf,
    /// SDK version hash, forwarded as a compile-time define
    pub sdk_hash: String,
}

impl CompileRequest {
    /// Argument vector for the `dart` binary, in template order
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["compile".into(), "exe".into()];
        args.push("--packages".into());
        args.push(self.packages.clone().into());
        args.push(format!("-Dsdk_hash={}", self.sdk_hash).into());
        args.push("--depfile".into());
        args.push(self.depfile.clone().into());
        args.push("-o".into());
        args.push(self.output.clone().into());
        args.push(self.entry_point.clone().into());
        args
    }
}

/// Run the compiler, swallowing its output unless it fails
///
/// A non-zero exit becomes [`CompileError::CompileFailed`] carrying the
/// merged stdout/stderr; an OS-level spawn error becomes
/// [`CompileError::LaunchFailed`]. No timeout: the surrounding build system
/// bounds runtimes.
pub fn run_compile(dart_binary: &Path, request: &CompileRequest, verbose: bool) -> CompileResult<()> {
    let args = request.to_args();
    let command_line = render_command(dart_binary, &args);

    if verbose {
        println!("Running: {}", command_line);
    }

    let output = Command::new(dart_binary)
        .args(&args)
        .output()
        .map_err(|source| CompileError::LaunchFailed {
            command: command_line.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(CompileError::CompileFailed {
            command: command_line,
            output: merge_streams(&output.stdout, &output.stderr),
        });
    }

    Ok(())
}

/// Human-readable command line for failure reports
fn render_command(binary: &Path, args: &[OsString]) -> String {
    let mut parts = vec![binary.display().to_string()];
    parts.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}

fn merge_streams(stdout: &[u8], stderr: &[u8]) -> String {
    let mut merged = String::from_utf8_lossy(stdout).into_owned();
    if !stderr.is_empty() {
        if !merged.is_empty() && !merged.ends_with('\n') {
            merged.push('\n');
        }
        merged.push_str(&String::from_utf8_lossy(stderr));
    }
    merged
}
