//! dart-compile-exe CLI
//!
//! Usage: dart-compile-exe --dart-sdk <sdk> --sdk-hash <hash> \
//!     --entry-point <main.dart> --output <exe> --packages <config> \
//!     --depfile <depfile>
//!
//! Runs `dart compile exe` against the prebuilt SDK and rewrites the emitted
//! depfile to a build-relative target. Quiet on success; failure reports go
//! to stdout, where GN captures them.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use dart_compile_exe::{rewrite_file, run_compile, CompileRequest, DartSdk};

/// dart-compile-exe - run `dart compile exe` and fix up its depfile
#[derive(Parser, Debug)]
#[command(name = "dart-compile-exe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the prebuilt Dart SDK
    #[arg(long)]
    dart_sdk: PathBuf,

    /// SDK hash, forwarded as -Dsdk_hash=<hash>
    #[arg(long)]
    sdk_hash: String,

    /// Dart entry point to precompile
    #[arg(long)]
    entry_point: PathBuf,

    /// Path to the resulting executable
    #[arg(long)]
    output: PathBuf,

    /// Path to the package config file
    #[arg(long)]
    packages: PathBuf,

    /// Path to the depfile to write
    #[arg(long)]
    depfile: PathBuf,

    /// Verbosity level (-v prints the compiler command line)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // GN captures stdout; the failure report belongs there.
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let sdk = DartSdk::resolve(&cli.dart_sdk)?;
    let dart_binary = sdk.require_dart_binary()?;

    let request = CompileRequest {
        entry_point: cli.entry_point.clone(),
        output: cli.output.clone(),
        packages: cli.packages.clone(),
        depfile: cli.depfile.clone(),
        sdk_hash: cli.sdk_hash.clone(),
    };
    run_compile(&dart_binary, &request, cli.verbose > 0)?;

    // The rewritten target must match the --output string exactly; ninja
    // compares it against its node names byte-for-byte.
    rewrite_file(&cli.depfile, &cli.output.to_string_lossy())?;
    Ok(())
}
