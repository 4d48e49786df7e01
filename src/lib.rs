//! dart-compile-exe - GN helper around `dart compile exe`
//!
//! Compiles a Dart entry point to a native executable with the prebuilt
//! SDK's AOT compiler, then rewrites the compiler-emitted depfile so its
//! target is the build-relative output path GN expects instead of the
//! absolute path the compiler writes.
//!
//! This is a workaround for `dart compile exe` in the prebuilt SDK offering
//! no way to control the depfile target. Once the checked-in SDK rolls past
//! that, the helper can go away.

pub mod compiler;
pub mod depfile;
pub mod error;
pub mod sdk;

// Re-exports for convenience
pub use compiler::{run_compile, CompileRequest};
pub use depfile::{rewrite_file, rewrite_target};
pub use error::{CompileError, CompileResult};
pub use sdk::DartSdk;
