//! Property tests for depfile rewriting.

use std::path::Path;

use proptest::prelude::*;

use dart_compile_exe::rewrite_target;

/// Path-ish strings with no colon, so they cannot contain the `": "` separator
fn path_token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9/_.-]{1,32}").unwrap()
}

/// Dependency lists as the compiler could plausibly write them
fn dep_list() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9/_. :\\\\-]{0,128}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rewriting never panics on arbitrary input, malformed or not.
    #[test]
    fn property_rewrite_never_panics(
        content in "(?s).{0,256}",
        output in path_token()
    ) {
        let _ = rewrite_target(&content, &output, Path::new("x.d"));
    }

    /// PROPERTY: Rewriting a well-formed rule twice with the same output is
    /// byte-identical after the first pass.
    #[test]
    fn property_rewrite_idempotent(
        target in path_token(),
        deps in dep_list(),
        output in path_token()
    ) {
        let content = format!("{}: {}", target, deps);
        let once = rewrite_target(&content, &output, Path::new("x.d")).unwrap();
        let twice = rewrite_target(&once, &output, Path::new("x.d")).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: The dependency portion survives the rewrite verbatim.
    #[test]
    fn property_rewrite_preserves_deps(
        target in path_token(),
        deps in dep_list(),
        output in path_token()
    ) {
        let content = format!("{}: {}", target, deps);
        let rewritten = rewrite_target(&content, &output, Path::new("x.d")).unwrap();
        prop_assert_eq!(rewritten, format!("{}: {}", output, deps));
    }

    /// PROPERTY: Input with no separator is always a controlled error.
    #[test]
    fn property_no_separator_is_error(
        content in "[^:]{0,128}",
        output in path_token()
    ) {
        prop_assert!(rewrite_target(&content, &output, Path::new("x.d")).is_err());
    }
}
