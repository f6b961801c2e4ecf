//! Fuzz target for path evaluation.
//!
//! Checks that evaluation never panics, is deterministic, and that a reported
//! span always lies on character boundaries of the input.

#![no_main]

use libfuzzer_sys::fuzz_target;

use protected_path_guard::evaluate_path;

fuzz_target!(|path: &str| {
    let first = evaluate_path(path);
    assert_eq!(first, evaluate_path(path));

    if let Some(m) = first.matched() {
        assert!(m.span.start <= m.span.end);
        assert!(path.is_char_boundary(m.span.start));
        assert!(path.is_char_boundary(m.span.end));
        assert!(!m.pattern.is_empty());
    } else {
        assert_eq!(first.pattern_text(), "");
    }
});
