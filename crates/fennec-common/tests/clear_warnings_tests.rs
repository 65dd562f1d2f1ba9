//! Clearing touches the whole process-global warning set, so it lives in its
//! own test binary.

use fennec_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_clear_warnings_forgets_messages() {
    warn_once("Clear", "to be forgotten");
    warn_once("Clear", "also forgotten");
    clear_warnings();
    assert!(!has_warned("Clear", "to be forgotten"));
    assert!(!has_warned("Clear", "also forgotten"));

    warn_once("Clear", "to be forgotten");
    assert!(has_warned("Clear", "to be forgotten"));
}
