//! Deduplicated warnings with colored terminal output.
//!
//! A warning is keyed by its component and message. The first occurrence is
//! printed to stderr; repeats are swallowed until [`clear_warnings`] runs.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Warnings already printed, keyed as `[component] message`.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// The set only ever grows or is cleared, so a poisoned lock still holds
/// usable data.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Print a warning for `component` unless the same message was already
/// printed.
///
/// # Example
/// ```
/// use fennec_common::warning::{has_warned, warn_once};
///
/// warn_once("Selector", "combine discarded 2 fragments");
/// assert!(has_warned("Selector", "combine discarded 2 fragments"));
/// ```
pub fn warn_once(component: &str, message: &str) {
    let first = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if first {
        let line = format!("[Fennec {component}] warning: {message}");
        eprintln!("{}", line.yellow());
    }
}

/// Whether `message` has been reported for `component` since the last
/// [`clear_warnings`].
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Forget every recorded warning so they can be printed again.
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
