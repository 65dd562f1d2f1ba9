//! Facade functions.
//!
//! Each function starts a fresh [`SelectorBuilder`] seeded with one
//! fragment, so a selector can be written without naming the builder type:
//!
//! ```
//! use fennec_selector::element;
//!
//! let link = element("a")?.attr("href$=\".png\"")?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//! # Ok::<(), fennec_selector::SelectorError>(())
//! ```
//!
//! The builders returned here share nothing with each other.

use crate::builder::SelectorBuilder;
use crate::error::SelectorError;

/// Start a selector with a type selector.
///
/// # Errors
///
/// Never fails on a fresh builder; the `Result` keeps chaining uniform.
pub fn element(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().element(value)
}

/// Start a selector with an ID selector.
///
/// # Errors
///
/// Never fails on a fresh builder; the `Result` keeps chaining uniform.
pub fn id(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().id(value)
}

/// Start a selector with a class selector.
///
/// # Errors
///
/// Never fails on a fresh builder; the `Result` keeps chaining uniform.
pub fn class(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().class(value)
}

/// Start a selector with an attribute selector.
///
/// # Errors
///
/// Never fails on a fresh builder; the `Result` keeps chaining uniform.
pub fn attr(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().attr(value)
}

/// Start a selector with a pseudo-class.
///
/// # Errors
///
/// Never fails on a fresh builder; the `Result` keeps chaining uniform.
pub fn pseudo_class(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_class(value)
}

/// Start a selector with a pseudo-element.
///
/// # Errors
///
/// Never fails on a fresh builder; the `Result` keeps chaining uniform.
pub fn pseudo_element(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_element(value)
}

/// Join two selectors around `combinator` in a new builder.
///
/// `combine(&a, "+", &b)` renders as `"<a> + <b>"`.
#[must_use]
pub fn combine(
    left: &SelectorBuilder,
    combinator: &str,
    right: &SelectorBuilder,
) -> SelectorBuilder {
    SelectorBuilder::new().combine(left, combinator, right)
}
