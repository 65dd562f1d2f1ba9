//! Order-checked CSS selector builder for the Fennec toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 3.1 Structure](https://www.w3.org/TR/selectors-4/#structure))
//!   - Type (element), ID, class, attribute, pseudo-class and pseudo-element fragments
//!   - Fragment ordering: element, id, class, attribute, pseudo-class, pseudo-element
//!   - At most one element, one ID and one pseudo-element per compound
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Joining two rendered selectors around a combinator
//!
//! - **Snapshots**
//!   - JSON save and restore of a builder's state
//!
//! # Not Implemented
//!
//! - Parsing selectors from text
//! - Matching selectors against a document tree
//! - Specificity
//!
//! # Example
//!
//! ```
//! use fennec_selector::{combine, element, id};
//!
//! let field = element("input")?.attr("type=\"text\"")?.pseudo_class("focus")?;
//! let form = id("signup")?;
//! assert_eq!(
//!     combine(&form, ">", &field).stringify(),
//!     "#signup > input[type=\"text\"]:focus"
//! );
//! # Ok::<(), fennec_selector::SelectorError>(())
//! ```

/// The fluent, order-checked selector accumulator.
pub mod builder;
/// Combinator symbols per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Errors raised when a fragment breaks ordering or occurrence rules.
pub mod error;
/// Stateless entry points that start a new builder per call.
pub mod facade;
/// Fragment kinds and their fixed ranking.
pub mod kind;

pub use builder::SelectorBuilder;
pub use combinator::Combinator;
pub use error::SelectorError;
pub use facade::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use kind::FragmentKind;
