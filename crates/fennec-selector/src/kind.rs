//! Fragment kinds.
//!
//! [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator."
//!
//! Fennec additionally fixes the order in which those simple selectors are
//! written: type, ID, class, attribute, pseudo-class, pseudo-element.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The category of a selector fragment.
///
/// Variants are declared in rank order. A builder only accepts a fragment
/// whose rank is at least the rank of the fragment before it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Rendered verbatim. Examples: `div`, `a`, `*`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Rendered as `#value`. Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Rendered as `.value`. Example: `.container`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Rendered as `[value]`. Example: `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Rendered as `:value`. Example: `:focus`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Rendered as `::value`. Example: `::before`
    PseudoElement,
}

impl FragmentKind {
    /// Position in the fixed fragment order, starting at 0 for elements.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Kinds that may appear at most once in a compound selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before the fragment value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the fragment value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// Render `value` as a fragment of this kind.
    #[must_use]
    pub fn render(self, value: &str) -> String {
        format!("{}{value}{}", self.prefix(), self.suffix())
    }
}
