//! Combinators.

use std::fmt;

use strum_macros::{EnumIter, EnumString};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Parses from either the symbol or its kebab-case name, so `">"` and
/// `"child"` both yield [`Combinator::Child`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    #[strum(serialize = " ", serialize = "descendant")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    #[strum(serialize = ">", serialize = "child")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A."
    #[strum(serialize = "+", serialize = "next-sibling")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that follows
    /// element A (not necessarily immediately)."
    #[strum(serialize = "~", serialize = "subsequent-sibling")]
    SubsequentSibling,
}

impl Combinator {
    /// The symbol written between the two selectors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
