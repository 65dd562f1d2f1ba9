//! Selector builder.
//!
//! [`SelectorBuilder`] accumulates rendered fragments and rejects any
//! fragment that would break the compound selector order
//! (element, id, class, attribute, pseudo-class, pseudo-element) or repeat
//! a kind that may only occur once.

use std::fmt;

use fennec_common::warning::warn_once;
use serde::{Deserialize, Serialize};

use crate::error::SelectorError;
use crate::kind::FragmentKind;

/// A fluent, append-only CSS selector accumulator.
///
/// Every fragment method consumes the builder and hands it back on success,
/// so calls chain with `?`. A rejected fragment leaves nothing appended.
///
/// ```
/// use fennec_selector::SelectorBuilder;
///
/// let selector = SelectorBuilder::new()
///     .id("main")?
///     .class("container")?
///     .class("editable")?;
/// assert_eq!(selector.stringify(), "#main.container.editable");
/// # Ok::<(), fennec_selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectorBuilder {
    /// Rendered fragments in call order.
    fragments: Vec<String>,
    /// Kind of the most recent fragment, `None` while empty.
    last_kind: Option<FragmentKind>,
    /// Singleton kinds already appended.
    singletons: Vec<FragmentKind>,
    /// Whether the content came from [`combine`](Self::combine), which
    /// leaves `last_kind` untouched.
    combined: bool,
}

/// Plain field bag a JSON snapshot is parsed into before a builder is
/// constructed from it.
#[derive(Deserialize)]
struct SelectorRecord {
    fragments: Vec<String>,
    #[serde(default)]
    last_kind: Option<FragmentKind>,
    #[serde(default)]
    singletons: Vec<FragmentKind>,
    #[serde(default)]
    combined: bool,
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
            last_kind: None,
            singletons: Vec::new(),
            combined: false,
        }
    }

    /// Kind of the most recently appended fragment.
    #[must_use]
    pub const fn last_kind(&self) -> Option<FragmentKind> {
        self.last_kind
    }

    /// Rendered fragments in call order.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Whether nothing has been appended or combined yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Append `value` as a fragment of `kind`.
    ///
    /// The named methods ([`element`](Self::element), [`id`](Self::id), ...)
    /// all delegate here.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::Duplicate`] if `kind` is a singleton kind that was
    ///   already appended.
    /// - [`SelectorError::Order`] if the previous fragment ranks after `kind`.
    pub fn push(mut self, kind: FragmentKind, value: &str) -> Result<Self, SelectorError> {
        self.check(kind)?;

        self.fragments.push(kind.render(value));
        if kind.is_singleton() {
            self.singletons.push(kind);
        }
        self.last_kind = Some(kind);
        Ok(self)
    }

    /// Duplicates are reported before ordering problems.
    fn check(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        if kind.is_singleton() && self.singletons.contains(&kind) {
            return Err(SelectorError::Duplicate { kind });
        }

        match self.last_kind {
            Some(last) if kind.rank() < last.rank() => {
                Err(SelectorError::Order { kind, after: last })
            }
            _ => Ok(()),
        }
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append `value` verbatim. Must come first.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] on a second element,
    /// [`SelectorError::Order`] once any other fragment was appended.
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Element, value)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] on a second id,
    /// [`SelectorError::Order`] after a class or any later kind.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Id, value)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append `.value`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] after an attribute or any later kind.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Class, value)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append `[value]`. The value is written as given, so
    /// `attr("href$=\".png\"")` renders `[href$=".png"]`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] after a pseudo-class or pseudo-element.
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::Attribute, value)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append `:value`. Repeatable.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] after a pseudo-element.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::PseudoClass, value)
    }

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Append `::value`. Pseudo-elements rank last, so only repetition is
    /// checked.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] on a second pseudo-element.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.push(FragmentKind::PseudoElement, value)
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Replace this builder's content with `"<left> <combinator> <right>"`.
    ///
    /// The combined text is opaque: it is not checked against ordering
    /// rules, and `last_kind` keeps whatever value it had. Content already
    /// in this builder is discarded (with a warning), so the receiver is
    /// consumed.
    ///
    /// ```
    /// use fennec_selector::{Combinator, SelectorBuilder, element};
    ///
    /// let list = element("ul")?.class("nav")?;
    /// let item = element("li")?;
    /// let combined = SelectorBuilder::new().combine(&list, Combinator::Child.as_str(), &item);
    /// assert_eq!(combined.stringify(), "ul.nav > li");
    /// # Ok::<(), fennec_selector::SelectorError>(())
    /// ```
    #[must_use]
    pub fn combine(mut self, left: &Self, combinator: &str, right: &Self) -> Self {
        if !self.is_empty() {
            warn_once("Selector", "combine discarded existing content");
        }

        self.fragments = vec![format!("{left} {combinator} {right}")];
        self.combined = true;
        self
    }

    /// Render the accumulated selector without leading or trailing
    /// whitespace.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.fragments.concat().trim().to_string()
    }

    /// Serialize the builder state, including the ordering state, as JSON.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SelectorError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a builder from a [`to_json`](Self::to_json) snapshot.
    ///
    /// The restored builder keeps enforcing the rules from the state it was
    /// saved in.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::Json`] if `text` is not a snapshot object.
    /// - [`SelectorError::Snapshot`] if the recorded state is unreachable:
    ///   a non-singleton or repeated kind among the singletons, a singleton
    ///   ranked after the last kind, a singleton last kind missing from the
    ///   singletons, or content with no last kind that was not combined.
    pub fn from_json(text: &str) -> Result<Self, SelectorError> {
        let record: SelectorRecord = serde_json::from_str(text)?;
        Self::from_record(record)
    }

    fn from_record(record: SelectorRecord) -> Result<Self, SelectorError> {
        let mut singletons = Vec::with_capacity(record.singletons.len());
        for kind in record.singletons {
            if !kind.is_singleton() {
                return Err(SelectorError::Snapshot(format!(
                    "{kind} is not limited to one occurrence"
                )));
            }
            if singletons.contains(&kind) {
                return Err(SelectorError::Snapshot(format!("{kind} recorded twice")));
            }
            match record.last_kind {
                Some(last) if kind.rank() <= last.rank() => {}
                Some(last) => {
                    return Err(SelectorError::Snapshot(format!(
                        "{kind} recorded after last kind {last}"
                    )));
                }
                None => {
                    return Err(SelectorError::Snapshot(format!(
                        "{kind} recorded but no last kind"
                    )));
                }
            }
            singletons.push(kind);
        }

        let unrecorded = record
            .last_kind
            .filter(|last| last.is_singleton() && !singletons.contains(last));
        if let Some(last) = unrecorded {
            return Err(SelectorError::Snapshot(format!(
                "last kind {last} missing from singletons"
            )));
        }

        match (record.fragments.is_empty(), record.last_kind, record.combined) {
            (false, None, false) => {
                return Err(SelectorError::Snapshot(
                    "fragments recorded but no last kind".to_string(),
                ));
            }
            (true, Some(_), _) | (true, _, true) => {
                return Err(SelectorError::Snapshot(
                    "no fragments recorded for a non-empty state".to_string(),
                ));
            }
            _ => {}
        }

        Ok(Self {
            fragments: record.fragments,
            last_kind: record.last_kind,
            singletons,
            combined: record.combined,
        })
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}
