//! Turn command-line tokens into a selector.
//!
//! Fragment tokens accumulate into the current compound selector. A
//! combinator token closes it; compounds are then joined left to right.

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use fennec_selector::{Combinator, FragmentKind, SelectorBuilder, combine};

enum Token<'a> {
    Fragment(FragmentKind, &'a str),
    Combinator(Combinator),
}

fn parse_kind(name: &str) -> Option<FragmentKind> {
    match name {
        "element" | "el" => Some(FragmentKind::Element),
        "id" => Some(FragmentKind::Id),
        "class" => Some(FragmentKind::Class),
        "attr" | "attribute" => Some(FragmentKind::Attribute),
        "pseudo-class" | "pc" => Some(FragmentKind::PseudoClass),
        "pseudo-element" | "pe" => Some(FragmentKind::PseudoElement),
        _ => None,
    }
}

fn parse_token(token: &str) -> Result<Token<'_>> {
    if let Ok(combinator) = Combinator::from_str(token) {
        return Ok(Token::Combinator(combinator));
    }

    // Split on the first `=` only; attribute values carry their own.
    let Some((name, value)) = token.split_once('=') else {
        bail!("expected `kind=value` or a combinator, got `{token}`");
    };
    let kind = parse_kind(name).with_context(|| format!("unknown fragment kind `{name}`"))?;
    Ok(Token::Fragment(kind, value))
}

fn join(left: Option<(SelectorBuilder, Combinator)>, right: SelectorBuilder) -> SelectorBuilder {
    match left {
        Some((left, combinator)) => combine(&left, combinator.as_str(), &right),
        None => right,
    }
}

/// Build a selector from `tokens` in order.
///
/// # Errors
///
/// Fails on an unknown or malformed token, a fragment the builder rejects,
/// a combinator missing a selector on either side, or no tokens at all.
pub fn assemble(tokens: &[String]) -> Result<SelectorBuilder> {
    let mut joined: Option<(SelectorBuilder, Combinator)> = None;
    let mut compound = SelectorBuilder::new();

    for token in tokens {
        match parse_token(token)? {
            Token::Fragment(kind, value) => {
                compound = compound
                    .push(kind, value)
                    .with_context(|| format!("cannot append `{token}`"))?;
            }
            Token::Combinator(combinator) => {
                if compound.is_empty() {
                    bail!("combinator `{token}` has no selector on its left");
                }
                let left = join(joined.take(), std::mem::take(&mut compound));
                joined = Some((left, combinator));
            }
        }
    }

    if compound.is_empty() {
        match joined {
            Some((_, combinator)) => bail!("combinator `{combinator}` has no selector on its right"),
            None => bail!("no fragments given"),
        }
    }
    Ok(join(joined, compound))
}
