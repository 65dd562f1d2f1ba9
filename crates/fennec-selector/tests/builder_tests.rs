//! Integration tests for fragment ordering and occurrence rules.

use fennec_selector::{FragmentKind, SelectorBuilder, SelectorError};
use strum::IntoEnumIterator;

// Rendering

#[test]
fn test_full_compound_in_order() {
    let selector = SelectorBuilder::new()
        .element("input")
        .unwrap()
        .id("email")
        .unwrap()
        .class("field")
        .unwrap()
        .attr("type=\"email\"")
        .unwrap()
        .pseudo_class("invalid")
        .unwrap()
        .pseudo_element("placeholder")
        .unwrap();
    assert_eq!(
        selector.stringify(),
        "input#email.field[type=\"email\"]:invalid::placeholder"
    );
    assert_eq!(selector.last_kind(), Some(FragmentKind::PseudoElement));
}

#[test]
fn test_any_subset_in_rank_order_renders_in_call_order() {
    // Every subset of kinds, appended in rank order, must be accepted.
    let kinds: Vec<FragmentKind> = FragmentKind::iter().collect();
    for mask in 0u32..(1 << kinds.len()) {
        let mut builder = SelectorBuilder::new();
        let mut expected = String::new();
        for (bit, kind) in kinds.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                builder = builder.push(*kind, "v").unwrap();
                expected.push_str(&kind.render("v"));
            }
        }
        assert_eq!(builder.stringify(), expected, "mask {mask:#08b}");
    }
}

#[test]
fn test_empty_builder() {
    let builder = SelectorBuilder::new();
    assert!(builder.is_empty());
    assert_eq!(builder.last_kind(), None);
    assert_eq!(builder.stringify(), "");
    assert_eq!(builder, SelectorBuilder::default());
}

#[test]
fn test_stringify_is_idempotent() {
    let builder = SelectorBuilder::new()
        .element("p")
        .unwrap()
        .class("lead")
        .unwrap();
    assert_eq!(builder.stringify(), "p.lead");
    assert_eq!(builder.stringify(), "p.lead");
    assert_eq!(builder.to_string(), "p.lead");
}

#[test]
fn test_fragments_are_kept_separately() {
    let builder = SelectorBuilder::new()
        .element("a")
        .unwrap()
        .pseudo_class("hover")
        .unwrap();
    assert_eq!(builder.fragments(), ["a".to_string(), ":hover".to_string()]);
}

// Repeatable kinds

#[test]
fn test_repeated_classes_keep_call_order() {
    let builder = SelectorBuilder::new()
        .class("b")
        .unwrap()
        .class("a")
        .unwrap()
        .class("c")
        .unwrap();
    assert_eq!(builder.stringify(), ".b.a.c");
}

#[test]
fn test_repeated_attributes() {
    let builder = SelectorBuilder::new()
        .element("input")
        .unwrap()
        .attr("type=\"checkbox\"")
        .unwrap()
        .attr("checked")
        .unwrap();
    assert_eq!(builder.stringify(), "input[type=\"checkbox\"][checked]");
}

#[test]
fn test_repeated_pseudo_classes() {
    let builder = SelectorBuilder::new()
        .element("li")
        .unwrap()
        .pseudo_class("first-child")
        .unwrap()
        .pseudo_class("hover")
        .unwrap();
    assert_eq!(builder.stringify(), "li:first-child:hover");
}

// Duplicates

#[test]
fn test_second_element_is_duplicate() {
    let err = SelectorBuilder::new()
        .element("div")
        .unwrap()
        .element("span")
        .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Duplicate {
            kind: FragmentKind::Element
        }
    ));
}

#[test]
fn test_second_id_is_duplicate() {
    let err = SelectorBuilder::new()
        .id("a")
        .unwrap()
        .id("b")
        .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Duplicate {
            kind: FragmentKind::Id
        }
    ));
}

#[test]
fn test_second_pseudo_element_is_duplicate() {
    let err = SelectorBuilder::new()
        .pseudo_element("before")
        .unwrap()
        .pseudo_element("after")
        .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Duplicate {
            kind: FragmentKind::PseudoElement
        }
    ));
}

#[test]
fn test_duplicate_reported_before_order() {
    // A second element after a class breaks both rules.
    let err = SelectorBuilder::new()
        .element("div")
        .unwrap()
        .class("x")
        .unwrap()
        .element("span")
        .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Duplicate {
            kind: FragmentKind::Element
        }
    ));
}

// Ordering

#[test]
fn test_id_after_class_is_order_error() {
    let err = SelectorBuilder::new()
        .class("container")
        .unwrap()
        .id("main")
        .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Order {
            kind: FragmentKind::Id,
            after: FragmentKind::Class
        }
    ));
}

#[test]
fn test_element_must_come_first() {
    let err = SelectorBuilder::new()
        .id("main")
        .unwrap()
        .element("div")
        .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Order {
            kind: FragmentKind::Element,
            after: FragmentKind::Id
        }
    ));
}

#[test]
fn test_class_after_pseudo_element_is_order_error() {
    let err = SelectorBuilder::new()
        .pseudo_element("after")
        .unwrap()
        .class("x")
        .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Order {
            kind: FragmentKind::Class,
            after: FragmentKind::PseudoElement
        }
    ));
}

#[test]
fn test_every_out_of_order_pair_is_rejected() {
    for later in FragmentKind::iter() {
        for earlier in FragmentKind::iter().filter(|kind| kind.rank() < later.rank()) {
            let builder = SelectorBuilder::new().push(later, "x").unwrap();
            let err = builder.push(earlier, "y").unwrap_err();
            assert!(
                matches!(err, SelectorError::Order { kind, after } if kind == earlier && after == later),
                "{earlier} after {later} gave {err}"
            );
        }
    }
}

#[test]
fn test_rejected_fragment_leaves_builder_unchanged() {
    let builder = SelectorBuilder::new()
        .element("a")
        .unwrap()
        .pseudo_class("visited")
        .unwrap();
    let before = builder.clone();

    assert!(builder.clone().attr("href").is_err());
    assert!(builder.clone().element("b").is_err());
    assert_eq!(builder, before);
    assert_eq!(builder.stringify(), "a:visited");
}

#[test]
fn test_error_messages() {
    let duplicate = SelectorBuilder::new()
        .id("a")
        .unwrap()
        .id("b")
        .unwrap_err();
    assert_eq!(
        duplicate.to_string(),
        "duplicate id: a compound selector allows only one"
    );

    let order = SelectorBuilder::new()
        .pseudo_class("hover")
        .unwrap()
        .attr("href")
        .unwrap_err();
    assert_eq!(order.to_string(), "attribute cannot follow pseudo-class");
}
