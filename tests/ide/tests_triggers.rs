//! Trigger dispatch tests: character set and newline reinterpretation.

use archint::Position;
use archint::ide::is_trigger_character;
use rstest::rstest;

use crate::helpers::schema_helpers::*;

#[rstest]
#[case(':', true)]
#[case(' ', true)]
#[case('a', true)]
#[case('z', true)]
#[case('A', true)]
#[case('Z', true)]
#[case('\n', false)]
#[case('-', false)]
#[case('1', false)]
#[case('_', false)]
fn test_trigger_character_set(#[case] c: char, #[case] expected: bool) {
    assert_eq!(is_trigger_character(c), expected);
}

#[test]
fn test_newline_after_scalar_yields_sibling_suggestions() {
    // Pressing newline after `Name: billing` must offer the other Domain
    // children, not children of a scalar.
    let text = "Domain:\n  Name: billing\n";
    let items = completion_host().provide_completions_on_newline(text, Position::new(2, 4));
    assert_eq!(labels(&items), ["Description", "Stage"]);
}

#[test]
fn test_newline_after_container_keeps_child_level() {
    let text = "Domain:\n";
    let items = completion_host().provide_completions_on_newline(text, Position::new(1, 2));
    assert_eq!(labels(&items), ["Name", "Description", "Stage"]);
}

#[test]
fn test_newline_under_nodes_header_offers_element_marker() {
    let text = "Nodes:\n";
    let items = completion_host().provide_completions_on_newline(text, Position::new(1, 0));
    assert_eq!(labels(&items), ["- "]);
}

#[test]
fn test_newline_after_root_scalar_offers_nothing_until_blank_line() {
    // The `Company:` line directly above becomes the structural parent, so
    // the request yields nothing; a blank separator restores root level.
    let text = "Company: Acme\n";
    let items = completion_host().provide_completions_on_newline(text, Position::new(1, 0));
    assert!(items.is_empty());

    let text = "Company: Acme\n\n";
    let items = completion_host().provide_completions_on_newline(text, Position::new(2, 0));
    assert_eq!(labels(&items), ["Domain", "Nodes", "Relationships"]);
}

#[test]
fn test_newline_inside_sequence_element_offers_properties() {
    let text = "Nodes:\n  - WebApp:\n";
    let items = completion_host().provide_completions_on_newline(text, Position::new(2, 4));
    assert_eq!(labels(&items), ["Type", "Description"]);
}

#[test]
fn test_newline_at_document_start() {
    let items = completion_host().provide_completions_on_newline("", Position::new(0, 0));
    assert_eq!(
        labels(&items),
        ["Company", "Domain", "Nodes", "Relationships"]
    );
}
