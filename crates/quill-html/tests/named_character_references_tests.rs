//! Integration tests for named character reference lookup.

use quill_html::tokenizer::character_reference::resolve_numeric_reference;
use quill_html::tokenizer::named_character_references::{
    NamedReferenceMatcher, any_entity_has_prefix, lookup_entity,
};
use quill_html::ParseErrorCode;

#[test]
fn test_lookup_common_entities() {
    assert_eq!(lookup_entity("amp;"), Some("&"));
    assert_eq!(lookup_entity("lt;"), Some("<"));
    assert_eq!(lookup_entity("gt;"), Some(">"));
    assert_eq!(lookup_entity("quot;"), Some("\""));
    assert_eq!(lookup_entity("apos;"), Some("'"));
    assert_eq!(lookup_entity("nbsp;"), Some("\u{00A0}"));
}

#[test]
fn test_lookup_legacy_entities() {
    // Legacy entities without semicolon
    assert_eq!(lookup_entity("amp"), Some("&"));
    assert_eq!(lookup_entity("lt"), Some("<"));
    assert_eq!(lookup_entity("copy"), Some("\u{00A9}"));
    assert_eq!(lookup_entity("AElig"), Some("\u{00C6}"));
    // ...but not HTML 5 additions
    assert_eq!(lookup_entity("apos"), None);
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert_eq!(lookup_entity("Alpha;"), Some("\u{0391}"));
    assert_eq!(lookup_entity("alpha;"), Some("\u{03B1}"));
    assert_eq!(lookup_entity("AMP;"), Some("&"));
    assert_eq!(lookup_entity("aMp;"), None);
}

#[test]
fn test_lookup_unknown_entity() {
    assert_eq!(lookup_entity("notarealentity;"), None);
    assert_eq!(lookup_entity(""), None);
}

#[test]
fn test_prefix_matching() {
    assert!(any_entity_has_prefix("a")); // amp, apos, alpha, etc.
    assert!(any_entity_has_prefix("am")); // amp
    assert!(any_entity_has_prefix("amp")); // amp, amp;
    assert!(any_entity_has_prefix("amp;")); // amp;
    assert!(!any_entity_has_prefix("ampx")); // nothing
    assert!(!any_entity_has_prefix("xyz")); // nothing
}

#[test]
fn test_matcher_stops_at_first_unknown_character() {
    let mut matcher = NamedReferenceMatcher::new();
    assert!(matcher.feed('l'));
    assert!(matcher.feed('t'));
    assert!(!matcher.feed('x'));
    // A rejected character leaves the matcher where it was.
    assert!(matcher.feed(';'));

    let found = matcher.longest_match().expect("lt; is a reference");
    assert_eq!(found.length, 3);
    assert_eq!(found.replacement, "<");
    assert!(found.terminated);
}

#[test]
fn test_matcher_without_complete_name() {
    let mut matcher = NamedReferenceMatcher::default();
    assert!(matcher.feed('h'));
    assert!(matcher.feed('e'));
    assert_eq!(matcher.longest_match(), None);
}

#[test]
fn test_numeric_normalization() {
    assert_eq!(resolve_numeric_reference(0x41, false), ('A', None));
    assert_eq!(
        resolve_numeric_reference(0x41, true),
        (
            '\u{FFFD}',
            Some(ParseErrorCode::CharacterReferenceOutsideUnicodeRange)
        )
    );
    assert_eq!(
        resolve_numeric_reference(0x99, false),
        ('\u{2122}', Some(ParseErrorCode::ControlCharacterReference))
    );
    assert_eq!(
        resolve_numeric_reference(0x7F, false),
        ('\u{7F}', Some(ParseErrorCode::ControlCharacterReference))
    );
    assert_eq!(
        resolve_numeric_reference(0x1_FFFE, false),
        (
            '\u{1FFFE}',
            Some(ParseErrorCode::NoncharacterCharacterReference)
        )
    );
}

#[test]
fn test_lookup_names_beyond_latin1() {
    assert_eq!(lookup_entity("rightarrow;"), Some("\u{2192}"));
    assert_eq!(lookup_entity("Rarr;"), Some("\u{21A0}"));
    assert_eq!(lookup_entity("bigstar;"), Some("\u{2605}"));
    assert_eq!(lookup_entity("rightarrow"), None);
}
