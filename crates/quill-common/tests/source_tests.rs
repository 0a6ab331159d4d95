//! Integration tests for the in-memory character source.

use quill_common::{CharacterSource, Position, StrSource};

/// Drain a source into a string, recording the position of every character.
fn drain(source: &mut StrSource) -> (String, Vec<Position>) {
    let mut text = String::new();
    let mut positions = Vec::new();
    while let Some(c) = source.next() {
        text.push(c);
        positions.push(source.position());
    }
    (text, positions)
}

#[test]
fn test_crlf_counts_as_one_line_break() {
    let mut source = StrSource::new("a\r\nb");
    let (text, positions) = drain(&mut source);
    assert_eq!(text, "a\nb");
    assert_eq!(
        positions,
        vec![Position::new(1, 1), Position::new(1, 2), Position::new(2, 1)]
    );
}

#[test]
fn test_empty_input_is_immediately_at_end() {
    let mut source = StrSource::new("");
    assert_eq!(source.next(), None);
    assert!(source.reached_end());
    assert_eq!(source.position(), Position::new(1, 1));
}

#[test]
fn test_non_ascii_scalars_advance_one_column() {
    let mut source = StrSource::from("é€x");
    let (_, positions) = drain(&mut source);
    assert_eq!(positions.last(), Some(&Position::new(1, 3)));
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(3, 14).to_string(), "3:14");
}
