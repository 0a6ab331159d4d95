//! Integration tests for the HTML tokenizer.

use quill_common::{Position, StrSource};
use quill_html::tokenizer::{
    CoalescingSink, ContentModelSink, LoggingErrorSink, SinkResult, to_html5lib_json,
};
use quill_html::{
    Attribute, HTMLTokenizer, ParseError, ParseErrorCode, Token, TokenSink, TokenizerError,
    TokenizerOptions, TokenizerState,
};
use serde_json::json;
use test_case::test_case;

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = HTMLTokenizer::new(input);
    tokenizer.run().expect("tokenizer failed");
    tokenizer.into_tokens()
}

/// Helper to tokenize a string and return both tokens and parse errors
fn tokenize_with_errors(input: &str) -> (Vec<Token>, Vec<ParseError>) {
    let mut tokenizer = HTMLTokenizer::new(input);
    tokenizer.run().expect("tokenizer failed");
    tokenizer.into_parts()
}

/// Helper to tokenize the contents of `<tag>` starting in `state`
fn tokenize_in(state: TokenizerState, tag: &str, input: &str) -> (Vec<Token>, Vec<ParseError>) {
    let mut tokenizer = HTMLTokenizer::with_options(
        StrSource::new(input),
        Vec::new(),
        Vec::new(),
        TokenizerOptions::in_element(state, tag),
    );
    tokenizer.run().expect("tokenizer failed");
    tokenizer.into_parts()
}

/// Concatenate the data of every character token
fn text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Character { data } => Some(data.to_string()),
            Token::Characters { data } => Some(data.clone()),
            _ => None,
        })
        .collect()
}

fn codes(errors: &[ParseError]) -> Vec<ParseErrorCode> {
    errors.iter().map(|error| error.code).collect()
}

fn end_tag(name: &str) -> Token {
    Token::EndTag {
        name: name.to_string(),
        self_closing: false,
        attributes: Vec::new(),
    }
}

/// Records every token and every state change.
#[derive(Default)]
struct RecordingSink {
    tokens: Vec<Token>,
    transitions: Vec<(TokenizerState, TokenizerState)>,
    switch_after_start_tag: Option<TokenizerState>,
}

impl TokenSink for RecordingSink {
    fn add_token(&mut self, token: Token) -> SinkResult {
        let is_start_tag = matches!(token, Token::StartTag { .. });
        self.tokens.push(token);
        match self.switch_after_start_tag {
            Some(state) if is_start_tag => SinkResult::SwitchTo(state),
            _ => SinkResult::Continue,
        }
    }

    fn state_changed(&mut self, from: TokenizerState, to: TokenizerState) {
        self.transitions.push((from, to));
    }
}

// =============================================================================
// Basic tokens
// =============================================================================

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens.len(), 6); // 5 chars + EOF
    assert!(matches!(tokens[0], Token::Character { data: 'H' }));
    assert!(matches!(tokens[4], Token::Character { data: 'o' }));
    assert!(matches!(tokens[5], Token::EndOfFile));
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize(""), vec![Token::EndOfFile]);
}

#[test]
fn test_start_tag() {
    let tokens = tokenize("<div>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "div");
            assert!(!self_closing);
            assert!(attributes.is_empty());
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_end_tag() {
    let tokens = tokenize("</div>");
    assert_eq!(tokens, vec![end_tag("div"), Token::EndOfFile]);
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    match &tokens[0] {
        Token::StartTag {
            name, self_closing, ..
        } => {
            assert_eq!(name, "br");
            assert!(self_closing);
        }
        _ => panic!("Expected self-closing StartTag token"),
    }
}

#[test]
fn test_comment() {
    let tokens = tokenize("<!-- hello -->");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, " hello "),
        _ => panic!("Expected Comment token"),
    }
}

#[test]
fn test_comment_with_inner_dashes() {
    let (tokens, errors) = tokenize_with_errors("<!-- a -- b --><!---->");
    assert!(errors.is_empty());
    match (&tokens[0], &tokens[1]) {
        (Token::Comment { data: first }, Token::Comment { data: second }) => {
            assert_eq!(first, " a -- b ");
            assert_eq!(second, "");
        }
        _ => panic!("Expected two Comment tokens"),
    }
}

#[test]
fn test_nested_comment_keeps_text() {
    let (tokens, errors) = tokenize_with_errors("<!--a<!--b-->");
    assert_eq!(codes(&errors), vec![ParseErrorCode::NestedComment]);
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, "a<!--b"),
        _ => panic!("Expected Comment token"),
    }
}

#[test]
fn test_question_mark_becomes_bogus_comment() {
    let (tokens, errors) = tokenize_with_errors("<?xml version=\"1.0\"?>");
    assert_eq!(
        codes(&errors),
        vec![ParseErrorCode::UnexpectedQuestionMarkInsteadOfTagName]
    );
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, "?xml version=\"1.0\"?"),
        _ => panic!("Expected Comment token"),
    }
}

#[test]
fn test_newlines_are_normalized() {
    let tokens = tokenize("a\r\nb\rc");
    assert_eq!(text(&tokens), "a\nb\nc");
}

// =============================================================================
// Names and attributes
// =============================================================================

#[test]
fn test_tag_and_attribute_names_are_lowercased() {
    let tokens = tokenize("<DIV ID=x></DiV>");
    assert_eq!(
        tokens,
        vec![
            Token::StartTag {
                name: "div".to_string(),
                self_closing: false,
                attributes: vec![Attribute::new("id".to_string(), "x".to_string())],
            },
            end_tag("div"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_attribute_quoting_styles() {
    let tokens = tokenize(r#"<input type="text" name='q' value=hi disabled>"#);
    match &tokens[0] {
        Token::StartTag {
            name, attributes, ..
        } => {
            assert_eq!(name, "input");
            let pairs: Vec<(&str, &str)> = attributes
                .iter()
                .map(|attr| (attr.name.as_str(), attr.value.as_str()))
                .collect();
            assert_eq!(
                pairs,
                vec![
                    ("type", "text"),
                    ("name", "q"),
                    ("value", "hi"),
                    ("disabled", "")
                ]
            );
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_duplicate_attribute_first_wins() {
    let (tokens, errors) = tokenize_with_errors(r#"<a x="1" x="2">"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].name, "x");
            assert_eq!(attributes[0].value, "1");
        }
        _ => panic!("Expected StartTag token"),
    }
    assert_eq!(
        errors,
        vec![ParseError {
            position: Position::new(1, 10),
            code: ParseErrorCode::DuplicateAttribute,
            detail: Some("x".to_string()),
        }]
    );
}

#[test]
fn test_end_tag_keeps_attributes_and_reports_them() {
    let (tokens, errors) = tokenize_with_errors(r#"</a b="c"/>"#);
    match &tokens[0] {
        Token::EndTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "a");
            assert!(self_closing);
            assert_eq!(attributes.len(), 1);
        }
        _ => panic!("Expected EndTag token"),
    }
    assert_eq!(
        codes(&errors),
        vec![
            ParseErrorCode::EndTagWithAttributes,
            ParseErrorCode::EndTagWithTrailingSolidus
        ]
    );
}

#[test]
fn test_eof_in_tag_emits_partial_tag() {
    let (tokens, errors) = tokenize_with_errors("<div class=a");
    assert_eq!(codes(&errors), vec![ParseErrorCode::EofInTag]);
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name, attributes, ..
        } => {
            assert_eq!(name, "div");
            assert_eq!(attributes[0].value, "a");
        }
        _ => panic!("Expected StartTag token"),
    }
    assert!(tokens[1].is_eof());
}

// =============================================================================
// Stream-wide properties
// =============================================================================

#[test_case("" ; "empty")]
#[test_case("<div" ; "eof in tag name")]
#[test_case("<a href='x" ; "eof in attribute value")]
#[test_case("<!--x" ; "eof in comment")]
#[test_case("<!DOCTYPE" ; "eof in doctype")]
#[test_case("&#x" ; "eof in numeric reference")]
#[test_case("</" ; "eof after end tag open")]
#[test_case("<![CDATA[" ; "eof after cdata opener")]
fn test_stream_ends_with_exactly_one_eof(input: &str) {
    let tokens = tokenize(input);
    assert!(tokens.last().is_some_and(Token::is_eof));
    assert_eq!(tokens.iter().filter(|token| token.is_eof()).count(), 1);
}

#[test_case("1 < 2 & 3 > 2" ; "stray delimiters")]
#[test_case("a & b && c" ; "bare ampersands")]
#[test_case("&#x;&#;" ; "numeric references without digits")]
#[test_case("&xyzzy" ; "unknown name without semicolon")]
fn test_text_accounts_for_every_character(input: &str) {
    assert_eq!(text(&tokenize(input)), input);
}

#[test]
fn test_null_in_data_is_passed_through_with_error() {
    let (tokens, errors) = tokenize_with_errors("a\n\0");
    assert_eq!(text(&tokens), "a\n\0");
    assert_eq!(
        errors,
        vec![ParseError::new(
            Position::new(2, 1),
            ParseErrorCode::UnexpectedNullCharacter
        )]
    );
}

// =============================================================================
// Parse error catalogue
// =============================================================================

#[test_case("<?x>", ParseErrorCode::UnexpectedQuestionMarkInsteadOfTagName ; "question mark")]
#[test_case("</>", ParseErrorCode::MissingEndTagName ; "missing end tag name")]
#[test_case("<>", ParseErrorCode::InvalidFirstCharacterOfTagName ; "invalid first character")]
#[test_case("<", ParseErrorCode::EofBeforeTagName ; "eof before tag name")]
#[test_case("<a", ParseErrorCode::EofInTag ; "eof in tag")]
#[test_case("<a\0>", ParseErrorCode::UnexpectedNullCharacter ; "null in tag name")]
#[test_case("<a b=>", ParseErrorCode::MissingAttributeValue ; "missing attribute value")]
#[test_case("<a b='1'c>", ParseErrorCode::MissingWhitespaceBetweenAttributes ; "missing whitespace between attributes")]
#[test_case("<a =b>", ParseErrorCode::UnexpectedEqualsSignBeforeAttributeName ; "equals before attribute name")]
#[test_case("<a b\"c>", ParseErrorCode::UnexpectedCharacterInAttributeName ; "quote in attribute name")]
#[test_case("<a b=c\"d>", ParseErrorCode::UnexpectedCharacterInUnquotedAttributeValue ; "quote in unquoted value")]
#[test_case("<a / b>", ParseErrorCode::UnexpectedSolidusInTag ; "solidus in tag")]
#[test_case("</a b>", ParseErrorCode::EndTagWithAttributes ; "end tag with attributes")]
#[test_case("</a/>", ParseErrorCode::EndTagWithTrailingSolidus ; "end tag with trailing solidus")]
#[test_case("<!-->", ParseErrorCode::AbruptClosingOfEmptyComment ; "abrupt empty comment")]
#[test_case("<!--a--!>", ParseErrorCode::IncorrectlyClosedComment ; "incorrectly closed comment")]
#[test_case("<!x>", ParseErrorCode::IncorrectlyOpenedComment ; "incorrectly opened comment")]
#[test_case("<!--a", ParseErrorCode::EofInComment ; "eof in comment")]
#[test_case("<!DOCTYPEhtml>", ParseErrorCode::MissingWhitespaceBeforeDoctypeName ; "missing whitespace before doctype name")]
#[test_case("<!DOCTYPE html PUBLIC\"x\">", ParseErrorCode::MissingWhitespaceAfterDoctypePublicKeyword ; "missing whitespace after public")]
#[test_case("<!DOCTYPE html SYSTEM'x'>", ParseErrorCode::MissingWhitespaceAfterDoctypeSystemKeyword ; "missing whitespace after system")]
#[test_case("<!DOCTYPE html PUBLIC \"x>", ParseErrorCode::AbruptDoctypePublicIdentifier ; "abrupt public identifier")]
#[test_case("<!DOCTYPE html SYSTEM \"x>", ParseErrorCode::AbruptDoctypeSystemIdentifier ; "abrupt system identifier")]
#[test_case("<!DOCTYPE html SYSTEM x>", ParseErrorCode::MissingQuoteBeforeDoctypeSystemIdentifier ; "unquoted system identifier")]
#[test_case("<!DOCTYPE html PUBLIC x>", ParseErrorCode::MissingQuoteBeforeDoctypePublicIdentifier ; "unquoted public identifier")]
#[test_case("<!DOCTYPE html PUBLIC \"a\"\"b\">", ParseErrorCode::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers ; "missing whitespace between identifiers")]
#[test_case("<!DOCTYPE html SYSTEM \"a\" x>", ParseErrorCode::UnexpectedCharacterAfterDoctypeSystemIdentifier ; "junk after system identifier")]
#[test_case("<!DOCTYPE html FOO>", ParseErrorCode::InvalidCharacterSequenceAfterDoctypeName ; "junk after doctype name")]
#[test_case("&#;", ParseErrorCode::AbsenceOfDigitsInNumericCharacterReference ; "numeric reference without digits")]
#[test_case("&xyzzy;", ParseErrorCode::UnknownNamedCharacterReference ; "unknown named reference")]
fn test_first_parse_error(input: &str, expected: ParseErrorCode) {
    let (_, errors) = tokenize_with_errors(input);
    assert_eq!(errors.first().map(|error| error.code), Some(expected));
}

#[test]
fn test_error_codes_display_canonically() {
    assert_eq!(
        ParseErrorCode::CdataInHtmlContent.to_string(),
        "cdata-in-html-content"
    );
    assert_eq!(
        ParseErrorCode::MissingSemicolonAfterCharacterReference.to_string(),
        "missing-semicolon-after-character-reference"
    );
    assert_eq!(ParseErrorCode::EofInCdata.to_string(), "eof-in-cdata");
}

// =============================================================================
// Character references
// =============================================================================

#[test]
fn test_named_reference_with_semicolon() {
    let (tokens, errors) = tokenize_with_errors("&amp;");
    assert_eq!(tokens, vec![Token::Character { data: '&' }, Token::EndOfFile]);
    assert!(errors.is_empty());
}

#[test]
fn test_legacy_named_reference_without_semicolon() {
    let (tokens, errors) = tokenize_with_errors("&amp");
    assert_eq!(tokens, vec![Token::Character { data: '&' }, Token::EndOfFile]);
    assert_eq!(
        codes(&errors),
        vec![ParseErrorCode::MissingSemicolonAfterCharacterReference]
    );
}

#[test]
fn test_unknown_named_reference_stays_literal() {
    let (tokens, errors) = tokenize_with_errors("&xyzzy;");
    assert_eq!(text(&tokens), "&xyzzy;");
    assert_eq!(
        codes(&errors),
        vec![ParseErrorCode::UnknownNamedCharacterReference]
    );
}

#[test]
fn test_longest_legacy_prefix_is_substituted() {
    // "not" is a legacy name, so it matches even inside a longer unknown word.
    // This is the WHATWG longest-match outcome, not the literal pass-through
    // of an unknown name.
    let (tokens, errors) = tokenize_with_errors("&notarealentity;");
    assert_eq!(text(&tokens), "\u{00AC}arealentity;");
    assert_eq!(
        codes(&errors),
        vec![ParseErrorCode::MissingSemicolonAfterCharacterReference]
    );
}

#[test]
fn test_named_reference_prefers_longest_match() {
    assert_eq!(text(&tokenize("&notin;")), "\u{2209}");
    assert_eq!(text(&tokenize("&nGt;")), "\u{226B}\u{20D2}");
    assert_eq!(text(&tokenize("&hellip;")), "\u{2026}");
}

#[test_case("&rightarrow;", "\u{2192}" ; "rightarrow")]
#[test_case("&Rarr;", "\u{21A0}" ; "two headed arrow")]
#[test_case("&bigstar;", "\u{2605}" ; "bigstar")]
#[test_case("&NotNestedGreaterGreater;", "\u{2AA2}\u{0338}" ; "longest name")]
#[test_case("&fjlig;", "fj" ; "ascii ligature")]
fn test_named_reference_from_full_table(input: &str, expected: &str) {
    let (tokens, errors) = tokenize_with_errors(input);
    assert_eq!(text(&tokens), expected);
    assert!(errors.is_empty());
}

#[test]
fn test_non_legacy_name_requires_semicolon() {
    let (tokens, errors) = tokenize_with_errors("&hellip x");
    assert_eq!(text(&tokens), "&hellip x");
    assert!(errors.is_empty());
}

#[test_case("&#65;", 'A', None ; "decimal")]
#[test_case("&#x41;", 'A', None ; "hexadecimal")]
#[test_case("&#X6a;", 'j', None ; "uppercase x and mixed case digits")]
#[test_case("&#0;", '\u{FFFD}', Some(ParseErrorCode::NullCharacterReference) ; "null")]
#[test_case("&#9999999999;", '\u{FFFD}', Some(ParseErrorCode::CharacterReferenceOutsideUnicodeRange) ; "overflow")]
#[test_case("&#x110000;", '\u{FFFD}', Some(ParseErrorCode::CharacterReferenceOutsideUnicodeRange) ; "above unicode range")]
#[test_case("&#xD800;", '\u{FFFD}', Some(ParseErrorCode::SurrogateCharacterReference) ; "surrogate")]
#[test_case("&#xFFFF;", '\u{FFFF}', Some(ParseErrorCode::NoncharacterCharacterReference) ; "noncharacter")]
#[test_case("&#13;", '\r', Some(ParseErrorCode::ControlCharacterReference) ; "carriage return")]
#[test_case("&#x80;", '\u{20AC}', Some(ParseErrorCode::ControlCharacterReference) ; "windows 1252 euro")]
#[test_case("&#x9F;", '\u{0178}', Some(ParseErrorCode::ControlCharacterReference) ; "windows 1252 y diaeresis")]
#[test_case("&#x41", 'A', Some(ParseErrorCode::MissingSemicolonAfterCharacterReference) ; "missing semicolon")]
fn test_numeric_reference(input: &str, expected: char, error: Option<ParseErrorCode>) {
    let (tokens, errors) = tokenize_with_errors(input);
    assert_eq!(
        tokens,
        vec![Token::Character { data: expected }, Token::EndOfFile]
    );
    assert_eq!(errors.first().map(|e| e.code), error);
    assert!(errors.len() <= 1);
}

#[test]
fn test_numeric_reference_error_points_at_semicolon() {
    let (tokens, errors) = tokenize_with_errors("ab&#x80;cd");
    assert_eq!(text(&tokens), "ab\u{20AC}cd");
    assert_eq!(
        errors,
        vec![ParseError {
            position: Position::new(1, 8),
            code: ParseErrorCode::ControlCharacterReference,
            detail: None,
        }]
    );
}

#[test]
fn test_numeric_reference_followed_by_text() {
    assert_eq!(text(&tokenize("&#65x")), "Ax");
    assert_eq!(text(&tokenize("&#x26;lt;")), "&lt;");
}

#[test]
fn test_references_in_attribute_values() {
    let tokens = tokenize(r#"<a title="&lt;&#x41;&gt;" alt='&quot;' data-x=&amp;>"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].value, "<A>");
            assert_eq!(attributes[1].value, "\"");
            assert_eq!(attributes[2].value, "&");
        }
        _ => panic!("Expected StartTag token"),
    }
    // Nothing from the attribute leaks out as text.
    assert_eq!(text(&tokens), "");
}

#[test_case(r#"<a href="?x&amp=1">"#, "?x&amp=1" ; "equals after legacy name")]
#[test_case(r#"<a href="?a=1&not2">"#, "?a=1&not2" ; "alphanumeric after legacy name")]
#[test_case("<a href=?a&copy9>", "?a&copy9" ; "unquoted value")]
fn test_legacy_reference_in_attribute_is_literal(input: &str, expected: &str) {
    let (tokens, errors) = tokenize_with_errors(input);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => assert_eq!(attributes[0].value, expected),
        _ => panic!("Expected StartTag token"),
    }
    assert!(errors.is_empty());
}

#[test]
fn test_legacy_reference_in_attribute_before_other_character() {
    let (tokens, errors) = tokenize_with_errors(r#"<a title="&amp x">"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => assert_eq!(attributes[0].value, "& x"),
        _ => panic!("Expected StartTag token"),
    }
    assert_eq!(
        codes(&errors),
        vec![ParseErrorCode::MissingSemicolonAfterCharacterReference]
    );
}

#[test]
fn test_missing_return_state_is_an_error() {
    let options = TokenizerOptions {
        initial_state: TokenizerState::CharacterReference,
        last_start_tag_name: None,
    };
    let mut tokenizer =
        HTMLTokenizer::with_options(StrSource::new("amp;"), Vec::new(), Vec::new(), options);
    assert_eq!(
        tokenizer.run(),
        Err(TokenizerError::MissingReturnState {
            state: TokenizerState::CharacterReference
        })
    );
}

// =============================================================================
// Content models
// =============================================================================

#[test]
fn test_rcdata_resolves_references_but_not_tags() {
    let (tokens, errors) = tokenize_in(TokenizerState::RCDATA, "title", "a &amp; <b></titl></TITLE>");
    assert!(errors.is_empty());
    assert_eq!(text(&tokens), "a & <b></titl>");
    assert_eq!(&tokens[tokens.len() - 2..], &[end_tag("title"), Token::EndOfFile]);
}

#[test]
fn test_rawtext_ignores_references() {
    let (tokens, _) = tokenize_in(TokenizerState::RAWTEXT, "style", "a &amp; b</style >");
    assert_eq!(text(&tokens), "a &amp; b");
    assert_eq!(&tokens[tokens.len() - 2..], &[end_tag("style"), Token::EndOfFile]);
}

#[test]
fn test_rawtext_null_is_replaced() {
    let (tokens, errors) = tokenize_in(TokenizerState::RAWTEXT, "style", "\0");
    assert_eq!(text(&tokens), "\u{FFFD}");
    assert_eq!(codes(&errors), vec![ParseErrorCode::UnexpectedNullCharacter]);
}

#[test]
fn test_plaintext_never_ends() {
    let (tokens, _) = tokenize_in(TokenizerState::PLAINTEXT, "plaintext", "</plaintext><b>&amp;");
    assert_eq!(text(&tokens), "</plaintext><b>&amp;");
    assert_eq!(tokens.iter().filter(|token| !token.is_character()).count(), 1);
}

#[test]
fn test_script_end_tag_must_be_appropriate() {
    let tokens = {
        let mut tokenizer = HTMLTokenizer::with_options(
            StrSource::new("<script>a</b></script>"),
            ContentModelSink::new(Vec::new()),
            Vec::new(),
            TokenizerOptions::default(),
        );
        tokenizer.run().expect("tokenizer failed");
        tokenizer.into_parts().0.into_inner()
    };
    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "script"));
    assert_eq!(text(&tokens), "a</b>");
    assert_eq!(&tokens[tokens.len() - 2..], &[end_tag("script"), Token::EndOfFile]);
}

#[test]
fn test_script_escaped_and_double_escaped() {
    let (tokens, errors) = tokenize_in(
        TokenizerState::ScriptData,
        "script",
        "<!--<script></script>--></script>",
    );
    assert!(errors.is_empty());
    assert_eq!(text(&tokens), "<!--<script></script>-->");
    assert_eq!(&tokens[tokens.len() - 2..], &[end_tag("script"), Token::EndOfFile]);
}

#[test]
fn test_script_escaped_end_tag_closes_script() {
    let (tokens, _) = tokenize_in(TokenizerState::ScriptData, "script", "<!--x</script>y");
    assert_eq!(
        tokens[5..],
        [end_tag("script"), Token::Character { data: 'y' }, Token::EndOfFile]
    );
    assert_eq!(text(&tokens[..5]), "<!--x");
}

#[test]
fn test_script_double_escaped_end_tag_does_not_close_script() {
    let (tokens, _) = tokenize_in(
        TokenizerState::ScriptData,
        "script",
        "<!--<script>x</script>y-->",
    );
    assert_eq!(text(&tokens), "<!--<script>x</script>y-->");
    assert!(!tokens.iter().any(|token| matches!(token, Token::EndTag { .. })));
}

#[test]
fn test_eof_in_script_comment_like_text() {
    let (tokens, errors) = tokenize_in(TokenizerState::ScriptData, "script", "<!--x");
    assert_eq!(text(&tokens), "<!--x");
    assert_eq!(
        codes(&errors),
        vec![ParseErrorCode::EofInScriptHtmlCommentLikeText]
    );
}

#[test]
fn test_switch_state_between_construction_and_run() {
    let mut tokenizer = HTMLTokenizer::new("x <b></textarea>");
    tokenizer.switch_state(TokenizerState::RCDATA);
    tokenizer.set_last_start_tag_name("TEXTAREA");
    tokenizer.run().expect("tokenizer failed");
    let tokens = tokenizer.into_tokens();
    assert_eq!(text(&tokens), "x <b>");
    assert_eq!(&tokens[tokens.len() - 2..], &[end_tag("textarea"), Token::EndOfFile]);
}

#[test]
fn test_options_deserialize_from_json() {
    let options: TokenizerOptions =
        serde_json::from_str(r#"{"initialState": "RAWTEXT", "lastStartTagName": "xmp"}"#)
            .expect("valid options");
    assert_eq!(options, TokenizerOptions::in_element(TokenizerState::RAWTEXT, "xmp"));

    let defaults: TokenizerOptions = serde_json::from_str("{}").expect("valid options");
    assert_eq!(defaults.initial_state, TokenizerState::Data);
    assert_eq!(defaults.last_start_tag_name, None);
}

// =============================================================================
// DOCTYPE
// =============================================================================

#[test]
fn test_doctype() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 2); // DOCTYPE + EOF
    match &tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            force_quirks,
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert_eq!(*public_identifier, None);
            assert_eq!(*system_identifier, None);
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_name_is_lowercased() {
    match &tokenize("<!doctype HTML>")[0] {
        Token::Doctype { name, .. } => assert_eq!(name.as_deref(), Some("html")),
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_public_and_system_identifiers() {
    let (tokens, errors) = tokenize_with_errors(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN" 'http://www.w3.org/TR/html4/strict.dtd'>"#,
    );
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::Doctype {
            public_identifier,
            system_identifier,
            force_quirks,
            ..
        } => {
            assert_eq!(public_identifier.as_deref(), Some("-//W3C//DTD HTML 4.01//EN"));
            assert_eq!(
                system_identifier.as_deref(),
                Some("http://www.w3.org/TR/html4/strict.dtd")
            );
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_system_identifier_only() {
    match &tokenize("<!DOCTYPE html system \"about:legacy-compat\">")[0] {
        Token::Doctype {
            public_identifier,
            system_identifier,
            force_quirks,
            ..
        } => {
            assert_eq!(*public_identifier, None);
            assert_eq!(system_identifier.as_deref(), Some("about:legacy-compat"));
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_empty_identifier_is_not_missing() {
    match &tokenize("<!DOCTYPE html PUBLIC \"\">")[0] {
        Token::Doctype {
            public_identifier, ..
        } => assert_eq!(public_identifier.as_deref(), Some("")),
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_without_name_forces_quirks() {
    let (tokens, errors) = tokenize_with_errors("<!DOCTYPE>");
    assert_eq!(codes(&errors), vec![ParseErrorCode::MissingDoctypeName]);
    match &tokens[0] {
        Token::Doctype {
            name, force_quirks, ..
        } => {
            assert_eq!(*name, None);
            assert!(force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test_case("<!DOCTYPE" ; "after keyword")]
#[test_case("<!DOCTYPE html" ; "in name")]
#[test_case("<!DOCTYPE html PUBLIC" ; "after public keyword")]
#[test_case("<!DOCTYPE html PUBLIC \"x" ; "in public identifier")]
#[test_case("<!DOCTYPE html PUBLIC \"x\" " ; "between identifiers")]
#[test_case("<!DOCTYPE html SYSTEM 'y" ; "in system identifier")]
fn test_eof_in_doctype_forces_quirks(input: &str) {
    let (tokens, errors) = tokenize_with_errors(input);
    assert_eq!(codes(&errors).last(), Some(&ParseErrorCode::EofInDoctype));
    match &tokens[0] {
        Token::Doctype { force_quirks, .. } => assert!(force_quirks),
        _ => panic!("Expected DOCTYPE token"),
    }
    assert!(tokens[1].is_eof());
}

#[test]
fn test_bogus_doctype_forces_quirks() {
    let (tokens, _) = tokenize_with_errors("<!DOCTYPE html FOO \"bar\">x");
    match &tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            force_quirks,
            ..
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert_eq!(*public_identifier, None);
            assert!(force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
    assert_eq!(tokens[1], Token::Character { data: 'x' });
}

// =============================================================================
// CDATA and foreign content
// =============================================================================

#[test]
fn test_cdata_outside_foreign_content_is_bogus_comment() {
    let (tokens, errors) = tokenize_with_errors("<![CDATA[x]]>");
    assert_eq!(codes(&errors), vec![ParseErrorCode::CdataInHtmlContent]);
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, "[CDATA[x]]"),
        _ => panic!("Expected Comment token"),
    }
}

#[test]
fn test_cdata_in_foreign_content() {
    let mut tokenizer = HTMLTokenizer::with_options(
        StrSource::new("<svg><![CDATA[a]b]]]></svg><![CDATA[z]]>"),
        ContentModelSink::new(Vec::new()),
        Vec::new(),
        TokenizerOptions::default(),
    );
    tokenizer.run().expect("tokenizer failed");
    let (sink, errors) = tokenizer.into_parts();
    let tokens = sink.into_inner();

    assert!(matches!(&tokens[0], Token::StartTag { name, .. } if name == "svg"));
    assert_eq!(text(&tokens[1..5]), "a]b]");
    assert_eq!(tokens[5], end_tag("svg"));
    // After </svg> the same markup is HTML content again.
    assert!(matches!(&tokens[6], Token::Comment { data } if data == "[CDATA[z]]"));
    assert_eq!(codes(&errors), vec![ParseErrorCode::CdataInHtmlContent]);
}

#[test]
fn test_eof_in_cdata() {
    let mut tokenizer = HTMLTokenizer::with_options(
        StrSource::new("<math><![CDATA[ab"),
        ContentModelSink::new(Vec::new()),
        Vec::new(),
        TokenizerOptions::default(),
    );
    tokenizer.run().expect("tokenizer failed");
    let (sink, errors) = tokenizer.into_parts();
    assert_eq!(text(sink.inner()), "ab");
    assert_eq!(codes(&errors), vec![ParseErrorCode::EofInCdata]);
}

// =============================================================================
// Sinks
// =============================================================================

#[test]
fn test_content_model_sink_switches_to_rcdata() {
    let mut tokenizer = HTMLTokenizer::with_options(
        StrSource::new("<title>a<b>&amp;</title><b>"),
        ContentModelSink::new(Vec::new()),
        Vec::new(),
        TokenizerOptions::default(),
    );
    tokenizer.run().expect("tokenizer failed");
    let tokens = tokenizer.into_parts().0.into_inner();
    assert_eq!(text(&tokens), "a<b>&");
    assert_eq!(tokens[tokens.len() - 3], end_tag("title"));
    assert!(matches!(&tokens[tokens.len() - 2], Token::StartTag { name, .. } if name == "b"));
}

#[test]
fn test_coalescing_sink_merges_character_runs() {
    let mut tokenizer = HTMLTokenizer::with_options(
        StrSource::new("ab<i>c&amp;d</i>"),
        CoalescingSink::new(Vec::new()),
        Vec::new(),
        TokenizerOptions::default(),
    );
    tokenizer.run().expect("tokenizer failed");
    let tokens = tokenizer.into_parts().0.into_inner();
    assert_eq!(
        tokens,
        vec![
            Token::Characters {
                data: "ab".to_string()
            },
            Token::StartTag {
                name: "i".to_string(),
                self_closing: false,
                attributes: Vec::new(),
            },
            Token::Characters {
                data: "c&d".to_string()
            },
            end_tag("i"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_core_output_is_uncoalesced() {
    let tokens = tokenize("ab");
    assert_eq!(
        tokens,
        vec![
            Token::Character { data: 'a' },
            Token::Character { data: 'b' },
            Token::EndOfFile
        ]
    );
}

#[test]
fn test_state_changed_callback() {
    let mut tokenizer = HTMLTokenizer::with_options(
        StrSource::new("<a>"),
        RecordingSink::default(),
        (),
        TokenizerOptions::default(),
    );
    tokenizer.run().expect("tokenizer failed");
    assert_eq!(
        tokenizer.sink().transitions,
        vec![
            (TokenizerState::Data, TokenizerState::TagOpen),
            (TokenizerState::TagOpen, TokenizerState::TagName),
            (TokenizerState::TagName, TokenizerState::Data),
        ]
    );
}

#[test]
fn test_sink_state_override_applies_before_next_character() {
    let sink = RecordingSink {
        switch_after_start_tag: Some(TokenizerState::PLAINTEXT),
        ..RecordingSink::default()
    };
    let mut tokenizer =
        HTMLTokenizer::with_options(StrSource::new("<p><b>x"), sink, (), TokenizerOptions::default());
    tokenizer.run().expect("tokenizer failed");
    assert_eq!(tokenizer.state(), TokenizerState::PLAINTEXT);

    let sink = tokenizer.into_parts().0;
    assert_eq!(text(&sink.tokens), "<b>x");
    assert!(
        sink.transitions
            .contains(&(TokenizerState::Data, TokenizerState::PLAINTEXT))
    );
}

#[test]
fn test_logging_error_sink_does_not_stop_tokenizing() {
    let mut tokenizer = HTMLTokenizer::with_options(
        StrSource::new("<a\0 b=1 b=2"),
        Vec::new(),
        LoggingErrorSink,
        TokenizerOptions::default(),
    );
    assert_eq!(tokenizer.run(), Ok(()));
    assert!(tokenizer.tokens().last().is_some_and(Token::is_eof));
}

// =============================================================================
// html5lib output format
// =============================================================================

#[test]
fn test_html5lib_json_output() {
    let tokens = tokenize(r#"<!DOCTYPE html><p class="x">a&amp;b<!--c--><br/></p>"#);
    assert_eq!(
        to_html5lib_json(&tokens),
        json!([
            ["DOCTYPE", "html", null, null, true],
            ["StartTag", "p", {"class": "x"}],
            ["Character", "a&b"],
            ["Comment", "c"],
            ["StartTag", "br", {}, true],
            ["EndTag", "p"]
        ])
    );
}

#[test]
fn test_token_display() {
    let tokens = tokenize("<a href=x>\t</a>");
    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["<a href=\"x\">", "Character(\\t)", "</a>", "EOF"]
    );
}
