//! Parse errors and tokenizer failures.
//!
//! [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
//!
//! Parse errors are recoverable: the tokenizer reports them to an
//! [`ErrorSink`] and applies the recovery the state machine prescribes.
//! [`TokenizerError`] is reserved for defects in the state machine itself.

use quill_common::Position;
use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};
use thiserror::Error;

use super::core::TokenizerState;

/// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
///
/// The tokenizer's share of the named parse-error catalogue. `to_string()`
/// yields the canonical code, e.g. `unexpected-null-character`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ParseErrorCode {
    /// `<!-->` or `<!--->`.
    AbruptClosingOfEmptyComment,
    /// `>` inside a DOCTYPE public identifier.
    AbruptDoctypePublicIdentifier,
    /// `>` inside a DOCTYPE system identifier.
    AbruptDoctypeSystemIdentifier,
    /// `&#` or `&#x` not followed by a digit.
    AbsenceOfDigitsInNumericCharacterReference,
    /// `<![CDATA[` outside foreign content.
    CdataInHtmlContent,
    /// Numeric reference above U+10FFFF.
    CharacterReferenceOutsideUnicodeRange,
    /// Numeric reference to a control character.
    ControlCharacterReference,
    /// Second attribute with the same name on one tag.
    DuplicateAttribute,
    /// End tag carrying attributes.
    EndTagWithAttributes,
    /// End tag with the self-closing flag set.
    EndTagWithTrailingSolidus,
    /// EOF right after `<` or `</`.
    EofBeforeTagName,
    /// EOF inside a CDATA section.
    EofInCdata,
    /// EOF inside a comment.
    EofInComment,
    /// EOF inside a DOCTYPE.
    EofInDoctype,
    /// EOF inside `<!--` ... in script data.
    EofInScriptHtmlCommentLikeText,
    /// EOF inside a tag.
    EofInTag,
    /// Comment closed by `--!>`.
    IncorrectlyClosedComment,
    /// `<!` not followed by `--`, `DOCTYPE` or `[CDATA[`.
    IncorrectlyOpenedComment,
    /// Something other than PUBLIC or SYSTEM after the DOCTYPE name.
    InvalidCharacterSequenceAfterDoctypeName,
    /// `<` or `</` followed by a character that cannot start a tag name.
    InvalidFirstCharacterOfTagName,
    /// `=` followed directly by `>`.
    MissingAttributeValue,
    /// `<!DOCTYPE>`.
    MissingDoctypeName,
    /// PUBLIC keyword without an identifier.
    MissingDoctypePublicIdentifier,
    /// SYSTEM keyword without an identifier.
    MissingDoctypeSystemIdentifier,
    /// `</>`.
    MissingEndTagName,
    /// Public identifier not quoted.
    MissingQuoteBeforeDoctypePublicIdentifier,
    /// System identifier not quoted.
    MissingQuoteBeforeDoctypeSystemIdentifier,
    /// Character reference not terminated by `;`.
    MissingSemicolonAfterCharacterReference,
    /// `PUBLIC"`.
    MissingWhitespaceAfterDoctypePublicKeyword,
    /// `SYSTEM"`.
    MissingWhitespaceAfterDoctypeSystemKeyword,
    /// `<!DOCTYPEhtml>`.
    MissingWhitespaceBeforeDoctypeName,
    /// `a="1"b="2"`.
    MissingWhitespaceBetweenAttributes,
    /// Public and system identifiers not separated by whitespace.
    MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    /// `<!--` inside a comment.
    NestedComment,
    /// Numeric reference to a Unicode noncharacter.
    NoncharacterCharacterReference,
    /// `&#0;`.
    NullCharacterReference,
    /// Numeric reference to a surrogate.
    SurrogateCharacterReference,
    /// Junk after the DOCTYPE system identifier.
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    /// `"`, `'` or `<` in an attribute name.
    UnexpectedCharacterInAttributeName,
    /// `"`, `'`, `<`, `=` or `` ` `` in an unquoted attribute value.
    UnexpectedCharacterInUnquotedAttributeValue,
    /// `=` where an attribute name should start.
    UnexpectedEqualsSignBeforeAttributeName,
    /// U+0000 in the input.
    UnexpectedNullCharacter,
    /// `<?`.
    UnexpectedQuestionMarkInsteadOfTagName,
    /// `/` inside a tag not followed by `>`.
    UnexpectedSolidusInTag,
    /// `&name;` where `name` is not a known reference.
    UnknownNamedCharacterReference,
}

/// A reported parse error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    /// Where the error was detected.
    pub position: Position,
    /// Which error it is.
    pub code: ParseErrorCode,
    /// Optional context, e.g. the offending attribute name.
    pub detail: Option<String>,
}

impl ParseError {
    /// Create a parse error without detail.
    #[must_use]
    pub const fn new(position: Position, code: ParseErrorCode) -> Self {
        Self {
            position,
            code,
            detail: None,
        }
    }
}

/// Receiver for parse errors. Formatting is entirely the sink's concern.
pub trait ErrorSink {
    /// Record one parse error.
    fn log(&mut self, position: Position, code: ParseErrorCode, detail: Option<&str>);
}

impl ErrorSink for Vec<ParseError> {
    fn log(&mut self, position: Position, code: ParseErrorCode, detail: Option<&str>) {
        self.push(ParseError {
            position,
            code,
            detail: detail.map(str::to_owned),
        });
    }
}

/// Discards every error.
impl ErrorSink for () {
    fn log(&mut self, _position: Position, _code: ParseErrorCode, _detail: Option<&str>) {}
}

/// Forwards parse errors to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingErrorSink;

impl ErrorSink for LoggingErrorSink {
    fn log(&mut self, position: Position, code: ParseErrorCode, detail: Option<&str>) {
        match detail {
            Some(detail) => {
                log::warn!(target: "quill_html::tokenizer", "parse error at {position}: {code} ({detail})");
            }
            None => log::warn!(target: "quill_html::tokenizer", "parse error at {position}: {code}"),
        }
    }
}

/// Non-recoverable tokenizer failures. These indicate a defect in the state
/// machine, never malformed input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizerError {
    /// A character reference state was entered without a return state.
    #[error("no return state set when entering {state}")]
    MissingReturnState {
        /// The character reference state that needed a return state.
        state: TokenizerState,
    },
}
