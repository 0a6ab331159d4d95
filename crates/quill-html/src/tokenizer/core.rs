use quill_common::{CharacterSource, Position, StrSource};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::errors::{ErrorSink, ParseError, ParseErrorCode, TokenizerError};
use super::options::TokenizerOptions;
use super::pending::{PendingKind, PendingToken};
use super::sink::TokenSink;
use super::token::Token;

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokenizer state machine. Each state corresponds to a section in § 13.2.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum TokenizerState {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    #[default]
    Data,
    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    RCDATA,
    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    RAWTEXT,
    /// [§ 13.2.5.4 Script data state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-state)
    ScriptData,
    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    PLAINTEXT,
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    TagOpen,
    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    EndTagOpen,
    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    TagName,
    /// [§ 13.2.5.9 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    RCDATALessThanSign,
    /// [§ 13.2.5.10 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    RCDATAEndTagOpen,
    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    RCDATAEndTagName,
    /// [§ 13.2.5.12 RAWTEXT less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state)
    RAWTEXTLessThanSign,
    /// [§ 13.2.5.13 RAWTEXT end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state)
    RAWTEXTEndTagOpen,
    /// [§ 13.2.5.14 RAWTEXT end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state)
    RAWTEXTEndTagName,
    /// [§ 13.2.5.15 Script data less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-less-than-sign-state)
    ScriptDataLessThanSign,
    /// [§ 13.2.5.16 Script data end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-open-state)
    ScriptDataEndTagOpen,
    /// [§ 13.2.5.17 Script data end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-name-state)
    ScriptDataEndTagName,
    /// [§ 13.2.5.18 Script data escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-state)
    ScriptDataEscapeStart,
    /// [§ 13.2.5.19 Script data escape start dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-dash-state)
    ScriptDataEscapeStartDash,
    /// [§ 13.2.5.20 Script data escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-state)
    ScriptDataEscaped,
    /// [§ 13.2.5.21 Script data escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-state)
    ScriptDataEscapedDash,
    /// [§ 13.2.5.22 Script data escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-dash-state)
    ScriptDataEscapedDashDash,
    /// [§ 13.2.5.23 Script data escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-less-than-sign-state)
    ScriptDataEscapedLessThanSign,
    /// [§ 13.2.5.24 Script data escaped end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-open-state)
    ScriptDataEscapedEndTagOpen,
    /// [§ 13.2.5.25 Script data escaped end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-name-state)
    ScriptDataEscapedEndTagName,
    /// [§ 13.2.5.26 Script data double escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-start-state)
    ScriptDataDoubleEscapeStart,
    /// [§ 13.2.5.27 Script data double escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-state)
    ScriptDataDoubleEscaped,
    /// [§ 13.2.5.28 Script data double escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-state)
    ScriptDataDoubleEscapedDash,
    /// [§ 13.2.5.29 Script data double escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-dash-state)
    ScriptDataDoubleEscapedDashDash,
    /// [§ 13.2.5.30 Script data double escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-less-than-sign-state)
    ScriptDataDoubleEscapedLessThanSign,
    /// [§ 13.2.5.31 Script data double escape end state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-end-state)
    ScriptDataDoubleEscapeEnd,
    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    BeforeAttributeName,
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    AttributeName,
    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    AfterAttributeName,
    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    BeforeAttributeValue,
    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    AttributeValueDoubleQuoted,
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    AttributeValueSingleQuoted,
    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    AttributeValueUnquoted,
    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    AfterAttributeValueQuoted,
    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    SelfClosingStartTag,
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    BogusComment,
    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    MarkupDeclarationOpen,
    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    CommentStart,
    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    CommentStartDash,
    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    Comment,
    /// [§ 13.2.5.46 Comment less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state)
    CommentLessThanSign,
    /// [§ 13.2.5.47 Comment less-than sign bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state)
    CommentLessThanSignBang,
    /// [§ 13.2.5.48 Comment less-than sign bang dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state)
    CommentLessThanSignBangDash,
    /// [§ 13.2.5.49 Comment less-than sign bang dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state)
    CommentLessThanSignBangDashDash,
    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    CommentEndDash,
    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    CommentEnd,
    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    CommentEndBang,
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    DOCTYPE,
    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    BeforeDOCTYPEName,
    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    DOCTYPEName,
    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    AfterDOCTYPEName,
    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    AfterDOCTYPEPublicKeyword,
    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    BeforeDOCTYPEPublicIdentifier,
    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    DOCTYPEPublicIdentifierDoubleQuoted,
    /// [§ 13.2.5.60 DOCTYPE public identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(single-quoted)-state)
    DOCTYPEPublicIdentifierSingleQuoted,
    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    AfterDOCTYPEPublicIdentifier,
    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    BetweenDOCTYPEPublicAndSystemIdentifiers,
    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    AfterDOCTYPESystemKeyword,
    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    BeforeDOCTYPESystemIdentifier,
    /// [§ 13.2.5.65 DOCTYPE system identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state)
    DOCTYPESystemIdentifierDoubleQuoted,
    /// [§ 13.2.5.66 DOCTYPE system identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state)
    DOCTYPESystemIdentifierSingleQuoted,
    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    AfterDOCTYPESystemIdentifier,
    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    BogusDOCTYPE,
    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    CDATASection,
    /// [§ 13.2.5.70 CDATA section bracket state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-bracket-state)
    CDATASectionBracket,
    /// [§ 13.2.5.71 CDATA section end state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-end-state)
    CDATASectionEnd,
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    CharacterReference,
    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    NamedCharacterReference,
    /// [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
    AmbiguousAmpersand,
    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    NumericCharacterReference,
    /// [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
    HexadecimalCharacterReferenceStart,
    /// [§ 13.2.5.77 Decimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state)
    DecimalCharacterReferenceStart,
    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    HexadecimalCharacterReference,
    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    DecimalCharacterReference,
    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    NumericCharacterReferenceEnd,
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "Implementations must act as if they used the following state machine to tokenize HTML."
///
/// The tokenizer pulls characters from `I`, hands finished tokens to `S` and
/// reports parse errors to `E`. The defaults collect both into vectors.
pub struct HTMLTokenizer<I = StrSource, S = Vec<Token>, E = Vec<ParseError>> {
    pub(super) state: TokenizerState,
    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    /// "the return state". A single slot; character references never nest.
    pub(super) return_state: Option<TokenizerState>,
    pub(super) input: I,
    pub(super) current_input_character: Option<char>,
    pub(super) pending: PendingToken,
    pub(super) sink: S,
    pub(super) errors: E,
    pub(super) at_eof: bool,
    /// State requested by the sink, applied before the next character is consumed.
    pub(super) state_override: Option<TokenizerState>,

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    /// "The last start tag token emitted is used as part of the tree construction stage
    /// and in the RCDATA, RAWTEXT, and script data states."
    pub(super) last_start_tag_name: Option<String>,

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#temporary-buffer)
    /// Shared by the end tag name states, the script double escape states and
    /// the character reference states.
    pub(super) temporary_buffer: String,

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    /// "the character reference code"
    pub(super) character_reference_code: u32,
    /// Set once the code no longer fits in a `u32`.
    pub(super) character_reference_overflow: bool,
    /// Position of the `;` closing a numeric reference, if it had one.
    pub(super) character_reference_semicolon: Option<Position>,
}

impl HTMLTokenizer {
    /// Create a tokenizer over a string that collects tokens and parse errors
    /// into vectors.
    ///
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
    /// "The initial state is the data state."
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self::with_options(
            StrSource::new(input),
            Vec::new(),
            Vec::new(),
            TokenizerOptions::default(),
        )
    }
}

impl<I, S, E> HTMLTokenizer<I, S, E>
where
    I: CharacterSource,
    S: TokenSink,
    E: ErrorSink,
{
    /// Create a tokenizer from its collaborators.
    #[must_use]
    pub fn with_options(input: I, sink: S, errors: E, options: TokenizerOptions) -> Self {
        Self {
            state: options.initial_state,
            return_state: None,
            input,
            current_input_character: None,
            pending: PendingToken::default(),
            sink,
            errors,
            at_eof: false,
            state_override: None,
            last_start_tag_name: options.last_start_tag_name,
            temporary_buffer: String::new(),
            character_reference_code: 0,
            character_reference_overflow: false,
            character_reference_semicolon: None,
        }
    }

    /// The state the tokenizer is currently in.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Force the tokenizer into `state`, as tree construction does when it
    /// decides an element's content model.
    pub fn switch_state(&mut self, state: TokenizerState) {
        self.switch_to(state);
    }

    /// Seed the name used by the appropriate-end-tag check.
    pub fn set_last_start_tag_name(&mut self, name: &str) {
        self.last_start_tag_name = Some(name.to_ascii_lowercase());
    }

    /// The token sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// The error sink.
    #[must_use]
    pub const fn errors(&self) -> &E {
        &self.errors
    }

    /// Tear the tokenizer down into its token sink and error sink.
    #[must_use]
    pub fn into_parts(self) -> (S, E) {
        (self.sink, self.errors)
    }

    /// Run the state machine until the end-of-file token has been emitted.
    ///
    /// # Errors
    ///
    /// Parse errors never fail the run; they go to the error sink. An error is
    /// returned only when the state machine reaches a configuration it has no
    /// transition for, which is a defect in the tokenizer or its setup.
    pub fn run(&mut self) -> Result<(), TokenizerError> {
        while !self.at_eof {
            // "Consume the next input character", or the same one again if the
            // previous state asked to reconsume it.
            self.current_input_character = self.input.next();
            self.step()?;

            if let Some(state) = self.state_override.take() {
                log::debug!(
                    target: "quill_html::tokenizer",
                    "sink switched tokenizer from {} to {state}",
                    self.state
                );
                self.switch_to(state);
            }
        }
        Ok(())
    }

    fn step(&mut self) -> Result<(), TokenizerError> {
        match self.state {
            TokenizerState::Data => self.handle_data_state(),
            TokenizerState::RCDATA => self.handle_rcdata_state(),
            TokenizerState::RAWTEXT => self.handle_rawtext_state(),
            TokenizerState::ScriptData => self.handle_script_data_state(),
            TokenizerState::PLAINTEXT => self.handle_plaintext_state(),
            TokenizerState::TagOpen => self.handle_tag_open_state(),
            TokenizerState::EndTagOpen => self.handle_end_tag_open_state(),
            TokenizerState::TagName => self.handle_tag_name_state(),
            TokenizerState::RCDATALessThanSign => self.handle_rcdata_less_than_sign_state(),
            TokenizerState::RCDATAEndTagOpen => self.handle_content_end_tag_open(
                TokenizerState::RCDATAEndTagName,
                TokenizerState::RCDATA,
            ),
            TokenizerState::RCDATAEndTagName => {
                self.handle_content_end_tag_name(TokenizerState::RCDATA);
            }
            TokenizerState::RAWTEXTLessThanSign => self.handle_rawtext_less_than_sign_state(),
            TokenizerState::RAWTEXTEndTagOpen => self.handle_content_end_tag_open(
                TokenizerState::RAWTEXTEndTagName,
                TokenizerState::RAWTEXT,
            ),
            TokenizerState::RAWTEXTEndTagName => {
                self.handle_content_end_tag_name(TokenizerState::RAWTEXT);
            }
            TokenizerState::ScriptDataLessThanSign => {
                self.handle_script_data_less_than_sign_state();
            }
            TokenizerState::ScriptDataEndTagOpen => self.handle_content_end_tag_open(
                TokenizerState::ScriptDataEndTagName,
                TokenizerState::ScriptData,
            ),
            TokenizerState::ScriptDataEndTagName => {
                self.handle_content_end_tag_name(TokenizerState::ScriptData);
            }
            TokenizerState::ScriptDataEscapeStart => self.handle_script_data_escape_start_state(),
            TokenizerState::ScriptDataEscapeStartDash => {
                self.handle_script_data_escape_start_dash_state();
            }
            TokenizerState::ScriptDataEscaped => self.handle_script_data_escaped_state(),
            TokenizerState::ScriptDataEscapedDash => self.handle_script_data_escaped_dash_state(),
            TokenizerState::ScriptDataEscapedDashDash => {
                self.handle_script_data_escaped_dash_dash_state();
            }
            TokenizerState::ScriptDataEscapedLessThanSign => {
                self.handle_script_data_escaped_less_than_sign_state();
            }
            TokenizerState::ScriptDataEscapedEndTagOpen => self.handle_content_end_tag_open(
                TokenizerState::ScriptDataEscapedEndTagName,
                TokenizerState::ScriptDataEscaped,
            ),
            TokenizerState::ScriptDataEscapedEndTagName => {
                self.handle_content_end_tag_name(TokenizerState::ScriptDataEscaped);
            }
            TokenizerState::ScriptDataDoubleEscapeStart => {
                self.handle_script_data_double_escape_boundary(
                    TokenizerState::ScriptDataDoubleEscaped,
                    TokenizerState::ScriptDataEscaped,
                );
            }
            TokenizerState::ScriptDataDoubleEscaped => {
                self.handle_script_data_double_escaped_state();
            }
            TokenizerState::ScriptDataDoubleEscapedDash => {
                self.handle_script_data_double_escaped_dash_state();
            }
            TokenizerState::ScriptDataDoubleEscapedDashDash => {
                self.handle_script_data_double_escaped_dash_dash_state();
            }
            TokenizerState::ScriptDataDoubleEscapedLessThanSign => {
                self.handle_script_data_double_escaped_less_than_sign_state();
            }
            TokenizerState::ScriptDataDoubleEscapeEnd => {
                self.handle_script_data_double_escape_boundary(
                    TokenizerState::ScriptDataEscaped,
                    TokenizerState::ScriptDataDoubleEscaped,
                );
            }
            TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(),
            TokenizerState::AttributeName => self.handle_attribute_name_state(),
            TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(),
            TokenizerState::BeforeAttributeValue => self.handle_before_attribute_value_state(),
            TokenizerState::AttributeValueDoubleQuoted => {
                self.handle_attribute_value_quoted_state('"');
            }
            TokenizerState::AttributeValueSingleQuoted => {
                self.handle_attribute_value_quoted_state('\'');
            }
            TokenizerState::AttributeValueUnquoted => self.handle_attribute_value_unquoted_state(),
            TokenizerState::AfterAttributeValueQuoted => {
                self.handle_after_attribute_value_quoted_state();
            }
            TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),
            TokenizerState::BogusComment => self.handle_bogus_comment_state(),
            TokenizerState::MarkupDeclarationOpen => self.handle_markup_declaration_open_state(),
            TokenizerState::CommentStart => self.handle_comment_start_state(),
            TokenizerState::CommentStartDash => self.handle_comment_start_dash_state(),
            TokenizerState::Comment => self.handle_comment_state(),
            TokenizerState::CommentLessThanSign => self.handle_comment_less_than_sign_state(),
            TokenizerState::CommentLessThanSignBang => {
                self.handle_comment_less_than_sign_bang_state();
            }
            TokenizerState::CommentLessThanSignBangDash => {
                self.handle_comment_less_than_sign_bang_dash_state();
            }
            TokenizerState::CommentLessThanSignBangDashDash => {
                self.handle_comment_less_than_sign_bang_dash_dash_state();
            }
            TokenizerState::CommentEndDash => self.handle_comment_end_dash_state(),
            TokenizerState::CommentEnd => self.handle_comment_end_state(),
            TokenizerState::CommentEndBang => self.handle_comment_end_bang_state(),
            TokenizerState::DOCTYPE => self.handle_doctype_state(),
            TokenizerState::BeforeDOCTYPEName => self.handle_before_doctype_name_state(),
            TokenizerState::DOCTYPEName => self.handle_doctype_name_state(),
            TokenizerState::AfterDOCTYPEName => self.handle_after_doctype_name_state(),
            TokenizerState::AfterDOCTYPEPublicKeyword => {
                self.handle_after_doctype_keyword_state(DoctypeIdentifier::Public);
            }
            TokenizerState::BeforeDOCTYPEPublicIdentifier => {
                self.handle_before_doctype_identifier_state(DoctypeIdentifier::Public);
            }
            TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted => {
                self.handle_doctype_identifier_quoted_state(DoctypeIdentifier::Public, '"');
            }
            TokenizerState::DOCTYPEPublicIdentifierSingleQuoted => {
                self.handle_doctype_identifier_quoted_state(DoctypeIdentifier::Public, '\'');
            }
            TokenizerState::AfterDOCTYPEPublicIdentifier => {
                self.handle_after_doctype_public_identifier_state();
            }
            TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers => {
                self.handle_between_doctype_public_and_system_identifiers_state();
            }
            TokenizerState::AfterDOCTYPESystemKeyword => {
                self.handle_after_doctype_keyword_state(DoctypeIdentifier::System);
            }
            TokenizerState::BeforeDOCTYPESystemIdentifier => {
                self.handle_before_doctype_identifier_state(DoctypeIdentifier::System);
            }
            TokenizerState::DOCTYPESystemIdentifierDoubleQuoted => {
                self.handle_doctype_identifier_quoted_state(DoctypeIdentifier::System, '"');
            }
            TokenizerState::DOCTYPESystemIdentifierSingleQuoted => {
                self.handle_doctype_identifier_quoted_state(DoctypeIdentifier::System, '\'');
            }
            TokenizerState::AfterDOCTYPESystemIdentifier => {
                self.handle_after_doctype_system_identifier_state();
            }
            TokenizerState::BogusDOCTYPE => self.handle_bogus_doctype_state(),
            TokenizerState::CDATASection => self.handle_cdata_section_state(),
            TokenizerState::CDATASectionBracket => self.handle_cdata_section_bracket_state(),
            TokenizerState::CDATASectionEnd => self.handle_cdata_section_end_state(),
            TokenizerState::CharacterReference => self.handle_character_reference_state()?,
            TokenizerState::NamedCharacterReference => {
                self.handle_named_character_reference_state()?;
            }
            TokenizerState::AmbiguousAmpersand => self.handle_ambiguous_ampersand_state()?,
            TokenizerState::NumericCharacterReference => {
                self.handle_numeric_character_reference_state();
            }
            TokenizerState::HexadecimalCharacterReferenceStart => {
                self.handle_numeric_character_reference_start_state(16)?;
            }
            TokenizerState::DecimalCharacterReferenceStart => {
                self.handle_numeric_character_reference_start_state(10)?;
            }
            TokenizerState::HexadecimalCharacterReference => {
                self.handle_numeric_character_reference_digits_state(16);
            }
            TokenizerState::DecimalCharacterReference => {
                self.handle_numeric_character_reference_digits_state(10);
            }
            TokenizerState::NumericCharacterReferenceEnd => {
                self.handle_numeric_character_reference_end_state()?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Content states
    // =========================================================================

    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    fn handle_data_state(&mut self) {
        match self.current_input_character {
            // "U+0026 AMPERSAND (&) - Set the return state to the data state.
            // Switch to the character reference state."
            Some('&') => {
                self.return_state = Some(TokenizerState::Data);
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the tag open state."
            Some('<') => self.switch_to(TokenizerState::TagOpen),
            // "U+0000 NULL - This is an unexpected-null-character parse error.
            // Emit the current input character as a character token."
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.emit_character_token('\0');
            }
            // "EOF - Emit an end-of-file token."
            None => self.emit_eof(),
            // "Anything else - Emit the current input character as a character token."
            Some(c) => self.emit_character_token(c),
        }
    }

    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    fn handle_rcdata_state(&mut self) {
        match self.current_input_character {
            // "U+0026 AMPERSAND (&)"
            // "Set the return state to the RCDATA state. Switch to the character reference state."
            Some('&') => {
                self.return_state = Some(TokenizerState::RCDATA);
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+003C LESS-THAN SIGN (<)"
            // "Switch to the RCDATA less-than sign state."
            Some('<') => self.switch_to(TokenizerState::RCDATALessThanSign),
            _ => self.handle_text_character(),
        }
    }

    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    fn handle_rawtext_state(&mut self) {
        match self.current_input_character {
            // "U+003C LESS-THAN SIGN (<)"
            // "Switch to the RAWTEXT less-than sign state."
            Some('<') => self.switch_to(TokenizerState::RAWTEXTLessThanSign),
            _ => self.handle_text_character(),
        }
    }

    /// [§ 13.2.5.5 PLAINTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#plaintext-state)
    ///
    /// There is no way out of this state other than EOF.
    fn handle_plaintext_state(&mut self) {
        self.handle_text_character();
    }

    /// The entries RCDATA, RAWTEXT, script data and PLAINTEXT share:
    ///
    /// "U+0000 NULL: This is an unexpected-null-character parse error. Emit a
    /// U+FFFD REPLACEMENT CHARACTER character token."
    /// "EOF: Emit an end-of-file token."
    /// "Anything else: Emit the current input character as a character token."
    pub(super) fn handle_text_character(&mut self) {
        match self.current_input_character {
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.emit_character_token(char::REPLACEMENT_CHARACTER);
            }
            None => self.emit_eof(),
            Some(c) => self.emit_character_token(c),
        }
    }

    /// [§ 13.2.5.9 RCDATA less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-less-than-sign-state)
    fn handle_rcdata_less_than_sign_state(&mut self) {
        match self.current_input_character {
            // "U+002F SOLIDUS (/)"
            // "Set the temporary buffer to the empty string. Switch to the RCDATA end tag open state."
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(TokenizerState::RCDATAEndTagOpen);
            }
            // "Anything else"
            // "Emit a U+003C LESS-THAN SIGN character token. Reconsume in the RCDATA state."
            _ => {
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::RCDATA);
            }
        }
    }

    /// [§ 13.2.5.12 RAWTEXT less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-less-than-sign-state)
    fn handle_rawtext_less_than_sign_state(&mut self) {
        match self.current_input_character {
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(TokenizerState::RAWTEXTEndTagOpen);
            }
            _ => {
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::RAWTEXT);
            }
        }
    }

    // =========================================================================
    // Tag states
    // =========================================================================

    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    fn handle_tag_open_state(&mut self) {
        match self.current_input_character {
            // "U+0021 EXCLAMATION MARK (!)"
            // "Switch to the markup declaration open state."
            //
            // The markup declaration open state looks at "the next few
            // characters" without consuming first, so the `!` is handed back
            // to the source and the lookahead starts right after it.
            Some('!') => self.reconsume_in(TokenizerState::MarkupDeclarationOpen),
            // "U+002F SOLIDUS (/)"
            // "Switch to the end tag open state."
            Some('/') => self.switch_to(TokenizerState::EndTagOpen),
            // "ASCII alpha"
            // "Create a new start tag token, set its tag name to the empty string.
            // Reconsume in the tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.create_pending(PendingKind::StartTag);
                self.reconsume_in(TokenizerState::TagName);
            }
            // "U+003F QUESTION MARK (?)"
            // "This is an unexpected-question-mark-instead-of-tag-name parse error.
            // Create a comment token whose data is the empty string. Reconsume in
            // the bogus comment state."
            Some('?') => {
                self.parse_error(ParseErrorCode::UnexpectedQuestionMarkInsteadOfTagName);
                self.create_pending(PendingKind::Comment);
                self.reconsume_in(TokenizerState::BogusComment);
            }
            // "EOF"
            // "This is an eof-before-tag-name parse error. Emit a U+003C LESS-THAN
            // SIGN character token and an end-of-file token."
            None => {
                self.parse_error(ParseErrorCode::EofBeforeTagName);
                self.emit_character_token('<');
                self.emit_eof();
            }
            // "Anything else"
            // "This is an invalid-first-character-of-tag-name parse error. Emit a
            // U+003C LESS-THAN SIGN character token. Reconsume in the data state."
            Some(_) => {
                self.parse_error(ParseErrorCode::InvalidFirstCharacterOfTagName);
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::Data);
            }
        }
    }

    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    fn handle_end_tag_open_state(&mut self) {
        match self.current_input_character {
            // "ASCII alpha"
            // "Create a new end tag token, set its tag name to the empty string.
            // Reconsume in the tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.create_pending(PendingKind::EndTag);
                self.reconsume_in(TokenizerState::TagName);
            }
            // "U+003E GREATER-THAN SIGN (>)"
            // "This is a missing-end-tag-name parse error. Switch to the data state."
            Some('>') => {
                self.parse_error(ParseErrorCode::MissingEndTagName);
                self.switch_to(TokenizerState::Data);
            }
            // "EOF"
            // "This is an eof-before-tag-name parse error. Emit a U+003C LESS-THAN
            // SIGN character token, a U+002F SOLIDUS character token and an
            // end-of-file token."
            None => {
                self.parse_error(ParseErrorCode::EofBeforeTagName);
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.emit_eof();
            }
            // "Anything else"
            // "This is an invalid-first-character-of-tag-name parse error. Create a
            // comment token whose data is the empty string. Reconsume in the bogus
            // comment state."
            Some(_) => {
                self.parse_error(ParseErrorCode::InvalidFirstCharacterOfTagName);
                self.create_pending(PendingKind::Comment);
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    fn handle_tag_name_state(&mut self) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION (tab)"
            // "U+000A LINE FEED (LF)"
            // "U+000C FORM FEED (FF)"
            // "U+0020 SPACE"
            // "Switch to the before attribute name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            // "U+002F SOLIDUS (/)"
            // "Switch to the self-closing start tag state."
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            // "U+003E GREATER-THAN SIGN (>)"
            // "Switch to the data state. Emit the current tag token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            // "ASCII upper alpha"
            // "Append the lowercase version of the current input character (add
            // 0x0020 to the character's code point) to the current tag token's tag name."
            Some(c) if c.is_ascii_uppercase() => self.pending.push_name(c.to_ascii_lowercase()),
            // "U+0000 NULL"
            // "This is an unexpected-null-character parse error. Append a U+FFFD
            // REPLACEMENT CHARACTER character to the current tag token's tag name."
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.pending.push_name(char::REPLACEMENT_CHARACTER);
            }
            // "EOF"
            // "This is an eof-in-tag parse error. Emit an end-of-file token."
            None => self.eof_in(ParseErrorCode::EofInTag),
            // "Anything else"
            // "Append the current input character to the current tag token's tag name."
            Some(c) => self.pending.push_name(c),
        }
    }

    // =========================================================================
    // Attribute states
    // =========================================================================

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    fn handle_before_attribute_name_state(&mut self) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION (tab)"
            // "U+000A LINE FEED (LF)"
            // "U+000C FORM FEED (FF)"
            // "U+0020 SPACE"
            // "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+002F SOLIDUS (/)"
            // "U+003E GREATER-THAN SIGN (>)"
            // "EOF"
            // "Reconsume in the after attribute name state."
            Some('/' | '>') | None => self.reconsume_in(TokenizerState::AfterAttributeName),
            // "U+003D EQUALS SIGN (=)"
            // "This is an unexpected-equals-sign-before-attribute-name parse error.
            // Start a new attribute in the current tag token. Set that attribute's
            // name to the current input character, and its value to the empty
            // string. Switch to the attribute name state."
            Some('=') => {
                self.parse_error(ParseErrorCode::UnexpectedEqualsSignBeforeAttributeName);
                self.start_new_attribute();
                self.pending.push_attribute_name('=');
                self.switch_to(TokenizerState::AttributeName);
            }
            // "Anything else"
            // "Start a new attribute in the current tag token. Set that attribute
            // name and value to the empty string. Reconsume in the attribute name state."
            Some(_) => {
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    fn handle_attribute_name_state(&mut self) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION (tab)"
            // "U+000A LINE FEED (LF)"
            // "U+000C FORM FEED (FF)"
            // "U+0020 SPACE"
            // "U+002F SOLIDUS (/)"
            // "U+003E GREATER-THAN SIGN (>)"
            // "EOF"
            // "Reconsume in the after attribute name state."
            Some('\t' | '\n' | '\x0C' | ' ' | '/' | '>') | None => {
                self.reconsume_in(TokenizerState::AfterAttributeName);
            }
            // "U+003D EQUALS SIGN (=)"
            // "Switch to the before attribute value state."
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            // "ASCII upper alpha"
            // "Append the lowercase version of the current input character to the
            // current attribute's name."
            Some(c) if c.is_ascii_uppercase() => {
                self.pending.push_attribute_name(c.to_ascii_lowercase());
            }
            // "U+0000 NULL"
            // "This is an unexpected-null-character parse error. Append a U+FFFD
            // REPLACEMENT CHARACTER character to the current attribute's name."
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.pending.push_attribute_name(char::REPLACEMENT_CHARACTER);
            }
            // "U+0022 QUOTATION MARK (")"
            // "U+0027 APOSTROPHE (')"
            // "U+003C LESS-THAN SIGN (<)"
            // "This is an unexpected-character-in-attribute-name parse error. Treat
            // it as per the "anything else" entry below."
            Some(c @ ('"' | '\'' | '<')) => {
                self.parse_error(ParseErrorCode::UnexpectedCharacterInAttributeName);
                self.pending.push_attribute_name(c);
            }
            // "Anything else"
            // "Append the current input character to the current attribute's name."
            Some(c) => self.pending.push_attribute_name(c),
        }
    }

    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    fn handle_after_attribute_name_state(&mut self) {
        match self.current_input_character {
            // "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+002F SOLIDUS (/)"
            // "Switch to the self-closing start tag state."
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            // "U+003D EQUALS SIGN (=)"
            // "Switch to the before attribute value state."
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            // "U+003E GREATER-THAN SIGN (>)"
            // "Switch to the data state. Emit the current tag token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            // "EOF"
            // "This is an eof-in-tag parse error. Emit an end-of-file token."
            None => self.eof_in(ParseErrorCode::EofInTag),
            // "Anything else"
            // "Start a new attribute in the current tag token. Set that attribute
            // name and value to the empty string. Reconsume in the attribute name state."
            Some(_) => {
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    fn handle_before_attribute_value_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+0022 QUOTATION MARK (")"
            // "Switch to the attribute value (double-quoted) state."
            Some('"') => self.switch_to(TokenizerState::AttributeValueDoubleQuoted),
            // "U+0027 APOSTROPHE (')"
            // "Switch to the attribute value (single-quoted) state."
            Some('\'') => self.switch_to(TokenizerState::AttributeValueSingleQuoted),
            // "U+003E GREATER-THAN SIGN (>)"
            // "This is a missing-attribute-value parse error. Switch to the data
            // state. Emit the current tag token."
            Some('>') => {
                self.parse_error(ParseErrorCode::MissingAttributeValue);
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            // "Anything else"
            // "Reconsume in the attribute value (unquoted) state."
            _ => self.reconsume_in(TokenizerState::AttributeValueUnquoted),
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    ///
    /// The two states differ only in which quote closes the value.
    fn handle_attribute_value_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            // "U+0022 QUOTATION MARK (")" / "U+0027 APOSTROPHE (')"
            // "Switch to the after attribute value (quoted) state."
            Some(c) if c == quote => self.switch_to(TokenizerState::AfterAttributeValueQuoted),
            // "U+0026 AMPERSAND (&)"
            // "Set the return state to the attribute value (double-quoted) state.
            // Switch to the character reference state."
            Some('&') => {
                self.return_state = Some(self.state);
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+0000 NULL"
            // "This is an unexpected-null-character parse error. Append a U+FFFD
            // REPLACEMENT CHARACTER character to the current attribute's value."
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.pending.push_attribute_value(char::REPLACEMENT_CHARACTER);
            }
            // "EOF"
            // "This is an eof-in-tag parse error. Emit an end-of-file token."
            None => self.eof_in(ParseErrorCode::EofInTag),
            // "Anything else"
            // "Append the current input character to the current attribute's value."
            Some(c) => self.pending.push_attribute_value(c),
        }
    }

    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    fn handle_attribute_value_unquoted_state(&mut self) {
        match self.current_input_character {
            // "Switch to the before attribute name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            // "U+0026 AMPERSAND (&)"
            // "Set the return state to the attribute value (unquoted) state.
            // Switch to the character reference state."
            Some('&') => {
                self.return_state = Some(TokenizerState::AttributeValueUnquoted);
                self.switch_to(TokenizerState::CharacterReference);
            }
            // "U+003E GREATER-THAN SIGN (>)"
            // "Switch to the data state. Emit the current tag token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.pending.push_attribute_value(char::REPLACEMENT_CHARACTER);
            }
            // "U+0022 QUOTATION MARK (")"
            // "U+0027 APOSTROPHE (')"
            // "U+003C LESS-THAN SIGN (<)"
            // "U+003D EQUALS SIGN (=)"
            // "U+0060 GRAVE ACCENT (`)"
            // "This is an unexpected-character-in-unquoted-attribute-value parse
            // error. Treat it as per the "anything else" entry below."
            Some(c @ ('"' | '\'' | '<' | '=' | '`')) => {
                self.parse_error(ParseErrorCode::UnexpectedCharacterInUnquotedAttributeValue);
                self.pending.push_attribute_value(c);
            }
            None => self.eof_in(ParseErrorCode::EofInTag),
            Some(c) => self.pending.push_attribute_value(c),
        }
    }

    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    fn handle_after_attribute_value_quoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            None => self.eof_in(ParseErrorCode::EofInTag),
            // "Anything else"
            // "This is a missing-whitespace-between-attributes parse error.
            // Reconsume in the before attribute name state."
            Some(_) => {
                self.parse_error(ParseErrorCode::MissingWhitespaceBetweenAttributes);
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    fn handle_self_closing_start_tag_state(&mut self) {
        match self.current_input_character {
            // "U+003E GREATER-THAN SIGN (>)"
            // "Set the self-closing flag of the current tag token. Switch to the
            // data state. Emit the current tag token."
            Some('>') => {
                self.pending.set_self_closing();
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            None => self.eof_in(ParseErrorCode::EofInTag),
            // "Anything else"
            // "This is an unexpected-solidus-in-tag parse error. Reconsume in the
            // before attribute name state."
            Some(_) => {
                self.parse_error(ParseErrorCode::UnexpectedSolidusInTag);
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    // =========================================================================
    // CDATA section states
    // =========================================================================

    /// [§ 13.2.5.69 CDATA section state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-state)
    fn handle_cdata_section_state(&mut self) {
        match self.current_input_character {
            // "U+005D RIGHT SQUARE BRACKET (])"
            // "Switch to the CDATA section bracket state."
            Some(']') => self.switch_to(TokenizerState::CDATASectionBracket),
            // "EOF"
            // "This is an eof-in-cdata parse error. Emit an end-of-file token."
            None => self.eof_in(ParseErrorCode::EofInCdata),
            // "Anything else"
            // "Emit the current input character as a character token."
            //
            // U+0000 is passed through; tree construction deals with it.
            Some(c) => self.emit_character_token(c),
        }
    }

    /// [§ 13.2.5.70 CDATA section bracket state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-bracket-state)
    fn handle_cdata_section_bracket_state(&mut self) {
        if self.current_input_character == Some(']') {
            self.switch_to(TokenizerState::CDATASectionEnd);
        } else {
            // "Emit a U+005D RIGHT SQUARE BRACKET character token. Reconsume in
            // the CDATA section state."
            self.emit_character_token(']');
            self.reconsume_in(TokenizerState::CDATASection);
        }
    }

    /// [§ 13.2.5.71 CDATA section end state](https://html.spec.whatwg.org/multipage/parsing.html#cdata-section-end-state)
    fn handle_cdata_section_end_state(&mut self) {
        match self.current_input_character {
            // "Emit a U+005D RIGHT SQUARE BRACKET character token."
            Some(']') => self.emit_character_token(']'),
            // "Switch to the data state."
            Some('>') => self.switch_to(TokenizerState::Data),
            // "Emit two U+005D RIGHT SQUARE BRACKET character tokens. Reconsume
            // in the CDATA section state."
            _ => {
                self.emit_character_token(']');
                self.emit_character_token(']');
                self.reconsume_in(TokenizerState::CDATASection);
            }
        }
    }
}

impl<I, E> HTMLTokenizer<I, Vec<Token>, E> {
    /// Consume the tokenizer and return the token stream.
    /// Call this after `run()`.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.sink
    }

    /// Tokens emitted so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.sink
    }
}

/// Which DOCTYPE identifier a shared DOCTYPE state is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DoctypeIdentifier {
    Public,
    System,
}
