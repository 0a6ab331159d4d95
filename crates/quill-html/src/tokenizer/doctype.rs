//! DOCTYPE states.
//!
//! [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
//! through [§ 13.2.5.68](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state).
//!
//! The public and system identifier states come in pairs that differ only in
//! which identifier they fill and which error codes they report, so each pair
//! shares one handler parameterized by [`DoctypeIdentifier`].

use quill_common::CharacterSource;

use super::core::{DoctypeIdentifier, HTMLTokenizer, TokenizerState};
use super::errors::{ErrorSink, ParseErrorCode};
use super::pending::PendingKind;
use super::sink::TokenSink;

impl DoctypeIdentifier {
    const fn before_state(self) -> TokenizerState {
        match self {
            Self::Public => TokenizerState::BeforeDOCTYPEPublicIdentifier,
            Self::System => TokenizerState::BeforeDOCTYPESystemIdentifier,
        }
    }

    const fn quoted_state(self, quote: char) -> TokenizerState {
        match (self, quote) {
            (Self::Public, '"') => TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted,
            (Self::Public, _) => TokenizerState::DOCTYPEPublicIdentifierSingleQuoted,
            (Self::System, '"') => TokenizerState::DOCTYPESystemIdentifierDoubleQuoted,
            (Self::System, _) => TokenizerState::DOCTYPESystemIdentifierSingleQuoted,
        }
    }

    const fn after_state(self) -> TokenizerState {
        match self {
            Self::Public => TokenizerState::AfterDOCTYPEPublicIdentifier,
            Self::System => TokenizerState::AfterDOCTYPESystemIdentifier,
        }
    }

    const fn missing_whitespace_after_keyword(self) -> ParseErrorCode {
        match self {
            Self::Public => ParseErrorCode::MissingWhitespaceAfterDoctypePublicKeyword,
            Self::System => ParseErrorCode::MissingWhitespaceAfterDoctypeSystemKeyword,
        }
    }

    const fn missing_identifier(self) -> ParseErrorCode {
        match self {
            Self::Public => ParseErrorCode::MissingDoctypePublicIdentifier,
            Self::System => ParseErrorCode::MissingDoctypeSystemIdentifier,
        }
    }

    const fn missing_quote(self) -> ParseErrorCode {
        match self {
            Self::Public => ParseErrorCode::MissingQuoteBeforeDoctypePublicIdentifier,
            Self::System => ParseErrorCode::MissingQuoteBeforeDoctypeSystemIdentifier,
        }
    }

    const fn abrupt_end(self) -> ParseErrorCode {
        match self {
            Self::Public => ParseErrorCode::AbruptDoctypePublicIdentifier,
            Self::System => ParseErrorCode::AbruptDoctypeSystemIdentifier,
        }
    }
}

impl<I, S, E> HTMLTokenizer<I, S, E>
where
    I: CharacterSource,
    S: TokenSink,
    E: ErrorSink,
{
    /// "This is an eof-in-doctype parse error. Set the current DOCTYPE token's
    /// force-quirks flag to on. Emit the current DOCTYPE token. Emit an
    /// end-of-file token."
    fn eof_in_doctype(&mut self) {
        self.pending.set_force_quirks();
        self.eof_in(ParseErrorCode::EofInDoctype);
    }

    /// Report `code`, force quirks, then go to the bogus DOCTYPE state without
    /// consuming the current character.
    fn bogus_doctype(&mut self, code: ParseErrorCode) {
        self.parse_error(code);
        self.pending.set_force_quirks();
        self.reconsume_in(TokenizerState::BogusDOCTYPE);
    }

    /// Report `code`, force quirks, switch to the data state and emit the DOCTYPE.
    fn abrupt_doctype(&mut self, code: ParseErrorCode) {
        self.parse_error(code);
        self.pending.set_force_quirks();
        self.switch_to(TokenizerState::Data);
        self.emit_pending_token();
    }

    fn start_doctype_identifier(&mut self, which: DoctypeIdentifier) {
        match which {
            DoctypeIdentifier::Public => self.pending.start_public_identifier(),
            DoctypeIdentifier::System => self.pending.start_system_identifier(),
        }
    }

    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    pub(super) fn handle_doctype_state(&mut self) {
        match self.current_input_character {
            // "Switch to the before DOCTYPE name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDOCTYPEName);
            }
            // "U+003E GREATER-THAN SIGN (>)"
            // "Reconsume in the before DOCTYPE name state."
            Some('>') => self.reconsume_in(TokenizerState::BeforeDOCTYPEName),
            // "EOF"
            // "This is an eof-in-doctype parse error. Create a new DOCTYPE token.
            // Set its force-quirks flag to on. Emit the current token. Emit an
            // end-of-file token."
            None => {
                self.create_pending(PendingKind::Doctype);
                self.eof_in_doctype();
            }
            // "Anything else"
            // "This is a missing-whitespace-before-doctype-name parse error.
            // Reconsume in the before DOCTYPE name state."
            Some(_) => {
                self.parse_error(ParseErrorCode::MissingWhitespaceBeforeDoctypeName);
                self.reconsume_in(TokenizerState::BeforeDOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    pub(super) fn handle_before_doctype_name_state(&mut self) {
        match self.current_input_character {
            // "Ignore the character."
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+0000 NULL"
            // "This is an unexpected-null-character parse error. Create a new
            // DOCTYPE token. Set the token's name to a U+FFFD REPLACEMENT CHARACTER
            // character. Switch to the DOCTYPE name state."
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.create_pending(PendingKind::Doctype);
                self.pending.push_name(char::REPLACEMENT_CHARACTER);
                self.switch_to(TokenizerState::DOCTYPEName);
            }
            // "U+003E GREATER-THAN SIGN (>)"
            // "This is a missing-doctype-name parse error. Create a new DOCTYPE
            // token. Set its force-quirks flag to on. Switch to the data state.
            // Emit the current token."
            Some('>') => {
                self.create_pending(PendingKind::Doctype);
                self.abrupt_doctype(ParseErrorCode::MissingDoctypeName);
            }
            None => {
                self.create_pending(PendingKind::Doctype);
                self.eof_in_doctype();
            }
            // "ASCII upper alpha" / "Anything else"
            // "Create a new DOCTYPE token. Set the token's name to the current input
            // character (lowercased for ASCII upper alpha). Switch to the DOCTYPE
            // name state."
            Some(c) => {
                self.create_pending(PendingKind::Doctype);
                self.pending.push_name(c.to_ascii_lowercase());
                self.switch_to(TokenizerState::DOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    pub(super) fn handle_doctype_name_state(&mut self) {
        match self.current_input_character {
            // "Switch to the after DOCTYPE name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterDOCTYPEName);
            }
            // "Switch to the data state. Emit the current DOCTYPE token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.pending.push_name(char::REPLACEMENT_CHARACTER);
            }
            None => self.eof_in_doctype(),
            // "Append the current input character to the current DOCTYPE token's
            // name", lowercasing ASCII upper alpha.
            Some(c) => self.pending.push_name(c.to_ascii_lowercase()),
        }
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    pub(super) fn handle_after_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            None => self.eof_in_doctype(),
            Some(_) => {
                // "If the six characters starting from the current input character
                // are an ASCII case-insensitive match for the word "PUBLIC", then
                // consume those characters and switch to the after DOCTYPE public
                // keyword state."
                if self.current_and_next_characters_are_case_insensitive("PUBLIC") {
                    self.input.advance(5);
                    self.switch_to(TokenizerState::AfterDOCTYPEPublicKeyword);
                }
                // "Otherwise, if the six characters starting from the current input
                // character are an ASCII case-insensitive match for the word
                // "SYSTEM", then consume those characters and switch to the after
                // DOCTYPE system keyword state."
                else if self.current_and_next_characters_are_case_insensitive("SYSTEM") {
                    self.input.advance(5);
                    self.switch_to(TokenizerState::AfterDOCTYPESystemKeyword);
                }
                // "Otherwise, this is an invalid-character-sequence-after-doctype-name
                // parse error. Set the current DOCTYPE token's force-quirks flag to
                // on. Reconsume in the bogus DOCTYPE state."
                else {
                    self.bogus_doctype(ParseErrorCode::InvalidCharacterSequenceAfterDoctypeName);
                }
            }
        }
    }

    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    pub(super) fn handle_after_doctype_keyword_state(&mut self, which: DoctypeIdentifier) {
        match self.current_input_character {
            // "Switch to the before DOCTYPE public identifier state."
            Some(c) if Self::is_whitespace_char(c) => self.switch_to(which.before_state()),
            // "U+0022 QUOTATION MARK (")"
            // "This is a missing-whitespace-after-doctype-public-keyword parse
            // error. Set the current DOCTYPE token's public identifier to the empty
            // string (not missing), then switch to the DOCTYPE public identifier
            // (double-quoted) state."
            Some(quote @ ('"' | '\'')) => {
                self.parse_error(which.missing_whitespace_after_keyword());
                self.start_doctype_identifier(which);
                self.switch_to(which.quoted_state(quote));
            }
            // "This is a missing-doctype-public-identifier parse error. Set the
            // current DOCTYPE token's force-quirks flag to on. Switch to the data
            // state. Emit the current DOCTYPE token."
            Some('>') => self.abrupt_doctype(which.missing_identifier()),
            None => self.eof_in_doctype(),
            // "This is a missing-quote-before-doctype-public-identifier parse error.
            // Set the current DOCTYPE token's force-quirks flag to on. Reconsume in
            // the bogus DOCTYPE state."
            Some(_) => self.bogus_doctype(which.missing_quote()),
        }
    }

    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    pub(super) fn handle_before_doctype_identifier_state(&mut self, which: DoctypeIdentifier) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some(quote @ ('"' | '\'')) => {
                self.start_doctype_identifier(which);
                self.switch_to(which.quoted_state(quote));
            }
            Some('>') => self.abrupt_doctype(which.missing_identifier()),
            None => self.eof_in_doctype(),
            Some(_) => self.bogus_doctype(which.missing_quote()),
        }
    }

    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    /// [§ 13.2.5.60 DOCTYPE public identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(single-quoted)-state)
    /// [§ 13.2.5.65 DOCTYPE system identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(double-quoted)-state)
    /// [§ 13.2.5.66 DOCTYPE system identifier (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-system-identifier-(single-quoted)-state)
    pub(super) fn handle_doctype_identifier_quoted_state(
        &mut self,
        which: DoctypeIdentifier,
        quote: char,
    ) {
        match self.current_input_character {
            // "Switch to the after DOCTYPE public identifier state."
            Some(c) if c == quote => self.switch_to(which.after_state()),
            // "This is an unexpected-null-character parse error. Append a U+FFFD
            // REPLACEMENT CHARACTER character to the current DOCTYPE token's public
            // identifier."
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.push_doctype_identifier(which, char::REPLACEMENT_CHARACTER);
            }
            // "This is an abrupt-doctype-public-identifier parse error. Set the
            // current DOCTYPE token's force-quirks flag to on. Switch to the data
            // state. Emit the current DOCTYPE token."
            Some('>') => self.abrupt_doctype(which.abrupt_end()),
            None => self.eof_in_doctype(),
            Some(c) => self.push_doctype_identifier(which, c),
        }
    }

    fn push_doctype_identifier(&mut self, which: DoctypeIdentifier, c: char) {
        match which {
            DoctypeIdentifier::Public => self.pending.push_public_identifier(c),
            DoctypeIdentifier::System => self.pending.push_system_identifier(c),
        }
    }

    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    pub(super) fn handle_after_doctype_public_identifier_state(&mut self) {
        match self.current_input_character {
            // "Switch to the between DOCTYPE public and system identifiers state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            // "This is a missing-whitespace-between-doctype-public-and-system-identifiers
            // parse error. Set the current DOCTYPE token's system identifier to the
            // empty string (not missing), then switch to the DOCTYPE system
            // identifier (double-quoted) state."
            Some(quote @ ('"' | '\'')) => {
                self.parse_error(
                    ParseErrorCode::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
                );
                self.pending.start_system_identifier();
                self.switch_to(DoctypeIdentifier::System.quoted_state(quote));
            }
            None => self.eof_in_doctype(),
            Some(_) => self.bogus_doctype(ParseErrorCode::MissingQuoteBeforeDoctypeSystemIdentifier),
        }
    }

    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    pub(super) fn handle_between_doctype_public_and_system_identifiers_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            Some(quote @ ('"' | '\'')) => {
                self.pending.start_system_identifier();
                self.switch_to(DoctypeIdentifier::System.quoted_state(quote));
            }
            None => self.eof_in_doctype(),
            Some(_) => self.bogus_doctype(ParseErrorCode::MissingQuoteBeforeDoctypeSystemIdentifier),
        }
    }

    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    pub(super) fn handle_after_doctype_system_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            None => self.eof_in_doctype(),
            // "This is an unexpected-character-after-doctype-system-identifier parse
            // error. Reconsume in the bogus DOCTYPE state. (This does not set the
            // current DOCTYPE token's force-quirks flag to on.)"
            Some(_) => {
                self.parse_error(ParseErrorCode::UnexpectedCharacterAfterDoctypeSystemIdentifier);
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    pub(super) fn handle_bogus_doctype_state(&mut self) {
        match self.current_input_character {
            // "Switch to the data state. Emit the DOCTYPE token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            // "This is an unexpected-null-character parse error. Ignore the character."
            Some('\0') => self.parse_error(ParseErrorCode::UnexpectedNullCharacter),
            // "Emit the DOCTYPE token. Emit an end-of-file token."
            None => self.emit_eof(),
            // "Ignore the character."
            Some(_) => {}
        }
    }
}
