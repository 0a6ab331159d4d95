//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Lookahead ("If the next few characters are")
//! - Token emission ("Emit the current token")
//! - End tag matching inside RCDATA, RAWTEXT and script data
//! - Parse error reporting

use quill_common::{CharacterSource, Position};

use super::core::{HTMLTokenizer, TokenizerState};
use super::errors::{ErrorSink, ParseErrorCode};
use super::pending::{AttributeCommit, PendingKind};
use super::sink::{SinkResult, TokenSink};
use super::token::Token;

const LOG_TARGET: &str = "quill_html::tokenizer";

// =============================================================================
// State Transition Helpers
// =============================================================================

impl<I, S, E> HTMLTokenizer<I, S, E>
where
    I: CharacterSource,
    S: TokenSink,
    E: ErrorSink,
{
    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Switch to the X state"
    ///
    /// The next character will be consumed on the next iteration of the main loop.
    pub(super) fn switch_to(&mut self, new_state: TokenizerState) {
        if self.state == new_state {
            return;
        }
        log::trace!(target: LOG_TARGET, "{} -> {new_state}", self.state);
        self.sink.state_changed(self.state, new_state);
        self.state = new_state;
    }

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.input.reconsume();
        self.switch_to(new_state);
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl<I, S, E> HTMLTokenizer<I, S, E>
where
    I: CharacterSource,
    S: TokenSink,
    E: ErrorSink,
{
    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// "If the next few characters are..."
    pub(super) fn next_few_characters_are(&self, target: &str) -> bool {
        target
            .chars()
            .enumerate()
            .all(|(i, expected)| self.input.lookahead(i) == Some(expected))
    }

    /// "ASCII case-insensitive match for the word 'DOCTYPE'"
    pub(super) fn next_few_characters_are_case_insensitive(&self, target: &str) -> bool {
        target.chars().enumerate().all(|(i, expected)| {
            self.input
                .lookahead(i)
                .is_some_and(|c| c.eq_ignore_ascii_case(&expected))
        })
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    ///
    /// "If the six characters starting from the current input character are an
    /// ASCII case-insensitive match for the word ..."
    pub(super) fn current_and_next_characters_are_case_insensitive(&self, word: &str) -> bool {
        let mut expected = word.chars();
        let Some(first) = expected.next() else {
            return true;
        };
        self.current_input_character
            .is_some_and(|c| c.eq_ignore_ascii_case(&first))
            && expected.enumerate().all(|(i, e)| {
                self.input
                    .lookahead(i)
                    .is_some_and(|c| c.eq_ignore_ascii_case(&e))
            })
    }

    /// [§ 13.1.4 ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace)
    ///
    /// The tokenizer's whitespace: tab, LF, FF and space. CR never reaches the
    /// tokenizer because the input stream is preprocessed.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        // "U+0009 CHARACTER TABULATION (tab)"
        // "U+000A LINE FEED (LF)"
        // "U+000C FORM FEED (FF)"
        // "U+0020 SPACE"
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C')
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl<I, S, E> HTMLTokenizer<I, S, E>
where
    I: CharacterSource,
    S: TokenSink,
    E: ErrorSink,
{
    /// Hand a finished token to the sink and remember any state switch it asks for.
    pub(super) fn emit(&mut self, token: Token) {
        log::trace!(target: LOG_TARGET, "emit {token}");
        if let SinkResult::SwitchTo(state) = self.sink.add_token(token) {
            self.state_override = Some(state);
        }
    }

    /// "Emit the current input character as a character token."
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.emit(Token::new_character(c));
    }

    /// Create a new tag, comment or DOCTYPE token.
    ///
    /// A different token still under construction is emitted first.
    pub(super) fn create_pending(&mut self, kind: PendingKind) {
        if self.pending.kind().is_some_and(|live| live != kind) {
            self.emit_pending_token();
        }
        self.pending.reset(kind);
    }

    /// "Emit the current token"
    pub(super) fn emit_pending_token(&mut self) {
        // STEP 1: The attribute still under construction belongs to this token.
        let commit = self.pending.commit_attribute();
        self.check_attribute_commit(commit);

        let Some(token) = self.pending.finish() else {
            return;
        };

        match &token {
            // STEP 2: Remember the tag name for the appropriate end tag check.
            Token::StartTag { name, .. } => self.last_start_tag_name = Some(name.clone()),
            // [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
            // "When an end tag token is emitted with attributes, that is an
            // end-tag-with-attributes parse error. When an end tag token is
            // emitted with its self-closing flag set, that is an
            // end-tag-with-trailing-solidus parse error."
            Token::EndTag {
                self_closing,
                attributes,
                ..
            } => {
                let has_attributes = !attributes.is_empty();
                let self_closing = *self_closing;
                if has_attributes {
                    self.parse_error(ParseErrorCode::EndTagWithAttributes);
                }
                if self_closing {
                    self.parse_error(ParseErrorCode::EndTagWithTrailingSolidus);
                }
            }
            _ => {}
        }

        // STEP 3: Hand it over.
        self.emit(token);
    }

    /// "Emit an end-of-file token."
    ///
    /// Whatever token is still under construction is emitted first, so EOF
    /// never drops input silently.
    pub(super) fn emit_eof(&mut self) {
        self.emit_pending_token();
        self.emit(Token::EndOfFile);
        self.at_eof = true;
    }

    /// "This is an eof-in-X parse error. Emit an end-of-file token."
    pub(super) fn eof_in(&mut self, code: ParseErrorCode) {
        self.parse_error(code);
        self.emit_eof();
    }
}

// =============================================================================
// Attribute Helpers
// =============================================================================

impl<I, S, E> HTMLTokenizer<I, S, E>
where
    I: CharacterSource,
    S: TokenSink,
    E: ErrorSink,
{
    /// "Start a new attribute in the current tag token."
    ///
    /// The previous attribute is committed here, which is where a duplicate
    /// name is detected.
    pub(super) fn start_new_attribute(&mut self) {
        let commit = self.pending.start_attribute(self.input.position());
        self.check_attribute_commit(commit);
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "this is a duplicate-attribute parse error and the new attribute must be
    /// removed from the token." The removal already happened; report it at the
    /// position where the discarded attribute's name began.
    fn check_attribute_commit(&mut self, commit: AttributeCommit) {
        if let AttributeCommit::Duplicate { name, position } = commit {
            self.parse_error_at(position, ParseErrorCode::DuplicateAttribute, Some(&name));
        }
    }
}

// =============================================================================
// RCDATA/RAWTEXT/Script Data Helpers
// =============================================================================

impl<I, S, E> HTMLTokenizer<I, S, E>
where
    I: CharacterSource,
    S: TokenSink,
    E: ErrorSink,
{
    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any. If no start tag has been emitted from this tokenizer,
    /// then no end tag token is appropriate."
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        self.pending.kind() == Some(PendingKind::EndTag)
            && self
                .last_start_tag_name
                .as_deref()
                .is_some_and(|last| last == self.pending.name())
    }

    /// [§ 13.2.5.10 RCDATA end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-open-state)
    /// [§ 13.2.5.13 RAWTEXT end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-open-state)
    /// [§ 13.2.5.16 Script data end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-open-state)
    /// [§ 13.2.5.24 Script data escaped end tag open state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-open-state)
    pub(super) fn handle_content_end_tag_open(
        &mut self,
        name_state: TokenizerState,
        content_state: TokenizerState,
    ) {
        match self.current_input_character {
            // "ASCII alpha"
            // "Create a new end tag token, set its tag name to the empty string.
            // Reconsume in the ... end tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.create_pending(PendingKind::EndTag);
                self.reconsume_in(name_state);
            }
            // "Anything else"
            // "Emit a U+003C LESS-THAN SIGN character token and a U+002F SOLIDUS
            // character token. Reconsume in the ... state."
            _ => {
                self.emit_character_token('<');
                self.emit_character_token('/');
                self.reconsume_in(content_state);
            }
        }
    }

    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    /// [§ 13.2.5.14 RAWTEXT end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-end-tag-name-state)
    /// [§ 13.2.5.17 Script data end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-name-state)
    /// [§ 13.2.5.25 Script data escaped end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-end-tag-name-state)
    ///
    /// The four states are identical apart from the content state they fall
    /// back to.
    pub(super) fn handle_content_end_tag_name(&mut self, content_state: TokenizerState) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION (tab)"
            // "U+000A LINE FEED (LF)"
            // "U+000C FORM FEED (FF)"
            // "U+0020 SPACE"
            // "If the current end tag token is an appropriate end tag token, then
            // switch to the before attribute name state."
            Some(c) if Self::is_whitespace_char(c) && self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            // "U+002F SOLIDUS (/)"
            // "If the current end tag token is an appropriate end tag token, then
            // switch to the self-closing start tag state."
            Some('/') if self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            // "U+003E GREATER-THAN SIGN (>)"
            // "If the current end tag token is an appropriate end tag token, then
            // switch to the data state and emit the current tag token."
            Some('>') if self.is_appropriate_end_tag_token() => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            // "ASCII upper alpha" / "ASCII lower alpha"
            // "Append the lowercase version of the current input character to the
            // current tag token's tag name. Append the current input character to
            // the temporary buffer."
            Some(c) if c.is_ascii_alphabetic() => {
                self.pending.push_name(c.to_ascii_lowercase());
                self.temporary_buffer.push(c);
            }
            // "Anything else"
            _ => self.emit_end_tag_name_anything_else(content_state),
        }
    }

    /// "Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS character
    /// token, and a character token for each of the characters in the temporary
    /// buffer (in the order they were added to the buffer). Reconsume in the
    /// ... state."
    fn emit_end_tag_name_anything_else(&mut self, content_state: TokenizerState) {
        self.emit_character_token('<');
        self.emit_character_token('/');
        let buffer = core::mem::take(&mut self.temporary_buffer);
        for c in buffer.chars() {
            self.emit_character_token(c);
        }
        // The end tag never became a token.
        self.pending.discard();
        self.reconsume_in(content_state);
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl<I, S, E> HTMLTokenizer<I, S, E>
where
    I: CharacterSource,
    S: TokenSink,
    E: ErrorSink,
{
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Report a parse error at the current input character.
    pub(super) fn parse_error(&mut self, code: ParseErrorCode) {
        let position = self.input.position();
        self.parse_error_at(position, code, None);
    }

    pub(super) fn parse_error_at(
        &mut self,
        position: Position,
        code: ParseErrorCode,
        detail: Option<&str>,
    ) {
        log::debug!(target: LOG_TARGET, "{code} at {position} in {} state", self.state);
        self.errors.log(position, code, detail);
    }
}
