//! Markup declarations, comments and bogus comments.
//!
//! [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
//! through [§ 13.2.5.52](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state).

use quill_common::CharacterSource;

use super::core::{HTMLTokenizer, TokenizerState};
use super::errors::{ErrorSink, ParseErrorCode};
use super::pending::PendingKind;
use super::sink::TokenSink;

impl<I, S, E> HTMLTokenizer<I, S, E>
where
    I: CharacterSource,
    S: TokenSink,
    E: ErrorSink,
{
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    pub(super) fn handle_bogus_comment_state(&mut self) {
        match self.current_input_character {
            // "U+003E GREATER-THAN SIGN (>)"
            // "Switch to the data state. Emit the current comment token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            // "EOF"
            // "Emit the comment. Emit an end-of-file token."
            None => self.emit_eof(),
            // "U+0000 NULL"
            // "This is an unexpected-null-character parse error. Append a U+FFFD
            // REPLACEMENT CHARACTER character to the comment token's data."
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.pending.push_name(char::REPLACEMENT_CHARACTER);
            }
            // "Anything else"
            // "Append the current input character to the comment token's data."
            Some(c) => self.pending.push_name(c),
        }
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// Entered by reconsuming the `!`, so the current input character is the
    /// `!` and lookahead starts at the character after it.
    pub(super) fn handle_markup_declaration_open_state(&mut self) {
        // "Two U+002D HYPHEN-MINUS characters (-)"
        // "Consume those two characters, create a comment token whose data is the
        // empty string, and switch to the comment start state."
        if self.next_few_characters_are("--") {
            self.input.advance(2);
            self.create_pending(PendingKind::Comment);
            self.switch_to(TokenizerState::CommentStart);
        }
        // "ASCII case-insensitive match for the word "DOCTYPE""
        // "Consume those characters and switch to the DOCTYPE state."
        else if self.next_few_characters_are_case_insensitive("DOCTYPE") {
            self.input.advance(7);
            self.switch_to(TokenizerState::DOCTYPE);
        }
        // "The string "[CDATA[" (the five uppercase letters "CDATA" with a U+005B
        // LEFT SQUARE BRACKET character before and after)"
        else if self.next_few_characters_are("[CDATA[") {
            self.input.advance(7);
            // "Consume those characters. If there is an adjusted current node and it
            // is not an element in the HTML namespace, then switch to the CDATA
            // section state."
            if self.sink.in_foreign_content() {
                self.switch_to(TokenizerState::CDATASection);
            } else {
                // "Otherwise, this is a cdata-in-html-content parse error. Create a
                // comment token whose data is the "[CDATA[" string. Switch to the
                // bogus comment state."
                self.parse_error(ParseErrorCode::CdataInHtmlContent);
                self.create_pending(PendingKind::Comment);
                self.pending.push_name_str("[CDATA[");
                self.switch_to(TokenizerState::BogusComment);
            }
        }
        // "Anything else"
        // "This is an incorrectly-opened-comment parse error. Create a comment token
        // whose data is the empty string. Switch to the bogus comment state (don't
        // consume anything in the current state)."
        else {
            self.parse_error(ParseErrorCode::IncorrectlyOpenedComment);
            self.create_pending(PendingKind::Comment);
            self.switch_to(TokenizerState::BogusComment);
        }
    }

    /// [§ 13.2.5.43 Comment start state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-state)
    pub(super) fn handle_comment_start_state(&mut self) {
        match self.current_input_character {
            // "U+002D HYPHEN-MINUS (-)"
            // "Switch to the comment start dash state."
            Some('-') => self.switch_to(TokenizerState::CommentStartDash),
            // "U+003E GREATER-THAN SIGN (>)"
            // "This is an abrupt-closing-of-empty-comment parse error. Switch to the
            // data state. Emit the current comment token."
            Some('>') => self.abrupt_closing_of_empty_comment(),
            // "Anything else"
            // "Reconsume in the comment state."
            _ => self.reconsume_in(TokenizerState::Comment),
        }
    }

    /// [§ 13.2.5.44 Comment start dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-start-dash-state)
    pub(super) fn handle_comment_start_dash_state(&mut self) {
        match self.current_input_character {
            // "Switch to the comment end state."
            Some('-') => self.switch_to(TokenizerState::CommentEnd),
            Some('>') => self.abrupt_closing_of_empty_comment(),
            // "EOF"
            // "This is an eof-in-comment parse error. Emit the current comment
            // token. Emit an end-of-file token."
            None => self.eof_in(ParseErrorCode::EofInComment),
            // "Anything else"
            // "Append a U+002D HYPHEN-MINUS character (-) to the comment token's
            // data. Reconsume in the comment state."
            Some(_) => {
                self.pending.push_name('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    fn abrupt_closing_of_empty_comment(&mut self) {
        self.parse_error(ParseErrorCode::AbruptClosingOfEmptyComment);
        self.switch_to(TokenizerState::Data);
        self.emit_pending_token();
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    pub(super) fn handle_comment_state(&mut self) {
        match self.current_input_character {
            // "U+003C LESS-THAN SIGN (<)"
            // "Append the current input character to the comment token's data.
            // Switch to the comment less-than sign state."
            Some('<') => {
                self.pending.push_name('<');
                self.switch_to(TokenizerState::CommentLessThanSign);
            }
            // "U+002D HYPHEN-MINUS (-)"
            // "Switch to the comment end dash state."
            Some('-') => self.switch_to(TokenizerState::CommentEndDash),
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.pending.push_name(char::REPLACEMENT_CHARACTER);
            }
            None => self.eof_in(ParseErrorCode::EofInComment),
            Some(c) => self.pending.push_name(c),
        }
    }

    /// [§ 13.2.5.46 Comment less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-state)
    pub(super) fn handle_comment_less_than_sign_state(&mut self) {
        match self.current_input_character {
            // "U+0021 EXCLAMATION MARK (!)"
            // "Append the current input character to the comment token's data.
            // Switch to the comment less-than sign bang state."
            Some('!') => {
                self.pending.push_name('!');
                self.switch_to(TokenizerState::CommentLessThanSignBang);
            }
            // "U+003C LESS-THAN SIGN (<)"
            // "Append the current input character to the comment token's data."
            Some('<') => self.pending.push_name('<'),
            _ => self.reconsume_in(TokenizerState::Comment),
        }
    }

    /// [§ 13.2.5.47 Comment less-than sign bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-state)
    pub(super) fn handle_comment_less_than_sign_bang_state(&mut self) {
        if self.current_input_character == Some('-') {
            self.switch_to(TokenizerState::CommentLessThanSignBangDash);
        } else {
            self.reconsume_in(TokenizerState::Comment);
        }
    }

    /// [§ 13.2.5.48 Comment less-than sign bang dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-state)
    pub(super) fn handle_comment_less_than_sign_bang_dash_state(&mut self) {
        if self.current_input_character == Some('-') {
            self.switch_to(TokenizerState::CommentLessThanSignBangDashDash);
        } else {
            self.reconsume_in(TokenizerState::CommentEndDash);
        }
    }

    /// [§ 13.2.5.49 Comment less-than sign bang dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-less-than-sign-bang-dash-dash-state)
    ///
    /// `<!--` inside a comment is reported but left in the comment text.
    pub(super) fn handle_comment_less_than_sign_bang_dash_dash_state(&mut self) {
        match self.current_input_character {
            // "U+003E GREATER-THAN SIGN (>)"
            // "EOF"
            // "Reconsume in the comment end state."
            Some('>') | None => self.reconsume_in(TokenizerState::CommentEnd),
            // "Anything else"
            // "This is a nested-comment parse error. Reconsume in the comment end state."
            Some(_) => {
                self.parse_error(ParseErrorCode::NestedComment);
                self.reconsume_in(TokenizerState::CommentEnd);
            }
        }
    }

    /// [§ 13.2.5.50 Comment end dash state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-dash-state)
    pub(super) fn handle_comment_end_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.switch_to(TokenizerState::CommentEnd),
            None => self.eof_in(ParseErrorCode::EofInComment),
            Some(_) => {
                self.pending.push_name('-');
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.51 Comment end state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-state)
    pub(super) fn handle_comment_end_state(&mut self) {
        match self.current_input_character {
            // "Switch to the data state. Emit the current comment token."
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            // "Switch to the comment end bang state."
            Some('!') => self.switch_to(TokenizerState::CommentEndBang),
            // "Append a U+002D HYPHEN-MINUS character (-) to the comment token's data."
            Some('-') => self.pending.push_name('-'),
            None => self.eof_in(ParseErrorCode::EofInComment),
            // "Append two U+002D HYPHEN-MINUS characters (-) to the comment token's
            // data. Reconsume in the comment state."
            Some(_) => {
                self.pending.push_name_str("--");
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }

    /// [§ 13.2.5.52 Comment end bang state](https://html.spec.whatwg.org/multipage/parsing.html#comment-end-bang-state)
    pub(super) fn handle_comment_end_bang_state(&mut self) {
        match self.current_input_character {
            // "Append two U+002D HYPHEN-MINUS characters (-) and a U+0021
            // EXCLAMATION MARK character (!) to the comment token's data. Switch to
            // the comment end dash state."
            Some('-') => {
                self.pending.push_name_str("--!");
                self.switch_to(TokenizerState::CommentEndDash);
            }
            // "This is an incorrectly-closed-comment parse error. Switch to the data
            // state. Emit the current comment token."
            Some('>') => {
                self.parse_error(ParseErrorCode::IncorrectlyClosedComment);
                self.switch_to(TokenizerState::Data);
                self.emit_pending_token();
            }
            None => self.eof_in(ParseErrorCode::EofInComment),
            Some(_) => {
                self.pending.push_name_str("--!");
                self.reconsume_in(TokenizerState::Comment);
            }
        }
    }
}
