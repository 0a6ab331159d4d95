//! Script data states.
//!
//! [§ 13.2.5.4 Script data state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-state)
//! through [§ 13.2.5.31](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-end-state).
//!
//! Script bodies may contain `<!--` ... `-->` markers and, inside those, a
//! nested `<script>`. The escaped and double-escaped states track that so a
//! `</script>` inside a double-escaped section does not end the element.

use quill_common::CharacterSource;

use super::core::{HTMLTokenizer, TokenizerState};
use super::errors::{ErrorSink, ParseErrorCode};
use super::sink::TokenSink;

impl<I, S, E> HTMLTokenizer<I, S, E>
where
    I: CharacterSource,
    S: TokenSink,
    E: ErrorSink,
{
    /// [§ 13.2.5.4 Script data state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-state)
    pub(super) fn handle_script_data_state(&mut self) {
        // "Consume the next input character:"
        match self.current_input_character {
            // "U+003C LESS-THAN SIGN (<)"
            // "Switch to the script data less-than sign state."
            Some('<') => self.switch_to(TokenizerState::ScriptDataLessThanSign),
            _ => self.handle_text_character(),
        }
    }

    /// [§ 13.2.5.15 Script data less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-less-than-sign-state)
    pub(super) fn handle_script_data_less_than_sign_state(&mut self) {
        match self.current_input_character {
            // "U+002F SOLIDUS (/)"
            // "Set the temporary buffer to the empty string. Switch to the script
            // data end tag open state."
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(TokenizerState::ScriptDataEndTagOpen);
            }
            // "U+0021 EXCLAMATION MARK (!)"
            // "Switch to the script data escape start state. Emit a U+003C
            // LESS-THAN SIGN character token and a U+0021 EXCLAMATION MARK
            // character token."
            Some('!') => {
                self.switch_to(TokenizerState::ScriptDataEscapeStart);
                self.emit_character_token('<');
                self.emit_character_token('!');
            }
            // "Anything else"
            // "Emit a U+003C LESS-THAN SIGN character token. Reconsume in the
            // script data state."
            _ => {
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::ScriptData);
            }
        }
    }

    /// [§ 13.2.5.18 Script data escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-state)
    pub(super) fn handle_script_data_escape_start_state(&mut self) {
        if self.current_input_character == Some('-') {
            // "Switch to the script data escape start dash state. Emit a U+002D
            // HYPHEN-MINUS character token."
            self.switch_to(TokenizerState::ScriptDataEscapeStartDash);
            self.emit_character_token('-');
        } else {
            // "Reconsume in the script data state."
            self.reconsume_in(TokenizerState::ScriptData);
        }
    }

    /// [§ 13.2.5.19 Script data escape start dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escape-start-dash-state)
    pub(super) fn handle_script_data_escape_start_dash_state(&mut self) {
        if self.current_input_character == Some('-') {
            // "Switch to the script data escaped dash dash state. Emit a U+002D
            // HYPHEN-MINUS character token."
            self.switch_to(TokenizerState::ScriptDataEscapedDashDash);
            self.emit_character_token('-');
        } else {
            self.reconsume_in(TokenizerState::ScriptData);
        }
    }

    /// [§ 13.2.5.20 Script data escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-state)
    pub(super) fn handle_script_data_escaped_state(&mut self) {
        match self.current_input_character {
            // "U+002D HYPHEN-MINUS (-)"
            // "Switch to the script data escaped dash state. Emit a U+002D
            // HYPHEN-MINUS character token."
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataEscapedDash);
                self.emit_character_token('-');
            }
            // "U+003C LESS-THAN SIGN (<)"
            // "Switch to the script data escaped less-than sign state."
            Some('<') => self.switch_to(TokenizerState::ScriptDataEscapedLessThanSign),
            // "U+0000 NULL"
            // "This is an unexpected-null-character parse error. Emit a U+FFFD
            // REPLACEMENT CHARACTER character token."
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.emit_character_token(char::REPLACEMENT_CHARACTER);
            }
            // "EOF"
            // "This is an eof-in-script-html-comment-like-text parse error. Emit
            // an end-of-file token."
            None => self.eof_in(ParseErrorCode::EofInScriptHtmlCommentLikeText),
            Some(c) => self.emit_character_token(c),
        }
    }

    /// [§ 13.2.5.21 Script data escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-state)
    pub(super) fn handle_script_data_escaped_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataEscapedDashDash);
                self.emit_character_token('-');
            }
            Some('<') => self.switch_to(TokenizerState::ScriptDataEscapedLessThanSign),
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.switch_to(TokenizerState::ScriptDataEscaped);
                self.emit_character_token(char::REPLACEMENT_CHARACTER);
            }
            None => self.eof_in(ParseErrorCode::EofInScriptHtmlCommentLikeText),
            // "Anything else"
            // "Switch to the script data escaped state. Emit the current input
            // character as a character token."
            Some(c) => {
                self.switch_to(TokenizerState::ScriptDataEscaped);
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.22 Script data escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-dash-dash-state)
    pub(super) fn handle_script_data_escaped_dash_dash_state(&mut self) {
        match self.current_input_character {
            // "Emit a U+002D HYPHEN-MINUS character token."
            Some('-') => self.emit_character_token('-'),
            Some('<') => self.switch_to(TokenizerState::ScriptDataEscapedLessThanSign),
            // "U+003E GREATER-THAN SIGN (>)"
            // "Switch to the script data state. Emit a U+003E GREATER-THAN SIGN
            // character token."
            Some('>') => {
                self.switch_to(TokenizerState::ScriptData);
                self.emit_character_token('>');
            }
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.switch_to(TokenizerState::ScriptDataEscaped);
                self.emit_character_token(char::REPLACEMENT_CHARACTER);
            }
            None => self.eof_in(ParseErrorCode::EofInScriptHtmlCommentLikeText),
            Some(c) => {
                self.switch_to(TokenizerState::ScriptDataEscaped);
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.23 Script data escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-escaped-less-than-sign-state)
    pub(super) fn handle_script_data_escaped_less_than_sign_state(&mut self) {
        match self.current_input_character {
            // "U+002F SOLIDUS (/)"
            // "Set the temporary buffer to the empty string. Switch to the script
            // data escaped end tag open state."
            Some('/') => {
                self.temporary_buffer.clear();
                self.switch_to(TokenizerState::ScriptDataEscapedEndTagOpen);
            }
            // "ASCII alpha"
            // "Set the temporary buffer to the empty string. Emit a U+003C
            // LESS-THAN SIGN character token. Reconsume in the script data double
            // escape start state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.temporary_buffer.clear();
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::ScriptDataDoubleEscapeStart);
            }
            _ => {
                self.emit_character_token('<');
                self.reconsume_in(TokenizerState::ScriptDataEscaped);
            }
        }
    }

    /// [§ 13.2.5.26 Script data double escape start state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-start-state)
    /// [§ 13.2.5.31 Script data double escape end state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escape-end-state)
    ///
    /// Both states collect a word into the temporary buffer and, at the first
    /// delimiter, go to `on_script` if the word was "script" and to `otherwise`
    /// if not.
    pub(super) fn handle_script_data_double_escape_boundary(
        &mut self,
        on_script: TokenizerState,
        otherwise: TokenizerState,
    ) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION (tab)"
            // "U+000A LINE FEED (LF)"
            // "U+000C FORM FEED (FF)"
            // "U+0020 SPACE"
            // "U+002F SOLIDUS (/)"
            // "U+003E GREATER-THAN SIGN (>)"
            // "If the temporary buffer is the string "script", then switch to the
            // ... state. Otherwise, switch to the ... state. Emit the current input
            // character as a character token."
            Some(c @ ('\t' | '\n' | '\x0C' | ' ' | '/' | '>')) => {
                if self.temporary_buffer == "script" {
                    self.switch_to(on_script);
                } else {
                    self.switch_to(otherwise);
                }
                self.emit_character_token(c);
            }
            // "ASCII upper alpha"
            // "Append the lowercase version of the current input character to the
            // temporary buffer. Emit the current input character as a character token."
            Some(c) if c.is_ascii_alphabetic() => {
                self.temporary_buffer.push(c.to_ascii_lowercase());
                self.emit_character_token(c);
            }
            // "Anything else"
            // "Reconsume in the ... state."
            _ => self.reconsume_in(otherwise),
        }
    }

    /// [§ 13.2.5.27 Script data double escaped state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-state)
    pub(super) fn handle_script_data_double_escaped_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedDash);
                self.emit_character_token('-');
            }
            // "U+003C LESS-THAN SIGN (<)"
            // "Switch to the script data double escaped less-than sign state. Emit
            // a U+003C LESS-THAN SIGN character token."
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
                self.emit_character_token('<');
            }
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.emit_character_token(char::REPLACEMENT_CHARACTER);
            }
            None => self.eof_in(ParseErrorCode::EofInScriptHtmlCommentLikeText),
            Some(c) => self.emit_character_token(c),
        }
    }

    /// [§ 13.2.5.28 Script data double escaped dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-state)
    pub(super) fn handle_script_data_double_escaped_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedDashDash);
                self.emit_character_token('-');
            }
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
                self.emit_character_token('<');
            }
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                self.emit_character_token(char::REPLACEMENT_CHARACTER);
            }
            None => self.eof_in(ParseErrorCode::EofInScriptHtmlCommentLikeText),
            Some(c) => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.29 Script data double escaped dash dash state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-dash-dash-state)
    pub(super) fn handle_script_data_double_escaped_dash_dash_state(&mut self) {
        match self.current_input_character {
            Some('-') => self.emit_character_token('-'),
            Some('<') => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscapedLessThanSign);
                self.emit_character_token('<');
            }
            Some('>') => {
                self.switch_to(TokenizerState::ScriptData);
                self.emit_character_token('>');
            }
            Some('\0') => {
                self.parse_error(ParseErrorCode::UnexpectedNullCharacter);
                self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                self.emit_character_token(char::REPLACEMENT_CHARACTER);
            }
            None => self.eof_in(ParseErrorCode::EofInScriptHtmlCommentLikeText),
            Some(c) => {
                self.switch_to(TokenizerState::ScriptDataDoubleEscaped);
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.30 Script data double escaped less-than sign state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-double-escaped-less-than-sign-state)
    pub(super) fn handle_script_data_double_escaped_less_than_sign_state(&mut self) {
        if self.current_input_character == Some('/') {
            // "Set the temporary buffer to the empty string. Switch to the script
            // data double escape end state. Emit a U+002F SOLIDUS character token."
            self.temporary_buffer.clear();
            self.switch_to(TokenizerState::ScriptDataDoubleEscapeEnd);
            self.emit_character_token('/');
        } else {
            self.reconsume_in(TokenizerState::ScriptDataDoubleEscaped);
        }
    }
}
