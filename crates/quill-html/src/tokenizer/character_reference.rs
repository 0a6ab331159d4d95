//! Character reference states for the HTML tokenizer.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//! through [§ 13.2.5.80](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state).
//!
//! Every state here finishes by going back to the saved return state. Reaching
//! one of them without a return state is a [`TokenizerError`].

use quill_common::CharacterSource;

use super::core::{HTMLTokenizer, TokenizerState};
use super::errors::{ErrorSink, ParseErrorCode, TokenizerError};
use super::named_character_references::NamedReferenceMatcher;
use super::sink::TokenSink;

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
///
/// "If the number is one of the numbers in the first column of the following
/// table, then find the row with that number in the first column, and set the
/// character reference code to the number in the second column."
const C1_REPLACEMENTS: [(u32, u32); 27] = [
    (0x80, 0x20AC), // EURO SIGN (€)
    (0x82, 0x201A), // SINGLE LOW-9 QUOTATION MARK (‚)
    (0x83, 0x0192), // LATIN SMALL LETTER F WITH HOOK (ƒ)
    (0x84, 0x201E), // DOUBLE LOW-9 QUOTATION MARK („)
    (0x85, 0x2026), // HORIZONTAL ELLIPSIS (…)
    (0x86, 0x2020), // DAGGER (†)
    (0x87, 0x2021), // DOUBLE DAGGER (‡)
    (0x88, 0x02C6), // MODIFIER LETTER CIRCUMFLEX ACCENT (ˆ)
    (0x89, 0x2030), // PER MILLE SIGN (‰)
    (0x8A, 0x0160), // LATIN CAPITAL LETTER S WITH CARON (Š)
    (0x8B, 0x2039), // SINGLE LEFT-POINTING ANGLE QUOTATION MARK (‹)
    (0x8C, 0x0152), // LATIN CAPITAL LIGATURE OE (Œ)
    (0x8E, 0x017D), // LATIN CAPITAL LETTER Z WITH CARON (Ž)
    (0x91, 0x2018), // LEFT SINGLE QUOTATION MARK (‘)
    (0x92, 0x2019), // RIGHT SINGLE QUOTATION MARK (’)
    (0x93, 0x201C), // LEFT DOUBLE QUOTATION MARK (“)
    (0x94, 0x201D), // RIGHT DOUBLE QUOTATION MARK (”)
    (0x95, 0x2022), // BULLET (•)
    (0x96, 0x2013), // EN DASH (–)
    (0x97, 0x2014), // EM DASH (—)
    (0x98, 0x02DC), // SMALL TILDE (˜)
    (0x99, 0x2122), // TRADE MARK SIGN (™)
    (0x9A, 0x0161), // LATIN SMALL LETTER S WITH CARON (š)
    (0x9B, 0x203A), // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK (›)
    (0x9C, 0x0153), // LATIN SMALL LIGATURE OE (œ)
    (0x9E, 0x017E), // LATIN SMALL LETTER Z WITH CARON (ž)
    (0x9F, 0x0178), // LATIN CAPITAL LETTER Y WITH DIAERESIS (Ÿ)
];

/// [Infra: noncharacter](https://infra.spec.whatwg.org/#noncharacter)
const fn is_noncharacter(code: u32) -> bool {
    matches!(code, 0xFDD0..=0xFDEF) || ((code & 0xFFFE) == 0xFFFE && code <= 0x10_FFFF)
}

/// [Infra: control](https://infra.spec.whatwg.org/#control) that is not
/// [ASCII whitespace](https://infra.spec.whatwg.org/#ascii-whitespace).
const fn is_non_whitespace_control(code: u32) -> bool {
    let control = matches!(code, 0x00..=0x1F | 0x7F..=0x9F);
    control && !matches!(code, 0x09 | 0x0A | 0x0C | 0x0D | 0x20)
}

/// Apply the numeric character reference end state's checks to `code`.
///
/// Returns the scalar to substitute and the parse error to report, if any.
#[must_use]
pub fn resolve_numeric_reference(code: u32, overflowed: bool) -> (char, Option<ParseErrorCode>) {
    // "If the number is 0x00, then this is a null-character-reference parse
    // error. Set the character reference code to 0xFFFD."
    if code == 0 {
        return (
            char::REPLACEMENT_CHARACTER,
            Some(ParseErrorCode::NullCharacterReference),
        );
    }
    // "If the number is greater than 0x10FFFF, then this is a
    // character-reference-outside-unicode-range parse error."
    if overflowed || code > 0x10_FFFF {
        return (
            char::REPLACEMENT_CHARACTER,
            Some(ParseErrorCode::CharacterReferenceOutsideUnicodeRange),
        );
    }
    // "If the number is a surrogate, then this is a surrogate-character-reference
    // parse error."
    let Some(scalar) = char::from_u32(code) else {
        return (
            char::REPLACEMENT_CHARACTER,
            Some(ParseErrorCode::SurrogateCharacterReference),
        );
    };
    // "If the number is a noncharacter, then this is a
    // noncharacter-character-reference parse error."
    if is_noncharacter(code) {
        return (scalar, Some(ParseErrorCode::NoncharacterCharacterReference));
    }
    // "If the number is 0x0D, or a control that's not ASCII whitespace, then this
    // is a control-character-reference parse error."
    if code == 0x0D || is_non_whitespace_control(code) {
        let remapped = C1_REPLACEMENTS
            .iter()
            .find(|&&(from, _)| from == code)
            .and_then(|&(_, to)| char::from_u32(to))
            .unwrap_or(scalar);
        return (remapped, Some(ParseErrorCode::ControlCharacterReference));
    }
    (scalar, None)
}

impl<I, S, E> HTMLTokenizer<I, S, E>
where
    I: CharacterSource,
    S: TokenSink,
    E: ErrorSink,
{
    /// The saved return state, or a [`TokenizerError`] if there is none.
    fn saved_return_state(&self) -> Result<TokenizerState, TokenizerError> {
        self.return_state
            .ok_or(TokenizerError::MissingReturnState { state: self.state })
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    ///
    /// "consumed as part of an attribute"
    const fn is_consumed_as_part_of_attribute(&self) -> bool {
        matches!(
            self.return_state,
            Some(
                TokenizerState::AttributeValueDoubleQuoted
                    | TokenizerState::AttributeValueSingleQuoted
                    | TokenizerState::AttributeValueUnquoted
            )
        )
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    ///
    /// "Flush code points consumed as a character reference": "If the character
    /// reference was consumed as part of an attribute, then append each character
    /// to the current attribute's value. Otherwise, emit each character as a
    /// character token."
    fn flush_code_points_consumed_as_character_reference(&mut self) {
        let buffer = core::mem::take(&mut self.temporary_buffer);
        if self.is_consumed_as_part_of_attribute() {
            for c in buffer.chars() {
                self.pending.push_attribute_value(c);
            }
        } else {
            for c in buffer.chars() {
                self.emit_character_token(c);
            }
        }
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    pub(super) fn handle_character_reference_state(&mut self) -> Result<(), TokenizerError> {
        let return_state = self.saved_return_state()?;
        // "Set the temporary buffer to the empty string. Append a U+0026 AMPERSAND
        // (&) character to the temporary buffer."
        self.temporary_buffer.clear();
        self.temporary_buffer.push('&');

        match self.current_input_character {
            // "ASCII alphanumeric"
            // "Reconsume in the named character reference state."
            Some(c) if c.is_ascii_alphanumeric() => {
                self.reconsume_in(TokenizerState::NamedCharacterReference);
            }
            // "U+0023 NUMBER SIGN (#)"
            // "Append the current input character to the temporary buffer. Switch to
            // the numeric character reference state."
            Some('#') => {
                self.temporary_buffer.push('#');
                self.switch_to(TokenizerState::NumericCharacterReference);
            }
            // "Anything else"
            // "Flush code points consumed as a character reference. Reconsume in the
            // return state."
            _ => {
                self.flush_code_points_consumed_as_character_reference();
                self.reconsume_in(return_state);
            }
        }
        Ok(())
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    ///
    /// "Consume the maximum number of characters possible, where the consumed
    /// characters are one of the identifiers in the named character references
    /// table. Append each character to the temporary buffer when it's consumed."
    ///
    /// The current input character is the first character of the candidate
    /// name. The rest is examined with lookahead and only consumed once the
    /// longest match is known.
    pub(super) fn handle_named_character_reference_state(&mut self) -> Result<(), TokenizerError> {
        let return_state = self.saved_return_state()?;

        let mut matcher = NamedReferenceMatcher::new();
        let mut candidate = self.current_input_character;
        let mut offset = 0;
        while let Some(c) = candidate {
            if !matcher.feed(c) {
                break;
            }
            candidate = self.input.lookahead(offset);
            offset += 1;
        }

        let Some(found) = matcher.longest_match() else {
            // "Otherwise: Flush code points consumed as a character reference.
            // Switch to the ambiguous ampersand state."
            //
            // Nothing beyond the `&` was consumed, so the current character is
            // handed to the ambiguous ampersand state.
            self.flush_code_points_consumed_as_character_reference();
            self.reconsume_in(TokenizerState::AmbiguousAmpersand);
            return Ok(());
        };

        // Consume the matched name: the current character is its first character.
        if let Some(first) = self.current_input_character {
            self.temporary_buffer.push(first);
        }
        for i in 0..found.length.saturating_sub(1) {
            if let Some(c) = self.input.lookahead(i) {
                self.temporary_buffer.push(c);
            }
        }
        self.input.advance(found.length.saturating_sub(1));

        // "If the character reference was consumed as part of an attribute, and
        // the last character matched is not a U+003B SEMICOLON character (;), and
        // the next input character is either a U+003D EQUALS SIGN character (=) or
        // an ASCII alphanumeric, then, for historical reasons, flush code points
        // consumed as a character reference and switch to the return state."
        let next = self.input.lookahead(0);
        if self.is_consumed_as_part_of_attribute()
            && !found.terminated
            && next.is_some_and(|c| c == '=' || c.is_ascii_alphanumeric())
        {
            self.flush_code_points_consumed_as_character_reference();
            self.switch_to(return_state);
            return Ok(());
        }

        // "If the last character matched is not a U+003B SEMICOLON character (;),
        // then this is a missing-semicolon-after-character-reference parse error."
        if !found.terminated {
            self.parse_error(ParseErrorCode::MissingSemicolonAfterCharacterReference);
        }

        // "Set the temporary buffer to the empty string. Append one or two
        // characters corresponding to the character reference name (as given by
        // the second column of the named character references table) to the
        // temporary buffer. Flush code points consumed as a character reference.
        // Switch to the return state."
        self.temporary_buffer.clear();
        self.temporary_buffer.push_str(found.replacement);
        self.flush_code_points_consumed_as_character_reference();
        self.switch_to(return_state);
        Ok(())
    }

    /// [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
    pub(super) fn handle_ambiguous_ampersand_state(&mut self) -> Result<(), TokenizerError> {
        let return_state = self.saved_return_state()?;
        match self.current_input_character {
            // "ASCII alphanumeric"
            // "If the character reference was consumed as part of an attribute, then
            // append the current input character to the current attribute's value.
            // Otherwise, emit the current input character as a character token."
            Some(c) if c.is_ascii_alphanumeric() => {
                if self.is_consumed_as_part_of_attribute() {
                    self.pending.push_attribute_value(c);
                } else {
                    self.emit_character_token(c);
                }
            }
            // "U+003B SEMICOLON (;)"
            // "This is an unknown-named-character-reference parse error. Reconsume in
            // the return state."
            Some(';') => {
                self.parse_error(ParseErrorCode::UnknownNamedCharacterReference);
                self.reconsume_in(return_state);
            }
            // "Anything else"
            // "Reconsume in the return state."
            _ => self.reconsume_in(return_state),
        }
        Ok(())
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    pub(super) fn handle_numeric_character_reference_state(&mut self) {
        // "Set the character reference code to zero (0)."
        self.character_reference_code = 0;
        self.character_reference_overflow = false;
        self.character_reference_semicolon = None;

        match self.current_input_character {
            // "U+0078 LATIN SMALL LETTER X"
            // "U+0058 LATIN CAPITAL LETTER X"
            // "Append the current input character to the temporary buffer. Switch to
            // the hexadecimal character reference start state."
            Some(c @ ('x' | 'X')) => {
                self.temporary_buffer.push(c);
                self.switch_to(TokenizerState::HexadecimalCharacterReferenceStart);
            }
            // "Anything else"
            // "Reconsume in the decimal character reference start state."
            _ => self.reconsume_in(TokenizerState::DecimalCharacterReferenceStart),
        }
    }

    /// [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
    /// [§ 13.2.5.77 Decimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state)
    pub(super) fn handle_numeric_character_reference_start_state(
        &mut self,
        radix: u32,
    ) -> Result<(), TokenizerError> {
        let return_state = self.saved_return_state()?;
        if self
            .current_input_character
            .is_some_and(|c| c.is_digit(radix))
        {
            // "Reconsume in the hexadecimal character reference state."
            let digits_state = if radix == 16 {
                TokenizerState::HexadecimalCharacterReference
            } else {
                TokenizerState::DecimalCharacterReference
            };
            self.reconsume_in(digits_state);
        } else {
            // "This is an absence-of-digits-in-numeric-character-reference parse
            // error. Flush code points consumed as a character reference. Reconsume
            // in the return state."
            self.parse_error(ParseErrorCode::AbsenceOfDigitsInNumericCharacterReference);
            self.flush_code_points_consumed_as_character_reference();
            self.reconsume_in(return_state);
        }
        Ok(())
    }

    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    pub(super) fn handle_numeric_character_reference_digits_state(&mut self, radix: u32) {
        match self.current_input_character {
            // "ASCII digit" / "ASCII upper hex digit" / "ASCII lower hex digit"
            // "Multiply the character reference code by 16. Add a numeric version of
            // the current input character to the character reference code."
            Some(c) if c.is_digit(radix) => {
                let digit = c.to_digit(radix).unwrap_or_default();
                match self
                    .character_reference_code
                    .checked_mul(radix)
                    .and_then(|code| code.checked_add(digit))
                {
                    Some(code) => self.character_reference_code = code,
                    None => self.character_reference_overflow = true,
                }
            }
            // "U+003B SEMICOLON"
            // "Switch to the numeric character reference end state."
            Some(';') => {
                self.character_reference_semicolon = Some(self.input.position());
                self.switch_to(TokenizerState::NumericCharacterReferenceEnd);
            }
            // "Anything else"
            // "This is a missing-semicolon-after-character-reference parse error.
            // Reconsume in the numeric character reference end state."
            _ => {
                self.parse_error(ParseErrorCode::MissingSemicolonAfterCharacterReference);
                self.reconsume_in(TokenizerState::NumericCharacterReferenceEnd);
            }
        }
    }

    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    ///
    /// The end state consumes nothing, but the loop has already fetched the
    /// character after the reference; it is handed back for the return state.
    /// Errors for a `;`-terminated reference are reported at the `;`.
    pub(super) fn handle_numeric_character_reference_end_state(
        &mut self,
    ) -> Result<(), TokenizerError> {
        let return_state = self.saved_return_state()?;
        let (scalar, error) = resolve_numeric_reference(
            self.character_reference_code,
            self.character_reference_overflow,
        );
        if let Some(code) = error {
            match self.character_reference_semicolon.take() {
                Some(position) => self.parse_error_at(position, code, None),
                None => self.parse_error(code),
            }
        }

        // "Set the temporary buffer to the empty string. Append a code point equal
        // to the character reference code to the temporary buffer. Flush code
        // points consumed as a character reference. Switch to the return state."
        self.temporary_buffer.clear();
        self.temporary_buffer.push(scalar);
        self.flush_code_points_consumed_as_character_reference();
        self.reconsume_in(return_state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c1_table_is_sorted_and_in_range() {
        assert!(C1_REPLACEMENTS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(C1_REPLACEMENTS.iter().all(|&(from, _)| (0x80..=0x9F).contains(&from)));
    }

    #[test]
    fn test_noncharacters() {
        assert!(is_noncharacter(0xFDD0));
        assert!(is_noncharacter(0xFFFE));
        assert!(is_noncharacter(0x10_FFFF));
        assert!(!is_noncharacter(0xFFFD));
    }

    #[test]
    fn test_unmapped_c1_control_is_kept() {
        assert_eq!(
            resolve_numeric_reference(0x81, false),
            ('\u{81}', Some(ParseErrorCode::ControlCharacterReference))
        );
    }

    #[test]
    fn test_whitespace_controls_are_not_errors() {
        assert_eq!(resolve_numeric_reference(0x09, false), ('\t', None));
        assert_eq!(resolve_numeric_reference(0x0A, false), ('\n', None));
    }
}
