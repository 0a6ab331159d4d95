//! Scratch state for the token currently being assembled.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! The states talk about "the current tag token", "the current comment token"
//! and "the current DOCTYPE token". At most one of those is live at a time, so
//! they share one set of buffers here and only become a [`Token`] when emitted.

use quill_common::Position;

use super::token::{Attribute, Token};

/// Which kind of token is being assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    /// A start tag.
    StartTag,
    /// An end tag.
    EndTag,
    /// A comment.
    Comment,
    /// A DOCTYPE.
    Doctype,
}

/// Outcome of committing the attribute under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum AttributeCommit {
    /// No attribute was being built.
    Nothing,
    /// The attribute was appended to the tag.
    Added,
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "if there is already an attribute on the token with the exact same
    /// name, then this is a duplicate-attribute parse error and the new
    /// attribute must be removed from the token."
    Duplicate {
        /// Name of the discarded attribute.
        name: String,
        /// Where the discarded attribute's name started.
        position: Position,
    },
}

/// The token under construction.
#[derive(Debug, Default)]
pub struct PendingToken {
    kind: Option<PendingKind>,
    /// Tag name, DOCTYPE name, or comment data.
    name: String,
    /// Current attribute name, or DOCTYPE public identifier.
    first: String,
    /// Current attribute value, or DOCTYPE system identifier.
    second: String,
    /// Tags: an attribute is being built. DOCTYPE: public identifier is not missing.
    first_present: bool,
    /// DOCTYPE: system identifier is not missing.
    second_present: bool,
    force_quirks: bool,
    self_closing: bool,
    attributes: Vec<Attribute>,
    attribute_position: Position,
}

impl PendingToken {
    /// The kind of token being built, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<PendingKind> {
        self.kind
    }

    /// True while a token is being built.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.kind.is_some()
    }

    /// Start a fresh token of the given kind, discarding whatever was here.
    pub fn reset(&mut self, kind: PendingKind) {
        *self = Self {
            kind: Some(kind),
            ..Self::default()
        };
    }

    /// Drop the token under construction without emitting it.
    pub fn discard(&mut self) {
        *self = Self::default();
    }

    /// Append to the tag name, DOCTYPE name or comment data.
    pub fn push_name(&mut self, c: char) {
        self.name.push(c);
    }

    /// Append a string to the comment data.
    pub fn push_name_str(&mut self, s: &str) {
        self.name.push_str(s);
    }

    /// Name accumulated so far (tag name, DOCTYPE name or comment data).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// "Set the self-closing flag of the current tag token."
    pub const fn set_self_closing(&mut self) {
        self.self_closing = true;
    }

    /// "Set the current DOCTYPE token's force-quirks flag to on."
    pub const fn set_force_quirks(&mut self) {
        self.force_quirks = true;
    }

    /// "Start a new attribute in the current tag token."
    ///
    /// Any attribute still under construction is committed first.
    pub fn start_attribute(&mut self, position: Position) -> AttributeCommit {
        let commit = self.commit_attribute();
        self.first.clear();
        self.second.clear();
        self.first_present = true;
        self.attribute_position = position;
        commit
    }

    /// "Append the current input character to the current attribute's name."
    pub fn push_attribute_name(&mut self, c: char) {
        self.first.push(c);
    }

    /// "Append the current input character to the current attribute's value."
    pub fn push_attribute_value(&mut self, c: char) {
        self.second.push(c);
    }

    /// Move the attribute under construction into the tag's list, unless an
    /// attribute with the same name is already there.
    pub fn commit_attribute(&mut self) -> AttributeCommit {
        if !self.first_present
            || !matches!(self.kind, Some(PendingKind::StartTag | PendingKind::EndTag))
        {
            return AttributeCommit::Nothing;
        }
        self.first_present = false;
        let name = core::mem::take(&mut self.first);
        let value = core::mem::take(&mut self.second);

        if self.attributes.iter().any(|attr| attr.name == name) {
            return AttributeCommit::Duplicate {
                name,
                position: self.attribute_position,
            };
        }
        self.attributes.push(Attribute::new(name, value));
        AttributeCommit::Added
    }

    /// Mark the public identifier present (set to the empty string).
    pub fn start_public_identifier(&mut self) {
        self.first.clear();
        self.first_present = true;
    }

    /// Append to the DOCTYPE public identifier.
    pub fn push_public_identifier(&mut self, c: char) {
        self.first.push(c);
    }

    /// Mark the system identifier present (set to the empty string).
    pub fn start_system_identifier(&mut self) {
        self.second.clear();
        self.second_present = true;
    }

    /// Append to the DOCTYPE system identifier.
    pub fn push_system_identifier(&mut self, c: char) {
        self.second.push(c);
    }

    /// Turn the buffers into a concrete token and reset to empty.
    ///
    /// Callers commit the trailing attribute first so duplicate errors can be
    /// reported.
    pub fn finish(&mut self) -> Option<Token> {
        let pending = core::mem::take(self);
        let token = match pending.kind? {
            PendingKind::StartTag => Token::StartTag {
                name: pending.name,
                self_closing: pending.self_closing,
                attributes: pending.attributes,
            },
            PendingKind::EndTag => Token::EndTag {
                name: pending.name,
                self_closing: pending.self_closing,
                attributes: pending.attributes,
            },
            PendingKind::Comment => Token::Comment { data: pending.name },
            PendingKind::Doctype => Token::Doctype {
                name: (!pending.name.is_empty()).then_some(pending.name),
                public_identifier: (pending.first_present || !pending.first.is_empty())
                    .then_some(pending.first),
                system_identifier: (pending.second_present || !pending.second.is_empty())
                    .then_some(pending.second),
                force_quirks: pending.force_quirks,
            },
        };
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attribute_wins() {
        let mut pending = PendingToken::default();
        pending.reset(PendingKind::StartTag);
        pending.push_name('a');

        assert_eq!(pending.start_attribute(Position::new(1, 4)), AttributeCommit::Nothing);
        pending.push_attribute_name('x');
        pending.push_attribute_value('1');
        assert_eq!(pending.start_attribute(Position::new(1, 10)), AttributeCommit::Added);
        pending.push_attribute_name('x');
        pending.push_attribute_value('2');
        assert_eq!(
            pending.commit_attribute(),
            AttributeCommit::Duplicate {
                name: "x".to_string(),
                position: Position::new(1, 10)
            }
        );

        let token = pending.finish();
        assert_eq!(
            token,
            Some(Token::StartTag {
                name: "a".to_string(),
                self_closing: false,
                attributes: vec![Attribute::new("x".to_string(), "1".to_string())],
            })
        );
        assert!(!pending.is_live());
    }

    #[test]
    fn test_doctype_identifiers_missing_versus_empty() {
        let mut pending = PendingToken::default();
        pending.reset(PendingKind::Doctype);
        pending.push_name('h');
        pending.start_public_identifier();

        match pending.finish() {
            Some(Token::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            }) => {
                assert_eq!(name.as_deref(), Some("h"));
                assert_eq!(public_identifier.as_deref(), Some(""));
                assert_eq!(system_identifier, None);
                assert!(!force_quirks);
            }
            other => panic!("Expected DOCTYPE token, got {other:?}"),
        }
    }

    #[test]
    fn test_finish_without_token() {
        let mut pending = PendingToken::default();
        assert_eq!(pending.finish(), None);
    }
}
