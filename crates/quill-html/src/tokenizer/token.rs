use core::fmt;

use serde::Serialize;
use serde_json::{Map, Value, json};

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "The output of the tokenization step is a series of zero or more of the following
/// tokens: DOCTYPE, start tag, end tag, comment, character, end-of-file."
///
/// An attribute on a start or end tag token.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// "each of which has a name"
    pub name: String,
    /// "and a value"
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The tokenizer emits tokens of these types to the tree construction stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Token {
    /// "DOCTYPE tokens have a name, a public identifier, a system identifier,
    /// and a force-quirks flag. When a DOCTYPE token is created, its name,
    /// public identifier, and system identifier must be marked as missing
    /// (which is a distinct state from the empty string), and the force-quirks
    /// flag must be set to off (its other state is on)."
    Doctype {
        /// "a name"
        name: Option<String>,
        /// "a public identifier"
        public_identifier: Option<String>,
        /// "a system identifier"
        system_identifier: Option<String>,
        /// "a force-quirks flag"
        force_quirks: bool,
    },

    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes, each of which has a name and a value. When a start
    /// or end tag token is created, its self-closing flag must be unset (its
    /// other state is that it be set), and its attributes list must be empty."
    StartTag {
        /// "a tag name"
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// End tag token. Same structure as a start tag; attributes and the
    /// self-closing flag are kept as parsed even though both are errors.
    EndTag {
        /// "a tag name"
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// "Comment and character tokens have data."
    Comment {
        /// "data"
        data: String,
    },

    /// "Comment and character tokens have data."
    ///
    /// The tokenizer emits exactly one of these per scalar value.
    Character {
        /// "data"
        data: char,
    },

    /// A run of adjacent character tokens merged by
    /// [`CoalescingSink`](super::sink::CoalescingSink). Never produced by the
    /// tokenizer itself.
    Characters {
        /// The merged data.
        data: String,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// Create a character token with the given character.
    #[must_use]
    pub const fn new_character(c: char) -> Self {
        Self::Character { data: c }
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// Returns true for both single and coalesced character tokens.
    #[must_use]
    pub const fn is_character(&self) -> bool {
        matches!(self, Self::Character { .. } | Self::Characters { .. })
    }

    /// Render this token in the html5lib-tests JSON array form.
    ///
    /// Returns `None` for [`Token::EndOfFile`], which html5lib leaves implicit.
    #[must_use]
    pub fn to_html5lib_json(&self) -> Option<Value> {
        let value = match self {
            Self::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            } => json!([
                "DOCTYPE",
                name,
                public_identifier,
                system_identifier,
                !force_quirks
            ]),
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                let mut attrs = Map::new();
                for attr in attributes {
                    let _ = attrs.insert(attr.name.clone(), Value::String(attr.value.clone()));
                }
                if *self_closing {
                    json!(["StartTag", name, attrs, true])
                } else {
                    json!(["StartTag", name, attrs])
                }
            }
            Self::EndTag { name, .. } => json!(["EndTag", name]),
            Self::Comment { data } => json!(["Comment", data]),
            Self::Character { data } => json!(["Character", data.to_string()]),
            Self::Characters { data } => json!(["Character", data]),
            Self::EndOfFile => return None,
        };
        Some(value)
    }
}

/// Render a token stream the way html5lib-tests writes its `output` arrays:
/// adjacent character tokens are merged and the end-of-file token is dropped.
#[must_use]
pub fn to_html5lib_json(tokens: &[Token]) -> Value {
    let mut output: Vec<Value> = Vec::new();
    let mut text = String::new();

    for token in tokens {
        match token {
            Token::Character { data } => text.push(*data),
            Token::Characters { data } => text.push_str(data),
            other => {
                if !text.is_empty() {
                    output.push(json!(["Character", core::mem::take(&mut text)]));
                }
                if let Some(value) = other.to_html5lib_json() {
                    output.push(value);
                }
            }
        }
    }
    if !text.is_empty() {
        output.push(json!(["Character", text]));
    }

    Value::Array(output)
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            } => {
                write!(f, "DOCTYPE")?;
                if let Some(n) = name {
                    write!(f, " {n}")?;
                }
                if let Some(pub_id) = public_identifier {
                    write!(f, " PUBLIC \"{pub_id}\"")?;
                }
                if let Some(sys_id) = system_identifier {
                    write!(f, " SYSTEM \"{sys_id}\"")?;
                }
                if *force_quirks {
                    write!(f, " (force-quirks)")?;
                }
                Ok(())
            }
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name, .. } => {
                write!(f, "</{name}>")
            }
            Self::Comment { data } => {
                write!(f, "<!--{data}-->")
            }
            Self::Character { data } => {
                // Show whitespace characters explicitly
                match data {
                    '\n' => write!(f, "Character(\\n)"),
                    '\t' => write!(f, "Character(\\t)"),
                    ' ' => write!(f, "Character(SPACE)"),
                    c => write!(f, "Character({c})"),
                }
            }
            Self::Characters { data } => write!(f, "Characters({data:?})"),
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}
