//! The tokenizer's downstream collaborator.
//!
//! [§ 13.2.6 Tree construction](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)
//!
//! "The input to the tree construction stage is a sequence of tokens from the
//! tokenization stage." Tree construction talks back in two ways: it may
//! switch the tokenizer into another state (RCDATA for `<title>`, and so on),
//! and the markup declaration open state asks it about the adjusted current
//! node to decide whether `<![CDATA[` is allowed.

use serde::Serialize;
use strum_macros::Display;

use super::core::TokenizerState;
use super::token::Token;

/// What the sink wants the tokenizer to do after receiving a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SinkResult {
    /// Keep tokenizing in the current state.
    Continue,
    /// Switch to the given state before the next input character is consumed.
    SwitchTo(TokenizerState),
}

/// [§ 2.1.3 Namespaces](https://html.spec.whatwg.org/multipage/infrastructure.html#namespaces)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Namespace {
    /// "The HTML namespace is "http://www.w3.org/1999/xhtml"."
    Html,
    /// "The MathML namespace is "http://www.w3.org/1998/Math/MathML"."
    MathMl,
    /// "The SVG namespace is "http://www.w3.org/2000/svg"."
    Svg,
}

/// [§ 13.2.4.2 The stack of open elements](https://html.spec.whatwg.org/multipage/parsing.html#adjusted-current-node)
///
/// The part of the adjusted current node the tokenizer cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustedNode {
    /// Local name of the element.
    pub name: String,
    /// Namespace of the element.
    pub namespace: Namespace,
}

/// Receives finished tokens from the tokenizer.
pub trait TokenSink {
    /// Accept one token.
    fn add_token(&mut self, token: Token) -> SinkResult;

    /// Whether there is an adjusted current node at all.
    fn has_adjusted_current_node(&self) -> bool {
        false
    }

    /// The adjusted current node, if any.
    fn adjusted_current_node(&self) -> Option<AdjustedNode> {
        None
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    ///
    /// "If there is an adjusted current node and it is not an element in the
    /// HTML namespace"
    fn in_foreign_content(&self) -> bool {
        self.has_adjusted_current_node()
            && self
                .adjusted_current_node()
                .is_some_and(|node| node.namespace != Namespace::Html)
    }

    /// Called every time the tokenizer changes state.
    fn state_changed(&mut self, _from: TokenizerState, _to: TokenizerState) {}
}

impl TokenSink for Vec<Token> {
    fn add_token(&mut self, token: Token) -> SinkResult {
        self.push(token);
        SinkResult::Continue
    }
}

/// Merges runs of adjacent [`Token::Character`] tokens into a single
/// [`Token::Characters`] before handing them to the inner sink.
///
/// The tokenizer emits one token per scalar value; merging is a consumer
/// concern and lives here.
#[derive(Debug, Default)]
pub struct CoalescingSink<S> {
    inner: S,
    text: String,
}

impl<S: TokenSink> CoalescingSink<S> {
    /// Wrap a sink.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            text: String::new(),
        }
    }

    /// The wrapped sink.
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Flush any buffered text and return the wrapped sink.
    pub fn into_inner(mut self) -> S {
        let _ = self.flush();
        self.inner
    }

    fn flush(&mut self) -> SinkResult {
        if self.text.is_empty() {
            return SinkResult::Continue;
        }
        let data = core::mem::take(&mut self.text);
        self.inner.add_token(Token::Characters { data })
    }
}

impl<S: TokenSink> TokenSink for CoalescingSink<S> {
    fn add_token(&mut self, token: Token) -> SinkResult {
        match token {
            Token::Character { data } => {
                self.text.push(data);
                SinkResult::Continue
            }
            Token::Characters { data } => {
                self.text.push_str(&data);
                SinkResult::Continue
            }
            other => {
                let flushed = self.flush();
                match self.inner.add_token(other) {
                    SinkResult::Continue => flushed,
                    switch @ SinkResult::SwitchTo(_) => switch,
                }
            }
        }
    }

    fn has_adjusted_current_node(&self) -> bool {
        self.inner.has_adjusted_current_node()
    }

    fn adjusted_current_node(&self) -> Option<AdjustedNode> {
        self.inner.adjusted_current_node()
    }

    fn state_changed(&mut self, from: TokenizerState, to: TokenizerState) {
        self.inner.state_changed(from, to);
    }
}

/// A naive stand-in for tree construction.
///
/// Real tree construction decides content models from its insertion mode.
/// This sink approximates that from tag names alone, which is enough for
/// scraping and for exercising the tokenizer's state overrides:
///
/// - RCDATA elements: "title", "textarea"
/// - RAWTEXT elements: "style", "xmp", "iframe", "noembed", "noframes"
/// - Script data: "script"
/// - PLAINTEXT: "plaintext"
///
/// It also keeps a stack of open `svg`/`math` elements so `<![CDATA[` is
/// accepted inside them.
#[derive(Debug, Default)]
pub struct ContentModelSink<S> {
    inner: S,
    foreign: Vec<AdjustedNode>,
}

impl<S: TokenSink> ContentModelSink<S> {
    /// Wrap a sink.
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            foreign: Vec::new(),
        }
    }

    /// The wrapped sink.
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Return the wrapped sink.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn content_model_for(name: &str) -> Option<TokenizerState> {
        match name {
            // "A start tag whose tag name is "title""
            // "Follow the generic RCDATA element parsing algorithm."
            // [§ 13.2.6.2](https://html.spec.whatwg.org/multipage/parsing.html#generic-rcdata-element-parsing-algorithm)
            "title" | "textarea" => Some(TokenizerState::RCDATA),
            // "A start tag whose tag name is one of: "style", "xmp", "iframe", "noembed", "noframes""
            // "Follow the generic raw text element parsing algorithm."
            "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(TokenizerState::RAWTEXT),
            // "Switch the tokenizer to the script data state."
            "script" => Some(TokenizerState::ScriptData),
            // "Switch the tokenizer to the PLAINTEXT state."
            "plaintext" => Some(TokenizerState::PLAINTEXT),
            _ => None,
        }
    }
}

impl<S: TokenSink> TokenSink for ContentModelSink<S> {
    fn add_token(&mut self, token: Token) -> SinkResult {
        let mut switch = None;
        match &token {
            Token::StartTag {
                name, self_closing, ..
            } => {
                let namespace = match name.as_str() {
                    "svg" => Some(Namespace::Svg),
                    "math" => Some(Namespace::MathMl),
                    _ => None,
                };
                if let Some(namespace) = namespace {
                    if !self_closing {
                        self.foreign.push(AdjustedNode {
                            name: name.clone(),
                            namespace,
                        });
                    }
                } else if self.foreign.is_empty() {
                    switch = Self::content_model_for(name);
                }
            }
            Token::EndTag { name, .. } => {
                if let Some(index) = self.foreign.iter().rposition(|node| node.name == *name) {
                    self.foreign.truncate(index);
                }
            }
            _ => {}
        }

        let result = self.inner.add_token(token);
        match switch {
            Some(state) => SinkResult::SwitchTo(state),
            None => result,
        }
    }

    fn has_adjusted_current_node(&self) -> bool {
        !self.foreign.is_empty() || self.inner.has_adjusted_current_node()
    }

    fn adjusted_current_node(&self) -> Option<AdjustedNode> {
        self.foreign
            .last()
            .cloned()
            .or_else(|| self.inner.adjusted_current_node())
    }

    fn state_changed(&mut self, from: TokenizerState, to: TokenizerState) {
        self.inner.state_changed(from, to);
    }
}
