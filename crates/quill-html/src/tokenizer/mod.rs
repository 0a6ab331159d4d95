//! HTML tokenizer module.
//!
//! Implements [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard.

/// Character reference states per § 13.2.5.72 through § 13.2.5.80.
pub mod character_reference;
mod comment;
/// HTML tokenizer state machine implementation.
pub mod core;
mod doctype;
/// Parse error codes, error sinks and tokenizer failures.
pub mod errors;
/// Helper methods for tokenizer state transitions.
pub mod helpers;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// Tokenizer configuration.
pub mod options;
/// The token under construction.
pub mod pending;
mod script_data;
/// Token sinks and the tree-construction collaborator surface.
pub mod sink;
/// Token types produced by the tokenizer.
pub mod token;

pub use self::core::{HTMLTokenizer, TokenizerState};
pub use errors::{ErrorSink, LoggingErrorSink, ParseError, ParseErrorCode, TokenizerError};
pub use options::TokenizerOptions;
pub use sink::{AdjustedNode, CoalescingSink, ContentModelSink, Namespace, SinkResult, TokenSink};
pub use token::{Attribute, Token, to_html5lib_json};
