//! HTML tokenizer for the Quill markup engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data, RCDATA, RAWTEXT, PLAINTEXT and script data states, including the
//!     script escape and double-escape states
//!   - Tag, attribute, comment, DOCTYPE and CDATA section states
//!   - Named and numeric character reference resolution
//!   - The full tokenizer parse-error catalogue
//!
//! - **Collaborator surface** for tree construction
//!   ([WHATWG § 13.2.6](https://html.spec.whatwg.org/multipage/parsing.html#tree-construction)):
//!   token sinks that can switch the tokenizer's state and answer the
//!   foreign-content query used by `<![CDATA[`.
//!
//! # Not Implemented
//!
//! - Tree construction (see [`tokenizer::ContentModelSink`] for an approximation)
//! - Byte decoding and encoding sniffing
//!
//! ```ignore
//! use quill_html::HTMLTokenizer;
//!
//! let mut tokenizer = HTMLTokenizer::new("<p class=intro>Hello &amp; welcome</p>");
//! tokenizer.run()?;
//! for token in tokenizer.into_tokens() {
//!     println!("{token}");
//! }
//! ```

/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use tokenizer::{
    Attribute, ErrorSink, HTMLTokenizer, ParseError, ParseErrorCode, Token, TokenSink,
    TokenizerError, TokenizerOptions, TokenizerState,
};
