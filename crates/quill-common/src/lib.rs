//! Common utilities for the Quill tokenizers.
//!
//! This crate provides the input side shared by every tokenizer:
//! - **Positions** - 1-based line/column locations reported with parse errors
//! - **Character sources** - the [`CharacterSource`] contract and an in-memory
//!   [`StrSource`] implementation

pub mod source;

pub use source::{CharacterSource, Position, StrSource};
