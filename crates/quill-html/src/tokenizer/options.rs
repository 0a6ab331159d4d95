use serde::Deserialize;

use super::core::TokenizerState;

/// Knobs for starting a tokenizer somewhere other than a fresh document.
///
/// Fragment parsing and test harnesses start in RCDATA, RAWTEXT, PLAINTEXT or
/// script data and need to know which start tag "opened" that content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenizerOptions {
    /// The state the tokenizer starts in.
    ///
    /// [§ 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
    /// "The initial state is the data state."
    pub initial_state: TokenizerState,

    /// Name of the last start tag, as if it had already been emitted.
    ///
    /// Consulted by the appropriate-end-tag check in RCDATA, RAWTEXT and
    /// script data.
    pub last_start_tag_name: Option<String>,
}

impl TokenizerOptions {
    /// Options for tokenizing the contents of `<tag>` in the given state.
    #[must_use]
    pub fn in_element(state: TokenizerState, tag: &str) -> Self {
        Self {
            initial_state: state,
            last_start_tag_name: Some(tag.to_ascii_lowercase()),
        }
    }
}
