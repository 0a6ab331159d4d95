//! Named character reference lookup table.
//!
//! [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
//!
//! The table is compiled once into a trie keyed by the characters of each
//! reference name, with the trailing `;` as an ordinary edge. A
//! [`NamedReferenceMatcher`] walks that trie one input character at a time
//! and remembers the longest complete name seen so far.
//!
//! [§ 13.5 Named character references](https://html.spec.whatwg.org/multipage/named-characters.html#named-character-references)
//! defines 2,125 names. Every name matches with a trailing `;`, and the 106
//! legacy names also match without one.

use std::sync::LazyLock;

mod table;

use table::NAMED_REFERENCES;

#[derive(Debug, Default)]
struct TrieNode {
    /// Outgoing edges, sorted by character.
    children: Vec<(char, usize)>,
    /// Replacement text if the path to this node spells a complete name.
    value: Option<&'static str>,
}

/// Immutable trie over every reference name, trailing `;` included.
#[derive(Debug)]
struct NamedReferenceTrie {
    nodes: Vec<TrieNode>,
}

impl NamedReferenceTrie {
    const ROOT: usize = 0;

    fn build(table: &[(&str, &'static str, bool)]) -> Self {
        let mut trie = Self {
            nodes: vec![TrieNode::default()],
        };
        for &(name, replacement, legacy) in table {
            let node = trie.insert_path(Self::ROOT, name);
            if legacy {
                trie.nodes[node].value = Some(replacement);
            }
            let terminated = trie.insert_path(node, ";");
            trie.nodes[terminated].value = Some(replacement);
        }
        trie
    }

    fn insert_path(&mut self, from: usize, path: &str) -> usize {
        let mut node = from;
        for c in path.chars() {
            node = match self.child(node, c) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    let children = &mut self.nodes[node].children;
                    let at = children.partition_point(|&(edge, _)| edge < c);
                    children.insert(at, (c, next));
                    next
                }
            };
        }
        node
    }

    fn child(&self, node: usize, c: char) -> Option<usize> {
        let children = &self.nodes[node].children;
        children
            .binary_search_by_key(&c, |&(edge, _)| edge)
            .ok()
            .map(|index| children[index].1)
    }

    fn walk(&self, path: &str) -> Option<usize> {
        path.chars()
            .try_fold(Self::ROOT, |node, c| self.child(node, c))
    }
}

static TRIE: LazyLock<NamedReferenceTrie> =
    LazyLock::new(|| NamedReferenceTrie::build(NAMED_REFERENCES));

/// The longest complete reference name a [`NamedReferenceMatcher`] has seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedMatch {
    /// Number of characters in the matched name, `;` included.
    pub length: usize,
    /// "one or two characters corresponding to the character reference name"
    pub replacement: &'static str,
    /// Whether the matched name ended in `;`.
    pub terminated: bool,
}

/// Per-lookup cursor into the shared trie.
///
/// Feed it characters until [`NamedReferenceMatcher::feed`] returns false;
/// [`NamedReferenceMatcher::longest_match`] is then the answer to "consume
/// the maximum number of characters possible".
#[derive(Debug, Clone, Copy)]
pub struct NamedReferenceMatcher {
    node: usize,
    consumed: usize,
    longest: Option<NamedMatch>,
}

impl Default for NamedReferenceMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl NamedReferenceMatcher {
    /// A matcher positioned before the first character of a name.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            node: NamedReferenceTrie::ROOT,
            consumed: 0,
            longest: None,
        }
    }

    /// Advance by one character. Returns false, leaving the matcher
    /// unchanged, if no reference name continues with `c`.
    pub fn feed(&mut self, c: char) -> bool {
        let trie = &*TRIE;
        let Some(next) = trie.child(self.node, c) else {
            return false;
        };
        self.node = next;
        self.consumed += 1;
        if let Some(replacement) = trie.nodes[next].value {
            self.longest = Some(NamedMatch {
                length: self.consumed,
                replacement,
                terminated: c == ';',
            });
        }
        true
    }

    /// The longest complete name seen so far.
    #[must_use]
    pub const fn longest_match(&self) -> Option<NamedMatch> {
        self.longest
    }
}

/// Look up a named character reference.
///
/// Returns the replacement string if found.
/// The `name` should NOT include the leading '&'.
///
/// # Example
/// ```ignore
/// lookup_entity("amp;")  // Returns Some("&")
/// lookup_entity("amp")   // Returns Some("&") - legacy support
/// lookup_entity("xyz;")  // Returns None
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    let trie = &*TRIE;
    trie.walk(name).and_then(|node| trie.nodes[node].value)
}

/// Check if any entity name starts with the given prefix.
///
/// # Example
/// ```ignore
/// any_entity_has_prefix("am")   // true (amp, amp;)
/// any_entity_has_prefix("xyz")  // false
/// ```
#[must_use]
pub fn any_entity_has_prefix(prefix: &str) -> bool {
    TRIE.walk(prefix).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn longest(input: &str) -> Option<NamedMatch> {
        let mut matcher = NamedReferenceMatcher::new();
        for c in input.chars() {
            if !matcher.feed(c) {
                break;
            }
        }
        matcher.longest_match()
    }

    #[test]
    fn test_longest_match_prefers_semicolon_form() {
        let found = longest("amp;").map(|m| (m.length, m.replacement, m.terminated));
        assert_eq!(found, Some((4, "&", true)));
    }

    #[test]
    fn test_legacy_prefix_survives_longer_failed_walk() {
        // "not" is legacy; "noti" continues towards "notin;" but "notit" does not.
        let found = longest("notit;").map(|m| (m.length, m.replacement, m.terminated));
        assert_eq!(found, Some((3, "\u{00AC}", false)));
    }

    #[test]
    fn test_non_legacy_needs_semicolon() {
        assert_eq!(longest("hellip"), None);
        assert_eq!(longest("hellip;").map(|m| m.replacement), Some("\u{2026}"));
    }

    #[test]
    fn test_two_code_point_replacement() {
        assert_eq!(lookup_entity("nGt;"), Some("\u{226B}\u{20D2}"));
    }

    #[test]
    fn test_no_duplicate_names_in_table() {
        let mut names: Vec<&str> = NAMED_REFERENCES.iter().map(|&(name, _, _)| name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn test_table_covers_every_whatwg_name() {
        assert_eq!(NAMED_REFERENCES.len(), 2125);
        let legacy = NAMED_REFERENCES.iter().filter(|&&(_, _, legacy)| legacy).count();
        assert_eq!(legacy, 106);
        // entities.json lists each legacy name twice, with and without `;`.
        let complete = TRIE.nodes.iter().filter(|node| node.value.is_some()).count();
        assert_eq!(complete, 2231);
    }

    #[test]
    fn test_table_is_sorted_by_name() {
        assert!(NAMED_REFERENCES.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }
}
