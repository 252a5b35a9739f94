use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, ALPHABET};

/// Letter carried by the root node; never matched against real input.
pub(crate) const ROOT_LETTER: char = '$';

/// One letter position on some path from the root. A node owns its children
/// and, when a word ends exactly here, an owned copy of that word.
pub(crate) struct TrieNode {
    pub(crate) letter: char,
    pub(crate) word: Option<String>,
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET.len()],
}

impl TrieNode {
    pub(crate) fn new(letter: char) -> TrieNode {
        TrieNode {
            letter,
            word: None,
            children: std::array::from_fn(|_| None),
        }
    }

    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children[get_idx(c)].as_deref()
    }

    pub(crate) fn get_or_create_child(&mut self, c: char) -> &mut TrieNode {
        self.children[get_idx(c)].get_or_insert_with(|| Box::new(TrieNode::new(c)))
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("word", &self.word)
            .field("children", &self.into_iter()
                .map(|x| x.letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
