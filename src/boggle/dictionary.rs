use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, info};

use super::error::BoggleError;

/// Lower-cases a query one character at a time so lookups don't allocate
fn canonical_chars(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().flat_map(char::to_lowercase)
}

/// Prefix tree node
#[derive(Debug, Default)]
pub struct TrieNode {
    next: HashMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    pub fn next_node(&self, c: char) -> Option<&TrieNode> {
        self.next.get(&c)
    }

    /// Whether the prefix ending at this node is a complete word
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

/// Case-insensitive word list stored as a prefix tree. Built once, then only queried.
#[derive(Debug)]
pub struct PrefixDictionary {
    root: TrieNode,
    // Number of accepted inserts, duplicates included
    size: usize,
    // Nodes below the root
    nodes: usize,
}

impl Default for PrefixDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixDictionary {
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            size: 0,
            nodes: 0,
        }
    }

    /// Builds a dictionary from the words that are at least `min_length` characters long
    pub fn from_words<I, S>(words: I, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for word in words {
            let word = word.as_ref();
            if word.chars().count() >= min_length {
                dict.insert(word);
            }
        }
        dict
    }

    /// Reads a whitespace separated word list. Tokens are split on carriage returns,
    /// spaces and newlines.
    pub fn from_reader<R: Read>(mut reader: R, min_length: usize) -> Result<Self, BoggleError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let words = text.split(|c| matches!(c, '\r' | ' ' | '\n'));
        Ok(Self::from_words(words, min_length))
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P, min_length: usize) -> Result<Self, BoggleError> {
        let path = path.as_ref();
        debug!("Loading dictionary from {}", path.display());
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => BoggleError::DictionaryNotFound {
                path: path.to_path_buf(),
            },
            _ => BoggleError::Io(e),
        })?;
        let dict = Self::from_reader(file, min_length)?;
        info!(
            "Loaded {} words ({} trie nodes) from {}",
            dict.len(),
            dict.node_count(),
            path.display()
        );
        Ok(dict)
    }

    /// Adds a word to the trie. Empty words are ignored.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        self.size += 1;

        let mut created = 0;
        let mut node = &mut self.root;
        for c in canonical_chars(word) {
            node = match node.next.entry(c) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => {
                    created += 1;
                    e.insert(TrieNode::default())
                }
            };
        }
        node.terminal = true;
        self.nodes += created;
    }

    /// Follows `value` down the trie, returning the node for its last character
    fn walk(&self, value: &str) -> Option<&TrieNode> {
        if value.is_empty() {
            return None;
        }
        canonical_chars(value).try_fold(&self.root, |node, c| node.next_node(c))
    }

    pub fn is_word(&self, value: &str) -> bool {
        self.walk(value).map_or(false, TrieNode::is_terminal)
    }

    /// True if some word in the dictionary starts with `value` (or is `value`)
    pub fn is_prefix(&self, value: &str) -> bool {
        self.walk(value).is_some()
    }

    /// Returns the stored (lower-cased) form of `value` if it is a complete word
    pub fn lookup(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        let mut node = &self.root;
        let mut canonical = String::with_capacity(value.len());
        for c in canonical_chars(value) {
            node = node.next_node(c)?;
            canonical.push(c);
        }
        node.terminal.then_some(canonical)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixDictionary {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        iter.into_iter().for_each(|w| self.insert(w.as_ref()));
    }
}

impl<S: AsRef<str>> std::iter::FromIterator<S> for PrefixDictionary {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}
