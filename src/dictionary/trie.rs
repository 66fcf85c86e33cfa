//! Character-keyed prefix tree holding the segmentation dictionary.
//!
//! Every node owns its children outright; there are no back or cross
//! references, so the structure is a strict tree. A node carries a payload
//! only when the path from the root to it spells a complete dictionary entry.
//!
//! # Examples
//!
//! ```
//! use hanseg::dictionary::PrefixDictionary;
//!
//! let mut dict = PrefixDictionary::new();
//! dict.insert("中国", 1);
//! dict.insert("中文", 2);
//!
//! assert_eq!(dict.find("中国"), Some(&1));
//! assert_eq!(dict.find("中"), None); // strict prefix, not an entry
//! assert_eq!(dict.keys_with_prefix("中").len(), 2);
//! ```

use std::collections::BTreeSet;

use ahash::AHashMap;

/// A single node of the prefix tree.
#[derive(Debug, Clone)]
pub struct TrieNode<V> {
    children: AHashMap<char, TrieNode<V>>,
    value: Option<V>,
}

impl<V> TrieNode<V> {
    fn new() -> Self {
        TrieNode {
            children: AHashMap::new(),
            value: None,
        }
    }

    /// Get the child reached by `ch`, if any.
    pub fn child(&self, ch: char) -> Option<&TrieNode<V>> {
        self.children.get(&ch)
    }

    /// Get the payload stored at this node.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Whether this node terminates a dictionary entry.
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    #[allow(clippy::len_zero)]
    fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.len() == 0
    }

    fn collect_keys(&self, buffer: &mut String, out: &mut BTreeSet<String>) {
        if self.value.is_some() {
            out.insert(buffer.clone());
        }
        for (&ch, child) in &self.children {
            buffer.push(ch);
            child.collect_keys(buffer, out);
            buffer.pop();
        }
    }

    fn depth(&self) -> usize {
        self.children
            .values()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Dictionary of words stored as a character trie.
///
/// Built once from a word list, then queried by the match finder. Mutation
/// and lookups may interleave, but the type does no internal locking: share
/// it across threads only for reading.
#[derive(Debug, Clone)]
pub struct PrefixDictionary<V = ()> {
    root: TrieNode<V>,
    len: usize,
}

impl<V> Default for PrefixDictionary<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PrefixDictionary<V> {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        PrefixDictionary {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Insert `key` with `value`, returning the payload it replaced.
    ///
    /// Empty keys are ignored: the root never carries a payload.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        if key.is_empty() {
            log::trace!("ignoring empty dictionary key");
            return None;
        }

        let mut node = &mut self.root;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
        }

        let previous = node.value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Look up the payload stored for exactly `key`.
    ///
    /// Returns `None` when any character is missing from the path, or when
    /// `key` is only a strict prefix of longer entries.
    pub fn find(&self, key: &str) -> Option<&V> {
        self.node(key)?.value()
    }

    /// Whether `key` is a complete entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Whether at least one entry starts with `prefix`.
    ///
    /// Equivalent to `!keys_with_prefix(prefix).is_empty()` without the
    /// enumeration: deletion prunes every node that has no payload below it,
    /// so reaching a node is enough.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return !self.is_empty();
        }
        self.node(prefix).is_some()
    }

    /// Remove `key`, pruning ancestors that are left without payload or
    /// children.
    ///
    /// Returns whether the node for `key` ended up empty and was pruned.
    /// Deleting an absent key is a no-op returning `false`; an entry that is
    /// also a prefix of longer entries loses its payload but keeps its node,
    /// so `false` is returned there as well. Use [`remove`](Self::remove) to
    /// get the payload back.
    pub fn delete(&mut self, key: &str) -> bool {
        let (removed, pruned) = self.remove_entry(key);
        removed.is_some() && pruned
    }

    /// Remove `key` and return its payload.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.remove_entry(key).0
    }

    fn remove_entry(&mut self, key: &str) -> (Option<V>, bool) {
        if key.is_empty() {
            return (None, false);
        }

        let chars: Vec<char> = key.chars().collect();
        let mut removed = None;
        let mut terminal_pruned = false;
        Self::remove_recursive(&mut self.root, &chars, &mut removed, &mut terminal_pruned);

        if removed.is_some() {
            self.len -= 1;
        }
        (removed, terminal_pruned)
    }

    /// Returns whether `node` is empty after the removal below it.
    fn remove_recursive(
        node: &mut TrieNode<V>,
        chars: &[char],
        removed: &mut Option<V>,
        terminal_pruned: &mut bool,
    ) -> bool {
        let Some((&ch, rest)) = chars.split_first() else {
            *removed = node.value.take();
            return node.is_empty();
        };

        let Some(child) = node.children.get_mut(&ch) else {
            return false;
        };

        if Self::remove_recursive(child, rest, removed, terminal_pruned) {
            node.children.remove(&ch);
            if rest.is_empty() {
                *terminal_pruned = true;
            }
        }

        node.is_empty()
    }

    /// Collect every entry that starts with `prefix`.
    ///
    /// An empty prefix returns the whole dictionary and a one-character prefix
    /// can return a large share of it, so this walks the full subtree and
    /// should not be used as a cheap membership test; see
    /// [`contains_prefix`](Self::contains_prefix).
    pub fn keys_with_prefix(&self, prefix: &str) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        if let Some(node) = self.node(prefix) {
            let mut buffer = prefix.to_string();
            node.collect_keys(&mut buffer, &mut keys);
        }
        keys
    }

    /// All entries, in lexicographic order.
    pub fn keys(&self) -> BTreeSet<String> {
        self.keys_with_prefix("")
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length in characters of the longest path in the trie.
    pub fn max_key_len(&self) -> usize {
        self.root.depth()
    }

    /// The root node, for walking the trie one character at a time.
    pub fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    fn node(&self, key: &str) -> Option<&TrieNode<V>> {
        let mut node = &self.root;
        for ch in key.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for PrefixDictionary<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for PrefixDictionary<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = PrefixDictionary::new();
        dictionary.extend(iter);
        dictionary
    }
}
