/// Growing prefix tree for incremental word matching.
use tracing::trace;

/// A node in the growing prefix tree.
///
/// The root carries no letter. Every other node holds the letter that
/// extended its parent's path. Children are kept in insertion order, which
/// is also the order completions are reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    letter: Option<char>,
    children: Vec<TrieNode>,
}

impl TrieNode {
    /// Create an empty root node.
    pub fn new() -> Self {
        Self {
            letter: None,
            children: Vec::new(),
        }
    }

    fn leaf(letter: char) -> Self {
        Self {
            letter: Some(letter),
            children: Vec::new(),
        }
    }

    /// The letter this node represents (`None` for the root).
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Child nodes in insertion order.
    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TrieNode::node_count).sum::<usize>()
    }

    /// Offer `letter` to this subtree.
    ///
    /// `prefix` holds the spelling of the path down to (not including) this
    /// node and is restored before returning. Returns the index of the first
    /// word completed by this letter, in traversal order.
    fn extend(&mut self, letter: char, prefix: &mut String, words: &[String]) -> Option<usize> {
        if let Some(l) = self.letter {
            prefix.push(l);
        }

        let mut found = None;
        let mut letter_is_child = false;
        for child in self.children.iter_mut() {
            if child.letter == Some(letter) {
                letter_is_child = true;
            }
            let completed = child.extend(letter, prefix, words);
            if found.is_none() {
                found = completed;
            }
        }

        if !letter_is_child {
            let grows = words.iter().any(|w| {
                w.len() > prefix.len()
                    && w.starts_with(prefix.as_str())
                    && w[prefix.len()..].chars().next() == Some(letter)
            });
            if grows {
                trace!(prefix = %prefix, letter = %letter, "growing branch");
                self.children.push(TrieNode::leaf(letter));
                // any word equal to prefix + letter completes here, not only
                // the word that caused the growth
                if found.is_none() {
                    found = words.iter().position(|w| {
                        w.len() == prefix.len() + letter.len_utf8()
                            && w.starts_with(prefix.as_str())
                            && w.ends_with(letter)
                    });
                }
            }
        }

        if self.letter.is_some() {
            prefix.pop();
        }
        found
    }
}

/// Prefix tree that grows one letter at a time toward a fixed word list.
///
/// Each root-to-node path spells a prefix of some allowed word. A letter is
/// attached under every node where it continues such a prefix, unless that
/// node already has a child with the same letter.
///
/// # Example
/// ```
/// use numjumble_core::trie::PrefixTree;
///
/// let mut tree = PrefixTree::new(&["one", "two"]);
/// assert_eq!(tree.extend('o'), None);
/// assert_eq!(tree.extend('x'), None);
/// assert_eq!(tree.extend('n'), None);
/// assert_eq!(tree.extend('e'), Some("one"));
///
/// tree.reset();
/// assert_eq!(tree.node_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PrefixTree {
    root: TrieNode,
    words: Vec<String>,
}

impl PrefixTree {
    /// Create a tree holding only the root.
    pub fn new<T: AsRef<str>>(words: &[T]) -> Self {
        Self {
            root: TrieNode::new(),
            words: words
                .iter()
                .map(|w| w.as_ref().to_string())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Allowed words, in the order they are tried.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The root node; its letter is always `None`.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Total node count, root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Feed one letter and return the word it completed, if any.
    ///
    /// When several branches complete on the same letter only the one met
    /// first in traversal order is returned; that is the branch started
    /// earliest. The tree is left as is, callers decide when to `reset`.
    pub fn extend(&mut self, letter: char) -> Option<&str> {
        let mut prefix = String::new();
        let idx = self.root.extend(letter, &mut prefix, &self.words)?;
        Some(self.words[idx].as_str())
    }

    /// Drop every node except the root.
    pub fn reset(&mut self) {
        self.root.children.clear();
    }

    /// Spell out every root-to-leaf path.
    pub fn branches(&self) -> Vec<String> {
        fn walk(node: &TrieNode, path: &mut String, out: &mut Vec<String>) {
            if let Some(l) = node.letter {
                path.push(l);
            }
            if node.children.is_empty() {
                if !path.is_empty() {
                    out.push(path.clone());
                }
            } else {
                for child in &node.children {
                    walk(child, path, out);
                }
            }
            if node.letter.is_some() {
                path.pop();
            }
        }

        let mut out = Vec::new();
        walk(&self.root, &mut String::new(), &mut out);
        out
    }
}
