/*!
A trie of Unicode emoji sequences.

A `SequenceSet` stores every known emoji code point sequence (single code
points, code points followed by a variation selector, keycaps, flags, modifier
and zero width joiner sequences) and answers one question quickly: does this
text begin with a known sequence, and if so, how long is the longest one?

The set is meant to be built once, typically from a table emitted by
`emoji-generate`, and then only read. Insertion requires `&mut SequenceSet`,
so a set stored in a `static` is frozen and may be shared freely between
threads.
*/

#![deny(missing_docs)]

use std::borrow::Cow;
use std::fmt;
use std::str;

/// The index of a node in the arena of a `SequenceSet`.
type NodeId = usize;

/// The root node always lives at the start of the arena.
const ROOT: NodeId = 0;

#[derive(Clone, Debug, Default)]
struct Node {
    /// Outgoing transitions, sorted by codepoint.
    children: Vec<(char, NodeId)>,
    /// Whether a complete sequence ends at this node.
    terminal: bool,
    label: Option<Cow<'static, str>>,
}

impl Node {
    fn child(&self, cp: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&cp, |&(c, _)| c)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// A set of emoji codepoint sequences, stored as a trie.
///
/// Every sequence in the set corresponds to exactly one terminal node that
/// is reached by following its codepoints from the root. A terminal node may
/// have children of its own, since one sequence is frequently a strict prefix
/// of another (for example, `U+2764` and `U+2764 U+FE0F`).
///
/// Each sequence may carry a label. Labels have no effect on matching; they
/// exist so that generated tables can say where each sequence came from.
#[derive(Clone)]
pub struct SequenceSet {
    nodes: Vec<Node>,
    len: usize,
}

impl Default for SequenceSet {
    fn default() -> SequenceSet {
        SequenceSet::new()
    }
}

impl fmt::Debug for SequenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceSet")
            .field("sequences", &self.len)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

impl SequenceSet {
    /// Create a new empty set.
    pub fn new() -> SequenceSet {
        SequenceSet { nodes: vec![Node::default()], len: 0 }
    }

    /// Add a sequence to this set along with a label describing it.
    ///
    /// Intermediate nodes are created as needed. Adding a sequence that is
    /// already in the set only replaces its label. Empty sequences are never
    /// members of the set, so adding one does nothing.
    pub fn add_sequence<L>(&mut self, seq: &[char], label: L)
    where
        L: Into<Cow<'static, str>>,
    {
        if seq.is_empty() {
            return;
        }
        let mut id = ROOT;
        for &cp in seq {
            let pos = self.nodes[id]
                .children
                .binary_search_by_key(&cp, |&(c, _)| c);
            id = match pos {
                Ok(i) => self.nodes[id].children[i].1,
                Err(i) => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[id].children.insert(i, (cp, next));
                    next
                }
            };
        }
        let node = &mut self.nodes[id];
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
        node.label = Some(label.into());
    }

    /// Return the length, in bytes, of the longest sequence in this set that
    /// is a prefix of the given UTF-8 encoded text.
    ///
    /// If no sequence in this set is a prefix of `text`, then `None` is
    /// returned. Decoding stops at the first invalid UTF-8 sequence, which
    /// is treated the same as the absence of a transition.
    pub fn has_emoji_prefix(&self, text: &[u8]) -> Option<usize> {
        self.longest_match(Utf8Prefix { bytes: text, pos: 0 })
    }

    /// Like `has_emoji_prefix`, but for text that is already known to be
    /// valid UTF-8.
    pub fn has_emoji_prefix_str(&self, text: &str) -> Option<usize> {
        self.longest_match(
            text.char_indices().map(|(i, cp)| (cp, i + cp.len_utf8())),
        )
    }

    /// Return the length, in codepoints, of the longest sequence in this set
    /// that is a prefix of the given codepoints.
    ///
    /// This always agrees with `has_emoji_prefix`: for any string, the
    /// number of codepoints reported here covers exactly the bytes reported
    /// by `has_emoji_prefix`.
    pub fn has_emoji_prefix_chars(&self, chars: &[char]) -> Option<usize> {
        self.longest_match(
            chars.iter().enumerate().map(|(i, &cp)| (cp, i + 1)),
        )
    }

    /// Walk the trie for as long as transitions exist, recording the amount
    /// consumed each time a terminal node is reached.
    ///
    /// Each item pairs a codepoint with the total length consumed once that
    /// codepoint is included. The last recorded length wins, which makes
    /// this a longest match.
    fn longest_match<I>(&self, it: I) -> Option<usize>
    where
        I: IntoIterator<Item = (char, usize)>,
    {
        let mut id = ROOT;
        let mut longest = None;
        for (cp, consumed) in it {
            id = match self.nodes[id].child(cp) {
                None => break,
                Some(id) => id,
            };
            if self.nodes[id].terminal {
                longest = Some(consumed);
            }
        }
        longest
    }

    /// Returns true if and only if the given sequence is in this set.
    pub fn contains(&self, seq: &[char]) -> bool {
        self.find(seq).map_or(false, |id| self.nodes[id].terminal)
    }

    /// Return the label attached to the given sequence, if the sequence is
    /// in this set.
    pub fn label(&self, seq: &[char]) -> Option<&str> {
        let node = &self.nodes[self.find(seq)?];
        if !node.terminal {
            return None;
        }
        node.label.as_deref()
    }

    fn find(&self, seq: &[char]) -> Option<NodeId> {
        let mut id = ROOT;
        for &cp in seq {
            id = self.nodes[id].child(cp)?;
        }
        Some(id)
    }

    /// Return the number of distinct sequences in this set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if and only if this set contains no sequences.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return an iterator over every sequence in this set along with its
    /// label.
    ///
    /// Sequences are yielded in ascending codepoint order. A sequence always
    /// comes before any sequence it is a prefix of.
    pub fn iter(&self) -> Iter<'_> {
        let mut it = Iter { set: self, stack: vec![], path: vec![] };
        it.push_children(ROOT, 0);
        it
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = (Vec<char>, Option<&'a str>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// An iterator over the sequences in a `SequenceSet`.
///
/// The lifetime `'a` refers to the lifetime of the set being iterated.
#[derive(Debug)]
pub struct Iter<'a> {
    set: &'a SequenceSet,
    /// Nodes left to visit, each with the codepoint on its incoming edge and
    /// the depth of its parent.
    stack: Vec<(NodeId, char, usize)>,
    path: Vec<char>,
}

impl<'a> Iter<'a> {
    fn push_children(&mut self, id: NodeId, depth: usize) {
        for &(cp, child) in self.set.nodes[id].children.iter().rev() {
            self.stack.push((child, cp, depth));
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Vec<char>, Option<&'a str>);

    fn next(&mut self) -> Option<(Vec<char>, Option<&'a str>)> {
        while let Some((id, cp, depth)) = self.stack.pop() {
            self.path.truncate(depth);
            self.path.push(cp);
            self.push_children(id, depth + 1);

            let node = &self.set.nodes[id];
            if node.terminal {
                let label = node.label.as_deref();
                return Some((self.path.clone(), label));
            }
        }
        None
    }
}

/// Decodes codepoints from the front of a byte string, yielding each one
/// together with the number of bytes consumed so far.
struct Utf8Prefix<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Utf8Prefix<'a> {
    type Item = (char, usize);

    fn next(&mut self) -> Option<(char, usize)> {
        let (cp, len) = decode_utf8(&self.bytes[self.pos..])?;
        self.pos += len;
        Some((cp, self.pos))
    }
}

/// Decode the first codepoint in the given bytes, returning it along with
/// its encoded length. `None` is returned if the bytes are empty or do not
/// start with a valid UTF-8 encoding of a scalar value.
fn decode_utf8(bytes: &[u8]) -> Option<(char, usize)> {
    let len = match *bytes.first()? {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return None,
    };
    let encoded = str::from_utf8(bytes.get(..len)?).ok()?;
    encoded.chars().next().map(|cp| (cp, len))
}
