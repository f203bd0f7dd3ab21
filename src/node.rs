//! Decoding of single nodes and of the integers embedded in them.
//!
//! Nothing here keeps state: every function takes the trie words and an index
//! and hands back what it read together with the index just past it. A read
//! past the end of the words yields `None`.

use crate::format::{
    FIXED_INT_32, MAX_LIST_BRANCH_LENGTH_SHIFT, MAX_LIST_BRANCH_SMALL_LENGTH, MIN_LINEAR_MATCH,
    MIN_ONE_UNIT_LEAD, MIN_THREE_WAY_BRANCH, MIN_TWO_UNIT_LEAD, MIN_VALUE_LEAD, THREE_UNIT_LEAD,
    VALUE_IS_FINAL,
};
use crate::types::{TrieOffset, TrieUnit, TrieValue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Node {
    /// `bits` holds one `(final, width)` pair per entry except the last,
    /// starting at bit 0. `last` is the index of the last entry.
    ListBranch { bits: u32, last: u32 },
    /// Low 3 bits: less-than jump width, equals value width, equals value final.
    ThreeWayBranch { flags: u32 },
    /// Number of literal units to match, 1..=24.
    LinearMatch { len: u32 },
    /// The lead unit still carries the top bits of the compact int.
    Value { lead: u32, is_final: bool },
}

impl Node {
    /// Decodes the node whose lead unit is at `index`.
    ///
    /// The returned index points past the lead unit, and past the second
    /// bit-table unit of a long list branch. The words of a value are not
    /// consumed; see [`read_compact_int`] and [`compact_int_len`].
    pub(crate) fn decode(words: &[TrieUnit], index: TrieOffset) -> Option<(Node, TrieOffset)> {
        let lead = word(words, index)?;
        let mut next = index + 1;
        let node = if lead >= MIN_VALUE_LEAD {
            Node::Value {
                lead,
                is_final: lead & VALUE_IS_FINAL != 0,
            }
        } else if lead >= MIN_LINEAR_MATCH {
            Node::LinearMatch {
                len: lead - MIN_LINEAR_MATCH + 1,
            }
        } else if lead >= MIN_THREE_WAY_BRANCH {
            Node::ThreeWayBranch {
                flags: lead - MIN_THREE_WAY_BRANCH,
            }
        } else {
            let last = (lead >> MAX_LIST_BRANCH_LENGTH_SHIFT) + 1;
            let mut bits = lead;
            if last >= MAX_LIST_BRANCH_SMALL_LENGTH {
                // 7..14 entries: the next unit holds the first 8 bit pairs.
                bits = (lead << 16) | word(words, next)?;
                next += 1;
            }
            Node::ListBranch { bits, last }
        };
        Some((node, next))
    }

    pub(crate) fn is_branch(&self) -> bool {
        matches!(self, Node::ListBranch { .. } | Node::ThreeWayBranch { .. })
    }
}

#[inline]
pub(crate) fn word(words: &[TrieUnit], index: TrieOffset) -> Option<u32> {
    words.get(index).map(|&w| u32::from(w))
}

/// Number of words that follow a value lead unit.
#[inline]
pub(crate) fn compact_int_len(lead: u32) -> usize {
    let lead = lead >> 1;
    if lead < MIN_TWO_UNIT_LEAD {
        0
    } else if lead < THREE_UNIT_LEAD {
        1
    } else {
        2
    }
}

/// Reads the compact int of a value node. `index` is just past the lead unit.
pub(crate) fn read_compact_int(
    words: &[TrieUnit],
    index: TrieOffset,
    lead: u32,
) -> Option<(TrieValue, TrieOffset)> {
    let lead = lead >> 1;
    if lead < MIN_TWO_UNIT_LEAD {
        Some(((lead - MIN_ONE_UNIT_LEAD) as TrieValue, index))
    } else if lead < THREE_UNIT_LEAD {
        let low = word(words, index)?;
        Some(((((lead - MIN_TWO_UNIT_LEAD) << 16) | low) as TrieValue, index + 1))
    } else {
        let high = word(words, index)?;
        let low = word(words, index + 1)?;
        Some((((high << 16) | low) as TrieValue, index + 2))
    }
}

/// Width in words of a fixed int described by the low bit of `flags`.
#[inline]
pub(crate) fn fixed_int_len(flags: u32) -> usize {
    (flags & FIXED_INT_32) as usize + 1
}

/// Reads a 1- or 2-word fixed int whose width is given by `flags`.
pub(crate) fn read_fixed_int(
    words: &[TrieUnit],
    index: TrieOffset,
    flags: u32,
) -> Option<(u32, TrieOffset)> {
    let first = word(words, index)?;
    if flags & FIXED_INT_32 != 0 {
        let second = word(words, index + 1)?;
        Some(((first << 16) | second, index + 2))
    } else {
        Some((first, index + 1))
    }
}

/// Applies a jump delta read from the word(s) ending just before `from`.
/// Targets outside the words are rejected.
#[inline]
pub(crate) fn jump(words: &[TrieUnit], from: TrieOffset, delta: u32) -> Option<TrieOffset> {
    from.checked_add(delta as usize).filter(|&target| target < words.len())
}
