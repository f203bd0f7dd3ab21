//! Unit-at-a-time traversal of a serialized dictionary trie.

use crate::format::FIXED_INT_IS_FINAL;
use crate::node::{
    compact_int_len, fixed_int_len, jump, read_compact_int, read_fixed_int, word, Node,
};
use crate::types::{TrieOffset, TrieUnit, TrieValue, TRIE_UNIT_TERM};
use crate::utf16;

/// Light-weight cursor over a serialized trie.
///
/// The cursor borrows the trie words and keeps only a position and a few
/// flags, so creating one is free and any number of cursors may share the
/// same words. Feed it one unit at a time with [`next`](Self::next), then ask
/// [`contains`](Self::contains) whether the units so far form a key.
///
/// ```
/// use dictrie::TrieCursor;
///
/// // "a" -> 1, "b" -> 2
/// let words: [u16; 5] = [0x0002, 0x61, 1, 0x62, 0x3425];
/// let mut cursor = TrieCursor::new(&words, 0);
/// assert!(cursor.contains_next(&[0x62]));
/// assert_eq!(cursor.value(), 2);
/// ```
///
/// Malformed words never cause a panic: a read past the end, or a jump that
/// leaves the words, behaves like a mismatch.
#[derive(Clone, Debug)]
pub struct TrieCursor<'a> {
    words: &'a [TrieUnit],
    start: TrieOffset,
    /// Next word to read. `None` once no further unit can match.
    pos: Option<TrieOffset>,
    /// Literal units of the current linear-match node that are still to be matched.
    remaining_match: u32,
    value: TrieValue,
    has_value: bool,
}

impl<'a> TrieCursor<'a> {
    /// Creates a cursor whose root node starts at `start` within `words`.
    pub fn new(words: &'a [TrieUnit], start: TrieOffset) -> Self {
        TrieCursor {
            words,
            start,
            pos: Some(start),
            remaining_match: 0,
            value: 0,
            has_value: false,
        }
    }

    /// Returns to the root, forgetting all units fed so far.
    pub fn reset(&mut self) -> &mut Self {
        self.pos = Some(self.start);
        self.remaining_match = 0;
        self.has_value = false;
        self
    }

    /// Offset of the root node this cursor was created with.
    pub fn start_offset(&self) -> TrieOffset {
        self.start
    }

    /// Offset of the next word to read, or `None` if the cursor has stopped.
    pub fn position(&self) -> Option<TrieOffset> {
        self.pos
    }

    /// Whether no further unit can match until the next [`reset`](Self::reset).
    pub fn is_stopped(&self) -> bool {
        self.pos.is_none()
    }

    /// Value of the key matched so far.
    ///
    /// Only meaningful right after [`contains`](Self::contains) (or one of the
    /// `contains_next` methods) returned `true`.
    pub fn value(&self) -> TrieValue {
        self.value
    }

    /// Traverses the trie for one more unit.
    ///
    /// Returns `true` if the units so far are still a prefix of some key.
    /// Once this returns `false` the cursor is stopped and every further call
    /// returns `false` until [`reset`](Self::reset).
    pub fn next(&mut self, unit: TrieUnit) -> bool {
        self.has_value = false;
        let Some(pos) = self.pos else {
            return false;
        };
        match self.advance(pos, u32::from(unit)) {
            Some(true) => true,
            Some(false) | None => {
                self.stop();
                false
            }
        }
    }

    /// Traverses the trie for a code point, one unit for the BMP and a
    /// surrogate pair above it. The trail surrogate is only tried if the lead
    /// surrogate matched. Code points above U+10FFFF never match.
    pub fn next_for_code_point(&mut self, cp: u32) -> bool {
        match utf16::code_point_units(cp) {
            Some(units) => units.iter().all(|&unit| self.next(unit)),
            None => {
                self.has_value = false;
                self.stop();
                false
            }
        }
    }

    /// Returns `true` if the units fed so far form a key.
    /// [`value`](Self::value) then returns its value.
    ///
    /// A final value stops the cursor since no longer key can follow it. An
    /// intermediate value leaves the cursor where it is, so traversal can go on.
    pub fn contains(&mut self) -> bool {
        if self.has_value {
            return true;
        }
        let Some(pos) = self.pos else {
            return false;
        };
        if self.remaining_match > 0 {
            return false;
        }
        let Some((Node::Value { lead, is_final }, after)) = Node::decode(self.words, pos) else {
            return false;
        };
        match read_compact_int(self.words, after, lead) {
            Some((value, _)) => {
                self.value = value;
                if is_final {
                    self.has_value = true;
                    self.stop();
                }
                true
            }
            None => {
                self.stop();
                false
            }
        }
    }

    /// Feeds every unit of `units`, then returns [`contains`](Self::contains).
    /// Stops at the first unit that does not match.
    pub fn contains_next(&mut self, units: &[TrieUnit]) -> bool {
        units.iter().all(|&unit| self.next(unit)) && self.contains()
    }

    /// Like [`contains_next`](Self::contains_next), but `units` ends at its
    /// first NUL unit (or at the end of the slice if there is none).
    pub fn contains_next_terminated(&mut self, units: &[TrieUnit]) -> bool {
        units
            .iter()
            .take_while(|&&unit| unit != TRIE_UNIT_TERM)
            .all(|&unit| self.next(unit))
            && self.contains()
    }

    /// Feeds the UTF-16 form of `key`, then returns [`contains`](Self::contains).
    pub fn contains_next_str(&mut self, key: &str) -> bool {
        key.encode_utf16().all(|unit| self.next(unit)) && self.contains()
    }

    #[inline]
    fn stop(&mut self) {
        self.pos = None;
    }

    /// One transition from `pos`. `None` means the words ended or a jump left
    /// them; callers treat it like `Some(false)`.
    fn advance(&mut self, pos: TrieOffset, unit: u32) -> Option<bool> {
        if self.remaining_match > 0 {
            // Inside a linear-match node.
            if unit != word(self.words, pos)? {
                return Some(false);
            }
            self.remaining_match -= 1;
            self.pos = Some(pos + 1);
            return Some(true);
        }

        let (mut node, mut pos) = Node::decode(self.words, pos)?;
        while let Node::Value { lead, is_final } = node {
            if is_final {
                // Nothing follows a final value.
                return Some(false);
            }
            // Intermediate values are only delivered by contains().
            (node, pos) = Node::decode(self.words, pos + compact_int_len(lead))?;
        }

        loop {
            match node {
                Node::LinearMatch { len } => {
                    if unit != word(self.words, pos)? {
                        return Some(false);
                    }
                    self.remaining_match = len - 1;
                    self.pos = Some(pos + 1);
                    return Some(true);
                }
                Node::ListBranch { bits, last } => {
                    return self.advance_list(pos, unit, bits, last);
                }
                Node::ThreeWayBranch { flags } => {
                    let pivot = word(self.words, pos)?;
                    pos += 1;
                    if unit < pivot {
                        let (delta, after) = read_fixed_int(self.words, pos, flags)?;
                        pos = jump(self.words, after, delta)?;
                    } else {
                        pos += fixed_int_len(flags);
                        let flags = flags >> 1;
                        if unit == pivot {
                            let (value, after) = read_fixed_int(self.words, pos, flags)?;
                            return self.take_fixed_value(value, after, flags);
                        }
                        pos += fixed_int_len(flags);
                    }
                    // Both the less-than and greater-than edges lead to another branch.
                    (node, pos) = Node::decode(self.words, pos)?;
                    if !node.is_branch() {
                        return None;
                    }
                }
                Node::Value { .. } => return None,
            }
        }
    }

    /// Scans the ascending keys of a list branch. `pos` is the first key.
    fn advance_list(
        &mut self,
        mut pos: TrieOffset,
        unit: u32,
        mut bits: u32,
        mut remaining: u32,
    ) -> Option<bool> {
        loop {
            let key = word(self.words, pos)?;
            pos += 1;
            if unit == key {
                if remaining == 0 {
                    // The last key has no value; its node follows directly.
                    self.pos = Some(pos);
                    return Some(true);
                }
                let (value, after) = read_fixed_int(self.words, pos, bits)?;
                return self.take_fixed_value(value, after, bits);
            }
            if unit < key || remaining == 0 {
                return Some(false);
            }
            remaining -= 1;
            pos += fixed_int_len(bits);
            bits >>= 2;
        }
    }

    /// A branch edge carries either a final value or a jump delta.
    fn take_fixed_value(&mut self, value: u32, after: TrieOffset, flags: u32) -> Option<bool> {
        if flags & FIXED_INT_IS_FINAL != 0 {
            self.value = value as TrieValue;
            self.has_value = true;
            self.stop();
        } else {
            self.pos = Some(jump(self.words, after, value)?);
        }
        Some(true)
    }
}

impl<'a> From<&'a [TrieUnit]> for TrieCursor<'a> {
    fn from(words: &'a [TrieUnit]) -> Self {
        TrieCursor::new(words, 0)
    }
}
