/// One 16-bit element of a key, usually a UTF-16 code unit.
pub type TrieUnit = u16;

/// Value associated with a key.
pub type TrieValue = i32;

/// Index of a word inside a trie store.
pub type TrieOffset = usize;

/// Largest code point that fits in a single [`TrieUnit`].
pub const MAX_BMP_CODE_POINT: u32 = 0xffff;

/// Largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10ffff;

/// Unit that ends a NUL-terminated key.
pub const TRIE_UNIT_TERM: TrieUnit = 0;
