//! Binary layout of a serialized dictionary trie.
//!
//! A trie is a flat sequence of 16-bit words with no header. The first word of
//! every node (its lead unit) selects the node kind by numeric range:
//!
//! | lead unit         | node                                              |
//! |-------------------|---------------------------------------------------|
//! | `0x0000..0x3400`  | list branch with 2..14 comparison units           |
//! | `0x3400..0x3408`  | three-way branch (less / equal / greater)         |
//! | `0x3408..0x3420`  | linear match of 1..24 literal units               |
//! | `0x3420..=0xffff` | value (compact int), bit 0 set if final           |
//!
//! These constants are the whole contract between a trie writer and
//! [`TrieCursor`](crate::TrieCursor).

/// List branch lead units carry this many minus one `(final, width)` bit pairs.
pub const MAX_LIST_BRANCH_SMALL_LENGTH: u32 = 6;
/// Shift of the list length field in a list branch lead unit.
pub const MAX_LIST_BRANCH_LENGTH_SHIFT: u32 = (MAX_LIST_BRANCH_SMALL_LENGTH - 1) * 2;
/// A second unit adds 8 more bit pairs for longer lists.
pub const MAX_LIST_BRANCH_LENGTH: u32 = MAX_LIST_BRANCH_SMALL_LENGTH + 8;

/// First three-way branch lead unit.
pub const MIN_THREE_WAY_BRANCH: u32 = (MAX_LIST_BRANCH_LENGTH - 1) << MAX_LIST_BRANCH_LENGTH_SHIFT;

/// First linear-match lead unit.
pub const MIN_LINEAR_MATCH: u32 = MIN_THREE_WAY_BRANCH + 8;
pub const MAX_LINEAR_MATCH_LENGTH: u32 = 24;

/// First value lead unit.
pub const MIN_VALUE_LEAD: u32 = MIN_LINEAR_MATCH + MAX_LINEAR_MATCH_LENGTH;
/// Bit 0 of a value lead unit.
pub const VALUE_IS_FINAL: u32 = 1;

// Compact int thresholds, applied to the value lead unit shifted right by 1.
pub const MIN_ONE_UNIT_LEAD: u32 = MIN_VALUE_LEAD / 2;
pub const MAX_ONE_UNIT_VALUE: u32 = 0x3fff;

pub const MIN_TWO_UNIT_LEAD: u32 = MIN_ONE_UNIT_LEAD + MAX_ONE_UNIT_VALUE + 1;
pub const THREE_UNIT_LEAD: u32 = 0x7fff;

pub const MAX_TWO_UNIT_VALUE: u32 = ((THREE_UNIT_LEAD - MIN_TWO_UNIT_LEAD) << 16) - 1;

// Fixed-width ints take their layout from bits of the node that owns them.
pub const FIXED_INT_32: u32 = 1;
pub const FIXED_INT_IS_FINAL: u32 = 2;
