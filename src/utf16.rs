//! Splitting code points into trie units.

use arrayvec::ArrayVec;

use crate::types::{TrieUnit, MAX_BMP_CODE_POINT, MAX_CODE_POINT};

const LEAD_SURROGATE_OFFSET: u32 = 0xd800 - (0x10000 >> 10);
const TRAIL_SURROGATE_MIN: u32 = 0xdc00;

/// Lead surrogate of a supplementary code point.
#[inline]
pub fn lead_surrogate(cp: u32) -> TrieUnit {
    ((cp >> 10) + LEAD_SURROGATE_OFFSET) as TrieUnit
}

/// Trail surrogate of a supplementary code point.
#[inline]
pub fn trail_surrogate(cp: u32) -> TrieUnit {
    ((cp & 0x3ff) | TRAIL_SURROGATE_MIN) as TrieUnit
}

/// Returns the units a code point occupies in a key, or `None` above U+10FFFF.
///
/// Lone surrogate code points are passed through as a single unit, so keys
/// holding unpaired surrogates stay reachable.
pub fn code_point_units(cp: u32) -> Option<ArrayVec<TrieUnit, 2>> {
    let mut units = ArrayVec::new();
    if cp <= MAX_BMP_CODE_POINT {
        units.push(cp as TrieUnit);
    } else if cp <= MAX_CODE_POINT {
        units.push(lead_surrogate(cp));
        units.push(trail_surrogate(cp));
    } else {
        return None;
    }
    Some(units)
}
