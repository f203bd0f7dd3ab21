//! Hand-serialized tries shared by the tests.
//!
//! Each fixture lists its keys; comments give the word index of every node.

use crate::types::{TrieUnit, TrieValue};

/// `"a" -> 1, "ab" -> 2, "abc" -> 3, "b" -> 10`
pub const ABC: &[TrieUnit] = &[
    0x0000, // 0: list of 2, 'a' carries a 1-word jump
    0x61,   // 1: 'a'
    0x0002, // 2: jump to 5
    0x62,   // 3: 'b', last entry
    0x3435, // 4: final value 10
    0x3422, // 5: intermediate value 1
    0x3408, // 6: linear match of 1
    0x62,   // 7: 'b'
    0x3424, // 8: intermediate value 2
    0x3408, // 9: linear match of 1
    0x63,   // 10: 'c'
    0x3427, // 11: final value 3
];

pub const ABC_KEYS: &[(&str, TrieValue)] = &[("a", 1), ("ab", 2), ("abc", 3), ("b", 10)];

/// Three-way branch on 'm' with values of every compact and fixed width:
/// `"a" -> 5, "c" -> 0x12345678, "m" -> 7, "x" -> 0x12345, "z" -> 20000`
pub const THREE_WAY: &[TrieUnit] = &[
    0x3404, // 0: three-way, 1-word jump, 1-word final equals value
    0x6d,   // 1: pivot 'm'
    0x0008, // 2: less-than jump to 11
    0x0007, // 3: 'm' -> 7
    0x0003, // 4: greater-than: list of 2, 'x' final 2 words
    0x78,   // 5: 'x'
    0x0001, // 6
    0x2345, // 7: 'x' -> 0x12345
    0x7a,   // 8: 'z', last entry
    0xb421, // 9: final value, two units
    0x4e20, // 10: 20000
    0x0002, // 11: list of 2, 'a' final 1 word
    0x61,   // 12: 'a'
    0x0005, // 13: 'a' -> 5
    0x63,   // 14: 'c', last entry
    0xffff, // 15: final value, three units
    0x1234, // 16
    0x5678, // 17
];

pub const THREE_WAY_KEYS: &[(&str, TrieValue)] = &[
    ("a", 5),
    ("c", 0x1234_5678),
    ("m", 7),
    ("x", 0x12345),
    ("z", 20000),
];

/// Three-way branches chained through their less-than edges, with a jump as
/// the equals value of the root:
/// `"a" -> 9, "b" -> 1, "c" -> 6, "d" -> 2, "e" -> 8, "f" -> 3, "fa" -> 4, "h" -> 5, "i" -> 7`
pub const CHAINED: &[TrieUnit] = &[
    0x3400, // 0: three-way, 1-word jump, 1-word non-final equals value
    0x66,   // 1: pivot 'f'
    0x000a, // 2: less-than jump to 13
    0x0005, // 3: 'f' jumps to 9
    0x0002, // 4: greater-than: list of 2, 'h' final 1 word
    0x68,   // 5: 'h'
    0x0005, // 6: 'h' -> 5
    0x69,   // 7: 'i', last entry
    0x342f, // 8: final value 7
    0x3426, // 9: intermediate value 3
    0x3408, // 10: linear match of 1
    0x61,   // 11: 'a'
    0x3429, // 12: final value 4
    0x3404, // 13: three-way, final equals value
    0x63,   // 14: pivot 'c'
    0x0006, // 15: less-than jump to 22
    0x0006, // 16: 'c' -> 6
    0x0002, // 17: greater-than: list of 2, 'd' final 1 word
    0x64,   // 18: 'd'
    0x0002, // 19: 'd' -> 2
    0x65,   // 20: 'e', last entry
    0x3431, // 21: final value 8
    0x0002, // 22: list of 2, 'a' final 1 word
    0x61,   // 23: 'a'
    0x0009, // 24: 'a' -> 9
    0x62,   // 25: 'b', last entry
    0x3423, // 26: final value 1
];

pub const CHAINED_KEYS: &[(&str, TrieValue)] = &[
    ("a", 9),
    ("b", 1),
    ("c", 6),
    ("d", 2),
    ("e", 8),
    ("f", 3),
    ("fa", 4),
    ("h", 5),
    ("i", 7),
];

/// List branch of 10 entries, so the bit table spills into a second word and
/// the 9th pair comes from the lead unit:
/// `"0" -> 100 ... "7" -> 107, "8" -> 0x10000, "9" -> 109`
pub const LONG_LIST: &[TrieUnit] = &[
    0x2003, // 0: list of 10, 9th pair final 2 words
    0xaaaa, // 1: pairs 1..8 final 1 word
    0x30, 100, // 2
    0x31, 101, // 4
    0x32, 102, // 6
    0x33, 103, // 8
    0x34, 104, // 10
    0x35, 105, // 12
    0x36, 106, // 14
    0x37, 107, // 16
    0x38, 0x0001, 0x0000, // 18
    0x39,   // 21: '9', last entry
    0x34fb, // 22: final value 109
];

pub const LONG_LIST_KEYS: &[(&str, TrieValue)] = &[
    ("0", 100),
    ("1", 101),
    ("2", 102),
    ("3", 103),
    ("4", 104),
    ("5", 105),
    ("6", 106),
    ("7", 107),
    ("8", 0x10000),
    ("9", 109),
];

/// Root at offset 2, keys made of supplementary code points:
/// `"\u{1F600}" -> 42, "\u{1F601}" -> 43, "\u{1F601}x" -> 44`
pub const SURROGATES: &[TrieUnit] = &[
    0xffff, // 0: unrelated data before the root
    0xffff, // 1
    0x3408, // 2: root, linear match of 1
    0xd83d, // 3: lead surrogate
    0x0002, // 4: list of 2, first entry final 1 word
    0xde00, // 5
    0x002a, // 6: -> 42
    0xde01, // 7: last entry
    0x3476, // 8: intermediate value 43
    0x3408, // 9: linear match of 1
    0x78,   // 10: 'x'
    0x3479, // 11: final value 44
];

pub const SURROGATES_START: usize = 2;

pub const SURROGATES_KEYS: &[(&str, TrieValue)] =
    &[("\u{1F600}", 42), ("\u{1F601}", 43), ("\u{1F601}x", 44)];

/// Three-way branches with 2-word jumps and 2-word equals values, a jump on
/// the root's equals edge and a final value on the inner one:
/// `"a" -> 3, "b" -> 1, "c" -> 0x10000, "d" -> 2, "e" -> 8, "m" -> 4, "mn" -> 6, "x" -> 5, "z" -> 10`
pub const WIDE_THREE_WAY: &[TrieUnit] = &[
    0x3403, // 0: three-way, 2-word jump, 2-word non-final equals value
    0x6d,   // 1: pivot 'm'
    0x0000, // 2
    0x000b, // 3: less-than jump to 15
    0x0000, // 4
    0x0005, // 5: 'm' jumps to 11
    0x0002, // 6: greater-than: list of 2, 'x' final 1 word
    0x78,   // 7: 'x'
    0x0005, // 8: 'x' -> 5
    0x7a,   // 9: 'z', last entry
    0x3435, // 10: final value 10
    0x3428, // 11: intermediate value 4
    0x3408, // 12: linear match of 1
    0x6e,   // 13: 'n'
    0x342d, // 14: final value 6
    0x3407, // 15: three-way, 2-word jump, 2-word final equals value
    0x63,   // 16: pivot 'c'
    0x0000, // 17
    0x0007, // 18: less-than jump to 26
    0x0001, // 19
    0x0000, // 20: 'c' -> 0x10000
    0x0002, // 21: greater-than: list of 2, 'd' final 1 word
    0x64,   // 22: 'd'
    0x0002, // 23: 'd' -> 2
    0x65,   // 24: 'e', last entry
    0x3431, // 25: final value 8
    0x0002, // 26: list of 2, 'a' final 1 word
    0x61,   // 27: 'a'
    0x0003, // 28: 'a' -> 3
    0x62,   // 29: 'b', last entry
    0x3423, // 30: final value 1
];

pub const WIDE_THREE_WAY_KEYS: &[(&str, TrieValue)] = &[
    ("a", 3),
    ("b", 1),
    ("c", 0x10000),
    ("d", 2),
    ("e", 8),
    ("m", 4),
    ("mn", 6),
    ("x", 5),
    ("z", 10),
];

/// `"" -> 77, "q" -> 78, "qrst" -> 79`
pub const EMPTY_KEY: &[TrieUnit] = &[
    0x34ba, // 0: intermediate value 77
    0x3408, // 1: linear match of 1
    0x71,   // 2: 'q'
    0x34bc, // 3: intermediate value 78
    0x340a, // 4: linear match of 3
    0x72,   // 5: 'r'
    0x73,   // 6: 's'
    0x74,   // 7: 't'
    0x34bf, // 8: final value 79
];

pub const EMPTY_KEY_KEYS: &[(&str, TrieValue)] = &[("", 77), ("q", 78), ("qrst", 79)];

/// Only the empty key, with value 5.
pub const ONLY_EMPTY: &[TrieUnit] = &[0x342b];

pub fn units(key: &str) -> Vec<TrieUnit> {
    key.encode_utf16().collect()
}

/// Serializes words for the loader tests.
pub fn to_bytes_be(words: &[TrieUnit]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_be_bytes()).collect()
}

pub fn to_bytes_le(words: &[TrieUnit]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}
