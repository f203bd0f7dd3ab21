//! Read-only cursor over compact dictionary tries.
//!
//! A dictionary trie maps sequences of 16-bit units (usually UTF-16 strings)
//! to non-negative integers. It is serialized by an external builder into a
//! flat run of words (see [`format`]), and [`TrieCursor`] walks those words
//! one unit at a time without building any tree in memory.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use types::{
    TrieOffset, TrieUnit, TrieValue, MAX_BMP_CODE_POINT, MAX_CODE_POINT, TRIE_UNIT_TERM,
};

pub use blob::{BlobError, TrieBlob};
pub use cursor::TrieCursor;

pub mod blob;
#[deny(unsafe_code)]
pub mod cursor;
pub mod format;
#[deny(unsafe_code)]
mod node;
#[cfg(feature = "cffi")]
pub mod trie_c;
pub mod types;
pub mod utf16;

#[cfg(all(test, feature = "std"))]
mod testutils;
