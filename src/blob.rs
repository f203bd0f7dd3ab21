//! Owned trie words loaded from serialized bytes.

use alloc::vec;
use alloc::vec::Vec;

use byteorder::ByteOrder;
use tracing::{debug, trace};

use crate::cursor::TrieCursor;
use crate::types::{TrieOffset, TrieUnit};

#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("trie data is empty")]
    Empty,

    /// Serialized tries are whole 16-bit words.
    #[error("trie data has odd length {len}")]
    OddLength { len: usize },

    #[error("root offset {offset} is outside the trie ({len} words)")]
    OffsetOutOfBounds { offset: TrieOffset, len: usize },

    #[cfg(feature = "std")]
    #[error("failed to read trie data")]
    Io(#[from] std::io::Error),
}

/// Trie words owned in memory.
///
/// Cursors created with [`cursor`](Self::cursor) borrow the words, so a
/// single blob can back any number of cursors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrieBlob {
    words: Vec<TrieUnit>,
}

impl TrieBlob {
    pub fn from_words(words: Vec<TrieUnit>) -> Self {
        TrieBlob { words }
    }

    /// Reads consecutive 16-bit words stored in byte order `B`.
    pub fn from_bytes<B: ByteOrder>(bytes: &[u8]) -> Result<Self, BlobError> {
        if bytes.is_empty() {
            debug!("rejecting empty trie data");
            return Err(BlobError::Empty);
        }
        if bytes.len() % 2 != 0 {
            debug!(len = bytes.len(), "rejecting trie data with a trailing byte");
            return Err(BlobError::OddLength { len: bytes.len() });
        }
        let mut words = vec![0; bytes.len() / 2];
        B::read_u16_into(bytes, &mut words);
        trace!(words = words.len(), "loaded trie data");
        Ok(TrieBlob { words })
    }

    /// Reads the rest of `reader` as trie words in byte order `B`.
    #[cfg(feature = "std")]
    pub fn from_reader<B: ByteOrder, R: std::io::Read>(reader: &mut R) -> Result<Self, BlobError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes::<B>(&bytes)
    }

    pub fn words(&self) -> &[TrieUnit] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks that `offset` can hold a root node.
    pub fn check_offset(&self, offset: TrieOffset) -> Result<(), BlobError> {
        if offset < self.words.len() {
            Ok(())
        } else {
            Err(BlobError::OffsetOutOfBounds {
                offset,
                len: self.words.len(),
            })
        }
    }

    /// Creates a cursor whose root node starts at `offset`.
    pub fn cursor(&self, offset: TrieOffset) -> TrieCursor<'_> {
        TrieCursor::new(&self.words, offset)
    }
}

impl From<Vec<TrieUnit>> for TrieBlob {
    fn from(words: Vec<TrieUnit>) -> Self {
        TrieBlob::from_words(words)
    }
}

impl AsRef<[TrieUnit]> for TrieBlob {
    fn as_ref(&self) -> &[TrieUnit] {
        &self.words
    }
}
