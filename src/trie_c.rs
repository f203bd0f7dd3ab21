//! C interface to [`TrieCursor`].
//!
//! The caller owns the trie words and must keep them alive and unchanged for
//! as long as any cursor created over them exists.

use core::ptr;
use core::slice;

use libc::{c_int, size_t};

use crate::cursor::TrieCursor;
use crate::types::{TrieUnit, TrieValue, TRIE_UNIT_TERM};

/// Opaque cursor handle.
pub struct DictrieCursor {
    cursor: TrieCursor<'static>,
}

unsafe fn cursor_mut<'a>(handle: *mut DictrieCursor) -> Option<&'a mut TrieCursor<'static>> {
    handle.as_mut().map(|handle| &mut handle.cursor)
}

/// Creates a cursor over `len` words whose root node is at `offset`.
///
/// Returns NULL if `words` is NULL or `offset` is not inside the words.
#[no_mangle]
pub unsafe extern "C" fn dictrie_cursor_new(
    words: *const TrieUnit,
    len: size_t,
    offset: size_t,
) -> *mut DictrieCursor {
    if words.is_null() || offset >= len {
        return ptr::null_mut();
    }
    let words = slice::from_raw_parts(words, len);
    Box::into_raw(Box::new(DictrieCursor {
        cursor: TrieCursor::new(words, offset),
    }))
}

#[no_mangle]
pub unsafe extern "C" fn dictrie_cursor_free(cursor: *mut DictrieCursor) {
    if !cursor.is_null() {
        drop(Box::from_raw(cursor));
    }
}

#[no_mangle]
pub unsafe extern "C" fn dictrie_cursor_reset(cursor: *mut DictrieCursor) {
    if let Some(cursor) = cursor_mut(cursor) {
        cursor.reset();
    }
}

#[no_mangle]
pub unsafe extern "C" fn dictrie_cursor_next(cursor: *mut DictrieCursor, unit: TrieUnit) -> bool {
    cursor_mut(cursor).is_some_and(|cursor| cursor.next(unit))
}

#[no_mangle]
pub unsafe extern "C" fn dictrie_cursor_next_for_code_point(
    cursor: *mut DictrieCursor,
    cp: u32,
) -> bool {
    cursor_mut(cursor).is_some_and(|cursor| cursor.next_for_code_point(cp))
}

#[no_mangle]
pub unsafe extern "C" fn dictrie_cursor_contains(cursor: *mut DictrieCursor) -> bool {
    cursor_mut(cursor).is_some_and(|cursor| cursor.contains())
}

/// Feeds `length` units of `s`, or all units up to a NUL if `length` is
/// negative, then reports whether they complete a key.
#[no_mangle]
pub unsafe extern "C" fn dictrie_cursor_contains_next(
    cursor: *mut DictrieCursor,
    s: *const TrieUnit,
    length: c_int,
) -> bool {
    let Some(cursor) = cursor_mut(cursor) else {
        return false;
    };
    if s.is_null() {
        return length <= 0 && cursor.contains();
    }
    let len = match usize::try_from(length) {
        Ok(len) => len,
        Err(_) => {
            let mut len = 0;
            while *s.add(len) != TRIE_UNIT_TERM {
                len += 1;
            }
            len
        }
    };
    cursor.contains_next(slice::from_raw_parts(s, len))
}

/// Value of the key matched so far; only meaningful after a `contains`
/// call returned true.
#[no_mangle]
pub unsafe extern "C" fn dictrie_cursor_get_value(cursor: *const DictrieCursor) -> TrieValue {
    cursor.as_ref().map_or(0, |handle| handle.cursor.value())
}
