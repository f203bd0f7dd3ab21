#![no_main]

use byteorder::BigEndian;
use dictrie::TrieBlob;
use libfuzzer_sys::fuzz_target;
use std::hint::black_box;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    let mut buf = Cursor::new(data);
    let blob = match TrieBlob::from_reader::<BigEndian, _>(&mut buf) {
        Ok(v) => v,
        Err(_) => return,
    };

    // Every offset is a possible root; walking from it must never panic.
    for offset in 0..blob.len().min(64) {
        let mut cursor = blob.cursor(offset);
        for &unit in blob.words().iter().take(32) {
            if !cursor.next(unit) {
                break;
            }
            black_box(cursor.contains());
        }
        black_box(cursor.contains());
    }
});
