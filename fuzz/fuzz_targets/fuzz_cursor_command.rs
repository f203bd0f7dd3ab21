#![no_main]

use arbitrary::Arbitrary;
use dictrie::{TrieCursor, TrieUnit};
use libfuzzer_sys::fuzz_target;
use std::hint::black_box;

#[derive(Arbitrary, Debug)]
struct Input {
    pub words: Vec<TrieUnit>,
    pub start: u8,
    pub commands: Vec<Command>,
}

#[derive(Arbitrary, Debug)]
enum Command {
    Next { unit: TrieUnit },
    NextForCodePoint { cp: u32 },
    Contains,
    ContainsNext { units: Vec<TrieUnit> },
    ContainsNextTerminated { units: Vec<TrieUnit> },
    Reset,
    Snapshot,
}

fuzz_target!(|input: Input| {
    let mut cursor = TrieCursor::new(&input.words, usize::from(input.start));

    for command in input.commands.iter() {
        let was_stopped = cursor.is_stopped();
        match command {
            Command::Next { unit } => {
                let matched = cursor.next(*unit);
                // A stopped cursor stays stopped.
                assert!(!(was_stopped && matched));
                assert_eq!(matched, !cursor.is_stopped() || cursor.contains());
            }
            Command::NextForCodePoint { cp } => {
                let mut replay = cursor.clone();
                let matched = cursor.next_for_code_point(*cp);
                if let Some(c) = char::from_u32(*cp) {
                    let mut buf = [0; 2];
                    let expected = c.encode_utf16(&mut buf).iter().all(|&u| replay.next(u));
                    assert_eq!(matched, expected);
                    assert_eq!(cursor.position(), replay.position());
                }
            }
            Command::Contains => {
                black_box(cursor.contains());
            }
            Command::ContainsNext { units } => {
                black_box(cursor.contains_next(units));
            }
            Command::ContainsNextTerminated { units } => {
                black_box(cursor.contains_next_terminated(units));
            }
            Command::Reset => {
                cursor.reset();
                assert_eq!(cursor.position(), Some(usize::from(input.start)));
            }
            Command::Snapshot => {
                let mut snapshot = cursor.clone();
                assert_eq!(snapshot.contains(), cursor.clone().contains());
            }
        }
    }
});
