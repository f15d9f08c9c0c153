//! Shared rosters for unit tests.

use crate::availability::Availability;
use crate::roster::{Person, Roster};

/// Four members where AB + CD = 10, AC + BD = 4 and AD + BC = 2.
///
/// Every pair shares one block on a day no other pair uses: AB on Sunday
/// and CD on Monday (6 slots, 5 each), AC on Tuesday and BD on Wednesday
/// (3 slots, 2 each), AD on Thursday and BC on Friday (2 slots, 1 each).
pub fn four_person_roster() -> Roster {
    let p = |id: &str, days: [u32; 7]| Person::new(id, id, Availability::new(days).unwrap());
    Roster::new(vec![
        p("A", [0b111111, 0, 0b111, 0, 0b11, 0, 0]),
        p("B", [0b111111, 0, 0, 0b111, 0, 0b11, 0]),
        p("C", [0, 0b111111, 0b111, 0, 0, 0b11, 0]),
        p("D", [0, 0b111111, 0, 0b111, 0b11, 0, 0]),
    ])
    .unwrap()
}

/// Members with availability only on Sunday, named `A`, `B`, ...
pub fn sunday_roster(masks: &[u32]) -> Roster {
    let people = masks
        .iter()
        .enumerate()
        .map(|(i, &m)| {
            let id = char::from(b'A' + i as u8).to_string();
            Person::new(id.clone(), id, Availability::new([m, 0, 0, 0, 0, 0, 0]).unwrap())
        })
        .collect();
    Roster::new(people).unwrap()
}
