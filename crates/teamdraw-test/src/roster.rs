//! Input record fixtures.
//!
//! The standard captain list is C1..C4 (male) and C5..C8 (female). Pools are
//! named by prefix: `pool("V", 3)` yields V1, V2, V3.

use teamdraw_core::{DrawInput, Gender, Person, Record};

/// Eight captain records: C1..C4 labelled `M`, C5..C8 labelled `F`.
pub fn captains() -> Vec<Record> {
    (1..=8)
        .map(|i| Record::with_gender(format!("C{i}"), if i <= 4 { "M" } else { "F" }))
        .collect()
}

/// The standard captains as people, in team order.
pub fn captain_people() -> Vec<Person> {
    (1..=8)
        .map(|i| {
            let gender = if i <= 4 { Gender::Male } else { Gender::Female };
            Person::captain(format!("C{i}"), gender)
        })
        .collect()
}

/// `count` unlabelled records named `{prefix}1..={prefix}{count}`.
pub fn pool(prefix: &str, count: usize) -> Vec<Record> {
    (1..=count)
        .map(|i| Record::named(format!("{prefix}{i}")))
        .collect()
}

/// Standard captains plus veteran pool `V*`, rookie pool `R*` and other pool `G*`.
pub fn standard_input(veterans: usize, rookies: usize, others: usize) -> DrawInput {
    DrawInput {
        captains: captains(),
        veterans: pool("V", veterans),
        rookies: pool("R", rookies),
        others: pool("G", others),
    }
}
