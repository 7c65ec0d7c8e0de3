//! Fixed dataset seeded into the stores at startup.

use super::models::{Performer, Release};

/// The performers present at process start.
#[must_use]
pub fn performers() -> Vec<Performer> {
    vec![
        Performer::new(1, "Alice"),
        Performer::new(2, "Bella"),
        Performer::new(3, "Chris"),
        Performer::new(4, "Daisy"),
        Performer::new(5, "Ellen"),
    ]
}

/// The releases present at process start. Every one references a seeded
/// performer.
#[must_use]
pub fn releases() -> Vec<Release> {
    vec![
        Release::new(1, "Alice's 1st Album", 1),
        Release::new(2, "Alice's 2nd Album", 1),
        Release::new(3, "Bella's 1st Album", 2),
    ]
}
