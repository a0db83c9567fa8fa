use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

/// Identifiers reserved at the bottom of the person space for the fixed
/// system rows, committed before any generated person.
pub const SENTINEL_ROWS: u64 = 2;

/// Row counter for one entity category.
///
/// Categories that share an identifier space (person, location, event) own
/// contiguous sub-ranges of it, allocated in declaration order; all other
/// categories own a plain `1..=count` space of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Counter {
    Users,
    Monsters,
    TorturedSouls,
    WorkingSouls,
    NondistributedSouls,
    Levels,
    PitLocations,
    OuterLocations,
    Tortures,
    SinTypes,
    Statuses,
    Complaints,
    DistributedEvents,
    NondistributedEvents,
    Works,
    SinAssignments,
    WorkAssignments,
}

const PERSON_SPACE: &[Counter] = &[
    Counter::Users,
    Counter::Monsters,
    Counter::TorturedSouls,
    Counter::WorkingSouls,
    Counter::NondistributedSouls,
];

const LOCATION_SPACE: &[Counter] = &[Counter::PitLocations, Counter::OuterLocations];

const EVENT_SPACE: &[Counter] = &[Counter::DistributedEvents, Counter::NondistributedEvents];

impl Counter {
    pub fn as_str(self) -> &'static str {
        match self {
            Counter::Users => "users",
            Counter::Monsters => "monsters",
            Counter::TorturedSouls => "tortured_souls",
            Counter::WorkingSouls => "working_souls",
            Counter::NondistributedSouls => "nondistributed_souls",
            Counter::Levels => "levels",
            Counter::PitLocations => "pit_locations",
            Counter::OuterLocations => "outer_locations",
            Counter::Tortures => "tortures",
            Counter::SinTypes => "sin_types",
            Counter::Statuses => "statuses",
            Counter::Complaints => "complaints",
            Counter::DistributedEvents => "distributed_events",
            Counter::NondistributedEvents => "nondistributed_events",
            Counter::Works => "works",
            Counter::SinAssignments => "sin_assignments",
            Counter::WorkAssignments => "work_assignments",
        }
    }

    /// Categories sharing this counter's identifier space, in allocation
    /// order. Singleton categories occupy a space of their own.
    fn space(self) -> &'static [Counter] {
        match self {
            Counter::Users
            | Counter::Monsters
            | Counter::TorturedSouls
            | Counter::WorkingSouls
            | Counter::NondistributedSouls => PERSON_SPACE,
            Counter::PitLocations | Counter::OuterLocations => LOCATION_SPACE,
            Counter::DistributedEvents | Counter::NondistributedEvents => EVENT_SPACE,
            Counter::Levels => &[Counter::Levels],
            Counter::Tortures => &[Counter::Tortures],
            Counter::SinTypes => &[Counter::SinTypes],
            Counter::Statuses => &[Counter::Statuses],
            Counter::Complaints => &[Counter::Complaints],
            Counter::Works => &[Counter::Works],
            Counter::SinAssignments => &[Counter::SinAssignments],
            Counter::WorkAssignments => &[Counter::WorkAssignments],
        }
    }

    fn base(self) -> u64 {
        if PERSON_SPACE.contains(&self) {
            SENTINEL_ROWS
        } else {
            0
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive identifier range owned by a category. Never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub low: u64,
    pub high: u64,
}

impl IdRange {
    pub fn count(&self) -> u64 {
        self.high - self.low + 1
    }

    pub fn contains(&self, id: u64) -> bool {
        self.low <= id && id <= self.high
    }

    pub fn ids(self) -> std::ops::RangeInclusive<u64> {
        self.low..=self.high
    }
}

/// Tracks rows committed per category and derives the identifier ranges they
/// own. Owned by the pipeline driver; mutated only by the executing step.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    counts: BTreeMap<Counter, u64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows committed so far for `counter`.
    pub fn committed(&self, counter: Counter) -> u64 {
        self.counts.get(&counter).copied().unwrap_or(0)
    }

    /// Commits one row and returns the identifier assigned to it.
    ///
    /// Fails when a later category in the same space already holds rows:
    /// the sub-ranges are contiguous, so a late commit would overlap them.
    pub fn commit(&mut self, counter: Counter) -> Result<u64> {
        if let Some(later) = self.committed_successor(counter) {
            return Err(Error::OutOfOrderCommit { counter, later });
        }
        let id = counter.base() + self.preceding(counter) + self.committed(counter) + 1;
        *self.counts.entry(counter).or_insert(0) += 1;
        Ok(id)
    }

    /// Inclusive identifier range currently owned by `counter`.
    ///
    /// Asking before any row of the category exists is a generation-order
    /// defect and fails rather than yielding a degenerate range.
    pub fn valid_range(&self, counter: Counter) -> Result<IdRange> {
        let count = self.committed(counter);
        if count == 0 {
            return Err(Error::EmptyRange(counter));
        }
        let low = counter.base() + self.preceding(counter) + 1;
        Ok(IdRange {
            low,
            high: low + count - 1,
        })
    }

    /// Highest identifier assigned in the shared person space so far.
    pub fn person_cursor(&self) -> u64 {
        SENTINEL_ROWS
            + PERSON_SPACE
                .iter()
                .map(|counter| self.committed(*counter))
                .sum::<u64>()
    }

    fn preceding(&self, counter: Counter) -> u64 {
        counter
            .space()
            .iter()
            .take_while(|other| **other != counter)
            .map(|other| self.committed(*other))
            .sum()
    }

    fn committed_successor(&self, counter: Counter) -> Option<Counter> {
        counter
            .space()
            .iter()
            .skip_while(|other| **other != counter)
            .skip(1)
            .find(|other| self.committed(**other) > 0)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_space_ids_are_sequential_after_sentinels() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.commit(Counter::Users), Ok(3));
        assert_eq!(ids.commit(Counter::Users), Ok(4));
        assert_eq!(ids.commit(Counter::Monsters), Ok(5));
        assert_eq!(ids.commit(Counter::TorturedSouls), Ok(6));
        assert_eq!(ids.person_cursor(), 6);
    }

    #[test]
    fn ranges_partition_the_person_space() {
        let mut ids = IdAllocator::new();
        for _ in 0..5 {
            ids.commit(Counter::Users).expect("commit user");
        }
        for _ in 0..3 {
            ids.commit(Counter::Monsters).expect("commit monster");
        }
        for _ in 0..4 {
            ids.commit(Counter::TorturedSouls).expect("commit soul");
        }

        let users = ids.valid_range(Counter::Users).expect("user range");
        let monsters = ids.valid_range(Counter::Monsters).expect("monster range");
        let souls = ids.valid_range(Counter::TorturedSouls).expect("soul range");

        assert_eq!((users.low, users.high), (3, 7));
        assert_eq!((monsters.low, monsters.high), (8, 10));
        assert_eq!((souls.low, souls.high), (11, 14));
        assert_eq!(ids.person_cursor(), souls.high);
    }

    #[test]
    fn standalone_spaces_start_at_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.commit(Counter::Tortures), Ok(1));
        assert_eq!(ids.commit(Counter::Tortures), Ok(2));
        let range = ids.valid_range(Counter::Tortures).expect("torture range");
        assert_eq!((range.low, range.high), (1, 2));
    }

    #[test]
    fn location_space_splits_pit_and_outer() {
        let mut ids = IdAllocator::new();
        for _ in 0..3 {
            ids.commit(Counter::PitLocations).expect("commit pit");
        }
        assert_eq!(ids.commit(Counter::OuterLocations), Ok(4));
        let pit = ids.valid_range(Counter::PitLocations).expect("pit range");
        let outer = ids.valid_range(Counter::OuterLocations).expect("outer range");
        assert_eq!((pit.low, pit.high), (1, 3));
        assert_eq!((outer.low, outer.high), (4, 4));
    }

    #[test]
    fn late_commit_into_an_earlier_category_fails() {
        let mut ids = IdAllocator::new();
        ids.commit(Counter::Users).expect("commit user");
        ids.commit(Counter::Monsters).expect("commit monster");
        assert_eq!(
            ids.commit(Counter::Users),
            Err(Error::OutOfOrderCommit {
                counter: Counter::Users,
                later: Counter::Monsters,
            })
        );
    }

    #[test]
    fn range_of_an_empty_category_fails() {
        let ids = IdAllocator::new();
        assert_eq!(
            ids.valid_range(Counter::Works),
            Err(Error::EmptyRange(Counter::Works))
        );
    }
}
