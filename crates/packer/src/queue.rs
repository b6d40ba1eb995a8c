//! Pending-box queue ordered tallest first.

use crate::boxes::PendingBox;
use boxpack_core::Coord;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Sort key of a pending box.
///
/// Orders by height descending, then area descending, then input sequence
/// ascending. The order is total, so equal boxes keep their input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueKey {
    height: Coord,
    area: Coord,
    sequence: usize,
}

impl QueueKey {
    /// Builds the key for a pending box.
    pub fn of(pending: &PendingBox) -> Self {
        Self {
            height: pending.height,
            area: pending.area(),
            sequence: pending.sequence,
        }
    }

    /// Returns the input sequence index this key refers to.
    pub fn sequence(&self) -> usize {
        self.sequence
    }
}

impl PartialOrd for QueueKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .height
            .cmp(&self.height)
            .then_with(|| other.area.cmp(&self.area))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Boxes waiting to be placed.
///
/// The head is the next greedy candidate, and iteration order is the scan
/// order of the free-space search.
#[derive(Debug, Clone, Default)]
pub struct PendingQueue {
    boxes: BTreeMap<QueueKey, PendingBox>,
}

impl PendingQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a box.
    pub fn push(&mut self, pending: PendingBox) {
        self.boxes.insert(QueueKey::of(&pending), pending);
    }

    /// Removes and returns the tallest box.
    pub fn pop_first(&mut self) -> Option<PendingBox> {
        self.boxes.pop_first().map(|(_, pending)| pending)
    }

    /// Removes the box with the given key.
    pub fn remove(&mut self, key: &QueueKey) -> Option<PendingBox> {
        self.boxes.remove(key)
    }

    /// Iterates over the boxes in queue order.
    pub fn iter(&self) -> impl Iterator<Item = (&QueueKey, &PendingBox)> {
        self.boxes.iter()
    }

    /// Returns the number of pending boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl FromIterator<PendingBox> for PendingQueue {
    fn from_iter<I: IntoIterator<Item = PendingBox>>(iter: I) -> Self {
        let mut queue = Self::new();
        for pending in iter {
            queue.push(pending);
        }
        queue
    }
}
