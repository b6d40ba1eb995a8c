//! Free-space index: leftover strips of the bin that later boxes can reuse.
//!
//! A [`FreeRegion`] records only its left edge, bottom edge and height. Its
//! width is implicit: it always reaches the bin's current right edge, so
//! every region stretches as the bin grows.
//!
//! Regions live in a [`FreeSpaceIndex`] ordered by `(x, y)`. A region's
//! position is its key, so a region is never edited in place: trimming one
//! yields a replacement region that goes into a rebuilt index.

use boxpack_core::{Bin, Coord};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A strip of unused space reaching from `x` to the bin's right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FreeRegion {
    /// Left edge.
    pub x: Coord,
    /// Bottom edge.
    pub y: Coord,
    /// Vertical extent.
    pub height: Coord,
}

impl FreeRegion {
    /// Creates a new region.
    pub fn new(x: Coord, y: Coord, height: Coord) -> Self {
        Self { x, y, height }
    }

    /// Returns the y coordinate just above the region.
    pub fn top(&self) -> Coord {
        self.y + self.height
    }

    /// Returns the horizontal room left in this region.
    pub fn free_width(&self, bin: &Bin) -> Coord {
        bin.width - self.x
    }

    /// Checks if a box fits in one of its two orientations.
    ///
    /// The longer side must fit along the larger of free width and region
    /// height, and the shorter side along the smaller.
    pub fn fits(&self, width: Coord, height: Coord, bin: &Bin) -> bool {
        let free_width = self.free_width(bin);
        height <= free_width.max(self.height) && width <= free_width.min(self.height)
    }

    /// Checks if this region covers all of `other`.
    pub fn dominates(&self, other: &FreeRegion) -> bool {
        self.x <= other.x && self.y <= other.y && self.top() >= other.top()
    }

    fn key(&self) -> (Coord, Coord) {
        (self.x, self.y)
    }
}

/// Free regions ordered by `(x, y)`, at most one per position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeSpaceIndex {
    regions: BTreeMap<(Coord, Coord), Coord>,
}

impl FreeSpaceIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if there are no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Inserts a region unless its position is already taken.
    ///
    /// Returns false (and leaves the index unchanged) if a region already
    /// starts at the same `(x, y)`, or if the region has no height.
    pub fn insert(&mut self, region: FreeRegion) -> bool {
        if region.height <= 0 || self.regions.contains_key(&region.key()) {
            return false;
        }
        self.regions.insert(region.key(), region.height);
        true
    }

    /// Inserts a region, keeping the taller one if the position is taken.
    pub fn merge(&mut self, region: FreeRegion) {
        if region.height <= 0 {
            return;
        }
        let height = self.regions.entry(region.key()).or_insert(region.height);
        *height = (*height).max(region.height);
    }

    /// Iterates over the regions in `(x, y)` order.
    pub fn iter(&self) -> impl Iterator<Item = FreeRegion> + '_ {
        self.regions
            .iter()
            .map(|(&(x, y), &height)| FreeRegion::new(x, y, height))
    }

    /// Checks if some region already covers the candidate.
    pub fn is_redundant(&self, candidate: &FreeRegion) -> bool {
        self.iter()
            .take_while(|region| region.x <= candidate.x)
            .any(|region| region.dominates(candidate))
    }
}

impl FromIterator<FreeRegion> for FreeSpaceIndex {
    fn from_iter<I: IntoIterator<Item = FreeRegion>>(iter: I) -> Self {
        let mut index = Self::new();
        for region in iter {
            index.merge(region);
        }
        index
    }
}
