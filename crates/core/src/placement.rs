//! Placement representation for positioned boxes.

use crate::geometry::{BoxRect, Coord, GeometryId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which step of the packing run placed a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlacementPhase {
    /// The first (tallest) box, which fixes the bin height.
    Anchor,
    /// Appended at the bin's right edge.
    Greedy,
    /// Dropped into leftover space inside the bin.
    FreeSpace,
}

/// Represents the final position of one box instance within the bin.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The ID of the placed item.
    pub geometry_id: GeometryId,

    /// Instance index (0-based) when multiple copies exist.
    pub instance: usize,

    /// Position of this instance in the expanded input sequence.
    pub sequence: usize,

    /// Final rectangle, with width and height as placed.
    pub rect: BoxRect,

    /// Whether the box was turned on its side relative to the input handed to the packer.
    pub rotated: bool,

    /// The step that placed it.
    pub phase: PlacementPhase,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(
        geometry_id: impl Into<GeometryId>,
        instance: usize,
        sequence: usize,
        rect: BoxRect,
        phase: PlacementPhase,
    ) -> Self {
        Self {
            geometry_id: geometry_id.into(),
            instance,
            sequence,
            rect,
            rotated: false,
            phase,
        }
    }

    /// Sets the rotated flag.
    pub fn with_rotated(mut self, rotated: bool) -> Self {
        self.rotated = rotated;
        self
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> Coord {
        self.rect.x
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> Coord {
        self.rect.y
    }

    /// Returns the placed width.
    pub fn width(&self) -> Coord {
        self.rect.width
    }

    /// Returns the placed height.
    pub fn height(&self) -> Coord {
        self.rect.height
    }

    /// Returns the area.
    pub fn area(&self) -> Coord {
        self.rect.area()
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Number of rotated placements.
    pub rotated_count: usize,
    /// Placements made by the anchor step (0 or 1).
    pub anchor_count: usize,
    /// Placements appended at the bin edge.
    pub greedy_count: usize,
    /// Placements made inside leftover space.
    pub free_space_count: usize,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            if p.rotated {
                stats.rotated_count += 1;
            }

            match p.phase {
                PlacementPhase::Anchor => stats.anchor_count += 1,
                PlacementPhase::Greedy => stats.greedy_count += 1,
                PlacementPhase::FreeSpace => stats.free_space_count += 1,
            }
        }

        stats
    }
}
