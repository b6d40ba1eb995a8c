//! Boxes as the packer sees them: waiting in the queue, then placed.

use boxpack_core::{BoxRect, Coord, PlacementPhase};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box that has not been placed yet.
///
/// `sequence` is the box's position in the input and is its identity for
/// the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PendingBox {
    /// Position in the input sequence.
    pub sequence: usize,
    /// Width as handed to the packer.
    pub width: Coord,
    /// Height as handed to the packer.
    pub height: Coord,
}

impl PendingBox {
    /// Creates a pending box.
    pub fn new(sequence: usize, width: Coord, height: Coord) -> Self {
        Self {
            sequence,
            width,
            height,
        }
    }

    /// Returns the area.
    pub fn area(&self) -> Coord {
        self.width * self.height
    }

    /// Returns an unplaced rectangle of the same size.
    pub fn rect(&self) -> BoxRect {
        BoxRect::new(self.width, self.height)
    }
}

/// A box with its final position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedBox {
    /// Position in the input sequence.
    pub sequence: usize,
    /// Final rectangle.
    pub rect: BoxRect,
    /// Whether width and height were swapped at placement time.
    pub rotated: bool,
    /// The step that placed it.
    pub phase: PlacementPhase,
}

impl PlacedBox {
    /// Places a pending box at `(x, y)`, optionally turned on its side.
    pub fn new(
        pending: &PendingBox,
        x: Coord,
        y: Coord,
        rotated: bool,
        phase: PlacementPhase,
    ) -> Self {
        let mut rect = pending.rect();
        if rotated {
            rect = rect.rotated();
        }
        rect.x = x;
        rect.y = y;

        Self {
            sequence: pending.sequence,
            rect,
            rotated,
            phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_box() {
        let pending = PendingBox::new(3, 4, 8);
        assert_eq!(pending.area(), 32);
        assert_eq!(pending.rect(), BoxRect::at(0, 0, 4, 8));
    }

    #[test]
    fn test_placed_box_rotation() {
        let pending = PendingBox::new(2, 4, 8);

        let upright = PlacedBox::new(&pending, 16, 8, false, PlacementPhase::FreeSpace);
        assert_eq!(upright.rect, BoxRect::at(16, 8, 4, 8));

        let turned = PlacedBox::new(&pending, 12, 8, true, PlacementPhase::FreeSpace);
        assert_eq!(turned.rect, BoxRect::at(12, 8, 8, 4));
        assert!(turned.rotated);
        assert_eq!(turned.sequence, 2);
    }
}
