//! Core geometry types: input items, placed rectangles and the bin.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer coordinate type used for all positions and sizes.
pub type Coord = i64;

/// Unique identifier for an item.
pub type GeometryId = String;

/// A rectangular item to be packed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Unique identifier.
    id: GeometryId,

    /// Width of the box.
    width: Coord,

    /// Height of the box.
    height: Coord,

    /// Number of copies to place.
    #[cfg_attr(feature = "serde", serde(default = "default_quantity"))]
    quantity: usize,
}

#[cfg(feature = "serde")]
fn default_quantity() -> usize {
    1
}

impl Item {
    /// Creates a new item with the given ID and dimensions.
    pub fn new(id: impl Into<GeometryId>, width: Coord, height: Coord) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            quantity: 1,
        }
    }

    /// Sets the quantity to place.
    pub fn with_quantity(mut self, n: usize) -> Self {
        self.quantity = n;
        self
    }

    /// Returns the identifier.
    pub fn id(&self) -> &GeometryId {
        &self.id
    }

    /// Returns the width.
    pub fn width(&self) -> Coord {
        self.width
    }

    /// Returns the height.
    pub fn height(&self) -> Coord {
        self.height
    }

    /// Returns the number of copies to place.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Returns the area of a single copy.
    pub fn area(&self) -> Coord {
        self.width * self.height
    }

    /// Returns true if the item is at least as tall as it is wide.
    pub fn is_tall(&self) -> bool {
        self.height >= self.width
    }

    /// Returns a copy standing on its short side (height >= width).
    pub fn oriented_tall(&self) -> Self {
        let mut item = self.clone();
        if !item.is_tall() {
            std::mem::swap(&mut item.width, &mut item.height);
        }
        item
    }

    /// Validates the item.
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 || self.height < 1 {
            return Err(Error::InvalidGeometry(format!(
                "{}: dimensions must be positive, got {}x{}",
                self.id, self.width, self.height
            )));
        }

        if self.quantity == 0 {
            return Err(Error::InvalidGeometry(format!(
                "{}: quantity must be at least 1",
                self.id
            )));
        }

        Ok(())
    }
}

/// An axis-aligned rectangle at an integer position.
///
/// Used both for boxes in flight and for final placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxRect {
    /// Left edge.
    pub x: Coord,
    /// Bottom edge.
    pub y: Coord,
    /// Horizontal extent.
    pub width: Coord,
    /// Vertical extent.
    pub height: Coord,
}

impl BoxRect {
    /// Creates an unplaced rectangle at the origin.
    pub fn new(width: Coord, height: Coord) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Creates a rectangle at the given position.
    pub fn at(x: Coord, y: Coord, width: Coord, height: Coord) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the area.
    pub fn area(&self) -> Coord {
        self.width * self.height
    }

    /// Returns the y coordinate just above the rectangle.
    pub fn top(&self) -> Coord {
        self.y + self.height
    }

    /// Returns the x coordinate just right of the rectangle.
    pub fn right(&self) -> Coord {
        self.x + self.width
    }

    /// Returns the same rectangle turned on its side.
    pub fn rotated(&self) -> Self {
        Self {
            x: self.x,
            y: self.y,
            width: self.height,
            height: self.width,
        }
    }

    /// Checks if this rectangle shares a positive area with another.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &BoxRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }

    /// Checks if this rectangle lies fully inside the bin.
    pub fn is_within(&self, bin: &Bin) -> bool {
        bin.contains(self)
    }
}

/// The growing container all boxes are packed into.
///
/// Both dimensions only ever grow. In practice the height is fixed by the
/// first placement and only the width grows afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bin {
    /// Current width.
    pub width: Coord,
    /// Current height.
    pub height: Coord,
}

impl Bin {
    /// Creates a bin with the given dimensions.
    pub fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    /// Returns the area.
    pub fn area(&self) -> Coord {
        self.width * self.height
    }

    /// Returns true if nothing has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Grows the bin so that it covers the given rectangle.
    pub fn extend_to(&mut self, rect: &BoxRect) {
        self.width = self.width.max(rect.right());
        self.height = self.height.max(rect.top());
    }

    /// Checks if a rectangle lies within `[0, width) x [0, height)`.
    pub fn contains(&self, rect: &BoxRect) -> bool {
        rect.x >= 0 && rect.y >= 0 && rect.right() <= self.width && rect.top() <= self.height
    }
}
