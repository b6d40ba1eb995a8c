//! # boxpack Packer
//!
//! Strip packing of rectangular boxes into the smallest bin of fixed height.
//!
//! The tallest box is placed first and fixes the bin height. After that the
//! packer alternates between two steps:
//!
//! 1. **Greedy**: append the tallest pending box at the bin's right edge.
//!    This is the only step that grows the bin.
//! 2. **Free space**: repeatedly drop the largest pending box that fits into
//!    a leftover region, until none fits.
//!
//! Leftover space is tracked in a [`FreeSpaceIndex`] of regions that always
//! reach the bin's right edge, so they widen as the bin grows.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxpack_packer::{Item, Packer, Solver};
//!
//! let items = vec![
//!     Item::new("anchor", 16, 16),
//!     Item::new("mid", 8, 8),
//!     Item::new("slim", 4, 8),
//!     Item::new("small", 4, 4).with_quantity(2),
//! ];
//!
//! let result = Packer::default_config().solve(&items).unwrap();
//! assert_eq!((result.bin.width, result.bin.height), (24, 16));
//! assert_eq!(result.wasted_area(), 0);
//! ```
//!
//! The algorithm can also be driven directly with [`pack`]:
//!
//! ```rust
//! use boxpack_packer::{pack, BoxRect};
//!
//! let packing = pack(&[BoxRect::new(3, 7)]);
//! assert_eq!(packing.placed[0].rect, BoxRect::at(0, 0, 3, 7));
//! ```

pub mod boxes;
pub mod free_space;
pub mod greedy;
pub mod packer;
pub mod queue;
pub mod search;
pub mod update;

// Re-exports
pub use boxes::{PendingBox, PlacedBox};
pub use free_space::{FreeRegion, FreeSpaceIndex};
pub use packer::{pack, Packer, Packing};
pub use queue::{PendingQueue, QueueKey};
pub use search::{find_best_fit, Candidate};
pub use update::{trim_region, updated_regions, Trim};
pub use boxpack_core::{
    Bin, BoxRect, Config, Coord, Error, Item, OrientationPolicy, PackResult, Placement,
    PlacementPhase, Result, Solver,
};
