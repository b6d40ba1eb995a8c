//! # boxpack
//!
//! Strip packing for axis-aligned rectangles: every box goes into one bin
//! whose height is fixed by the tallest box, and the bin is kept as narrow as
//! a greedy heuristic with free-space reuse can manage.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxpack::packer::Packer;
//! use boxpack::{Item, Solver};
//!
//! let items = vec![Item::new("tall", 4, 10), Item::new("short", 4, 6).with_quantity(3)];
//! let result = Packer::default_config().solve(&items).unwrap();
//!
//! assert_eq!(result.bin.area(), 120);
//! ```
//!
//! ## Feature Flags
//!
//! - `packer` (default): the packing engine
//! - `serde`: Serialization support

/// Shared model: items, placements, results and configuration.
pub use boxpack_core as core;

/// The greedy strip packer.
#[cfg(feature = "packer")]
pub use boxpack_packer as packer;

// Re-export commonly used types at root level
pub use boxpack_core::{
    Bin, BoxRect, Config, Error, Item, OrientationPolicy, PackResult, Placement, Result, Solver,
};
