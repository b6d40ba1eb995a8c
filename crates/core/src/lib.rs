//! # boxpack Core
//!
//! Shared model for the boxpack strip packer.
//!
//! This crate provides the types exchanged between the packing engine and its
//! callers: input items, placed rectangles, the growing bin, results,
//! configuration and the error type.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Item`], [`BoxRect`], [`Bin`]
//! - **Placements**: [`Placement`], [`PlacementPhase`], [`PlacementStats`]
//! - **Results**: [`PackResult`], [`PackSummary`]
//! - **Solver trait**: [`Solver`] with [`Config`]
//!
//! ## Configuration
//!
//! ```rust
//! use boxpack_core::{Config, OrientationPolicy};
//!
//! let config = Config::new()
//!     .with_orientation(OrientationPolicy::Tall)
//!     .with_verify_layout(true);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Bin, BoxRect, Coord, GeometryId, Item};
pub use placement::{Placement, PlacementPhase, PlacementStats};
pub use result::{PackResult, PackSummary};
pub use solver::{Config, OrientationPolicy, Solver};
