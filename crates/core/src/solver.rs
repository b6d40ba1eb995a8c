//! Solver traits and configuration.

use crate::geometry::Item;
use crate::result::PackResult;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How input items are oriented before packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrientationPolicy {
    /// Stand every item on its short side (height >= width) first.
    #[default]
    Tall,
    /// Pack items exactly as given. The caller guarantees height >= width.
    AsGiven,
}

/// Common configuration for solvers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Input orientation handling.
    pub orientation: OrientationPolicy,

    /// Check the finished layout for overlaps and containment.
    pub verify_layout: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: OrientationPolicy::default(),
            verify_layout: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientation policy.
    pub fn with_orientation(mut self, orientation: OrientationPolicy) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enables or disables post-pack layout verification.
    pub fn with_verify_layout(mut self, verify: bool) -> Self {
        self.verify_layout = verify;
        self
    }
}

/// Trait for packing solvers.
pub trait Solver {
    /// Packs every item instance and returns the finished layout.
    fn solve(&self, items: &[Item]) -> Result<PackResult>;

    /// Returns the strategy name recorded in results.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.orientation, OrientationPolicy::Tall);
        assert!(config.verify_layout);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_orientation(OrientationPolicy::AsGiven)
            .with_verify_layout(false);
        assert_eq!(config.orientation, OrientationPolicy::AsGiven);
        assert!(!config.verify_layout);
    }
}
