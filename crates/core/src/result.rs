//! Pack result representation.

use crate::geometry::{Bin, Coord};
use crate::placement::{Placement, PlacementStats};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a packing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Placements for every box instance, in input sequence order.
    pub placements: Vec<Placement>,

    /// Final bin dimensions.
    pub bin: Bin,

    /// Utilization ratio (0.0 - 1.0).
    /// Calculated as: total_box_area / bin_area
    pub utilization: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Strategy used for solving.
    pub strategy: Option<String>,
}

impl PackResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
            bin: Bin::default(),
            utilization: 0.0,
            computation_time_ms: 0,
            strategy: None,
        }
    }

    /// Creates a result from a finished layout and computes utilization.
    pub fn from_layout(bin: Bin, placements: Vec<Placement>) -> Self {
        let mut result = Self {
            placements,
            bin,
            ..Self::new()
        };
        result.utilization = result.compute_utilization();
        result
    }

    /// Returns the number of placed box instances.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns true if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns the summed area of all placed boxes.
    pub fn total_box_area(&self) -> Coord {
        self.placements.iter().map(Placement::area).sum()
    }

    /// Returns the bin area not covered by any box.
    pub fn wasted_area(&self) -> Coord {
        self.bin.area() - self.total_box_area()
    }

    /// Sets the strategy name.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placements)
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }

    /// Returns the sequence indices of every pair of overlapping placements.
    pub fn find_overlaps(&self) -> Vec<(usize, usize)> {
        let mut overlaps = Vec::new();
        for (i, a) in self.placements.iter().enumerate() {
            for b in &self.placements[i + 1..] {
                if a.rect.overlaps(&b.rect) {
                    overlaps.push((a.sequence, b.sequence));
                }
            }
        }
        overlaps
    }

    /// Returns the sequence indices of placements reaching outside the bin.
    pub fn find_escapes(&self) -> Vec<usize> {
        self.placements
            .iter()
            .filter(|p| !p.rect.is_within(&self.bin))
            .map(|p| p.sequence)
            .collect()
    }

    /// Checks the no-overlap and containment invariants.
    pub fn verify(&self) -> Result<()> {
        if let Some((a, b)) = self.find_overlaps().first() {
            return Err(Error::LayoutViolation(format!(
                "box #{} overlaps box #{}",
                a, b
            )));
        }

        if let Some(seq) = self.find_escapes().first() {
            return Err(Error::LayoutViolation(format!(
                "box #{} lies outside the {}x{} bin",
                seq, self.bin.width, self.bin.height
            )));
        }

        Ok(())
    }

    fn compute_utilization(&self) -> f64 {
        let bin_area = self.bin.area();
        if bin_area > 0 {
            self.total_box_area() as f64 / bin_area as f64
        } else {
            0.0
        }
    }
}

impl Default for PackResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a pack result.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackSummary {
    /// Total box instances placed.
    pub total_placed: usize,
    /// Final bin width.
    pub bin_width: Coord,
    /// Final bin height.
    pub bin_height: Coord,
    /// Final bin area.
    pub bin_area: Coord,
    /// Uncovered bin area.
    pub wasted_area: Coord,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Strategy used.
    pub strategy: String,
}

impl From<&PackResult> for PackSummary {
    fn from(result: &PackResult) -> Self {
        Self {
            total_placed: result.placements.len(),
            bin_width: result.bin.width,
            bin_height: result.bin.height,
            bin_area: result.bin.area(),
            wasted_area: result.wasted_area(),
            utilization_percent: result.utilization * 100.0,
            time_ms: result.computation_time_ms,
            strategy: result
                .strategy
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
