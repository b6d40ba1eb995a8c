//! Benchmark result types and recording.

use boxpack_core::{Coord, PackResult, Placement};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Placement info for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementInfo {
    pub geometry_id: String,
    pub instance: usize,
    pub position: [Coord; 2],
    pub size: [Coord; 2],
    pub rotated: bool,
}

impl From<&Placement> for PlacementInfo {
    fn from(p: &Placement) -> Self {
        Self {
            geometry_id: p.geometry_id.clone(),
            instance: p.instance,
            position: [p.x(), p.y()],
            size: [p.width(), p.height()],
            rotated: p.rotated,
        }
    }
}

/// Result of a single benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Dataset name
    pub dataset: String,
    /// Strategy used
    pub strategy: String,
    /// Number of boxes placed
    pub boxes: usize,
    /// Final bin width (lower is better)
    pub bin_width: Coord,
    /// Final bin height
    pub bin_height: Coord,
    /// Final bin area
    pub bin_area: Coord,
    /// Summed box area
    pub box_area: Coord,
    /// Bin area not covered by boxes
    pub wasted_area: Coord,
    /// Utilization ratio (0.0 - 1.0)
    pub utilization: f64,
    /// Computation time in milliseconds
    pub time_ms: u64,
    /// Cells drawn twice or outside the bin when rendered
    pub conflicts: usize,
    /// Placement coordinates (optional, for visualization)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placements: Option<Vec<PlacementInfo>>,
}

impl RunResult {
    /// Creates a run result from a finished pack.
    pub fn new(dataset: impl Into<String>, result: &PackResult) -> Self {
        Self {
            dataset: dataset.into(),
            strategy: result
                .strategy
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            boxes: result.placed_count(),
            bin_width: result.bin.width,
            bin_height: result.bin.height,
            bin_area: result.bin.area(),
            box_area: result.total_box_area(),
            wasted_area: result.wasted_area(),
            utilization: result.utilization,
            time_ms: result.computation_time_ms,
            conflicts: 0,
            placements: None,
        }
    }

    /// Sets the conflict count found while rendering.
    pub fn with_conflicts(mut self, conflicts: usize) -> Self {
        self.conflicts = conflicts;
        self
    }

    /// Sets the placements for visualization.
    pub fn with_placements(mut self, placements: Vec<PlacementInfo>) -> Self {
        self.placements = Some(placements);
        self
    }
}

/// Collection of benchmark results.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Individual run results
    pub runs: Vec<RunResult>,
    /// Additional metadata
    pub metadata: BenchmarkMetadata,
}

/// Metadata about the benchmark run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BenchmarkMetadata {
    /// boxpack version
    pub version: String,
    /// Configuration used
    pub config: String,
}

impl BenchmarkResult {
    /// Creates a new benchmark result.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            metadata: BenchmarkMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                config: String::new(),
            },
        }
    }

    /// Records the configuration used.
    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.metadata.config = config.into();
        self
    }

    /// Adds a run result.
    pub fn add_run(&mut self, result: RunResult) {
        self.runs.push(result);
    }

    /// Returns the summed bin area over all runs.
    pub fn total_bin_area(&self) -> Coord {
        self.runs.iter().map(|r| r.bin_area).sum()
    }

    /// Returns the mean utilization over all runs, or 0 if there are none.
    pub fn average_utilization(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(|r| r.utilization).sum::<f64>() / self.runs.len() as f64
    }

    /// Returns the total number of rendering conflicts.
    pub fn total_conflicts(&self) -> usize {
        self.runs.iter().map(|r| r.conflicts).sum()
    }

    /// Saves results to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Prints a summary table to stdout.
    pub fn print_summary(&self) {
        println!("\n{:=<96}", "");
        println!("BENCHMARK RESULTS");
        println!("{:=<96}", "");
        println!(
            "{:<24} {:>6} {:>8} {:>8} {:>10} {:>10} {:>8} {:>8} {:>8}",
            "Dataset", "Boxes", "Width", "Height", "Area", "Wasted", "Util%", "Time(ms)", "Errors"
        );
        println!("{:-<96}", "");

        for run in &self.runs {
            println!(
                "{:<24} {:>6} {:>8} {:>8} {:>10} {:>10} {:>8.1} {:>8} {:>8}",
                run.dataset,
                run.boxes,
                run.bin_width,
                run.bin_height,
                run.bin_area,
                run.wasted_area,
                run.utilization * 100.0,
                run.time_ms,
                run.conflicts
            );
        }

        println!("{:-<96}", "");
        println!(
            "{} runs, total area {}, average utilization {:.1}%, {} conflicts",
            self.runs.len(),
            self.total_bin_area(),
            self.average_utilization() * 100.0,
            self.total_conflicts()
        );
        println!("{:=<96}\n", "");
    }
}
