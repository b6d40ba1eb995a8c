//! Benchmark runner: packs datasets and records the outcome.

use crate::dataset::Dataset;
use crate::render::Diagram;
use crate::result::{BenchmarkResult, PlacementInfo, RunResult};
use boxpack_core::{Config, OrientationPolicy, PackResult, Solver};
use boxpack_packer::Packer;

/// Configuration for benchmark runs.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Orientation handling passed to the packer.
    pub orientation: OrientationPolicy,
    /// Whether the packer verifies its own layout.
    ///
    /// With verification off, a faulty layout still produces a result and
    /// shows up as rendering conflicts instead of an error.
    pub verify_layout: bool,
    /// Whether run results carry every placement.
    pub record_placements: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationPolicy::Tall,
            verify_layout: false,
            record_placements: false,
        }
    }
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientation policy.
    pub fn with_orientation(mut self, orientation: OrientationPolicy) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enables or disables packer-side layout verification.
    pub fn with_verify_layout(mut self, verify: bool) -> Self {
        self.verify_layout = verify;
        self
    }

    /// Enables or disables recording placements in run results.
    pub fn with_placements(mut self, record: bool) -> Self {
        self.record_placements = record;
        self
    }

    fn solver_config(&self) -> Config {
        Config::new()
            .with_orientation(self.orientation)
            .with_verify_layout(self.verify_layout)
    }
}

/// Everything produced by packing one dataset.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Raw solver output.
    pub result: PackResult,
    /// Rendered layout.
    pub diagram: Diagram,
    /// Recorded metrics.
    pub run: RunResult,
}

/// Benchmark runner.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    packer: Packer,
}

impl BenchmarkRunner {
    /// Creates a new benchmark runner.
    pub fn new(config: BenchmarkConfig) -> Self {
        let packer = Packer::new(config.solver_config());
        Self { config, packer }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Packs a single dataset, renders it and records the metrics.
    pub fn run_dataset(&self, dataset: &Dataset) -> boxpack_core::Result<RunOutcome> {
        let info = dataset.info();
        log::info!(
            "dataset {}: {} boxes in {} types, total area {}",
            info.name,
            info.total_boxes,
            info.item_types,
            info.total_area
        );

        let result = self.packer.solve(&dataset.to_items())?;
        let diagram = Diagram::render(&result);
        if diagram.has_conflicts() {
            log::warn!(
                "dataset {}: {} conflicting cells in boxes {:?}",
                dataset.name,
                diagram.conflicts().len(),
                diagram.conflicting_boxes()
            );
        }

        let mut run =
            RunResult::new(dataset.name.clone(), &result).with_conflicts(diagram.conflicts().len());
        if self.config.record_placements {
            run = run.with_placements(result.placements.iter().map(PlacementInfo::from).collect());
        }

        Ok(RunOutcome {
            result,
            diagram,
            run,
        })
    }

    /// Runs every dataset, skipping (and logging) the ones that fail.
    pub fn run_datasets(&self, datasets: &[Dataset]) -> BenchmarkResult {
        let mut combined = BenchmarkResult::new().with_config(format!("{:?}", self.config));

        for dataset in datasets {
            match self.run_dataset(dataset) {
                Ok(outcome) => combined.add_run(outcome.run),
                Err(e) => log::error!("dataset {} failed: {}", dataset.name, e),
            }
        }

        combined
    }
}
