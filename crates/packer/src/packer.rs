//! Pack controller and the [`Packer`] solver.

use crate::boxes::{PendingBox, PlacedBox};
use crate::free_space::FreeSpaceIndex;
use crate::greedy::{place_first, place_greedy};
use crate::queue::PendingQueue;
use crate::search::find_best_fit;
use crate::update::commit;
use boxpack_core::solver::{Config, OrientationPolicy, Solver};
use boxpack_core::{Bin, BoxRect, Item, PackResult, Placement, Result};

use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Finished layout of a packing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Packing {
    /// Final bin.
    pub bin: Bin,
    /// One entry per input box, in input order.
    pub placed: Vec<PlacedBox>,
}

/// Packs boxes into the narrowest bin this heuristic finds.
///
/// `boxes` supplies the sizes; positions are ignored. Boxes are expected to
/// stand on their short side (height >= width). The run alternates between
/// appending the tallest pending box at the bin's right edge and filling
/// leftover space until nothing more fits, until every box is placed.
///
/// The result is fully determined by the input order. An empty input gives
/// an empty bin.
pub fn pack(boxes: &[BoxRect]) -> Packing {
    let mut queue: PendingQueue = boxes
        .iter()
        .enumerate()
        .map(|(seq, rect)| PendingBox::new(seq, rect.width, rect.height))
        .collect();

    let mut bin = Bin::default();
    let mut index = FreeSpaceIndex::new();
    let mut placed = Vec::with_capacity(boxes.len());

    placed.extend(place_first(&mut queue, &mut bin));

    while let Some(next) = queue.pop_first() {
        placed.push(place_greedy(&next, &mut bin, &mut index));
        fill_free_space(&mut queue, &mut index, &bin, &mut placed);
    }

    placed.sort_by_key(|p| p.sequence);

    Packing { bin, placed }
}

/// Places boxes into free regions until no pending box fits anywhere.
fn fill_free_space(
    queue: &mut PendingQueue,
    index: &mut FreeSpaceIndex,
    bin: &Bin,
    placed: &mut Vec<PlacedBox>,
) {
    loop {
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("free list ({}):", index.len());
            for region in index.iter() {
                log::trace!("  ({}, {}) h={}", region.x, region.y, region.height);
            }
        }

        let Some(candidate) = find_best_fit(queue, index, bin) else {
            return;
        };

        match commit(&candidate, queue, index, bin) {
            Some(p) => placed.push(p),
            None => return,
        }
    }
}

/// Strip packer: fixed height, growing width.
pub struct Packer {
    config: Config,
}

impl Packer {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Expands quantities and applies the orientation policy.
    fn prepare<'a>(&self, items: &'a [Item]) -> Result<Vec<Instance<'a>>> {
        let mut instances = Vec::new();

        for item in items {
            item.validate()?;

            let oriented = match self.config.orientation {
                OrientationPolicy::Tall => item.oriented_tall(),
                OrientationPolicy::AsGiven => {
                    if !item.is_tall() {
                        log::warn!(
                            "{} is wider than tall ({}x{}); packing as given",
                            item.id(),
                            item.width(),
                            item.height()
                        );
                    }
                    item.clone()
                }
            };

            for instance in 0..item.quantity() {
                instances.push(Instance {
                    item,
                    instance,
                    size: BoxRect::new(oriented.width(), oriented.height()),
                });
            }
        }

        Ok(instances)
    }
}

/// One copy of an input item, sized as it is handed to [`pack`].
struct Instance<'a> {
    item: &'a Item,
    instance: usize,
    size: BoxRect,
}

impl Solver for Packer {
    fn solve(&self, items: &[Item]) -> Result<PackResult> {
        let start = Instant::now();

        let instances = self.prepare(items)?;
        let sizes: Vec<BoxRect> = instances.iter().map(|i| i.size).collect();
        let packing = pack(&sizes);

        let placements: Vec<Placement> = packing
            .placed
            .iter()
            .zip(&instances)
            .map(|(p, inst)| {
                let rotated =
                    (p.rect.width, p.rect.height) != (inst.item.width(), inst.item.height());
                Placement::new(
                    inst.item.id().clone(),
                    inst.instance,
                    p.sequence,
                    p.rect,
                    p.phase,
                )
                .with_rotated(rotated)
            })
            .collect();

        let mut result =
            PackResult::from_layout(packing.bin, placements).with_strategy(self.name());
        result.computation_time_ms = start.elapsed().as_millis() as u64;

        let stats = result.placement_stats();
        log::info!(
            "packed {} boxes ({} greedy, {} free space) into {}x{}, utilization {}",
            result.placed_count(),
            stats.anchor_count + stats.greedy_count,
            stats.free_space_count,
            result.bin.width,
            result.bin.height,
            result.utilization_percent()
        );

        if self.config.verify_layout {
            result.verify()?;
        }

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "GreedyFreeSpace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxpack_core::{Error, PlacementPhase};

    fn sizes(dims: &[(i64, i64)]) -> Vec<BoxRect> {
        dims.iter().map(|&(w, h)| BoxRect::new(w, h)).collect()
    }

    #[test]
    fn test_pack_empty() {
        let packing = pack(&[]);
        assert_eq!(packing.bin, Bin::default());
        assert!(packing.placed.is_empty());
    }

    #[test]
    fn test_pack_single_box() {
        let packing = pack(&sizes(&[(3, 7)]));
        assert_eq!(packing.bin, Bin::new(3, 7));
        assert_eq!(packing.placed.len(), 1);
        assert_eq!(packing.placed[0].rect, BoxRect::at(0, 0, 3, 7));
        assert_eq!(packing.placed[0].phase, PlacementPhase::Anchor);
    }

    #[test]
    fn test_pack_perfect_fill() {
        let packing = pack(&sizes(&[(16, 16), (8, 8), (4, 8), (4, 4), (4, 4)]));
        assert_eq!(packing.bin, Bin::new(24, 16));

        let rects: Vec<BoxRect> = packing.placed.iter().map(|p| p.rect).collect();
        assert_eq!(
            rects,
            vec![
                BoxRect::at(0, 0, 16, 16),
                BoxRect::at(16, 0, 8, 8),
                BoxRect::at(16, 8, 4, 8),
                BoxRect::at(20, 12, 4, 4),
                BoxRect::at(20, 8, 4, 4),
            ]
        );
    }

    #[test]
    fn test_pack_places_rotated() {
        let packing = pack(&sizes(&[(12, 12), (8, 8), (4, 8)]));
        assert_eq!(packing.bin, Bin::new(20, 12));
        assert_eq!(packing.placed[2].rect, BoxRect::at(12, 8, 8, 4));
        assert!(packing.placed[2].rotated);
    }

    #[test]
    fn test_solver_orients_tall() {
        let items = vec![Item::new("wide", 16, 4), Item::new("big", 16, 16)];
        let result = Packer::default_config().solve(&items).unwrap();

        assert_eq!(result.bin, Bin::new(20, 16));
        let wide = &result.placements[0];
        assert_eq!(wide.geometry_id, "wide");
        assert_eq!((wide.width(), wide.height()), (4, 16));
        assert!(wide.rotated);
        assert!(!result.placements[1].rotated);
    }

    #[test]
    fn test_solver_expands_quantity() {
        let items = vec![Item::new("sq", 4, 4).with_quantity(3)];
        let result = Packer::default_config().solve(&items).unwrap();

        assert_eq!(result.placed_count(), 3);
        let instances: Vec<usize> = result.placements.iter().map(|p| p.instance).collect();
        assert_eq!(instances, vec![0, 1, 2]);
        assert_eq!(result.bin, Bin::new(12, 4));
        assert_eq!(result.strategy.as_deref(), Some("GreedyFreeSpace"));
    }

    #[test]
    fn test_instances_borrow_items_not_packer() {
        let items = vec![Item::new("wide", 6, 2).with_quantity(2), Item::new("sq", 3, 3)];
        let instances = Packer::default_config().prepare(&items).unwrap();

        let sizes: Vec<_> = instances.iter().map(|i| (i.size.width, i.size.height)).collect();
        assert_eq!(sizes, vec![(2, 6), (2, 6), (3, 3)]);
        assert_eq!(instances[1].instance, 1);
        assert_eq!(instances[2].item.id(), "sq");
    }

    #[test]
    fn test_solver_rejects_invalid_item() {
        let items = vec![Item::new("ok", 4, 4), Item::new("flat", 4, 0)];
        let result = Packer::default_config().solve(&items);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_solver_empty_input() {
        let result = Packer::default_config().solve(&[]).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.bin.area(), 0);
        assert_eq!(result.utilization, 0.0);
    }
}
