//! Best-fit search over pending boxes and free regions.

use crate::free_space::{FreeRegion, FreeSpaceIndex};
use crate::queue::{PendingQueue, QueueKey};
use boxpack_core::{Bin, Coord};

/// A box chosen for a free region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// The region the box goes into, as it was before placement.
    pub region: FreeRegion,
    /// Queue key of the chosen box.
    pub key: QueueKey,
    /// Area of the chosen box.
    pub area: Coord,
}

/// Finds the largest pending box that fits in any free region.
///
/// Regions are scanned in `(x, y)` order and boxes in queue order. A later
/// pair only wins with a strictly larger area, so among equal areas the
/// first pair found is kept. Returns `None` when nothing fits.
pub fn find_best_fit(queue: &PendingQueue, index: &FreeSpaceIndex, bin: &Bin) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for region in index.iter() {
        for (key, pending) in queue.iter() {
            let area = pending.area();

            // Not worth checking.
            if best.is_some_and(|found| area <= found.area) {
                continue;
            }

            if !region.fits(pending.width, pending.height, bin) {
                continue;
            }

            best = Some(Candidate {
                region,
                key: *key,
                area,
            });
        }
    }

    best
}
