//! Committing a free-space placement and restructuring the index.
//!
//! The chosen box goes into the top-left corner of its region. Every region
//! it now overlaps is trimmed or dropped, and the part of the source region
//! right of the box becomes a new region unless another region already
//! covers it.
//!
//! The new index is computed from the old one without mutating it while
//! iterating.

use crate::boxes::PlacedBox;
use crate::free_space::{FreeRegion, FreeSpaceIndex};
use crate::queue::PendingQueue;
use crate::search::Candidate;
use boxpack_core::{Bin, BoxRect, PlacementPhase};

/// What happens to a free region after a box is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trim {
    /// Untouched.
    Keep,
    /// Replaced by a smaller region.
    Resize(FreeRegion),
    /// Fully covered or trimmed to nothing.
    Remove,
}

/// Classifies how a placed box cuts into a region.
///
/// Regions starting at or right of the box's right edge cannot overlap it.
/// Otherwise the vertical overlap decides:
/// - box covers the region's bottom: raise the region to the box top;
/// - box covers the region's top: lower the region's top to the box bottom;
/// - box spans the whole region: remove it.
///
/// A box strictly inside the region's vertical span counts as covering the
/// bottom, so the space below the box is given up.
pub fn trim_region(region: &FreeRegion, placed: &BoxRect) -> Trim {
    if region.x >= placed.right() {
        return Trim::Keep;
    }

    let height_diff = region.top() - placed.y;
    let y_diff = placed.top() - region.y;

    if y_diff > 0 && placed.top() < region.top() {
        resized(FreeRegion::new(
            region.x,
            placed.top(),
            region.height - y_diff,
        ))
    } else if height_diff > 0 && placed.y >= region.y {
        resized(FreeRegion::new(
            region.x,
            region.y,
            region.height - height_diff,
        ))
    } else if y_diff > 0 && height_diff > 0 {
        Trim::Remove
    } else {
        Trim::Keep
    }
}

fn resized(region: FreeRegion) -> Trim {
    if region.height <= 0 {
        Trim::Remove
    } else {
        Trim::Resize(region)
    }
}

/// Computes the index after `placed` was put into `source`.
///
/// Every region is trimmed against the box. Then, if the box stops short of
/// the bin's right edge, a region with the source's full vertical span
/// is opened at the box's right edge, unless an existing region dominates
/// it.
///
/// Trimmed regions that land on the same position collapse into the taller
/// one.
pub fn updated_regions(
    index: &FreeSpaceIndex,
    placed: &BoxRect,
    source: &FreeRegion,
    bin: &Bin,
) -> FreeSpaceIndex {
    let mut updated: FreeSpaceIndex = index
        .iter()
        .filter_map(|region| match trim_region(&region, placed) {
            Trim::Keep => Some(region),
            Trim::Resize(smaller) => Some(smaller),
            Trim::Remove => None,
        })
        .collect();

    if placed.right() < bin.width {
        let right = FreeRegion::new(placed.right(), source.y, source.height);
        if !updated.is_redundant(&right) {
            updated.insert(right);
        }
    }

    updated
}

/// Places the candidate box and updates queue and index.
///
/// The box is turned on its side if it is taller than the region, then set
/// flush with the region's top-left corner. Returns `None` if the box is no
/// longer pending.
pub fn commit(
    candidate: &Candidate,
    queue: &mut PendingQueue,
    index: &mut FreeSpaceIndex,
    bin: &Bin,
) -> Option<PlacedBox> {
    let pending = queue.remove(&candidate.key)?;
    let region = candidate.region;

    let rotated = pending.height > region.height;
    let height = if rotated {
        pending.width
    } else {
        pending.height
    };

    let placed = PlacedBox::new(
        &pending,
        region.x,
        region.top() - height,
        rotated,
        PlacementPhase::FreeSpace,
    );

    log::debug!(
        "free space #{} {}x{} at ({}, {}){} from region ({}, {}) h={}",
        placed.sequence,
        placed.rect.width,
        placed.rect.height,
        placed.rect.x,
        placed.rect.y,
        if rotated { " rotated" } else { "" },
        region.x,
        region.y,
        region.height
    );

    *index = updated_regions(index, &placed.rect, &region, bin);

    Some(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::PendingBox;
    use crate::queue::QueueKey;

    #[test]
    fn test_trim_right_of_box() {
        let region = FreeRegion::new(20, 8, 8);
        assert_eq!(trim_region(&region, &BoxRect::at(16, 8, 4, 8)), Trim::Keep);
    }

    #[test]
    fn test_trim_bottom_overlap() {
        // Box covers the lower part of the region.
        let region = FreeRegion::new(10, 4, 8);
        let placed = BoxRect::at(12, 2, 4, 6);
        assert_eq!(
            trim_region(&region, &placed),
            Trim::Resize(FreeRegion::new(10, 8, 4))
        );
    }

    #[test]
    fn test_trim_box_inside_span() {
        let region = FreeRegion::new(10, 4, 12);
        let placed = BoxRect::at(10, 6, 4, 4);
        assert_eq!(
            trim_region(&region, &placed),
            Trim::Resize(FreeRegion::new(10, 10, 6))
        );
    }

    #[test]
    fn test_trim_top_overlap() {
        let region = FreeRegion::new(16, 8, 8);
        let placed = BoxRect::at(20, 12, 4, 4);
        assert_eq!(
            trim_region(&region, &placed),
            Trim::Resize(FreeRegion::new(16, 8, 4))
        );
    }

    #[test]
    fn test_trim_exact_fill_removes() {
        let region = FreeRegion::new(16, 8, 8);
        let placed = BoxRect::at(16, 8, 4, 8);
        assert_eq!(trim_region(&region, &placed), Trim::Remove);
    }

    #[test]
    fn test_trim_full_span_removes() {
        let region = FreeRegion::new(10, 6, 2);
        let placed = BoxRect::at(12, 4, 4, 8);
        assert_eq!(trim_region(&region, &placed), Trim::Remove);
    }

    #[test]
    fn test_trim_no_vertical_overlap() {
        let region = FreeRegion::new(10, 8, 4);
        assert_eq!(trim_region(&region, &BoxRect::at(10, 0, 4, 8)), Trim::Keep);
        assert_eq!(trim_region(&region, &BoxRect::at(10, 12, 4, 2)), Trim::Keep);
    }

    #[test]
    fn test_updated_regions_opens_right_region() {
        let source = FreeRegion::new(16, 8, 8);
        let index: FreeSpaceIndex = [source].into_iter().collect();
        let placed = BoxRect::at(16, 8, 4, 8);

        let updated = updated_regions(&index, &placed, &source, &Bin::new(24, 16));
        let regions: Vec<_> = updated.iter().collect();
        assert_eq!(regions, vec![FreeRegion::new(20, 8, 8)]);
    }

    #[test]
    fn test_updated_regions_at_bin_edge() {
        let source = FreeRegion::new(20, 8, 8);
        let index: FreeSpaceIndex = [source].into_iter().collect();
        let placed = BoxRect::at(20, 12, 4, 4);

        let updated = updated_regions(&index, &placed, &source, &Bin::new(24, 16));
        let regions: Vec<_> = updated.iter().collect();
        assert_eq!(regions, vec![FreeRegion::new(20, 8, 4)]);
    }

    #[test]
    fn test_updated_regions_trims_left_region() {
        let source = FreeRegion::new(10, 8, 4);
        let cover = FreeRegion::new(4, 6, 6);
        let index: FreeSpaceIndex = [cover, source].into_iter().collect();
        let placed = BoxRect::at(10, 8, 2, 4);

        let updated = updated_regions(&index, &placed, &source, &Bin::new(30, 12));
        let regions: Vec<_> = updated.iter().collect();
        // `cover` loses its top, `source` is filled, and (12, 8, 4) is not
        // dominated by what is left.
        assert_eq!(
            regions,
            vec![FreeRegion::new(4, 6, 2), FreeRegion::new(12, 8, 4)]
        );
    }

    #[test]
    fn test_updated_regions_dominated_candidate() {
        let source = FreeRegion::new(10, 8, 4);
        let cover = FreeRegion::new(14, 0, 12);
        let index: FreeSpaceIndex = [source, cover].into_iter().collect();
        let placed = BoxRect::at(10, 8, 4, 4);

        let updated = updated_regions(&index, &placed, &source, &Bin::new(30, 12));
        let regions: Vec<_> = updated.iter().collect();
        assert_eq!(regions, vec![cover]);
    }

    #[test]
    fn test_updated_regions_trimmed_neighbour() {
        let source = FreeRegion::new(10, 8, 4);
        let neighbour = FreeRegion::new(20, 0, 12);
        let index: FreeSpaceIndex = [source, neighbour].into_iter().collect();
        let placed = BoxRect::at(10, 8, 12, 4);

        let updated = updated_regions(&index, &placed, &source, &Bin::new(30, 12));
        let regions: Vec<_> = updated.iter().collect();
        assert_eq!(
            regions,
            vec![FreeRegion::new(20, 0, 8), FreeRegion::new(22, 8, 4)]
        );
    }

    #[test]
    fn test_updated_regions_collision_keeps_taller() {
        // Both left regions are raised to the box top at (4, 6).
        let lower = FreeRegion::new(4, 2, 6);
        let upper = FreeRegion::new(4, 4, 8);
        let source = FreeRegion::new(6, 0, 6);
        let index: FreeSpaceIndex = [lower, upper, source].into_iter().collect();
        let placed = BoxRect::at(6, 0, 2, 6);

        let updated = updated_regions(&index, &placed, &source, &Bin::new(20, 12));
        let regions: Vec<_> = updated.iter().collect();
        assert_eq!(
            regions,
            vec![FreeRegion::new(4, 6, 6), FreeRegion::new(8, 0, 6)]
        );
    }

    #[test]
    fn test_commit_rotates_tall_box() {
        let mut queue: PendingQueue = [PendingBox::new(2, 4, 8)].into_iter().collect();
        let region = FreeRegion::new(12, 8, 4);
        let mut index: FreeSpaceIndex = [region].into_iter().collect();
        let bin = Bin::new(20, 12);

        let candidate = Candidate {
            region,
            key: QueueKey::of(&PendingBox::new(2, 4, 8)),
            area: 32,
        };

        let placed = commit(&candidate, &mut queue, &mut index, &bin).unwrap();
        assert!(placed.rotated);
        assert_eq!(placed.rect, BoxRect::at(12, 8, 8, 4));
        assert!(queue.is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_commit_missing_box() {
        let mut queue = PendingQueue::new();
        let region = FreeRegion::new(0, 0, 4);
        let mut index: FreeSpaceIndex = [region].into_iter().collect();

        let candidate = Candidate {
            region,
            key: QueueKey::of(&PendingBox::new(0, 2, 2)),
            area: 4,
        };

        assert!(commit(&candidate, &mut queue, &mut index, &Bin::new(4, 4)).is_none());
        assert_eq!(index.len(), 1);
    }
}
