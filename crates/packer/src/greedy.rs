//! Greedy placement at the bin's right edge.
//!
//! This is the only step that grows the bin. The first box is treated
//! specially because it fixes the bin height for the rest of the run.

use crate::boxes::{PendingBox, PlacedBox};
use crate::free_space::{FreeRegion, FreeSpaceIndex};
use crate::queue::PendingQueue;
use boxpack_core::{Bin, PlacementPhase};

/// Places the head of the queue at the origin and sizes the bin to it.
///
/// Returns `None` if the queue is empty.
pub fn place_first(queue: &mut PendingQueue, bin: &mut Bin) -> Option<PlacedBox> {
    let first = queue.pop_first()?;
    let placed = PlacedBox::new(&first, 0, 0, false, PlacementPhase::Anchor);
    bin.extend_to(&placed.rect);

    log::debug!(
        "anchor #{} {}x{} at (0, 0), bin height fixed at {}",
        placed.sequence,
        placed.rect.width,
        placed.rect.height,
        bin.height
    );

    Some(placed)
}

/// Appends a box at the bin's right edge and records the space above it.
///
/// The box sits on the floor at `x = bin.width` and the bin widens to its
/// right edge. If the box is shorter than the bin, the strip above it
/// becomes a new free region.
pub fn place_greedy(pending: &PendingBox, bin: &mut Bin, index: &mut FreeSpaceIndex) -> PlacedBox {
    let placed = PlacedBox::new(pending, bin.width, 0, false, PlacementPhase::Greedy);
    bin.extend_to(&placed.rect);

    log::debug!(
        "greedy #{} {}x{} at ({}, 0), bin now {}x{}",
        placed.sequence,
        placed.rect.width,
        placed.rect.height,
        placed.rect.x,
        bin.width,
        bin.height
    );

    let leftover = bin.height - placed.rect.height;
    if leftover > 0 {
        index.insert(FreeRegion::new(placed.rect.x, placed.rect.top(), leftover));
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxpack_core::BoxRect;

    #[test]
    fn test_place_first_sets_bin() {
        let mut queue: PendingQueue = [PendingBox::new(0, 8, 8), PendingBox::new(1, 16, 16)]
            .into_iter()
            .collect();
        let mut bin = Bin::default();

        let placed = place_first(&mut queue, &mut bin).unwrap();
        assert_eq!(placed.sequence, 1);
        assert_eq!(placed.rect, BoxRect::at(0, 0, 16, 16));
        assert_eq!(placed.phase, PlacementPhase::Anchor);
        assert_eq!(bin, Bin::new(16, 16));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_place_first_empty_queue() {
        let mut queue = PendingQueue::new();
        let mut bin = Bin::default();
        assert!(place_first(&mut queue, &mut bin).is_none());
        assert_eq!(bin, Bin::default());
    }

    #[test]
    fn test_place_greedy_opens_region() {
        let mut bin = Bin::new(16, 16);
        let mut index = FreeSpaceIndex::new();

        let placed = place_greedy(&PendingBox::new(1, 8, 8), &mut bin, &mut index);
        assert_eq!(placed.rect, BoxRect::at(16, 0, 8, 8));
        assert_eq!(bin, Bin::new(24, 16));

        let regions: Vec<_> = index.iter().collect();
        assert_eq!(regions, vec![FreeRegion::new(16, 8, 8)]);
    }

    #[test]
    fn test_place_greedy_full_height() {
        let mut bin = Bin::new(16, 16);
        let mut index = FreeSpaceIndex::new();

        place_greedy(&PendingBox::new(1, 4, 16), &mut bin, &mut index);
        assert_eq!(bin, Bin::new(20, 16));
        assert!(index.is_empty());
    }
}
