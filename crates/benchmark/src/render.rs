//! ASCII diagrams of packed bins.
//!
//! Every box is drawn as its outline: `+` at the corners, `-` along the
//! bottom and top edges and `|` along the left and right edges. The top row
//! of the diagram is the top of the bin.
//!
//! A cell claimed by two boxes is drawn as `*` and reported as a
//! [`Conflict`]. Cells outside the bin are reported the same way.
//!
//! Character cells are taller than they are wide, so the picture looks
//! stretched vertically.

use boxpack_core::{BoxRect, Coord, PackResult};
use std::fmt;

/// A cell that could not be drawn cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    /// Sequence index of the box being drawn.
    pub sequence: usize,
    /// Cell column.
    pub x: Coord,
    /// Cell row, counted from the bin floor.
    pub y: Coord,
}

/// A rendered bin.
#[derive(Debug, Clone)]
pub struct Diagram {
    width: usize,
    height: usize,
    /// Indexed `[y][x]` with `y` counted from the floor.
    cells: Vec<Vec<char>>,
    conflicts: Vec<Conflict>,
}

impl Diagram {
    /// Draws every placement of `result` into its bin.
    pub fn render(result: &PackResult) -> Self {
        let width = result.bin.width.max(0) as usize;
        let height = result.bin.height.max(0) as usize;

        let mut diagram = Self {
            width,
            height,
            cells: vec![vec![' '; width]; height],
            conflicts: Vec::new(),
        };

        for placement in &result.placements {
            diagram.draw(placement.sequence, &placement.rect);
        }

        diagram
    }

    /// Returns the diagram width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the diagram height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the character at `(x, y)`, with `y` counted from the floor.
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Returns every conflicting cell in drawing order.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Returns true if any cell was drawn twice or fell outside the bin.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Returns the sorted, deduplicated sequence indices of conflicting boxes.
    pub fn conflicting_boxes(&self) -> Vec<usize> {
        let mut boxes: Vec<usize> = self.conflicts.iter().map(|c| c.sequence).collect();
        boxes.sort_unstable();
        boxes.dedup();
        boxes
    }

    fn draw(&mut self, sequence: usize, rect: &BoxRect) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }

        let (left, right) = (rect.x, rect.right() - 1);
        let (bottom, top) = (rect.y, rect.top() - 1);

        for y in bottom..=top {
            let horizontal = y == bottom || y == top;
            if horizontal {
                for x in left..=right {
                    let vertical = x == left || x == right;
                    self.stamp(sequence, x, y, if vertical { '+' } else { '-' });
                }
            } else {
                self.stamp(sequence, left, y, '|');
                if right != left {
                    self.stamp(sequence, right, y, '|');
                }
            }
        }
    }

    fn stamp(&mut self, sequence: usize, x: Coord, y: Coord, c: char) {
        let conflict = Conflict { sequence, x, y };

        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            self.conflicts.push(conflict);
            return;
        }

        let cell = &mut self.cells[y as usize][x as usize];
        if *cell == ' ' {
            *cell = c;
        } else {
            *cell = '*';
            self.conflicts.push(conflict);
        }
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter().rev() {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxpack_core::{Bin, Placement, PlacementPhase};

    fn layout(bin: Bin, rects: &[BoxRect]) -> PackResult {
        let placements = rects
            .iter()
            .enumerate()
            .map(|(seq, rect)| {
                Placement::new(format!("B{}", seq), 0, seq, *rect, PlacementPhase::Greedy)
            })
            .collect();
        PackResult::from_layout(bin, placements)
    }

    #[test]
    fn test_render_single_box() {
        let result = layout(Bin::new(4, 3), &[BoxRect::at(0, 0, 4, 3)]);
        let diagram = Diagram::render(&result);

        assert!(!diagram.has_conflicts());
        assert_eq!(diagram.to_string(), "+--+\n|  |\n+--+\n");
    }

    #[test]
    fn test_render_top_row_is_bin_top() {
        let result = layout(
            Bin::new(5, 4),
            &[BoxRect::at(0, 0, 3, 4), BoxRect::at(3, 2, 2, 2)],
        );
        let diagram = Diagram::render(&result);

        assert!(!diagram.has_conflicts());
        assert_eq!(
            diagram.to_string(),
            "+-+++\n| |++\n| |  \n+-+  \n"
        );
        assert_eq!(diagram.cell(3, 3), Some('+'));
        assert_eq!(diagram.cell(3, 0), Some(' '));
    }

    #[test]
    fn test_render_thin_boxes() {
        let result = layout(
            Bin::new(4, 3),
            &[BoxRect::at(0, 0, 1, 3), BoxRect::at(1, 0, 3, 1)],
        );
        let diagram = Diagram::render(&result);

        assert!(!diagram.has_conflicts());
        assert_eq!(diagram.to_string(), "+   \n|   \n++-+\n");
    }

    #[test]
    fn test_render_reports_overlap() {
        let result = layout(
            Bin::new(6, 4),
            &[BoxRect::at(0, 0, 4, 4), BoxRect::at(3, 0, 3, 4)],
        );
        let diagram = Diagram::render(&result);

        assert!(diagram.has_conflicts());
        assert_eq!(diagram.conflicting_boxes(), vec![1]);
        assert_eq!(diagram.cell(3, 0), Some('*'));
        assert_eq!(diagram.conflicts().len(), 4);
    }

    #[test]
    fn test_render_reports_escape() {
        let result = layout(Bin::new(2, 2), &[BoxRect::at(1, 0, 2, 2)]);
        let diagram = Diagram::render(&result);
        assert_eq!(diagram.conflicting_boxes(), vec![0]);
    }

    #[test]
    fn test_render_empty_bin() {
        let diagram = Diagram::render(&PackResult::new());
        assert_eq!(diagram.to_string(), "");
        assert!(!diagram.has_conflicts());
    }
}
