//! Dataset types and the built-in scenario sets.

use boxpack_core::{Coord, Item};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Information about a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Dataset name
    pub name: String,
    /// Number of item types
    pub item_types: usize,
    /// Total boxes when quantities are expanded
    pub total_boxes: usize,
    /// Summed area of all boxes
    pub total_area: Coord,
    /// Longest side of any box (the bin height after orienting tall)
    pub max_side: Coord,
}

/// A named set of boxes to pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset name
    pub name: String,
    /// Box types to be placed
    pub items: Vec<DatasetItem>,
}

/// A box type in a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetItem {
    /// Box type ID
    pub id: String,
    /// Width
    pub width: Coord,
    /// Height
    pub height: Coord,
    /// Number of copies
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

fn default_quantity() -> usize {
    1
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Builds a dataset from `(width, height)` pairs with ids `B0`, `B1`, ...
    pub fn from_sizes(name: impl Into<String>, sizes: &[(Coord, Coord)]) -> Self {
        let mut dataset = Self::new(name);
        for (i, &(width, height)) in sizes.iter().enumerate() {
            dataset.push(format!("B{}", i), width, height, 1);
        }
        dataset
    }

    /// Adds a box type.
    pub fn push(&mut self, id: impl Into<String>, width: Coord, height: Coord, quantity: usize) {
        self.items.push(DatasetItem {
            id: id.into(),
            width,
            height,
            quantity,
        });
    }

    /// Generates `count` boxes with both sides drawn from `min_side..=max_side`.
    pub fn random(
        name: impl Into<String>,
        count: usize,
        min_side: Coord,
        max_side: Coord,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut dataset = Self::new(name);
        dataset.extend_random(&mut rng, count, min_side, max_side);
        dataset
    }

    fn extend_random(&mut self, rng: &mut StdRng, count: usize, min_side: Coord, max_side: Coord) {
        for _ in 0..count {
            let width = rng.gen_range(min_side..=max_side);
            let height = rng.gen_range(min_side..=max_side);
            let id = format!("B{}", self.items.len());
            self.push(id, width, height, 1);
        }
    }

    /// Returns dataset information.
    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            name: self.name.clone(),
            item_types: self.items.len(),
            total_boxes: self.total_boxes(),
            total_area: self.total_area(),
            max_side: self
                .items
                .iter()
                .map(|i| i.width.max(i.height))
                .max()
                .unwrap_or(0),
        }
    }

    /// Returns the number of boxes after expanding quantities.
    pub fn total_boxes(&self) -> usize {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Returns the summed area of all boxes.
    pub fn total_area(&self) -> Coord {
        self.items
            .iter()
            .map(|i| i.width * i.height * i.quantity as Coord)
            .sum()
    }

    /// Converts to solver input.
    pub fn to_items(&self) -> Vec<Item> {
        self.items
            .iter()
            .map(|i| Item::new(i.id.clone(), i.width, i.height).with_quantity(i.quantity))
            .collect()
    }

    /// The built-in scenario sets.
    ///
    /// Three small hand-made sets followed by two seeded random sets: one of
    /// similarly sized boxes and one with a few large boxes among many small
    /// ones.
    pub fn builtin_scenarios() -> Vec<Dataset> {
        let mut few_large = Dataset::new("few-large-many-small");
        let mut rng = StdRng::seed_from_u64(1);
        few_large.extend_random(&mut rng, 20, 3, 99);
        few_large.extend_random(&mut rng, 80, 3, 19);

        vec![
            Dataset::from_sizes(
                "perfect-fill",
                &[(16, 16), (8, 8), (4, 8), (4, 4), (4, 4)],
            ),
            Dataset::from_sizes(
                "mixed-heights",
                &[(16, 16), (4, 12), (8, 8), (4, 8), (4, 4)],
            ),
            Dataset::from_sizes("rotation", &[(4, 10), (4, 6), (4, 6), (4, 6)]),
            Dataset::random("similar-sizes", 100, 3, 49, 0),
            few_large,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sizes() {
        let ds = Dataset::from_sizes("t", &[(2, 3), (4, 5)]);
        assert_eq!(ds.items.len(), 2);
        assert_eq!(ds.items[1].id, "B1");
        assert_eq!(ds.total_boxes(), 2);
        assert_eq!(ds.total_area(), 26);
    }

    #[test]
    fn test_info_counts_quantity() {
        let mut ds = Dataset::new("q");
        ds.push("a", 2, 7, 3);
        ds.push("b", 9, 1, 1);

        let info = ds.info();
        assert_eq!(info.item_types, 2);
        assert_eq!(info.total_boxes, 4);
        assert_eq!(info.total_area, 51);
        assert_eq!(info.max_side, 9);
    }

    #[test]
    fn test_to_items() {
        let mut ds = Dataset::new("q");
        ds.push("a", 2, 7, 3);

        let items = ds.to_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id(), "a");
        assert_eq!(items[0].quantity(), 3);
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = Dataset::random("r", 50, 3, 49, 42);
        let b = Dataset::random("r", 50, 3, 49, 42);
        assert_eq!(a, b);
        assert!(a
            .items
            .iter()
            .all(|i| (3..=49).contains(&i.width) && (3..=49).contains(&i.height)));
    }

    #[test]
    fn test_builtin_scenarios() {
        let scenarios = Dataset::builtin_scenarios();
        assert_eq!(scenarios.len(), 5);
        assert_eq!(scenarios[0].total_area(), 384);
        assert_eq!(scenarios[3].total_boxes(), 100);

        let few_large = &scenarios[4];
        assert_eq!(few_large.total_boxes(), 100);
        assert!(few_large.items[20..]
            .iter()
            .all(|i| i.width <= 19 && i.height <= 19));
    }

    #[test]
    fn test_json_default_quantity() {
        let ds: Dataset =
            serde_json::from_str(r#"{"name":"j","items":[{"id":"x","width":2,"height":3}]}"#)
                .unwrap();
        assert_eq!(ds.items[0].quantity, 1);
    }
}
