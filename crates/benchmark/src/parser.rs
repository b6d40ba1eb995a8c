//! Input parsers for plain-text box lists and JSON datasets.

use crate::dataset::Dataset;
use boxpack_core::Coord;
use std::fs;
use std::io::Read;
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when parsing datasets.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid number `{token}`: {source}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid dataset format: {0}")]
    InvalidFormat(String),
}

/// Parser for box lists.
///
/// The text format is a box count followed by that many `width height`
/// pairs, all separated by arbitrary whitespace:
///
/// ```text
/// 3
/// 16 16
/// 8 8  4 8
/// ```
#[derive(Debug, Default)]
pub struct DatasetParser;

impl DatasetParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a dataset from a JSON file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Dataset, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_json(&content)
    }

    /// Parses a dataset from a JSON string.
    pub fn parse_json(&self, json: &str) -> Result<Dataset, ParseError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        for item in &dataset.items {
            check_side(&item.id, "width", item.width)?;
            check_side(&item.id, "height", item.height)?;
        }
        Ok(dataset)
    }

    /// Parses a text box list from a file.
    pub fn parse_text_file(&self, path: impl AsRef<Path>) -> Result<Dataset, ParseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".to_string());
        self.parse_text_named(&name, &content)
    }

    /// Parses a text box list from a reader, e.g. stdin.
    pub fn parse_reader(&self, mut reader: impl Read) -> Result<Dataset, ParseError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse_text(&content)
    }

    /// Parses a text box list.
    pub fn parse_text(&self, input: &str) -> Result<Dataset, ParseError> {
        self.parse_text_named("input", input)
    }

    fn parse_text_named(&self, name: &str, input: &str) -> Result<Dataset, ParseError> {
        let mut tokens = input.split_whitespace();

        let count_token = tokens
            .next()
            .ok_or_else(|| ParseError::InvalidFormat("missing box count".to_string()))?;
        let count: usize = count_token
            .parse()
            .map_err(|source| ParseError::InvalidNumber {
                token: count_token.to_string(),
                source,
            })?;

        let mut dataset = Dataset::new(name);
        for i in 0..count {
            let id = format!("B{}", i);
            let width = next_side(&mut tokens, &id, "width")?;
            let height = next_side(&mut tokens, &id, "height")?;
            dataset.push(id, width, height, 1);
        }

        if let Some(extra) = tokens.next() {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected token `{}` after {} boxes",
                extra, count
            )));
        }

        Ok(dataset)
    }
}

fn next_side<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    id: &str,
    side: &str,
) -> Result<Coord, ParseError> {
    let token = tokens
        .next()
        .ok_or_else(|| ParseError::InvalidFormat(format!("{}: missing {}", id, side)))?;
    let value: Coord = token.parse().map_err(|source| ParseError::InvalidNumber {
        token: token.to_string(),
        source,
    })?;
    check_side(id, side, value)?;
    Ok(value)
}

fn check_side(id: &str, side: &str, value: Coord) -> Result<(), ParseError> {
    if value < 1 {
        return Err(ParseError::InvalidFormat(format!(
            "{}: {} must be at least 1, got {}",
            id, side, value
        )));
    }
    Ok(())
}
