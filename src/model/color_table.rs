// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! The table of swatches shown in the picker popup.
//!
//! A `ColorTable` is an ordered list of `ColorEntry` values laid out in a
//! fixed number of columns. Entries are index-addressed; the row count is
//! derived. A table never holds more than `settings::table::MAX` entries and
//! never has zero columns: constructors reject both instead of truncating.

use thiserror::Error;

use super::Rgb;
use crate::settings;

/// One swatch: a color and its display label
///
/// An empty label means "no tooltip" for this swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub value: Rgb,
    pub label: String,
}

impl ColorEntry {
    pub fn new(value: Rgb, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// An entry without a label
    pub fn unlabeled(value: Rgb) -> Self {
        Self::new(value, String::new())
    }
}

/// Reasons a color table is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorTableError {
    #[error("color table has {count} entries, the maximum is {max}")]
    TooManyEntries { count: usize, max: usize },
    #[error("color table must have at least one column")]
    ZeroColumns,
    #[error("{values} color values but {labels} labels")]
    LengthMismatch { values: usize, labels: usize },
}

/// Ordered swatches arranged into a fixed-column grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<ColorEntry>,
    columns: usize,
}

impl ColorTable {
    /// Build a table from full entries
    pub fn new(entries: Vec<ColorEntry>, columns: usize) -> Result<Self, ColorTableError> {
        if entries.len() > settings::table::MAX {
            return Err(ColorTableError::TooManyEntries {
                count: entries.len(),
                max: settings::table::MAX,
            });
        }
        if columns == 0 {
            return Err(ColorTableError::ZeroColumns);
        }
        Ok(Self { entries, columns })
    }

    /// Build a table from parallel value and label slices
    pub fn from_parts<S: AsRef<str>>(
        values: &[Rgb],
        labels: &[S],
        columns: usize,
    ) -> Result<Self, ColorTableError> {
        if values.len() != labels.len() {
            return Err(ColorTableError::LengthMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }
        let entries = values
            .iter()
            .zip(labels)
            .map(|(&value, label)| ColorEntry::new(value, label.as_ref()))
            .collect();
        Self::new(entries, columns)
    }

    /// Build a table from bare values; every label is empty, which
    /// suppresses tooltips regardless of the tooltip setting
    pub fn from_values(values: &[Rgb], columns: usize) -> Result<Self, ColorTableError> {
        Self::new(values.iter().copied().map(ColorEntry::unlabeled).collect(), columns)
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ColorEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.entries.len().div_ceil(self.columns)
    }

    /// `(rows, columns)`
    pub fn grid(&self) -> (usize, usize) {
        (self.rows(), self.columns)
    }

    /// Index of the first entry with the given value
    pub fn position(&self, value: Rgb) -> Option<usize> {
        self.entries.iter().position(|entry| entry.value == value)
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_COLORS
                .iter()
                .map(|&((r, g, b), label)| ColorEntry::new(Rgb::new(r, g, b), label))
                .collect(),
            columns: settings::table::COLUMNS,
        }
    }
}

/// The stock 48-color table (six rows of eight)
const DEFAULT_COLORS: [((u8, u8, u8), &str); 48] = [
    ((0x00, 0x00, 0x00), "Black"),
    ((0x80, 0x40, 0x00), "Brown"),
    ((0x33, 0x33, 0x00), "Olive Green"),
    ((0x00, 0x33, 0x00), "Dark Green"),
    ((0x00, 0x33, 0x66), "Dark Teal"),
    ((0x00, 0x00, 0x80), "Dark Blue"),
    ((0x33, 0x33, 0x99), "Indigo"),
    ((0x33, 0x33, 0x33), "80% Gray"),
    ((0x80, 0x00, 0x00), "Dark Red"),
    ((0xFF, 0x66, 0x00), "Orange"),
    ((0x80, 0x80, 0x00), "Dark Yellow"),
    ((0x00, 0x80, 0x00), "Green"),
    ((0x00, 0x80, 0x80), "Teal"),
    ((0x00, 0x00, 0xFF), "Blue"),
    ((0x66, 0x66, 0x99), "Blue-Gray"),
    ((0x5B, 0x5B, 0x5B), "65% Gray"),
    ((0xFF, 0x00, 0x00), "Red"),
    ((0xFF, 0x99, 0x00), "Light Orange"),
    ((0x99, 0xCC, 0x00), "Lime"),
    ((0x33, 0x99, 0x66), "Sea Green"),
    ((0x33, 0xCC, 0xCC), "Aqua"),
    ((0x33, 0x66, 0xFF), "Light Blue"),
    ((0x80, 0x00, 0x80), "Violet"),
    ((0x80, 0x80, 0x80), "50% Gray"),
    ((0xFF, 0x00, 0xFF), "Pink"),
    ((0xFF, 0xCC, 0x00), "Gold"),
    ((0xFF, 0xFF, 0x00), "Yellow"),
    ((0x00, 0xFF, 0x00), "Bright Green"),
    ((0x00, 0xFF, 0xFF), "Turquoise"),
    ((0x00, 0xCC, 0xFF), "Sky Blue"),
    ((0x99, 0x33, 0x66), "Plum"),
    ((0xC0, 0xC0, 0xC0), "25% Gray"),
    ((0xFF, 0x99, 0xCC), "Rose"),
    ((0xFF, 0xCC, 0x99), "Tan"),
    ((0xFF, 0xFF, 0x99), "Light Yellow"),
    ((0xCC, 0xFF, 0xCC), "Light Green"),
    ((0xCC, 0xFF, 0xFF), "Light Turquoise"),
    ((0x99, 0xCC, 0xFF), "Pale Blue"),
    ((0xCC, 0x99, 0xFF), "Lavender"),
    ((0xDF, 0xDF, 0xDF), "12.5% Gray"),
    ((0xFF, 0xCC, 0xFF), "Light Pink"),
    ((0xFF, 0xEE, 0xCC), "Cantaloupe"),
    ((0xFF, 0xFF, 0xCC), "Banana"),
    ((0xEE, 0xFF, 0xEE), "Honeydew"),
    ((0xEE, 0xFF, 0xFF), "Ice"),
    ((0xCC, 0xEE, 0xFF), "Mist"),
    ((0xEE, 0xCC, 0xFF), "Thistle"),
    ((0xFF, 0xFF, 0xFF), "White"),
];
