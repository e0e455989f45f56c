// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Brushes derived from a color table
//!
//! The owning button rebuilds its palette every time the table is replaced;
//! the old palette is dropped first.

use peniko::Brush;

use super::ColorTable;

/// One solid brush per table entry, in table order
#[derive(Debug, Clone, Default)]
pub struct Palette {
    brushes: Vec<Brush>,
}

impl Palette {
    pub fn from_table(table: &ColorTable) -> Self {
        Self {
            brushes: table
                .entries()
                .iter()
                .map(|entry| Brush::Solid(entry.value.to_color()))
                .collect(),
        }
    }

    pub fn brush(&self, index: usize) -> Option<&Brush> {
        self.brushes.get(index)
    }

    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }
}
