// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Logical selection indices of the popup
//!
//! The popup navigates a signed index space: three reserved negative values
//! for the caption rows and "nothing", then `0..count` for real swatches.

use std::fmt;

/// Raw value of `SelectionIndex::Default`
pub const DEFAULT_INDEX: isize = -3;
/// Raw value of `SelectionIndex::Custom`
pub const CUSTOM_INDEX: isize = -2;
/// Raw value of `SelectionIndex::Invalid`
pub const INVALID_INDEX: isize = -1;

/// A position in the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionIndex {
    /// The "automatic" caption row
    Default,
    /// The "more colors" caption row
    Custom,
    /// Nothing
    #[default]
    Invalid,
    /// A swatch of the color table
    Swatch(usize),
}

impl SelectionIndex {
    pub fn from_raw(raw: isize) -> Self {
        match raw {
            DEFAULT_INDEX => SelectionIndex::Default,
            CUSTOM_INDEX => SelectionIndex::Custom,
            n if n >= 0 => SelectionIndex::Swatch(n as usize),
            _ => SelectionIndex::Invalid,
        }
    }

    pub fn to_raw(self) -> isize {
        match self {
            SelectionIndex::Default => DEFAULT_INDEX,
            SelectionIndex::Custom => CUSTOM_INDEX,
            SelectionIndex::Invalid => INVALID_INDEX,
            SelectionIndex::Swatch(i) => i as isize,
        }
    }

    pub fn is_valid(self) -> bool {
        self != SelectionIndex::Invalid
    }

    /// Swatch index, if this is a swatch
    pub fn swatch(self) -> Option<usize> {
        match self {
            SelectionIndex::Swatch(i) => Some(i),
            _ => None,
        }
    }

    /// Is this one of the two caption rows?
    pub fn is_caption(self) -> bool {
        matches!(self, SelectionIndex::Default | SelectionIndex::Custom)
    }
}

impl fmt::Display for SelectionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionIndex::Default => f.write_str("default"),
            SelectionIndex::Custom => f.write_str("custom"),
            SelectionIndex::Invalid => f.write_str("invalid"),
            SelectionIndex::Swatch(i) => write!(f, "swatch {i}"),
        }
    }
}
