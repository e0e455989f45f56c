// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard navigation over the popup's index space
//!
//! Swatches are walked in table order. Stepping off the front of the table
//! lands on the default row, stepping off the end lands on the custom row,
//! and the two caption rows wrap into each other. A landing on a row that is
//! not shown is moved on in the same direction.

use super::index::SelectionIndex;

/// What navigation needs to know about the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavContext {
    pub count: usize,
    pub show_default: bool,
    pub show_custom: bool,
}

impl NavContext {
    fn first_swatch(&self) -> SelectionIndex {
        if self.count > 0 {
            SelectionIndex::Swatch(0)
        } else {
            SelectionIndex::Invalid
        }
    }

    fn last_swatch(&self) -> SelectionIndex {
        match self.count.checked_sub(1) {
            Some(last) => SelectionIndex::Swatch(last),
            None => SelectionIndex::Invalid,
        }
    }

    /// Is `index` a place the popup can show?
    pub fn is_enabled(&self, index: SelectionIndex) -> bool {
        match index {
            SelectionIndex::Default => self.show_default,
            SelectionIndex::Custom => self.show_custom,
            SelectionIndex::Invalid => true,
            SelectionIndex::Swatch(i) => i < self.count,
        }
    }
}

/// Move `offset` steps from `current`
///
/// From `Invalid` (nothing hovered yet) the move goes to `chosen`, the entry
/// matching the button's color when the popup opened. A zero offset leaves
/// the position unchanged.
pub fn step(
    current: SelectionIndex,
    chosen: SelectionIndex,
    offset: isize,
    nav: &NavContext,
) -> SelectionIndex {
    if offset == 0 {
        return current;
    }
    let forward = offset > 0;

    let mut next = match current {
        SelectionIndex::Invalid => chosen,
        SelectionIndex::Default if forward => nav.first_swatch(),
        SelectionIndex::Default => SelectionIndex::Custom,
        SelectionIndex::Custom if forward => SelectionIndex::Default,
        SelectionIndex::Custom => nav.last_swatch(),
        SelectionIndex::Swatch(i) => {
            let moved = i as isize + offset;
            if moved < 0 {
                SelectionIndex::Default
            } else if moved as usize >= nav.count {
                SelectionIndex::Custom
            } else {
                SelectionIndex::Swatch(moved as usize)
            }
        }
    };

    // Two hidden rows, so two corrections at most
    for _ in 0..2 {
        next = match next {
            SelectionIndex::Default if !nav.show_default => {
                if forward {
                    nav.first_swatch()
                } else {
                    SelectionIndex::Custom
                }
            }
            SelectionIndex::Custom if !nav.show_custom => {
                if forward {
                    SelectionIndex::Default
                } else {
                    nav.last_swatch()
                }
            }
            _ => break,
        };
    }

    match next {
        SelectionIndex::Swatch(i) if i >= nav.count => SelectionIndex::Invalid,
        other => other,
    }
}
