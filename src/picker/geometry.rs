// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Popup geometry: region rectangles, placement and hit-testing
//!
//! The popup stacks three regions: the default caption row, the swatch grid
//! and the custom caption row. All three rectangles are always well formed;
//! a hidden caption row keeps its position and width but has zero height, so
//! hit-testing and painting never special-case visibility.
//!
//! Region rectangles are in popup client coordinates. The window rectangle
//! is in the same space as the button rectangle and work area it was placed
//! against.

use kurbo::{Point, Rect, Size, Vec2};

use super::index::SelectionIndex;
use crate::settings;
use crate::text::{Caption, TextMeasure};

/// Direction the popup opens in, relative to its button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    #[default]
    Down,
    Up,
}

/// Everything the layout depends on
#[derive(Debug, Clone)]
pub struct LayoutInput<'a> {
    /// Default caption, `None` when the row is hidden
    pub default_text: Option<&'a str>,
    /// Custom caption, `None` when the row is hidden
    pub custom_text: Option<&'a str>,
    pub count: usize,
    pub rows: usize,
    pub columns: usize,
    /// The button the popup belongs to
    pub button: Rect,
    /// Area the popup must fit in
    pub work_area: Rect,
}

/// Computed popup geometry
#[derive(Debug, Clone, PartialEq)]
pub struct PopupLayout {
    pub default_text: Rect,
    pub swatches: Rect,
    pub custom_text: Rect,
    pub window: Rect,
    pub slide: SlideDirection,
    count: usize,
    rows: usize,
    columns: usize,
}

impl PopupLayout {
    pub fn compute(input: &LayoutInput<'_>, measure: &dyn TextMeasure) -> Self {
        let cell = settings::popup::SWATCH_CELL;
        let margin = settings::popup::MARGIN;

        // Caption block: the larger of the two shown captions, padded
        let mut text = Size::ZERO;
        if input.default_text.is_some() || input.custom_text.is_some() {
            for caption in [input.custom_text, input.default_text].into_iter().flatten() {
                let extent = measure.text_extent(Caption::parse(caption).display());
                text.width = text.width.max(extent.width);
                text.height = text.height.max(extent.height);
            }
            let pad = settings::popup::TEXT_MARGIN + settings::popup::TEXT_HI_BORDER;
            text.width += pad.width * 2.0;
            text.height += pad.height * 2.0;
        }

        let grid_width = input.columns as f64 * cell.width;
        let grid_height = input.rows as f64 * cell.height;
        let min_width = grid_width.max(text.width);

        let default_height = if input.default_text.is_some() {
            text.height
        } else {
            0.0
        };
        let default_text = Rect::new(0.0, 0.0, min_width, default_height);

        let swatches = Rect::from_origin_size(
            Point::new(((min_width - grid_width) / 2.0).floor(), default_text.y1),
            Size::new(grid_width, grid_height),
        );

        let custom_height = if input.custom_text.is_some() {
            text.height
        } else {
            0.0
        };
        let custom_text = Rect::from_origin_size(
            Point::new(0.0, swatches.y1),
            Size::new(min_width, custom_height),
        );

        // Anchor below the button, then grow by the frame margin
        let mut window = Rect::from_points(default_text.origin(), Point::new(custom_text.x1, custom_text.y1))
            + Vec2::new(input.button.x0, input.button.y1);
        window.x1 += margin.width * 2.0;
        window.y1 += margin.height * 2.0;
        let inset = margin.to_vec2();

        let (window, slide) = place(window, input.button, input.work_area);

        Self {
            default_text: default_text + inset,
            swatches: swatches + inset,
            custom_text: custom_text + inset,
            window,
            slide,
            count: input.count,
            rows: input.rows,
            columns: input.columns,
        }
    }

    /// The popup's own client area
    pub fn client_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.window.size())
    }

    pub fn hit_test(&self, point: Point) -> SelectionIndex {
        if self.custom_text.contains(point) {
            return SelectionIndex::Custom;
        }
        if self.default_text.contains(point) {
            return SelectionIndex::Default;
        }
        if !self.swatches.contains(point) {
            return SelectionIndex::Invalid;
        }

        let cell = settings::popup::SWATCH_CELL;
        let row = ((point.y - self.swatches.y0) / cell.height).floor() as usize;
        let col = ((point.x - self.swatches.x0) / cell.width).floor() as usize;
        if row >= self.rows || col >= self.columns {
            return SelectionIndex::Invalid;
        }
        let index = row * self.columns + col;
        if index < self.count {
            SelectionIndex::Swatch(index)
        } else {
            SelectionIndex::Invalid
        }
    }

    /// Cell rectangle of a selection index
    pub fn swatch_rect(&self, index: SelectionIndex) -> Option<Rect> {
        match index {
            SelectionIndex::Default => Some(self.default_text),
            SelectionIndex::Custom => Some(self.custom_text),
            SelectionIndex::Invalid => None,
            SelectionIndex::Swatch(i) if i < self.count && self.columns > 0 => {
                let cell = settings::popup::SWATCH_CELL;
                let origin = Point::new(
                    self.swatches.x0 + cell.width * (i % self.columns) as f64,
                    self.swatches.y0 + cell.height * (i / self.columns) as f64,
                );
                Some(Rect::from_origin_size(origin, cell))
            }
            SelectionIndex::Swatch(_) => None,
        }
    }
}

/// Keep the window on the work area
///
/// Horizontal overflow shifts the window; bottom overflow flips it above the
/// button. Overflowing the top after the flip is left alone.
fn place(mut window: Rect, button: Rect, work_area: Rect) -> (Rect, SlideDirection) {
    if window.x1 > work_area.x1 {
        window = window + Vec2::new(work_area.x1 - window.x1, 0.0);
    }
    if window.x0 < work_area.x0 {
        window = window + Vec2::new(work_area.x0 - window.x0, 0.0);
    }
    let mut slide = SlideDirection::Down;
    if window.y1 > work_area.y1 {
        window = window + Vec2::new(0.0, -(button.height() + window.height()));
        slide = SlideDirection::Up;
    }
    (window, slide)
}
