// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Picker settings and metric constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors) belongs in `theme.rs`.
//!
//! Every element of the popup is sized by the same three features: its core
//! size, its highlight border and its margin. For captions the core size is
//! the measured text extent; for swatches it is `SWATCH_CORE`.

use kurbo::Size;

use crate::model::Rgb;

// ============================================================================
// POPUP METRICS
// ============================================================================
/// Highlight border around caption text
const TEXT_HI_BORDER: Size = Size::new(3.0, 3.0);
/// Margin outside the caption highlight border
const TEXT_MARGIN: Size = Size::new(2.0, 2.0);

/// Highlight border around a swatch (X and Y must match)
const SWATCH_HI_BORDER: Size = Size::new(2.0, 2.0);
/// Margin outside the swatch highlight border (X and Y must match)
const SWATCH_MARGIN: Size = Size::new(0.0, 0.0);
/// Core (color) area of a swatch
const SWATCH_CORE: Size = Size::new(14.0, 14.0);

/// Outer margin between the popup frame and its content
const POPUP_MARGIN: Size = Size::new(2.0, 2.0);

// ============================================================================
// BUTTON METRICS
// ============================================================================
/// Preferred size of the button when unconstrained
const BUTTON_SIZE: Size = Size::new(56.0, 24.0);
/// Inner edge between the frame and the content
const BUTTON_EDGE: Size = Size::new(2.0, 2.0);
/// Single-pixel border width
const BUTTON_BORDER: f64 = 1.0;
/// Focus rectangle outset
const FOCUS_BORDER: f64 = 1.0;

// Arrow sizes were matched by eye against native combo boxes
const THEMED_ARROW_WIDTH: f64 = 9.0;
const THEMED_ARROW_HEIGHT: f64 = 14.0;
const CLASSIC_ARROW_WIDTH: f64 = 6.0;
const CLASSIC_ARROW_HEIGHT: f64 = 3.0;

// ============================================================================
// COLOR TABLE
// ============================================================================
/// Upper bound on table entries (width of a palette entry-count field)
const COLOR_TABLE_MAX: usize = u16::MAX as usize;
/// Columns used when a table is installed without an explicit count
const COLOR_TABLE_COLUMNS: usize = 8;

// ============================================================================
// DEFAULTS
// ============================================================================
const DEFAULT_COLOR: Rgb = Rgb::BLACK;
const DEFAULT_TEXT: &str = "&Automatic";
const CUSTOM_TEXT: &str = "&More Colors…";
const SHOW_DEFAULT: bool = true;
const SHOW_CUSTOM: bool = true;
const SHOW_TOOLTIPS: bool = true;
const TRACK_SELECTION: bool = false;
/// Mnemonic underlines stay hidden until Alt is pressed
const SHOW_ACCELERATORS: bool = false;

/// Weight (out of 256) of the highlight color in the classic lowlight fill
const LOWLIGHT_ALPHA: u16 = 48;

/// Caption font size
const CAPTION_FONT_SIZE: f64 = 13.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Popup layout metrics
pub mod popup {
    use kurbo::Size;

    pub const TEXT_HI_BORDER: Size = super::TEXT_HI_BORDER;
    pub const TEXT_MARGIN: Size = super::TEXT_MARGIN;
    pub const SWATCH_HI_BORDER: Size = super::SWATCH_HI_BORDER;
    pub const SWATCH_MARGIN: Size = super::SWATCH_MARGIN;
    pub const SWATCH_CORE: Size = super::SWATCH_CORE;

    /// Full swatch cell: core plus border and margin on both sides
    pub const SWATCH_CELL: Size = Size::new(
        super::SWATCH_CORE.width + (super::SWATCH_HI_BORDER.width + super::SWATCH_MARGIN.width) * 2.0,
        super::SWATCH_CORE.height
            + (super::SWATCH_HI_BORDER.height + super::SWATCH_MARGIN.height) * 2.0,
    );

    pub const MARGIN: Size = super::POPUP_MARGIN;
    pub const CAPTION_FONT_SIZE: f64 = super::CAPTION_FONT_SIZE;
    pub const LOWLIGHT_ALPHA: u16 = super::LOWLIGHT_ALPHA;
}

/// Button drawing metrics
pub mod button {
    use kurbo::Size;

    pub const SIZE: Size = super::BUTTON_SIZE;
    pub const EDGE: Size = super::BUTTON_EDGE;
    pub const BORDER: f64 = super::BUTTON_BORDER;
    pub const FOCUS_BORDER: f64 = super::FOCUS_BORDER;

    /// Drop-down arrow glyph sizes
    pub mod arrow {
        pub const THEMED_WIDTH: f64 = super::super::THEMED_ARROW_WIDTH;
        pub const THEMED_HEIGHT: f64 = super::super::THEMED_ARROW_HEIGHT;
        pub const CLASSIC_WIDTH: f64 = super::super::CLASSIC_ARROW_WIDTH;
        pub const CLASSIC_HEIGHT: f64 = super::super::CLASSIC_ARROW_HEIGHT;
    }
}

/// Color table limits
pub mod table {
    pub const MAX: usize = super::COLOR_TABLE_MAX;
    pub const COLUMNS: usize = super::COLOR_TABLE_COLUMNS;
}

/// Defaults for a freshly constructed button
pub mod defaults {
    use crate::model::Rgb;

    pub const COLOR: Rgb = super::DEFAULT_COLOR;
    pub const DEFAULT_TEXT: &str = super::DEFAULT_TEXT;
    pub const CUSTOM_TEXT: &str = super::CUSTOM_TEXT;
    pub const SHOW_DEFAULT: bool = super::SHOW_DEFAULT;
    pub const SHOW_CUSTOM: bool = super::SHOW_CUSTOM;
    pub const SHOW_TOOLTIPS: bool = super::SHOW_TOOLTIPS;
    pub const TRACK_SELECTION: bool = super::TRACK_SELECTION;
    pub const SHOW_ACCELERATORS: bool = super::SHOW_ACCELERATORS;
}
