// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors
//!
//! Two sets live here. `system` holds the flat colors used by the manual
//! (unthemed) renderers, as `Rgb` because the classic lowlight is blended
//! from them. `button`, `menu` and `tooltip` hold the colors the built-in
//! `ThemeQuery` implementation paints its parts with.

use peniko::Color;

use crate::model::Rgb;

// ============================================================================
// BASE COLORS -- a dark to light gradient
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x10, 0x10, 0x10);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_D: Color = Color::from_rgb8(0x40, 0x40, 0x40);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_H: Color = Color::from_rgb8(0x80, 0x80, 0x80);
const BASE_J: Color = Color::from_rgb8(0xa0, 0xa0, 0xa0);
const BASE_L: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);
const BASE_N: Color = Color::from_rgb8(0xe0, 0xe0, 0xe0);
const BASE_O: Color = Color::from_rgb8(0xf0, 0xf0, 0xf0);

// ============================================================================
// CLASSIC SYSTEM COLORS (manual rendering)
// ============================================================================
const SYS_MENU: Rgb = Rgb::new(0xF0, 0xF0, 0xF0);
const SYS_MENU_TEXT: Rgb = Rgb::new(0x00, 0x00, 0x00);
const SYS_HIGHLIGHT: Rgb = Rgb::new(0x00, 0x78, 0xD7);
const SYS_MENU_HILIGHT: Rgb = Rgb::new(0x33, 0x99, 0xFF);
const SYS_HIGHLIGHT_TEXT: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
const SYS_BTN_FACE: Rgb = Rgb::new(0xF0, 0xF0, 0xF0);
const SYS_BTN_TEXT: Rgb = Rgb::new(0x00, 0x00, 0x00);
const SYS_BTN_HIGHLIGHT: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
const SYS_BTN_SHADOW: Rgb = Rgb::new(0xA0, 0xA0, 0xA0);
const SYS_3D_DARK_SHADOW: Rgb = Rgb::new(0x69, 0x69, 0x69);
const SYS_3D_SHADOW: Rgb = Rgb::new(0xA0, 0xA0, 0xA0);

// ============================================================================
// THEMED PARTS (built-in ThemeQuery)
// ============================================================================
// Push button
const BUTTON_FACE: Color = BASE_C;
const BUTTON_FACE_HOT: Color = BASE_D;
const BUTTON_FACE_PRESSED: Color = BASE_A;
const BUTTON_FACE_DISABLED: Color = BASE_C;
const BUTTON_OUTLINE: Color = BASE_F;
const BUTTON_OUTLINE_DEFAULTED: Color = Color::from_rgb8(0x57, 0x9a, 0xff);
const BUTTON_EDGE_SHADOW: Color = BASE_F;
const BUTTON_EDGE_LIGHT: Color = BASE_J;

// Drop-down arrow
const ARROW: Color = BASE_L;
const ARROW_DISABLED: Color = BASE_F;

// Menu popup
const MENU_BORDER: Color = BASE_F;
const MENU_BACKGROUND: Color = BASE_C;
const MENU_TEXT: Color = BASE_L;
const MENU_TEXT_HOT: Color = BASE_O;
const MENU_ITEM_HOT: Color = Color::from_rgba8(0x57, 0x9a, 0xff, 0x60);
const MENU_ITEM_PUSHED: Color = BASE_H;
const MENU_ITEM_PUSHED_OUTLINE: Color = BASE_N;

// Tooltip
const TOOLTIP_BACKGROUND: Color = BASE_A;
const TOOLTIP_TEXT: Color = BASE_N;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Flat colors for manual (unthemed) rendering
pub mod system {
    use crate::model::Rgb;

    pub const MENU: Rgb = super::SYS_MENU;
    pub const MENU_TEXT: Rgb = super::SYS_MENU_TEXT;
    pub const HIGHLIGHT: Rgb = super::SYS_HIGHLIGHT;
    /// Highlight used by flat menus
    pub const MENU_HILIGHT: Rgb = super::SYS_MENU_HILIGHT;
    pub const HIGHLIGHT_TEXT: Rgb = super::SYS_HIGHLIGHT_TEXT;
    pub const BTN_FACE: Rgb = super::SYS_BTN_FACE;
    pub const BTN_TEXT: Rgb = super::SYS_BTN_TEXT;
    pub const BTN_HIGHLIGHT: Rgb = super::SYS_BTN_HIGHLIGHT;
    pub const BTN_SHADOW: Rgb = super::SYS_BTN_SHADOW;
    pub const DARK_SHADOW: Rgb = super::SYS_3D_DARK_SHADOW;
    pub const SHADOW_3D: Rgb = super::SYS_3D_SHADOW;
}

/// Colors for push-button parts
pub mod button {
    use super::Color;

    pub const FACE: Color = super::BUTTON_FACE;
    pub const FACE_HOT: Color = super::BUTTON_FACE_HOT;
    pub const FACE_PRESSED: Color = super::BUTTON_FACE_PRESSED;
    pub const FACE_DISABLED: Color = super::BUTTON_FACE_DISABLED;
    pub const OUTLINE: Color = super::BUTTON_OUTLINE;
    pub const OUTLINE_DEFAULTED: Color = super::BUTTON_OUTLINE_DEFAULTED;
    pub const EDGE_SHADOW: Color = super::BUTTON_EDGE_SHADOW;
    pub const EDGE_LIGHT: Color = super::BUTTON_EDGE_LIGHT;
    pub const ARROW: Color = super::ARROW;
    pub const ARROW_DISABLED: Color = super::ARROW_DISABLED;
}

/// Colors for the popup's menu-style parts
pub mod menu {
    use super::Color;

    pub const BORDER: Color = super::MENU_BORDER;
    pub const BACKGROUND: Color = super::MENU_BACKGROUND;
    pub const TEXT: Color = super::MENU_TEXT;
    pub const TEXT_HOT: Color = super::MENU_TEXT_HOT;
    pub const ITEM_HOT: Color = super::MENU_ITEM_HOT;
    pub const ITEM_PUSHED: Color = super::MENU_ITEM_PUSHED;
    pub const ITEM_PUSHED_OUTLINE: Color = super::MENU_ITEM_PUSHED_OUTLINE;
}

/// Tooltip colors
pub mod tooltip {
    use super::Color;

    pub const BACKGROUND: Color = super::TOOLTIP_BACKGROUND;
    pub const TEXT: Color = super::TOOLTIP_TEXT;
}
