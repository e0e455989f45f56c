// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Swatch Picker: a color button with a drop-down swatch grid
//!
//! `PickerButton` holds the color, the color table and the display options
//! and runs the click protocol. `picker` is the popup: layout, keyboard
//! navigation and painting, driven either stepwise through `PopupState` or
//! as a blocking loop over a `PopupHost`. `components` wraps both in a
//! Masonry widget and a Xilem view.

pub mod button;
pub mod components;
pub mod config;
pub mod custom_picker;
pub mod draw;
pub mod model;
pub mod picker;
pub mod settings;
pub mod text;
pub mod theme;
pub mod theme_query;

pub use button::{Notification, NotificationCode, NotificationSink, PickerButton};
pub use components::{ColorPickerButtonWidget, color_picker_button};
pub use config::{ConfigError, PickerConfig};
pub use custom_picker::{CustomColorPicker, SystemColorChooser};
pub use model::{ColorEntry, ColorTable, ColorTableError, ColorValue, Palette, Rgb};
pub use picker::{PickerPopup, PopupHost, PopupState, SelectionIndex};
