// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Masonry widgets and their Xilem views

pub mod color_picker_button;

pub use color_picker_button::{
    ColorPickerButtonView, ColorPickerButtonWidget, color_picker_button, key_modifiers, popup_key,
};
