// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Data types shared by the button and its popup

pub mod color;
pub mod color_table;
pub mod palette;

pub use color::{ColorValue, ParseRgbError, Rgb};
pub use color_table::{ColorEntry, ColorTable, ColorTableError};
pub use palette::Palette;
