// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Input events as the popup sees them
//!
//! Hosts translate their native events into `PopupEvent`s; positions are in
//! popup client coordinates.

use kurbo::Point;

/// Keys the popup reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKey {
    Escape,
    Enter,
    Space,
    F4,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    /// The Alt key on its own
    Alt,
    Char(char),
}

/// Modifier state accompanying a key press. Only Alt changes what a key
/// does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    pub alt: bool,
}

impl KeyModifiers {
    pub const NONE: KeyModifiers = KeyModifiers { alt: false };

    pub const ALT: KeyModifiers = KeyModifiers { alt: true };
}

/// One event pulled from the host's queue
#[derive(Debug, Clone, PartialEq)]
pub enum PopupEvent {
    PointerMove(Point),
    /// Primary button press
    PointerDown(Point),
    PointerUp(Point),
    KeyDown(PopupKey, KeyModifiers),
    KeyUp(PopupKey),
    /// Another window took the pointer capture
    CaptureLost,
    /// Anything else; handed back to the host untouched
    Other,
}

impl PopupEvent {
    pub fn key(key: PopupKey) -> Self {
        PopupEvent::KeyDown(key, KeyModifiers::NONE)
    }

    pub fn alt_key(key: PopupKey) -> Self {
        PopupEvent::KeyDown(key, KeyModifiers::ALT)
    }
}

/// Whether the popup keeps running after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The popup released capture; `okayed` tells commit from cancel
    Close { okayed: bool },
}
