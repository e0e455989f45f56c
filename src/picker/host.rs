// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! The window-system side of the popup
//!
//! `PickerPopup::open` runs its own event pump against a `PopupHost`. The
//! host owns the actual popup surface, the pointer capture and the event
//! queue; the popup owns everything else.

use std::sync::OnceLock;

use kurbo::Rect;

use super::geometry::SlideDirection;
use super::input::PopupEvent;
use super::paint::PopupPaint;
use crate::text::TextMeasure;

/// Process-wide description of the popup surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupClass {
    pub name: &'static str,
    /// Ask for a drop shadow where the platform supports one
    pub drop_shadow: bool,
    /// The popup never takes keyboard focus from its owner
    pub no_activate: bool,
}

static POPUP_CLASS: OnceLock<PopupClass> = OnceLock::new();

impl PopupClass {
    /// The shared class, registered on first use
    pub fn get() -> &'static PopupClass {
        POPUP_CLASS.get_or_init(|| {
            tracing::debug!("Registering popup class");
            PopupClass {
                name: "SwatchPickerPopup",
                drop_shadow: true,
                no_activate: true,
            }
        })
    }
}

/// A surface the popup can run on
pub trait PopupHost: TextMeasure {
    /// The button's rectangle in the coordinate space of `work_area`
    fn button_rect(&self) -> Rect;

    /// Area the popup window has to fit in
    fn work_area(&self, button: Rect) -> Rect;

    /// Place and show the popup window
    fn show(&mut self, class: &PopupClass, window: Rect, slide: SlideDirection);

    /// Paint the popup now, consuming any pending paint request
    fn present(&mut self, paint: &PopupPaint);

    fn set_capture(&mut self);

    fn has_capture(&self) -> bool;

    fn release_capture(&mut self);

    /// Block until the next event. `None` means the event source is gone.
    fn next_event(&mut self) -> Option<PopupEvent>;

    /// Default processing for events the popup does not handle
    fn dispatch(&mut self, _event: &PopupEvent) {}

    /// Show or hide the hover tooltip
    fn set_tooltip(&mut self, _text: Option<&str>) {}

    /// Tear the popup window down
    fn hide(&mut self);
}
