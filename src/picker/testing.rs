// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! A scripted `PopupHost` for driving popups in tests

use std::collections::VecDeque;

use kurbo::{Rect, Size};

use super::geometry::SlideDirection;
use super::host::{PopupClass, PopupHost};
use super::input::PopupEvent;
use super::paint::PopupPaint;
use crate::text::TextMeasure;

/// Plays back a fixed list of events
pub(crate) struct ScriptedHost {
    pub events: VecDeque<PopupEvent>,
    pub captured: bool,
    pub button: Rect,
    pub work_area: Rect,
    pub shown: Option<(Rect, SlideDirection)>,
    pub hidden: bool,
    pub presents: usize,
    pub last_paint: Option<PopupPaint>,
    pub tooltips: Vec<Option<String>>,
}

impl ScriptedHost {
    pub fn new(events: Vec<PopupEvent>) -> Self {
        Self {
            events: events.into(),
            captured: false,
            button: Rect::new(10.0, 10.0, 70.0, 34.0),
            work_area: Rect::new(0.0, 0.0, 800.0, 600.0),
            shown: None,
            hidden: false,
            presents: 0,
            last_paint: None,
            tooltips: Vec::new(),
        }
    }
}

impl TextMeasure for ScriptedHost {
    fn text_extent(&self, text: &str) -> Size {
        Size::new(7.0 * text.chars().count() as f64, 13.0)
    }
}

impl PopupHost for ScriptedHost {
    fn button_rect(&self) -> Rect {
        self.button
    }

    fn work_area(&self, _button: Rect) -> Rect {
        self.work_area
    }

    fn show(&mut self, _class: &PopupClass, window: Rect, slide: SlideDirection) {
        self.shown = Some((window, slide));
    }

    fn present(&mut self, paint: &PopupPaint) {
        self.presents += 1;
        self.last_paint = Some(paint.clone());
    }

    fn set_capture(&mut self) {
        self.captured = true;
    }

    fn has_capture(&self) -> bool {
        self.captured
    }

    fn release_capture(&mut self) {
        self.captured = false;
    }

    fn next_event(&mut self) -> Option<PopupEvent> {
        let event = self.events.pop_front()?;
        if event == PopupEvent::CaptureLost {
            self.captured = false;
        }
        Some(event)
    }

    fn set_tooltip(&mut self, text: Option<&str>) {
        self.tooltips.push(text.map(str::to_string));
    }

    fn hide(&mut self) {
        self.hidden = true;
    }
}
