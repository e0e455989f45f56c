// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! The drop-down swatch popup
//!
//! A popup lives for one activation of its button. `PopupState` holds the
//! transient state (original color, hover and chosen indices, geometry) and
//! reacts to one `PopupEvent` at a time, so an event-driven host can feed it
//! directly. `PickerPopup::open` wraps it in a private, capture-governed
//! event pump for hosts that want the blocking call.
//!
//! Two indices drive everything:
//! - `current` is the hover position; it starts out `Invalid`
//! - `chosen` is the entry matching the button's color at open time
//!
//! Closing with nothing hovered is a cancel.

mod geometry;
mod host;
mod index;
mod input;
mod navigation;
mod paint;

#[cfg(test)]
pub(crate) mod testing;

pub use geometry::{LayoutInput, PopupLayout, SlideDirection};
pub use host::{PopupClass, PopupHost};
pub use index::{CUSTOM_INDEX, DEFAULT_INDEX, INVALID_INDEX, SelectionIndex};
pub use input::{Flow, KeyModifiers, PopupEvent, PopupKey};
pub use navigation::{NavContext, step};
pub use paint::{
    ClassicCell, ClassicColors, ClassicRenderer, PaintSwatchInfo, PopupPaint, SwatchContent,
    ThemedRenderer, paint_popup,
};

use kurbo::{Point, Rect};

use crate::button::PickerButton;
use crate::model::{ColorValue, Rgb};
use crate::settings;
use crate::text::{Caption, TextMeasure};

// ============================================================================
// POPUP STATE
// ============================================================================

/// State of one popup activation
#[derive(Debug, Clone)]
pub struct PopupState {
    /// Effective button color when the popup opened
    original: Rgb,
    /// Hover position
    current: SelectionIndex,
    /// Entry matching the color at open time
    chosen: SelectionIndex,
    okayed: bool,
    closed: bool,
    layout: PopupLayout,
    tooltip: Option<String>,
    tooltip_changed: bool,
    needs_paint: bool,
}

impl PopupState {
    /// Lay out the popup and pick the initially chosen entry
    pub fn begin(
        button: &PickerButton,
        button_rect: Rect,
        work_area: Rect,
        measure: &dyn TextMeasure,
    ) -> Self {
        let table = button.color_table();
        let (rows, columns) = table.grid();
        let input = LayoutInput {
            default_text: button.show_default().then(|| button.default_text()),
            custom_text: button.show_custom().then(|| button.custom_text()),
            count: table.len(),
            rows,
            columns,
            button: button_rect,
            work_area,
        };
        let layout = PopupLayout::compute(&input, measure);

        let mut state = Self {
            original: button.color(),
            current: SelectionIndex::Invalid,
            chosen: SelectionIndex::Invalid,
            okayed: false,
            closed: false,
            layout,
            tooltip: None,
            tooltip_changed: false,
            needs_paint: true,
        };
        state.change_selection_to_color(button, button.raw_color());

        tracing::debug!(
            "Popup opened: {}x{} grid, chosen {}, window {:?}",
            rows,
            columns,
            state.chosen,
            state.layout.window
        );
        state
    }

    pub fn layout(&self) -> &PopupLayout {
        &self.layout
    }

    pub fn current(&self) -> SelectionIndex {
        self.current
    }

    pub fn chosen(&self) -> SelectionIndex {
        self.chosen
    }

    pub fn original(&self) -> Rgb {
        self.original
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_okayed(&self) -> bool {
        self.okayed
    }

    /// Label of the hovered swatch, when tooltips are on
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Has the tooltip changed since the last call?
    pub fn take_tooltip_change(&mut self) -> bool {
        std::mem::take(&mut self.tooltip_changed)
    }

    /// Does the popup need repainting? Clears the request.
    pub fn take_needs_paint(&mut self) -> bool {
        std::mem::take(&mut self.needs_paint)
    }

    pub fn hit_test(&self, point: Point) -> SelectionIndex {
        self.layout.hit_test(point)
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Resolve an index to the color it stands for
    pub fn color_from_index(&self, button: &PickerButton, index: SelectionIndex) -> ColorValue {
        match index {
            SelectionIndex::Default => ColorValue::Automatic,
            SelectionIndex::Custom => {
                if self.chosen != SelectionIndex::Custom {
                    self.color_from_index(button, self.chosen)
                } else {
                    ColorValue::Rgb(self.original)
                }
            }
            SelectionIndex::Invalid => ColorValue::Rgb(self.original),
            SelectionIndex::Swatch(i) => match button.color_table().get(i) {
                Some(entry) => ColorValue::Rgb(entry.value),
                None => ColorValue::Rgb(self.original),
            },
        }
    }

    /// Move the hover to `index`
    pub fn change_selection(&mut self, button: &mut PickerButton, index: SelectionIndex) {
        self.current = index;

        if button.track_selection() {
            let source = if index.is_valid() { index } else { self.chosen };
            let color = self.color_from_index(button, source);
            button.apply_popup_color(color);
        }

        let tooltip = match index {
            SelectionIndex::Swatch(i) if button.show_tooltips() => button
                .color_table()
                .get(i)
                .filter(|entry| !entry.label.is_empty())
                .map(|entry| entry.label.clone()),
            _ => None,
        };
        if tooltip != self.tooltip {
            self.tooltip = tooltip;
            self.tooltip_changed = true;
        }

        self.needs_paint = true;
    }

    /// Keyboard navigation by `offset` logical steps
    pub fn change_selection_by_offset(&mut self, button: &mut PickerButton, offset: isize) {
        let nav = NavContext {
            count: button.color_table().len(),
            show_default: button.show_default(),
            show_custom: button.show_custom(),
        };
        let next = step(self.current, self.chosen, offset, &nav);
        self.change_selection(button, next);
    }

    /// Set the chosen entry from a raw button color
    pub fn change_selection_to_color(&mut self, button: &PickerButton, value: ColorValue) {
        self.chosen = match value {
            ColorValue::Automatic if button.show_default() => SelectionIndex::Default,
            ColorValue::Rgb(rgb) => match button.color_table().position(rgb) {
                Some(i) => SelectionIndex::Swatch(i),
                None if button.show_custom() => SelectionIndex::Custom,
                None => SelectionIndex::Invalid,
            },
            ColorValue::Automatic if button.show_custom() => SelectionIndex::Custom,
            ColorValue::Automatic => SelectionIndex::Invalid,
        };
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    pub fn handle_event(&mut self, button: &mut PickerButton, event: &PopupEvent) -> Flow {
        if self.closed {
            return Flow::Close {
                okayed: self.okayed,
            };
        }
        match event {
            PopupEvent::PointerMove(point) => {
                let index = self.hit_test(*point);
                if index != self.current {
                    self.change_selection(button, index);
                }
                Flow::Continue
            }
            PopupEvent::PointerDown(point) => {
                let index = self.hit_test(*point);
                if index != self.current {
                    self.change_selection(button, index);
                }
                self.close()
            }
            PopupEvent::KeyDown(key, modifiers) => self.handle_key(button, *key, *modifiers),
            PopupEvent::CaptureLost => {
                tracing::debug!("Popup lost capture");
                self.closed = true;
                Flow::Close {
                    okayed: self.okayed,
                }
            }
            PopupEvent::PointerUp(_) | PopupEvent::KeyUp(_) | PopupEvent::Other => Flow::Continue,
        }
    }

    fn handle_key(&mut self, button: &mut PickerButton, key: PopupKey, modifiers: KeyModifiers) -> Flow {
        let columns = button.color_table().columns() as isize;

        if modifiers.alt {
            return match key {
                // Alt+Up/Down closes, the same gesture that opened it
                PopupKey::Up | PopupKey::Down => self.close(),
                PopupKey::Alt => self.show_accelerators(button),
                _ => Flow::Continue,
            };
        }

        match key {
            PopupKey::Escape => self.cancel(),
            PopupKey::Enter | PopupKey::Space | PopupKey::F4 => self.close(),
            PopupKey::Left => self.navigate(button, -1),
            PopupKey::Right => self.navigate(button, 1),
            PopupKey::Up | PopupKey::PageUp => self.navigate(button, -columns),
            PopupKey::Down | PopupKey::PageDown => self.navigate(button, columns),
            PopupKey::Alt => self.show_accelerators(button),
            PopupKey::Char(c) => {
                if button.show_default() && Caption::parse(button.default_text()).matches_mnemonic(c) {
                    self.change_selection(button, SelectionIndex::Default);
                    return self.close();
                }
                if button.show_custom() && Caption::parse(button.custom_text()).matches_mnemonic(c) {
                    self.change_selection(button, SelectionIndex::Custom);
                    return self.close();
                }
                Flow::Continue
            }
        }
    }

    fn navigate(&mut self, button: &mut PickerButton, offset: isize) -> Flow {
        self.change_selection_by_offset(button, offset);
        Flow::Continue
    }

    fn show_accelerators(&mut self, button: &mut PickerButton) -> Flow {
        button.set_accelerators_visible(true);
        self.needs_paint = true;
        Flow::Continue
    }

    /// Commit the hovered entry; nothing hovered means cancel
    fn close(&mut self) -> Flow {
        if self.current == SelectionIndex::Invalid {
            return self.cancel();
        }
        self.closed = true;
        self.okayed = true;
        Flow::Close { okayed: true }
    }

    fn cancel(&mut self) -> Flow {
        self.closed = true;
        self.okayed = false;
        Flow::Close { okayed: false }
    }

    // ------------------------------------------------------------------------
    // Commit
    // ------------------------------------------------------------------------

    /// Resolve the final color and write it to the button. Returns whether
    /// the popup ended committed.
    pub fn finish(mut self, button: &mut PickerButton) -> bool {
        if !self.okayed {
            tracing::debug!("Popup canceled");
            return false;
        }

        if self.current == SelectionIndex::Custom {
            // The hook gets a concrete color, never the sentinel
            let seed = if self.chosen == SelectionIndex::Default {
                button.default_color()
            } else {
                self.color_from_index(button, SelectionIndex::Custom)
                    .resolve(button.default_color())
            };
            match button.display_custom_color_picker(seed) {
                Some(color) => {
                    tracing::info!("Custom color picked: {}", color);
                    button.apply_popup_color(ColorValue::Rgb(color));
                }
                None => {
                    tracing::debug!("Custom color picker canceled");
                    self.okayed = false;
                }
            }
        } else {
            let color = self.color_from_index(button, self.current);
            tracing::info!("Popup committed {} ({})", self.current, color);
            button.apply_popup_color(color);
        }
        self.okayed
    }

    // ------------------------------------------------------------------------
    // Paint
    // ------------------------------------------------------------------------

    /// Paint description of one cell
    pub fn paint_swatch_info(&self, button: &PickerButton, index: SelectionIndex) -> Option<PaintSwatchInfo> {
        let rect = self.layout.swatch_rect(index)?;
        let (margin, hi_border, content) = match index {
            SelectionIndex::Default => (
                settings::popup::TEXT_MARGIN,
                settings::popup::TEXT_HI_BORDER,
                SwatchContent::Caption(button.default_text().to_string()),
            ),
            SelectionIndex::Custom => (
                settings::popup::TEXT_MARGIN,
                settings::popup::TEXT_HI_BORDER,
                SwatchContent::Caption(button.custom_text().to_string()),
            ),
            SelectionIndex::Swatch(i) => (
                settings::popup::SWATCH_MARGIN,
                settings::popup::SWATCH_HI_BORDER,
                SwatchContent::Color(button.palette().brush(i)?.clone()),
            ),
            SelectionIndex::Invalid => return None,
        };
        Some(PaintSwatchInfo {
            index,
            hot: index == self.current,
            selected: index == self.chosen,
            rect,
            margin,
            hi_border,
            content,
        })
    }

    /// Paint description of the whole popup
    pub fn paint(&self, button: &PickerButton) -> PopupPaint {
        let mut indices = Vec::with_capacity(button.color_table().len() + 2);
        if button.show_default() {
            indices.push(SelectionIndex::Default);
        }
        indices.extend((0..button.color_table().len()).map(SelectionIndex::Swatch));
        if button.show_custom() {
            indices.push(SelectionIndex::Custom);
        }
        PopupPaint {
            client: self.layout.client_rect(),
            cells: indices
                .into_iter()
                .filter_map(|index| self.paint_swatch_info(button, index))
                .collect(),
            show_accelerators: button.accelerators_visible(),
        }
    }
}

// ============================================================================
// BLOCKING POPUP
// ============================================================================

/// A popup bound to its button for the duration of one `open`
pub struct PickerPopup<'a> {
    button: &'a mut PickerButton,
    class: &'static PopupClass,
}

impl<'a> PickerPopup<'a> {
    pub fn new(button: &'a mut PickerButton) -> Self {
        Self {
            button,
            class: PopupClass::get(),
        }
    }

    /// Show the popup and pump events until capture is gone. Returns `true`
    /// when a color was committed.
    pub fn open(self, host: &mut dyn PopupHost) -> bool {
        let PickerPopup { button, class } = self;

        let button_rect = host.button_rect();
        let work_area = host.work_area(button_rect);
        let mut state = PopupState::begin(button, button_rect, work_area, &*host);

        host.show(class, state.layout.window, state.layout.slide);
        // Paint before taking capture so the first frame is complete
        host.present(&state.paint(button));
        state.take_needs_paint();

        host.set_capture();
        while host.has_capture() {
            let Some(event) = host.next_event() else {
                tracing::debug!("Event source closed while the popup was open");
                break;
            };

            let flow = match event {
                PopupEvent::Other => {
                    host.dispatch(&event);
                    Flow::Continue
                }
                ref event => state.handle_event(button, event),
            };

            if state.take_tooltip_change() {
                host.set_tooltip(state.tooltip());
            }
            match flow {
                Flow::Close { .. } => {
                    if host.has_capture() {
                        host.release_capture();
                    }
                }
                Flow::Continue => {
                    if state.take_needs_paint() {
                        host.present(&state.paint(button));
                    }
                }
            }
        }
        if host.has_capture() {
            host.release_capture();
        }
        if state.tooltip().is_some() {
            host.set_tooltip(None);
        }
        host.hide();

        state.finish(button)
    }
}

#[cfg(test)]
mod tests {
    use peniko::Brush;

    use super::testing::ScriptedHost;
    use super::*;
    use crate::model::ColorEntry;

    const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
    const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
    const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xFF);
    const WHITE: Rgb = Rgb::WHITE;

    fn rgbw_button() -> PickerButton {
        let mut button = PickerButton::new();
        button
            .set_color_table(
                vec![
                    ColorEntry::new(RED, "Red"),
                    ColorEntry::new(GREEN, "Green"),
                    ColorEntry::new(BLUE, "Blue"),
                    ColorEntry::new(WHITE, ""),
                ],
                2,
            )
            .unwrap();
        button.set_show_custom(false);
        button.set_color(GREEN);
        button
    }

    fn begin(button: &PickerButton) -> PopupState {
        let host = ScriptedHost::new(vec![]);
        PopupState::begin(button, host.button_rect(), host.work_area(host.button_rect()), &host)
    }

    #[test]
    fn arrow_keys_then_enter_commit_white() {
        let mut button = rgbw_button();
        let mut host = ScriptedHost::new(vec![
            PopupEvent::key(PopupKey::Right),
            PopupEvent::key(PopupKey::Down),
            PopupEvent::key(PopupKey::Enter),
        ]);
        assert!(PickerPopup::new(&mut button).open(&mut host));
        assert_eq!(button.color(), WHITE);
        assert!(!host.captured);
        assert!(host.hidden);
    }

    #[test]
    fn escape_cancels_and_keeps_the_color() {
        let mut button = rgbw_button();
        let mut host = ScriptedHost::new(vec![PopupEvent::key(PopupKey::Escape)]);
        assert!(!PickerPopup::new(&mut button).open(&mut host));
        assert_eq!(button.color(), GREEN);
    }

    #[test]
    fn hover_starts_on_nothing_so_enter_cancels() {
        let mut button = rgbw_button();
        let mut state = begin(&button);
        assert_eq!(state.current(), SelectionIndex::Invalid);
        assert_eq!(state.chosen(), SelectionIndex::Swatch(1));
        assert_eq!(
            state.handle_event(&mut button, &PopupEvent::key(PopupKey::Enter)),
            Flow::Close { okayed: false }
        );
        assert!(!state.finish(&mut button));
    }

    #[test]
    fn first_arrow_lands_on_the_chosen_swatch() {
        let mut button = rgbw_button();
        let mut state = begin(&button);
        state.handle_event(&mut button, &PopupEvent::key(PopupKey::Left));
        assert_eq!(state.current(), SelectionIndex::Swatch(1));
        state.handle_event(&mut button, &PopupEvent::key(PopupKey::Left));
        assert_eq!(state.current(), SelectionIndex::Swatch(0));
        state.handle_event(&mut button, &PopupEvent::key(PopupKey::Left));
        assert_eq!(state.current(), SelectionIndex::Default);
        // Custom is hidden, so Left from Default wraps to the last swatch
        state.handle_event(&mut button, &PopupEvent::key(PopupKey::Left));
        assert_eq!(state.current(), SelectionIndex::Swatch(3));
    }

    #[test]
    fn click_commits_the_swatch_under_the_pointer() {
        let mut button = rgbw_button();
        let state = begin(&button);
        let blue = state.layout().swatch_rect(SelectionIndex::Swatch(2)).unwrap().center();
        let mut host = ScriptedHost::new(vec![
            PopupEvent::PointerMove(Point::new(-10.0, -10.0)),
            PopupEvent::PointerDown(blue),
        ]);
        assert!(PickerPopup::new(&mut button).open(&mut host));
        assert_eq!(button.color(), BLUE);
    }

    #[test]
    fn click_outside_cancels() {
        let mut button = rgbw_button();
        let mut host = ScriptedHost::new(vec![PopupEvent::PointerDown(Point::new(-10.0, -10.0))]);
        assert!(!PickerPopup::new(&mut button).open(&mut host));
        assert_eq!(button.color(), GREEN);
    }

    #[test]
    fn pointer_moves_repaint_only_on_change() {
        let mut button = rgbw_button();
        let state = begin(&button);
        let red = state.layout().swatch_rect(SelectionIndex::Swatch(0)).unwrap();
        let mut host = ScriptedHost::new(vec![
            PopupEvent::PointerMove(red.center()),
            PopupEvent::PointerMove(red.center() + kurbo::Vec2::new(1.0, 1.0)),
            PopupEvent::PointerMove(red.origin()),
            PopupEvent::key(PopupKey::Escape),
        ]);
        PickerPopup::new(&mut button).open(&mut host);
        // Initial paint plus one for the hover change
        assert_eq!(host.presents, 2);
    }

    #[test]
    fn losing_capture_cancels() {
        let mut button = rgbw_button();
        let mut host = ScriptedHost::new(vec![
            PopupEvent::key(PopupKey::Right),
            PopupEvent::CaptureLost,
            PopupEvent::key(PopupKey::Enter),
        ]);
        assert!(!PickerPopup::new(&mut button).open(&mut host));
        assert_eq!(button.color(), GREEN);
        // The Enter after the capture loss was never read
        assert_eq!(host.events.len(), 1);
    }

    #[test]
    fn tracking_previews_while_hovering() {
        let mut button = rgbw_button();
        button.set_track_selection(true);
        let mut state = begin(&button);
        state.handle_event(&mut button, &PopupEvent::key(PopupKey::Right));
        state.handle_event(&mut button, &PopupEvent::key(PopupKey::Right));
        assert_eq!(button.color(), BLUE);
        let point = Point::new(-10.0, -10.0);
        state.handle_event(&mut button, &PopupEvent::PointerMove(point));
        // Nothing hovered falls back to the chosen entry
        assert_eq!(button.color(), GREEN);
    }

    #[test]
    fn custom_resolves_through_the_chosen_entry() {
        let mut button = rgbw_button();
        button.set_show_custom(true);
        let state = begin(&button);
        assert_eq!(
            state.color_from_index(&button, SelectionIndex::Custom),
            state.color_from_index(&button, SelectionIndex::Swatch(1))
        );

        button.set_color(Rgb::new(1, 2, 3));
        let state = begin(&button);
        assert_eq!(state.chosen(), SelectionIndex::Custom);
        assert_eq!(
            state.color_from_index(&button, SelectionIndex::Custom),
            ColorValue::Rgb(Rgb::new(1, 2, 3))
        );
    }

    #[test]
    fn custom_resolves_to_original_when_nothing_was_chosen() {
        let mut button = rgbw_button();
        button.set_color(Rgb::new(9, 9, 9));
        let state = begin(&button);
        assert_eq!(state.chosen(), SelectionIndex::Invalid);
        assert_eq!(
            state.color_from_index(&button, SelectionIndex::Custom),
            ColorValue::Rgb(Rgb::new(9, 9, 9))
        );
        assert_eq!(
            state.color_from_index(&button, SelectionIndex::Default),
            ColorValue::Automatic
        );
    }

    #[test]
    fn initial_choice_follows_the_raw_color() {
        let mut button = rgbw_button();
        button.set_color(ColorValue::Automatic);
        assert_eq!(begin(&button).chosen(), SelectionIndex::Default);

        button.set_show_default(false);
        button.set_show_custom(true);
        assert_eq!(begin(&button).chosen(), SelectionIndex::Custom);

        button.set_show_custom(false);
        assert_eq!(begin(&button).chosen(), SelectionIndex::Invalid);
    }

    #[test]
    fn custom_mnemonic_runs_the_hook() {
        let mut button = rgbw_button();
        button.set_custom_text("&More Colors…", true);
        let seeds = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen = seeds.clone();
        button.set_custom_picker(move |seed: Rgb| -> Option<Rgb> {
            seen.lock().unwrap().push(seed);
            Some(Rgb::new(0x12, 0x34, 0x56))
        });

        let mut host = ScriptedHost::new(vec![PopupEvent::key(PopupKey::Char('m'))]);
        assert!(PickerPopup::new(&mut button).open(&mut host));
        assert_eq!(button.color(), Rgb::new(0x12, 0x34, 0x56));
        // Seeded with the chosen entry's color
        assert_eq!(*seeds.lock().unwrap(), vec![GREEN]);
    }

    #[test]
    fn custom_hook_seed_avoids_the_sentinel() {
        let mut button = rgbw_button();
        button.set_show_custom(true);
        button.set_default_color(RED);
        button.set_color(ColorValue::Automatic);
        let seeds = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen = seeds.clone();
        button.set_custom_picker(move |seed: Rgb| -> Option<Rgb> {
            seen.lock().unwrap().push(seed);
            None
        });

        let mut state = begin(&button);
        assert_eq!(state.chosen(), SelectionIndex::Default);
        state.change_selection(&mut button, SelectionIndex::Custom);
        state.handle_event(&mut button, &PopupEvent::key(PopupKey::Enter));
        // A canceled hook cancels the popup
        assert!(!state.finish(&mut button));
        assert_eq!(*seeds.lock().unwrap(), vec![RED]);
        assert_eq!(button.raw_color(), ColorValue::Automatic);
    }

    #[test]
    fn default_mnemonic_commits_automatic() {
        let mut button = rgbw_button();
        let mut host = ScriptedHost::new(vec![PopupEvent::key(PopupKey::Char('A'))]);
        assert!(PickerPopup::new(&mut button).open(&mut host));
        assert_eq!(button.raw_color(), ColorValue::Automatic);
    }

    #[test]
    fn alt_reveals_accelerators_and_alt_down_closes() {
        let mut button = rgbw_button();
        button.set_accelerators_visible(false);
        let mut state = begin(&button);
        state.handle_event(&mut button, &PopupEvent::alt_key(PopupKey::Alt));
        assert!(button.accelerators_visible());
        assert!(state.paint(&button).show_accelerators);

        state.handle_event(&mut button, &PopupEvent::key(PopupKey::Right));
        assert_eq!(
            state.handle_event(&mut button, &PopupEvent::alt_key(PopupKey::Down)),
            Flow::Close { okayed: true }
        );
    }

    #[test]
    fn tooltips_follow_labels_and_the_setting() {
        let mut button = rgbw_button();
        let mut state = begin(&button);
        let rect = |i| state.layout().swatch_rect(SelectionIndex::Swatch(i)).unwrap();
        let (red, white) = (rect(0), rect(3));

        state.handle_event(&mut button, &PopupEvent::PointerMove(red.center()));
        assert_eq!(state.tooltip(), Some("Red"));
        assert!(state.take_tooltip_change());

        // White has no label
        state.handle_event(&mut button, &PopupEvent::PointerMove(white.center()));
        assert_eq!(state.tooltip(), None);

        button.set_show_tooltips(false);
        state.handle_event(&mut button, &PopupEvent::PointerMove(red.center()));
        assert_eq!(state.tooltip(), None);
    }

    #[test]
    fn paint_marks_hot_and_selected_cells() {
        let mut button = rgbw_button();
        let mut state = begin(&button);
        state.handle_event(&mut button, &PopupEvent::key(PopupKey::Right));
        state.handle_event(&mut button, &PopupEvent::key(PopupKey::Right));
        let paint = state.paint(&button);

        // Default row, four swatches, no custom row
        assert_eq!(paint.cells.len(), 5);
        assert!(paint.cell(SelectionIndex::Custom).is_none());
        let green = paint.cell(SelectionIndex::Swatch(1)).unwrap();
        assert!(green.selected && !green.hot);
        let blue = paint.cell(SelectionIndex::Swatch(2)).unwrap();
        assert!(blue.hot && !blue.selected);
        assert_eq!(blue.content, SwatchContent::Color(Brush::Solid(BLUE.to_color())));
        assert_eq!(
            paint.cell(SelectionIndex::Default).unwrap().content,
            SwatchContent::Caption(button.default_text().to_string())
        );
    }

    #[test]
    fn popup_opens_below_the_button_and_flips_at_the_bottom() {
        let mut button = rgbw_button();
        let mut host = ScriptedHost::new(vec![PopupEvent::key(PopupKey::Escape)]);
        PickerPopup::new(&mut button).open(&mut host);
        let (window, slide) = host.shown.unwrap();
        assert_eq!(window.y0, host.button.y1);
        assert_eq!(slide, SlideDirection::Down);

        let mut host = ScriptedHost::new(vec![PopupEvent::key(PopupKey::Escape)]);
        host.button = Rect::new(10.0, 580.0, 70.0, 600.0);
        PickerPopup::new(&mut button).open(&mut host);
        let (window, slide) = host.shown.unwrap();
        assert_eq!(window.y1, host.button.y0);
        assert_eq!(slide, SlideDirection::Up);
    }

    #[test]
    fn empty_table_popup_only_has_captions() {
        let mut button = PickerButton::new();
        button.set_color_table(Vec::new(), 4).unwrap();
        let mut state = begin(&button);
        assert_eq!(state.layout().swatches.height(), 0.0);
        state.handle_event(&mut button, &PopupEvent::key(PopupKey::Right));
        state.handle_event(&mut button, &PopupEvent::key(PopupKey::Right));
        assert!(state.current() != SelectionIndex::Swatch(0));
    }

    #[test]
    fn swatches_paint_with_the_rebuilt_palette() {
        let mut button = rgbw_button();
        let teal = Rgb::new(0x00, 0x80, 0x80);
        button.set_color_table_values(&[teal, RED], 2).unwrap();
        let state = begin(&button);
        let paint = state.paint(&button);
        let first = paint.cell(SelectionIndex::Swatch(0)).unwrap();
        assert_eq!(first.content, SwatchContent::Color(button.palette().brush(0).unwrap().clone()));
        assert_eq!(first.content, SwatchContent::Color(Brush::Solid(teal.to_color())));
        assert!(paint.cell(SelectionIndex::Swatch(2)).is_none());
    }

    #[test]
    fn host_hears_tooltip_changes_while_open() {
        let mut button = rgbw_button();
        let state = begin(&button);
        let rect = |i| state.layout().swatch_rect(SelectionIndex::Swatch(i)).unwrap();
        let (red, blue) = (rect(0), rect(2));
        let mut host = ScriptedHost::new(vec![
            PopupEvent::PointerMove(red.center()),
            PopupEvent::PointerMove(red.center() + kurbo::Vec2::new(1.0, 0.0)),
            PopupEvent::PointerMove(blue.center()),
            PopupEvent::key(PopupKey::Escape),
        ]);
        PickerPopup::new(&mut button).open(&mut host);
        // Same swatch twice reports once; the last tip is cleared on close
        assert_eq!(
            host.tooltips,
            vec![Some("Red".to_string()), Some("Blue".to_string()), None]
        );
    }
}
