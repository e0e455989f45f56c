// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! The picker button
//!
//! `PickerButton` owns everything that survives between popups: the raw
//! color, the default color, the color table and its palette, the display
//! options and the notification sink. It is toolkit independent; the
//! Masonry widget in `components` wraps it.

mod draw;
mod notify;

pub use draw::{ButtonDrawPlan, ItemState, SwatchFill, VisualState, paint_button};
pub use notify::{Notification, NotificationCode, NotificationSink};

use crate::config::{ConfigError, PickerConfig};
use crate::custom_picker::{CustomColorPicker, SystemColorChooser};
use crate::model::{ColorEntry, ColorTable, ColorTableError, ColorValue, Palette, Rgb};
use crate::picker::{KeyModifiers, PickerPopup, PopupHost, PopupKey};
use crate::settings;

/// A button showing a color swatch that drops down a swatch popup
pub struct PickerButton {
    color: ColorValue,
    default_color: Rgb,
    table: ColorTable,
    palette: Palette,

    default_text: String,
    custom_text: String,
    show_default: bool,
    show_custom: bool,
    show_tooltips: bool,
    track_selection: bool,

    popup_active: bool,
    mouse_over: bool,
    accelerators_visible: bool,
    /// Raw color before the current popup opened
    pre_popup: Option<ColorValue>,
    needs_redraw: bool,

    sink: Option<Box<dyn NotificationSink>>,
    custom_picker: Box<dyn CustomColorPicker>,
}

impl Default for PickerButton {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PickerButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerButton")
            .field("color", &self.color)
            .field("default_color", &self.default_color)
            .field("entries", &self.table.len())
            .field("columns", &self.table.columns())
            .field("popup_active", &self.popup_active)
            .finish_non_exhaustive()
    }
}

impl PickerButton {
    pub fn new() -> Self {
        let table = ColorTable::default();
        let palette = Palette::from_table(&table);
        Self {
            color: ColorValue::Automatic,
            default_color: settings::defaults::COLOR,
            table,
            palette,
            default_text: settings::defaults::DEFAULT_TEXT.to_string(),
            custom_text: settings::defaults::CUSTOM_TEXT.to_string(),
            show_default: settings::defaults::SHOW_DEFAULT,
            show_custom: settings::defaults::SHOW_CUSTOM,
            show_tooltips: settings::defaults::SHOW_TOOLTIPS,
            track_selection: settings::defaults::TRACK_SELECTION,
            popup_active: false,
            mouse_over: false,
            accelerators_visible: settings::defaults::SHOW_ACCELERATORS,
            pre_popup: None,
            needs_redraw: true,
            sink: None,
            custom_picker: Box::new(SystemColorChooser::default()),
        }
    }

    pub fn from_config(config: &PickerConfig) -> Result<Self, ConfigError> {
        let mut button = Self::new();
        button.apply_config(config)?;
        Ok(button)
    }

    /// Apply a configuration. The table is validated first; on error
    /// nothing changes.
    pub fn apply_config(&mut self, config: &PickerConfig) -> Result<(), ConfigError> {
        self.apply_options(config)?;
        self.set_color(config.color_value());
        Ok(())
    }

    /// Everything `apply_config` sets except the color
    pub fn apply_options(&mut self, config: &PickerConfig) -> Result<(), ConfigError> {
        let table = config.color_table()?;
        if let Some(table) = table {
            self.install_table(table);
        }
        self.set_default_color(config.default_color);
        self.set_default_text(config.default_text.clone(), config.show_default);
        self.set_custom_text(config.custom_text.clone(), config.show_custom);
        self.set_show_tooltips(config.show_tooltips);
        self.set_track_selection(config.track_selection);
        Ok(())
    }

    // ========================================================================
    // COLOR
    // ========================================================================

    /// Effective color: the default color when the raw color is automatic
    pub fn color(&self) -> Rgb {
        self.color.resolve(self.default_color)
    }

    /// The raw color, possibly the automatic sentinel
    pub fn raw_color(&self) -> ColorValue {
        self.color
    }

    /// Set the color, notifying the host when it changes
    pub fn set_color(&mut self, color: impl Into<ColorValue>) {
        let color = color.into();
        if self.color != color {
            let previous = self.color;
            self.color = color;
            self.request_redraw();
            self.notify(NotificationCode::SelectionChanged, color, previous);
        }
    }

    /// Color writes made by the popup. The drop-down protocol reports the
    /// net change itself, so these stay silent.
    pub(crate) fn apply_popup_color(&mut self, color: ColorValue) {
        if self.color != color {
            self.color = color;
            self.request_redraw();
        }
    }

    pub fn default_color(&self) -> Rgb {
        self.default_color
    }

    pub fn set_default_color(&mut self, color: Rgb) {
        if self.default_color != color {
            self.default_color = color;
            self.request_redraw();
        }
    }

    // ========================================================================
    // DISPLAY OPTIONS
    // ========================================================================

    pub fn show_default(&self) -> bool {
        self.show_default
    }

    pub fn set_show_default(&mut self, show: bool) {
        self.show_default = show;
    }

    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    /// Set the default caption and whether it is shown
    pub fn set_default_text(&mut self, text: impl Into<String>, show: bool) {
        self.default_text = text.into();
        self.set_show_default(show);
    }

    pub fn show_custom(&self) -> bool {
        self.show_custom
    }

    pub fn set_show_custom(&mut self, show: bool) {
        self.show_custom = show;
    }

    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    /// Set the custom caption and whether it is shown
    pub fn set_custom_text(&mut self, text: impl Into<String>, show: bool) {
        self.custom_text = text.into();
        self.set_show_custom(show);
    }

    pub fn show_tooltips(&self) -> bool {
        self.show_tooltips
    }

    pub fn set_show_tooltips(&mut self, show: bool) {
        self.show_tooltips = show;
    }

    pub fn track_selection(&self) -> bool {
        self.track_selection
    }

    pub fn set_track_selection(&mut self, track: bool) {
        self.track_selection = track;
    }

    // ========================================================================
    // COLOR TABLE
    // ========================================================================

    pub fn color_table(&self) -> &ColorTable {
        &self.table
    }

    /// `(rows, columns)` of the swatch grid
    pub fn color_table_grid(&self) -> (usize, usize) {
        self.table.grid()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the table with full entries. A rejected table leaves the
    /// current one in place.
    pub fn set_color_table(
        &mut self,
        entries: Vec<ColorEntry>,
        columns: usize,
    ) -> Result<(), ColorTableError> {
        let table = ColorTable::new(entries, columns);
        self.try_install_table(table)
    }

    /// Replace the table with parallel value and label slices
    pub fn set_color_table_parts<S: AsRef<str>>(
        &mut self,
        values: &[Rgb],
        labels: &[S],
        columns: usize,
    ) -> Result<(), ColorTableError> {
        let table = ColorTable::from_parts(values, labels, columns);
        self.try_install_table(table)
    }

    /// Replace the table with unlabeled values
    pub fn set_color_table_values(
        &mut self,
        values: &[Rgb],
        columns: usize,
    ) -> Result<(), ColorTableError> {
        let table = ColorTable::from_values(values, columns);
        self.try_install_table(table)
    }

    fn try_install_table(
        &mut self,
        table: Result<ColorTable, ColorTableError>,
    ) -> Result<(), ColorTableError> {
        match table {
            Ok(table) => {
                self.install_table(table);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Color table rejected, keeping the current one: {}", e);
                Err(e)
            }
        }
    }

    fn install_table(&mut self, table: ColorTable) {
        tracing::debug!(
            "Installing color table: {} entries in {} columns",
            table.len(),
            table.columns()
        );
        self.table = table;
        self.palette = Palette::from_table(&self.table);
        self.request_redraw();
    }

    // ========================================================================
    // CUSTOM PICKER
    // ========================================================================

    /// Replace the "more colors" hook
    pub fn set_custom_picker(&mut self, picker: impl CustomColorPicker + 'static) {
        self.custom_picker = Box::new(picker);
    }

    /// Ask the custom picker for a color, seeded with `seed`
    pub fn display_custom_color_picker(&mut self, seed: Rgb) -> Option<Rgb> {
        self.custom_picker.pick(seed)
    }

    // ========================================================================
    // NOTIFICATIONS
    // ========================================================================

    pub fn set_notification_sink(&mut self, sink: impl NotificationSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    pub fn clear_notification_sink(&mut self) {
        self.sink = None;
    }

    fn notify(&mut self, code: NotificationCode, current: ColorValue, previous: ColorValue) {
        let notification = Notification::new(code, current, previous);
        match self.sink.as_mut() {
            Some(sink) => sink.notify(notification),
            None => tracing::debug!("PickerButton has no host; dropping {:?}", code),
        }
    }

    // ========================================================================
    // VISUAL STATE
    // ========================================================================

    /// Has anything visible changed since the last call? Clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub fn is_popup_active(&self) -> bool {
        self.popup_active
    }

    pub fn is_mouse_over(&self) -> bool {
        self.mouse_over
    }

    /// Pointer entered (`true`) or left (`false`)
    pub fn set_mouse_over(&mut self, over: bool) {
        if self.mouse_over != over {
            self.mouse_over = over;
            self.request_redraw();
        }
    }

    pub fn accelerators_visible(&self) -> bool {
        self.accelerators_visible
    }

    pub fn set_accelerators_visible(&mut self, visible: bool) {
        if self.accelerators_visible != visible {
            self.accelerators_visible = visible;
            self.request_redraw();
        }
    }

    // ========================================================================
    // ACTIVATION
    // ========================================================================

    /// Key press on the focused button. Returns `true` when it should open
    /// the popup: Space, Enter or F4, or Alt+Up/Down.
    pub fn handle_key(&mut self, key: PopupKey, modifiers: KeyModifiers) -> bool {
        if self.popup_active {
            return false;
        }
        match key {
            PopupKey::Space | PopupKey::Enter | PopupKey::F4 if !modifiers.alt => true,
            PopupKey::Up | PopupKey::Down if modifiers.alt => true,
            PopupKey::Alt => {
                self.set_accelerators_visible(true);
                false
            }
            _ => false,
        }
    }

    /// First half of a click: mark the popup active and announce it
    pub fn begin_drop_down(&mut self) {
        self.popup_active = true;
        self.pre_popup = Some(self.color);
        self.notify(NotificationCode::DropDown, self.color, self.color);
        self.request_redraw();
    }

    /// Second half of a click, once the popup has closed
    pub fn finish_drop_down(&mut self, okayed: bool) {
        let original = self.pre_popup.take().unwrap_or(self.color);
        self.popup_active = false;
        self.request_redraw();

        if !okayed {
            // Undo any live preview
            if self.track_selection {
                self.apply_popup_color(original);
            }
        } else if self.color != original {
            self.notify(NotificationCode::SelectionChanged, self.color, original);
        }

        let current = self.color;
        self.notify(NotificationCode::CloseUp, current, current);
        let end = if okayed {
            NotificationCode::SelectionEndOk
        } else {
            NotificationCode::SelectionEndCancel
        };
        self.notify(end, current, current);
    }

    /// Run the whole click: drop down, pump the popup, report the result
    pub fn click(&mut self, host: &mut dyn PopupHost) -> bool {
        self.begin_drop_down();
        let okayed = PickerPopup::new(self).open(host);
        self.finish_drop_down(okayed);
        okayed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::picker::PopupEvent;
    use crate::picker::testing::ScriptedHost;

    const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
    const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
    const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xFF);
    const WHITE: Rgb = Rgb::WHITE;

    fn with_channel(button: &mut PickerButton) -> mpsc::Receiver<Notification> {
        let (tx, rx) = mpsc::channel();
        button.set_notification_sink(tx);
        rx
    }

    fn rgbw_button() -> PickerButton {
        let mut button = PickerButton::new();
        button
            .set_color_table_parts(&[RED, GREEN, BLUE, WHITE], &["Red", "Green", "Blue", "White"], 2)
            .unwrap();
        button.set_show_default(true);
        button.set_show_custom(false);
        button.set_color(GREEN);
        button
    }

    fn codes(rx: &mpsc::Receiver<Notification>) -> Vec<NotificationCode> {
        rx.try_iter().map(|n| n.code).collect()
    }

    #[test]
    fn defaults() {
        let button = PickerButton::new();
        assert_eq!(button.raw_color(), ColorValue::Automatic);
        assert_eq!(button.color(), Rgb::BLACK);
        assert_eq!(button.color_table_grid(), (6, 8));
        assert_eq!(button.palette().len(), 48);
        assert_eq!(button.default_text(), "&Automatic");
        assert!(button.show_default() && button.show_custom() && button.show_tooltips());
        assert!(!button.track_selection());
    }

    #[test]
    fn grid_rounds_rows_up() {
        let mut button = PickerButton::new();
        for (count, columns, rows) in [(0, 3, 0), (1, 3, 1), (3, 3, 1), (4, 3, 2), (10, 4, 3)] {
            let values = vec![RED; count];
            button.set_color_table_values(&values, columns).unwrap();
            assert_eq!(button.color_table_grid(), (rows, columns));
        }
    }

    #[test]
    fn oversized_table_is_rejected_unchanged() {
        let mut button = rgbw_button();
        let values = vec![RED; settings::table::MAX + 1];
        assert!(matches!(
            button.set_color_table_values(&values, 8),
            Err(ColorTableError::TooManyEntries { .. })
        ));
        assert_eq!(button.color_table().len(), 4);
        assert_eq!(button.color_table_grid(), (2, 2));
        assert_eq!(button.palette().len(), 4);
    }

    #[test]
    fn mismatched_labels_are_rejected() {
        let mut button = rgbw_button();
        assert!(button.set_color_table_parts(&[RED, GREEN], &["Red"], 2).is_err());
        assert_eq!(button.color_table().len(), 4);
    }

    #[test]
    fn effective_color_resolves_the_sentinel() {
        let mut button = PickerButton::new();
        button.set_default_color(BLUE);
        assert_eq!(button.color(), BLUE);
        button.set_color(RED);
        assert_eq!(button.color(), RED);
        assert_eq!(button.raw_color(), ColorValue::Rgb(RED));
        button.set_color(ColorValue::Automatic);
        assert_eq!(button.color(), BLUE);
    }

    #[test]
    fn set_color_notifies_only_on_change() {
        let mut button = rgbw_button();
        let rx = with_channel(&mut button);
        button.take_redraw_request();

        button.set_color(GREEN);
        assert!(rx.try_recv().is_err());
        assert!(!button.take_redraw_request());

        button.set_color(RED);
        let n = rx.try_recv().unwrap();
        assert_eq!(n.code, NotificationCode::SelectionChanged);
        assert_eq!(n.current, ColorValue::Rgb(RED));
        assert_eq!(n.previous, ColorValue::Rgb(GREEN));
        assert!(rx.try_recv().is_err());
        assert!(button.take_redraw_request());
    }

    #[test]
    fn default_color_change_requests_redraw() {
        let mut button = PickerButton::new();
        button.take_redraw_request();
        button.set_default_color(settings::defaults::COLOR);
        assert!(!button.take_redraw_request());
        button.set_default_color(WHITE);
        assert!(button.take_redraw_request());
    }

    #[test]
    fn caption_setters_set_visibility() {
        let mut button = PickerButton::new();
        button.set_default_text("&None", false);
        assert_eq!(button.default_text(), "&None");
        assert!(!button.show_default());
        button.set_custom_text("&Other…", true);
        assert!(button.show_custom());
    }

    #[test]
    fn keyboard_opens_like_a_combo_box() {
        let mut button = PickerButton::new();
        assert!(button.handle_key(PopupKey::F4, KeyModifiers::NONE));
        assert!(button.handle_key(PopupKey::Down, KeyModifiers::ALT));
        assert!(button.handle_key(PopupKey::Up, KeyModifiers::ALT));
        assert!(!button.handle_key(PopupKey::Down, KeyModifiers::NONE));
        assert!(!button.handle_key(PopupKey::Alt, KeyModifiers::ALT));
        assert!(button.accelerators_visible());
    }

    #[test]
    fn space_and_enter_open_like_a_push_button() {
        let mut button = PickerButton::new();
        assert!(button.handle_key(PopupKey::Space, KeyModifiers::NONE));
        assert!(button.handle_key(PopupKey::Enter, KeyModifiers::NONE));
        assert!(!button.handle_key(PopupKey::Enter, KeyModifiers::ALT));

        // Already open: the popup owns these keys
        button.begin_drop_down();
        assert!(!button.handle_key(PopupKey::Space, KeyModifiers::NONE));
        assert!(!button.handle_key(PopupKey::F4, KeyModifiers::NONE));
    }

    #[test]
    fn hover_toggles_redraw() {
        let mut button = PickerButton::new();
        button.take_redraw_request();
        button.set_mouse_over(true);
        assert!(button.is_mouse_over());
        assert!(button.take_redraw_request());
        button.set_mouse_over(true);
        assert!(!button.take_redraw_request());
    }

    #[test]
    fn committed_click_reports_in_order() {
        let mut button = rgbw_button();
        let rx = with_channel(&mut button);
        let mut host = ScriptedHost::new(vec![
            PopupEvent::key(PopupKey::Right),
            PopupEvent::key(PopupKey::Down),
            PopupEvent::key(PopupKey::Enter),
        ]);

        assert!(button.click(&mut host));
        assert_eq!(button.color(), WHITE);
        assert!(!button.is_popup_active());

        let all: Vec<Notification> = rx.try_iter().collect();
        let codes: Vec<_> = all.iter().map(|n| n.code).collect();
        assert_eq!(
            codes,
            vec![
                NotificationCode::DropDown,
                NotificationCode::SelectionChanged,
                NotificationCode::CloseUp,
                NotificationCode::SelectionEndOk,
            ]
        );
        assert_eq!(all[1].current, ColorValue::Rgb(WHITE));
        assert_eq!(all[1].previous, ColorValue::Rgb(GREEN));
    }

    #[test]
    fn escape_click_reports_cancel() {
        let mut button = rgbw_button();
        let rx = with_channel(&mut button);
        let mut host = ScriptedHost::new(vec![PopupEvent::key(PopupKey::Escape)]);

        assert!(!button.click(&mut host));
        assert_eq!(button.color(), GREEN);
        assert_eq!(
            codes(&rx),
            vec![
                NotificationCode::DropDown,
                NotificationCode::CloseUp,
                NotificationCode::SelectionEndCancel,
            ]
        );
    }

    #[test]
    fn recommitting_the_same_color_skips_selection_changed() {
        let mut button = rgbw_button();
        let rx = with_channel(&mut button);
        let mut host = ScriptedHost::new(vec![
            PopupEvent::key(PopupKey::Right),
            PopupEvent::key(PopupKey::Enter),
        ]);
        assert!(button.click(&mut host));
        assert_eq!(
            codes(&rx),
            vec![
                NotificationCode::DropDown,
                NotificationCode::CloseUp,
                NotificationCode::SelectionEndOk,
            ]
        );
    }

    #[test]
    fn canceled_tracking_restores_the_raw_color() {
        let mut button = rgbw_button();
        button.set_track_selection(true);
        button.set_color(ColorValue::Automatic);
        let rx = with_channel(&mut button);
        let mut host = ScriptedHost::new(vec![
            PopupEvent::key(PopupKey::Right),
            PopupEvent::key(PopupKey::Right),
            PopupEvent::CaptureLost,
        ]);
        assert!(!button.click(&mut host));
        assert_eq!(button.raw_color(), ColorValue::Automatic);
        assert!(!codes(&rx).contains(&NotificationCode::SelectionChanged));
    }

    #[test]
    fn missing_host_is_not_an_error() {
        let mut button = rgbw_button();
        button.clear_notification_sink();
        button.set_color(RED);
        let mut host = ScriptedHost::new(vec![PopupEvent::key(PopupKey::Escape)]);
        assert!(!button.click(&mut host));
    }

    #[test]
    fn closure_sinks_receive_notifications() {
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut button = PickerButton::new();
        button.set_notification_sink(move |n: Notification| sink.lock().unwrap().push(n.code));
        button.set_color(RED);
        assert_eq!(*seen.lock().unwrap(), vec![NotificationCode::SelectionChanged]);
    }

    #[test]
    fn config_applies_every_option() {
        let config = PickerConfig::from_toml_str(
            r##"
            color = "#0000ff"
            default_color = "#ffffff"
            show_default = false
            custom_text = "&Pick…"
            show_tooltips = false
            track_selection = true

            [table]
            columns = 2
            colors = [{ value = "#ff0000" }, { value = "#0000ff" }]
            "##,
        )
        .unwrap();
        let button = PickerButton::from_config(&config).unwrap();
        assert_eq!(button.color(), BLUE);
        assert_eq!(button.default_color(), WHITE);
        assert!(!button.show_default());
        assert_eq!(button.custom_text(), "&Pick…");
        assert!(!button.show_tooltips());
        assert!(button.track_selection());
        assert_eq!(button.color_table_grid(), (1, 2));
    }

    #[test]
    fn bad_config_table_changes_nothing() {
        let config = PickerConfig::from_toml_str(
            r##"
            default_color = "#ffffff"
            [table]
            columns = 0
            colors = []
            "##,
        )
        .unwrap();
        let mut button = rgbw_button();
        assert!(button.apply_config(&config).is_err());
        assert_eq!(button.default_color(), Rgb::BLACK);
        assert_eq!(button.color_table().len(), 4);
    }
}
