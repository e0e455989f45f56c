// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Color picker button widget
//!
//! The widget owns a `PickerButton` and drives a `PopupState` one event at
//! a time. The popup is painted as an overlay anchored to the button, with a
//! transparent child covering it so pointer events over the popup bubble up
//! to the button. The opening press captures the pointer, so
//! press-drag-release picks a swatch in one gesture; after a plain click the
//! next press over a swatch picks it. Keyboard navigation works for as long
//! as the button keeps focus.

use std::marker::PhantomData;
use std::sync::mpsc;

use kurbo::{Affine, Insets, Point, Rect, Size, Vec2};
use masonry::accesskit::{Node, Role};
use masonry::core::keyboard::{Key, KeyState, Modifiers, NamedKey};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, NewWidget, NoAction, PaintCtx,
    PointerButton, PointerButtonEvent, PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef,
    RegisterCtx, TextEvent, Update, UpdateCtx, Widget, WidgetPod,
};
use masonry::vello::Scene;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

use crate::button::{ItemState, Notification, PickerButton, paint_button};
use crate::config::PickerConfig;
use crate::draw;
use crate::model::ColorValue;
use crate::picker::{Flow, KeyModifiers, PopupClass, PopupEvent, PopupKey, PopupState, paint_popup};
use crate::settings;
use crate::text::{ParleyMeasure, TextMeasure};
use crate::theme;
use crate::theme_query::VelloTheme;

/// Padding around tooltip text
const TOOLTIP_PADDING: Size = Size::new(4.0, 2.0);
/// Gap between a hovered swatch and its tooltip
const TOOLTIP_OFFSET: f64 = 4.0;

// ============================================================
// Key mapping
// ============================================================

/// Translate a keyboard key into the popup's key set
pub fn popup_key(key: &Key) -> Option<PopupKey> {
    match key {
        Key::Named(NamedKey::Escape) => Some(PopupKey::Escape),
        Key::Named(NamedKey::Enter) => Some(PopupKey::Enter),
        Key::Named(NamedKey::F4) => Some(PopupKey::F4),
        Key::Named(NamedKey::ArrowLeft) => Some(PopupKey::Left),
        Key::Named(NamedKey::ArrowRight) => Some(PopupKey::Right),
        Key::Named(NamedKey::ArrowUp) => Some(PopupKey::Up),
        Key::Named(NamedKey::ArrowDown) => Some(PopupKey::Down),
        Key::Named(NamedKey::PageUp) => Some(PopupKey::PageUp),
        Key::Named(NamedKey::PageDown) => Some(PopupKey::PageDown),
        Key::Named(NamedKey::Alt) => Some(PopupKey::Alt),
        Key::Character(c) if c == " " => Some(PopupKey::Space),
        Key::Character(c) => c.chars().next().map(PopupKey::Char),
        _ => None,
    }
}

pub fn key_modifiers(modifiers: &Modifiers) -> KeyModifiers {
    KeyModifiers {
        alt: modifiers.alt(),
    }
}

// ============================================================
// Popup hit area
// ============================================================

/// Transparent child laid over the open popup
///
/// Masonry only hit-tests a widget inside its own box, and the popup paints
/// outside the button's. This child is sized to the popup window, so events
/// over the popup target it and bubble to the button. Zero-sized while the
/// popup is closed.
struct PopupHitArea;

impl Widget for PopupHitArea {
    type Action = NoAction;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {}

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        bc.max()
    }

    fn paint(&mut self, _ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, _scene: &mut Scene) {}

    fn accessibility_role(&self) -> Role {
        Role::MenuListPopup
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        _node: &mut Node,
    ) {
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}

// ============================================================
// Custom Masonry Widget
// ============================================================

/// A button showing the current color that drops down a swatch grid
pub struct ColorPickerButtonWidget {
    button: PickerButton,
    notifications: mpsc::Receiver<Notification>,
    popup: Option<PopupState>,
    hit_area: WidgetPod<PopupHitArea>,
    /// Config that arrived while the popup was open
    pending_config: Option<PickerConfig>,
    /// The press that opened the popup has not been released yet
    press_held: bool,
    button_theme: VelloTheme,
    menu_theme: VelloTheme,
    flat_menus: bool,
    /// Area the popup must stay within, in widget coordinates
    work_area: Rect,
}

impl ColorPickerButtonWidget {
    pub fn new(mut button: PickerButton) -> Self {
        let (tx, rx) = mpsc::channel();
        button.set_notification_sink(tx);
        Self {
            button,
            notifications: rx,
            popup: None,
            hit_area: NewWidget::new(PopupHitArea).to_pod(),
            pending_config: None,
            press_held: false,
            button_theme: VelloTheme::open("Button", true),
            menu_theme: VelloTheme::open("Menu", true),
            flat_menus: true,
            work_area: unbounded(),
        }
    }

    pub fn button(&self) -> &PickerButton {
        &self.button
    }

    pub fn is_popup_open(&self) -> bool {
        self.popup.is_some()
    }

    /// Switch between the themed look and classic flat rendering
    pub fn set_themed(&mut self, themed: bool) {
        self.button_theme = VelloTheme::open("Button", themed);
        self.menu_theme = VelloTheme::open("Menu", themed);
    }

    pub fn set_flat_menus(&mut self, flat: bool) {
        self.flat_menus = flat;
    }

    pub fn set_work_area(&mut self, work_area: Option<Rect>) {
        self.work_area = work_area.unwrap_or_else(unbounded);
    }

    /// Replace table, captions and options. The config's color is not
    /// applied. While the popup is open the config waits until it closes.
    pub fn set_config(&mut self, config: PickerConfig) {
        if self.popup.is_some() {
            self.pending_config = Some(config);
            return;
        }
        if let Err(e) = self.button.apply_options(&config) {
            tracing::error!("Invalid picker configuration ignored: {}", e);
        }
    }

    /// Show `color` unless the open popup owns the color. Returns `true`
    /// when the button changed.
    pub fn sync_color(&mut self, color: ColorValue) -> bool {
        if self.popup.is_some() || self.button.raw_color() == color {
            return false;
        }
        self.button.apply_popup_color(color);
        true
    }

    fn measure() -> ParleyMeasure {
        ParleyMeasure {
            font_size: settings::popup::CAPTION_FONT_SIZE,
        }
    }

    /// Offset of the popup's client area in widget coordinates
    fn popup_origin(&self) -> Option<Vec2> {
        self.popup
            .as_ref()
            .map(|popup| popup.layout().window.origin().to_vec2())
    }

    fn to_popup(&self, point: Point) -> Point {
        point - self.popup_origin().unwrap_or_default()
    }

    fn open_popup(&mut self, ctx: &mut EventCtx<'_>) {
        if self.popup.is_some() {
            return;
        }
        self.show_popup(Rect::from_origin_size(Point::ZERO, ctx.size()));
        ctx.request_focus();
        ctx.request_layout();
        ctx.request_render();
        self.flush(ctx);
    }

    fn show_popup(&mut self, bounds: Rect) {
        let class = PopupClass::get();
        self.button.begin_drop_down();
        let popup = PopupState::begin(&self.button, bounds, self.work_area, &Self::measure());
        tracing::debug!(
            "{} shown at {:?} sliding {:?}",
            class.name,
            popup.layout().window,
            popup.layout().slide
        );
        self.popup = Some(popup);
    }

    /// Feed one event to the open popup
    fn forward(&mut self, ctx: &mut EventCtx<'_>, event: PopupEvent) {
        let Some(popup) = self.popup.as_mut() else {
            return;
        };
        match popup.handle_event(&mut self.button, &event) {
            Flow::Continue => {
                let repaint = popup.take_needs_paint();
                let tooltip = popup.take_tooltip_change();
                if tooltip {
                    // The tooltip changes the paint insets
                    ctx.request_layout();
                }
                if repaint || tooltip || self.button.take_redraw_request() {
                    ctx.request_render();
                }
            }
            Flow::Close { .. } => {
                self.close_popup();
                ctx.request_layout();
                ctx.request_render();
            }
        }
        self.flush(ctx);
    }

    fn close_popup(&mut self) {
        let Some(popup) = self.popup.take() else {
            return;
        };
        self.press_held = false;
        let okayed = popup.finish(&mut self.button);
        self.button.finish_drop_down(okayed);
        tracing::debug!("{} hidden", PopupClass::get().name);
        if let Some(config) = self.pending_config.take() {
            self.set_config(config);
        }
    }

    fn flush(&mut self, ctx: &mut EventCtx<'_>) {
        for notification in self.notifications.try_iter() {
            ctx.submit_action::<Notification>(notification);
        }
    }

    /// Paint extent of the open popup and its tooltip, in widget coordinates
    fn overlay_rect(&self) -> Option<Rect> {
        let popup = self.popup.as_ref()?;
        let window = popup.layout().window;
        Some(match self.tooltip_rect() {
            Some(tip) => window.union(tip),
            None => window,
        })
    }

    /// Where the tooltip for the hovered swatch goes, in widget coordinates
    fn tooltip_rect(&self) -> Option<Rect> {
        let popup = self.popup.as_ref()?;
        let text = popup.tooltip()?;
        let cell = popup.layout().swatch_rect(popup.current())?;
        let origin = popup.layout().window.origin().to_vec2();
        let extent = Self::measure().text_extent(text);
        let anchor = Point::new(cell.x0, cell.y1 + TOOLTIP_OFFSET) + origin;
        Some(Rect::from_origin_size(
            anchor,
            Size::new(
                extent.width + TOOLTIP_PADDING.width * 2.0,
                extent.height + TOOLTIP_PADDING.height * 2.0,
            ),
        ))
    }

    fn paint_tooltip(&self, scene: &mut Scene) {
        let (Some(popup), Some(rect)) = (self.popup.as_ref(), self.tooltip_rect()) else {
            return;
        };
        let Some(text) = popup.tooltip() else {
            return;
        };
        draw::fill_rect(scene, rect, theme::tooltip::BACKGROUND);
        draw::frame_rect(scene, rect, theme::menu::BORDER);
        crate::text::draw_label(
            scene,
            text,
            Point::new(rect.x0 + TOOLTIP_PADDING.width, rect.y0 + TOOLTIP_PADDING.height),
            theme::tooltip::TEXT,
            settings::popup::CAPTION_FONT_SIZE,
        );
    }
}

fn unbounded() -> Rect {
    Rect::new(
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
        f64::INFINITY,
        f64::INFINITY,
    )
}

impl Widget for ColorPickerButtonWidget {
    type Action = Notification;

    fn accepts_focus(&self) -> bool {
        true
    }

    fn register_children(&mut self, ctx: &mut RegisterCtx<'_>) {
        ctx.register_child(&mut self.hit_area);
    }

    fn update(&mut self, ctx: &mut UpdateCtx<'_>, _props: &mut PropertiesMut<'_>, event: &Update) {
        match event {
            Update::HoveredChanged(hovered) => {
                self.button.set_mouse_over(*hovered);
                ctx.request_render();
            }
            Update::FocusChanged(false) if self.popup.is_some() => {
                // Losing focus is the widget's equivalent of losing capture
                if let Some(popup) = self.popup.as_mut() {
                    popup.handle_event(&mut self.button, &PopupEvent::CaptureLost);
                }
                self.close_popup();
                for notification in self.notifications.try_iter() {
                    ctx.submit_action::<Notification>(notification);
                }
                ctx.request_layout();
                ctx.request_render();
            }
            Update::FocusChanged(_) => ctx.request_render(),
            _ => {}
        }
    }

    fn layout(
        &mut self,
        ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        let size = bc.constrain(settings::button::SIZE);
        let insets = match self.overlay_rect() {
            Some(overlay) => Insets::new(
                (-overlay.x0).max(0.0),
                (-overlay.y0).max(0.0),
                (overlay.x1 - size.width).max(0.0),
                (overlay.y1 - size.height).max(0.0),
            ),
            None => Insets::ZERO,
        };
        ctx.set_paint_insets(insets);

        let window = self
            .popup
            .as_ref()
            .map_or(Rect::ZERO, |popup| popup.layout().window);
        ctx.run_layout(&mut self.hit_area, &BoxConstraints::tight(window.size()));
        ctx.place_child(&mut self.hit_area, window.origin());
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        let bounds = Rect::from_origin_size(Point::ZERO, ctx.size());
        let mut item = ItemState::empty();
        item.set(ItemState::DISABLED, ctx.is_disabled());
        item.set(ItemState::FOCUS, ctx.is_focus_target());
        item.set(ItemState::HOTLIGHT, ctx.is_hovered());
        paint_button(scene, bounds, &self.button, item, &self.button_theme);

        if let (Some(popup), Some(origin)) = (self.popup.as_ref(), self.popup_origin()) {
            let mut overlay = Scene::new();
            paint_popup(&mut overlay, &popup.paint(&self.button), &self.menu_theme, self.flat_menus);
            scene.append(&overlay, Some(Affine::translate(origin)));
            self.paint_tooltip(scene);
        }
        self.button.take_redraw_request();
    }

    fn accessibility_role(&self) -> Role {
        Role::ColorWell
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_value(self.button.color().to_string());
        node.set_expanded(self.popup.is_some());
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::from_slice(&[self.hit_area.id()])
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                let pos = ctx.local_position(state.position);
                if self.popup.is_some() {
                    self.press_held = false;
                    let point = self.to_popup(pos);
                    self.forward(ctx, PopupEvent::PointerDown(point));
                } else if !ctx.is_disabled() {
                    ctx.capture_pointer();
                    self.press_held = true;
                    self.open_popup(ctx);
                }
                ctx.set_handled();
            }
            PointerEvent::Move(PointerUpdate { current, .. }) => {
                if self.popup.is_some() {
                    let point = self.to_popup(ctx.local_position(current.position));
                    self.forward(ctx, PopupEvent::PointerMove(point));
                }
            }
            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                let Some(popup) = self.popup.as_ref() else {
                    return;
                };
                let point = self.to_popup(ctx.local_position(state.position));
                if std::mem::take(&mut self.press_held) && popup.hit_test(point).is_valid() {
                    // Released over a swatch after dragging out of the button
                    self.forward(ctx, PopupEvent::PointerDown(point));
                } else {
                    self.forward(ctx, PopupEvent::PointerUp(point));
                }
            }
            PointerEvent::Cancel(_) => {
                if self.popup.is_some() {
                    self.forward(ctx, PopupEvent::CaptureLost);
                }
            }
            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &TextEvent,
    ) {
        let TextEvent::Keyboard(key_event) = event else {
            return;
        };
        let Some(key) = popup_key(&key_event.key) else {
            return;
        };
        let modifiers = key_modifiers(&key_event.modifiers);

        if self.popup.is_some() {
            let event = match key_event.state {
                KeyState::Down => PopupEvent::KeyDown(key, modifiers),
                KeyState::Up => PopupEvent::KeyUp(key),
            };
            self.forward(ctx, event);
            ctx.set_handled();
            return;
        }

        if key_event.state != KeyState::Down {
            return;
        }
        if self.button.handle_key(key, modifiers) {
            tracing::debug!("Keyboard opened the picker");
            self.open_popup(ctx);
            ctx.set_handled();
        } else if self.button.take_redraw_request() {
            ctx.request_render();
        }
    }
}

// ============================================================
// Xilem View wrapper
// ============================================================

type NotificationCallback<State> = Box<dyn Fn(&mut State, Notification) + Send + Sync>;

/// A color picker button showing `color`. `on_notify` receives every
/// notification the button emits, in order.
pub fn color_picker_button<State, Action>(
    color: ColorValue,
    on_notify: impl Fn(&mut State, Notification) + Send + Sync + 'static,
) -> ColorPickerButtonView<State, Action>
where
    State: 'static,
    Action: 'static,
{
    ColorPickerButtonView {
        color,
        config: PickerConfig::default(),
        themed: true,
        flat_menus: true,
        work_area: None,
        on_notify: Box::new(on_notify),
        phantom: PhantomData,
    }
}

#[must_use = "View values do nothing unless provided to Xilem."]
pub struct ColorPickerButtonView<State, Action = ()> {
    color: ColorValue,
    config: PickerConfig,
    themed: bool,
    flat_menus: bool,
    work_area: Option<Rect>,
    on_notify: NotificationCallback<State>,
    phantom: PhantomData<fn() -> (State, Action)>,
}

impl<State, Action> ColorPickerButtonView<State, Action> {
    /// Table, captions and options; the config's own color is ignored in
    /// favour of the view's
    pub fn config(mut self, config: PickerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn themed(mut self, themed: bool) -> Self {
        self.themed = themed;
        self
    }

    pub fn flat_menus(mut self, flat: bool) -> Self {
        self.flat_menus = flat;
        self
    }

    /// Keep the popup inside `area`, given relative to the button's origin
    pub fn work_area(mut self, area: Rect) -> Self {
        self.work_area = Some(area);
        self
    }

    fn configured_button(&self) -> PickerButton {
        let mut button = PickerButton::new();
        if let Err(e) = button.apply_options(&self.config) {
            tracing::error!("Invalid picker configuration, using defaults: {}", e);
        }
        button.apply_popup_color(self.color);
        button
    }
}

impl<State, Action> ViewMarker for ColorPickerButtonView<State, Action> {}

impl<State: 'static, Action: 'static + Default> View<State, Action, ViewCtx>
    for ColorPickerButtonView<State, Action>
{
    type Element = Pod<ColorPickerButtonWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let mut widget = ColorPickerButtonWidget::new(self.configured_button());
        widget.set_themed(self.themed);
        widget.set_flat_menus(self.flat_menus);
        widget.set_work_area(self.work_area);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        if self.config != prev.config {
            element.widget.set_config(self.config.clone());
            element.ctx.request_render();
        }
        if element.widget.sync_color(self.color) {
            element.ctx.request_render();
        }
        if self.themed != prev.themed {
            element.widget.set_themed(self.themed);
            element.ctx.request_render();
        }
        if self.flat_menus != prev.flat_menus {
            element.widget.set_flat_menus(self.flat_menus);
            element.ctx.request_render();
        }
        if self.work_area != prev.work_area {
            element.widget.set_work_area(self.work_area);
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<Action> {
        match message.take_message::<Notification>() {
            Some(notification) => {
                (self.on_notify)(app_state, *notification);
                MessageResult::Action(Action::default())
            }
            None => MessageResult::Stale,
        }
    }
}

#[cfg(test)]
mod tests {
    use masonry::core::WidgetId;
    use masonry::properties::types::AsUnit;
    use masonry::testing::TestHarness;
    use masonry::theme::default_property_set;
    use masonry::widgets::{Flex, SizedBox};

    use super::*;
    use crate::button::NotificationCode;
    use crate::model::{ColorEntry, Rgb};
    use crate::picker::SelectionIndex;

    const RED: Rgb = Rgb::new(0xFF, 0x00, 0x00);
    const GREEN: Rgb = Rgb::new(0x00, 0xFF, 0x00);
    const BLUE: Rgb = Rgb::new(0x00, 0x00, 0xFF);

    fn rgbw_widget() -> ColorPickerButtonWidget {
        let mut button = PickerButton::new();
        button
            .set_color_table(
                vec![
                    ColorEntry::new(RED, "Red"),
                    ColorEntry::new(GREEN, "Green"),
                    ColorEntry::new(BLUE, "Blue"),
                    ColorEntry::new(Rgb::WHITE, ""),
                ],
                2,
            )
            .unwrap();
        button.set_show_custom(false);
        button.set_color(GREEN);
        ColorPickerButtonWidget::new(button)
    }

    /// The picker above an inert block the popup drops over
    fn harness() -> (TestHarness<Flex>, WidgetId) {
        let picker = NewWidget::new(rgbw_widget());
        let id = picker.id();
        let root = Flex::column()
            .with_child(picker)
            .with_child(NewWidget::new(SizedBox::empty().size(300.px(), 300.px())));
        let harness = TestHarness::create_with_size(
            default_property_set(),
            NewWidget::new(root),
            Size::new(400.0, 400.0),
        );
        (harness, id)
    }

    fn picker(harness: &TestHarness<Flex>, id: WidgetId) -> &ColorPickerButtonWidget {
        harness
            .get_widget_with_id(id)
            .downcast::<ColorPickerButtonWidget>()
            .unwrap()
            .inner()
    }

    /// Window position of a point in the picker's coordinates
    fn window_point(harness: &TestHarness<Flex>, id: WidgetId, local: Point) -> Point {
        harness.get_widget_with_id(id).ctx().window_transform() * local
    }

    fn button_center(harness: &TestHarness<Flex>, id: WidgetId) -> Point {
        let size = harness.get_widget_with_id(id).ctx().size();
        window_point(harness, id, size.to_rect().center())
    }

    fn swatch_center(harness: &TestHarness<Flex>, id: WidgetId, index: usize) -> Point {
        let popup = picker(harness, id).popup.as_ref().unwrap();
        let cell = popup.layout().swatch_rect(SelectionIndex::Swatch(index)).unwrap();
        let origin = popup.layout().window.origin().to_vec2();
        window_point(harness, id, cell.center() + origin)
    }

    fn click_at(harness: &mut TestHarness<Flex>, point: Point) {
        harness.mouse_move(point);
        harness.mouse_button_press(PointerButton::Primary);
        harness.mouse_button_release(PointerButton::Primary);
    }

    fn codes(harness: &mut TestHarness<Flex>) -> Vec<NotificationCode> {
        std::iter::from_fn(|| harness.pop_action::<Notification>())
            .map(|(notification, _)| notification.code)
            .collect()
    }

    fn open(harness: &mut TestHarness<Flex>, id: WidgetId) {
        let center = button_center(harness, id);
        click_at(harness, center);
        assert!(picker(harness, id).is_popup_open());
        assert_eq!(codes(harness), vec![NotificationCode::DropDown]);
    }

    #[test]
    fn click_opens_and_focuses() {
        let (mut harness, id) = harness();
        open(&mut harness, id);
        assert_eq!(harness.focused_widget_id(), Some(id));
        assert!(picker(&harness, id).button().is_popup_active());
    }

    #[test]
    fn pointer_over_the_popup_reaches_the_picker() {
        let (mut harness, id) = harness();
        open(&mut harness, id);
        let blue = swatch_center(&harness, id, 2);
        assert!(!harness.get_widget_with_id(id).ctx().size().to_rect().contains(blue));

        harness.mouse_move(blue);
        let popup = picker(&harness, id).popup.as_ref().unwrap();
        assert_eq!(popup.current(), SelectionIndex::Swatch(2));
        assert_eq!(popup.tooltip(), Some("Blue"));
    }

    #[test]
    fn clicking_a_swatch_commits_it() {
        let (mut harness, id) = harness();
        open(&mut harness, id);
        let blue = swatch_center(&harness, id, 2);
        click_at(&mut harness, blue);

        let widget = picker(&harness, id);
        assert!(!widget.is_popup_open());
        assert_eq!(widget.button().color(), BLUE);
        assert_eq!(
            codes(&mut harness),
            vec![
                NotificationCode::SelectionChanged,
                NotificationCode::CloseUp,
                NotificationCode::SelectionEndOk,
            ]
        );
    }

    #[test]
    fn escape_cancels_the_popup() {
        let (mut harness, id) = harness();
        open(&mut harness, id);
        let blue = swatch_center(&harness, id, 2);
        harness.mouse_move(blue);
        harness.process_text_event(TextEvent::key_down(Key::Named(NamedKey::Escape)));

        let widget = picker(&harness, id);
        assert!(!widget.is_popup_open());
        assert_eq!(widget.button().color(), GREEN);
        assert_eq!(
            codes(&mut harness),
            vec![NotificationCode::CloseUp, NotificationCode::SelectionEndCancel]
        );
    }

    #[test]
    fn losing_focus_cancels_the_popup() {
        let (mut harness, id) = harness();
        open(&mut harness, id);
        harness.focus_on(None);

        assert!(!picker(&harness, id).is_popup_open());
        assert_eq!(
            codes(&mut harness),
            vec![NotificationCode::CloseUp, NotificationCode::SelectionEndCancel]
        );
    }

    #[test]
    fn space_opens_the_focused_picker() {
        let (mut harness, id) = harness();
        harness.focus_on(Some(id));
        harness.process_text_event(TextEvent::key_down(Key::Character(" ".into())));
        assert!(picker(&harness, id).is_popup_open());
        assert_eq!(codes(&mut harness), vec![NotificationCode::DropDown]);

        // Releasing the opening key leaves the popup up
        harness.process_text_event(TextEvent::key_up(Key::Character(" ".into())));
        assert!(picker(&harness, id).is_popup_open());
    }

    #[test]
    fn open_popup_keeps_its_color_and_defers_config() {
        let mut widget = rgbw_widget();
        widget.button.set_track_selection(true);
        widget.show_popup(Rect::new(0.0, 0.0, 60.0, 24.0));
        let popup = widget.popup.as_mut().unwrap();
        popup.change_selection(&mut widget.button, SelectionIndex::Swatch(2));
        assert_eq!(widget.button().color(), BLUE);

        assert!(!widget.sync_color(ColorValue::Rgb(RED)));
        assert_eq!(widget.button().color(), BLUE);
        widget.set_config(PickerConfig {
            show_tooltips: false,
            ..PickerConfig::default()
        });
        assert!(widget.button().show_tooltips());

        widget.close_popup();
        assert!(!widget.button().show_tooltips());
        assert_eq!(widget.button().color(), GREEN);
        assert!(widget.sync_color(ColorValue::Rgb(RED)));
        assert_eq!(widget.button().color(), RED);
    }

    #[test]
    fn named_keys_map_to_popup_keys() {
        assert_eq!(popup_key(&Key::Named(NamedKey::Escape)), Some(PopupKey::Escape));
        assert_eq!(popup_key(&Key::Named(NamedKey::ArrowDown)), Some(PopupKey::Down));
        assert_eq!(popup_key(&Key::Named(NamedKey::F4)), Some(PopupKey::F4));
        assert_eq!(popup_key(&Key::Named(NamedKey::Alt)), Some(PopupKey::Alt));
        assert_eq!(popup_key(&Key::Named(NamedKey::Tab)), None);
    }

    #[test]
    fn characters_map_to_mnemonics() {
        assert_eq!(popup_key(&Key::Character(" ".into())), Some(PopupKey::Space));
        assert_eq!(popup_key(&Key::Character("m".into())), Some(PopupKey::Char('m')));
    }

    #[test]
    fn only_alt_is_carried() {
        assert_eq!(key_modifiers(&Modifiers::ALT), KeyModifiers::ALT);
        assert_eq!(key_modifiers(&Modifiers::SHIFT), KeyModifiers::NONE);
        assert_eq!(key_modifiers(&Modifiers::empty()), KeyModifiers::NONE);
    }

    #[test]
    fn widget_owns_the_notification_channel() {
        let mut widget = ColorPickerButtonWidget::new(PickerButton::new());
        widget.button.set_color(Rgb::WHITE);
        let codes: Vec<_> = widget.notifications.try_iter().map(|n| n.code).collect();
        assert_eq!(codes, vec![NotificationCode::SelectionChanged]);
        assert!(!widget.is_popup_open());
    }

    #[test]
    fn view_config_seeds_the_button() {
        let config = PickerConfig {
            show_custom: false,
            ..PickerConfig::default()
        };
        let view = color_picker_button::<(), ()>(ColorValue::Rgb(Rgb::WHITE), |_, _| {})
            .config(config);
        let button = view.configured_button();
        assert_eq!(button.raw_color(), ColorValue::Rgb(Rgb::WHITE));
        assert!(!button.show_custom());
    }
}
