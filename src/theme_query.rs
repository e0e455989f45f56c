// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme queries: the draw/measure capability the renderers consume
//!
//! `ThemeQuery` is opened for a semicolon-separated list of visual class
//! names (`"Button"`, `"ComboBox"`, `"Menu"`, ...); the first recognised name
//! wins. All drawing operations assume the caller already checked
//! `is_themed()`. `VelloTheme` is the built-in implementation, painting parts
//! with the colors in `theme.rs`.

use bitflags::bitflags;
use kurbo::{Affine, Insets, Rect, RoundedRect, Stroke};
use masonry::vello::Scene;
use peniko::{Brush, Color, Fill};

use crate::draw;
use crate::settings;
use crate::text::{self, Caption};
use crate::theme;

/// Visual class a theme handle was opened for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeClass {
    Button,
    ComboBox,
    Menu,
}

impl ThemeClass {
    /// First recognised class in a `;`-separated list
    pub fn parse_list(list: &str) -> Option<ThemeClass> {
        list.split(';').map(str::trim).find_map(|name| {
            match name.to_ascii_lowercase().as_str() {
                "button" => Some(ThemeClass::Button),
                "combobox" => Some(ThemeClass::ComboBox),
                "menu" => Some(ThemeClass::Menu),
                _ => None,
            }
        })
    }
}

/// Drawable parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    PushButton,
    DropDownButtonRight,
    PopupBorders,
    PopupBackground,
    BarItem,
    PopupItem,
}

bitflags! {
    /// Per-part visual state
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PartState: u32 {
        const HOT = 1 << 0;
        const PRESSED = 1 << 1;
        const DISABLED = 1 << 2;
        const DEFAULTED = 1 << 3;
    }
}

bitflags! {
    /// Which sides of an edge to draw
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EdgeFlags: u32 {
        const LEFT = 1 << 0;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
        /// Single flat line instead of a bevel
        const MONO = 1 << 4;
        const RECT = Self::LEFT.bits() | Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits();
    }
}

bitflags! {
    /// Text layout flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TextFlags: u32 {
        const CENTER = 1 << 0;
        const VCENTER = 1 << 1;
        const SINGLE_LINE = 1 << 2;
        /// Process `&` prefixes but do not underline the mnemonic
        const HIDE_PREFIX = 1 << 3;
    }
}

/// Edge styles understood by `draw_edge`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    RaisedOuter,
    Raised,
}

/// Color properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorProp {
    Fill,
    Text,
    EdgeShadow,
}

/// Margin properties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginProp {
    Sizing,
    Content,
}

/// Font description returned by `font`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size: f64,
}

/// Draw and measure primitives keyed by part and state
pub trait ThemeQuery {
    fn is_themed(&self) -> bool;

    fn color(&self, part: Part, state: PartState, prop: ColorProp) -> Color;

    fn font(&self, part: Part, state: PartState) -> FontSpec;

    fn margins(&self, part: Part, state: PartState, prop: MarginProp) -> Insets;

    fn background_content_rect(&self, part: Part, state: PartState, outer: Rect) -> Rect;

    fn draw_background(
        &self,
        scene: &mut Scene,
        part: Part,
        state: PartState,
        rect: Rect,
        clip: Option<Rect>,
    );

    /// Draw an edge and return the rectangle inside it
    fn draw_edge(
        &self,
        scene: &mut Scene,
        part: Part,
        state: PartState,
        rect: Rect,
        edge: EdgeStyle,
        flags: EdgeFlags,
    ) -> Rect;

    fn draw_text(
        &self,
        scene: &mut Scene,
        part: Part,
        state: PartState,
        text: &str,
        flags: TextFlags,
        rect: Rect,
    );
}

/// Built-in theme painting into a vello scene
#[derive(Debug, Clone, Copy)]
pub struct VelloTheme {
    class: Option<ThemeClass>,
    enabled: bool,
}

impl VelloTheme {
    /// Open a theme handle for a class list. `enabled` is the global
    /// "visual styles active" switch.
    pub fn open(class_list: &str, enabled: bool) -> Self {
        let class = ThemeClass::parse_list(class_list);
        if class.is_none() {
            tracing::debug!("No theme class recognised in '{}'", class_list);
        }
        Self { class, enabled }
    }

    pub fn class(&self) -> Option<ThemeClass> {
        self.class
    }

    fn button_face(state: PartState) -> Color {
        if state.contains(PartState::DISABLED) {
            theme::button::FACE_DISABLED
        } else if state.contains(PartState::PRESSED) {
            theme::button::FACE_PRESSED
        } else if state.contains(PartState::HOT) {
            theme::button::FACE_HOT
        } else {
            theme::button::FACE
        }
    }
}

impl ThemeQuery for VelloTheme {
    fn is_themed(&self) -> bool {
        self.enabled && self.class.is_some()
    }

    fn color(&self, part: Part, state: PartState, prop: ColorProp) -> Color {
        match (part, prop) {
            (_, ColorProp::EdgeShadow) => theme::button::EDGE_SHADOW,
            (Part::PushButton, ColorProp::Fill) => Self::button_face(state),
            (Part::PushButton, ColorProp::Text) => theme::menu::TEXT,
            (Part::DropDownButtonRight, _) if state.contains(PartState::DISABLED) => {
                theme::button::ARROW_DISABLED
            }
            (Part::DropDownButtonRight, _) => theme::button::ARROW,
            (_, ColorProp::Text) if state.contains(PartState::HOT) => theme::menu::TEXT_HOT,
            (_, ColorProp::Text) => theme::menu::TEXT,
            (Part::PopupBorders, ColorProp::Fill) => theme::menu::BORDER,
            (Part::BarItem, ColorProp::Fill) => theme::menu::ITEM_PUSHED,
            (Part::PopupItem, ColorProp::Fill) => theme::menu::ITEM_HOT,
            (Part::PopupBackground, ColorProp::Fill) => theme::menu::BACKGROUND,
        }
    }

    fn font(&self, _part: Part, _state: PartState) -> FontSpec {
        FontSpec {
            size: settings::popup::CAPTION_FONT_SIZE,
        }
    }

    fn margins(&self, part: Part, _state: PartState, _prop: MarginProp) -> Insets {
        match part {
            Part::PushButton => Insets::uniform(3.0),
            Part::PopupBorders => Insets::uniform(1.0),
            _ => Insets::ZERO,
        }
    }

    fn background_content_rect(&self, part: Part, state: PartState, outer: Rect) -> Rect {
        outer - self.margins(part, state, MarginProp::Content)
    }

    fn draw_background(
        &self,
        scene: &mut Scene,
        part: Part,
        state: PartState,
        rect: Rect,
        clip: Option<Rect>,
    ) {
        let rect = match clip {
            Some(clip) => rect.intersect(clip),
            None => rect,
        };
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        match part {
            Part::PushButton => {
                let shape = RoundedRect::from_rect(rect.inset(-0.5), 3.0);
                scene.fill(
                    Fill::NonZero,
                    Affine::IDENTITY,
                    &Brush::Solid(Self::button_face(state)),
                    None,
                    &shape,
                );
                let outline = if state.contains(PartState::DEFAULTED) {
                    theme::button::OUTLINE_DEFAULTED
                } else {
                    theme::button::OUTLINE
                };
                scene.stroke(
                    &Stroke::new(1.0),
                    Affine::IDENTITY,
                    &Brush::Solid(outline),
                    None,
                    &shape,
                );
            }
            Part::DropDownButtonRight => {
                let color = self.color(part, state, ColorProp::Fill);
                let center = rect.center();
                let glyph = Rect::new(center.x - 3.5, center.y - 2.0, center.x + 3.5, center.y + 2.0);
                draw::arrow(scene, glyph, color);
            }
            Part::PopupBorders => {
                draw::frame_rect(scene, rect, theme::menu::BORDER);
            }
            Part::PopupBackground => {
                draw::fill_rect(scene, rect, theme::menu::BACKGROUND);
            }
            Part::BarItem => {
                draw::fill_rect(scene, rect, theme::menu::ITEM_PUSHED);
                draw::frame_rect(scene, rect, theme::menu::ITEM_PUSHED_OUTLINE);
            }
            Part::PopupItem => {
                let shape = RoundedRect::from_rect(rect, 2.0);
                scene.fill(
                    Fill::NonZero,
                    Affine::IDENTITY,
                    &Brush::Solid(theme::menu::ITEM_HOT),
                    None,
                    &shape,
                );
            }
        }
    }

    fn draw_edge(
        &self,
        scene: &mut Scene,
        part: Part,
        state: PartState,
        rect: Rect,
        edge: EdgeStyle,
        flags: EdgeFlags,
    ) -> Rect {
        let shadow = self.color(part, state, ColorProp::EdgeShadow);
        let light = if flags.contains(EdgeFlags::MONO) {
            shadow
        } else {
            theme::button::EDGE_LIGHT
        };
        let width = match edge {
            EdgeStyle::RaisedOuter => 1.0,
            EdgeStyle::Raised => 2.0,
        };
        let mut inner = rect;
        if flags.contains(EdgeFlags::TOP) {
            draw::fill_rect(scene, Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + width), light);
            inner.y0 += width;
        }
        if flags.contains(EdgeFlags::LEFT) {
            draw::fill_rect(scene, Rect::new(rect.x0, rect.y0, rect.x0 + width, rect.y1), light);
            inner.x0 += width;
        }
        if flags.contains(EdgeFlags::BOTTOM) {
            draw::fill_rect(scene, Rect::new(rect.x0, rect.y1 - width, rect.x1, rect.y1), shadow);
            inner.y1 -= width;
        }
        if flags.contains(EdgeFlags::RIGHT) {
            draw::fill_rect(scene, Rect::new(rect.x1 - width, rect.y0, rect.x1, rect.y1), shadow);
            inner.x1 -= width;
        }
        inner
    }

    fn draw_text(
        &self,
        scene: &mut Scene,
        part: Part,
        state: PartState,
        text: &str,
        flags: TextFlags,
        rect: Rect,
    ) {
        let caption = Caption::parse(text);
        let color = self.color(part, state, ColorProp::Text);
        let font = self.font(part, state);
        text::draw_caption(
            scene,
            &caption,
            rect,
            color,
            font.size,
            !flags.contains(TextFlags::HIDE_PREFIX),
        );
    }
}
