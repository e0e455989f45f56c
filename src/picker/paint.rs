// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Popup painting
//!
//! `PopupState::paint` produces a `PopupPaint`: one `PaintSwatchInfo` per
//! visible cell, in paint order. Two renderers consume it. The themed one
//! draws through a `ThemeQuery`; the classic one uses flat system colors.
//! The choice is made once per paint in `paint_popup`.

use kurbo::{Insets, Rect, Size};
use masonry::vello::Scene;
use peniko::Brush;

use super::index::SelectionIndex;
use crate::draw;
use crate::model::Rgb;
use crate::settings;
use crate::text::{self, Caption};
use crate::theme;
use crate::theme_query::{MarginProp, Part, PartState, TextFlags, ThemeQuery};

/// What a cell shows
#[derive(Debug, Clone, PartialEq)]
pub enum SwatchContent {
    /// Caption text, still carrying its `&` prefix
    Caption(String),
    /// The table entry's brush from the button's palette
    Color(Brush),
}

/// Paint description of a single cell
#[derive(Debug, Clone, PartialEq)]
pub struct PaintSwatchInfo {
    pub index: SelectionIndex,
    /// Under the pointer or keyboard cursor
    pub hot: bool,
    /// Matches the button's color
    pub selected: bool,
    pub rect: Rect,
    pub margin: Size,
    pub hi_border: Size,
    pub content: SwatchContent,
}

/// Paint description of the whole popup
#[derive(Debug, Clone, PartialEq)]
pub struct PopupPaint {
    pub client: Rect,
    pub cells: Vec<PaintSwatchInfo>,
    /// Underline caption mnemonics
    pub show_accelerators: bool,
}

impl PopupPaint {
    pub fn cell(&self, index: SelectionIndex) -> Option<&PaintSwatchInfo> {
        self.cells.iter().find(|cell| cell.index == index)
    }
}

/// Paint the popup, themed if the theme is active
pub fn paint_popup(scene: &mut Scene, paint: &PopupPaint, theme: &dyn ThemeQuery, flat_menus: bool) {
    if theme.is_themed() {
        ThemedRenderer { theme }.paint(scene, paint);
    } else {
        ClassicRenderer::new(flat_menus).paint(scene, paint);
    }
}

fn deflate(rect: Rect, by: Size) -> Rect {
    rect.inset(Insets::uniform_xy(-by.width, -by.height))
}

fn text_flags(show_accelerators: bool) -> TextFlags {
    let flags = TextFlags::CENTER | TextFlags::VCENTER | TextFlags::SINGLE_LINE;
    if show_accelerators {
        flags
    } else {
        flags | TextFlags::HIDE_PREFIX
    }
}

// ============================================================================
// THEMED
// ============================================================================

pub struct ThemedRenderer<'a> {
    pub theme: &'a dyn ThemeQuery,
}

impl ThemedRenderer<'_> {
    pub fn paint(&self, scene: &mut Scene, paint: &PopupPaint) {
        let none = PartState::empty();
        let border = self.theme.margins(Part::PopupBorders, none, MarginProp::Sizing);

        self.theme
            .draw_background(scene, Part::PopupBorders, none, paint.client, None);
        self.theme
            .draw_background(scene, Part::PopupBackground, none, paint.client - border, None);

        for cell in &paint.cells {
            self.paint_cell(scene, cell, border, paint.show_accelerators);
        }
    }

    fn paint_cell(&self, scene: &mut Scene, cell: &PaintSwatchInfo, border: Insets, show_accelerators: bool) {
        let theme = self.theme;
        let mut rect = cell.rect;
        let m = cell.margin;

        if cell.selected {
            // The bottom edge keeps the margin so it lines up with the hot outline
            rect = rect.inset(Insets::new(
                -(m.width - 1.0),
                -(m.height - 1.0),
                -(m.width - 1.0),
                -m.height,
            ));
            theme.draw_background(scene, Part::BarItem, PartState::PRESSED, rect, None);
            rect = rect.inset(Insets::new(-1.0, -1.0, -1.0, 0.0));
        }
        if cell.hot {
            // Inside the pushed area when selected, around the content otherwise
            rect = if cell.selected {
                rect - border
            } else {
                deflate(rect, m)
            };
            theme.draw_background(scene, Part::PopupItem, PartState::HOT, rect, None);
        }

        match &cell.content {
            SwatchContent::Caption(caption) => {
                let state = if cell.selected {
                    PartState::HOT
                } else {
                    PartState::empty()
                };
                theme.draw_text(
                    scene,
                    Part::PopupItem,
                    state,
                    caption,
                    text_flags(show_accelerators),
                    rect,
                );
            }
            SwatchContent::Color(brush) => {
                let rect = deflate(rect, m + cell.hi_border);
                theme.draw_background(scene, Part::PopupBorders, PartState::empty(), rect, None);
                draw::fill_brush(scene, rect - border, brush);
            }
        }
    }
}

// ============================================================================
// CLASSIC
// ============================================================================

/// System colors used by the classic renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassicColors {
    pub text: Rgb,
    pub background: Rgb,
    pub highlight_border: Rgb,
    pub highlight: Rgb,
    pub highlight_text: Rgb,
    /// Fill of a selected cell that is not hot
    pub lowlight: Rgb,
    pub swatch_border: Rgb,
    pub frame: Rgb,
}

impl ClassicColors {
    pub fn system(flat_menus: bool) -> Self {
        let background = theme::system::MENU;
        let highlight_border = theme::system::HIGHLIGHT;
        Self {
            text: theme::system::MENU_TEXT,
            background,
            highlight_border,
            highlight: if flat_menus {
                theme::system::MENU_HILIGHT
            } else {
                highlight_border
            },
            highlight_text: theme::system::HIGHLIGHT_TEXT,
            lowlight: background.blend(highlight_border, settings::popup::LOWLIGHT_ALPHA),
            swatch_border: theme::system::SHADOW_3D,
            frame: theme::system::BTN_SHADOW,
        }
    }
}

/// Fills and text placement for one classic cell, in paint order
#[derive(Debug, Clone, PartialEq)]
pub struct ClassicCell {
    pub fills: Vec<(Rect, Rgb)>,
    /// The swatch color, painted last
    pub swatch: Option<(Rect, Brush)>,
    pub text: Option<(Rect, Rgb)>,
}

pub struct ClassicRenderer {
    pub flat_menus: bool,
    pub colors: ClassicColors,
}

impl ClassicRenderer {
    pub fn new(flat_menus: bool) -> Self {
        Self {
            flat_menus,
            colors: ClassicColors::system(flat_menus),
        }
    }

    /// Layers for one cell
    pub fn cell_layers(&self, cell: &PaintSwatchInfo) -> ClassicCell {
        let c = &self.colors;
        let mut fills = Vec::with_capacity(4);
        let mut rect = cell.rect;

        if cell.hot || cell.selected {
            if cell.margin.width > 0.0 || cell.margin.height > 0.0 {
                fills.push((rect, c.background));
                rect = deflate(rect, cell.margin);
            }
            fills.push((rect, c.highlight_border));
            rect = rect.inset(-1.0);
            fills.push((rect, if cell.hot { c.highlight } else { c.lowlight }));
            rect = deflate(rect, cell.hi_border - Size::new(1.0, 1.0));
        } else {
            fills.push((rect, c.background));
            rect = deflate(rect, cell.margin + cell.hi_border);
        }

        match &cell.content {
            SwatchContent::Caption(_) => ClassicCell {
                fills,
                swatch: None,
                text: Some((rect, if cell.hot { c.highlight_text } else { c.text })),
            },
            SwatchContent::Color(brush) => {
                fills.push((rect, c.swatch_border));
                ClassicCell {
                    fills,
                    swatch: Some((rect.inset(-1.0), brush.clone())),
                    text: None,
                }
            }
        }
    }

    pub fn paint(&self, scene: &mut Scene, paint: &PopupPaint) {
        let client = paint.client;
        draw::fill_rect(scene, client, self.colors.background.to_color());
        if self.flat_menus {
            draw::frame_rect(scene, client, self.colors.frame.to_color());
        } else {
            draw::raised_edge(
                scene,
                client,
                &[
                    (
                        theme::system::BTN_FACE.to_color(),
                        theme::system::DARK_SHADOW.to_color(),
                    ),
                    (
                        theme::system::BTN_HIGHLIGHT.to_color(),
                        theme::system::BTN_SHADOW.to_color(),
                    ),
                ],
            );
        }

        for cell in &paint.cells {
            let layers = self.cell_layers(cell);
            for (rect, color) in &layers.fills {
                draw::fill_rect(scene, *rect, color.to_color());
            }
            if let Some((rect, brush)) = &layers.swatch {
                draw::fill_brush(scene, *rect, brush);
            }
            if let (Some((rect, color)), SwatchContent::Caption(caption)) = (layers.text, &cell.content) {
                text::draw_caption(
                    scene,
                    &Caption::parse(caption),
                    rect,
                    color.to_color(),
                    settings::popup::CAPTION_FONT_SIZE,
                    paint.show_accelerators,
                );
            }
        }
    }
}
