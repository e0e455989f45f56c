// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Caption text: mnemonic parsing, measuring and drawing
//!
//! Captions use the `&` prefix convention: `&Automatic` displays as
//! "Automatic" with the `A` underlined when keyboard cues are visible, and
//! `&&` is a literal ampersand.

use std::ops::Range;

use kurbo::{Affine, Rect, Size};
use masonry::core::{BrushIndex, StyleProperty, render_text};
use masonry::vello::Scene;
use parley::{FontContext, FontStack, Layout, LayoutContext};
use peniko::{Brush, Color};

thread_local! {
    static FONT_CX: std::cell::RefCell<FontContext> =
        std::cell::RefCell::new(FontContext::default());
    static LAYOUT_CX: std::cell::RefCell<
        LayoutContext<BrushIndex>,
    > = std::cell::RefCell::new(LayoutContext::new());
}

/// A caption with its `&` prefixes resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    display: String,
    mnemonic: Option<(char, Range<usize>)>,
}

impl Caption {
    pub fn parse(raw: &str) -> Self {
        let mut display = String::with_capacity(raw.len());
        let mut mnemonic = None;
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c != '&' {
                display.push(c);
                continue;
            }
            match chars.next() {
                Some('&') => display.push('&'),
                Some(next) => {
                    if mnemonic.is_none() {
                        let start = display.len();
                        mnemonic = Some((next, start..start + next.len_utf8()));
                    }
                    display.push(next);
                }
                // A trailing '&' has nothing to mark
                None => {}
            }
        }
        Self { display, mnemonic }
    }

    /// The text as displayed, without prefixes
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The accelerator character, if the caption has one
    pub fn mnemonic(&self) -> Option<char> {
        self.mnemonic.as_ref().map(|(c, _)| *c)
    }

    /// Byte range of the accelerator in `display()`
    pub fn mnemonic_range(&self) -> Option<Range<usize>> {
        self.mnemonic.as_ref().map(|(_, range)| range.clone())
    }

    /// Does a typed character trigger this caption's accelerator?
    pub fn matches_mnemonic(&self, typed: char) -> bool {
        self.mnemonic()
            .is_some_and(|c| c.to_lowercase().eq(typed.to_lowercase()))
    }
}

/// Measures text for layout
pub trait TextMeasure {
    /// Extent of a single line of displayed text
    fn text_extent(&self, text: &str) -> Size;
}

/// `TextMeasure` backed by parley
#[derive(Debug, Clone, Copy)]
pub struct ParleyMeasure {
    pub font_size: f64,
}

impl TextMeasure for ParleyMeasure {
    fn text_extent(&self, text: &str) -> Size {
        let layout = build_layout(text, self.font_size, None);
        Size::new(f64::from(layout.width()), f64::from(layout.height()))
    }
}

fn build_layout(
    text: &str,
    font_size: f64,
    underline: Option<Range<usize>>,
) -> Layout<BrushIndex> {
    FONT_CX.with(|font_cell| {
        LAYOUT_CX.with(|layout_cell| {
            let mut font_cx = font_cell.borrow_mut();
            let mut layout_cx = layout_cell.borrow_mut();

            let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, false);
            builder.push_default(StyleProperty::FontSize(font_size as f32));
            builder.push_default(StyleProperty::FontStack(FontStack::Single(
                parley::FontFamily::Generic(parley::GenericFamily::SansSerif),
            )));
            builder.push_default(StyleProperty::Brush(BrushIndex(0)));
            if let Some(range) = underline {
                builder.push(StyleProperty::Underline(true), range);
            }
            let mut layout = builder.build(text);
            layout.break_all_lines(None);
            layout
        })
    })
}

/// Draw a caption centered in `rect`, underlining the mnemonic only when
/// keyboard cues are visible
pub fn draw_caption(
    scene: &mut Scene,
    caption: &Caption,
    rect: Rect,
    color: Color,
    font_size: f64,
    show_mnemonic: bool,
) {
    let underline = if show_mnemonic {
        caption.mnemonic_range()
    } else {
        None
    };
    let layout = build_layout(caption.display(), font_size, underline);
    let x = rect.x0 + (rect.width() - f64::from(layout.width())) / 2.0;
    let y = rect.y0 + (rect.height() - f64::from(layout.height())) / 2.0;
    let brushes = vec![Brush::Solid(color)];
    render_text(scene, Affine::translate((x, y)), &layout, &brushes, false);
}

/// Draw left-aligned single-line text at `origin`
pub fn draw_label(scene: &mut Scene, text: &str, origin: kurbo::Point, color: Color, font_size: f64) {
    let layout = build_layout(text, font_size, None);
    let brushes = vec![Brush::Solid(color)];
    render_text(scene, Affine::translate(origin.to_vec2()), &layout, &brushes, false);
}
