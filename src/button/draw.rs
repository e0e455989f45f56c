// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Button owner draw
//!
//! Layout first, paint second: `ButtonDrawPlan::compute` works out every
//! rectangle from the bounds and the visual state, then `paint` layers
//! frame, arrow, swatch, swatch edge and focus rectangle.

use bitflags::bitflags;
use kurbo::{Insets, Rect, Vec2};
use masonry::vello::Scene;

use super::PickerButton;
use crate::draw;
use crate::model::Rgb;
use crate::settings;
use crate::theme;
use crate::theme_query::{ColorProp, EdgeFlags, EdgeStyle, Part, PartState, ThemeQuery};

bitflags! {
    /// State the host reports for the button
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ItemState: u32 {
        const SELECTED = 1 << 0;
        const DISABLED = 1 << 1;
        const HOTLIGHT = 1 << 2;
        const DEFAULT = 1 << 3;
        const FOCUS = 1 << 4;
        /// Keyboard cues are hidden; suppresses the focus rectangle
        const NO_FOCUS_RECT = 1 << 5;
    }
}

/// Item state merged with the button's own hover and popup flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualState {
    pub pressed: bool,
    pub disabled: bool,
    pub hot: bool,
    pub defaulted: bool,
    pub focus_rect: bool,
}

impl VisualState {
    /// An open popup pins the button pressed and focused
    pub fn derive(item: ItemState, popup_active: bool, mouse_over: bool) -> Self {
        Self {
            pressed: item.contains(ItemState::SELECTED) || popup_active,
            disabled: item.contains(ItemState::DISABLED),
            hot: item.contains(ItemState::HOTLIGHT) || mouse_over,
            defaulted: item.contains(ItemState::DEFAULT),
            focus_rect: (item.contains(ItemState::FOCUS) || popup_active)
                && !item.contains(ItemState::NO_FOCUS_RECT),
        }
    }

    pub fn part_state(&self) -> PartState {
        let mut state = PartState::empty();
        state.set(PartState::PRESSED, self.pressed);
        state.set(PartState::DISABLED, self.disabled);
        state.set(PartState::HOT, self.hot);
        state.set(PartState::DEFAULTED, self.defaulted);
        state
    }
}

/// What goes inside the swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchFill {
    Color(Rgb),
    /// Disabled buttons show the edge shadow color instead
    Shadow,
}

/// Resolved geometry for one paint of the button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonDrawPlan {
    pub bounds: Rect,
    pub state: VisualState,
    pub themed: bool,
    pub arrow: Rect,
    pub swatch: Rect,
    pub fill: SwatchFill,
    pub focus: Option<Rect>,
}

impl ButtonDrawPlan {
    pub fn compute(
        bounds: Rect,
        button: &PickerButton,
        item: ItemState,
        theme: &dyn ThemeQuery,
    ) -> Self {
        let state = VisualState::derive(item, button.is_popup_active(), button.is_mouse_over());
        let themed = theme.is_themed();
        let edge = settings::button::EDGE;
        let border = settings::button::BORDER;

        let mut content = if themed {
            theme.background_content_rect(Part::PushButton, state.part_state(), bounds)
        } else {
            // Frame control takes the outer edge; the bottom row is trimmed
            // so the swatch sits visually centered.
            let mut inner = bounds - Insets::uniform_xy(edge.width, edge.height);
            inner.y1 -= border;
            if state.pressed {
                inner = inner + Vec2::new(1.0, 1.0);
            }
            inner
        };
        content = content - Insets::uniform_xy(edge.width, edge.height);

        let center_y = (content.y0 + content.y1) / 2.0;
        let arrow = if themed {
            let height = settings::button::arrow::THEMED_HEIGHT;
            let outer = Rect::new(
                content.x1 - settings::button::arrow::THEMED_WIDTH,
                center_y - height / 2.0,
                content.x1,
                center_y + height / 2.0,
            );
            let arrow_state = if state.disabled {
                PartState::DISABLED
            } else {
                PartState::empty()
            };
            theme.background_content_rect(Part::DropDownButtonRight, arrow_state, outer)
        } else {
            let height = settings::button::arrow::CLASSIC_HEIGHT;
            let x1 = content.x1 - edge.width;
            Rect::new(
                x1 - settings::button::arrow::CLASSIC_WIDTH,
                center_y - height / 2.0,
                x1,
                center_y + height / 2.0,
            )
        };

        let gap = if themed { (edge.width / 2.0).floor() } else { edge.width };
        let swatch = Rect::new(content.x0, content.y0, arrow.x0 - gap - border, content.y1);

        let fill = if state.disabled {
            SwatchFill::Shadow
        } else {
            SwatchFill::Color(button.color())
        };

        let focus = state
            .focus_rect
            .then(|| swatch.inset(settings::button::FOCUS_BORDER));

        Self {
            bounds,
            state,
            themed,
            arrow,
            swatch,
            fill,
            focus,
        }
    }

    pub fn paint(&self, scene: &mut Scene, theme: &dyn ThemeQuery) {
        let part_state = self.state.part_state();

        // Frame
        if self.themed {
            theme.draw_background(scene, Part::PushButton, part_state, self.bounds, None);
        } else {
            draw::fill_rect(scene, self.bounds, theme::system::BTN_FACE.to_color());
            let rings = if self.state.pressed {
                [
                    (theme::system::DARK_SHADOW.to_color(), theme::system::BTN_HIGHLIGHT.to_color()),
                    (theme::system::BTN_SHADOW.to_color(), theme::system::BTN_FACE.to_color()),
                ]
            } else {
                [
                    (theme::system::BTN_FACE.to_color(), theme::system::DARK_SHADOW.to_color()),
                    (theme::system::BTN_HIGHLIGHT.to_color(), theme::system::BTN_SHADOW.to_color()),
                ]
            };
            draw::raised_edge(scene, self.bounds, &rings);
        }

        // Arrow
        if self.themed {
            let arrow_state = if self.state.disabled {
                PartState::DISABLED
            } else {
                PartState::empty()
            };
            theme.draw_background(scene, Part::DropDownButtonRight, arrow_state, self.arrow, None);
        } else if self.state.disabled {
            draw::arrow(
                scene,
                self.arrow + Vec2::new(1.0, 1.0),
                theme::system::BTN_HIGHLIGHT.to_color(),
            );
            draw::arrow(scene, self.arrow, theme::system::BTN_SHADOW.to_color());
        } else {
            draw::arrow(scene, self.arrow, theme::system::BTN_TEXT.to_color());
        }

        // Swatch
        let fill = match self.fill {
            SwatchFill::Color(rgb) => rgb.to_color(),
            SwatchFill::Shadow if self.themed => {
                theme.color(Part::PushButton, PartState::empty(), ColorProp::EdgeShadow)
            }
            SwatchFill::Shadow => theme::system::BTN_SHADOW.to_color(),
        };
        draw::fill_rect(scene, self.swatch, fill);

        if !self.state.disabled {
            let flags = EdgeFlags::RECT | EdgeFlags::MONO;
            if self.themed {
                theme.draw_edge(
                    scene,
                    Part::PushButton,
                    PartState::empty(),
                    self.swatch,
                    EdgeStyle::RaisedOuter,
                    flags,
                );
            } else {
                draw::frame_rect(scene, self.swatch, theme::system::DARK_SHADOW.to_color());
            }
        }

        if let Some(focus) = self.focus {
            draw::focus_rect(scene, focus, theme::system::BTN_TEXT.to_color());
        }
    }
}

/// Lay out and paint the button in one go
pub fn paint_button(
    scene: &mut Scene,
    bounds: Rect,
    button: &PickerButton,
    item: ItemState,
    theme: &dyn ThemeQuery,
) -> ButtonDrawPlan {
    let plan = ButtonDrawPlan::compute(bounds, button, item, theme);
    plan.paint(scene, theme);
    plan
}
