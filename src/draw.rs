// Copyright 2025 the Swatch Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Small scene-drawing helpers shared by the manual renderers

use kurbo::{Affine, BezPath, Point, Rect, Stroke};
use masonry::vello::Scene;
use peniko::{Brush, Color, Fill};

/// Fill a rectangle with a solid color
pub fn fill_rect(scene: &mut Scene, rect: Rect, color: Color) {
    fill_brush(scene, rect, &Brush::Solid(color));
}

/// Fill a rectangle with an arbitrary brush
pub fn fill_brush(scene: &mut Scene, rect: Rect, brush: &Brush) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }
    scene.fill(Fill::NonZero, Affine::IDENTITY, brush, None, &rect);
}

/// One-pixel frame drawn just inside `rect`
pub fn frame_rect(scene: &mut Scene, rect: Rect, color: Color) {
    if rect.width() < 1.0 || rect.height() < 1.0 {
        return;
    }
    scene.stroke(
        &Stroke::new(1.0),
        Affine::IDENTITY,
        &Brush::Solid(color),
        None,
        &rect.inset(-0.5),
    );
}

/// A classic raised edge: light on the top-left, dark on the bottom-right,
/// one pixel per ring. Returns the rectangle inside the edge.
pub fn raised_edge(scene: &mut Scene, rect: Rect, rings: &[(Color, Color)]) -> Rect {
    let mut inner = rect;
    for &(light, dark) in rings {
        if inner.width() < 2.0 || inner.height() < 2.0 {
            break;
        }
        fill_rect(scene, Rect::new(inner.x0, inner.y0, inner.x1, inner.y0 + 1.0), light);
        fill_rect(scene, Rect::new(inner.x0, inner.y0, inner.x0 + 1.0, inner.y1), light);
        fill_rect(scene, Rect::new(inner.x0, inner.y1 - 1.0, inner.x1, inner.y1), dark);
        fill_rect(scene, Rect::new(inner.x1 - 1.0, inner.y0, inner.x1, inner.y1), dark);
        inner = inner.inset(-1.0);
    }
    inner
}

/// Downward-pointing triangle filling the width of `rect`
pub fn arrow(scene: &mut Scene, rect: Rect, color: Color) {
    let mut path = BezPath::new();
    path.move_to(Point::new(rect.x0, rect.y0));
    path.line_to(Point::new(rect.x1, rect.y0));
    path.line_to(Point::new((rect.x0 + rect.x1) / 2.0, rect.y1));
    path.close_path();
    scene.fill(Fill::NonZero, Affine::IDENTITY, &Brush::Solid(color), None, &path);
}

/// Dotted focus rectangle
pub fn focus_rect(scene: &mut Scene, rect: Rect, color: Color) {
    if rect.width() < 1.0 || rect.height() < 1.0 {
        return;
    }
    scene.stroke(
        &Stroke::new(1.0).with_dashes(0.0, [1.0, 1.0]),
        Affine::IDENTITY,
        &Brush::Solid(color),
        None,
        &rect.inset(-0.5),
    );
}
