// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolution against a viewport.

use kurbo::{Point, Rect, Size};

use crate::{Align, Placement, PlacementOptions, Side};

/// Resolve a placement with default [`PlacementOptions`].
///
/// See [`resolve_with`].
#[must_use]
pub fn resolve(
    trigger: Rect,
    content: Size,
    side: Side,
    align: Align,
    viewport: Rect,
) -> Placement {
    resolve_with(
        trigger,
        content,
        Placement::new(side, align),
        viewport,
        &PlacementOptions::default(),
    )
}

/// Resolve the placement of `content` around `trigger` within `viewport`.
///
/// The requested placement is used verbatim unless the content would extend
/// past the viewport edge on the requested side. In that case, and if
/// [`PlacementOptions::avoid_collisions`] is set, the side flips to its
/// opposite exactly once. The flipped result is not checked again, so two
/// overflowing sides never oscillate.
///
/// Alignment never changes.
#[must_use]
pub fn resolve_with(
    trigger: Rect,
    content: Size,
    requested: Placement,
    viewport: Rect,
    options: &PlacementOptions,
) -> Placement {
    position(trigger, content, requested, viewport, options).placement
}

/// A resolved placement together with the content's box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Positioned {
    /// The placement after overflow handling.
    pub placement: Placement,
    /// Content box for `placement`, in the trigger's coordinate space.
    pub rect: Rect,
    /// Whether the side was flipped away from the requested one.
    pub flipped: bool,
}

/// Resolve a placement and compute where the content lands.
#[must_use]
pub fn position(
    trigger: Rect,
    content: Size,
    requested: Placement,
    viewport: Rect,
    options: &PlacementOptions,
) -> Positioned {
    let rect = content_rect(trigger, content, requested, options.side_offset);
    if options.avoid_collisions && overflows(rect, requested.side, viewport) {
        let placement = Placement::new(requested.side.opposite(), requested.align);
        return Positioned {
            placement,
            rect: content_rect(trigger, content, placement, options.side_offset),
            flipped: true,
        };
    }
    Positioned {
        placement: requested,
        rect,
        flipped: false,
    }
}

/// The content box for `placement` around `trigger`, `side_offset` away from
/// it along the main axis.
#[must_use]
pub fn content_rect(trigger: Rect, content: Size, placement: Placement, side_offset: f64) -> Rect {
    let trigger = trigger.abs();
    let x = match placement.side {
        Side::Left => trigger.x0 - side_offset - content.width,
        Side::Right => trigger.x1 + side_offset,
        Side::Top | Side::Bottom => cross_start(
            trigger.x0,
            trigger.x1,
            content.width,
            placement.align,
        ),
    };
    let y = match placement.side {
        Side::Top => trigger.y0 - side_offset - content.height,
        Side::Bottom => trigger.y1 + side_offset,
        Side::Left | Side::Right => cross_start(
            trigger.y0,
            trigger.y1,
            content.height,
            placement.align,
        ),
    };
    Rect::from_origin_size(Point::new(x, y), content)
}

fn cross_start(lo: f64, hi: f64, extent: f64, align: Align) -> f64 {
    match align {
        Align::Start => lo,
        Align::Center => (lo + hi) * 0.5 - extent * 0.5,
        Align::End => hi - extent,
    }
}

/// Whether `rect` crosses the viewport edge on `side`.
fn overflows(rect: Rect, side: Side, viewport: Rect) -> bool {
    let viewport = viewport.abs();
    match side {
        Side::Top => rect.y0 < viewport.y0,
        Side::Bottom => rect.y1 > viewport.y1,
        Side::Left => rect.x0 < viewport.x0,
        Side::Right => rect.x1 > viewport.x1,
    }
}
