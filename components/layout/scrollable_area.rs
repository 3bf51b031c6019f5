/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Per-box scrolling state. A `ScrollableArea` is either a frame view or an
//! overflow box; either way it owns the scrollbar widgets and the handles of
//! the compositor layers that scroll and clip it.

use app_units::Au;
use base::id::{FrameId, LayerId, ScrollableAreaId};
use compositing_api::{CompositorLayer, ScrollbarOrientation, ScrollbarThemeInfo};
use euclid::default::{Point2D, Rect, Size2D, Vector2D};
use geometry::DeviceIntPoint;

/// Side length of the touch hot zone around a resize handle. Twice the mouse
/// hot zone, so imprecise touches still grab the handle.
pub const RESIZER_CORNER_TOUCH_SIZE: i32 = 30;

/// A scrollbar widget as layout knows it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrollbar {
    /// Styled by the author through scrollbar pseudo-elements; painted on the
    /// main thread, never by the compositor.
    pub is_custom: bool,
    pub is_overlay: bool,
    pub thumb_thickness: i32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollableAreaKind {
    /// The scrolling state of the frame's own view.
    FrameView,
    /// An overflow box owned by the given render layer.
    OverflowBox(LayerId),
}

pub struct ScrollableArea {
    pub id: ScrollableAreaId,
    pub frame: FrameId,
    pub kind: ScrollableAreaKind,
    pub scroll_offset: Vector2D<Au>,
    /// Non-zero for right-to-left content, where scroll offsets run negative.
    pub minimum_scroll_offset: Vector2D<Au>,
    pub contents_size: Size2D<Au>,
    pub visible_size: Size2D<Au>,
    /// Bounding box in the owning frame's content coordinates.
    pub bounding_box: Rect<Au>,
    pub uses_composited_scrolling: bool,
    pub user_input_scrollable_horizontal: bool,
    pub user_input_scrollable_vertical: bool,
    pub place_vertical_scrollbar_on_left: bool,
    pub horizontal_scrollbar: Option<Scrollbar>,
    pub vertical_scrollbar: Option<Scrollbar>,
    pub layer_for_scrolling: Option<CompositorLayer>,
    pub layer_for_container: Option<CompositorLayer>,
    pub layer_for_horizontal_scrollbar: Option<CompositorLayer>,
    pub layer_for_vertical_scrollbar: Option<CompositorLayer>,
}

impl ScrollableArea {
    pub(crate) fn new(id: ScrollableAreaId, frame: FrameId, kind: ScrollableAreaKind) -> ScrollableArea {
        ScrollableArea {
            id,
            frame,
            kind,
            scroll_offset: Vector2D::new(Au(0), Au(0)),
            minimum_scroll_offset: Vector2D::new(Au(0), Au(0)),
            contents_size: Size2D::new(Au(0), Au(0)),
            visible_size: Size2D::new(Au(0), Au(0)),
            bounding_box: Rect::new(Point2D::new(Au(0), Au(0)), Size2D::new(Au(0), Au(0))),
            uses_composited_scrolling: false,
            user_input_scrollable_horizontal: true,
            user_input_scrollable_vertical: true,
            place_vertical_scrollbar_on_left: false,
            horizontal_scrollbar: None,
            vertical_scrollbar: None,
            layer_for_scrolling: None,
            layer_for_container: None,
            layer_for_horizontal_scrollbar: None,
            layer_for_vertical_scrollbar: None,
        }
    }

    pub fn scrollbar(&self, orientation: ScrollbarOrientation) -> Option<&Scrollbar> {
        match orientation {
            ScrollbarOrientation::Horizontal => self.horizontal_scrollbar.as_ref(),
            ScrollbarOrientation::Vertical => self.vertical_scrollbar.as_ref(),
        }
    }

    pub fn layer_for_scrollbar(&self, orientation: ScrollbarOrientation) -> Option<&CompositorLayer> {
        match orientation {
            ScrollbarOrientation::Horizontal => self.layer_for_horizontal_scrollbar.as_ref(),
            ScrollbarOrientation::Vertical => self.layer_for_vertical_scrollbar.as_ref(),
        }
    }

    pub fn set_layer_for_scrollbar(
        &mut self,
        orientation: ScrollbarOrientation,
        layer: Option<CompositorLayer>,
    ) {
        match orientation {
            ScrollbarOrientation::Horizontal => self.layer_for_horizontal_scrollbar = layer,
            ScrollbarOrientation::Vertical => self.layer_for_vertical_scrollbar = layer,
        }
    }

    pub fn user_input_scrollable(&self, orientation: ScrollbarOrientation) -> bool {
        match orientation {
            ScrollbarOrientation::Horizontal => self.user_input_scrollable_horizontal,
            ScrollbarOrientation::Vertical => self.user_input_scrollable_vertical,
        }
    }

    /// The scroll position the compositor works in: offset from the minimum,
    /// so always non-negative.
    pub fn scroll_position(&self) -> DeviceIntPoint {
        let delta = self.scroll_offset - self.minimum_scroll_offset;
        DeviceIntPoint::new(delta.x.to_nearest_px(), delta.y.to_nearest_px())
    }

    /// How far the contents have been scrolled; re-added when expressing
    /// rects relative to scrolled contents instead of the visible box.
    pub fn scrolled_content_offset(&self) -> Vector2D<Au> {
        self.scroll_offset
    }

    pub fn scrolls_overflow(&self) -> bool {
        self.contents_size.width > self.visible_size.width ||
            self.contents_size.height > self.visible_size.height
    }

    pub fn theme_info(&self, orientation: ScrollbarOrientation) -> Option<ScrollbarThemeInfo> {
        self.scrollbar(orientation).map(|scrollbar| ScrollbarThemeInfo {
            orientation,
            thumb_thickness: scrollbar.thumb_thickness,
            is_overlay: scrollbar.is_overlay,
        })
    }

}

/// The touch hot zone of the resize handle for a box with the given absolute
/// bounds: the bottom-right corner, clamped to the box.
pub fn touch_resizer_corner_rect(bounds: &Rect<Au>) -> Rect<Au> {
    let size = Au::from_px(RESIZER_CORNER_TOUCH_SIZE);
    let width = size.min(bounds.size.width);
    let height = size.min(bounds.size.height);
    Rect::new(
        Point2D::new(
            bounds.origin.x + bounds.size.width - width,
            bounds.origin.y + bounds.size.height - height,
        ),
        Size2D::new(width, height),
    )
}
