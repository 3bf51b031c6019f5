/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Frames and frame views. A frame is one document in the frame tree; its
//! view carries the geometry and the per-view object registries the
//! scrolling coordinator consumes.

use app_units::Au;
use base::id::{FrameId, LayerId, ScrollableAreaId};
use euclid::default::{Point2D, Rect, Size2D, Vector2D};

use crate::dom::Document;

/// A box that must force main-thread scrolling while it is present: either a
/// fixed/sticky box without a render layer of its own, or one whose layer is
/// tracked here by id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewportConstrainedObject {
    NonLayer,
    Layer(LayerId),
}

/// An embedded plugin. Plugins that want wheel events force their area onto
/// the main thread for scroll gestures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PluginArea {
    pub frame_rect: Rect<Au>,
    pub wants_wheel_events: bool,
}

pub struct Frame {
    pub id: FrameId,
    pub parent: Option<FrameId>,
    pub children: Vec<FrameId>,
    /// The render layer in the parent frame that contains this frame's
    /// owner element.
    pub owner_layer: Option<LayerId>,
    /// Offset of this frame's content origin within the owner layer's
    /// coordinate space.
    pub offset_in_owner_layer: Vector2D<Au>,
    /// The render view's layer; the root of this frame's layer tree.
    pub root_layer: Option<LayerId>,
    pub view: Option<FrameView>,
    pub document: Document,
}

impl Frame {
    pub(crate) fn new(id: FrameId, parent: Option<FrameId>) -> Frame {
        Frame {
            id,
            parent,
            children: Vec::new(),
            owner_layer: None,
            offset_in_owner_layer: Vector2D::new(Au(0), Au(0)),
            root_layer: None,
            view: Some(FrameView::default()),
            document: Document::new(id),
        }
    }

    pub fn view(&self) -> Option<&FrameView> {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> Option<&mut FrameView> {
        self.view.as_mut()
    }
}

pub struct FrameView {
    /// Position and size of the view within the parent frame's contents.
    pub frame_rect: Rect<Au>,
    pub contents_size: Size2D<Au>,
    pub visible_content_size: Size2D<Au>,
    pub scroll_offset: Vector2D<Au>,
    pub uses_compositing: bool,
    pub needs_layout: bool,
    slow_repaint_object_count: usize,
    pub viewport_constrained_objects: Vec<ViewportConstrainedObject>,
    /// Every scrollable area in this view, subscrollers included.
    pub scrollable_areas: Vec<ScrollableAreaId>,
    /// The view's own scrolling state.
    pub own_scrollable_area: Option<ScrollableAreaId>,
    /// Absolute bounds of boxes with a user-draggable resize handle.
    pub resizer_areas: Vec<Rect<Au>>,
    pub plugin_areas: Vec<PluginArea>,
}

impl Default for FrameView {
    fn default() -> FrameView {
        FrameView {
            frame_rect: Rect::new(Point2D::new(Au(0), Au(0)), Size2D::new(Au(0), Au(0))),
            contents_size: Size2D::new(Au(0), Au(0)),
            visible_content_size: Size2D::new(Au(0), Au(0)),
            scroll_offset: Vector2D::new(Au(0), Au(0)),
            uses_compositing: true,
            needs_layout: false,
            slow_repaint_object_count: 0,
            viewport_constrained_objects: Vec::new(),
            scrollable_areas: Vec::new(),
            own_scrollable_area: None,
            resizer_areas: Vec::new(),
            plugin_areas: Vec::new(),
        }
    }
}

impl FrameView {
    /// Whether the contents overflow the viewport on either axis.
    pub fn is_scrollable(&self) -> bool {
        self.contents_size.width > self.visible_content_size.width ||
            self.contents_size.height > self.visible_content_size.height
    }

    pub fn has_slow_repaint_objects(&self) -> bool {
        self.slow_repaint_object_count > 0
    }

    pub fn add_slow_repaint_object(&mut self) {
        self.slow_repaint_object_count += 1;
    }

    pub fn remove_slow_repaint_object(&mut self) {
        debug_assert!(self.slow_repaint_object_count > 0);
        self.slow_repaint_object_count = self.slow_repaint_object_count.saturating_sub(1);
    }
}
