/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Render layers: the paint-ordering tree the coordinator walks when
//! projecting hit-test rectangles and resolving composited ancestors.

use app_units::Au;
use base::id::{FrameId, LayerId, ScrollableAreaId};
use compositing_api::CompositorLayer;
use euclid::default::{Point2D, Rect, Size2D, Transform2D, Vector2D};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Per-layer hit-test rectangles, each list in the owning layer's local
/// coordinate space.
pub type LayerHitTestRects = FxHashMap<LayerId, SmallVec<[Rect<Au>; 4]>>;

/// How a layer relates to the compositor-side backing store.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompositingState {
    NotComposited,
    /// The layer owns a backing surface and paints into it.
    PaintsIntoOwnBacking,
    /// The layer owns a backing surface but its content is painted into an
    /// ancestor's backing.
    HasOwnBackingButPaintsIntoAncestor,
}

/// The subset of the computed position property this subsystem cares about.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Position {
    Static,
    Relative,
    Fixed,
    Sticky,
}

/// The graphics layers backing one composited render layer.
#[derive(Clone)]
pub struct CompositedLayerMapping {
    pub main_layer: CompositorLayer,
    /// Present when the layer uses composited scrolling; region annotations
    /// then apply to the moving contents, not the clip box.
    pub scrolling_contents_layer: Option<CompositorLayer>,
    pub ancestor_clipping_layer: Option<CompositorLayer>,
}

impl CompositedLayerMapping {
    pub fn new(main_layer: CompositorLayer) -> CompositedLayerMapping {
        CompositedLayerMapping {
            main_layer,
            scrolling_contents_layer: None,
            ancestor_clipping_layer: None,
        }
    }

    /// The topmost graphics layer positioned by the owning render layer.
    pub fn local_root_for_owning_layer(&self) -> &CompositorLayer {
        self.ancestor_clipping_layer.as_ref().unwrap_or(&self.main_layer)
    }

    /// The graphics layer that receives region annotations: the scrolling
    /// contents layer when composited scrolling is in use.
    pub fn region_target_layer(&self) -> &CompositorLayer {
        self.scrolling_contents_layer.as_ref().unwrap_or(&self.main_layer)
    }
}

pub struct Layer {
    pub id: LayerId,
    pub frame: FrameId,
    pub parent: Option<LayerId>,
    pub children: Vec<LayerId>,
    /// Offset of this layer's origin within the parent layer's coordinate
    /// space, as laid out (any scroll adjustment of intermediate content
    /// included).
    pub offset_from_parent: Vector2D<Au>,
    /// Transform applied to the layer's subtree, about the layer origin.
    pub transform: Option<Transform2D<f32>>,
    pub size: Size2D<Au>,
    pub position: Position,
    pub is_anchored_right: bool,
    pub is_anchored_bottom: bool,
    pub compositing_state: CompositingState,
    pub scrollable_area: Option<ScrollableAreaId>,
    pub mapping: Option<CompositedLayerMapping>,
}

impl Layer {
    pub(crate) fn new(id: LayerId, frame: FrameId, size: Size2D<Au>) -> Layer {
        Layer {
            id,
            frame,
            parent: None,
            children: Vec::new(),
            offset_from_parent: Vector2D::new(Au(0), Au(0)),
            transform: None,
            size,
            position: Position::Static,
            is_anchored_right: false,
            is_anchored_bottom: false,
            compositing_state: CompositingState::NotComposited,
            scrollable_area: None,
            mapping: None,
        }
    }

    pub fn has_composited_layer_mapping(&self) -> bool {
        self.mapping.is_some()
    }

    pub fn mapping(&self) -> Option<&CompositedLayerMapping> {
        self.mapping.as_ref()
    }

    /// The layer's own box, in its local coordinate space.
    pub fn self_hit_test_rect(&self) -> Rect<Au> {
        Rect::new(Point2D::new(Au(0), Au(0)), self.size)
    }
}
