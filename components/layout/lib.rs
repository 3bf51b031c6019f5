/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

#![deny(unsafe_code)]

//! The main-thread side of the page: the frame tree, per-frame views and
//! documents, the render-layer arena and the scrolling state of individual
//! boxes. The scrolling coordinator in the `compositing` crate walks these
//! structures; it never owns them.
//!
//! Cross references between objects (layer parents, frame owners, a layer's
//! scrollable area) are typed indices into arenas owned by [`Page`]. Only the
//! child-list edges are structural; every back edge is a plain index.

pub mod dom;
pub mod frame;
pub mod geometry_map;
pub mod layer;
pub mod page;
pub mod scrollable_area;

pub use dom::{Document, Node, NodeKind, Renderer};
pub use frame::{Frame, FrameView, PluginArea, ViewportConstrainedObject};
pub use geometry_map::GeometryMap;
pub use layer::{
    CompositedLayerMapping, CompositingState, Layer, LayerHitTestRects, Position,
};
pub use page::Page;
pub use scrollable_area::{Scrollbar, ScrollableArea, ScrollableAreaKind, touch_resizer_corner_rect};
