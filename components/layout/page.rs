/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The page: owner of the frame, layer, node and scrollable-area arenas.
//! Arena ids stay valid for the lifetime of the page; nothing is ever
//! removed from an arena, detached subtrees are just unlinked.

use app_units::Au;
use base::id::{FrameId, LayerId, NodeId, ScrollableAreaId};
use compositing_api::CompositorLayer;
use euclid::default::{Size2D, Vector2D};

use crate::dom::{Node, NodeKind};
use crate::frame::{Frame, FrameView};
use crate::layer::{CompositedLayerMapping, CompositingState, Layer};
use crate::scrollable_area::{ScrollableArea, ScrollableAreaKind};

pub struct Page {
    frames: Vec<Frame>,
    layers: Vec<Layer>,
    nodes: Vec<Node>,
    scrollable_areas: Vec<ScrollableArea>,
    main_frame: FrameId,
}

impl Page {
    /// Creates a page with a main frame whose view fills `visible_size`.
    pub fn new(visible_size: Size2D<Au>) -> Page {
        let main_frame = FrameId(0);
        let mut frame = Frame::new(main_frame, None);
        if let Some(view) = frame.view_mut() {
            view.frame_rect.size = visible_size;
            view.visible_content_size = visible_size;
            view.contents_size = visible_size;
        }
        Page {
            frames: vec![frame],
            layers: Vec::new(),
            nodes: Vec::new(),
            scrollable_areas: Vec::new(),
            main_frame,
        }
    }

    pub fn main_frame(&self) -> FrameId {
        self.main_frame
    }

    pub fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id.index()]
    }

    pub fn frame_mut(&mut self, id: FrameId) -> &mut Frame {
        &mut self.frames[id.index()]
    }

    pub fn layer(&self, id: LayerId) -> &Layer {
        &self.layers[id.index()]
    }

    pub fn layer_mut(&mut self, id: LayerId) -> &mut Layer {
        &mut self.layers[id.index()]
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn scrollable_area(&self, id: ScrollableAreaId) -> &ScrollableArea {
        &self.scrollable_areas[id.index()]
    }

    pub fn scrollable_area_mut(&mut self, id: ScrollableAreaId) -> &mut ScrollableArea {
        &mut self.scrollable_areas[id.index()]
    }

    pub fn view(&self, frame: FrameId) -> Option<&FrameView> {
        self.frame(frame).view()
    }

    pub fn view_mut(&mut self, frame: FrameId) -> Option<&mut FrameView> {
        self.frame_mut(frame).view_mut()
    }

    /// Adds a child frame under `parent`, anchored at `owner_layer` (the
    /// render layer of its owner element in the parent document).
    pub fn add_child_frame(&mut self, parent: FrameId, owner_layer: Option<LayerId>) -> FrameId {
        let id = FrameId(self.frames.len() as u32);
        let mut frame = Frame::new(id, Some(parent));
        frame.owner_layer = owner_layer;
        self.frames.push(frame);
        self.frame_mut(parent).children.push(id);
        id
    }

    /// Creates the render view's layer for a frame.
    pub fn create_root_layer(&mut self, frame: FrameId, size: Size2D<Au>) -> LayerId {
        let id = LayerId(self.layers.len() as u32);
        self.layers.push(Layer::new(id, frame, size));
        self.frame_mut(frame).root_layer = Some(id);
        id
    }

    pub fn add_child_layer(
        &mut self,
        parent: LayerId,
        size: Size2D<Au>,
        offset_from_parent: Vector2D<Au>,
    ) -> LayerId {
        let id = LayerId(self.layers.len() as u32);
        let frame = self.layer(parent).frame;
        let mut layer = Layer::new(id, frame, size);
        layer.parent = Some(parent);
        layer.offset_from_parent = offset_from_parent;
        self.layers.push(layer);
        self.layer_mut(parent).children.push(id);
        id
    }

    /// Marks a layer as composited (or not). The mapping must be present
    /// exactly when the state says the layer owns a backing.
    pub fn set_layer_compositing(
        &mut self,
        layer: LayerId,
        state: CompositingState,
        mapping: Option<CompositedLayerMapping>,
    ) {
        debug_assert_eq!(
            state == CompositingState::NotComposited,
            mapping.is_none(),
            "composited layers carry a mapping, non-composited layers do not"
        );
        let layer = self.layer_mut(layer);
        layer.compositing_state = state;
        layer.mapping = mapping;
    }

    /// Creates a scrollable area and registers it where the coordinator will
    /// find it: overflow boxes with their own frame view and owning layer,
    /// frame views with the embedding frame's view.
    pub fn add_scrollable_area(&mut self, frame: FrameId, kind: ScrollableAreaKind) -> ScrollableAreaId {
        let id = ScrollableAreaId(self.scrollable_areas.len() as u32);
        self.scrollable_areas.push(ScrollableArea::new(id, frame, kind));
        match kind {
            ScrollableAreaKind::FrameView => {
                if let Some(view) = self.view_mut(frame) {
                    view.own_scrollable_area = Some(id);
                }
                if let Some(parent) = self.frame(frame).parent {
                    if let Some(parent_view) = self.view_mut(parent) {
                        parent_view.scrollable_areas.push(id);
                    }
                }
            },
            ScrollableAreaKind::OverflowBox(layer) => {
                if let Some(view) = self.view_mut(frame) {
                    view.scrollable_areas.push(id);
                }
                self.layer_mut(layer).scrollable_area = Some(id);
            },
        }
        id
    }

    pub fn add_node(&mut self, frame: FrameId, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(id, frame, parent, kind));
        id
    }

    /// Creates the document / `<html>` / `<body>` chain for a frame and wires
    /// it into the frame's document.
    pub fn create_document_nodes(&mut self, frame: FrameId) -> (NodeId, NodeId, NodeId) {
        let document = self.add_node(frame, None, NodeKind::Document);
        let html = self.add_node(frame, Some(document), NodeKind::Element);
        let body = self.add_node(frame, Some(html), NodeKind::Element);
        let doc = &mut self.frame_mut(frame).document;
        doc.document_node = Some(document);
        doc.html_element = Some(html);
        doc.body_element = Some(body);
        (document, html, body)
    }

    /// The compositor layer that scrolls the frame's contents, if the frame
    /// view is composited.
    pub fn frame_scroll_layer(&self, frame: FrameId) -> Option<&CompositorLayer> {
        let view = self.view(frame)?;
        let area = view.own_scrollable_area?;
        self.scrollable_area(area).layer_for_scrolling.as_ref()
    }

    /// The nearest layer, this one included, that paints into its own
    /// backing. Stays within the layer's frame.
    pub fn enclosing_compositing_layer_for_repaint(&self, layer: LayerId) -> Option<LayerId> {
        let mut current = Some(layer);
        while let Some(id) = current {
            let layer = self.layer(id);
            if layer.compositing_state == CompositingState::PaintsIntoOwnBacking {
                return Some(id);
            }
            current = layer.parent;
        }
        None
    }

    pub fn layer_scrolls_overflow(&self, layer: LayerId) -> bool {
        self.layer(layer)
            .scrollable_area
            .map_or(false, |area| self.scrollable_area(area).scrolls_overflow())
    }

    /// Whether this area is the main frame view's own scrolling state.
    pub fn is_main_frame_view_area(&self, area: ScrollableAreaId) -> bool {
        let area = self.scrollable_area(area);
        area.kind == ScrollableAreaKind::FrameView && area.frame == self.main_frame
    }

    /// All frames, preorder from the main frame.
    pub fn frames_in_tree_order(&self) -> Vec<FrameId> {
        let mut order = Vec::with_capacity(self.frames.len());
        let mut stack = vec![self.main_frame];
        while let Some(frame) = stack.pop() {
            order.push(frame);
            for child in self.frame(frame).children.iter().rev() {
                stack.push(*child);
            }
        }
        order
    }
}
