/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The minimal document shape this subsystem needs: nodes with parent links
//! and renderers, plus the per-document registries of touch and wheel event
//! targets.

use app_units::Au;
use base::id::{FrameId, LayerId, NodeId};
use euclid::default::Rect;
use rustc_hash::FxHashSet;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    /// The document node of the frame the node belongs to. Registering a
    /// sub-document in an ancestor document's touch-target set is how
    /// handlers in child frames are reported upward.
    Document,
    Element,
}

/// The box generated for a node: its enclosing render layer and its border
/// box in that layer's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Renderer {
    pub layer: LayerId,
    pub rect_in_layer: Rect<Au>,
}

pub struct Node {
    pub id: NodeId,
    pub frame: FrameId,
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
    pub in_document: bool,
    pub renderer: Option<Renderer>,
}

impl Node {
    pub(crate) fn new(id: NodeId, frame: FrameId, parent: Option<NodeId>, kind: NodeKind) -> Node {
        Node {
            id,
            frame,
            parent,
            kind,
            in_document: true,
            renderer: None,
        }
    }
}

pub struct Document {
    pub frame: FrameId,
    pub document_node: Option<NodeId>,
    pub html_element: Option<NodeId>,
    pub body_element: Option<NodeId>,
    touch_event_targets: FxHashSet<NodeId>,
    wheel_event_handler_count: u32,
}

impl Document {
    pub(crate) fn new(frame: FrameId) -> Document {
        Document {
            frame,
            document_node: None,
            html_element: None,
            body_element: None,
            touch_event_targets: FxHashSet::default(),
            wheel_event_handler_count: 0,
        }
    }

    pub fn touch_event_targets(&self) -> &FxHashSet<NodeId> {
        &self.touch_event_targets
    }

    pub fn has_touch_event_targets(&self) -> bool {
        !self.touch_event_targets.is_empty()
    }

    pub fn did_add_touch_event_handler(&mut self, node: NodeId) {
        self.touch_event_targets.insert(node);
    }

    pub fn did_remove_touch_event_handler(&mut self, node: NodeId) {
        self.touch_event_targets.remove(&node);
    }

    pub fn clear_touch_event_targets(&mut self) {
        self.touch_event_targets.clear();
    }

    /// True for the document node itself, `<html>` and `<body>`; a handler on
    /// any of these covers the whole document.
    pub fn is_document_html_or_body(&self, node: NodeId) -> bool {
        self.document_node == Some(node) ||
            self.html_element == Some(node) ||
            self.body_element == Some(node)
    }

    pub fn wheel_event_handler_count(&self) -> u32 {
        self.wheel_event_handler_count
    }

    pub fn set_wheel_event_handler_count(&mut self, count: u32) {
        self.wheel_event_handler_count = count;
    }
}
