/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Compositor layer handles and the layer tree host.

use std::fmt;
use std::sync::Arc;

use base::Epoch;
use base::id::{CompositorLayerId, ScrollableAreaId};
use crossbeam_channel::{Receiver, Sender, unbounded};
use geometry::{DeviceIntPoint, DeviceIntSize, Region};
use log::warn;
use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::MainThreadScrollingReasons;

/// A constraint that pins a layer to one or more viewport edges while its
/// container scrolls.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PositionConstraint {
    pub is_fixed_position: bool,
    pub is_fixed_to_right_edge: bool,
    pub is_fixed_to_bottom_edge: bool,
}

impl PositionConstraint {
    pub fn fixed_position(fixed_to_right: bool, fixed_to_bottom: bool) -> PositionConstraint {
        PositionConstraint {
            is_fixed_position: true,
            is_fixed_to_right_edge: fixed_to_right,
            is_fixed_to_bottom_edge: fixed_to_bottom,
        }
    }
}

/// The pending property record of one compositor layer. The main thread
/// mutates this through [`CompositorLayer`] setters; the compositor sees a
/// clone of it in the next [`CommittedFrame`].
#[derive(Clone, Debug, PartialEq)]
pub struct LayerProperties {
    pub bounds: DeviceIntSize,
    pub position: DeviceIntPoint,
    pub scroll_position: DeviceIntPoint,
    pub scroll_clip_layer: Option<CompositorLayerId>,
    pub user_scrollable_horizontal: bool,
    pub user_scrollable_vertical: bool,
    pub non_fast_scrollable_region: Region,
    pub touch_event_handler_region: Region,
    pub have_wheel_event_handlers: bool,
    pub main_thread_scrolling_reasons: MainThreadScrollingReasons,
    pub is_container_for_fixed_position_layers: bool,
    pub position_constraint: PositionConstraint,
    pub scroll_parent: Option<CompositorLayerId>,
    pub clip_parent: Option<CompositorLayerId>,
    pub scrollable_area: Option<ScrollableAreaId>,
    pub draws_content: bool,
    pub contents_opaque: bool,
    pub opaque: bool,
    pub masks_to_bounds: bool,
    pub contents_layer: Option<CompositorLayerId>,
}

impl Default for LayerProperties {
    fn default() -> LayerProperties {
        LayerProperties {
            bounds: DeviceIntSize::zero(),
            position: DeviceIntPoint::zero(),
            scroll_position: DeviceIntPoint::zero(),
            scroll_clip_layer: None,
            user_scrollable_horizontal: false,
            user_scrollable_vertical: false,
            non_fast_scrollable_region: Region::new(),
            touch_event_handler_region: Region::new(),
            have_wheel_event_handlers: false,
            main_thread_scrolling_reasons: MainThreadScrollingReasons::empty(),
            is_container_for_fixed_position_layers: false,
            position_constraint: PositionConstraint::default(),
            scroll_parent: None,
            clip_parent: None,
            scrollable_area: None,
            draws_content: true,
            contents_opaque: false,
            opaque: false,
            masks_to_bounds: true,
            contents_layer: None,
        }
    }
}

struct LayerInner {
    id: CompositorLayerId,
    properties: RwLock<LayerProperties>,
    /// The owning child edges of the tree. The parent back edge below is a
    /// plain id and implies no ownership.
    children: RwLock<Vec<CompositorLayer>>,
    parent: RwLock<Option<CompositorLayerId>>,
}

/// A cheaply clonable, thread-safe handle to one compositor layer.
#[derive(Clone)]
pub struct CompositorLayer {
    inner: Arc<LayerInner>,
}

impl PartialEq for CompositorLayer {
    fn eq(&self, other: &CompositorLayer) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for CompositorLayer {}

impl fmt::Debug for CompositorLayer {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "CompositorLayer({})", self.inner.id.0)
    }
}

impl CompositorLayer {
    fn new(id: CompositorLayerId) -> CompositorLayer {
        CompositorLayer {
            inner: Arc::new(LayerInner {
                id,
                properties: RwLock::new(LayerProperties::default()),
                children: RwLock::new(Vec::new()),
                parent: RwLock::new(None),
            }),
        }
    }

    pub fn id(&self) -> CompositorLayerId {
        self.inner.id
    }

    pub fn properties(&self) -> LayerProperties {
        self.inner.properties.read().clone()
    }

    pub fn set_bounds(&self, bounds: DeviceIntSize) {
        self.inner.properties.write().bounds = bounds;
    }

    pub fn bounds(&self) -> DeviceIntSize {
        self.inner.properties.read().bounds
    }

    pub fn set_position(&self, position: DeviceIntPoint) {
        self.inner.properties.write().position = position;
    }

    pub fn set_scroll_position(&self, position: DeviceIntPoint) {
        self.inner.properties.write().scroll_position = position;
    }

    pub fn scroll_position(&self) -> DeviceIntPoint {
        self.inner.properties.read().scroll_position
    }

    /// Makes this layer scrollable, clipped by the given container layer.
    /// Passing `None` makes the layer non-scrollable again.
    pub fn set_scroll_clip_layer(&self, container: Option<&CompositorLayer>) {
        self.inner.properties.write().scroll_clip_layer = container.map(CompositorLayer::id);
    }

    pub fn scrollable(&self) -> bool {
        self.inner.properties.read().scroll_clip_layer.is_some()
    }

    pub fn set_user_scrollable(&self, horizontal: bool, vertical: bool) {
        let mut properties = self.inner.properties.write();
        properties.user_scrollable_horizontal = horizontal;
        properties.user_scrollable_vertical = vertical;
    }

    pub fn set_non_fast_scrollable_region(&self, region: Region) {
        self.inner.properties.write().non_fast_scrollable_region = region;
    }

    pub fn non_fast_scrollable_region(&self) -> Region {
        self.inner.properties.read().non_fast_scrollable_region.clone()
    }

    pub fn set_touch_event_handler_region(&self, region: Region) {
        self.inner.properties.write().touch_event_handler_region = region;
    }

    pub fn touch_event_handler_region(&self) -> Region {
        self.inner.properties.read().touch_event_handler_region.clone()
    }

    pub fn set_have_wheel_event_handlers(&self, have_handlers: bool) {
        self.inner.properties.write().have_wheel_event_handlers = have_handlers;
    }

    pub fn have_wheel_event_handlers(&self) -> bool {
        self.inner.properties.read().have_wheel_event_handlers
    }

    pub fn set_main_thread_scrolling_reasons(&self, reasons: MainThreadScrollingReasons) {
        self.inner.properties.write().main_thread_scrolling_reasons = reasons;
    }

    pub fn main_thread_scrolling_reasons(&self) -> MainThreadScrollingReasons {
        self.inner.properties.read().main_thread_scrolling_reasons
    }

    pub fn should_scroll_on_main_thread(&self) -> bool {
        !self.main_thread_scrolling_reasons().is_empty()
    }

    pub fn set_is_container_for_fixed_position_layers(&self, enable: bool) {
        self.inner.properties.write().is_container_for_fixed_position_layers = enable;
    }

    pub fn set_position_constraint(&self, constraint: PositionConstraint) {
        self.inner.properties.write().position_constraint = constraint;
    }

    pub fn position_constraint(&self) -> PositionConstraint {
        self.inner.properties.read().position_constraint
    }

    pub fn set_scroll_parent(&self, parent: Option<CompositorLayerId>) {
        self.inner.properties.write().scroll_parent = parent;
    }

    pub fn set_clip_parent(&self, parent: Option<CompositorLayerId>) {
        self.inner.properties.write().clip_parent = parent;
    }

    pub fn set_scrollable_area(&self, area: Option<ScrollableAreaId>) {
        self.inner.properties.write().scrollable_area = area;
    }

    pub fn set_draws_content(&self, draws_content: bool) {
        self.inner.properties.write().draws_content = draws_content;
    }

    pub fn draws_content(&self) -> bool {
        self.inner.properties.read().draws_content
    }

    pub fn set_contents_opaque(&self, opaque: bool) {
        self.inner.properties.write().contents_opaque = opaque;
    }

    pub fn contents_opaque(&self) -> bool {
        self.inner.properties.read().contents_opaque
    }

    pub fn set_opaque(&self, opaque: bool) {
        self.inner.properties.write().opaque = opaque;
    }

    pub fn opaque(&self) -> bool {
        self.inner.properties.read().opaque
    }

    pub fn set_masks_to_bounds(&self, masks_to_bounds: bool) {
        self.inner.properties.write().masks_to_bounds = masks_to_bounds;
    }

    /// Points this layer's contents at another (platform) layer, or restores
    /// self-painting with `None`.
    pub fn set_contents_layer(&self, contents: Option<CompositorLayerId>) {
        self.inner.properties.write().contents_layer = contents;
    }

    pub fn contents_layer(&self) -> Option<CompositorLayerId> {
        self.inner.properties.read().contents_layer
    }

    /// Appends a child. The caller is responsible for detaching `child` from
    /// any previous parent first.
    pub fn add_child(&self, child: &CompositorLayer) {
        if child.id() == self.id() {
            warn!("Refusing to add {:?} as a child of itself", self);
            return;
        }
        *child.inner.parent.write() = Some(self.id());
        self.inner.children.write().push(child.clone());
    }

    pub fn remove_all_children(&self) {
        for child in self.inner.children.write().drain(..) {
            *child.inner.parent.write() = None;
        }
    }

    pub fn parent(&self) -> Option<CompositorLayerId> {
        *self.inner.parent.read()
    }

    pub fn children(&self) -> Vec<CompositorLayer> {
        self.inner.children.read().clone()
    }
}

/// The registry of layers whose contents are provided by another compositor
/// object (scrollbar layers, plugins). An explicitly constructed object so
/// that independent layer trees do not share state.
#[derive(Default)]
pub struct ContentsLayerRegistry {
    registered: FxHashSet<CompositorLayerId>,
}

impl ContentsLayerRegistry {
    pub fn register_contents_layer(&mut self, layer: CompositorLayerId) {
        self.registered.insert(layer);
    }

    pub fn unregister_contents_layer(&mut self, layer: CompositorLayerId) {
        self.registered.remove(&layer);
    }

    pub fn is_registered(&self, layer: CompositorLayerId) -> bool {
        self.registered.contains(&layer)
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }
}

/// The viewport layers registered for page-scale scrolling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ViewportLayers {
    pub page_scale_layer: CompositorLayerId,
    pub inner_viewport_scroll_layer: CompositorLayerId,
    pub outer_viewport_scroll_layer: CompositorLayerId,
}

/// One layer's state as observed by the compositor at commit time.
#[derive(Clone, Debug)]
pub struct CommittedLayer {
    pub properties: LayerProperties,
    pub parent: Option<CompositorLayerId>,
    pub children: Vec<CompositorLayerId>,
}

/// An immutable snapshot of the whole layer tree, delivered to the compositor
/// side on every commit.
#[derive(Clone, Debug)]
pub struct CommittedFrame {
    pub epoch: Epoch,
    pub layers: FxHashMap<CompositorLayerId, CommittedLayer>,
    pub viewport_layers: Option<ViewportLayers>,
}

/// The main-thread owner of all compositor layers. Commits snapshot every
/// layer's pending record and hand it to the receiving end of the channel
/// returned by [`LayerTreeHost::new`]; a later commit supersedes an earlier
/// one that has not been consumed yet.
pub struct LayerTreeHost {
    layers: FxHashMap<CompositorLayerId, CompositorLayer>,
    next_layer_id: u32,
    registry: ContentsLayerRegistry,
    epoch: Epoch,
    commit_sender: Sender<CommittedFrame>,
    viewport_layers: Option<ViewportLayers>,
}

impl LayerTreeHost {
    pub fn new() -> (LayerTreeHost, Receiver<CommittedFrame>) {
        let (commit_sender, commit_receiver) = unbounded();
        let host = LayerTreeHost {
            layers: FxHashMap::default(),
            next_layer_id: 0,
            registry: ContentsLayerRegistry::default(),
            epoch: Epoch(0),
            commit_sender,
            viewport_layers: None,
        };
        (host, commit_receiver)
    }

    pub fn create_layer(&mut self) -> CompositorLayer {
        let id = CompositorLayerId(self.next_layer_id);
        self.next_layer_id += 1;
        let layer = CompositorLayer::new(id);
        self.layers.insert(id, layer.clone());
        layer
    }

    pub fn layer(&self, id: CompositorLayerId) -> Option<&CompositorLayer> {
        self.layers.get(&id)
    }

    pub fn registry(&self) -> &ContentsLayerRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ContentsLayerRegistry {
        &mut self.registry
    }

    pub fn register_viewport_layers(
        &mut self,
        page_scale_layer: CompositorLayerId,
        inner_viewport_scroll_layer: CompositorLayerId,
        outer_viewport_scroll_layer: CompositorLayerId,
    ) {
        self.viewport_layers = Some(ViewportLayers {
            page_scale_layer,
            inner_viewport_scroll_layer,
            outer_viewport_scroll_layer,
        });
    }

    pub fn clear_viewport_layers(&mut self) {
        self.viewport_layers = None;
    }

    pub fn viewport_layers(&self) -> Option<ViewportLayers> {
        self.viewport_layers
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Snapshots the pending state of every layer and sends it to the
    /// compositor side. Never blocks.
    pub fn commit(&mut self) -> Epoch {
        self.epoch.next();
        let layers = self
            .layers
            .iter()
            .map(|(id, layer)| {
                let committed = CommittedLayer {
                    properties: layer.properties(),
                    parent: layer.parent(),
                    children: layer.children().iter().map(CompositorLayer::id).collect(),
                };
                (*id, committed)
            })
            .collect();
        let frame = CommittedFrame {
            epoch: self.epoch,
            layers,
            viewport_layers: self.viewport_layers,
        };
        if self.commit_sender.send(frame).is_err() {
            warn!("Compositor side is gone; dropping commit {:?}", self.epoch);
        }
        self.epoch
    }
}
