/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The scrolling coordinator: main-thread bookkeeping for compositor-driven
//! scrolling.

use app_units::Au;
use base::id::{FrameId, LayerId, ScrollableAreaId};
use compositing_api::{
    CompositorConfig, CompositorLayer, CompositorSupport, LayerTreeHost,
    MainThreadScrollingReasons, PositionConstraint, ScrollbarLayer, ScrollbarOrientation,
    ScrollbarThemeInfo,
};
use euclid::default::Vector2D;
use geometry::{Region, au_rect_to_enclosing_device_rect, au_size_to_device_size};
use layout::{
    CompositingState, LayerHitTestRects, Page, Position, ViewportConstrainedObject,
    touch_resizer_corner_rect,
};
use log::{trace, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::hit_test;

/// The lazily recomputed pieces of coordinator output. Layout completion
/// dirties all three bits at once; each clears independently when its
/// recomputation runs.
#[derive(Default)]
struct UpdateState {
    scroll_gesture_region_is_dirty: bool,
    touch_event_target_rects_are_dirty: bool,
    should_scroll_on_main_thread_dirty: bool,
    was_frame_scrollable: bool,
    /// Retained across pushes for diagnostics.
    last_main_thread_scrolling_reasons: MainThreadScrollingReasons,
}

pub struct ScrollingCoordinator {
    config: CompositorConfig,
    support: Box<dyn CompositorSupport>,
    horizontal_scrollbars: FxHashMap<ScrollableAreaId, ScrollbarLayer>,
    vertical_scrollbars: FxHashMap<ScrollableAreaId, ScrollbarLayer>,
    layers_with_touch_rects: FxHashSet<LayerId>,
    state: UpdateState,
}

impl ScrollingCoordinator {
    pub fn new(config: CompositorConfig, support: Box<dyn CompositorSupport>) -> ScrollingCoordinator {
        ScrollingCoordinator {
            config,
            support,
            horizontal_scrollbars: FxHashMap::default(),
            vertical_scrollbars: FxHashMap::default(),
            layers_with_touch_rects: FxHashSet::default(),
            state: UpdateState::default(),
        }
    }

    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Layout has completed: every derived region and flag is now suspect.
    /// No recomputation happens here; that is deferred to
    /// [`Self::update_after_compositing_change`].
    pub fn notify_layout_updated(&mut self) {
        self.state.scroll_gesture_region_is_dirty = true;
        self.state.touch_event_target_rects_are_dirty = true;
        self.state.should_scroll_on_main_thread_dirty = true;
    }

    /// Whether the next compositing pass needs the full reconciliation. Lets
    /// the caller skip [`Self::update_after_compositing_change`] entirely.
    pub fn needs_update_after_compositing_change(&self, page: &Page) -> bool {
        self.state.scroll_gesture_region_is_dirty ||
            self.state.touch_event_target_rects_are_dirty ||
            self.state.should_scroll_on_main_thread_dirty ||
            self.frame_view_is_dirty(page)
    }

    /// The once-per-compositing-pass reconciliation. Must run after the
    /// compositing tree for the current layout has stabilized: the regions
    /// computed here are pushed onto layers that compositing just picked.
    pub fn update_after_compositing_change(&mut self, page: &Page) {
        trace!("ScrollingCoordinator::update_after_compositing_change");

        if self.state.scroll_gesture_region_is_dirty {
            // The region of the page where scroll gestures and wheel events
            // cannot be handled on the compositor thread:
            // 1. Scrollable areas without composited scrolling (subframes,
            //    overflow boxes, list boxes), in every frame, not just the
            //    one whose layout changed.
            // 2. Resize-handle hot zones; resizing runs on the main thread.
            // 3. Plugin areas that want wheel events.
            let region = self.compute_should_handle_scroll_gesture_on_main_thread_region(
                page,
                page.main_frame(),
                Vector2D::new(Au(0), Au(0)),
            );
            self.set_should_handle_scroll_gesture_on_main_thread_region(page, region);
            self.state.scroll_gesture_region_is_dirty = false;
        }

        if self.state.touch_event_target_rects_are_dirty {
            self.update_touch_event_target_rects_if_needed(page);
            self.state.touch_event_target_rects_are_dirty = false;
        }

        let frame_is_scrollable = page
            .view(page.main_frame())
            .map_or(false, |view| view.is_scrollable());
        if self.state.should_scroll_on_main_thread_dirty ||
            self.state.was_frame_scrollable != frame_is_scrollable
        {
            let reasons = self.main_thread_scrolling_reasons(page);
            self.set_should_update_scroll_layer_position_on_main_thread(page, reasons);
            self.state.should_scroll_on_main_thread_dirty = false;
        }
        self.state.was_frame_scrollable = frame_is_scrollable;

        // Runs on every pass, dirty or not: keep every frame's scrolling
        // layer sized to its contents.
        for frame in page.frames_in_tree_order() {
            let Some(view) = page.view(frame) else { continue };
            if let Some(scroll_layer) = page.frame_scroll_layer(frame) {
                scroll_layer.set_bounds(au_size_to_device_size(view.contents_size));
            }
        }
    }

    /// Returns to a clean slate between independent sessions. Production
    /// code does not call this mid-session.
    pub fn reset(&mut self, page: &Page, host: &mut LayerTreeHost) {
        for (_, scrollbar) in self
            .horizontal_scrollbars
            .drain()
            .chain(self.vertical_scrollbars.drain())
        {
            host.registry_mut()
                .unregister_contents_layer(scrollbar.layer().id());
        }
        self.layers_with_touch_rects.clear();
        self.state.was_frame_scrollable = false;

        self.state.last_main_thread_scrolling_reasons = MainThreadScrollingReasons::empty();
        self.set_should_update_scroll_layer_position_on_main_thread(
            page,
            MainThreadScrollingReasons::empty(),
        );
    }

    /// Why the main frame must scroll on the main thread right now. Pure;
    /// the caller caches the value it pushes.
    pub fn main_thread_scrolling_reasons(&self, page: &Page) -> MainThreadScrollingReasons {
        // Without a view there is nothing to scroll, so nothing forces the
        // main thread.
        let Some(view) = page.view(page.main_frame()) else {
            return MainThreadScrollingReasons::empty();
        };

        let mut reasons = MainThreadScrollingReasons::empty();
        if view.has_slow_repaint_objects() {
            reasons.insert(MainThreadScrollingReasons::HAS_SLOW_REPAINT_OBJECTS);
        }
        if self.has_visible_slow_repaint_viewport_constrained_objects(page, view) {
            reasons.insert(MainThreadScrollingReasons::HAS_NON_LAYER_VIEWPORT_CONSTRAINED_OBJECTS);
        }
        reasons
    }

    fn has_visible_slow_repaint_viewport_constrained_objects(
        &self,
        page: &Page,
        view: &layout::FrameView,
    ) -> bool {
        for object in &view.viewport_constrained_objects {
            match *object {
                ViewportConstrainedObject::NonLayer => return true,
                ViewportConstrainedObject::Layer(layer) => {
                    // Only a layer that paints into a backing of its own can
                    // be moved by the compositor while the view scrolls.
                    if page.layer(layer).compositing_state !=
                        CompositingState::PaintsIntoOwnBacking
                    {
                        return true;
                    }
                },
            }
        }
        false
    }

    /// The value most recently pushed to the compositor, kept for tooling.
    pub fn last_main_thread_scrolling_reasons(&self) -> MainThreadScrollingReasons {
        self.state.last_main_thread_scrolling_reasons
    }

    pub fn main_thread_scrolling_reasons_as_text(&self) -> String {
        self.state.last_main_thread_scrolling_reasons.as_text()
    }

    fn set_should_update_scroll_layer_position_on_main_thread(
        &mut self,
        page: &Page,
        reasons: MainThreadScrollingReasons,
    ) {
        if let Some(scroll_layer) = page.frame_scroll_layer(page.main_frame()) {
            self.state.last_main_thread_scrolling_reasons = reasons;
            scroll_layer.set_main_thread_scrolling_reasons(reasons);
        }
    }

    fn frame_view_is_dirty(&self, page: &Page) -> bool {
        let view = page.view(page.main_frame());
        let frame_is_scrollable = view.map_or(false, |view| view.is_scrollable());
        if frame_is_scrollable != self.state.was_frame_scrollable {
            return true;
        }

        match (view, page.frame_scroll_layer(page.main_frame())) {
            (Some(view), Some(scroll_layer)) => {
                au_size_to_device_size(view.contents_size) != scroll_layer.bounds()
            },
            _ => false,
        }
    }

    fn compute_should_handle_scroll_gesture_on_main_thread_region(
        &self,
        page: &Page,
        frame: FrameId,
        frame_location: Vector2D<Au>,
    ) -> Region {
        let mut region = Region::new();
        let Some(view) = page.view(frame) else {
            return region;
        };
        let offset = frame_location + view.frame_rect.origin.to_vector();

        for area_id in &view.scrollable_areas {
            let area = page.scrollable_area(*area_id);
            // Composited scrollable areas can be scrolled off the main thread.
            if area.uses_composited_scrolling {
                continue;
            }
            let bounds = area.bounding_box.translate(offset);
            region.unite(au_rect_to_enclosing_device_rect(&bounds));
        }

        // Scroll gestures over a resize handle drag the handle instead, and
        // that happens on the main thread.
        for bounds in &view.resizer_areas {
            let corner = touch_resizer_corner_rect(bounds).translate(offset);
            region.unite(au_rect_to_enclosing_device_rect(&corner));
        }

        for plugin in &view.plugin_areas {
            if plugin.wants_wheel_events {
                let bounds = plugin.frame_rect.translate(offset);
                region.unite(au_rect_to_enclosing_device_rect(&bounds));
            }
        }

        for child in &page.frame(frame).children {
            region.unite_region(
                &self.compute_should_handle_scroll_gesture_on_main_thread_region(
                    page, *child, offset,
                ),
            );
        }
        region
    }

    fn set_should_handle_scroll_gesture_on_main_thread_region(&self, page: &Page, region: Region) {
        if let Some(scroll_layer) = page.frame_scroll_layer(page.main_frame()) {
            scroll_layer.set_non_fast_scrollable_region(region);
        }
    }

    /// Whether touch regions are forwarded to the compositor at all.
    pub fn touch_hit_testing_enabled(&self, page: &Page) -> bool {
        let main = page.main_frame();
        let has_content_renderer = page.frame(main).root_layer.is_some();
        let uses_compositing = page.view(main).map_or(false, |view| view.uses_compositing);
        self.config.touch_hit_testing_enabled && has_content_renderer && uses_compositing
    }

    fn update_touch_event_target_rects_if_needed(&mut self, page: &Page) {
        trace!("ScrollingCoordinator::update_touch_event_target_rects_if_needed");

        if !self.touch_hit_testing_enabled(page) {
            return;
        }

        let rects = hit_test::compute_touch_event_target_rects(page);
        self.set_touch_event_target_rects(page, rects);
    }

    /// In principle this can run more often than the full recomputation, for
    /// example during a non-composited scroll.
    fn set_touch_event_target_rects(&mut self, page: &Page, layer_rects: LayerHitTestRects) {
        trace!("ScrollingCoordinator::set_touch_event_target_rects");

        let compositor_rects =
            hit_test::convert_layer_rects_to_enclosing_composited_layer(page, &layer_rects);

        let mut old_layers_with_touch_rects = std::mem::take(&mut self.layers_with_touch_rects);
        for (layer_id, rects) in &compositor_rects {
            let mut region = Region::new();
            for rect in rects {
                region.unite(au_rect_to_enclosing_device_rect(rect));
            }
            // The conversion above guarantees a composited layer.
            let Some(mapping) = page.layer(*layer_id).mapping() else {
                debug_assert!(false, "touch rects resolved to non-composited {}", layer_id);
                continue;
            };
            mapping.region_target_layer().set_touch_event_handler_region(region);
            old_layers_with_touch_rects.remove(layer_id);
            self.layers_with_touch_rects.insert(*layer_id);
        }

        // Anything we did not just update had its handlers removed; the
        // compositor region must be zeroed explicitly, not just dropped.
        // FIXME: this assumes one graphics layer owns a render layer's touch
        // rects, which does not hold when a backing paints into an ancestor.
        for layer_id in old_layers_with_touch_rects {
            if let Some(mapping) = page.layer(layer_id).mapping() {
                mapping
                    .region_target_layer()
                    .set_touch_event_handler_region(Region::new());
            }
        }
    }

    /// Touch handlers were added or removed without a layout. Defers to the
    /// next reconciliation; while a layout is pending the rects would be
    /// stale anyway.
    pub fn touch_event_target_rects_did_change(&mut self, page: &Page) {
        if !self.touch_hit_testing_enabled(page) {
            return;
        }
        if page
            .view(page.main_frame())
            .map_or(false, |view| view.needs_layout)
        {
            return;
        }
        self.state.touch_event_target_rects_are_dirty = true;
    }

    pub fn layers_with_touch_rects(&self) -> &FxHashSet<LayerId> {
        &self.layers_with_touch_rects
    }

    /// A render layer is going away; forget it ever owned touch rects.
    pub fn will_destroy_render_layer(&mut self, layer: LayerId) {
        self.layers_with_touch_rects.remove(&layer);
    }

    fn scrollbar_map(
        &self,
        orientation: ScrollbarOrientation,
    ) -> &FxHashMap<ScrollableAreaId, ScrollbarLayer> {
        match orientation {
            ScrollbarOrientation::Horizontal => &self.horizontal_scrollbars,
            ScrollbarOrientation::Vertical => &self.vertical_scrollbars,
        }
    }

    fn scrollbar_map_mut(
        &mut self,
        orientation: ScrollbarOrientation,
    ) -> &mut FxHashMap<ScrollableAreaId, ScrollbarLayer> {
        match orientation {
            ScrollbarOrientation::Horizontal => &mut self.horizontal_scrollbars,
            ScrollbarOrientation::Vertical => &mut self.vertical_scrollbars,
        }
    }

    pub fn scrollbar_layer(
        &self,
        area: ScrollableAreaId,
        orientation: ScrollbarOrientation,
    ) -> Option<&ScrollbarLayer> {
        self.scrollbar_map(orientation).get(&area)
    }

    pub fn scrollbar_layer_count(&self) -> usize {
        self.horizontal_scrollbars.len() + self.vertical_scrollbars.len()
    }

    fn create_scrollbar_layer(
        &self,
        host: &mut LayerTreeHost,
        theme: ScrollbarThemeInfo,
    ) -> ScrollbarLayer {
        let layer = self.support.create_scrollbar_layer(host, theme);
        host.registry_mut().register_contents_layer(layer.layer().id());
        layer
    }

    pub fn create_solid_color_scrollbar_layer(
        &self,
        host: &mut LayerTreeHost,
        orientation: ScrollbarOrientation,
        thumb_thickness: i32,
        is_left_side_vertical_scrollbar: bool,
    ) -> ScrollbarLayer {
        let layer = self.support.create_solid_color_scrollbar_layer(
            host,
            orientation,
            thumb_thickness,
            is_left_side_vertical_scrollbar,
        );
        host.registry_mut().register_contents_layer(layer.layer().id());
        layer
    }

    fn remove_scrollbar_layer(
        &mut self,
        host: &mut LayerTreeHost,
        area: ScrollableAreaId,
        orientation: ScrollbarOrientation,
    ) {
        if let Some(scrollbar) = self.scrollbar_map_mut(orientation).remove(&area) {
            host.registry_mut()
                .unregister_contents_layer(scrollbar.layer().id());
        }
    }

    /// Must be called before a scrollable area is destroyed; releases both
    /// compositor scrollbar layers.
    pub fn will_destroy_scrollable_area(&mut self, host: &mut LayerTreeHost, area: ScrollableAreaId) {
        self.remove_scrollbar_layer(host, area, ScrollbarOrientation::Horizontal);
        self.remove_scrollbar_layer(host, area, ScrollbarOrientation::Vertical);
    }

    /// The single entry point for scrollbar graphics-layer changes: creation,
    /// destruction, and custom/native style flips all land here.
    pub fn scrollable_area_scrollbar_layer_did_change(
        &mut self,
        page: &Page,
        host: &mut LayerTreeHost,
        area_id: ScrollableAreaId,
        orientation: ScrollbarOrientation,
    ) {
        if !self.config.platform_supports_coordinated_scrollbar {
            return;
        }

        let is_main_frame = page.is_main_frame_view_area(area_id);
        if !is_main_frame && self.config.platform_supports_main_frame_only {
            return;
        }

        let area = page.scrollable_area(area_id);
        let Some(scrollbar_graphics_layer) = area.layer_for_scrollbar(orientation) else {
            self.remove_scrollbar_layer(host, area_id, orientation);
            return;
        };
        let Some(scrollbar) = area.scrollbar(orientation) else {
            warn!("{} has a scrollbar graphics layer but no scrollbar", area_id);
            self.remove_scrollbar_layer(host, area_id, orientation);
            return;
        };

        // Author-painted scrollbars are main-thread content.
        if scrollbar.is_custom {
            detach_scrollbar_layer(scrollbar_graphics_layer);
            self.remove_scrollbar_layer(host, area_id, orientation);
            return;
        }

        if !self.scrollbar_map(orientation).contains_key(&area_id) {
            let scrollbar_layer = if self.config.use_solid_color_scrollbars {
                self.create_solid_color_scrollbar_layer(
                    host,
                    orientation,
                    scrollbar.thumb_thickness,
                    area.place_vertical_scrollbar_on_left,
                )
            } else {
                let theme = ScrollbarThemeInfo {
                    orientation,
                    thumb_thickness: scrollbar.thumb_thickness,
                    is_overlay: scrollbar.is_overlay,
                };
                self.create_scrollbar_layer(host, theme)
            };
            self.scrollbar_map_mut(orientation).insert(area_id, scrollbar_layer);
        }

        // Root layer non-overlay scrollbars should be marked opaque to
        // disable blending.
        let is_opaque_scrollbar = !scrollbar.is_overlay;
        if !scrollbar_graphics_layer.contents_opaque() {
            scrollbar_graphics_layer.set_contents_opaque(is_main_frame && is_opaque_scrollbar);
        }

        let Some(scrollbar_layer) = self.scrollbar_map_mut(orientation).get_mut(&area_id) else {
            return;
        };
        scrollbar_layer
            .layer()
            .set_opaque(scrollbar_graphics_layer.contents_opaque());

        setup_scrollbar_layer(
            scrollbar_graphics_layer,
            scrollbar_layer,
            area.layer_for_scrolling.as_ref(),
            area.layer_for_container.as_ref(),
        );
    }

    /// An area's scroll layer appeared, disappeared or changed; rewire its
    /// compositor-side scrolling state and any scrollbar layers. Returns
    /// whether a scroll layer exists.
    pub fn scrollable_area_scroll_layer_did_change(
        &mut self,
        page: &Page,
        area_id: ScrollableAreaId,
    ) -> bool {
        let area = page.scrollable_area(area_id);
        let scroll_layer = area.layer_for_scrolling.as_ref();

        if let Some(scroll_layer) = scroll_layer {
            scroll_layer.set_scrollable_area(Some(area_id));
            scroll_layer.set_scroll_clip_layer(area.layer_for_container.as_ref());
            scroll_layer.set_scroll_position(area.scroll_position());
            scroll_layer.set_bounds(au_size_to_device_size(area.contents_size));
            scroll_layer.set_user_scrollable(
                area.user_input_scrollable(ScrollbarOrientation::Horizontal),
                area.user_input_scrollable(ScrollbarOrientation::Vertical),
            );
        }

        for orientation in [ScrollbarOrientation::Horizontal, ScrollbarOrientation::Vertical] {
            if let Some(scrollbar_layer) = self.scrollbar_map_mut(orientation).get_mut(&area_id) {
                if let Some(scrollbar_graphics_layer) = area.layer_for_scrollbar(orientation) {
                    setup_scrollbar_layer(
                        scrollbar_graphics_layer,
                        scrollbar_layer,
                        scroll_layer,
                        area.layer_for_container.as_ref(),
                    );
                }
            }
        }

        scroll_layer.is_some()
    }

    fn compute_current_wheel_event_handler_count(&self, page: &Page) -> u32 {
        page.frames_in_tree_order()
            .iter()
            .map(|frame| page.frame(*frame).document.wheel_event_handler_count())
            .sum()
    }

    pub fn set_wheel_event_handler_count(&self, page: &Page, count: u32) {
        if let Some(scroll_layer) = page.frame_scroll_layer(page.main_frame()) {
            scroll_layer.set_have_wheel_event_handlers(count > 0);
        }
    }

    pub fn frame_view_wheel_event_handler_count_changed(&self, page: &Page, _frame: FrameId) {
        self.set_wheel_event_handler_count(
            page,
            self.compute_current_wheel_event_handler_count(page),
        );
    }

    /// Whether this coordinator drives scrolling for the given view: only the
    /// main frame, and only in composited mode.
    pub fn coordinates_scrolling_for_frame_view(&self, page: &Page, frame: FrameId) -> bool {
        if frame != page.main_frame() {
            return false;
        }
        page.frame(frame).root_layer.is_some() &&
            page.view(frame).map_or(false, |view| view.uses_compositing)
    }

    pub fn frame_view_has_slow_repaint_objects_did_change(&mut self, page: &Page, frame: FrameId) {
        if !self.coordinates_scrolling_for_frame_view(page, frame) {
            return;
        }
        self.state.should_scroll_on_main_thread_dirty = true;
    }

    pub fn frame_view_fixed_objects_did_change(&mut self, page: &Page, frame: FrameId) {
        if !self.coordinates_scrolling_for_frame_view(page, frame) {
            return;
        }
        self.state.should_scroll_on_main_thread_dirty = true;
    }

    pub fn frame_view_root_layer_did_change(&mut self, page: &Page, frame: FrameId) {
        if !self.coordinates_scrolling_for_frame_view(page, frame) {
            return;
        }
        self.notify_layout_updated();
        self.frame_view_wheel_event_handler_count_changed(page, frame);
    }

    pub fn set_layer_is_container_for_fixed_position_layers(
        &self,
        layer: &CompositorLayer,
        enable: bool,
    ) {
        layer.set_is_container_for_fixed_position_layers(enable);
    }

    /// Recomputes the fixed-position constraint of a composited layer and
    /// pushes it onto the graphics layer that positions it.
    pub fn update_layer_position_constraint(&self, page: &Page, layer_id: LayerId) {
        let layer = page.layer(layer_id);
        debug_assert!(layer.has_composited_layer_mapping());
        let Some(mapping) = layer.mapping() else {
            return;
        };
        let main_layer = mapping.local_root_for_owning_layer();

        // Avoid unnecessary commits.
        clear_position_constraint_except_for_layer(mapping.ancestor_clipping_layer.as_ref(), main_layer);
        clear_position_constraint_except_for_layer(Some(&mapping.main_layer), main_layer);

        main_layer.set_position_constraint(compute_position_constraint(page, layer_id));
    }

    pub fn update_scroll_parent_for_layer(
        &self,
        page: &Page,
        child: &CompositorLayer,
        parent: Option<LayerId>,
    ) {
        let scroll_parent = parent
            .and_then(|id| page.layer(id).mapping())
            .map(|mapping| mapping.region_target_layer().id());
        child.set_scroll_parent(scroll_parent);
    }

    pub fn update_clip_parent_for_layer(
        &self,
        page: &Page,
        child: &CompositorLayer,
        parent: Option<LayerId>,
    ) {
        let clip_parent = parent
            .and_then(|id| page.layer(id).mapping())
            .map(|mapping| mapping.region_target_layer().id());
        child.set_clip_parent(clip_parent);
    }
}

fn detach_scrollbar_layer(scrollbar_graphics_layer: &CompositorLayer) {
    scrollbar_graphics_layer.set_contents_layer(None);
    scrollbar_graphics_layer.set_draws_content(true);
}

fn setup_scrollbar_layer(
    scrollbar_graphics_layer: &CompositorLayer,
    scrollbar_layer: &mut ScrollbarLayer,
    scroll_layer: Option<&CompositorLayer>,
    container_layer: Option<&CompositorLayer>,
) {
    let Some(scroll_layer) = scroll_layer else {
        detach_scrollbar_layer(scrollbar_graphics_layer);
        return;
    };
    scrollbar_layer.set_scroll_layer(Some(scroll_layer));
    scrollbar_layer.set_clip_layer(container_layer);
    scrollbar_graphics_layer.set_contents_layer(Some(scrollbar_layer.layer().id()));
    scrollbar_graphics_layer.set_draws_content(false);
}

fn clear_position_constraint_except_for_layer(
    layer: Option<&CompositorLayer>,
    except: &CompositorLayer,
) {
    if let Some(layer) = layer {
        if layer != except {
            layer.set_position_constraint(PositionConstraint::default());
        }
    }
}

fn compute_position_constraint(page: &Page, layer_id: LayerId) -> PositionConstraint {
    debug_assert!(page.layer(layer_id).has_composited_layer_mapping());
    let mut current = layer_id;
    loop {
        let layer = page.layer(current);
        if layer.position == Position::Fixed {
            return PositionConstraint::fixed_position(
                layer.is_anchored_right,
                layer.is_anchored_bottom,
            );
        }
        // Layers that inherit a fixed position are positioned with respect to
        // the nearest ancestor owning a backing; the search stops there.
        match layer.parent {
            Some(parent) if !page.layer(parent).has_composited_layer_mapping() => current = parent,
            _ => break,
        }
    }
    PositionConstraint::default()
}
