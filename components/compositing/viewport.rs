/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The page-viewport layer assembly for page-scale (pinch) scrolling.

use compositing_api::{
    CompositorConfig, CompositorLayer, LayerTreeHost, ScrollbarLayer, ScrollbarOrientation,
};
use geometry::{DeviceIntPoint, DeviceIntSize};
use layout::Page;
use log::warn;

use crate::coordinator::ScrollingCoordinator;

/// Owns the fixed set of layers inserted above the document's layer tree
/// root so the page can be scrolled and zoomed independently of document
/// scrolling.
pub struct PageViewport {
    overlay_scrollbar_thickness: i32,
    inner_viewport_container_layer: Option<CompositorLayer>,
    page_scale_layer: Option<CompositorLayer>,
    inner_viewport_scroll_layer: Option<CompositorLayer>,
    overlay_scrollbar_horizontal: Option<CompositorLayer>,
    overlay_scrollbar_vertical: Option<CompositorLayer>,
    scrollbar_layer_horizontal: Option<ScrollbarLayer>,
    scrollbar_layer_vertical: Option<ScrollbarLayer>,
}

impl PageViewport {
    pub fn new(config: &CompositorConfig) -> PageViewport {
        PageViewport {
            overlay_scrollbar_thickness: config.overlay_scrollbar_thickness,
            inner_viewport_container_layer: None,
            page_scale_layer: None,
            inner_viewport_scroll_layer: None,
            overlay_scrollbar_horizontal: None,
            overlay_scrollbar_vertical: None,
            scrollbar_layer_horizontal: None,
            scrollbar_layer_vertical: None,
        }
    }

    pub fn set_viewport_size(
        &mut self,
        coordinator: &ScrollingCoordinator,
        host: &mut LayerTreeHost,
        size: DeviceIntSize,
    ) {
        let (Some(container), Some(scroll)) = (
            self.inner_viewport_container_layer.clone(),
            self.inner_viewport_scroll_layer.clone(),
        ) else {
            return;
        };
        container.set_bounds(size);
        // The scroll layer matches its clip layer; the page-scale layer
        // between them allows a non-zero max scroll offset once scale > 1.
        scroll.set_bounds(size);

        self.setup_scrollbar(coordinator, host, ScrollbarOrientation::Horizontal);
        self.setup_scrollbar(coordinator, host, ScrollbarOrientation::Vertical);
    }

    /// Modifies the top of the layer tree to add the layers needed for the
    /// inner/outer viewport fixed-position model. When finished the tree
    /// looks like this (`*` denotes added layers):
    ///
    /// ```text
    /// *inner viewport container (fixed-pos container)
    ///  +- *page scale
    ///  |   +- *inner viewport scroll
    ///  |       +-- the current layer tree root
    ///  +- *horizontal overlay scrollbar
    ///  +- *vertical overlay scrollbar
    /// ```
    pub fn attach_to_layer_tree(
        &mut self,
        coordinator: &ScrollingCoordinator,
        host: &mut LayerTreeHost,
        current_layer_tree_root: Option<&CompositorLayer>,
    ) {
        let Some(root) = current_layer_tree_root else {
            if let Some(scroll) = &self.inner_viewport_scroll_layer {
                scroll.remove_all_children();
            }
            return;
        };

        if let Some(scroll) = &self.inner_viewport_scroll_layer {
            if root.parent() == Some(scroll.id()) {
                return;
            }
        }

        if self.inner_viewport_scroll_layer.is_none() {
            debug_assert!(
                self.overlay_scrollbar_horizontal.is_none() &&
                    self.overlay_scrollbar_vertical.is_none() &&
                    self.page_scale_layer.is_none() &&
                    self.inner_viewport_container_layer.is_none()
            );

            let container = host.create_layer();
            let page_scale = host.create_layer();
            let scroll = host.create_layer();
            let overlay_horizontal = host.create_layer();
            let overlay_vertical = host.create_layer();

            coordinator.set_layer_is_container_for_fixed_position_layers(&scroll, true);

            // The compositing surface clips for us; clipping here too would
            // interfere with dynamically-sized viewports.
            container.set_masks_to_bounds(false);

            scroll.set_scroll_clip_layer(Some(&container));
            scroll.set_user_scrollable(true, true);

            container.add_child(&page_scale);
            page_scale.add_child(&scroll);
            container.add_child(&overlay_horizontal);
            container.add_child(&overlay_vertical);

            self.inner_viewport_container_layer = Some(container);
            self.page_scale_layer = Some(page_scale);
            self.inner_viewport_scroll_layer = Some(scroll);
            self.overlay_scrollbar_horizontal = Some(overlay_horizontal);
            self.overlay_scrollbar_vertical = Some(overlay_vertical);

            self.setup_scrollbar(coordinator, host, ScrollbarOrientation::Horizontal);
            self.setup_scrollbar(coordinator, host, ScrollbarOrientation::Vertical);
        }

        let Some(scroll) = &self.inner_viewport_scroll_layer else {
            return;
        };
        scroll.remove_all_children();
        scroll.add_child(root);
    }

    fn setup_scrollbar(
        &mut self,
        coordinator: &ScrollingCoordinator,
        host: &mut LayerTreeHost,
        orientation: ScrollbarOrientation,
    ) {
        let Some(container) = self.inner_viewport_container_layer.clone() else {
            return;
        };
        let Some(scrollbar_graphics_layer) = self.overlay_layer(orientation).cloned() else {
            return;
        };
        let thickness = self.overlay_scrollbar_thickness;

        let slot = match orientation {
            ScrollbarOrientation::Horizontal => &mut self.scrollbar_layer_horizontal,
            ScrollbarOrientation::Vertical => &mut self.scrollbar_layer_vertical,
        };
        if slot.is_none() {
            let mut scrollbar_layer =
                coordinator.create_solid_color_scrollbar_layer(host, orientation, thickness, false);
            scrollbar_layer.set_clip_layer(Some(&container));
            scrollbar_graphics_layer.set_contents_layer(Some(scrollbar_layer.layer().id()));
            scrollbar_graphics_layer.set_draws_content(false);
            *slot = Some(scrollbar_layer);
        }

        // Position the scrollbar along its edge of the container, leaving
        // room for the other scrollbar in the corner.
        let is_horizontal = orientation == ScrollbarOrientation::Horizontal;
        let size = container.bounds();
        let x = if is_horizontal { 0 } else { size.width - thickness };
        let y = if is_horizontal { size.height - thickness } else { 0 };
        let width = if is_horizontal { size.width - thickness } else { thickness };
        let height = if is_horizontal { thickness } else { size.height - thickness };

        scrollbar_graphics_layer.set_position(DeviceIntPoint::new(x, y));
        scrollbar_graphics_layer.set_bounds(DeviceIntSize::new(width, height));
    }

    /// Tells the layer tree host which layers implement the viewport, and
    /// points the overlay scrollbars at the outer (document) scroll layer.
    pub fn register_viewport_layers_with_tree_host(
        &mut self,
        page: &Page,
        host: &mut LayerTreeHost,
    ) {
        let (Some(page_scale), Some(inner_scroll)) = (
            self.page_scale_layer.clone(),
            self.inner_viewport_scroll_layer.clone(),
        ) else {
            warn!("Registering viewport layers before the viewport is built");
            return;
        };
        let Some(outer_scroll) = page.frame_scroll_layer(page.main_frame()) else {
            warn!("Cannot register viewport layers without a root scrolling layer");
            return;
        };

        if let Some(scrollbar) = &mut self.scrollbar_layer_horizontal {
            scrollbar.set_scroll_layer(Some(outer_scroll));
        }
        if let Some(scrollbar) = &mut self.scrollbar_layer_vertical {
            scrollbar.set_scroll_layer(Some(outer_scroll));
        }

        host.register_viewport_layers(page_scale.id(), inner_scroll.id(), outer_scroll.id());
    }

    pub fn clear_viewport_layers_for_tree_host(&self, host: &mut LayerTreeHost) {
        host.clear_viewport_layers();
    }

    pub fn inner_viewport_container_layer(&self) -> Option<&CompositorLayer> {
        self.inner_viewport_container_layer.as_ref()
    }

    pub fn page_scale_layer(&self) -> Option<&CompositorLayer> {
        self.page_scale_layer.as_ref()
    }

    pub fn inner_viewport_scroll_layer(&self) -> Option<&CompositorLayer> {
        self.inner_viewport_scroll_layer.as_ref()
    }

    pub fn overlay_scrollbar_graphics_layer(
        &self,
        orientation: ScrollbarOrientation,
    ) -> Option<&CompositorLayer> {
        self.overlay_layer(orientation)
    }

    pub fn overlay_scrollbar_layer(
        &self,
        orientation: ScrollbarOrientation,
    ) -> Option<&ScrollbarLayer> {
        match orientation {
            ScrollbarOrientation::Horizontal => self.scrollbar_layer_horizontal.as_ref(),
            ScrollbarOrientation::Vertical => self.scrollbar_layer_vertical.as_ref(),
        }
    }

    fn overlay_layer(&self, orientation: ScrollbarOrientation) -> Option<&CompositorLayer> {
        match orientation {
            ScrollbarOrientation::Horizontal => self.overlay_scrollbar_horizontal.as_ref(),
            ScrollbarOrientation::Vertical => self.overlay_scrollbar_vertical.as_ref(),
        }
    }
}
