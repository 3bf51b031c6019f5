/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Compositor scrollbar layers and the factory that produces them.

use base::id::CompositorLayerId;

use crate::layer::{CompositorLayer, LayerTreeHost};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScrollbarOrientation {
    Horizontal,
    Vertical,
}

/// What the compositor needs to know to paint a native-themed scrollbar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarThemeInfo {
    pub orientation: ScrollbarOrientation,
    pub thumb_thickness: i32,
    pub is_overlay: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollbarLayerKind {
    /// Painted through the platform scrollbar theme.
    ThemePainted(ScrollbarThemeInfo),
    /// A minimal overlay thumb of a single color.
    SolidColor {
        orientation: ScrollbarOrientation,
        thumb_thickness: i32,
        is_left_side_vertical_scrollbar: bool,
    },
}

impl ScrollbarLayerKind {
    pub fn orientation(&self) -> ScrollbarOrientation {
        match *self {
            ScrollbarLayerKind::ThemePainted(info) => info.orientation,
            ScrollbarLayerKind::SolidColor { orientation, .. } => orientation,
        }
    }
}

/// A compositor layer that paints a scrollbar and tracks a scroll layer's
/// offset without main-thread involvement.
pub struct ScrollbarLayer {
    layer: CompositorLayer,
    kind: ScrollbarLayerKind,
    scroll_layer: Option<CompositorLayerId>,
    clip_layer: Option<CompositorLayerId>,
}

impl ScrollbarLayer {
    pub fn new(layer: CompositorLayer, kind: ScrollbarLayerKind) -> ScrollbarLayer {
        ScrollbarLayer {
            layer,
            kind,
            scroll_layer: None,
            clip_layer: None,
        }
    }

    pub fn layer(&self) -> &CompositorLayer {
        &self.layer
    }

    pub fn kind(&self) -> &ScrollbarLayerKind {
        &self.kind
    }

    pub fn orientation(&self) -> ScrollbarOrientation {
        self.kind.orientation()
    }

    /// Points the scrollbar at the layer whose scroll offset it reflects.
    pub fn set_scroll_layer(&mut self, scroll_layer: Option<&CompositorLayer>) {
        self.scroll_layer = scroll_layer.map(CompositorLayer::id);
    }

    pub fn scroll_layer(&self) -> Option<CompositorLayerId> {
        self.scroll_layer
    }

    pub fn set_clip_layer(&mut self, clip_layer: Option<&CompositorLayer>) {
        self.clip_layer = clip_layer.map(CompositorLayer::id);
    }

    pub fn clip_layer(&self) -> Option<CompositorLayerId> {
        self.clip_layer
    }
}

/// Factory for compositor-owned layers that are not part of the document's
/// own layer tree.
pub trait CompositorSupport {
    fn create_scrollbar_layer(
        &self,
        host: &mut LayerTreeHost,
        theme: ScrollbarThemeInfo,
    ) -> ScrollbarLayer;

    fn create_solid_color_scrollbar_layer(
        &self,
        host: &mut LayerTreeHost,
        orientation: ScrollbarOrientation,
        thumb_thickness: i32,
        is_left_side_vertical_scrollbar: bool,
    ) -> ScrollbarLayer;
}

/// The single-process implementation used in production and tests alike.
pub struct InProcessCompositorSupport;

impl CompositorSupport for InProcessCompositorSupport {
    fn create_scrollbar_layer(
        &self,
        host: &mut LayerTreeHost,
        theme: ScrollbarThemeInfo,
    ) -> ScrollbarLayer {
        ScrollbarLayer::new(host.create_layer(), ScrollbarLayerKind::ThemePainted(theme))
    }

    fn create_solid_color_scrollbar_layer(
        &self,
        host: &mut LayerTreeHost,
        orientation: ScrollbarOrientation,
        thumb_thickness: i32,
        is_left_side_vertical_scrollbar: bool,
    ) -> ScrollbarLayer {
        ScrollbarLayer::new(
            host.create_layer(),
            ScrollbarLayerKind::SolidColor {
                orientation,
                thumb_thickness,
                is_left_side_vertical_scrollbar,
            },
        )
    }
}
