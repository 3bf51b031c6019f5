/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

#![deny(unsafe_code)]

//! The interface between the main thread and the compositor side of the layer
//! tree.
//!
//! Everything the main thread pushes here is fire-and-forget: property setters
//! write to a pending record without blocking, and the compositor observes the
//! values only when [`LayerTreeHost::commit`] snapshots them into a
//! [`CommittedFrame`]. There is exactly one writer (the main thread), which
//! runs to completion before a commit is taken, so no cross-setter atomicity
//! is needed.

pub mod layer;
pub mod scrollbar;

pub use layer::{
    CommittedFrame, CommittedLayer, CompositorLayer, ContentsLayerRegistry, LayerProperties,
    LayerTreeHost, PositionConstraint, ViewportLayers,
};
pub use scrollbar::{
    CompositorSupport, InProcessCompositorSupport, ScrollbarLayer, ScrollbarLayerKind,
    ScrollbarOrientation, ScrollbarThemeInfo,
};

use bitflags::bitflags;

bitflags! {
    /// Why scrolling of the main frame must be performed on the main thread
    /// instead of the compositor thread. Bits are only ever accumulated during
    /// a recomputation; they are cleared together by pushing a fresh mask.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct MainThreadScrollingReasons: u32 {
        const HAS_SLOW_REPAINT_OBJECTS = 1 << 0;
        const HAS_VIEWPORT_CONSTRAINED_OBJECTS_WITHOUT_SUPPORTING_FIXED_LAYERS = 1 << 1;
        const HAS_NON_LAYER_VIEWPORT_CONSTRAINED_OBJECTS = 1 << 2;
    }
}

impl MainThreadScrollingReasons {
    /// A human-readable rendering of the mask, for tooling and tests.
    pub fn as_text(self) -> String {
        let mut parts = Vec::new();
        if self.contains(MainThreadScrollingReasons::HAS_SLOW_REPAINT_OBJECTS) {
            parts.push("Has slow repaint objects");
        }
        if self.contains(
            MainThreadScrollingReasons::HAS_VIEWPORT_CONSTRAINED_OBJECTS_WITHOUT_SUPPORTING_FIXED_LAYERS,
        ) {
            parts.push("Has viewport constrained objects without supporting fixed layers");
        }
        if self.contains(MainThreadScrollingReasons::HAS_NON_LAYER_VIEWPORT_CONSTRAINED_OBJECTS) {
            parts.push("Has non-layer viewport-constrained objects");
        }
        parts.join(", ")
    }
}

/// Platform- and settings-dependent compositor behavior, expressed as data so
/// that a single build serves every configuration and tests can pick one
/// explicitly.
#[derive(Clone, Copy, Debug)]
pub struct CompositorConfig {
    /// Whether the platform can drive scrollbars from the compositor thread
    /// at all.
    pub platform_supports_coordinated_scrollbar: bool,
    /// Whether coordinated scrollbars are restricted to the main frame.
    pub platform_supports_main_frame_only: bool,
    /// Paint scrollbars as solid-color overlay layers instead of through the
    /// platform theme.
    pub use_solid_color_scrollbars: bool,
    /// Whether touch regions are forwarded to the compositor for hit testing.
    pub touch_hit_testing_enabled: bool,
    /// Thickness, in device pixels, of the page-viewport overlay scrollbars.
    pub overlay_scrollbar_thickness: i32,
}

impl CompositorConfig {
    pub fn desktop() -> CompositorConfig {
        CompositorConfig {
            platform_supports_coordinated_scrollbar: true,
            platform_supports_main_frame_only: true,
            use_solid_color_scrollbars: false,
            touch_hit_testing_enabled: true,
            overlay_scrollbar_thickness: 3,
        }
    }

    pub fn android() -> CompositorConfig {
        CompositorConfig {
            platform_supports_coordinated_scrollbar: true,
            platform_supports_main_frame_only: false,
            use_solid_color_scrollbars: true,
            touch_hit_testing_enabled: true,
            overlay_scrollbar_thickness: 3,
        }
    }

    /// The scroll animator owns scrollbar painting here, so coordinated
    /// scrollbars stay off.
    pub fn macos() -> CompositorConfig {
        CompositorConfig {
            platform_supports_coordinated_scrollbar: false,
            platform_supports_main_frame_only: false,
            use_solid_color_scrollbars: false,
            touch_hit_testing_enabled: true,
            overlay_scrollbar_thickness: 3,
        }
    }
}

impl Default for CompositorConfig {
    fn default() -> CompositorConfig {
        CompositorConfig::desktop()
    }
}
