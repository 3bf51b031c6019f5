/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use base::id::ScrollableAreaId;
use compositing_api::{CompositorConfig, ScrollbarLayerKind, ScrollbarOrientation};
use geometry::DeviceIntPoint;
use layout::Scrollbar;

use crate::common::{TestHarness, au_size, au_vec};

const HORIZONTAL: ScrollbarOrientation = ScrollbarOrientation::Horizontal;
const VERTICAL: ScrollbarOrientation = ScrollbarOrientation::Vertical;

fn native_scrollbar() -> Scrollbar {
    Scrollbar {
        is_custom: false,
        is_overlay: false,
        thumb_thickness: 7,
    }
}

/// Gives the main-frame view area a scrollbar widget and graphics layer for
/// the given orientation.
fn add_scrollbar(harness: &mut TestHarness, orientation: ScrollbarOrientation, scrollbar: Scrollbar) {
    let graphics_layer = harness.host.create_layer();
    let area = harness.page.scrollable_area_mut(harness.view_area);
    match orientation {
        ScrollbarOrientation::Horizontal => area.horizontal_scrollbar = Some(scrollbar),
        ScrollbarOrientation::Vertical => area.vertical_scrollbar = Some(scrollbar),
    }
    area.set_layer_for_scrollbar(orientation, Some(graphics_layer));
}

fn notify(harness: &mut TestHarness, area: ScrollableAreaId, orientation: ScrollbarOrientation) {
    let TestHarness {
        ref page,
        ref mut host,
        ref mut coordinator,
        ..
    } = *harness;
    coordinator.scrollable_area_scrollbar_layer_did_change(page, host, area, orientation);
}

#[test]
fn scrollbar_layers_are_created_once() {
    let mut harness = TestHarness::new();
    add_scrollbar(&mut harness, VERTICAL, native_scrollbar());

    let view_area = harness.view_area;
    notify(&mut harness, view_area, VERTICAL);
    assert_eq!(harness.coordinator.scrollbar_layer_count(), 1);
    let first_id = harness
        .coordinator
        .scrollbar_layer(harness.view_area, VERTICAL)
        .unwrap()
        .layer()
        .id();

    // A second notification without an underlying change reuses the layer.
    notify(&mut harness, view_area, VERTICAL);
    assert_eq!(harness.coordinator.scrollbar_layer_count(), 1);
    assert_eq!(
        harness
            .coordinator
            .scrollbar_layer(harness.view_area, VERTICAL)
            .unwrap()
            .layer()
            .id(),
        first_id
    );
    assert!(harness.host.registry().is_registered(first_id));
}

#[test]
fn scrollbar_layers_wire_to_scroll_and_clip_layers() {
    let mut harness = TestHarness::new();
    add_scrollbar(&mut harness, VERTICAL, native_scrollbar());
    let view_area = harness.view_area;
    notify(&mut harness, view_area, VERTICAL);

    let scrollbar_layer = harness
        .coordinator
        .scrollbar_layer(harness.view_area, VERTICAL)
        .unwrap();
    assert_eq!(scrollbar_layer.scroll_layer(), Some(harness.root_scroll_layer.id()));
    assert_eq!(scrollbar_layer.clip_layer(), Some(harness.container_layer.id()));

    // The graphics layer stops painting; the compositor layer does it now.
    let area = harness.page.scrollable_area(harness.view_area);
    let graphics_layer = area.layer_for_scrollbar(VERTICAL).unwrap();
    assert_eq!(graphics_layer.contents_layer(), Some(scrollbar_layer.layer().id()));
    assert!(!graphics_layer.draws_content());

    // Main-frame non-overlay scrollbars are opaque to skip blending.
    assert!(graphics_layer.contents_opaque());
    assert!(scrollbar_layer.layer().opaque());
}

#[test]
fn custom_scrollbars_fall_back_to_direct_painting() {
    let mut harness = TestHarness::new();
    add_scrollbar(
        &mut harness,
        VERTICAL,
        Scrollbar {
            is_custom: true,
            is_overlay: false,
            thumb_thickness: 7,
        },
    );

    let view_area = harness.view_area;
    notify(&mut harness, view_area, VERTICAL);
    assert_eq!(harness.coordinator.scrollbar_layer_count(), 0);

    let area = harness.page.scrollable_area(harness.view_area);
    let graphics_layer = area.layer_for_scrollbar(VERTICAL).unwrap();
    assert_eq!(graphics_layer.contents_layer(), None);
    assert!(graphics_layer.draws_content());
}

#[test]
fn restyling_to_a_custom_scrollbar_releases_the_compositor_layer() {
    let mut harness = TestHarness::new();
    add_scrollbar(&mut harness, VERTICAL, native_scrollbar());
    let view_area = harness.view_area;
    notify(&mut harness, view_area, VERTICAL);
    assert_eq!(harness.coordinator.scrollbar_layer_count(), 1);

    harness
        .page
        .scrollable_area_mut(harness.view_area)
        .vertical_scrollbar = Some(Scrollbar {
        is_custom: true,
        is_overlay: false,
        thumb_thickness: 7,
    });
    notify(&mut harness, view_area, VERTICAL);
    assert_eq!(harness.coordinator.scrollbar_layer_count(), 0);
}

#[test]
fn losing_the_graphics_layer_removes_the_compositor_layer() {
    let mut harness = TestHarness::new();
    add_scrollbar(&mut harness, VERTICAL, native_scrollbar());
    let view_area = harness.view_area;
    notify(&mut harness, view_area, VERTICAL);
    let id = harness
        .coordinator
        .scrollbar_layer(harness.view_area, VERTICAL)
        .unwrap()
        .layer()
        .id();

    harness
        .page
        .scrollable_area_mut(harness.view_area)
        .set_layer_for_scrollbar(VERTICAL, None);
    notify(&mut harness, view_area, VERTICAL);

    assert_eq!(harness.coordinator.scrollbar_layer_count(), 0);
    assert!(!harness.host.registry().is_registered(id));
}

#[test]
fn subframe_scrollbars_are_ignored_when_main_frame_only() {
    let mut harness = TestHarness::new();
    assert!(harness.coordinator.config().platform_supports_main_frame_only);

    let main = harness.page.main_frame();
    let child = harness.page.add_child_frame(main, None);
    let child_area = harness
        .page
        .add_scrollable_area(child, layout::ScrollableAreaKind::FrameView);
    let graphics_layer = harness.host.create_layer();
    {
        let area = harness.page.scrollable_area_mut(child_area);
        area.vertical_scrollbar = Some(native_scrollbar());
        area.set_layer_for_scrollbar(VERTICAL, Some(graphics_layer));
    }

    notify(&mut harness, child_area, VERTICAL);
    assert_eq!(harness.coordinator.scrollbar_layer_count(), 0);
}

#[test]
fn macos_config_disables_coordinated_scrollbars() {
    let mut harness = TestHarness::with_config(CompositorConfig::macos());
    add_scrollbar(&mut harness, VERTICAL, native_scrollbar());
    let view_area = harness.view_area;
    notify(&mut harness, view_area, VERTICAL);
    assert_eq!(harness.coordinator.scrollbar_layer_count(), 0);
}

#[test]
fn android_config_uses_solid_color_scrollbars() {
    let mut harness = TestHarness::with_config(CompositorConfig::android());
    add_scrollbar(
        &mut harness,
        HORIZONTAL,
        Scrollbar {
            is_custom: false,
            is_overlay: true,
            thumb_thickness: 3,
        },
    );
    let view_area = harness.view_area;
    notify(&mut harness, view_area, HORIZONTAL);

    let scrollbar_layer = harness
        .coordinator
        .scrollbar_layer(harness.view_area, HORIZONTAL)
        .unwrap();
    assert!(matches!(
        scrollbar_layer.kind(),
        ScrollbarLayerKind::SolidColor {
            orientation: ScrollbarOrientation::Horizontal,
            thumb_thickness: 3,
            ..
        }
    ));
}

#[test]
fn destroying_an_area_releases_both_orientations() {
    let mut harness = TestHarness::new();
    add_scrollbar(&mut harness, HORIZONTAL, native_scrollbar());
    add_scrollbar(&mut harness, VERTICAL, native_scrollbar());
    let view_area = harness.view_area;
    notify(&mut harness, view_area, HORIZONTAL);
    notify(&mut harness, view_area, VERTICAL);
    assert_eq!(harness.coordinator.scrollbar_layer_count(), 2);

    harness
        .coordinator
        .will_destroy_scrollable_area(&mut harness.host, harness.view_area);
    assert_eq!(harness.coordinator.scrollbar_layer_count(), 0);
    assert!(harness.host.registry().is_empty());
}

#[test]
fn scroll_layer_changes_rewire_scrolling_state() {
    let mut harness = TestHarness::new();
    {
        let area = harness.page.scrollable_area_mut(harness.view_area);
        area.contents_size = au_size(800.0, 2400.0);
        area.scroll_offset = au_vec(0.0, 120.0);
    }

    let has_layer = harness
        .coordinator
        .scrollable_area_scroll_layer_did_change(&harness.page, harness.view_area);
    assert!(has_layer);

    assert!(harness.root_scroll_layer.scrollable());
    assert_eq!(
        harness.root_scroll_layer.scroll_position(),
        DeviceIntPoint::new(0, 120)
    );
    assert_eq!(
        harness.root_scroll_layer.bounds(),
        geometry::au_size_to_device_size(au_size(800.0, 2400.0))
    );
}
