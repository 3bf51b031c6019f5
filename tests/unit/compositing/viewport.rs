/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use compositing::PageViewport;
use compositing_api::ScrollbarOrientation;
use geometry::{DeviceIntPoint, DeviceIntSize};

use crate::common::TestHarness;

const HORIZONTAL: ScrollbarOrientation = ScrollbarOrientation::Horizontal;
const VERTICAL: ScrollbarOrientation = ScrollbarOrientation::Vertical;

fn attach(harness: &mut TestHarness, viewport: &mut PageViewport) {
    let TestHarness {
        ref mut host,
        ref coordinator,
        ref root_backing_layer,
        ..
    } = *harness;
    viewport.attach_to_layer_tree(coordinator, host, Some(root_backing_layer));
}

#[test]
fn attach_builds_the_viewport_stack() {
    let mut harness = TestHarness::new();
    let mut viewport = PageViewport::new(harness.coordinator.config());
    attach(&mut harness, &mut viewport);

    let container = viewport.inner_viewport_container_layer().unwrap().clone();
    let page_scale = viewport.page_scale_layer().unwrap().clone();
    let scroll = viewport.inner_viewport_scroll_layer().unwrap().clone();

    let container_children = container.children();
    assert_eq!(container_children.len(), 3);
    assert_eq!(container_children[0], page_scale);
    assert_eq!(page_scale.children(), vec![scroll.clone()]);
    assert_eq!(scroll.children(), vec![harness.root_backing_layer.clone()]);
    assert_eq!(harness.root_backing_layer.parent(), Some(scroll.id()));

    // The inner scroll layer anchors fixed-position content and scrolls
    // within the container.
    assert!(scroll.scrollable());
    assert!(scroll.properties().is_container_for_fixed_position_layers);

    // Both overlay scrollbars exist and stopped self-painting.
    for orientation in [HORIZONTAL, VERTICAL] {
        let graphics_layer = viewport.overlay_scrollbar_graphics_layer(orientation).unwrap();
        assert!(!graphics_layer.draws_content());
        assert!(viewport.overlay_scrollbar_layer(orientation).is_some());
    }
}

#[test]
fn reattach_is_idempotent() {
    let mut harness = TestHarness::new();
    let mut viewport = PageViewport::new(harness.coordinator.config());
    attach(&mut harness, &mut viewport);
    let scroll = viewport.inner_viewport_scroll_layer().unwrap().clone();

    attach(&mut harness, &mut viewport);
    assert_eq!(scroll.children(), vec![harness.root_backing_layer.clone()]);
    assert_eq!(scroll.children().len(), 1);
}

#[test]
fn detaching_clears_the_scroll_layer_children() {
    let mut harness = TestHarness::new();
    let mut viewport = PageViewport::new(harness.coordinator.config());
    attach(&mut harness, &mut viewport);

    viewport.attach_to_layer_tree(&harness.coordinator, &mut harness.host, None);
    let scroll = viewport.inner_viewport_scroll_layer().unwrap();
    assert!(scroll.children().is_empty());
    assert_eq!(harness.root_backing_layer.parent(), None);
}

#[test]
fn viewport_size_places_the_overlay_scrollbars() {
    let mut harness = TestHarness::new();
    let mut viewport = PageViewport::new(harness.coordinator.config());
    attach(&mut harness, &mut viewport);

    let thickness = harness.coordinator.config().overlay_scrollbar_thickness;
    viewport.set_viewport_size(
        &harness.coordinator,
        &mut harness.host,
        DeviceIntSize::new(320, 240),
    );

    let container = viewport.inner_viewport_container_layer().unwrap();
    assert_eq!(container.bounds(), DeviceIntSize::new(320, 240));
    let scroll = viewport.inner_viewport_scroll_layer().unwrap();
    assert_eq!(scroll.bounds(), DeviceIntSize::new(320, 240));

    let horizontal = viewport.overlay_scrollbar_graphics_layer(HORIZONTAL).unwrap();
    assert_eq!(horizontal.properties().position, DeviceIntPoint::new(0, 240 - thickness));
    assert_eq!(horizontal.bounds(), DeviceIntSize::new(320 - thickness, thickness));

    let vertical = viewport.overlay_scrollbar_graphics_layer(VERTICAL).unwrap();
    assert_eq!(vertical.properties().position, DeviceIntPoint::new(320 - thickness, 0));
    assert_eq!(vertical.bounds(), DeviceIntSize::new(thickness, 240 - thickness));
}

#[test]
fn viewport_layers_register_with_the_tree_host() {
    let mut harness = TestHarness::new();
    let mut viewport = PageViewport::new(harness.coordinator.config());
    attach(&mut harness, &mut viewport);

    viewport.register_viewport_layers_with_tree_host(&harness.page, &mut harness.host);
    let registered = harness.host.viewport_layers().unwrap();
    assert_eq!(registered.page_scale_layer, viewport.page_scale_layer().unwrap().id());
    assert_eq!(
        registered.inner_viewport_scroll_layer,
        viewport.inner_viewport_scroll_layer().unwrap().id()
    );
    assert_eq!(registered.outer_viewport_scroll_layer, harness.root_scroll_layer.id());

    // The overlay scrollbars track the document scroll layer.
    for orientation in [HORIZONTAL, VERTICAL] {
        assert_eq!(
            viewport.overlay_scrollbar_layer(orientation).unwrap().scroll_layer(),
            Some(harness.root_scroll_layer.id())
        );
    }

    viewport.clear_viewport_layers_for_tree_host(&mut harness.host);
    assert!(harness.host.viewport_layers().is_none());
}
