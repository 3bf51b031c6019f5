/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use base::id::NodeId;
use euclid::Point2D;
use layout::{NodeKind, Renderer};

use crate::common::{TestHarness, au_rect, au_size, au_vec};

fn add_touch_handler_node(harness: &mut TestHarness, rect: euclid::default::Rect<app_units::Au>) -> NodeId {
    let main = harness.page.main_frame();
    let body = harness.page.frame(main).document.body_element.unwrap();
    let node = harness.page.add_node(main, Some(body), NodeKind::Element);
    harness.page.node_mut(node).renderer = Some(Renderer {
        layer: harness.root_layer,
        rect_in_layer: rect,
    });
    harness.page.frame_mut(main).document.did_add_touch_event_handler(node);
    node
}

#[test]
fn handler_rects_reach_the_backing_layer() {
    let mut harness = TestHarness::new();
    add_touch_handler_node(&mut harness, au_rect(10.0, 20.0, 30.0, 40.0));

    harness.full_update();

    let region = harness.root_backing_layer.touch_event_handler_region();
    assert!(region.contains_point(Point2D::new(10, 20)));
    assert!(region.contains_point(Point2D::new(39, 59)));
    assert!(!region.contains_point(Point2D::new(50, 70)));
    assert_eq!(
        harness.coordinator.layers_with_touch_rects().len(),
        1,
        "exactly the root layer owns touch rects"
    );
}

#[test]
fn removed_handlers_push_an_explicit_empty_region() {
    let mut harness = TestHarness::new();
    let node = add_touch_handler_node(&mut harness, au_rect(10.0, 20.0, 30.0, 40.0));
    harness.full_update();
    assert!(!harness.root_backing_layer.touch_event_handler_region().is_empty());

    let main = harness.page.main_frame();
    harness
        .page
        .frame_mut(main)
        .document
        .did_remove_touch_event_handler(node);
    harness.coordinator.touch_event_target_rects_did_change(&harness.page);
    harness.coordinator.update_after_compositing_change(&harness.page);

    // The region must be zeroed, not merely left alone.
    assert!(harness.root_backing_layer.touch_event_handler_region().is_empty());
    assert!(harness.coordinator.layers_with_touch_rects().is_empty());
}

#[test]
fn document_handler_covers_the_whole_document_once() {
    let mut harness = TestHarness::new();
    add_touch_handler_node(&mut harness, au_rect(10.0, 20.0, 30.0, 40.0));

    let main = harness.page.main_frame();
    let document = harness.page.frame(main).document.document_node.unwrap();
    harness
        .page
        .frame_mut(main)
        .document
        .did_add_touch_event_handler(document);

    harness.full_update();

    let region = harness.root_backing_layer.touch_event_handler_region();
    assert_eq!(region.rects().len(), 1, "one rect for the whole document");
    assert!(region.contains_point(Point2D::new(799, 599)));
}

#[test]
fn touch_rects_ride_composited_scrolling_contents() {
    let mut harness = TestHarness::new();
    // Give the root backing a separate scrolling-contents layer; annotations
    // must land there.
    let scrolling_contents = harness.host.create_layer();
    {
        let layer = harness.page.layer_mut(harness.root_layer);
        let mapping = layer.mapping.as_mut().unwrap();
        mapping.scrolling_contents_layer = Some(scrolling_contents.clone());
    }
    add_touch_handler_node(&mut harness, au_rect(0.0, 0.0, 10.0, 10.0));

    harness.full_update();

    assert!(!scrolling_contents.touch_event_handler_region().is_empty());
    assert!(harness.root_backing_layer.touch_event_handler_region().is_empty());
}

#[test]
fn handlers_in_non_composited_scrollers_cover_the_scroller() {
    let mut harness = TestHarness::new();
    let main = harness.page.main_frame();

    let scroller =
        harness
            .page
            .add_child_layer(harness.root_layer, au_size(200.0, 100.0), au_vec(50.0, 50.0));
    let area = harness
        .page
        .add_scrollable_area(main, layout::ScrollableAreaKind::OverflowBox(scroller));
    {
        let area = harness.page.scrollable_area_mut(area);
        area.contents_size = au_size(200.0, 1000.0);
        area.visible_size = au_size(200.0, 100.0);
    }

    let body = harness.page.frame(main).document.body_element.unwrap();
    let node = harness.page.add_node(main, Some(body), NodeKind::Element);
    harness.page.node_mut(node).renderer = Some(Renderer {
        layer: scroller,
        rect_in_layer: au_rect(10.0, 10.0, 5.0, 5.0),
    });
    harness.page.frame_mut(main).document.did_add_touch_event_handler(node);

    harness.full_update();

    // The whole scroller box, projected into the root backing at its page
    // position, is touch-sensitive; not just the handler's own 5x5 box.
    let region = harness.root_backing_layer.touch_event_handler_region();
    assert!(region.contains_point(Point2D::new(50, 50)));
    assert!(region.contains_point(Point2D::new(249, 149)));
}

#[test]
fn destroyed_layers_are_forgotten() {
    let mut harness = TestHarness::new();
    add_touch_handler_node(&mut harness, au_rect(0.0, 0.0, 10.0, 10.0));
    harness.full_update();
    assert_eq!(harness.coordinator.layers_with_touch_rects().len(), 1);

    harness.coordinator.will_destroy_render_layer(harness.root_layer);
    assert!(harness.coordinator.layers_with_touch_rects().is_empty());
}
