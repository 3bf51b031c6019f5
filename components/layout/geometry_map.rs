/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! An accumulating coordinate mapper for walks over the layer tree.
//!
//! Mappings are pushed while descending and popped while ascending, so
//! composing transforms costs O(tree depth) over a whole walk instead of
//! O(depth × rect count). Crossing from a frame's root layer into the owner
//! document is handled like any other parent edge.

use app_units::Au;
use base::id::LayerId;
use euclid::default::{Rect, Transform2D, Vector2D};
use geometry::{au_rect_to_f32_rect, f32_rect_to_au_rect};
use log::warn;
use smallvec::SmallVec;

use crate::page::Page;

#[derive(Clone, Copy)]
struct Step {
    layer: LayerId,
    /// Offset of this layer's origin in the previous step's coordinate space.
    offset: Vector2D<Au>,
    transform: Option<Transform2D<f32>>,
    /// Sum of offsets from the root; only meaningful while no pushed step
    /// carries a transform.
    accumulated_offset: Vector2D<Au>,
}

pub struct GeometryMap<'a> {
    page: &'a Page,
    steps: Vec<Step>,
    transform_count: usize,
}

impl<'a> GeometryMap<'a> {
    pub fn new(page: &'a Page) -> GeometryMap<'a> {
        GeometryMap {
            page,
            steps: Vec::new(),
            transform_count: 0,
        }
    }

    /// The offset and transform that carry `layer`'s coordinates into its
    /// parent's space; for a frame's root layer the parent is the owner
    /// layer in the embedding document.
    fn step_data(&self, layer_id: LayerId) -> (Vector2D<Au>, Option<Transform2D<f32>>) {
        let layer = self.page.layer(layer_id);
        if layer.parent.is_some() {
            return (layer.offset_from_parent, layer.transform);
        }
        let frame = self.page.frame(layer.frame);
        if frame.owner_layer.is_some() {
            (frame.offset_in_owner_layer, layer.transform)
        } else {
            (layer.offset_from_parent, layer.transform)
        }
    }

    fn push(&mut self, layer_id: LayerId) {
        let (offset, transform) = self.step_data(layer_id);
        let accumulated_offset = self
            .steps
            .last()
            .map_or(Vector2D::new(Au(0), Au(0)), |step| step.accumulated_offset) +
            offset;
        if transform.is_some() {
            self.transform_count += 1;
        }
        self.steps.push(Step {
            layer: layer_id,
            offset,
            transform,
            accumulated_offset,
        });
    }

    /// Pushes the chain of mappings from `ancestor` (exclusive) down to
    /// `layer` (inclusive). With `ancestor` of `None` the chain starts at the
    /// root.
    pub fn push_mappings_to_ancestor(&mut self, layer: LayerId, ancestor: Option<LayerId>) {
        let mut chain: SmallVec<[LayerId; 8]> = SmallVec::new();
        let mut current = Some(layer);
        while let Some(id) = current {
            if Some(id) == ancestor {
                break;
            }
            chain.push(id);
            let node = self.page.layer(id);
            current = node
                .parent
                .or_else(|| self.page.frame(node.frame).owner_layer);
        }
        debug_assert!(
            current == ancestor || ancestor.is_none(),
            "ancestor is not on the containing-layer chain"
        );
        for id in chain.iter().rev() {
            self.push(*id);
        }
    }

    /// Pops back up to `ancestor` (which stays on the stack), or to an empty
    /// stack for `None`.
    pub fn pop_mappings_to_ancestor(&mut self, ancestor: Option<LayerId>) {
        while let Some(last) = self.steps.last() {
            if Some(last.layer) == ancestor {
                break;
            }
            if last.transform.is_some() {
                self.transform_count -= 1;
            }
            self.steps.pop();
        }
    }

    pub fn current_layer(&self) -> Option<LayerId> {
        self.steps.last().map(|step| step.layer)
    }

    /// Maps a rect from the current layer's coordinate space into
    /// `container`'s space. `container` must be on the pushed chain.
    pub fn map_to_container(&self, rect: Rect<Au>, container: LayerId) -> Rect<Au> {
        let Some(container_index) = self.steps.iter().rposition(|step| step.layer == container)
        else {
            debug_assert!(false, "mapping container must be on the pushed chain");
            warn!("GeometryMap: {} is not on the pushed chain", container);
            return rect;
        };

        if self.transform_count == 0 {
            let top = self.steps[self.steps.len() - 1].accumulated_offset;
            let delta = top - self.steps[container_index].accumulated_offset;
            return rect.translate(delta);
        }

        let mut mapped = au_rect_to_f32_rect(rect);
        for step in self.steps[container_index + 1..].iter().rev() {
            if let Some(transform) = step.transform {
                mapped = transform.outer_transformed_rect(&mapped);
            }
            mapped = mapped.translate(Vector2D::new(
                step.offset.x.to_f32_px(),
                step.offset.y.to_f32_px(),
            ));
        }
        f32_rect_to_au_rect(mapped)
    }
}
