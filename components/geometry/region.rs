/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A set of axis-aligned device rectangles.
//!
//! Unlike a full banded-region implementation this keeps the contributing
//! rectangles as a list, absorbing rectangles that are wholly contained in
//! another. That is all the compositor region annotations need: the consumer
//! only ever asks "does a point hit the region" and "give me the rect list."

use serde::{Deserialize, Serialize};

use crate::{DeviceIntPoint, DeviceIntRect};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Region {
    rects: Vec<DeviceIntRect>,
}

impl Region {
    pub fn new() -> Region {
        Region::default()
    }

    pub fn from_rect(rect: DeviceIntRect) -> Region {
        let mut region = Region::new();
        region.unite(rect);
        region
    }

    /// Add a rectangle to the set. Rectangles already covered by the set are
    /// dropped, and existing rectangles covered by the new one are absorbed.
    pub fn unite(&mut self, rect: DeviceIntRect) {
        if rect.is_empty() {
            return;
        }
        if self.rects.iter().any(|existing| existing.contains_rect(&rect)) {
            return;
        }
        self.rects.retain(|existing| !rect.contains_rect(existing));
        self.rects.push(rect);
    }

    pub fn unite_region(&mut self, other: &Region) {
        for rect in &other.rects {
            self.unite(*rect);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn rects(&self) -> &[DeviceIntRect] {
        &self.rects
    }

    /// The bounding box of the set, or the empty rect for an empty set.
    pub fn bounds(&self) -> DeviceIntRect {
        let mut iter = self.rects.iter();
        let Some(first) = iter.next() else {
            return DeviceIntRect::zero();
        };
        iter.fold(*first, |bounds, rect| bounds.union(rect))
    }

    pub fn contains_point(&self, point: DeviceIntPoint) -> bool {
        self.rects.iter().any(|rect| rect.contains(point))
    }
}
