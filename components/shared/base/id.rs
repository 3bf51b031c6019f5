/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Typed identifiers for the document, render-layer and compositor-layer
//! worlds. These are stable indices into arenas owned elsewhere; holding an id
//! implies nothing about ownership, so parent/owner back edges can be stored
//! freely without creating reference cycles.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
        )]
        pub struct $name(pub u32);

        impl $name {
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}

arena_id! {
    /// The identifier of a frame (a document in the frame tree, the main
    /// frame included).
    FrameId
}

arena_id! {
    /// The identifier of a render layer.
    LayerId
}

arena_id! {
    /// The identifier of a DOM node.
    NodeId
}

arena_id! {
    /// The identifier of a scrollable area (the scrolling state of one
    /// potentially-scrollable box, or of a frame view).
    ScrollableAreaId
}

arena_id! {
    /// The identifier of a layer owned by the compositor side of the layer
    /// tree.
    CompositorLayerId
}
