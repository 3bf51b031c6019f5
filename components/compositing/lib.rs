/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

#![deny(unsafe_code)]

//! Scroll and compositing coordination.
//!
//! The [`ScrollingCoordinator`] decides which parts of a page the compositor
//! thread may scroll on its own and which must round-trip through the main
//! thread, keeps compositor scrollbar layers alive for exactly the scrollbars
//! that want them, and pushes geometry into the layer tree after every
//! compositing pass. [`PageViewport`] assembles the extra layers above the
//! document's tree root that page-scale (pinch) scrolling needs.
//!
//! Everything here runs on the main thread; results reach the compositor
//! through `compositing_api` property pushes that take effect on the next
//! commit.

mod coordinator;
mod viewport;

pub use coordinator::ScrollingCoordinator;
pub use viewport::PageViewport;
