/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

#![deny(unsafe_code)]

//! A crate to hold very common types in capstan.
//!
//! You should almost never need to add a data type to this crate. Instead look
//! for a more specific shared crate that has fewer dependents.

pub mod id;

use serde::{Deserialize, Serialize};

/// A struct for denoting the age of compositor commits; prevents confusing
/// state produced for different frames.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct Epoch(pub u32);

impl Epoch {
    pub fn next(&mut self) {
        self.0 += 1;
    }
}
