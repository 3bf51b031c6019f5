/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

#![deny(unsafe_code)]

//! Shared geometry types: unit tags for the device and layout coordinate
//! spaces, conversions between them, and the [`Region`] rectangle set used
//! for compositor region annotations.

pub mod region;

pub use region::Region;

use app_units::{Au, MAX_AU, MIN_AU};
use euclid::default::{Point2D as UntypedPoint2D, Rect as UntypedRect, Size2D as UntypedSize2D};
use euclid::{Point2D, Rect, Size2D};

/// A normalized "pixel" at the default resolution for the display.
///
/// Like the CSS "px" unit, the exact physical size of this unit may vary
/// between devices, but it should approximate a device-independent reference
/// length.
#[derive(Clone, Copy, Debug)]
pub enum DeviceIndependentPixel {}

/// One hardware pixel.
#[derive(Clone, Copy, Debug)]
pub enum DevicePixel {}

pub type DeviceIntPoint = Point2D<i32, DevicePixel>;
pub type DeviceIntSize = Size2D<i32, DevicePixel>;
pub type DeviceIntRect = Rect<i32, DevicePixel>;

#[inline(always)]
pub fn max_au_rect() -> UntypedRect<Au> {
    UntypedRect::new(
        UntypedPoint2D::new(MIN_AU / 2, MIN_AU / 2),
        UntypedSize2D::new(MAX_AU, MAX_AU),
    )
}

/// A helper function to convert a rect of `f32` pixels to a rect of app units.
pub fn f32_rect_to_au_rect(rect: UntypedRect<f32>) -> UntypedRect<Au> {
    UntypedRect::new(
        UntypedPoint2D::new(Au::from_f32_px(rect.origin.x), Au::from_f32_px(rect.origin.y)),
        UntypedSize2D::new(
            Au::from_f32_px(rect.size.width),
            Au::from_f32_px(rect.size.height),
        ),
    )
}

/// A helper function to convert a rect of `Au` pixels to a rect of f32 units.
pub fn au_rect_to_f32_rect(rect: UntypedRect<Au>) -> UntypedRect<f32> {
    UntypedRect::new(
        UntypedPoint2D::new(rect.origin.x.to_f32_px(), rect.origin.y.to_f32_px()),
        UntypedSize2D::new(rect.size.width.to_f32_px(), rect.size.height.to_f32_px()),
    )
}

/// The smallest device rect that contains the given layout rect.
pub fn au_rect_to_enclosing_device_rect(rect: &UntypedRect<Au>) -> DeviceIntRect {
    let left = rect.origin.x.to_f32_px().floor() as i32;
    let top = rect.origin.y.to_f32_px().floor() as i32;
    let right = (rect.origin.x + rect.size.width).to_f32_px().ceil() as i32;
    let bottom = (rect.origin.y + rect.size.height).to_f32_px().ceil() as i32;
    DeviceIntRect::new(
        DeviceIntPoint::new(left, top),
        DeviceIntSize::new(right - left, bottom - top),
    )
}

/// The device size nearest to the given layout size.
pub fn au_size_to_device_size(size: UntypedSize2D<Au>) -> DeviceIntSize {
    DeviceIntSize::new(size.width.to_nearest_px(), size.height.to_nearest_px())
}
