// pathfinder/geometry/src/util.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various utilities.

/// How close `2 * value` must be to an integer for `snap_to_half` to round it.
pub const SNAP_EPSILON: f64 = 1e-12;

/// Rounds `value` to the nearest multiple of one half, but only if it is already within
/// floating-point noise of one.
///
/// This makes `cos`/`sin` of angles like 90° or 60° exact (`0.0`, `1.0`, `0.5`) so that closed
/// figures actually close, while leaving every other value untouched.
#[inline]
pub fn snap_to_half(value: f64) -> f64 {
    let doubled = value * 2.0;
    let rounded = doubled.round();
    if (doubled - rounded).abs() < SNAP_EPSILON {
        rounded / 2.0
    } else {
        value
    }
}

#[test]
fn snap_to_half_rounds_noise_only() {
    assert_eq!(snap_to_half(90f64.to_radians().cos()), 0.0);
    assert_eq!(snap_to_half(90f64.to_radians().sin()), 1.0);
    assert_eq!(snap_to_half(60f64.to_radians().cos()), 0.5);
    assert_eq!(snap_to_half(180f64.to_radians().cos()), -1.0);
    assert_eq!(snap_to_half((-90f64).to_radians().sin()), -1.0);
    assert_eq!(snap_to_half(120f64.to_radians().cos()), -0.5);

    let sin_60 = 60f64.to_radians().sin();
    assert_eq!(snap_to_half(sin_60), sin_60);
    let cos_45 = 45f64.to_radians().cos();
    assert_eq!(snap_to_half(cos_45), cos_45);
    assert_eq!(snap_to_half(0.5 + 1e-9), 0.5 + 1e-9);
}
