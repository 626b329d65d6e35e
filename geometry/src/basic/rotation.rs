// pathfinder/geometry/src/basic/rotation.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed rotations with precomputed cosine and sine.

use crate::basic::point::Point2DF64;
use crate::util;
use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rotation2DF64 {
    pub cos: f64,
    pub sin: f64,
}

impl Rotation2DF64 {
    /// Builds a counterclockwise rotation by `degrees`, with both factors snapped to the nearest
    /// half when they are within rounding noise of it.
    pub fn from_degrees(degrees: f64) -> Rotation2DF64 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Rotation2DF64 {
            cos: util::snap_to_half(cos),
            sin: util::snap_to_half(sin),
        }
    }

    #[inline]
    pub fn apply(&self, vector: Point2DF64) -> Point2DF64 {
        Point2DF64::new(
            self.cos * vector.x() - self.sin * vector.y(),
            self.sin * vector.x() + self.cos * vector.y(),
        )
    }
}

#[test]
fn quarter_turns_are_exact() {
    let left = Rotation2DF64::from_degrees(90.0);
    let right = Rotation2DF64::from_degrees(-90.0);
    let start = Point2DF64::new(3.0, 0.0);

    let mut v = start;
    for _ in 0..4 {
        v = left.apply(v);
    }
    assert_eq!(v, start);
    assert_eq!(right.apply(left.apply(start)), start);
    assert_eq!(left.apply(start), Point2DF64::new(0.0, 3.0));
}

#[test]
fn sixty_degree_turns_close_a_hexagon() {
    let turn = Rotation2DF64::from_degrees(60.0);
    assert_eq!(turn.cos, 0.5);

    let start = Point2DF64::new(1.0, 0.0);
    let mut v = start;
    for _ in 0..6 {
        v = turn.apply(v);
    }
    assert!(v.approx_eq(&start, 1e-12));
}
