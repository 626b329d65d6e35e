// pathfinder/geometry/src/basic/point.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A 2D point, also used as a direction vector.

use serde_derive::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2DF64 {
    x: f64,
    y: f64,
}

impl Point2DF64 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Point2DF64 {
        Point2DF64 { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn scale(&self, factor: f64) -> Point2DF64 {
        Point2DF64::new(self.x * factor, self.y * factor)
    }

    #[inline]
    pub fn min(&self, other: Point2DF64) -> Point2DF64 {
        Point2DF64::new(f64::min(self.x, other.x), f64::min(self.y, other.y))
    }

    #[inline]
    pub fn max(&self, other: Point2DF64) -> Point2DF64 {
        Point2DF64::new(f64::max(self.x, other.x), f64::max(self.y, other.y))
    }

    #[inline]
    pub fn approx_eq(&self, other: &Point2DF64, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add<Point2DF64> for Point2DF64 {
    type Output = Point2DF64;
    #[inline]
    fn add(self, other: Point2DF64) -> Point2DF64 {
        Point2DF64::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub<Point2DF64> for Point2DF64 {
    type Output = Point2DF64;
    #[inline]
    fn sub(self, other: Point2DF64) -> Point2DF64 {
        Point2DF64::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Point2DF64 {
    type Output = Point2DF64;
    #[inline]
    fn neg(self) -> Point2DF64 {
        Point2DF64::new(-self.x, -self.y)
    }
}

#[test]
fn point_arithmetic() {
    let a = Point2DF64::new(1.0, -2.0);
    let b = Point2DF64::new(0.5, 4.0);
    assert_eq!(a + b, Point2DF64::new(1.5, 2.0));
    assert_eq!(a - b, Point2DF64::new(0.5, -6.0));
    assert_eq!(-a, Point2DF64::new(-1.0, 2.0));
    assert_eq!(b.scale(2.0), Point2DF64::new(1.0, 8.0));
    assert_eq!(a.min(b), Point2DF64::new(0.5, -2.0));
    assert_eq!(a.max(b), Point2DF64::new(1.0, 4.0));
}
