// pathfinder/geometry/src/basic/rect.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Axis-aligned rectangles.

use crate::basic::point::Point2DF64;
use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectF64 {
    origin: Point2DF64,
    lower_right: Point2DF64,
}

impl RectF64 {
    #[inline]
    pub fn from_points(a: Point2DF64, b: Point2DF64) -> RectF64 {
        RectF64 { origin: a.min(b), lower_right: a.max(b) }
    }

    #[inline]
    pub fn origin(&self) -> Point2DF64 {
        self.origin
    }

    #[inline]
    pub fn lower_right(&self) -> Point2DF64 {
        self.lower_right
    }

    #[inline]
    pub fn size(&self) -> Point2DF64 {
        self.lower_right - self.origin
    }

    #[inline]
    pub fn union_point(&self, point: Point2DF64) -> RectF64 {
        RectF64 { origin: self.origin.min(point), lower_right: self.lower_right.max(point) }
    }
}

#[test]
fn union_grows_to_cover_points() {
    let rect = RectF64::from_points(Point2DF64::new(1.0, 1.0), Point2DF64::new(0.0, 2.0));
    assert_eq!(rect.origin(), Point2DF64::new(0.0, 1.0));
    assert_eq!(rect.size(), Point2DF64::new(1.0, 1.0));

    let rect = rect.union_point(Point2DF64::new(-1.0, 5.0));
    assert_eq!(rect.origin(), Point2DF64::new(-1.0, 1.0));
    assert_eq!(rect.lower_right(), Point2DF64::new(1.0, 5.0));
    assert_eq!(rect.size(), Point2DF64::new(2.0, 4.0));
}
