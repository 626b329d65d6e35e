// pathfinder/geometry/src/basic/line_segment.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Line segment types.

use crate::basic::point::Point2DF64;
use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSegmentF64 {
    from: Point2DF64,
    to: Point2DF64,
}

impl LineSegmentF64 {
    #[inline]
    pub fn new(from: &Point2DF64, to: &Point2DF64) -> LineSegmentF64 {
        LineSegmentF64 { from: *from, to: *to }
    }

    #[inline]
    pub fn from(&self) -> Point2DF64 {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point2DF64 {
        self.to
    }

    /// A zero-length segment, drawn as a dot.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.from == self.to
    }
}

#[test]
fn degenerate_segment_is_point() {
    let p = Point2DF64::new(2.0, 2.0);
    assert!(LineSegmentF64::new(&p, &p).is_point());

    let q = Point2DF64::new(2.0, 3.0);
    let segment = LineSegmentF64::new(&p, &q);
    assert!(!segment.is_point());
    assert_eq!(segment.from(), p);
    assert_eq!(segment.to(), q);
}
