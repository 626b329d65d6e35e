// pathfinder/geometry/src/color.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde_derive::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorU {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorU {
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> ColorU {
        ColorU { r, g, b, a: 255 }
    }

    #[inline]
    pub fn black() -> ColorU {
        ColorU::from_rgb(0, 0, 0)
    }

    #[inline]
    pub fn white() -> ColorU {
        ColorU::from_rgb(255, 255, 255)
    }

    /// Parses `#rrggbb` into an opaque color.
    pub fn from_hex_str(s: &str) -> Option<ColorU> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(ColorU::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Display for ColorU {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[test]
fn hex_colors() {
    assert_eq!(ColorU::from_hex_str("#ff8000"), Some(ColorU::from_rgb(255, 128, 0)));
    assert_eq!(ColorU::from_hex_str("#FF8000"), Some(ColorU::from_rgb(255, 128, 0)));
    assert_eq!(ColorU::from_hex_str("ff8000"), None);
    assert_eq!(ColorU::from_hex_str("#ff80"), None);
    assert_eq!(ColorU::from_hex_str("#gg8000"), None);
    assert_eq!(ColorU::from_hex_str("#+f+f+f"), None);
    assert_eq!(ColorU::from_rgb(1, 2, 255).to_string(), "#0102ff");
}
