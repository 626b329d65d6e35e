// pathfinder/lsystem/src/ast.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use lsystem_geometry::color::ColorU;
use serde_derive::{Deserialize, Serialize};

/// Number of distinct literals, `A` through `Z`.
pub const ALPHABET_SIZE: usize = 26;

pub const TURN_LEFT: char = '+';
pub const TURN_RIGHT: char = '-';
pub const SCALE_PUSH: char = '[';
pub const SCALE_POP: char = ']';

bitflags! {
    #[derive(Default, Serialize, Deserialize)]
    pub struct LiteralFlags: u8 {
        /// Emit a segment when the literal is executed.
        const PAINT = 0x01;
        /// Advance the turtle when the literal is executed.
        const MOVE  = 0x02;
    }
}

/// One symbol of the alphabet together with its rewrite rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub literal: char,
    /// What the literal rewrites to: literals and `+ - [ ]`.
    pub actions: String,
    pub color: ColorU,
    pub flags: LiteralFlags,
}

impl Definition {
    pub fn new<S>(literal: char, actions: S, color: ColorU, flags: LiteralFlags) -> Definition
    where
        S: Into<String>,
    {
        Definition { literal, actions: actions.into(), color, flags }
    }
}

/// A complete L-system: the alphabet plus the turtle parameters.
///
/// The first definition is the start symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigSet {
    pub definitions: Vec<Definition>,
    /// Degrees, expected to be `>= 0`.
    pub turn_left: f64,
    /// Degrees, expected to be `<= 0`.
    pub turn_right: f64,
    /// Applied to the step on `[`; expected in `(0, 1]`.
    pub scaling: f64,
    pub start_angle: f64,
    pub step_size: f64,
    pub num_iter: u32,
    /// Overrides the simulator's maximum stack size for this configuration.
    pub stack_size: Option<usize>,
}

impl Default for ConfigSet {
    fn default() -> ConfigSet {
        ConfigSet {
            definitions: vec![],
            turn_left: 90.0,
            turn_right: -90.0,
            scaling: 1.0,
            start_angle: 0.0,
            step_size: 1.0,
            num_iter: 3,
            stack_size: None,
        }
    }
}

impl ConfigSet {
    /// Applies `settings` in order on top of the defaults.
    pub fn from_parts(settings: Vec<Setting>, definitions: Vec<Definition>) -> ConfigSet {
        let mut config = ConfigSet { definitions, ..ConfigSet::default() };
        for setting in settings {
            config.apply(setting);
        }
        config
    }

    pub fn apply(&mut self, setting: Setting) {
        match setting {
            Setting::TurnLeft(deg) => self.turn_left = deg,
            Setting::TurnRight(deg) => self.turn_right = deg,
            Setting::Scaling(factor) => self.scaling = factor,
            Setting::StartAngle(deg) => self.start_angle = deg,
            Setting::StepSize(step) => self.step_size = step,
            Setting::Iterations(n) => self.num_iter = n,
            Setting::StackSize(size) => self.stack_size = Some(size),
        }
    }

    /// Whether a graph compiled from `self` is also valid for `other`.
    ///
    /// Start angle, step size and the stack size override only matter once the graph is
    /// executed, so they are ignored here.
    pub fn expansion_equal(&self, other: &ConfigSet) -> bool {
        self.definitions == other.definitions
            && self.num_iter == other.num_iter
            && self.turn_left == other.turn_left
            && self.turn_right == other.turn_right
            && self.scaling == other.scaling
    }

    #[inline]
    pub fn start(&self) -> Option<&Definition> {
        self.definitions.first()
    }
}

/// A single `key value` line of the textual format.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Setting {
    TurnLeft(f64),
    TurnRight(f64),
    Scaling(f64),
    StartAngle(f64),
    StepSize(f64),
    Iterations(u32),
    StackSize(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> ConfigSet {
        ConfigSet {
            definitions: vec![Definition::new(
                'A',
                "A+A",
                ColorU::black(),
                LiteralFlags::PAINT | LiteralFlags::MOVE,
            )],
            start_angle: -90.0,
            num_iter: 2,
            ..ConfigSet::default()
        }
    }

    #[test]
    fn expansion_equal_ignores_turtle_start() {
        let a = square();
        let mut b = square();
        b.step_size = 10.0;
        b.start_angle = 45.0;
        b.stack_size = Some(16);
        assert!(a.expansion_equal(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn expansion_equal_tracks_grammar() {
        let a = square();

        let mut b = square();
        b.num_iter = 3;
        assert!(!a.expansion_equal(&b));

        let mut b = square();
        b.turn_right = -45.0;
        assert!(!a.expansion_equal(&b));

        let mut b = square();
        b.scaling = 0.5;
        assert!(!a.expansion_equal(&b));

        let mut b = square();
        b.definitions[0].color = ColorU::white();
        assert!(!a.expansion_equal(&b));
    }

    #[test]
    fn settings_apply_in_order() {
        let config = ConfigSet::from_parts(
            vec![Setting::Iterations(4), Setting::StackSize(12), Setting::Iterations(5)],
            vec![],
        );
        assert_eq!(config.num_iter, 5);
        assert_eq!(config.stack_size, Some(12));
        assert_eq!(config.turn_left, 90.0);
        assert!(config.start().is_none());
    }
}
