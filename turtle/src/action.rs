// pathfinder/turtle/src/action.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The compiled form of an L-system.
//!
//! Every symbol that can appear in a generation is an [`Action`] living in an [`ActionGraph`]
//! arena. Literals refer to their rewrite by [`ActionId`], so one action may be shared by any
//! number of literals.

use arrayvec::ArrayVec;
use lsystem::ast::{LiteralFlags, ALPHABET_SIZE, SCALE_POP, SCALE_PUSH};
use lsystem_geometry::basic::rotation::Rotation2DF64;
use lsystem_geometry::color::ColorU;
use smallvec::SmallVec;

pub type SubActions = SmallVec<[ActionId; 8]>;

/// Colors are deduplicated and there is at most one color per literal.
pub type ColorTable = ArrayVec<ColorU, ALPHABET_SIZE>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(u32);

impl ActionId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Literal(LiteralAction),
    Turn(TurnAction),
    /// Saves the turtle and scales its step by the factor.
    ScalePush(f64),
    /// Restores the turtle saved by the matching push.
    ScalePop,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LiteralAction {
    pub symbol: char,
    pub color_num: u8,
    pub flags: LiteralFlags,
    /// The one-step rewrite of this literal, in textual order.
    pub sub_actions: SubActions,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnAction {
    pub symbol: char,
    pub rotation: Rotation2DF64,
}

impl TurnAction {
    #[inline]
    pub fn from_degrees(symbol: char, degrees: f64) -> TurnAction {
        TurnAction { symbol, rotation: Rotation2DF64::from_degrees(degrees) }
    }
}

impl Action {
    pub fn symbol(&self) -> char {
        match *self {
            Action::Literal(ref literal) => literal.symbol,
            Action::Turn(ref turn) => turn.symbol,
            Action::ScalePush(_) => SCALE_PUSH,
            Action::ScalePop => SCALE_POP,
        }
    }

    /// Appends the one-step rewrite of the action `id` (which must be `self`) to `next`.
    ///
    /// Only literals rewrite; everything else is terminal and copies itself.
    #[inline]
    pub fn expand_into(&self, id: ActionId, next: &mut Vec<ActionId>) {
        match *self {
            Action::Literal(ref literal) => next.extend_from_slice(&literal.sub_actions),
            Action::Turn(_) | Action::ScalePush(_) | Action::ScalePop => next.push(id),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ActionGraph {
    actions: Vec<Action>,
    start: ActionId,
    colors: ColorTable,
}

impl ActionGraph {
    pub(crate) fn new() -> ActionGraph {
        ActionGraph { actions: vec![], start: ActionId(0), colors: ArrayVec::new() }
    }

    pub(crate) fn push(&mut self, action: Action) -> ActionId {
        let id = ActionId(self.actions.len() as u32);
        self.actions.push(action);
        id
    }

    pub(crate) fn set_start(&mut self, start: ActionId) {
        self.start = start;
    }

    pub(crate) fn set_colors(&mut self, colors: ColorTable) {
        self.colors = colors;
    }

    pub(crate) fn set_sub_actions(&mut self, id: ActionId, sub_actions: SubActions) {
        if let Action::Literal(ref mut literal) = self.actions[id.index()] {
            literal.sub_actions = sub_actions;
        }
    }

    #[inline]
    pub fn start(&self) -> ActionId {
        self.start
    }

    #[inline]
    pub fn get(&self, id: ActionId) -> &Action {
        &self.actions[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Colors indexed by each literal's `color_num`.
    #[inline]
    pub fn colors(&self) -> &[ColorU] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &Action)> {
        self.actions.iter().enumerate().map(|(i, action)| (ActionId(i as u32), action))
    }
}
