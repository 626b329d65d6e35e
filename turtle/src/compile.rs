// pathfinder/turtle/src/compile.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Builds an [`ActionGraph`] out of a [`ConfigSet`].

use crate::action::{Action, ActionGraph, ActionId, ColorTable, LiteralAction, SubActions, TurnAction};
use log::debug;
use lsystem::ast::{ConfigSet, ALPHABET_SIZE, SCALE_POP, SCALE_PUSH, TURN_LEFT, TURN_RIGHT};
use serde_derive::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
pub enum ConfigError {
    #[error("no literals given")]
    NoLiterals,
    #[error("'{0}' is not a valid literal")]
    InvalidLiteral(char),
    #[error("literal '{0}' is defined more than once")]
    DuplicateLiteral(char),
    #[error("unexpected literal '{symbol}' in actions for literal '{literal}'")]
    UnexpectedLiteral { symbol: char, literal: char },
    #[error("brackets do not match")]
    BracketsMismatch { literal: char },
}

#[inline]
fn alphabet_index(symbol: char) -> Option<usize> {
    if symbol.is_ascii_uppercase() {
        Some(symbol as usize - 'A' as usize)
    } else {
        None
    }
}

/// Validates `config` and compiles it into an action graph whose start action is the first
/// definition's literal.
pub fn compile(config: &ConfigSet) -> Result<ActionGraph, ConfigError> {
    if config.definitions.is_empty() {
        return Err(ConfigError::NoLiterals);
    }

    let mut graph = ActionGraph::new();
    let turn_left = graph.push(Action::Turn(TurnAction::from_degrees(TURN_LEFT, config.turn_left)));
    let turn_right =
        graph.push(Action::Turn(TurnAction::from_degrees(TURN_RIGHT, config.turn_right)));
    let scale_push = graph.push(Action::ScalePush(config.scaling));
    let scale_pop = graph.push(Action::ScalePop);

    // First pass: one action per literal, so that rewrites may refer to literals defined later.
    let mut literals: [Option<ActionId>; ALPHABET_SIZE] = [None; ALPHABET_SIZE];
    let mut colors = ColorTable::new();
    for (i, definition) in config.definitions.iter().enumerate() {
        let slot = alphabet_index(definition.literal)
            .ok_or(ConfigError::InvalidLiteral(definition.literal))?;
        if literals[slot].is_some() {
            return Err(ConfigError::DuplicateLiteral(definition.literal));
        }

        // Each literal adds at most one color, so the table cannot overflow.
        let color_num = match colors.iter().position(|color| *color == definition.color) {
            Some(color_num) => color_num,
            None => {
                colors.push(definition.color);
                colors.len() - 1
            }
        };

        let id = graph.push(Action::Literal(LiteralAction {
            symbol: definition.literal,
            color_num: color_num as u8,
            flags: definition.flags,
            sub_actions: SubActions::new(),
        }));
        literals[slot] = Some(id);
        if i == 0 {
            graph.set_start(id);
        }
    }

    // Second pass: resolve the rewrites.
    for definition in &config.definitions {
        let mut depth: i32 = 0;
        let mut sub_actions = SubActions::new();
        for symbol in definition.actions.chars() {
            let id = match symbol {
                TURN_LEFT => turn_left,
                TURN_RIGHT => turn_right,
                SCALE_PUSH => {
                    depth += 1;
                    scale_push
                }
                SCALE_POP => {
                    depth -= 1;
                    scale_pop
                }
                _ => alphabet_index(symbol).and_then(|slot| literals[slot]).ok_or(
                    ConfigError::UnexpectedLiteral { symbol, literal: definition.literal },
                )?,
            };
            sub_actions.push(id);
        }
        if depth != 0 {
            return Err(ConfigError::BracketsMismatch { literal: definition.literal });
        }

        if let Some(id) = alphabet_index(definition.literal).and_then(|slot| literals[slot]) {
            graph.set_sub_actions(id, sub_actions);
        }
    }

    debug!(
        "Compiled {} literals into {} actions with {} colors",
        config.definitions.len(),
        graph.len(),
        colors.len()
    );
    graph.set_colors(colors);
    Ok(graph)
}
