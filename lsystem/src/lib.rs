// pathfinder/lsystem/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! L-system definitions and a small text format to write them in.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lalrpop_util;

pub mod ast;

lalrpop_mod!(pub grammar); // synthesized by LALRPOP

use crate::ast::ConfigSet;
use thiserror::Error;

pub type Parser = grammar::ConfigParser;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("syntax error: {0}")]
    Syntax(String),
}

/// Parses a whole configuration, settings first and definitions after.
pub fn parse(input: &str) -> Result<ConfigSet, ParseError> {
    Parser::new().parse(input).map_err(|err| ParseError::Syntax(err.to_string()))
}
