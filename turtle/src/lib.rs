// pathfinder/turtle/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turns an L-system configuration into line segments.
//!
//! The pipeline is compile ([`compile`]), rewrite the start symbol ([`expand`]) and walk the
//! result with a turtle ([`exec`]). [`Simulator`] ties them together and caches the compiled
//! graph between requests.

#[macro_use]
extern crate bitflags;

pub mod action;
pub mod compile;
pub mod exec;
pub mod expand;
pub mod simulator;

pub use crate::compile::ConfigError;
pub use crate::exec::{ExecFlags, Segment};
pub use crate::simulator::{
    ExecResult, Request, Response, ResultKind, Simulator, SimulatorSettings, DEFAULT_MAX_STACK_SIZE,
};
