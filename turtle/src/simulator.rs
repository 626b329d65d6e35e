// pathfinder/turtle/src/simulator.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Compiles, expands and executes configurations, keeping the last compiled graph around for
//! as long as incoming configurations don't change its structure.

use crate::action::ActionGraph;
use crate::compile::{compile, ConfigError};
use crate::exec::{self, ExecFlags, Segment};
use crate::expand::expand;
use log::{debug, trace, warn};
use lsystem::ast::ConfigSet;
use lsystem_geometry::basic::rect::RectF64;
use lsystem_geometry::color::ColorU;
use serde_derive::{Deserialize, Serialize};

pub const DEFAULT_MAX_STACK_SIZE: usize = 10_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulatorSettings {
    /// Bound on the length of a generation, unless the configuration overrides it.
    pub max_stack_size: usize,
    /// Also execute the generation before the last one.
    pub previous_generation: bool,
}

impl Default for SimulatorSettings {
    fn default() -> SimulatorSettings {
        SimulatorSettings { max_stack_size: DEFAULT_MAX_STACK_SIZE, previous_generation: false }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ResultKind {
    Ok,
    InvalidConfig(ConfigError),
    /// The stack size was exceeded; the segments come from the truncated generation.
    ExceedStackSize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExecResult {
    pub kind: ResultKind,
    pub segments: Vec<Segment>,
    pub previous_segments: Option<Vec<Segment>>,
    /// The iteration that was reached, which is where the expansion stopped if it overflowed.
    pub iterations: u32,
    /// Colors indexed by `Segment::color_num`.
    pub colors: Vec<ColorU>,
    pub bounds: Option<RectF64>,
    pub flags: ExecFlags,
}

impl ExecResult {
    pub fn invalid(err: ConfigError) -> ExecResult {
        ExecResult {
            kind: ResultKind::InvalidConfig(err),
            segments: vec![],
            previous_segments: None,
            iterations: 0,
            colors: vec![],
            bounds: None,
            flags: ExecFlags::empty(),
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.kind == ResultKind::Ok
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    Exec(ConfigSet),
    /// Like `Exec`, with twice the stack size that would otherwise apply.
    ExecDoubleStackSize(ConfigSet),
    ActionStr(ConfigSet),
    SetMaxStackSize(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    Exec(ExecResult),
    ActionStr(Result<String, ConfigError>),
    MaxStackSize(usize),
}

#[derive(Debug)]
struct Compiled {
    config: ConfigSet,
    graph: ActionGraph,
}

/// Processes one configuration at a time.
#[derive(Debug)]
pub struct Simulator {
    settings: SimulatorSettings,
    cache: Option<Compiled>,
    compile_count: usize,
}

impl Default for Simulator {
    fn default() -> Simulator {
        Simulator::new(SimulatorSettings::default())
    }
}

impl Simulator {
    pub fn new(settings: SimulatorSettings) -> Simulator {
        Simulator { settings, cache: None, compile_count: 0 }
    }

    pub fn set_max_stack_size(&mut self, max_stack_size: usize) {
        debug!("Max stack size set to {}", max_stack_size);
        self.settings.max_stack_size = max_stack_size;
    }

    /// How many times a graph was compiled since this simulator was created.
    #[inline]
    pub fn compile_count(&self) -> usize {
        self.compile_count
    }

    /// Whether the cached graph can be reused for `config`.
    pub fn expansion_equal(&self, config: &ConfigSet) -> bool {
        self.cache.as_ref().map_or(false, |compiled| compiled.config.expansion_equal(config))
    }

    /// The stack size that applies to `config`.
    #[inline]
    pub fn stack_size(&self, config: &ConfigSet) -> usize {
        config.stack_size.unwrap_or(self.settings.max_stack_size)
    }

    pub fn process(&mut self, request: Request) -> Response {
        match request {
            Request::Exec(config) => Response::Exec(self.exec(&config)),
            Request::ExecDoubleStackSize(config) => {
                Response::Exec(self.exec_double_stack_size(&config))
            }
            Request::ActionStr(config) => Response::ActionStr(self.action_str(&config)),
            Request::SetMaxStackSize(max_stack_size) => {
                self.set_max_stack_size(max_stack_size);
                Response::MaxStackSize(max_stack_size)
            }
        }
    }

    pub fn exec(&mut self, config: &ConfigSet) -> ExecResult {
        let stack_size = self.stack_size(config);
        self.exec_with_stack_size(config, stack_size)
    }

    pub fn exec_double_stack_size(&mut self, config: &ConfigSet) -> ExecResult {
        let stack_size = self.stack_size(config).saturating_mul(2);
        self.exec_with_stack_size(config, stack_size)
    }

    /// The final generation spelled out. Truncated if the stack size was exceeded.
    pub fn action_str(&mut self, config: &ConfigSet) -> Result<String, ConfigError> {
        let stack_size = self.stack_size(config);
        let graph = self.graph_for(config)?;
        let expansion = expand(graph, config.num_iter, stack_size, false);
        if expansion.exceeded {
            warn!("Action string truncated at iteration {}", expansion.iterations);
        }
        Ok(exec::action_str(graph, &expansion.sequence))
    }

    fn exec_with_stack_size(&mut self, config: &ConfigSet, stack_size: usize) -> ExecResult {
        let keep_previous = self.settings.previous_generation;
        let graph = match self.graph_for(config) {
            Ok(graph) => graph,
            Err(err) => {
                debug!("Invalid configuration: {}", err);
                return ExecResult::invalid(err);
            }
        };

        let expansion = expand(graph, config.num_iter, stack_size, keep_previous);
        let execution =
            exec::execute(graph, &expansion.sequence, config.start_angle, config.step_size);
        let previous_segments = expansion.previous.as_ref().map(|previous| {
            exec::execute(graph, previous, config.start_angle, config.step_size).segments
        });

        debug!(
            "Executed {} actions into {} segments after {} iterations",
            expansion.sequence.len(),
            execution.segments.len(),
            expansion.iterations
        );
        ExecResult {
            kind: if expansion.exceeded { ResultKind::ExceedStackSize } else { ResultKind::Ok },
            segments: execution.segments,
            previous_segments,
            iterations: expansion.iterations,
            colors: graph.colors().to_vec(),
            bounds: execution.bounds,
            flags: execution.flags,
        }
    }

    /// Returns the cached graph if it is still valid for `config`, compiling a new one otherwise.
    fn graph_for(&mut self, config: &ConfigSet) -> Result<&ActionGraph, ConfigError> {
        let compiled = match self.cache.take() {
            Some(compiled) if compiled.config.expansion_equal(config) => {
                trace!("Reusing compiled graph");
                compiled
            }
            _ => {
                self.compile_count += 1;
                Compiled { config: config.clone(), graph: compile(config)? }
            }
        };
        Ok(&self.cache.get_or_insert(compiled).graph)
    }
}
