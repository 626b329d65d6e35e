// pathfinder/turtle/src/exec.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs an action sequence as turtle graphics.

use crate::action::{Action, ActionGraph, ActionId, TurnAction};
use log::warn;
use lsystem::ast::{LiteralFlags, TURN_LEFT};
use lsystem_geometry::basic::line_segment::LineSegmentF64;
use lsystem_geometry::basic::point::Point2DF64;
use lsystem_geometry::basic::rect::RectF64;
use serde_derive::Serialize;
use std::fmt::{Display, Formatter, Result as FormatResult};

/// A painted line, or a dot when both ends coincide.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub line: LineSegmentF64,
    /// Index into the graph's color table.
    pub color_num: u8,
}

impl Segment {
    #[inline]
    pub fn new(from: Point2DF64, to: Point2DF64, color_num: u8) -> Segment {
        Segment { line: LineSegmentF64::new(&from, &to), color_num }
    }
}

bitflags! {
    // NB: If you change this, make sure to update the `Display`
    // implementation as well.
    #[derive(Default, Serialize)]
    pub struct ExecFlags: u8 {
        const POP_EMPTY_STACK = 0x01;
        const UNCLOSED_PUSH   = 0x02;
    }
}

impl Display for ExecFlags {
    fn fmt(&self, formatter: &mut Formatter) -> FormatResult {
        if self.is_empty() {
            return Ok(());
        }

        let mut first = true;
        for (bit, name) in NAMES.iter().enumerate() {
            if (self.bits() >> bit) & 1 == 0 {
                continue;
            }
            if !first {
                formatter.write_str(", ")?;
            } else {
                first = false;
            }
            formatter.write_str(name)?;
        }

        return Ok(());

        // Must match the order in `ExecFlags`.
        static NAMES: &'static [&'static str] = &["pop on empty stack", "push never popped"];
    }
}

#[derive(Debug)]
struct TurtleState {
    position: Point2DF64,
    direction: Point2DF64,
    stack: Vec<(Point2DF64, Point2DF64)>,
}

impl TurtleState {
    fn new(step_size: f64) -> TurtleState {
        TurtleState {
            position: Point2DF64::default(),
            direction: Point2DF64::new(step_size, 0.0),
            stack: vec![],
        }
    }
}

/// The outcome of one run of the turtle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Execution {
    pub segments: Vec<Segment>,
    pub bounds: Option<RectF64>,
    pub flags: ExecFlags,
}

struct Executor<'a> {
    graph: &'a ActionGraph,
    state: TurtleState,
    execution: Execution,
}

impl<'a> Executor<'a> {
    fn new(graph: &'a ActionGraph, step_size: f64) -> Executor<'a> {
        Executor { graph, state: TurtleState::new(step_size), execution: Execution::default() }
    }

    fn update_bounds(&mut self, point: Point2DF64) {
        self.execution.bounds = Some(match self.execution.bounds {
            Some(bounds) => bounds.union_point(point),
            None => RectF64::from_points(point, point),
        });
    }

    fn step(&mut self, action: &Action) {
        match *action {
            Action::Turn(ref turn) => {
                self.state.direction = turn.rotation.apply(self.state.direction);
            }
            Action::ScalePush(factor) => {
                self.state.stack.push((self.state.position, self.state.direction));
                self.state.direction = self.state.direction.scale(factor);
            }
            Action::ScalePop => match self.state.stack.pop() {
                Some((position, direction)) => {
                    self.state.position = position;
                    self.state.direction = direction;
                }
                None => {
                    // NOOP.
                    if !self.execution.flags.contains(ExecFlags::POP_EMPTY_STACK) {
                        warn!("pop on empty stack");
                    }
                    self.execution.flags.insert(ExecFlags::POP_EMPTY_STACK);
                }
            },
            Action::Literal(ref literal) => {
                let from = self.state.position;
                if literal.flags.contains(LiteralFlags::MOVE) {
                    self.state.position = from + self.state.direction;
                }
                if literal.flags.contains(LiteralFlags::PAINT) {
                    let to = self.state.position;
                    self.execution.segments.push(Segment::new(from, to, literal.color_num));
                    self.update_bounds(from);
                    self.update_bounds(to);
                }
            }
        }
    }

    fn run(&mut self, sequence: &[ActionId]) {
        let graph = self.graph;
        for &id in sequence {
            self.step(graph.get(id));
        }
    }

    fn finish(mut self) -> Execution {
        if !self.state.stack.is_empty() {
            self.execution.flags.insert(ExecFlags::UNCLOSED_PUSH);
        }
        self.execution
    }
}

/// Runs `sequence` starting at the origin, heading along `start_angle` degrees with a step of
/// `step_size`.
pub fn execute(
    graph: &ActionGraph,
    sequence: &[ActionId],
    start_angle: f64,
    step_size: f64,
) -> Execution {
    let mut executor = Executor::new(graph, step_size);
    // The heading is not part of the graph; it changes without invalidating it.
    executor.step(&Action::Turn(TurnAction::from_degrees(TURN_LEFT, start_angle)));
    executor.run(sequence);
    executor.finish()
}

/// Spells out `sequence` as the symbols it was compiled from.
pub fn action_str(graph: &ActionGraph, sequence: &[ActionId]) -> String {
    sequence.iter().map(|&id| graph.get(id).symbol()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;
    use lsystem::ast::{ConfigSet, Definition};
    use lsystem_geometry::color::ColorU;
    use pretty_assertions::assert_eq;

    fn graph(definitions: Vec<Definition>, scaling: f64) -> ActionGraph {
        compile(&ConfigSet { definitions, scaling, ..ConfigSet::default() }).unwrap()
    }

    fn rewrite_of_start(graph: &ActionGraph) -> Vec<ActionId> {
        let mut sequence = vec![];
        graph.get(graph.start()).expand_into(graph.start(), &mut sequence);
        sequence
    }

    fn p(x: f64, y: f64) -> Point2DF64 {
        Point2DF64::new(x, y)
    }

    #[test]
    fn move_without_paint_leaves_no_trace() {
        let graph = graph(
            vec![
                Definition::new('A', "BAB", ColorU::black(), LiteralFlags::PAINT | LiteralFlags::MOVE),
                Definition::new('B', "", ColorU::white(), LiteralFlags::MOVE),
            ],
            1.0,
        );
        let execution = execute(&graph, &rewrite_of_start(&graph), 0.0, 2.0);
        assert_eq!(execution.segments, vec![Segment::new(p(2.0, 0.0), p(4.0, 0.0), 0)]);
        assert_eq!(execution.bounds, Some(RectF64::from_points(p(2.0, 0.0), p(4.0, 0.0))));
        assert!(execution.flags.is_empty());
    }

    #[test]
    fn paint_without_move_draws_a_dot() {
        let graph = graph(
            vec![
                Definition::new('A', "BA", ColorU::black(), LiteralFlags::MOVE),
                Definition::new('B', "", ColorU::white(), LiteralFlags::PAINT),
            ],
            1.0,
        );
        let execution = execute(&graph, &rewrite_of_start(&graph), 0.0, 1.0);
        assert_eq!(execution.segments, vec![Segment::new(p(0.0, 0.0), p(0.0, 0.0), 1)]);
        assert!(execution.segments[0].line.is_point());
    }

    #[test]
    fn scale_scope_restores_the_turtle() {
        let graph = graph(
            vec![Definition::new(
                'A',
                "[+A]A",
                ColorU::black(),
                LiteralFlags::PAINT | LiteralFlags::MOVE,
            )],
            0.5,
        );
        let execution = execute(&graph, &rewrite_of_start(&graph), 0.0, 4.0);
        assert_eq!(
            execution.segments,
            vec![Segment::new(p(0.0, 0.0), p(0.0, 2.0), 0), Segment::new(p(0.0, 0.0), p(4.0, 0.0), 0)]
        );
        assert_eq!(execution.bounds, Some(RectF64::from_points(p(0.0, 0.0), p(4.0, 2.0))));
        assert!(execution.flags.is_empty());
    }

    #[test]
    fn unbalanced_pops_are_flagged() {
        let graph = graph(
            vec![Definition::new(
                'A',
                "]A[",
                ColorU::black(),
                LiteralFlags::PAINT | LiteralFlags::MOVE,
            )],
            1.0,
        );
        let execution = execute(&graph, &rewrite_of_start(&graph), 0.0, 1.0);
        assert_eq!(execution.segments, vec![Segment::new(p(0.0, 0.0), p(1.0, 0.0), 0)]);
        assert_eq!(execution.flags, ExecFlags::POP_EMPTY_STACK | ExecFlags::UNCLOSED_PUSH);
        assert_eq!(execution.flags.to_string(), "pop on empty stack, push never popped");
    }

    #[test]
    fn start_angle_rotates_the_first_step() {
        let graph = graph(
            vec![Definition::new('A', "A", ColorU::black(), LiteralFlags::PAINT | LiteralFlags::MOVE)],
            1.0,
        );
        let execution = execute(&graph, &[graph.start()], 90.0, 3.0);
        assert_eq!(execution.segments, vec![Segment::new(p(0.0, 0.0), p(0.0, 3.0), 0)]);
    }

    #[test]
    fn action_str_spells_symbols() {
        let graph = graph(
            vec![Definition::new('A', "A[+A]-A", ColorU::black(), LiteralFlags::MOVE)],
            1.0,
        );
        assert_eq!(action_str(&graph, &rewrite_of_start(&graph)), "A[+A]-A");
        assert_eq!(action_str(&graph, &[]), "");
    }
}
