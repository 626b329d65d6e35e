// pathfinder/turtle/src/expand.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bounded rewriting of the start action.
//!
//! Each iteration replaces every literal of the current generation by its rewrite. Growth is
//! usually exponential, so the next generation is checked against the stack size before every
//! single action is expanded. Once it is over the limit the iteration stops where it is and the
//! partial generation is returned as-is, which keeps memory bounded and still leaves something to
//! draw.

use crate::action::{ActionGraph, ActionId};
use log::{trace, warn};
use std::mem;

#[derive(Clone, Debug, PartialEq)]
pub struct Expansion {
    /// The last generation, truncated if `exceeded` is set.
    pub sequence: Vec<ActionId>,
    /// Number of the last iteration that was started.
    pub iterations: u32,
    /// Whether the stack size was exceeded during `iterations`.
    pub exceeded: bool,
    /// The generation before the last one, if it was asked for and reached.
    pub previous: Option<Vec<ActionId>>,
}

pub fn expand(
    graph: &ActionGraph,
    num_iter: u32,
    stack_size: usize,
    keep_previous: bool,
) -> Expansion {
    let mut current = vec![graph.start()];
    let mut next = vec![];
    let mut previous = None;

    for iter in 0..num_iter {
        if keep_previous && iter + 1 == num_iter {
            previous = Some(current.clone());
        }

        for &id in &current {
            if next.len() > stack_size {
                warn!(
                    "Stack size {} exceeded in iteration {} of {}",
                    stack_size,
                    iter + 1,
                    num_iter
                );
                return Expansion { sequence: next, iterations: iter + 1, exceeded: true, previous };
            }
            graph.get(id).expand_into(id, &mut next);
        }

        trace!("Iteration {} produced {} actions", iter + 1, next.len());
        mem::swap(&mut current, &mut next);
        next.clear();
    }

    Expansion { sequence: current, iterations: num_iter, exceeded: false, previous }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile;
    use crate::exec::action_str;
    use lsystem::ast::{ConfigSet, Definition, LiteralFlags};
    use lsystem_geometry::color::ColorU;
    use pretty_assertions::assert_eq;

    fn graph(definitions: &[(char, &str)]) -> ActionGraph {
        let definitions = definitions
            .iter()
            .map(|&(literal, actions)| {
                Definition::new(literal, actions, ColorU::black(), LiteralFlags::PAINT)
            })
            .collect();
        compile(&ConfigSet { definitions, ..ConfigSet::default() }).unwrap()
    }

    #[test]
    fn zero_iterations_keep_the_start_action() {
        let graph = graph(&[('A', "AA")]);
        let expansion = expand(&graph, 0, 100, true);
        assert_eq!(expansion.sequence, vec![graph.start()]);
        assert_eq!(expansion.iterations, 0);
        assert!(!expansion.exceeded);
        assert_eq!(expansion.previous, None);
    }

    #[test]
    fn rewrites_preserve_textual_order() {
        let graph = graph(&[('A', "B+A"), ('B', "[B-]")]);
        let expansion = expand(&graph, 3, 1000, false);
        assert_eq!(action_str(&graph, &expansion.sequence), "[[B-]-]+[B-]+B+A");
        assert_eq!(expansion.iterations, 3);
        assert!(!expansion.exceeded);
    }

    #[test]
    fn previous_generation_is_kept() {
        let graph = graph(&[('A', "AB"), ('B', "A")]);
        let expansion = expand(&graph, 4, 1000, true);
        assert_eq!(action_str(&graph, &expansion.sequence), "ABAABABA");
        assert_eq!(
            expansion.previous.as_ref().map(|previous| action_str(&graph, previous)),
            Some("ABAAB".to_string())
        );

        let expansion = expand(&graph, 1, 1000, true);
        assert_eq!(
            expansion.previous.as_ref().map(|previous| action_str(&graph, previous)),
            Some("A".to_string())
        );
    }

    #[test]
    fn doubling_stops_past_the_stack_size() {
        let graph = graph(&[('A', "AA")]);
        let expansion = expand(&graph, 20, 1000, false);
        assert!(expansion.exceeded);
        assert_eq!(expansion.iterations, 10);
        assert_eq!(expansion.sequence.len(), 1002);
    }

    #[test]
    fn exact_fit_is_not_an_overflow() {
        let graph = graph(&[('A', "AA")]);
        let expansion = expand(&graph, 10, 1024, false);
        assert!(!expansion.exceeded);
        assert_eq!(expansion.sequence.len(), 1024);
    }

    #[test]
    fn empty_rewrites_vanish() {
        let graph = graph(&[('A', "B"), ('B', "")]);
        let expansion = expand(&graph, 5, 0, false);
        assert!(expansion.sequence.is_empty());
        assert!(!expansion.exceeded);
    }
}
