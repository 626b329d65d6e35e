// pathfinder/demo/common/src/worker.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs a simulator on its own thread so that long expansions don't block the caller.

use crate::DemoError;
use log::{debug, error};
use lsystem::ast::ConfigSet;
use lsystem_turtle::{ConfigError, ExecResult, Request, Response, Simulator, SimulatorSettings};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// Owns one [`Simulator`] on a background thread. Requests are answered one at a time, in the
/// order they were sent.
pub struct SimulatorWorker {
    requests: Option<Sender<Request>>,
    responses: Receiver<Response>,
    thread: Option<JoinHandle<()>>,
}

impl SimulatorWorker {
    pub fn spawn(settings: SimulatorSettings) -> Result<SimulatorWorker, DemoError> {
        let (request_tx, request_rx) = mpsc::channel::<Request>();
        let (response_tx, response_rx) = mpsc::channel();

        let thread = thread::Builder::new()
            .name("lsystem-simulator".to_owned())
            .spawn(move || {
                let mut simulator = Simulator::new(settings);
                for request in request_rx {
                    if response_tx.send(simulator.process(request)).is_err() {
                        break;
                    }
                }
                debug!("Simulator thread exiting after {} compiles", simulator.compile_count());
            })
            .map_err(DemoError::Spawn)?;

        Ok(SimulatorWorker { requests: Some(request_tx), responses: response_rx, thread: Some(thread) })
    }

    /// Sends `request` and waits for its response.
    pub fn request(&self, request: Request) -> Result<Response, DemoError> {
        let requests = self.requests.as_ref().ok_or(DemoError::Disconnected)?;
        requests.send(request).map_err(|_| DemoError::Disconnected)?;
        self.responses.recv().map_err(|_| DemoError::Disconnected)
    }

    pub fn exec(&self, config: ConfigSet) -> Result<ExecResult, DemoError> {
        match self.request(Request::Exec(config))? {
            Response::Exec(result) => Ok(result),
            _ => Err(DemoError::UnexpectedResponse),
        }
    }

    pub fn exec_double_stack_size(&self, config: ConfigSet) -> Result<ExecResult, DemoError> {
        match self.request(Request::ExecDoubleStackSize(config))? {
            Response::Exec(result) => Ok(result),
            _ => Err(DemoError::UnexpectedResponse),
        }
    }

    pub fn action_str(&self, config: ConfigSet) -> Result<Result<String, ConfigError>, DemoError> {
        match self.request(Request::ActionStr(config))? {
            Response::ActionStr(result) => Ok(result),
            _ => Err(DemoError::UnexpectedResponse),
        }
    }

    pub fn set_max_stack_size(&self, max_stack_size: usize) -> Result<(), DemoError> {
        match self.request(Request::SetMaxStackSize(max_stack_size))? {
            Response::MaxStackSize(_) => Ok(()),
            _ => Err(DemoError::UnexpectedResponse),
        }
    }
}

impl Drop for SimulatorWorker {
    fn drop(&mut self) {
        // Hanging up ends the thread's request loop.
        self.requests.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                error!("simulator thread panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsystem::ast::{Definition, LiteralFlags};
    use lsystem_geometry::color::ColorU;
    use lsystem_turtle::ResultKind;

    fn doubling() -> ConfigSet {
        ConfigSet {
            definitions: vec![Definition::new(
                'A',
                "AA",
                ColorU::black(),
                LiteralFlags::PAINT | LiteralFlags::MOVE,
            )],
            num_iter: 12,
            ..ConfigSet::default()
        }
    }

    #[test]
    fn requests_are_answered_in_order() {
        let worker = SimulatorWorker::spawn(SimulatorSettings::default()).unwrap();

        let result = worker.exec(doubling()).unwrap();
        assert_eq!(result.kind, ResultKind::Ok);
        assert_eq!(result.segments.len(), 4096);

        worker.set_max_stack_size(1000).unwrap();
        let result = worker.exec(doubling()).unwrap();
        assert_eq!(result.kind, ResultKind::ExceedStackSize);
        assert_eq!(result.iterations, 10);

        let result = worker.exec_double_stack_size(doubling()).unwrap();
        assert_eq!(result.kind, ResultKind::ExceedStackSize);
        assert_eq!(result.iterations, 11);

        let config = ConfigSet { num_iter: 3, ..doubling() };
        assert_eq!(worker.action_str(config).unwrap(), Ok("AAAAAAAA".to_string()));
    }
}
