// pathfinder/demo/common/src/lib.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A command-line front end that evaluates L-system files.

pub mod worker;

use crate::worker::SimulatorWorker;
use clap::{App, Arg};
use log::{info, warn};
use lsystem::ast::ConfigSet;
use lsystem_turtle::{ConfigError, ExecResult, ResultKind, SimulatorSettings};
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Parse(#[from] lsystem::ParseError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("failed to start the simulator thread: {0}")]
    Spawn(#[source] io::Error),
    #[error("the simulator thread has stopped")]
    Disconnected,
    #[error("the simulator answered with the wrong kind of response")]
    UnexpectedResponse,
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to serialize the result: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub input: PathBuf,
    pub iterations: Option<u32>,
    pub stack_size: Option<usize>,
    pub action_str: bool,
    pub previous: bool,
    pub retry: bool,
    pub json: bool,
    pub debug: bool,
}

impl Options {
    /// Reads the options from the command line, exiting with usage on error.
    pub fn get() -> Options {
        Options::from_args(std::env::args_os()).unwrap_or_else(|err| err.exit())
    }

    pub fn from_args<I, T>(args: I) -> Result<Options, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = App::new("lsystem")
            .about("Expands an L-system and prints the segments its turtle draws")
            .arg(
                Arg::with_name("INPUT")
                    .help("The L-system file to evaluate")
                    .required(true)
                    .index(1),
            )
            .arg(
                Arg::with_name("iterations")
                    .short("i")
                    .long("iterations")
                    .value_name("COUNT")
                    .takes_value(true)
                    .help("Overrides the number of iterations"),
            )
            .arg(
                Arg::with_name("stack-size")
                    .short("s")
                    .long("stack-size")
                    .value_name("ACTIONS")
                    .takes_value(true)
                    .help("Sets the maximum length of a generation, unless the file sets one"),
            )
            .arg(
                Arg::with_name("action-str")
                    .short("a")
                    .long("action-str")
                    .help("Prints the expanded action string instead of segments"),
            )
            .arg(
                Arg::with_name("previous")
                    .short("p")
                    .long("previous")
                    .help("Also computes the segments of the previous generation"),
            )
            .arg(
                Arg::with_name("retry")
                    .short("r")
                    .long("retry")
                    .help("Retries with twice the stack size if it was exceeded"),
            )
            .arg(Arg::with_name("json").short("j").long("json").help("Prints the result as JSON"))
            .arg(Arg::with_name("debug").long("debug").help("Enables debug logging"))
            .get_matches_from_safe(args)?;

        let iterations = match matches.value_of("iterations") {
            Some(string) => Some(parse_number(string, "iterations")?),
            None => None,
        };
        let stack_size = match matches.value_of("stack-size") {
            Some(string) => Some(parse_number(string, "stack-size")?),
            None => None,
        };

        Ok(Options {
            input: PathBuf::from(matches.value_of_os("INPUT").unwrap_or_default()),
            iterations,
            stack_size,
            action_str: matches.is_present("action-str"),
            previous: matches.is_present("previous"),
            retry: matches.is_present("retry"),
            json: matches.is_present("json"),
            debug: matches.is_present("debug"),
        })
    }
}

fn parse_number<N>(string: &str, name: &str) -> Result<N, clap::Error>
where
    N: std::str::FromStr,
{
    string.parse().map_err(|_| {
        clap::Error::with_description(
            &format!("'{}' is not a valid value for --{}", string, name),
            clap::ErrorKind::InvalidValue,
        )
    })
}

/// Loads the file named in `options` and prints what it evaluates to on stdout.
pub fn run(options: &Options) -> Result<(), DemoError> {
    let input = fs::read_to_string(&options.input)
        .map_err(|source| DemoError::Read { path: options.input.clone(), source })?;
    let config = lsystem::parse(&input)?;
    info!(
        "Loaded {} literals from '{}'",
        config.definitions.len(),
        options.input.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_config(options, config, &mut out)
}

pub fn run_config<W>(options: &Options, mut config: ConfigSet, out: &mut W) -> Result<(), DemoError>
where
    W: Write,
{
    if let Some(iterations) = options.iterations {
        config.num_iter = iterations;
    }

    let worker = SimulatorWorker::spawn(SimulatorSettings {
        previous_generation: options.previous,
        ..SimulatorSettings::default()
    })?;
    if let Some(stack_size) = options.stack_size {
        worker.set_max_stack_size(stack_size)?;
    }

    if options.action_str {
        let action_str = worker.action_str(config)??;
        writeln!(out, "{}", action_str)?;
        return Ok(());
    }

    let mut result = worker.exec(config.clone())?;
    if options.retry && result.kind == ResultKind::ExceedStackSize {
        warn!(
            "Stack size exceeded in iteration {}, retrying with twice the stack size",
            result.iterations
        );
        result = worker.exec_double_stack_size(config)?;
    }

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        report(&result, out)?;
    }

    match result.kind {
        ResultKind::InvalidConfig(err) => Err(DemoError::InvalidConfig(err)),
        ResultKind::Ok | ResultKind::ExceedStackSize => Ok(()),
    }
}

/// Writes a short human-readable summary of `result`.
pub fn report<W>(result: &ExecResult, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    match result.kind {
        ResultKind::Ok => writeln!(out, "result: ok")?,
        ResultKind::InvalidConfig(ref err) => {
            writeln!(out, "result: invalid configuration: {}", err)?;
            return Ok(());
        }
        ResultKind::ExceedStackSize => writeln!(out, "result: stack size exceeded")?,
    }

    let points = result.segments.iter().filter(|segment| segment.line.is_point()).count();
    writeln!(out, "iterations: {}", result.iterations)?;
    writeln!(out, "segments: {} ({} points)", result.segments.len(), points)?;
    if let Some(ref previous) = result.previous_segments {
        writeln!(out, "previous segments: {}", previous.len())?;
    }
    if let Some(bounds) = result.bounds {
        writeln!(
            out,
            "bounds: ({}, {}) - ({}, {})",
            bounds.origin().x(),
            bounds.origin().y(),
            bounds.lower_right().x(),
            bounds.lower_right().y()
        )?;
    }
    let colors: Vec<String> = result.colors.iter().map(|color| color.to_string()).collect();
    writeln!(out, "colors: {}", colors.join(", "))?;
    if !result.flags.is_empty() {
        writeln!(out, "warnings: {}", result.flags)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SQUARE: &str = r#"
        start_angle -90
        iterations 2
        A = "A+A" #ff0000 paint move
    "#;

    fn options(args: &[&str]) -> Options {
        Options::from_args(["lsystem"].iter().chain(args.iter())).unwrap()
    }

    fn output(options: &Options, input: &str) -> (Result<(), DemoError>, String) {
        let mut out = vec![];
        let result = run_config(options, lsystem::parse(input).unwrap(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn options_parse() {
        let options = options(&["square.lsys", "-i", "4", "--stack-size", "100", "--json", "-r"]);
        assert_eq!(
            options,
            Options {
                input: PathBuf::from("square.lsys"),
                iterations: Some(4),
                stack_size: Some(100),
                action_str: false,
                previous: false,
                retry: true,
                json: true,
                debug: false,
            }
        );

        assert!(Options::from_args(&["lsystem"]).is_err());
        assert!(Options::from_args(&["lsystem", "a.lsys", "-i", "many"]).is_err());
    }

    #[test]
    fn square_summary() {
        let (result, text) = output(&options(&["square.lsys", "--previous"]), SQUARE);
        assert!(result.is_ok());
        assert_eq!(
            text,
            "result: ok\n\
             iterations: 2\n\
             segments: 4 (0 points)\n\
             previous segments: 2\n\
             bounds: (0, -1) - (1, 0)\n\
             colors: #ff0000\n"
        );
    }

    #[test]
    fn square_action_str() {
        let (result, text) = output(&options(&["square.lsys", "-a"]), SQUARE);
        assert!(result.is_ok());
        assert_eq!(text, "A+A+A+A\n");

        let (_, text) = output(&options(&["square.lsys", "-a", "-i", "0"]), SQUARE);
        assert_eq!(text, "A\n");
    }

    #[test]
    fn retry_doubles_the_stack_size() {
        let doubling = r#"A = "AA" paint move"#;
        let (_, text) = output(&options(&["d.lsys", "-i", "20", "-s", "1000"]), doubling);
        assert!(text.starts_with("result: stack size exceeded\niterations: 10\nsegments: 1002 "));

        let (_, text) = output(&options(&["d.lsys", "-i", "20", "-s", "1000", "-r"]), doubling);
        assert!(text.starts_with("result: stack size exceeded\niterations: 11\nsegments: 2002 "));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let (result, text) = output(&options(&["bad.lsys"]), r#"A = "AB" paint"#);
        assert_eq!(
            text,
            "result: invalid configuration: unexpected literal 'B' in actions for literal 'A'\n"
        );
        match result {
            Err(DemoError::InvalidConfig(err)) => {
                assert_eq!(err, ConfigError::UnexpectedLiteral { symbol: 'B', literal: 'A' })
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn bundled_files_run() {
        for input in &[
            include_str!("../../resources/square.lsys"),
            include_str!("../../resources/koch.lsys"),
            include_str!("../../resources/tree.lsys"),
        ] {
            let (result, text) = output(&options(&["bundled.lsys"]), input);
            assert!(result.is_ok(), "{:?}", result);
            assert!(text.starts_with("result: ok\n"), "{}", text);
        }

        let (result, text) = output(&options(&["bundled.lsys"]), include_str!("../../resources/doubling.lsys"));
        assert!(result.is_ok());
        assert!(text.starts_with("result: stack size exceeded\n"));
    }

    #[test]
    fn json_output_parses() {
        let (result, text) = output(&options(&["square.lsys", "--json"]), SQUARE);
        assert!(result.is_ok());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "Ok");
        assert_eq!(value["iterations"], 2);
        assert_eq!(value["segments"].as_array().map(|segments| segments.len()), Some(4));
        assert_eq!(value["colors"][0]["r"], 255);
    }
}
