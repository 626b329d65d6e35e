// pathfinder/demo/native/src/main.rs
//
// Copyright © 2019 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Evaluates an L-system file from the command line.

use log::{error, info};
use lsystem_demo::Options;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::process;

fn main() {
    let options = Options::get();

    let level = if options.debug { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(err) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("WARNING: Failed to setup logger: {} (no logging for this session)", err);
    }
    info!("lsystem v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = lsystem_demo::run(&options) {
        error!("{}", err);
        process::exit(1);
    }
}
