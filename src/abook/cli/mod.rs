//! # CLI Layer
//!
//! This module is **one possible UI client** for abook, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Reads the wall clock
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: clap arguments, welcome banner and command list
//! - `repl`: the read-eval-print loop and keyword dispatch
//! - `edit`: the interactive `edit <name>` sub-flow
//! - `render`: message and error printing

mod edit;
mod render;
mod repl;
mod setup;

use abook::error::Result;
use abook::init::{initialize, resolve_data_dir};
use abook::logging;
use clap::Parser;
use chrono::{Local, NaiveDate};
use repl::Session;
use setup::{command_list, Cli, WELCOME};
use std::io::{self, Write};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = initialize(data_dir)?;
    tracing::debug!(
        contacts_file = %ctx.config.contacts_file,
        notes_file = %ctx.config.notes_file,
        data_dir = %ctx.data_dir.display(),
        "starting session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    writeln!(out, "{}", WELCOME)?;
    write!(out, "{}", command_list())?;

    let mut session = Session::new(ctx.api, today);
    session.run(&mut input, &mut out)?;
    Ok(())
}
