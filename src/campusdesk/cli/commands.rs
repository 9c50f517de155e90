//! # CLI Layer
//!
//! One possible UI client for campusdesk. This is the only place that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! Handlers call a `DeskApi` method and hand the `CmdResult` to the printers in
//! `print.rs`. Errors bubble up to `main`, which prints `Error: <message>` and exits 1.

use super::args::{Cli, Commands};
use super::print::{print_config, print_listing, print_messages, print_options, print_outcomes};
use campusdesk::api::{CmdResult, ConfigAction, DeskApi};
use campusdesk::config::config_dir;
use campusdesk::error::{DeskError, Result};
use campusdesk::logging::{init_logging, LogConfig};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_format(cli.log_format));

    let mut api = DeskApi::new(config_dir()?)?;

    match cli.command {
        Commands::List {
            collection,
            filters,
            page,
            per_page,
        } => handle_list(&api, &collection, &filters, page, per_page),
        Commands::Options {
            collection,
            key,
            filters,
        } => handle_options(&api, &collection, &key, &filters),
        Commands::Replay { collection, file } => handle_replay(&api, &collection, file),
        Commands::Register { form, file } => handle_register(&api, &form, file),
        Commands::Config { key, value } => handle_config(&mut api, key, value),
    }
}

fn handle_list(
    api: &DeskApi,
    collection: &str,
    filters: &[String],
    page: Option<usize>,
    per_page: Option<usize>,
) -> Result<()> {
    let result = api.list(collection, filters, page, per_page)?;
    print_result(&result);
    Ok(())
}

fn handle_options(api: &DeskApi, collection: &str, key: &str, filters: &[String]) -> Result<()> {
    let result = api.options(collection, key, filters)?;
    print_options(&result.options);
    print_messages(&result.messages);
    Ok(())
}

fn handle_replay(api: &DeskApi, collection: &str, file: Option<PathBuf>) -> Result<()> {
    let script = read_input(file)?;
    let result = api.replay(collection, &script)?;
    print_outcomes(&result.outcomes);
    print_result(&result);
    Ok(())
}

fn handle_register(api: &DeskApi, form: &str, file: Option<PathBuf>) -> Result<()> {
    let json = read_input(file)?;
    let result = api.register(form, &json)?;
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(DeskError::Api(format!("{} registration rejected", form)));
    }
    Ok(())
}

fn handle_config(api: &mut DeskApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_result(result: &CmdResult) {
    if let Some(listing) = &result.listing {
        print_listing(listing);
    }
    print_messages(&result.messages);
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
