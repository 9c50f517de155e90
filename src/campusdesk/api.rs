//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every UI client.
//!
//! The API:
//! - **Dispatches** to the command function
//! - **Normalizes inputs** (collection names, `key=value` filter strings, form kinds)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never formats output or touches the terminal. Business logic lives in
//! `commands/*.rs`; the tests here only check dispatch and input parsing.

use crate::commands::{self, list::ListRequest, register::FormKind};
use crate::config::DeskConfig;
use crate::error::{DeskError, Result};
use crate::filter::FilterValue;
use std::path::{Path, PathBuf};

pub struct DeskApi {
    config_dir: PathBuf,
    config: DeskConfig,
}

impl DeskApi {
    /// Open with the config stored in `config_dir` (defaults when absent).
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self> {
        let config_dir = config_dir.into();
        let config = DeskConfig::load(&config_dir)?;
        Ok(Self { config_dir, config })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn current_config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn list<F: AsRef<str>>(
        &self,
        collection: &str,
        filters: &[F],
        page: Option<usize>,
        per_page: Option<usize>,
    ) -> Result<commands::CmdResult> {
        let request = ListRequest {
            filters: parse_filters(filters)?,
            page,
            per_page,
        };
        commands::list::run(collection.parse()?, &request, &self.config)
    }

    pub fn options<F: AsRef<str>>(
        &self,
        collection: &str,
        key: &str,
        filters: &[F],
    ) -> Result<commands::CmdResult> {
        let filters = parse_filters(filters)?;
        commands::options::run(collection.parse()?, key, &filters, &self.config)
    }

    pub fn replay(&self, collection: &str, script: &str) -> Result<commands::CmdResult> {
        commands::replay::run(collection.parse()?, script, &self.config)
    }

    pub fn register(&self, form: &str, json: &str) -> Result<commands::CmdResult> {
        commands::register::run(form.parse::<FormKind>()?, json)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

/// `key=value` or `key=a,b,c` (multi-select).
pub fn parse_filter(input: &str) -> Result<(String, FilterValue)> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| DeskError::Api(format!("Invalid filter '{}', expected key=value", input)))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(DeskError::Api(format!("Invalid filter '{}', missing key", input)));
    }
    let value = if value.contains(',') {
        FilterValue::many(value.split(',').map(str::trim))
    } else {
        FilterValue::one(value.trim())
    };
    Ok((key.to_string(), value))
}

fn parse_filters<F: AsRef<str>>(inputs: &[F]) -> Result<Vec<(String, FilterValue)>> {
    inputs.iter().map(|s| parse_filter(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, Listing, ListingRow, MessageLevel};
