//! Scripted screen sessions.
//!
//! A script is JSON lines, one [`ScreenAction`] per line:
//!
//! ```text
//! {"action":"set_filter","key":"search","value":"california"}
//! {"action":"remove","row":2}
//! {"action":"start_edit","row":1}
//! {"action":"update_draft","record":{"number":6,"name":"Caltech"}}
//! {"action":"commit_edit"}
//! ```
//!
//! `row` is the ordinal shown in the list at the moment the step runs; it is resolved to
//! the record's id before the action is applied. Blank lines and `#` comments are skipped.
//! A rejected step leaves the screen unchanged and the script continues.

use super::{with_screen, CmdMessage, CmdResult, Listing};
use crate::catalog::Collection;
use crate::config::DeskConfig;
use crate::error::{DeskError, Result};
use crate::model::Tabular;
use crate::screen::{ListScreen, ScreenAction};
use crate::store::CollectionStore;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub fn run(collection: Collection, script: &str, config: &DeskConfig) -> Result<CmdResult> {
    with_screen!(collection, config, |screen| {
        let mut outcomes = Vec::new();
        let mut messages = Vec::new();
        for (n, line) in script.lines().enumerate() {
            let step = n + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let action = parse_step(&screen, line)
                .map_err(|e| DeskError::Api(format!("step {}: {}", step, e)))?;
            match screen.apply(action) {
                Ok(outcome) => {
                    debug!(step, ?outcome, "step applied");
                    outcomes.push(outcome);
                }
                Err(e) => {
                    warn!(step, error = %e, "step rejected");
                    messages.push(CmdMessage::warning(format!("step {}: {}", step, e)));
                }
            }
        }

        let mut result = CmdResult::default()
            .with_listing(Listing::from_screen(collection, &screen, config))
            .with_outcomes(outcomes);
        for message in messages {
            result.add_message(message);
        }
        Ok(result)
    })
}

fn parse_step<R, S>(screen: &ListScreen<R, S>, line: &str) -> Result<ScreenAction<R>>
where
    R: Tabular + DeserializeOwned,
    S: CollectionStore<R>,
{
    let mut value: serde_json::Value = serde_json::from_str(line)?;
    if let Some(step) = value.as_object_mut() {
        if let Some(row) = step.remove("row") {
            let ordinal = row
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| DeskError::Api(format!("row must be a number, got {}", row)))?;
            let id = screen
                .view()
                .id_at(ordinal)
                .ok_or_else(|| DeskError::Api(format!("row {} is not on the current page", ordinal)))?;
            step.insert("id".to_string(), serde_json::to_value(id)?);
        }
    }
    Ok(serde_json::from_value(value)?)
}
