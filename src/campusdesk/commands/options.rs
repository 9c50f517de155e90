use super::{apply_filters, with_screen, CmdMessage, CmdResult};
use crate::catalog::Collection;
use crate::config::DeskConfig;
use crate::error::Result;
use crate::filter::FilterValue;

/// Values offered by one filter control, given the other selections.
pub fn run(
    collection: Collection,
    key: &str,
    filters: &[(String, FilterValue)],
    config: &DeskConfig,
) -> Result<CmdResult> {
    with_screen!(collection, config, |screen| {
        apply_filters(&mut screen, filters)?;
        let options = screen.options(key)?;
        let mut result = CmdResult::default();
        if options.is_empty() {
            result.add_message(CmdMessage::info(format!("No options for {}", key)));
        }
        Ok(result.with_options(options))
    })
}
