use super::{apply_filters, with_screen, CmdMessage, CmdResult, Listing};
use crate::catalog::Collection;
use crate::config::DeskConfig;
use crate::error::Result;
use crate::filter::FilterValue;
use crate::screen::ScreenAction;

#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub filters: Vec<(String, FilterValue)>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

pub fn run(collection: Collection, request: &ListRequest, config: &DeskConfig) -> Result<CmdResult> {
    with_screen!(collection, config, |screen| {
        apply_filters(&mut screen, &request.filters)?;
        if let Some(items_per_page) = request.per_page {
            screen.apply(ScreenAction::SetItemsPerPage { items_per_page })?;
        }
        if let Some(page) = request.page {
            screen.apply(ScreenAction::GoToPage { page })?;
        }

        let listing = Listing::from_screen(collection, &screen, config);
        let shown = listing.page.current_page;
        let mut result = CmdResult::default().with_listing(listing);
        if let Some(page) = request.page.filter(|&p| p != shown) {
            result.add_message(CmdMessage::warning(format!(
                "Page {} is out of range, showing page {}",
                page, shown
            )));
        }
        Ok(result)
    })
}
