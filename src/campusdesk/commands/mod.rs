use crate::catalog::Collection;
use crate::config::DeskConfig;
use crate::error::Result;
use crate::filter::FilterValue;
use crate::model::{RecordId, Tabular};
use crate::paginate::PageInfo;
use crate::screen::{ListScreen, ScreenAction, ScreenOutcome, ViewStatus};
use crate::store::CollectionStore;

pub mod config;
pub mod list;
pub mod options;
pub mod register;
pub mod replay;

/// Runs `$body` with `$screen` bound to the seeded screen of `$collection`.
macro_rules! with_screen {
    ($collection:expr, $config:expr, |$screen:ident| $body:expr) => {{
        use $crate::catalog::presets;
        use $crate::catalog::Collection;
        use $crate::commands::configure;
        match $collection {
            Collection::Colleges => {
                let mut $screen = configure(presets::colleges()?, $config)?;
                $body
            }
            Collection::Students => {
                let mut $screen = configure(presets::students()?, $config)?;
                $body
            }
            Collection::Faculty => {
                let mut $screen = configure(presets::faculty()?, $config)?;
                $body
            }
            Collection::Questions => {
                let mut $screen = configure(presets::questions()?, $config)?;
                $body
            }
            Collection::Tests => {
                let mut $screen = configure(presets::test_list()?, $config)?;
                $body
            }
            Collection::Assign => {
                let mut $screen = configure(presets::assign()?, $config)?;
                $body
            }
            Collection::Subjects => {
                let mut $screen = configure(presets::subjects()?, $config)?;
                $body
            }
            Collection::Qualifications => {
                let mut $screen = configure(presets::qualifications()?, $config)?;
                $body
            }
            Collection::Chapters => {
                let mut $screen = configure(presets::chapters()?, $config)?;
                $body
            }
            Collection::Topics => {
                let mut $screen = configure(presets::topics()?, $config)?;
                $body
            }
            Collection::FacultySubjects => {
                let mut $screen = configure(presets::faculty_subjects()?, $config)?;
                $body
            }
            Collection::FacultyColleges => {
                let mut $screen = configure(presets::faculty_colleges()?, $config)?;
                $body
            }
        }
    }};
}
pub(crate) use with_screen;

/// Page size and controls policy from the config.
pub(crate) fn configure<R, S>(
    screen: ListScreen<R, S>,
    config: &DeskConfig,
) -> Result<ListScreen<R, S>>
where
    R: Tabular,
    S: CollectionStore<R>,
{
    Ok(screen
        .with_items_per_page(config.items_per_page)?
        .with_controls(config.controls))
}

/// Apply filter selections parents-first, so a later parent never resets an explicit child.
pub(crate) fn apply_filters<R, S>(
    screen: &mut ListScreen<R, S>,
    filters: &[(String, FilterValue)],
) -> Result<()>
where
    R: Tabular,
    S: CollectionStore<R>,
{
    let mut ordered: Vec<&(String, FilterValue)> = filters.iter().collect();
    ordered.sort_by_key(|(key, _)| screen.graph().ancestors(key).len());
    for (key, value) in ordered {
        screen.apply(ScreenAction::SetFilter {
            key: key.clone(),
            value: value.clone(),
        })?;
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One visible row, flattened to display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub ordinal: usize,
    pub id: RecordId,
    pub cells: Vec<String>,
}

/// A rendered page of a collection, independent of any terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub collection: Collection,
    pub headers: Vec<String>,
    pub rows: Vec<ListingRow>,
    pub page: PageInfo,
    pub status: ViewStatus,
    pub empty_message: String,
}

impl Listing {
    pub fn from_screen<R, S>(
        collection: Collection,
        screen: &ListScreen<R, S>,
        config: &DeskConfig,
    ) -> Self
    where
        R: Tabular,
        S: CollectionStore<R>,
    {
        let view = screen.view();
        Self {
            collection,
            headers: R::COLUMNS.iter().map(|(h, _)| h.to_string()).collect(),
            rows: view
                .rows
                .iter()
                .map(|row| ListingRow {
                    ordinal: row.ordinal,
                    id: row.id,
                    cells: row.record.cells(),
                })
                .collect(),
            page: view.page,
            status: view.status,
            empty_message: config.empty_message.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listing: Option<Listing>,
    pub options: Vec<String>,
    pub outcomes: Vec<ScreenOutcome>,
    pub config: Option<DeskConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    pub fn with_outcomes(mut self, outcomes: Vec<ScreenOutcome>) -> Self {
        self.outcomes = outcomes;
        self
    }

    pub fn with_config(mut self, config: DeskConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::presets;

    #[test]
    fn child_filter_survives_when_given_before_parent() {
        let mut screen = presets::questions().unwrap();
        let filters = vec![
            ("chapter".to_string(), FilterValue::many(["Optics"])),
            ("subject".to_string(), FilterValue::one("Physics")),
        ];
        apply_filters(&mut screen, &filters).unwrap();
        assert_eq!(screen.filters().get("chapter"), &FilterValue::many(["Optics"]));
        assert_eq!(screen.view().rows.len(), 3);
    }

    #[test]
    fn listing_uses_column_headers() {
        let screen = presets::colleges().unwrap();
        let listing = Listing::from_screen(Collection::Colleges, &screen, &DeskConfig::default());
        assert_eq!(listing.headers, vec!["S.no", "College Name"]);
        assert_eq!(listing.rows[0].cells, vec!["1", "Harvard University"]);
        assert_eq!(listing.rows.len(), 10);
    }

    #[test]
    fn error_messages_mark_the_result() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("fine"));
        assert!(!result.has_errors());
        result.add_message(CmdMessage::error("bad"));
        assert!(result.has_errors());
    }
}
