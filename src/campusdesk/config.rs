use crate::error::{DeskError, Result};
use crate::paginate::{ControlsPolicy, DEFAULT_ITEMS_PER_PAGE};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EMPTY_MESSAGE: &str = "No data found";

/// Overrides the platform config directory.
pub const HOME_ENV: &str = "CAMPUSDESK_HOME";

/// Display configuration, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeskConfig {
    /// Rows per page for new screens
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// Sizes offered by the page-size selector
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,

    /// Shown when active filters match nothing
    #[serde(default = "default_empty_message")]
    pub empty_message: String,

    #[serde(default)]
    pub controls: ControlsPolicy,
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 20, 50]
}

fn default_empty_message() -> String {
    DEFAULT_EMPTY_MESSAGE.to_string()
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            page_size_options: default_page_size_options(),
            empty_message: default_empty_message(),
            controls: ControlsPolicy::default(),
        }
    }
}

/// `$CAMPUSDESK_HOME` when set, else the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "campusdesk", "campusdesk")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DeskError::Api("Could not determine config dir".to_string()))
}

impl DeskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DeskConfig = serde_json::from_str(&content)?;
        Ok(config.sanitized())
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    fn sanitized(mut self) -> Self {
        if self.page_size_options.is_empty() || self.page_size_options.contains(&0) {
            warn!(options = ?self.page_size_options, "invalid page size options, using defaults");
            self.page_size_options = default_page_size_options();
        }
        if !self.page_size_options.contains(&self.items_per_page) {
            warn!(
                items_per_page = self.items_per_page,
                "items_per_page is not an offered page size, using default"
            );
            self.items_per_page = self
                .page_size_options
                .iter()
                .copied()
                .find(|&n| n == DEFAULT_ITEMS_PER_PAGE)
                .unwrap_or(self.page_size_options[0]);
        }
        if self.empty_message.trim().is_empty() {
            self.empty_message = default_empty_message();
        }
        self
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<()> {
        if items_per_page == 0 {
            return Err(DeskError::InvalidPageSize(items_per_page));
        }
        if !self.page_size_options.contains(&items_per_page) {
            return Err(DeskError::Api(format!(
                "items-per-page must be one of {}",
                self.page_size_list()
            )));
        }
        self.items_per_page = items_per_page;
        Ok(())
    }

    fn page_size_list(&self) -> String {
        self.page_size_options
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "items-per-page" => Some(self.items_per_page.to_string()),
            "page-size-options" => Some(self.page_size_list()),
            "empty-message" => Some(self.empty_message.clone()),
            "controls" => Some(
                match self.controls {
                    ControlsPolicy::Auto => "auto",
                    ControlsPolicy::Always => "always",
                }
                .to_string(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "items-per-page" => {
                let n = value
                    .trim()
                    .parse()
                    .map_err(|_| DeskError::Api(format!("Not a number: {}", value)))?;
                self.set_items_per_page(n)
            }
            "empty-message" if !value.trim().is_empty() => {
                self.empty_message = value.to_string();
                Ok(())
            }
            "controls" => {
                self.controls = match value {
                    "auto" => ControlsPolicy::Auto,
                    "always" => ControlsPolicy::Always,
                    other => {
                        return Err(DeskError::Api(format!(
                            "controls must be auto or always, got {}",
                            other
                        )))
                    }
                };
                Ok(())
            }
            _ => Err(DeskError::Api(format!("Unknown config key: {}", key))),
        }
    }

    pub const KEYS: [&'static str; 4] =
        ["items-per-page", "page-size-options", "empty-message", "controls"];
}
