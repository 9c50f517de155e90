//! Dropdown option lists.

use serde::{Deserialize, Serialize};

/// One entry of a searchable select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Options whose id and name are both the value itself.
    pub fn from_names<I, S>(names: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(|n| {
                let n = n.into();
                Self::new(n.clone(), n)
            })
            .collect()
    }
}

/// Options whose name contains `term`, ignoring case. A blank term keeps everything.
pub fn search_options<'a>(options: &'a [SelectOption], term: &str) -> Vec<&'a SelectOption> {
    let needle = term.trim().to_lowercase();
    options
        .iter()
        .filter(|o| needle.is_empty() || o.name.to_lowercase().contains(&needle))
        .collect()
}

/// Multi-select click: remove `value` if selected, append it otherwise.
pub fn toggle(selected: &mut Vec<String>, value: &str) {
    if let Some(pos) = selected.iter().position(|s| s == value) {
        selected.remove(pos);
    } else {
        selected.push(value.to_string());
    }
}
