// ABOUTME: Persists which tab or pill was last shown in each tab container of a docs page.
// ABOUTME: Computes which tabs to activate when the page is shown again.

use std::collections::BTreeMap;

use scraper::{Html, Selector};
use serde::Serialize;
use tracing::warn;

use crate::error::StoreError;
use crate::store::KeyValueStore;

/// Store key holding the JSON object `{ containerId: href }`.
pub const TABS_STATE_KEY: &str = "tabs-state";

pub type TabsState = BTreeMap<String, String>;

/// A `ul.nav-tabs` / `ul.nav-pills` list and the hrefs of its tabs, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabContainer {
    /// Lists without an id never have saved state and always show their first tab.
    pub id: Option<String>,
    pub tabs: Vec<String>,
}

impl TabContainer {
    pub fn new(id: impl Into<String>, tabs: Vec<String>) -> Self {
        Self {
            id: Some(id.into()),
            tabs,
        }
    }

    pub fn anonymous(tabs: Vec<String>) -> Self {
        Self { id: None, tabs }
    }
}

/// A tab to show after the page loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabActivation {
    pub container_id: Option<String>,
    pub href: String,
    /// True when the tab comes from saved state rather than being the default first tab.
    pub restored: bool,
}

/// Reads the saved state. Unreadable JSON is treated as no state.
pub fn load_state<S: KeyValueStore + ?Sized>(store: &S) -> Result<TabsState, StoreError> {
    let Some(raw) = store.get(TABS_STATE_KEY)? else {
        return Ok(TabsState::new());
    };
    match serde_json::from_str(&raw) {
        Ok(state) => Ok(state),
        Err(err) => {
            warn!(error = %err, "ignoring unreadable tabs state");
            Ok(TabsState::new())
        }
    }
}

/// Records that `href` was shown in the container `container_id`.
pub fn record_shown<S: KeyValueStore + ?Sized>(
    store: &mut S,
    container_id: &str,
    href: &str,
) -> Result<(), StoreError> {
    let mut state = load_state(store)?;
    state.insert(container_id.to_string(), href.to_string());
    let encoded = serde_json::to_string(&state).map_err(|e| StoreError::corrupt(TABS_STATE_KEY, e))?;
    store.set(TABS_STATE_KEY, &encoded)
}

/// Tabs to activate, in container order.
///
/// A container with saved state gets its saved tab back, or nothing when that tab no
/// longer exists. A container without saved state (no id, no entry, or an empty saved
/// href) shows its first tab.
pub fn restore<S: KeyValueStore + ?Sized>(
    store: &S,
    containers: &[TabContainer],
) -> Result<Vec<TabActivation>, StoreError> {
    let state = load_state(store)?;
    let mut activations = Vec::new();

    for container in containers {
        let saved = container
            .id
            .as_ref()
            .and_then(|id| state.get(id))
            .filter(|href| !href.is_empty());
        match saved {
            Some(saved) => {
                if container.tabs.iter().any(|t| t == saved) {
                    activations.push(TabActivation {
                        container_id: container.id.clone(),
                        href: saved.clone(),
                        restored: true,
                    });
                }
            }
            None => {
                if let Some(first) = container.tabs.first() {
                    activations.push(TabActivation {
                        container_id: container.id.clone(),
                        href: first.clone(),
                        restored: false,
                    });
                }
            }
        }
    }

    Ok(activations)
}

/// Finds the tab containers of a page, including lists without an id.
pub fn tab_containers(html: &str) -> Vec<TabContainer> {
    let doc = Html::parse_document(html);
    let (Ok(lists), Ok(links)) = (
        Selector::parse("ul.nav.nav-pills, ul.nav.nav-tabs"),
        Selector::parse(r#"a[data-toggle="tab"], a[data-toggle="pill"]"#),
    ) else {
        return Vec::new();
    };

    doc.select(&lists)
        .map(|list| {
            let id = list.value().id().map(str::to_string);
            let tabs = list
                .select(&links)
                .filter_map(|a| a.value().attr("href"))
                .map(str::to_string)
                .collect();
            TabContainer { id, tabs }
        })
        .collect()
}
