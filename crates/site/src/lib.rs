// ABOUTME: Site-side helpers around the version menu: page context, tab state, and GitHub stats.
// ABOUTME: Re-exports PageContext, the KeyValueStore stores, tab restore logic, and GithubClient.

pub mod error;
pub mod github;
pub mod page;
pub mod store;
pub mod tabs;

pub use error::{StatsError, StoreError};
pub use github::{
    GithubClient, GithubClientBuilder, GithubOptions, Issue, IssueState, RoadmapStep,
    DEFAULT_API_BASE,
};
pub use page::{location_path, PageContext, PageContextOptions};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use tabs::{
    load_state, record_shown, restore, tab_containers, TabActivation, TabContainer, TabsState,
    TABS_STATE_KEY,
};
