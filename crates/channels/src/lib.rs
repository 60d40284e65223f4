// ABOUTME: Release channel resolution and version menu building for the documentation site.
// ABOUTME: Re-exports the catalog model, ingestion, resolver, menu types, and HTML rendering.

//! docsnav-channels - resolves which release channel a documentation page belongs to
//! and which other group-channels it can link to.
//!
//! # Example
//!
//! ```
//! use docsnav_channels::{resolve, ChannelCatalog, CurrentContext, MenuOptions};
//!
//! let catalog = ChannelCatalog::from_json(r#"{
//!     "menuChannels": [{"group": "1.2", "channels": [
//!         {"name": "alpha", "version": "v1.2.0"},
//!         {"name": "beta", "version": "v1.2.0-beta.1"}
//!     ]}],
//!     "orderedChannels": ["alpha", "beta", "rock-solid"]
//! }"#).unwrap();
//!
//! let context = CurrentContext::new("v1.2.0", "root");
//! let menu = resolve(Some(&catalog), &context, "/documentation/index.html", &MenuOptions::default())
//!     .expect("catalog present");
//! assert_eq!(menu.current_channel, "1.2-alpha");
//! assert_eq!(menu.entries[0].url, "/v1.2-beta/documentation/index.html");
//! ```

pub mod catalog;
pub mod doc_path;
pub mod error;
pub mod menu;
pub mod models;
pub mod options;
pub mod render;
pub mod resolver;

pub use catalog::group_number;
pub use doc_path::{documentation_sub_path, DEFAULT_SUB_PATH};
pub use error::CatalogError;
pub use menu::{MenuEntry, Toggler, TogglerKind, VersionMenu};
pub use models::{ChannelCatalog, ChannelEntry, ChannelGroup, CurrentContext, LOCAL};
pub use options::{GroupOrder, MenuOptions, MenuOptionsBuilder};
pub use render::{render_menu_html, MENU_ELEMENT_ID};
pub use resolver::{build_toggler, menu_entries, resolve, resolve_channel};
