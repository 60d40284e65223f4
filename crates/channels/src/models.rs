// ABOUTME: Typed records for the release-channel catalog published with the docs site.
// ABOUTME: Mirrors the releasesInfo object (menuChannels/orderedChannels) plus the page's current release.

use serde::{Deserialize, Serialize};

/// Value used for the current release and channel when the page does not carry one.
pub const LOCAL: &str = "local";

/// A single channel inside a version family, e.g. `{ name: "beta", version: "v1.2.3" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEntry {
    #[serde(default)]
    pub name: String,
    /// Empty when the catalog omits it; an empty version never matches and never produces a link.
    #[serde(default)]
    pub version: String,
}

impl ChannelEntry {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A version family (`"1.2"`) and the channels published for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelGroup {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub channels: Vec<ChannelEntry>,
}

impl ChannelGroup {
    pub fn new(group: impl Into<String>, channels: Vec<ChannelEntry>) -> Self {
        Self {
            group: group.into(),
            channels,
        }
    }

    /// First entry carrying the given channel name.
    pub fn entry(&self, channel: &str) -> Option<&ChannelEntry> {
        self.channels.iter().find(|e| e.name == channel)
    }

    /// True if some entry has both the given name and version.
    pub fn publishes(&self, channel: &str, release: &str) -> bool {
        self.channels
            .iter()
            .any(|e| e.name == channel && e.version == release)
    }

    /// `"<group>-<channel>"`, the label used for menu entries and the resolved channel.
    pub fn label(&self, channel: &str) -> String {
        format!("{}-{}", self.group, channel)
    }
}

/// The whole catalog as generated at build time.
///
/// Both lists are optional: a catalog lacking either one puts the page in local mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelCatalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_channels: Option<Vec<ChannelGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_channels: Option<Vec<String>>,
}

impl ChannelCatalog {
    pub fn new(groups: Vec<ChannelGroup>, ordered_channels: Vec<String>) -> Self {
        Self {
            menu_channels: Some(groups),
            ordered_channels: Some(ordered_channels),
        }
    }
}

/// Release and channel the current page was built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentContext {
    pub release: String,
    pub channel: String,
}

impl CurrentContext {
    /// Builds a context, substituting `"local"` for blank values.
    pub fn new(release: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            release: or_local(release.into()),
            channel: or_local(channel.into()),
        }
    }

    /// Same as [`CurrentContext::new`] but accepting values that may be missing entirely.
    pub fn from_optional(release: Option<String>, channel: Option<String>) -> Self {
        Self::new(release.unwrap_or_default(), channel.unwrap_or_default())
    }
}

impl Default for CurrentContext {
    fn default() -> Self {
        Self::new(LOCAL, LOCAL)
    }
}

fn or_local(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        LOCAL.to_string()
    } else {
        trimmed.to_string()
    }
}
