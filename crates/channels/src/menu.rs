// ABOUTME: Output types of menu resolution: VersionMenu, MenuEntry, Toggler.
// ABOUTME: These are what the header renderer (or any other sink) consumes.

use serde::Serialize;

/// A link to the same documentation page in another group-channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// `"<group>-<channel>"`.
    pub label: String,
    pub url: String,
    pub channel: String,
    /// Release published in the channel. `None` for the review channel, which shows no text.
    pub release: Option<String>,
}

impl MenuEntry {
    /// `"<label> — <release>"`, or `None` when the entry carries no text.
    pub fn display_text(&self) -> Option<String> {
        self.release
            .as_ref()
            .map(|release| format!("{} — {}", self.label, release))
    }
}

/// What the toggler control is rendered as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TogglerKind {
    /// Opens the dropdown; shown only when alternates exist.
    Link { href: String },
    /// Plain label with no dropdown.
    Static,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toggler {
    pub text: String,
    /// Release appended after the label, if any.
    pub release: Option<String>,
    #[serde(flatten)]
    pub kind: TogglerKind,
}

/// Result of resolving the version menu for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionMenu {
    /// Resolved channel label (`"1.2-alpha"`, or the raw channel when nothing was inferred).
    pub current_channel: String,
    pub current_release: String,
    /// Alternates in display order; never contains `current_channel`.
    pub entries: Vec<MenuEntry>,
    pub toggler: Toggler,
}

impl VersionMenu {
    /// True when there is at least one alternate, i.e. a dropdown should be shown.
    pub fn has_alternates(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Label shown on the toggler.
    pub fn display_label(&self) -> &str {
        &self.toggler.text
    }
}
