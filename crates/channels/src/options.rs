// ABOUTME: Configuration for version menu resolution including GroupOrder, MenuOptions, and MenuOptionsBuilder.
// ABOUTME: Holds the sentinel channel names and labels the resolver matches against.

use std::fmt;

use crate::models::LOCAL;

/// Order in which catalog groups are scanned and listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupOrder {
    /// Groups exactly as they appear in the catalog.
    #[default]
    Catalog,
    /// Newest family first, by the numeric value of the group label.
    NumericDescending,
}

impl fmt::Display for GroupOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GroupOrder::Catalog => "catalog",
            GroupOrder::NumericDescending => "numeric-descending",
        };
        write!(f, "{}", s)
    }
}

impl From<&str> for GroupOrder {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "numeric" | "numeric-descending" | "sorted" | "desc" => GroupOrder::NumericDescending,
            _ => GroupOrder::Catalog,
        }
    }
}

/// Options controlling how the current channel is inferred and how the menu is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOptions {
    /// Raw channel value meaning "infer the channel from the release".
    pub root_channel: String,
    /// Channel only considered as a fallback during inference.
    pub rock_solid_channel: String,
    /// Channel that always links, with no release text.
    pub review_channel: String,
    /// Value pages carry when built outside of a release.
    pub local_value: String,
    /// Shown on the toggler when no label could be determined.
    pub fallback_label: String,
    pub group_order: GroupOrder,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            root_channel: "root".to_string(),
            rock_solid_channel: "rock-solid".to_string(),
            review_channel: "review".to_string(),
            local_value: LOCAL.to_string(),
            fallback_label: "Versions".to_string(),
            group_order: GroupOrder::Catalog,
        }
    }
}

impl MenuOptions {
    pub fn builder() -> MenuOptionsBuilder {
        MenuOptionsBuilder::new()
    }
}

/// Fluent builder for [`MenuOptions`].
#[derive(Debug, Clone, Default)]
pub struct MenuOptionsBuilder {
    opts: MenuOptions,
}

impl MenuOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            opts: MenuOptions::default(),
        }
    }

    pub fn root_channel(mut self, name: impl Into<String>) -> Self {
        self.opts.root_channel = name.into();
        self
    }

    pub fn rock_solid_channel(mut self, name: impl Into<String>) -> Self {
        self.opts.rock_solid_channel = name.into();
        self
    }

    pub fn review_channel(mut self, name: impl Into<String>) -> Self {
        self.opts.review_channel = name.into();
        self
    }

    pub fn local_value(mut self, value: impl Into<String>) -> Self {
        self.opts.local_value = value.into();
        self
    }

    pub fn fallback_label(mut self, label: impl Into<String>) -> Self {
        self.opts.fallback_label = label.into();
        self
    }

    /// Set the order groups are scanned and listed in.
    pub fn group_order(mut self, order: GroupOrder) -> Self {
        self.opts.group_order = order;
        self
    }

    pub fn build(self) -> MenuOptions {
        self.opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let opts = MenuOptions::builder()
            .fallback_label("Releases")
            .group_order(GroupOrder::NumericDescending)
            .build();
        assert_eq!(opts.fallback_label, "Releases");
        assert_eq!(opts.group_order, GroupOrder::NumericDescending);
        assert_eq!(opts.root_channel, "root");
    }

    #[test]
    fn group_order_from_str() {
        assert_eq!(GroupOrder::from("sorted"), GroupOrder::NumericDescending);
        assert_eq!(GroupOrder::from("whatever"), GroupOrder::Catalog);
        assert_eq!(GroupOrder::NumericDescending.to_string(), "numeric-descending");
    }
}
