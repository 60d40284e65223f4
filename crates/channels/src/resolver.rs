// ABOUTME: Resolves the current release channel and builds the alternate-version menu.
// ABOUTME: Pure functions over the catalog, the page context, and the page path.

use tracing::debug;

use crate::doc_path::documentation_sub_path;
use crate::menu::{MenuEntry, Toggler, TogglerKind, VersionMenu};
use crate::models::{ChannelCatalog, ChannelGroup, CurrentContext};
use crate::options::MenuOptions;

/// Resolves the version menu for a page.
///
/// Returns `None` in local mode: no catalog, or a catalog lacking `menuChannels`
/// or `orderedChannels`. Calling this twice with the same inputs yields the same menu.
pub fn resolve(
    catalog: Option<&ChannelCatalog>,
    context: &CurrentContext,
    page_path: &str,
    opts: &MenuOptions,
) -> Option<VersionMenu> {
    let Some(catalog) = catalog else {
        debug!("releases catalog is not defined, assume local mode");
        return None;
    };
    let (Some(_), Some(ordered)) = (&catalog.menu_channels, &catalog.ordered_channels) else {
        debug!("releases catalog has no menu channels, assume local mode");
        return None;
    };

    let groups = catalog.groups(opts.group_order);
    let current_channel = resolve_channel(&groups, ordered, context, opts);
    let sub_path = documentation_sub_path(page_path);
    let entries = menu_entries(&groups, ordered, &current_channel, &sub_path, opts);
    let toggler = build_toggler(
        &current_channel,
        &context.release,
        !entries.is_empty(),
        page_path,
        opts,
    );

    debug!(
        channel = %current_channel,
        release = %context.release,
        alternates = entries.len(),
        "resolved version menu"
    );

    Some(VersionMenu {
        current_channel,
        current_release: context.release.clone(),
        entries,
        toggler,
    })
}

/// Determines the channel label for the page.
///
/// Only the root channel is inferred: the first group publishing the current release
/// in a non rock-solid channel wins, scanning channels in priority order. A group
/// publishing it only as rock-solid yields `"<group>-rock-solid"` but scanning goes on,
/// so a later group can still claim it. Any other channel is returned as is.
pub fn resolve_channel(
    groups: &[&ChannelGroup],
    ordered_channels: &[String],
    context: &CurrentContext,
    opts: &MenuOptions,
) -> String {
    if context.channel != opts.root_channel {
        return context.channel.clone();
    }

    let release = context.release.as_str();
    let mut resolved = context.channel.clone();

    for group in groups {
        let matched = ordered_channels
            .iter()
            .filter(|channel| **channel != opts.rock_solid_channel)
            .find(|channel| group.publishes(channel, release));

        if let Some(channel) = matched {
            return group.label(channel);
        }

        if group.publishes(&opts.rock_solid_channel, release) {
            resolved = group.label(&opts.rock_solid_channel);
        }
    }

    resolved
}

/// Builds the alternates in group order, then channel priority order.
///
/// Channels a group does not publish (or publishes with an empty version) are skipped,
/// as is the entry matching `current_channel`. The review channel is always listed.
pub fn menu_entries(
    groups: &[&ChannelGroup],
    ordered_channels: &[String],
    current_channel: &str,
    sub_path: &str,
    opts: &MenuOptions,
) -> Vec<MenuEntry> {
    let mut entries = Vec::new();

    for group in groups {
        for channel in ordered_channels {
            let is_review = *channel == opts.review_channel;
            let version = if is_review {
                opts.review_channel.as_str()
            } else {
                group.entry(channel).map(|e| e.version.as_str()).unwrap_or("")
            };
            if version.is_empty() {
                continue;
            }

            let label = group.label(channel);
            if label == current_channel {
                continue;
            }

            entries.push(MenuEntry {
                url: format!("/v{}{}", label, sub_path),
                label,
                channel: channel.clone(),
                release: (!is_review).then(|| version.to_string()),
            });
        }
    }

    entries
}

/// Builds the control that shows the current label and opens the dropdown.
pub fn build_toggler(
    current_channel: &str,
    current_release: &str,
    has_alternates: bool,
    page_path: &str,
    opts: &MenuOptions,
) -> Toggler {
    let kind = if !has_alternates {
        TogglerKind::Static
    } else if page_path == "/" {
        TogglerKind::Link {
            href: "/documentation/".to_string(),
        }
    } else {
        TogglerKind::Link {
            href: "#".to_string(),
        }
    };

    let text = if current_channel.is_empty() {
        opts.fallback_label.clone()
    } else {
        current_channel.to_string()
    };

    let shows_release = !current_channel.is_empty()
        && current_channel != opts.local_value
        && current_channel != opts.review_channel;

    Toggler {
        text,
        release: shows_release.then(|| current_release.to_string()),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChannelEntry;
    use crate::options::GroupOrder;

    fn ordered(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn root(release: &str) -> CurrentContext {
        CurrentContext::new(release, "root")
    }

    #[test]
    fn first_priority_channel_wins_within_group() {
        let group = ChannelGroup::new(
            "1.2",
            vec![
                ChannelEntry::new("beta", "v1.2.3"),
                ChannelEntry::new("alpha", "v1.2.3"),
            ],
        );
        let label = resolve_channel(
            &[&group],
            &ordered(&["alpha", "beta", "rock-solid"]),
            &root("v1.2.3"),
            &MenuOptions::default(),
        );
        assert_eq!(label, "1.2-alpha");
    }

    #[test]
    fn rock_solid_is_a_fallback_only() {
        let group = ChannelGroup::new(
            "1.1",
            vec![
                ChannelEntry::new("rock-solid", "v1.1.9"),
                ChannelEntry::new("stable", "v1.1.9"),
            ],
        );
        let label = resolve_channel(
            &[&group],
            &ordered(&["rock-solid", "stable"]),
            &root("v1.1.9"),
            &MenuOptions::default(),
        );
        assert_eq!(label, "1.1-stable");

        let only_rock_solid = ChannelGroup::new("1.1", vec![ChannelEntry::new("rock-solid", "v1.1.9")]);
        let label = resolve_channel(
            &[&only_rock_solid],
            &ordered(&["stable", "rock-solid"]),
            &root("v1.1.9"),
            &MenuOptions::default(),
        );
        assert_eq!(label, "1.1-rock-solid");
    }

    #[test]
    fn later_group_overrides_rock_solid_fallback() {
        let old = ChannelGroup::new("1.1", vec![ChannelEntry::new("rock-solid", "v1.1.9")]);
        let new = ChannelGroup::new("1.2", vec![ChannelEntry::new("alpha", "v1.1.9")]);
        let label = resolve_channel(
            &[&old, &new],
            &ordered(&["alpha", "rock-solid"]),
            &root("v1.1.9"),
            &MenuOptions::default(),
        );
        assert_eq!(label, "1.2-alpha");
    }

    #[test]
    fn non_matching_rock_solid_entry_does_not_change_label() {
        // A group merely having a rock-solid entry is not enough; its version must match.
        let group = ChannelGroup::new("1.1", vec![ChannelEntry::new("rock-solid", "v1.1.0")]);
        let label = resolve_channel(
            &[&group],
            &ordered(&["alpha", "rock-solid"]),
            &root("v9.9.9"),
            &MenuOptions::default(),
        );
        assert_eq!(label, "root");
    }

    #[test]
    fn static_toggler_without_alternates() {
        let toggler = build_toggler("1.2-alpha", "v1.2.0", false, "/", &MenuOptions::default());
        assert_eq!(toggler.kind, TogglerKind::Static);
        assert_eq!(toggler.release.as_deref(), Some("v1.2.0"));
    }

    #[test]
    fn toggler_link_depends_on_page() {
        let opts = MenuOptions::default();
        let home = build_toggler("1.2-alpha", "v1.2.0", true, "/", &opts);
        assert_eq!(
            home.kind,
            TogglerKind::Link {
                href: "/documentation/".into()
            }
        );
        let page = build_toggler("1.2-alpha", "v1.2.0", true, "/documentation/", &opts);
        assert_eq!(page.kind, TogglerKind::Link { href: "#".into() });
    }

    #[test]
    fn toggler_hides_release_for_local_and_review() {
        let opts = MenuOptions::default();
        assert_eq!(build_toggler("local", "local", true, "/", &opts).release, None);
        assert_eq!(build_toggler("review", "v1", true, "/", &opts).release, None);

        let empty = build_toggler("", "v1", false, "/", &opts);
        assert_eq!(empty.text, "Versions");
        assert_eq!(empty.release, None);
    }

    #[test]
    fn sorted_order_applies_to_inference_and_menu() {
        let catalog = ChannelCatalog::new(
            vec![
                ChannelGroup::new("1.1", vec![ChannelEntry::new("beta", "v1.2.0")]),
                ChannelGroup::new("1.2", vec![ChannelEntry::new("alpha", "v1.2.0")]),
            ],
            ordered(&["alpha", "beta"]),
        );
        let opts = MenuOptions::builder()
            .group_order(GroupOrder::NumericDescending)
            .build();
        let menu = resolve(Some(&catalog), &root("v1.2.0"), "/", &opts).unwrap();
        assert_eq!(menu.current_channel, "1.2-alpha");
        let labels: Vec<&str> = menu.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["1.1-beta"]);

        let menu = resolve(Some(&catalog), &root("v1.2.0"), "/", &MenuOptions::default()).unwrap();
        assert_eq!(menu.current_channel, "1.1-beta");
    }
}
