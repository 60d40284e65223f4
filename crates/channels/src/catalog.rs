// ABOUTME: Ingestion of the channel catalog from JSON or the generated channels.js script.
// ABOUTME: Also provides numeric group ordering with parseFloat-compatible prefix parsing.

use std::cmp::Ordering;
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::error::CatalogError;
use crate::models::{ChannelCatalog, ChannelGroup};
use crate::options::GroupOrder;

static ASSIGNMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:window\s*\.\s*)?releasesInfo\s*=\s*\{").unwrap());
static NUMERIC_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap());

impl ChannelCatalog {
    /// Parses a catalog from a JSON document.
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let catalog: ChannelCatalog = serde_json::from_str(data).map_err(CatalogError::parse)?;
        catalog.warn_on_duplicates();
        Ok(catalog)
    }

    /// Parses a catalog from the `channels.js` script loaded in the page head.
    ///
    /// The script assigns an object literal to `releasesInfo` (usually `window.releasesInfo`).
    /// Anything after the literal is ignored. A bare JSON document is accepted as well.
    pub fn from_script(script: &str) -> Result<Self, CatalogError> {
        let body = match ASSIGNMENT_RE.find(script) {
            // the match ends on the opening brace of the literal
            Some(m) => &script[m.end() - 1..],
            None if script.trim_start().starts_with('{') => script,
            None => {
                return Err(CatalogError::invalid(
                    "no releasesInfo assignment found in script",
                ))
            }
        };

        let mut stream = serde_json::Deserializer::from_str(body).into_iter::<ChannelCatalog>();
        let catalog = match stream.next() {
            Some(Ok(catalog)) => catalog,
            Some(Err(err)) => return Err(CatalogError::parse(err)),
            None => return Err(CatalogError::invalid("releasesInfo has no value")),
        };
        catalog.warn_on_duplicates();
        Ok(catalog)
    }

    /// Groups in the requested order. The catalog itself is left untouched.
    pub fn groups(&self, order: GroupOrder) -> Vec<&ChannelGroup> {
        let mut groups: Vec<&ChannelGroup> = self.menu_channels.iter().flatten().collect();
        if order == GroupOrder::NumericDescending {
            // sort_by is stable, so equal groups keep catalog order
            groups.sort_by(|a, b| compare_descending(group_number(&a.group), group_number(&b.group)));
        }
        groups
    }

    fn warn_on_duplicates(&self) {
        for group in self.menu_channels.iter().flatten() {
            let mut seen = HashSet::new();
            for entry in &group.channels {
                if !seen.insert(entry.name.as_str()) {
                    warn!(
                        group = %group.group,
                        channel = %entry.name,
                        "duplicate channel entry in catalog group; first entry wins"
                    );
                }
            }
        }
    }
}

/// Numeric value of a group label, read the way `parseFloat` reads it: the longest
/// leading decimal number, ignoring anything after it. `None` when there is no number.
pub fn group_number(group: &str) -> Option<f64> {
    let caps = NUMERIC_PREFIX_RE.captures(group)?;
    caps.get(1)?.as_str().parse::<f64>().ok()
}

// Unparseable groups go last.
fn compare_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
