// ABOUTME: Extracts the page context (current release, channel, path) from a rendered docs page.
// ABOUTME: Reads the release/channel marker elements with scraper and the path from the page location.

use docsnav_channels::CurrentContext;
use scraper::{Html, Selector};
use url::Url;

/// Ids of the elements the site layout prints the build's release and channel into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContextOptions {
    pub release_element_id: String,
    pub channel_element_id: String,
}

impl Default for PageContextOptions {
    fn default() -> Self {
        Self {
            release_element_id: "werfVersion".to_string(),
            channel_element_id: "werfChannel".to_string(),
        }
    }
}

/// Everything the version menu needs to know about the page being viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub context: CurrentContext,
    pub path: String,
}

impl PageContext {
    /// Reads the context from page HTML using the default element ids.
    pub fn from_html(html: &str, location: &str) -> Self {
        Self::from_html_with(html, location, &PageContextOptions::default())
    }

    pub fn from_html_with(html: &str, location: &str, opts: &PageContextOptions) -> Self {
        let doc = Html::parse_document(html);
        let release = element_text(&doc, &opts.release_element_id);
        let channel = element_text(&doc, &opts.channel_element_id);
        Self {
            context: CurrentContext::from_optional(release, channel),
            path: location_path(location),
        }
    }
}

/// Text content of the element with the given id, if present.
fn element_text(doc: &Html, id: &str) -> Option<String> {
    let selector = Selector::parse(&format!("#{}", id)).ok()?;
    doc.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
}

/// Path component of a location: absolute URLs are parsed, anything else is taken
/// as a path with its query and fragment dropped.
pub fn location_path(location: &str) -> String {
    if let Ok(url) = Url::parse(location) {
        return url.path().to_string();
    }
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}
