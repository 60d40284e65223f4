// ABOUTME: Renders a resolved VersionMenu to the site's header markup.
// ABOUTME: Output is passed through an ammonia policy restricted to the menu's tags and attributes.

use crate::menu::{TogglerKind, VersionMenu};

/// Id of the header element the menu is mounted in.
pub const MENU_ELEMENT_ID: &str = "doc-versions-menu";

/// Renders the version menu.
///
/// With alternates the toggler is a link followed by the submenu; without, the toggler
/// is a static span and no submenu is emitted.
pub fn render_menu_html(menu: &VersionMenu) -> String {
    let mut html = String::new();

    let container_class = if menu.has_alternates() {
        "header__menu-item header__menu-item_parent"
    } else {
        "header__menu-item"
    };
    html.push_str(&format!(
        r#"<div id="{}" class="{}">"#,
        MENU_ELEMENT_ID, container_class
    ));

    let toggler = &menu.toggler;
    let extra = toggler
        .release
        .as_ref()
        .map(|release| {
            format!(
                r#"<span class="header__menu-item-extra"> – {}</span>"#,
                escape_text(release)
            )
        })
        .unwrap_or_default();
    match &toggler.kind {
        TogglerKind::Link { href } => html.push_str(&format!(
            r#"<a href="{}">{}{}</a>"#,
            escape_attr(href),
            escape_text(&toggler.text),
            extra
        )),
        TogglerKind::Static => html.push_str(&format!(
            r#"<span class="header__menu-item-static">{}{}</span>"#,
            escape_text(&toggler.text),
            extra
        )),
    }

    if menu.has_alternates() {
        html.push_str(r#"<div class="header__submenu-container"><ul class="header__submenu">"#);
        for entry in &menu.entries {
            html.push_str(r#"<li class="header__submenu-item">"#);
            html.push_str(&format!(r#"<a href="{}">"#, escape_attr(&entry.url)));
            if let Some(release) = &entry.release {
                html.push_str(&format!(
                    r#"<span class="header__submenu-item-channel"> {}</span>"#,
                    escape_text(&entry.label)
                ));
                html.push_str(&format!(
                    r#"<span class="header__submenu-item-release"> — {}</span>"#,
                    escape_text(release)
                ));
            }
            html.push_str("</a></li>");
        }
        html.push_str("</ul></div>");
    }

    html.push_str("</div>");
    sanitize_menu_html(&html)
}

/// Strip anything that is not part of the menu markup.
fn sanitize_menu_html(html: &str) -> String {
    let mut builder = ammonia::Builder::new();
    builder.tags(["div", "ul", "li", "a", "span"].iter().copied().collect());
    builder.add_tag_attributes("div", &["class", "id"]);
    builder.add_tag_attributes("ul", &["class"]);
    builder.add_tag_attributes("li", &["class"]);
    builder.add_tag_attributes("span", &["class"]);
    builder.add_tag_attributes("a", &["href"]);
    builder.link_rel(None).clean(html).to_string()
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
