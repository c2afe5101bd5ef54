//! HTML fragments for site navigation.
//!
//! Markup carries classes only; styling belongs to the site theme.

use std::fmt::Write;

use sitenav_config::{NavItem, SiteConfig};

use crate::navigation::Navigation;

/// Render top navigation, sidebar and social links as one fragment.
///
/// `current` is the route of the page being rendered; its links get
/// `aria-current="page"`.
pub fn render_navigation(site: &SiteConfig, current: Option<&str>) -> String {
    let mut output = String::with_capacity(2048);
    output.push_str(&render_top_nav(site, current));
    output.push_str(&render_sidebar(site, current));
    output.push_str(&render_social_links(site));
    output
}

/// Render the primary navigation bar.
pub fn render_top_nav(site: &SiteConfig, current: Option<&str>) -> String {
    let nav = Navigation::new(site);
    let mut output = String::with_capacity(512);

    output.push_str("<nav class=\"top-nav\">\n<ul>\n");
    for item in &site.top_nav {
        render_link_item(&mut output, &nav, item, current);
    }
    output.push_str("</ul>\n</nav>\n");

    output
}

/// Render sidebar groups in order, each as a headed list of links.
pub fn render_sidebar(site: &SiteConfig, current: Option<&str>) -> String {
    let nav = Navigation::new(site);
    let mut output = String::with_capacity(1024);

    output.push_str("<nav class=\"sidebar\">\n");
    for group in &site.sidebar {
        let open = group
            .items
            .iter()
            .any(|item| Navigation::is_current(item, current));
        let _ = writeln!(
            output,
            r#"<section class="sidebar-group{}">"#,
            if open { " open" } else { "" }
        );
        let _ = writeln!(output, "<h2>{}</h2>", escape_html(&group.title));
        output.push_str("<ul>\n");
        for item in &group.items {
            render_link_item(&mut output, &nav, item, current);
        }
        output.push_str("</ul>\n</section>\n");
    }
    output.push_str("</nav>\n");

    output
}

/// Render outbound social links as icon anchors.
pub fn render_social_links(site: &SiteConfig) -> String {
    let mut output = String::with_capacity(256);

    output.push_str("<ul class=\"social-links\">\n");
    for link in &site.social_links {
        let _ = writeln!(
            output,
            r#"<li><a class="social-icon social-icon-{icon}" href="{}" aria-label="{icon}" rel="noopener">{icon}</a></li>"#,
            escape_html(&link.url),
            icon = link.icon,
        );
    }
    output.push_str("</ul>\n");

    output
}

fn render_link_item(
    output: &mut String,
    nav: &Navigation<'_>,
    item: &NavItem,
    current: Option<&str>,
) {
    let aria = if Navigation::is_current(item, current) {
        r#" aria-current="page""#
    } else {
        ""
    };
    let _ = writeln!(
        output,
        r#"<li><a href="{}"{aria}>{}</a></li>"#,
        escape_html(&nav.href(&item.path)),
        escape_html(&item.label)
    );
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
