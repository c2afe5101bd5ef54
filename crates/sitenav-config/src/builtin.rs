//! Built-in site navigation, used when no `sitenav.toml` is found.

use crate::site::{NavItem, SidebarGroup, SiteConfig, SocialIcon, SocialLink};

impl SiteConfig {
    /// The site's own navigation structure and metadata.
    ///
    /// Pure data: no parameters, no I/O, and every call returns an equal value.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            title: "Algorithm Notes".to_owned(),
            description: "Notes on data structures, algorithms and competitive programming"
                .to_owned(),
            base_path: None,
            top_nav: vec![
                NavItem::new("Home", "/"),
                NavItem::new("Notes", "/dsa/binary-search"),
                NavItem::new("Blog", "/blog/"),
                NavItem::new("About", "/about"),
            ],
            sidebar: vec![SidebarGroup::new(
                "Data Structures and Algorithms",
                vec![
                    NavItem::new("Binary Search", "/dsa/binary-search"),
                    NavItem::new("Disjoint Set Union", "/dsa/dsu"),
                ],
            )],
            social_links: vec![SocialLink::new(
                SocialIcon::Github,
                "https://github.com/algorithm-notes",
            )],
        }
    }
}
