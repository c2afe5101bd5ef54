//! Site navigation data model.
//!
//! Field names follow the TOML file (`snake_case`). When serialized, the
//! site-level fields switch to the names the external renderer expects
//! (`basePath`, `topNav`, `socialLinks`). Those renderer names are also
//! accepted when deserializing, so an exported manifest can be read back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A labelled link to a site-relative route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label.
    pub label: String,
    /// Site-relative route, starting with `/` (e.g. `/dsa/binary-search`).
    pub path: String,
}

impl NavItem {
    /// Create a navigation item.
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Titled, ordered cluster of links shown in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub title: String,
    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl SidebarGroup {
    /// Create a sidebar group.
    pub fn new(title: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// Platform identifier for a social link icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Gitlab,
    Twitter,
    X,
    Mastodon,
    Linkedin,
    Discord,
    Youtube,
    Rss,
}

impl SocialIcon {
    /// Identifier as written in config files and manifests.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Mastodon => "mastodon",
            Self::Linkedin => "linkedin",
            Self::Discord => "discord",
            Self::Youtube => "youtube",
            Self::Rss => "rss",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound link to an external profile, rendered as an icon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform icon.
    pub icon: SocialIcon,
    /// Absolute external URL.
    pub url: String,
}

impl SocialLink {
    /// Create a social link.
    pub fn new(icon: SocialIcon, url: impl Into<String>) -> Self {
        Self {
            icon,
            url: url.into(),
        }
    }
}

/// Navigation structure and metadata of the site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title used in page metadata.
    pub title: String,
    /// Site description used in page metadata.
    pub description: String,
    /// Prefix for generated routes (e.g. `/notes/`). `None` means the
    /// renderer's default.
    #[serde(
        rename(serialize = "basePath"),
        alias = "basePath",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_path: Option<String>,
    /// Primary navigation bar.
    #[serde(rename(serialize = "topNav"), alias = "topNav")]
    pub top_nav: Vec<NavItem>,
    /// Sidebar groups in display order.
    pub sidebar: Vec<SidebarGroup>,
    /// Outbound icon links.
    #[serde(rename(serialize = "socialLinks"), alias = "socialLinks")]
    pub social_links: Vec<SocialLink>,
}

impl SiteConfig {
    /// All navigation items: top navigation first, then sidebar entries in
    /// group order.
    pub fn nav_items(&self) -> impl Iterator<Item = &NavItem> {
        self.top_nav
            .iter()
            .chain(self.sidebar.iter().flat_map(|group| group.items.iter()))
    }
}
