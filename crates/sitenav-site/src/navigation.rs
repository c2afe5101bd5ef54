//! Read-only lookups over a [`SiteConfig`].
//!
//! Routes are compared after normalization, so `/blog` and `/blog/` refer to
//! the same page.

use serde::Serialize;
use sitenav_config::{NavItem, SidebarGroup, SiteConfig};

/// Previous and next sidebar entries around a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Neighbors<'a> {
    /// Entry before the page in sidebar order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<&'a NavItem>,
    /// Entry after the page in sidebar order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<&'a NavItem>,
}

/// Borrowed navigation view of a site.
#[derive(Clone, Copy, Debug)]
pub struct Navigation<'a> {
    site: &'a SiteConfig,
}

impl<'a> Navigation<'a> {
    /// Create a navigation view.
    #[must_use]
    pub fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    /// First sidebar group that links to `path`.
    #[must_use]
    pub fn group_for(&self, path: &str) -> Option<&'a SidebarGroup> {
        let route = normalize_route(path);
        self.site.sidebar.iter().find(|group| {
            group
                .items
                .iter()
                .any(|item| normalize_route(&item.path) == route)
        })
    }

    /// Previous and next entries in flattened sidebar order.
    ///
    /// Crosses group boundaries. Returns empty neighbors for routes that are
    /// not in the sidebar.
    #[must_use]
    pub fn neighbors(&self, path: &str) -> Neighbors<'a> {
        let route = normalize_route(path);
        let items: Vec<&'a NavItem> = self
            .site
            .sidebar
            .iter()
            .flat_map(|group| group.items.iter())
            .collect();

        let Some(idx) = items
            .iter()
            .position(|item| normalize_route(&item.path) == route)
        else {
            return Neighbors::default();
        };

        Neighbors {
            prev: idx.checked_sub(1).and_then(|i| items.get(i).copied()),
            next: items.get(idx + 1).copied(),
        }
    }

    /// Link target for `path` with the site's base path applied.
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        match self.site.base_path.as_deref() {
            Some(base) if base != "/" => format!("{}{path}", base.trim_end_matches('/')),
            _ => path.to_owned(),
        }
    }

    /// Whether `item` is the page at `current`.
    #[must_use]
    pub fn is_current(item: &NavItem, current: Option<&str>) -> bool {
        current.is_some_and(|current| normalize_route(&item.path) == normalize_route(current))
    }
}

/// Strip the trailing slash from a route, keeping `/` for the root.
pub(crate) fn normalize_route(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
