//! Checks navigation routes against a markdown content directory.
//!
//! A route resolves to `<route>.md` or `<route>/index.md` under the content
//! directory. The root route `/` resolves to `index.md`.

use std::path::{Path, PathBuf};

use serde::Serialize;
use sitenav_config::SiteConfig;

use crate::navigation::normalize_route;

/// Error returned when the content directory itself is unusable.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content directory not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// A navigation entry whose route has no matching page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissingRoute {
    /// Where the entry lives (`top_nav` or the sidebar group title).
    pub location: String,
    /// Entry label.
    pub label: String,
    /// Unresolved route.
    pub path: String,
}

/// Result of [`check_routes`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RouteReport {
    /// Number of entries checked.
    pub checked: usize,
    /// Entries without a page, in navigation order.
    pub missing: Vec<MissingRoute>,
}

impl RouteReport {
    /// Whether every route resolved.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Resolve every top navigation and sidebar route against `content_dir`.
///
/// # Errors
///
/// Returns `ContentError::NotFound` if `content_dir` is not a directory.
pub fn check_routes(site: &SiteConfig, content_dir: &Path) -> Result<RouteReport, ContentError> {
    if !content_dir.is_dir() {
        return Err(ContentError::NotFound(content_dir.to_path_buf()));
    }

    let entries = site
        .top_nav
        .iter()
        .map(|item| ("top_nav", item))
        .chain(site.sidebar.iter().flat_map(|group| {
            group
                .items
                .iter()
                .map(move |item| (group.title.as_str(), item))
        }));

    let mut report = RouteReport::default();
    for (location, item) in entries {
        report.checked += 1;
        if let Some(page) = resolve_route(content_dir, &item.path) {
            tracing::debug!(route = %item.path, page = %page.display(), "Route resolved");
        } else {
            tracing::warn!(route = %item.path, label = %item.label, "No page for route");
            report.missing.push(MissingRoute {
                location: location.to_owned(),
                label: item.label.clone(),
                path: item.path.clone(),
            });
        }
    }

    Ok(report)
}

/// Find the markdown page backing `route`, if any.
///
/// Routes with `.` or `..` segments never resolve, so a page outside
/// `content_dir` cannot satisfy the check.
fn resolve_route(content_dir: &Path, route: &str) -> Option<PathBuf> {
    let relative = normalize_route(route).trim_start_matches('/');
    if relative
        .split('/')
        .any(|segment| segment == "." || segment == "..")
    {
        return None;
    }
    if relative.is_empty() {
        let index = content_dir.join("index.md");
        return index.is_file().then_some(index);
    }

    let page = content_dir.join(format!("{relative}.md"));
    if page.is_file() {
        return Some(page);
    }
    let index = content_dir.join(relative).join("index.md");
    index.is_file().then_some(index)
}
