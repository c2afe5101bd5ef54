//! Structural validation of [`SiteConfig`].

use std::collections::HashSet;

use crate::ConfigError;
use crate::site::{NavItem, SiteConfig};

impl SiteConfig {
    /// Validate the navigation structure.
    ///
    /// Returns the first violation, naming the offending field
    /// (e.g. `sidebar[0].items[1].path`). Empty sidebar groups and duplicate
    /// labels within a group are only logged as warnings.
    ///
    /// Routes are not checked against content here; see the `check_routes`
    /// helper in `sitenav-site` for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any check fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        self.validate_base_path()?;

        for (i, item) in self.top_nav.iter().enumerate() {
            validate_item(item, &format!("top_nav[{i}]"))?;
        }

        self.validate_sidebar()?;
        self.validate_social_links()?;
        Ok(())
    }

    fn validate_base_path(&self) -> Result<(), ConfigError> {
        let Some(base_path) = &self.base_path else {
            return Ok(());
        };
        if !base_path.starts_with('/') || !base_path.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "base_path must start and end with '/', got {base_path:?}"
            )));
        }
        require_site_route(base_path, "base_path")
    }

    fn validate_sidebar(&self) -> Result<(), ConfigError> {
        for (i, group) in self.sidebar.iter().enumerate() {
            let field = format!("sidebar[{i}]");
            require_non_empty(&group.title, &format!("{field}.title"))?;

            if group.items.is_empty() {
                tracing::warn!(group = %group.title, "Sidebar group has no items");
            }

            let mut labels = HashSet::new();
            for (j, item) in group.items.iter().enumerate() {
                validate_item(item, &format!("{field}.items[{j}]"))?;
                if !labels.insert(item.label.as_str()) {
                    tracing::warn!(
                        group = %group.title,
                        label = %item.label,
                        "Duplicate label in sidebar group"
                    );
                }
            }
        }
        Ok(())
    }

    fn validate_social_links(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, link) in self.social_links.iter().enumerate() {
            let field = format!("social_links[{i}].url");
            require_non_empty(&link.url, &field)?;
            require_http_url(&link.url, &field)?;
            if !seen.insert(link.icon) {
                return Err(ConfigError::Validation(format!(
                    "social_links[{i}].icon: duplicate icon '{}'",
                    link.icon
                )));
            }
        }
        Ok(())
    }
}

fn validate_item(item: &NavItem, field: &str) -> Result<(), ConfigError> {
    require_non_empty(&item.label, &format!("{field}.label"))?;
    require_non_empty(&item.path, &format!("{field}.path"))?;
    if !item.path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field}.path must start with '/', got {:?}",
            item.path
        )));
    }
    require_site_route(&item.path, &format!("{field}.path"))
}

/// Require a route to stay on this site: no `//host` prefix, no `.` or `..`
/// segments.
fn require_site_route(path: &str, field: &str) -> Result<(), ConfigError> {
    if path.starts_with("//") {
        return Err(ConfigError::Validation(format!(
            "{field} must be site-relative, got protocol-relative {path:?}"
        )));
    }
    if path.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain '.' or '..' segments, got {path:?}"
        )));
    }
    Ok(())
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}
