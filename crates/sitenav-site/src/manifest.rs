//! JSON manifest handed to the external site generator.

use sitenav_config::SiteConfig;

/// Serialize the site as pretty-printed JSON using the renderer's field names
/// (`basePath`, `topNav`, `sidebar`, `socialLinks`).
pub fn to_json(site: &SiteConfig) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(site)
}
