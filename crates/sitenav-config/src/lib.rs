//! Site navigation configuration.
//!
//! Defines the [`SiteConfig`] value handed to the external site generator:
//! site metadata, the top navigation bar, grouped sidebar entries and social
//! links.
//!
//! The value comes from one of two places:
//! - a `sitenav.toml` file, either given explicitly or auto-discovered in the
//!   current directory and its parents;
//! - [`SiteConfig::builtin`], the site's own navigation literal, when no file
//!   is found.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values loaded from a file support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `title`
//! - `description`
//! - `base_path`
//! - `social_links[].url`

mod builtin;
mod expand;
mod site;
mod validate;

use std::path::{Path, PathBuf};

pub use site::{NavItem, SidebarGroup, SiteConfig, SocialIcon, SocialLink};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site title.
    pub title: Option<String>,
    /// Override route prefix.
    pub base_path: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "sitenav.toml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`social_links[0].url`").
        field: String,
        /// Error message (e.g., "${`GITHUB_USER`} is not set and has no default").
        message: String,
    },
}

/// A validated [`SiteConfig`] together with where it came from.
#[derive(Debug)]
pub struct LoadedConfig {
    /// The site navigation.
    pub site: SiteConfig,
    /// Path to the config file, or `None` for the built-in navigation.
    pub config_path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Load site navigation with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `sitenav.toml` in the current directory and parents, falling back
    /// to [`SiteConfig::builtin`].
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over file values. The result is validated last.
    ///
    /// # Errors
    ///
    /// Returns error if the current directory is unavailable, explicit
    /// `config_path` doesn't exist, parsing or expansion fails, or the final
    /// value is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd, config_path, cli_settings)
    }

    /// Like [`LoadedConfig::load`], but discovery starts at `start` instead of
    /// the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`LoadedConfig::load`].
    pub fn load_from(
        start: &Path,
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let discovered = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some(path.to_path_buf())
            }
            None => discover_config(start),
        };

        let mut loaded = match discovered {
            Some(path) => Self {
                site: load_from_file(&path)?,
                config_path: Some(path),
            },
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using built-in navigation");
                Self {
                    site: SiteConfig::builtin(),
                    config_path: None,
                }
            }
        };

        if let Some(settings) = cli_settings {
            loaded.apply_cli_settings(settings);
        }

        loaded.site.validate()?;
        Ok(loaded)
    }

    /// Apply CLI settings to the loaded site.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(title) = &settings.title {
            self.site.title.clone_from(title);
        }
        if let Some(base_path) = &settings.base_path {
            self.site.base_path = Some(base_path.clone());
        }
    }
}

impl SiteConfig {
    /// Parse a site from TOML and expand environment variable references.
    ///
    /// The result is not validated.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::EnvVar` for unset variables without a default.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut site: Self = toml::from_str(content)?;
        site.expand_env_vars()?;
        Ok(site)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.title = expand::expand_env(&self.title, "title")?;
        self.description = expand::expand_env(&self.description, "description")?;

        if let Some(ref base_path) = self.base_path {
            self.base_path = Some(expand::expand_env(base_path, "base_path")?);
        }

        for (i, link) in self.social_links.iter_mut().enumerate() {
            link.url = expand::expand_env(&link.url, &format!("social_links[{i}].url"))?;
        }

        Ok(())
    }
}

/// Search for config file in `start` and its parents.
fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load site navigation from a specific file.
fn load_from_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let site = SiteConfig::from_toml(&content)?;
    tracing::info!(
        path = %path.display(),
        groups = site.sidebar.len(),
        "Loaded site navigation"
    );
    Ok(site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SITE_TOML: &str = r#"
title = "Notes"
description = "Algorithm notes"

[[top_nav]]
label = "Home"
path = "/"

[[sidebar]]
title = "Data Structures and Algorithms"
items = [
    { label = "Binary Search", path = "/dsa/binary-search" },
    { label = "Disjoint Set Union", path = "/dsa/dsu" },
]
"#;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), SITE_TOML);

        let loaded = LoadedConfig::load(Some(&path), None).unwrap();

        assert_eq!(loaded.config_path, Some(path));
        assert_eq!(loaded.site.title, "Notes");
        assert_eq!(loaded.site.sidebar[0].items.len(), 2);
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let err = LoadedConfig::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_load_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "title = ");

        let err = LoadedConfig::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_validates_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(
            temp_dir.path(),
            r#"
title = "Notes"

[[top_nav]]
label = "Blog"
path = "blog"
"#,
        );

        let err = LoadedConfig::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("top_nav[0].path"));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), SITE_TOML);
        let settings = CliSettings {
            title: Some("Other".to_owned()),
            base_path: Some("/notes/".to_owned()),
        };

        let loaded = LoadedConfig::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(loaded.site.title, "Other");
        assert_eq!(loaded.site.base_path.as_deref(), Some("/notes/"));
        assert_eq!(loaded.site.description, "Algorithm notes"); // Unchanged
    }

    #[test]
    fn test_load_validates_cli_settings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), SITE_TOML);
        let settings = CliSettings {
            base_path: Some("notes".to_owned()),
            ..CliSettings::default()
        };

        let err = LoadedConfig::load(Some(&path), Some(&settings)).unwrap_err();

        assert!(err.to_string().contains("base_path"));
    }

    #[test]
    fn test_load_from_falls_back_to_builtin() {
        let temp_dir = tempfile::tempdir().unwrap();

        let loaded = LoadedConfig::load_from(temp_dir.path(), None, None).unwrap();

        assert_eq!(loaded.config_path, None);
        assert_eq!(loaded.site, SiteConfig::builtin());
    }

    #[test]
    fn test_load_from_builtin_with_cli_settings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings = CliSettings {
            base_path: Some("/notes/".to_owned()),
            ..CliSettings::default()
        };

        let loaded = LoadedConfig::load_from(temp_dir.path(), None, Some(&settings)).unwrap();

        assert_eq!(loaded.config_path, None);
        assert_eq!(loaded.site.base_path.as_deref(), Some("/notes/"));
        assert_eq!(loaded.site.sidebar, SiteConfig::builtin().sidebar);
    }

    #[test]
    fn test_load_from_discovers_parent_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), SITE_TOML);
        let nested = temp_dir.path().join("docs");
        std::fs::create_dir_all(&nested).unwrap();

        let loaded = LoadedConfig::load_from(&nested, None, None).unwrap();

        assert_eq!(loaded.config_path, Some(path));
        assert_eq!(loaded.site.title, "Notes");
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut loaded = LoadedConfig {
            site: SiteConfig::builtin(),
            config_path: None,
        };

        loaded.apply_cli_settings(&CliSettings::default());

        assert_eq!(loaded.site, SiteConfig::builtin());
    }

    #[test]
    fn test_discover_config_in_parent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), SITE_TOML);
        let nested = temp_dir.path().join("docs/dsa");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(discover_config(&nested), Some(path));
    }

    #[test]
    fn test_discover_config_prefers_nearest() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_config(temp_dir.path(), SITE_TOML);
        let nested = temp_dir.path().join("site");
        std::fs::create_dir_all(&nested).unwrap();
        let nearest = write_config(&nested, SITE_TOML);

        assert_eq!(discover_config(&nested), Some(nearest));
    }

    #[test]
    fn test_from_toml_expands_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SITENAV_TEST_GITHUB_USER", "octocat");
        }

        let site = SiteConfig::from_toml(
            r#"
title = "${SITENAV_TEST_SITE_TITLE:-Notes}"
base_path = "${SITENAV_TEST_BASE:-/notes/}"

[[social_links]]
icon = "github"
url = "https://github.com/${SITENAV_TEST_GITHUB_USER}"
"#,
        )
        .unwrap();

        assert_eq!(site.title, "Notes");
        assert_eq!(site.base_path.as_deref(), Some("/notes/"));
        assert_eq!(site.social_links[0].url, "https://github.com/octocat");

        unsafe {
            std::env::remove_var("SITENAV_TEST_GITHUB_USER");
        }
    }

    #[test]
    fn test_from_toml_missing_env_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SITENAV_TEST_MISSING_URL");
        }

        let err = SiteConfig::from_toml(
            r#"
[[social_links]]
icon = "mastodon"
url = "${SITENAV_TEST_MISSING_URL}"
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("social_links[0].url"));
    }

    #[test]
    fn test_from_toml_literal_unchanged() {
        let site = SiteConfig::from_toml(SITE_TOML).unwrap();
        assert_eq!(site.title, "Notes");
        assert_eq!(site.description, "Algorithm notes");
    }
}
