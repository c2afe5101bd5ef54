//! `sitenav render` command implementation.

use std::path::PathBuf;

use clap::Args;
use sitenav_site::html;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Route of the current page, marked with aria-current.
    #[arg(long)]
    current: Option<String>,

    /// Write the fragment to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let loaded = self.config.load()?;

        let fragment = html::render_navigation(&loaded.site, self.current.as_deref());
        output.emit(&fragment, self.output.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_writes_fragment_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("sitenav.toml");
        std::fs::write(
            &config_path,
            r#"
title = "Notes"

[[sidebar]]
title = "Data Structures and Algorithms"
items = [
    { label = "Binary Search", path = "/dsa/binary-search" },
    { label = "Disjoint Set Union", path = "/dsa/dsu" },
]
"#,
        )
        .unwrap();
        let fragment_path = temp_dir.path().join("nav.html");

        let args = RenderArgs {
            config: ConfigArgs {
                config: Some(config_path),
                title: None,
                base_path: Some("/notes/".to_owned()),
            },
            current: Some("/dsa/dsu/".to_owned()),
            output: Some(fragment_path.clone()),
        };
        args.execute().unwrap();

        let html = std::fs::read_to_string(&fragment_path).unwrap();
        assert!(html.contains("<h2>Data Structures and Algorithms</h2>"));
        assert!(html.contains(r#"<section class="sidebar-group open">"#));
        assert!(html.contains(r#"<li><a href="/notes/dsa/binary-search">Binary Search</a></li>"#));
        assert!(html.contains(
            r#"<li><a href="/notes/dsa/dsu" aria-current="page">Disjoint Set Union</a></li>"#
        ));
    }

    #[test]
    fn test_render_missing_config_fails() {
        let temp_dir = tempfile::tempdir().unwrap();

        let args = RenderArgs {
            config: ConfigArgs {
                config: Some(temp_dir.path().join("missing.toml")),
                title: None,
                base_path: None,
            },
            current: None,
            output: Some(temp_dir.path().join("nav.html")),
        };

        let err = args.execute().unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(!temp_dir.path().join("nav.html").exists());
    }
}
