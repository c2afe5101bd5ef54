//! `sitenav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use sitenav_site::{MissingRoute, check_routes};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Markdown content directory to resolve routes against.
    #[arg(short = 'd', long)]
    content_dir: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let loaded = self.config.load()?;

        match &loaded.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.info("Config: built-in navigation"),
        }
        output.info(&format!(
            "Top navigation: {} items, sidebar: {} groups, social links: {}",
            loaded.site.top_nav.len(),
            loaded.site.sidebar.len(),
            loaded.site.social_links.len()
        ));

        let Some(content_dir) = self.content_dir else {
            output.success("Navigation is valid");
            return Ok(());
        };

        let report = check_routes(&loaded.site, &content_dir)?;
        if report.is_ok() {
            output.success(&format!(
                "All {} routes resolve to pages in {}",
                report.checked,
                content_dir.display()
            ));
            return Ok(());
        }

        for missing in &report.missing {
            output.warning(&describe_missing(missing));
        }
        Err(CliError::Validation(format!(
            "{} of {} routes have no page in {}",
            report.missing.len(),
            report.checked,
            content_dir.display()
        )))
    }
}

fn describe_missing(missing: &MissingRoute) -> String {
    format!(
        "  {} -> {} ({})",
        missing.label, missing.path, missing.location
    )
}
