//! `sitenav show` command implementation.

use std::path::PathBuf;

use clap::Args;
use sitenav_site::manifest;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Write the manifest to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ShowArgs {
    /// Execute the show command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let loaded = self.config.load()?;

        let json = manifest::to_json(&loaded.site)?;
        output.emit(&json, self.output.as_deref())?;
        Ok(())
    }
}
