//! CLI command implementations.

mod check;
mod render;
mod show;

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{CliSettings, ConfigError, LoadedConfig};

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;
pub(crate) use show::ShowArgs;

/// Config loading arguments shared by every command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,

    /// Route prefix such as /notes/ (overrides config).
    #[arg(long, env = "SITENAV_BASE_PATH")]
    base_path: Option<String>,
}

impl ConfigArgs {
    /// Load and validate the site navigation.
    pub(crate) fn load(&self) -> Result<LoadedConfig, ConfigError> {
        tracing::debug!(config = ?self.config, "Loading site navigation");
        let cli_settings = CliSettings {
            title: self.title.clone(),
            base_path: self.base_path.clone(),
        };
        LoadedConfig::load(self.config.as_deref(), Some(&cli_settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    #[test]
    fn test_base_path_from_env() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("sitenav.toml");
        std::fs::write(&config_path, "title = \"Notes\"\n").unwrap();

        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SITENAV_BASE_PATH", "/notes/");
        }
        let from_env =
            TestCli::try_parse_from(["sitenav", "-c", config_path.to_str().unwrap()]).unwrap();
        let from_flag = TestCli::try_parse_from(["sitenav", "--base-path", "/docs/"]).unwrap();
        unsafe {
            std::env::remove_var("SITENAV_BASE_PATH");
        }

        assert_eq!(from_flag.config.base_path.as_deref(), Some("/docs/"));
        let loaded = from_env.config.load().unwrap();
        assert_eq!(loaded.site.base_path.as_deref(), Some("/notes/"));
    }
}
