//! `${VAR}` references in the string fields of `sitenav.toml`.
//!
//! Lets one file serve several deployments: `base_path = "${SITE_BASE:-/}"`
//! for a site mounted under a prefix, or a social URL built from
//! `${GITHUB_USER}` in a fork. A bare `$` is kept literally.

use std::env::VarError;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` in the value of `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let expanded =
        shellexpand::env_with_context(value, lookup_var).map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: e.cause.to_string(),
        })?;
    tracing::debug!(field, "Expanded environment references");
    Ok(expanded.into_owned())
}

fn lookup_var(name: &str) -> Result<Option<String>, UnresolvedVar> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Err(UnresolvedVar::NotSet(name.to_owned())),
        Err(VarError::NotUnicode(_)) => Err(UnresolvedVar::NotUnicode(name.to_owned())),
    }
}

/// Why a `${VAR}` reference without a default could not be expanded.
#[derive(Debug, thiserror::Error)]
enum UnresolvedVar {
    #[error("${{{0}}} is not set and has no default (write ${{{0}:-value}})")]
    NotSet(String),
    #[error("${{{0}}} is not valid UTF-8")]
    NotUnicode(String),
}
