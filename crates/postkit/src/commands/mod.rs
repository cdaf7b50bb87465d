//! Command handlers for the `postkit` binary.

use std::path::Path;

use crate::CliError;

mod config;
mod debug;
mod env;
mod php;

pub use config::{parse_config_args, run_config, ConfigArgs, CONFIG_USAGE};
pub use debug::{lex_file, outline, parse_file};
pub use env::{parse_env_args, run_env, EnvArgs, ENV_USAGE};
pub use php::{parse_php_args, run_php, PhpArgs, PHP_USAGE};

pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
