//! Post-install tooling for a freshly generated application.
//!
//! [`PostInstall`] bundles the individual tools behind one builder rooted at
//! the project directory and gates steps on the installer's [`Answers`]:
//!
//! - [`Files`]: copies, line edits and `/* @tag */` block markers
//! - [`Env`]: `.env` keys
//! - [`Config`]: values in `config/*.php` arrays, through [`pk_edit`]
//! - [`Composer`], [`Npm`], [`Artisan`] and [`run`]: external commands

mod answers;
mod config;
mod env;
mod error;
mod files;
mod post_install;
mod process;

pub use answers::Answers;
pub use config::Config;
pub use env::Env;
pub use error::ToolError;
pub use files::Files;
pub use post_install::PostInstall;
pub use process::{run, Artisan, Composer, Npm};

pub use pk_edit::{PhpFile, Scalar};
