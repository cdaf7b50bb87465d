//! External commands run in the project directory.
//!
//! Commands go through the platform shell with inherited stdio, and block
//! until the child exits.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::ToolError;

/// Run `command` through the platform shell in `dir`.
pub fn run(dir: &Path, command: &str) -> Result<(), ToolError> {
    tracing::debug!(command, dir = %dir.display(), "running command");
    let status = shell(command)
        .current_dir(dir)
        .status()
        .map_err(|source| ToolError::Spawn {
            command: command.to_owned(),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Command {
            command: command.to_owned(),
            code: status.code(),
        })
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

/// `program args... packages...` as one shell line.
fn command_line(program: &str, args: &[&str], packages: &[&str]) -> String {
    let mut line = program.to_owned();
    for arg in args.iter().chain(packages) {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

#[derive(Clone, Debug)]
pub struct Composer {
    dir: PathBuf,
}

impl Composer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Composer { dir: dir.into() }
    }

    pub fn require(&self, packages: &[&str]) -> Result<(), ToolError> {
        self.composer(&["require"], packages)
    }

    pub fn require_dev(&self, packages: &[&str]) -> Result<(), ToolError> {
        self.composer(&["require", "--dev"], packages)
    }

    pub fn remove(&self, packages: &[&str]) -> Result<(), ToolError> {
        self.composer(&["remove"], packages)
    }

    fn composer(&self, args: &[&str], packages: &[&str]) -> Result<(), ToolError> {
        run(&self.dir, &command_line("composer", args, packages))
    }
}

#[derive(Clone, Debug)]
pub struct Npm {
    dir: PathBuf,
}

impl Npm {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Npm { dir: dir.into() }
    }

    /// `npm install`; with no packages, installs the lockfile.
    pub fn install(&self, packages: &[&str]) -> Result<(), ToolError> {
        self.npm(&["install"], packages)
    }

    pub fn install_dev(&self, packages: &[&str]) -> Result<(), ToolError> {
        self.npm(&["install", "--save-dev"], packages)
    }

    pub fn remove(&self, packages: &[&str]) -> Result<(), ToolError> {
        self.npm(&["remove"], packages)
    }

    pub fn build(&self) -> Result<(), ToolError> {
        self.npm(&["run", "build"], &[])
    }

    fn npm(&self, args: &[&str], packages: &[&str]) -> Result<(), ToolError> {
        run(&self.dir, &command_line("npm", args, packages))
    }
}

#[derive(Clone, Debug)]
pub struct Artisan {
    dir: PathBuf,
}

impl Artisan {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Artisan { dir: dir.into() }
    }

    /// `php artisan <command>`.
    pub fn run(&self, command: &str) -> Result<(), ToolError> {
        run(&self.dir, &format!("php artisan {command}"))
    }

    pub fn migrate(&self) -> Result<(), ToolError> {
        self.run("migrate")
    }

    pub fn vendor_publish(&self, provider: &str) -> Result<(), ToolError> {
        self.run(&format!("vendor:publish --provider=\"{provider}\""))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn command_lines_join_arguments() {
        assert_eq!(command_line("npm", &["run", "build"], &[]), "npm run build");
        assert_eq!(
            command_line("composer", &["require", "--dev"], &["pestphp/pest", "laravel/pint"]),
            "composer require --dev pestphp/pest laravel/pint"
        );
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), "true").unwrap();
        run(dir.path(), "touch marker").unwrap();
        assert!(dir.path().join("marker").exists());

        let err = run(dir.path(), "exit 3").unwrap_err();
        assert!(matches!(err, ToolError::Command { code: Some(3), .. }));
        assert_eq!(err.to_string(), "`exit 3` failed with exit code 3");
    }
}
