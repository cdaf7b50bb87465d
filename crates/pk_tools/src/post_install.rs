use std::path::{Path, PathBuf};

use pk_edit::{PhpFile, Scalar};
use serde_json::Value;

use crate::process::{self, Artisan, Composer, Npm};
use crate::{Answers, Config, Env, Files, ToolError};

/// A post-install routine for one project directory.
///
/// Methods return `&mut Self` so steps chain with `?`:
///
/// ```no_run
/// # fn main() -> Result<(), pk_tools::ToolError> {
/// let mut project = pk_tools::PostInstall::in_dir("my-app");
/// project
///     .with_answers("answers.json")?
///     .selected("features", "teams", |p| {
///         p.strip_block("routes/web.php", "teams")?;
///         p.composer("require", &["laravel/jetstream"])?;
///         Ok(())
///     })?
///     .env("APP_NAME", "My App")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PostInstall {
    dir: PathBuf,
    answers: Answers,
}

impl PostInstall {
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        PostInstall {
            dir: dir.into(),
            answers: Answers::default(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `relative` inside the project; an empty path is the project itself.
    pub fn path(&self, relative: &str) -> PathBuf {
        if relative.is_empty() {
            self.dir.clone()
        } else {
            self.dir.join(relative)
        }
    }

    pub fn with_answers(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, ToolError> {
        self.answers = Answers::load(path.as_ref())?;
        Ok(self)
    }

    pub fn set_answers(&mut self, answers: Answers) -> &mut Self {
        self.answers = answers;
        self
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn answer(&self, key: &str) -> Option<&Value> {
        self.answers.get(key)
    }

    /// Run `then` when the multi-select answer `key` includes `value`.
    pub fn selected<F>(&mut self, key: &str, value: &str, then: F) -> Result<&mut Self, ToolError>
    where
        F: FnOnce(&mut Self) -> Result<(), ToolError>,
    {
        self.selected_else(key, value, then, |_| Ok(()))
    }

    pub fn selected_else<F, G>(
        &mut self,
        key: &str,
        value: &str,
        then: F,
        otherwise: G,
    ) -> Result<&mut Self, ToolError>
    where
        F: FnOnce(&mut Self) -> Result<(), ToolError>,
        G: FnOnce(&mut Self) -> Result<(), ToolError>,
    {
        let hit = self.answers.selected(key, value);
        self.branch(hit, then, otherwise)
    }

    /// Run `then` when `key` was answered with a truthy value.
    pub fn confirmed<F>(&mut self, key: &str, then: F) -> Result<&mut Self, ToolError>
    where
        F: FnOnce(&mut Self) -> Result<(), ToolError>,
    {
        self.confirmed_else(key, then, |_| Ok(()))
    }

    pub fn confirmed_else<F, G>(
        &mut self,
        key: &str,
        then: F,
        otherwise: G,
    ) -> Result<&mut Self, ToolError>
    where
        F: FnOnce(&mut Self) -> Result<(), ToolError>,
        G: FnOnce(&mut Self) -> Result<(), ToolError>,
    {
        let hit = self.answers.confirmed(key);
        self.branch(hit, then, otherwise)
    }

    /// Run `then` when `key` was answered with exactly `value`.
    pub fn answered<F>(
        &mut self,
        key: &str,
        value: impl Into<Value>,
        then: F,
    ) -> Result<&mut Self, ToolError>
    where
        F: FnOnce(&mut Self) -> Result<(), ToolError>,
    {
        self.answered_else(key, value, then, |_| Ok(()))
    }

    pub fn answered_else<F, G>(
        &mut self,
        key: &str,
        value: impl Into<Value>,
        then: F,
        otherwise: G,
    ) -> Result<&mut Self, ToolError>
    where
        F: FnOnce(&mut Self) -> Result<(), ToolError>,
        G: FnOnce(&mut Self) -> Result<(), ToolError>,
    {
        let hit = self.answers.answered(key, &value.into());
        self.branch(hit, then, otherwise)
    }

    fn branch<F, G>(&mut self, hit: bool, then: F, otherwise: G) -> Result<&mut Self, ToolError>
    where
        F: FnOnce(&mut Self) -> Result<(), ToolError>,
        G: FnOnce(&mut Self) -> Result<(), ToolError>,
    {
        if hit {
            then(self)?;
        } else {
            otherwise(self)?;
        }
        Ok(self)
    }

    // Files

    fn files(&self) -> Files {
        Files::new(&self.dir)
    }

    pub fn copy(&mut self, from: &str, to: &str) -> Result<&mut Self, ToolError> {
        self.files().copy(from, to)?;
        Ok(self)
    }

    pub fn delete(&mut self, paths: &[&str]) -> Result<&mut Self, ToolError> {
        self.files().delete(paths)?;
        Ok(self)
    }

    pub fn replace_in_file(
        &mut self,
        file: &str,
        search: &str,
        replace: &str,
    ) -> Result<&mut Self, ToolError> {
        self.files().replace_in_file(file, search, replace)?;
        Ok(self)
    }

    pub fn delete_lines_containing(
        &mut self,
        file: &str,
        content: &str,
    ) -> Result<&mut Self, ToolError> {
        self.files().delete_lines_containing(file, content)?;
        Ok(self)
    }

    pub fn replace_line_in_file(
        &mut self,
        file: &str,
        search: &str,
        replace: &str,
    ) -> Result<&mut Self, ToolError> {
        self.files().replace_line_in_file(file, search, replace)?;
        Ok(self)
    }

    pub fn append_after_line(
        &mut self,
        file: &str,
        search: &str,
        content: &str,
    ) -> Result<&mut Self, ToolError> {
        self.files().append_after_line(file, search, content)?;
        Ok(self)
    }

    pub fn append_to_file(&mut self, file: &str, content: &str) -> Result<&mut Self, ToolError> {
        self.files().append_to_file(file, content)?;
        Ok(self)
    }

    pub fn uncomment(&mut self, file: &str, search: &str) -> Result<&mut Self, ToolError> {
        self.files().uncomment(file, search)?;
        Ok(self)
    }

    pub fn strip_block(&mut self, file: &str, tag: &str) -> Result<&mut Self, ToolError> {
        self.files().strip_block(file, tag)?;
        Ok(self)
    }

    pub fn remove_block(&mut self, file: &str, tag: &str) -> Result<&mut Self, ToolError> {
        self.files().remove_block(file, tag)?;
        Ok(self)
    }

    pub fn publish(&mut self, from: &str) -> Result<&mut Self, ToolError> {
        self.files().publish(from)?;
        Ok(self)
    }

    // Env and config

    pub fn env(&mut self, key: &str, value: &str) -> Result<&mut Self, ToolError> {
        Env::new(&self.dir).set(key, value)?;
        Ok(self)
    }

    pub fn config(
        &mut self,
        file: &str,
        key: &str,
        value: impl Into<Scalar>,
    ) -> Result<&mut Self, ToolError> {
        Config::new(&self.dir).set(file, key, value)?;
        Ok(self)
    }

    pub fn config_many<K, V>(
        &mut self,
        file: &str,
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Result<&mut Self, ToolError>
    where
        K: Into<String>,
        V: Into<Scalar>,
    {
        Config::new(&self.dir).set_many(file, values)?;
        Ok(self)
    }

    // Processes

    /// `require`, `require-dev` or `remove`.
    pub fn composer(&mut self, command: &str, packages: &[&str]) -> Result<&mut Self, ToolError> {
        let composer = Composer::new(&self.dir);
        match command {
            "require" => composer.require(packages)?,
            "require-dev" => composer.require_dev(packages)?,
            "remove" => composer.remove(packages)?,
            _ => {
                return Err(ToolError::UnknownCommand {
                    tool: "composer",
                    command: command.to_owned(),
                })
            }
        }
        Ok(self)
    }

    /// `install`, `install-dev` or `remove`.
    pub fn npm(&mut self, command: &str, packages: &[&str]) -> Result<&mut Self, ToolError> {
        let npm = Npm::new(&self.dir);
        match command {
            "install" => npm.install(packages)?,
            "install-dev" => npm.install_dev(packages)?,
            "remove" => npm.remove(packages)?,
            _ => {
                return Err(ToolError::UnknownCommand {
                    tool: "npm",
                    command: command.to_owned(),
                })
            }
        }
        Ok(self)
    }

    pub fn artisan(&mut self, command: &str) -> Result<&mut Self, ToolError> {
        Artisan::new(&self.dir).run(command)?;
        Ok(self)
    }

    pub fn run(&mut self, command: &str) -> Result<&mut Self, ToolError> {
        process::run(&self.dir, command)?;
        Ok(self)
    }

    /// `npm install` followed by `npm run build`.
    pub fn rebuild_assets(&mut self) -> Result<&mut Self, ToolError> {
        let npm = Npm::new(&self.dir);
        npm.install(&[])?;
        npm.build()?;
        Ok(self)
    }

    /// Edit queue for a PHP file of the project.
    pub fn php(&self, path: &str) -> PhpFile {
        PhpFile::new(self.path(path))
    }
}
