use std::fs;
use std::path::{Path, PathBuf};

use crate::{apply, Edit, EditError, Scalar};

/// Queue of edits for one PHP file.
///
/// Nothing touches the disk until [`PhpFile::save`]. The file is read once
/// and written once, and only when every queued edit applied.
///
/// ```no_run
/// # fn main() -> Result<(), pk_edit::EditError> {
/// let mut user = pk_edit::PhpFile::new("app/Models/User.php");
/// user.add_import("Laravel\\Sanctum\\HasApiTokens")
///     .add_trait("HasApiTokens");
/// user.save()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PhpFile {
    path: PathBuf,
    edits: Vec<Edit>,
}

impl PhpFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PhpFile {
            path: path.into(),
            edits: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Edits queued since the last successful save.
    pub fn pending(&self) -> &[Edit] {
        &self.edits
    }

    pub fn push(&mut self, edit: Edit) -> &mut Self {
        self.edits.push(edit);
        self
    }

    pub fn add_import(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(Edit::add_import(name))
    }

    pub fn remove_import(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(Edit::remove_import(name))
    }

    pub fn add_trait(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(Edit::add_trait(name))
    }

    pub fn remove_trait(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(Edit::remove_trait(name))
    }

    pub fn add_interface(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(Edit::add_interface(name))
    }

    pub fn remove_interface(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(Edit::remove_interface(name))
    }

    pub fn add_method(&mut self, code: impl Into<String>) -> &mut Self {
        self.push(Edit::add_method(code))
    }

    pub fn remove_method(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(Edit::remove_method(name))
    }

    pub fn add_to_array(
        &mut self,
        target: impl Into<String>,
        value: impl Into<Scalar>,
    ) -> &mut Self {
        self.push(Edit::add_to_array(target, value))
    }

    pub fn add_to_array_keyed(
        &mut self,
        target: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Scalar>,
    ) -> &mut Self {
        self.push(Edit::add_to_array_keyed(target, key, value))
    }

    pub fn remove_from_array(
        &mut self,
        target: impl Into<String>,
        search: impl Into<String>,
    ) -> &mut Self {
        self.push(Edit::remove_from_array(target, search))
    }

    pub fn set_config(&mut self, key_path: impl Into<String>, value: impl Into<Scalar>) -> &mut Self {
        self.push(Edit::set_config(key_path, value))
    }

    /// New file contents, or `None` when nothing is queued. Does not write.
    pub fn render(&self) -> Result<Option<String>, EditError> {
        if self.edits.is_empty() {
            return Ok(None);
        }
        let source = fs::read_to_string(&self.path).map_err(|err| EditError::io(&self.path, err))?;
        apply(&source, &self.edits).map(Some)
    }

    /// Apply the queue and write the file. Returns `false` when nothing was
    /// queued. On error the file and the queue are left as they were.
    pub fn save(&mut self) -> Result<bool, EditError> {
        let Some(output) = self.render()? else {
            return Ok(false);
        };
        fs::write(&self.path, output).map_err(|err| EditError::io(&self.path, err))?;
        tracing::debug!(path = %self.path.display(), edits = self.edits.len(), "saved");
        self.edits.clear();
        Ok(true)
    }
}

impl Drop for PhpFile {
    fn drop(&mut self) {
        if !self.edits.is_empty() {
            tracing::warn!(
                path = %self.path.display(),
                pending = self.edits.len(),
                "dropping unsaved PHP edits"
            );
        }
    }
}
