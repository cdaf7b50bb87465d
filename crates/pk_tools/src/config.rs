use std::path::{Path, PathBuf};

use pk_edit::{PhpFile, Scalar};

use crate::ToolError;

/// Values in `config/*.php` arrays, addressed by dotted key paths.
#[derive(Clone, Debug)]
pub struct Config {
    root: PathBuf,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Config { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Set one value, e.g. `set("config/app.php", "timezone", "UTC")`.
    pub fn set(&self, file: &str, key: &str, value: impl Into<Scalar>) -> Result<(), ToolError> {
        let mut config = PhpFile::new(self.root.join(file));
        config.set_config(key, value);
        config.save()?;
        Ok(())
    }

    /// Set several values with a single read and write.
    pub fn set_many<K, V>(
        &self,
        file: &str,
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Result<(), ToolError>
    where
        K: Into<String>,
        V: Into<Scalar>,
    {
        let mut config = PhpFile::new(self.root.join(file));
        for (key, value) in values {
            config.set_config(key, value);
        }
        config.save()?;
        Ok(())
    }
}
