use anyhow::Result;
use mediadiary_models::MediaKind;
use std::path::{Path, PathBuf};

/// Base directory from `MEDIADIARY_HOME`, if set.
fn home_override() -> Option<PathBuf> {
    std::env::var("MEDIADIARY_HOME").ok().map(PathBuf::from)
}

#[derive(Debug, Clone)]
pub struct PathManager {
    /// Set by `from_base`; relative data directories resolve against it.
    base: Option<PathBuf>,
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl PathManager {
    /// Platform config directory (e.g. `~/.config/mediadiary` on Linux); catalogs
    /// live in `./data` like a portable install.
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("mediadiary");

        Ok(Self {
            base: None,
            config_dir,
            data_dir: PathBuf::from("data"),
        })
    }

    /// Everything under one base directory.
    pub fn from_base(base: &Path) -> Self {
        Self {
            base: Some(base.to_path_buf()),
            config_dir: base.to_path_buf(),
            data_dir: base.join("data"),
        }
    }

    /// Replace the catalog directory, typically with `Config::data_dir`.
    /// Relative paths are taken relative to the base when one was given
    /// (`from_base`, or `MEDIADIARY_HOME` through `Default`), else to the
    /// working directory.
    pub fn with_data_dir(mut self, data_dir: &Path) -> Self {
        self.data_dir = match &self.base {
            Some(base) if data_dir.is_relative() => base.join(data_dir),
            _ => data_dir.to_path_buf(),
        };
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// `<data_dir>/<kind>.json`
    pub fn catalog_file(&self, kind: MediaKind) -> PathBuf {
        self.data_dir.join(format!("{}.json", kind.file_stem()))
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = home_override() {
            return Self::from_base(&base);
        }
        Self::new().unwrap_or_else(|_| Self::from_base(Path::new(".")))
    }
}
