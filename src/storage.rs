use crate::model::Campus;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Store {
    /// Charge un campus depuis un support.
    fn load(&self) -> anyhow::Result<Campus>;
    /// Sauvegarde de manière atomique.
    fn save(&self, campus: &Campus) -> anyhow::Result<()>;
}

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }
}

impl Store for JsonStore {
    fn load(&self) -> anyhow::Result<Campus> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let campus: Campus =
            serde_json::from_slice(&data).with_context(|| "parsing schedule file")?;
        Ok(campus)
    }

    fn save(&self, campus: &Campus) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(campus)?;
        let mut tmp = NamedTempFile::new_in(self.path.parent().unwrap_or_else(|| Path::new(".")))
            .with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
