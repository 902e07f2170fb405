use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::config::Config;
use crate::repository::traits::CacheStorage;

/// Persists every cache entry in a single JSON object file, key -> blob.
#[derive(Clone)]
pub struct FileCacheStorage {
    file_path: PathBuf,
}

impl FileCacheStorage {
    pub fn new(base_dir: &Path, file_name: &str) -> Result<Self> {
        fs::create_dir_all(base_dir)
            .with_context(|| format!("Could not create cache directory {}", base_dir.display()))?;
        let path = base_dir.join(file_name);

        // Ensure the file itself exists; start with an empty object
        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &BTreeMap::<String, String>::new())?;
            writer.flush()?;
            debug!(path = %path.display(), "created cache file");
        }

        Ok(FileCacheStorage { file_path: path })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.data_dir, &config.cache_file)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let entries = serde_json::from_reader(reader)
            .with_context(|| format!("Corrupt cache file {}", self.file_path.display()))?;
        Ok(entries)
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
        Ok(())
    }
}

impl CacheStorage for FileCacheStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, blob: &str) -> Result<()> {
        // A corrupt file only loses its old entries; the new one still lands.
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            warn!(error = %e, "discarding unreadable cache file");
            BTreeMap::new()
        });
        entries.insert(key.to_string(), blob.to_string());
        self.write_entries(&entries)
    }
}
