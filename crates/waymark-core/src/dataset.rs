//! Dataset loading with a per-version cache.
//!
//! Each game version has a compiled-in default dataset; a JSON file named
//! `<version>.json` in the data directory overrides it when present. Loaded
//! datasets are cached per version until [`DatasetSource::clear_cache`] is
//! called.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{GuideError, Result};
use crate::models::{Dataset, GameVersion};

/// Loads and caches guide datasets keyed by game version.
pub struct DatasetSource {
    data_dir: Option<PathBuf>,
    cache: Mutex<HashMap<GameVersion, Arc<Dataset>>>,
}

impl DatasetSource {
    /// Creates a source with an optional override directory.
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self {
            data_dir,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the dataset for a version, loading it on first access.
    ///
    /// The cache lock is held across the load, so concurrent callers for
    /// the same version wait for one load instead of repeating it.
    pub async fn load(&self, version: GameVersion) -> Result<Arc<Dataset>> {
        let mut cache = self.cache.lock().await;
        if let Some(dataset) = cache.get(&version) {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(self.read_dataset(version)?);
        cache.insert(version, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Drops all cached datasets; the next load re-reads from source.
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }

    fn override_path(&self, version: GameVersion) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(format!("{version}.json")))
    }

    fn read_dataset(&self, version: GameVersion) -> Result<Dataset> {
        let dataset = match self.override_path(version) {
            Some(path) if path.exists() => read_override(version, &path)?,
            _ => read_embedded(version)?,
        };
        validate(version, &dataset)?;
        Ok(dataset)
    }
}

fn read_override(version: GameVersion, path: &Path) -> Result<Dataset> {
    let raw = std::fs::read_to_string(path).map_err(|e| GuideError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        GuideError::dataset_load(
            version,
            format!("invalid JSON in {}: {e}", path.display()),
        )
    })
}

fn read_embedded(version: GameVersion) -> Result<Dataset> {
    let raw = match version {
        GameVersion::Poe1 => include_str!("../assets/poe1.json"),
        GameVersion::Poe2 => include_str!("../assets/poe2.json"),
    };
    serde_json::from_str(raw)
        .map_err(|e| GuideError::dataset_load(version, format!("embedded dataset is invalid: {e}")))
}

/// Rejects datasets with duplicate act numbers or duplicate step ids
/// within an act. Step ids key the persisted completion set, and act
/// numbers key act selection, so neither may collide.
fn validate(version: GameVersion, dataset: &Dataset) -> Result<()> {
    let mut act_numbers = HashSet::new();
    for act in &dataset.acts {
        if !act_numbers.insert(act.act_number) {
            return Err(GuideError::dataset_load(
                version,
                format!("duplicate act number {}", act.act_number),
            ));
        }

        let mut step_ids = HashSet::new();
        for step in &act.steps {
            if !step_ids.insert(step.id.as_str()) {
                return Err(GuideError::dataset_load(
                    version,
                    format!("duplicate step id '{}' in act {}", step.id, act.act_number),
                ));
            }
        }
    }
    Ok(())
}
