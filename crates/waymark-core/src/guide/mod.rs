//! High-level guide API for viewing and updating progression state.
//!
//! This module provides the main [`Guide`] interface. The guide acts as the
//! coordinator between the interface layers and the underlying state: it
//! loads the active dataset, reads settings and the completion set from the
//! store, runs the pure view computation from [`crate::engine`], and writes
//! state changes back.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Guide`] instances with configuration
//! - [`ops`]: The guide operations (view, toggles, navigation, settings)
//!
//! # Usage
//!
//! ```rust,no_run
//! use waymark_core::{GuideBuilder, models::ViewState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let guide = GuideBuilder::new()
//!     .with_database_path(Some("/tmp/waymark.db"))
//!     .build()
//!     .await?;
//!
//! let view = guide.view(ViewState::default()).await?;
//! println!("{view}");
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::task;

use crate::{
    dataset::DatasetSource,
    error::{GuideError, Result},
    models::{Act, Dataset, Settings},
    store::Store,
};

pub mod builder;
pub mod ops;

pub use builder::GuideBuilder;

/// Main guide interface for viewing and mutating progression state.
///
/// The store is opened per operation on a blocking task; datasets are
/// cached per game version inside [`DatasetSource`].
pub struct Guide {
    pub(crate) db_path: PathBuf,
    pub(crate) datasets: DatasetSource,
}

/// Everything an operation needs to compute against: current settings,
/// the completion set for the active version, and the active dataset.
pub(crate) struct OpContext {
    pub(crate) settings: Settings,
    pub(crate) completed: HashSet<String>,
    pub(crate) dataset: Arc<Dataset>,
}

impl OpContext {
    /// The currently selected act.
    ///
    /// A persisted act number absent from the active dataset (stale after a
    /// version switch, or from an edited override file) falls back to the
    /// first act. Errors only when the dataset has no acts at all.
    pub(crate) fn act(&self) -> Result<&Act> {
        self.dataset
            .act(self.settings.current_act)
            .or_else(|| self.dataset.acts.first())
            .ok_or(GuideError::ActNotFound {
                number: self.settings.current_act,
            })
    }
}

impl Guide {
    /// Creates a new guide with the specified database path and dataset
    /// override directory.
    pub(crate) fn new(db_path: PathBuf, data_dir: Option<PathBuf>) -> Self {
        Self {
            db_path,
            datasets: DatasetSource::new(data_dir),
        }
    }

    /// Loads settings and completion state from the store, then the dataset
    /// for the persisted game version.
    ///
    /// An unavailable store degrades to default settings and an empty
    /// completion set rather than failing the operation.
    pub(crate) async fn load_context(&self) -> Result<OpContext> {
        let db_path = self.db_path.clone();

        let (settings, completed) = task::spawn_blocking(move || match Store::new(&db_path) {
            Ok(store) => {
                let settings = store.load_settings();
                let completed = store.load_progress(settings.game_version);
                (settings, completed)
            }
            Err(e) => {
                log::warn!("Store unavailable, using default settings and empty progress: {e}");
                (Settings::default(), HashSet::new())
            }
        })
        .await
        .map_err(|e| GuideError::Configuration {
            message: format!("Task join error: {e}"),
        })?;

        let dataset = self.datasets.load(settings.game_version).await?;

        Ok(OpContext {
            settings,
            completed,
            dataset,
        })
    }
}
