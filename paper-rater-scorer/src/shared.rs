//! A rater whose tables can be reloaded from disk while it is in use.
//!
//! Readers take a cheap [`Arc`] snapshot of the active [`Rater`]; a reload
//! builds a complete replacement before swapping it in, so a snapshot never
//! observes half-loaded tables. A failed reload leaves the active rater in
//! place. Reloads are serialised, so the file read last is the one installed.
#![forbid(unsafe_code)]

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use camino::Utf8PathBuf;
use log::{debug, warn};
use paper_rater_core::{PaperQuery, PaperScorer, ScoreResult};

use crate::{Rater, RaterError};

/// A [`Rater`] backed by a table file that can be re-read on demand.
#[derive(Debug)]
pub struct SharedRater {
    path: Utf8PathBuf,
    active: RwLock<Arc<Rater>>,
    reloading: Mutex<()>,
}

impl SharedRater {
    /// Load the tables at `path` and build the initial rater.
    ///
    /// # Errors
    /// Returns [`RaterError`] when the file cannot be loaded or compiled.
    pub fn load(path: impl Into<Utf8PathBuf>) -> Result<Self, RaterError> {
        let table_path: Utf8PathBuf = path.into();
        let rater = Rater::from_path(&table_path)?;
        Ok(Self {
            path: table_path,
            active: RwLock::new(Arc::new(rater)),
            reloading: Mutex::new(()),
        })
    }

    /// Snapshot the active rater.
    #[must_use]
    pub fn current(&self) -> Arc<Rater> {
        Arc::clone(&self.active.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Re-read the table file and swap in the new rater.
    ///
    /// Concurrent calls run one at a time; readers are only blocked for the
    /// final swap.
    ///
    /// # Errors
    /// Returns [`RaterError`] when the file cannot be loaded or compiled; the
    /// previously active rater keeps serving requests.
    pub fn reload(&self) -> Result<Arc<Rater>, RaterError> {
        let _reloading = self
            .reloading
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let rater = match Rater::from_path(&self.path) {
            Ok(rater) => Arc::new(rater),
            Err(err) => {
                warn!(
                    "keeping previous rating tables; reload of {} failed: {err}",
                    self.path
                );
                return Err(err);
            }
        };
        let mut guard = self.active.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&rater);
        debug!("reloaded rating tables from {}", self.path);
        Ok(rater)
    }
}

impl PaperScorer for SharedRater {
    fn rate_paper(&self, paper: &PaperQuery) -> ScoreResult {
        self.current().rate_paper(paper)
    }
}
