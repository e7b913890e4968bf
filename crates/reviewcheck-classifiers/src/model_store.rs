//! Process-scoped model state
//!
//! The artifact is resolved once at startup. Afterwards the state is only
//! read, so engines hold it behind an `Arc` without locking.

use crate::artifact::ModelArtifact;
use reviewcheck_core::{CandidateStatus, Error, ModelDiagnostics, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Load status of the model artifact
#[derive(Debug, Clone)]
pub enum ModelState {
    /// An artifact is ready for inference
    Loaded {
        artifact: Arc<ModelArtifact>,
        diagnostics: ModelDiagnostics,
    },
    /// No usable artifact; the diagnostics explain why
    Unavailable(ModelDiagnostics),
}

impl ModelState {
    /// Wrap an artifact that was built in memory
    pub fn loaded(artifact: ModelArtifact) -> Self {
        let diagnostics = ModelDiagnostics {
            candidates: artifact
                .source()
                .map(|path| vec![CandidateStatus::new(path.display().to_string(), true)])
                .unwrap_or_default(),
            last_error: None,
        };
        Self::Loaded {
            artifact: Arc::new(artifact),
            diagnostics,
        }
    }

    /// Explicit "not loaded" state
    pub fn unavailable(diagnostics: ModelDiagnostics) -> Self {
        Self::Unavailable(diagnostics)
    }

    /// Try each candidate in order and keep the first artifact that loads.
    ///
    /// Candidates after the one that loads are not tried. Failures never
    /// abort the walk; the last one is kept in the diagnostics.
    pub fn load_from_candidates<P: AsRef<Path>>(candidates: &[P]) -> Self {
        let mut diagnostics = ModelDiagnostics::default();

        for candidate in candidates {
            let path = candidate.as_ref();
            let exists = path.exists();
            diagnostics
                .candidates
                .push(CandidateStatus::new(path.display().to_string(), exists));

            if !exists {
                continue;
            }

            match ModelArtifact::from_path(path) {
                Ok(artifact) => {
                    info!(
                        path = %path.display(),
                        classes = ?artifact.classes(),
                        features = artifact.n_features(),
                        "Loaded model artifact"
                    );
                    return Self::Loaded {
                        artifact: Arc::new(artifact),
                        diagnostics,
                    };
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to load model artifact");
                    diagnostics.last_error = Some(e.to_string());
                }
            }
        }

        warn!(
            "Model load failed: {}",
            diagnostics.last_error.as_deref().unwrap_or("no candidate found")
        );
        Self::Unavailable(diagnostics)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Loaded artifact, or `ModelUnavailable` carrying the diagnostics
    pub fn artifact(&self) -> Result<&Arc<ModelArtifact>> {
        match self {
            Self::Loaded { artifact, .. } => Ok(artifact),
            Self::Unavailable(diagnostics) => Err(Error::ModelUnavailable(diagnostics.clone())),
        }
    }

    /// Which locations were tried and what went wrong
    pub fn diagnostics(&self) -> &ModelDiagnostics {
        match self {
            Self::Loaded { diagnostics, .. } | Self::Unavailable(diagnostics) => diagnostics,
        }
    }

    /// Path the artifact was loaded from
    pub fn loaded_from(&self) -> Option<PathBuf> {
        match self {
            Self::Loaded { artifact, .. } => artifact.source().map(Path::to_path_buf),
            Self::Unavailable(_) => None,
        }
    }
}
