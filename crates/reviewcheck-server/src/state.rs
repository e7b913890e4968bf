//! Shared application state

use metrics_exporter_prometheus::PrometheusHandle;
use reviewcheck_classifiers::{
    ClassifierConfig, EngineKind, ModelState, ProbabilisticEngine, ReviewClassifier,
};
use reviewcheck_core::Result;
use std::sync::Arc;
use tracing::info;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Classifier running the configured engine
    pub classifier: Arc<ReviewClassifier>,
    /// Artifact load outcome, resolved once at startup
    pub model: Arc<ModelState>,
    /// Prometheus handle for rendering `/metrics`
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: &ClassifierConfig, model: Arc<ModelState>) -> Result<Self> {
        let classifier = ReviewClassifier::from_config(config, model.clone())?;
        Ok(Self {
            classifier: Arc::new(classifier),
            model,
            metrics_handle: None,
        })
    }

    /// Resolve the model artifact from the configured locations, then build state
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        let candidates = config.model.candidate_paths();
        info!(candidates = candidates.len(), "Resolving model artifact");

        let model = Arc::new(ModelState::load_from_candidates(&candidates));
        Self::new(config, model)
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }

    pub fn engine(&self) -> EngineKind {
        self.classifier.engine_kind()
    }

    /// Whether requests need a loaded model to be served
    pub fn requires_model(&self) -> bool {
        self.engine() == EngineKind::Probabilistic
    }

    /// Raw model access, independent of the configured engine
    pub fn predictor(&self) -> ProbabilisticEngine {
        ProbabilisticEngine::new(self.model.clone())
    }
}
