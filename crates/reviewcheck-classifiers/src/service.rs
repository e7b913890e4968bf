//! Review classification service
//!
//! The single entry point shared by both engines: validates the text once,
//! runs the configured engine, scores its signal and shapes the result.

use crate::config::ClassifierConfig;
use crate::engine::{DecisionEngine, EngineKind};
use crate::heuristic::HeuristicEngine;
use crate::lexicon::Lexicon;
use crate::model_store::ModelState;
use crate::probabilistic::ProbabilisticEngine;
use crate::result::ResultBuilder;
use crate::scoring::aggregate;
use rayon::prelude::*;
use reviewcheck_core::{ClassificationResult, Error, Result, Review};
use std::sync::Arc;
use tracing::{debug, info};

/// Classifies reviews with one decision engine
#[derive(Clone)]
pub struct ReviewClassifier {
    engine: Arc<dyn DecisionEngine>,
    builder: ResultBuilder,
}

impl ReviewClassifier {
    /// Create a classifier around an engine
    pub fn new(engine: Arc<dyn DecisionEngine>) -> Self {
        Self {
            engine,
            builder: ResultBuilder::default(),
        }
    }

    /// Build the configured engine over an already-resolved model state
    pub fn from_config(config: &ClassifierConfig, model: Arc<ModelState>) -> Result<Self> {
        config.validate()?;

        let engine: Arc<dyn DecisionEngine> = match config.engine {
            EngineKind::Probabilistic => Arc::new(ProbabilisticEngine::new(model)),
            EngineKind::Heuristic => Arc::new(HeuristicEngine::with_lexicon(Arc::new(
                Lexicon::with_config(&config.lexicon)?,
            ))),
        };
        info!(engine = %config.engine, ready = engine.is_ready(), "Review classifier initialized");

        Ok(Self {
            engine,
            builder: ResultBuilder::new(config.snippet_len),
        })
    }

    pub fn with_builder(mut self, builder: ResultBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn engine_kind(&self) -> EngineKind {
        self.engine.kind()
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_ready()
    }

    /// Classify a single review; blank text is rejected with `EmptyText`
    pub fn analyze(&self, review: &Review) -> Result<ClassificationResult> {
        let kind = self.engine.kind();
        let text = review.trimmed_text().ok_or(Error::EmptyText)?;

        let signal = self
            .engine
            .classify(text, review.place.as_deref())
            .map_err(|e| {
                metrics::counter!("reviewcheck_errors_total", "kind" => e.kind()).increment(1);
                e
            })?;
        let assessment = aggregate(signal);

        metrics::counter!("reviewcheck_reviews_total", "engine" => kind.as_str()).increment(1);
        for flag in &assessment.flags {
            metrics::counter!("reviewcheck_flags_total", "flag" => flag.label()).increment(1);
        }
        debug!(
            id = review.id,
            engine = %kind,
            flags = ?assessment.flags,
            quality = assessment.quality_score,
            "Review classified"
        );

        Ok(self.builder.build(review, text, assessment))
    }

    /// Classify an ordered batch.
    ///
    /// Rows with blank text are skipped and do not consume an id; the
    /// remaining rows are numbered 1.. in input order, whatever ids they
    /// carried. Any other error fails the whole batch.
    pub fn analyze_batch(&self, rows: &[Review]) -> Result<Vec<ClassificationResult>> {
        let kept: Vec<Review> = rows
            .iter()
            .filter(|row| row.trimmed_text().is_some())
            .enumerate()
            .map(|(i, row)| row.clone().with_id(i + 1))
            .collect();

        let skipped = rows.len() - kept.len();
        if skipped > 0 {
            metrics::counter!("reviewcheck_skipped_rows_total").increment(skipped as u64);
            debug!(skipped, "Skipped blank rows");
        }

        kept.par_iter().map(|review| self.analyze(review)).collect()
    }
}
