//! ReviewCheck Classifiers
//!
//! Review moderation engines for location-based review platforms.
//!
//! Two interchangeable decision strategies share one scoring and result path:
//! - Probabilistic: a trained text model (linear, naive Bayes or random forest)
//!   with a natural arg-max decision boundary
//! - Heuristic: lexicon and pattern rules for links, promotion, irrelevance and rants
//!
//! Both engines run synchronously on CPU. A service is configured with exactly
//! one of them.

pub mod artifact;
pub mod classes;
pub mod config;
pub mod engine;
pub mod forest;
pub mod heuristic;
pub mod lexicon;
pub mod model_store;
pub mod probabilistic;
pub mod result;
pub mod scoring;
pub mod service;

pub use artifact::{ArtifactSpec, ClassifierSpec, ModelArtifact, Vectorizer};
pub use classes::ReviewClass;
pub use config::{load_config, ClassifierConfig, ModelLocatorConfig};
pub use engine::{ClassificationSignal, DecisionEngine, EngineKind};
pub use forest::DecisionTree;
pub use heuristic::{HeuristicEngine, HeuristicSignal};
pub use lexicon::{Lexicon, LexiconConfig};
pub use model_store::ModelState;
pub use probabilistic::{Prediction, ProbabilisticEngine, ProbabilisticSignal};
pub use result::ResultBuilder;
pub use scoring::{aggregate, Assessment};
pub use service::ReviewClassifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::ClassifierConfig;
    pub use crate::engine::{DecisionEngine, EngineKind};
    pub use crate::heuristic::HeuristicEngine;
    pub use crate::model_store::ModelState;
    pub use crate::probabilistic::ProbabilisticEngine;
    pub use crate::service::ReviewClassifier;
    pub use reviewcheck_core::prelude::*;
}
