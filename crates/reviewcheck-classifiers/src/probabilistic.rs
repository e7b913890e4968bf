//! Probabilistic decision engine
//!
//! Uses the natural decision boundary: the predicted class is simply the
//! class with the highest probability. No threshold is applied.

use crate::model_store::ModelState;
use reviewcheck_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Raw output of the probabilistic engine
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilisticSignal {
    /// Class with maximal probability; ties go to the earliest class
    pub predicted_class: String,
    /// `(class, probability)` in classifier class order
    pub probabilities: Vec<(String, f64)>,
}

impl ProbabilisticSignal {
    /// Largest class probability
    pub fn top_probability(&self) -> f64 {
        self.probabilities
            .iter()
            .map(|(_, p)| *p)
            .fold(0.0, f64::max)
    }

    pub fn probability_of(&self, class: &str) -> Option<f64> {
        self.probabilities
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(class))
            .map(|(_, p)| *p)
    }
}

/// Model prediction in the shape of the raw `/api/predict` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    pub probs: BTreeMap<String, f64>,
    #[serde(rename = "topProb")]
    pub top_prob: f64,
}

impl From<ProbabilisticSignal> for Prediction {
    fn from(signal: ProbabilisticSignal) -> Self {
        let top_prob = signal.top_probability();
        Self {
            label: signal.predicted_class,
            probs: signal.probabilities.into_iter().collect(),
            top_prob,
        }
    }
}

/// Engine backed by the loaded model artifact
#[derive(Debug, Clone)]
pub struct ProbabilisticEngine {
    state: Arc<ModelState>,
}

impl ProbabilisticEngine {
    pub fn new(state: Arc<ModelState>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    /// Per-class probabilities and the arg-max class
    pub fn classify(&self, text: &str) -> Result<ProbabilisticSignal> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyText);
        }

        let artifact = self.state.artifact()?;
        let probs = artifact.predict_proba(text)?;
        let classes = artifact.classes();

        let mut best = 0;
        for (i, p) in probs.iter().enumerate() {
            if *p > probs[best] {
                best = i;
            }
        }

        Ok(ProbabilisticSignal {
            predicted_class: classes[best].clone(),
            probabilities: classes.iter().cloned().zip(probs).collect(),
        })
    }

    /// Raw prediction keyed by internal class names
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        self.classify(text).map(Prediction::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ModelArtifact;
    use reviewcheck_core::ModelDiagnostics;

    fn engine() -> ProbabilisticEngine {
        let artifact = ModelArtifact::from_json_str(
            r#"{
                "vectorizer": {"type": "count", "vocabulary": {"deal": 0, "tasty": 1}},
                "classifier": {
                    "type": "logistic_regression",
                    "classes": ["advertisement", "feedback", "irrelevant"],
                    "coef": [[2.0, 0.0], [0.0, 2.0], [0.0, 0.0]],
                    "intercept": [0.0, 0.0, 0.0]
                }
            }"#,
        )
        .unwrap();
        ProbabilisticEngine::new(Arc::new(ModelState::loaded(artifact)))
    }

    #[test]
    fn test_argmax_is_prediction() {
        let signal = engine().classify("tasty tasty noodles").unwrap();

        assert_eq!(signal.predicted_class, "feedback");
        assert_eq!(signal.probability_of("feedback"), Some(signal.top_probability()));
        let total: f64 = signal.probabilities.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ties_go_to_first_class() {
        let signal = engine().classify("nothing known here").unwrap();

        assert_eq!(signal.predicted_class, "advertisement");
        for (_, p) in &signal.probabilities {
            assert!((p - 1.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_classes_keep_model_order() {
        let signal = engine().classify("deal").unwrap();
        let order: Vec<_> = signal.probabilities.iter().map(|(c, _)| c.as_str()).collect();

        assert_eq!(order, vec!["advertisement", "feedback", "irrelevant"]);
    }

    #[test]
    fn test_missing_model() {
        let state = ModelState::unavailable(ModelDiagnostics::default());
        let engine = ProbabilisticEngine::new(Arc::new(state));

        assert!(matches!(engine.classify("hello there"), Err(Error::ModelUnavailable(_))));
    }

    #[test]
    fn test_blank_text_checked_before_model() {
        let state = ModelState::unavailable(ModelDiagnostics::default());
        let engine = ProbabilisticEngine::new(Arc::new(state));

        assert!(matches!(engine.classify("   "), Err(Error::EmptyText)));
    }

    #[test]
    fn test_prediction_shape() {
        let prediction = engine().predict("deal deal").unwrap();
        let value = serde_json::to_value(&prediction).unwrap();

        assert_eq!(prediction.label, "advertisement");
        assert!(value.get("topProb").is_some());
        assert_eq!(prediction.probs.len(), 3);
    }
}
