//! Shared fixtures for classifier integration tests

#![allow(dead_code)]

use reviewcheck_classifiers::{ModelArtifact, ModelState};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A small four-class TF-IDF + logistic regression model.
///
/// Each class owns two vocabulary terms with a strong positive weight.
pub fn review_model_json() -> serde_json::Value {
    let vocabulary = [
        "deal", "click", "bitcoin", "election", "never", "heard", "food", "service",
    ];
    let vocabulary: serde_json::Map<_, _> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, term)| (term.to_string(), json!(i)))
        .collect();

    let row = |hot: [usize; 2]| -> Vec<f64> {
        (0..8)
            .map(|i| if hot.contains(&i) { 4.0 } else { -0.5 })
            .collect()
    };

    json!({
        "vectorizer": {
            "type": "tfidf",
            "vocabulary": vocabulary,
            "idf": [1.0, 1.0, 1.5, 1.5, 1.2, 1.2, 1.0, 1.0]
        },
        "classifier": {
            "type": "logistic_regression",
            "classes": ["advertisement", "irrelevant", "rant", "feedback"],
            "coef": [row([0, 1]), row([2, 3]), row([4, 5]), row([6, 7])],
            "intercept": [0.0, 0.0, 0.0, 0.1]
        }
    })
}

pub fn loaded_state() -> Arc<ModelState> {
    let artifact = ModelArtifact::from_value(review_model_json()).expect("fixture artifact is valid");
    Arc::new(ModelState::loaded(artifact))
}

/// Write the fixture model into `dir` under `name`
pub fn write_model(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, review_model_json().to_string()).expect("write fixture model");
    path
}
