//! Model artifact: a text vectorizer paired with a probabilistic classifier
//!
//! Artifacts are JSON documents with exactly two required components:
//!
//! ```json
//! {
//!   "vectorizer": { "type": "tfidf", "vocabulary": {"food": 0}, "idf": [1.0] },
//!   "classifier": { "type": "logistic_regression", "classes": ["feedback", "rant"],
//!                   "coef": [[0.4]], "intercept": [0.1] }
//! }
//! ```
//!
//! The classifier is a logistic regression, a multinomial naive Bayes model
//! or a random forest of flat-array trees.
//!
//! The shape is validated once, when the artifact is loaded. Any mismatch
//! between the vectorizer's feature space and the classifier's weights is an
//! `InvalidArtifact` error, never a failure at classification time.

use crate::classes::ReviewClass;
use crate::forest::{self, DecisionTree};
use candle_core::{Device, Tensor};
use candle_nn::{Linear, Module};
use regex::Regex;
use reviewcheck_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Sparse feature vector: `(feature index, value)` sorted by index
pub type SparseFeatures = Vec<(usize, f64)>;

/// Text-to-features transform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Vectorizer {
    /// Term frequency scaled by inverse document frequency
    Tfidf(TfidfVectorizer),
    /// Raw term counts
    Count(CountVectorizer),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: Norm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountVectorizer {
    pub vocabulary: HashMap<String, usize>,
    /// Feature dimension; defaults to the largest vocabulary index + 1
    #[serde(default)]
    pub n_features: Option<usize>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_true")]
    pub lowercase: bool,
    /// Clip counts to 1
    #[serde(default)]
    pub binary: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    L1,
    None,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_true() -> bool {
    true
}

impl Vectorizer {
    /// Number of features produced
    pub fn dimension(&self) -> usize {
        match self {
            Self::Tfidf(v) => v.idf.len(),
            Self::Count(v) => v
                .n_features
                .unwrap_or_else(|| v.vocabulary.values().max().map_or(0, |m| m + 1)),
        }
    }

    fn vocabulary(&self) -> &HashMap<String, usize> {
        match self {
            Self::Tfidf(v) => &v.vocabulary,
            Self::Count(v) => &v.vocabulary,
        }
    }

    fn ngram_range(&self) -> (usize, usize) {
        match self {
            Self::Tfidf(v) => v.ngram_range,
            Self::Count(v) => v.ngram_range,
        }
    }

    fn lowercase(&self) -> bool {
        match self {
            Self::Tfidf(v) => v.lowercase,
            Self::Count(v) => v.lowercase,
        }
    }

    fn validate(&self) -> Result<()> {
        let dim = self.dimension();
        if dim == 0 {
            return Err(Error::invalid_artifact("vectorizer has an empty feature space"));
        }
        if let Some((term, idx)) = self.vocabulary().iter().find(|(_, idx)| **idx >= dim) {
            return Err(Error::invalid_artifact(format!(
                "vocabulary term '{term}' maps to feature {idx}, beyond dimension {dim}"
            )));
        }
        let (min_n, max_n) = self.ngram_range();
        if min_n == 0 || min_n > max_n {
            return Err(Error::invalid_artifact(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }
        Ok(())
    }

    /// Transform text into sparse features
    pub fn transform(&self, text: &str, tokenizer: &Regex) -> SparseFeatures {
        let source = if self.lowercase() {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let tokens: Vec<&str> = tokenizer.find_iter(&source).map(|m| m.as_str()).collect();

        let vocabulary = self.vocabulary();
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        let (min_n, max_n) = self.ngram_range();
        for n in min_n..=max_n {
            for gram in tokens.windows(n) {
                if let Some(&idx) = vocabulary.get(&gram.join(" ")) {
                    *counts.entry(idx).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut features: SparseFeatures = counts.into_iter().collect();
        match self {
            Self::Tfidf(v) => {
                for (idx, value) in features.iter_mut() {
                    let tf = if v.sublinear_tf { 1.0 + value.ln() } else { *value };
                    *value = tf * v.idf[*idx];
                }
                normalize(&mut features, v.norm);
            }
            Self::Count(v) => {
                if v.binary {
                    features.iter_mut().for_each(|(_, value)| *value = 1.0);
                }
            }
        }
        features
    }
}

fn normalize(features: &mut SparseFeatures, norm: Norm) {
    let magnitude = match norm {
        Norm::L2 => features.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
        Norm::L1 => features.iter().map(|(_, v)| v.abs()).sum::<f64>(),
        Norm::None => return,
    };
    if magnitude > 0.0 {
        features.iter_mut().for_each(|(_, v)| *v /= magnitude);
    }
}

/// Probabilistic multi-class classifier weights
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassifierSpec {
    /// Multinomial logistic regression; a single coefficient row means a
    /// binary model scoring the second class against the first
    LogisticRegression {
        classes: Vec<String>,
        coef: Vec<Vec<f64>>,
        intercept: Vec<f64>,
    },
    /// Multinomial naive Bayes
    MultinomialNb {
        classes: Vec<String>,
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
    },
    /// Random forest; probabilities are the mean of the trees' normalized
    /// leaf distributions
    RandomForest {
        classes: Vec<String>,
        trees: Vec<DecisionTree>,
    },
}

impl ClassifierSpec {
    pub fn classes(&self) -> &[String] {
        match self {
            Self::LogisticRegression { classes, .. }
            | Self::MultinomialNb { classes, .. }
            | Self::RandomForest { classes, .. } => classes,
        }
    }

    /// Weight rows and biases, one per class; empty for tree ensembles
    fn class_weights(&self) -> (Vec<Vec<f64>>, Vec<f64>) {
        match self {
            Self::LogisticRegression {
                classes,
                coef,
                intercept,
            } if classes.len() == 2 && coef.len() == 1 => {
                let zeros = vec![0.0; coef[0].len()];
                (vec![zeros, coef[0].clone()], vec![0.0, intercept[0]])
            }
            Self::LogisticRegression {
                coef, intercept, ..
            } => (coef.clone(), intercept.clone()),
            Self::MultinomialNb {
                class_log_prior,
                feature_log_prob,
                ..
            } => (feature_log_prob.clone(), class_log_prior.clone()),
            Self::RandomForest { .. } => (Vec::new(), Vec::new()),
        }
    }

    fn validate(&self, n_features: usize) -> Result<()> {
        let classes = self.classes();
        if classes.is_empty() {
            return Err(Error::invalid_artifact("classifier declares no classes"));
        }
        let mut seen = HashSet::new();
        for class in classes {
            if !seen.insert(class.to_lowercase()) {
                return Err(Error::invalid_artifact(format!(
                    "duplicate class name '{class}'"
                )));
            }
            if ReviewClass::from_internal(class).is_none() {
                return Err(Error::invalid_artifact(format!(
                    "unknown class name '{class}' (expected advertisement, feedback, irrelevant or rant)"
                )));
            }
        }

        let (rows, bias) = match self {
            Self::LogisticRegression {
                coef, intercept, ..
            } => {
                let binary = classes.len() == 2 && coef.len() == 1;
                if !binary && coef.len() != classes.len() {
                    return Err(Error::invalid_artifact(format!(
                        "coef has {} rows for {} classes",
                        coef.len(),
                        classes.len()
                    )));
                }
                if intercept.len() != coef.len() {
                    return Err(Error::invalid_artifact(format!(
                        "intercept has {} values for {} coefficient rows",
                        intercept.len(),
                        coef.len()
                    )));
                }
                (coef, intercept)
            }
            Self::MultinomialNb {
                class_log_prior,
                feature_log_prob,
                ..
            } => {
                if feature_log_prob.len() != classes.len()
                    || class_log_prior.len() != classes.len()
                {
                    return Err(Error::invalid_artifact(format!(
                        "naive Bayes tables do not cover {} classes",
                        classes.len()
                    )));
                }
                (feature_log_prob, class_log_prior)
            }
            Self::RandomForest { trees, .. } => {
                if trees.is_empty() {
                    return Err(Error::invalid_artifact("random forest has no trees"));
                }
                for (i, tree) in trees.iter().enumerate() {
                    tree.validate(n_features, classes.len()).map_err(|e| match e {
                        Error::InvalidArtifact(msg) => {
                            Error::invalid_artifact(format!("tree {i}: {msg}"))
                        }
                        other => other,
                    })?;
                }
                return Ok(());
            }
        };

        if let Some(row) = rows.iter().find(|row| row.len() != n_features) {
            return Err(Error::invalid_artifact(format!(
                "weight row has {} features, vectorizer produces {}",
                row.len(),
                n_features
            )));
        }
        // Weights run at single precision, so they must also fit in f32
        let all_finite = rows
            .iter()
            .flatten()
            .chain(bias.iter())
            .all(|v| v.is_finite() && (*v as f32).is_finite());
        if !all_finite {
            return Err(Error::invalid_artifact(
                "classifier weights contain NaN, infinity or values outside f32 range",
            ));
        }
        Ok(())
    }
}

/// Serialized artifact layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactSpec {
    pub vectorizer: Vectorizer,
    #[serde(alias = "model")]
    pub classifier: ClassifierSpec,
}

/// Compiled classifier
#[derive(Debug)]
enum Head {
    /// Linear scores normalized with softmax
    Linear(Linear),
    Forest(Vec<DecisionTree>),
}

/// A validated, ready-to-run model artifact.
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug)]
pub struct ModelArtifact {
    vectorizer: Vectorizer,
    classes: Vec<String>,
    head: Head,
    tokenizer: Regex,
    device: Device,
    source: Option<PathBuf>,
}

impl ModelArtifact {
    /// Validate a spec and compile its classifier head
    pub fn new(spec: ArtifactSpec) -> Result<Self> {
        let ArtifactSpec {
            vectorizer,
            classifier,
        } = spec;

        vectorizer.validate()?;
        let n_features = vectorizer.dimension();
        classifier.validate(n_features)?;

        let device = Device::Cpu;
        let head = match &classifier {
            ClassifierSpec::RandomForest { trees, .. } => Head::Forest(trees.clone()),
            linear => {
                let (rows, bias) = linear.class_weights();
                let n_classes = rows.len();
                let flat: Vec<f32> = rows.iter().flatten().map(|&v| v as f32).collect();
                let bias: Vec<f32> = bias.iter().map(|&v| v as f32).collect();

                let weight = Tensor::from_vec(flat, (n_classes, n_features), &device)
                    .map_err(tensor_error)?;
                let bias = Tensor::from_vec(bias, n_classes, &device).map_err(tensor_error)?;
                Head::Linear(Linear::new(weight, Some(bias)))
            }
        };

        // Tokens of two or more word characters
        let tokenizer = Regex::new(r"\b\w\w+\b")
            .map_err(|e| Error::classifier(format!("Failed to compile tokenizer: {e}")))?;

        Ok(Self {
            vectorizer,
            classes: classifier.classes().to_vec(),
            head,
            tokenizer,
            device,
            source: None,
        })
    }

    /// Parse and validate an artifact from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Validate an already-parsed JSON document
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            Error::invalid_artifact("expected an object with 'vectorizer' and 'classifier' keys")
        })?;

        let has_classifier = object.contains_key("classifier") || object.contains_key("model");
        if !object.contains_key("vectorizer") || !has_classifier {
            return Err(Error::invalid_artifact(
                "expected an object with 'vectorizer' and 'classifier' keys",
            ));
        }

        let spec: ArtifactSpec = serde_json::from_value(value)
            .map_err(|e| Error::invalid_artifact(format!("malformed component: {e}")))?;
        Self::new(spec)
    }

    /// Read, parse and validate an artifact file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut artifact = Self::from_json_str(&content)?;
        artifact.source = Some(path.to_path_buf());
        Ok(artifact)
    }

    /// Class names in classifier order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.vectorizer.dimension()
    }

    /// File the artifact was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn transform(&self, text: &str) -> SparseFeatures {
        self.vectorizer.transform(text, &self.tokenizer)
    }

    /// One probability per class, in classifier order, summing to 1
    pub fn predict_proba(&self, text: &str) -> Result<Vec<f64>> {
        let mut dense = vec![0f64; self.n_features()];
        for (idx, value) in self.transform(text) {
            dense[idx] = value;
        }

        let probs = match &self.head {
            Head::Linear(linear) => self.linear_proba(linear, &dense)?,
            Head::Forest(trees) => forest::predict_proba(trees, &dense, self.classes.len()),
        };

        // Re-normalize in f64 so the sum is exact to well below 1e-6
        let probs: Vec<f64> = probs.into_iter().map(|p| p.max(0.0)).collect();
        let total: f64 = probs.iter().sum();
        if !(total.is_finite() && total > 0.0) {
            return Err(Error::classifier("classifier produced degenerate probabilities"));
        }
        Ok(probs.into_iter().map(|p| p / total).collect())
    }

    fn linear_proba(&self, linear: &Linear, dense: &[f64]) -> Result<Vec<f64>> {
        let input: Vec<f32> = dense.iter().map(|&v| v as f32).collect();
        let input = Tensor::from_vec(input, (1, dense.len()), &self.device)
            .map_err(tensor_error)?;
        let logits = linear.forward(&input).map_err(tensor_error)?;
        let probs = candle_nn::ops::softmax(&logits, candle_core::D::Minus1)
            .and_then(|p| p.squeeze(0))
            .and_then(|p| p.to_vec1::<f32>())
            .map_err(tensor_error)?;
        Ok(probs.into_iter().map(f64::from).collect())
    }
}

fn tensor_error(e: candle_core::Error) -> Error {
    Error::classifier(format!("tensor operation failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tiny_artifact() -> serde_json::Value {
        json!({
            "vectorizer": {
                "type": "tfidf",
                "vocabulary": {"food": 0, "great": 1, "buy": 2, "buy now": 3},
                "idf": [1.0, 1.0, 2.0, 2.0],
                "ngram_range": [1, 2]
            },
            "classifier": {
                "type": "logistic_regression",
                "classes": ["advertisement", "feedback"],
                "coef": [[-1.0, -1.0, 1.0, 2.0], [1.0, 1.0, -1.0, -2.0]],
                "intercept": [0.0, 0.0]
            }
        })
    }

    #[test]
    fn test_tfidf_transform_with_bigrams() {
        let artifact = ModelArtifact::from_value(tiny_artifact()).unwrap();
        let features = artifact.transform("Buy now! Buy");

        // buy: tf 2 * idf 2, "buy now": tf 1 * idf 2, then l2-normalized
        let expected_norm = (16.0f64 + 4.0).sqrt();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].0, 2);
        assert!((features[0].1 - 4.0 / expected_norm).abs() < 1e-12);
        assert_eq!(features[1].0, 3);
        assert!((features[1].1 - 2.0 / expected_norm).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_words_give_empty_features() {
        let artifact = ModelArtifact::from_value(tiny_artifact()).unwrap();
        assert!(artifact.transform("zzz qqq").is_empty());
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let artifact = ModelArtifact::from_value(tiny_artifact()).unwrap();

        let probs = artifact.predict_proba("great food").unwrap();
        assert_eq!(probs.len(), 2);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(probs[1] > probs[0]);
    }

    #[test]
    fn test_binary_logistic_regression_single_row() {
        let artifact = ModelArtifact::from_value(json!({
            "vectorizer": {"type": "count", "vocabulary": {"spam": 0}},
            "classifier": {
                "type": "logistic_regression",
                "classes": ["feedback", "advertisement"],
                "coef": [[3.0]],
                "intercept": [0.0]
            }
        }))
        .unwrap();

        let probs = artifact.predict_proba("spam").unwrap();
        let expected = 1.0 / (1.0 + (-3.0f64).exp());
        assert!((probs[1] - expected).abs() < 1e-5);

        let neutral = artifact.predict_proba("hello").unwrap();
        assert!((neutral[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_naive_bayes_head() {
        let artifact = ModelArtifact::from_value(json!({
            "vectorizer": {"type": "count", "vocabulary": {"deal": 0, "tasty": 1}},
            "model": {
                "type": "multinomial_nb",
                "classes": ["advertisement", "feedback"],
                "class_log_prior": [-0.693, -0.693],
                "feature_log_prob": [[-0.2, -2.0], [-2.0, -0.2]]
            }
        }))
        .unwrap();

        let probs = artifact.predict_proba("tasty tasty").unwrap();
        assert!(probs[1] > 0.9);
    }

    #[test]
    fn test_missing_component_is_invalid() {
        let err = ModelArtifact::from_value(json!({"vectorizer": {"type": "count", "vocabulary": {}}}))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact(_)));

        let err = ModelArtifact::from_value(json!(["not", "a", "dict"])).unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact(_)));
    }

    #[test]
    fn test_shape_mismatch_is_invalid() {
        let mut value = tiny_artifact();
        value["classifier"]["coef"][1] = json!([1.0, 2.0]);

        let err = ModelArtifact::from_value(value).unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact(ref msg) if msg.contains("features")));
    }

    #[test]
    fn test_weights_beyond_f32_range_are_invalid() {
        let mut value = tiny_artifact();
        value["classifier"]["coef"][0][0] = json!(1e39);
        value["classifier"]["coef"][1][0] = json!(-1e39);

        let err = ModelArtifact::from_value(value).unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact(ref msg) if msg.contains("f32")));

        let mut value = tiny_artifact();
        value["classifier"]["intercept"][1] = json!(-5e38);
        assert!(matches!(
            ModelArtifact::from_value(value),
            Err(Error::InvalidArtifact(_))
        ));
    }

    #[test]
    fn test_unknown_class_is_invalid() {
        let mut value = tiny_artifact();
        value["classifier"]["classes"] = json!(["spam", "feedback"]);

        let err = ModelArtifact::from_value(value).unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact(ref msg) if msg.contains("'spam'")));
    }

    #[test]
    fn test_class_names_are_case_insensitive() {
        let mut value = tiny_artifact();
        value["classifier"]["classes"] = json!(["Advertisement", "FEEDBACK"]);

        let artifact = ModelArtifact::from_value(value).unwrap();
        assert_eq!(artifact.classes(), &["Advertisement", "FEEDBACK"]);
    }

    fn forest_artifact() -> serde_json::Value {
        json!({
            "vectorizer": {"type": "count", "vocabulary": {"deal": 0, "food": 1}},
            "classifier": {
                "type": "random_forest",
                "classes": ["advertisement", "feedback"],
                "trees": [
                    {
                        "children_left": [1, -1, -1],
                        "children_right": [2, -1, -1],
                        "feature": [0, -2, -2],
                        "threshold": [0.5, -2.0, -2.0],
                        "value": [[9.0, 11.0], [1.0, 9.0], [8.0, 2.0]]
                    },
                    {
                        "children_left": [1, -1, -1],
                        "children_right": [2, -1, -1],
                        "feature": [1, -2, -2],
                        "threshold": [0.5, -2.0, -2.0],
                        "value": [[6.0, 9.0], [6.0, 4.0], [0.0, 5.0]]
                    }
                ]
            }
        })
    }

    #[test]
    fn test_random_forest_averages_leaf_distributions() {
        let artifact = ModelArtifact::from_value(forest_artifact()).unwrap();

        // tree 0 -> [0.8, 0.2], tree 1 -> [0.6, 0.4]
        let ad = artifact.predict_proba("deal deal").unwrap();
        assert!((ad[0] - 0.7).abs() < 1e-9);
        assert!((ad[1] - 0.3).abs() < 1e-9);

        // tree 0 -> [0.1, 0.9], tree 1 -> [0.0, 1.0]
        let clean = artifact.predict_proba("food").unwrap();
        assert!((clean[0] - 0.05).abs() < 1e-9);
        assert!((clean[1] - 0.95).abs() < 1e-9);
        assert!((clean.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_forest_shape_is_checked_at_load() {
        let mut value = forest_artifact();
        value["classifier"]["trees"][1]["feature"][0] = json!(5);
        let err = ModelArtifact::from_value(value).unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact(ref msg) if msg.starts_with("tree 1")));

        let mut value = forest_artifact();
        value["classifier"]["trees"][0]["value"][2] = json!([8.0]);
        assert!(matches!(
            ModelArtifact::from_value(value),
            Err(Error::InvalidArtifact(_))
        ));

        let mut value = forest_artifact();
        value["classifier"]["trees"] = json!([]);
        let err = ModelArtifact::from_value(value).unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact(ref msg) if msg.contains("no trees")));
    }

    #[test]
    fn test_duplicate_classes_are_invalid() {
        let mut value = tiny_artifact();
        value["classifier"]["classes"] = json!(["feedback", "Feedback"]);

        let err = ModelArtifact::from_value(value).unwrap_err();
        assert!(matches!(err, Error::InvalidArtifact(ref msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_vocabulary_out_of_range_is_invalid() {
        let mut value = tiny_artifact();
        value["vectorizer"]["vocabulary"]["pizza"] = json!(9);

        assert!(matches!(
            ModelArtifact::from_value(value),
            Err(Error::InvalidArtifact(_))
        ));
    }

    #[test]
    fn test_from_path_records_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, tiny_artifact().to_string()).unwrap();

        let artifact = ModelArtifact::from_path(&path).unwrap();
        assert_eq!(artifact.source(), Some(path.as_path()));
        assert_eq!(artifact.classes(), &["advertisement", "feedback"]);
    }
}
