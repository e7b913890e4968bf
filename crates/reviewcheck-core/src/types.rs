//! Core types for ReviewCheck

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single user-submitted review awaiting classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Position in the submitted batch, starting at 1
    #[serde(default = "default_id")]
    pub id: usize,

    /// Review body
    pub text: String,

    /// Place (business, venue) the review was written for
    #[serde(default)]
    pub place: Option<String>,

    /// Reviewer name
    #[serde(default)]
    pub user: Option<String>,

    /// Free-form timestamp as supplied by the source
    #[serde(default)]
    pub timestamp: Option<String>,
}

fn default_id() -> usize {
    1
}

impl Review {
    /// Create a review with the given text and id 1
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: default_id(),
            text: text.into(),
            place: None,
            user: None,
            timestamp: None,
        }
    }

    /// Set the batch position
    pub fn with_id(mut self, id: usize) -> Self {
        self.id = id;
        self
    }

    /// Set the reviewed place
    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Set the reviewer name
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the timestamp
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Text with surrounding whitespace removed, or `None` when blank
    pub fn trimmed_text(&self) -> Option<&str> {
        let text = self.text.trim();
        (!text.is_empty()).then_some(text)
    }
}

/// Moderation flag raised against a review.
///
/// Serialized as the UI-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "Advertisement")]
    Advertisement,
    #[serde(rename = "Irrelevant")]
    Irrelevant,
    #[serde(rename = "Rant (no visit)")]
    RantNoVisit,
    /// Negative sentiment without substance; heuristic engine only
    #[serde(rename = "Rant")]
    Rant,
}

impl Flag {
    /// UI-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Advertisement => "Advertisement",
            Self::Irrelevant => "Irrelevant",
            Self::RantNoVisit => "Rant (no visit)",
            Self::Rant => "Rant",
        }
    }

    /// Whether this is either rant flavour
    pub fn is_rant(&self) -> bool {
        matches!(self, Self::RantNoVisit | Self::Rant)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Uniform classification output, identical in shape for both engines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub id: usize,
    pub place: String,
    pub user: String,
    pub timestamp: String,

    /// First 120 characters of the text, with a trailing ellipsis when cut
    pub snippet: String,
    pub full_text: String,

    /// How related the review is to the reviewed place (0.0-1.0)
    pub relevancy: f64,

    /// Overall review quality (0.0-1.0)
    pub quality_score: f64,

    /// Raised flags, in detection order, without duplicates
    pub flags: Vec<Flag>,

    /// Human-readable justification strings
    pub evidence: Vec<String>,

    /// UI label -> probability (probabilistic engine only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<BTreeMap<String, f64>>,

    /// Highest class probability (probabilistic engine only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Internal class name chosen by the model (probabilistic engine only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_class: Option<String>,
}

impl ClassificationResult {
    /// Whether any moderation flag was raised
    pub fn is_flagged(&self) -> bool {
        !self.flags.is_empty()
    }

    /// Check for a specific flag
    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }
}

/// One location that was tried while looking for a model artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateStatus {
    pub path: String,
    pub exists: bool,
}

impl CandidateStatus {
    pub fn new(path: impl Into<String>, exists: bool) -> Self {
        Self {
            path: path.into(),
            exists,
        }
    }
}

/// Why no model artifact is available
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDiagnostics {
    /// Every candidate location, in the order it was tried
    pub candidates: Vec<CandidateStatus>,

    /// Description of the most recent load failure
    pub last_error: Option<String>,
}

impl fmt::Display for ModelDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "checked paths: [")?;
        for (i, candidate) in self.candidates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let state = if candidate.exists { "found" } else { "missing" };
            write!(f, "{} ({})", candidate.path, state)?;
        }
        write!(f, "]")?;
        if let Some(err) = &self.last_error {
            write!(f, "; last error: {}", err)?;
        }
        Ok(())
    }
}
