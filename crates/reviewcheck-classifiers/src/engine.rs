//! Decision engine trait and common types

use crate::heuristic::{HeuristicEngine, HeuristicSignal};
use crate::probabilistic::{ProbabilisticEngine, ProbabilisticSignal};
use reviewcheck_core::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which decision strategy a service runs.
///
/// The two engines are alternatives; their outputs are never merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Model artifact with the natural decision boundary
    #[default]
    Probabilistic,
    /// Lexicon and pattern rules
    Heuristic,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Probabilistic => "probabilistic",
            Self::Heuristic => "heuristic",
        }
    }

    /// Name of the decision policy reported to clients
    pub fn decision_method(&self) -> &'static str {
        match self {
            Self::Probabilistic => "natural_boundary",
            Self::Heuristic => "heuristic_rules",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = reviewcheck_core::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "probabilistic" | "model" | "ml" => Ok(Self::Probabilistic),
            "heuristic" | "rules" => Ok(Self::Heuristic),
            other => Err(reviewcheck_core::Error::config(format!(
                "unknown engine '{other}' (expected 'probabilistic' or 'heuristic')"
            ))),
        }
    }
}

/// Engine-specific raw output, before scoring
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationSignal {
    Probabilistic(ProbabilisticSignal),
    Heuristic(HeuristicSignal),
}

/// Trait for both decision strategies.
///
/// Classification is synchronous and pure: the same text and place always
/// produce the same signal for a given engine state.
pub trait DecisionEngine: Send + Sync {
    /// Classify already-trimmed review text
    fn classify(&self, text: &str, place: Option<&str>) -> Result<ClassificationSignal>;

    /// Get the engine kind
    fn kind(&self) -> EngineKind;

    /// Whether the engine can classify right now
    fn is_ready(&self) -> bool {
        true
    }
}

impl DecisionEngine for ProbabilisticEngine {
    fn classify(&self, text: &str, _place: Option<&str>) -> Result<ClassificationSignal> {
        ProbabilisticEngine::classify(self, text).map(ClassificationSignal::Probabilistic)
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Probabilistic
    }

    fn is_ready(&self) -> bool {
        self.state().is_loaded()
    }
}

impl DecisionEngine for HeuristicEngine {
    fn classify(&self, text: &str, place: Option<&str>) -> Result<ClassificationSignal> {
        HeuristicEngine::classify(self, text, place).map(ClassificationSignal::Heuristic)
    }

    fn kind(&self) -> EngineKind {
        EngineKind::Heuristic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_kind_parsing() {
        assert_eq!("Heuristic".parse::<EngineKind>().unwrap(), EngineKind::Heuristic);
        assert_eq!("ml".parse::<EngineKind>().unwrap(), EngineKind::Probabilistic);
        assert!("bayes".parse::<EngineKind>().is_err());
    }

    #[test]
    fn test_heuristic_engine_is_always_ready() {
        let engine: Box<dyn DecisionEngine> = Box::new(HeuristicEngine::new().unwrap());

        assert!(engine.is_ready());
        assert_eq!(engine.kind().decision_method(), "heuristic_rules");
        assert!(matches!(
            engine.classify("click here for the best deals", None).unwrap(),
            ClassificationSignal::Heuristic(_)
        ));
    }
}
