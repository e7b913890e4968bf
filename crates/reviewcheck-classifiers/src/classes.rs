//! Fixed mapping between model class names and UI labels

use reviewcheck_core::Flag;

/// Moderation class known to the UI.
///
/// The variant order is the order UI labels are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewClass {
    Advertisement,
    Irrelevant,
    Rant,
    /// A clean, on-topic review
    Feedback,
}

impl ReviewClass {
    /// All classes in UI order
    pub const ALL: [ReviewClass; 4] = [
        ReviewClass::Advertisement,
        ReviewClass::Irrelevant,
        ReviewClass::Rant,
        ReviewClass::Feedback,
    ];

    /// Class name as produced by the trained model
    pub fn internal_name(&self) -> &'static str {
        match self {
            Self::Advertisement => "advertisement",
            Self::Irrelevant => "irrelevant",
            Self::Rant => "rant",
            Self::Feedback => "feedback",
        }
    }

    /// UI-facing label
    pub fn ui_label(&self) -> &'static str {
        match self {
            Self::Advertisement => "Advertisement",
            Self::Irrelevant => "Irrelevant",
            Self::Rant => "Rant (no visit)",
            Self::Feedback => "Clean Review",
        }
    }

    /// Resolve a model class name, ignoring case
    pub fn from_internal(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.internal_name().eq_ignore_ascii_case(name))
    }

    /// Whether predicting this class is a moderation violation
    pub fn is_violation(&self) -> bool {
        self.flag().is_some()
    }

    /// Flag raised when this class is predicted
    pub fn flag(&self) -> Option<Flag> {
        match self {
            Self::Advertisement => Some(Flag::Advertisement),
            Self::Irrelevant => Some(Flag::Irrelevant),
            Self::Rant => Some(Flag::RantNoVisit),
            Self::Feedback => None,
        }
    }
}
