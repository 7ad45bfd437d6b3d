use std::collections::HashSet;

use crate::domain::{
    common::entities::app_errors::CoreError,
    label::{
        entities::{DetectedFood, LabelCandidate},
        policies::{
            DEFAULT_GENERIC_LABELS, DEFAULT_GENERIC_PENALTY, normalize_label, validate_penalty,
        },
    },
};

/// Re-ranks vision labels so that vague terms ("Food", colors, ...) lose to
/// specific ones. It only reorders what the vision API returned, it never
/// makes up a label.
#[derive(Debug, Clone)]
pub struct LabelSelector {
    generic_labels: HashSet<String>,
    penalty: f32,
}

impl LabelSelector {
    pub fn new<I, S>(generic_labels: I, penalty: f32) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        validate_penalty(penalty).map_err(CoreError::InvalidConfiguration)?;

        let generic_labels = generic_labels
            .into_iter()
            .map(|label| normalize_label(label.as_ref()))
            .filter(|label| !label.is_empty())
            .collect();

        Ok(Self {
            generic_labels,
            penalty,
        })
    }

    pub fn is_generic(&self, description: &str) -> bool {
        self.generic_labels.contains(&normalize_label(description))
    }

    pub fn adjusted_score(&self, candidate: &LabelCandidate) -> f32 {
        let confidence = if candidate.confidence.is_finite() {
            candidate.confidence
        } else {
            0.0
        };

        if self.is_generic(&candidate.description) {
            confidence * self.penalty
        } else {
            confidence
        }
    }

    /// Picks the candidate with the highest adjusted score. Ties keep the
    /// earliest candidate.
    pub fn select(&self, candidates: &[LabelCandidate]) -> DetectedFood {
        let mut best: Option<(&LabelCandidate, f32)> = None;

        for candidate in candidates {
            let score = self.adjusted_score(candidate);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((candidate, score)),
            }
        }

        match best {
            Some((candidate, score)) => {
                tracing::debug!(
                    label = %candidate.description,
                    score,
                    candidates = candidates.len(),
                    "Selected food label"
                );
                DetectedFood::Label(candidate.description.clone())
            }
            None => DetectedFood::NoFoodDetected,
        }
    }
}

impl Default for LabelSelector {
    fn default() -> Self {
        Self {
            generic_labels: DEFAULT_GENERIC_LABELS
                .iter()
                .map(|label| normalize_label(label))
                .collect(),
            penalty: DEFAULT_GENERIC_PENALTY,
        }
    }
}
