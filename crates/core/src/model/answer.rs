use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque record that a prompt's recording went through analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerMarker {
    prompt_index: usize,
    label: String,
    answered_at: DateTime<Utc>,
}

impl AnswerMarker {
    /// Placeholder marker produced by the simulated analysis.
    #[must_use]
    pub fn processed(prompt_index: usize, answered_at: DateTime<Utc>) -> Self {
        Self {
            prompt_index,
            label: format!("Answer {} processed", prompt_index + 1),
            answered_at,
        }
    }

    #[must_use]
    pub fn prompt_index(&self) -> usize {
        self.prompt_index
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn answered_at(&self) -> DateTime<Utc> {
        self.answered_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn processed_label_is_one_based() {
        let marker = AnswerMarker::processed(0, fixed_now());
        assert_eq!(marker.label(), "Answer 1 processed");
        assert_eq!(marker.prompt_index(), 0);
    }
}
