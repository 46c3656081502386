use std::ops::Index;
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromptListError {
    #[error("a quiz needs at least one prompt")]
    Empty,
}

/// One question the user answers by voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
}

impl Prompt {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Fixed, ordered, non-empty prompt sequence shared by every run built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptList(Arc<[Prompt]>);

impl PromptList {
    /// # Errors
    ///
    /// Returns `PromptListError::Empty` when no prompts are given.
    pub fn new(prompts: Vec<Prompt>) -> Result<Self, PromptListError> {
        if prompts.is_empty() {
            return Err(PromptListError::Empty);
        }
        Ok(Self(prompts.into()))
    }

    /// # Errors
    ///
    /// Returns `PromptListError::Empty` when no texts are given.
    pub fn from_texts<I, S>(texts: I) -> Result<Self, PromptListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(Prompt::new).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Prompt> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prompt> {
        self.0.iter()
    }
}

impl Index<usize> for PromptList {
    type Output = Prompt;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
