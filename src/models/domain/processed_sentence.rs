use serde::{Deserialize, Serialize};

use crate::models::domain::label::Label;

/// The sentence that was processed, and the sentence before it in the same section, if any.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ProcessedContext {
    pub sentence: String,
    pub previous: Option<String>,
}

/// Every name of one [`Label`] found in one sentence.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ProcessedSentence {
    pub context: ProcessedContext,
    pub label: Label,
    pub names: Vec<String>,
}

/// A passage of text, such as the section on the early life of Bill Gates.
pub type ProcessedSection = Vec<ProcessedSentence>;

impl ProcessedSentence {
    pub fn new(
        sentence: impl Into<String>,
        previous: Option<String>,
        label: Label,
        names: Vec<String>,
    ) -> Self {
        Self {
            context: ProcessedContext {
                sentence: sentence.into(),
                previous,
            },
            label,
            names,
        }
    }

    pub fn sentence(&self) -> &str {
        &self.context.sentence
    }
}
