use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::AppResult;
use crate::models::domain::{Label, QuizPolicy};

/// Request to generate a quiz either on an encyclopedia `topic` or on the supplied `text`.
///
/// When supplying `text` on a topic such as Bill Gates, each item should be one subtopic such as
/// Early Life or Career. If neither is supplied, a trending topic is picked.
///
/// The quiz holds at most `max` questions; `None` means every question that could be generated.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_source"))]
pub struct QuizRequest {
    pub topic: Option<String>,

    #[validate(length(min = 1))]
    pub text: Option<Vec<String>>,

    pub labels: Option<Vec<Label>>,

    #[validate(range(min = 0, message = "max cannot be negative"))]
    pub max: Option<i64>,

    #[serde(default)]
    pub allow_sans_years: bool,

    #[serde(default)]
    pub duplicate_answers: bool,

    #[serde(default)]
    pub duplicate_sentences: bool,

    /// Fixes every random choice made while building the quiz.
    pub seed: Option<u64>,
}

fn validate_source(request: &QuizRequest) -> Result<(), ValidationError> {
    if request.topic.is_some() && request.text.is_some() {
        return Err(ValidationError::new("source")
            .with_message("Both topic and text cannot be supplied".into()));
    }
    if let Some(text) = &request.text {
        if text.iter().any(|section| section.trim().is_empty()) {
            return Err(ValidationError::new("text")
                .with_message("text sections cannot be blank".into()));
        }
    }
    Ok(())
}

impl QuizRequest {
    pub fn with_topic(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            ..Self::default()
        }
    }

    pub fn with_text(text: Vec<String>) -> Self {
        Self {
            text: Some(text),
            ..Self::default()
        }
    }

    /// Validates the request and extracts the rules the quiz is built with.
    pub fn policy(&self) -> AppResult<QuizPolicy> {
        self.validate()?;
        Ok(QuizPolicy {
            labels: self.labels.clone().unwrap_or_else(|| Label::ALL.to_vec()),
            allow_sans_years: self.allow_sans_years,
            duplicate_answers: self.duplicate_answers,
            duplicate_sentences: self.duplicate_sentences,
            max: self.max.map(|max| max.max(0) as usize),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingParams {
    pub max: Option<usize>,
}
