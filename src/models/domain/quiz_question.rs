use serde::{Deserialize, Serialize};

use crate::models::domain::label::Label;

pub const OPTION_COUNT: usize = 4;

/// Character offsets of an answer inside its question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerOffset {
    pub start: usize,
    pub end: usize,
}

impl AnswerOffset {
    /// # Panics
    ///
    /// Panics unless `start < end`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start < end, "start ({start}) must be less than end ({end})");
        Self { start, end }
    }

    /// Locates the first occurrence of `answer` in `text`, counting characters rather than bytes.
    pub fn locate(text: &str, answer: &str) -> Option<Self> {
        if answer.is_empty() {
            return None;
        }
        let byte_start = text.find(answer)?;
        let start = text[..byte_start].chars().count();
        Some(Self::new(start, start + answer.chars().count()))
    }
}

/// Multiple choice fill-in-the-blank question with four options.
///
/// The `question` is the tagged sentence itself; the answer is the substring at `answer_offset`.
/// `context` is the sentence before the question in its passage, or `None` for the first
/// sentence of a passage.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer_offset: AnswerOffset,
    pub label: Label,
    pub context: Option<String>,
}

impl QuizQuestion {
    /// # Panics
    ///
    /// Panics if there aren't exactly four unique options, or if the answer at `answer_offset`
    /// isn't one of them.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer_offset: AnswerOffset,
        label: Label,
        context: Option<String>,
    ) -> Self {
        let question = Self {
            question: question.into(),
            options,
            answer_offset,
            label,
            context,
        };
        assert_eq!(
            question.options.len(),
            OPTION_COUNT,
            "options must have a size of four: {question:?}"
        );
        for (index, option) in question.options.iter().enumerate() {
            assert!(
                !question.options[index + 1..].contains(option),
                "options must be unique: {:?}",
                question.options
            );
        }
        let answer = question.answer();
        assert!(
            question.options.contains(&answer),
            "answer ({answer}) must be in options ({:?})",
            question.options
        );
        question
    }

    pub fn answer(&self) -> String {
        self.question
            .chars()
            .skip(self.answer_offset.start)
            .take(self.answer_offset.end - self.answer_offset.start)
            .collect()
    }
}
