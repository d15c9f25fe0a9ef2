use crate::models::domain::label::Label;

/// Caller-chosen rules that shape a quiz.
///
/// Questions on dates may have options lacking years (e.g., `June 7` rather than `June 7, 2000`),
/// which are usually too vague to study from, so they are disallowed unless `allow_sans_years`.
///
/// `duplicate_answers` keeps questions whose answers repeat ("Apple was founded by Steve Jobs."
/// and "Apple bought NeXT to bring back Steve Jobs." both have the answer "Steve Jobs").
/// `duplicate_sentences` keeps several questions asked from the same sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizPolicy {
    pub labels: Vec<Label>,
    pub allow_sans_years: bool,
    pub duplicate_answers: bool,
    pub duplicate_sentences: bool,
    pub max: Option<usize>,
}

impl Default for QuizPolicy {
    fn default() -> Self {
        Self {
            labels: Label::ALL.to_vec(),
            allow_sans_years: false,
            duplicate_answers: false,
            duplicate_sentences: false,
            max: None,
        }
    }
}
