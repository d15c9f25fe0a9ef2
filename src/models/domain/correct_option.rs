use std::collections::BTreeSet;

/// The distractor pools available for one answer.
///
/// `relevant_options` come from the section the question is asked from and always contain the
/// `answer`; `options` come from every other section. The pools never overlap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorrectOption {
    pub relevant_options: BTreeSet<String>,
    pub options: BTreeSet<String>,
    pub answer: String,
}

impl CorrectOption {
    /// # Panics
    ///
    /// Panics if the pools overlap or if the `answer` is in neither pool.
    pub fn new(
        relevant_options: BTreeSet<String>,
        options: BTreeSet<String>,
        answer: impl Into<String>,
    ) -> Self {
        let answer = answer.into();
        assert!(
            relevant_options.is_disjoint(&options),
            "relevant options {relevant_options:?} must not overlap options {options:?}"
        );
        assert!(
            relevant_options.contains(&answer) || options.contains(&answer),
            "answer ({answer}) must be in the relevant options {relevant_options:?} or options {options:?}"
        );
        Self {
            relevant_options,
            options,
            answer,
        }
    }

    /// Same-section names other than the answer, in a stable order.
    pub fn relevant_distractors(&self) -> Vec<&String> {
        self.relevant_options
            .iter()
            .filter(|name| **name != self.answer)
            .collect()
    }

    /// Cross-section names other than the answer, in a stable order.
    pub fn cross_section_distractors(&self) -> Vec<&String> {
        self.options
            .iter()
            .filter(|name| **name != self.answer)
            .collect()
    }
}
