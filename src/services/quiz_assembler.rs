use std::collections::HashSet;

use log::info;
use rand::{seq::SliceRandom, Rng};

use crate::{
    clients::{EntitySynthesizer, SimilarPhraseSource},
    errors::AppResult,
    models::domain::{ProcessedSection, QuizPolicy, QuizQuestion},
    services::{
        option_pool::OptionPool, question_synthesizer::QuestionSynthesizer,
        sentence_deduplicator::deduplicate_sentences,
    },
};

pub struct QuizAssembler<'a> {
    similar: &'a dyn SimilarPhraseSource,
    synthesizer: &'a dyn EntitySynthesizer,
    synthetic_attempts: usize,
}

impl<'a> QuizAssembler<'a> {
    pub fn new(
        similar: &'a dyn SimilarPhraseSource,
        synthesizer: &'a dyn EntitySynthesizer,
        synthetic_attempts: usize,
    ) -> Self {
        Self {
            similar,
            synthesizer,
            synthetic_attempts,
        }
    }

    /// Builds a quiz from tagged `sections` following the `policy`.
    ///
    /// Option pools need every section, so all sections must have been tagged beforehand.
    pub async fn synthesize_quiz<R: Rng>(
        &self,
        sections: Vec<ProcessedSection>,
        policy: &QuizPolicy,
        rng: &mut R,
    ) -> AppResult<Vec<QuizQuestion>> {
        if policy.max == Some(0) {
            return Ok(Vec::new());
        }
        // Unrequested labels are dropped first so sentence dedup never keeps one over a requested label
        let sections: Vec<ProcessedSection> = sections
            .into_iter()
            .map(|section| {
                let requested = section
                    .into_iter()
                    .filter(|processed| policy.labels.contains(&processed.label))
                    .collect();
                deduplicate_sentences(requested, policy.duplicate_sentences)
            })
            .collect();
        let pool = OptionPool::build(&sections, &policy.labels);
        let synthesizer = QuestionSynthesizer::new(
            &pool,
            self.similar,
            self.synthesizer,
            policy.allow_sans_years,
            self.synthetic_attempts,
        );

        let mut generated = Vec::new();
        for (index, section) in sections.iter().enumerate() {
            for processed in section {
                generated.push(synthesizer.questions_for(processed, index, rng).await?);
            }
        }

        let quiz = assemble(generated, policy, rng);
        info!(
            "Assembled {} questions from {} sections",
            quiz.len(),
            sections.len()
        );
        Ok(quiz)
    }
}

/// Applies the quiz-wide policies to the questions generated per sentence, given in section
/// then sentence order.
pub fn assemble<R: Rng>(
    generated: Vec<Vec<QuizQuestion>>,
    policy: &QuizPolicy,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let per_sentence = generated
        .into_iter()
        .filter(|questions| !questions.is_empty())
        .flat_map(|questions| {
            if policy.duplicate_sentences {
                questions
            } else {
                questions.choose(rng).cloned().into_iter().collect()
            }
        })
        .collect::<Vec<_>>();

    let mut answers = HashSet::new();
    let mut quiz: Vec<QuizQuestion> = per_sentence
        .into_iter()
        .filter(|question| policy.duplicate_answers || answers.insert(question.answer()))
        .collect();

    quiz.shuffle(rng);
    if let Some(max) = policy.max {
        quiz.truncate(max);
    }
    quiz
}
