use log::{debug, error, warn};
use rand::{seq::SliceRandom, Rng};

use crate::{
    clients::{EntitySynthesizer, SimilarPhraseSource},
    errors::{AppError, AppResult},
    models::domain::{
        quiz_question::OPTION_COUNT, AnswerOffset, CorrectOption, Label, ProcessedSentence,
        QuizQuestion,
    },
    services::{
        option_filter::{contains_year, filter_options},
        option_pool::OptionPool,
    },
};

/// Consecutive cross-section draws allowed to be rejected before moving on to similar phrases.
const CROSS_SECTION_MISS_LIMIT: usize = 3;

/// Turns entity occurrences into questions, filling in distractors tier by tier: names from the
/// same section, names from other sections, similar phrases, and finally synthetic values.
pub struct QuestionSynthesizer<'a> {
    pool: &'a OptionPool,
    similar: &'a dyn SimilarPhraseSource,
    synthesizer: &'a dyn EntitySynthesizer,
    allow_sans_years: bool,
    synthetic_attempts: usize,
}

impl<'a> QuestionSynthesizer<'a> {
    pub fn new(
        pool: &'a OptionPool,
        similar: &'a dyn SimilarPhraseSource,
        synthesizer: &'a dyn EntitySynthesizer,
        allow_sans_years: bool,
        synthetic_attempts: usize,
    ) -> Self {
        Self {
            pool,
            similar,
            synthesizer,
            allow_sans_years,
            synthetic_attempts,
        }
    }

    /// One question per name in the `processed` sentence from the `section`th section.
    pub async fn questions_for<R: Rng>(
        &self,
        processed: &ProcessedSentence,
        section: usize,
        rng: &mut R,
    ) -> AppResult<Vec<QuizQuestion>> {
        let mut questions = Vec::with_capacity(processed.names.len());
        for answer in &processed.names {
            if let Some(question) = self.ask(processed, section, answer, rng).await? {
                questions.push(question);
            }
        }
        Ok(questions)
    }

    /// `None` when the occurrence can't be asked about: a date lacking a year while those are
    /// disallowed, or an answer that doesn't appear verbatim in its sentence.
    pub async fn ask<R: Rng>(
        &self,
        processed: &ProcessedSentence,
        section: usize,
        answer: &str,
        rng: &mut R,
    ) -> AppResult<Option<QuizQuestion>> {
        if processed.label == Label::Date && !self.allow_sans_years && !contains_year(answer) {
            return Ok(None);
        }
        let Some(offset) = AnswerOffset::locate(processed.sentence(), answer) else {
            warn!(
                "Skipping {} answer '{}' missing from sentence '{}'",
                processed.label,
                answer,
                processed.sentence()
            );
            return Ok(None);
        };

        let correct = self.pool.correct_option(processed.label, section, answer);
        let mut options = self.fill_options(&correct, processed, rng).await?;
        options.shuffle(rng);

        Ok(Some(QuizQuestion::new(
            processed.sentence(),
            options,
            offset,
            processed.label,
            processed.context.previous.clone(),
        )))
    }

    async fn fill_options<R: Rng>(
        &self,
        correct: &CorrectOption,
        processed: &ProcessedSentence,
        rng: &mut R,
    ) -> AppResult<Vec<String>> {
        let label = processed.label;
        let answer = correct.answer.as_str();

        let mut options: Vec<String> = correct
            .relevant_distractors()
            .choose_multiple(rng, OPTION_COUNT - 1)
            .map(|name| name.to_string())
            .collect();
        options.push(correct.answer.clone());
        options = self.filter(&options, answer, label);

        let mut candidates: Vec<&String> = correct.cross_section_distractors();
        let mut misses = 0;
        if options.len() < OPTION_COUNT && !candidates.is_empty() {
            debug!("Drawing cross-section options for {} answer '{}'", label, answer);
        }
        while options.len() < OPTION_COUNT
            && !candidates.is_empty()
            && misses < CROSS_SECTION_MISS_LIMIT
        {
            let drawn = candidates.swap_remove(rng.gen_range(0..candidates.len()));
            if self.add(&mut options, drawn, answer, label) {
                misses = 0;
            } else {
                misses += 1;
            }
        }

        if options.len() < OPTION_COUNT {
            debug!("Requesting similar phrases for {} answer '{}'", label, answer);
            let phrases = self
                .similar
                .similar_phrases(processed.sentence(), answer)
                .await?;
            for phrase in phrases {
                if options.len() >= OPTION_COUNT {
                    break;
                }
                if !phrase.trim().is_empty() {
                    self.add(&mut options, &phrase, answer, label);
                }
            }
        }

        if options.len() < OPTION_COUNT {
            debug!("Synthesizing options for {} answer '{}'", label, answer);
        }
        let mut attempts = 0;
        while options.len() < OPTION_COUNT {
            if attempts == self.synthetic_attempts {
                error!(
                    "Synthetic fill exhausted for {} answer '{}' after {} attempts with options {:?}",
                    label, answer, attempts, options
                );
                return Err(AppError::FallbackExhausted {
                    label,
                    answer: answer.to_string(),
                    attempts,
                });
            }
            attempts += 1;
            let synthetic = self.synthesizer.synthesize(label, &mut *rng);
            self.add(&mut options, &synthetic, answer, label);
        }

        Ok(options)
    }

    /// Whether `candidate` survived filtering and grew the options.
    fn add(&self, options: &mut Vec<String>, candidate: &str, answer: &str, label: Label) -> bool {
        if options.iter().any(|option| option == candidate) {
            return false;
        }
        let before = options.len();
        options.push(candidate.to_string());
        *options = self.filter(options, answer, label);
        options.len() > before
    }

    fn filter(&self, options: &[String], answer: &str, label: Label) -> Vec<String> {
        filter_options(options, answer, label, self.allow_sans_years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clients::{MockEntitySynthesizer, MockSimilarPhraseSource},
        models::domain::ProcessedSection,
    };
    use rand::{
        rngs::{mock::StepRng, StdRng},
        SeedableRng,
    };

    const ATTEMPTS: usize = 20;

    fn person(text: &str, previous: Option<&str>, names: &[&str]) -> ProcessedSentence {
        ProcessedSentence::new(
            text,
            previous.map(str::to_string),
            Label::Person,
            names.iter().map(|name| name.to_string()).collect(),
        )
    }

    fn unused_similar() -> MockSimilarPhraseSource {
        let mut similar = MockSimilarPhraseSource::new();
        similar.expect_similar_phrases().never();
        similar
    }

    fn unused_synthesizer() -> MockEntitySynthesizer {
        let mut synthesizer = MockEntitySynthesizer::new();
        synthesizer.expect_synthesize().never();
        synthesizer
    }

    fn counting_synthesizer(template: &'static str) -> MockEntitySynthesizer {
        let mut synthesizer = MockEntitySynthesizer::new();
        let mut count = 0;
        synthesizer.expect_synthesize().returning(move |_, _| {
            count += 1;
            template.replace("{}", &count.to_string())
        });
        synthesizer
    }

    fn assert_well_formed(question: &QuizQuestion) {
        assert_eq!(question.options.len(), 4);
        assert!(question.options.contains(&question.answer()));
    }

    #[actix_rt::test]
    async fn options_come_from_the_same_section_first() {
        let sections: Vec<ProcessedSection> = vec![
            vec![person("Bill Gates was born on October 28, 1955.", None, &["Bill Gates"])],
            vec![
                person("Nikola Tesla is first.", None, &["Nikola Tesla"]),
                person("Albert Einstein is second.", Some("Nikola Tesla is first."), &["Albert Einstein"]),
                person("Christopher Robbin is third.", Some("Albert Einstein is second."), &["Christopher Robbin"]),
            ],
            vec![
                person("Galileo Galilei is fourth.", None, &["Galileo Galilei"]),
                person("Narendra Modi is fifth.", Some("Galileo Galilei is fourth."), &["Narendra Modi"]),
                person("Steve Jobs is sixth.", Some("Narendra Modi is fifth."), &["Steve Jobs"]),
            ],
        ];
        let pool = OptionPool::build(&sections, &[Label::Person]);
        let (similar, synthesizer) = (unused_similar(), unused_synthesizer());
        let synthesizer = QuestionSynthesizer::new(&pool, &similar, &synthesizer, false, ATTEMPTS);

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let questions = synthesizer
                .questions_for(&sections[1][0], 1, &mut rng)
                .await
                .expect("question should be generated");

            assert_eq!(questions.len(), 1);
            for name in ["Nikola Tesla", "Albert Einstein", "Christopher Robbin"] {
                assert!(questions[0].options.contains(&name.to_string()), "seed {seed}");
            }
            assert_well_formed(&questions[0]);
        }
    }

    #[actix_rt::test]
    async fn paired_names_get_exact_offsets_and_synthetic_dates() {
        let text = "Bill Gates and Steve Jobs were born in the 1900s.";
        let sections: Vec<ProcessedSection> = vec![
            vec![person(text, None, &["Bill Gates", "Steve Jobs"])],
            vec![ProcessedSentence::new(text, None, Label::Date, vec!["1900s".to_string()])],
        ];
        let pool = OptionPool::build(&sections, &[Label::Person, Label::Date]);
        let mut similar = MockSimilarPhraseSource::new();
        similar
            .expect_similar_phrases()
            .returning(|_, _| Ok(vec![]));
        let synthesizer = counting_synthesizer("January {}, 1970");
        let synthesizer = QuestionSynthesizer::new(&pool, &similar, &synthesizer, false, ATTEMPTS);
        let mut rng = StdRng::seed_from_u64(7);

        let people = synthesizer
            .questions_for(&sections[0][0], 0, &mut rng)
            .await
            .expect("questions should be generated");
        let dates = synthesizer
            .questions_for(&sections[1][0], 1, &mut rng)
            .await
            .expect("questions should be generated");

        assert_eq!(people.len(), 2);
        assert_eq!(people[0].answer_offset, AnswerOffset::new(0, 10));
        assert_eq!(people[1].answer_offset, AnswerOffset::new(15, 25));
        assert!(people.iter().all(|q| q.question == text && q.context.is_none()));
        assert!(people[0].options.contains(&"Steve Jobs".to_string()));

        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].answer_offset, AnswerOffset::new(43, 48));
        assert_eq!(dates[0].answer(), "1900s");
        assert!(dates[0]
            .options
            .iter()
            .filter(|option| *option != "1900s")
            .all(|option| option.starts_with("January ") && option.ends_with(", 1970")));
        people.iter().chain(&dates).for_each(assert_well_formed);
    }

    #[actix_rt::test]
    async fn similar_phrases_are_filtered_before_synthetic_values() {
        let sections: Vec<ProcessedSection> =
            vec![vec![person("Nikola Tesla is first.", None, &["Nikola Tesla"])]];
        let pool = OptionPool::build(&sections, &[Label::Person]);
        let mut similar = MockSimilarPhraseSource::new();
        similar
            .expect_similar_phrases()
            .withf(|sentence, entity| sentence == "Nikola Tesla is first." && entity == "Nikola Tesla")
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    "Nikola".to_string(),
                    "Thomas Edison".to_string(),
                    "George Westinghouse".to_string(),
                    "J. P. Morgan".to_string(),
                    "Guglielmo Marconi".to_string(),
                ])
            });
        let synthesizer = unused_synthesizer();
        let synthesizer = QuestionSynthesizer::new(&pool, &similar, &synthesizer, false, ATTEMPTS);
        let mut rng = StdRng::seed_from_u64(1);

        let questions = synthesizer
            .questions_for(&sections[0][0], 0, &mut rng)
            .await
            .expect("question should be generated");

        let mut options = questions[0].options.clone();
        options.sort();
        assert_eq!(
            options,
            vec!["George Westinghouse", "J. P. Morgan", "Nikola Tesla", "Thomas Edison"]
        );
    }

    #[actix_rt::test]
    async fn cross_section_draws_stop_after_consecutive_rejections() {
        let sections: Vec<ProcessedSection> = vec![
            vec![person("Steve left.", None, &["Steve"])],
            vec![person(
                "Aaron Steve met Bob Marley, Carl Sagan, Dan Brown, Zed Steve and Zoe Steve.",
                None,
                &["Aaron Steve", "Bob Marley", "Carl Sagan", "Dan Brown", "Zed Steve", "Zoe Steve"],
            )],
        ];
        let pool = OptionPool::build(&sections, &[Label::Person]);
        let mut similar = MockSimilarPhraseSource::new();
        similar
            .expect_similar_phrases()
            .times(1)
            .returning(|_, _| Ok(vec![]));
        let synthesizer = counting_synthesizer("Person {}");
        let synthesizer = QuestionSynthesizer::new(&pool, &similar, &synthesizer, false, ATTEMPTS);
        // Always draws index 0, so after swap_remove the order is Aaron Steve, Zoe Steve, Zed Steve
        let mut rng = StepRng::new(0, 0);

        let questions = synthesizer
            .questions_for(&sections[0][0], 0, &mut rng)
            .await
            .expect("question should be generated");

        let options = &questions[0].options;
        assert_well_formed(&questions[0]);
        for unused in ["Bob Marley", "Carl Sagan", "Dan Brown"] {
            assert!(!options.contains(&unused.to_string()), "{unused} should not be drawn");
        }
        assert_eq!(
            options.iter().filter(|option| option.starts_with("Person ")).count(),
            3
        );
    }

    #[actix_rt::test]
    async fn rejected_cross_section_names_are_skipped() {
        let sections: Vec<ProcessedSection> = vec![
            vec![person("Steve left.", None, &["Steve"])],
            vec![person(
                "Steve Jobs, Steve Wozniak, Gil Steve and Steve Paul met.",
                None,
                &["Steve Jobs", "Steve Wozniak", "Gil Steve", "Steve Paul"],
            )],
        ];
        let pool = OptionPool::build(&sections, &[Label::Person]);
        let mut similar = MockSimilarPhraseSource::new();
        similar
            .expect_similar_phrases()
            .times(1)
            .returning(|_, _| Ok(vec![]));
        let synthesizer = counting_synthesizer("Person {}");
        let synthesizer = QuestionSynthesizer::new(&pool, &similar, &synthesizer, false, ATTEMPTS);
        let mut rng = StdRng::seed_from_u64(3);

        let questions = synthesizer
            .questions_for(&sections[0][0], 0, &mut rng)
            .await
            .expect("question should be generated");

        assert!(questions[0]
            .options
            .iter()
            .filter(|option| *option != "Steve")
            .all(|option| option.starts_with("Person ")));
    }

    #[actix_rt::test]
    async fn exhausted_synthetic_fill_is_an_error() {
        let sections: Vec<ProcessedSection> =
            vec![vec![person("Steve left.", None, &["Steve"])]];
        let pool = OptionPool::build(&sections, &[Label::Person]);
        let mut similar = MockSimilarPhraseSource::new();
        similar
            .expect_similar_phrases()
            .returning(|_, _| Ok(vec![]));
        let mut synthesizer = MockEntitySynthesizer::new();
        synthesizer
            .expect_synthesize()
            .times(ATTEMPTS)
            .returning(|_, _| "Steve Jobs".to_string());
        let synthesizer = QuestionSynthesizer::new(&pool, &similar, &synthesizer, false, ATTEMPTS);
        let mut rng = StdRng::seed_from_u64(3);

        let err = synthesizer
            .questions_for(&sections[0][0], 0, &mut rng)
            .await
            .expect_err("fill should be exhausted");

        assert!(matches!(
            err,
            AppError::FallbackExhausted { label: Label::Person, attempts: ATTEMPTS, .. }
        ));
    }

    #[actix_rt::test]
    async fn dates_sans_years_are_only_asked_when_allowed() {
        let sections: Vec<ProcessedSection> = vec![vec![ProcessedSentence::new(
            "He was born on August 7.",
            None,
            Label::Date,
            vec!["August 7".to_string()],
        )]];
        let pool = OptionPool::build(&sections, &[Label::Date]);
        let (similar, unused) = (unused_similar(), unused_synthesizer());
        let disallowed = QuestionSynthesizer::new(&pool, &similar, &unused, false, ATTEMPTS);
        let mut rng = StdRng::seed_from_u64(5);

        let questions = disallowed
            .questions_for(&sections[0][0], 0, &mut rng)
            .await
            .expect("skipping should not fail");
        assert!(questions.is_empty());

        let mut similar = MockSimilarPhraseSource::new();
        similar
            .expect_similar_phrases()
            .returning(|_, _| Ok(vec!["June 1".to_string()]));
        let synthesizer = counting_synthesizer("March {}");
        let allowed = QuestionSynthesizer::new(&pool, &similar, &synthesizer, true, ATTEMPTS);

        let questions = allowed
            .questions_for(&sections[0][0], 0, &mut rng)
            .await
            .expect("question should be generated");
        assert_eq!(questions.len(), 1);
        assert!(questions[0].options.contains(&"June 1".to_string()));
    }

    #[actix_rt::test]
    async fn answers_missing_from_the_sentence_are_skipped() {
        let sections: Vec<ProcessedSection> =
            vec![vec![person("Bob is good.", None, &["Robert"])]];
        let pool = OptionPool::build(&sections, &[Label::Person]);
        let (similar, synthesizer) = (unused_similar(), unused_synthesizer());
        let synthesizer = QuestionSynthesizer::new(&pool, &similar, &synthesizer, false, ATTEMPTS);
        let mut rng = StdRng::seed_from_u64(0);

        let questions = synthesizer
            .questions_for(&sections[0][0], 0, &mut rng)
            .await
            .expect("skipping should not fail");

        assert!(questions.is_empty());
    }

    #[actix_rt::test]
    async fn same_seed_gives_same_question() {
        let sections: Vec<ProcessedSection> = vec![vec![person(
            "Ada, Grace, Linus, Dennis and Ken wrote code.",
            None,
            &["Ada", "Grace", "Linus", "Dennis", "Ken"],
        )]];
        let pool = OptionPool::build(&sections, &[Label::Person]);
        let (similar, synthesizer) = (unused_similar(), unused_synthesizer());
        let synthesizer = QuestionSynthesizer::new(&pool, &similar, &synthesizer, false, ATTEMPTS);

        let first = synthesizer
            .questions_for(&sections[0][0], 0, &mut StdRng::seed_from_u64(11))
            .await
            .expect("questions should be generated");
        let second = synthesizer
            .questions_for(&sections[0][0], 0, &mut StdRng::seed_from_u64(11))
            .await
            .expect("questions should be generated");

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }
}
