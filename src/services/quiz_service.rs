use std::sync::Arc;

use futures::future::try_join_all;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    clients::{EntitySynthesizer, EntityTagger, SimilarPhraseSource, TopicSearch},
    errors::AppResult,
    models::{
        domain::{Article, ProcessedSection, QuizPolicy, QuizQuestion},
        dto::{
            request::QuizRequest,
            response::{HealthCheck, QuizMetadata, QuizResponse},
        },
    },
    services::{quiz_assembler::QuizAssembler, related_topic_ranker::rank_related_topics},
};

/// Article sections which never have questions generated from them.
pub const EXCLUDED_SECTIONS: [&str; 4] =
    ["See also", "References", "Further reading", "External links"];

pub const SEE_ALSO_SECTION: &str = "See also";

pub struct QuizService {
    tagger: Arc<dyn EntityTagger>,
    search: Arc<dyn TopicSearch>,
    similar: Arc<dyn SimilarPhraseSource>,
    synthesizer: Arc<dyn EntitySynthesizer>,
    synthetic_attempts: usize,
}

impl QuizService {
    pub fn new(
        tagger: Arc<dyn EntityTagger>,
        search: Arc<dyn TopicSearch>,
        similar: Arc<dyn SimilarPhraseSource>,
        synthesizer: Arc<dyn EntitySynthesizer>,
        synthetic_attempts: usize,
    ) -> Self {
        Self {
            tagger,
            search,
            similar,
            synthesizer,
            synthetic_attempts,
        }
    }

    /// Generates a quiz on the request's text, its topic, or a trending topic if it has neither.
    pub async fn quiz(&self, request: QuizRequest) -> AppResult<QuizResponse> {
        let policy = request.policy()?;
        let mut rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        if let Some(text) = request.text {
            return self.quiz_text(text, &policy, &mut rng).await;
        }
        let topic = match request.topic {
            Some(topic) => topic,
            None => {
                let topic = self.search.random_topic().await?;
                info!("No topic supplied, using trending topic '{}'", topic);
                topic
            }
        };
        self.quiz_topic(&topic, &policy, &mut rng).await
    }

    async fn quiz_text(
        &self,
        text: Vec<String>,
        policy: &QuizPolicy,
        rng: &mut StdRng,
    ) -> AppResult<QuizResponse> {
        let sections = self.tag_sections(&text).await?;
        let related = rank_related_topics(&sections, self.search.as_ref()).await?;
        let quiz = self.synthesize(sections, policy, rng).await?;
        Ok(QuizResponse {
            quiz,
            metadata: None,
            related: Some(related),
        })
    }

    async fn quiz_topic(
        &self,
        topic: &str,
        policy: &QuizPolicy,
        rng: &mut StdRng,
    ) -> AppResult<QuizResponse> {
        let article = self.search.fetch_article(topic).await?;
        info!(
            "Fetched article '{}' with {} sections",
            article.title,
            article.sections.len()
        );
        let related = see_also(&article);

        let quiz = if policy.max == Some(0) {
            Vec::new()
        } else {
            let texts: Vec<String> = article
                .sections
                .iter()
                .filter(|section| !EXCLUDED_SECTIONS.contains(&section.heading.as_str()))
                .map(|section| section.text.clone())
                .collect();
            let sections = self.tag_sections(&texts).await?;
            self.synthesize(sections, policy, rng).await?
        };

        Ok(QuizResponse {
            quiz,
            metadata: Some(QuizMetadata {
                topic: topic.to_string(),
                url: article.url,
            }),
            related,
        })
    }

    /// Tags every section concurrently. Returns only once all of them are tagged, since option
    /// pools are built across sections.
    async fn tag_sections(&self, texts: &[String]) -> AppResult<Vec<ProcessedSection>> {
        let sections = try_join_all(texts.iter().map(|text| self.tag_section(text))).await?;
        debug!("Tagged {} sections", sections.len());
        Ok(sections)
    }

    async fn tag_section(&self, text: &str) -> AppResult<ProcessedSection> {
        let sentences = self.tagger.split_sentences(text).await?;
        self.tagger.tag(&sentences).await
    }

    async fn synthesize(
        &self,
        sections: Vec<ProcessedSection>,
        policy: &QuizPolicy,
        rng: &mut StdRng,
    ) -> AppResult<Vec<QuizQuestion>> {
        QuizAssembler::new(
            self.similar.as_ref(),
            self.synthesizer.as_ref(),
            self.synthetic_attempts,
        )
        .synthesize_quiz(sections, policy, rng)
        .await
    }

    pub async fn health_check(&self) -> HealthCheck {
        HealthCheck {
            quiz: true,
            nlp: self.tagger.is_healthy().await,
        }
    }
}

/// The non-empty lines of the article's "See also" section.
fn see_also(article: &Article) -> Option<Vec<String>> {
    article.section(SEE_ALSO_SECTION).map(|section| {
        section
            .text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    })
}
