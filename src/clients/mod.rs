pub mod fake_entity_generator;
pub mod nlp_client;
pub mod wikipedia_client;

use async_trait::async_trait;
use rand::RngCore;

use crate::{
    errors::AppResult,
    models::domain::{Article, Label, ProcessedSentence, Topic},
};

pub use fake_entity_generator::FakeEntityGenerator;
pub use nlp_client::NlpClient;
pub use wikipedia_client::WikipediaClient;

/// Sentence segmentation and named entity recognition.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityTagger: Send + Sync {
    async fn split_sentences(&self, text: &str) -> AppResult<Vec<String>>;

    /// Tags the `sentences` of one passage. Each returned sentence holds the names of a single
    /// label, and its previous sentence is taken from `sentences` even if that one had no names.
    async fn tag(&self, sentences: &[String]) -> AppResult<Vec<ProcessedSentence>>;

    async fn is_healthy(&self) -> bool;
}

/// Encyclopedia search and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicSearch: Send + Sync {
    /// Best matches first.
    async fn search(&self, query: &str) -> AppResult<Vec<Topic>>;
    async fn search_trending(&self, max: usize) -> AppResult<Vec<Topic>>;
    async fn random_topic(&self) -> AppResult<String>;
    async fn fetch_article(&self, title: &str) -> AppResult<Article>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SimilarPhraseSource: Send + Sync {
    /// Phrases similar to the `entity` as it is used in the `sentence`, most similar first.
    async fn similar_phrases(&self, sentence: &str, entity: &str) -> AppResult<Vec<String>>;
}

/// Generates realistic stand-in values for a label.
#[cfg_attr(test, mockall::automock)]
pub trait EntitySynthesizer: Send + Sync {
    fn synthesize(&self, label: Label, rng: &mut dyn RngCore) -> String;
}
