use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    clients::{EntityTagger, SimilarPhraseSource},
    errors::{AppError, AppResult},
    models::domain::{Label, ProcessedSentence},
};

#[derive(Debug, Serialize)]
struct SentencizerRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SentencizerResponse {
    sentences: Vec<String>,
}

#[derive(Debug, Serialize)]
struct NerRequest<'a> {
    sections: &'a [String],
    sense2vec: bool,
}

#[derive(Debug, Deserialize)]
struct NerResponse {
    data: Vec<TaggedSentence>,
}

/// The entities recognized in one sentence's `text`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaggedSentence {
    pub text: String,
    pub entities: Vec<RecognizedEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognizedEntity {
    pub text: String,
    pub label: Label,
    #[serde(default)]
    pub sense2vec: Vec<SimilarPhrase>,
}

/// A `phrase` with a `similarity` between 0 and 1.
#[derive(Debug, Clone, Deserialize)]
pub struct SimilarPhrase {
    pub phrase: String,
    pub similarity: f64,
}

/// Client for the spaCy server providing sentence segmentation, NER and sense2vec.
pub struct NlpClient {
    client: Client,
    base_url: String,
}

impl NlpClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to create NLP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn recognize(&self, sections: &[String], sense2vec: bool) -> AppResult<Vec<TaggedSentence>> {
        let response: NerResponse = self
            .client
            .post(self.url("ner"))
            .json(&NerRequest { sections, sense2vec })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.data)
    }
}

/// Groups each tagged sentence's entities by label in the order the labels first appear.
///
/// The previous sentence comes from `sentences` even when it had no entities. `%` on its own is
/// dropped since it never makes a usable answer.
pub fn group_entities(sentences: &[String], tagged: Vec<TaggedSentence>) -> Vec<ProcessedSentence> {
    let mut processed = Vec::new();
    for (index, sentence) in tagged.into_iter().enumerate() {
        let position = sentences
            .iter()
            .position(|text| *text == sentence.text)
            .unwrap_or(index);
        let previous = position
            .checked_sub(1)
            .and_then(|previous| sentences.get(previous))
            .cloned();

        let mut groups: Vec<(Label, Vec<String>)> = Vec::new();
        for entity in sentence.entities.into_iter().filter(|entity| entity.text != "%") {
            match groups.iter_mut().find(|(label, _)| *label == entity.label) {
                Some((_, names)) => names.push(entity.text),
                None => groups.push((entity.label, vec![entity.text])),
            }
        }

        processed.extend(groups.into_iter().map(|(label, names)| {
            ProcessedSentence::new(sentence.text.clone(), previous.clone(), label, names)
        }));
    }
    processed
}

/// The sense2vec phrases of the first entity whose text is `entity`, most similar first.
pub fn phrases_for(tagged: Vec<TaggedSentence>, entity: &str) -> Vec<String> {
    let Some(found) = tagged
        .into_iter()
        .flat_map(|sentence| sentence.entities)
        .find(|recognized| recognized.text == entity)
    else {
        return Vec::new();
    };
    let mut phrases = found.sense2vec;
    phrases.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    phrases.into_iter().map(|similar| similar.phrase).collect()
}

#[async_trait]
impl EntityTagger for NlpClient {
    async fn split_sentences(&self, text: &str) -> AppResult<Vec<String>> {
        let response: SentencizerResponse = self
            .client
            .post(self.url("sentencizer"))
            .json(&SentencizerRequest { text })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.sentences)
    }

    async fn tag(&self, sentences: &[String]) -> AppResult<Vec<ProcessedSentence>> {
        if sentences.is_empty() {
            return Ok(Vec::new());
        }
        let tagged = self.recognize(sentences, false).await?;
        debug!("Tagged {} sentences", tagged.len());
        Ok(group_entities(sentences, tagged))
    }

    async fn is_healthy(&self) -> bool {
        match self.client.get(self.url("health_check")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("NLP health check failed: {}", e);
                false
            }
        }
    }
}

#[async_trait]
impl SimilarPhraseSource for NlpClient {
    async fn similar_phrases(&self, sentence: &str, entity: &str) -> AppResult<Vec<String>> {
        let tagged = self.recognize(&[sentence.to_string()], true).await?;
        Ok(phrases_for(tagged, entity))
    }
}
