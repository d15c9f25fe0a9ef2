use crate::models::domain::{Article, ArticleSection, Label, ProcessedSentence, Topic};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Names the in-memory tagger recognizes.
    pub const KNOWN_ENTITIES: &[(&str, Label)] = &[
        ("Bill Gates", Label::Person),
        ("Paul Allen", Label::Person),
        ("Microsoft", Label::Org),
        ("Seattle", Label::Gpe),
        ("1955", Label::Date),
        ("1975", Label::Date),
    ];

    pub fn tagged(text: &str, label: Label, names: &[&str]) -> ProcessedSentence {
        ProcessedSentence::new(
            text,
            None,
            label,
            names.iter().map(|name| name.to_string()).collect(),
        )
    }

    pub fn topic(title: &str) -> Topic {
        Topic {
            title: title.to_string(),
            description: format!("{} is a topic", title),
        }
    }

    /// A short article on Bill Gates with a "See also" section and a references section.
    pub fn bill_gates_article() -> Article {
        let section = |heading: &str, text: &str| ArticleSection {
            heading: heading.to_string(),
            text: text.to_string(),
        };
        Article {
            title: "Bill Gates".to_string(),
            url: "https://en.wikipedia.org/wiki/Bill_Gates".to_string(),
            sections: vec![
                section(
                    "Summary",
                    "Bill Gates founded Microsoft with Paul Allen in 1975. Bill Gates was born in Seattle.",
                ),
                section("Early life", "Bill Gates was born in 1955."),
                section("See also", "Paul Allen\nMicrosoft"),
                section("References", "Bill Gates founded Microsoft."),
            ],
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use async_trait::async_trait;

    use super::fixtures::{bill_gates_article, topic, KNOWN_ENTITIES};
    use super::*;
    use crate::{
        app_state::AppState,
        clients::{EntityTagger, FakeEntityGenerator, SimilarPhraseSource, TopicSearch},
        config::Config,
        errors::{AppError, AppResult},
    };

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }

    /// Splits on `". "` and tags the [`KNOWN_ENTITIES`].
    pub struct DictionaryTagger;

    #[async_trait]
    impl EntityTagger for DictionaryTagger {
        async fn split_sentences(&self, text: &str) -> AppResult<Vec<String>> {
            let sentences: Vec<String> = text
                .split_inclusive(". ")
                .map(|sentence| sentence.trim().to_string())
                .filter(|sentence| !sentence.is_empty())
                .collect();
            Ok(sentences)
        }

        async fn tag(&self, sentences: &[String]) -> AppResult<Vec<ProcessedSentence>> {
            let mut processed = Vec::new();
            for (index, sentence) in sentences.iter().enumerate() {
                let previous = index.checked_sub(1).map(|i| sentences[i].clone());
                for label in Label::ALL {
                    let names: Vec<String> = KNOWN_ENTITIES
                        .iter()
                        .filter(|(name, known)| *known == label && sentence.contains(name))
                        .map(|(name, _)| name.to_string())
                        .collect();
                    if !names.is_empty() {
                        processed.push(ProcessedSentence::new(
                            sentence.clone(),
                            previous.clone(),
                            label,
                            names,
                        ));
                    }
                }
            }
            Ok(processed)
        }

        async fn is_healthy(&self) -> bool {
            true
        }
    }

    /// Every query resolves to an article of the same title.
    pub struct EchoSearch;

    #[async_trait]
    impl TopicSearch for EchoSearch {
        async fn search(&self, query: &str) -> AppResult<Vec<Topic>> {
            Ok(vec![topic(query)])
        }

        async fn search_trending(&self, max: usize) -> AppResult<Vec<Topic>> {
            let mut trending = vec![topic("Bill Gates"), topic("Microsoft")];
            trending.truncate(max);
            Ok(trending)
        }

        async fn random_topic(&self) -> AppResult<String> {
            Ok("Bill Gates".to_string())
        }

        async fn fetch_article(&self, title: &str) -> AppResult<Article> {
            if title == "Bill Gates" {
                Ok(bill_gates_article())
            } else {
                Err(AppError::NotFound(format!("No article titled '{}'", title)))
            }
        }
    }

    pub struct NoSimilarPhrases;

    #[async_trait]
    impl SimilarPhraseSource for NoSimilarPhrases {
        async fn similar_phrases(&self, _sentence: &str, _entity: &str) -> AppResult<Vec<String>> {
            Ok(Vec::new())
        }
    }

    /// Application state backed by in-memory collaborators.
    pub fn test_state() -> AppState {
        test_state_with(Config::test_config())
    }

    pub fn test_state_with(config: Config) -> AppState {
        AppState::with_collaborators(
            config,
            Arc::new(DictionaryTagger),
            Arc::new(EchoSearch),
            Arc::new(NoSimilarPhrases),
            Arc::new(FakeEntityGenerator::new()),
        )
    }
}
