use serde::{Deserialize, Serialize};

use crate::models::domain::{QuizQuestion, Topic};

/// The `url` of the `topic` a quiz was generated on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizMetadata {
    pub topic: String,
    pub url: String,
}

/// `metadata` is only present when the quiz was generated from a topic. The `related` topics can
/// have quizzes generated for them too.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizResponse {
    pub quiz: Vec<QuizQuestion>,
    pub metadata: Option<QuizMetadata>,
    pub related: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicDto {
    pub topic: String,
    pub description: String,
}

impl From<Topic> for TopicDto {
    fn from(topic: Topic) -> Self {
        TopicDto {
            topic: topic.title,
            description: topic.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub topics: Vec<TopicDto>,
}

impl From<Vec<Topic>> for SearchResponse {
    fn from(topics: Vec<Topic>) -> Self {
        SearchResponse {
            topics: topics.into_iter().map(TopicDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthCheck {
    pub quiz: bool,
    pub nlp: bool,
}
