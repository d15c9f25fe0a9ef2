use serde::{Deserialize, Serialize};

/// A search result, such as `"Apple Inc."`, and its description.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Topic {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleSection {
    pub heading: String,
    pub text: String,
}

/// An encyclopedia article split into its sections, lead section first.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub sections: Vec<ArticleSection>,
}

impl Article {
    pub fn section(&self, heading: &str) -> Option<&ArticleSection> {
        self.sections.iter().find(|section| section.heading == heading)
    }
}
