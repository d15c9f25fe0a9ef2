use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use regex::Regex;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    clients::TopicSearch,
    errors::{AppError, AppResult},
    models::domain::{Article, ArticleSection, Topic},
};

/// Heading of the text before an article's first heading.
pub const LEAD_SECTION: &str = "Summary";

const SEARCH_LIMIT: &str = "10";

// Matches `== History ==`, `=== Early life ===` and so on
static HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(={2,6})\s*(.+?)\s*={2,6}$").expect("heading regex is valid"));

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag regex is valid"));

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    query: Option<T>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
    #[serde(default)]
    snippet: String,
}

#[derive(Debug, Deserialize)]
struct MostViewedQuery {
    #[serde(default)]
    mostviewed: Vec<PageRef>,
}

#[derive(Debug, Deserialize)]
struct RandomQuery {
    #[serde(default)]
    random: Vec<PageRef>,
}

#[derive(Debug, Deserialize)]
struct PageRef {
    title: String,
    #[serde(default)]
    ns: i64,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: Vec<ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    title: String,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    missing: bool,
}

/// MediaWiki API client for Wikipedia.
pub struct WikipediaClient {
    client: Client,
    base_url: String,
}

impl WikipediaClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("crystal-skull/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create Wikipedia client: {}", e))
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn article_url(&self, title: &str) -> String {
        format!("{}/wiki/{}", self.base_url, title.replace(' ', "_"))
    }

    async fn query<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> AppResult<Option<T>> {
        let response: QueryResponse<T> = self
            .client
            .get(format!("{}/w/api.php", self.base_url))
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.query)
    }

    async fn most_viewed(&self) -> AppResult<Vec<String>> {
        let viewed: Option<MostViewedQuery> =
            self.query(&[("list", "mostviewed"), ("pvimlimit", "max")]).await?;
        Ok(articles_only(viewed.map(|q| q.mostviewed).unwrap_or_default()))
    }

    async fn random_article(&self) -> AppResult<String> {
        let random: Option<RandomQuery> = self
            .query(&[("list", "random"), ("rnnamespace", "0"), ("rnlimit", "1")])
            .await?;
        random
            .and_then(|q| q.random.into_iter().next())
            .map(|page| page.title)
            .ok_or_else(|| AppError::ExternalServiceError("No random article was returned".into()))
    }
}

/// Keeps the titles of real articles, dropping the main page and special pages.
fn articles_only(pages: Vec<PageRef>) -> Vec<String> {
    pages
        .into_iter()
        .filter(|page| page.ns == 0 && page.title != "Main Page")
        .map(|page| page.title)
        .collect()
}

/// Removes markup from a search snippet.
pub fn strip_html(snippet: &str) -> String {
    TAG_REGEX
        .replace_all(snippet, "")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

/// Splits a plain-text extract on its headings. Text before the first heading becomes the
/// [`LEAD_SECTION`]; sections without text are dropped.
pub fn split_sections(extract: &str) -> Vec<ArticleSection> {
    let mut sections = Vec::new();
    let mut heading = LEAD_SECTION.to_string();
    let mut lines: Vec<&str> = Vec::new();

    let mut flush = |heading: &str, lines: &mut Vec<&str>| {
        let text = lines.join("\n").trim().to_string();
        if !text.is_empty() {
            sections.push(ArticleSection {
                heading: heading.to_string(),
                text,
            });
        }
        lines.clear();
    };

    for line in extract.lines() {
        match HEADING_REGEX.captures(line.trim()) {
            Some(captures) => {
                flush(&heading, &mut lines);
                heading = captures[2].to_string();
            }
            None => lines.push(line),
        }
    }
    flush(&heading, &mut lines);
    sections
}

#[async_trait]
impl TopicSearch for WikipediaClient {
    async fn search(&self, query: &str) -> AppResult<Vec<Topic>> {
        let found: Option<SearchQuery> = self
            .query(&[("list", "search"), ("srsearch", query), ("srlimit", SEARCH_LIMIT)])
            .await?;
        let topics: Vec<Topic> = found
            .map(|q| q.search)
            .unwrap_or_default()
            .into_iter()
            .map(|hit| Topic {
                title: hit.title,
                description: strip_html(&hit.snippet),
            })
            .collect();
        debug!("Search for '{}' returned {} topics", query, topics.len());
        Ok(topics)
    }

    async fn search_trending(&self, max: usize) -> AppResult<Vec<Topic>> {
        let mut titles = self.most_viewed().await?;
        titles.truncate(max);
        Ok(titles
            .into_iter()
            .map(|title| Topic {
                title,
                description: String::new(),
            })
            .collect())
    }

    /// Usually a trending article. Trending results are occasionally empty, in which case any
    /// random article is used.
    async fn random_topic(&self) -> AppResult<String> {
        let trending = self.most_viewed().await?;
        let picked = trending.choose(&mut rand::thread_rng()).cloned();
        if let Some(title) = picked {
            return Ok(title);
        }
        info!("No trending articles found, falling back to a random article");
        self.random_article().await
    }

    async fn fetch_article(&self, title: &str) -> AppResult<Article> {
        let extracts: Option<ExtractQuery> = self
            .query(&[
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .await?;
        let page = extracts
            .and_then(|q| q.pages.into_iter().next())
            .filter(|page| !page.missing)
            .ok_or_else(|| AppError::NotFound(format!("No article titled '{}'", title)))?;

        let sections = split_sections(page.extract.as_deref().unwrap_or_default());
        Ok(Article {
            url: self.article_url(&page.title),
            title: page.title,
            sections,
        })
    }
}
