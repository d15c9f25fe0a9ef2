use std::sync::Arc;

use crate::{
    clients::TopicSearch,
    errors::{AppError, AppResult},
    models::dto::response::SearchResponse,
};

pub struct SearchService {
    search: Arc<dyn TopicSearch>,
}

impl SearchService {
    pub fn new(search: Arc<dyn TopicSearch>) -> Self {
        Self { search }
    }

    pub async fn search(&self, query: &str) -> AppResult<SearchResponse> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::ValidationError("query cannot be empty".to_string()));
        }
        Ok(self.search.search(query).await?.into())
    }

    /// At most `max` trending topics.
    pub async fn search_trending(&self, max: usize) -> AppResult<SearchResponse> {
        Ok(self.search.search_trending(max).await?.into())
    }
}
