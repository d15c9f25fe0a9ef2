use std::sync::Arc;

use crate::{
    clients::{
        EntitySynthesizer, EntityTagger, FakeEntityGenerator, NlpClient, SimilarPhraseSource,
        TopicSearch, WikipediaClient,
    },
    config::Config,
    errors::AppResult,
    services::{QuizService, SearchService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub search_service: Arc<SearchService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let nlp = Arc::new(NlpClient::new(
            config.nlp_service_url.clone(),
            config.collaborator_timeout(),
        )?);
        let wikipedia: Arc<dyn TopicSearch> = Arc::new(WikipediaClient::new(
            config.search_service_url.clone(),
            config.collaborator_timeout(),
        )?);

        Ok(Self::with_collaborators(
            config,
            nlp.clone(),
            wikipedia,
            nlp,
            Arc::new(FakeEntityGenerator::new()),
        ))
    }

    /// Wires the services around the given collaborators instead of the HTTP clients.
    pub fn with_collaborators(
        config: Config,
        tagger: Arc<dyn EntityTagger>,
        search: Arc<dyn TopicSearch>,
        similar: Arc<dyn SimilarPhraseSource>,
        synthesizer: Arc<dyn EntitySynthesizer>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(
            tagger,
            search.clone(),
            similar,
            synthesizer,
            config.synthetic_fill_attempts,
        ));
        let search_service = Arc::new(SearchService::new(search));

        Self {
            quiz_service,
            search_service,
            config: Arc::new(config),
        }
    }
}
