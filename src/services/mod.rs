pub mod option_filter;
pub mod option_pool;
pub mod question_synthesizer;
pub mod quiz_assembler;
pub mod quiz_service;
pub mod related_topic_ranker;
pub mod search_service;
pub mod sentence_deduplicator;

pub use quiz_assembler::QuizAssembler;
pub use quiz_service::QuizService;
pub use related_topic_ranker::rank_related_topics;
pub use search_service::SearchService;
