pub mod correct_option;
pub mod label;
pub mod processed_sentence;
pub mod quiz_policy;
pub mod quiz_question;
pub mod topic;
pub use correct_option::CorrectOption;
pub use label::Label;
pub use processed_sentence::{ProcessedContext, ProcessedSection, ProcessedSentence};
pub use quiz_policy::QuizPolicy;
pub use quiz_question::{AnswerOffset, QuizQuestion};
pub use topic::{Article, ArticleSection, Topic};
