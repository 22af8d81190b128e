use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Conversation has no message to answer")]
    EmptyConversation,
    #[error("Completion failed: {0}")]
    Completion(String),
    #[error("Structured extraction failed: {0}")]
    Extraction(String),
    #[error("Stream failed: {0}")]
    Stream(String),
    #[error("Backend returned an empty task list")]
    EmptyPlan,
}
