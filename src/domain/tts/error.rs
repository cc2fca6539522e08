#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error("Unknown language: '{0}'")]
    Unknown(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("No narratable text")]
    EmptyText,
    #[error("Speech synthesis unavailable: {0}")]
    Unavailable(String),
}
