use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdfError {
    /// The word tokenizer pattern failed to compile.
    #[error("invalid word pattern: {0}")]
    Pattern(#[from] regex::Error),
}
