use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("decision pipeline configuration error: {0}")]
    Config(String),
}

pub type DecisionResult<T> = Result<T, DecisionError>;
