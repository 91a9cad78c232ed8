use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Deck parsing error: {0}")]
    Deck(String),

    #[error("A presentation needs at least one section")]
    EmptyRegistry,

    #[error("Replay script error at line {line}: {message}")]
    Replay { line: usize, message: String },

    #[error("Navigator actor has stopped")]
    ActorClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
