use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Character list must not contain the empty character; it is always supported implicitly")]
    EmptyCharInList,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown character list: {0}")]
    UnknownCharacterList(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
