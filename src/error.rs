use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Transport error: {0}")]
    Transport(#[from] binrw::Error),
    #[error("Unrecognized variant: {0}")]
    UnrecognizedVariant(String),
    #[error("Malformed token: {0}")]
    MalformedToken(String),
}
