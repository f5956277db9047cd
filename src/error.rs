use thiserror::Error;

/// Every way a scoring request can fail.
///
/// The UI collapses all of these into a single alert; the variants exist for
/// logging and for the headless `score` command.
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("nothing to score: text is empty")]
    EmptyText,

    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("scoring service answered HTTP {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("scoring service returned a non-finite score")]
    NonFinite,
}

/// Failure to load one texture image from disk.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image Decode Error: {0}")]
    Decode(#[from] image::ImageError),
}

pub type ScoreResult<T> = Result<T, ScoreError>;
