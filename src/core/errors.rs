use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlipdeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Audio error: {0}")]
    Audio(String),

    #[error("Invalid deck source: {0}")]
    InvalidSource(String),

    #[error("FlipdeckError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for FlipdeckError {
    fn from(error: std::io::Error) -> Self {
        FlipdeckError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for FlipdeckError {
    fn from(error: reqwest::Error) -> Self {
        FlipdeckError::Http(Box::new(error))
    }
}

impl From<rodio::decoder::DecoderError> for FlipdeckError {
    fn from(error: rodio::decoder::DecoderError) -> Self {
        FlipdeckError::Audio(error.to_string())
    }
}

impl From<rodio::PlayError> for FlipdeckError {
    fn from(error: rodio::PlayError) -> Self {
        FlipdeckError::Audio(error.to_string())
    }
}

impl From<rodio::StreamError> for FlipdeckError {
    fn from(error: rodio::StreamError) -> Self {
        FlipdeckError::Audio(error.to_string())
    }
}
