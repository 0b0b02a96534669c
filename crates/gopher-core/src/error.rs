use serde::Serialize;
use thiserror::Error;

/// Machine-readable translation failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ConfusedGopher,
    InvalidWord,
}

impl ErrorKind {
    pub fn code(self) -> u16 {
        match self {
            ErrorKind::ConfusedGopher => 100,
            ErrorKind::InvalidWord => 101,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ConfusedGopher => "confused_gopher",
            ErrorKind::InvalidWord => "invalid_word",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("{message}")]
    InvalidWord { message: String },
    #[error("{message}")]
    ConfusedGopher { message: String },
}

impl TranslationError {
    pub fn empty_word() -> Self {
        Self::InvalidWord { message: "No word was provided".into() }
    }

    pub fn no_vowels(word: &str) -> Self {
        Self::InvalidWord { message: format!("'{word}' has no vowels") }
    }

    pub fn contraction() -> Self {
        Self::ConfusedGopher { message: "Gophers can not understand shortened words".into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidWord { .. } => ErrorKind::InvalidWord,
            Self::ConfusedGopher { .. } => ErrorKind::ConfusedGopher,
        }
    }

    pub fn code(&self) -> u16 {
        self.kind().code()
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidWord { message } | Self::ConfusedGopher { message } => message,
        }
    }
}

#[derive(Error, Debug)]
pub enum GopherError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GopherError>;
