use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HansardError {
    /// A node of a type or nesting depth that is not valid where it appears.
    #[error("{0}")]
    UnexpectedStructure(String),
    #[error("Missing <{0}> tag")]
    MissingElement(String),
    #[error("Invalid sitting date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Config(String),
}

impl HansardError {
    pub fn unexpected_tag(name: &str) -> Self {
        HansardError::UnexpectedStructure(format!("Unexpected tag <{name}>"))
    }

    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            HansardError::UnexpectedStructure(_) | HansardError::MissingElement(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HansardError>;
