use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("No article found for slug '{0}'")]
    NotFound(String),

    #[error("'{0}' is not a valid article slug")]
    InvalidSlug(String),

    #[error("Article payload could not be read")]
    Malformed(#[from] serde_json::Error),

    #[error("Expected a list of articles, got {0}")]
    NotAList(&'static str),
}

impl PageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PageError::NotFound(_))
    }
}
