use crate::suggest::Suggestion;
use thiserror::Error;

/// Where a badge that was asked for under the wrong category actually lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryHint {
    pub category: String,
    pub badge: String,
}

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("Category '{category}' could not be found")]
    CategoryNotFound {
        category: String,
        hint: Option<CategoryHint>,
    },

    #[error("'{badge}' is not a valid badge in '{category}'")]
    BadgeNotFound {
        category: String,
        badge: String,
        suggestions: Vec<Suggestion>,
    },

    /// Catalog data that does not have the `[![alt](url)](link)` shape.
    #[error("Malformed badge snippet ({reason}): {snippet}")]
    MalformedSnippet { snippet: String, reason: String },

    #[error("Invalid style '{0}'. Available styles are flat, flat-square, plastic, social, for-the-badge")]
    InvalidStyle(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BadgeError {
    /// Not-found errors are expected user mistakes; everything else is not.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BadgeError::CategoryNotFound { .. } | BadgeError::BadgeNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BadgeError>;
