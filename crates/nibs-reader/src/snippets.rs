//! Snippets collected from highlighted text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A piece of selected text with where and when it was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Session-unique, increasing identifier.
    pub id: u64,
    /// Selected text.
    pub text: String,
    /// Location label at the time of selection.
    pub source: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}
