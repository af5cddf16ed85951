//! Photo metadata records.
//!
//! A [`PhotoRecord`] is what the store keeps and what the API returns. A
//! [`PhotoInput`] is the caller-supplied part of a record, without the id and
//! creation time the store assigns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::PhotoId;

/// A stored photo metadata entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PhotoRecord {
    #[schema(value_type = u64)]
    pub id: PhotoId,
    pub title: String,
    pub description: Option<String>,
    /// Opaque reference to the image; not checked as a URI.
    pub url: String,
    pub tags: Vec<String>,
    #[serde(with = "crate::timestamp")]
    #[schema(value_type = String, example = "2024-05-01T09:30:12.004211")]
    pub created_at: DateTime<Utc>,
}

impl PhotoRecord {
    /// Build a new record from caller input.
    pub fn from_input(id: PhotoId, created_at: DateTime<Utc>, input: PhotoInput) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            url: input.url,
            tags: input.tags,
            created_at,
        }
    }

    /// Replace every caller-owned field, leaving `id` and `created_at` alone.
    pub fn apply(&mut self, input: PhotoInput) {
        self.title = input.title;
        self.description = input.description;
        self.url = input.url;
        self.tags = input.tags;
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Validated caller input for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoInput {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub tags: Vec<String>,
}

impl PhotoInput {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
