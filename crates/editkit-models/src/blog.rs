//! Blog post summary cards.
//!
//! The wire record keeps the platform's historical shape: snake-case field
//! names and millisecond timestamps, with `published_on` and
//! `thumbnail_filename` optional (a draft has neither). The model converts
//! timestamps to `chrono` instants and is read-only after construction.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Wire shape of a blog post summary. Optional fields that are absent stay
/// absent on re-serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostSummaryDict {
    pub id: String,
    pub title: String,
    pub author_username: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub url_fragment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_on: Option<f64>,
    pub last_updated: f64,
}

/// A published or draft blog post as shown on a summary card.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostSummary {
    id: String,
    title: String,
    author_username: String,
    tags: Vec<String>,
    url_fragment: String,
    thumbnail_filename: Option<String>,
    published_on: Option<DateTime<Utc>>,
    last_updated: DateTime<Utc>,
}

fn datetime_from_millis(
    kind: &'static str,
    field: &'static str,
    millis: f64,
) -> Result<DateTime<Utc>, ModelError> {
    if !millis.is_finite() {
        return Err(ModelError::InvalidTimestamp {
            kind,
            field,
            millis,
        });
    }
    Utc.timestamp_millis_opt(millis as i64)
        .single()
        .ok_or(ModelError::InvalidTimestamp {
            kind,
            field,
            millis,
        })
}

impl BlogPostSummary {
    pub fn from_backend_dict(value: serde_json::Value) -> Result<Self, ModelError> {
        let dict: BlogPostSummaryDict =
            serde_json::from_value(value).map_err(|source| ModelError::Malformed {
                kind: "BlogPostSummary",
                source,
            })?;
        Self::from_dict(dict)
    }

    pub fn from_dict(dict: BlogPostSummaryDict) -> Result<Self, ModelError> {
        if dict.id.is_empty() {
            return Err(ModelError::EmptyField {
                kind: "BlogPostSummary",
                field: "id",
            });
        }
        let published_on = dict
            .published_on
            .map(|ms| datetime_from_millis("BlogPostSummary", "published_on", ms))
            .transpose()?;
        let last_updated = datetime_from_millis("BlogPostSummary", "last_updated", dict.last_updated)?;
        Ok(Self {
            id: dict.id,
            title: dict.title,
            author_username: dict.author_username,
            tags: dict.tags,
            url_fragment: dict.url_fragment,
            thumbnail_filename: dict.thumbnail_filename,
            published_on,
            last_updated,
        })
    }

    pub fn to_backend_dict(&self) -> BlogPostSummaryDict {
        BlogPostSummaryDict {
            id: self.id.clone(),
            title: self.title.clone(),
            author_username: self.author_username.clone(),
            tags: self.tags.clone(),
            url_fragment: self.url_fragment.clone(),
            thumbnail_filename: self.thumbnail_filename.clone(),
            published_on: self.published_on.map(|dt| dt.timestamp_millis() as f64),
            last_updated: self.last_updated.timestamp_millis() as f64,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_username(&self) -> &str {
        &self.author_username
    }

    /// Tag list, in server order. The model cannot be mutated through the
    /// returned slice; clone if an owned copy is needed.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn url_fragment(&self) -> &str {
        &self.url_fragment
    }

    pub fn thumbnail_filename(&self) -> Option<&str> {
        self.thumbnail_filename.as_deref()
    }

    /// `None` while the post is an unpublished draft.
    pub fn published_on(&self) -> Option<DateTime<Utc>> {
        self.published_on
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn is_published(&self) -> bool {
        self.published_on.is_some()
    }
}
