//! Subtitled rich-text content and hints.
//!
//! `SubtitledHtml` is the unit of translatable, voiceable content: an HTML
//! string plus the stable content id that keys its recorded voiceovers and
//! translations. A `Hint` wraps exactly one of them.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Wire shape for a subtitled HTML block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitledHtmlDict {
    pub content_id: String,
    pub html: String,
}

/// An HTML fragment tied to a stable content id.
///
/// The content id must be non-empty: downstream side effects (marking audio
/// stale after an edit) are keyed on it.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitledHtml {
    content_id: String,
    html: String,
}

impl SubtitledHtml {
    pub fn new(content_id: impl Into<String>, html: impl Into<String>) -> Result<Self, ModelError> {
        let content_id = content_id.into();
        if content_id.is_empty() {
            return Err(ModelError::EmptyField {
                kind: "SubtitledHtml",
                field: "content_id",
            });
        }
        Ok(Self {
            content_id,
            html: html.into(),
        })
    }

    pub fn from_backend_dict(value: serde_json::Value) -> Result<Self, ModelError> {
        let dict: SubtitledHtmlDict =
            serde_json::from_value(value).map_err(|source| ModelError::Malformed {
                kind: "SubtitledHtml",
                source,
            })?;
        Self::from_dict(dict)
    }

    pub fn from_dict(dict: SubtitledHtmlDict) -> Result<Self, ModelError> {
        Self::new(dict.content_id, dict.html)
    }

    pub fn to_backend_dict(&self) -> SubtitledHtmlDict {
        SubtitledHtmlDict {
            content_id: self.content_id.clone(),
            html: self.html.clone(),
        }
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Whole-object replacement of the HTML, preserving the content id.
    pub fn with_html(&self, html: impl Into<String>) -> Self {
        Self {
            content_id: self.content_id.clone(),
            html: html.into(),
        }
    }
}

/// Wire shape for a hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HintDict {
    pub hint_content: SubtitledHtmlDict,
}

/// A hint shown to a learner who is stuck.
#[derive(Debug, Clone, PartialEq)]
pub struct Hint {
    hint_content: SubtitledHtml,
}

impl Hint {
    pub fn new(hint_content: SubtitledHtml) -> Self {
        Self { hint_content }
    }

    pub fn from_backend_dict(value: serde_json::Value) -> Result<Self, ModelError> {
        let dict: HintDict =
            serde_json::from_value(value).map_err(|source| ModelError::Malformed {
                kind: "Hint",
                source,
            })?;
        Self::from_dict(dict)
    }

    pub fn from_dict(dict: HintDict) -> Result<Self, ModelError> {
        Ok(Self {
            hint_content: SubtitledHtml::from_dict(dict.hint_content)?,
        })
    }

    pub fn to_backend_dict(&self) -> HintDict {
        HintDict {
            hint_content: self.hint_content.to_backend_dict(),
        }
    }

    pub fn hint_content(&self) -> &SubtitledHtml {
        &self.hint_content
    }
}
