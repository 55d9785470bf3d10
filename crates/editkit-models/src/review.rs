//! Concept-card review material.
//!
//! The review material a learner sees when brushing up on a skill: one
//! explanation plus any number of worked examples, every piece of prose a
//! [`SubtitledHtml`] so voiceovers stay attached across edits.

use serde::{Deserialize, Serialize};

use crate::content::{SubtitledHtml, SubtitledHtmlDict};
use crate::error::ModelError;

/// Wire shape for a worked example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkedExampleDict {
    pub question: SubtitledHtmlDict,
    pub explanation: SubtitledHtmlDict,
}

/// A question / explanation pair demonstrating a skill.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkedExample {
    question: SubtitledHtml,
    explanation: SubtitledHtml,
}

impl WorkedExample {
    pub fn new(question: SubtitledHtml, explanation: SubtitledHtml) -> Self {
        Self {
            question,
            explanation,
        }
    }

    pub fn from_dict(dict: WorkedExampleDict) -> Result<Self, ModelError> {
        Ok(Self {
            question: SubtitledHtml::from_dict(dict.question)?,
            explanation: SubtitledHtml::from_dict(dict.explanation)?,
        })
    }

    pub fn to_backend_dict(&self) -> WorkedExampleDict {
        WorkedExampleDict {
            question: self.question.to_backend_dict(),
            explanation: self.explanation.to_backend_dict(),
        }
    }

    pub fn question(&self) -> &SubtitledHtml {
        &self.question
    }

    pub fn explanation(&self) -> &SubtitledHtml {
        &self.explanation
    }
}

/// Wire shape for concept-card review material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewMaterialDict {
    pub explanation: SubtitledHtmlDict,
    #[serde(default)]
    pub worked_examples: Vec<WorkedExampleDict>,
}

/// The reviewable body of a concept card.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewMaterial {
    explanation: SubtitledHtml,
    worked_examples: Vec<WorkedExample>,
}

impl ReviewMaterial {
    pub fn new(explanation: SubtitledHtml, worked_examples: Vec<WorkedExample>) -> Self {
        Self {
            explanation,
            worked_examples,
        }
    }

    pub fn from_backend_dict(value: serde_json::Value) -> Result<Self, ModelError> {
        let dict: ReviewMaterialDict =
            serde_json::from_value(value).map_err(|source| ModelError::Malformed {
                kind: "ReviewMaterial",
                source,
            })?;
        Self::from_dict(dict)
    }

    pub fn from_dict(dict: ReviewMaterialDict) -> Result<Self, ModelError> {
        Ok(Self {
            explanation: SubtitledHtml::from_dict(dict.explanation)?,
            worked_examples: dict
                .worked_examples
                .into_iter()
                .map(WorkedExample::from_dict)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    pub fn to_backend_dict(&self) -> ReviewMaterialDict {
        ReviewMaterialDict {
            explanation: self.explanation.to_backend_dict(),
            worked_examples: self
                .worked_examples
                .iter()
                .map(WorkedExample::to_backend_dict)
                .collect(),
        }
    }

    pub fn explanation(&self) -> &SubtitledHtml {
        &self.explanation
    }

    pub fn worked_examples(&self) -> &[WorkedExample] {
        &self.worked_examples
    }

    /// Whole-object replacement of the explanation HTML.
    pub fn with_explanation_html(&self, html: impl Into<String>) -> Self {
        Self {
            explanation: self.explanation.with_html(html),
            worked_examples: self.worked_examples.clone(),
        }
    }
}
