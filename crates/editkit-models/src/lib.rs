//! editkit-models — Backend-dict conversion layer.
//!
//! The server exchanges flat, snake-case "backend dicts"; the client works
//! with validated, read-only value objects. Each model here converts one
//! direction each way and carries no other business logic. Construction is
//! fail-fast: a malformed wire record is a [`error::ModelError`], never a
//! partially-populated object.

pub mod blog;
pub mod content;
pub mod error;
pub mod review;

pub use blog::{BlogPostSummary, BlogPostSummaryDict};
pub use content::{Hint, HintDict, SubtitledHtml, SubtitledHtmlDict};
pub use error::ModelError;
pub use review::{ReviewMaterial, ReviewMaterialDict, WorkedExample, WorkedExampleDict};
