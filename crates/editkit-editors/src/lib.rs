//! editkit-editors — Concrete inline editors.
//!
//! The editors the authoring client actually instantiates: each one wires a
//! single [`editkit_core::EditableField`] to the shared external-save bus,
//! supplies its field-specific validity rule and change side-effect, and
//! rebuilds its model from the working draft for the owning form. The
//! subscription guard lives inside the editor, so tearing an editor down
//! detaches it from the bus automatically.

pub mod audio;
pub mod concept_card;
pub mod config;
pub mod hint;

pub use audio::StaleAudioTracker;
pub use concept_card::ConceptCardEditor;
pub use config::{load_config, load_config_from, AuthoringConfig};
pub use hint::HintEditor;
