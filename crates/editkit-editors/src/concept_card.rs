//! Concept-card review-material editor.
//!
//! The variant of the inline-edit pattern used on skill concept cards: the
//! explanation HTML is the editable field, but the card as a whole only
//! counts as valid when the explanation and every worked example are
//! non-blank. An external save never flushes a card with a blank worked
//! example.

use std::cell::RefCell;
use std::rc::Rc;

use editkit_core::{
    attach_external_save, EditCapability, EditableField, ExternalSaveBus, SaveOutcome,
    SaveSubscription,
};
use editkit_models::ReviewMaterial;

use crate::audio::StaleAudioTracker;

pub struct ConceptCardEditor {
    material: ReviewMaterial,
    field: Rc<RefCell<EditableField<String>>>,
    _subscription: SaveSubscription,
}

impl ConceptCardEditor {
    pub fn new(
        material: ReviewMaterial,
        capability: EditCapability,
        bus: &ExternalSaveBus,
        audio: StaleAudioTracker,
        on_persist: impl FnMut() + 'static,
    ) -> Self {
        // Worked examples are fixed for the lifetime of this editor, so their
        // validity is decided once and folded into the field's validator.
        let examples_ok = material.worked_examples().iter().all(|example| {
            !example.question().html().trim().is_empty()
                && !example.explanation().html().trim().is_empty()
        });

        let field = EditableField::builder(
            material.explanation().content_id(),
            material.explanation().html().to_string(),
        )
        .capability(capability)
        .validate_with(move |html: &String| examples_ok && !html.trim().is_empty())
        .on_change(move |content_id| audio.mark(content_id))
        .on_persist(on_persist)
        .build_shared();
        let subscription = attach_external_save(bus, &field);

        Self {
            material,
            field,
            _subscription: subscription,
        }
    }

    /// The review material as currently displayed, with the working draft
    /// substituted for the explanation.
    pub fn material(&self) -> ReviewMaterial {
        self.material
            .with_explanation_html(self.field.borrow().value().clone())
    }

    pub fn draft_html(&self) -> String {
        self.field.borrow().value().clone()
    }

    pub fn set_draft_html(&self, html: impl Into<String>) {
        self.field.borrow_mut().set_value(html.into());
    }

    pub fn is_editing(&self) -> bool {
        self.field.borrow().is_open()
    }

    pub fn is_valid(&self) -> bool {
        self.field.borrow().is_valid()
    }

    pub fn begin_edit(&self) -> bool {
        self.field.borrow_mut().open()
    }

    pub fn save(&self) -> SaveOutcome {
        self.field.borrow_mut().save()
    }

    pub fn cancel_edit(&self) -> bool {
        self.field.borrow_mut().cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use editkit_models::{SubtitledHtml, WorkedExample};

    fn material_with_example(example_html: &str) -> ReviewMaterial {
        ReviewMaterial::new(
            SubtitledHtml::new("explanation", "<p>because</p>").unwrap(),
            vec![WorkedExample::new(
                SubtitledHtml::new("worked_example_q_1", "<p>q</p>").unwrap(),
                SubtitledHtml::new("worked_example_e_1", example_html).unwrap(),
            )],
        )
    }

    #[test]
    fn editing_the_explanation_marks_its_audio_stale() {
        let bus = ExternalSaveBus::new();
        let audio = StaleAudioTracker::new();
        let editor = ConceptCardEditor::new(
            material_with_example("<p>e</p>"),
            EditCapability::EDITABLE,
            &bus,
            audio.clone(),
            || {},
        );

        editor.begin_edit();
        editor.set_draft_html("<p>because of X</p>");
        assert_eq!(editor.save(), SaveOutcome::Committed { changed: true });
        assert_eq!(audio.stale_ids(), vec!["explanation"]);
        assert_eq!(editor.material().explanation().html(), "<p>because of X</p>");
    }

    #[test]
    fn blank_worked_example_makes_the_card_invalid() {
        let bus = ExternalSaveBus::new();
        let editor = ConceptCardEditor::new(
            material_with_example("  "),
            EditCapability::EDITABLE,
            &bus,
            StaleAudioTracker::new(),
            || {},
        );
        editor.begin_edit();
        assert!(!editor.is_valid());

        // Only the implicit external flush is gated on validity; the invalid
        // card rides out the broadcast still open.
        bus.broadcast();
        assert!(editor.is_editing());
    }

    #[test]
    fn worked_examples_survive_a_save_untouched() {
        let bus = ExternalSaveBus::new();
        let editor = ConceptCardEditor::new(
            material_with_example("<p>e</p>"),
            EditCapability::EDITABLE,
            &bus,
            StaleAudioTracker::new(),
            || {},
        );
        editor.begin_edit();
        editor.set_draft_html("<p>new</p>");
        editor.save();
        let material = editor.material();
        assert_eq!(material.worked_examples().len(), 1);
        assert_eq!(material.worked_examples()[0].question().html(), "<p>q</p>");
    }
}
