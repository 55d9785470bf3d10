//! Inline hint editor.
//!
//! One hint, one editable rich-text field. Entering edit mode snapshots the
//! HTML; saving a changed hint marks its voiceover stale and notifies the
//! owning form, which reads back [`HintEditor::hint`] to build its upstream
//! mutation.

use std::cell::RefCell;
use std::rc::Rc;

use editkit_core::{
    attach_external_save, EditCapability, EditableField, ExternalSaveBus, SaveOutcome,
    SaveSubscription,
};
use editkit_models::Hint;

use crate::audio::StaleAudioTracker;

pub struct HintEditor {
    hint: Hint,
    field: Rc<RefCell<EditableField<String>>>,
    // Held for its Drop: tearing down the editor detaches it from the bus.
    _subscription: SaveSubscription,
}

impl HintEditor {
    /// A hint is saveable while its HTML is non-blank.
    fn is_valid_html(html: &String) -> bool {
        !html.trim().is_empty()
    }

    pub fn new(
        hint: Hint,
        capability: EditCapability,
        bus: &ExternalSaveBus,
        audio: StaleAudioTracker,
        on_persist: impl FnMut() + 'static,
    ) -> Self {
        let field = EditableField::builder(
            hint.hint_content().content_id(),
            hint.hint_content().html().to_string(),
        )
        .capability(capability)
        .validate_with(Self::is_valid_html)
        .on_change(move |content_id| audio.mark(content_id))
        .on_persist(on_persist)
        .build_shared();
        let subscription = attach_external_save(bus, &field);

        Self {
            hint,
            field,
            _subscription: subscription,
        }
    }

    /// The hint as currently displayed: the committed model when closed, the
    /// working draft while an edit session is open.
    pub fn hint(&self) -> Hint {
        Hint::new(
            self.hint
                .hint_content()
                .with_html(self.field.borrow().value().clone()),
        )
    }

    pub fn draft_html(&self) -> String {
        self.field.borrow().value().clone()
    }

    /// Write through from the bound rich-text input.
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
