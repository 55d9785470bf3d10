//! Inline editable-field controller.
//!
//! One `EditableField` manages the open / edit / save / cancel lifecycle of a
//! single inline-editable value embedded in a larger form. Opening an edit
//! session snapshots the current value (the memento); saving commits and
//! notifies the owning form; cancelling restores the snapshot. An external
//! save broadcast flushes the field implicitly when it is open and valid.

use std::cell::RefCell;
use std::rc::Rc;

use crate::bus::{ExternalSaveBus, SaveSubscription};

/// Whether editing is permitted at all for this field.
///
/// Passed in at construction instead of read from a process-wide flag, so a
/// read-only rendering of the same form is just a different capability value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCapability {
    pub editable: bool,
}

impl EditCapability {
    pub const EDITABLE: Self = Self { editable: true };
    pub const READ_ONLY: Self = Self { editable: false };
}

impl Default for EditCapability {
    fn default() -> Self {
        Self::EDITABLE
    }
}

/// What a save attempt did. Informational only; no variant is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The edit session closed and the persist callback ran. `changed` reports
    /// whether the committed value differed from the memento under the
    /// field's comparator.
    Committed { changed: bool },
    /// The field was not open; nothing happened.
    NotOpen,
    /// External save only: the field is open but its validator rejected the
    /// current value, so the session stays open and nothing was persisted.
    Invalid,
}

type CompareFn<V> = Box<dyn Fn(&V, &V) -> bool>;
type ValidateFn<V> = Box<dyn Fn(&V) -> bool>;
type ChangeFn = Box<dyn FnMut(&str)>;
type PersistFn = Box<dyn FnMut()>;

/// The memento state machine for one inline-editable value.
///
/// The open/closed flag is the presence of the memento itself, so the
/// "snapshot exists exactly while an edit session is open" invariant cannot be
/// violated by construction.
pub struct EditableField<V> {
    content_id: String,
    value: V,
    memento: Option<V>,
    capability: EditCapability,
    same: CompareFn<V>,
    validate: ValidateFn<V>,
    on_change: Option<ChangeFn>,
    persist: Option<PersistFn>,
}

impl<V: Clone + PartialEq + 'static> EditableField<V> {
    /// Start building a field. `content_id` is the stable identifier handed to
    /// the change side-effect (for example to mark dependent audio stale).
    pub fn builder(content_id: impl Into<String>, initial_value: V) -> FieldBuilder<V> {
        FieldBuilder {
            field: EditableField {
                content_id: content_id.into(),
                value: initial_value,
                memento: None,
                capability: EditCapability::default(),
                same: Box::new(|a, b| a == b),
                validate: Box::new(|_| true),
                on_change: None,
                persist: None,
            },
        }
    }
}

impl<V: Clone> EditableField<V> {
    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    /// The displayed value. While an edit session is open this is the working
    /// draft; the pre-edit value lives in the memento.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Write through from the bound input. Mutating the value does not open or
    /// close an edit session.
    pub fn set_value(&mut self, value: V) {
        self.value = value;
    }

    pub fn is_open(&self) -> bool {
        self.memento.is_some()
    }

    /// Whether the current value passes the field's validator. The UI uses
    /// this to disable the save affordance; `on_external_save` consults the
    /// same probe.
    pub fn is_valid(&self) -> bool {
        (self.validate)(&self.value)
    }

    /// Begin an edit session: snapshot the current value.
    ///
    /// No-op (returns `false`) when editing is not permitted or a session is
    /// already open.
    pub fn open(&mut self) -> bool {
        if !self.capability.editable || self.memento.is_some() {
            return false;
        }
        self.memento = Some(self.value.clone());
        tracing::debug!(content_id = %self.content_id, "edit session opened");
        true
    }

    /// Commit the edit session.
    ///
    /// Closes the session, fires the change side-effect if the value differs
    /// from the memento, then fires the persist callback unconditionally, in
    /// that order. No-op when closed.
    pub fn save(&mut self) -> SaveOutcome {
        let Some(snapshot) = self.memento.take() else {
            return SaveOutcome::NotOpen;
        };
        let changed = !(self.same)(&snapshot, &self.value);
        if changed {
            if let Some(on_change) = self.on_change.as_mut() {
                on_change(&self.content_id);
            }
        }
        if let Some(persist) = self.persist.as_mut() {
            persist();
        }
        tracing::debug!(content_id = %self.content_id, changed, "edit session saved");
        SaveOutcome::Committed { changed }
    }

    /// Discard the edit session, restoring the value from the memento. The
    /// persist callback is not invoked. No-op (returns `false`) when closed.
    pub fn cancel(&mut self) -> bool {
        match self.memento.take() {
            Some(snapshot) => {
                self.value = snapshot;
                tracing::debug!(content_id = %self.content_id, "edit session cancelled");
                true
            }
            None => false,
        }
    }

    /// React to the host's external save broadcast.
    ///
    /// Behaves exactly like [`save`](Self::save) when the field is open and
    /// its validator accepts the current value; otherwise nothing happens (an
    /// open-but-invalid field stays open). Note this commits an edit the user
    /// never explicitly confirmed; the host application relies on that to
    /// avoid losing edits on navigation, and the behavior is kept as-is
    /// pending product-level review.
    pub fn on_external_save(&mut self) -> SaveOutcome {
        if self.memento.is_none() {
            return SaveOutcome::NotOpen;
        }
        if !(self.validate)(&self.value) {
            tracing::debug!(content_id = %self.content_id, "external save skipped: invalid");
            return SaveOutcome::Invalid;
        }
        self.save()
    }
}

/// Builder for [`EditableField`]. All hooks are optional; the comparator
/// defaults to `PartialEq` and the validator accepts everything.
pub struct FieldBuilder<V> {
    field: EditableField<V>,
}

impl<V> FieldBuilder<V> {
    pub fn capability(mut self, capability: EditCapability) -> Self {
        self.field.capability = capability;
        self
    }

    /// Field-specific equality used by `save` to decide whether the change
    /// side-effect fires (for example rich-text HTML string equality after
    /// normalization).
    pub fn compare_with(mut self, same: impl Fn(&V, &V) -> bool + 'static) -> Self {
        self.field.same = Box::new(same);
        self
    }

    /// Validity probe consulted by `on_external_save`. An invalid field is
    /// never flushed implicitly.
    pub fn validate_with(mut self, validate: impl Fn(&V) -> bool + 'static) -> Self {
        self.field.validate = Box::new(validate);
        self
    }

    /// Side effect fired on save when the value changed, parameterized by the
    /// field's content id.
    pub fn on_change(mut self, on_change: impl FnMut(&str) + 'static) -> Self {
        self.field.on_change = Some(Box::new(on_change));
        self
    }

    /// Persist notification fired on every save. The owning form sends the
    /// mutation upstream; the field itself never talks to the network.
    pub fn on_persist(mut self, persist: impl FnMut() + 'static) -> Self {
        self.field.persist = Some(Box::new(persist));
        self
    }

    pub fn build(self) -> EditableField<V> {
        self.field
    }

    /// Build the field behind `Rc<RefCell<..>>`, ready to share with a save
    /// subscription via [`attach_external_save`].
    pub fn build_shared(self) -> Rc<RefCell<EditableField<V>>> {
        Rc::new(RefCell::new(self.field))
    }
}

/// Wire a shared field to the external save broadcast.
///
/// The handler holds only a weak reference, so a field dropped while the
/// subscription is still live (which editors avoid by owning both) is skipped
/// rather than touched after disposal. The returned subscription must be kept
/// alive for as long as the field should hear broadcasts.
pub fn attach_external_save<V: Clone + 'static>(
    bus: &ExternalSaveBus,
    field: &Rc<RefCell<EditableField<V>>>,
) -> SaveSubscription {
    let weak = Rc::downgrade(field);
    bus.subscribe(move || {
        if let Some(field) = weak.upgrade() {
            field.borrow_mut().on_external_save();
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting_persist(count: &Rc<RefCell<usize>>) -> impl FnMut() + 'static {
        let count = Rc::clone(count);
        move || *count.borrow_mut() += 1
    }

    #[test]
    fn open_then_cancel_is_identity() {
        let mut field = EditableField::builder("content_1", "a".to_string()).build();
        assert!(field.open());
        assert!(field.cancel());
        assert_eq!(field.value(), "a");
        assert!(!field.is_open());
    }

    #[test]
    fn open_mutate_save_commits_and_persists_once() {
        let persists = Rc::new(RefCell::new(0));
        let mut field = EditableField::builder("content_1", "a".to_string())
            .on_persist(counting_persist(&persists))
            .build();

        assert!(field.open());
        field.set_value("b".to_string());
        assert_eq!(field.save(), SaveOutcome::Committed { changed: true });
        assert!(!field.is_open());
        assert_eq!(field.value(), "b");
        assert_eq!(*persists.borrow(), 1);
    }

    #[test]
    fn save_without_change_persists_but_skips_change_hook() {
        let persists = Rc::new(RefCell::new(0));
        let changes = Rc::new(RefCell::new(Vec::new()));
        let changes_hook = Rc::clone(&changes);
        let mut field = EditableField::builder("content_1", "a".to_string())
            .on_change(move |id| changes_hook.borrow_mut().push(id.to_string()))
            .on_persist(counting_persist(&persists))
            .build();

        field.open();
        assert_eq!(field.save(), SaveOutcome::Committed { changed: false });
        assert!(changes.borrow().is_empty());
        assert_eq!(*persists.borrow(), 1);
    }

    #[test]
    fn change_hook_receives_content_id_before_persist() {
        // Side-effect order on save is: close, change hook, persist.
        let events = Rc::new(RefCell::new(Vec::new()));
        let change_events = Rc::clone(&events);
        let persist_events = Rc::clone(&events);
        let mut field = EditableField::builder("hint_3", "a".to_string())
            .on_change(move |id| change_events.borrow_mut().push(format!("changed:{id}")))
            .on_persist(move || persist_events.borrow_mut().push("persisted".to_string()))
            .build();

        field.open();
        field.set_value("b".to_string());
        field.save();
        assert_eq!(*events.borrow(), vec!["changed:hint_3", "persisted"]);
    }

    #[test]
    fn cancel_restores_snapshot() {
        let mut field = EditableField::builder("content_1", "a".to_string()).build();
        field.open();
        field.set_value("b".to_string());
        assert!(field.cancel());
        assert_eq!(field.value(), "a");
        assert!(!field.is_open());
    }

    #[test]
    fn cancel_never_persists() {
        let persists = Rc::new(RefCell::new(0));
        let mut field = EditableField::builder("content_1", "a".to_string())
            .on_persist(counting_persist(&persists))
            .build();
        field.open();
        field.set_value("b".to_string());
        field.cancel();
        assert_eq!(*persists.borrow(), 0);
    }

    #[test]
    fn read_only_capability_blocks_open() {
        let mut field = EditableField::builder("content_1", "a".to_string())
            .capability(EditCapability::READ_ONLY)
            .build();
        assert!(!field.open());
        assert!(!field.is_open());
        // Programmatic save/cancel on a closed field are safe no-ops.
        assert_eq!(field.save(), SaveOutcome::NotOpen);
        assert!(!field.cancel());
    }

    #[test]
    fn reopening_an_open_session_keeps_the_original_memento() {
        let mut field = EditableField::builder("content_1", "a".to_string()).build();
        field.open();
        field.set_value("b".to_string());
        assert!(!field.open());
        field.cancel();
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn external_save_while_closed_never_persists() {
        let persists = Rc::new(RefCell::new(0));
        let mut field = EditableField::builder("content_1", "a".to_string())
            .on_persist(counting_persist(&persists))
            .build();
        assert_eq!(field.on_external_save(), SaveOutcome::NotOpen);
        assert_eq!(*persists.borrow(), 0);
    }

    #[test]
    fn external_save_while_invalid_stays_open_and_never_persists() {
        let persists = Rc::new(RefCell::new(0));
        let mut field = EditableField::builder("content_1", "a".to_string())
            .validate_with(|v: &String| !v.is_empty())
            .on_persist(counting_persist(&persists))
            .build();
        field.open();
        field.set_value(String::new());
        assert_eq!(field.on_external_save(), SaveOutcome::Invalid);
        assert!(field.is_open());
        assert_eq!(*persists.borrow(), 0);
    }

    #[test]
    fn external_save_while_valid_is_a_save() {
        let persists = Rc::new(RefCell::new(0));
        let mut field = EditableField::builder("content_1", "a".to_string())
            .validate_with(|v: &String| !v.is_empty())
            .on_persist(counting_persist(&persists))
            .build();
        field.open();
        field.set_value("b".to_string());
        assert_eq!(
            field.on_external_save(),
            SaveOutcome::Committed { changed: true }
        );
        assert!(!field.is_open());
        assert_eq!(*persists.borrow(), 1);
    }

    #[test]
    fn custom_comparator_decides_changed() {
        // Whitespace-insensitive comparison, the way a rich-text field treats
        // cosmetically different HTML as unchanged.
        let changes = Rc::new(RefCell::new(0));
        let changes_hook = Rc::clone(&changes);
        let mut field = EditableField::builder("content_1", "<p>a</p>".to_string())
            .compare_with(|a: &String, b: &String| {
                a.split_whitespace().eq(b.split_whitespace())
            })
            .on_change(move |_| *changes_hook.borrow_mut() += 1)
            .build();

        field.open();
        field.set_value("<p>a</p>  ".to_string());
        assert_eq!(field.save(), SaveOutcome::Committed { changed: false });
        assert_eq!(*changes.borrow(), 0);
    }

    #[test]
    fn attached_field_flushes_on_broadcast() {
        let bus = ExternalSaveBus::new();
        let field = EditableField::builder("content_1", "a".to_string()).build_shared();
        let _sub = attach_external_save(&bus, &field);

        field.borrow_mut().open();
        field.borrow_mut().set_value("b".to_string());
        bus.broadcast();
        assert!(!field.borrow().is_open());
        assert_eq!(field.borrow().value(), "b");
    }

    #[test]
    fn dropping_the_subscription_detaches_the_field() {
        let bus = ExternalSaveBus::new();
        let field = EditableField::builder("content_1", "a".to_string()).build_shared();
        let sub = attach_external_save(&bus, &field);
        drop(sub);

        field.borrow_mut().open();
        bus.broadcast();
        assert!(field.borrow().is_open());
    }

    #[test]
    fn dropped_field_is_skipped_not_touched() {
        let bus = ExternalSaveBus::new();
        let field = EditableField::builder("content_1", "a".to_string()).build_shared();
        let _sub = attach_external_save(&bus, &field);
        drop(field);
        let outcome = bus.broadcast();
        assert_eq!(outcome.delivered, 1);
    }
}
