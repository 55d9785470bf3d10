//! editkit-core — Inline-edit state machine and save-broadcast channel.
//!
//! This crate defines the two building blocks every editkit editor is made of:
//! the [`field::EditableField`] memento controller (open / save / cancel /
//! externally-triggered save) and the [`bus::ExternalSaveBus`] that the host
//! application fires to flush open editors before navigation.
//!
//! Everything here is synchronous and single-threaded by design: the types use
//! `Rc`/`RefCell` sharing and are driven from a UI event loop, one turn at a
//! time.

pub mod bus;
pub mod field;

pub use bus::{BroadcastOutcome, ExternalSaveBus, SaveSubscription, SubscriberId};
pub use field::{attach_external_save, EditCapability, EditableField, FieldBuilder, SaveOutcome};
