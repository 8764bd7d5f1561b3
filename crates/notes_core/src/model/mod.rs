//! Domain model for notes.
//!
//! # Responsibility
//! - Define the persisted note record and the creation input view.
//! - Keep boundary validation independent from storage.
//!
//! # Invariants
//! - Every stored note is identified by a store-assigned `NoteId`.
//! - Deletion is permanent; there is no tombstone state.

pub mod note;
