//! Actions representing side effects to be executed by the shim.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! keeping state transitions pure while the runtime performs the effects:
//! persisting a snapshot, surfacing a message, or exiting. Actions are
//! executed in sequence.

/// Commands representing side effects to be executed by the runtime shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Exits the directory.
    Quit,

    /// Writes the store's current snapshot to the document-store backend.
    ///
    /// Emitted after every successful mutation so the durable copy tracks the
    /// session.
    PersistListings,

    /// Surfaces a user-visible message (validation feedback, refusals,
    /// confirmations).
    ShowMessage(String),
}
