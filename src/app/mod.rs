//! Application layer coordinating state, events, and actions.
//!
//! Sits between the runtime shim (`main.rs`) and the domain/store/query
//! layers, implementing the event-driven flow that powers the screens.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → Store + State Mutations → Actions → Side Effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordination
//! - [`modes`]: Input and view mode state machine types
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus, ViewMode};
pub use state::AppState;
