//! Unidirectional state primitives for the terminal UI.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ render
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```
//!
//! Reducers are pure. Side effects (clipboard, file export) stay in
//! [`crate::ui::app::App`], which feeds their outcome back as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
