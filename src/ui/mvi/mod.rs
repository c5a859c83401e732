//! Model-View-Intent primitives for the dialog.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── key press ───────────┘
//! ```
//!
//! Reducers only compute the next state. Anything that reaches outside the
//! dialog (persisting a decision, quitting) happens in the host after
//! dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
