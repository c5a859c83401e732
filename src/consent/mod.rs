//! Consent state machine.
//!
//! - [`VisibilityState`]: mounted or not, collapsed or expanded
//! - [`ConsentAggregator`]: offered categories and the agreed subset
//! - [`CommitDispatcher`]: the two confirmation paths into a [`ConsentStore`]
//!
//! [`ConsentStore`]: crate::storage::ConsentStore

mod aggregator;
mod category;
mod dispatcher;
mod error;
mod set;
mod visibility;

pub use aggregator::ConsentAggregator;
pub use category::{CategoryId, CookieCategory};
pub use dispatcher::{CommitDispatcher, CompletionCallback};
pub use error::ConsentError;
pub use set::ConsentSet;
pub use visibility::{DialogView, VisibilityState};
