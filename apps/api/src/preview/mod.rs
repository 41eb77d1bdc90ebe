//! Live résumé preview — deterministic rendering of the form state into an
//! HTML fragment, completion-progress tracking, and session plumbing for
//! per-field edit events.

pub mod handlers;
pub mod markup;
pub mod progress;
pub mod renderer;
pub mod session;
