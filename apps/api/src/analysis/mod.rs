// Resume Analysis Core
// Implements: keyword extraction, job keyword detection, formatting checks,
// composite scoring, and improvement tips.
// Pure and synchronous; handlers run it inside tokio::task::spawn_blocking.

pub mod engine;
pub mod formatting;
pub mod handlers;
pub mod job_keywords;
pub mod keywords;
pub mod store;
pub mod tips;

// Re-export the public API consumed by other modules (handlers, state).
pub use engine::{AtsEngine, AtsReport};
