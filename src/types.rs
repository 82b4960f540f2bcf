pub mod datum;

// Re-export types for convenience.
pub use crate::types::datum::Datum;
