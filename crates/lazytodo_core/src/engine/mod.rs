//! Pure list engines: ranking, pagination, completion and id issuing.
//!
//! # Responsibility
//! - Derive ordered and windowed views from a collection without touching
//!   storage.
//!
//! # Invariants
//! - Nothing in this module persists or mutates its input collection.

pub mod completion;
pub mod ids;
pub mod pagination;
pub mod rank;
