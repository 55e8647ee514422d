//! To-do use-case services.
//!
//! # Responsibility
//! - Turn user actions into state transitions (`reducer`).
//! - Orchestrate load, transition, persistence and rendering
//!   (`todo_service`).
//!
//! # Invariants
//! - Every action ends with the commit sequence: persist, rank, paginate,
//!   evaluate completion, render.
//! - Invalid input and unknown ids degrade to no-ops; no action fails.

pub mod reducer;
pub mod todo_service;
