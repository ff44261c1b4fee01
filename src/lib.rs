//! # Projectboard Core
//!
//! Core state management and input validation for a drag-and-drop project
//! tracking board.
//!
//! This crate provides the observable project store (add, move between the
//! active and finished lists, listener fan-out with immutable snapshots)
//! and the form-field validator, without any dependency on a specific UI
//! implementation.

pub mod domain;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use domain::{
    project::{Project, ProjectId, ProjectStatus},
    submission::ProjectSubmission,
    validation::{validate, FieldConstraint, FieldValue},
};
pub use error::{BoardError, Result};
pub use store::{ListenerId, ProjectStore, SharedProjectStore};
