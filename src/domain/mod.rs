pub mod project;
pub mod submission;
pub mod validation;

pub use project::{Project, ProjectId, ProjectStatus};
pub use submission::ProjectSubmission;
pub use validation::{validate, FieldConstraint, FieldValue};
