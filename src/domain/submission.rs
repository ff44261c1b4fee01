use crate::domain::validation::FieldConstraint;
use crate::store::ProjectStore;

/// Raw new-project form input, prior to validation.
///
/// Each field carries its own constraint set and every field must pass
/// before the submission reaches the store; the store itself does not
/// re-validate.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSubmission {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl ProjectSubmission {
    /// Minimum accepted description length
    pub const DESCRIPTION_MIN_LENGTH: usize = 5;
    /// Accepted head-count range
    pub const PEOPLE_MIN: u32 = 1;
    pub const PEOPLE_MAX: u32 = 5;

    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people,
        }
    }

    /// Validates every field independently; all must pass
    pub fn is_valid(&self) -> bool {
        let title = FieldConstraint::text(self.title.clone()).required();
        let description =
            FieldConstraint::text(self.description.clone()).min_length(Self::DESCRIPTION_MIN_LENGTH);
        let people = FieldConstraint::number(f64::from(self.people))
            .min(f64::from(Self::PEOPLE_MIN))
            .max(f64::from(Self::PEOPLE_MAX));

        title.is_valid() && description.is_valid() && people.is_valid()
    }

    /// Adds the project to the store if the submission validates.
    ///
    /// Returns false (leaving the store untouched) when any field fails;
    /// the caller surfaces that to the user.
    pub fn submit_to(&self, store: &mut ProjectStore) -> bool {
        if !self.is_valid() {
            return false;
        }
        store.add_project(&self.title, &self.description, self.people);
        true
    }
}
