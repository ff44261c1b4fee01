use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a project.
///
/// Opaque to callers; generated by the store when a project is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(String);

impl ProjectId {
    /// Generates a fresh unique identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Ids are UUID strings; reject anything else so drag payloads
        // carrying garbage fail at the parse boundary.
        if Uuid::parse_str(s).is_ok() {
            Ok(Self(s.to_string()))
        } else {
            Err(crate::error::BoardError::InvalidProjectId(s.to_string()))
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which list a project belongs to on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(crate::error::BoardError::InvalidStatus(s.to_string())),
        }
    }
}

impl ProjectStatus {
    /// Returns the other status (the only transition is Active <-> Finished)
    pub fn toggled(&self) -> ProjectStatus {
        match self {
            Self::Active => Self::Finished,
            Self::Finished => Self::Active,
        }
    }
}

/// A tracked project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new active project with a freshly generated id
    pub fn new(title: String, description: String, people: u32) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::random(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Changes the status, bumping the update timestamp
    pub fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Display label for the assigned head count ("1 person" / "N people")
    pub fn personnel(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.people)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_uniqueness() {
        let a = ProjectId::random();
        let b = ProjectId::random();
        assert_ne!(a, b);
    }

    #[test]
    fn test_project_id_parsing() {
        let id = ProjectId::random();
        let parsed = ProjectId::from_str(id.as_str()).unwrap();
        assert_eq!(parsed, id);

        assert!(ProjectId::from_str("not-a-uuid").is_err());
        assert!(ProjectId::from_str("").is_err());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            ProjectStatus::from_str("active").unwrap(),
            ProjectStatus::Active
        );
        assert_eq!(
            ProjectStatus::from_str("finished").unwrap(),
            ProjectStatus::Finished
        );
        assert_eq!(
            ProjectStatus::from_str("Active").unwrap(),
            ProjectStatus::Active
        );
        assert!(ProjectStatus::from_str("done").is_err());
    }

    #[test]
    fn test_status_toggled() {
        assert_eq!(ProjectStatus::Active.toggled(), ProjectStatus::Finished);
        assert_eq!(ProjectStatus::Finished.toggled(), ProjectStatus::Active);
    }

    #[test]
    fn test_new_project_is_active() {
        let project = Project::new("Website".to_string(), "Relaunch".to_string(), 3);
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.people, 3);
        assert_eq!(project.created_at, project.updated_at);
    }

    #[test]
    fn test_set_status_updates_updated_at() {
        let mut project = Project::new("Test".to_string(), String::new(), 1);
        let initial_updated_at = project.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        project.set_status(ProjectStatus::Finished);

        assert_eq!(project.status, ProjectStatus::Finished);
        assert!(project.updated_at > initial_updated_at);
    }

    #[test]
    fn test_personnel_label() {
        let solo = Project::new("Solo".to_string(), String::new(), 1);
        assert_eq!(solo.personnel(), "1 person");

        let team = Project::new("Team".to_string(), String::new(), 4);
        assert_eq!(team.personnel(), "4 people");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ProjectStatus::Active).unwrap();
        assert_eq!(json, r#""active""#);

        let status: ProjectStatus = serde_json::from_str(r#""finished""#).unwrap();
        assert_eq!(status, ProjectStatus::Finished);
    }

    #[test]
    fn test_project_serialization_round_trip() {
        let project = Project::new("Website".to_string(), "Relaunch".to_string(), 2);

        let json = serde_json::to_string(&project).unwrap();
        let deserialized: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, project);
    }
}
