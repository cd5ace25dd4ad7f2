//! The structured resume record exchanged at every boundary: the LaTeX
//! converter, the HTTP handlers, and the persistence layer all speak this type.
//!
//! Wire format is camelCase JSON. Every collection field carries
//! `#[serde(default)]` so a partial document deserializes with empty lists,
//! never `null` — downstream rendering must not branch on absence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A full resume document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    /// Display label. Not derived from content.
    #[serde(default)]
    pub title: String,
    /// Cosmetic rendering style identifier. Carried on the record but ignored
    /// by the LaTeX converter.
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub portfolio: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// When true the rendered date range ends in "Present" regardless of the
    /// stored `end_date`.
    #[serde(default)]
    pub current: bool,
    /// Bullet lines, in display order.
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub gpa: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Skill buckets. The LaTeX parser only populates `technical`, `frameworks`
/// and `tools`; the other buckets are filled by manual editing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub credential_id: String,
    #[serde(default)]
    pub link: String,
}

/// Persisted resume row. `data` is a JSONB mirror of the [`Resume`] record;
/// `title` and `template` are duplicated as columns for cheap listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub template: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_defaults_to_empty_collections() {
        let resume: Resume = serde_json::from_str(r#"{"title": "My Resume"}"#).unwrap();
        assert_eq!(resume.title, "My Resume");
        assert!(resume.experience.is_empty());
        assert!(resume.education.is_empty());
        assert!(resume.projects.is_empty());
        assert!(resume.skills.technical.is_empty());
        assert!(resume.certifications.is_empty());
        assert!(resume.achievements.is_empty());
        assert_eq!(resume.personal_info.full_name, "");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let mut resume = Resume::default();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.experience.push(ExperienceEntry {
            company: "Acme".to_string(),
            start_date: "2020".to_string(),
            ..Default::default()
        });

        let json = serde_json::to_value(&resume).unwrap();
        assert_eq!(json["personalInfo"]["fullName"], "Jane Doe");
        assert_eq!(json["experience"][0]["startDate"], "2020");
        assert_eq!(json["experience"][0]["current"], false);
    }
}
