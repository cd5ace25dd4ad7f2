//! Bidirectional conversion between LaTeX resume source and the structured
//! [`Resume`](crate::models::resume::Resume) record.
//!
//! `parser` goes LaTeX → record (heuristic, best-effort), `serializer` goes
//! record → LaTeX (total, canonical template). The two are not inverses in
//! general — parsing is lossy on arbitrary input — but a record sent through
//! serialize → parse keeps its core fields, and re-serializing the parsed
//! record reproduces the document byte for byte.

pub mod escape;
pub mod parser;
pub mod serializer;

pub use parser::{parse_latex_resume, ParseError};
pub use serializer::resume_to_latex;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        EducationEntry, ExperienceEntry, ProjectEntry, Resume,
    };

    /// A record exercising every field the parser can recover.
    fn round_trippable_resume() -> Resume {
        let mut resume = Resume::default();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.personal_info.email = "jane@example.com".to_string();
        resume.personal_info.phone = "555-000-1111".to_string();
        resume.personal_info.linkedin = "https://linkedin.com/in/jane".to_string();
        resume.personal_info.github = "https://github.com/jane".to_string();
        resume.personal_info.summary = "Backend engineer focused on data systems.".to_string();
        resume.experience.push(ExperienceEntry {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            location: "NYC".to_string(),
            start_date: "2020".to_string(),
            end_date: "2022".to_string(),
            description: vec![
                "Built the billing pipeline".to_string(),
                "Cut query latency in half".to_string(),
            ],
            technologies: vec!["Rust".to_string(), "Postgres".to_string()],
            ..Default::default()
        });
        resume.experience.push(ExperienceEntry {
            company: "Globex".to_string(),
            position: "Staff Engineer".to_string(),
            location: "SF".to_string(),
            start_date: "2022".to_string(),
            end_date: "Present".to_string(),
            current: true,
            description: vec!["Leads the storage team".to_string()],
            ..Default::default()
        });
        resume.education.push(EducationEntry {
            institution: "State University".to_string(),
            degree: "B.S.".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2014".to_string(),
            end_date: "2018".to_string(),
            gpa: "3.9".to_string(),
            achievements: vec!["Dean's list".to_string()],
            ..Default::default()
        });
        resume.projects.push(ProjectEntry {
            name: "Chess Engine".to_string(),
            link: "https://example.com/chess".to_string(),
            description: "Alpha-beta search".to_string(),
            highlights: vec![
                "Alpha-beta search".to_string(),
                "Opening book".to_string(),
            ],
            technologies: vec!["Rust".to_string(), "WASM".to_string()],
            ..Default::default()
        });
        resume.skills.technical = vec!["Rust".to_string(), "Go".to_string()];
        resume.skills.frameworks = vec!["Axum".to_string()];
        resume.skills.tools = vec!["Docker".to_string(), "Git".to_string()];
        resume
    }

    #[test]
    fn test_serialize_then_parse_recovers_core_fields() {
        let original = round_trippable_resume();
        let parsed = parse_latex_resume(&resume_to_latex(&original)).unwrap();

        assert_eq!(parsed.personal_info.full_name, "Jane Doe");
        assert_eq!(parsed.personal_info.email, "jane@example.com");
        assert_eq!(parsed.personal_info.phone, "555-000-1111");
        assert_eq!(parsed.personal_info.linkedin, "https://linkedin.com/in/jane");
        assert_eq!(parsed.personal_info.github, "https://github.com/jane");
        assert_eq!(
            parsed.personal_info.summary,
            "Backend engineer focused on data systems."
        );

        assert_eq!(parsed.experience.len(), 2);
        assert_eq!(parsed.experience[0].company, "Acme");
        assert_eq!(parsed.experience[0].position, "Engineer");
        assert_eq!(parsed.experience[0].location, "NYC");
        assert_eq!(parsed.experience[0].start_date, "2020");
        assert_eq!(parsed.experience[0].end_date, "2022");
        assert_eq!(
            parsed.experience[0].description,
            vec!["Built the billing pipeline", "Cut query latency in half"]
        );
        assert_eq!(parsed.experience[0].technologies, vec!["Rust", "Postgres"]);
        assert!(parsed.experience[1].current);
        assert_eq!(parsed.experience[1].company, "Globex");

        assert_eq!(parsed.education.len(), 1);
        assert_eq!(parsed.education[0].institution, "State University");
        assert_eq!(parsed.education[0].degree, "B.S.");
        assert_eq!(parsed.education[0].field, "Computer Science");
        assert_eq!(parsed.education[0].gpa, "3.9");
        assert_eq!(parsed.education[0].achievements, vec!["Dean's list"]);

        assert_eq!(parsed.projects.len(), 1);
        assert_eq!(parsed.projects[0].name, "Chess Engine");
        assert_eq!(parsed.projects[0].link, "https://example.com/chess");
        assert_eq!(parsed.projects[0].description, "Alpha-beta search");
        assert_eq!(
            parsed.projects[0].highlights,
            vec!["Alpha-beta search", "Opening book"]
        );
        assert_eq!(parsed.projects[0].technologies, vec!["Rust", "WASM"]);

        assert_eq!(parsed.skills.technical, vec!["Rust", "Go"]);
        assert_eq!(parsed.skills.frameworks, vec!["Axum"]);
        assert_eq!(parsed.skills.tools, vec!["Docker", "Git"]);
    }

    #[test]
    fn test_serialize_parse_serialize_is_stable() {
        let original = round_trippable_resume();
        let first = resume_to_latex(&original);
        let reparsed = parse_latex_resume(&first).unwrap();
        let second = resume_to_latex(&reparsed);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_of_serialized_empty_record_yields_placeholder() {
        let rendered = resume_to_latex(&Resume::default());
        let parsed = parse_latex_resume(&rendered).unwrap();
        assert_eq!(parsed.personal_info.full_name, parser::PLACEHOLDER_NAME);
        assert!(parsed.experience.is_empty());
        assert!(parsed.education.is_empty());
        assert!(parsed.projects.is_empty());
    }
}
