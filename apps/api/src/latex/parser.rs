//! LaTeX → structured resume extraction.
//!
//! This is a best-effort heuristic extractor, not a LaTeX engine. Real-world
//! resume sources vary wildly, so every field is matched through an ordered
//! fallback chain (first pattern that matches wins) and repeated sections are
//! matched through up to three structural conventions tried in sequence:
//!
//! 1. "simple"  — `\textbf{...} \hfill dates` followed by an `itemize` block
//! 2. subheading — `\resumeSubheading{a}{b}{c}{d}` plus `\resumeItem{...}` bullets
//! 3. cventry   — the moderncv-style six-argument `\cventry{...}` macro
//!
//! A field that matches no pattern keeps its default; extraction failure of
//! one field never aborts extraction of others. The only hard failure mode is
//! [`ParseError`], raised when the pipeline itself blows up on input it cannot
//! handle.

use std::panic::{self, AssertUnwindSafe};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, Resume, Skills,
};

/// Substituted when no name pattern matches, so downstream required-field
/// expectations always hold.
pub const PLACEHOLDER_NAME: &str = "Imported Resume";
/// Title stamped on every parsed record. Not derived from content.
pub const IMPORTED_TITLE: &str = "Imported from LaTeX";
/// Default cosmetic template for imported resumes.
pub const DEFAULT_TEMPLATE: &str = "classic";

/// Raised only when the overall extraction pipeline fails unrecoverably.
/// A field that merely matches no pattern is not an error; it keeps its
/// default value.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("extraction pipeline failed: {0}")]
    Extraction(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Pattern tables — declaration order is match priority
// ────────────────────────────────────────────────────────────────────────────

// Line comments: an unescaped % up to end of line. The capture keeps the
// preceding character so `replace_all` can put it back.
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)(^|[^\\])%[^\r\n]*").unwrap());

static NAME_MACRO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\name\{([^}]+)\}").unwrap());
static NAME_TITLE_SC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\textbf\{\\(?:Huge|LARGE|Large)\s+\\scshape\s+([^}]+)\}").unwrap());
static NAME_HUGE_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\\Huge\s+\\textbf\{([^}]+)\}\}").unwrap());
static NAME_BOLD_CAPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\textbf\{\\Huge[^}]*\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)\}").unwrap()
});

static EMAIL_MACRO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\email\{([^}]+)\}").unwrap());
static EMAIL_MAILTO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\href\{mailto:([^}]+)\}\{[^}]*\}").unwrap());
static EMAIL_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})").unwrap());

static PHONE_MACRO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\phone\{([^}]+)\}").unwrap());
static MOBILE_MACRO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\mobile\{([^}]+)\}").unwrap());
static PHONE_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{3}[-.\s]?\d{3}[-.\s]?\d{4})").unwrap());

static LOCATION_MACRO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\address\{([^}]+)\}|\\location\{([^}]+)\}").unwrap());

static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/([^}\s]+)|\\linkedin\{([^}]+)\}").unwrap());
static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/([^}\s]+)|\\github\{([^}]+)\}").unwrap());

static SUMMARY_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\\section\*?\{(?:summary|objective|profile)\}").unwrap());
static EXPERIENCE_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\\section\*?\{(?:experience|work experience|employment|internship experience)\}")
        .unwrap()
});
static EDUCATION_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\\section\*?\{education\}").unwrap());
static PROJECTS_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\\section\*?\{projects\}").unwrap());
static SKILLS_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\\section\*?\{(?:skills|technical skills)\}").unwrap());
static SECTION_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\section|\\end\{document\}").unwrap());

static QUOTE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\begin\{quote\}([\s\S]*?)\\end\{quote\}").unwrap());

static SIMPLE_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\textbf\{([^}]+)\}\s*\\hfill\s*([^\n]+)\n\\begin\{itemize\}([\s\S]*?)\\end\{itemize\}")
        .unwrap()
});
static SIMPLE_EDU: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\textbf\{([^}]+)\},\s*([^\n\\]+)\s*\\hfill\s*([^\n]+)").unwrap());
static SIMPLE_PROJECT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\\textbf\{([^}]+)\}\s*\\hfill\s*([^\n]+)\n\\begin\{itemize\}([\s\S]*?)\\end\{itemize\}\s*(?:\\textit\{Technologies:\s*([^}]+)\})?",
    )
    .unwrap()
});

static SUBHEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\resumeSubheading\s*\{([^}]*)\}\s*\{([^}]*)\}\s*\{([^}]*)\}\s*\{([^}]*)\}")
        .unwrap()
});
static RESUME_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\resumeItem\{([^}]*)\}").unwrap());
static TECH_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\resumeItem\{\\textbf\{Technologies:\}\s*([^}]*)\}").unwrap());
static CVENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\cventry\{([^}]*)\}\{([^}]*)\}\{([^}]*)\}\{([^}]*)\}\{([^}]*)\}\{([^}]*)\}")
        .unwrap()
});

static PROJECT_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\resumeProjectHeading\{\\textbf\{([^}]*)\}[^}]*\}\{([^}]*)\}").unwrap()
});
static PROJECT_MACRO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\project\{([^}]*)\}\{([^}]*)\}").unwrap());

static DEGREE_FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(.*?)\s+in\s+(.+)$").unwrap());

static SKILL_ITEM_CATEGORY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\item\s+\\textbf\{([^}:]+):\}\s*([^\n]+)").unwrap());
static SKILL_LANGUAGES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\\textbf\{(?:Languages|Programming|Technical)\}\s*\{?\s*:\s*([^}\\]+)\}?")
        .unwrap()
});
static SKILL_FRAMEWORKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\\textbf\{(?:Frameworks|Libraries)\}\s*\{?\s*:\s*([^}\\]+)\}?").unwrap()
});
static SKILL_TOOLS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\\textbf\{(?:Tools|Technologies|Developer Tools)\}\s*\{?\s*:\s*([^}\\]+)\}?")
        .unwrap()
});
static TEXTBF_CMD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\textbf\{[^}]*\}").unwrap());
static LATEX_CMD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\[a-zA-Z]+").unwrap());

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Parses free-form LaTeX resume source into a fresh [`Resume`] record.
///
/// Every extraction step is independently best-effort; unmatched fields stay
/// at their defaults. The pipeline as a whole is guarded so that a latent
/// panic in any extraction step surfaces as [`ParseError`] instead of tearing
/// down the caller.
pub fn parse_latex_resume(source: &str) -> Result<Resume, ParseError> {
    panic::catch_unwind(AssertUnwindSafe(|| extract_resume(source)))
        .map_err(|cause| ParseError::Extraction(panic_message(cause)))
}

fn panic_message(cause: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = cause.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = cause.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown failure".to_string()
    }
}

fn extract_resume(source: &str) -> Resume {
    let text = COMMENT.replace_all(source, "${1}").into_owned();

    let mut resume = Resume {
        title: IMPORTED_TITLE.to_string(),
        template: DEFAULT_TEMPLATE.to_string(),
        ..Default::default()
    };

    resume.personal_info = extract_personal_info(&text);

    if let Some(span) = isolate_section(&text, &EXPERIENCE_HEADING) {
        resume.experience = extract_experience(span);
    }
    if let Some(span) = isolate_section(&text, &EDUCATION_HEADING) {
        resume.education = extract_education(span);
    }
    if let Some(span) = isolate_section(&text, &PROJECTS_HEADING) {
        resume.projects = extract_projects(span);
    }
    if let Some(span) = isolate_section(&text, &SKILLS_HEADING) {
        resume.skills = extract_skills(span);
    }

    if resume.personal_info.full_name.trim().is_empty() {
        resume.personal_info.full_name = PLACEHOLDER_NAME.to_string();
    }

    resume
}

// ────────────────────────────────────────────────────────────────────────────
// Shared helpers
// ────────────────────────────────────────────────────────────────────────────

/// Applies an ordered fallback chain: the first pattern with a non-empty
/// capture group wins and later alternatives are not attempted.
fn first_capture(text: &str, chain: &[&Lazy<Regex>]) -> Option<String> {
    chain.iter().find_map(|re| {
        re.captures(text).and_then(|caps| {
            (1..caps.len())
                .find_map(|i| caps.get(i))
                .map(|m| m.as_str().trim().to_string())
        })
    })
}

/// Isolates the text between a section heading and the next section heading
/// (or end of document).
fn isolate_section<'a>(text: &'a str, heading: &Regex) -> Option<&'a str> {
    let m = heading.find(text)?;
    let rest = &text[m.end()..];
    match SECTION_BOUNDARY.find(rest) {
        Some(boundary) => Some(&rest[..boundary.start()]),
        None => Some(rest),
    }
}

/// Splits a date range on the double-hyphen separator. Returns the trimmed
/// start and, if the separator was present, the trimmed end.
fn split_date_range(raw: &str) -> (String, Option<String>) {
    match raw.split_once("--") {
        Some((start, end)) => (start.trim().to_string(), Some(end.trim().to_string())),
        None => (raw.trim().to_string(), None),
    }
}

/// The literal "present" anywhere in a date range marks an ongoing entry.
fn is_current(raw: &str) -> bool {
    raw.to_lowercase().contains("present")
}

/// Bullets of a raw `itemize` body, split on `\item`.
fn itemize_bullets(blob: &str) -> Vec<String> {
    blob.split("\\item")
        .skip(1)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_commas(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_commas_semicolons(raw: &str) -> Vec<String> {
    raw.split(|c| c == ',' || c == ';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Finds, for each match of `item` inside `span`, the index of the last entry
/// heading that ends at or before the match. Items preceding the first
/// heading are dropped.
fn owning_entry(heading_ends: &[usize], item_start: usize) -> Option<usize> {
    heading_ends.iter().rposition(|&end| end <= item_start)
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

fn extract_personal_info(text: &str) -> PersonalInfo {
    let mut info = PersonalInfo::default();

    if let Some(name) = first_capture(
        text,
        &[&NAME_MACRO, &NAME_TITLE_SC, &NAME_HUGE_GROUP, &NAME_BOLD_CAPS],
    ) {
        info.full_name = name;
    }
    if let Some(email) = first_capture(text, &[&EMAIL_MACRO, &EMAIL_MAILTO, &EMAIL_BARE]) {
        info.email = email;
    }
    if let Some(phone) = first_capture(text, &[&PHONE_MACRO, &MOBILE_MACRO, &PHONE_BARE]) {
        info.phone = phone;
    }
    if let Some(location) = first_capture(text, &[&LOCATION_MACRO]) {
        info.location = location;
    }
    if let Some(handle) = first_capture(text, &[&LINKEDIN]) {
        info.linkedin = profile_url(&handle, "https://linkedin.com/in/");
    }
    if let Some(handle) = first_capture(text, &[&GITHUB]) {
        info.github = profile_url(&handle, "https://github.com/");
    }
    if let Some(summary) = extract_summary(text) {
        info.summary = summary;
    }

    info
}

/// A captured profile value may be a full URL or a bare handle; bare handles
/// get the canonical profile prefix.
fn profile_url(handle: &str, prefix: &str) -> String {
    if handle.contains("http") {
        handle.to_string()
    } else {
        format!("{prefix}{handle}")
    }
}

/// Summary/Objective/Profile section: either a `quote` environment, or the
/// first run of markup-free lines after the heading.
fn extract_summary(text: &str) -> Option<String> {
    let span = isolate_section(text, &SUMMARY_HEADING)?;
    let raw = match QUOTE_BLOCK.captures(span).and_then(|caps| caps.get(1)) {
        Some(quoted) => quoted.as_str().to_string(),
        None => span
            .lines()
            .take_while(|line| !line.contains('\\'))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    let cleaned = raw.replace("\\textit{", "").replace('}', "");
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

fn extract_experience(span: &str) -> Vec<ExperienceEntry> {
    let entries = extract_simple_experience(span);
    if !entries.is_empty() {
        return entries;
    }
    let entries = extract_subheading_experience(span);
    if !entries.is_empty() {
        return entries;
    }
    extract_cventry_experience(span)
}

fn extract_simple_experience(span: &str) -> Vec<ExperienceEntry> {
    SIMPLE_ENTRY
        .captures_iter(span)
        .map(|caps| {
            let title_company = caps[1].trim().to_string();
            let dates = caps[2].trim().to_string();

            let (position, company) = match title_company.split_once(',') {
                Some((position, rest)) => {
                    // Only the segment up to the next comma names the company.
                    let company = rest.split(',').next().unwrap_or(rest);
                    (position.trim().to_string(), company.trim().to_string())
                }
                None => (title_company, String::new()),
            };
            let (start_date, end_date) = split_date_range(&dates);

            ExperienceEntry {
                company,
                position,
                start_date,
                end_date: end_date.unwrap_or_default(),
                current: is_current(&dates),
                description: itemize_bullets(&caps[3]),
                ..Default::default()
            }
        })
        .collect()
}

fn extract_subheading_experience(span: &str) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut heading_ends = Vec::new();

    for caps in SUBHEADING.captures_iter(span) {
        if let Some(whole) = caps.get(0) {
            heading_ends.push(whole.end());
        }
        let dates = caps[4].trim().to_string();
        let (start_date, end_date) = split_date_range(&dates);
        entries.push(ExperienceEntry {
            company: caps[1].trim().to_string(),
            location: caps[2].trim().to_string(),
            position: caps[3].trim().to_string(),
            start_date,
            end_date: end_date.unwrap_or_else(|| dates.clone()),
            current: is_current(&dates),
            ..Default::default()
        });
    }
    if entries.is_empty() {
        return entries;
    }

    // Bullets belong to the nearest preceding subheading.
    for caps in RESUME_ITEM.captures_iter(span) {
        let desc = caps[1].trim();
        if desc.is_empty() || desc.starts_with("\\textbf") {
            continue;
        }
        let item_start = match caps.get(0) {
            Some(m) => m.start(),
            None => continue,
        };
        if let Some(entry) = owning_entry(&heading_ends, item_start).and_then(|i| entries.get_mut(i))
        {
            entry.description.push(desc.to_string());
        }
    }
    for caps in TECH_ITEM.captures_iter(span) {
        let item_start = match caps.get(0) {
            Some(m) => m.start(),
            None => continue,
        };
        if let Some(entry) = owning_entry(&heading_ends, item_start).and_then(|i| entries.get_mut(i))
        {
            entry.technologies = split_commas(&caps[1]);
        }
    }

    entries
}

fn extract_cventry_experience(span: &str) -> Vec<ExperienceEntry> {
    CVENTRY
        .captures_iter(span)
        .map(|caps| {
            let dates = caps[1].trim().to_string();
            let (start_date, end_date) = split_date_range(&dates);
            ExperienceEntry {
                position: caps[2].trim().to_string(),
                company: caps[3].trim().to_string(),
                location: caps[4].trim().to_string(),
                start_date,
                end_date: end_date.unwrap_or_default(),
                current: is_current(&dates),
                description: cventry_bullets(&caps[6]),
                ..Default::default()
            }
        })
        .collect()
}

/// The sixth `\cventry` argument is a free-form bullet blob: split on `\item`
/// and strip stray braces.
fn cventry_bullets(blob: &str) -> Vec<String> {
    blob.split("\\item")
        .map(|chunk| chunk.replace('{', "").replace('}', "").trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

fn extract_education(span: &str) -> Vec<EducationEntry> {
    let entries = extract_simple_education(span);
    if !entries.is_empty() {
        return entries;
    }
    let entries = extract_subheading_education(span);
    if !entries.is_empty() {
        return entries;
    }
    extract_cventry_education(span)
}

fn extract_simple_education(span: &str) -> Vec<EducationEntry> {
    SIMPLE_EDU
        .captures_iter(span)
        .map(|caps| {
            let dates = caps[3].trim().to_string();
            let (start_date, end_date) = split_date_range(&dates);
            EducationEntry {
                degree: caps[1].trim().to_string(),
                institution: caps[2].trim().to_string(),
                start_date,
                end_date: end_date.unwrap_or_default(),
                ..Default::default()
            }
        })
        .collect()
}

fn extract_subheading_education(span: &str) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    let mut heading_ends = Vec::new();

    for caps in SUBHEADING.captures_iter(span) {
        if let Some(whole) = caps.get(0) {
            heading_ends.push(whole.end());
        }
        let dates = caps[4].trim().to_string();
        let (start_date, end_date) = split_date_range(&dates);
        let (degree, field) = split_degree_field(caps[3].trim());
        entries.push(EducationEntry {
            institution: caps[1].trim().to_string(),
            location: caps[2].trim().to_string(),
            degree,
            field,
            start_date,
            end_date: end_date.unwrap_or_else(|| dates.clone()),
            ..Default::default()
        });
    }
    if entries.is_empty() {
        return entries;
    }

    // GPA and achievement bullets attach to the nearest preceding entry.
    for caps in RESUME_ITEM.captures_iter(span) {
        let item = caps[1].trim();
        if item.is_empty() || item.starts_with("\\textbf") {
            continue;
        }
        let item_start = match caps.get(0) {
            Some(m) => m.start(),
            None => continue,
        };
        let Some(entry) = owning_entry(&heading_ends, item_start).and_then(|i| entries.get_mut(i))
        else {
            continue;
        };
        match item.strip_prefix("GPA:") {
            Some(gpa) => entry.gpa = gpa.trim().to_string(),
            None => entry.achievements.push(item.to_string()),
        }
    }

    entries
}

/// A degree written as "X in Y" carries its field of study inline; split it so
/// the two render back independently.
fn split_degree_field(raw: &str) -> (String, String) {
    match DEGREE_FIELD.captures(raw) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
        None => (raw.to_string(), String::new()),
    }
}

fn extract_cventry_education(span: &str) -> Vec<EducationEntry> {
    CVENTRY
        .captures_iter(span)
        .map(|caps| {
            let dates = caps[1].trim().to_string();
            let (start_date, end_date) = split_date_range(&dates);
            EducationEntry {
                degree: caps[2].trim().to_string(),
                institution: caps[3].trim().to_string(),
                location: caps[4].trim().to_string(),
                field: caps[5].trim().to_string(),
                start_date,
                end_date: end_date.unwrap_or_default(),
                ..Default::default()
            }
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

fn extract_projects(span: &str) -> Vec<ProjectEntry> {
    let projects = extract_simple_projects(span);
    if !projects.is_empty() {
        return projects;
    }
    let projects = extract_macro_projects(span, &PROJECT_HEADING);
    if !projects.is_empty() {
        return projects;
    }
    extract_macro_projects(span, &PROJECT_MACRO)
}

fn extract_simple_projects(span: &str) -> Vec<ProjectEntry> {
    SIMPLE_PROJECT
        .captures_iter(span)
        .map(|caps| {
            let highlights = itemize_bullets(&caps[3]);
            let technologies = caps
                .get(4)
                .map(|m| split_commas(m.as_str()))
                .unwrap_or_default();
            ProjectEntry {
                name: caps[1].trim().to_string(),
                description: highlights.first().cloned().unwrap_or_default(),
                highlights,
                technologies,
                ..Default::default()
            }
        })
        .collect()
}

/// Heading-macro projects (`\resumeProjectHeading{\textbf{name}...}{link}` or
/// `\project{name}{link}`): the entry body runs from the end of one heading
/// match to the start of the next.
fn extract_macro_projects(span: &str, heading: &Regex) -> Vec<ProjectEntry> {
    let matches: Vec<_> = heading.captures_iter(span).collect();
    let mut projects = Vec::new();

    for (i, caps) in matches.iter().enumerate() {
        let body_start = match caps.get(0) {
            Some(m) => m.end(),
            None => continue,
        };
        let body_end = matches
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(span.len());
        let body = &span[body_start..body_end];

        let highlights: Vec<String> = RESUME_ITEM
            .captures_iter(body)
            .map(|item| item[1].trim().to_string())
            .filter(|s| !s.is_empty() && !s.starts_with("\\textbf"))
            .collect();
        let technologies = TECH_ITEM
            .captures(body)
            .map(|item| split_commas(&item[1]))
            .unwrap_or_default();

        projects.push(ProjectEntry {
            name: caps[1].trim().to_string(),
            link: clean_link(&caps[2]),
            description: highlights.first().cloned().unwrap_or_default(),
            highlights,
            technologies,
            ..Default::default()
        });
    }

    projects
}

/// The captured link cell may be a raw URL or the head of an `\href{...}`
/// invocation whose closing brace fell outside the capture.
fn clean_link(raw: &str) -> String {
    let raw = raw.trim();
    raw.strip_prefix("\\href{")
        .unwrap_or(raw)
        .trim_end_matches('}')
        .to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

fn extract_skills(span: &str) -> Skills {
    let mut skills = Skills::default();

    // Chain 1: itemized "bold label: comma-separated values".
    for caps in SKILL_ITEM_CATEGORY.captures_iter(span) {
        let label = caps[1].trim().to_lowercase();
        let values = split_commas(&caps[2]);
        bucket_for_label(&mut skills, &label).extend(values);
    }
    if !skills_are_empty(&skills) {
        return skills;
    }

    // Chain 2: standalone bold category labels.
    if let Some(caps) = SKILL_LANGUAGES.captures(span) {
        skills.technical = split_commas_semicolons(&caps[1]);
    }
    if let Some(caps) = SKILL_FRAMEWORKS.captures(span) {
        skills.frameworks = split_commas_semicolons(&caps[1]);
    }
    if let Some(caps) = SKILL_TOOLS.captures(span) {
        skills.tools = split_commas_semicolons(&caps[1]);
    }
    if !skills_are_empty(&skills) {
        return skills;
    }

    // Chain 3: catch-all — strip all markup and treat the section as one
    // unclassified comma/semicolon-separated dump.
    let cleaned = TEXTBF_CMD.replace_all(span, "");
    let cleaned = LATEX_CMD.replace_all(&cleaned, "");
    let cleaned = cleaned
        .replace('{', "")
        .replace('}', "")
        .replace(':', ",");
    skills.technical = cleaned
        .split(|c| c == ',' || c == ';')
        .map(str::trim)
        .filter(|s| s.len() > 1)
        .map(str::to_string)
        .collect();

    skills
}

/// Keyword → bucket mapping for labeled skill categories. The mapping is a
/// product decision carried over as-is.
fn bucket_for_label<'a>(skills: &'a mut Skills, label: &str) -> &'a mut Vec<String> {
    if label.contains("language") {
        &mut skills.technical
    } else if label.contains("framework") {
        &mut skills.frameworks
    } else if label.contains("tool") || label.contains("cloud") || label.contains("machine learning")
    {
        &mut skills.tools
    } else {
        &mut skills.technical
    }
}

fn skills_are_empty(skills: &Skills) -> bool {
    skills.technical.is_empty() && skills.frameworks.is_empty() && skills.tools.is_empty()
}
