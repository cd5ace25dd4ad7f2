//! Structured resume → LaTeX rendering.
//!
//! Output is a single fixed template: one document class, one preamble, one
//! set of helper macros, sections emitted in a fixed order. The function is
//! total and deterministic — any `Resume` record renders, and equal records
//! render to identical text. Styling knobs (the record's `template` field)
//! are deliberately ignored here.

use crate::latex::escape::escape_latex;
use crate::models::resume::Resume;

// Everything up to \begin{document}: page geometry, section formatting and
// the \resume* helper macros the body relies on.
const PREAMBLE: &[&str] = &[
    r"\documentclass[letterpaper,11pt]{article}",
    "",
    r"\usepackage{latexsym}",
    r"\usepackage[empty]{fullpage}",
    r"\usepackage{titlesec}",
    r"\usepackage{marvosym}",
    r"\usepackage[usenames,dvipsnames]{color}",
    r"\usepackage{verbatim}",
    r"\usepackage{enumitem}",
    r"\usepackage[hidelinks]{hyperref}",
    r"\usepackage{fancyhdr}",
    r"\usepackage[english]{babel}",
    r"\usepackage{tabularx}",
    "",
    r"\pagestyle{fancy}",
    r"\fancyhf{}",
    r"\fancyfoot{}",
    r"\renewcommand{\headrulewidth}{0pt}",
    r"\renewcommand{\footrulewidth}{0pt}",
    "",
    r"\addtolength{\oddsidemargin}{-0.5in}",
    r"\addtolength{\evensidemargin}{-0.5in}",
    r"\addtolength{\textwidth}{1in}",
    r"\addtolength{\topmargin}{-.5in}",
    r"\addtolength{\textheight}{1.0in}",
    "",
    r"\urlstyle{same}",
    "",
    r"\raggedbottom",
    r"\raggedright",
    r"\setlength{\tabcolsep}{0in}",
    "",
    "% Sections formatting",
    r"\titleformat{\section}{",
    r"  \vspace{-4pt}\scshape\raggedright\large",
    r"}{}{0em}{}[\color{black}\titlerule \vspace{-5pt}]",
    "",
    "% Custom commands",
    r"\newcommand{\resumeItem}[1]{",
    r"  \item\small{",
    r"    {#1 \vspace{-2pt}}",
    r"  }",
    r"}",
    "",
    r"\newcommand{\resumeSubheading}[4]{",
    r"  \vspace{-2pt}\item",
    r"    \begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}",
    r"      \textbf{#1} & #2 \\",
    r"      \textit{\small#3} & \textit{\small #4} \\",
    r"    \end{tabular*}\vspace{-7pt}",
    r"}",
    "",
    r"\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=0.15in, label={}]}",
    r"\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}",
    r"\newcommand{\resumeItemListStart}{\begin{itemize}}",
    r"\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}",
    r"\newcommand{\resumeProjectHeading}[2]{",
    r"    \item",
    r"    \begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}",
    r"      \small#1 & #2 \\",
    r"    \end{tabular*}\vspace{-7pt}",
    r"}",
    "",
];

/// Renders a resume record to a complete, compilable LaTeX document.
///
/// User-supplied prose fields are escaped; URLs and date strings are emitted
/// verbatim (they are macro arguments, not prose). Empty sections are omitted
/// entirely, so an all-default record still renders a valid document with
/// just the header.
pub fn resume_to_latex(resume: &Resume) -> String {
    let mut latex: Vec<String> = PREAMBLE.iter().map(|s| s.to_string()).collect();

    latex.push(r"\begin{document}".to_string());
    latex.push(String::new());

    push_header(&mut latex, resume);
    push_summary(&mut latex, resume);
    push_education(&mut latex, resume);
    push_experience(&mut latex, resume);
    push_projects(&mut latex, resume);
    push_skills(&mut latex, resume);
    push_certifications(&mut latex, resume);
    push_achievements(&mut latex, resume);

    latex.push(r"\end{document}".to_string());
    latex.join("\n")
}

fn push_header(latex: &mut Vec<String>, resume: &Resume) {
    let info = &resume.personal_info;

    latex.push(r"\begin{center}".to_string());
    latex.push(format!(
        "    \\textbf{{\\Huge \\scshape {}}} \\\\ \\vspace{{1pt}}",
        escape_latex(&info.full_name)
    ));

    let mut contact = Vec::new();
    if !info.phone.is_empty() {
        contact.push(escape_latex(&info.phone));
    }
    if !info.email.is_empty() {
        contact.push(format!(
            "\\href{{mailto:{}}}{{{}}}",
            info.email,
            escape_latex(&info.email)
        ));
    }
    if !info.linkedin.is_empty() {
        contact.push(format!("\\href{{{}}}{{LinkedIn}}", info.linkedin));
    }
    if !info.github.is_empty() {
        contact.push(format!("\\href{{{}}}{{GitHub}}", info.github));
    }
    if !info.portfolio.is_empty() {
        contact.push(format!("\\href{{{}}}{{Portfolio}}", info.portfolio));
    }
    if !contact.is_empty() {
        latex.push(format!("    \\small {}", contact.join(" $|$ ")));
    }
    latex.push(r"\end{center}".to_string());
    latex.push(String::new());
}

fn push_summary(latex: &mut Vec<String>, resume: &Resume) {
    let summary = &resume.personal_info.summary;
    if summary.is_empty() {
        return;
    }
    latex.push(r"\section{Summary}".to_string());
    latex.push(escape_latex(summary));
    latex.push(String::new());
}

fn push_education(latex: &mut Vec<String>, resume: &Resume) {
    if resume.education.is_empty() {
        return;
    }
    latex.push(r"\section{Education}".to_string());
    latex.push(r"  \resumeSubHeadingListStart".to_string());

    for edu in &resume.education {
        latex.push(r"    \resumeSubheading".to_string());
        latex.push(format!(
            "      {{{}}}{{{}}}",
            escape_latex(&edu.institution),
            escape_latex(&edu.location)
        ));
        let degree = if edu.field.is_empty() {
            escape_latex(&edu.degree)
        } else {
            format!("{} in {}", escape_latex(&edu.degree), escape_latex(&edu.field))
        };
        latex.push(format!(
            "      {{{}}}{{{} -- {}}}",
            degree, edu.start_date, edu.end_date
        ));
        if !edu.gpa.is_empty() {
            latex.push(format!("      \\resumeItem{{GPA: {}}}", edu.gpa));
        }
        for achievement in &edu.achievements {
            latex.push(format!("      \\resumeItem{{{}}}", escape_latex(achievement)));
        }
    }

    latex.push(r"  \resumeSubHeadingListEnd".to_string());
    latex.push(String::new());
}

fn push_experience(latex: &mut Vec<String>, resume: &Resume) {
    if resume.experience.is_empty() {
        return;
    }
    latex.push(r"\section{Experience}".to_string());
    latex.push(r"  \resumeSubHeadingListStart".to_string());

    for exp in &resume.experience {
        latex.push(r"    \resumeSubheading".to_string());
        latex.push(format!(
            "      {{{}}}{{{}}}",
            escape_latex(&exp.company),
            escape_latex(&exp.location)
        ));
        let end = if exp.current { "Present" } else { &exp.end_date };
        latex.push(format!(
            "      {{{}}}{{{} -- {}}}",
            escape_latex(&exp.position),
            exp.start_date,
            end
        ));
        latex.push(r"      \resumeItemListStart".to_string());
        for desc in &exp.description {
            if !desc.trim().is_empty() {
                latex.push(format!("        \\resumeItem{{{}}}", escape_latex(desc)));
            }
        }
        latex.push(r"      \resumeItemListEnd".to_string());
        if !exp.technologies.is_empty() {
            latex.push(format!(
                "      \\resumeItem{{\\textbf{{Technologies:}} {}}}",
                join_escaped(&exp.technologies)
            ));
        }
    }

    latex.push(r"  \resumeSubHeadingListEnd".to_string());
    latex.push(String::new());
}

fn push_projects(latex: &mut Vec<String>, resume: &Resume) {
    if resume.projects.is_empty() {
        return;
    }
    latex.push(r"\section{Projects}".to_string());
    latex.push(r"  \resumeSubHeadingListStart".to_string());

    for proj in &resume.projects {
        let link_cell = if proj.link.is_empty() {
            "{}".to_string()
        } else {
            format!("{{\\href{{{}}}{{Link}}}}", proj.link)
        };
        latex.push(format!(
            "    \\resumeProjectHeading{{\\textbf{{{}}}}}{}",
            escape_latex(&proj.name),
            link_cell
        ));
        latex.push(r"      \resumeItemListStart".to_string());

        // The description doubles as the first highlight when both are set
        // from the same source; emitting it twice would duplicate the bullet.
        let description_is_first_highlight =
            proj.highlights.first().map(String::as_str) == Some(proj.description.as_str());
        if !proj.description.is_empty() && !description_is_first_highlight {
            latex.push(format!(
                "        \\resumeItem{{{}}}",
                escape_latex(&proj.description)
            ));
        }
        for highlight in &proj.highlights {
            if !highlight.trim().is_empty() {
                latex.push(format!("        \\resumeItem{{{}}}", escape_latex(highlight)));
            }
        }
        if !proj.technologies.is_empty() {
            latex.push(format!(
                "        \\resumeItem{{\\textbf{{Technologies:}} {}}}",
                join_escaped(&proj.technologies)
            ));
        }
        latex.push(r"      \resumeItemListEnd".to_string());
    }

    latex.push(r"  \resumeSubHeadingListEnd".to_string());
    latex.push(String::new());
}

fn push_skills(latex: &mut Vec<String>, resume: &Resume) {
    let skills = &resume.skills;
    if skills.technical.is_empty() && skills.frameworks.is_empty() && skills.tools.is_empty() {
        return;
    }
    latex.push(r"\section{Technical Skills}".to_string());
    latex.push(r" \begin{itemize}[leftmargin=0.15in, label={}]".to_string());
    latex.push(r"    \small{\item{".to_string());

    let mut lines = Vec::new();
    if !skills.technical.is_empty() {
        lines.push(format!("\\textbf{{Languages}}{{: {}}}", join_escaped(&skills.technical)));
    }
    if !skills.frameworks.is_empty() {
        lines.push(format!("\\textbf{{Frameworks}}{{: {}}}", join_escaped(&skills.frameworks)));
    }
    if !skills.tools.is_empty() {
        lines.push(format!("\\textbf{{Tools}}{{: {}}}", join_escaped(&skills.tools)));
    }
    latex.push(format!("     {}", lines.join(" \\\\\\\\ ")));

    latex.push(r"    }}".to_string());
    latex.push(r" \end{itemize}".to_string());
    latex.push(String::new());
}

fn push_certifications(latex: &mut Vec<String>, resume: &Resume) {
    if resume.certifications.is_empty() {
        return;
    }
    latex.push(r"\section{Certifications}".to_string());
    latex.push(r" \begin{itemize}[leftmargin=0.15in, label={}]".to_string());
    for cert in &resume.certifications {
        let issuer = if cert.issuer.is_empty() {
            String::new()
        } else {
            format!("- {}", escape_latex(&cert.issuer))
        };
        let date = if cert.date.is_empty() {
            String::new()
        } else {
            format!("({})", cert.date)
        };
        latex.push(format!(
            "    \\item \\textbf{{{}}} {} {}",
            escape_latex(&cert.name),
            issuer,
            date
        ));
    }
    latex.push(r" \end{itemize}".to_string());
    latex.push(String::new());
}

fn push_achievements(latex: &mut Vec<String>, resume: &Resume) {
    if resume.achievements.is_empty() {
        return;
    }
    latex.push(r"\section{Achievements}".to_string());
    latex.push(r" \begin{itemize}[leftmargin=0.15in, label={}]".to_string());
    for achievement in &resume.achievements {
        latex.push(format!("    \\item {}", escape_latex(achievement)));
    }
    latex.push(r" \end{itemize}".to_string());
    latex.push(String::new());
}

fn join_escaped(values: &[String]) -> String {
    values
        .iter()
        .map(|v| escape_latex(v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        Certification, EducationEntry, ExperienceEntry, ProjectEntry,
    };

    fn sample_resume() -> Resume {
        let mut resume = Resume::default();
        resume.personal_info.full_name = "Jane Doe".to_string();
        resume.personal_info.email = "jane@example.com".to_string();
        resume.personal_info.phone = "555-000-1111".to_string();
        resume.personal_info.linkedin = "https://linkedin.com/in/jane".to_string();
        resume.personal_info.summary = "Backend engineer.".to_string();
        resume.experience.push(ExperienceEntry {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            location: "NYC".to_string(),
            start_date: "2020".to_string(),
            end_date: "2022".to_string(),
            description: vec!["Built the billing pipeline".to_string()],
            technologies: vec!["Rust".to_string(), "Postgres".to_string()],
            ..Default::default()
        });
        resume.education.push(EducationEntry {
            institution: "State University".to_string(),
            degree: "B.S.".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2014".to_string(),
            end_date: "2018".to_string(),
            gpa: "3.9".to_string(),
            ..Default::default()
        });
        resume.skills.technical = vec!["Rust".to_string(), "Go".to_string()];
        resume
    }

    #[test]
    fn test_renders_complete_document() {
        let out = resume_to_latex(&sample_resume());
        assert!(out.starts_with(r"\documentclass[letterpaper,11pt]{article}"));
        assert!(out.ends_with(r"\end{document}"));
        assert!(out.contains(r"\textbf{\Huge \scshape Jane Doe} \\ \vspace{1pt}"));
        assert!(out.contains(r"\section{Summary}"));
        assert!(out.contains("Backend engineer."));
        assert!(out.contains("{B.S. in Computer Science}{2014 -- 2018}"));
        assert!(out.contains(r"\resumeItem{GPA: 3.9}"));
        assert!(out.contains("{Engineer}{2020 -- 2022}"));
        assert!(out.contains(r"\resumeItem{Built the billing pipeline}"));
        assert!(out.contains(r"\resumeItem{\textbf{Technologies:} Rust, Postgres}"));
        assert!(out.contains(r"\textbf{Languages}{: Rust, Go}"));
    }

    #[test]
    fn test_contact_line_joined_with_pipe_separator() {
        let out = resume_to_latex(&sample_resume());
        assert!(out.contains(
            r"\small 555-000-1111 $|$ \href{mailto:jane@example.com}{jane@example.com} $|$ \href{https://linkedin.com/in/jane}{LinkedIn}"
        ));
    }

    #[test]
    fn test_empty_record_omits_all_sections() {
        let out = resume_to_latex(&Resume::default());
        assert!(out.contains(r"\begin{document}"));
        assert!(out.ends_with(r"\end{document}"));
        assert!(!out.contains(r"\section{Summary}"));
        assert!(!out.contains(r"\section{Education}"));
        assert!(!out.contains(r"\section{Experience}"));
        assert!(!out.contains(r"\section{Projects}"));
        assert!(!out.contains(r"\section{Technical Skills}"));
        assert!(!out.contains(r"\section{Certifications}"));
        assert!(!out.contains(r"\section{Achievements}"));
    }

    #[test]
    fn test_current_position_renders_present() {
        let mut resume = Resume::default();
        resume.experience.push(ExperienceEntry {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2021".to_string(),
            end_date: "2023".to_string(),
            current: true,
            ..Default::default()
        });
        let out = resume_to_latex(&resume);
        // `current` overrides whatever end date is stored.
        assert!(out.contains("{Engineer}{2021 -- Present}"));
        assert!(!out.contains("2023"));
    }

    #[test]
    fn test_project_description_not_duplicated_as_highlight() {
        let mut resume = Resume::default();
        resume.projects.push(ProjectEntry {
            name: "Chess Engine".to_string(),
            description: "Alpha-beta search".to_string(),
            highlights: vec!["Alpha-beta search".to_string(), "Opening book".to_string()],
            ..Default::default()
        });
        let out = resume_to_latex(&resume);
        assert_eq!(out.matches(r"\resumeItem{Alpha-beta search}").count(), 1);
        assert!(out.contains(r"\resumeItem{Opening book}"));
    }

    #[test]
    fn test_project_without_link_gets_empty_cell() {
        let mut resume = Resume::default();
        resume.projects.push(ProjectEntry {
            name: "Ray Tracer".to_string(),
            ..Default::default()
        });
        let out = resume_to_latex(&resume);
        assert!(out.contains(r"\resumeProjectHeading{\textbf{Ray Tracer}}{}"));
    }

    #[test]
    fn test_prose_is_escaped_but_urls_are_not() {
        let mut resume = Resume::default();
        resume.personal_info.full_name = "J&J".to_string();
        resume.personal_info.github = "https://github.com/j_j".to_string();
        resume.achievements.push("Top 1% finish".to_string());
        let out = resume_to_latex(&resume);
        assert!(out.contains(r"\scshape J\&J"));
        assert!(out.contains(r"\href{https://github.com/j_j}{GitHub}"));
        assert!(out.contains(r"\item Top 1\% finish"));
    }

    #[test]
    fn test_certification_line_layout() {
        let mut resume = Resume::default();
        resume.certifications.push(Certification {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            date: "2023".to_string(),
            ..Default::default()
        });
        let out = resume_to_latex(&resume);
        assert!(out.contains(r"\item \textbf{CKA} - CNCF (2023)"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let resume = sample_resume();
        assert_eq!(resume_to_latex(&resume), resume_to_latex(&resume));
    }
}
