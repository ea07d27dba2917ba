//! Resume sectionizer — splits raw resume text into summary / skills / experience / education.
//!
//! A line-by-line state machine. The cursor is `None` until the first heading; each heading line
//! moves the cursor and is never itself content.

use serde::{Deserialize, Serialize};

/// Resume sections recognised by heading detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Summary,
    Skills,
    Experience,
    Education,
}

/// Heading patterns in precedence order. The first group with a substring hit wins.
const HEADING_PATTERNS: &[(Section, &[&str])] = &[
    (Section::Summary, &["summary", "profile", "objective", "overview"]),
    (Section::Skills, &["skills", "technical skills", "competencies"]),
    (
        Section::Experience,
        &[
            "experience",
            "work history",
            "employment",
            "professional experience",
        ],
    ),
    (Section::Education, &["education", "academic", "qualifications"]),
];

/// Accumulated section text. Absent sections are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSections {
    pub summary: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
}

impl ResumeSections {
    fn get_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Summary => &mut self.summary,
            Section::Skills => &mut self.skills,
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
        }
    }
}

/// Returns the section a heading line opens, if any.
pub fn classify_heading(line: &str) -> Option<Section> {
    let normalized = line.trim().to_lowercase();
    HEADING_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| normalized.contains(p)))
        .map(|(section, _)| *section)
}

/// Splits resume text into sections.
///
/// Transition per line:
/// - heading → cursor moves, line dropped
/// - blank, or no cursor yet → line dropped
/// - otherwise → line plus `\n` appended to the cursor's section
pub fn extract_resume_sections(resume_text: &str) -> ResumeSections {
    let mut sections = ResumeSections::default();
    let mut cursor: Option<Section> = None;

    for line in resume_text.split('\n') {
        if let Some(heading) = classify_heading(line) {
            cursor = Some(heading);
            continue;
        }
        match cursor {
            Some(section) if !line.trim().is_empty() => {
                let body = sections.get_mut(section);
                body.push_str(line);
                body.push('\n');
            }
            _ => {}
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    impl ResumeSections {
        fn get(&self, section: Section) -> &str {
            match section {
                Section::Summary => &self.summary,
                Section::Skills => &self.skills,
                Section::Experience => &self.experience,
                Section::Education => &self.education,
            }
        }
    }

    const RESUME: &str = "Jane Doe\njane@example.com\n\nSummary\nBuilt scalable APIs.\n\nSkills\nPython, Azure\nExperience\nEngineer at X\nShipped things\nEducation\nBS CS 2010";

    #[test]
    fn test_sections_extracted_in_order() {
        let s = extract_resume_sections(RESUME);
        assert_eq!(s.summary, "Built scalable APIs.\n");
        assert_eq!(s.skills, "Python, Azure\n");
        assert_eq!(s.experience, "Engineer at X\nShipped things\n");
        assert_eq!(s.education, "BS CS 2010\n");
    }

    #[test]
    fn test_leading_text_before_first_heading_dropped() {
        let s = extract_resume_sections(RESUME);
        for section in [
            Section::Summary,
            Section::Skills,
            Section::Experience,
            Section::Education,
        ] {
            assert!(!s.get(section).contains("Jane Doe"));
        }
    }

    #[test]
    fn test_no_headings_yields_empty_sections() {
        let s = extract_resume_sections("Just some text\nwith no headings");
        assert_eq!(s, ResumeSections::default());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_resume_sections(""), ResumeSections::default());
    }

    #[test]
    fn test_heading_matches_anywhere_in_line() {
        assert_eq!(
            classify_heading("  PROFESSIONAL EXPERIENCE  "),
            Some(Section::Experience)
        );
        assert_eq!(classify_heading("My Technical Skills:"), Some(Section::Skills));
        assert_eq!(classify_heading("Academic background"), Some(Section::Education));
    }

    #[test]
    fn test_summary_group_has_precedence() {
        // Matches both the summary and experience groups.
        assert_eq!(
            classify_heading("Experience overview"),
            Some(Section::Summary)
        );
    }

    #[test]
    fn test_heading_line_is_not_content() {
        let s = extract_resume_sections("Skills\nRust\nLeadership skills\nGo");
        // The second line containing "skills" re-triggers the heading and is dropped.
        assert_eq!(s.skills, "Rust\nGo\n");
    }

    #[test]
    fn test_consecutive_headings_last_wins() {
        let s = extract_resume_sections("Summary\nEducation\nMIT");
        assert_eq!(s.summary, "");
        assert_eq!(s.education, "MIT\n");
    }

    #[test]
    fn test_content_lines_keep_original_indentation() {
        let s = extract_resume_sections("Experience\n  - Built X  ");
        assert_eq!(s.experience, "  - Built X  \n");
    }

    #[test]
    fn test_repeated_heading_appends() {
        let s = extract_resume_sections("Skills\nRust\nEducation\nMIT\nSkills\nGo");
        assert_eq!(s.skills, "Rust\nGo\n");
    }
}
