//! Variant compiler — reassembles a resume for a persona using only content already in it.
//!
//! CRITICAL: nothing here invents skills or experience. The persona focus sentence is the only
//! generated text; every other line is copied from the source resume, and matched skills are
//! always JD terms that already occur in the resume text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::sections::{extract_resume_sections, ResumeSections};
use crate::engine::signals::extract_jd_signals;

/// Width of the `=` rule printed under each block label.
const RULE_WIDTH: usize = 50;

/// Narrative framing for the summary block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Ic,
    Architect,
    Hybrid,
    #[default]
    Generic,
}

impl Persona {
    /// Permissive parse: exact lower-case names only; anything else becomes `Generic`.
    pub fn parse_lossy(value: &str) -> Persona {
        match value {
            "ic" => Persona::Ic,
            "architect" => Persona::Architect,
            "hybrid" => Persona::Hybrid,
            _ => Persona::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Ic => "ic",
            Persona::Architect => "architect",
            Persona::Hybrid => "hybrid",
            Persona::Generic => "generic",
        }
    }

    pub fn focus(&self) -> &'static str {
        match self {
            Persona::Ic => "hands-on technical implementation",
            Persona::Architect => "system design and technical leadership",
            Persona::Hybrid => "technical leadership with hands-on implementation",
            Persona::Generic => "technical expertise",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Persona {
    type Err = String;

    /// Strict parse for boundary validation. Case-insensitive; rejects `generic`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ic" => Ok(Persona::Ic),
            "architect" => Ok(Persona::Architect),
            "hybrid" => Ok(Persona::Hybrid),
            other => Err(format!(
                "Persona must be one of: ic, architect, hybrid (got '{other}')"
            )),
        }
    }
}

/// Compiles a persona-tuned resume variant.
///
/// Output blocks, in order, each with a label and rule:
/// - SUMMARY (always)
/// - SKILLS (matched JD terms, then the extracted skills section; only if either exists)
/// - EXPERIENCE (extracted section, or the whole resume when none was found)
/// - EDUCATION (only if extracted)
///
/// `platform` is accepted for parity with scoring but does not change the output.
pub fn compile_resume_variant(
    resume_text: &str,
    jd_text: &str,
    persona: &str,
    platform: &str,
) -> String {
    let jd_signals = extract_jd_signals(jd_text);
    let sections = extract_resume_sections(resume_text);
    let matching_skills = find_matching_skills(resume_text, &jd_signals.top_terms);
    let persona = Persona::parse_lossy(persona);

    tracing::debug!(
        persona = persona.as_str(),
        platform,
        matched = matching_skills.len(),
        "Compiling resume variant"
    );

    let summary = persona_summary(persona, &sections);
    let mut parts: Vec<&str> = Vec::new();
    let rule = "=".repeat(RULE_WIDTH);
    let joined_skills = matching_skills.join(", ");

    push_block(&mut parts, "SUMMARY", &rule);
    parts.push(&summary);
    parts.push("");

    if !sections.skills.is_empty() || !matching_skills.is_empty() {
        push_block(&mut parts, "SKILLS", &rule);
        if !matching_skills.is_empty() {
            parts.push(&joined_skills);
            parts.push("");
        }
        if !sections.skills.is_empty() {
            parts.push(&sections.skills);
        }
        parts.push("");
    }

    push_block(&mut parts, "EXPERIENCE", &rule);
    if sections.experience.is_empty() {
        // Nothing recognised as experience: keep everything rather than lose content.
        parts.push(resume_text);
    } else {
        parts.push(&sections.experience);
    }
    parts.push("");

    if !sections.education.is_empty() {
        push_block(&mut parts, "EDUCATION", &rule);
        parts.push(&sections.education);
        parts.push("");
    }

    parts.join("\n")
}

fn push_block<'a>(parts: &mut Vec<&'a str>, label: &'a str, rule: &'a str) {
    parts.push(label);
    parts.push(rule);
}

/// JD keywords present (case-insensitively) in the resume, in keyword order.
pub fn find_matching_skills(resume_text: &str, jd_keywords: &[String]) -> Vec<String> {
    let resume_lower = resume_text.to_lowercase();
    jd_keywords
        .iter()
        .filter(|keyword| resume_lower.contains(&keyword.to_lowercase()))
        .cloned()
        .collect()
}

/// Existing summary plus a focus sentence, or a synthesized one-liner when there is no summary.
pub fn persona_summary(persona: Persona, sections: &ResumeSections) -> String {
    let focus = persona.focus();
    let existing = sections.summary.trim();

    if existing.is_empty() {
        format!("Experienced professional specializing in {focus}.")
    } else {
        format!("{existing}\n\nSpecializing in {focus}.")
    }
}
