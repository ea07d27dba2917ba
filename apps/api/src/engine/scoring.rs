//! Survivability scoring — estimates how well a resume survives automated screening for a JD.
//!
//! Formula:
//! ```text
//! survivability = keyword × Wk + title × Wt + recency × Wr − age_risk × 0.1 − overqual_risk × 0.1
//! ```
//! clamped to [0, 1]. `W*` come from the platform profile. Every output field is rounded to
//! two decimals.

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::engine::platform::{profile_for, PlatformProfile};
use crate::engine::signals::{contains_any, extract_jd_signals, Seniority};

/// Role words that mark a line as a job title.
const ROLE_WORDS: &[&str] = &["engineer", "developer", "architect", "manager", "lead"];

/// Resume terms that flag a candidate as senior for overqualification.
const SENIOR_RESUME_TERMS: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "architect",
    "director",
    "vp",
    "cto",
];

const JD_TITLE_SCAN_LINES: usize = 10;
const RESUME_TITLE_SCAN_LINES: usize = 50;

/// Title scores.
const TITLE_NEUTRAL: f64 = 0.5;
const TITLE_STRONG: f64 = 0.8;
const TITLE_PARTIAL: f64 = 0.5;
const TITLE_WEAK: f64 = 0.3;

/// No date-based computation yet; every resume gets the same recency.
pub const RECENCY_PLACEHOLDER: f64 = 0.7;

/// Multiplier applied to each risk before subtracting it.
const RISK_PENALTY: f64 = 0.1;

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"\b(19[89]\d|20[0-2]\d)\b").unwrap();
}

/// Output score vector. All fields in [0, 1], rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub keyword_score: f64,
    pub title_score: f64,
    pub age_proxy_risk: f64,
    pub overqual_risk: f64,
    pub survivability: f64,
}

/// Unrounded inputs to the survivability formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreComponents {
    pub keyword_score: f64,
    pub title_score: f64,
    pub recency_score: f64,
    pub age_proxy_risk: f64,
    pub overqual_risk: f64,
}

/// Scores a resume against a JD using the given platform's weights.
///
/// Unknown platforms are scored with `indeed` weights.
pub fn calculate_survivability_score(
    resume_text: &str,
    jd_text: &str,
    platform: &str,
) -> ScoreVector {
    let jd_signals = extract_jd_signals(jd_text);

    let components = ScoreComponents {
        keyword_score: calculate_keyword_score(resume_text, &jd_signals.top_terms),
        title_score: calculate_title_score(resume_text, jd_text),
        recency_score: RECENCY_PLACEHOLDER,
        age_proxy_risk: calculate_age_proxy_risk(resume_text),
        overqual_risk: calculate_overqual_risk(resume_text, jd_signals.seniority),
    };

    let scores = combine_scores(&components, &profile_for(platform));

    tracing::debug!(
        platform,
        keyword = scores.keyword_score,
        title = scores.title_score,
        survivability = scores.survivability,
        "Calculated survivability score"
    );

    scores
}

/// Applies platform weights and risk penalties, clamps, and rounds.
pub fn combine_scores(c: &ScoreComponents, profile: &PlatformProfile) -> ScoreVector {
    let raw = c.keyword_score * profile.keyword_weight
        + c.title_score * profile.title_weight
        + c.recency_score * profile.recency_weight
        - c.age_proxy_risk * RISK_PENALTY
        - c.overqual_risk * RISK_PENALTY;

    ScoreVector {
        keyword_score: round2(c.keyword_score),
        title_score: round2(c.title_score),
        age_proxy_risk: round2(c.age_proxy_risk),
        overqual_risk: round2(c.overqual_risk),
        survivability: round2(raw.clamp(0.0, 1.0)),
    }
}

/// Fraction of JD keywords found anywhere in the resume. 0.0 when there are no keywords.
pub fn calculate_keyword_score(resume_text: &str, jd_keywords: &[String]) -> f64 {
    if jd_keywords.is_empty() {
        return 0.0;
    }

    let resume_lower = resume_text.to_lowercase();
    let matches = jd_keywords
        .iter()
        .filter(|keyword| resume_lower.contains(&keyword.to_lowercase()))
        .count();

    (matches as f64 / jd_keywords.len() as f64).min(1.0)
}

/// Compares the JD title against title-like lines near the top of the resume.
///
/// - no JD title in the first 10 lines → 0.5
/// - no title-like line in the first 50 resume lines → 0.3
/// - first candidate sharing ≥2 words → 0.8, exactly 1 word → 0.5 (whichever comes first)
/// - no candidate shares a word → 0.3
pub fn calculate_title_score(resume_text: &str, jd_text: &str) -> f64 {
    let Some(jd_title) = find_title_lines(jd_text, JD_TITLE_SCAN_LINES).next() else {
        return TITLE_NEUTRAL;
    };

    let resume_titles: Vec<&str> = find_title_lines(resume_text, RESUME_TITLE_SCAN_LINES).collect();
    if resume_titles.is_empty() {
        return TITLE_WEAK;
    }

    let jd_title_lower = jd_title.to_lowercase();
    let jd_words: Vec<&str> = unique_words(&jd_title_lower);

    for title in resume_titles {
        let title_lower = title.to_lowercase();
        let common = unique_words(&title_lower)
            .into_iter()
            .filter(|w| jd_words.contains(w))
            .count();

        if common >= 2 {
            return TITLE_STRONG;
        } else if common == 1 {
            return TITLE_PARTIAL;
        }
    }

    TITLE_WEAK
}

/// Trimmed lines among the first `limit` that contain a role word.
fn find_title_lines(text: &str, limit: usize) -> impl Iterator<Item = &str> {
    text.split('\n')
        .take(limit)
        .filter(|line| contains_any(&line.to_lowercase(), ROLE_WORDS))
        .map(str::trim)
}

fn unique_words(text: &str) -> Vec<&str> {
    let mut words: Vec<&str> = Vec::new();
    for word in text.split_whitespace() {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

/// Age-proxy risk from the oldest 1980–2029 year in the resume, using the current year.
pub fn calculate_age_proxy_risk(resume_text: &str) -> f64 {
    age_proxy_risk_for_year(resume_text, Utc::now().year())
}

/// Age-proxy risk relative to an explicit calendar year.
///
/// No years or oldest ≥ 2000 → 0.1; otherwise by age of the oldest year:
/// > 30 → 0.8, > 20 → 0.5, else 0.2.
pub fn age_proxy_risk_for_year(resume_text: &str, current_year: i32) -> f64 {
    let oldest = YEAR_RE
        .find_iter(resume_text)
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .min();

    let Some(oldest) = oldest else {
        return 0.1;
    };

    if oldest >= 2000 {
        return 0.1;
    }

    let age = current_year - oldest;
    if age > 30 {
        0.8
    } else if age > 20 {
        0.5
    } else {
        0.2
    }
}

/// Overqualification risk from resume seniority terms against the JD's seniority.
pub fn calculate_overqual_risk(resume_text: &str, jd_seniority: Seniority) -> f64 {
    let resume_is_senior = contains_any(&resume_text.to_lowercase(), SENIOR_RESUME_TERMS);

    match (resume_is_senior, jd_seniority) {
        (true, Seniority::Junior) => 0.7,
        (true, Seniority::Mid) => 0.3,
        // Underqualified rather than overqualified.
        (false, Seniority::Senior) => 0.2,
        _ => 0.1,
    }
}

/// Rounds on the exact decimal expansion, so 0.125 is 0.12 and 0.11499999999999999 is 0.11.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
