//! JD signal extraction — keywords, seniority, and tone flags derived from raw job-description text.
//!
//! Pure functions of the input text. No LLM, no state, no failure modes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Curated technology/process terms that are kept regardless of length.
/// Multi-word entries never equal a single token; they are kept for parity with the published list.
const TECH_TERMS: &[&str] = &[
    "azure",
    "aws",
    "gcp",
    "terraform",
    "kubernetes",
    "docker",
    "python",
    "java",
    "javascript",
    "typescript",
    "react",
    "node",
    "sql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "ci/cd",
    "jenkins",
    "gitlab",
    "github",
    "agile",
    "scrum",
    "microservices",
    "api",
    "rest",
    "graphql",
    "grpc",
    "linux",
    "bash",
    "shell",
    "ansible",
    "puppet",
    "chef",
    "bgp",
    "ospf",
    "networking",
    "security",
    "firewall",
    "ml",
    "machine learning",
    "ai",
    "data science",
    "analytics",
];

const SENIOR_TERMS: &[&str] = &[
    "senior",
    "sr.",
    "lead",
    "principal",
    "architect",
    "staff",
    "expert",
];
const MID_TERMS: &[&str] = &["mid-level", "mid level", "intermediate", "experienced"];
const JUNIOR_TERMS: &[&str] = &["junior", "jr.", "entry", "associate", "intern"];

const HANDS_ON_TERMS: &[&str] = &[
    "hands-on",
    "hands on",
    "hands-on experience",
    "coding",
    "development",
    "implement",
    "build",
    "develop",
    "write code",
    "programming",
];

const FAST_PACED_TERMS: &[&str] = &[
    "fast-paced",
    "fast paced",
    "fast-moving",
    "dynamic",
    "startup",
    "rapid growth",
    "high growth",
    "move fast",
];

/// Size of the most-frequent candidate pool, and the number of terms returned.
const CANDIDATE_POOL: usize = 100;
pub const MAX_TOP_TERMS: usize = 20;

/// Non-curated tokens must be longer than this to count as keywords.
const MIN_GENERIC_TERM_LEN: usize = 4;

/// Seniority level targeted by a job description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Senior,
    Mid,
    Junior,
    #[default]
    Unspecified,
}

impl Seniority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Senior => "senior",
            Seniority::Mid => "mid",
            Seniority::Junior => "junior",
            Seniority::Unspecified => "unspecified",
        }
    }
}

/// Tone flags. Each is detected independently of the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneSignals {
    pub hands_on: bool,
    pub fast_paced: bool,
}

/// Structured signals extracted from one job description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JdSignals {
    /// Unique, most-frequent first, at most 20 entries.
    pub top_terms: Vec<String>,
    pub seniority: Seniority,
    pub signals: ToneSignals,
}

/// Extracts keywords, seniority and tone flags from a raw job description.
pub fn extract_jd_signals(text: &str) -> JdSignals {
    let signals = JdSignals {
        top_terms: extract_keywords(text),
        seniority: detect_seniority(text),
        signals: ToneSignals {
            hands_on: detect_hands_on(text),
            fast_paced: detect_fast_paced(text),
        },
    };

    tracing::debug!(
        terms = signals.top_terms.len(),
        seniority = signals.seniority.as_str(),
        hands_on = signals.signals.hands_on,
        fast_paced = signals.signals.fast_paced,
        "Extracted JD signals"
    );

    signals
}

/// Returns up to 20 keywords, most frequent first.
///
/// Algorithm:
/// 1. Lower-case, split into runs of `a`–`z`; everything else separates tokens.
/// 2. Count tokens; order by count descending, ties by first occurrence.
/// 3. From the 100 most frequent, keep curated tech terms and tokens longer than 4 chars.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    // (token, count) in first-seen order; the index map points into it.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in tokenize(&lowered) {
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    // Stable sort keeps first-seen order within equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(CANDIDATE_POOL)
        .map(|(token, _)| token)
        .filter(|token| TECH_TERMS.contains(token) || token.len() > MIN_GENERIC_TERM_LEN)
        .take(MAX_TOP_TERMS)
        .map(str::to_string)
        .collect()
}

/// Maximal runs of ASCII lower-case letters.
fn tokenize(lowered: &str) -> impl Iterator<Item = &str> {
    lowered
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|token| !token.is_empty())
}

/// Senior beats mid beats junior; no match is `Unspecified`.
pub fn detect_seniority(text: &str) -> Seniority {
    let text_lower = text.to_lowercase();

    if contains_any(&text_lower, SENIOR_TERMS) {
        Seniority::Senior
    } else if contains_any(&text_lower, MID_TERMS) {
        Seniority::Mid
    } else if contains_any(&text_lower, JUNIOR_TERMS) {
        Seniority::Junior
    } else {
        Seniority::Unspecified
    }
}

pub fn detect_hands_on(text: &str) -> bool {
    contains_any(&text.to_lowercase(), HANDS_ON_TERMS)
}

pub fn detect_fast_paced(text: &str) -> bool {
    contains_any(&text.to_lowercase(), FAST_PACED_TERMS)
}

/// Case-sensitive substring test; callers lower-case the haystack.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CLOUD_JD: &str = r#"
        Senior Cloud Engineer
        We need Azure and Terraform. Azure experience is required; Terraform modules,
        Azure networking, Kubernetes clusters. Python scripting for automation.
        Hands-on role in a fast-paced team.
    "#;

    #[test]
    fn test_empty_text_yields_neutral_signals() {
        let signals = extract_jd_signals("");
        assert!(signals.top_terms.is_empty());
        assert_eq!(signals.seniority, Seniority::Unspecified);
        assert!(!signals.signals.hands_on);
        assert!(!signals.signals.fast_paced);
    }

    #[test]
    fn test_keywords_ordered_by_frequency() {
        let terms = extract_keywords(CLOUD_JD);
        assert_eq!(terms[0], "azure", "azure appears most often: {terms:?}");
        assert_eq!(terms[1], "terraform");
    }

    #[test]
    fn test_keyword_ties_keep_first_seen_order() {
        let terms = extract_keywords("kafka spark kafka spark flink");
        assert_eq!(terms, vec!["kafka", "spark", "flink"]);
    }

    #[test]
    fn test_short_generic_tokens_dropped_but_tech_terms_kept() {
        let terms = extract_keywords("aws team sql role with data");
        assert_eq!(terms, vec!["aws", "sql"]);
    }

    #[test]
    fn test_digits_and_punctuation_split_tokens() {
        let terms = extract_keywords("python3kafka, docker/compose");
        assert_eq!(terms, vec!["python", "kafka", "docker", "compose"]);
    }

    #[test]
    fn test_keywords_are_case_folded() {
        let terms = extract_keywords("Python PYTHON python");
        assert_eq!(terms, vec!["python"]);
    }

    #[test]
    fn test_keywords_capped_at_twenty() {
        let text = (0..40)
            .map(|i| format!("keyword{}", "x".repeat(i + 1)))
            .collect::<Vec<_>>()
            .join(" ");
        let terms = extract_keywords(&text);
        assert_eq!(terms.len(), MAX_TOP_TERMS);
    }

    #[test]
    fn test_seniority_senior_takes_precedence_over_junior() {
        let text = "Senior or junior candidates welcome";
        assert_eq!(detect_seniority(text), Seniority::Senior);
    }

    #[test]
    fn test_seniority_mid() {
        assert_eq!(
            detect_seniority("Looking for a mid-level backend developer"),
            Seniority::Mid
        );
    }

    #[test]
    fn test_seniority_junior() {
        assert_eq!(detect_seniority("Junior developer role"), Seniority::Junior);
    }

    #[test]
    fn test_seniority_unspecified() {
        assert_eq!(detect_seniority("Backend developer"), Seniority::Unspecified);
    }

    #[test]
    fn test_seniority_matches_substrings() {
        // "leadership" contains "lead".
        assert_eq!(detect_seniority("Show leadership"), Seniority::Senior);
    }

    #[test]
    fn test_tone_flags_are_independent() {
        let signals = extract_jd_signals("Write code daily");
        assert!(signals.signals.hands_on);
        assert!(!signals.signals.fast_paced);

        let signals = extract_jd_signals("Join our startup");
        assert!(!signals.signals.hands_on);
        assert!(signals.signals.fast_paced);
    }

    #[test]
    fn test_signals_serialize_in_wire_shape() {
        let json = serde_json::to_value(extract_jd_signals(CLOUD_JD)).unwrap();
        assert_eq!(json["seniority"], "senior");
        assert_eq!(json["signals"]["hands_on"], true);
        assert_eq!(json["signals"]["fast_paced"], true);
        assert!(json["top_terms"].is_array());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        assert_eq!(extract_jd_signals(CLOUD_JD), extract_jd_signals(CLOUD_JD));
    }

    proptest! {
        #[test]
        fn prop_top_terms_bounded_and_unique(text in "[a-zA-Z0-9 ,.\n-]{0,400}") {
            let terms = extract_keywords(&text);
            prop_assert!(terms.len() <= MAX_TOP_TERMS);
            let mut sorted = terms.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), terms.len());
        }
    }
}
