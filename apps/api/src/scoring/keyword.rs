//! Keyword coverage scoring. Pure and deterministic.
//!
//! Algorithm:
//! 1. Lowercase the resume text once.
//! 2. For each keyword, in list order: present iff its lowercase form occurs
//!    anywhere in the text as a contiguous substring. No tokenization, so
//!    phrases like "machine learning" match literally and "api" also matches
//!    inside "rapid".
//! 3. score = round(matched / total × 100)

use serde::Serialize;

/// Outcome of scoring one resume against one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: u32, // 0 – 100
    /// Keywords that were not found, in the role's original order.
    pub missing_keywords: Vec<String>,
}

pub fn score_resume(keywords: &[String], resume_text: &str) -> ScoreResult {
    if keywords.is_empty() {
        return ScoreResult {
            score: 0,
            missing_keywords: vec![],
        };
    }

    let normalized = resume_text.to_lowercase();

    let mut matched = 0_usize;
    let mut missing_keywords = Vec::new();

    for keyword in keywords {
        if normalized.contains(&keyword.to_lowercase()) {
            matched += 1;
        } else {
            missing_keywords.push(keyword.clone());
        }
    }

    let score = ((matched as f64 / keywords.len() as f64) * 100.0).round() as u32;

    ScoreResult {
        score,
        missing_keywords,
    }
}
