use crate::core::types::{Emotion, ScamAssessment, Status};

const KEYWORD_WEIGHT: u32 = 20;
const DANGEROUS_THRESHOLD: u32 = 40;
const MAX_CONFIDENCE: u32 = 95;
const BASE_CONFIDENCE: u32 = 30;
// Markers that drive the urgency signal independently of the risk tally.
const URGENCY_MARKERS: [&str; 2] = ["urgent", "immediately"];

/// Additive keyword scoring over the lowercased text. Each keyword
/// contributes its weight at most once, so the score is order-independent
/// and idempotent for a given input.
pub fn score_message(text: &str, keywords: &[String]) -> ScamAssessment {
    let lower = text.to_lowercase();
    let hits = keywords
        .iter()
        .filter(|keyword| lower.contains(keyword.as_str()))
        .count() as u32;
    let risk = hits * KEYWORD_WEIGHT;

    let status = if risk >= DANGEROUS_THRESHOLD {
        Status::Dangerous
    } else {
        Status::Safe
    };
    let urgent = URGENCY_MARKERS.iter().any(|marker| lower.contains(marker));

    ScamAssessment {
        status,
        scam_type: match status {
            Status::Dangerous => "Phishing / Scam".to_string(),
            Status::Safe => "None".to_string(),
        },
        emotion_detected: if urgent { Emotion::Urgency } else { Emotion::None },
        urgency_score: if urgent { 80 } else { 20 },
        confidence: risk.saturating_add(BASE_CONFIDENCE).min(MAX_CONFIDENCE) as u8,
        explanation: match status {
            Status::Dangerous => "Message contains strong scam-related indicators.".to_string(),
            Status::Safe => "No major scam indicators detected.".to_string(),
        },
    }
}
