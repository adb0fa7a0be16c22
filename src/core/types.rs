use serde::{Deserialize, Serialize};

/// One scan request as submitted by a caller. The `input` field name is
/// part of the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanRequest {
    pub input: String,
}

impl ScanRequest {
    pub fn new(input: impl Into<String>) -> Self {
        ScanRequest {
            input: input.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Safe,
    Dangerous,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Safe => "safe",
            Status::Dangerous => "dangerous",
        }
    }
}

/// Emotional-manipulation signal detected in the message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Urgency,
    Authority,
    None,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Urgency => "urgency",
            Emotion::Authority => "authority",
            Emotion::None => "none",
        }
    }
}

/// Brand-impersonation verdict. `pretending_to_be` and `similarity_score`
/// are present iff `is_fake` is true; the constructors keep that invariant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrandMatch {
    pub is_fake: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretending_to_be: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
}

impl BrandMatch {
    pub fn genuine() -> Self {
        BrandMatch {
            is_fake: false,
            pretending_to_be: None,
            similarity_score: None,
        }
    }

    pub fn impersonation(brand: impl Into<String>, similarity: f64) -> Self {
        BrandMatch {
            is_fake: true,
            pretending_to_be: Some(brand.into()),
            similarity_score: Some(similarity),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScamAssessment {
    pub status: Status,
    pub scam_type: String,
    pub emotion_detected: Emotion,
    pub urgency_score: u8,
    pub confidence: u8,
    pub explanation: String,
}

/// Final scan response: assessment fields flattened next to the message
/// echo, brand verdict and redirect chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub original_message: String,
    pub translated_message: String,
    pub brand_impersonation: BrandMatch,
    pub redirect_chain: Vec<String>,
    #[serde(flatten)]
    pub assessment: ScamAssessment,
}

impl ScanReport {
    /// Fixed low-confidence verdict returned when the pipeline itself
    /// failed; the scan never surfaces a raw error to the caller.
    pub fn inconclusive(input: &str) -> Self {
        ScanReport {
            original_message: input.to_string(),
            translated_message: input.to_string(),
            brand_impersonation: BrandMatch::genuine(),
            redirect_chain: Vec::new(),
            assessment: ScamAssessment {
                status: Status::Safe,
                scam_type: "Unknown".to_string(),
                emotion_detected: Emotion::None,
                urgency_score: 0,
                confidence: 40,
                explanation: "System error during scan.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_flat_camel_case() {
        let report = ScanReport {
            original_message: "hi".into(),
            translated_message: "hi".into(),
            brand_impersonation: BrandMatch::genuine(),
            redirect_chain: vec!["http://a.com".into()],
            assessment: ScamAssessment {
                status: Status::Safe,
                scam_type: "None".into(),
                emotion_detected: Emotion::None,
                urgency_score: 20,
                confidence: 30,
                explanation: "No major scam indicators detected.".into(),
            },
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["originalMessage"], "hi");
        assert_eq!(value["status"], "safe");
        assert_eq!(value["scamType"], "None");
        assert_eq!(value["emotionDetected"], "none");
        assert_eq!(value["urgencyScore"], 20);
        assert_eq!(value["redirectChain"][0], "http://a.com");
        // optional brand fields stay off the wire for a genuine verdict
        assert_eq!(value["brandImpersonation"]["isFake"], false);
        assert!(value["brandImpersonation"].get("pretendingToBe").is_none());
        assert!(value["brandImpersonation"].get("similarityScore").is_none());
    }

    #[test]
    fn impersonation_carries_brand_and_score() {
        let m = BrandMatch::impersonation("amazon", 1.0);
        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["isFake"], true);
        assert_eq!(value["pretendingToBe"], "amazon");
        assert_eq!(value["similarityScore"], 1.0);
    }

    #[test]
    fn inconclusive_matches_degradation_contract() {
        let report = ScanReport::inconclusive("whatever");
        assert_eq!(report.assessment.status, Status::Safe);
        assert_eq!(report.assessment.scam_type, "Unknown");
        assert_eq!(report.assessment.emotion_detected, Emotion::None);
        assert_eq!(report.assessment.urgency_score, 0);
        assert_eq!(report.assessment.confidence, 40);
        assert!(report.redirect_chain.is_empty());
        assert!(!report.brand_impersonation.is_fake);
    }

    #[test]
    fn request_deserializes_from_wire_shape() {
        let req: ScanRequest = serde_json::from_str(r#"{"input":"check this"}"#).unwrap();
        assert_eq!(req.input, "check this");
    }
}
