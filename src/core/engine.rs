use std::time::Duration;

use regex::Regex;

use crate::config::AppConfig;
use crate::core::error::ScanError;
use crate::core::types::{BrandMatch, Emotion, ScamAssessment, ScanReport, ScanRequest, Status};
use crate::pipeline::brand::detect_impersonation;
use crate::pipeline::domain::{extract_domain, DOMAIN_PATTERN};
use crate::pipeline::normalizer::translate_to_english;
use crate::pipeline::redirects::{ensure_scheme, trace_redirects};
use crate::pipeline::scorer::score_message;

/// Scan orchestrator. Holds the HTTP client and read-only configuration;
/// every scan is independent and leaves no state behind.
pub struct Engine {
    client: reqwest::Client,
    domain_re: Regex,
    pub config: AppConfig,
}

impl Engine {
    pub fn new(config: AppConfig) -> Result<Self, ScanError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_millis(config.timeout_ms))
            // every hop must be observed by the tracer, never the client
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(ScanError::from)?;
        let domain_re =
            Regex::new(DOMAIN_PATTERN).map_err(|e| ScanError::Config(e.to_string()))?;

        Ok(Self {
            client,
            domain_re,
            config,
        })
    }

    /// Run the full pipeline for one request. Always returns a report:
    /// any error escaping a sub-step degrades to the fixed inconclusive
    /// verdict instead of surfacing to the caller.
    pub async fn scan(&self, request: &ScanRequest) -> ScanReport {
        match self.try_scan(&request.input).await {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!("scan degraded to inconclusive verdict: {err}");
                ScanReport::inconclusive(&request.input)
            }
        }
    }

    async fn try_scan(&self, input: &str) -> Result<ScanReport, ScanError> {
        let domain = extract_domain(&self.domain_re, input);

        let redirect_chain = match &domain {
            Some(_) if !self.config.offline => {
                let start = ensure_scheme(input);
                trace_redirects(&self.client, &start, self.config.max_redirect_hops).await
            }
            _ => Vec::new(),
        };

        let translated = if self.config.offline {
            input.to_string()
        } else {
            translate_to_english(&self.client, &self.config.translate_base_url, input).await
        };

        let mut assessment = score_message(&translated, &self.config.scam_keywords);

        // brand matching runs on the original, untranslated input
        let brand = detect_impersonation(domain.as_deref(), &self.config);
        if brand.is_fake {
            assessment = impersonation_assessment(&brand)?;
        }

        Ok(ScanReport {
            original_message: input.to_string(),
            translated_message: translated,
            brand_impersonation: brand,
            redirect_chain,
            assessment,
        })
    }
}

/// Brand impersonation always wins over keyword scoring: a fixed
/// high-confidence verdict naming the impersonated brand.
fn impersonation_assessment(brand: &BrandMatch) -> Result<ScamAssessment, ScanError> {
    let name = brand
        .pretending_to_be
        .as_deref()
        .ok_or(ScanError::Unknown)?;
    Ok(ScamAssessment {
        status: Status::Dangerous,
        scam_type: "Brand Impersonation".to_string(),
        emotion_detected: Emotion::Authority,
        urgency_score: 85,
        confidence: 95,
        explanation: format!("This domain is pretending to be {name}."),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impersonation_verdict_is_fixed() {
        let brand = BrandMatch::impersonation("paypal", 0.9);
        let a = impersonation_assessment(&brand).unwrap();
        assert_eq!(a.status, Status::Dangerous);
        assert_eq!(a.scam_type, "Brand Impersonation");
        assert_eq!(a.emotion_detected, Emotion::Authority);
        assert_eq!(a.urgency_score, 85);
        assert_eq!(a.confidence, 95);
        assert!(a.explanation.contains("paypal"));
    }

    #[test]
    fn malformed_brand_match_is_an_error() {
        // is_fake without a brand name breaks the BrandMatch invariant
        let brand = BrandMatch {
            is_fake: true,
            pretending_to_be: None,
            similarity_score: None,
        };
        assert!(impersonation_assessment(&brand).is_err());
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let cfg = AppConfig {
            similarity_threshold: 2.0,
            ..AppConfig::default()
        };
        assert!(Engine::new(cfg).is_err());
    }
}
