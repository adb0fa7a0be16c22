use std::{fs, path::Path};

use serde::Deserialize;

use crate::core::error::ScanError;

/// Brand names a lookalike domain may impersonate. Order matters: ties in
/// similarity resolve to the first entry.
const TRUSTED_BRANDS: [&str; 11] = [
    "amazon",
    "paypal",
    "google",
    "flipkart",
    "instagram",
    "telegram",
    "facebook",
    "whatsapp",
    "hdfcbank",
    "sbi",
    "bankofindia",
];

const SCAM_KEYWORDS: [&str; 13] = [
    "urgent",
    "immediately",
    "verify",
    "bank",
    "account suspended",
    "otp",
    "password",
    "click here",
    "limited time",
    "investment opportunity",
    "congratulations",
    "suspended",
    "closed permanently",
];

// Leetspeak substitutions applied to a domain label before matching.
const LEET_SUBSTITUTIONS: [(char, char); 3] = [('0', 'o'), ('1', 'l'), ('5', 's')];

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub timeout_ms: u64,
    pub max_redirect_hops: usize,
    pub similarity_threshold: f64,
    pub user_agent: String,
    pub translate_base_url: String,
    /// Skip the network steps (translation, redirect tracing).
    #[serde(default)]
    pub offline: bool,
    pub leet_substitutions: Vec<(char, char)>,
    pub trusted_brands: Vec<String>,
    pub scam_keywords: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            timeout_ms: 5_000,
            max_redirect_hops: 5,
            similarity_threshold: 0.75,
            user_agent: "scamshield/1.0".to_string(),
            translate_base_url: "https://translate.googleapis.com".to_string(),
            offline: false,
            leet_substitutions: LEET_SUBSTITUTIONS.to_vec(),
            trusted_brands: TRUSTED_BRANDS.iter().map(|s| s.to_string()).collect(),
            scam_keywords: SCAM_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.timeout_ms == 0 {
            return Err(ScanError::Config("timeout_ms must be positive".into()));
        }
        if self.max_redirect_hops == 0 {
            return Err(ScanError::Config(
                "max_redirect_hops must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ScanError::Config(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}

pub fn load_config(path: Option<&str>) -> Result<AppConfig, ScanError> {
    let default_path = Path::new("config/scamshield.toml");
    let path = path.map(Path::new).unwrap_or(default_path);

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| ScanError::Config(e.to_string()))?;
    let cfg: AppConfig = toml::from_str(&content).map_err(|e| ScanError::Config(e.to_string()))?;
    Ok(cfg)
}
