use regex::Regex;

/// Loose URL/hostname pattern: optional scheme, optional `www.`, then a
/// `label.tld` pair with an alphabetic tld of at least two characters.
pub const DOMAIN_PATTERN: &str = r"(?:https?://)?(?:www\.)?([a-zA-Z0-9-]+\.[a-zA-Z]{2,})";

/// Pull the first candidate hostname out of free text, lowercased.
/// Multiple URLs in one message are not distinguished.
pub fn extract_domain(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}
