use strsim::sorensen_dice;

use crate::config::AppConfig;
use crate::core::types::BrandMatch;

/// Check whether a domain is a lookalike of one of the trusted brands.
///
/// The registrable label (before the first `.`) is stripped of hyphenated
/// affixes (before the first `-`), leetspeak substitutions are applied,
/// and the result is rated against each brand with the Sørensen–Dice
/// coefficient over character bigrams (`strsim::sorensen_dice`). Ties
/// resolve to the first brand in list order. The verdict is impersonation
/// only when the best rating clears the threshold and the unnormalized
/// label is not the brand itself, so the genuine domain is never flagged.
pub fn detect_impersonation(domain: Option<&str>, cfg: &AppConfig) -> BrandMatch {
    let Some(domain) = domain else {
        return BrandMatch::genuine();
    };

    let main_part = domain.split('.').next().unwrap_or(domain);
    let base_name = main_part.split('-').next().unwrap_or(main_part);
    let normalized = normalize_label(base_name, &cfg.leet_substitutions);

    let mut best: Option<(&str, f64)> = None;
    for brand in &cfg.trusted_brands {
        let rating = sorensen_dice(&normalized, brand);
        if best.map_or(true, |(_, top)| rating > top) {
            best = Some((brand.as_str(), rating));
        }
    }

    match best {
        Some((brand, rating)) if rating > cfg.similarity_threshold && base_name != brand => {
            BrandMatch::impersonation(brand, rating)
        }
        _ => BrandMatch::genuine(),
    }
}

fn normalize_label(label: &str, substitutions: &[(char, char)]) -> String {
    label
        .chars()
        .map(|c| {
            substitutions
                .iter()
                .find(|(from, _)| *from == c)
                .map(|(_, to)| *to)
                .unwrap_or(c)
        })
        .collect()
}
