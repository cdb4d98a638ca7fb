//! Keyword normalization shared by the prompt compiler and synthesizer

/// Hero post carries at most this many keyword hashtags
pub const MAX_HASHTAGS: usize = 6;

/// Hashtags used when the persona supplies no usable keywords
pub const DEFAULT_HASHTAGS: [&str; 2] = ["socialgrowth", "brandstory"];

/// Split on commas, trim each token, drop empty tokens
///
/// Order is preserved; the result may be empty.
#[must_use]
pub fn normalize_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Hero hashtags: first [`MAX_HASHTAGS`] keywords with whitespace removed,
/// or [`DEFAULT_HASHTAGS`] when there are none
#[must_use]
pub fn hero_hashtags(keywords: &[String]) -> Vec<String> {
    if keywords.is_empty() {
        return DEFAULT_HASHTAGS.iter().map(|tag| (*tag).to_string()).collect();
    }
    keywords
        .iter()
        .take(MAX_HASHTAGS)
        .map(|keyword| keyword.chars().filter(|c| !c.is_whitespace()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_splits_and_trims() {
        assert_eq!(
            normalize_keywords(" slow fashion, ,linen ,, capsule wardrobe "),
            vec!["slow fashion", "linen", "capsule wardrobe"]
        );
    }

    #[test]
    fn normalize_empty_inputs() {
        assert!(normalize_keywords("").is_empty());
        assert!(normalize_keywords(" , ,").is_empty());
    }

    #[test]
    fn hashtags_strip_whitespace_and_cap() {
        let keywords = normalize_keywords("a b, c\td, e, f, g, h, i");
        let tags = hero_hashtags(&keywords);
        assert_eq!(tags, vec!["ab", "cd", "e", "f", "g", "h"]);
    }

    #[test]
    fn hashtags_default_pair() {
        assert_eq!(hero_hashtags(&[]), vec!["socialgrowth", "brandstory"]);
    }
}
