use crate::taxonomy::{
    is_stop_word, matching_tags, CATEGORY_SYNONYMS, COLOR_SYNONYMS, FIT_SYNONYMS,
    PRICE_ADJECTIVES, SORT_PHRASES,
};
use crate::types::{PriceRange, SearchSpecification};
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

static UPPER_BOUND_REGEX: OnceLock<Regex> = OnceLock::new();
static LOWER_BOUND_REGEX: OnceLock<Regex> = OnceLock::new();
static RANGE_REGEX: OnceLock<Regex> = OnceLock::new();

fn upper_bound_regex() -> &'static Regex {
    UPPER_BOUND_REGEX.get_or_init(|| {
        Regex::new(r"(?:under|below|less than|max|maximum)\s*\$?([0-9]+)").unwrap()
    })
}

fn lower_bound_regex() -> &'static Regex {
    LOWER_BOUND_REGEX.get_or_init(|| {
        Regex::new(r"(?:over|above|more than|min|minimum)\s*\$?([0-9]+)").unwrap()
    })
}

fn range_regex() -> &'static Regex {
    RANGE_REGEX.get_or_init(|| {
        Regex::new(r"between\s*\$?([0-9]+)\s*(?:and|to|-)\s*\$?([0-9]+)").unwrap()
    })
}

/// Interpret a free-text shopping query, e.g. "blue slim jeans under $100".
///
/// Never fails: text that matches nothing yields an empty specification.
pub fn interpret(query: &str) -> SearchSpecification {
    let normalized = query.trim().to_lowercase();

    let mut spec = SearchSpecification {
        categories: matching_tags(&normalized, CATEGORY_SYNONYMS),
        colors: matching_tags(&normalized, COLOR_SYNONYMS),
        fits: matching_tags(&normalized, FIT_SYNONYMS),
        ..Default::default()
    };

    // Later adjectives in table order overwrite earlier ones
    for (keyword, bounds) in PRICE_ADJECTIVES {
        if normalized.contains(keyword) {
            debug!("price adjective '{}' matched", keyword);
            if bounds.max.is_some() {
                spec.price_range.max = bounds.max;
            }
            if bounds.min.is_some() {
                spec.price_range.min = bounds.min;
            }
        }
    }

    extract_price_bounds(&normalized, &mut spec.price_range);

    for (phrase, order) in SORT_PHRASES {
        if normalized.contains(phrase) {
            spec.sort_order = Some(*order);
        }
    }

    spec.keywords = extract_keywords(&normalized);

    debug!("interpreted '{}' as {:?}", normalized, spec);
    spec
}

/// Numeric price patterns; the range pattern runs last and overrides both bounds
fn extract_price_bounds(normalized: &str, range: &mut PriceRange) {
    if let Some(max) = upper_bound_regex()
        .captures(normalized)
        .and_then(|c| parse_amount(&c[1]))
    {
        range.max = Some(max);
    }

    if let Some(min) = lower_bound_regex()
        .captures(normalized)
        .and_then(|c| parse_amount(&c[1]))
    {
        range.min = Some(min);
    }

    if let Some(captures) = range_regex().captures(normalized) {
        if let (Some(min), Some(max)) = (parse_amount(&captures[1]), parse_amount(&captures[2])) {
            range.min = Some(min);
            range.max = Some(max);
        }
    }
}

fn parse_amount(digits: &str) -> Option<f64> {
    digits.parse::<f64>().ok()
}

/// Residual free-text tokens, in query order, duplicates kept
fn extract_keywords(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !is_stop_word(word))
        .map(str::to_string)
        .collect()
}
