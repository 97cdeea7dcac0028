//! Fixed keyword tables driving the query interpreter.
//!
//! Declaration order matters: tags are reported in table order, and for price
//! adjectives and sort phrases a later matching entry overwrites an earlier one.

use crate::types::{Category, Color, Fit, PriceRange, SortOrder};

pub const CATEGORY_SYNONYMS: &[(Category, &[&str])] = &[
    (Category::Jeans, &["jeans", "denim", "pants", "trousers"]),
    (
        Category::Shirts,
        &["shirts", "shirt", "top", "tops", "blouse", "tee", "t-shirt"],
    ),
    (
        Category::Shorts,
        &["shorts", "short pants", "bermudas", "cargo shorts"],
    ),
    (
        Category::Shoes,
        &["shoes", "sneakers", "footwear", "kicks", "trainers"],
    ),
];

// "navy" is both a canonical color and a synonym of blue; both tags are reported.
pub const COLOR_SYNONYMS: &[(Color, &[&str])] = &[
    (
        Color::Blue,
        &[
            "blue",
            "navy",
            "light blue",
            "dark blue",
            "azure",
            "cobalt",
            "indigo",
        ],
    ),
    (Color::Black, &["black", "dark", "ebony", "jet"]),
    (Color::White, &["white", "cream", "ivory", "off-white"]),
    (Color::Gray, &["gray", "grey", "charcoal", "silver", "slate"]),
    (Color::Khaki, &["khaki", "tan", "beige", "sand"]),
    (Color::Olive, &["olive", "army", "military green"]),
    (Color::Pink, &["pink", "rose", "blush"]),
    (Color::Navy, &["navy", "nautical", "maritime"]),
];

pub const FIT_SYNONYMS: &[(Fit, &[&str])] = &[
    (
        Fit::Slim,
        &["slim", "skinny", "fitted", "tight", "narrow", "tapered"],
    ),
    (Fit::Regular, &["regular", "standard", "normal", "classic"]),
    (
        Fit::Relaxed,
        &["relaxed", "loose", "comfortable", "baggy", "wide"],
    ),
    (Fit::Modern, &["modern", "contemporary", "urban", "trendy"]),
];

pub const PRICE_ADJECTIVES: &[(&str, PriceRange)] = &[
    ("cheap", PriceRange::new(None, Some(50.0))),
    ("affordable", PriceRange::new(None, Some(60.0))),
    ("budget", PriceRange::new(None, Some(50.0))),
    ("expensive", PriceRange::new(Some(80.0), None)),
    ("premium", PriceRange::new(Some(70.0), None)),
    ("luxury", PriceRange::new(Some(90.0), None)),
    ("mid", PriceRange::new(Some(40.0), Some(70.0))),
    ("moderate", PriceRange::new(Some(40.0), Some(70.0))),
];

// Matched as substrings of the whole query, so "most expensive" and
// "most popular" resolve independently despite the shared word.
pub const SORT_PHRASES: &[(&str, SortOrder)] = &[
    ("cheapest", SortOrder::PriceAscending),
    ("lowest price", SortOrder::PriceAscending),
    ("most expensive", SortOrder::PriceDescending),
    ("highest price", SortOrder::PriceDescending),
    ("best rated", SortOrder::RatingDescending),
    ("top rated", SortOrder::RatingDescending),
    ("highest rated", SortOrder::RatingDescending),
    ("most reviewed", SortOrder::ReviewsDescending),
    ("popular", SortOrder::ReviewsDescending),
    ("most popular", SortOrder::ReviewsDescending),
];

pub const STOP_WORDS: &[&str] = &[
    "show", "me", "the", "find", "get", "with", "and", "for", "that", "are", "have", "has",
];

/// Example queries offered while the user is typing
pub const SUGGESTIONS: &[&str] = &[
    "blue jeans with slim fit",
    "casual shirts under $50",
    "black sneakers top rated",
    "summer shorts in khaki",
    "premium denim jeans",
    "comfortable shoes for everyday",
    "formal white shirt",
    "cargo shorts olive color",
];

pub(crate) fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Canonical tags whose synonyms occur anywhere in `normalized`, in table order
pub(crate) fn matching_tags<T: Copy>(normalized: &str, table: &[(T, &[&str])]) -> Vec<T> {
    table
        .iter()
        .filter(|(_, synonyms)| synonyms.iter().any(|syn| normalized.contains(syn)))
        .map(|(tag, _)| *tag)
        .collect()
}
