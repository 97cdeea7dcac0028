/// Structured search criteria produced by the interpreter and consumed by the catalog engine
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Jeans,
    Shirts,
    Shorts,
    Shoes,
}

impl Category {
    pub fn tag(self) -> &'static str {
        self.into()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    Blue,
    Black,
    White,
    Gray,
    Khaki,
    Olive,
    Pink,
    Navy,
}

impl Color {
    /// Canonical lowercase tag, matched against product colors by substring
    pub fn tag(self) -> &'static str {
        self.into()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Fit {
    Slim,
    Regular,
    Relaxed,
    Modern,
}

impl Fit {
    /// Canonical lowercase tag, looked up in product name and description
    pub fn tag(self) -> &'static str {
        self.into()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum SortOrder {
    #[serde(rename = "price-low")]
    #[strum(to_string = "price-low", serialize = "price-asc")]
    PriceAscending,
    #[serde(rename = "price-high")]
    #[strum(to_string = "price-high", serialize = "price-desc")]
    PriceDescending,
    #[serde(rename = "rating")]
    #[strum(to_string = "rating")]
    RatingDescending,
    #[serde(rename = "reviews")]
    #[strum(to_string = "reviews")]
    ReviewsDescending,
}

impl SortOrder {
    /// Human readable label shown next to the active filters
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::PriceAscending => "Lowest Price",
            SortOrder::PriceDescending => "Highest Price",
            SortOrder::RatingDescending => "Top Rated",
            SortOrder::ReviewsDescending => "Most Popular",
        }
    }
}

/// Inclusive price bounds; a missing bound leaves that side unconstrained
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceRange {
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Filter and sort criteria for a catalog search.
///
/// Multi-valued fields are any-of: a product needs to match one entry, not all.
/// An empty field places no constraint on the results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSpecification {
    pub categories: Vec<Category>,
    pub colors: Vec<Color>,
    pub fits: Vec<Fit>,
    pub price_range: PriceRange,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl SearchSpecification {
    /// Create a new empty specification, matching every product
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.colors.is_empty()
            && self.fits.is_empty()
            && self.price_range.is_unbounded()
            && self.keywords.is_empty()
            && self.sort_order.is_none()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        push_unique(&mut self.categories, category);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        push_unique(&mut self.colors, color);
        self
    }

    pub fn with_fit(mut self, fit: Fit) -> Self {
        push_unique(&mut self.fits, fit);
        self
    }

    pub fn with_min_price(mut self, min: f64) -> Self {
        self.price_range.min = Some(min);
        self
    }

    pub fn with_max_price(mut self, max: f64) -> Self {
        self.price_range.max = Some(max);
        self
    }

    /// Set both bounds at once, as the price slider does
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(Some(min), Some(max));
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keywords.push(keyword.to_lowercase());
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Checkbox semantics: select the category if absent, deselect it otherwise
    pub fn toggle_category(&mut self, category: Category) {
        toggle(&mut self.categories, category);
    }

    pub fn toggle_color(&mut self, color: Color) {
        toggle(&mut self.colors, color);
    }

    pub fn toggle_fit(&mut self, fit: Fit) {
        toggle(&mut self.fits, fit);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|i| *i == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}

impl std::fmt::Display for SearchSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels = crate::labels::describe_active_filters(self);
        if labels.is_empty() {
            write!(f, "(no filters)")
        } else {
            write!(f, "{}", labels.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_empty() {
        assert!(SearchSpecification::new().is_empty());
        assert!(SearchSpecification::default().price_range.is_unbounded());
    }

    #[test]
    fn test_builder_sets_fields() {
        let spec = SearchSpecification::new()
            .with_category(Category::Jeans)
            .with_category(Category::Jeans)
            .with_color(Color::Blue)
            .with_fit(Fit::Slim)
            .with_price_range(10.0, 90.0)
            .with_keyword("Denim")
            .with_sort_order(SortOrder::PriceAscending);

        assert_eq!(spec.categories, vec![Category::Jeans]);
        assert_eq!(spec.colors, vec![Color::Blue]);
        assert_eq!(spec.fits, vec![Fit::Slim]);
        assert_eq!(spec.price_range, PriceRange::new(Some(10.0), Some(90.0)));
        assert_eq!(spec.keywords, vec!["denim".to_string()]);
        assert_eq!(spec.sort_order, Some(SortOrder::PriceAscending));
        assert!(!spec.is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut spec = SearchSpecification::new();
        spec.toggle_color(Color::Black);
        spec.toggle_color(Color::Pink);
        assert_eq!(spec.colors, vec![Color::Black, Color::Pink]);
        spec.toggle_color(Color::Black);
        assert_eq!(spec.colors, vec![Color::Pink]);

        spec.toggle_category(Category::Shoes);
        spec.toggle_fit(Fit::Relaxed);
        spec.clear();
        assert!(spec.is_empty());
    }

    #[test]
    fn test_price_range_contains_is_inclusive() {
        let range = PriceRange::new(Some(40.0), Some(80.0));
        assert!(range.contains(40.0));
        assert!(range.contains(80.0));
        assert!(!range.contains(80.01));
        assert!(PriceRange::default().contains(1_000_000.0));
    }

    #[test]
    fn test_enum_string_forms() {
        assert_eq!(Category::from_str("Jeans").unwrap(), Category::Jeans);
        assert_eq!(Color::Gray.tag(), "gray");
        assert_eq!(Fit::Modern.to_string(), "modern");
        assert_eq!(
            SortOrder::from_str("price-high").unwrap(),
            SortOrder::PriceDescending
        );
        assert_eq!(SortOrder::RatingDescending.to_string(), "rating");
        assert!(Category::from_str("hats").is_err());
    }

    #[test]
    fn test_serde_wire_names() {
        let spec = SearchSpecification::new()
            .with_category(Category::Shirts)
            .with_max_price(50.0)
            .with_sort_order(SortOrder::PriceAscending);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["categories"][0], "shirts");
        assert_eq!(json["price_range"]["max"], 50.0);
        assert!(json["price_range"].get("min").is_none());
        assert_eq!(json["sort_order"], "price-low");

        let parsed: SearchSpecification =
            serde_json::from_str(r#"{"colors": ["navy"], "sort_order": "reviews"}"#).unwrap();
        assert_eq!(parsed.colors, vec![Color::Navy]);
        assert_eq!(parsed.sort_order, Some(SortOrder::ReviewsDescending));
        assert!(parsed.categories.is_empty());
    }
}
