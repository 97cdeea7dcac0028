use crate::errors::CatalogError;
use nl_search::Category;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single storefront product; read-only to the search engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    pub description: String,
    pub rating: f64,
    pub reviews: u32,
}

impl ProductRecord {
    /// Case-folded "name description", the text searched for fits and keywords
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }

    /// Parse one CSV record laid out as
    /// `id,name,category,price,colors,sizes,description,rating,reviews`
    pub fn parse_record(record: &csv::StringRecord) -> Result<Self, CatalogError> {
        let field = |index: usize, name: &str| record_field(record, index, name);

        let category_str = field(2, "category")?;
        let category = Category::from_str(category_str).map_err(|_| {
            CatalogError::ParseError(format!("Invalid category: {}", category_str))
        })?;

        Ok(ProductRecord {
            id: field(0, "id")?.to_string(),
            name: field(1, "name")?.to_string(),
            category,
            price: parse_number(field(3, "price")?, "price")?,
            colors: parse_list(field(4, "colors")?),
            sizes: parse_list(field(5, "sizes")?),
            description: field(6, "description")?.to_string(),
            rating: parse_number(field(7, "rating")?, "rating")?,
            reviews: field(8, "reviews")?
                .parse()
                .map_err(|e| CatalogError::ParseError(format!("Invalid reviews: {}", e)))?,
        })
    }
}

fn record_field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<&'a str, CatalogError> {
    record
        .get(index)
        .map(str::trim)
        .ok_or_else(|| CatalogError::ParseError(format!("Missing field: {}", name)))
}

fn parse_number(value: &str, name: &str) -> Result<f64, CatalogError> {
    value
        .parse::<f64>()
        .map_err(|e| CatalogError::ParseError(format!("Invalid {} '{}': {}", name, value, e)))
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
