//! Product catalog and the filter/sort engine that applies a
//! [`SearchSpecification`] to it.

mod errors;
mod product;
mod search;

pub use errors::CatalogError;
pub use nl_search::{Category, Color, Fit, PriceRange, SearchSpecification, SortOrder};
pub use product::ProductRecord;
pub use search::{filter_products, search};

use log::{debug, warn};
use std::collections::HashSet;
use std::path::Path;

const DEMO_CATALOG_YAML: &str = include_str!("../data/products.yaml");

/// Number of products returned by [`Catalog::recommended`] when no limit is given
pub const DEFAULT_RECOMMENDATIONS: usize = 4;

/// Ordered, immutable list of products
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<ProductRecord>,
}

impl Catalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    /// The storefront's built-in six product catalog
    pub fn demo() -> Self {
        Self::new_from_str(DEMO_CATALOG_YAML, "yaml").expect("embedded demo catalog is valid")
    }

    /// Load a catalog, picking the format from the file extension
    pub fn new_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();
        let input = fs_err::read_to_string(path)?;
        let catalog = Self::new_from_str(&input, &format)?;
        debug!("loaded {} products from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn new_from_str(input: &str, format: &str) -> Result<Self, CatalogError> {
        let products: Vec<ProductRecord> = match format {
            "json" => serde_json::from_str(input)?,
            "yaml" | "yml" => serde_yaml_ng::from_str(input)?,
            "csv" => Self::parse_csv_data(input)?,
            _ => return Err(CatalogError::UnsupportedFormat(format.to_string())),
        };

        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Run a structured search against the catalog
    pub fn search(&self, spec: &SearchSpecification) -> Vec<&ProductRecord> {
        filter_products(&self.products, spec)
    }

    /// Interpret a free-text query and run it
    pub fn search_text(&self, query: &str) -> Vec<&ProductRecord> {
        self.search(&nl_search::interpret(query))
    }

    pub fn by_category(&self, category: Category) -> Vec<&ProductRecord> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// The first `limit` products in catalog order
    pub fn recommended(&self, limit: usize) -> Vec<&ProductRecord> {
        self.products.iter().take(limit).collect()
    }

    /// Plain browse filter: optional category, then `text` as a
    /// case-insensitive substring of name or description
    pub fn browse(&self, category: Option<Category>, text: &str) -> Vec<&ProductRecord> {
        let needle = text.to_lowercase();
        self.products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn parse_csv_data(csv_data: &str) -> Result<Vec<ProductRecord>, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_data.as_bytes());

        let mut products = Vec::new();

        for result in csv_reader.records() {
            match result {
                Ok(record) => match ProductRecord::parse_record(&record) {
                    Ok(product) => products.push(product),
                    Err(e) => {
                        warn!("Skipping invalid record: {}", e);
                        continue;
                    }
                },
                Err(e) => {
                    warn!("Error reading CSV record: {}", e);
                    continue;
                }
            }
        }

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(catalog.get("6").unwrap().colors[1], "Light Blue");
        assert_eq!(catalog.get("4").unwrap().sizes.len(), 7);
        assert!(catalog.get("42").is_none());
    }

    #[test]
    fn test_unsupported_format() {
        assert!(matches!(
            Catalog::new_from_str("[]", "toml"),
            Err(CatalogError::UnsupportedFormat(f)) if f == "toml"
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new_from_str("[]", "json").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.search_text("jeans").is_empty());
    }
}
