//! Shared fixtures for the catalog integration tests

#![allow(dead_code)]

use catalog::{Catalog, Category, ProductRecord};

pub const SAMPLE_CSV: &str = r#"id,name,category,price,colors,sizes,description,rating,reviews
10,Relaxed Chino,jeans,59.00,"Khaki, Olive","30,32,34",Relaxed cotton chino with a classic cut.,4.1,40
11,Oxford Shirt,Shirts,45.50,"White, Light Blue","S,M,L",Regular fit oxford shirt.,4.4,75
12,Trail Runner,shoes,120.00,Gray,"9,10",Lightweight trail runner.,4.8,310"#;

pub fn product(id: &str, category: Category, price: f64, rating: f64, reviews: u32) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        name: format!("Product {}", id),
        category,
        price,
        colors: vec!["Black".to_string()],
        sizes: vec![],
        description: "Test product.".to_string(),
        rating,
        reviews,
    }
}

pub fn ids(products: &[&ProductRecord]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}

pub fn owned_ids(products: &[ProductRecord]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}

pub fn demo() -> Catalog {
    Catalog::demo()
}
