//! Rule-based interpreter for free-text shopping queries.
//!
//! `interpret` turns text such as "top rated blue shirts under $60" into a
//! [`SearchSpecification`]; the catalog crate applies that to products.

mod labels;
mod parser;
mod suggestions;
pub mod taxonomy;
mod types;

pub use labels::describe_active_filters;
pub use parser::interpret;
pub use suggestions::{suggest, MAX_SUGGESTIONS};
pub use types::{Category, Color, Fit, PriceRange, SearchSpecification, SortOrder};
