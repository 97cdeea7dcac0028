use crate::product::ProductRecord;
use log::trace;
use nl_search::{Color, Fit, SearchSpecification, SortOrder};

/// Apply `spec` to `catalog` and return the matching products, ordered.
///
/// Never fails and never touches the input; a specification nothing satisfies
/// yields an empty list.
pub fn search(catalog: &[ProductRecord], spec: &SearchSpecification) -> Vec<ProductRecord> {
    filter_products(catalog, spec).into_iter().cloned().collect()
}

/// Borrowing variant of [`search`].
///
/// Stages run in a fixed order and a stage is skipped when its field is empty.
pub fn filter_products<'a>(
    catalog: &'a [ProductRecord],
    spec: &SearchSpecification,
) -> Vec<&'a ProductRecord> {
    let mut results: Vec<&ProductRecord> = catalog.iter().collect();

    if !spec.categories.is_empty() {
        results.retain(|p| spec.categories.contains(&p.category));
        trace!("category stage: {} left", results.len());
    }

    if !spec.colors.is_empty() {
        results.retain(|p| matches_colors(p, &spec.colors));
        trace!("color stage: {} left", results.len());
    }

    if !spec.fits.is_empty() {
        results.retain(|p| matches_fits(p, &spec.fits));
        trace!("fit stage: {} left", results.len());
    }

    if let Some(min) = spec.price_range.min {
        results.retain(|p| p.price >= min);
        trace!("min price stage: {} left", results.len());
    }

    if let Some(max) = spec.price_range.max {
        results.retain(|p| p.price <= max);
        trace!("max price stage: {} left", results.len());
    }

    if !spec.keywords.is_empty() {
        results.retain(|p| matches_keywords(p, &spec.keywords));
        trace!("keyword stage: {} left", results.len());
    }

    if let Some(sort_order) = spec.sort_order {
        sort_products(&mut results, sort_order);
    }

    results
}

/// Bidirectional substring match: "Light Blue" matches blue, "Blue" matches blue
fn matches_colors(product: &ProductRecord, colors: &[Color]) -> bool {
    product.colors.iter().any(|product_color| {
        let product_color = product_color.to_lowercase();
        colors.iter().any(|color| {
            let tag = color.tag();
            product_color.contains(tag) || tag.contains(product_color.as_str())
        })
    })
}

fn matches_fits(product: &ProductRecord, fits: &[Fit]) -> bool {
    let text = product.search_text();
    fits.iter().any(|fit| text.contains(fit.tag()))
}

// Keywords are OR'd
fn matches_keywords(product: &ProductRecord, keywords: &[String]) -> bool {
    let text = product.search_text();
    keywords.iter().any(|keyword| text.contains(keyword.as_str()))
}

/// Stable sort: ties keep their catalog order
fn sort_products(products: &mut [&ProductRecord], sort_order: SortOrder) {
    match sort_order {
        SortOrder::PriceAscending => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDescending => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::RatingDescending => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOrder::ReviewsDescending => products.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
    }
}
