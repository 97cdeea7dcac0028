use crate::types::SearchSpecification;

const UNBOUNDED: &str = "∞";

/// "Field: value" labels for the filters currently in effect, for display only.
///
/// Residual keywords are listed last as a single entry.
pub fn describe_active_filters(spec: &SearchSpecification) -> Vec<String> {
    let mut filters = Vec::new();

    filters.extend(spec.categories.iter().map(|c| format!("Category: {}", c)));
    filters.extend(spec.colors.iter().map(|c| format!("Color: {}", c)));
    filters.extend(spec.fits.iter().map(|f| format!("Fit: {}", f)));

    if !spec.price_range.is_unbounded() {
        let min = spec.price_range.min.unwrap_or(0.0);
        let max = spec
            .price_range
            .max
            .map_or_else(|| UNBOUNDED.to_string(), |max| max.to_string());
        filters.push(format!("Price: ${} - ${}", min, max));
    }

    if let Some(sort_order) = spec.sort_order {
        filters.push(format!("Sort: {}", sort_order.label()));
    }

    if !spec.keywords.is_empty() {
        filters.push(format!("Keywords: {}", spec.keywords.join(" ")));
    }

    filters
}
