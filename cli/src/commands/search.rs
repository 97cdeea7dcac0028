use super::print_products;
use crate::argparse::{FilterArgs, InterpretArgs, SearchArgs};
use catalog::{Catalog, SearchSpecification};
use log::debug;
use nl_search::{describe_active_filters, interpret};
use std::error::Error;

pub fn handle_search_command(args: SearchArgs, catalog: &Catalog) -> Result<(), Box<dyn Error>> {
    let query = args.query.join(" ");
    let spec = interpret(&query);
    if !args.output.json {
        print_active_filters(&spec);
    }
    print_products(catalog.search(&spec), &args.output)
}

pub fn handle_interpret_command(args: InterpretArgs) -> Result<(), Box<dyn Error>> {
    let spec = interpret(&args.query.join(" "));
    println!("{}", serde_json::to_string_pretty(&spec)?);
    print_active_filters(&spec);
    Ok(())
}

pub fn handle_filter_command(args: FilterArgs, catalog: &Catalog) -> Result<(), Box<dyn Error>> {
    let spec = filter_spec(&args);
    debug!("filter specification: {}", spec);
    if !args.output.json {
        print_active_filters(&spec);
    }
    print_products(catalog.search(&spec), &args.output)
}

fn filter_spec(args: &FilterArgs) -> SearchSpecification {
    let mut spec = SearchSpecification::new();
    for category in &args.category {
        spec = spec.with_category(*category);
    }
    for color in &args.color {
        spec = spec.with_color(*color);
    }
    for fit in &args.fit {
        spec = spec.with_fit(*fit);
    }
    if let Some(min) = args.min {
        spec = spec.with_min_price(min);
    }
    if let Some(max) = args.max {
        spec = spec.with_max_price(max);
    }
    for keyword in &args.keyword {
        spec = spec.with_keyword(keyword);
    }
    if let Some(sort_order) = args.sort {
        spec = spec.with_sort_order(sort_order);
    }
    spec
}

fn print_active_filters(spec: &SearchSpecification) {
    let labels = describe_active_filters(spec);
    if labels.is_empty() {
        println!("Active filters: none");
    } else {
        println!("Active filters: {}", labels.join(" | "));
    }
}
