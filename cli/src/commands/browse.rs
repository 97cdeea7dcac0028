use super::{print_products, products_table};
use crate::argparse::{ListArgs, RecommendArgs};
use catalog::Catalog;
use std::error::Error;

pub fn handle_list_command(args: ListArgs, catalog: &Catalog) -> Result<(), Box<dyn Error>> {
    print_products(catalog.browse(args.category, &args.text), &args.output)
}

pub fn handle_recommend_command(
    args: RecommendArgs,
    catalog: &Catalog,
) -> Result<(), Box<dyn Error>> {
    let products = catalog.recommended(args.limit);
    if products.is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }
    println!("Recommended for you:");
    print!("{}", products_table(&products));
    Ok(())
}
