mod browse;
mod search;
mod suggest;

use crate::argparse::{Commands, OutputArgs};
pub use browse::{handle_list_command, handle_recommend_command};
use catalog::{Catalog, ProductRecord};
pub use search::{handle_filter_command, handle_interpret_command, handle_search_command};
use std::error::Error;
pub use suggest::handle_suggest_command;
use tabular::{Row, Table};

pub fn handle_command(command: Commands, catalog: &Catalog) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Search(args) => handle_search_command(args, catalog),
        Commands::Interpret(args) => handle_interpret_command(args),
        Commands::Filter(args) => handle_filter_command(args, catalog),
        Commands::Suggest(args) => handle_suggest_command(args),
        Commands::List(args) => handle_list_command(args, catalog),
        Commands::Recommend(args) => handle_recommend_command(args, catalog),
    }
}

pub(crate) fn print_products(
    products: Vec<&ProductRecord>,
    output: &OutputArgs,
) -> Result<(), Box<dyn Error>> {
    let total = products.len();
    let shown: Vec<&ProductRecord> = match output.limit {
        Some(limit) => products.into_iter().take(limit).collect(),
        None => products,
    };

    if output.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No matching products.");
        return Ok(());
    }

    println!("Found {} matching products:", total);
    print!("{}", products_table(&shown));
    Ok(())
}

pub(crate) fn products_table(products: &[&ProductRecord]) -> Table {
    #[allow(clippy::literal_string_with_formatting_args)]
    let mut table = Table::new("{:<}  {:<}  {:<}  {:>}  {:>}  {:>}  {:<}").with_row(
        Row::from_cells(
            ["ID", "Name", "Category", "Price", "Rating", "Reviews", "Colors"]
                .iter()
                .cloned(),
        ),
    );

    for product in products {
        table.add_row(
            Row::new()
                .with_cell(&product.id)
                .with_cell(&product.name)
                .with_cell(product.category)
                .with_cell(format!("${:.2}", product.price))
                .with_cell(product.rating)
                .with_cell(product.reviews)
                .with_cell(product.colors.join(", ")),
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_table_lists_every_product() {
        let catalog = Catalog::demo();
        let products = catalog.recommended(2);
        let rendered = products_table(&products).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("Classic Blue Jeans"));
        assert!(lines[1].contains("$89.99"));
        assert!(lines[2].contains("Blue, Gray, Black"));
    }
}
