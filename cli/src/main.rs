mod argparse;
mod commands;
mod utils;

use argparse::parse_args;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args();
    utils::init_logger(cli.verbose);

    let catalog = storefront_cli::resolve_catalog(cli.catalog.as_deref().map(Path::new))?;
    log::debug!("catalog has {} products", catalog.len());

    commands::handle_command(cli.command, &catalog)?;

    Ok(())
}
