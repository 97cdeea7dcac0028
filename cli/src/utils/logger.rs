/// Filter used when RUST_LOG is not set
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        // catalog logs the surviving product count after every stage at trace
        "debug,catalog=trace"
    } else {
        "info"
    }
}

pub fn init_logger(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filter) => builder.parse_filters(&filter),
        Err(_) => builder.parse_filters(default_filter(verbose)),
    };
    builder.init();
}
