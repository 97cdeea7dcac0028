use crate::argparse::SuggestArgs;
use nl_search::suggest;
use std::error::Error;

pub fn handle_suggest_command(args: SuggestArgs) -> Result<(), Box<dyn Error>> {
    let prefix = args.prefix.join(" ");
    let suggestions = suggest(&prefix);
    if suggestions.is_empty() {
        println!("No suggestions for \"{}\"", prefix);
    }
    for suggestion in suggestions {
        println!("{}", suggestion);
    }
    Ok(())
}
