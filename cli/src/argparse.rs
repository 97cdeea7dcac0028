use catalog::{Category, Color, Fit, SortOrder, DEFAULT_RECOMMENDATIONS};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "storefront",
    about = "Storefront natural-language product search",
    version,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Product catalog file (.json, .yaml or .csv); defaults to ~/.storefront/catalog.yaml,
    /// or the built-in demo catalog if that does not exist
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Pick which subcommand to use
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog with a free-text query, e.g. "blue slim jeans under $100"
    Search(SearchArgs),
    /// Show how a free-text query is interpreted, without searching
    Interpret(InterpretArgs),
    /// Search with explicitly selected filters
    Filter(FilterArgs),
    /// Suggest example queries
    Suggest(SuggestArgs),
    /// Browse products by category and plain text
    List(ListArgs),
    /// Show recommended products
    Recommend(RecommendArgs),
}

#[derive(Args)]
pub struct OutputArgs {
    /// Show at most this many products
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print products as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// The query, in plain words
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct InterpretArgs {
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Category to include, may be repeated
    #[arg(long)]
    pub category: Vec<Category>,

    /// Color to include, may be repeated
    #[arg(long)]
    pub color: Vec<Color>,

    /// Fit to include, may be repeated
    #[arg(long)]
    pub fit: Vec<Fit>,

    /// Lowest price, inclusive
    #[arg(long)]
    pub min: Option<f64>,

    /// Highest price, inclusive
    #[arg(long)]
    pub max: Option<f64>,

    /// Sort order: price-low, price-high, rating or reviews
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// Text that must occur in name or description, may be repeated
    #[arg(long)]
    pub keyword: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// What has been typed so far
    pub prefix: Vec<String>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only this category
    #[arg(long)]
    pub category: Option<Category>,

    /// Case-insensitive text in name or description
    #[arg(long, default_value = "")]
    pub text: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct RecommendArgs {
    #[arg(long, default_value_t = DEFAULT_RECOMMENDATIONS)]
    pub limit: usize,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
