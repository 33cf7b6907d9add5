use clap::{Args, Parser, Subcommand};
use storefront_domain::Locale;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse a product catalog in the terminal", long_about = None)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")")
)]
pub struct Cli {
    /// Path to the catalog file (or set STOREFRONT_CATALOG env var)
    #[arg(value_name = "CATALOG", env = "STOREFRONT_CATALOG")]
    pub catalog: Option<String>,

    #[command(flatten)]
    pub query: QueryArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Display language: en or fa
    #[arg(long, global = true)]
    pub lang: Option<Locale>,

    /// Only show products whose name contains this text
    #[arg(long, global = true)]
    pub search: Option<String>,

    /// Maximum price
    #[arg(long, global = true)]
    pub filter: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of products as JSON
    List(ListArgs),
    /// Write a demo catalog
    Init(InitArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Number of products to return (defaults to the page size)
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct InitArgs {
    /// Number of demo products
    #[arg(long, default_value_t = 55)]
    pub count: usize,

    /// Overwrite an existing catalog
    #[arg(long)]
    pub force: bool,
}
