use clap::{Args, Parser, Subcommand};

use business::domain::product::value_objects::{CategoryFilter, PageSize};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Catalog CLI - browse and manage the product catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with an email address
    Login { email: String },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in account
    Whoami,
    /// List product categories
    Categories,
    /// List products, optionally searching or filtering by category
    List(ListArgs),
    /// Show one product by slug
    Show { slug: String },
    /// Create a product
    Create(CreateArgs),
    /// Edit a product by slug
    Update(UpdateArgs),
    /// Delete a product by id
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Search text; two characters or more switch to search mode
    #[arg(long, default_value = "")]
    pub search: String,
    /// Category id, or "all"
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// One of 5, 10, 15, 20
    #[arg(long, default_value = "10", value_parser = parse_page_size)]
    pub page_size: PageSize,
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub price: String,
    #[arg(long)]
    pub category: Option<String>,
    /// Image URL, repeat for several
    #[arg(long = "image")]
    pub images: Vec<String>,
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub slug: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Send a PATCH instead of a full PUT
    #[arg(long)]
    pub patch: bool,
}

fn parse_page_size(raw: &str) -> Result<PageSize, String> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid page size: {}", raw))?;
    PageSize::try_from(value)
}
