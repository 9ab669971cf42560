mod auth;
mod products;
pub mod render;

use crate::cli::Commands;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(command: Commands, container: &DependencyContainer) -> anyhow::Result<()> {
    match command {
        Commands::Login { email } => auth::login(container, email).await,
        Commands::Logout => auth::logout(container),
        Commands::Whoami => auth::whoami(container),
        Commands::Categories => products::categories(container).await,
        Commands::List(args) => products::list(container, args).await,
        Commands::Show { slug } => products::show(container, slug).await,
        Commands::Create(args) => products::create(container, args).await,
        Commands::Update(args) => products::update(container, args).await,
        Commands::Delete { id, yes } => products::delete(container, id, yes).await,
    }
}
