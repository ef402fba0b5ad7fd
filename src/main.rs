use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use property_views::notify::{AutoConfirm, Confirmer, ConsoleNotifier, DialoguerConfirmer};
use property_views::views::{OwnerListingsView, SearchPanel, TeamShowcase};
use property_views::{render, AppConfig, HttpPropertyStore, PropertyStore, UserId};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "property-views", version, about = "Browse and manage property listings")]
struct Cli {
    /// Config file
    #[arg(long, global = true, default_value = "property-views.toml")]
    config: PathBuf,

    /// Override the property store base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the properties you own
    Listings {
        /// Signed-in user id (falls back to `user_id` in the config)
        #[arg(long)]
        user: Option<String>,

        /// Delete the listing with this id after loading
        #[arg(long)]
        delete: Option<String>,

        /// Skip the delete confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Search properties by name or location
    Search { query: String },
    /// Show the team gallery
    Team,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config).context("Failed to load config")?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    match cli.command {
        Commands::Listings { user, delete, yes } => {
            let store = connect(&config)?;
            let user = user.map(UserId::new).or_else(|| config.user_id.clone());
            let view = OwnerListingsView::new(store);

            view.load(user.as_ref()).await;

            if let Some(id) = delete {
                let confirmer: Box<dyn Confirmer> = if yes {
                    Box::new(AutoConfirm(true))
                } else {
                    Box::new(DialoguerConfirmer)
                };
                view.delete(&id, confirmer.as_ref(), &ConsoleNotifier).await;
            }

            print!("{}", render::render_owner_listings(&view));
        }
        Commands::Search { query } => {
            let store = connect(&config)?;
            let panel = SearchPanel::new(store);

            panel.search_for(query, &ConsoleNotifier).await;

            print!("{}", render::render_search_results(&panel.results()));
        }
        Commands::Team => {
            print!("{}", render::render_team(&TeamShowcase));
        }
    }

    Ok(())
}

fn connect(config: &AppConfig) -> Result<Arc<dyn PropertyStore>> {
    let store = HttpPropertyStore::with_config(config.store_config())?;
    info!("Using property store at {}", config.api_url);
    Ok(Arc::new(store))
}
