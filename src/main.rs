use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{
    CartCommand, ConfigCommand, FavoriteCommand, InfoCommand, RecipesCommand,
    SubscriptionsCommand, ABOUT, TECHNOLOGIES,
};
use foodgram::config::Config;

#[derive(Parser)]
#[command(name = "foodgram")]
#[command(version)]
#[command(about = "Browse Foodgram recipes, favorites, subscriptions and the shopping cart", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes and tags
    Recipes(RecipesCommand),

    /// Add or remove favorites
    Favorite(FavoriteCommand),

    /// Manage the shopping cart
    Cart(CartCommand),

    /// Follow authors and list their recipes
    Subscriptions(SubscriptionsCommand),

    /// Manage configuration
    Config(ConfigCommand),

    /// About the project
    About(InfoCommand),

    /// Technologies behind the project
    Technologies(InfoCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "foodgram=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Save config path for `config` subcommands
    let cli_config_path = cli.config.clone();

    let config = Config::load(cli.config)?;
    tracing::debug!(api_url = %config.api_url.value, "configuration loaded");

    match &cli.command {
        Some(Commands::Recipes(cmd)) => cmd.run(&config).await?,
        Some(Commands::Favorite(cmd)) => cmd.run(&config).await?,
        Some(Commands::Cart(cmd)) => cmd.run(&config).await?,
        Some(Commands::Subscriptions(cmd)) => cmd.run(&config).await?,
        Some(Commands::Config(cmd)) => cmd.run(&config, cli_config_path)?,
        Some(Commands::About(cmd)) => cmd.run("About Foodgram", ABOUT)?,
        Some(Commands::Technologies(cmd)) => cmd.run("Technologies", TECHNOLOGIES)?,
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
