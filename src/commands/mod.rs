use std::sync::Arc;

use clap::{Args, ValueEnum};

use foodgram::api::FoodgramClient;
use foodgram::config::Config;
use foodgram::sync::{ConsoleNotifier, RecipeListSynchronizer, ToggleOutcome};
use foodgram::{RecipeId, ViewScope};

mod cart;
mod config_cmd;
mod favorite;
mod info;
mod recipes;
mod subscriptions;

pub use cart::CartCommand;
pub use config_cmd::ConfigCommand;
pub use favorite::FavoriteCommand;
pub use info::{InfoCommand, ABOUT, TECHNOLOGIES};
pub use recipes::RecipesCommand;
pub use subscriptions::SubscriptionsCommand;

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Arguments shared by the favorite and cart toggles.
///
/// The page is loaded before toggling so acknowledged changes land in the
/// list; `--show` prints that list afterwards.
#[derive(Args)]
pub struct ToggleArgs {
    /// Recipe ids
    #[arg(required = true)]
    ids: Vec<u64>,

    /// Page of the view to load before toggling (1-based)
    #[arg(long, short, default_value = "1")]
    page: u32,

    /// Print the updated page after the toggles
    #[arg(long)]
    show: bool,
}

/// Builds a recipe list for one CLI invocation, alerting on stderr.
fn recipe_list(
    config: &Config,
    scope: ViewScope,
    author: Option<u64>,
) -> Result<(Arc<FoodgramClient>, RecipeListSynchronizer), Box<dyn std::error::Error>> {
    let client = Arc::new(FoodgramClient::from_config(config)?);
    let list = RecipeListSynchronizer::new(
        client.clone(),
        Arc::new(ConsoleNotifier),
        scope,
        config.page_size.value,
    )
    .with_author(author);
    Ok((client, list))
}

/// Prints one line per toggle and fails if any request failed.
fn report_outcomes(
    verb: &str,
    outcomes: &[(RecipeId, ToggleOutcome)],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut failed = 0;
    for (id, outcome) in outcomes {
        match outcome {
            ToggleOutcome::Applied => println!("#{}: {}", id, verb),
            ToggleOutcome::AlreadyPending => println!("#{}: already in progress", id),
            ToggleOutcome::Stale => println!("#{}: skipped", id),
            ToggleOutcome::Failed(_) => failed += 1,
        }
    }
    if failed > 0 {
        return Err(format!("{} of {} request(s) failed", failed, outcomes.len()).into());
    }
    Ok(())
}
