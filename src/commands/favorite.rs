//! Favorite toggling commands.

use clap::{Args, Subcommand};
use futures::future::join_all;

use foodgram::config::Config;
use foodgram::ViewScope;

use super::recipes::print_collection;
use super::{recipe_list, report_outcomes, OutputFormat, ToggleArgs};

#[derive(Args)]
pub struct FavoriteCommand {
    #[command(subcommand)]
    pub command: FavoriteSubcommand,

    /// View the toggles apply to; decides whether removed favorites leave the list
    #[arg(long, short, global = true, default_value = "feed")]
    scope: ViewScope,
}

#[derive(Subcommand)]
pub enum FavoriteSubcommand {
    /// Add recipes to favorites
    Add(ToggleArgs),
    /// Remove recipes from favorites
    Remove(ToggleArgs),
}

impl FavoriteCommand {
    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let (args, desired, verb) = match &self.command {
            FavoriteSubcommand::Add(args) => (args, true, "added to favorites"),
            FavoriteSubcommand::Remove(args) => (args, false, "removed from favorites"),
        };

        let (_, list) = recipe_list(config, self.scope, None)?;
        list.set_page(args.page);
        list.load_page().await?;

        let list = &list;
        let outcomes = join_all(
            args.ids
                .iter()
                .map(|&id| async move { (id, list.toggle_favorite(id, desired).await) }),
        )
        .await;

        let result = report_outcomes(verb, &outcomes);
        if args.show {
            println!();
            print_collection(
                &list.snapshot(),
                self.scope,
                config.page_size.value,
                &OutputFormat::Text,
            )?;
        }
        result
    }
}
