//! Shopping cart commands.

use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use clap::{Args, Subcommand};
use futures::future::join_all;

use foodgram::api::{RecipeApi, RecipeQuery};
use foodgram::config::Config;
use foodgram::sync::CartCallback;
use foodgram::ViewScope;

use super::recipes::print_collection;
use super::{recipe_list, report_outcomes, OutputFormat, ToggleArgs};

#[derive(Args)]
pub struct CartCommand {
    #[command(subcommand)]
    pub command: CartSubcommand,
}

#[derive(Subcommand)]
pub enum CartSubcommand {
    /// Add recipes to the shopping cart
    Add(ToggleArgs),
    /// Remove recipes from the shopping cart
    Remove(ToggleArgs),
    /// List recipes in the shopping cart
    List {
        /// Page number (1-based)
        #[arg(long, short, default_value = "1")]
        page: u32,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Download the shopping list PDF
    Download {
        /// Where to write the PDF
        #[arg(long, short, default_value = "shopping-list.pdf")]
        output: PathBuf,
    },
}

impl CartCommand {
    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            CartSubcommand::Add(args) => toggle(config, args, true).await,
            CartSubcommand::Remove(args) => toggle(config, args, false).await,
            CartSubcommand::List { page, format } => {
                let (client, list) = recipe_list(config, ViewScope::Feed, None)?;
                list.set_page(*page);
                let query = RecipeQuery::new(list.page(), config.page_size.value).in_shopping_cart();
                let fetched = client.list_recipes(&query).await?;
                list.replace_collection(fetched.results, fetched.count);
                print_collection(&list.snapshot(), list.scope(), config.page_size.value, format)
            }
            CartSubcommand::Download { output } => {
                let (client, _) = recipe_list(config, ViewScope::Feed, None)?;
                let pdf = client.download_shopping_cart().await?;
                std::fs::write(output, &pdf)?;
                println!("Saved shopping list to {} ({} bytes)", output.display(), pdf.len());
                Ok(())
            }
        }
    }
}

async fn toggle(
    config: &Config,
    args: &ToggleArgs,
    desired: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_, list) = recipe_list(config, ViewScope::Feed, None)?;
    list.set_page(args.page);
    list.load_page().await?;
    let verb = if desired {
        "added to shopping cart"
    } else {
        "removed from shopping cart"
    };

    // Net change in cart size, counted from completion callbacks.
    let delta = Arc::new(AtomicI64::new(0));

    let list = &list;
    let outcomes = join_all(args.ids.iter().map(|&id| {
        let delta = Arc::clone(&delta);
        async move {
            let on_complete: CartCallback = Box::new(move |in_cart: bool| {
                delta.fetch_add(if in_cart { 1 } else { -1 }, Ordering::SeqCst);
            });
            (id, list.toggle_cart(id, desired, Some(on_complete)).await)
        }
    }))
    .await;

    let result = report_outcomes(verb, &outcomes);
    let delta = delta.load(Ordering::SeqCst);
    if delta != 0 {
        println!("Shopping cart: {:+} recipe(s)", delta);
    }
    if args.show {
        println!();
        print_collection(
            &list.snapshot(),
            list.scope(),
            config.page_size.value,
            &OutputFormat::Text,
        )?;
    }
    result
}
