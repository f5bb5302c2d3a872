//! Followed author commands.

use clap::{Args, Subcommand};

use foodgram::api::{RecipeApi, SubscriptionQuery};
use foodgram::config::Config;
use foodgram::models::page_count;
use foodgram::ViewScope;

use super::{recipe_list, OutputFormat};

#[derive(Args)]
pub struct SubscriptionsCommand {
    #[command(subcommand)]
    pub command: SubscriptionsSubcommand,
}

#[derive(Subcommand)]
pub enum SubscriptionsSubcommand {
    /// List followed authors
    List {
        /// Page number (1-based)
        #[arg(long, short, default_value = "1")]
        page: u32,

        /// Recipes shown per author
        #[arg(long, short, default_value = "3")]
        recipes_limit: u32,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Follow an author
    Add {
        /// Author user id
        id: u64,
    },
    /// Stop following an author
    Remove {
        /// Author user id
        id: u64,
    },
}

impl SubscriptionsCommand {
    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let (client, _) = recipe_list(config, ViewScope::Subscriptions, None)?;

        match &self.command {
            SubscriptionsSubcommand::List {
                page,
                recipes_limit,
                format,
            } => {
                let query = SubscriptionQuery::new(*page, config.page_size.value)
                    .with_recipes_limit(Some(*recipes_limit));
                let authors = client.list_subscriptions(&query).await?;

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&authors)?)
                    }
                    OutputFormat::Text => {
                        println!(
                            "Subscriptions: page {} of {}, {} total",
                            query.page,
                            page_count(authors.count, query.limit),
                            authors.count
                        );
                        if authors.results.is_empty() {
                            println!("  (none)");
                        }
                        for author in &authors.results {
                            println!(
                                "  @{} {} ({} recipes)",
                                author.username,
                                author.author().display_name(),
                                author.recipes_count
                            );
                            for recipe in &author.recipes {
                                println!("      {}", recipe);
                            }
                        }
                    }
                }
                Ok(())
            }
            SubscriptionsSubcommand::Add { id } => {
                client.subscribe(*id).await?;
                println!("Subscribed to author #{}", id);
                Ok(())
            }
            SubscriptionsSubcommand::Remove { id } => {
                client.unsubscribe(*id).await?;
                println!("Unsubscribed from author #{}", id);
                Ok(())
            }
        }
    }
}
