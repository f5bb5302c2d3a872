//! Recipe list commands.

use clap::{Args, Subcommand};

use foodgram::api::RecipeApi;
use foodgram::config::Config;
use foodgram::models::page_count;
use foodgram::{RecipeCollection, TagFilter, ViewScope};

use super::{recipe_list, OutputFormat};

#[derive(Args)]
pub struct RecipesCommand {
    #[command(subcommand)]
    pub command: RecipesSubcommand,
}

#[derive(Subcommand)]
pub enum RecipesSubcommand {
    /// List recipes
    List {
        /// View to list: feed, favorites or subscriptions
        #[arg(long, short, default_value = "feed")]
        scope: ViewScope,

        /// Only recipes with these tag slugs (repeatable)
        #[arg(long, short)]
        tag: Vec<String>,

        /// Page number (1-based)
        #[arg(long, short, default_value = "1")]
        page: u32,

        /// Only recipes by this author id
        #[arg(long, short)]
        author: Option<u64>,

        /// With --scope subscriptions, recipes shown per followed author
        #[arg(long)]
        recipes_limit: Option<u32>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List available tags
    Tags {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the shareable link of a recipe
    Link {
        /// Recipe id
        id: u64,
    },
}

impl RecipesCommand {
    pub async fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            RecipesSubcommand::List {
                scope,
                tag,
                page,
                author,
                recipes_limit,
                format,
            } => {
                let (client, list) = recipe_list(config, *scope, *author)?;
                let list = list.with_recipes_limit(*recipes_limit);

                if !tag.is_empty() {
                    let mut filter = TagFilter::from_tags(client.list_tags().await?);
                    filter.select_only(tag);
                    let selected = filter.selected_slugs();
                    for slug in tag.iter().filter(|s| !selected.contains(*s)) {
                        eprintln!("Unknown tag '{}', ignoring", slug);
                    }
                    if selected.is_empty() {
                        return Err("None of the given tags exist".into());
                    }
                    list.set_tags(selected);
                }

                list.set_page(*page);
                list.load_page().await?;
                print_collection(&list.snapshot(), *scope, config.page_size.value, format)
            }
            RecipesSubcommand::Tags { format } => {
                let (client, _) = recipe_list(config, ViewScope::Feed, None)?;
                let tags = client.list_tags().await?;
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tags)?),
                    OutputFormat::Text => {
                        if tags.is_empty() {
                            println!("No tags found.");
                        }
                        for tag in tags {
                            println!("{:>4}  {:<16} {}", tag.id, tag.slug, tag.name);
                        }
                    }
                }
                Ok(())
            }
            RecipesSubcommand::Link { id } => {
                let (client, _) = recipe_list(config, ViewScope::Feed, None)?;
                println!("{}", client.get_link(*id).await?);
                Ok(())
            }
        }
    }
}

/// Prints a loaded list with its page position.
pub(super) fn print_collection(
    collection: &RecipeCollection,
    scope: ViewScope,
    page_size: u32,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let pages = page_count(collection.count(), page_size);
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "scope": scope,
                "page": collection.page(),
                "pages": pages,
                "count": collection.count(),
                "results": collection.recipes(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            let counted = match scope {
                ViewScope::Subscriptions => "followed authors",
                _ => "total",
            };
            println!(
                "Recipes ({}): page {} of {}, {} {}",
                scope,
                collection.page(),
                pages,
                collection.count(),
                counted
            );
            if collection.is_empty() {
                println!("  (none)");
            }
            for recipe in collection.recipes() {
                println!("  {}", recipe);
            }
        }
    }
    Ok(())
}
