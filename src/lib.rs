//! Foodgram client library.
//!
//! Recipe lists, favorites and the shopping cart on top of the Foodgram
//! REST API.

pub mod api;
pub mod config;
pub mod models;
pub mod sync;

pub use api::{ApiError, FoodgramClient, RecipeApi, RecipeQuery, SubscriptionQuery};
pub use config::{Config, ConfigError, ConfigSource, ConfigValue};
pub use models::{
    Author, Page, RecipeId, RecipeSummary, Subscription, Tag, TagFilter, ViewScope,
};
pub use sync::{
    ConsoleNotifier, Notifier, RecipeCollection, RecipeListSynchronizer, ToggleKind,
    ToggleOutcome,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
