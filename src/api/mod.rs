//! Foodgram REST API.
//!
//! [`RecipeApi`] is the set of backend capabilities the recipe list needs;
//! [`FoodgramClient`] implements it over HTTP with reqwest.
//!
//! # Endpoints
//!
//! - `GET recipes/` - paginated recipe list (`page`, `limit`, `tags`, `author`,
//!   `is_favorited`, `is_in_shopping_cart`)
//! - `POST|DELETE recipes/{id}/favorite/`
//! - `POST|DELETE recipes/{id}/shopping_cart/`
//! - `GET recipes/download_shopping_cart/` - PDF shopping list
//! - `GET recipes/{id}/get-link/`
//! - `GET tags/`
//! - `GET users/subscriptions/` - followed authors with their recipes
//!   (`page`, `limit`, `recipes_limit`)
//! - `POST|DELETE users/{id}/subscribe/`

mod client;
mod error;
mod query;

use async_trait::async_trait;

use crate::models::{Page, RecipeId, RecipeSummary, Subscription, Tag};

pub use client::FoodgramClient;
pub use error::ApiError;
pub use query::{RecipeQuery, SubscriptionQuery};

/// Backend capabilities consumed by the recipe list synchronizer.
///
/// Each method issues exactly one request and never retries.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    async fn add_to_favorites(&self, id: RecipeId) -> Result<(), ApiError>;

    async fn remove_from_favorites(&self, id: RecipeId) -> Result<(), ApiError>;

    /// Adds the recipe to the shopping cart.
    async fn add_to_orders(&self, id: RecipeId) -> Result<(), ApiError>;

    /// Removes the recipe from the shopping cart.
    async fn remove_from_orders(&self, id: RecipeId) -> Result<(), ApiError>;

    async fn list_recipes(&self, query: &RecipeQuery) -> Result<Page<RecipeSummary>, ApiError>;

    async fn list_tags(&self) -> Result<Vec<Tag>, ApiError>;

    /// Returns the shopping list PDF for every recipe in the cart.
    async fn download_shopping_cart(&self) -> Result<Vec<u8>, ApiError>;

    /// Returns the shareable link for a recipe.
    async fn get_link(&self, id: RecipeId) -> Result<String, ApiError>;

    /// Lists the authors the current user follows, with their recipes.
    async fn list_subscriptions(
        &self,
        query: &SubscriptionQuery,
    ) -> Result<Page<Subscription>, ApiError>;

    async fn subscribe(&self, author_id: u64) -> Result<(), ApiError>;

    async fn unsubscribe(&self, author_id: u64) -> Result<(), ApiError>;
}
