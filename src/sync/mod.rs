//! Recipe list synchronization.
//!
//! A [`RecipeListSynchronizer`] owns the recipe list of one view (feed,
//! favorites, subscriptions). The view's [`ViewScope`](crate::models::ViewScope)
//! is passed in explicitly and decides what an un-favorite does to the list.
//!
//! # Concurrency
//!
//! - At most one request per `(recipe, ToggleKind)` is in flight; repeats
//!   return [`ToggleOutcome::AlreadyPending`] without touching the network.
//! - [`RecipeListSynchronizer::close`] marks the view unmounted; results that
//!   arrive afterwards are reported as [`ToggleOutcome::Stale`] and ignored.
//! - The list itself is an immutable [`RecipeCollection`] value that is
//!   swapped on every change.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use foodgram::api::FoodgramClient;
//! use foodgram::models::ViewScope;
//! use foodgram::sync::{ConsoleNotifier, RecipeListSynchronizer};
//!
//! # async fn run() -> Result<(), foodgram::api::ApiError> {
//! let client = FoodgramClient::new("http://localhost:8000/api", Some("token".into()));
//! let list = RecipeListSynchronizer::new(
//!     Arc::new(client),
//!     Arc::new(ConsoleNotifier),
//!     ViewScope::Favorites,
//!     6,
//! );
//! list.load_page().await?;
//! list.toggle_favorite(42, false).await;
//! # Ok(())
//! # }
//! ```

mod collection;
mod notifier;
mod synchronizer;

pub use collection::RecipeCollection;
pub use notifier::{ConsoleNotifier, Notifier};
pub use synchronizer::{CartCallback, RecipeListSynchronizer, ToggleKind, ToggleOutcome};
