//! Recipe list synchronizer.
//!
//! Holds the recipe list of one view and keeps it in step with the server:
//! a toggle issues one request and, once the server acknowledges it, replaces
//! the list with an updated copy.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::collection::RecipeCollection;
use super::notifier::Notifier;
use crate::api::{ApiError, RecipeApi, RecipeQuery, SubscriptionQuery};
use crate::models::{RecipeId, RecipeSummary, ViewScope};

/// Callback run after a successful cart toggle, with the new cart state.
pub type CartCallback = Box<dyn FnOnce(bool) + Send>;

/// Which flag a toggle changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKind {
    Favorite,
    Cart,
}

/// What happened to a toggle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Server acknowledged; the local list reflects it
    Applied,
    /// The same toggle for this recipe is still in flight; no request sent
    AlreadyPending,
    /// The view was closed before or while the request ran; result ignored
    Stale,
    /// Server or transport failure; the user was alerted, nothing changed
    Failed(ApiError),
}

impl ToggleOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ToggleOutcome::Applied)
    }
}

#[derive(Debug, Default)]
struct State {
    collection: RecipeCollection,
    tags: Vec<String>,
    pending: HashSet<(RecipeId, ToggleKind)>,
    /// Bumped on close; completions from an older generation are dropped
    generation: u64,
    closed: bool,
    /// Sequence of the most recently started load
    load_seq: u64,
}

/// Keeps the recipe list of a single view in sync with the backend.
///
/// Share it behind an `Arc`; every method takes `&self`. The internal lock is
/// never held across a request.
pub struct RecipeListSynchronizer {
    api: Arc<dyn RecipeApi>,
    notifier: Arc<dyn Notifier>,
    scope: ViewScope,
    page_size: u32,
    author: Option<u64>,
    recipes_limit: Option<u32>,
    state: Mutex<State>,
}

/// Clears a pending toggle when the request finishes or its future is dropped.
struct PendingGuard<'a> {
    sync: &'a RecipeListSynchronizer,
    key: (RecipeId, ToggleKind),
    generation: u64,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.sync.state();
        if state.generation == self.generation {
            state.pending.remove(&self.key);
        }
    }
}

impl RecipeListSynchronizer {
    /// Creates an empty list for a freshly mounted view.
    pub fn new(
        api: Arc<dyn RecipeApi>,
        notifier: Arc<dyn Notifier>,
        scope: ViewScope,
        page_size: u32,
    ) -> Self {
        Self {
            api,
            notifier,
            scope,
            page_size,
            author: None,
            recipes_limit: None,
            state: Mutex::new(State::default()),
        }
    }

    /// Restricts loaded pages to one author's recipes.
    pub fn with_author(mut self, author: Option<u64>) -> Self {
        self.author = author;
        self
    }

    /// Caps the recipes listed per followed author in the subscriptions scope.
    pub fn with_recipes_limit(mut self, recipes_limit: Option<u32>) -> Self {
        self.recipes_limit = recipes_limit;
        self
    }

    pub fn scope(&self) -> ViewScope {
        self.scope
    }

    /// Current list value. Cheap; shares the underlying recipes.
    pub fn snapshot(&self) -> RecipeCollection {
        self.state().collection.clone()
    }

    pub fn recipes(&self) -> Vec<RecipeSummary> {
        self.state().collection.recipes().to_vec()
    }

    pub fn count(&self) -> u64 {
        self.state().collection.count()
    }

    pub fn page(&self) -> u32 {
        self.state().collection.page()
    }

    pub fn tags(&self) -> Vec<String> {
        self.state().tags.clone()
    }

    pub fn is_pending(&self, id: RecipeId, kind: ToggleKind) -> bool {
        self.state().pending.contains(&(id, kind))
    }

    pub fn is_closed(&self) -> bool {
        self.state().closed
    }

    /// Moves the page cursor; pages start at 1.
    pub fn set_page(&self, page: u32) {
        let mut state = self.state();
        state.collection = state.collection.with_page(page);
    }

    /// Takes the tag selection for the next load and rewinds to page 1.
    pub fn set_tags(&self, tags: Vec<String>) {
        let mut state = self.state();
        state.tags = tags;
        state.collection = state.collection.with_page(1);
    }

    /// Replaces the list with recipes fetched elsewhere, keeping the cursor.
    pub fn replace_collection(&self, recipes: Vec<RecipeSummary>, count: u64) {
        let mut state = self.state();
        let page = state.collection.page();
        state.collection = RecipeCollection::from_page(recipes, count, page);
    }

    /// Marks the view as unmounted.
    ///
    /// Requests already sent still run to completion on the server, but
    /// their results no longer touch the list or raise alerts.
    pub fn close(&self) {
        let mut state = self.state();
        state.closed = true;
        state.generation += 1;
        state.pending.clear();
        tracing::debug!(scope = %self.scope, "recipe list closed");
    }

    /// Fetches the current page for this view's scope, tags and author.
    ///
    /// The subscriptions scope lists followed authors instead: a page holds
    /// the recipes of one page of authors, `count` is the number of followed
    /// authors, and tag and author filters do not apply. A load that
    /// finishes after a newer one has started is discarded.
    pub async fn load_page(&self) -> Result<(), ApiError> {
        let (page, tags, seq, generation) = {
            let mut state = self.state();
            if state.closed {
                return Ok(());
            }
            state.load_seq += 1;
            (
                state.collection.page(),
                state.tags.clone(),
                state.load_seq,
                state.generation,
            )
        };

        tracing::debug!(scope = %self.scope, page, "loading recipes");
        let result = self.fetch(page, tags).await;

        let applied = {
            let mut state = self.state();
            if state.generation != generation || state.load_seq != seq {
                None
            } else {
                Some(result.map(|(recipes, count)| {
                    state.collection = RecipeCollection::from_page(recipes, count, page);
                }))
            }
        };

        match applied {
            None => {
                tracing::debug!(page, "discarding superseded load");
                Ok(())
            }
            Some(Ok(())) => Ok(()),
            Some(Err(e)) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    async fn fetch(
        &self,
        page: u32,
        tags: Vec<String>,
    ) -> Result<(Vec<RecipeSummary>, u64), ApiError> {
        if self.scope == ViewScope::Subscriptions {
            if !tags.is_empty() || self.author.is_some() {
                tracing::debug!("tag and author filters ignored for subscriptions");
            }
            let query = SubscriptionQuery::new(page, self.page_size)
                .with_recipes_limit(self.recipes_limit);
            let authors = self.api.list_subscriptions(&query).await?;
            let recipes = authors
                .results
                .into_iter()
                .flat_map(|author| author.into_recipes())
                .collect();
            return Ok((recipes, authors.count));
        }

        let query = RecipeQuery::for_scope(self.scope, page, self.page_size)
            .with_tags(tags)
            .with_author(self.author);
        let recipes = self.api.list_recipes(&query).await?;
        Ok((recipes.results, recipes.count))
    }

    /// Adds the recipe to favorites (`desired = true`) or removes it.
    ///
    /// After the server acknowledges an un-favorite in the favorites view the
    /// recipe leaves the list and the count drops by one; everywhere else
    /// only the flag changes. Recipes that are not loaded are left alone.
    pub async fn toggle_favorite(&self, id: RecipeId, desired: bool) -> ToggleOutcome {
        let guard = match self.begin(id, ToggleKind::Favorite) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };

        let result = if desired {
            self.api.add_to_favorites(id).await
        } else {
            self.api.remove_from_favorites(id).await
        };

        {
            let mut state = self.state();
            if state.generation != guard.generation {
                return ToggleOutcome::Stale;
            }
            if result.is_ok() {
                let updated = if self.scope.removes_unfavorited() && !desired {
                    state.collection.without(id)
                } else {
                    state.collection.with_favorited(id, desired)
                };
                match updated {
                    Some(collection) => {
                        state.collection = collection;
                        tracing::info!(
                            id,
                            favorited = desired,
                            scope = %self.scope,
                            "favorite updated"
                        );
                    }
                    None => {
                        tracing::debug!(id, favorited = desired, "recipe not listed");
                    }
                }
            }
        }
        drop(guard);

        self.finish(result)
    }

    /// Adds the recipe to the shopping cart (`desired = true`) or removes it.
    ///
    /// Cart membership never removes a recipe from the list. `on_complete`
    /// runs with `desired` once the list is updated, and only on success.
    pub async fn toggle_cart(
        &self,
        id: RecipeId,
        desired: bool,
        on_complete: Option<CartCallback>,
    ) -> ToggleOutcome {
        let guard = match self.begin(id, ToggleKind::Cart) {
            Ok(guard) => guard,
            Err(outcome) => return outcome,
        };

        let result = if desired {
            self.api.add_to_orders(id).await
        } else {
            self.api.remove_from_orders(id).await
        };

        {
            let mut state = self.state();
            if state.generation != guard.generation {
                return ToggleOutcome::Stale;
            }
            if result.is_ok() {
                let updated = state.collection.with_in_cart(id, desired);
                match updated {
                    Some(collection) => {
                        state.collection = collection;
                        tracing::info!(id, in_cart = desired, "cart updated");
                    }
                    None => {
                        tracing::debug!(id, in_cart = desired, "recipe not listed");
                    }
                }
            }
        }
        drop(guard);

        let outcome = self.finish(result);
        if outcome.is_applied() {
            if let Some(callback) = on_complete {
                callback(desired);
            }
        }
        outcome
    }

    /// Registers an in-flight toggle, or says why it must not be sent.
    fn begin(&self, id: RecipeId, kind: ToggleKind) -> Result<PendingGuard<'_>, ToggleOutcome> {
        let mut state = self.state();
        if state.closed {
            return Err(ToggleOutcome::Stale);
        }
        if !state.pending.insert((id, kind)) {
            tracing::debug!(id, ?kind, "toggle already in flight");
            return Err(ToggleOutcome::AlreadyPending);
        }
        Ok(PendingGuard {
            sync: self,
            key: (id, kind),
            generation: state.generation,
        })
    }

    fn finish(&self, result: Result<(), ApiError>) -> ToggleOutcome {
        match result {
            Ok(()) => ToggleOutcome::Applied,
            Err(e) => {
                self.report(&e);
                ToggleOutcome::Failed(e)
            }
        }
    }

    /// Structured rejections are shown as-is; anything else gets a generic
    /// message and a warning in the log.
    fn report(&self, error: &ApiError) {
        match error.errors() {
            Some(message) => self.notifier.alert(message),
            None => {
                tracing::warn!(%error, "request failed");
                self.notifier.alert(&format!("Request failed: {}", error));
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
