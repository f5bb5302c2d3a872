//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use foodgram::api::{ApiError, RecipeApi, RecipeQuery, SubscriptionQuery};
use foodgram::models::{Page, RecipeId, RecipeSummary, Subscription, Tag};
use foodgram::sync::Notifier;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AddFavorite(RecipeId),
    RemoveFavorite(RecipeId),
    AddOrder(RecipeId),
    RemoveOrder(RecipeId),
    ListRecipes(RecipeQuery),
    ListSubscriptions(SubscriptionQuery),
    Subscribe(u64),
    Unsubscribe(u64),
}

/// In-memory [`RecipeApi`] that records calls and can hold them in flight.
#[derive(Default)]
pub struct MockApi {
    calls: Mutex<Vec<Call>>,
    failures: Mutex<HashMap<RecipeId, ApiError>>,
    pages: Mutex<HashMap<u32, Page<RecipeSummary>>>,
    subscriptions: Mutex<HashMap<u32, Page<Subscription>>>,
    /// List calls for these pages fail
    page_failures: Mutex<HashMap<u32, ApiError>>,
    /// When set, every call waits for a permit before answering
    gate: Option<Semaphore>,
    in_flight: AtomicUsize,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A mock whose calls block until [`MockApi::release`] is called.
    pub fn gated() -> Arc<Self> {
        Arc::new(Self {
            gate: Some(Semaphore::new(0)),
            ..Default::default()
        })
    }

    /// Every toggle for `id` fails with `error`.
    pub fn fail_for(&self, id: RecipeId, error: ApiError) {
        self.failures.lock().unwrap().insert(id, error);
    }

    pub fn clear_failures(&self) {
        self.failures.lock().unwrap().clear();
    }

    /// Serves `recipes` for `GET recipes/?page=<page>`.
    pub fn set_page(&self, page: u32, count: u64, recipes: Vec<RecipeSummary>) {
        self.pages
            .lock()
            .unwrap()
            .insert(page, Page::new(count, recipes));
    }

    /// Serves `authors` for `GET users/subscriptions/?page=<page>`.
    pub fn set_subscriptions(&self, page: u32, count: u64, authors: Vec<Subscription>) {
        self.subscriptions
            .lock()
            .unwrap()
            .insert(page, Page::new(count, authors));
    }

    /// Every list call for `page` fails with `error`.
    pub fn fail_page(&self, page: u32, error: ApiError) {
        self.page_failures.lock().unwrap().insert(page, error);
    }

    /// Lets `n` held calls through.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Yields until `n` calls are waiting at the gate.
    pub async fn wait_in_flight(&self, n: usize) {
        while self.in_flight() < n {
            tokio::task::yield_now().await;
        }
    }

    async fn toggle(&self, call: Call, id: RecipeId) -> Result<(), ApiError> {
        self.record(call).await;
        match self.failures.lock().unwrap().get(&id) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn page_failure(&self, page: u32) -> Result<(), ApiError> {
        match self.page_failures.lock().unwrap().get(&page) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    async fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
        if let Some(gate) = &self.gate {
            self.in_flight.fetch_add(1, Ordering::SeqCst);
            gate.acquire().await.unwrap().forget();
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl RecipeApi for MockApi {
    async fn add_to_favorites(&self, id: RecipeId) -> Result<(), ApiError> {
        self.toggle(Call::AddFavorite(id), id).await
    }

    async fn remove_from_favorites(&self, id: RecipeId) -> Result<(), ApiError> {
        self.toggle(Call::RemoveFavorite(id), id).await
    }

    async fn add_to_orders(&self, id: RecipeId) -> Result<(), ApiError> {
        self.toggle(Call::AddOrder(id), id).await
    }

    async fn remove_from_orders(&self, id: RecipeId) -> Result<(), ApiError> {
        self.toggle(Call::RemoveOrder(id), id).await
    }

    async fn list_recipes(&self, query: &RecipeQuery) -> Result<Page<RecipeSummary>, ApiError> {
        self.record(Call::ListRecipes(query.clone())).await;
        self.page_failure(query.page)?;
        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(&query.page)
            .cloned()
            .unwrap_or_else(|| Page::new(0, Vec::new())))
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        Ok(Vec::new())
    }

    async fn download_shopping_cart(&self) -> Result<Vec<u8>, ApiError> {
        Ok(b"%PDF-1.4".to_vec())
    }

    async fn get_link(&self, id: RecipeId) -> Result<String, ApiError> {
        Ok(format!("http://localhost/recipes/{}/", id))
    }

    async fn list_subscriptions(
        &self,
        query: &SubscriptionQuery,
    ) -> Result<Page<Subscription>, ApiError> {
        self.record(Call::ListSubscriptions(query.clone())).await;
        self.page_failure(query.page)?;
        Ok(self
            .subscriptions
            .lock()
            .unwrap()
            .get(&query.page)
            .cloned()
            .unwrap_or_else(|| Page::new(0, Vec::new())))
    }

    async fn subscribe(&self, author_id: u64) -> Result<(), ApiError> {
        self.record(Call::Subscribe(author_id)).await;
        Ok(())
    }

    async fn unsubscribe(&self, author_id: u64) -> Result<(), ApiError> {
        self.record(Call::Unsubscribe(author_id)).await;
        Ok(())
    }
}

/// Notifier that keeps every alert for inspection.
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// Shorthand for a recipe with both flags given.
pub fn recipe(id: RecipeId, favorited: bool, in_cart: bool) -> RecipeSummary {
    RecipeSummary::new(id, format!("Recipe {}", id))
        .with_cooking_time(15)
        .with_favorited(favorited)
        .with_in_cart(in_cart)
}

/// A followed author with the given recipes.
pub fn followed(id: u64, recipes: Vec<RecipeSummary>) -> Subscription {
    Subscription {
        id,
        username: format!("author{}", id),
        email: format!("author{}@example.com", id),
        first_name: String::new(),
        last_name: String::new(),
        is_subscribed: true,
        recipes_count: recipes.len() as u64,
        recipes,
    }
}
