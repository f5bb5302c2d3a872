//! HTTP client for the Foodgram REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response};
use serde::Deserialize;

use super::{ApiError, RecipeApi, RecipeQuery, SubscriptionQuery};
use crate::config::Config;
use crate::models::{Page, RecipeId, RecipeSummary, Subscription, Tag};

/// Body of `GET recipes/{id}/get-link/`.
#[derive(Debug, Deserialize)]
struct ShortLink {
    #[serde(rename = "short-link")]
    short_link: String,
}

/// reqwest-backed [`RecipeApi`].
#[derive(Debug, Clone)]
pub struct FoodgramClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl FoodgramClient {
    /// Creates a client with reqwest's default settings.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            token,
            http: reqwest::Client::new(),
        }
    }

    /// Creates a client from config, applying the request timeout.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs.value))
            .build()
            .map_err(|e| ApiError::Http(e.to_string()))?;

        Ok(Self {
            base_url: normalize_base_url(&config.api_url.value),
            token: config.token.value.clone(),
            http,
        })
    }

    /// Returns the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Sends the request with auth attached, turning non-2xx into errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Token {}", token)),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "request rejected");
        Err(ApiError::from_body(status.as_u16(), &body))
    }
}

#[async_trait]
impl RecipeApi for FoodgramClient {
    async fn add_to_favorites(&self, id: RecipeId) -> Result<(), ApiError> {
        let url = self.url(&format!("recipes/{}/favorite/", id));
        self.send(self.http.post(&url)).await?;
        Ok(())
    }

    async fn remove_from_favorites(&self, id: RecipeId) -> Result<(), ApiError> {
        let url = self.url(&format!("recipes/{}/favorite/", id));
        self.send(self.http.delete(&url)).await?;
        Ok(())
    }

    async fn add_to_orders(&self, id: RecipeId) -> Result<(), ApiError> {
        let url = self.url(&format!("recipes/{}/shopping_cart/", id));
        self.send(self.http.post(&url)).await?;
        Ok(())
    }

    async fn remove_from_orders(&self, id: RecipeId) -> Result<(), ApiError> {
        let url = self.url(&format!("recipes/{}/shopping_cart/", id));
        self.send(self.http.delete(&url)).await?;
        Ok(())
    }

    async fn list_recipes(&self, query: &RecipeQuery) -> Result<Page<RecipeSummary>, ApiError> {
        let url = self.url("recipes/");
        let response = self
            .send(self.http.get(&url).query(&query.to_pairs()))
            .await?;
        Ok(response.json().await?)
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        let url = self.url("tags/");
        let response = self.send(self.http.get(&url)).await?;
        Ok(response.json().await?)
    }

    async fn download_shopping_cart(&self) -> Result<Vec<u8>, ApiError> {
        let url = self.url("recipes/download_shopping_cart/");
        let response = self.send(self.http.get(&url)).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn get_link(&self, id: RecipeId) -> Result<String, ApiError> {
        let url = self.url(&format!("recipes/{}/get-link/", id));
        let response = self.send(self.http.get(&url)).await?;
        let link: ShortLink = response.json().await?;
        Ok(link.short_link)
    }

    async fn list_subscriptions(
        &self,
        query: &SubscriptionQuery,
    ) -> Result<Page<Subscription>, ApiError> {
        let url = self.url("users/subscriptions/");
        let response = self
            .send(self.http.get(&url).query(&query.to_pairs()))
            .await?;
        Ok(response.json().await?)
    }

    async fn subscribe(&self, author_id: u64) -> Result<(), ApiError> {
        let url = self.url(&format!("users/{}/subscribe/", author_id));
        self.send(self.http.post(&url)).await?;
        Ok(())
    }

    async fn unsubscribe(&self, author_id: u64) -> Result<(), ApiError> {
        let url = self.url(&format!("users/{}/subscribe/", author_id));
        self.send(self.http.delete(&url)).await?;
        Ok(())
    }
}

/// Adds a scheme to bare hosts and strips trailing slashes.
fn normalize_base_url(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}
