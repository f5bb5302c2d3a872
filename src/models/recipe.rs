use serde::{Deserialize, Serialize};
use std::fmt;

use super::tag::Tag;

/// Recipe id as assigned by the server.
pub type RecipeId = u64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_subscribed: bool,
}

impl Author {
    /// "First Last", falling back to the username when both are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Lightweight recipe as returned by list endpoints.
///
/// Only `id`, `is_favorited` and `is_in_shopping_cart` matter to the
/// synchronizer; the rest is carried for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub cooking_time: u32, // minutes
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub is_in_shopping_cart: bool,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub text: String,
}

impl RecipeSummary {
    pub fn new(id: RecipeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: None,
            cooking_time: 0,
            is_favorited: false,
            is_in_shopping_cart: false,
            tags: Vec::new(),
            author: None,
            text: String::new(),
        }
    }

    pub fn with_cooking_time(mut self, minutes: u32) -> Self {
        self.cooking_time = minutes;
        self
    }

    pub fn with_favorited(mut self, favorited: bool) -> Self {
        self.is_favorited = favorited;
        self
    }

    pub fn with_in_cart(mut self, in_cart: bool) -> Self {
        self.is_in_shopping_cart = in_cart;
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }
}

impl fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let favorite = if self.is_favorited { "*" } else { " " };
        let cart = if self.is_in_shopping_cart { "c" } else { " " };
        write!(
            f,
            "[{}{}] #{} {} ({} min)",
            favorite, cart, self.id, self.name, self.cooking_time
        )?;
        if !self.tags.is_empty() {
            let slugs: Vec<&str> = self.tags.iter().map(|t| t.slug.as_str()).collect();
            write!(f, " [{}]", slugs.join(", "))?;
        }
        if let Some(author) = &self.author {
            write!(f, " by {}", author.display_name())?;
        }
        Ok(())
    }
}
