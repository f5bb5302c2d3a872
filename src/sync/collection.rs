//! Immutable recipe list value.

use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{RecipeId, RecipeSummary};

/// Recipes loaded for the current view, plus the total match count and the
/// page cursor.
///
/// Updates never touch an existing value: every `with_*`/`without` call
/// builds a new entry and a new list, so a snapshot handed out earlier keeps
/// showing what it showed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCollection {
    recipes: Arc<[RecipeSummary]>,
    count: u64,
    page: u32,
}

impl Default for RecipeCollection {
    fn default() -> Self {
        Self {
            recipes: Arc::from(Vec::new()),
            count: 0,
            page: 1,
        }
    }
}

impl RecipeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from a fetched page.
    ///
    /// Ids must be unique within a collection; a repeated id keeps its first
    /// occurrence.
    pub fn from_page(recipes: Vec<RecipeSummary>, count: u64, page: u32) -> Self {
        let mut seen = HashSet::new();
        let recipes: Vec<RecipeSummary> = recipes
            .into_iter()
            .filter(|r| {
                let fresh = seen.insert(r.id);
                if !fresh {
                    tracing::debug!(id = r.id, "dropping duplicate recipe");
                }
                fresh
            })
            .collect();

        Self {
            recipes: Arc::from(recipes),
            count,
            page: page.max(1),
        }
    }

    pub fn recipes(&self) -> &[RecipeSummary] {
        &self.recipes
    }

    /// Total number of matching recipes on the server (may exceed `len`).
    pub fn count(&self) -> u64 {
        self.count
    }

    /// 1-based page cursor.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn get(&self, id: RecipeId) -> Option<&RecipeSummary> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<RecipeId> {
        self.recipes.iter().map(|r| r.id).collect()
    }

    /// True when both values share the same underlying list.
    pub fn shares_recipes(&self, other: &RecipeCollection) -> bool {
        Arc::ptr_eq(&self.recipes, &other.recipes)
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            recipes: Arc::clone(&self.recipes),
            count: self.count,
            page: page.max(1),
        }
    }

    /// Copy with the recipe's favorite flag set. `None` if `id` is not loaded.
    pub fn with_favorited(&self, id: RecipeId, favorited: bool) -> Option<Self> {
        self.with_entry(id, |r| RecipeSummary {
            is_favorited: favorited,
            ..r.clone()
        })
    }

    /// Copy with the recipe's cart flag set. `None` if `id` is not loaded.
    pub fn with_in_cart(&self, id: RecipeId, in_cart: bool) -> Option<Self> {
        self.with_entry(id, |r| RecipeSummary {
            is_in_shopping_cart: in_cart,
            ..r.clone()
        })
    }

    /// Copy without the recipe and with the count decremented by one.
    /// `None` if `id` is not loaded.
    pub fn without(&self, id: RecipeId) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        let recipes: Vec<RecipeSummary> =
            self.recipes.iter().filter(|r| r.id != id).cloned().collect();

        Some(Self {
            recipes: Arc::from(recipes),
            count: self.count.saturating_sub(1),
            page: self.page,
        })
    }

    fn with_entry<F>(&self, id: RecipeId, update: F) -> Option<Self>
    where
        F: Fn(&RecipeSummary) -> RecipeSummary,
    {
        if !self.contains(id) {
            return None;
        }
        let recipes: Vec<RecipeSummary> = self
            .recipes
            .iter()
            .map(|r| if r.id == id { update(r) } else { r.clone() })
            .collect();

        Some(Self {
            recipes: Arc::from(recipes),
            count: self.count,
            page: self.page,
        })
    }
}
