use serde::{Deserialize, Serialize};

use super::recipe::{Author, RecipeSummary};

/// A followed author, as listed by `GET users/subscriptions/`.
///
/// `recipes` may be cut short by `recipes_limit`; `recipes_count` is always
/// the author's full total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subscription {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_subscribed: bool,
    #[serde(default)]
    pub recipes: Vec<RecipeSummary>,
    #[serde(default)]
    pub recipes_count: u64,
}

impl Subscription {
    pub fn author(&self) -> Author {
        Author {
            id: self.id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            is_subscribed: self.is_subscribed,
        }
    }

    /// The listed recipes, each tagged with this author when the server
    /// left the author out.
    pub fn into_recipes(self) -> Vec<RecipeSummary> {
        let author = self.author();
        self.recipes
            .into_iter()
            .map(|recipe| match recipe.author {
                Some(_) => recipe,
                None => recipe.with_author(author.clone()),
            })
            .collect()
    }
}
