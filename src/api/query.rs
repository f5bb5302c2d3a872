use crate::models::ViewScope;

/// Filters for `GET recipes/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeQuery {
    pub page: u32,
    pub limit: u32,
    /// Tag slugs; sent as a repeated `tags` parameter
    pub tags: Vec<String>,
    pub author: Option<u64>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

impl RecipeQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit,
            ..Default::default()
        }
    }

    /// Query for a list page in the given scope.
    ///
    /// Subscriptions are not served by `GET recipes/`; that scope loads
    /// through [`SubscriptionQuery`] instead and gets a plain feed query here.
    pub fn for_scope(scope: ViewScope, page: u32, limit: u32) -> Self {
        let mut query = Self::new(page, limit);
        query.is_favorited = scope == ViewScope::Favorites;
        query
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_author(mut self, author: Option<u64>) -> Self {
        self.author = author;
        self
    }

    pub fn in_shopping_cart(mut self) -> Self {
        self.is_in_shopping_cart = true;
        self
    }

    /// Query string pairs in the order the backend documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        for tag in &self.tags {
            pairs.push(("tags", tag.clone()));
        }
        if let Some(author) = self.author {
            pairs.push(("author", author.to_string()));
        }
        if self.is_favorited {
            pairs.push(("is_favorited", "1".to_string()));
        }
        if self.is_in_shopping_cart {
            pairs.push(("is_in_shopping_cart", "1".to_string()));
        }
        pairs
    }
}

/// Paging for `GET users/subscriptions/`.
///
/// Pages are of followed authors; `recipes_limit` caps how many recipes come
/// back per author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionQuery {
    pub page: u32,
    pub limit: u32,
    pub recipes_limit: Option<u32>,
}

impl SubscriptionQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit,
            recipes_limit: None,
        }
    }

    pub fn with_recipes_limit(mut self, recipes_limit: Option<u32>) -> Self {
        self.recipes_limit = recipes_limit;
        self
    }

    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(recipes_limit) = self.recipes_limit {
            pairs.push(("recipes_limit", recipes_limit.to_string()));
        }
        pairs
    }
}
