use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic context of a recipe list.
///
/// Decides what a favorite toggle does to the local list: in `Favorites`
/// un-favoriting removes the recipe, everywhere else it only clears the flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewScope {
    #[default]
    Feed,
    Favorites,
    Subscriptions,
}

impl ViewScope {
    /// Maps a frontend route to its scope. Unknown routes are treated as feed.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/favorites" => ViewScope::Favorites,
            "/subscriptions" => ViewScope::Subscriptions,
            _ => ViewScope::Feed,
        }
    }

    /// Whether un-favoriting a recipe removes it from the list.
    pub fn removes_unfavorited(&self) -> bool {
        matches!(self, ViewScope::Favorites)
    }
}

impl fmt::Display for ViewScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewScope::Feed => write!(f, "feed"),
            ViewScope::Favorites => write!(f, "favorites"),
            ViewScope::Subscriptions => write!(f, "subscriptions"),
        }
    }
}

impl FromStr for ViewScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feed" | "recipes" => Ok(ViewScope::Feed),
            "favorites" => Ok(ViewScope::Favorites),
            "subscriptions" => Ok(ViewScope::Subscriptions),
            _ => Err(format!(
                "Invalid view scope '{}'. Valid options: feed, favorites, subscriptions",
                s
            )),
        }
    }
}
