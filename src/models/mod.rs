mod page;
mod recipe;
mod subscription;
mod tag;
mod view_scope;

pub use page::{page_count, Page};
pub use recipe::{Author, RecipeId, RecipeSummary};
pub use subscription::Subscription;
pub use tag::{Tag, TagFilter};
pub use view_scope::ViewScope;
