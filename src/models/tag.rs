use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// Tag selection shown next to a recipe list.
///
/// Owned by the view, not by the synchronizer: the synchronizer only receives
/// [`TagFilter::selected_slugs`] when the selection changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    options: Vec<(Tag, bool)>,
}

impl TagFilter {
    /// Builds a filter with every tag selected, the way list pages start.
    pub fn from_tags(tags: Vec<Tag>) -> Self {
        Self {
            options: tags.into_iter().map(|t| (t, true)).collect(),
        }
    }

    pub fn tags(&self) -> impl Iterator<Item = (&Tag, bool)> {
        self.options.iter().map(|(t, selected)| (t, *selected))
    }

    /// Flips the selection of the tag with `id`. Returns false for unknown ids.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.options.iter_mut().find(|(t, _)| t.id == id) {
            Some((_, selected)) => {
                *selected = !*selected;
                true
            }
            None => false,
        }
    }

    /// Selects exactly the tags whose slug is in `slugs`.
    pub fn select_only(&mut self, slugs: &[String]) {
        for (tag, selected) in &mut self.options {
            *selected = slugs.iter().any(|s| s == &tag.slug);
        }
    }

    pub fn set_all(&mut self, selected: bool) {
        for (_, s) in &mut self.options {
            *s = selected;
        }
    }

    pub fn selected_slugs(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(t, _)| t.slug.clone())
            .collect()
    }
}
