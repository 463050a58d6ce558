//! In-memory filtering for the blog listing.
//!
//! The blog screen fetches the whole post collection and then narrows it
//! with a synchronous pass per request: title substring match for the search
//! query, and category-token match for the active category chip. No index,
//! no debounce - the collection is small and the predicate is exact.

/// The category token that bypasses the category predicate.
pub const ALL_CATEGORIES_TOKEN: &str = "all";

/// Something the blog filter can match against.
pub trait Filterable {
    fn title(&self) -> &str;
    fn categories(&self) -> &[String];
}

impl Filterable for crate::content::types::PostDocument {
    fn title(&self) -> &str {
        &self.title
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}

/// Why the filtered listing came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The source collection itself is empty.
    NoPosts,
    /// The active category has no posts.
    NoCategoryMatches,
    /// The search query matched nothing.
    NoSearchMatches,
}

impl EmptyReason {
    /// The message shown in the listing's empty state.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoPosts => "No posts have been published yet. Check back soon.",
            Self::NoCategoryMatches => "There are no posts in this category yet.",
            Self::NoSearchMatches => "No articles match your search. Try a different keyword.",
        }
    }
}

/// Narrow `items` to those whose title contains `query` (case-insensitive)
/// and whose category matches `category`.
///
/// A category token matches a post when the post's category list contains it
/// or the title contains it; the token [`ALL_CATEGORIES_TOKEN`] bypasses the
/// category predicate entirely. An empty or whitespace query bypasses the
/// query predicate.
pub fn filter_posts<'a, T: Filterable>(items: &'a [T], query: &str, category: &str) -> Vec<&'a T> {
    let query = query.trim().to_lowercase();
    let category = category.trim().to_lowercase();

    items
        .iter()
        .filter(|item| matches_category(*item, &category))
        .filter(|item| query.is_empty() || item.title().to_lowercase().contains(&query))
        .collect()
}

fn matches_category<T: Filterable>(item: &T, category: &str) -> bool {
    if category.is_empty() || category == ALL_CATEGORIES_TOKEN {
        return true;
    }

    item.categories()
        .iter()
        .any(|c| c.to_lowercase() == category)
        || item.title().to_lowercase().contains(category)
}

/// Classify an empty filter result, or `None` when anything matched.
///
/// When both a query and a category are active, the query wins the blame:
/// the searcher's most recent refinement is what emptied the list.
#[must_use]
pub fn empty_reason(
    total: usize,
    matched: usize,
    query: &str,
    category: &str,
) -> Option<EmptyReason> {
    if matched > 0 {
        return None;
    }

    if total == 0 {
        Some(EmptyReason::NoPosts)
    } else if !query.trim().is_empty() {
        Some(EmptyReason::NoSearchMatches)
    } else if !category.trim().is_empty() && category.trim() != ALL_CATEGORIES_TOKEN {
        Some(EmptyReason::NoCategoryMatches)
    } else {
        // Nothing narrowed the list, so an empty result means no posts
        Some(EmptyReason::NoPosts)
    }
}
