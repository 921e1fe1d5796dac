//! Static sidebar content: related comparisons, categories, live activity.
//!
//! The sidebar is editorial filler; nothing here is fetched or personalized.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A curated comparison article.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelatedPost {
    pub title: &'static str,
    pub description: &'static str,
    pub views: &'static str,
    pub age: &'static str,
}

/// A product category with the number of comparisons filed under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub count: u32,
}

/// A head-to-head comparison another visitor recently ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecentComparison {
    pub left: &'static str,
    pub right: &'static str,
    pub age: &'static str,
}

pub const RELATED_POSTS: [RelatedPost; 3] = [
    RelatedPost {
        title: "Best value keyboards this month",
        description: "Five mechanical keyboards under $80 compared",
        views: "2.3k",
        age: "2 days ago",
    },
    RelatedPost {
        title: "Top 5 gaming mice",
        description: "The mice pro players actually pick",
        views: "1.8k",
        age: "1 week ago",
    },
    RelatedPost {
        title: "Laptop buying guide 2024",
        description: "Laptop picks by use case",
        views: "4.1k",
        age: "3 days ago",
    },
];

pub const POPULAR_CATEGORIES: [Category; 5] = [
    Category { name: "Laptops/PCs", count: 152 },
    Category { name: "Keyboards/Mice", count: 89 },
    Category { name: "Headphones/Earbuds", count: 76 },
    Category { name: "Smartphones", count: 134 },
    Category { name: "Monitors", count: 67 },
];

pub const RECENT_COMPARISONS: [RecentComparison; 3] = [
    RecentComparison { left: "iPhone 15", right: "Galaxy S24", age: "5 min ago" },
    RecentComparison { left: "MacBook Air", right: "LG gram", age: "12 min ago" },
    RecentComparison { left: "AirPods Pro", right: "Sony WF-1000XM4", age: "18 min ago" },
];

/// Badge text for a category count.
pub fn category_badge(category: &Category) -> String {
    category.count.to_string()
}

/// Caption under a related post, e.g. `"2.3k views"`.
pub fn views_caption(post: &RelatedPost) -> String {
    format!("{} views", post.views)
}
