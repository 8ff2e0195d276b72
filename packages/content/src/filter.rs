//! Tag categories for the public projects strip.

use crate::models::Project;

/// The synthetic category that matches every project.
pub const ALL: &str = "all";

/// `"all"` followed by every distinct tag, in first-seen order.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for tag in projects.iter().flat_map(|p| &p.tags) {
        if !out.iter().any(|c| c == tag) {
            out.push(tag.clone());
        }
    }
    out
}

/// Projects visible under `category`.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    if category == ALL {
        return projects.iter().collect();
    }
    projects
        .iter()
        .filter(|p| p.tags.iter().any(|t| t == category))
        .collect()
}

/// The list repeated back to back, for a seamless scrolling loop.
pub fn marquee<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items).cloned().collect()
}

/// Button label: first character upper-cased.
pub fn label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
