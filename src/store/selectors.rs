//! Derived views over store state. Pure functions; nothing here mutates.

use crate::domain::{Entity, Product, User};
use crate::store::products::Favorites;

/// Filter applied by the product list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring of the name.
    pub search: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    pub favorites_only: bool,
}

impl ProductFilter {
    fn matches(&self, product: &Product, favorites: &Favorites) -> bool {
        if self.favorites_only && !favorites.contains(&product.id) {
            return false;
        }
        if let Some(category) = self.category.as_deref() {
            if product.category != category {
                return false;
            }
        }
        match self.search.as_deref() {
            Some(search) => contains_ignore_case(&product.name, search),
            None => true,
        }
    }
}

pub fn filter_products<'a>(
    items: &'a [Product],
    filter: &ProductFilter,
    favorites: &Favorites,
) -> Vec<&'a Product> {
    items
        .iter()
        .filter(|p| filter.matches(p, favorites))
        .collect()
}

/// Distinct categories in first-seen order.
pub fn categories(items: &[Product]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for product in items {
        let category = product.category.as_str();
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

/// Users whose name or email contains `search`, ignoring case.
pub fn filter_users<'a>(items: &'a [User], search: Option<&str>) -> Vec<&'a User> {
    items
        .iter()
        .filter(|u| match search {
            Some(s) => contains_ignore_case(&u.name, s) || contains_ignore_case(&u.email, s),
            None => true,
        })
        .collect()
}

pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &str) -> Option<&'a E> {
    items.iter().find(|e| e.id() == id)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
