use serde::{Deserialize, Serialize};

use super::Entity;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    /// Free-text tag, e.g. `home_goods`.
    pub category: String,
}

/// Product fields submitted on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
            category: category.into(),
        }
    }
}

impl Entity for Product {
    type Draft = ProductDraft;

    const RESOURCE: &'static str = "products";
    const LABEL: &'static str = "Product";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            description: draft.description,
            category: draft.category,
        }
    }
}
