//! Sample records seeded into the mock server at startup.

use crate::domain::{Product, Role, Status, User};

fn product(id: &str, name: &str, price: f64, description: &str, category: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        description: description.to_string(),
        category: category.to_string(),
    }
}

fn user(id: &str, name: &str, email: &str, role: Role, status: Status) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product("1", "Basic Cotton T-Shirt", 350.0, "A comfortable everyday t-shirt.", "apparel"),
        product("2", "Wireless Headphones", 1899.99, "Clear sound and long battery life.", "electronics"),
        product("3", "Porcelain Coffee Mug", 150.5, "Sturdy mug for the morning coffee.", "home_goods"),
        product("4", "Leather Notebook", 250.0, "Leather-bound notebook for notes and ideas.", "stationery"),
        product("5", "Yoga Mat", 550.0, "Non-slip surface for a steady practice.", "sports"),
        product("6", "Fitness Band", 899.99, "Counts steps, tracks heart rate, shows notifications.", "electronics"),
        product("7", "Ground Coffee", 120.5, "Rich and aromatic roast to start the day.", "groceries"),
        product("8", "Running Shoes", 1250.0, "Light and comfortable for daily runs.", "sports"),
        product("9", "Denim Jeans", 750.0, "Durable jeans with a timeless cut.", "apparel"),
        product("10", "Desk Lamp", 450.0, "Lights up the workspace with a modern look.", "home_goods"),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        user("1", "Alice Carter", "alice@example.com", Role::Admin, Status::Active),
        user("2", "Ben Hughes", "ben@example.com", Role::User, Status::Active),
        user("3", "Chloe Martin", "chloe@example.com", Role::User, Status::Inactive),
        user("4", "Daniel Reed", "daniel@example.com", Role::User, Status::Active),
        user("5", "Emma Wright", "emma@example.com", Role::Admin, Status::Inactive),
    ]
}
