//! Plain-text rendering of records for the console.

use std::fmt::Write;

use crate::domain::{Product, User};

pub fn product_line(product: &Product, favorite: bool) -> String {
    format!(
        "{} {:<14} {:<32} {:>10.2}  {}",
        if favorite { '*' } else { ' ' },
        product.id,
        product.name,
        product.price,
        product.category
    )
}

pub fn product_detail(product: &Product, favorite: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "id:          {}", product.id);
    let _ = writeln!(out, "name:        {}", product.name);
    let _ = writeln!(out, "price:       {:.2}", product.price);
    let _ = writeln!(out, "category:    {}", product.category);
    let _ = writeln!(out, "description: {}", product.description);
    let _ = write!(out, "favorite:    {}", if favorite { "yes" } else { "no" });
    out
}

pub fn user_line(user: &User) -> String {
    format!(
        "{:<14} {:<24} {:<32} {:<6} {}",
        user.id, user.name, user.email, user.role, user.status
    )
}

pub fn user_detail(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "id:     {}", user.id);
    let _ = writeln!(out, "name:   {}", user.name);
    let _ = writeln!(out, "email:  {}", user.email);
    let _ = writeln!(out, "role:   {}", user.role);
    let _ = write!(out, "status: {}", user.status);
    out
}

/// Join list rows, or say there is nothing to show.
pub fn list<I: IntoIterator<Item = String>>(rows: I, empty: &str) -> String {
    let rows: Vec<String> = rows.into_iter().collect();
    if rows.is_empty() {
        empty.to_string()
    } else {
        rows.join("\n")
    }
}
