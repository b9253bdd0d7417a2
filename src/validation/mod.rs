//! Client-side field checks run before any create or update is dispatched.
//!
//! A failed check blocks the submission entirely; every offending field is
//! reported at once so the caller can annotate all of them.

mod forms;
mod rules;

use std::fmt;

use crate::domain::{Product, ProductDraft, User, UserDraft};

pub use forms::{ProductForm, UserForm};

/// One offending field and what is wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field errors of one submission. Never empty when returned as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// First message recorded for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid input: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks a record before it is sent to the API.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

fn check_product(name: &str, price: f64, description: &str, category: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    rules::min_chars(&mut errors, "name", name, 2);
    rules::positive(&mut errors, "price", price);
    rules::min_chars(&mut errors, "description", description, 5);
    rules::required(&mut errors, "category", category);
    errors
}

fn check_user(name: &str, email: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    rules::min_chars(&mut errors, "name", name, 2);
    rules::email(&mut errors, "email", email);
    errors
}

impl Validate for ProductDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_product(&self.name, self.price, &self.description, &self.category).into_result()
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_product(&self.name, self.price, &self.description, &self.category).into_result()
    }
}

// Role and status are enums, so membership is already guaranteed here;
// the text forms check it when parsing.
impl Validate for UserDraft {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_user(&self.name, &self.email).into_result()
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationErrors> {
        check_user(&self.name, &self.email).into_result()
    }
}
