//! Raw text forms as typed by the user, before type conversion.

use crate::domain::{Product, ProductDraft, Role, Status, User, UserDraft};

use super::{rules, Validate, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
}

impl ProductForm {
    /// Prefill from an existing product (edit mode).
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category.clone(),
        }
    }

    /// Type-check every field, then apply the draft rules.
    pub fn into_draft(self) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let price = if rules::required(&mut errors, "price", &self.price) {
            match self.price.trim().parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    errors.push("price", "must be a number");
                    None
                }
            }
        } else {
            None
        };

        let draft = ProductDraft {
            name: self.name.trim().to_string(),
            price: price.unwrap_or(f64::NAN),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
        };

        if let Err(rule_errors) = draft.validate() {
            for error in rule_errors.errors {
                // A price that failed to parse is already reported.
                if error.field == "price" && price.is_none() {
                    continue;
                }
                errors.errors.push(error);
            }
        }

        errors.into_result().map(|()| draft)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
            status: user.status.to_string(),
        }
    }

    pub fn into_draft(self) -> Result<UserDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let role = parse_member::<Role>(&mut errors, "role", &self.role);
        let status = parse_member::<Status>(&mut errors, "status", &self.status);

        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        for error in super::check_user(&name, &email).errors {
            errors.errors.push(error);
        }

        match (role, status) {
            (Some(role), Some(status)) if errors.is_empty() => Ok(UserDraft {
                name,
                email,
                role,
                status,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_member<T>(errors: &mut ValidationErrors, field: &'static str, value: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    if !rules::required(errors, field, value) {
        return None;
    }
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            errors.push(field, e.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entity;

    fn product_form(price: &str) -> ProductForm {
        ProductForm {
            name: "Mug".to_string(),
            price: price.to_string(),
            description: "Porcelain mug".to_string(),
            category: "home_goods".to_string(),
        }
    }

    #[test]
    fn product_form_converts() {
        let draft = product_form("150.5").into_draft().unwrap();
        assert_eq!(draft.price, 150.5);
        assert_eq!(draft.name, "Mug");
    }

    #[test]
    fn non_numeric_price_reported_once() {
        let errors = product_form("cheap").into_draft().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for("price"), Some("must be a number"));
    }

    #[test]
    fn missing_price_is_required() {
        let errors = product_form("").into_draft().unwrap_err();
        assert_eq!(errors.message_for("price"), Some("is required"));
    }

    #[test]
    fn zero_price_not_positive() {
        let errors = product_form("0").into_draft().unwrap_err();
        assert_eq!(errors.message_for("price"), Some("must be greater than 0"));
    }

    #[test]
    fn product_form_roundtrips_existing_product() {
        let product = Product {
            id: "1".to_string(),
            name: "Yoga Mat".to_string(),
            price: 550.0,
            description: "Non-slip surface".to_string(),
            category: "sports".to_string(),
        };
        let draft = ProductForm::from_product(&product).into_draft().unwrap();
        assert_eq!(Product::from_draft("1".to_string(), draft), product);
    }

    #[test]
    fn user_form_checks_enum_membership() {
        let form = UserForm {
            name: "Mehmet".to_string(),
            email: "mehmet@example.com".to_string(),
            role: "owner".to_string(),
            status: "".to_string(),
        };
        let errors = form.into_draft().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.message_for("role").unwrap().contains("admin, user"));
        assert_eq!(errors.message_for("status"), Some("is required"));
    }

    #[test]
    fn user_form_converts() {
        let form = UserForm {
            name: " Zeynep ".to_string(),
            email: "zeynep@example.com".to_string(),
            role: "admin".to_string(),
            status: "active".to_string(),
        };
        let draft = form.into_draft().unwrap();
        assert_eq!(draft.name, "Zeynep");
        assert_eq!(draft.role, Role::Admin);
        assert_eq!(draft.status, Status::Active);
    }
}
