//! Console command grammar.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// One console line, parsed without a binary name.
#[derive(Debug, Parser)]
#[command(name = "console", no_binary_name = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// List products
    Products {
        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,
        /// Exact category filter
        #[arg(long)]
        category: Option<String>,
        /// Only favorite products
        #[arg(long)]
        favorites: bool,
    },
    /// Show one product
    Product { id: String },
    /// List distinct product categories
    Categories,
    /// Create a product
    AddProduct(ProductFields),
    /// Edit a product; omitted fields keep their value
    EditProduct {
        id: String,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product
    DeleteProduct { id: String },
    /// Toggle a product's favorite flag
    Favorite { id: String },
    /// List users
    Users {
        /// Case-insensitive name or email filter
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one user
    User { id: String },
    /// Create a user
    AddUser(UserFields),
    /// Edit a user; omitted fields keep their value
    EditUser {
        id: String,
        #[command(flatten)]
        fields: UserFields,
    },
    /// Delete a user
    DeleteUser { id: String },
    /// Re-fetch a collection from the API
    Refresh {
        #[arg(value_enum)]
        target: Resource,
    },
    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    Products,
    Users,
}

#[derive(Debug, Default, Args, PartialEq)]
pub struct ProductFields {
    #[arg(long)]
    pub name: Option<String>,
    /// Kept as text so a non-number is reported as a field error
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Default, Args, PartialEq)]
pub struct UserFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// admin | user
    #[arg(long)]
    pub role: Option<String>,
    /// active | inactive
    #[arg(long)]
    pub status: Option<String>,
}

/// Outcome of parsing a line: a command, or text clap wants shown (help).
#[derive(Debug)]
pub enum Parsed {
    Command(Command),
    Help(String),
}

/// Split a line shell-style and parse it.
pub fn parse_line(line: &str) -> Result<Parsed, String> {
    let words = shell_words::split(line).map_err(|e| e.to_string())?;
    match CommandLine::try_parse_from(words) {
        Ok(parsed) => Ok(Parsed::Command(parsed.command)),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp
            | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Ok(Parsed::Help(err.to_string()))
            }
            _ => Err(err.to_string().trim_end().to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(line: &str) -> Command {
        match parse_line(line).unwrap() {
            Parsed::Command(command) => command,
            Parsed::Help(text) => panic!("unexpected help: {text}"),
        }
    }

    #[test]
    fn parses_product_filters() {
        assert_eq!(
            command("products --search lamp --category home_goods --favorites"),
            Command::Products {
                search: Some("lamp".to_string()),
                category: Some("home_goods".to_string()),
                favorites: true,
            }
        );
    }

    #[test]
    fn quoted_values_stay_together() {
        let Command::AddProduct(fields) =
            command(r#"add-product --name "Desk Lamp" --price 12.5 --description 'Warm light' --category office"#)
        else {
            panic!("expected add-product");
        };
        assert_eq!(fields.name.as_deref(), Some("Desk Lamp"));
        assert_eq!(fields.price.as_deref(), Some("12.5"));
        assert_eq!(fields.description.as_deref(), Some("Warm light"));
    }

    #[test]
    fn edit_takes_id_and_partial_fields() {
        assert_eq!(
            command("edit-user 7 --role admin"),
            Command::EditUser {
                id: "7".to_string(),
                fields: UserFields {
                    role: Some("admin".to_string()),
                    ..Default::default()
                },
            }
        );
    }

    #[test]
    fn refresh_target_and_exit_alias() {
        assert_eq!(
            command("refresh users"),
            Command::Refresh {
                target: Resource::Users
            }
        );
        assert_eq!(command("exit"), Command::Quit);
    }

    #[test]
    fn help_is_not_an_error() {
        assert!(matches!(parse_line("help"), Ok(Parsed::Help(_))));
    }

    #[test]
    fn bad_input_is_an_error() {
        assert!(parse_line("launch-rockets").is_err());
        assert!(parse_line("product").is_err());
        assert!(parse_line("add-product --name \"unterminated").is_err());
    }
}
