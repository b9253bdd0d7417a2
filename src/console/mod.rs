//! Interactive console: the composition root that drives both stores.
//!
//! Each input line is split shell-style, parsed with clap, and executed
//! against the product and user stores. Every failure is printed and the
//! loop keeps going.

mod command;
mod error;
mod render;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::api::EntityApi;
use crate::domain::{Entity, Product, User};
use crate::store::selectors::{self, ProductFilter};
use crate::store::{LoadOutcome, ProductStore, UserStore};
use crate::validation::{ProductForm, UserForm};

pub use command::{parse_line, Command, CommandLine, Parsed, ProductFields, Resource, UserFields};
pub use error::ConsoleError;

const PROMPT: &str = "> ";

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

pub struct Console<PA, UA> {
    products: ProductStore<PA>,
    users: UserStore<UA>,
}

impl<PA, UA> Console<PA, UA>
where
    PA: EntityApi<Product>,
    UA: EntityApi<User>,
{
    pub fn new(products: ProductStore<PA>, users: UserStore<UA>) -> Self {
        Self { products, users }
    }

    pub fn products(&self) -> &ProductStore<PA> {
        &self.products
    }

    pub fn users(&self) -> &UserStore<UA> {
        &self.users
    }

    /// Read commands until `quit` or end of input.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if !line.is_empty() {
                match self.execute_line(line).await {
                    Ok(Reply::Quit) => break,
                    Ok(Reply::Text(text)) => {
                        output.write_all(text.as_bytes()).await?;
                        output.write_all(b"\n").await?;
                    }
                    Err(err) => {
                        tracing::debug!(error = %err, line, "Command failed");
                        output.write_all(format!("error: {err}\n").as_bytes()).await?;
                    }
                }
            }
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;
        }

        output.flush().await
    }

    pub async fn execute_line(&self, line: &str) -> Result<Reply, ConsoleError> {
        match parse_line(line).map_err(ConsoleError::Parse)? {
            Parsed::Command(command) => self.execute(command).await,
            Parsed::Help(text) => Ok(Reply::Text(text.trim_end().to_string())),
        }
    }

    pub async fn execute(&self, command: Command) -> Result<Reply, ConsoleError> {
        let text = match command {
            Command::Products {
                search,
                category,
                favorites,
            } => {
                let filter = ProductFilter {
                    search,
                    category,
                    favorites_only: favorites,
                };
                self.list_products(&filter).await
            }
            Command::Product { id } => {
                let product = self.loaded_product(&id).await?;
                render::product_detail(&product, self.products.is_favorite(&id))
            }
            Command::Categories => {
                let warning = load_warning(self.products.load().await, Product::RESOURCE);
                let items = self.products.items();
                let rows = selectors::categories(&items)
                    .into_iter()
                    .map(str::to_string);
                with_warning(warning, render::list(rows, "no categories"))
            }
            Command::AddProduct(fields) => {
                let draft = product_form(ProductForm::default(), fields).into_draft()?;
                let created = self.products.add(draft).await?;
                format!("created product {}", created.id)
            }
            Command::EditProduct { id, fields } => {
                let existing = self.loaded_product(&id).await?;
                let draft = product_form(ProductForm::from_product(&existing), fields).into_draft()?;
                let updated = self.products.update(Product::from_draft(id, draft)).await?;
                format!("updated product {}", updated.id)
            }
            Command::DeleteProduct { id } => {
                self.products.remove(&id).await?;
                format!("deleted product {id}")
            }
            Command::Favorite { id } => {
                self.loaded_product(&id).await?;
                if self.products.toggle_favorite(&id) {
                    format!("product {id} added to favorites")
                } else {
                    format!("product {id} removed from favorites")
                }
            }
            Command::Users { search } => self.list_users(search.as_deref()).await,
            Command::User { id } => render::user_detail(&self.loaded_user(&id).await?),
            Command::AddUser(fields) => {
                let draft = user_form(UserForm::default(), fields).into_draft()?;
                let created = self.users.add(draft).await?;
                format!("created user {}", created.id)
            }
            Command::EditUser { id, fields } => {
                let existing = self.loaded_user(&id).await?;
                let draft = user_form(UserForm::from_user(&existing), fields).into_draft()?;
                let updated = self.users.update(User::from_draft(id, draft)).await?;
                format!("updated user {}", updated.id)
            }
            Command::DeleteUser { id } => {
                self.users.remove(&id).await?;
                format!("deleted user {id}")
            }
            Command::Refresh { target } => match target {
                Resource::Products => refresh_summary(self.products.refresh().await, Product::RESOURCE),
                Resource::Users => refresh_summary(self.users.refresh().await, User::RESOURCE),
            },
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    async fn list_products(&self, filter: &ProductFilter) -> String {
        let warning = load_warning(self.products.load().await, Product::RESOURCE);
        let state = self.products.snapshot();
        let rows = selectors::filter_products(&state.collection.items, filter, &state.favorites)
            .into_iter()
            .map(|p| render::product_line(p, state.favorites.contains(&p.id)));
        with_warning(warning, render::list(rows, "no products"))
    }

    async fn list_users(&self, search: Option<&str>) -> String {
        let warning = load_warning(self.users.load().await, User::RESOURCE);
        let items = self.users.items();
        let rows = selectors::filter_users(&items, search)
            .into_iter()
            .map(render::user_line);
        with_warning(warning, render::list(rows, "no users"))
    }

    async fn loaded_product(&self, id: &str) -> Result<Product, ConsoleError> {
        self.products.load().await;
        self.products.find(id).ok_or_else(|| ConsoleError::NotLoaded {
            label: Product::LABEL,
            id: id.to_string(),
        })
    }

    async fn loaded_user(&self, id: &str) -> Result<User, ConsoleError> {
        self.users.load().await;
        self.users.find(id).ok_or_else(|| ConsoleError::NotLoaded {
            label: User::LABEL,
            id: id.to_string(),
        })
    }
}

fn product_form(mut form: ProductForm, fields: ProductFields) -> ProductForm {
    if let Some(name) = fields.name {
        form.name = name;
    }
    if let Some(price) = fields.price {
        form.price = price;
    }
    if let Some(description) = fields.description {
        form.description = description;
    }
    if let Some(category) = fields.category {
        form.category = category;
    }
    form
}

fn user_form(mut form: UserForm, fields: UserFields) -> UserForm {
    if let Some(name) = fields.name {
        form.name = name;
    }
    if let Some(email) = fields.email {
        form.email = email;
    }
    if let Some(role) = fields.role {
        form.role = role;
    }
    if let Some(status) = fields.status {
        form.status = status;
    }
    form
}

fn load_warning(outcome: LoadOutcome, resource: &str) -> Option<String> {
    match outcome {
        LoadOutcome::Failed { message } => Some(format!("failed to load {resource}: {message}")),
        LoadOutcome::Skipped | LoadOutcome::Loaded { .. } => None,
    }
}

fn with_warning(warning: Option<String>, body: String) -> String {
    match warning {
        Some(warning) => format!("{warning}\n{body}"),
        None => body,
    }
}

fn refresh_summary(outcome: LoadOutcome, resource: &str) -> String {
    match outcome {
        LoadOutcome::Loaded { count } => format!("refreshed {resource}: {count} loaded"),
        LoadOutcome::Failed { message } => format!("failed to refresh {resource}: {message}"),
        LoadOutcome::Skipped => format!("{resource} refresh already in progress"),
    }
}
