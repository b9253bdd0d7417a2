//! Console commands against fake APIs.

mod common;

use catalog_console::console::{Console, ConsoleError, Reply};
use catalog_console::domain::{Product, User};
use catalog_console::store::{Store, StoreError};
use common::{product, user, Call, FakeApi};

type TestConsole = Console<FakeApi<Product>, FakeApi<User>>;

fn console() -> TestConsole {
    Console::new(
        Store::new(FakeApi::with_records(vec![
            product("1", "Desk Lamp", "office"),
            product("2", "Coffee Mug", "kitchen"),
            product("3", "Laptop Stand", "office"),
        ])),
        Store::new(FakeApi::with_records(vec![
            user("1", "Alice"),
            user("2", "Ben"),
        ])),
    )
}

async fn text(console: &TestConsole, line: &str) -> String {
    match console.execute_line(line).await {
        Ok(Reply::Text(text)) => text,
        other => panic!("{line}: unexpected {other:?}"),
    }
}

#[tokio::test]
async fn product_list_loads_once_and_filters() {
    let console = console();

    let all = text(&console, "products").await;
    assert_eq!(all.lines().count(), 3);

    let office = text(&console, "products --category office --search STAND").await;
    assert_eq!(office.lines().count(), 1);
    assert!(office.contains("Laptop Stand"));

    assert_eq!(console.products().api().calls(), vec![Call::List]);
}

#[tokio::test]
async fn favorites_flow() {
    let console = console();
    assert_eq!(
        text(&console, "favorite 2").await,
        "product 2 added to favorites"
    );

    let favorites = text(&console, "products --favorites").await;
    assert!(favorites.starts_with('*'));
    assert!(favorites.contains("Coffee Mug"));
    assert_eq!(favorites.lines().count(), 1);

    assert_eq!(
        text(&console, "favorite 2").await,
        "product 2 removed from favorites"
    );
    assert_eq!(text(&console, "products --favorites").await, "no products");
}

#[tokio::test]
async fn favorite_of_unknown_product_is_rejected() {
    let console = console();
    let err = console.execute_line("favorite 99").await.unwrap_err();
    assert!(matches!(err, ConsoleError::NotLoaded { .. }));
    assert!(console.products().favorites().is_empty());
}

#[tokio::test]
async fn categories_in_first_seen_order() {
    let console = console();
    assert_eq!(text(&console, "categories").await, "office\nkitchen");
}

#[tokio::test]
async fn add_product_reports_every_bad_field() {
    let console = console();
    let err = console
        .execute_line("add-product --name A --price abc")
        .await
        .unwrap_err();

    let ConsoleError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.message_for("name"), Some("must be at least 2 characters"));
    assert_eq!(errors.message_for("price"), Some("must be a number"));
    assert_eq!(errors.message_for("description"), Some("is required"));
    assert_eq!(errors.message_for("category"), Some("is required"));
    assert!(console.products().api().calls().is_empty());
}

#[tokio::test]
async fn add_then_show_product() {
    let console = console();
    let reply = text(
        &console,
        r#"add-product --name "Yoga Mat" --price 25 --description "Non-slip mat" --category sports"#,
    )
    .await;
    let id = reply.strip_prefix("created product ").unwrap().to_string();

    let detail = text(&console, &format!("product {id}")).await;
    assert!(detail.contains("name:        Yoga Mat"));
    assert!(detail.contains("price:       25.00"));
}

#[tokio::test]
async fn edit_overlays_given_fields() {
    let console = console();
    text(&console, "edit-product 1 --price 12.75").await;

    let lamp = console.products().find("1").unwrap();
    assert_eq!(lamp.price, 12.75);
    assert_eq!(lamp.name, "Desk Lamp");
    assert_eq!(
        console.products().api().calls(),
        vec![Call::List, Call::Update("1".to_string())]
    );
}

#[tokio::test]
async fn edit_user_with_bad_role() {
    let console = console();
    let err = console
        .execute_line("edit-user 2 --role owner")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid input: role: 'owner' is not one of: admin, user"
    );
}

#[tokio::test]
async fn edit_user_with_bad_email_never_reaches_api() {
    let console = console();
    let err = console
        .execute_line("edit-user 1 --email not-an-email")
        .await
        .unwrap_err();

    let ConsoleError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.message_for("email"), Some("must be a valid email address"));
    assert_eq!(console.users().api().calls(), vec![Call::List]);
    assert_eq!(console.users().find("1").unwrap().email, "alice@example.com");
}

#[tokio::test]
async fn user_search_and_delete() {
    let console = console();
    let found = text(&console, "users --search BEN").await;
    assert_eq!(found.lines().count(), 1);

    assert_eq!(text(&console, "delete-user 2").await, "deleted user 2");
    assert!(console.users().find("2").is_none());
}

#[tokio::test]
async fn api_failure_is_reported_not_fatal() {
    let console = console();
    text(&console, "products").await;
    console
        .products()
        .api()
        .fail_next(catalog_console::api::ApiError::transport(Some(500), "boom"));

    let err = console.execute_line("delete-product 1").await.unwrap_err();
    assert!(matches!(err, ConsoleError::Store(StoreError::Api(_))));
    assert_eq!(err.to_string(), "request failed (500): boom");
    assert!(console.products().find("1").is_some());

    // The console keeps working afterwards.
    assert_eq!(text(&console, "delete-product 1").await, "deleted product 1");
}

#[tokio::test]
async fn refresh_reports_count() {
    let console = console();
    text(&console, "users").await;
    console.users().api().set_records(vec![user("9", "Zed")]);
    assert_eq!(text(&console, "refresh users").await, "refreshed users: 1 loaded");
    assert_eq!(text(&console, "users").await.lines().count(), 1);
}

#[tokio::test]
async fn unknown_command_is_parse_error() {
    let console = console();
    let err = console.execute_line("fly --high").await.unwrap_err();
    assert!(matches!(err, ConsoleError::Parse(_)));
}

#[tokio::test]
async fn run_loop_prints_errors_and_stops_on_quit() {
    let console = console();
    let input = b"categories\nfavorite 99\nquit\nproducts\n".as_slice();
    let mut output = Vec::new();

    console.run(input, &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("office\nkitchen\n"));
    assert!(output.contains("error: Product '99' is not in the loaded list"));
    assert!(!output.contains("Desk Lamp"));
}
