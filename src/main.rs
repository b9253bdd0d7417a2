use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;

use catalog_console::api::{build_http_client, RestClient};
use catalog_console::cli::{Cli, Commands};
use catalog_console::config::Config;
use catalog_console::console::Console;
use catalog_console::domain::{Product, User};
use catalog_console::logging::init_tracing;
use catalog_console::server::{ApiServer, ServerHandle};
use catalog_console::store::{ProductStore, UserStore};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.resolve_config().context("failed to load configuration")?;

    match cli.command {
        Commands::Serve(_) => serve(&config).await,
        Commands::Console(args) => {
            let embedded = if args.embedded {
                Some(start_embedded(&config).await?)
            } else {
                None
            };

            let base_url = match &embedded {
                Some((_, base_url)) => base_url.clone(),
                None => config.api.base_url.clone(),
            };
            let result = console(&config, &base_url).await;

            if let Some((handle, _)) = embedded {
                handle.shutdown();
            }
            result
        }
    }
}

async fn serve(config: &Config) -> Result<()> {
    let mut server = ApiServer::new(&config.server)?;
    let addr = server.try_bind().await?;
    println!("Mock API listening on http://{addr} (Ctrl-C to stop)");
    server.run().await?;
    Ok(())
}

async fn start_embedded(config: &Config) -> Result<(ServerHandle, String)> {
    let mut server = ApiServer::new(&config.server)?;
    server.try_bind().await.context("failed to start embedded mock API")?;
    let handle = server.handle();
    let base_url = server.base_url();

    tokio::spawn(async move {
        if let Err(e) = server.run().await {
            tracing::error!(error = %e, "Embedded mock API stopped");
        }
    });

    Ok((handle, base_url))
}

async fn console(config: &Config, base_url: &str) -> Result<()> {
    let client = build_http_client(&config.api)?;
    let products = ProductStore::new(RestClient::<Product>::with_client(client.clone(), base_url)?);
    let users = UserStore::new(RestClient::<User>::with_client(client, base_url)?);
    let console = Console::new(products, users);

    tracing::info!(base_url, "Console connected");
    println!("catalog-console: type `help` for commands, `quit` to leave");

    console
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;
    Ok(())
}
