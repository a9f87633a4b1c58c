//! CLI entry point for the ontograph-api server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use ontograph_api::config::ApiConfig;
use ontograph_api::routes::build_router;
use ontograph_api::state::AppState;
use ontograph_store::{OntologyVault, StoreClient, StoreConfig};

#[derive(Parser)]
#[command(name = "ontograph-api")]
#[command(about = "REST API for managing OWL ontologies in AllegroGraph")]
struct Cli {
    /// Override the listen address from the config.
    #[arg(short, long)]
    listen: Option<String>,

    /// Config file prefix (default: ontograph).
    #[arg(short, long, default_value = "ontograph")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();

    let mut api_config = load_api_config(&cli.config)?;
    if let Some(listen) = cli.listen {
        api_config.listen_addr = listen;
    }

    // Connect to AllegroGraph.
    let store_config = load_store_config(&cli.config);
    let store = StoreClient::connect(&store_config).await?;

    let vault = OntologyVault::new(&api_config.storage_dir)?;
    tracing::info!(dir = %api_config.storage_dir, "Ontology vault ready");

    let listen_addr = api_config.listen_addr.clone();
    let state = Arc::new(AppState::new(store, vault, api_config));
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    tracing::info!(addr = %listen_addr, "Ontograph API listening");
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_api_config(file_prefix: &str) -> anyhow::Result<ApiConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("ONTOGRAPH_API")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    match cfg.get::<ApiConfig>("api") {
        Ok(c) => Ok(c),
        Err(_) => Ok(ApiConfig::default()),
    }
}

fn load_store_config(file_prefix: &str) -> StoreConfig {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("ONTOGRAPH")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match cfg {
        Ok(c) => StoreConfig {
            base_url: c
                .get_string("store.base_url")
                .unwrap_or_else(|_| "http://localhost:10035".to_string()),
            catalog: c.get_string("store.catalog").ok(),
            repository: c
                .get_string("store.repository")
                .unwrap_or_else(|_| "ontograph".to_string()),
            user: c
                .get_string("store.user")
                .unwrap_or_else(|_| "test".to_string()),
            password: c
                .get_string("store.password")
                .unwrap_or_else(|_| "ontograph-dev".to_string()),
            ..Default::default()
        },
        Err(_) => StoreConfig::default(),
    }
}
