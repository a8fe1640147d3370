use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use arcstream_core::logging;
use arcstream_core::models::LoadResponse;
use arcstream_core::provider::{builtin_registry, MediaProvider, ProviderContext};
use arcstream_core::sync::{LoginForm, MemoryStore, NginxAuth, SyncProvider};
use arcstream_core::Config;

#[derive(Parser)]
#[command(name = "arcstream", about = "Drive the archive-backed media providers from the command line")]
struct Cli {
    /// Config file path (defaults to ARCSTREAM_CONFIG_PATH or ./arcstream.toml)
    #[arg(long)]
    config: Option<String>,

    /// Provider to drive
    #[arg(long, default_value = "Internet Archive")]
    provider: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Free-text search
    Search { query: String },
    /// Home-page listing
    Home {
        #[arg(default_value_t = 1)]
        page: u32,
    },
    /// Load a detail page by URL
    Load { url: String },
    /// Load a detail page and resolve its playable links
    Links { url: String },
    /// Run the nginx sync login flow and print the resulting provider auth
    Login {
        #[arg(long)]
        server: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    logging::init_logging(&config.logging)?;

    let registry = builtin_registry(&config)?;
    let nginx_auth = config.nginx.provider_auth();
    let mut ctx = ProviderContext::new();
    if let Some(ref auth) = nginx_auth {
        ctx = ctx.with_auth(auth);
    }

    match cli.command {
        Command::Search { query } => {
            let provider = lookup(&registry, &cli.provider)?;
            let results = provider.search(&ctx, &query).await?;
            info!(provider = provider.name(), hits = results.len(), "search finished");
            print_json(&results)?;
        }
        Command::Home { page } => {
            let provider = lookup(&registry, &cli.provider)?;
            let home = provider.main_page(&ctx, page).await?;
            print_json(&home)?;
        }
        Command::Load { url } => {
            let provider = lookup(&registry, &cli.provider)?;
            let response = provider.load(&ctx, &url).await?;
            print_json(&response)?;
        }
        Command::Links { url } => {
            let provider = lookup(&registry, &cli.provider)?;
            let response = provider.load(&ctx, &url).await?;
            let data = match &response {
                LoadResponse::Movie { data, .. } => data.encode()?,
                LoadResponse::Series { episodes, .. } => episodes
                    .first()
                    .map(|episode| episode.data.clone())
                    .context("series has no episodes")?,
            };
            let resolved = provider.load_links(&ctx, &data).await?;
            print_json(&resolved)?;
        }
        Command::Login { server, username, password } => {
            let auth = NginxAuth::new(Arc::new(MemoryStore::new()));
            let form = LoginForm { server, username, password };
            auth.login(0, form).await?;
            print_json(&auth.login_info(0))?;
            print_json(&auth.provider_auth(0))?;
        }
    }

    Ok(())
}

fn lookup(
    registry: &arcstream_core::ProviderRegistry,
    name: &str,
) -> Result<Arc<dyn MediaProvider>> {
    registry
        .provider(name)
        .with_context(|| format!("unknown provider '{name}', known: {:?}", registry.provider_names()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
