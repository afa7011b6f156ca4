//! cmhwatch-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), loads the
//! people and content catalog, and serves the JSON API and sitemap over HTTP.
//!
//! # Validating catalog data
//!
//! ```sh
//! cargo run -p cmhwatch-server -- --check
//! ```

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use clap::Parser;
use cmhwatch_catalog::Catalog;
use cmhwatch_core::{
  clock::{Clock, SystemClock},
  repository::PersonRepository,
  status::StatusTally,
};
use cmhwatch_server::ServerConfig;
use cmhwatch_store_json::JsonFileStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "CMH Watch server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Load and validate the catalog, print a status summary and exit.
  #[arg(long)]
  check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("CMHWATCH"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Load the catalog; validation failures are fatal.
  let catalog = match &server_cfg.catalog_dir {
    Some(dir) => {
      let dir = expand_tilde(dir);
      Catalog::load_dir(&dir)
        .with_context(|| format!("failed to load catalog from {dir:?}"))?
    }
    None => Catalog::embedded().context("embedded catalog is invalid")?,
  };

  // Helper mode: report and exit.
  if cli.check {
    let tally = StatusTally::from_people(catalog.all_people());
    println!(
      "catalog ok: {} people tracked, {} contacted, {} responded; {} facts, \
       {} timeline entries, {} templates, {} stories",
      tally.tracked,
      tally.contacted,
      tally.responded,
      catalog.facts().len(),
      catalog.timeline().len(),
      catalog.templates().len(),
      catalog.stories().len(),
    );
    return Ok(());
  }

  let clock: Arc<dyn Clock> = Arc::new(SystemClock);
  let submissions_path = expand_tilde(&server_cfg.submissions_path);
  tracing::info!(path = %submissions_path.display(), "submission store");
  let store = JsonFileStore::with_clock(submissions_path, Arc::clone(&clock));

  let app = cmhwatch_server::router(
    Arc::new(catalog),
    Arc::new(store),
    clock,
    &server_cfg,
  );
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
