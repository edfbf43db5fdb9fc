//! anno-web server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) layered with
//! `ANNO_*` environment variables, loads and validates the corpus, and serves
//! the site and the JSON API over HTTP.
//!
//! ```text
//! cargo run -p anno-web --bin server -- --config config.toml
//! ANNO_PORT=3000 cargo run -p anno-web --bin server
//! ```

use std::path::{Path, PathBuf};

use anno_store_memory::MemoryCorpus;
use anno_web::{AppState, SiteConfig};
use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Anno Domini web server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Load and validate the corpus, print its size and exit.
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
    .add_source(config::Environment::with_prefix("ANNO"))
    .build()
    .context("failed to read config file")?;

  let site_cfg: SiteConfig = settings
    .try_deserialize()
    .context("failed to deserialise SiteConfig")?;

  // Load the corpus.
  let corpus_path = expand_tilde(&site_cfg.corpus_path);
  let corpus = MemoryCorpus::open(&corpus_path)
    .with_context(|| format!("failed to load corpus from {corpus_path:?}"))?;

  if cli.check {
    println!("ok: {}", corpus.counts());
    return Ok(());
  }

  let address = format!("{}:{}", site_cfg.host, site_cfg.port);
  let app = anno_web::router(AppState::new(corpus, site_cfg));

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
