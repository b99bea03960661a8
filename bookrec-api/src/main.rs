//! bookrec-api - Book-recommendation REST service
//!
//! Serves the catalog, book-detail aggregation, review submission, auth,
//! and recommendation endpoints over a SQLite store.

use anyhow::Result;
use bookrec_api::{build_router, AppState};
use bookrec_common::config::{ensure_root_folder, resolve_root_folder};
use bookrec_common::db::init_database;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bookrec-api", about = "Book-recommendation REST service")]
struct Args {
    /// Root folder holding the database (overrides BOOKREC_ROOT and config)
    #[arg(long)]
    root_folder: Option<String>,

    /// Address and port to listen on
    #[arg(long, env = "BOOKREC_BIND", default_value = "127.0.0.1:5000")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting BookRec API v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let root_folder = resolve_root_folder(args.root_folder.as_deref(), "BOOKREC_ROOT");
    let db_path = ensure_root_folder(&root_folder)?;
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path).await?;
    info!("✓ Connected to database");

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    info!("bookrec-api listening on http://{}", args.bind);
    info!("Health check: http://{}/api/health", args.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
