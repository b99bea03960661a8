//! bookrec-seed - one-shot fixture loader for the BookRec store

use anyhow::Result;
use bookrec_common::config::{ensure_root_folder, resolve_root_folder};
use bookrec_common::db::init_database;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bookrec-seed", about = "Load JSON fixtures into the BookRec database")]
struct Args {
    /// Directory holding users.json, books.json, and reviews.json
    #[arg(long, default_value = "json_files")]
    fixtures: PathBuf,

    /// Root folder holding the database (overrides BOOKREC_ROOT and config)
    #[arg(long)]
    root_folder: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting BookRec seeder v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let root_folder = resolve_root_folder(args.root_folder.as_deref(), "BOOKREC_ROOT");
    let db_path = ensure_root_folder(&root_folder)?;
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path).await?;

    bookrec_seed::run_seed(&pool, &args.fixtures).await?;

    Ok(())
}
