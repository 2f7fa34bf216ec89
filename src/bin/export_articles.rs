// src/bin/export_articles.rs
use anyhow::Result;
use mokkan_articles::{bootstrap, config::AppConfig};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "export failed");
        eprintln!("export failed: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    bootstrap::init_tracing();

    let config = AppConfig::from_env()?;
    let output = config.export_path_from_args(std::env::args().skip(1))?;

    let pool = bootstrap::connect(&config).await?;
    let manager = bootstrap::article_manager(&config, pool);

    let records = manager.export().await?;
    let json = serde_json::to_string_pretty(&records)?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, json).await?;
            tracing::info!(count = records.len(), path = %path.display(), "articles exported");
        }
        None => println!("{json}"),
    }

    Ok(())
}
