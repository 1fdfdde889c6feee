use holocron::{config::Config, error::Error, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;

    if let Some(path) = &config.catalog_seed_path {
        startup::seed_catalog(&db, path).await?;
    }

    startup::log_table_counts(&db).await?;

    db.close().await?;

    Ok(())
}
