use blogsite::{config::Config, startup};
use dioxus_logger::tracing;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_logging(&config);

    if let Err(e) = startup::connect_to_database(&config).await {
        tracing::error!("Failed to prepare database: {}", e);
        std::process::exit(1);
    }
}
