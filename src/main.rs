use std::env;

use config::Config;
use dotenvy::dotenv;

use vendes::models::config::AppConfig;
use vendes::repository::HttpSaleRepository;
use vendes::services::sales;
use vendes::state::sales::SalesManager;

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let app_config = match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {err}");
            std::process::exit(1);
        }
    };

    let repo = match HttpSaleRepository::new(&app_config) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Failed to build HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let mut manager = SalesManager::new();

    log::info!("Loading sales from {}", app_config.api_base_url);
    if let Err(err) = sales::refresh(&repo, &mut manager).await {
        log::error!("Failed to load sales: {err}");
        std::process::exit(1);
    }

    println!(
        "{:<4} {:<24} {:>10} {:>10} {:<12}",
        "#", "Producte", "Quantitat", "Preu", "Data de venda"
    );
    for (index, sale) in manager.sales().iter().enumerate() {
        println!(
            "{:<4} {:<24} {:>10} {:>10.2} {:<12}",
            index + 1,
            sale.product,
            sale.quantity,
            sale.price,
            sale.sale_date
        );
    }
}
