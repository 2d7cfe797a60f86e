use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ensek_verify::config::Config;
use ensek_verify::energy::{EnergyPrices, Fuel};
use ensek_verify::orders::{self, Order};
use ensek_verify::schema::ResponseSchemas;
use ensek_verify::EnsekClient;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ensek_verify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        tracing::error!("smoke check failed: {err:#}");
        std::process::exit(1);
    }
}

/// Fast, high-level verification of a live ENSEK deployment: the two read
/// endpoints must serve schema-valid payloads carrying the fixed fuel-id
/// table, and login must succeed when credentials are configured.
async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;
    config.validate().context("validating configuration")?;

    let schemas = ResponseSchemas::load().context("compiling response schemas")?;
    let client = EnsekClient::new(config.base_url.clone());

    tracing::info!(base_url = %config.base_url, "starting ENSEK smoke checks");

    let response = client.energy().await.context("GET /ENSEK/energy")?;
    anyhow::ensure!(
        response.status == reqwest::StatusCode::OK,
        "GET /ENSEK/energy returned {}",
        response.status
    );
    schemas.validate_energy(&response.body)?;

    let prices: EnergyPrices = response.json()?;
    for fuel in Fuel::ALL {
        let entry = prices.by_fuel(fuel);
        anyhow::ensure!(
            entry.energy_id == fuel.energy_id(),
            "{} has energy_id {}, expected {}",
            fuel.name(),
            entry.energy_id,
            fuel.energy_id()
        );
    }
    tracing::info!("energy price table is schema-valid with the expected fuel ids");

    let response = client.orders().await.context("GET /ENSEK/orders")?;
    anyhow::ensure!(
        response.status == reqwest::StatusCode::OK,
        "GET /ENSEK/orders returned {}",
        response.status
    );
    schemas.validate_orders(&response.body)?;

    let all_orders: Vec<Order> = response.json()?;
    let before_now = orders::count_orders_before(&all_orders, chrono::Utc::now());
    tracing::info!(
        total = all_orders.len(),
        before_now,
        "order collection is schema-valid"
    );

    match &config.credentials {
        Some(credentials) => {
            let session = client.login(credentials).await.context("POST /ENSEK/login")?;
            tracing::info!(token_len = session.token().len(), "login succeeded");
        }
        None => {
            tracing::info!("ENSEK_USERNAME/ENSEK_PASSWORD not set; skipping login check");
        }
    }

    Ok(())
}
