use crate::{
    configuration::Configuration, configuration_handler::ConfigurationHandler, http::create_app,
    local_bookings::LocalBookings,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod backend;
mod booking_service;
mod configuration;
mod configuration_handler;
mod error;
mod http;
mod local_bookings;
mod slots;
mod stylists;
#[cfg(test)]
mod testutils;
mod types;
mod validation;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let configuration = ConfigurationHandler::parse_arguments();
    let hours = configuration.business_hours();
    info!(
        open = %hours.open,
        close = %hours.close,
        slot_minutes = hours.slot_minutes,
        stylists = configuration.stylists().len(),
        "Salon booking configured"
    );

    let address = format!("0.0.0.0:{}", configuration.port());
    let listener = TcpListener::bind(&address).await?;
    info!("Accessible at {address}");

    let app = create_app(LocalBookings::default(), configuration);
    axum::serve(listener, app).await?;
    Ok(())
}
