//! Product lookup - Lambda handler and local HTTP server

use lambda_runtime::{service_fn, LambdaEvent};
use product_lookup::config::HandlerConfig;
use product_lookup::handler::{handle_event, Services};
use product_lookup::server::start_server;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Initialize logging
    let env_filter = EnvFilter::from_default_env().add_directive("product_lookup=info".parse()?);

    // JSON lines for CloudWatch when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = HandlerConfig::from_env()?;
    info!(locale = %config.locale, cache = ?config.cache, "Loaded configuration");

    let services = Services::init(&config).await;

    if std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        info!("Starting Lambda runtime");
        let services = &services;
        lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
            handle_event(&services.resolver(), event.payload)
                .await
                .map_err(lambda_runtime::Error::from)
        }))
        .await?;
    } else {
        info!("Port: {}", config.port);
        start_server(Arc::new(services), config.port).await?;
    }

    Ok(())
}
