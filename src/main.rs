use anyhow::Context;
use review_service::configuration::get_configuration;
use review_service::db::PgReviewRepository;
use review_service::startup::run;
use review_service::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("review-service".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().context("Failed to read configuration.")?;

    tracing::info!(
        db_host = %settings.database.host,
        db_port = settings.database.port,
        db_name = %settings.database.database_name,
        "Connecting to PostgreSQL"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(settings.database.connect_options())
        .await
        .context("Failed to connect to database.")?;

    let repository = Arc::new(PgReviewRepository::new(pg_pool));

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {}", address))?;

    run(listener, repository, settings).await?.await?;
    Ok(())
}
