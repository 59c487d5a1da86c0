#![allow(dead_code)]

use review_service::configuration::{
    get_configuration, DatabaseSettings, ReviewSettings, Settings,
};
use review_service::db::{InMemoryReviewRepository, PgReviewRepository, ReviewRepository};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryReviewRepository>,
}

pub struct PgTestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub fn test_settings() -> Settings {
    Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
        database: DatabaseSettings {
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            database_name: "reviews".to_string(),
            max_connections: 5,
        },
        review: ReviewSettings {
            operation_timeout_ms: 2000,
        },
    }
}

pub async fn spawn_with_repository(
    repository: Arc<dyn ReviewRepository>,
    settings: Settings,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    let server = review_service::startup::run(listener, repository, settings)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    format!("http://127.0.0.1:{}", port)
}

pub async fn spawn_app() -> TestApp {
    let repository = Arc::new(InMemoryReviewRepository::new());
    let address = spawn_with_repository(repository.clone(), test_settings()).await;

    TestApp {
        address,
        repository,
    }
}

/// Starts the server on a fresh PostgreSQL database, or returns `None` when no
/// server is reachable with the settings from `configuration.yaml`.
pub async fn spawn_postgres_app() -> Option<PgTestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let db_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let repository = Arc::new(PgReviewRepository::new(db_pool.clone()));
    let address = spawn_with_repository(repository, configuration).await;

    Some(PgTestApp { address, db_pool })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}
