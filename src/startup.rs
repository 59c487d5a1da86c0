use crate::configuration::Settings;
use crate::db::ReviewRepository;
use crate::routes;
use crate::services::ReviewService;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    repository: Arc<dyn ReviewRepository>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let review_service = ReviewService::new(repository, settings.review.operation_timeout());
    let review_service = web::Data::new(review_service);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg = match err {
            error::JsonPayloadError::Deserialize(err) => serde_json::json!({
                "kind": "deserialize",
                "line": err.line(),
                "column": err.column(),
                "msg": err.to_string(),
            }),
            err => serde_json::json!({
                "kind": "other",
                "msg": err.to_string(),
            }),
        };
        error::InternalError::new(msg.to_string(), http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/api/v1/reviews")
                    .service(routes::review::list_handler)
                    .service(routes::review::add_handler),
            )
            .app_data(json_config.clone())
            .app_data(review_service.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
