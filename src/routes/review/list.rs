use crate::helpers::JsonResponse;
use crate::services::ReviewService;
use crate::views;
use actix_web::{get, web, Responder, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub product_id: Option<String>,
}

#[tracing::instrument(name = "List reviews.", skip(service))]
#[get("")]
pub async fn list_handler(
    query: web::Query<ListQuery>,
    service: web::Data<ReviewService>,
) -> Result<impl Responder> {
    let product_id = match query.product_id.as_deref() {
        Some(product_id) if !product_id.is_empty() => product_id,
        _ => {
            tracing::error!("Missing product_id query parameter");
            return Err(JsonResponse::<views::Review>::build()
                .bad_request("product_id query parameter is required"));
        }
    };

    let reviews = service.list_reviews(product_id).await?;
    tracing::info!(count = reviews.len(), product_id, "Reviews listed");

    let reviews = reviews
        .into_iter()
        .map(Into::into)
        .collect::<Vec<views::Review>>();

    Ok(JsonResponse::build().set_list(reviews).ok("OK"))
}
