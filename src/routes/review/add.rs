use crate::forms;
use crate::helpers::JsonResponse;
use crate::services::ReviewService;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Add review.", skip(service))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::CreateReview>,
    service: web::Data<ReviewService>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        tracing::error!("Invalid review form: {}", errors);
        return Err(JsonResponse::<views::Review>::build().bad_request(&errors.to_string()));
    }

    let review: views::Review = service.create_review(form.into_inner()).await?.into();
    tracing::info!(review_id = %review.id, "Review saved");

    Ok(JsonResponse::build()
        .set_id(review.id.clone())
        .set_item(review)
        .created("Review created"))
}
