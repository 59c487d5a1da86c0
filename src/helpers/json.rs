use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// Envelope shared by every JSON endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    pub status: String,
    pub message: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T> {
    id: Option<String>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub fn set_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub fn to_response(self, code: StatusCode, message: &str) -> HttpResponse {
        let status = if code.is_success() { "OK" } else { "Error" };
        let message = if message.trim().is_empty() {
            code.canonical_reason().unwrap_or("Unknown").to_string()
        } else {
            message.to_string()
        };

        HttpResponse::build(code).json(JsonResponse {
            status: status.to_string(),
            message,
            code: code.as_u16(),
            id: self.id,
            item: self.item,
            list: self.list,
        })
    }

    pub fn ok(self, message: &str) -> HttpResponse {
        self.to_response(StatusCode::OK, message)
    }

    pub fn created(self, message: &str) -> HttpResponse {
        self.to_response(StatusCode::CREATED, message)
    }

    pub fn bad_request(self, message: &str) -> actix_web::Error {
        self.to_error(StatusCode::BAD_REQUEST, message)
    }

    fn to_error(self, code: StatusCode, message: &str) -> actix_web::Error {
        let cause = message.to_string();
        InternalError::from_response(cause, self.to_response(code, message)).into()
    }
}
