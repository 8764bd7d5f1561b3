//! Welcome endpoint.

use actix_web::{get, web};

use crate::dto::MessageResponse;

pub const WELCOME_MESSAGE: &str = "Welcome to Notes API";

/// Static greeting confirming the API is reachable.
#[utoipa::path(
    get,
    path = "/",
    tags = ["root"],
    responses((status = 200, description = "API is reachable", body = MessageResponse))
)]
#[get("/")]
pub async fn welcome() -> web::Json<MessageResponse> {
    web::Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
