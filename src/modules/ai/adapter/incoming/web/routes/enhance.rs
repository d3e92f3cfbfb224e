use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};

use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::shared::api::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub text: Option<String>,
    #[serde(rename = "type")]
    #[allow(dead_code)]
    pub content_type: Option<String>,
}

#[derive(Serialize)]
pub struct EnhanceResponse {
    pub original: String,
    pub enhanced: String,
    pub message: String,
}

/// Placeholder endpoint; echoes the input until a model integration
/// lands.
#[post("/api/ai/enhance")]
pub async fn enhance_handler(_user: MaybeUser, req: web::Json<EnhanceRequest>) -> impl Responder {
    let req = req.into_inner();

    let text = match req.text.filter(|t| !t.is_empty()) {
        Some(text) => text,
        None => return ApiResponse::bad_request("TEXT_REQUIRED", "Text is required"),
    };

    ApiResponse::success(EnhanceResponse {
        original: text.clone(),
        enhanced: text,
        message: "AI enhancement coming soon! Model integration pending.".to_string(),
    })
}
