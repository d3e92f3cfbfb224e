use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};

use crate::auth::adapter::incoming::web::extractors::auth::MaybeUser;
use crate::shared::api::ApiResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestProjectsRequest {
    #[allow(dead_code)]
    pub project_name: Option<String>,
    pub tech_stack: Option<Vec<String>>,
}

#[derive(Serialize)]
pub struct SuggestProjectsResponse {
    pub suggestions: Vec<String>,
}

/// Canned description suggestions built from the submitted stack.
#[post("/api/ai/suggest-projects")]
pub async fn suggest_projects_handler(
    _user: MaybeUser,
    req: web::Json<SuggestProjectsRequest>,
) -> impl Responder {
    let req = req.into_inner();
    let tech = req.tech_stack.unwrap_or_default();

    ApiResponse::success(SuggestProjectsResponse {
        suggestions: vec![
            format!(
                "A {} project that showcases modern development practices.",
                tech.join(", ")
            ),
            format!(
                "Built with {}, this project demonstrates expertise in full-stack development.",
                tech.join(" and ")
            ),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_suggestions_mention_stack() {
        let app = test::init_service(App::new().service(suggest_projects_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/ai/suggest-projects")
            .set_json(json!({ "projectName": "alpha", "techStack": ["Rust", "Postgres"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let suggestions = body["data"]["suggestions"].as_array().unwrap();
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].as_str().unwrap().contains("Rust, Postgres"));
        assert!(suggestions[1]
            .as_str()
            .unwrap()
            .contains("Rust and Postgres"));
    }
}
